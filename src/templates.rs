use crate::error::Result;
use crate::index::{FunctionIndex, IndexLine};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

const HEADING: &str = "<a name=\"index_{{initial}}\"><h3>- {{initial}} -</h3></a>\n";
const ENTRY: &str = "<a href=\"{{link}}\">{{name}}</a>(){{#if group}} [{{group}}]{{/if}}<br>\n";
const CONTENTS: &str = concat!(
    "{{#each initials}}{{#unless @first}} | {{/unless}}<a href=\"#index_{{this}}\">{{this}}</a>{{/each}}",
    "</center>\n<p>\n",
    "{{body}}"
);

/// Handlebars registry holding the index page templates. Names and links are
/// already HTML, so escaping is disabled. The header and footer are spliced
/// in by the page writer as raw bytes.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_template_string("heading", HEADING)?;
        registry.register_template_string("entry", ENTRY)?;
        registry.register_template_string("contents", CONTENTS)?;
        Ok(Self { registry })
    }

    pub fn render_line(&self, line: &IndexLine) -> Result<String> {
        let html = match line {
            IndexLine::Heading { .. } => self.registry.render("heading", line)?,
            IndexLine::Entry { .. } => self.registry.render("entry", line)?,
        };
        Ok(html)
    }

    pub fn render_body(&self, index: &FunctionIndex) -> Result<String> {
        index
            .lines
            .iter()
            .map(|line| self.render_line(line))
            .collect()
    }

    /// Navigation strip followed by the index body.
    pub fn render_contents(&self, index: &FunctionIndex) -> Result<String> {
        let data = json!({
            "initials": index.initials,
            "body": self.render_body(index)?,
        });
        Ok(self.registry.render("contents", &data)?)
    }
}
