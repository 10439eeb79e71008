use crate::format::PageFormat;
use crate::{FactoryTable, FunctionEntry};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexLine {
    /// Anchor and heading opening a new initial.
    Heading { initial: char },
    Entry {
        link: String,
        name: String,
        /// Only set for overloads, and only when the link names a group or
        /// namespace.
        group: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionIndex {
    pub lines: Vec<IndexLine>,
    /// Distinct initials in first-encounter order.
    pub initials: Vec<char>,
}

pub struct IndexBuilder<'a, F: PageFormat> {
    factories: &'a FactoryTable,
    format: &'a F,
}

fn initial(entry: &FunctionEntry) -> Option<char> {
    entry.name.chars().next()
}

impl<'a, F: PageFormat> IndexBuilder<'a, F> {
    pub fn new(factories: &'a FactoryTable, format: &'a F) -> Self {
        Self { factories, format }
    }

    pub fn build(&self, mut functions: Vec<FunctionEntry>) -> FunctionIndex {
        functions.extend(self.factories.entries());
        // stable, so equal names keep discovery order
        functions.sort_by(|a, b| a.name.cmp(&b.name));

        let mut index = FunctionIndex::default();
        let mut previous: Option<&FunctionEntry> = None;
        let mut entries = functions.iter().peekable();

        while let Some(entry) = entries.next() {
            let next = entries.peek().copied();

            let first = initial(entry);
            if first != previous.and_then(initial) {
                if let Some(c) = first {
                    index.initials.push(c);
                    index.lines.push(IndexLine::Heading { initial: c });
                }
            }

            let overloaded = [previous, next]
                .into_iter()
                .flatten()
                .any(|other| other.name == entry.name);
            let group = if overloaded {
                self.format.group_name(&entry.link)
            } else {
                None
            };

            index.lines.push(IndexLine::Entry {
                link: entry.link.clone(),
                name: entry.name.clone(),
                group,
            });
            previous = Some(entry);
        }

        info!(
            "📝 Indexed {} functions under {} initials",
            functions.len(),
            index.initials.len()
        );
        index
    }
}
