//! Markup patterns of the documentation generator output.
//!
//! Everything that knows what a Doxygen page looks like lives here. The rest of
//! the pipeline talks to a [`PageFormat`], so supporting another generator
//! release means adding another implementation of the trait.
//!
//! Pages are matched as bytes. Only the extracted links and names are decoded.

use crate::{FunctionEntry, NamespaceEntry};
use regex::bytes::{NoExpand, Regex};

/// A structural marker that a page was expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingMarker(pub &'static str);

/// Header and footer sliced out of the namespace summary page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boilerplate {
    pub header: Vec<u8>,
    pub footer: Vec<u8>,
}

pub trait PageFormat {
    /// Returns the summary text starting at the generator version marker, or
    /// `None` when the page was produced by another generator version.
    fn versioned_body<'a>(&self, summary: &'a [u8]) -> Option<&'a [u8]>;

    fn find_namespace_rows(&self, body: &[u8]) -> Vec<NamespaceEntry>;

    /// `Ok(None)` when the page declares no functions at all.
    fn find_function_section<'a>(
        &self,
        page: &'a [u8],
    ) -> Result<Option<&'a [u8]>, MissingMarker>;

    fn split_function_signatures<'a>(&self, section: &'a [u8]) -> Vec<&'a [u8]>;

    fn extract_trailing_link(&self, piece: &[u8]) -> Option<FunctionEntry>;

    /// Owning group or namespace of a link, used to tell overloads apart.
    fn group_name(&self, link: &str) -> Option<String>;

    fn boilerplate(&self, summary: &[u8]) -> Result<Boilerplate, MissingMarker>;

    /// Replaces the summary page title in the header.
    fn retitle(&self, header: &[u8]) -> Vec<u8>;
}

const VERSION_MARKER: &str = "<!-- Generated by Doxygen 1.5.4 -->";
const FUNCTIONS_HEADING: &str = r#"<tr><td colspan="2"><br><h2>Functions</h2></td></tr>"#;
const VARIABLES_HEADING: &str = r#"<tr><td colspan="2"><br><h2>Variables</h2></td></tr>"#;
const DETAILS_HEADING: &str = r#"<hr><a name="_details"></a><h2>Detailed Description</h2>"#;
const LINK_OPEN: &str = r#"<a class="el" href="#;
const HEADER_END: &str = "</h1>";
const FOOTER_MARKER: &str = "<!-- footer.html -->";
const SUMMARY_TITLE: &str = "Namespace List";
const INDEX_TITLE: &str = "Function Index";

fn literal(text: &str) -> Result<Regex, regex::Error> {
    Regex::new(&regex::escape(text))
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Output format of Doxygen 1.5.4 as used by the VIGRA reference pages.
pub struct Doxygen154 {
    version_marker: Regex,
    functions_heading: Regex,
    variables_heading: Regex,
    details_heading: Regex,
    link_open: Regex,
    header_end: Regex,
    footer_marker: Regex,
    summary_title: Regex,
    namespace_row: Regex,
    signature_end: Regex,
    trailing_link: Regex,
    group_link: regex::Regex,
}

impl Doxygen154 {
    pub fn new() -> Result<Self, regex::Error> {
        // (?-u): character classes match single bytes, whatever the encoding
        Ok(Self {
            version_marker: literal(VERSION_MARKER)?,
            functions_heading: literal(FUNCTIONS_HEADING)?,
            variables_heading: literal(VARIABLES_HEADING)?,
            details_heading: literal(DETAILS_HEADING)?,
            link_open: literal(LINK_OPEN)?,
            header_end: literal(HEADER_END)?,
            footer_marker: literal(FOOTER_MARKER)?,
            summary_title: literal(SUMMARY_TITLE)?,
            namespace_row: Regex::new(
                r#"(?-u)<tr><td class="indexkey"><a class="el" href="([^"]+)">([^<]+)</a>"#,
            )?,
            signature_end: Regex::new(r"(?-u)</a> \([^)]*\)</td></tr>")?,
            trailing_link: Regex::new(r#"(?-u)<a class="el" href="([^"]+)">([^<]+)$"#)?,
            group_link: regex::Regex::new(r"(group__|namespacevigra_1_1)([^.]+)\.html.*")?,
        })
    }
}

impl PageFormat for Doxygen154 {
    fn versioned_body<'a>(&self, summary: &'a [u8]) -> Option<&'a [u8]> {
        self.version_marker
            .find(summary)
            .map(|m| &summary[m.start()..])
    }

    fn find_namespace_rows(&self, body: &[u8]) -> Vec<NamespaceEntry> {
        self.namespace_row
            .captures_iter(body)
            .map(|cap| NamespaceEntry {
                link: text(&cap[1]),
                name: text(&cap[2]),
            })
            .collect()
    }

    fn find_function_section<'a>(
        &self,
        page: &'a [u8],
    ) -> Result<Option<&'a [u8]>, MissingMarker> {
        let Some(start) = self.functions_heading.find(page) else {
            return Ok(None);
        };
        let end = self
            .variables_heading
            .find(page)
            .or_else(|| self.details_heading.find(page))
            .ok_or(MissingMarker(DETAILS_HEADING))?;
        // an end marker in front of the heading bounds an empty section
        Ok(Some(page.get(start.start()..end.start()).unwrap_or(&[])))
    }

    fn split_function_signatures<'a>(&self, section: &'a [u8]) -> Vec<&'a [u8]> {
        self.signature_end.split(section).collect()
    }

    fn extract_trailing_link(&self, piece: &[u8]) -> Option<FunctionEntry> {
        // parameter types may be hyperlinked too, the function itself is the last link
        let start = self.link_open.find_iter(piece).last()?.start();
        let cap = self.trailing_link.captures(&piece[start..])?;
        Some(FunctionEntry {
            link: text(&cap[1]),
            name: text(&cap[2]),
        })
    }

    fn group_name(&self, link: &str) -> Option<String> {
        let cap = self.group_link.captures(link)?;
        let whole = cap.get(0)?;
        Some(format!("{}{}", &link[..whole.start()], &cap[2]))
    }

    fn boilerplate(&self, summary: &[u8]) -> Result<Boilerplate, MissingMarker> {
        let header_end = self
            .header_end
            .find(summary)
            .ok_or(MissingMarker(HEADER_END))?;
        let footer = self
            .footer_marker
            .find(summary)
            .ok_or(MissingMarker(FOOTER_MARKER))?;
        Ok(Boilerplate {
            header: summary[..header_end.end()].to_vec(),
            footer: summary[footer.start()..].to_vec(),
        })
    }

    fn retitle(&self, header: &[u8]) -> Vec<u8> {
        self.summary_title
            .replace_all(header, NoExpand(INDEX_TITLE.as_bytes()))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format() -> Doxygen154 {
        Doxygen154::new().unwrap()
    }

    #[test]
    fn rows_before_version_marker_are_ignored() {
        let summary = concat!(
            r#"<tr><td class="indexkey"><a class="el" href="early.html">early</a></td></tr>"#,
            "\n<!-- Generated by Doxygen 1.5.4 -->\n",
            r#"<tr><td class="indexkey"><a class="el" href="namespacevigra.html">vigra</a></td></tr>"#,
            "\n",
            r#"<tr><td class="indexkey"><a class="el" href="namespacevigra_1_1functor.html">vigra::functor</a></td></tr>"#,
        );
        let f = format();
        let body = f.versioned_body(summary.as_bytes()).unwrap();
        let rows = f.find_namespace_rows(body);
        assert_eq!(
            rows,
            vec![
                NamespaceEntry {
                    link: "namespacevigra.html".into(),
                    name: "vigra".into()
                },
                NamespaceEntry {
                    link: "namespacevigra_1_1functor.html".into(),
                    name: "vigra::functor".into()
                },
            ]
        );
    }

    #[test]
    fn other_generator_versions_are_rejected() {
        assert!(format()
            .versioned_body(b"<!-- Generated by Doxygen 1.8.17 -->")
            .is_none());
    }

    #[test]
    fn section_without_functions_heading_is_absent() {
        let page = format!("<html>{VARIABLES_HEADING}</html>");
        assert_eq!(format().find_function_section(page.as_bytes()), Ok(None));
    }

    #[test]
    fn section_falls_back_to_detailed_description() {
        let page = format!("head{FUNCTIONS_HEADING}body{DETAILS_HEADING}tail");
        let f = format();
        let section = f.find_function_section(page.as_bytes()).unwrap().unwrap();
        assert_eq!(section, format!("{FUNCTIONS_HEADING}body").as_bytes());
    }

    #[test]
    fn section_prefers_variables_heading() {
        let page = format!("{FUNCTIONS_HEADING}fns{VARIABLES_HEADING}vars{DETAILS_HEADING}");
        let f = format();
        let section = f.find_function_section(page.as_bytes()).unwrap().unwrap();
        assert_eq!(section, format!("{FUNCTIONS_HEADING}fns").as_bytes());
    }

    #[test]
    fn section_without_any_end_marker_fails() {
        let page = format!("{FUNCTIONS_HEADING}fns");
        assert_eq!(
            format().find_function_section(page.as_bytes()),
            Err(MissingMarker(DETAILS_HEADING))
        );
    }

    #[test]
    fn end_marker_before_start_gives_empty_section() {
        let page = format!("{VARIABLES_HEADING}{FUNCTIONS_HEADING}fns");
        assert_eq!(
            format().find_function_section(page.as_bytes()),
            Ok(Some(&b""[..]))
        );
    }

    #[test]
    fn trailing_link_skips_parameter_type_links() {
        let f = format();
        let section = concat!(
            r#"<tr><td class="memItemLeft">void </td><td class="memItemRight"><a class="el" href="group__Copy.html#a1">copyImage</a> (SrcIterator src)</td></tr>"#,
            "\n",
            r#"<tr><td class="memItemLeft"><a class="el" href="classvigra_1_1Diff2D.html">Diff2D</a> </td><td class="memItemRight"><a class="el" href="namespacevigra.html#a2">diff</a> (<a class="el" href="classvigra_1_1Point2D.html">Point2D</a> p)</td></tr>"#,
            "\n</table>"
        );
        let entries: Vec<_> = f
            .split_function_signatures(section.as_bytes())
            .into_iter()
            .filter_map(|piece| f.extract_trailing_link(piece))
            .collect();
        assert_eq!(
            entries,
            vec![
                FunctionEntry {
                    link: "group__Copy.html#a1".into(),
                    name: "copyImage".into()
                },
                FunctionEntry {
                    link: "namespacevigra.html#a2".into(),
                    name: "diff".into()
                },
            ]
        );
    }

    #[test]
    fn latin1_bytes_in_a_section_do_not_stop_extraction() {
        let f = format();
        let mut section = b"<!-- Author: Ullrich K\xF6the -->\n".to_vec();
        section.extend_from_slice(
            br#"<td class="memItemRight"><a class="el" href="ns1.html#foo">foo</a> (int)</td></tr>"#,
        );
        let entries: Vec<_> = f
            .split_function_signatures(&section)
            .into_iter()
            .filter_map(|piece| f.extract_trailing_link(piece))
            .collect();
        assert_eq!(
            entries,
            vec![FunctionEntry {
                link: "ns1.html#foo".into(),
                name: "foo".into()
            }]
        );
    }

    #[test]
    fn piece_without_link_yields_nothing() {
        assert!(format().extract_trailing_link(b"</table>").is_none());
    }

    #[test]
    fn group_name_strips_known_prefixes() {
        let f = format();
        assert_eq!(
            f.group_name("group__ImageIterators.html#ImageBasedArgumentObjectFactories"),
            Some("ImageIterators".to_string())
        );
        assert_eq!(
            f.group_name("namespacevigra_1_1functor.html#a3f"),
            Some("functor".to_string())
        );
        assert_eq!(f.group_name("classvigra_1_1Rect2D.html#a1"), None);
    }

    #[test]
    fn boilerplate_splits_header_and_footer() {
        let summary = b"<html><h1>Namespace List</h1>rows<!-- footer.html --><hr>K\xF6the</html>";
        let f = format();
        let parts = f.boilerplate(summary).unwrap();
        assert_eq!(parts.header, b"<html><h1>Namespace List</h1>");
        assert_eq!(parts.footer, b"<!-- footer.html --><hr>K\xF6the</html>");
        assert_eq!(f.retitle(&parts.header), b"<html><h1>Function Index</h1>");
    }

    #[test]
    fn boilerplate_requires_footer_marker() {
        assert_eq!(
            format().boilerplate(b"<h1>Namespace List</h1>"),
            Err(MissingMarker(FOOTER_MARKER))
        );
    }
}
