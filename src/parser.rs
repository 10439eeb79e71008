use crate::format::{MissingMarker, PageFormat};
use crate::*;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub struct DoxygenParser<'a, F: PageFormat> {
    doc_dir: PathBuf,
    format: &'a F,
}

impl<'a, F: PageFormat> DoxygenParser<'a, F> {
    pub fn new(doc_dir: impl AsRef<Path>, format: &'a F) -> Self {
        Self {
            doc_dir: doc_dir.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn summary_path(&self) -> PathBuf {
        self.doc_dir.join(NAMESPACE_SUMMARY)
    }

    pub fn read_summary(&self) -> Result<Vec<u8>> {
        read_page(&self.summary_path())
    }

    /// Lists the namespaces of the summary page in document order.
    ///
    /// Fails with [`IndexError::UnsupportedFormat`] when the page was not
    /// produced by the supported generator version.
    pub fn namespace_list(&self, summary: &[u8]) -> Result<Vec<NamespaceEntry>> {
        let body = self
            .format
            .versioned_body(summary)
            .ok_or_else(|| IndexError::UnsupportedFormat {
                path: self.summary_path(),
            })?;
        let namespaces = self.format.find_namespace_rows(body);
        info!("🔍 Found {} namespaces in {}", namespaces.len(), NAMESPACE_SUMMARY);
        Ok(namespaces)
    }

    pub fn function_list(&self, namespaces: &[NamespaceEntry]) -> Result<Vec<FunctionEntry>> {
        let mut functions = Vec::new();
        for namespace in namespaces {
            let found = self.namespace_functions(namespace)?;
            debug!("  📄 {}: {} functions", namespace.name, found.len());
            functions.extend(found);
        }
        info!(
            "📊 Processed {} namespace pages, found {} functions",
            namespaces.len(),
            functions.len()
        );
        Ok(functions)
    }

    fn namespace_functions(&self, namespace: &NamespaceEntry) -> Result<Vec<FunctionEntry>> {
        let path = self.doc_dir.join(&namespace.link);
        let page = read_page(&path)?;

        let section = match self.format.find_function_section(&page) {
            Ok(Some(section)) => section,
            Ok(None) => {
                debug!("  {} declares no functions", namespace.link);
                return Ok(Vec::new());
            }
            Err(MissingMarker(marker)) => {
                return Err(IndexError::MissingMarker { marker, path });
            }
        };

        Ok(self
            .format
            .split_function_signatures(section)
            .into_iter()
            .filter_map(|piece| self.format.extract_trailing_link(piece))
            .collect())
    }
}
