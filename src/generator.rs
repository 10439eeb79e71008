use crate::format::{MissingMarker, PageFormat};
use crate::templates::Templates;
use crate::*;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `functionindex.html`, reusing the namespace summary page as the
/// boilerplate for header and footer.
pub struct PageWriter<'a, F: PageFormat> {
    doc_dir: PathBuf,
    format: &'a F,
    templates: Templates,
}

impl<'a, F: PageFormat> PageWriter<'a, F> {
    pub fn new(doc_dir: impl AsRef<Path>, format: &'a F) -> Result<Self> {
        Ok(Self {
            doc_dir: doc_dir.as_ref().to_path_buf(),
            format,
            templates: Templates::new()?,
        })
    }

    /// Header and footer are copied byte for byte, whatever their encoding.
    pub fn render(&self, summary: &[u8], index: &FunctionIndex) -> Result<Vec<u8>> {
        let boilerplate = self
            .format
            .boilerplate(summary)
            .map_err(|MissingMarker(marker)| IndexError::MissingMarker {
                marker,
                path: self.doc_dir.join(NAMESPACE_SUMMARY),
            })?;
        let contents = self.templates.render_contents(index)?;

        let mut page = self.format.retitle(&boilerplate.header);
        page.extend_from_slice(contents.as_bytes());
        page.extend_from_slice(&boilerplate.footer);
        Ok(page)
    }

    pub fn write(&self, summary: &[u8], index: &FunctionIndex) -> Result<PathBuf> {
        let html = self.render(summary, index)?;
        let output = self.doc_dir.join(FUNCTION_INDEX);
        fs::write(&output, html).map_err(|source| IndexError::Write {
            path: output.clone(),
            source,
        })?;
        info!("✅ Function index written to {}", output.display());
        Ok(output)
    }
}
