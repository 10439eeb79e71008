use std::fs;
use std::path::{Path, PathBuf};

pub mod error;
pub mod factories;
pub mod format;
pub mod generator;
pub mod index;
pub mod parser;
pub mod templates;

pub use error::{IndexError, Result};
pub use factories::{FactoryGroup, FactoryTable};
pub use format::{Doxygen154, PageFormat};
pub use generator::PageWriter;
pub use index::{FunctionIndex, IndexBuilder, IndexLine};
pub use parser::DoxygenParser;

/// Summary page listing every namespace, also reused as page boilerplate.
pub const NAMESPACE_SUMMARY: &str = "namespaces.html";
pub const FUNCTION_INDEX: &str = "functionindex.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub link: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub link: String,
    pub name: String,
}

#[derive(Debug)]
pub struct GenerationReport {
    pub namespaces: usize,
    pub functions: usize,
    pub initials: Vec<char>,
    pub output: PathBuf,
}

/// Pages are kept as raw bytes: Doxygen headers and footers are not
/// necessarily UTF-8.
pub(crate) fn read_page(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Scrapes the Doxygen output in `doc_dir` and writes `functionindex.html`
/// next to it. Nothing is written unless every page was read successfully.
pub fn generate_function_index(
    doc_dir: &Path,
    factories: &FactoryTable,
) -> Result<GenerationReport> {
    let format = Doxygen154::new()?;
    let parser = DoxygenParser::new(doc_dir, &format);

    let summary = parser.read_summary()?;
    let namespaces = parser.namespace_list(&summary)?;
    let functions = parser.function_list(&namespaces)?;
    let discovered = functions.len();

    let index = IndexBuilder::new(factories, &format).build(functions);
    let output = PageWriter::new(doc_dir, &format)?.write(&summary, &index)?;

    Ok(GenerationReport {
        namespaces: namespaces.len(),
        functions: discovered,
        initials: index.initials,
        output,
    })
}
