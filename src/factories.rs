//! Argument object factories (`srcImageRange` and friends).
//!
//! Doxygen never lists these helpers as namespace functions, so they are
//! merged into the index from a table.

use crate::error::Result;
use crate::{read_page, FunctionEntry};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactoryGroup {
    /// Link target shared by every name of the group.
    pub anchor: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactoryTable {
    #[serde(default)]
    pub groups: Vec<FactoryGroup>,
}

fn group(anchor: &str, names: &[&str]) -> FactoryGroup {
    FactoryGroup {
        anchor: anchor.to_string(),
        names: names.iter().map(|n| n.to_string()).collect(),
    }
}

impl Default for FactoryTable {
    fn default() -> Self {
        Self {
            groups: vec![
                group(
                    "group__ImageIterators.html#ImageBasedArgumentObjectFactories",
                    &["srcImageRange", "srcImage", "destImageRange", "destImage", "maskImage"],
                ),
                group(
                    "group__ImageIterators.html#MultiArrayBasedArgumentObjectFactories",
                    &[
                        "srcMultiArrayRange",
                        "srcMultiArray",
                        "destMultiArrayRange",
                        "destMultiArray",
                    ],
                ),
                group(
                    "group__ImageIterators.html#IteratorBasedArgumentObjectFactories",
                    &["srcIterRange", "srcIter", "destIterRange", "destIter", "maskIter"],
                ),
            ],
        }
    }
}

impl FactoryTable {
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        Ok(serde_json::from_slice(&read_page(path)?)?)
    }

    pub fn entries(&self) -> impl Iterator<Item = FunctionEntry> + '_ {
        self.groups.iter().flat_map(|group| {
            group.names.iter().map(move |name| FunctionEntry {
                link: group.anchor.clone(),
                name: name.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
