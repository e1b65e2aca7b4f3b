use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::core::{ColorTag, NodeRecord};
use crate::error::{DepDrawError, MalformedInputError};

/// Top-level layout of a dependency document
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyDocument {
    #[serde(rename = "Nodes")]
    pub nodes: Vec<DocumentNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "NodeName")]
    pub node_name: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "SubNodeIndices")]
    pub sub_node_indices: Vec<String>,
    #[serde(rename = "OriginalDependencies")]
    pub original_dependencies: Vec<String>,
    #[serde(rename = "ExecuteAfterNodes", default)]
    pub execute_after_nodes: Vec<String>,
    #[serde(rename = "ExecuteBeforeNodes", default)]
    pub execute_before_nodes: Vec<String>,
}

impl DocumentNode {
    fn into_record(self) -> Result<NodeRecord, DepDrawError> {
        let color = ColorTag::parse(&self.node_name, &self.color)?;
        Ok(NodeRecord {
            name: self.node_name,
            color,
            sub_nodes: self.sub_node_indices,
            original_dependencies: self.original_dependencies,
            execute_after: self.execute_after_nodes,
            execute_before: self.execute_before_nodes,
        })
    }
}

impl DependencyDocument {
    /// Read and parse a document from disk
    pub fn parse_file(path: &Path) -> Result<Self, DepDrawError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DepDrawError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    /// Parse a document, naming it `file` in diagnostics
    pub fn parse_str(file: &str, content: &str) -> Result<Self, DepDrawError> {
        serde_json::from_str(content).map_err(|e| {
            let span = byte_offset(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));

            DepDrawError::MalformedInput(Box::new(MalformedInputError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Normalize every node into a [`NodeRecord`], rejecting unknown colors
    pub fn into_records(self) -> Result<Vec<NodeRecord>, DepDrawError> {
        self.nodes
            .into_iter()
            .map(DocumentNode::into_record)
            .collect()
    }
}

/// Load the node records of a document in one step
pub fn load_records(path: &Path) -> Result<Vec<NodeRecord>, DepDrawError> {
    DependencyDocument::parse_file(path)?.into_records()
}

// serde_json reports 1-based line/column, with line 0 meaning "no position"
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    Some(offset.min(content.len().saturating_sub(1)))
}
