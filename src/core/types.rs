//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

use crate::error::DepDrawError;

/// Two-valued node color as declared in the input document
///
/// Groups are declared as `"blue"` / `"B"` and processors as `"red"` / `"R"`,
/// depending on which printer produced the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Primary,
    Secondary,
}

impl ColorTag {
    /// Normalize a raw `Color` value from the input document
    pub fn parse(node: &str, value: &str) -> Result<Self, DepDrawError> {
        match value {
            "blue" | "B" => Ok(ColorTag::Primary),
            "red" | "R" => Ok(ColorTag::Secondary),
            _ => Err(DepDrawError::UnknownColor {
                node: node.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTag::Primary => write!(f, "primary"),
            ColorTag::Secondary => write!(f, "secondary"),
        }
    }
}

/// A declared node of the dependency document
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub name: String,
    pub color: ColorTag,
    pub sub_nodes: Vec<String>,
    pub original_dependencies: Vec<String>,
    pub execute_after: Vec<String>,
    pub execute_before: Vec<String>,
}

impl NodeRecord {
    pub fn new(name: impl Into<String>, color: ColorTag) -> Self {
        Self {
            name: name.into(),
            color,
            sub_nodes: Vec::new(),
            original_dependencies: Vec::new(),
            execute_after: Vec::new(),
            execute_before: Vec::new(),
        }
    }

    pub fn with_sub_nodes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_nodes = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_original_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.original_dependencies = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_dependencies(&self) -> bool {
        !self.original_dependencies.is_empty()
    }
}

/// A 2-D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
