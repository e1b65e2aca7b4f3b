//! Layout command configuration

use std::path::PathBuf;

use super::LayoutOptions;
use crate::cli::OutputFormat;
use crate::error::DepDrawError;

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub file: PathBuf,
    pub layout: LayoutOptions,
    pub output_format: OutputFormat,
    pub max_nodes: Option<usize>,
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LayoutConfigBuilder {
    file: Option<PathBuf>,
    layout: Option<LayoutOptions>,
    output_format: Option<OutputFormat>,
    max_nodes: Option<Option<usize>>,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

impl crate::common::ConfigBuilder for LayoutConfigBuilder {
    type Config = LayoutConfig;

    fn build(self) -> Result<Self::Config, DepDrawError> {
        Ok(LayoutConfig {
            file: self
                .file
                .ok_or_else(|| DepDrawError::ConfigurationError {
                    message: "Missing required field: file".to_string(),
                })?,
            layout: self.layout.unwrap_or_default(),
            output_format: self.output_format.ok_or_else(|| {
                DepDrawError::ConfigurationError {
                    message: "Missing required field: output_format".to_string(),
                }
            })?,
            max_nodes: self.max_nodes.unwrap_or(None),
        })
    }
}
