use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed dependency document '{file}'")]
#[diagnostic(
    code(depdraw::malformed_input),
    help("Expected an object with a \"Nodes\" array of NodeName/Color/SubNodeIndices/OriginalDependencies entries")
)]
pub struct MalformedInputError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepDrawError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depdraw::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedInput(Box<MalformedInputError>),

    #[error("Node '{node}' has unrecognized color '{value}'")]
    #[diagnostic(
        code(depdraw::unknown_color),
        help("Accepted colors are \"blue\"/\"B\" for groups and \"red\"/\"R\" for processors")
    )]
    UnknownColor { node: String, value: String },

    #[error("Node '{name}' is declared more than once")]
    #[diagnostic(
        code(depdraw::duplicate_node),
        help("Every NodeName in the document must be unique")
    )]
    DuplicateNode { name: String },

    #[error("Node name '{name}' is reserved for the synthetic root")]
    #[diagnostic(
        code(depdraw::reserved_name),
        help("Rename the node; the synthetic root is always called \"super\"")
    )]
    ReservedNodeName { name: String },

    #[error("Node '{referenced_by}' references undeclared node '{name}'")]
    #[diagnostic(
        code(depdraw::referential_error),
        help("Every name in SubNodeIndices and OriginalDependencies must also appear as a NodeName")
    )]
    Referential { name: String, referenced_by: String },

    #[error("Graph is not a tree: {reason}")]
    #[diagnostic(
        code(depdraw::not_a_tree),
        help("Hierarchical layout requires a rooted tree; use the force-directed layout instead")
    )]
    NotATree { reason: String },

    #[error("Render error: {message}")]
    #[diagnostic(
        code(depdraw::render_error),
        help("The diagram could not be rasterized; try --format svg to inspect it")
    )]
    RenderError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depdraw::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depdraw::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depdraw::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depdraw::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_malformed_input_display() {
        let source_code = "{\"Nodes\": [}";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = MalformedInputError {
            file: "broken.json".to_string(),
            source_code: NamedSource::new("broken.json", source_code.to_string()),
            span: Some((11, 1).into()),
            source: json_err,
        };

        assert_eq!(
            error.to_string(),
            "Malformed dependency document 'broken.json'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepDrawError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_referential_error() {
        let error = DepDrawError::Referential {
            name: "Ghost".to_string(),
            referenced_by: "Group".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Node 'Group' references undeclared node 'Ghost'"
        );
    }

    #[test]
    fn test_not_a_tree_error() {
        let error = DepDrawError::NotATree {
            reason: "node 'D' has more than one parent".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Graph is not a tree: node 'D' has more than one parent"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = DepDrawError::UnknownColor {
            node: "A".to_string(),
            value: "green".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepDrawError = io_err.into();

        match err {
            DepDrawError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: DepDrawError = json_err.into();

        match err {
            DepDrawError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
