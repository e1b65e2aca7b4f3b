use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{LayoutArgs, RenderArgs};

#[derive(Parser)]
#[command(
    name = "depdraw",
    about = "🕸  Draw dependency graphs as tree or network diagrams",
    long_about = "depdraw reads JSON dependency documents, builds a directed graph rooted at a \
                  synthetic \"super\" node, and draws it. Trees are laid out hierarchically \
                  (radially by default); anything else falls back to a force-directed layout.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw one document, or every document in the input directory
    ///
    /// Each input `<name>.json` becomes `<output-dir>/<name>.<format>`.
    #[command(
        long_about = "Draw dependency documents as images. With a FILE argument only that \
                      document is drawn and any error aborts the run. Without one, every *.json \
                      file in --input-dir is drawn in parallel; failures are reported and the \
                      remaining files are still processed unless --fail-fast is given."
    )]
    Draw {
        /// Document to draw (draws every document in --input-dir if omitted)
        #[arg(value_name = "FILE", env = "DEPDRAW_FILE")]
        file: Option<PathBuf>,

        /// Directory scanned for *.json documents
        #[arg(
            long,
            default_value = crate::constants::paths::DEFAULT_INPUT_DIR,
            env = "DEPDRAW_INPUT_DIR"
        )]
        input_dir: PathBuf,

        /// Directory images are written to (created if missing)
        #[arg(
            long,
            default_value = crate::constants::paths::DEFAULT_OUTPUT_DIR,
            env = "DEPDRAW_OUTPUT_DIR"
        )]
        output_dir: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        render: RenderArgs,

        /// Stop at the first document that fails
        #[arg(long, env = "DEPDRAW_FAIL_FAST")]
        fail_fast: bool,
    },

    /// Compute a layout and print it instead of drawing it
    #[command(
        long_about = "Build the graph for one document, pick a layout strategy, and print the \
                      strategy, the edges and every node position. Useful for checking why a \
                      document is or is not drawn as a tree."
    )]
    Layout {
        /// Document to lay out
        #[arg(value_name = "FILE", env = "DEPDRAW_FILE")]
        file: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output format
        #[arg(
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "DEPDRAW_OUTPUT_FORMAT"
        )]
        output_format: OutputFormat,

        /// Maximum number of positions to print (prints all by default)
        #[arg(long, env = "DEPDRAW_MAX_NODES")]
        max_nodes: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::graph::{EdgeSource, LabelStyle};
    use crate::layout::TreeStyle;
    use crate::render::ImageFormat;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_draw_defaults() {
        let cli = Cli::try_parse_from(["depdraw", "draw"]).unwrap();
        match cli.command {
            Commands::Draw {
                file,
                input_dir,
                output_dir,
                layout,
                render,
                fail_fast,
            } => {
                assert_eq!(file, None);
                assert_eq!(input_dir, PathBuf::from("./data"));
                assert_eq!(output_dir, PathBuf::from("./data"));
                assert_eq!(layout.edge_source, EdgeSource::SubNodes);
                assert_eq!(layout.labels, LabelStyle::Full);
                assert_eq!(layout.tree_style, TreeStyle::Radial);
                assert_eq!(layout.repulsion, 0.3);
                assert_eq!(layout.iterations, 50);
                assert_eq!(layout.seed, 0);
                assert_eq!(render.format, ImageFormat::Jpg);
                assert_eq!(render.size, 2400);
                assert!(!fail_fast);
            }
            _ => panic!("expected draw command"),
        }
    }

    #[test]
    fn test_layout_flags() {
        let cli = Cli::try_parse_from([
            "depdraw",
            "layout",
            "graph.json",
            "--output-format",
            "json",
            "--edge-source",
            "original-dependencies",
            "--tree-style",
            "top-down",
            "--labels",
            "short",
        ])
        .unwrap();

        match cli.command {
            Commands::Layout {
                file,
                layout,
                output_format,
                ..
            } => {
                assert_eq!(file, PathBuf::from("graph.json"));
                assert_eq!(output_format, OutputFormat::Json);
                assert_eq!(layout.edge_source, EdgeSource::OriginalDependencies);
                assert_eq!(layout.tree_style, TreeStyle::TopDown);
                assert_eq!(layout.labels, LabelStyle::Short);
            }
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["depdraw", "draw", "--format", "gif"]).is_err());
    }
}
