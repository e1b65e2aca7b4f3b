use std::io::Write;

use super::RenderStyle;
use crate::error::DepDrawError;
use crate::graph::RenderColor;
use crate::layout::{Bounds, LayoutOutcome, Position};

mod colors {
    pub const PRIMARY: &str = "#0000FF"; // Blue
    pub const LEAF_PRIMARY: &str = "#FFFF00"; // Yellow
    pub const SECONDARY: &str = "#FF0000"; // Red
    pub const ROOT: &str = "#000000"; // Black
    pub const BACKGROUND: &str = "#FFFFFF";
    pub const LABEL: &str = "#000000";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepDrawError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepDrawError::from)
    };
}

const ALL_COLORS: [RenderColor; 4] = [
    RenderColor::Primary,
    RenderColor::LeafPrimary,
    RenderColor::Secondary,
    RenderColor::Root,
];

fn fill(color: RenderColor) -> &'static str {
    match color {
        RenderColor::Primary => colors::PRIMARY,
        RenderColor::LeafPrimary => colors::LEAF_PRIMARY,
        RenderColor::Secondary => colors::SECONDARY,
        RenderColor::Root => colors::ROOT,
    }
}

fn marker_id(color: RenderColor) -> &'static str {
    match color {
        RenderColor::Primary => "arrow-primary",
        RenderColor::LeafPrimary => "arrow-leaf-primary",
        RenderColor::Secondary => "arrow-secondary",
        RenderColor::Root => "arrow-root",
    }
}

/// Maps layout coordinates onto the square canvas, flipping the y axis
struct Viewport {
    bounds: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    fn new(bounds: Bounds, style: &RenderStyle) -> Self {
        let size = style.canvas_size as f64;
        let drawable = (size - 2.0 * style.padding).max(1.0);
        let extent = bounds.width().max(bounds.height());
        let scale = if extent > 0.0 { drawable / extent } else { 1.0 };

        Self {
            bounds,
            scale,
            offset_x: (size - bounds.width() * scale) / 2.0,
            offset_y: (size - bounds.height() * scale) / 2.0,
        }
    }

    fn project(&self, position: &Position) -> (f64, f64) {
        (
            self.offset_x + (position.x - self.bounds.min_x) * self.scale,
            self.offset_y + (self.bounds.max_y - position.y) * self.scale,
        )
    }
}

/// Draws a laid-out graph as a standalone SVG document
pub struct SvgRenderer {
    style: RenderStyle,
}

impl SvgRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, outcome: &LayoutOutcome, output: &mut dyn Write) -> Result<(), DepDrawError> {
        let size = self.style.canvas_size;
        writeln_out!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln_out!(
            output,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            colors::BACKGROUND
        )?;

        let Some(bounds) = outcome.positions.bounds() else {
            writeln_out!(output, "</svg>")?;
            return Ok(());
        };
        let viewport = Viewport::new(bounds, &self.style);
        let radius = self.style.node_radius(outcome.nodes.len());

        self.render_markers(output, radius)?;

        writeln_out!(output, r#"  <g class="edges" stroke-width="{:.1}">"#, radius / 8.0)?;
        for edge in &outcome.edges {
            let (Some(from), Some(to)) = (
                outcome.positions.get(&edge.from),
                outcome.positions.get(&edge.to),
            ) else {
                continue;
            };
            let (x1, y1) = viewport.project(from);
            let (x2, y2) = viewport.project(to);

            // Stop short of the target circle so the arrowhead stays visible
            let (dx, dy) = (x2 - x1, y2 - y1);
            let length = (dx * dx + dy * dy).sqrt();
            if length <= radius {
                continue;
            }
            let (ux, uy) = (dx / length, dy / length);

            writeln_out!(
                output,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" marker-end="url(#{})"/>"#,
                x1 + ux * radius,
                y1 + uy * radius,
                x2 - ux * radius,
                y2 - uy * radius,
                fill(edge.color),
                marker_id(edge.color)
            )?;
        }
        writeln_out!(output, "  </g>")?;

        writeln_out!(output, r#"  <g class="nodes">"#)?;
        for node in &outcome.nodes {
            let Some(position) = outcome.positions.get(&node.name) else {
                continue;
            };
            let (cx, cy) = viewport.project(position);

            writeln_out!(
                output,
                r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}"/>"#,
                cx,
                cy,
                radius,
                fill(node.color),
                self.style.node_opacity
            )?;
            writeln_out!(
                output,
                r#"    <text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle">{}</text>"#,
                cx,
                cy - radius - self.style.font_size / 2.0,
                escape_xml(&self.style.font_family),
                self.style.font_size,
                colors::LABEL,
                escape_xml(&node.label)
            )?;
        }
        writeln_out!(output, "  </g>")?;

        writeln_out!(output, "</svg>")?;
        Ok(())
    }

    fn render_markers(&self, output: &mut dyn Write, radius: f64) -> Result<(), DepDrawError> {
        let head = (radius / 2.5).max(4.0);
        writeln_out!(output, "  <defs>")?;
        for color in ALL_COLORS {
            writeln_out!(
                output,
                r#"    <marker id="{}" markerWidth="{head:.1}" markerHeight="{head:.1}" refX="{head:.1}" refY="{:.1}" orient="auto" markerUnits="userSpaceOnUse">"#,
                marker_id(color),
                head / 2.0
            )?;
            writeln_out!(
                output,
                r#"      <path d="M0,0 L{head:.1},{:.1} L0,{head:.1} z" fill="{}"/>"#,
                head / 2.0,
                fill(color)
            )?;
            writeln_out!(output, "    </marker>")?;
        }
        writeln_out!(output, "  </defs>")?;
        Ok(())
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::render::PADDING;
    use crate::core::{ColorTag, NodeRecord};
    use crate::graph::DependencyGraphBuilder;
    use crate::layout::{LayoutSelector, LayoutStrategy, PositionMap};

    fn render_to_string(outcome: &LayoutOutcome) -> String {
        let mut buffer = Vec::new();
        SvgRenderer::new(RenderStyle::default())
            .render(outcome, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn outcome_for(records: &[NodeRecord]) -> LayoutOutcome {
        let graph = DependencyGraphBuilder::default().build(records).unwrap();
        LayoutSelector::default().select(&graph).unwrap()
    }

    #[test]
    fn test_svg_contains_every_label() {
        let outcome = outcome_for(&[
            NodeRecord::new("Mass.Root", ColorTag::Primary)
                .with_sub_nodes(["Mass.Steer", "Mass.Avoid"])
                .with_original_dependencies(["Mass.Steer"]),
            NodeRecord::new("Mass.Steer", ColorTag::Secondary),
            NodeRecord::new("Mass.Avoid", ColorTag::Primary),
        ]);
        let svg = render_to_string(&outcome);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for label in ["super", "Mass.Root", "Mass.Steer", "Mass.Avoid"] {
            assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
        }
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<line").count(), 3);
    }

    #[test]
    fn test_node_colors() {
        let outcome = outcome_for(&[
            NodeRecord::new("A", ColorTag::Primary)
                .with_sub_nodes(["B", "C"])
                .with_original_dependencies(["B"]),
            NodeRecord::new("B", ColorTag::Secondary),
            NodeRecord::new("C", ColorTag::Primary),
        ]);
        let svg = render_to_string(&outcome);

        assert!(svg.contains(&format!(r#"fill="{}" fill-opacity="0.7""#, colors::PRIMARY)));
        assert!(svg.contains(&format!(r#"fill="{}" fill-opacity="0.7""#, colors::LEAF_PRIMARY)));
        assert!(svg.contains(&format!(r#"fill="{}" fill-opacity="0.7""#, colors::SECONDARY)));
        assert!(svg.contains(&format!(r#"fill="{}" fill-opacity="0.7""#, colors::ROOT)));
        assert!(svg.contains(r#"marker-end="url(#arrow-root)""#));
        assert!(svg.contains(r#"marker-end="url(#arrow-secondary)""#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let outcome = outcome_for(&[NodeRecord::new("a<b>&c", ColorTag::Secondary)]);
        let svg = render_to_string(&outcome);

        assert!(svg.contains(">a&lt;b&gt;&amp;c</text>"));
    }

    #[test]
    fn test_empty_positions_render_blank_canvas() {
        let outcome = LayoutOutcome {
            strategy: LayoutStrategy::ForceDirected,
            positions: PositionMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        let svg = render_to_string(&outcome);

        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_viewport_flips_y() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        };
        let viewport = Viewport::new(bounds, &RenderStyle::default());

        let (_, top) = viewport.project(&Position::new(0.0, 1.0));
        let (_, bottom) = viewport.project(&Position::new(0.0, 0.0));
        assert!(top < bottom);
        assert_eq!(top, PADDING);
    }
}
