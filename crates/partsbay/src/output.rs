//! Output formatting: table, JSON, YAML, plain, and the tree view.
//!
//! Renders data in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one identifier
//! per line. The tree view is its own renderer with box-drawing
//! connectors and active markers.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use partsbay_core::{HierarchyNode, NodeKind};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

// ── Tree renderer ────────────────────────────────────────────────────

/// Render the hierarchy forest with box-drawing connectors.
///
/// Active entities get a green check, disabled ones a red cross and a
/// dimmed name. Models show their position since that is their identity.
pub fn render_tree(forest: &[HierarchyNode], color: bool) -> String {
    let mut out = String::new();
    for (i, node) in forest.iter().enumerate() {
        render_node(node, "", i + 1 == forest.len(), true, color, &mut out);
    }
    out.pop(); // trailing newline
    out
}

fn render_node(
    node: &HierarchyNode,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    color: bool,
    out: &mut String,
) {
    let connector = if is_root {
        ""
    } else if is_last {
        "└─ "
    } else {
        "├─ "
    };

    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&node_label(node, color));
    out.push('\n');

    let child_prefix = if is_root {
        String::new()
    } else if is_last {
        format!("{prefix}   ")
    } else {
        format!("{prefix}│  ")
    };

    for (i, child) in node.children.iter().enumerate() {
        render_node(
            child,
            &child_prefix,
            i + 1 == node.children.len(),
            false,
            color,
            out,
        );
    }
}

fn node_label(node: &HierarchyNode, color: bool) -> String {
    let marker = active_marker(node, color);

    let mut label = match node.kind {
        NodeKind::Device | NodeKind::Brand => {
            format!("{} ({})", node.name, node.slug)
        }
        NodeKind::Model => match node.model_index {
            Some(index) => format!("[{index}] {}", node.name),
            None => node.name.clone(),
        },
        // The parts-root name already carries its count.
        NodeKind::PartsRoot => node.name.clone(),
        NodeKind::PartCategory => node.name.clone(),
    };

    if color && !node.is_active {
        label = label.dimmed().to_string();
    }
    match marker {
        Some(marker) => format!("{label} {marker}"),
        None => label,
    }
}

fn active_marker(node: &HierarchyNode, color: bool) -> Option<String> {
    // The parts-root is synthetic; it has no flag of its own.
    if node.kind == NodeKind::PartsRoot {
        return None;
    }
    let marker = if node.is_active {
        if color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        }
    } else if color {
        "✗".red().to_string()
    } else {
        "✗".to_string()
    };
    Some(marker)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use partsbay_core::model::{Brand, DeviceType, Model};
    use partsbay_core::tree::assemble;

    #[test]
    fn tree_renders_connectors_and_markers() {
        let devices = vec![Arc::new(DeviceType {
            id: "d1".into(),
            name: "Mobile".into(),
            slug: "mobile".into(),
            icon: None,
            is_active: true,
            order: 0,
        })];
        let brands = vec![Arc::new(Brand {
            id: "b1".into(),
            category_slug: "mobile".into(),
            name: "Apple".into(),
            slug: "apple".into(),
            models: vec![Model {
                name: "iPhone 15".into(),
                model_number: None,
                release_year: None,
                is_active: Some(false),
                slug: Some("iphone-15".into()),
            }],
            is_active: true,
        })];

        let forest = assemble(&devices, &brands, &[]);
        let rendered = render_tree(&forest, false);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Mobile (mobile) ✓");
        assert_eq!(lines[1], "├─ Apple (apple) ✓");
        assert_eq!(lines[2], "│  └─ [0] iPhone 15 ✗");
        assert_eq!(lines[3], "└─ Part Categories (0)");
    }
}
