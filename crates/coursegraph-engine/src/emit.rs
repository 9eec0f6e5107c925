//! Artifact emission
//!
//! Both artifacts are source-level array literals meant to be dropped into
//! the visualizer's source tree as `edges.ts` and `nodes.ts`.

use crate::graph::{GraphEdge, GraphNode, PrerequisiteGraph};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors writing the artifacts
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Quote a string as a JS/JSON string literal
fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn render_edge(edge: &GraphEdge) -> String {
    format!(
        "[{},{}, {}]",
        quoted(&edge.from.to_string()),
        quoted(&edge.to.to_string()),
        edge.corequisite
    )
}

fn render_node(node: &GraphNode) -> String {
    format!(
        "{{id: {}, label: {}, dept: {}, num: {}}}",
        quoted(&node.id()),
        quoted(&node.label),
        quoted(&node.identifier.department),
        quoted(&node.identifier.number.to_string())
    )
}

/// Render the edges artifact
pub fn render_edges(graph: &PrerequisiteGraph) -> String {
    let edges: Vec<String> = graph.edges().iter().map(render_edge).collect();
    format!("export const edges = [{}];\n", edges.join(","))
}

/// Render the nodes artifact
pub fn render_nodes(graph: &PrerequisiteGraph) -> String {
    if graph.nodes().is_empty() {
        return "export const nodes = [];\n".to_string();
    }

    let nodes: Vec<String> = graph
        .nodes()
        .iter()
        .map(|node| format!("  {}", render_node(node)))
        .collect();
    format!("export const nodes = [\n{}\n];\n", nodes.join(",\n"))
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    std::fs::write(path, contents).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both artifacts
pub fn write_artifacts(
    graph: &PrerequisiteGraph,
    edges_path: &Path,
    nodes_path: &Path,
) -> Result<(), EmitError> {
    write_file(edges_path, &render_edges(graph))?;
    write_file(nodes_path, &render_nodes(graph))?;

    tracing::info!(
        edges = graph.edges().len(),
        nodes = graph.nodes().len(),
        edges_path = %edges_path.display(),
        nodes_path = %nodes_path.display(),
        "wrote graph artifacts"
    );

    Ok(())
}
