//! gk-snapshot: graph snapshot files.
//!
//! JSON is the canonical format; YAML carries the same records. Loading
//! validates the snapshot and builds a fresh [`Graph`].

use std::fmt;
use std::path::Path;

use gk_graph::{Graph, GraphError, Snapshot};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported snapshot format: {path}")]
    UnsupportedFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> SnapshotResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(SnapshotError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse snapshot text and build the graph.
pub fn from_str(content: &str, format: Format) -> SnapshotResult<Graph> {
    let snapshot: Snapshot = match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(Graph::from_snapshot(&snapshot)?)
}

/// Render a graph as snapshot text in `format` (pretty-printed JSON or YAML).
pub fn to_string(graph: &Graph, format: Format) -> SnapshotResult<String> {
    let snapshot = graph.to_snapshot();
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(&snapshot)?,
        Format::Yaml => serde_yaml::to_string(&snapshot)?,
    })
}

pub fn load_json(path: &Path) -> SnapshotResult<Graph> {
    load_as(path, Format::Json)
}

pub fn save_json(path: &Path, graph: &Graph) -> SnapshotResult<()> {
    save_as(path, graph, Format::Json)
}

pub fn load_yaml(path: &Path) -> SnapshotResult<Graph> {
    load_as(path, Format::Yaml)
}

pub fn save_yaml(path: &Path, graph: &Graph) -> SnapshotResult<()> {
    save_as(path, graph, Format::Yaml)
}

/// Load a snapshot, choosing the format from the file extension.
pub fn load(path: &Path) -> SnapshotResult<Graph> {
    load_as(path, Format::from_path(path)?)
}

/// Save a snapshot, choosing the format from the file extension.
pub fn save(path: &Path, graph: &Graph) -> SnapshotResult<()> {
    save_as(path, graph, Format::from_path(path)?)
}

pub fn load_as(path: &Path, format: Format) -> SnapshotResult<Graph> {
    let content = std::fs::read_to_string(path)?;
    let graph = from_str(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded snapshot"
    );
    Ok(graph)
}

pub fn save_as(path: &Path, graph: &Graph, format: Format) -> SnapshotResult<()> {
    let content = to_string(graph, format)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), %format, "saved snapshot");
    Ok(())
}
