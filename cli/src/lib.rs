//! undigraph-cli: load an edge-list file and print a full graph report.
//!
//! The binary is a thin wrapper over [`run`]; tests drive `run` directly
//! with an in-memory writer.

pub mod config;
pub mod logging;
pub mod report;

use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::{Context, Result};
use tracing::info;
use undigraph_core::{read_edge_list, Graph};

use crate::config::{OutputFormat, Settings};
use crate::report::Report;

/// Read and build the graph named by `settings.file`.
pub fn load_graph(settings: &Settings) -> Result<Graph> {
    let path = &settings.file;
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let graph = read_edge_list(BufReader::new(file))
        .with_context(|| format!("invalid edge list in {}", path.display()))?;

    info!(
        file = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Load, analyze, and write the report in the configured format.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let graph = load_graph(settings)?;
    let report = Report::build(&graph, settings).context("analysis failed")?;

    match settings.format {
        OutputFormat::Text => report.write_text(&graph, settings, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
