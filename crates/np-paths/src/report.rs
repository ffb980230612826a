//! Table, JSON and GraphViz rendering of listings and path reports.

use std::fmt::Write as _;

use np_core::{Vertex, VertexId, VertexKind};
use serde::Serialize;

use crate::facade::NetlistPaths;
use crate::search::Path;

/// Options controlling report rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print full file paths instead of their final component.
    pub full_file_names: bool,
    /// Include logic vertices in path reports.
    pub report_logic: bool,
}

/// One row of a name listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRow {
    /// Qualified vertex name.
    pub name: String,
    /// Kind label; the destination side of a register reads `REG`.
    pub kind: String,
    /// Direction label.
    pub direction: String,
    /// Data type label, empty when untyped.
    pub dtype: String,
    /// Source location as `file:line`.
    pub location: String,
}

/// One row of a path report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRow {
    /// Qualified name; empty for anonymous logic.
    pub name: String,
    /// Kind label.
    pub kind: String,
    /// Source location as `file:line`.
    pub location: String,
}

fn kind_label(vertex: &Vertex) -> String {
    if vertex.kind == VertexKind::RegDst {
        "REG".to_string()
    } else {
        vertex.kind.as_str().to_string()
    }
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.len()..width {
        out.push(' ');
    }
}

impl NetlistPaths {
    /// Rows of the name listing, in canonical order.
    pub fn name_rows(&self, options: ReportOptions) -> Vec<NameRow> {
        self.get_names()
            .into_iter()
            .filter_map(|id| self.vertex(id).ok())
            .map(|vertex| NameRow {
                name: vertex.name.clone(),
                kind: kind_label(vertex),
                direction: vertex.direction.as_str().to_string(),
                dtype: vertex
                    .dtype
                    .as_ref()
                    .map(|dtype| dtype.label())
                    .unwrap_or_default(),
                location: vertex
                    .location
                    .describe(self.netlist().files(), options.full_file_names),
            })
            .collect()
    }

    /// The name listing as an aligned table.
    pub fn render_names(&self, options: ReportOptions) -> String {
        let rows = self.name_rows(options);
        let name_width = rows
            .iter()
            .map(|row| row.name.len())
            .max()
            .unwrap_or(4)
            .max(4)
            + 1;
        let mut out = String::new();
        pad(&mut out, "Name", name_width);
        pad(&mut out, "Type", 13);
        pad(&mut out, "Direction", 10);
        pad(&mut out, "DType", 20);
        out.push_str("Location\n");
        for row in &rows {
            pad(&mut out, &row.name, name_width);
            pad(&mut out, &row.kind, 13);
            pad(&mut out, &row.direction, 10);
            pad(&mut out, &row.dtype, 20);
            out.push_str(&row.location);
            out.push('\n');
        }
        out
    }

    /// Rows describing one path. Ignorable vertices are dropped; logic
    /// vertices appear only when requested.
    pub fn path_rows(&self, path: &[VertexId], options: ReportOptions) -> Vec<PathRow> {
        path.iter()
            .filter_map(|&id| self.vertex(id).ok())
            .filter(|vertex| !vertex.can_ignore())
            .filter(|vertex| options.report_logic || !vertex.is_logic())
            .map(|vertex| PathRow {
                name: vertex.name.clone(),
                kind: kind_label(vertex),
                location: vertex
                    .location
                    .describe(self.netlist().files(), options.full_file_names),
            })
            .collect()
    }

    /// One path as an aligned report block.
    pub fn render_path(&self, path: &[VertexId], options: ReportOptions) -> String {
        let rows = self.path_rows(path, options);
        let name_width = rows
            .iter()
            .map(|row| row.name.len().max(row.kind.len()))
            .max()
            .unwrap_or(0)
            + 1;
        let mut out = String::new();
        for row in &rows {
            out.push_str("  ");
            if row.name.is_empty() {
                pad(&mut out, &row.kind, name_width);
            } else {
                pad(&mut out, &row.name, name_width);
            }
            out.push_str(&row.location);
            out.push('\n');
        }
        out
    }

    /// A numbered report over a collection of paths.
    pub fn render_paths(&self, paths: &[Path], options: ReportOptions) -> String {
        let mut out = String::new();
        let mut count = 0;
        for path in paths {
            if path.is_empty() {
                continue;
            }
            count += 1;
            let _ = writeln!(out, "Path {count}");
            out.push_str(&self.render_path(path, options));
            out.push('\n');
        }
        let _ = writeln!(out, "Found {count} path(s)");
        out
    }

    /// The post-merge graph as a GraphViz digraph.
    pub fn dump_dot(&self) -> String {
        let mut out = String::from("digraph netlist {\n");
        for (id, vertex) in self.netlist().vertices() {
            if vertex.deleted {
                continue;
            }
            let label = if vertex.name.is_empty() {
                vertex.kind.as_str().to_string()
            } else {
                vertex.name.clone()
            };
            let _ = writeln!(
                out,
                "  n{} [label=\"{}\" kind=\"{}\" dir=\"{}\"];",
                id.as_raw(),
                label,
                vertex.kind.as_str(),
                vertex.direction.as_str()
            );
        }
        for (id, vertex) in self.netlist().vertices() {
            if vertex.deleted {
                continue;
            }
            if let Ok(neighbors) = self.netlist().out_neighbors(id) {
                for &dst in neighbors {
                    let _ = writeln!(out, "  n{} -> n{};", id.as_raw(), dst.as_raw());
                }
            }
        }
        out.push_str("}\n");
        out
    }
}
