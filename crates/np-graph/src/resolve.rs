//! Role-filtered name resolution.

use log::debug;
use np_core::{Vertex, VertexId};
use regex::Regex;

use crate::graph::Netlist;

/// Role filter applied during name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// Register sources and top-level inputs.
    StartPoint,
    /// Register destinations and top-level outputs.
    EndPoint,
    /// Named signals paths may pass through.
    MidPoint,
    /// Either side of a register.
    Reg,
}

impl VertexRole {
    fn matches(&self, vertex: &Vertex) -> bool {
        match self {
            VertexRole::StartPoint => vertex.is_start_point(),
            VertexRole::EndPoint => vertex.is_end_point(),
            VertexRole::MidPoint => vertex.is_mid_point(),
            VertexRole::Reg => vertex.is_reg(),
        }
    }
}

impl Netlist {
    /// Finds the first non-logic vertex whose name matches `name` and
    /// whose role predicate holds.
    ///
    /// Hierarchical (`a.b`), slash-separated (`a/b`) and flattened (`a_b`)
    /// forms are accepted interchangeably: separators are normalised to
    /// `.` and the result is compiled as an unanchored regex, so partial
    /// matches and explicit patterns such as `.*` both work. A pattern
    /// that fails to compile resolves to nothing.
    pub fn resolve(&self, name: &str, role: VertexRole) -> Option<VertexId> {
        let pattern = name.replace(['/', '_'], ".");
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(err) => {
                debug!("name pattern {pattern:?} does not compile: {err}");
                return None;
            }
        };
        self.vertices()
            .find(|(_, vertex)| {
                !vertex.is_logic() && role.matches(vertex) && regex.is_match(&vertex.name)
            })
            .map(|(id, _)| id)
    }

    /// Resolves a name as a path start point.
    pub fn get_start_vertex(&self, name: &str) -> Option<VertexId> {
        self.resolve(name, VertexRole::StartPoint)
    }

    /// Resolves a name as a path end point.
    pub fn get_end_vertex(&self, name: &str) -> Option<VertexId> {
        self.resolve(name, VertexRole::EndPoint)
    }

    /// Resolves a name as a mid point.
    pub fn get_mid_vertex(&self, name: &str) -> Option<VertexId> {
        self.resolve(name, VertexRole::MidPoint)
    }

    /// Resolves a name as a register.
    pub fn get_reg_vertex(&self, name: &str) -> Option<VertexId> {
        self.resolve(name, VertexRole::Reg)
    }
}
