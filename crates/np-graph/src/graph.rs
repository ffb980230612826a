use std::sync::Arc;

use log::warn;
use np_core::errors::{ErrorInfo, NetlistError};
use np_core::{DType, FileTable, Location, TypeTable, Vertex, VertexDirection, VertexId, VertexKind};

#[derive(Debug, Clone)]
pub(crate) struct VertexRecord {
    pub(crate) vertex: Vertex,
    /// Outgoing edge targets in insertion order. Parallel edges are kept.
    pub(crate) out_edges: Vec<VertexId>,
    /// Incoming edge sources in insertion order.
    pub(crate) in_edges: Vec<VertexId>,
}

impl VertexRecord {
    fn new(vertex: Vertex) -> Self {
        Self {
            vertex,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }
}

/// The netlist graph: vertices under dense indices, directed edges in
/// declaration order, plus the file and type registries populated during
/// ingest.
///
/// Deletion is logical. Duplicate vertices are tombstoned rather than
/// removed so that identifiers remain stable.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    pub(crate) records: Vec<VertexRecord>,
    pub(crate) num_edges: usize,
    files: FileTable,
    dtypes: TypeTable,
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> NetlistError {
    NetlistError::Graph(ErrorInfo::new(code, message))
}

fn unknown_vertex(id: VertexId) -> NetlistError {
    NetlistError::Graph(
        ErrorInfo::new("unknown-vertex", "vertex does not exist")
            .detail("vertex", id.as_raw().to_string()),
    )
}

impl Netlist {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The file registry.
    pub fn files(&self) -> &FileTable {
        &self.files
    }

    /// Mutable access to the file registry, used during ingest.
    pub fn files_mut(&mut self) -> &mut FileTable {
        &mut self.files
    }

    /// The type registry.
    pub fn dtypes(&self) -> &TypeTable {
        &self.dtypes
    }

    /// Mutable access to the type registry, used during ingest.
    pub fn dtypes_mut(&mut self) -> &mut TypeTable {
        &mut self.dtypes
    }

    /// Number of stored vertices, tombstoned ones included.
    pub fn num_vertices(&self) -> usize {
        self.records.len()
    }

    /// Number of stored edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub(crate) fn index(&self, id: VertexId) -> Result<usize, NetlistError> {
        let index = id.as_raw() as usize;
        if id.is_null() || index >= self.records.len() {
            return Err(unknown_vertex(id));
        }
        Ok(index)
    }

    /// Adds an anonymous logic vertex.
    pub fn add_logic_vertex(&mut self, kind: VertexKind, location: Location) -> VertexId {
        self.add_vertex(Vertex::logic(kind, location))
    }

    /// Adds a named variable vertex.
    #[allow(clippy::too_many_arguments)]
    pub fn add_var_vertex(
        &mut self,
        kind: VertexKind,
        direction: VertexDirection,
        location: Location,
        dtype: Option<Arc<DType>>,
        name: impl Into<String>,
        is_param: bool,
        param_value: Option<String>,
    ) -> VertexId {
        self.add_vertex(Vertex::var(
            kind,
            direction,
            location,
            dtype,
            name,
            is_param,
            param_value,
        ))
    }

    /// Adds a fully formed vertex and returns its identifier.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId::from_raw(self.records.len() as u32);
        self.records.push(VertexRecord::new(vertex));
        id
    }

    /// Adds a directed edge: the value at `src` contributes to the value
    /// at `dst`.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<(), NetlistError> {
        let src_index = self.index(src)?;
        let dst_index = self.index(dst)?;
        self.records[src_index].out_edges.push(dst);
        self.records[dst_index].in_edges.push(src);
        self.num_edges += 1;
        Ok(())
    }

    pub(crate) fn push_edge(&mut self, src: VertexId, dst: VertexId) {
        self.records[src.as_raw() as usize].out_edges.push(dst);
        self.records[dst.as_raw() as usize].in_edges.push(src);
        self.num_edges += 1;
    }

    /// The vertex stored under `id`; tombstoned vertices remain
    /// addressable.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, NetlistError> {
        Ok(&self.records[self.index(id)?].vertex)
    }

    /// Promotes a variable to the destination side of a register. Used
    /// when a non-blocking write to it is discovered.
    pub fn set_vertex_reg(&mut self, id: VertexId) -> Result<(), NetlistError> {
        let index = self.index(id)?;
        let vertex = &mut self.records[index].vertex;
        if vertex.is_logic() {
            return Err(graph_error("promote-logic", "cannot promote a logic vertex")
                .into_context("vertex", id));
        }
        vertex.kind = VertexKind::RegDst;
        Ok(())
    }

    /// Outgoing edge targets of `id` in insertion order.
    pub fn out_neighbors(&self, id: VertexId) -> Result<&[VertexId], NetlistError> {
        Ok(&self.records[self.index(id)?].out_edges)
    }

    /// Incoming edge sources of `id` in insertion order.
    pub fn in_neighbors(&self, id: VertexId) -> Result<&[VertexId], NetlistError> {
        Ok(&self.records[self.index(id)?].in_edges)
    }

    /// Number of incoming edges.
    pub fn in_degree(&self, id: VertexId) -> Result<usize, NetlistError> {
        Ok(self.in_neighbors(id)?.len())
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self, id: VertexId) -> Result<usize, NetlistError> {
        Ok(self.out_neighbors(id)?.len())
    }

    /// Iterates all vertex identifiers in index order, tombstoned ones
    /// included.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.records.len()).map(|index| VertexId::from_raw(index as u32))
    }

    /// Iterates identifier and vertex pairs in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (VertexId::from_raw(index as u32), &record.vertex))
    }

    /// Named vertices for listings: non-logic, non-source-reg,
    /// non-ignorable and non-deleted, in canonical order.
    pub fn get_names(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self
            .vertices()
            .filter(|(_, vertex)| {
                !vertex.is_logic()
                    && !vertex.is_src_reg()
                    && !vertex.can_ignore()
                    && !vertex.deleted
            })
            .map(|(id, _)| id)
            .collect();
        ids.sort_by(|a, b| {
            self.records[a.as_raw() as usize]
                .vertex
                .canonical_cmp(&self.records[b.as_raw() as usize].vertex)
        });
        ids
    }

    /// Emits non-fatal warnings for register invariant violations and for
    /// elaborator lowering residue left in vertex names.
    pub fn check_graph(&self) {
        for (id, vertex) in self.vertices() {
            if vertex.deleted {
                continue;
            }
            let index = id.as_raw() as usize;
            if vertex.kind == VertexKind::RegSrc && !self.records[index].in_edges.is_empty() {
                warn!(
                    "source reg {} ({}) has in edges",
                    vertex.name,
                    id.as_raw()
                );
            }
            if vertex.kind == VertexKind::RegDst && !self.records[index].out_edges.is_empty() {
                warn!(
                    "destination reg {} ({}) has out edges",
                    vertex.name,
                    id.as_raw()
                );
            }
            if vertex.name.contains("__Vlvbound") {
                warn!("vertex {} carries the __Vlvbound marker", vertex.name);
            }
        }
    }
}

trait ContextExt {
    fn into_context(self, key: &str, id: VertexId) -> NetlistError;
}

impl ContextExt for NetlistError {
    fn into_context(self, key: &str, id: VertexId) -> NetlistError {
        match self {
            NetlistError::Graph(info) => {
                NetlistError::Graph(info.detail(key, id.as_raw().to_string()))
            }
            other => other,
        }
    }
}
