//! The stateful query facade.

use std::path::Path as FsPath;

use np_core::errors::{ErrorInfo, NetlistError};
use np_core::{Vertex, VertexId};
use np_graph::{merge_duplicate_vertices, split_registers, Netlist};

use crate::search::{
    all_fan_in, all_fan_out, all_point_to_point, any_point_to_point, fan_in_degree,
    fan_out_degree, Path,
};
use crate::waypoints::Waypoints;

fn not_found(name: &str, role: &str) -> NetlistError {
    NetlistError::NotFound(
        ErrorInfo::new("vertex-not-found", "could not find a vertex for the name")
            .detail("name", name)
            .detail("role", role),
    )
}

/// Owns a lowered netlist graph and answers structural queries over it.
///
/// Construction canonicalises the graph: duplicate non-logic vertices are
/// merged, promoted registers are split into source/destination pairs and
/// the structural checks run once. Queries never mutate the graph;
/// waypoint accumulation is the only state the facade keeps.
#[derive(Debug)]
pub struct NetlistPaths {
    netlist: Netlist,
    waypoints: Waypoints,
}

impl NetlistPaths {
    /// Wraps an already-lowered graph, canonicalising it first.
    pub fn new(mut netlist: Netlist) -> Self {
        merge_duplicate_vertices(&mut netlist);
        split_registers(&mut netlist);
        netlist.check_graph();
        Self {
            netlist,
            waypoints: Waypoints::new(),
        }
    }

    /// Reads the XML netlist dump at `path` and canonicalises the result.
    pub fn from_xml_file(path: impl AsRef<FsPath>) -> Result<Self, NetlistError> {
        Ok(Self::new(np_ingest::read_xml(path)?))
    }

    /// Lowers an XML document held in memory and canonicalises the result.
    pub fn from_xml_str(text: &str) -> Result<Self, NetlistError> {
        Ok(Self::new(np_ingest::read_xml_str(text)?))
    }

    /// The underlying graph.
    pub fn netlist(&self) -> &Netlist {
        &self.netlist
    }

    /// Resolves and installs the start waypoint.
    pub fn add_startpoint(&mut self, name: &str) -> Result<(), NetlistError> {
        let vertex = self
            .netlist
            .get_start_vertex(name)
            .ok_or_else(|| not_found(name, "start-point"))?;
        self.waypoints.add_start(vertex)
    }

    /// Resolves and installs the finish waypoint.
    pub fn add_finishpoint(&mut self, name: &str) -> Result<(), NetlistError> {
        let vertex = self
            .netlist
            .get_end_vertex(name)
            .ok_or_else(|| not_found(name, "end-point"))?;
        self.waypoints.add_finish(vertex)
    }

    /// Resolves and installs a through waypoint.
    pub fn add_throughpoint(&mut self, name: &str) -> Result<(), NetlistError> {
        let vertex = self
            .netlist
            .get_mid_vertex(name)
            .ok_or_else(|| not_found(name, "mid-point"))?;
        self.waypoints.add_through(vertex);
        Ok(())
    }

    /// Drops the accumulated waypoints.
    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Number of accumulated waypoints.
    pub fn num_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    /// True when no waypoint has been added.
    pub fn waypoints_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// True when a start point resolves for the name.
    pub fn startpoint_exists(&self, name: &str) -> bool {
        self.netlist.get_start_vertex(name).is_some()
    }

    /// True when an end point resolves for the name.
    pub fn endpoint_exists(&self, name: &str) -> bool {
        self.netlist.get_end_vertex(name).is_some()
    }

    /// True when a register resolves for the name.
    pub fn reg_exists(&self, name: &str) -> bool {
        self.netlist.get_reg_vertex(name).is_some()
    }

    /// True when a data path runs from `start` to `end`. Unresolvable
    /// names answer false rather than raising.
    pub fn path_exists(&self, start: &str, end: &str) -> bool {
        let (Some(from), Some(to)) = (
            self.netlist.get_start_vertex(start),
            self.netlist.get_end_vertex(end),
        ) else {
            return false;
        };
        any_point_to_point(&self.netlist, &[from, to])
            .map(|path| !path.is_empty())
            .unwrap_or(false)
    }

    /// A single path through the accumulated waypoints in order; empty
    /// when some segment has no path.
    pub fn get_any_path_through_waypoints(&self) -> Result<Path, NetlistError> {
        any_point_to_point(&self.netlist, self.waypoints.as_slice())
    }

    /// Every simple path between the start and finish waypoints.
    ///
    /// Through points are not supported here: enumerating all simple
    /// paths per segment would multiply an already exponential search.
    pub fn get_all_paths_through_waypoints(&self) -> Result<Vec<Path>, NetlistError> {
        let points = self.waypoints.as_slice();
        if points.len() < 2 {
            return Err(NetlistError::Waypoint(ErrorInfo::new(
                "waypoints-incomplete",
                "all-paths queries need a start and a finish",
            )));
        }
        if self.waypoints.has_through() {
            return Err(NetlistError::Waypoint(ErrorInfo::new(
                "through-unsupported",
                "all-paths queries accept only a start and a finish",
            )));
        }
        all_point_to_point(&self.netlist, points[0], points[points.len() - 1])
    }

    /// All paths fanning out of the named start point.
    pub fn get_all_fanout(&self, start_name: &str) -> Result<Vec<Path>, NetlistError> {
        let start = self
            .netlist
            .get_start_vertex(start_name)
            .ok_or_else(|| not_found(start_name, "start-point"))?;
        all_fan_out(&self.netlist, start)
    }

    /// All paths fanning into the named end point.
    pub fn get_all_fanin(&self, end_name: &str) -> Result<Vec<Path>, NetlistError> {
        let end = self
            .netlist
            .get_end_vertex(end_name)
            .ok_or_else(|| not_found(end_name, "end-point"))?;
        all_fan_in(&self.netlist, end)
    }

    /// Number of end points the named start point fans out to.
    pub fn fanout_degree(&self, name: &str) -> Result<usize, NetlistError> {
        let start = self
            .netlist
            .get_start_vertex(name)
            .ok_or_else(|| not_found(name, "start-point"))?;
        fan_out_degree(&self.netlist, start)
    }

    /// Number of start points fanning into the named end point.
    pub fn fanin_degree(&self, name: &str) -> Result<usize, NetlistError> {
        let end = self
            .netlist
            .get_end_vertex(name)
            .ok_or_else(|| not_found(name, "end-point"))?;
        fan_in_degree(&self.netlist, end)
    }

    /// Named vertices for listings, filtered and sorted.
    pub fn get_names(&self) -> Vec<VertexId> {
        self.netlist.get_names()
    }

    /// The vertex stored under a handle.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, NetlistError> {
        self.netlist.vertex(id)
    }

    /// The qualified name of a vertex handle.
    pub fn vertex_name(&self, id: VertexId) -> Result<&str, NetlistError> {
        Ok(self.netlist.vertex(id)?.name.as_str())
    }
}
