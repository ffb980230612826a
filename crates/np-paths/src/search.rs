//! Fan-out, fan-in and point-to-point path searches.

use log::{debug, info};
use np_core::errors::{ErrorInfo, NetlistError};
use np_core::VertexId;
use np_graph::Netlist;

use crate::dfs::{dfs_all_edges, dfs_tree, ParentMap, TraversalDirection};

/// A walk through the graph as a sequence of vertex handles.
pub type Path = Vec<VertexId>;

/// Walks the parent map from `target` back to `root`.
///
/// Returns the vertices in walked order, `target` first; empty when the
/// target was never reached. On a tree-edge parent map each vertex has a
/// single parent, so the walk cannot revisit a vertex.
fn determine_path(parents: &ParentMap, root: VertexId, target: VertexId) -> Path {
    let mut path = vec![target];
    let mut current = target;
    while current != root {
        match parents.get(&current).and_then(|found| found.first()) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Path::new(),
        }
    }
    path
}

/// Enumerates every simple path from `root` to the vertex the recursion
/// currently stands on, walking the multi-valued parent map backwards and
/// pruning any parent already on the partial path.
fn determine_all_paths(
    parents: &ParentMap,
    result: &mut Vec<Path>,
    mut path: Path,
    root: VertexId,
    current: VertexId,
) {
    path.push(current);
    if current == root {
        result.push(path);
        return;
    }
    let Some(found) = parents.get(&current) else {
        debug!("dead end at vertex {}", current.as_raw());
        return;
    };
    for &parent in found {
        if !path.contains(&parent) {
            determine_all_paths(parents, result, path.clone(), root, parent);
        }
    }
}

/// All tree paths fanning out from `start` to reachable end points, in
/// forward order.
pub fn all_fan_out(netlist: &Netlist, start: VertexId) -> Result<Vec<Path>, NetlistError> {
    info!("fan-out search from vertex {}", start.as_raw());
    let parents = dfs_tree(netlist, start, TraversalDirection::Forward)?;
    let mut paths = Vec::new();
    for (id, vertex) in netlist.vertices() {
        if !vertex.is_end_point() {
            continue;
        }
        let mut path = determine_path(&parents, start, id);
        if !path.is_empty() {
            path.reverse();
            paths.push(path);
        }
    }
    Ok(paths)
}

/// All tree paths fanning into `end` from reachable start points, in
/// forward order.
pub fn all_fan_in(netlist: &Netlist, end: VertexId) -> Result<Vec<Path>, NetlistError> {
    info!("fan-in search towards vertex {}", end.as_raw());
    let parents = dfs_tree(netlist, end, TraversalDirection::Reverse)?;
    let mut paths = Vec::new();
    for (id, vertex) in netlist.vertices() {
        if !vertex.is_start_point() {
            continue;
        }
        // Walking reverse-graph parents from the start point back to the
        // search root already yields forward order.
        let path = determine_path(&parents, end, id);
        if !path.is_empty() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// A single path visiting the waypoints in order, built from one
/// tree-edge DFS per adjacent pair. Empty when any segment has no path.
pub fn any_point_to_point(
    netlist: &Netlist,
    waypoints: &[VertexId],
) -> Result<Path, NetlistError> {
    if waypoints.len() < 2 {
        return Err(NetlistError::Waypoint(ErrorInfo::new(
            "waypoints-incomplete",
            "point-to-point queries need at least a start and a finish",
        )));
    }
    let mut path = Path::new();
    for pair in waypoints.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let parents = dfs_tree(netlist, from, TraversalDirection::Forward)?;
        let mut segment = determine_path(&parents, from, to);
        if segment.is_empty() {
            debug!(
                "no path between waypoints {} and {}",
                from.as_raw(),
                to.as_raw()
            );
            return Ok(Path::new());
        }
        segment.reverse();
        // The junction vertex opens the next segment.
        segment.pop();
        path.extend(segment);
    }
    path.push(waypoints[waypoints.len() - 1]);
    Ok(path)
}

/// Every simple path from `start` to `end`.
///
/// Enumeration is exponential in the graph size; callers should restrict
/// it to short hops.
pub fn all_point_to_point(
    netlist: &Netlist,
    start: VertexId,
    end: VertexId,
) -> Result<Vec<Path>, NetlistError> {
    let parents = dfs_all_edges(netlist, start, TraversalDirection::Forward)?;
    let mut paths = Vec::new();
    determine_all_paths(&parents, &mut paths, Path::new(), start, end);
    for path in &mut paths {
        path.reverse();
    }
    Ok(paths)
}

/// Number of end points `start` fans out to, one per destination path.
pub fn fan_out_degree(netlist: &Netlist, start: VertexId) -> Result<usize, NetlistError> {
    Ok(all_fan_out(netlist, start)?.len())
}

/// Number of start points fanning into `end`, one per origin path.
pub fn fan_in_degree(netlist: &Netlist, end: VertexId) -> Result<usize, NetlistError> {
    Ok(all_fan_in(netlist, end)?.len())
}
