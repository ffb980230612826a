//! Depth-first traversals recording parent maps for path reconstruction.

use std::collections::{BTreeMap, BTreeSet};

use np_core::{NetlistError, VertexId};
use np_graph::Netlist;

/// Map from a vertex to the parents recorded while searching towards it.
///
/// Tree-edge traversals record exactly one parent per reached vertex;
/// all-edge traversals record every examined edge, so a vertex may carry
/// several parents.
pub type ParentMap = BTreeMap<VertexId, Vec<VertexId>>;

/// Which adjacency the traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow edges from source to destination.
    Forward,
    /// Follow the transpose view, destination to source.
    Reverse,
}

fn neighbors<'a>(
    netlist: &'a Netlist,
    vertex: VertexId,
    direction: TraversalDirection,
) -> Result<&'a [VertexId], NetlistError> {
    match direction {
        TraversalDirection::Forward => netlist.out_neighbors(vertex),
        TraversalDirection::Reverse => netlist.in_neighbors(vertex),
    }
}

/// DFS from `root` following tree edges only: every vertex reached for
/// the first time records the single parent that discovered it.
/// Tombstoned vertices are not entered. Children are visited in
/// adjacency (insertion) order, so the traversal is reproducible.
pub fn dfs_tree(
    netlist: &Netlist,
    root: VertexId,
    direction: TraversalDirection,
) -> Result<ParentMap, NetlistError> {
    let mut visited = BTreeSet::new();
    let mut parents = ParentMap::new();
    visited.insert(root);
    visit_tree(netlist, root, direction, &mut visited, &mut parents)?;
    Ok(parents)
}

fn visit_tree(
    netlist: &Netlist,
    vertex: VertexId,
    direction: TraversalDirection,
    visited: &mut BTreeSet<VertexId>,
    parents: &mut ParentMap,
) -> Result<(), NetlistError> {
    for &next in neighbors(netlist, vertex, direction)? {
        if netlist.vertex(next)?.deleted || !visited.insert(next) {
            continue;
        }
        parents.entry(next).or_default().push(vertex);
        visit_tree(netlist, next, direction, visited, parents)?;
    }
    Ok(())
}

/// DFS from `root` recording every examined edge, so each reached vertex
/// carries the full set of tree and non-tree parents. Used by the
/// all-paths enumeration.
pub fn dfs_all_edges(
    netlist: &Netlist,
    root: VertexId,
    direction: TraversalDirection,
) -> Result<ParentMap, NetlistError> {
    let mut visited = BTreeSet::new();
    let mut parents = ParentMap::new();
    visited.insert(root);
    visit_all(netlist, root, direction, &mut visited, &mut parents)?;
    Ok(parents)
}

fn visit_all(
    netlist: &Netlist,
    vertex: VertexId,
    direction: TraversalDirection,
    visited: &mut BTreeSet<VertexId>,
    parents: &mut ParentMap,
) -> Result<(), NetlistError> {
    for &next in neighbors(netlist, vertex, direction)? {
        if netlist.vertex(next)?.deleted {
            continue;
        }
        parents.entry(next).or_default().push(vertex);
        if visited.insert(next) {
            visit_all(netlist, next, direction, visited, parents)?;
        }
    }
    Ok(())
}
