//! Duplicate vertex canonicalisation.
//!
//! Ingest may create several non-logic vertices that differ only by
//! declaration path while naming the same logical signal (hierarchical
//! port passthrough, alias assignments). The merge gives queries a single
//! anchor per name: duplicates are tombstoned and every edge touching a
//! duplicate is rewritten onto the surviving vertex first.

use log::info;
use np_core::VertexId;

use crate::graph::Netlist;

/// Merges structurally identical non-logic vertices, returning the number
/// of vertices tombstoned.
pub fn merge_duplicate_vertices(netlist: &mut Netlist) -> usize {
    let mut ids: Vec<VertexId> = netlist
        .vertices()
        .filter(|(_, vertex)| !vertex.is_logic())
        .map(|(id, _)| id)
        .collect();
    ids.sort_by(|a, b| {
        netlist.records[a.as_raw() as usize]
            .vertex
            .canonical_cmp(&netlist.records[b.as_raw() as usize].vertex)
    });

    let mut removed = 0;
    let mut survivor = match ids.first() {
        Some(first) => *first,
        None => return 0,
    };
    for &id in &ids[1..] {
        let equal = netlist.records[id.as_raw() as usize]
            .vertex
            .canonical_eq(&netlist.records[survivor.as_raw() as usize].vertex);
        if equal {
            redirect_edges(netlist, id, survivor);
            netlist.records[id.as_raw() as usize].vertex.deleted = true;
            removed += 1;
        } else {
            survivor = id;
        }
    }
    info!("removed {removed} duplicate vertices");
    removed
}

/// Rewrites every edge incident to `dup` so that it lands on `survivor`.
/// Handled symmetrically: outgoing edges are re-originated and incoming
/// edges are re-targeted before the duplicate is tombstoned.
fn redirect_edges(netlist: &mut Netlist, dup: VertexId, survivor: VertexId) {
    let dup_index = dup.as_raw() as usize;

    let out_edges = std::mem::take(&mut netlist.records[dup_index].out_edges);
    for dst in out_edges {
        remove_one(&mut netlist.records[dst.as_raw() as usize].in_edges, dup);
        netlist.num_edges -= 1;
        let dst = if dst == dup { survivor } else { dst };
        netlist.push_edge(survivor, dst);
    }

    let in_edges = std::mem::take(&mut netlist.records[dup_index].in_edges);
    for src in in_edges {
        remove_one(&mut netlist.records[src.as_raw() as usize].out_edges, dup);
        netlist.num_edges -= 1;
        let src = if src == dup { survivor } else { src };
        netlist.push_edge(src, survivor);
    }
}

fn remove_one(edges: &mut Vec<VertexId>, id: VertexId) {
    if let Some(position) = edges.iter().position(|&edge| edge == id) {
        edges.remove(position);
    }
}
