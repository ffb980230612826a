//! Register source/destination splitting.
//!
//! Ingest promotes the target of a non-blocking write to REG_DST but the
//! same vertex still carries the edges feeding its readers. Splitting
//! gives every such register the classical two-sided shape: writes land
//! on the REG_DST side, reads leave from a synthesised REG_SRC twin, and
//! combinational reach is severed at the register boundary.

use log::info;
use np_core::{VertexId, VertexKind};

use crate::graph::Netlist;

/// Splits every promoted register that still has outgoing edges into a
/// REG_DST / REG_SRC pair, returning the number of twins created.
pub fn split_registers(netlist: &mut Netlist) -> usize {
    let candidates: Vec<VertexId> = netlist
        .vertices()
        .filter(|(id, vertex)| {
            vertex.kind == VertexKind::RegDst
                && !vertex.deleted
                && !netlist.records[id.as_raw() as usize].out_edges.is_empty()
        })
        .map(|(id, _)| id)
        .collect();

    for id in &candidates {
        let index = id.as_raw() as usize;
        let mut twin = netlist.records[index].vertex.clone();
        twin.kind = VertexKind::RegSrc;
        let twin_id = netlist.add_vertex(twin);

        // Re-originate the reads from the source twin; write edges stay.
        let out_edges = std::mem::take(&mut netlist.records[index].out_edges);
        for &dst in &out_edges {
            replace_one(
                &mut netlist.records[dst.as_raw() as usize].in_edges,
                *id,
                twin_id,
            );
        }
        netlist.records[twin_id.as_raw() as usize].out_edges = out_edges;
    }

    info!("split {} registers into src/dst pairs", candidates.len());
    candidates.len()
}

fn replace_one(edges: &mut [VertexId], from: VertexId, to: VertexId) {
    if let Some(entry) = edges.iter_mut().find(|edge| **edge == from) {
        *entry = to;
    }
}
