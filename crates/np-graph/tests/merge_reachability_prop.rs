use std::collections::{BTreeMap, BTreeSet};

use np_core::{Location, VertexDirection, VertexId, VertexKind};
use np_graph::{merge_duplicate_vertices, Netlist};
use proptest::prelude::*;

/// Builds a netlist with `copies[i]` duplicate vertices for signal `i`
/// and the given edges over the flattened copy indices.
fn build(copies: &[usize], edges: &[(usize, usize)]) -> (Netlist, Vec<Vec<VertexId>>) {
    let mut netlist = Netlist::new();
    let mut groups = Vec::new();
    for (signal, &count) in copies.iter().enumerate() {
        let mut group = Vec::new();
        for _ in 0..count {
            group.push(netlist.add_var_vertex(
                VertexKind::Var,
                VertexDirection::None,
                Location::parse(&format!("a,{signal},1,{signal},9")).unwrap(),
                None,
                format!("m.v{signal}"),
                false,
                None,
            ));
        }
        groups.push(group);
    }
    let all: Vec<VertexId> = groups.iter().flatten().copied().collect();
    for &(src, dst) in edges {
        let src = all[src % all.len()];
        let dst = all[dst % all.len()];
        netlist.add_edge(src, dst).unwrap();
    }
    (netlist, groups)
}

/// Reachability between signals in the pre-merge graph, with every copy
/// of a signal identified: this is what the merged graph must preserve.
fn signal_reachable(
    netlist: &Netlist,
    groups: &[Vec<VertexId>],
    owner: &BTreeMap<VertexId, usize>,
    from: usize,
    to: usize,
) -> bool {
    let mut seen = BTreeSet::new();
    let mut stack = vec![from];
    while let Some(signal) = stack.pop() {
        if signal == to {
            return true;
        }
        if !seen.insert(signal) {
            continue;
        }
        for &copy in &groups[signal] {
            for next in netlist.out_neighbors(copy).unwrap() {
                stack.push(owner[next]);
            }
        }
    }
    false
}

fn vertex_reachable(netlist: &Netlist, from: VertexId, to: VertexId) -> bool {
    let mut seen = BTreeSet::new();
    let mut stack = vec![from];
    while let Some(vertex) = stack.pop() {
        if vertex == to {
            return true;
        }
        if !seen.insert(vertex) {
            continue;
        }
        for &next in netlist.out_neighbors(vertex).unwrap() {
            if !netlist.vertex(next).unwrap().deleted {
                stack.push(next);
            }
        }
    }
    false
}

fn survivor(netlist: &Netlist, group: &[VertexId]) -> VertexId {
    group
        .iter()
        .copied()
        .find(|&id| !netlist.vertex(id).unwrap().deleted)
        .expect("every group keeps a survivor")
}

proptest! {
    #[test]
    fn merge_preserves_signal_reachability(
        copies in prop::collection::vec(1usize..4, 2..5),
        edges in prop::collection::vec((0usize..64, 0usize..64), 0..24),
    ) {
        let (mut netlist, groups) = build(&copies, &edges);
        let mut owner = BTreeMap::new();
        for (signal, group) in groups.iter().enumerate() {
            for &copy in group {
                owner.insert(copy, signal);
            }
        }
        let before: Vec<Vec<bool>> = (0..groups.len())
            .map(|from| {
                (0..groups.len())
                    .map(|to| signal_reachable(&netlist, &groups, &owner, from, to))
                    .collect()
            })
            .collect();

        merge_duplicate_vertices(&mut netlist);

        for (i, from) in groups.iter().enumerate() {
            let from = survivor(&netlist, from);
            for (j, to) in groups.iter().enumerate() {
                let to = survivor(&netlist, to);
                prop_assert_eq!(
                    before[i][j],
                    vertex_reachable(&netlist, from, to),
                    "signal v{} -> v{}", i, j
                );
            }
        }
    }
}
