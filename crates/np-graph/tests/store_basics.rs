use np_core::{Location, NetlistError, VertexDirection, VertexId, VertexKind};
use np_graph::Netlist;

fn loc(line: u32) -> Location {
    Location::parse(&format!("a,{line},1,{line},9")).unwrap()
}

fn add_var(netlist: &mut Netlist, name: &str, line: u32) -> VertexId {
    netlist.add_var_vertex(
        VertexKind::Var,
        VertexDirection::None,
        loc(line),
        None,
        name,
        false,
        None,
    )
}

#[test]
fn edges_keep_insertion_order_and_parallels() {
    let mut netlist = Netlist::new();
    let a = add_var(&mut netlist, "m.a", 1);
    let b = add_var(&mut netlist, "m.b", 2);
    let c = add_var(&mut netlist, "m.c", 3);

    netlist.add_edge(a, c).unwrap();
    netlist.add_edge(a, b).unwrap();
    netlist.add_edge(a, b).unwrap();

    assert_eq!(netlist.out_neighbors(a).unwrap(), &[c, b, b]);
    assert_eq!(netlist.in_neighbors(b).unwrap(), &[a, a]);
    assert_eq!(netlist.out_degree(a).unwrap(), 3);
    assert_eq!(netlist.in_degree(c).unwrap(), 1);
    assert_eq!(netlist.num_vertices(), 3);
    assert_eq!(netlist.num_edges(), 3);
}

#[test]
fn unknown_and_null_vertices_are_rejected() {
    let mut netlist = Netlist::new();
    let a = add_var(&mut netlist, "m.a", 1);

    let err = netlist.vertex(VertexId::from_raw(7)).unwrap_err();
    match err {
        NetlistError::Graph(info) => {
            assert_eq!(info.code, "unknown-vertex");
            assert_eq!(info.find("vertex"), Some("7"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(netlist.add_edge(a, VertexId::NULL).is_err());
    assert!(netlist.out_neighbors(VertexId::NULL).is_err());
}

#[test]
fn register_promotion_changes_kind_only_for_vars() {
    let mut netlist = Netlist::new();
    let q = add_var(&mut netlist, "m.q", 1);
    let logic = netlist.add_logic_vertex(VertexKind::Always, loc(2));

    netlist.set_vertex_reg(q).unwrap();
    assert_eq!(netlist.vertex(q).unwrap().kind, VertexKind::RegDst);

    let err = netlist.set_vertex_reg(logic).unwrap_err();
    assert_eq!(err.payload().code, "promote-logic");
}

#[test]
fn names_listing_filters_and_sorts() {
    let mut netlist = Netlist::new();
    let b = add_var(&mut netlist, "m.b", 2);
    let a = add_var(&mut netlist, "m.a", 1);
    let tmp = add_var(&mut netlist, "m.__Vdly__a", 3);
    let dst = add_var(&mut netlist, "m.q", 4);
    netlist.set_vertex_reg(dst).unwrap();
    let src = netlist.add_var_vertex(
        VertexKind::RegSrc,
        VertexDirection::None,
        loc(4),
        None,
        "m.q",
        false,
        None,
    );
    netlist.add_logic_vertex(VertexKind::Assign, loc(5));

    // Logic, elaborator temporaries and the source side of a register are
    // all hidden from listings.
    let names = netlist.get_names();
    assert_eq!(names, vec![a, b, dst]);
    assert!(!names.contains(&tmp));
    assert!(!names.contains(&src));
}
