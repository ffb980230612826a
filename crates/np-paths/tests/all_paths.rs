mod common;

use common::facade;
use std::collections::BTreeSet;

/// A diamond: both halves of `o_y` are driven from `i_x` through two
/// separate intermediate wires.
fn diamond_xml() -> String {
    r#"<verilator_xml>
  <files>
    <file id="a" filename="rtl/diamond.sv" language="1800-2012"/>
  </files>
  <netlist>
    <module name="TOP" loc="a,1,1,12,10">
      <topscope loc="a,1,1,12,10">
        <scope name="diamond" loc="a,1,1,12,10">
          <var name="diamond.i_x" dir="input" dtype_id="1" loc="a,2,3,2,17"/>
          <var name="diamond.o_y" dir="output" dtype_id="1" loc="a,3,3,3,18"/>
          <var name="diamond.w_a" dtype_id="1" loc="a,4,3,4,16"/>
          <var name="diamond.w_b" dtype_id="1" loc="a,5,3,5,16"/>
          <contassign loc="a,6,3,6,24">
            <varref name="diamond.i_x" dtype_id="1" loc="a,6,18,6,21"/>
            <varref name="diamond.w_a" dtype_id="1" loc="a,6,10,6,13"/>
          </contassign>
          <contassign loc="a,7,3,7,24">
            <varref name="diamond.i_x" dtype_id="1" loc="a,7,18,7,21"/>
            <varref name="diamond.w_b" dtype_id="1" loc="a,7,10,7,13"/>
          </contassign>
          <contassign loc="a,8,3,8,30">
            <xor loc="a,8,18,8,30">
              <varref name="diamond.w_a" dtype_id="1" loc="a,8,18,8,21"/>
              <varref name="diamond.w_b" dtype_id="1" loc="a,8,24,8,27"/>
            </xor>
            <varref name="diamond.o_y" dtype_id="1" loc="a,8,10,8,13"/>
          </contassign>
        </scope>
      </topscope>
    </module>
    <typetable>
      <basicdtype id="1" name="logic" loc="a,2,3,2,17"/>
    </typetable>
  </netlist>
</verilator_xml>
"#
    .to_string()
}

#[test]
fn all_paths_enumerates_both_diamond_arms() {
    let mut paths = facade(&diamond_xml());
    paths.add_startpoint("diamond.i_x").unwrap();
    paths.add_finishpoint("diamond.o_y").unwrap();
    let found = paths.get_all_paths_through_waypoints().unwrap();
    assert_eq!(found.len(), 2);

    let mut wires = BTreeSet::new();
    for path in &found {
        // Paths are simple directed walks from start to finish.
        assert_eq!(paths.vertex_name(path[0]).unwrap(), "diamond.i_x");
        assert_eq!(
            paths.vertex_name(path[path.len() - 1]).unwrap(),
            "diamond.o_y"
        );
        let unique: BTreeSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
        for window in path.windows(2) {
            assert!(paths
                .netlist()
                .out_neighbors(window[0])
                .unwrap()
                .contains(&window[1]));
        }
        for &vertex in path {
            let name = paths.vertex_name(vertex).unwrap();
            if name.starts_with("diamond.w_") {
                wires.insert(name.to_string());
            }
        }
    }
    // One arm per intermediate wire.
    assert_eq!(wires.len(), 2);
}

#[test]
fn all_paths_rejects_through_points() {
    let mut paths = facade(&diamond_xml());
    paths.add_startpoint("diamond.i_x").unwrap();
    paths.add_throughpoint("diamond.w_a").unwrap();
    paths.add_finishpoint("diamond.o_y").unwrap();
    let err = paths.get_all_paths_through_waypoints().unwrap_err();
    assert_eq!(err.payload().code, "through-unsupported");
}

#[test]
fn all_paths_is_empty_when_disconnected() {
    let mut paths = facade(&diamond_xml());
    paths.add_startpoint("diamond.i_x").unwrap();
    paths.add_finishpoint("diamond.o_y").unwrap();
    let found = paths.get_all_paths_through_waypoints().unwrap();
    assert!(!found.is_empty());

    // Reversed direction has no paths at all.
    assert!(!paths.path_exists("diamond.o_y", "diamond.i_x"));
}
