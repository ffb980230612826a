//! Path queries over a lowered netlist graph: fan-out, fan-in and
//! waypoint point-to-point searches, plus the stateful query facade.

mod dfs;
mod facade;
mod report;
mod search;
mod waypoints;

pub use dfs::{dfs_all_edges, dfs_tree, ParentMap, TraversalDirection};
pub use facade::NetlistPaths;
pub use report::{NameRow, PathRow, ReportOptions};
pub use search::{
    all_fan_in, all_fan_out, all_point_to_point, any_point_to_point, fan_in_degree,
    fan_out_degree, Path,
};
pub use waypoints::Waypoints;
