//! Ordered waypoint accumulation for point-to-point queries.

use np_core::errors::{ErrorInfo, NetlistError};
use np_core::VertexId;

fn waypoint_error(code: &str, message: &str) -> NetlistError {
    NetlistError::Waypoint(ErrorInfo::new(code, message))
}

/// An ordered list of path anchors.
///
/// The first anchor is the start point and the last the finish point;
/// anything between is a through point. Start and finish may each be set
/// once, through points accumulate just before the finish.
#[derive(Debug, Clone, Default)]
pub struct Waypoints {
    points: Vec<VertexId>,
    has_start: bool,
    has_finish: bool,
}

impl Waypoints {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the start anchor at the front of the list.
    pub fn add_start(&mut self, vertex: VertexId) -> Result<(), NetlistError> {
        if self.has_start {
            return Err(waypoint_error("start-defined", "start point already defined"));
        }
        self.has_start = true;
        if self.points.is_empty() {
            self.points.push(vertex);
        } else {
            self.points.insert(0, vertex);
        }
        Ok(())
    }

    /// Installs the finish anchor at the end of the list.
    pub fn add_finish(&mut self, vertex: VertexId) -> Result<(), NetlistError> {
        if self.has_finish {
            return Err(waypoint_error(
                "finish-defined",
                "finish point already defined",
            ));
        }
        self.has_finish = true;
        self.points.push(vertex);
        Ok(())
    }

    /// Adds a through anchor, keeping it before the finish when one is
    /// already set.
    pub fn add_through(&mut self, vertex: VertexId) {
        let at = self.points.len() - usize::from(self.has_finish);
        self.points.insert(at, vertex);
    }

    /// Drops every anchor.
    pub fn clear(&mut self) {
        self.points.clear();
        self.has_start = false;
        self.has_finish = false;
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no anchor is set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when anchors beyond start and finish are present.
    pub fn has_through(&self) -> bool {
        self.points.len() > usize::from(self.has_start) + usize::from(self.has_finish)
    }

    /// The anchors in query order.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.points
    }
}
