#![deny(missing_docs)]

//! Core identifiers, value objects and error types for the netlist-paths
//! engine.

use serde::{Deserialize, Serialize};

pub mod dtype;
pub mod errors;
pub mod location;
pub mod vertex;

pub use dtype::{DType, TypeTable};
pub use errors::{ErrorInfo, NetlistError};
pub use location::{FileTable, Location, SourceFile};
pub use vertex::{Vertex, VertexDirection, VertexKind};

/// Identifier for a vertex within a netlist graph.
///
/// Vertices are stored under dense indices. [`VertexId::NULL`] is the
/// sentinel value standing for "no vertex"; lookups that find nothing
/// return it rather than raising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// The null sentinel.
    pub const NULL: VertexId = VertexId(u32::MAX);

    /// Creates an identifier from its raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns true when this identifier is the null sentinel.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}
