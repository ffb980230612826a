//! Data type descriptors interned from the elaborator's type table.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A resolved type descriptor.
///
/// Descriptors are created once per emitted type table id and shared by
/// reference across every vertex that cites them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DType {
    /// Scalar type with an optional bit range.
    Basic {
        /// Type name, e.g. `logic`.
        name: String,
        /// Declaration site.
        loc: Location,
        /// Most significant bit of the range, when ranged.
        left: Option<i64>,
        /// Least significant bit of the range, when ranged.
        right: Option<i64>,
    },
    /// Alias referring to another named type.
    Ref {
        /// Name of the referenced type.
        name: String,
        /// Declaration site.
        loc: Location,
    },
    /// Packed or unpacked array over a literal range.
    Array {
        /// Label of the element type.
        elem: String,
        /// Declaration site.
        loc: Location,
        /// Left (most significant) bound of the range.
        hi: i64,
        /// Right (least significant) bound of the range.
        lo: i64,
        /// True for packed arrays.
        packed: bool,
    },
    /// Aggregate of named fields.
    Struct {
        /// Declaration site.
        loc: Location,
        /// Member names paired with their emitted type ids.
        fields: Vec<(String, String)>,
    },
}

impl DType {
    /// Short human readable label used in name listings.
    pub fn label(&self) -> String {
        match self {
            DType::Basic {
                name,
                left: Some(left),
                right: Some(right),
                ..
            } => format!("{name} [{left}:{right}]"),
            DType::Basic { name, .. } => name.clone(),
            DType::Ref { name, .. } => name.clone(),
            DType::Array {
                elem,
                hi,
                lo,
                packed: true,
                ..
            } => format!("packed [{hi}:{lo}] of {elem}"),
            DType::Array { elem, hi, lo, .. } => format!("unpacked [{hi}:{lo}] of {elem}"),
            DType::Struct { fields, .. } => format!("struct of {} fields", fields.len()),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Intern table mapping an emitted type id to its descriptor.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    dtypes: BTreeMap<String, Arc<DType>>,
}

impl TypeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a descriptor under the emitted id and returns the shared
    /// handle.
    pub fn insert(&mut self, id: impl Into<String>, dtype: DType) -> Arc<DType> {
        let shared = Arc::new(dtype);
        self.dtypes.insert(id.into(), Arc::clone(&shared));
        shared
    }

    /// Looks up the descriptor interned under `id`.
    pub fn lookup(&self, id: &str) -> Option<Arc<DType>> {
        self.dtypes.get(id).cloned()
    }

    /// Returns the number of interned descriptors.
    pub fn len(&self) -> usize {
        self.dtypes.len()
    }

    /// Returns true when the table holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.dtypes.is_empty()
    }
}
