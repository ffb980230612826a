//! The per-vertex value object and its role predicates.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dtype::DType;
use crate::location::Location;

/// AST kind attached to every vertex.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VertexKind {
    /// Generic logic expression.
    Logic,
    /// Blocking procedural assignment.
    Assign,
    /// Alias assignment introduced by inlining.
    AssignAlias,
    /// Non-blocking (delayed) assignment.
    AssignDly,
    /// Continuous wire assignment.
    AssignW,
    /// An `always` block.
    Always,
    /// An `initial` block.
    Initial,
    /// Source side of a clocked register.
    RegSrc,
    /// Destination side of a clocked register.
    RegDst,
    /// Gated sensitivity expression.
    SenGate,
    /// Sensitivity list item.
    SenItem,
    /// Named variable.
    Var,
    /// Named wire.
    Wire,
    /// Named port.
    Port,
    /// Generated C function body.
    CFunc,
}

impl VertexKind {
    /// Parses the canonical upper case kind name.
    pub fn parse(name: &str) -> Option<VertexKind> {
        match name {
            "LOGIC" => Some(VertexKind::Logic),
            "ASSIGN" => Some(VertexKind::Assign),
            "ASSIGN_ALIAS" => Some(VertexKind::AssignAlias),
            "ASSIGN_DLY" => Some(VertexKind::AssignDly),
            "ASSIGN_W" => Some(VertexKind::AssignW),
            "ALWAYS" => Some(VertexKind::Always),
            "INITIAL" => Some(VertexKind::Initial),
            "REG_SRC" => Some(VertexKind::RegSrc),
            "REG_DST" => Some(VertexKind::RegDst),
            "SEN_GATE" => Some(VertexKind::SenGate),
            "SEN_ITEM" => Some(VertexKind::SenItem),
            "VAR" => Some(VertexKind::Var),
            "WIRE" => Some(VertexKind::Wire),
            "PORT" => Some(VertexKind::Port),
            "C_FUNC" => Some(VertexKind::CFunc),
            _ => None,
        }
    }

    /// Returns the canonical upper case kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Logic => "LOGIC",
            VertexKind::Assign => "ASSIGN",
            VertexKind::AssignAlias => "ASSIGN_ALIAS",
            VertexKind::AssignDly => "ASSIGN_DLY",
            VertexKind::AssignW => "ASSIGN_W",
            VertexKind::Always => "ALWAYS",
            VertexKind::Initial => "INITIAL",
            VertexKind::RegSrc => "REG_SRC",
            VertexKind::RegDst => "REG_DST",
            VertexKind::SenGate => "SEN_GATE",
            VertexKind::SenItem => "SEN_ITEM",
            VertexKind::Var => "VAR",
            VertexKind::Wire => "WIRE",
            VertexKind::Port => "PORT",
            VertexKind::CFunc => "C_FUNC",
        }
    }
}

/// Port direction of a variable vertex.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VertexDirection {
    /// Not a port, or direction unknown.
    #[default]
    None,
    /// Input port.
    Input,
    /// Output port.
    Output,
    /// Bidirectional port.
    Inout,
}

impl VertexDirection {
    /// Parses the lower case direction attribute; anything unrecognised
    /// maps to [`VertexDirection::None`].
    pub fn parse(direction: &str) -> VertexDirection {
        match direction {
            "input" => VertexDirection::Input,
            "output" => VertexDirection::Output,
            "inout" => VertexDirection::Inout,
            _ => VertexDirection::None,
        }
    }

    /// Returns the canonical upper case direction name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexDirection::None => "NONE",
            VertexDirection::Input => "INPUT",
            VertexDirection::Output => "OUTPUT",
            VertexDirection::Inout => "INOUT",
        }
    }
}

/// Name markers the elaborator introduces for internal temporaries.
const IGNORED_MARKERS: [&str; 3] = ["__Vdly", "__Vcell", "__Vconc"];

/// True when the dotted name has fewer than three components, i.e. the
/// variable belongs to the top module rather than a submodule.
pub fn determine_is_top(name: &str) -> bool {
    name.split('.').count() < 3
}

/// A vertex in the netlist graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// AST kind.
    pub kind: VertexKind,
    /// Port direction; `None` for non-ports and logic.
    pub direction: VertexDirection,
    /// Declaration or statement site.
    pub location: Location,
    /// Resolved type descriptor, shared with the type table.
    pub dtype: Option<Arc<DType>>,
    /// Fully qualified dotted name; empty for anonymous logic.
    pub name: String,
    /// True when the variable is a parameter.
    pub is_param: bool,
    /// Literal value of a parameter, when known.
    pub param_value: Option<String>,
    /// True when the name has at most two dotted components.
    pub is_top: bool,
    /// Tombstone set by the duplicate merge.
    pub deleted: bool,
}

impl Vertex {
    /// Creates an anonymous logic vertex.
    pub fn logic(kind: VertexKind, location: Location) -> Self {
        Self {
            kind,
            direction: VertexDirection::None,
            location,
            dtype: None,
            name: String::new(),
            is_param: false,
            param_value: None,
            is_top: false,
            deleted: false,
        }
    }

    /// Creates a named variable vertex.
    pub fn var(
        kind: VertexKind,
        direction: VertexDirection,
        location: Location,
        dtype: Option<Arc<DType>>,
        name: impl Into<String>,
        is_param: bool,
        param_value: Option<String>,
    ) -> Self {
        let name = name.into();
        let is_top = determine_is_top(&name);
        Self {
            kind,
            direction,
            location,
            dtype,
            name,
            is_param,
            param_value,
            is_top,
            deleted: false,
        }
    }

    /// True for statement-level expression vertices.
    pub fn is_logic(&self) -> bool {
        matches!(
            self.kind,
            VertexKind::Logic
                | VertexKind::Assign
                | VertexKind::AssignAlias
                | VertexKind::AssignDly
                | VertexKind::AssignW
                | VertexKind::Always
                | VertexKind::Initial
                | VertexKind::SenGate
                | VertexKind::SenItem
        )
    }

    /// True for either side of a clocked register.
    pub fn is_reg(&self) -> bool {
        !self.deleted && matches!(self.kind, VertexKind::RegSrc | VertexKind::RegDst)
    }

    /// True for the source side of a clocked register.
    pub fn is_src_reg(&self) -> bool {
        !self.deleted && self.kind == VertexKind::RegSrc
    }

    /// True when a combinational path may originate here.
    pub fn is_start_point(&self) -> bool {
        !self.deleted
            && (self.kind == VertexKind::RegSrc
                || (self.is_top
                    && matches!(
                        self.direction,
                        VertexDirection::Input | VertexDirection::Inout
                    )))
    }

    /// True when a combinational path may terminate here.
    pub fn is_end_point(&self) -> bool {
        !self.deleted
            && (self.kind == VertexKind::RegDst
                || (self.is_top
                    && matches!(
                        self.direction,
                        VertexDirection::Output | VertexDirection::Inout
                    )))
    }

    /// True for named signals a path may pass through.
    pub fn is_mid_point(&self) -> bool {
        !self.deleted
            && matches!(
                self.kind,
                VertexKind::Var | VertexKind::Wire | VertexKind::Port
            )
    }

    /// True for elaborator-introduced temporaries suppressed from user
    /// visible listings.
    pub fn can_ignore(&self) -> bool {
        IGNORED_MARKERS
            .iter()
            .any(|marker| self.name.contains(marker))
    }

    /// Total order used by the duplicate merge so that equal vertices sort
    /// adjacently.
    pub fn canonical_cmp(&self, other: &Vertex) -> Ordering {
        self.deleted
            .cmp(&other.deleted)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.direction.cmp(&other.direction))
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.dtype.as_deref().cmp(&other.dtype.as_deref()))
    }

    /// Equivalence used by the duplicate merge.
    pub fn canonical_eq(&self, other: &Vertex) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.direction == other.direction
            && self.location == other.location
            && self.dtype.as_deref() == other.dtype.as_deref()
            && self.is_param == other.is_param
            && self.param_value == other.param_value
            && self.is_top == other.is_top
            && self.deleted == other.deleted
    }
}
