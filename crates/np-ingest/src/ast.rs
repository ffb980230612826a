//! Classification of the elaborator's XML element names.

/// Recognised XML element kinds.
///
/// Anything the table does not know degrades to [`AstNode::Other`], which
/// the walker treats as a transparent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstNode {
    /// `always` block.
    Always,
    /// Public `always` block kept through inlining.
    AlwaysPublic,
    /// Blocking assignment.
    Assign,
    /// Alias assignment introduced by inlining.
    AssignAlias,
    /// Non-blocking (delayed) assignment.
    AssignDly,
    /// Wire assignment.
    AssignW,
    /// Scalar type declaration.
    BasicDType,
    /// Literal constant.
    Const,
    /// Continuous assignment.
    ContAssign,
    /// Generated C function.
    CFunc,
    /// `initial` block.
    Initial,
    /// Module definition.
    Module,
    /// Packed array type declaration.
    PackedArrayDType,
    /// Literal range.
    Range,
    /// Type alias declaration.
    RefDType,
    /// Hierarchical scope.
    Scope,
    /// Gated sensitivity expression.
    SenGate,
    /// Sensitivity list item.
    SenItem,
    /// Struct type declaration.
    StructDType,
    /// Top level scope.
    TopScope,
    /// Type table container.
    TypeTable,
    /// Unpacked array type declaration.
    UnpackedArrayDType,
    /// Variable declaration.
    Var,
    /// Variable reference.
    VarRef,
    /// Scoped variable marker.
    VarScope,
    /// Anything else.
    Other,
}

/// Maps an element name to its kind.
pub fn resolve_node(name: &str) -> AstNode {
    match name {
        "always" => AstNode::Always,
        "alwayspublic" => AstNode::AlwaysPublic,
        "assign" => AstNode::Assign,
        "assignalias" => AstNode::AssignAlias,
        "assigndly" => AstNode::AssignDly,
        "assignw" => AstNode::AssignW,
        "basicdtype" => AstNode::BasicDType,
        "cfunc" => AstNode::CFunc,
        "const" => AstNode::Const,
        "contassign" => AstNode::ContAssign,
        "initial" => AstNode::Initial,
        "module" => AstNode::Module,
        "packarraydtype" => AstNode::PackedArrayDType,
        "range" => AstNode::Range,
        "refdtype" => AstNode::RefDType,
        "scope" => AstNode::Scope,
        "sengate" => AstNode::SenGate,
        "senitem" => AstNode::SenItem,
        "structdtype" => AstNode::StructDType,
        "topscope" => AstNode::TopScope,
        "typetable" => AstNode::TypeTable,
        "unpackarraydtype" => AstNode::UnpackedArrayDType,
        "var" => AstNode::Var,
        "varref" => AstNode::VarRef,
        "varscope" => AstNode::VarScope,
        _ => AstNode::Other,
    }
}
