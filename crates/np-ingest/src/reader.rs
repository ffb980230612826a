//! Recursive visitor lowering the elaborator's XML dump to a graph.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use np_core::errors::{ErrorInfo, NetlistError};
use np_core::{DType, Location, SourceFile, VertexDirection, VertexId, VertexKind};
use np_graph::Netlist;
use roxmltree::{Document, Node};

use crate::ast::{resolve_node, AstNode};

fn input_error(detail: impl Into<String>) -> NetlistError {
    NetlistError::Input(ErrorInfo::new("input-open", detail))
}

fn malformed(code: &str, detail: impl Into<String>) -> NetlistError {
    NetlistError::Malformed(ErrorInfo::new(code, detail))
}

fn reference_error(name: &str) -> NetlistError {
    NetlistError::Reference(
        ErrorInfo::new("ref-undeclared", "reference has no declaration")
            .detail("name", name)
            .hint("references resolve by suffix against declared variable names"),
    )
}

fn req_attr(node: Node, name: &str) -> Result<String, NetlistError> {
    node.attribute(name).map(str::to_string).ok_or_else(|| {
        malformed("missing-attribute", "required attribute is missing")
            .map_info(|info| {
                info.detail("attribute", name)
                    .detail("element", node.tag_name().name())
            })
    })
}

trait MapInfo {
    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> NetlistError;
}

impl MapInfo for NetlistError {
    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> NetlistError {
        match self {
            NetlistError::Malformed(info) => NetlistError::Malformed(f(info)),
            other => other,
        }
    }
}

/// Reads the XML netlist dump at `path` and lowers it to a graph.
pub fn read_xml(path: impl AsRef<Path>) -> Result<Netlist, NetlistError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|err| input_error(format!("failed to open {}: {err}", path.display())))?;
    read_xml_str(&text)
}

/// Lowers an already-loaded XML document to a graph.
pub fn read_xml_str(text: &str) -> Result<Netlist, NetlistError> {
    XmlReader::default().read(text)
}

/// Walker state threaded through the recursive descent.
///
/// Scope and logic parents are tracked as stacks so that nested scopes
/// and statements restore correctly on exit; the l-value and delayed
/// flags are toggled around assignment children.
#[derive(Debug, Default)]
struct XmlReader {
    current_scope: Option<String>,
    scope_stack: Vec<Option<String>>,
    current_logic: Option<VertexId>,
    logic_stack: Vec<Option<VertexId>>,
    is_delayed_assign: bool,
    is_l_value: bool,
    /// Declared variables in declaration order, keyed by qualified name.
    vars: Vec<(String, VertexId)>,
    netlist: Netlist,
}

impl XmlReader {
    fn read(mut self, text: &str) -> Result<Netlist, NetlistError> {
        info!("parsing input XML");
        let doc = Document::parse(text)
            .map_err(|err| malformed("xml-parse", format!("document does not parse: {err}")))?;
        let root = doc.root_element();
        if root.tag_name().name() != "verilator_xml" {
            return Err(malformed(
                "missing-root",
                "expected a verilator_xml root element",
            ));
        }

        if let Some(files) = find_child(root, "files") {
            self.visit_files(files)?;
        }

        let netlist_node = find_child(root, "netlist")
            .ok_or_else(|| malformed("missing-netlist", "no netlist element under the root"))?;

        // Types are interned before the module walk so that variable
        // declarations can resolve their dtype ids.
        if let Some(type_table) = find_child(netlist_node, "typetable") {
            self.visit_type_table(type_table)?;
        }

        let module = find_child(netlist_node, "module")
            .ok_or_else(|| malformed("missing-top", "no module under the netlist"))?;
        if module.attribute("name") != Some("TOP") {
            return Err(malformed("missing-top", "top module is not named TOP"));
        }
        self.iterate_children(module)?;

        info!(
            "netlist contains {} vertices and {} edges",
            self.netlist.num_vertices(),
            self.netlist.num_edges()
        );
        Ok(self.netlist)
    }

    fn visit_files(&mut self, node: Node) -> Result<(), NetlistError> {
        for file in element_children(node).filter(|n| n.tag_name().name() == "file") {
            self.netlist.files_mut().insert(SourceFile {
                id: req_attr(file, "id")?,
                filename: req_attr(file, "filename")?,
                language: req_attr(file, "language")?,
            });
        }
        Ok(())
    }

    fn visit_type_table(&mut self, node: Node) -> Result<(), NetlistError> {
        for child in element_children(node) {
            match resolve_node(child.tag_name().name()) {
                AstNode::BasicDType => {
                    let id = req_attr(child, "id")?;
                    let dtype = DType::Basic {
                        name: req_attr(child, "name")?,
                        loc: parse_loc(child)?,
                        left: child.attribute("left").and_then(|v| v.parse().ok()),
                        right: child.attribute("right").and_then(|v| v.parse().ok()),
                    };
                    self.netlist.dtypes_mut().insert(id, dtype);
                }
                AstNode::RefDType => {
                    let id = req_attr(child, "id")?;
                    let dtype = DType::Ref {
                        name: req_attr(child, "name")?,
                        loc: parse_loc(child)?,
                    };
                    self.netlist.dtypes_mut().insert(id, dtype);
                }
                AstNode::PackedArrayDType | AstNode::UnpackedArrayDType => {
                    let id = req_attr(child, "id")?;
                    let packed =
                        resolve_node(child.tag_name().name()) == AstNode::PackedArrayDType;
                    let (hi, lo) = self.parse_range(child)?;
                    let elem = child
                        .attribute("name")
                        .or_else(|| child.attribute("sub_dtype_id"))
                        .unwrap_or_default()
                        .to_string();
                    let dtype = DType::Array {
                        elem,
                        loc: parse_loc(child)?,
                        hi,
                        lo,
                        packed,
                    };
                    self.netlist.dtypes_mut().insert(id, dtype);
                }
                AstNode::StructDType => {
                    let id = req_attr(child, "id")?;
                    let fields = element_children(child)
                        .map(|member| {
                            (
                                member.attribute("name").unwrap_or_default().to_string(),
                                member
                                    .attribute("sub_dtype_id")
                                    .unwrap_or_default()
                                    .to_string(),
                            )
                        })
                        .collect();
                    let dtype = DType::Struct {
                        loc: parse_loc(child)?,
                        fields,
                    };
                    self.netlist.dtypes_mut().insert(id, dtype);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Extracts the literal bounds from the single range child of an
    /// array type declaration.
    fn parse_range(&mut self, node: Node) -> Result<(i64, i64), NetlistError> {
        let range = element_children(node)
            .find(|n| resolve_node(n.tag_name().name()) == AstNode::Range)
            .ok_or_else(|| malformed("range-missing", "array type without a range child"))?;
        let mut bounds = element_children(range)
            .filter(|n| resolve_node(n.tag_name().name()) == AstNode::Const)
            .map(|n| req_attr(n, "name"));
        let hi = parse_bound(bounds.next(), node)?;
        let lo = parse_bound(bounds.next(), node)?;
        Ok((hi, lo))
    }

    fn dispatch(&mut self, node: Node) -> Result<(), NetlistError> {
        match resolve_node(node.tag_name().name()) {
            AstNode::Always | AstNode::AlwaysPublic => {
                self.new_statement(node, VertexKind::Always)
            }
            AstNode::Assign => self.new_statement(node, VertexKind::Assign),
            AstNode::AssignAlias => self.new_statement(node, VertexKind::AssignAlias),
            AstNode::AssignDly => self.visit_assign_dly(node),
            AstNode::AssignW | AstNode::ContAssign => {
                self.new_statement(node, VertexKind::AssignW)
            }
            AstNode::CFunc => self.new_statement(node, VertexKind::CFunc),
            AstNode::Initial => self.new_statement(node, VertexKind::Initial),
            AstNode::SenGate => self.new_statement(node, VertexKind::SenGate),
            AstNode::SenItem => self.visit_sen_item(node),
            AstNode::Scope | AstNode::TopScope => self.visit_scope(node),
            AstNode::Var => self.visit_var(node),
            AstNode::VarRef => self.visit_var_ref(node),
            _ => self.iterate_children(node),
        }
    }

    fn iterate_children(&mut self, node: Node) -> Result<(), NetlistError> {
        for child in element_children(node) {
            self.dispatch(child)?;
        }
        Ok(())
    }

    fn visit_scope(&mut self, node: Node) -> Result<(), NetlistError> {
        let name = node.attribute("name").unwrap_or_default().to_string();
        debug!("entering scope {name}");
        self.scope_stack.push(self.current_scope.take());
        self.current_scope = Some(name);
        let result = self.iterate_children(node);
        self.current_scope = self.scope_stack.pop().flatten();
        result
    }

    fn new_statement(&mut self, node: Node, kind: VertexKind) -> Result<(), NetlistError> {
        // A statement needs a scope for its variable references to live in.
        if self.current_scope.is_none() {
            debug!("skipping {} outside any scope", node.tag_name().name());
            return Ok(());
        }
        debug!("new statement {}", kind.as_str());
        let vertex = self
            .netlist
            .add_logic_vertex(kind, parse_loc(node)?);
        let parent = self.current_logic.replace(vertex);
        self.logic_stack.push(parent);
        if let Some(parent) = parent {
            self.netlist.add_edge(parent, vertex)?;
        }
        let result = if is_assignment(kind) {
            self.visit_assign_children(node)
        } else {
            self.iterate_children(node)
        };
        self.current_logic = self.logic_stack.pop().flatten();
        result
    }

    /// Assignments are binary: the r-value comes first, the l-value
    /// second, and the flag distinguishes the two descents.
    fn visit_assign_children(&mut self, node: Node) -> Result<(), NetlistError> {
        let children: Vec<Node> = element_children(node).collect();
        if children.len() != 2 {
            return Err(malformed(
                "assign-arity",
                "assignment does not have exactly two children",
            )
            .map_info(|info| {
                info.detail("element", node.tag_name().name())
                    .detail("children", children.len().to_string())
            }));
        }
        self.is_l_value = false;
        self.dispatch(children[0])?;
        self.is_l_value = true;
        let result = self.dispatch(children[1]);
        self.is_l_value = false;
        result
    }

    fn visit_assign_dly(&mut self, node: Node) -> Result<(), NetlistError> {
        let saved = self.is_delayed_assign;
        self.is_delayed_assign = true;
        let result = self.new_statement(node, VertexKind::AssignDly);
        self.is_delayed_assign = saved;
        result
    }

    /// A sensitivity item under a logic block is a transparent container;
    /// a free-standing one becomes its own statement vertex.
    fn visit_sen_item(&mut self, node: Node) -> Result<(), NetlistError> {
        if self.current_logic.is_some() {
            self.iterate_children(node)
        } else {
            self.new_statement(node, VertexKind::SenItem)
        }
    }

    fn visit_var(&mut self, node: Node) -> Result<(), NetlistError> {
        let name = req_attr(node, "name")?;
        let location = parse_loc(node)?;
        let direction = VertexDirection::parse(node.attribute("dir").unwrap_or_default());
        let dtype = node
            .attribute("dtype_id")
            .and_then(|id| self.netlist.dtypes().lookup(id));

        let is_param = node.attribute("param").is_some();
        let mut param_value = None;
        if is_param {
            if let Some(child) = element_children(node).next() {
                if resolve_node(child.tag_name().name()) != AstNode::Const {
                    return Err(malformed(
                        "param-const",
                        "parameter value must be a const node",
                    )
                    .map_info(|info| info.detail("name", name.as_str())));
                }
                param_value = Some(req_attr(child, "name")?);
            }
        }

        let vertex = self.netlist.add_var_vertex(
            VertexKind::Var,
            direction,
            location,
            dtype,
            name.clone(),
            is_param,
            param_value,
        );
        self.vars.push((name, vertex));
        Ok(())
    }

    fn visit_var_ref(&mut self, node: Node) -> Result<(), NetlistError> {
        if self.current_scope.is_none() {
            return Ok(());
        }
        let name = req_attr(node, "name")?;
        let logic = self.current_logic.ok_or_else(|| {
            malformed("varref-context", "variable reference is not under a logic block")
                .map_info(|info| info.detail("name", name.as_str()))
        })?;
        let target = self.lookup_var(&name).ok_or_else(|| reference_error(&name))?;
        if self.is_l_value {
            self.netlist.add_edge(logic, target)?;
            if self.is_delayed_assign {
                debug!("promoting {name} to a register");
                self.netlist.set_vertex_reg(target)?;
            }
        } else {
            self.netlist.add_edge(target, logic)?;
        }
        self.iterate_children(node)
    }

    /// Resolves a reference against the declared variables. References may
    /// use a name shorter than the qualified declaration: an exact match
    /// wins, then the first declaration ending with `.<name>`.
    fn lookup_var(&self, name: &str) -> Option<VertexId> {
        if let Some((_, vertex)) = self.vars.iter().find(|(declared, _)| declared.as_str() == name) {
            return Some(*vertex);
        }
        let suffix = format!(".{name}");
        let mut candidates = self
            .vars
            .iter()
            .filter(|(declared, _)| declared.ends_with(&suffix));
        let first = candidates.next();
        if candidates.next().is_some() {
            warn!("reference {name} matches multiple declarations, using the first");
        }
        first.map(|(_, vertex)| *vertex)
    }
}

fn is_assignment(kind: VertexKind) -> bool {
    matches!(
        kind,
        VertexKind::Assign | VertexKind::AssignAlias | VertexKind::AssignDly | VertexKind::AssignW
    )
}

fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    element_children(node).find(|child| child.tag_name().name() == name)
}

fn parse_loc(node: Node) -> Result<Location, NetlistError> {
    Location::parse(&req_attr(node, "loc")?)
}

fn parse_bound(
    bound: Option<Result<String, NetlistError>>,
    node: Node,
) -> Result<i64, NetlistError> {
    let text = bound
        .ok_or_else(|| malformed("range-bounds", "array range needs two const bounds"))??;
    text.parse().map_err(|_| {
        malformed("range-bounds", "array range bound is not a literal").map_info(|info| {
            info.detail("element", node.tag_name().name())
                .detail("bound", text.as_str())
        })
    })
}
