//! A small in-memory IR.
//!
//! [`IrTable`] stores just enough to stand in for a compiler's IR at the
//! symbolic value boundary: nodes with optional spans and descriptions,
//! literal instructions, and named functions, types and enum cases. Tools
//! and tests use it; real evaluators implement [`IrContext`] on their own IR.

use std::borrow::Cow;

use crate::{
    ApFloat, ApInt, EnumCaseId, FuncId, InstId, IrContext, Literal, NodeId, Span, TypeId,
};

#[derive(Clone, Debug)]
enum LiteralData {
    Integer(ApInt),
    Float(ApFloat),
    String(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    description: String,
    span: Option<Span>,
    literal: Option<LiteralData>,
}

/// In-memory IR implementing [`IrContext`].
///
/// # Index Spaces
///
/// - `nodes`: indexed by [`NodeId`] and [`InstId`] (instructions are nodes)
/// - `types`: indexed by [`TypeId`]
/// - `functions`: indexed by [`FuncId`]
/// - `enum_cases`: indexed by [`EnumCaseId`]
#[derive(Clone, Debug, Default)]
pub struct IrTable {
    nodes: Vec<NodeData>,
    types: Vec<String>,
    functions: Vec<String>,
    enum_cases: Vec<String>,
}

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("IR table overflow: too many {what}"))
}

impl IrTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-literal node.
    pub fn add_node(&mut self, description: impl Into<String>, span: Option<Span>) -> NodeId {
        self.push_node(description.into(), span, None).as_node()
    }

    pub fn add_integer_literal(&mut self, value: ApInt, span: Option<Span>) -> InstId {
        let description = format!("integer_literal {value}");
        self.push_node(description, span, Some(LiteralData::Integer(value)))
    }

    pub fn add_float_literal(&mut self, value: ApFloat, span: Option<Span>) -> InstId {
        let description = format!("float_literal {value}");
        self.push_node(description, span, Some(LiteralData::Float(value)))
    }

    pub fn add_string_literal(&mut self, value: impl Into<String>, span: Option<Span>) -> InstId {
        let value = value.into();
        let description = format!("string_literal {value:?}");
        self.push_node(description, span, Some(LiteralData::String(value)))
    }

    pub fn add_type(&mut self, name: impl Into<String>) -> TypeId {
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(name.into());
        id
    }

    pub fn add_function(&mut self, name: impl Into<String>) -> FuncId {
        let id = FuncId::new(to_u32(self.functions.len(), "functions"));
        self.functions.push(name.into());
        id
    }

    /// Add an enum case, named `Enum.case` when printed.
    pub fn add_enum_case(&mut self, enum_name: &str, case_name: &str) -> EnumCaseId {
        let id = EnumCaseId::new(to_u32(self.enum_cases.len(), "enum cases"));
        self.enum_cases.push(format!("{enum_name}.{case_name}"));
        id
    }

    /// Number of nodes (instructions included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push_node(
        &mut self,
        description: String,
        span: Option<Span>,
        literal: Option<LiteralData>,
    ) -> InstId {
        let id = InstId::new(to_u32(self.nodes.len(), "nodes"));
        self.nodes.push(NodeData {
            description,
            span,
            literal,
        });
        id
    }
}

impl IrContext for IrTable {
    fn literal(&self, inst: InstId) -> Option<Literal<'_>> {
        let node = self.nodes.get(inst.index())?;
        node.literal.as_ref().map(|lit| match lit {
            LiteralData::Integer(v) => Literal::Integer(v),
            LiteralData::Float(v) => Literal::Float(v),
            LiteralData::String(v) => Literal::String(v),
        })
    }

    fn node_span(&self, node: NodeId) -> Option<Span> {
        self.nodes.get(node.index()).and_then(|n| n.span)
    }

    fn node_description(&self, node: NodeId) -> Option<Cow<'_, str>> {
        self.nodes
            .get(node.index())
            .map(|n| Cow::Borrowed(n.description.as_str()))
    }

    fn type_name(&self, ty: TypeId) -> Cow<'_, str> {
        match self.types.get(ty.index()) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("type#{}", ty.raw())),
        }
    }

    fn function_name(&self, func: FuncId) -> Cow<'_, str> {
        match self.functions.get(func.index()) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("fn#{}", func.raw())),
        }
    }

    fn enum_case_name(&self, case: EnumCaseId) -> Cow<'_, str> {
        match self.enum_cases.get(case.index()) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("case#{}", case.raw())),
        }
    }
}

#[cfg(test)]
mod tests;
