//! Visitor keys and the generic tree walker.
//!
//! Downstream tooling traverses the domain tree without matching on node
//! variants: `child_keys` names the fields of a node that may hold
//! children, `children` yields the actual child nodes under one field,
//! and `get_keys` filters `child_keys` down to fields with at least one
//! child so traversal never visits a vacuous field.

use crate::ast::{
    ArrayExpression, Expression, ExpressionStatement, Identifier, Literal, ObjectExpression,
    Program, Property, PropertyKey, Statement,
};

/// Child field names per node type, in traversal order.
pub static VISITOR_KEYS: &[(&str, &[&str])] = &[
    ("Program", &["body"]),
    ("JSONExpressionStatement", &["expression"]),
    ("JSONArrayExpression", &["elements"]),
    ("JSONObjectExpression", &["properties"]),
    ("JSONProperty", &["key", "value"]),
    ("JSONLiteral", &[]),
    ("JSONIdentifier", &[]),
];

/// Look up the child field names for a node type string.
pub fn visitor_keys(node_type: &str) -> Option<&'static [&'static str]> {
    VISITOR_KEYS
        .iter()
        .find(|(ty, _)| *ty == node_type)
        .map(|(_, keys)| *keys)
}

/// A borrowed reference to any node in the domain tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    ExpressionStatement(&'a ExpressionStatement),
    ArrayExpression(&'a ArrayExpression),
    ObjectExpression(&'a ObjectExpression),
    Property(&'a Property),
    Literal(&'a Literal),
    Identifier(&'a Identifier),
}

impl<'a> NodeRef<'a> {
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "Program",
            NodeRef::ExpressionStatement(_) => "JSONExpressionStatement",
            NodeRef::ArrayExpression(_) => "JSONArrayExpression",
            NodeRef::ObjectExpression(_) => "JSONObjectExpression",
            NodeRef::Property(_) => "JSONProperty",
            NodeRef::Literal(_) => "JSONLiteral",
            NodeRef::Identifier(_) => "JSONIdentifier",
        }
    }

    /// Field names of this node that may hold child nodes.
    pub fn child_keys(&self) -> &'static [&'static str] {
        // The table is total over the closed vocabulary, so the structural
        // fallback of the walker contract never fires here.
        visitor_keys(self.node_type()).unwrap_or(&[])
    }

    /// The child nodes stored under `key`, in source order.
    pub fn children(self, key: &str) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let nodes: Vec<NodeRef<'a>> = match (self, key) {
            (NodeRef::Program(program), "body") => program
                .body
                .iter()
                .map(|Statement::Expression(stmt)| NodeRef::ExpressionStatement(stmt))
                .collect(),
            (NodeRef::ExpressionStatement(stmt), "expression") => {
                vec![NodeRef::from(&stmt.expression)]
            }
            (NodeRef::ArrayExpression(array), "elements") => {
                array.elements.iter().map(NodeRef::from).collect()
            }
            (NodeRef::ObjectExpression(object), "properties") => object
                .properties
                .iter()
                .map(NodeRef::Property)
                .collect(),
            (NodeRef::Property(property), "key") => vec![match &property.key {
                PropertyKey::Literal(lit) => NodeRef::Literal(lit),
                PropertyKey::Identifier(ident) => NodeRef::Identifier(ident),
            }],
            (NodeRef::Property(property), "value") => vec![NodeRef::from(&property.value)],
            _ => Vec::new(),
        };
        nodes.into_iter()
    }

    /// The subset of `child_keys` with at least one actual child.
    pub fn get_keys(self) -> Vec<&'static str> {
        self.child_keys()
            .iter()
            .copied()
            .filter(|key| self.children(key).next().is_some())
            .collect()
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::Array(n) => NodeRef::ArrayExpression(n),
            Expression::Object(n) => NodeRef::ObjectExpression(n),
            Expression::Literal(n) => NodeRef::Literal(n),
            Expression::Identifier(n) => NodeRef::Identifier(n),
        }
    }
}
