//! Semantic values carried by tokens and built by rule actions
//!
//! A `Value` is whatever a token transform or a rule action produces. Parse
//! results are trees of values: `Node` for named constructions, `List` for
//! sequences, and scalars at the leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of semantic values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    /// No value (end marker, empty productions)
    #[default]
    Unit,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    /// Named tree node, e.g. `add(1, 2)`
    Node { name: String, children: Vec<Value> },
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn node(name: impl Into<String>, children: Vec<Value>) -> Self {
        Value::Node {
            name: name.into(),
            children,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Node name, if this value is a node
    pub fn node_name(&self) -> Option<&str> {
        match self {
            Value::Node { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Value]> {
        match self {
            Value::Node { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Consume into list items; a non-list becomes a single-element list
    /// and `Unit` becomes an empty one.
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Value::List(items) => items,
            Value::Unit => Vec::new(),
            other => vec![other],
        }
    }

    /// Short type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Node { .. } => "node",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Node { name, children } => {
                write!(f, "{}(", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_nodes() {
        let tree = Value::node(
            "call",
            vec![
                Value::text("f"),
                Value::List(vec![
                    Value::node("add", vec![Value::Int(1), Value::Int(2)]),
                    Value::Int(3),
                ]),
            ],
        );
        assert_eq!(tree.to_string(), "call(f, [add(1, 2), 3])");
    }

    #[test]
    fn test_into_list() {
        assert_eq!(Value::Unit.into_list(), Vec::<Value>::new());
        assert_eq!(Value::Int(4).into_list(), vec![Value::Int(4)]);
        assert_eq!(
            Value::List(vec![Value::Bool(true)]).into_list(),
            vec![Value::Bool(true)]
        );
    }

    #[test]
    fn test_accessors() {
        let node = Value::node("int", vec![Value::Int(7)]);
        assert_eq!(node.node_name(), Some("int"));
        assert_eq!(node.children().map(|c| c.len()), Some(1));
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::text("x").as_text(), Some("x"));
        assert!(Value::default().is_unit());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Value::node("neg", vec![Value::Int(1)])).unwrap();
        assert_eq!(json, r#"{"Node":{"name":"neg","children":[{"Int":1}]}}"#);
    }
}
