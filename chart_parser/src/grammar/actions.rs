//! Ready-made rule actions for common tree shapes

use super::value::Value;

/// Wrap all right-side values in a named node
pub fn node(name: &str) -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    let name = name.to_string();
    move |children| Value::node(name.clone(), children)
}

/// Wrap selected right-side values in a named node, dropping punctuation
pub fn node_of(
    name: &str,
    indices: &[usize],
) -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    let name = name.to_string();
    let indices = indices.to_vec();
    move |values| {
        let children = indices
            .iter()
            .map(|&i| values.get(i).cloned().unwrap_or_default())
            .collect();
        Value::node(name.clone(), children)
    }
}

/// Selected right-side values as a list. Under a named rule this becomes
/// a node with the rule's tree name.
pub fn select(indices: &[usize]) -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    let indices = indices.to_vec();
    move |values| {
        Value::List(
            indices
                .iter()
                .map(|&i| values.get(i).cloned().unwrap_or_default())
                .collect(),
        )
    }
}

/// Forward the value at `index` unchanged
pub fn pick(index: usize) -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    move |mut values| {
        if index < values.len() {
            values.swap_remove(index)
        } else {
            Value::Unit
        }
    }
}

/// All right-side values as a list
pub fn list() -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    Value::List
}

/// Prepend the value at `head` to the list at `tail`
pub fn cons(head: usize, tail: usize) -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    move |values| {
        let mut items = vec![values.get(head).cloned().unwrap_or_default()];
        if let Some(rest) = values.get(tail) {
            items.extend(rest.clone().into_list());
        }
        Value::List(items)
    }
}

/// Always an empty list (for empty productions)
pub fn empty_list() -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    |_| Value::List(Vec::new())
}

pub fn unit() -> impl Fn(Vec<Value>) -> Value + Send + Sync + 'static {
    |_| Value::Unit
}
