//! Attachment tree flattening.

use serde_json::Value;

/// Flatten a nested attachment tree into pre-order: each node precedes its
/// children, and children keep their given order.
///
/// Nesting depth is unbounded, so traversal uses an explicit work stack
/// instead of native recursion. Children are expected under
/// `node[children_field]["data"]`; a `None` root yields an empty sequence.
pub fn flatten_nested<'a>(root: Option<&'a Value>, children_field: &str) -> Vec<&'a Value> {
    let mut flattened = Vec::new();
    let mut pending: Vec<&Value> = Vec::new();

    if let Some(node) = root {
        pending.push(node);
    }

    while let Some(node) = pending.pop() {
        flattened.push(node);

        if let Some(children) = node
            .get(children_field)
            .and_then(|nested| nested.get("data"))
            .and_then(Value::as_array)
        {
            // Reversed so the stack pops children in their given order.
            for child in children.iter().rev() {
                pending.push(child);
            }
        }
    }

    flattened
}
