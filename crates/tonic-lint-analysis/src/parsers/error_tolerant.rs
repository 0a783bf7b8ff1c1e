//! Error-tolerant parsing: count and locate ERROR/MISSING nodes.

use tree_sitter::Node;

use crate::ast::{Position, Range};

/// Count ERROR and MISSING nodes in a tree-sitter tree.
pub fn count_errors(root: Node) -> (u32, Vec<Range>) {
    let mut count = 0u32;
    let mut ranges = Vec::new();
    collect_errors(root, &mut count, &mut ranges);
    (count, ranges)
}

fn collect_errors(node: Node, count: &mut u32, ranges: &mut Vec<Range>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        ranges.push(range_of_node(&node));
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, count, ranges);
    }
}

fn range_of_node(node: &Node) -> Range {
    let start = node.start_position();
    let end = node.end_position();
    Range {
        start: Position {
            line: start.row as u32 + 1,
            column: start.column as u32 + 1,
        },
        end: Position {
            line: end.row as u32 + 1,
            column: end.column as u32 + 1,
        },
    }
}

