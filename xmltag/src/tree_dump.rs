//! Tree pretty-printing for debugging.

use crate::node::{NodeData, NodeKind};
use indextree::{Arena, NodeId};
use std::fmt;

/// Extract short node label like "n1" from NodeId debug output.
fn node_id_short(node_id: NodeId) -> String {
    let debug = format!("{:?}", node_id);
    let Some(start) = debug.find("index1: ") else {
        return debug;
    };
    let digits = &debug[start + "index1: ".len()..];
    let value: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if value.is_empty() {
        debug
    } else {
        format!("n{}", value)
    }
}

/// Displays a document tree one node per line, indented by depth, with each
/// node's level.
pub struct TreeDump<'a> {
    arena: &'a Arena<NodeData>,
    root: Option<NodeId>,
}

impl<'a> TreeDump<'a> {
    pub(crate) fn new(arena: &'a Arena<NodeData>, root: Option<NodeId>) -> Self {
        Self { arena, root }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let data = self.arena[node].get();
        writeln!(
            f,
            "{indent}[{}] {:?} @{}",
            node_id_short(node),
            data.kind,
            data.level
        )?;
        if let NodeKind::Element(elem) = &data.kind
            && !elem.content.is_empty()
        {
            writeln!(f, "{indent}  CONTENT: {:?}", elem.content.as_str())?;
        }
        for child in node.children(self.arena) {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.fmt_node(f, root, 0),
            None => writeln!(f, "(empty)"),
        }
    }
}
