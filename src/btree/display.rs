//! Indented tree printer.
//!
//! Leaves print their keys on one line, indented one tab per level.
//! Internal nodes print their first child, then each separator on its own
//! line at the node's level followed by the child to its right:
//!
//! ```text
//!
//!	1 2 3
//! 4
//!	5 6 7
//! ```

use std::fmt;

use crate::btree::tree::BTree;
use crate::btree::view::NodeView;

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root(), 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: NodeView<'_>, level: usize) -> fmt::Result {
    if node.is_leaf() {
        write_indent(f, level)?;
        for key in node.keys() {
            write!(f, "{} ", key)?;
        }
        return Ok(());
    }

    let mut children = node.children();
    if let Some(first) = children.next() {
        write_node(f, first, level + 1)?;
    }
    for (key, child) in node.keys().iter().zip(children) {
        write_indent(f, level)?;
        write!(f, "{} ", key)?;
        write_node(f, child, level + 1)?;
    }
    Ok(())
}

fn write_indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    writeln!(f)?;
    for _ in 0..level {
        write!(f, "\t")?;
    }
    Ok(())
}
