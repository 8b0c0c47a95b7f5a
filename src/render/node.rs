//! In-memory directory tree built from a walk

use crate::error::Result;
use crate::walk::{Entry, EntryKind};

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Assemble a tree from a pre-order entry stream.
    ///
    /// Relies on every entry at depth `d` following its parent at `d - 1`,
    /// which is what `DirWalker` yields. Stops at the first walk error.
    pub fn from_entries<I>(root_name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Entry>>,
    {
        // stack[d] is the open node at depth d
        let mut stack = vec![TreeNode::dir(root_name)];

        for entry in entries {
            let entry = entry?;
            close_until(&mut stack, entry.depth.max(1));
            stack.push(TreeNode {
                name: entry.name(),
                kind: entry.kind,
                children: Vec::new(),
            });
        }

        close_until(&mut stack, 1);
        Ok(stack.pop().unwrap_or_else(|| TreeNode::dir(".")))
    }

    /// Count (directories, files) below this node.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.counts();
            match child.kind {
                EntryKind::Dir => (dirs + d + 1, files + f),
                EntryKind::File => (dirs + d, files + f + 1),
            }
        })
    }
}

/// Pop open nodes into their parents until `len` nodes remain.
fn close_until(stack: &mut Vec<TreeNode>, len: usize) {
    while stack.len() > len {
        if let Some(node) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}
