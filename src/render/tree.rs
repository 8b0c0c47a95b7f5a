//! Recursive tree renderer

use std::io::{self, Write};

use super::glyphs::TreeGlyphs;
use super::node::TreeNode;

/// Renders the children of a `TreeNode`, one line per entry.
///
/// The root itself is not printed; each line is the accumulated prefix,
/// a connector and the entry name.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    glyphs: TreeGlyphs,
}

impl TreeRenderer {
    pub fn new(glyphs: TreeGlyphs) -> Self {
        Self { glyphs }
    }

    /// Write the tree and return the number of lines written.
    pub fn render<W: Write>(&self, root: &TreeNode, out: &mut W) -> io::Result<usize> {
        self.render_children(root, "", out)
    }

    pub fn render_to_string(&self, root: &TreeNode) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(root, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Calculate the prefix for the children of an entry.
    pub fn child_prefix(&self, prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", prefix, self.glyphs.blank)
        } else {
            format!("{}{}", prefix, self.glyphs.bar)
        }
    }

    fn render_children<W: Write>(
        &self,
        node: &TreeNode,
        prefix: &str,
        out: &mut W,
    ) -> io::Result<usize> {
        let mut lines = 0;
        let count = node.children.len();

        for (i, child) in node.children.iter().enumerate() {
            let is_last = i + 1 == count;
            writeln!(out, "{}{}{}", prefix, self.glyphs.connector(is_last), child.name)?;
            lines += 1;

            if !child.children.is_empty() {
                let next = self.child_prefix(prefix, is_last);
                lines += self.render_children(child, &next, out)?;
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::dir("root")
            .with_child(
                TreeNode::dir("src")
                    .with_child(TreeNode::dir("components").with_child(TreeNode::file("App.tsx")))
                    .with_child(TreeNode::file("main.ts")),
            )
            .with_child(TreeNode::file("copy.py"))
    }

    #[test]
    fn test_render_unicode() {
        let rendered = TreeRenderer::default().render_to_string(&sample());
        assert_eq!(
            rendered,
            "├── src\n\
             │   ├── components\n\
             │   │   └── App.tsx\n\
             │   └── main.ts\n\
             └── copy.py\n"
        );
    }

    #[test]
    fn test_render_ascii() {
        let rendered = TreeRenderer::new(TreeGlyphs::ascii()).render_to_string(&sample());
        assert_eq!(
            rendered,
            "|-- src\n\
             |   |-- components\n\
             |   |   `-- App.tsx\n\
             |   `-- main.ts\n\
             `-- copy.py\n"
        );
    }

    #[test]
    fn test_last_child_prefix_is_blank() {
        let tree = TreeNode::dir("root")
            .with_child(TreeNode::dir("only").with_child(TreeNode::file("leaf.txt")));
        let rendered = TreeRenderer::default().render_to_string(&tree);
        assert_eq!(rendered, "└── only\n    └── leaf.txt\n");
    }

    #[test]
    fn test_line_count() {
        let mut buf = Vec::new();
        let lines = TreeRenderer::default().render(&sample(), &mut buf).unwrap();
        assert_eq!(lines, 5);
    }

    #[test]
    fn test_empty_directory_renders_nothing() {
        let rendered = TreeRenderer::default().render_to_string(&TreeNode::dir("root"));
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_child_prefix() {
        let renderer = TreeRenderer::default();
        assert_eq!(renderer.child_prefix("", false), "│   ");
        assert_eq!(renderer.child_prefix("│   ", true), "│       ");
    }
}
