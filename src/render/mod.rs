//! Tree rendering
//!
//! - `glyphs` - the immutable set of connector strings
//! - `node` - `TreeNode`, assembled from walker output
//! - `tree` - `TreeRenderer`, the recursive prefix-accumulating renderer

mod glyphs;
mod node;
mod tree;

pub use glyphs::TreeGlyphs;
pub use node::TreeNode;
pub use tree::TreeRenderer;
