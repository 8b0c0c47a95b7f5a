//! Connector strings used when drawing a tree

/// Glyph set passed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGlyphs {
    /// Connector for every sibling but the last
    pub branch: &'static str,
    /// Connector for the last sibling
    pub corner: &'static str,
    /// Child prefix below a non-last sibling
    pub bar: &'static str,
    /// Child prefix below the last sibling
    pub blank: &'static str,
}

impl TreeGlyphs {
    /// Box-drawing glyphs (the default).
    pub const fn unicode() -> Self {
        Self {
            branch: "├── ",
            corner: "└── ",
            bar: "│   ",
            blank: "    ",
        }
    }

    /// Pure ASCII glyphs for terminals without box-drawing support.
    pub const fn ascii() -> Self {
        Self {
            branch: "|-- ",
            corner: "`-- ",
            bar: "|   ",
            blank: "    ",
        }
    }

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.corner } else { self.branch }
    }
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self::unicode()
    }
}
