//! Diagnostic text rendering for [`OrderedTree`]: a level-by-level centered
//! pyramid in the style of classic heap printouts.

use std::fmt;

use crate::tree::{Node, OrderedTree};

impl<T> OrderedTree<T> {
    /// Renders the tree as a text pyramid, one line per level from the root
    /// down. Each level keeps placeholder slots for missing children so the
    /// spacing stays regular: a line at level `L` (counting up from the
    /// leaves) starts with `2^L - 1` spaces and separates its slots with
    /// `2^(L+1) - 1` spaces.
    ///
    /// Values wider than one character would break the fixed-width layout,
    /// so they are swapped for sequential single-letter tokens (`a`, `b`,
    /// `c`, ...) and a `token = value` legend is appended after the pyramid.
    /// A fresh token is issued per printed occurrence; past 26 tokens the
    /// substitutes run out of letters, a limitation inherited from the
    /// original ad hoc scheme.
    ///
    /// An empty tree renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.render(), " 2\n1 3\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        let root = match self.root.node() {
            Some(root) => root,
            None => return out,
        };

        let mut legend = Legend::default();
        let mut row: Vec<Option<&Node<T>>> = vec![Some(root)];
        let mut level = self.height();
        while level >= 0 {
            let gap = spaces(level + 1);
            let mut line = spaces(level);
            let mut next = Vec::with_capacity(row.len() * 2);
            for slot in &row {
                match slot {
                    Some(node) => {
                        line.push(legend.token(&node.value));
                        next.push(node.left.node());
                        next.push(node.right.node());
                    }
                    None => {
                        line.push(' ');
                        next.push(None);
                        next.push(None);
                    }
                }
                line.push_str(&gap);
            }
            out.push_str(line.trim_end());
            out.push('\n');
            row = next;
            level -= 1;
        }

        for (token, value) in &legend.entries {
            out.push_str(&format!("{} = {}\n", token, value));
        }

        out
    }

    /// Writes [`render`][Self::render]'s output to stdout.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.render());
    }
}

/// `2^level - 1` spaces, the geometric spacing that centers each level over
/// the one below it.
fn spaces(level: isize) -> String {
    " ".repeat((1usize << level) - 1)
}

/// Substitutes single-letter tokens for values too wide for one pyramid slot.
#[derive(Default)]
struct Legend {
    entries: Vec<(char, String)>,
}

impl Legend {
    fn token<T: fmt::Display>(&mut self, value: &T) -> char {
        let text = value.to_string();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) => only,
            _ => {
                let token =
                    char::from_u32('a' as u32 + self.entries.len() as u32).unwrap_or('?');
                self.entries.push((token, text));
                token
            }
        }
    }
}
