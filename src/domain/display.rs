//! Text renderings of a genealogy tree.
//!
//! - compact: `Display` for [`GenealogyTree`], one line with bracketed advisees
//! - verbose: [`Verbose`], one `"<person> - <year>"` line per node
//! - terminal tree: [`TreeDisplay`], box-drawing rendering via `termtree`

use std::fmt;

use termtree::Tree;

use crate::domain::tree::GenealogyTree;

/// Marks the start of advisees in the compact form.
pub const START_ADVISEE_DELIMITER: &str = "[";

/// Separates advisees in the compact form.
pub const DELIMITER: &str = ", ";

/// Marks the end of advisees in the compact form.
pub const END_ADVISEE_DELIMITER: &str = "]";

/// `Maya Leong[Matthew Hui[Amy Huang], Curran Muhlberger]`
impl fmt::Display for GenealogyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.person())?;
        if self.is_leaf() {
            return Ok(());
        }
        f.write_str(START_ADVISEE_DELIMITER)?;
        for (idx, advisee) in self.advisees().enumerate() {
            if idx > 0 {
                f.write_str(DELIMITER)?;
            }
            write!(f, "{advisee}")?;
        }
        f.write_str(END_ADVISEE_DELIMITER)
    }
}

/// Multi-line rendering, depth first, no indentation, no trailing newline.
///
/// ```text
/// Maya Leong - 1990
/// Matthew Hui - 1995
/// Amy Huang - 2000
/// Curran Muhlberger - 1996
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Verbose<'a>(pub &'a GenealogyTree);

impl fmt::Display for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0.person(), self.0.year())?;
        for advisee in self.0.advisees() {
            writeln!(f)?;
            write!(f, "{}", Verbose(advisee))?;
        }
        Ok(())
    }
}

impl GenealogyTree {
    pub fn verbose(&self) -> Verbose<'_> {
        Verbose(self)
    }
}

pub trait TreeDisplay {
    fn to_term_tree(&self) -> Tree<String>;
}

impl TreeDisplay for GenealogyTree {
    fn to_term_tree(&self) -> Tree<String> {
        let root = format!("{} ({})", self.person(), self.year());

        // Recursively construct the advisees
        let leaves: Vec<_> = self.advisees().map(|c| c.to_term_tree()).collect();

        Tree::new(root).with_leaves(leaves)
    }
}
