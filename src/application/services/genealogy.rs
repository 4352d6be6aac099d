//! Genealogy query service
//!
//! Executes parsed commands against a loaded tree. Every lookup miss is
//! turned into a `Response` here; nothing below the command boundary fails.

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::command::{Command, HELP};
use crate::domain::{GenealogyTree, Person, TreeDisplay};

/// Result of executing one command, rendered for the user via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Help,
    Contains(bool),
    Size(usize),
    Depth(usize),
    Advisor(Person),
    NoAdvisor,
    AdvisorNotInTree,
    NotInTree,
    Ancestor(Person),
    NoCommonAncestor,
    Subtree { root: Person, compact: String },
    Lineage(Vec<Person>),
    Verbose(String),
    Outline(String),
    Exit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Help => f.write_str(HELP),
            Response::Contains(true) => {
                f.write_str("This professor is contained in the PhD tree.")
            }
            Response::Contains(false) => {
                f.write_str("This professor is not contained in the PhD tree.")
            }
            Response::Size(n) => write!(f, "The number of nodes in this tree is: {n}."),
            Response::Depth(n) => write!(f, "The maximum depth of this tree is: {n}."),
            Response::Advisor(p) => write!(f, "The advisor of this advisee is: {p}."),
            Response::NoAdvisor => f.write_str("This person does not have an advisor."),
            Response::AdvisorNotInTree => {
                f.write_str("This professor does not exist in the tree.")
            }
            Response::NotInTree => f.write_str("This person does not exist in the tree."),
            Response::Ancestor(p) => {
                write!(f, "The common ancestor of these scholars is: {p}.")
            }
            Response::NoCommonAncestor => {
                f.write_str("These scholars do not have a common ancestor.")
            }
            Response::Subtree { root, compact } => {
                write!(f, "The PhDTree with {root} at the root is {compact}.")
            }
            Response::Lineage(persons) => {
                write!(f, "The lineage is: {}.", persons.iter().join("--"))
            }
            Response::Verbose(text) => f.write_str(text),
            Response::Outline(text) => f.write_str(text.trim_end()),
            Response::Exit => Ok(()),
        }
    }
}

/// Answers queries against one genealogy tree.
pub struct GenealogyService {
    tree: GenealogyTree,
}

impl GenealogyService {
    pub fn new(tree: GenealogyTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &GenealogyTree {
        &self.tree
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&self, command: &Command) -> Response {
        match command {
            Command::Help => Response::Help,
            Command::Contains(p) => Response::Contains(self.tree.contains(p)),
            Command::Size(p) => self.with_subtree(p.as_ref(), |t| Response::Size(t.size())),
            Command::Depth(p) => {
                self.with_subtree(p.as_ref(), |t| Response::Depth(t.max_depth()))
            }
            Command::Advisor(p) => self.advisor(p),
            Command::Ancestor(p1, p2) => match self.tree.common_ancestor(p1, p2) {
                Ok(ancestor) => Response::Ancestor(ancestor.clone()),
                Err(e) => {
                    debug!("no common ancestor: {}", e);
                    Response::NoCommonAncestor
                }
            },
            Command::Find(p) => self.with_subtree(Some(p), |t| Response::Subtree {
                root: t.person().clone(),
                compact: t.to_string(),
            }),
            Command::Lineage(p) => match self.tree.find_lineage(p) {
                Ok(lineage) => Response::Lineage(lineage.into_iter().cloned().collect()),
                Err(e) => {
                    debug!("no lineage: {}", e);
                    Response::NotInTree
                }
            },
            Command::Print => Response::Verbose(self.tree.verbose().to_string()),
            Command::Tree(p) => self.with_subtree(p.as_ref(), |t| {
                Response::Outline(t.to_term_tree().to_string())
            }),
            Command::Exit => Response::Exit,
        }
    }

    /// Containment is checked first so that the root ("no advisor") and an
    /// unknown person ("not in tree") get different answers.
    fn advisor(&self, person: &Person) -> Response {
        if !self.tree.contains(person) {
            return Response::AdvisorNotInTree;
        }
        match self.tree.find_advisor(person) {
            Ok(advisor) => Response::Advisor(advisor.clone()),
            Err(_) => Response::NoAdvisor,
        }
    }

    /// Applies `f` to the subtree rooted at `person` (whole tree for `None`).
    fn with_subtree(
        &self,
        person: Option<&Person>,
        f: impl FnOnce(&GenealogyTree) -> Response,
    ) -> Response {
        let Some(person) = person else {
            return f(&self.tree);
        };
        match self.tree.find_subtree(person) {
            Ok(subtree) => f(subtree),
            Err(e) => {
                debug!("lookup failed: {}", e);
                Response::NotInTree
            }
        }
    }
}
