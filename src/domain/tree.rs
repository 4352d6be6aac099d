//! Genealogy tree: each node is an academic, each edge advisor -> advisee.
//!
//! Nodes own their advisees outright; there are no parent pointers. The
//! advisor of a person is derived on demand by searching downwards from the
//! root, which keeps ownership strictly hierarchical.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult, InvariantViolation};
use crate::domain::person::Person;

/// Outcome of [`GenealogyTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new leaf was added below the advisor.
    Inserted,
    /// The advisee already occurs somewhere in the tree; nothing changed.
    AlreadyPresent,
    /// The advisor does not occur in the tree; nothing changed.
    UnknownAdvisor,
}

/// A subtree of the academic genealogy rooted at one person.
///
/// # Invariants
/// - every person occurs at most once in the whole tree
/// - advisees are strictly ordered by [`Person`] order
///
/// Acyclicity and the absence of shared nodes follow from ownership: a node
/// is only ever created as a fresh leaf and pushed into exactly one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenealogyTree {
    person: Person,
    /// Year the degree was awarded
    year: i32,
    advisees: Vec<GenealogyTree>,
}

impl GenealogyTree {
    /// Creates a single node without advisees.
    pub fn new(person: Person, year: i32) -> Self {
        Self {
            person,
            year,
            advisees: Vec::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Direct advisees in person order.
    pub fn advisees(&self) -> impl Iterator<Item = &GenealogyTree> {
        self.advisees.iter()
    }

    pub fn num_advisees(&self) -> usize {
        self.advisees.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.advisees.is_empty()
    }

    /// Returns the subtree rooted at `target`.
    ///
    /// Depth first, advisees visited in order, first hit wins.
    pub fn find_subtree(&self, target: &Person) -> DomainResult<&GenealogyTree> {
        self.locate(target).map(|path| self.node_at(&path))
    }

    pub fn contains(&self, target: &Person) -> bool {
        self.find_subtree(target).is_ok()
    }

    /// Adds `advisee` (degree in `year`) as a new advisee of `advisor`.
    ///
    /// Both the advisor and the advisee are searched exactly once. An
    /// unknown advisor or an advisee already in the tree leaves the tree
    /// unchanged; the returned outcome tells which case applied.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, advisor: &Person, advisee: Person, year: i32) -> InsertOutcome {
        let Ok(advisor_path) = self.locate(advisor) else {
            debug!("advisor {} not in tree, skipping {}", advisor, advisee);
            return InsertOutcome::UnknownAdvisor;
        };
        if self.contains(&advisee) {
            trace!("{} already in tree", advisee);
            return InsertOutcome::AlreadyPresent;
        }

        let node = self.node_at_mut(&advisor_path);
        let (Ok(pos) | Err(pos)) = node.position_of(&advisee);
        node.advisees.insert(pos, GenealogyTree::new(advisee, year));

        debug_assert_eq!(self.verify(), Ok(()));
        InsertOutcome::Inserted
    }

    /// Returns the direct advisor of `target`.
    ///
    /// Fails with `NotFound` both for the root of this tree (it has no
    /// advisor here) and for persons not in the tree.
    pub fn find_advisor(&self, target: &Person) -> DomainResult<&Person> {
        self.advisor_of(target)
            .ok_or_else(|| DomainError::NotFound(target.clone()))
    }

    /// Persons on the path from this node down to `target`, both inclusive.
    pub fn find_lineage(&self, target: &Person) -> DomainResult<Vec<&Person>> {
        let path = self.locate(target)?;

        let mut lineage = Vec::with_capacity(path.len() + 1);
        let mut node = self;
        lineage.push(&node.person);
        for &idx in &path {
            node = &node.advisees[idx];
            lineage.push(&node.person);
        }
        Ok(lineage)
    }

    /// Deepest person that is an ancestor of (or equal to) both `first` and
    /// `second`.
    ///
    /// Both lineages start at this node, so they agree on a prefix and never
    /// again after the first divergence.
    pub fn common_ancestor(&self, first: &Person, second: &Person) -> DomainResult<&Person> {
        let lineage_first = self.find_lineage(first)?;
        let lineage_second = self.find_lineage(second)?;

        lineage_first
            .iter()
            .zip(&lineage_second)
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| *a)
            .last()
            .ok_or_else(|| DomainError::NotFound(first.clone()))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.advisees.iter().map(Self::size).sum::<usize>()
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn max_depth(&self) -> usize {
        self.advisees
            .iter()
            .map(|child| 1 + child.max_depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of edges between this node and `target`.
    pub fn depth_of(&self, target: &Person) -> DomainResult<usize> {
        self.locate(target).map(|path| path.len())
    }

    /// Re-checks global uniqueness and advisee ordering with one traversal.
    ///
    /// Intended for tests and debug assertions, not for the hot path.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        self.verify_into(&mut seen)
    }

    fn verify_into<'a>(&'a self, seen: &mut HashSet<&'a Person>) -> Result<(), InvariantViolation> {
        if !seen.insert(&self.person) {
            return Err(InvariantViolation::DuplicatePerson(self.person.clone()));
        }
        if self
            .advisees
            .windows(2)
            .any(|pair| pair[0].person >= pair[1].person)
        {
            return Err(InvariantViolation::UnorderedAdvisees {
                advisor: self.person.clone(),
            });
        }
        self.advisees
            .iter()
            .try_for_each(|child| child.verify_into(seen))
    }

    // ------------------------------------------------------------------
    // Search primitive
    // ------------------------------------------------------------------

    /// Advisee indices leading from this node to `target`.
    ///
    /// Every lookup goes through here.
    fn locate(&self, target: &Person) -> DomainResult<Vec<usize>> {
        let mut path = Vec::new();
        if self.locate_into(target, &mut path) {
            Ok(path)
        } else {
            Err(DomainError::NotFound(target.clone()))
        }
    }

    fn locate_into(&self, target: &Person, path: &mut Vec<usize>) -> bool {
        if self.person == *target {
            return true;
        }
        for (idx, child) in self.advisees.iter().enumerate() {
            path.push(idx);
            if child.locate_into(target, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    fn node_at(&self, path: &[usize]) -> &GenealogyTree {
        path.iter().fold(self, |node, &idx| &node.advisees[idx])
    }

    fn node_at_mut(&mut self, path: &[usize]) -> &mut GenealogyTree {
        path.iter().fold(self, |node, &idx| &mut node.advisees[idx])
    }

    /// Binary search among direct advisees.
    fn position_of(&self, person: &Person) -> Result<usize, usize> {
        self.advisees
            .binary_search_by(|child| child.person.cmp(person))
    }

    fn advisor_of(&self, target: &Person) -> Option<&Person> {
        if self.position_of(target).is_ok() {
            return Some(&self.person);
        }
        self.advisees
            .iter()
            .find_map(|child| child.advisor_of(target))
    }
}
