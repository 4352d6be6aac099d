//! Structural properties of GenealogyTree

use rstest::{fixture, rstest};

use phdtree::application::loader::load_str;
use phdtree::domain::{DomainError, GenealogyTree, InsertOutcome, Person};
use phdtree::util::testing::{init_test_setup, small_tree, SAMPLE_CSV};

fn p(given: &str, family: &str) -> Person {
    Person::new(given, family)
}

#[fixture]
fn tree() -> GenealogyTree {
    init_test_setup();
    load_str(SAMPLE_CSV).expect("sample csv").tree
}

/// Every person reachable from `tree`, depth first.
fn all_persons(tree: &GenealogyTree) -> Vec<Person> {
    let mut persons = vec![tree.person().clone()];
    for advisee in tree.advisees() {
        persons.extend(all_persons(advisee));
    }
    persons
}

// ============================================================
// Scenario: Maya Leong, Matthew Hui, Curran Muhlberger, Amy Huang
// ============================================================

#[test]
fn given_small_tree_when_querying_then_answers_match_structure() {
    init_test_setup();
    let tree = small_tree();

    assert!(tree.contains(&p("Amy", "Huang")));
    assert_eq!(tree.find_advisor(&p("Amy", "Huang")), Ok(&p("Matthew", "Hui")));
    assert_eq!(
        tree.find_lineage(&p("Amy", "Huang")).unwrap(),
        vec![&p("Maya", "Leong"), &p("Matthew", "Hui"), &p("Amy", "Huang")]
    );
    assert_eq!(
        tree.common_ancestor(&p("Amy", "Huang"), &p("Curran", "Muhlberger")),
        Ok(&p("Maya", "Leong"))
    );
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn given_unknown_advisor_when_inserting_then_tree_unchanged() {
    let mut tree = small_tree();
    let before = tree.clone();

    let outcome = tree.insert(&p("David", "Gries"), p("Tomer", "Shamir"), 2003);

    assert_eq!(outcome, InsertOutcome::UnknownAdvisor);
    assert_eq!(tree.size(), 4);
    assert_eq!(tree, before);
}

// ============================================================
// Insertion
// ============================================================

#[test]
fn given_new_advisee_when_inserting_then_contained_with_advisor() {
    let mut tree = small_tree();

    let outcome = tree.insert(&p("Curran", "Muhlberger"), p("Tomer", "Shamir"), 2003);

    assert_eq!(outcome, InsertOutcome::Inserted);
    assert!(tree.contains(&p("Tomer", "Shamir")));
    assert_eq!(
        tree.find_advisor(&p("Tomer", "Shamir")),
        Ok(&p("Curran", "Muhlberger"))
    );
    assert_eq!(tree.find_subtree(&p("Tomer", "Shamir")).unwrap().year(), 2003);
    assert_eq!(tree.verify(), Ok(()));
}

#[test]
fn given_same_insertion_twice_when_inserting_then_second_is_noop() {
    let mut once = small_tree();
    once.insert(&p("Amy", "Huang"), p("David", "Gries"), 2010);

    let mut twice = once.clone();
    let outcome = twice.insert(&p("Amy", "Huang"), p("David", "Gries"), 2010);

    assert_eq!(outcome, InsertOutcome::AlreadyPresent);
    assert_eq!(twice, once);
}

#[test]
fn given_advisee_elsewhere_in_tree_when_inserting_under_other_advisor_then_rejected() {
    let mut tree = small_tree();

    // Amy Huang already sits below Matthew Hui
    let outcome = tree.insert(&p("Curran", "Muhlberger"), p("Amy", "Huang"), 2011);

    assert_eq!(outcome, InsertOutcome::AlreadyPresent);
    assert_eq!(tree.find_advisor(&p("Amy", "Huang")), Ok(&p("Matthew", "Hui")));
    assert_eq!(tree.size(), 4);
}

#[test]
fn given_root_as_advisee_when_inserting_then_rejected() {
    let mut tree = small_tree();
    let outcome = tree.insert(&p("Amy", "Huang"), p("Maya", "Leong"), 2020);
    assert_eq!(outcome, InsertOutcome::AlreadyPresent);
    assert_eq!(tree.verify(), Ok(()));
}

#[test]
fn given_advisee_older_than_advisor_when_inserting_then_accepted() {
    // degree years are not checked for chronology
    let mut tree = small_tree();
    let outcome = tree.insert(&p("Amy", "Huang"), p("Ada", "Lovelace"), 1843);
    assert_eq!(outcome, InsertOutcome::Inserted);
}

// ============================================================
// Lookup
// ============================================================

#[rstest]
#[case(p("Maya", "Leong"), 7)]
#[case(p("Matthew", "Hui"), 3)]
#[case(p("Curran", "Muhlberger"), 3)]
#[case(p("David", "Gries"), 1)]
fn given_person_when_finding_subtree_then_rooted_there(
    tree: GenealogyTree,
    #[case] person: Person,
    #[case] size: usize,
) {
    let subtree = tree.find_subtree(&person).unwrap();
    assert_eq!(subtree.person(), &person);
    assert_eq!(subtree.size(), size);
}

#[rstest]
fn given_absent_person_when_querying_then_not_found(tree: GenealogyTree) {
    let ghost = p("Alan", "Turing");
    assert!(!tree.contains(&ghost));
    assert_eq!(
        tree.find_subtree(&ghost).unwrap_err(),
        DomainError::NotFound(ghost.clone())
    );
    assert_eq!(tree.find_advisor(&ghost), Err(DomainError::NotFound(ghost.clone())));
    assert_eq!(tree.find_lineage(&ghost), Err(DomainError::NotFound(ghost.clone())));
    assert!(tree.common_ancestor(&ghost, &p("Amy", "Huang")).is_err());
    assert!(tree.common_ancestor(&p("Amy", "Huang"), &ghost).is_err());
    assert!(tree.depth_of(&ghost).is_err());
}

#[rstest]
fn given_subtree_when_searching_outside_it_then_not_found(tree: GenealogyTree) {
    let curran = tree.find_subtree(&p("Curran", "Muhlberger")).unwrap();
    assert!(!curran.contains(&p("Amy", "Huang")));
    assert!(curran.contains(&p("Andrew", "Myers")));
}

#[rstest]
fn given_root_when_finding_advisor_then_not_found(tree: GenealogyTree) {
    assert!(tree.find_advisor(&p("Maya", "Leong")).is_err());
}

// ============================================================
// Lineage and common ancestor
// ============================================================

#[rstest]
fn given_any_person_when_finding_lineage_then_path_of_advisor_edges(tree: GenealogyTree) {
    for person in all_persons(&tree) {
        let lineage = tree.find_lineage(&person).unwrap();

        assert_eq!(lineage.first(), Some(&tree.person()));
        assert_eq!(lineage.last(), Some(&&person));
        assert_eq!(lineage.len(), tree.depth_of(&person).unwrap() + 1);
        for pair in lineage.windows(2) {
            assert_eq!(tree.find_advisor(pair[1]), Ok(pair[0]));
        }
    }
}

#[rstest]
#[case(p("David", "Gries"), p("Matthew", "Hui"), p("Matthew", "Hui"))]
#[case(p("David", "Gries"), p("Tomer", "Shamir"), p("Maya", "Leong"))]
#[case(p("Tomer", "Shamir"), p("Andrew", "Myers"), p("Curran", "Muhlberger"))]
#[case(p("Amy", "Huang"), p("Amy", "Huang"), p("Amy", "Huang"))]
#[case(p("Maya", "Leong"), p("David", "Gries"), p("Maya", "Leong"))]
fn given_two_persons_when_finding_common_ancestor_then_deepest_shared(
    tree: GenealogyTree,
    #[case] first: Person,
    #[case] second: Person,
    #[case] expected: Person,
) {
    assert_eq!(tree.common_ancestor(&first, &second), Ok(&expected));
    assert_eq!(tree.common_ancestor(&second, &first), Ok(&expected));
}

#[rstest]
fn given_all_pairs_when_finding_common_ancestor_then_on_both_lineages_and_deepest(
    tree: GenealogyTree,
) {
    let persons = all_persons(&tree);
    for first in &persons {
        for second in &persons {
            let ancestor = tree.common_ancestor(first, second).unwrap();
            let l1 = tree.find_lineage(first).unwrap();
            let l2 = tree.find_lineage(second).unwrap();

            let pos = l1.iter().position(|x| *x == ancestor).unwrap();
            assert_eq!(l2.get(pos), Some(&ancestor));
            // the next level (if any) differs
            if let (Some(a), Some(b)) = (l1.get(pos + 1), l2.get(pos + 1)) {
                assert_ne!(a, b);
            }
        }
    }
}

// ============================================================
// Size, depth, invariants
// ============================================================

#[rstest]
fn given_any_subtree_when_sizing_then_one_plus_advisee_sizes(tree: GenealogyTree) {
    for person in all_persons(&tree) {
        let subtree = tree.find_subtree(&person).unwrap();
        let advisee_sum: usize = subtree.advisees().map(GenealogyTree::size).sum();
        assert_eq!(subtree.size(), 1 + advisee_sum);
        if subtree.is_leaf() {
            assert_eq!(subtree.size(), 1);
            assert_eq!(subtree.max_depth(), 0);
        }
    }
}

#[rstest]
fn given_sample_tree_when_measuring_depth_then_longest_chain(tree: GenealogyTree) {
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.depth_of(&p("David", "Gries")), Ok(3));
    assert_eq!(tree.depth_of(&p("Maya", "Leong")), Ok(0));
}

#[rstest]
fn given_loaded_tree_when_verifying_then_persons_unique(tree: GenealogyTree) {
    assert_eq!(tree.verify(), Ok(()));
    let mut persons = all_persons(&tree);
    let total = persons.len();
    persons.sort();
    persons.dedup();
    assert_eq!(persons.len(), total);
    assert_eq!(total, tree.size());
}

#[rstest]
fn given_loaded_tree_when_listing_advisees_then_sorted_by_family_name(tree: GenealogyTree) {
    let curran = tree.find_subtree(&p("Curran", "Muhlberger")).unwrap();
    let names: Vec<String> = curran.advisees().map(|a| a.person().to_string()).collect();
    assert_eq!(names, ["Andrew Myers", "Tomer Shamir"]);
    assert_eq!(curran.num_advisees(), 2);
}
