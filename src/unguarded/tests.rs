#![cfg(test)]

use std::hash::{DefaultHasher, Hash, Hasher, RandomState};

use proptest::collection::hash_set;
use proptest::prelude::*;

use super::*;
use crate::json::Scalar;
use crate::pair::OrderedPair;
use crate::traits::Set;
use crate::traversal::TraversalState;
use crate::util::hash::ManualHash;

fn set_of<const N: usize>(items: [i32; N]) -> UnguardedSet<i32> {
    UnguardedSet::from(items)
}

#[test]
fn test_add_is_idempotent() {
    let mut set = UnguardedSet::<&str>::new();
    assert!(set.add("a"), "Adding a new element should report an insertion.");
    assert!(!set.add("a"), "Adding an existing element should report no insertion.");
    assert_eq!(set.cardinality(), 1);
    assert_eq!(set.len(), set.cardinality());
}

#[test]
fn test_contains_all() {
    let set = set_of([1, 2, 3]);
    assert!(set.contains_all(&[1, 3]));
    assert!(!set.contains_all(&[1, 4]), "Every given element needs to be present.");
    assert!(
        set.contains_all(std::iter::empty()),
        "Containment of no elements should be vacuously true."
    );
    assert!(UnguardedSet::<i32>::new().contains_all(std::iter::empty()));
}

#[test]
fn test_remove_and_clear() {
    let mut set = set_of([1, 2, 3]);
    set.remove(&2);
    set.remove(&42);
    assert_eq!(set, set_of([1, 3]), "Removing an absent element should do nothing.");

    set.clear();
    assert!(set.is_empty());
    assert!(set.add(1), "A cleared set should still be usable.");
}

#[test]
fn test_pop_drains_every_element() {
    let mut set = set_of([1, 2, 3]);
    let mut popped = Vec::new();
    while let Some(item) = set.pop() {
        popped.push(item);
    }
    popped.sort();

    assert_eq!(popped, [1, 2, 3], "Pop should remove each element exactly once.");
    assert_eq!(set.pop(), None, "Popping an empty set should return None.");
}

#[test]
fn test_clone_is_independent() {
    let original = set_of([1, 2]);
    let mut clone = original.clone();
    clone.add(3);
    clone.remove(&1);

    assert_eq!(original, set_of([1, 2]), "Changing a clone shouldn't affect the original.");
    assert_eq!(clone, set_of([2, 3]));
}

#[test]
fn test_literal_algebra() {
    assert_eq!(set_of([1, 2, 3]).union(&set_of([3, 4])), set_of([1, 2, 3, 4]));
    assert_eq!(set_of([1, 2, 3]).intersect(&set_of([2, 3, 4])), set_of([2, 3]));
    assert_eq!(set_of([1, 2, 3]).difference(&set_of([2, 3, 4])), set_of([1]));
    assert_eq!(
        set_of([1, 2, 3]).symmetric_difference(&set_of([2, 3, 4])),
        set_of([1, 4])
    );

    assert_eq!(&set_of([1, 2]) | &set_of([2, 3]), set_of([1, 2, 3]));
    assert_eq!(&set_of([1, 2]) & &set_of([2, 3]), set_of([2]));
    assert_eq!(&set_of([1, 2]) - &set_of([2, 3]), set_of([1]));
    assert_eq!(&set_of([1, 2]) ^ &set_of([2, 3]), set_of([1, 3]));
}

#[test]
fn test_operands_are_untouched() {
    let a = set_of([1, 2, 3]);
    let b = set_of([3, 4]);
    let _ = a.union(&b);
    let _ = a.intersect(&b);
    let _ = a.symmetric_difference(&b);
    let _ = a.cartesian_product(&b);

    assert_eq!(a, set_of([1, 2, 3]), "Binary operations shouldn't mutate the receiver.");
    assert_eq!(b, set_of([3, 4]), "Binary operations shouldn't mutate the argument.");
}

#[test]
fn test_subset_relations() {
    let small = set_of([1, 2]);
    let large = set_of([1, 2, 3]);

    assert!(small.is_subset(&large));
    assert!(small.is_proper_subset(&large));
    assert!(!large.is_subset(&small), "A larger set can't be a subset.");
    assert!(large.is_superset(&small));
    assert!(large.is_proper_superset(&small));

    assert!(small.is_subset(&small), "Every set is a subset of itself.");
    assert!(!small.is_proper_subset(&small), "No set is a proper subset of itself.");
    assert!(!small.is_proper_superset(&small), "No set is a proper superset of itself.");

    assert!(!set_of([1, 4]).is_subset(&large));
    assert!(UnguardedSet::new().is_subset(&small), "The empty set is a subset of everything.");
}

#[test]
fn test_equality_ignores_insertion_order() {
    let forwards: UnguardedSet<i32> = (0..100).collect();
    let backwards: UnguardedSet<i32> = (0..100).rev().collect();
    assert!(forwards.equal(&backwards));
    assert_ne!(forwards, set_of([1, 2, 3]));
}

#[test]
fn test_each_stops_early() {
    let set: UnguardedSet<i32> = (0..10).collect();

    let mut visited = 0;
    set.each(|_| {
        visited += 1;
        visited == 3
    });
    assert_eq!(visited, 3, "Returning true from the visitor should stop the iteration.");

    let mut sum = 0;
    set.each(|item| {
        sum += item;
        false
    });
    assert_eq!(sum, 45, "Returning false should visit every element.");
}

#[test]
fn test_traversal() {
    let set: UnguardedSet<i32> = (0..5).collect();

    let mut all = set.traverse().collect::<Vec<_>>();
    all.sort();
    assert_eq!(all, [0, 1, 2, 3, 4]);

    let mut traversal = set.traverse();
    assert!(traversal.next().is_some());
    traversal.stop();
    assert_eq!(traversal.next(), None, "A stopped traversal shouldn't produce elements.");
    assert_eq!(traversal.state(), TraversalState::Cancelled);

    assert_eq!(set.traverse().count(), 5, "Each traversal should start from the beginning.");
}

#[test]
fn test_power_set() {
    let set = set_of([1, 2, 3]);
    let power = set.power_set();

    assert_eq!(power.len(), 8);
    assert!(power.contains(&UnguardedSet::new()), "The empty set should be included.");
    assert!(power.contains(&set), "The set itself should be included.");
    assert!(power.contains(&set_of([1, 3])));
    assert!(power.iter().all(|subset| subset.is_subset(&set)));
}

#[test]
fn test_power_set_of_empty() {
    let power = UnguardedSet::<i32>::new().power_set();
    assert_eq!(power.len(), 1, "The power set of the empty set contains only the empty set.");
    assert!(power.contains(&UnguardedSet::new()));
}

#[test]
fn test_cartesian_product() {
    let numbers = set_of([1, 2]);
    let letters = UnguardedSet::<&str, RandomState>::from(["a"]);
    let product = numbers.cartesian_product(&letters);

    assert_eq!(
        product,
        UnguardedSet::from([OrderedPair::new(1, "a"), OrderedPair::new(2, "a")])
    );
    assert!(
        !product.contains(&OrderedPair::new(1, "b")),
        "Pairs should only be built from the operands' elements."
    );
}

#[test]
fn test_to_vec_and_strings() {
    let set = UnguardedSet::<String>::from(["x".to_owned(), "y".to_owned()]);
    let mut items = set.to_vec();
    items.sort();
    assert_eq!(items, ["x", "y"]);

    let mut strings = set.strings();
    strings.sort();
    assert_eq!(strings, ["x", "y"]);

    let mixed = UnguardedSet::<Scalar>::from([
        Scalar::from("a"),
        Scalar::from(1_i64),
        Scalar::Bool(true),
        Scalar::Null,
    ]);
    assert_eq!(mixed.strings(), ["a"], "Only string elements should be kept.");
    assert!(set_of([1, 2]).strings().is_empty(), "Numbers aren't strings.");
}

#[test]
fn test_display() {
    assert_eq!(UnguardedSet::<i32>::new().to_string(), "Set{}");
    assert_eq!(set_of([7]).to_string(), "Set{7}");

    let shown = set_of([1, 2]).to_string();
    assert!(
        shown == "Set{1, 2}" || shown == "Set{2, 1}",
        "Unexpected rendering `{shown}`."
    );
}

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut state = DefaultHasher::new();
    value.hash(&mut state);
    state.finish()
}

#[test]
fn test_colliding_sets_as_elements() {
    let zero: UnguardedSet<_> = UnguardedSet::from([ManualHash::new(0, "zero")]);
    let one: UnguardedSet<_> = UnguardedSet::from([ManualHash::new(0, "one")]);
    assert_eq!(hash_of(&zero), hash_of(&one), "Sets of colliding elements should collide too.");
    assert_ne!(zero, one, "A collision isn't the same as equality.");

    let mut family = UnguardedSet::<_>::new();
    assert!(family.add(zero.clone()));
    assert!(family.add(one.clone()));
    assert!(!family.add(one.clone()));
    assert_eq!(family.len(), 2);

    family.remove(&zero);
    assert!(!family.contains(&zero));
    assert!(family.contains(&one), "Removing a colliding set shouldn't remove the other.");

    let both: UnguardedSet<_> = UnguardedSet::from([ManualHash::new(0, "zero"), ManualHash::new(0, "one")]);
    let power = both.power_set();
    assert_eq!(power.len(), 4, "Every subset should survive colliding element hashes.");
    assert!(power.contains(&zero));
    assert!(power.contains(&one));
    assert!(power.contains(&both));

    let mut reordered = UnguardedSet::<_>::new();
    reordered.add(ManualHash::new(0, "one"));
    reordered.add(ManualHash::new(0, "zero"));
    assert_eq!(hash_of(&both), hash_of(&reordered), "Insertion order shouldn't change the hash.");
}

proptest! {
    #[test]
    fn prop_inclusion_exclusion(
        a in hash_set(any::<u8>(), 0..32),
        b in hash_set(any::<u8>(), 0..32),
    ) {
        let a: UnguardedSet<u8> = a.into_iter().collect();
        let b: UnguardedSet<u8> = b.into_iter().collect();
        prop_assert_eq!(a.union(&b).len(), a.len() + b.len() - a.intersect(&b).len());
    }

    #[test]
    fn prop_symmetric_difference(
        a in hash_set(any::<u8>(), 0..32),
        b in hash_set(any::<u8>(), 0..32),
    ) {
        let a: UnguardedSet<u8> = a.into_iter().collect();
        let b: UnguardedSet<u8> = b.into_iter().collect();
        prop_assert_eq!(
            a.difference(&b).union(&b.difference(&a)),
            a.symmetric_difference(&b)
        );
    }

    #[test]
    fn prop_self_subset(a in hash_set(any::<i16>(), 0..32)) {
        let a: UnguardedSet<i16> = a.into_iter().collect();
        prop_assert!(a.is_subset(&a));
        prop_assert!(!a.is_proper_subset(&a));
    }

    #[test]
    fn prop_power_set_size(a in hash_set(any::<u8>(), 0..8)) {
        let a: UnguardedSet<u8> = a.into_iter().collect();
        let power = a.power_set();
        prop_assert_eq!(power.len(), 1 << a.len());
        prop_assert!(power.contains(&UnguardedSet::new()));
        prop_assert!(power.contains(&a));
    }

    #[test]
    fn prop_cartesian_product_decomposes(
        a in hash_set(any::<u8>(), 0..16),
        b in hash_set(any::<char>(), 0..16),
    ) {
        let a: UnguardedSet<u8> = a.into_iter().collect();
        let b: UnguardedSet<char> = b.into_iter().collect();
        let product = a.cartesian_product(&b);
        prop_assert_eq!(product.len(), a.len() * b.len());
        for pair in product.iter() {
            prop_assert!(a.contains(pair.first()) && b.contains(pair.second()));
        }
    }
}
