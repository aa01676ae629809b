use rollbook::recordstore::store::RecordStore;

fn store_cba() -> RecordStore {
    let mut store = RecordStore::new();
    store.add("A", "Asha", "CS");
    store.add("B", "Ravi", "EE");
    store.add("C", "Meera", "ME");
    store
}

fn keys(store: &RecordStore) -> Vec<&str> {
    store.iter().map(|r| r.roll_number.as_str()).collect()
}

#[test]
fn test_display_order_is_most_recent_first() {
    // GIVEN adds A, B, C in that order
    let store = store_cba();

    // THEN iteration yields C, B, A
    assert_eq!(keys(&store), vec!["C", "B", "A"]);
}

#[test]
fn test_delete_handles_middle_front_and_sole_element() {
    let mut store = store_cba();

    // WHEN deleting the middle element
    assert!(store.delete_by_key("B"));
    assert_eq!(keys(&store), vec!["C", "A"]);

    // AND the front element
    assert!(store.delete_by_key("C"));
    assert_eq!(keys(&store), vec!["A"]);

    // AND the sole remaining element
    assert!(store.delete_by_key("A"));
    assert!(store.is_empty());
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn test_delete_missing_key_is_a_noop() {
    let mut store = store_cba();

    // WHEN deleting a key that does not exist
    assert!(!store.delete_by_key("Z"));

    // THEN the sequence is unchanged element for element
    assert_eq!(keys(&store), vec!["C", "B", "A"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_find_returns_first_match_for_duplicate_keys() {
    let mut store = RecordStore::new();
    store.add("101", "Asha", "CS");
    store.add("101", "Ravi", "EE");

    // The more recently added record sits nearer the front
    let found = store.find_by_key("101").unwrap();
    assert_eq!(found.name, "Ravi");
}

#[test]
fn test_find_is_exact_and_case_sensitive() {
    let mut store = RecordStore::new();
    store.add("10", "Asha", "CS");
    store.add("ab", "Ravi", "EE");

    assert!(store.find_by_key("1").is_none());
    assert!(store.find_by_key("101").is_none());
    assert!(store.find_by_key("AB").is_none());
    assert!(store.find_by_key("ab").is_some());
}

#[test]
fn test_empty_fields_are_accepted() {
    let mut store = RecordStore::new();
    store.add("", "", "");

    assert_eq!(store.len(), 1);
    assert!(store.find_by_key("").is_some());
}

#[test]
fn test_iteration_is_restartable_and_non_mutating() {
    let store = store_cba();

    assert_eq!(store.iter().count(), 3);
    assert_eq!(store.iter().count(), 3);
    assert_eq!(keys(&store), vec!["C", "B", "A"]);
}
