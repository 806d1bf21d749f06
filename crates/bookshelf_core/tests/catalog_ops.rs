use bookshelf_core::{BookRecord, Catalog, ExitPolicy, MemoryStore};

fn listed(catalog: &Catalog<MemoryStore>) -> Vec<BookRecord> {
    catalog.list_all().cloned().collect()
}

#[test]
fn add_inserts_most_recent_first() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();

    assert_eq!(
        listed(&catalog),
        vec![BookRecord::new(2, "B", "Y"), BookRecord::new(1, "A", "X")]
    );
    assert_eq!(catalog.store().save_count(), 2);
}

#[test]
fn delete_and_search_resolve_first_match() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(5, "First", "One").unwrap();
    catalog.add(5, "Second", "Two").unwrap();

    assert_eq!(catalog.find_by_id(5).unwrap().title, "Second");
    assert!(catalog.delete(5).unwrap());
    assert_eq!(catalog.find_by_id(5).unwrap().title, "First");
    assert_eq!(catalog.count(), 1);
}

#[test]
fn failed_delete_changes_nothing() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();
    let before = listed(&catalog);
    let saves_before = catalog.store().save_count();

    assert!(!catalog.delete(99).unwrap());
    assert_eq!(catalog.count(), 1);
    assert_eq!(listed(&catalog), before);
    assert_eq!(catalog.store().save_count(), saves_before);
}

#[test]
fn delete_removes_from_middle_and_flushes() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();
    catalog.add(3, "C", "Z").unwrap();

    assert!(catalog.delete(2).unwrap());
    let expected = vec![BookRecord::new(3, "C", "Z"), BookRecord::new(1, "A", "X")];
    assert_eq!(listed(&catalog), expected);
    assert_eq!(catalog.store().snapshot(), expected);
}

#[test]
fn find_by_id_has_no_side_effects() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(7, "Seven", "S").unwrap();
    let saves = catalog.store().save_count();

    assert!(catalog.find_by_id(7).is_some());
    assert!(catalog.find_by_id(8).is_none());
    assert_eq!(catalog.count(), 1);
    assert_eq!(catalog.store().save_count(), saves);
}

#[test]
fn clear_all_flushes_empty_state_even_when_already_empty() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.clear_all().unwrap();
    assert_eq!(catalog.store().save_count(), 1);

    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();
    catalog.clear_all().unwrap();

    assert_eq!(catalog.count(), 0);
    assert!(catalog.is_empty());
    assert!(catalog.store().snapshot().is_empty());
}

#[test]
fn list_all_is_restartable() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();

    let first: Vec<_> = catalog.list_all().map(|book| book.id).collect();
    let second: Vec<_> = catalog.list_all().map(|book| book.id).collect();
    assert_eq!(first, vec![2, 1]);
    assert_eq!(first, second);
}

#[test]
fn open_reverses_stored_order() {
    let store = MemoryStore::with_records(vec![
        BookRecord::new(2, "B", "Y"),
        BookRecord::new(1, "A", "X"),
    ]);
    let catalog = Catalog::open(store).unwrap();

    let ids: Vec<_> = catalog.list_all().map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(catalog.store().save_count(), 0);
}

#[test]
fn shutdown_keep_leaves_store_untouched() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();

    catalog.shutdown(ExitPolicy::Keep).unwrap();
    assert_eq!(catalog.store().snapshot(), vec![BookRecord::new(1, "A", "X")]);
}

#[test]
fn shutdown_clear_store_empties_persisted_state() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();

    catalog.shutdown(ExitPolicy::ClearStore).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.store().snapshot().is_empty());
}

#[test]
fn store_failures_are_reported_but_memory_state_stands() {
    let mut catalog = Catalog::new(MemoryStore::new());
    catalog.add(1, "A", "X").unwrap();
    catalog.store().set_fail_writes(true);

    assert!(catalog.delete(1).is_err());
    assert!(catalog.is_empty());
    assert_eq!(catalog.store().snapshot(), vec![BookRecord::new(1, "A", "X")]);
}
