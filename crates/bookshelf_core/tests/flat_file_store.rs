use bookshelf_core::{BookRecord, BookStore, Catalog, FlatFileStore, StoreError};
use std::collections::HashSet;
use std::fs;

#[test]
fn load_missing_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FlatFileStore::new(dir.path().join("absent.txt"));

    assert!(store.load().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn save_writes_three_lines_per_record_in_traversal_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");
    let mut catalog = Catalog::new(FlatFileStore::new(&path));

    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2\nB\nY\n1\nA\nX\n");
}

#[test]
fn reopen_restores_multiset_minus_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");

    {
        let mut catalog = Catalog::new(FlatFileStore::new(&path));
        catalog.add(1, "Dune", "Herbert").unwrap();
        catalog.add(2, "Emma", "Austen").unwrap();
        catalog.add(3, "", "Nobody").unwrap();
        catalog.add(2, "Emma", "Austen").unwrap();
        assert!(catalog.delete(1).unwrap());
    }

    let reopened = Catalog::open(FlatFileStore::new(&path)).unwrap();
    let mut loaded: Vec<_> = reopened.list_all().cloned().collect();
    loaded.sort_by(|a, b| (a.id, &a.title).cmp(&(b.id, &b.title)));

    assert_eq!(
        loaded,
        vec![
            BookRecord::new(2, "Emma", "Austen"),
            BookRecord::new(2, "Emma", "Austen"),
            BookRecord::new(3, "", "Nobody"),
        ]
    );
}

#[test]
fn reopen_reverses_order_of_last_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");

    let mut catalog = Catalog::new(FlatFileStore::new(&path));
    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();
    catalog.add(3, "C", "Z").unwrap();

    let reopened = Catalog::open(FlatFileStore::new(&path)).unwrap();
    let ids: Vec<_> = reopened.list_all().map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn clear_all_leaves_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");

    let mut catalog = Catalog::new(FlatFileStore::new(&path));
    catalog.add(1, "A", "X").unwrap();
    catalog.add(2, "B", "Y").unwrap();
    catalog.clear_all().unwrap();

    assert_eq!(catalog.count(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(FlatFileStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn load_ignores_incomplete_trailing_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");
    fs::write(&path, "10\nKept\nAuthor\n11\nOrphan title\n").unwrap();

    let records = FlatFileStore::new(&path).load().unwrap();
    assert_eq!(records, vec![BookRecord::new(10, "Kept", "Author")]);
}

#[test]
fn load_accepts_file_without_final_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");
    fs::write(&path, "1\nA\nX\n2\nB\nY").unwrap();

    let records = FlatFileStore::new(&path).load().unwrap();
    let ids: HashSet<_> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, HashSet::from([1, 2]));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("shelf").join("books.txt");

    FlatFileStore::new(&path)
        .save(&[BookRecord::new(4, "T", "A")])
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "4\nT\nA\n");
}

#[test]
fn save_into_directory_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FlatFileStore::new(dir.path());

    let err = store.save(&[BookRecord::new(1, "A", "X")]).unwrap_err();
    let StoreError::Io { path, .. } = &err;
    assert_eq!(path, dir.path());
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn load_from_directory_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FlatFileStore::new(dir.path()).load().is_err());
}

#[test]
fn load_replaces_invalid_utf8_and_keeps_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.txt");
    fs::write(&path, b"1\nCaf\xe9\nAuthor\n2\nB\nY\n").unwrap();

    let records = FlatFileStore::new(&path).load().unwrap();
    assert_eq!(
        records,
        vec![
            BookRecord::new(1, "Caf\u{fffd}", "Author"),
            BookRecord::new(2, "B", "Y"),
        ]
    );

    let catalog = Catalog::open(FlatFileStore::new(&path)).unwrap();
    assert_eq!(catalog.count(), 2);
}
