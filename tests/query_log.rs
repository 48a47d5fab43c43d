// tests/query_log.rs
use std::{ fs, path::PathBuf };

use ecourts_scrape::model::CaseQuery;
use ecourts_scrape::session::{ self, FileSource, ManualSession };
use ecourts_scrape::store;

const PAGE: &str = include_str!("fixtures/case_detail.html");

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ecourts_log_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn ids_increase_and_snapshots_round_trip() {
    let root = temp_root("ids");
    let a = store::log_query(&root, &CaseQuery::new("CS", "12", "2023"), PAGE).unwrap();
    let b = store::log_query(&root, &CaseQuery::new("CR", "7", "2021"), "<p>other</p>").unwrap();
    assert_eq!((a, b), (1, 2));

    assert_eq!(store::load_query(&root, 1).as_deref(), Some(PAGE));
    assert_eq!(store::load_query(&root, 2).as_deref(), Some("<p>other</p>"));
    assert_eq!(store::load_query(&root, 3), None);

    let list = store::list_queries(&root).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].query, CaseQuery::new("CS", "12", "2023"));
    assert_eq!(list[1].query.label(), "CR 7/2021");
    assert!(list[0].logged_at > 0);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn lookup_logs_and_replay_reextracts() {
    let root = temp_root("replay");
    fs::create_dir_all(&root).unwrap();
    let saved = root.join("saved.html");
    fs::write(&saved, PAGE).unwrap();

    let query = CaseQuery::new("CS", "12", "2023");
    let mut src = FileSource::new(&saved);
    let found = session::lookup(&mut src, &query, Some(root.as_path())).unwrap();
    assert_eq!(found.logged_id, Some(1));
    assert_eq!(found.record.filing_date, "14-03-2023");

    let replayed = session::replay(&root, 1).unwrap();
    assert_eq!(replayed, found.record);
    assert!(session::replay(&root, 9).is_err());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn lookup_without_log_root_keeps_nothing() {
    let root = temp_root("nolog");
    fs::create_dir_all(&root).unwrap();
    let saved = root.join("saved.html");
    fs::write(&saved, PAGE).unwrap();

    let found = session::lookup(&mut FileSource::new(&saved), &CaseQuery::default(), None).unwrap();
    assert_eq!(found.logged_id, None);
    assert!(store::list_queries(&root).unwrap().is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn empty_page_is_an_error() {
    let root = temp_root("empty");
    fs::create_dir_all(&root).unwrap();
    let saved = root.join("blank.html");
    fs::write(&saved, "  \n").unwrap();

    assert!(session::lookup(&mut FileSource::new(&saved), &CaseQuery::default(), Some(root.as_path())).is_err());
    assert!(store::list_queries(&root).unwrap().is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn manual_session_reads_page_after_enter() {
    let root = temp_root("manual");
    fs::create_dir_all(&root).unwrap();
    let saved = root.join("case.html");
    fs::write(&saved, PAGE).unwrap();

    let query = CaseQuery::new("CS", "12", "2023");
    let mut shown = Vec::new();
    let mut src = ManualSession::new(&b"\n"[..], &mut shown, query.clone(), &saved);
    let found = session::lookup(&mut src, &query, None).unwrap();
    assert_eq!(found.record.respondent, "1) Haryana Urban Development Authority");

    let prompt = String::from_utf8(shown).unwrap();
    assert!(prompt.contains("Press ENTER"));
    assert!(prompt.contains("case.html"));

    let _ = fs::remove_dir_all(&root);
}
