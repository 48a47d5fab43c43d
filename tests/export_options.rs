// tests/export_options.rs
use std::path::PathBuf;

use ecourts_scrape::cli::parse_args;

use ecourts_scrape::config::options::{ ExportFormat, ExportOptions };
use ecourts_scrape::model::CaseQuery;

#[test]
fn default_path_and_summary_location() {
    let opts = ExportOptions::default();
    assert_eq!(opts.out_path(), PathBuf::from("out").join("orders.csv"));
    assert_eq!(opts.summary_path(), PathBuf::from("out").join("Case_Summary.txt"));
}

#[test]
fn dir_hint_keeps_stem() {
    let mut opts = ExportOptions::default();
    opts.set_path("exports/2024/");
    assert_eq!(opts.out_path(), PathBuf::from("exports/2024").join("orders.csv"));
    assert_eq!(opts.summary_path(), PathBuf::from("exports/2024").join("Case_Summary.txt"));
}

#[test]
fn typed_extension_wins_over_format() {
    let mut opts = ExportOptions::default();
    opts.set_path("x/case.txt");
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("x/case.txt"));

    opts.set_path("x/case");
    assert_eq!(opts.out_path(), PathBuf::from("x/case.tsv"));
}

#[test]
fn case_stem_survives_dir_change() {
    let mut opts = ExportOptions::default();
    opts.set_stem_for_case(&CaseQuery::new("MACP", "45", "2019"));
    opts.set_path("elsewhere/");
    assert_eq!(opts.out_path(), PathBuf::from("elsewhere").join("MACP_45_2019.csv"));

    opts.set_stem_for_case(&CaseQuery::new("RC", "3", "2020"));
    assert_eq!(opts.out_path(), PathBuf::from("elsewhere").join("RC_3_2020.csv"));
}

#[test]
fn explicitly_chosen_default_stem_is_kept() {
    let args = ["-o", "mine/orders.csv", "--type", "CS", "--number", "12", "--year", "2023"];
    let params = parse_args(args.iter().map(|s| s.to_string())).unwrap();

    let mut export = params.options.export.clone();
    export.set_stem_for_case(&params.options.session.query);
    assert_eq!(export.out_path(), PathBuf::from("mine/orders.csv"));

    let mut typed = ExportOptions::default();
    typed.set_path("orders");
    typed.set_stem_for_case(&CaseQuery::new("CR", "7", "2021"));
    assert_eq!(typed.out_path(), PathBuf::from("orders.csv"));
}
