use std::fs;

use scriptscan::config::{Margins, ScanConfig, ENDPOINT_PATTERN};
use scriptscan::errors::ScanError;
use scriptscan::pattern::SearchTerm;
use scriptscan::report::*;
use scriptscan::scanner::Scanner;
use scriptscan::source::SourceText;
use tempfile::TempDir;

const PORTAL_SCRIPT: &str = concat!(
    "!function(){var t={dosyaTaraflariAl:function(e){return $.post(\"/portal/dosyaTaraflari.ajx\",e)},",
    "dosyalariEsitle:function(e){return $.post('/portal/dosyaSync.ajx',e)},",
    "tasksRequests:[\"/portal/dosyaTaraflari.ajx\",\"/portal/evrakListesi.ajx\"]};",
    "window.app=t}();"
);

fn scanner_over(text: &str) -> Scanner {
    Scanner::from_source(
        SourceText::from_string("main.js", text),
        ScanConfig::for_path("main.js"),
    )
}

#[test]
fn test_full_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.js");
    fs::write(&path, PORTAL_SCRIPT).unwrap();

    let config = ScanConfig {
        margins: Margins::new(10, 40),
        ..ScanConfig::for_path(&path)
    };
    let scanner = Scanner::open(config).unwrap();

    // Context
    let results = scanner
        .contexts(&["dosyaTaraflariAl", "dosyalariEsitle"])
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].snippets.len(), 1);
    assert_eq!(results[1].snippets.len(), 1);
    let text = format_contexts_as_text(&results);
    assert!(text.contains("--- MATCH FOR 'dosyaTaraflariAl' ---"));
    assert!(text.contains("--- MATCH FOR 'dosyalariEsitle' ---"));

    // Harvest
    let report = scanner.harvest(ENDPOINT_PATTERN).unwrap();
    assert_eq!(
        report.tokens,
        vec![
            "/portal/dosyaSync.ajx",
            "/portal/dosyaTaraflari.ajx",
            "/portal/evrakListesi.ajx",
        ]
    );

    // Quoted
    let quoted = scanner.quoted(".ajx").unwrap();
    assert_eq!(quoted.tokens, report.tokens);

    // Info
    let info = scanner.info();
    assert_eq!(info.byte_len, PORTAL_SCRIPT.len());
}

#[test]
fn test_not_found_single_term() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    let results = scanner.contexts(&["kullaniciBilgileri"]).unwrap();
    assert!(results[0].is_empty());
    assert_eq!(format_contexts_as_text(&results), "Not found\n");
}

#[test]
fn test_empty_term_fails_before_scanning() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    let err = scanner.contexts(&["dosyalariEsitle", ""]).unwrap_err();
    assert!(matches!(err, ScanError::InvalidTerm { .. }));
}

#[test]
fn test_invalid_pattern_fails_before_scanning() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    assert!(matches!(
        scanner.harvest("([a-z]+").unwrap_err(),
        ScanError::InvalidPattern { .. }
    ));
    assert!(matches!(
        scanner.pattern_contexts(&["dosya\\w+", "*bad"]).unwrap_err(),
        ScanError::InvalidPattern { .. }
    ));
}

#[test]
fn test_empty_pattern_rejected_like_pattern_contexts() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    assert!(matches!(
        scanner.harvest("").unwrap_err(),
        ScanError::InvalidTerm { .. }
    ));
    assert!(matches!(
        scanner.pattern_contexts(&[""]).unwrap_err(),
        ScanError::InvalidTerm { .. }
    ));
}

#[test]
fn test_queries_are_independent_and_repeatable() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    let before = scanner.harvest(ENDPOINT_PATTERN).unwrap();
    let _ = scanner.contexts(&["tasksRequests"]).unwrap();
    let after = scanner.harvest(ENDPOINT_PATTERN).unwrap();
    assert_eq!(before, after);

    let first = scanner.contexts(&["dosya"]).unwrap();
    let second = scanner.contexts(&["dosya"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pattern_contexts() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    let results = scanner.pattern_contexts(&[r"/portal/\w+\.ajx"]).unwrap();
    assert_eq!(results[0].snippets.len(), 4);
}

#[test]
fn test_contexts_for_explicit_margins() {
    let scanner = scanner_over("xxxdosyalariEsitleyyy");
    let term = SearchTerm::literal("dosyalariEsitle").unwrap();
    let results = scanner.contexts_for(&[term], Margins::new(3, 100));
    assert_eq!(results[0].snippets[0].text, "xxxdosyalariEsitleyyy");
}

#[test]
fn test_missing_source() {
    let dir = TempDir::new().unwrap();
    let result = Scanner::open(ScanConfig::for_path(dir.path().join("main.js")));
    assert!(matches!(result, Err(ScanError::InputUnavailable { .. })));
}

#[test]
fn test_json_reports() {
    let scanner = scanner_over(PORTAL_SCRIPT);
    let report = scanner.quoted(".ajx").unwrap();
    let json = format_as_json(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["query"], ".ajx");
    assert_eq!(parsed["tokens"].as_array().unwrap().len(), 3);
}
