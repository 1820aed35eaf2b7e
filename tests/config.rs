use std::collections::HashMap;
use std::path::PathBuf;

use mood_journal_core::config::{Config, DEFAULT_ENDPOINT};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_original_service_and_canvas() {
    let cfg = Config::from_lookup(lookup(&[]));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert_eq!((cfg.width, cfg.height), (800, 300));
}

#[test]
fn environment_overrides_defaults() {
    let cfg = Config::from_lookup(lookup(&[
        ("MOOD_JOURNAL_ENDPOINT", "http://analysis.local/analyze"),
        ("MOOD_JOURNAL_TIMEOUT_SECS", "5"),
        ("MOOD_JOURNAL_WIDTH", "400"),
        ("MOOD_JOURNAL_HEIGHT", " 150 "),
        ("MOOD_JOURNAL_OUT_DIR", "/tmp/moods"),
    ]));
    assert_eq!(cfg.endpoint, "http://analysis.local/analyze");
    assert_eq!(cfg.timeout_secs, 5);
    assert_eq!(cfg.width, 400);
    assert_eq!(cfg.height, 150);
    assert_eq!(cfg.out_dir, PathBuf::from("/tmp/moods"));
}

#[test]
fn invalid_values_are_ignored() {
    let cfg = Config::from_lookup(lookup(&[
        ("MOOD_JOURNAL_ENDPOINT", "   "),
        ("MOOD_JOURNAL_TIMEOUT_SECS", "soon"),
        ("MOOD_JOURNAL_WIDTH", "0"),
        ("MOOD_JOURNAL_HEIGHT", "-3"),
    ]));
    assert_eq!(cfg, Config::default());
}
