//! Integration tests for language detection
//!
//! Tests vocabulary scanning and regional bundles.

use polyphrase_languages::{LanguageRegistry, Region, detect_languages, optimal_region};

fn detect(text: &str) -> Vec<String> {
    detect_languages(LanguageRegistry::builtin(), text)
}

// =============================================================================
// Detection
// =============================================================================

#[test]
fn detects_compact_scripts_by_substring() {
    assert!(detect("クリックしたら .active を 切り替え").contains(&"ja".to_string()));
    assert!(detect(".active를토글").contains(&"ko".to_string()));
}

#[test]
fn detects_latin_scripts_by_whole_word() {
    let found = detect("alternar .activo en #boton");
    assert!(found.contains(&"es".to_string()));
    assert!(!found.contains(&"en".to_string()));
}

#[test]
fn english_is_never_reported() {
    assert!(detect("toggle .active on #button").is_empty());
    assert!(detect("").is_empty());
}

#[test]
fn short_latin_words_are_ignored() {
    // "al" is Spanish for "on" but too short to count
    assert!(!detect("al").contains(&"es".to_string()));
}

// =============================================================================
// Regions
// =============================================================================

#[test]
fn smallest_region_wins() {
    assert_eq!(optimal_region(&["ja", "zh"]), Some(Region::EastAsian));
    assert_eq!(optimal_region(&["en", "de"]), Some(Region::Western));
    assert_eq!(optimal_region(&["id"]), Some(Region::SoutheastAsian));
    assert_eq!(optimal_region(&["tr"]), Some(Region::Priority));
    assert_eq!(optimal_region(&["en", "xx"]), None);
}

#[test]
fn detected_languages_pick_a_bundle() {
    let found = detect("クリックしたら .active を 切り替え");
    let region = optimal_region(&found).unwrap();
    assert!(found.iter().all(|code| region.contains(code)));
}

#[test]
fn priority_covers_every_builtin() {
    for code in LanguageRegistry::builtin().codes() {
        assert!(Region::Priority.contains(code), "{code}");
    }
}
