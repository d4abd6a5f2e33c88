//! End-to-end resolution and lookup across store strategies.

use std::fs;

use flagpack::{
    get_flag_url, is_valid_iso_code, iso_to_alpha2, resolve_flag_alias, FlagSize, FlagStore,
};

#[test]
fn alias_then_iso_chain_for_uk() {
    let aliased = resolve_flag_alias("UK").unwrap();
    assert_eq!(aliased, "GB");
    assert_eq!(iso_to_alpha2(aliased), Some("GB"));
    assert_eq!(
        get_flag_url(aliased, FlagSize::Medium),
        get_flag_url("GB", FlagSize::Medium)
    );
    // the lookup entry point applies the alias chain itself
    assert_eq!(
        get_flag_url("UK", FlagSize::Medium),
        get_flag_url("GB", FlagSize::Medium)
    );
    assert!(!get_flag_url("GB", FlagSize::Medium).is_empty());
}

#[test]
fn gb_scenario_across_all_encodings() {
    assert_eq!(iso_to_alpha2("826"), Some("GB"));
    assert_eq!(iso_to_alpha2("gbr"), Some("GB"));
    assert!(is_valid_iso_code("GBR"));
    assert_eq!(
        get_flag_url("826", FlagSize::Small),
        get_flag_url("GB", FlagSize::Small)
    );
}

#[tokio::test]
async fn embedded_store_resolves_iso_formats() {
    let store = FlagStore::embedded();
    let by_alpha3 = store.flag_url("USA", FlagSize::Large).await;
    let by_alpha2 = store.flag_url("US", FlagSize::Large).await;
    assert!(!by_alpha3.is_empty());
    assert_eq!(by_alpha3, by_alpha2);
}

#[tokio::test]
async fn unknown_code_yields_empty_not_panic() {
    let store = FlagStore::embedded();
    assert_eq!(store.flag_url("ZZ9", FlagSize::Medium).await, "");
    assert_eq!(store.import_flag("ZZ9", FlagSize::Medium).await, "");
}

#[tokio::test]
async fn directory_store_reads_a_pregenerated_tree() {
    let dir = tempfile::tempdir().unwrap();
    for size in ["s", "m", "l"] {
        let subdir = dir.path().join(size);
        fs::create_dir_all(&subdir).unwrap();
        fs::write(subdir.join("NL.svg"), format!("<svg data-size=\"{size}\"/>")).unwrap();
    }

    let store = FlagStore::directory(dir.path());
    assert_eq!(
        store.flag_url("NLD", FlagSize::Small).await,
        "<svg data-size=\"s\"/>"
    );
    assert_eq!(
        store.flag_url(" nl ", FlagSize::Large).await,
        "<svg data-size=\"l\"/>"
    );
    // a code with no file in the tree fails soft
    assert_eq!(store.flag_url("DE", FlagSize::Small).await, "");
}

#[tokio::test]
async fn missing_asset_root_fails_soft() {
    let store = FlagStore::directory("/nonexistent/flagpack/assets");
    assert_eq!(store.flag_url("NL", FlagSize::Medium).await, "");
}

#[test]
fn validity_follows_resolution() {
    assert!(is_valid_iso_code("nld"));
    assert!(is_valid_iso_code(" 528 "));
    assert!(!is_valid_iso_code("XQ"));
    assert!(!is_valid_iso_code(""));
}

#[test]
fn globe_aliases_reach_packaged_artwork() {
    for alias in ["Earth", "globe", "WORLD"] {
        let code = resolve_flag_alias(alias).unwrap();
        assert_eq!(code, "001");
        assert!(!get_flag_url(code, FlagSize::Large).is_empty());
    }
}
