use chance_locale::{
    CONSONANTS, CONSONANTS_AND_VOWELS, Casing, LOWER_ALPHA, NUMBERS, PoolType, SYMBOLS,
    TextOptions, VOWELS, resolve_text_pool,
};

#[test]
fn default_pool_contains_letters_digits_and_symbols() {
    let pool = resolve_text_pool(&TextOptions::default());
    for ch in LOWER_ALPHA.chars().chain(NUMBERS.chars()).chain(SYMBOLS.chars()) {
        assert!(pool.contains(ch), "missing {ch}");
    }
    assert!(pool.contains('Z'));
}

#[test]
fn alpha_pool_respects_casing() {
    let lower = resolve_text_pool(&TextOptions::new(PoolType::Alpha).with_casing(Casing::Lower));
    assert_eq!(lower, LOWER_ALPHA);

    let upper = resolve_text_pool(&TextOptions::new(PoolType::Alpha).with_casing(Casing::Upper));
    assert!(upper.chars().all(|ch| ch.is_ascii_uppercase()));
    assert_eq!(upper.len(), 26);
}

#[test]
fn custom_pool_applies_casing() {
    let options = TextOptions::custom("AbC").with_casing(Casing::Lower);
    assert_eq!(resolve_text_pool(&options), "abc");

    let options = TextOptions::custom("AbC");
    assert_eq!(resolve_text_pool(&options), "AbC");
}

#[test]
fn custom_pool_without_pool_is_empty() {
    let options = TextOptions::new(PoolType::Custom);
    assert!(resolve_text_pool(&options).is_empty());
}

#[test]
fn syllable_pools_are_consistent() {
    assert_eq!(CONSONANTS_AND_VOWELS, format!("{CONSONANTS}{VOWELS}"));
    assert!(VOWELS.chars().all(|ch| !CONSONANTS.contains(ch)));
}

#[test]
fn text_options_deserialize_with_defaults() {
    let options: TextOptions =
        serde_json::from_str(r#"{"pool_type": "custom", "pool": "xyz"}"#).expect("parse options");
    assert_eq!(options.pool_type, PoolType::Custom);
    assert_eq!(options.casing, Casing::Both);
    assert_eq!(options.pool.as_deref(), Some("xyz"));
}
