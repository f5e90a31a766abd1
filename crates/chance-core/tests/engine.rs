use std::io::Write;

use chance_core::{
    Chance, ChanceError, ChanceOptions, Count, CpfFormat, FloatOptions, Nationality, TextOptions,
};

fn fixture(chance: &mut Chance) -> Vec<String> {
    vec![
        chance.integer(-50, 50).expect("valid range").to_string(),
        chance.any_floating().to_string(),
        chance.coin().to_string(),
        chance
            .string(&TextOptions::default(), Count::Random)
            .expect("default pool"),
        chance.paragraph(Count::Random),
        chance.cpf_as_text(CpfFormat::Masked),
        chance
            .floating(FloatOptions::between(0, 10).with_fixed(2))
            .expect("valid options")
            .to_string(),
    ]
}

#[test]
fn same_seed_same_fixtures() {
    let mut left = Chance::from_seed(2024);
    let mut right = Chance::from_seed(2024);
    assert_eq!(fixture(&mut left), fixture(&mut right));
    assert_eq!(left.seed(), 2024);
}

#[test]
fn different_seeds_diverge() {
    let mut left = Chance::from_seed(1);
    let mut right = Chance::from_seed(2);
    assert_ne!(fixture(&mut left), fixture(&mut right));
}

#[test]
fn entropy_seed_can_be_replayed() {
    let mut original = Chance::new();
    let mut replay = Chance::from_seed(original.seed());
    assert_eq!(fixture(&mut original), fixture(&mut replay));
}

#[test]
fn options_parse_from_toml_and_json() {
    let options = ChanceOptions::from_toml_str("seed = 42\ndefault_nationality = \"brazilian\"\n")
        .expect("parse toml");
    assert_eq!(options.seed, Some(42));
    assert_eq!(options.default_nationality, Some(Nationality::Brazilian));

    let options = ChanceOptions::from_json_str(r#"{"seed": 7}"#).expect("parse json");
    assert_eq!(options, ChanceOptions::seeded(7));

    let encoded = ChanceOptions::seeded(9).to_toml_string().expect("encode");
    assert_eq!(
        ChanceOptions::from_toml_str(&encoded).expect("reparse"),
        ChanceOptions::seeded(9)
    );
}

#[test]
fn options_reject_unknown_fields() {
    assert!(matches!(
        ChanceOptions::from_toml_str("sead = 1"),
        Err(ChanceError::Toml(_))
    ));
    assert!(matches!(
        ChanceOptions::from_json_str(r#"{"seed": "x"}"#),
        Err(ChanceError::Json(_))
    ));
}

#[test]
fn options_load_by_extension() {
    let dir = std::env::temp_dir().join(format!("chance-options-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");

    let toml_path = dir.join("chance.toml");
    let mut file = std::fs::File::create(&toml_path).expect("create toml");
    writeln!(file, "seed = 5").expect("write toml");
    assert_eq!(
        ChanceOptions::load(&toml_path).expect("load toml"),
        ChanceOptions::seeded(5)
    );

    let json_path = dir.join("chance.json");
    std::fs::write(&json_path, r#"{"seed": 6}"#).expect("write json");
    let options = ChanceOptions::load(&json_path).expect("load json");
    assert_eq!(Chance::with_options(options).seed(), 6);

    let missing = ChanceOptions::load(&dir.join("missing.toml"));
    assert!(matches!(missing, Err(ChanceError::Io(_))));

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn toml_encode_failures_keep_their_own_variant() {
    let err = <toml::ser::Error as serde::ser::Error>::custom("unsupported value");
    assert!(matches!(ChanceError::from(err), ChanceError::TomlSer(_)));
}
