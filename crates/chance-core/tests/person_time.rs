use chance_core::{
    Chance, ChanceOptions, FirstNameOptions, Gender, HourFormat, Nationality, PrefixStyle,
};
use chance_locale::{first_names, name_prefixes};

#[test]
fn first_name_comes_from_the_requested_table() {
    let mut chance = Chance::from_seed(1);
    for _ in 0..1000 {
        let gender = chance.gender();
        let nationality = chance.nationality();
        let name = chance.first_name(FirstNameOptions {
            gender: Some(gender),
            nationality: Some(nationality),
        });
        assert!(first_names(gender, nationality).contains(&name));
    }
}

#[test]
fn open_first_name_options_are_drawn() {
    let mut chance = Chance::from_seed(2);
    for _ in 0..200 {
        let name = chance.first_name(FirstNameOptions::default());
        let known = Nationality::ALL.iter().any(|nationality| {
            Gender::ALL
                .iter()
                .any(|gender| first_names(*gender, *nationality).contains(&name))
        });
        assert!(known, "{name}");
    }
}

#[test]
fn configured_nationality_is_the_fallback() {
    let mut chance = Chance::with_options(ChanceOptions {
        seed: Some(3),
        default_nationality: Some(Nationality::Italian),
    });
    for _ in 0..200 {
        let name = chance.first_name(FirstNameOptions::gender(Gender::Female));
        assert!(first_names(Gender::Female, Nationality::Italian).contains(&name));
    }
}

#[test]
fn gender_and_nationality_cover_all_variants() {
    let mut chance = Chance::from_seed(4);
    let genders: std::collections::HashSet<_> = (0..200).map(|_| chance.gender()).collect();
    assert_eq!(genders.len(), Gender::ALL.len());
    let nationalities: std::collections::HashSet<_> =
        (0..200).map(|_| chance.nationality()).collect();
    assert_eq!(nationalities.len(), Nationality::ALL.len());
}

#[test]
fn name_prefix_uses_style() {
    let mut chance = Chance::from_seed(5);
    for _ in 0..100 {
        let prefix = chance.name_prefix(Some(Gender::Female), PrefixStyle::Full);
        assert!(name_prefixes(Some(Gender::Female), PrefixStyle::Full).contains(&prefix));
        let prefix = chance.name_prefix(None, PrefixStyle::Abbreviated);
        assert!(["Dr.", "Mr.", "Sr."].contains(&prefix));
    }
}

#[test]
fn hour_respects_format() {
    let mut chance = Chance::from_seed(6);
    for _ in 0..1000 {
        assert!(chance.hour(HourFormat::TwentyFour) <= 23);
        assert!((1..=12).contains(&chance.hour(HourFormat::Twelve)));
    }
}

#[test]
fn minute_and_second_stay_below_sixty() {
    let mut chance = Chance::from_seed(7);
    for _ in 0..1000 {
        assert!(chance.minute() <= 59);
        assert!(chance.second() <= 59);
    }
}
