use serde::{Deserialize, Serialize};

use crate::names::Gender;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixStyle {
    Full,
    #[default]
    Abbreviated,
}

/// Honorifics for a gender. A missing gender reads the male table.
pub fn name_prefixes(gender: Option<Gender>, style: PrefixStyle) -> &'static [&'static str] {
    match (gender.unwrap_or(Gender::Male), style) {
        (Gender::Male, PrefixStyle::Full) => &["Doctor", "Mister", "Sir"],
        (Gender::Male, PrefixStyle::Abbreviated) => &["Dr.", "Mr.", "Sr."],
        (Gender::Female, PrefixStyle::Full) => &["Doctor", "Miss", "Misses"],
        (Gender::Female, PrefixStyle::Abbreviated) => &["Dr.", "Miss", "Mrs."],
    }
}
