use serde::{Deserialize, Serialize};

pub const LOWER_ALPHA: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()[]";

/// Consonants used when building syllables.
pub const CONSONANTS: &str = "bcdfghjklmnprstvwz";
pub const VOWELS: &str = "aeiou";
pub const CONSONANTS_AND_VOWELS: &str = "bcdfghjklmnprstvwzaeiou";
/// Sentence terminators.
pub const PUNCTUATION: &str = ".?;!:";

/// Which family of characters a draw may produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolType {
    Alpha,
    Numeric,
    Symbols,
    AlphaNumeric,
    #[default]
    All,
    Custom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    Lower,
    Upper,
    #[default]
    Both,
}

/// Character pool configuration.
///
/// `pool` is only read when `pool_type` is [`PoolType::Custom`]; casing is
/// applied to alphabetic characters of every pool, custom ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    #[serde(default)]
    pub pool_type: PoolType,
    #[serde(default)]
    pub casing: Casing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
}

impl TextOptions {
    pub fn new(pool_type: PoolType) -> Self {
        Self {
            pool_type,
            ..Self::default()
        }
    }

    pub fn custom(pool: impl Into<String>) -> Self {
        Self {
            pool_type: PoolType::Custom,
            casing: Casing::Both,
            pool: Some(pool.into()),
        }
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }
}

/// Resolve the character set a draw samples from.
///
/// A custom pool type without a pool resolves to an empty string; callers
/// decide whether that is an error.
pub fn resolve_text_pool(options: &TextOptions) -> String {
    let alpha = || match options.casing {
        Casing::Lower => LOWER_ALPHA.to_string(),
        Casing::Upper => UPPER_ALPHA.to_string(),
        Casing::Both => format!("{LOWER_ALPHA}{UPPER_ALPHA}"),
    };

    match options.pool_type {
        PoolType::Alpha => alpha(),
        PoolType::Numeric => NUMBERS.to_string(),
        PoolType::Symbols => SYMBOLS.to_string(),
        PoolType::AlphaNumeric => format!("{}{NUMBERS}", alpha()),
        PoolType::All => format!("{}{NUMBERS}{SYMBOLS}", alpha()),
        PoolType::Custom => {
            let pool = options.pool.as_deref().unwrap_or_default();
            match options.casing {
                Casing::Lower => pool.to_lowercase(),
                Casing::Upper => pool.to_uppercase(),
                Casing::Both => pool.to_string(),
            }
        }
    }
}
