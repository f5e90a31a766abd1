//! Lookup data consumed by the Chance engine.
//!
//! Everything in this crate is a pure function over static tables: character
//! pools for text synthesis, first names per gender and nationality, and name
//! prefixes. Randomness lives in `chance-core`.

pub mod names;
pub mod pool;
pub mod prefix;

pub use names::{Gender, Nationality, first_names};
pub use pool::{
    CONSONANTS, CONSONANTS_AND_VOWELS, Casing, LOWER_ALPHA, NUMBERS, PUNCTUATION, PoolType,
    SYMBOLS, TextOptions, UPPER_ALPHA, VOWELS, resolve_text_pool,
};
pub use prefix::{PrefixStyle, name_prefixes};
