//! Seeded fixture synthesis for tests.
//!
//! [`Chance`] owns a single ChaCha8 random source and exposes bounded
//! numbers, fixed-precision floats, pronounceable nonsense text, valid
//! Brazilian CPF numbers, person data and clock values. Build it from an
//! explicit seed to get the same fixtures on every run.

pub mod config;
pub mod cpf;
pub mod engine;
pub mod error;
pub mod numbers;
pub mod person;
pub mod random;
pub mod text;
pub mod time;

pub use chance_locale::{Casing, Gender, Nationality, PoolType, PrefixStyle, TextOptions};
pub use config::ChanceOptions;
pub use cpf::{Cpf, CpfFormat};
pub use engine::Chance;
pub use error::{ChanceError, Result};
pub use numbers::{FloatOptions, NaturalRange};
pub use person::FirstNameOptions;
pub use random::RandomSource;
pub use text::{Count, WordOptions};
pub use time::HourFormat;
