use tracing::debug;

use crate::config::ChanceOptions;
use crate::random::RandomSource;

/// Fixture generator.
///
/// Holds the only mutable state of the library: its [`RandomSource`]. The
/// engine is `Send` but performs no locking; give each caller its own
/// instance or wrap a shared one in a `Mutex`. It is not `Clone`; replay a
/// stream by building a second engine from [`Chance::seed`].
#[derive(Debug)]
pub struct Chance {
    pub(crate) source: RandomSource,
    pub(crate) options: ChanceOptions,
}

impl Chance {
    /// Engine seeded from entropy.
    pub fn new() -> Self {
        Self::with_options(ChanceOptions::default())
    }

    /// Engine with a fixed seed; identical call sequences yield identical
    /// output.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_options(ChanceOptions::seeded(seed))
    }

    pub fn with_options(options: ChanceOptions) -> Self {
        let source = match options.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_entropy(),
        };
        debug!(
            seed = source.seed(),
            seeded = options.seed.is_some(),
            "random source ready"
        );
        Self { source, options }
    }

    /// Seed of the underlying source, including entropy-drawn seeds.
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn options(&self) -> &ChanceOptions {
        &self.options
    }
}

impl Default for Chance {
    fn default() -> Self {
        Self::new()
    }
}
