use tracing::trace;

use chance_locale::{
    CONSONANTS, CONSONANTS_AND_VOWELS, Casing, PUNCTUATION, TextOptions, VOWELS,
    resolve_text_pool,
};

use crate::engine::Chance;
use crate::error::{ChanceError, Result};

pub const MIN_CHARS_FOR_STRING: usize = 5;
pub const MAX_CHARS_FOR_STRING: usize = 20;
pub const MIN_CHARS_FOR_SYLLABLE: usize = 2;
pub const MAX_CHARS_FOR_SYLLABLE: usize = 3;
pub const MIN_SYLLABLES_FOR_WORD: usize = 1;
pub const MAX_SYLLABLES_FOR_WORD: usize = 3;
pub const MIN_WORDS_FOR_SENTENCE: usize = 12;
pub const MAX_WORDS_FOR_SENTENCE: usize = 18;
pub const MIN_SENTENCES_FOR_PARAGRAPH: usize = 3;
pub const MAX_SENTENCES_FOR_PARAGRAPH: usize = 7;

/// How many elements a composite draw produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Count {
    /// Drawn from the production's default range.
    #[default]
    Random,
    Exact(usize),
}

impl Count {
    fn resolve(self, chance: &mut Chance, min: usize, max: usize) -> usize {
        match self {
            Count::Random => chance.source.uniform_int(min, max),
            Count::Exact(count) => count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordOptions {
    pub syllables: Count,
    pub capitalize: bool,
}

impl WordOptions {
    pub fn syllables(count: usize) -> Self {
        Self {
            syllables: Count::Exact(count),
            capitalize: false,
        }
    }

    pub fn capitalized(mut self) -> Self {
        self.capitalize = true;
        self
    }
}

impl Chance {
    /// `length` characters drawn uniformly from the pool `options` resolves to.
    pub fn characters(&mut self, options: &TextOptions, length: usize) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let pool = pool_for(options)?;
        Ok((0..length).map(|_| self.pick_char(&pool)).collect())
    }

    pub fn character(&mut self, options: &TextOptions) -> Result<char> {
        let pool = pool_for(options)?;
        Ok(self.pick_char(&pool))
    }

    /// Random string; `Count::Random` picks a length in `[5, 20]`.
    pub fn string(&mut self, options: &TextOptions, length: Count) -> Result<String> {
        let length = length.resolve(self, MIN_CHARS_FOR_STRING, MAX_CHARS_FOR_STRING);
        if length == 0 {
            return Err(ChanceError::Length(
                "string length must be greater than zero".to_string(),
            ));
        }
        self.characters(options, length)
    }

    /// Two or three lowercase letters alternating roughly between consonants
    /// and vowels.
    pub fn syllable(&mut self) -> String {
        let length = self
            .source
            .uniform_int(MIN_CHARS_FOR_SYLLABLE, MAX_CHARS_FOR_SYLLABLE);
        let mut options = TextOptions::custom(CONSONANTS_AND_VOWELS).with_casing(Casing::Lower);
        let mut syllable = String::with_capacity(length);
        let mut previous: Option<char> = None;
        for _ in 0..length {
            let pool = match previous {
                None => CONSONANTS_AND_VOWELS,
                Some(ch) if !CONSONANTS.contains(ch) => CONSONANTS,
                Some(_) => VOWELS,
            };
            options.pool = Some(pool.to_string());
            let pool: Vec<char> = resolve_text_pool(&options).chars().collect();
            let ch = self.pick_char(&pool);
            syllable.push(ch);
            previous = Some(ch);
        }
        syllable
    }

    pub fn word(&mut self, options: WordOptions) -> String {
        let syllables = options
            .syllables
            .resolve(self, MIN_SYLLABLES_FOR_WORD, MAX_SYLLABLES_FOR_WORD);
        let word: String = (0..syllables).map(|_| self.syllable()).collect();
        if options.capitalize {
            capitalize(&word)
        } else {
            word
        }
    }

    /// Capitalised words separated by single spaces, ending in one
    /// punctuation character.
    pub fn sentence(&mut self, words: Count) -> String {
        let words = words.resolve(self, MIN_WORDS_FOR_SENTENCE, MAX_WORDS_FOR_SENTENCE);
        let joined = (0..words)
            .map(|_| self.word(WordOptions::default()))
            .collect::<Vec<_>>()
            .join(" ");
        let punctuation: Vec<char> = PUNCTUATION.chars().collect();
        let mut sentence = capitalize(&joined);
        sentence.push(self.pick_char(&punctuation));
        sentence
    }

    pub fn paragraph(&mut self, sentences: Count) -> String {
        let sentences = sentences.resolve(
            self,
            MIN_SENTENCES_FOR_PARAGRAPH,
            MAX_SENTENCES_FOR_PARAGRAPH,
        );
        trace!(sentences, "building paragraph");
        (0..sentences)
            .map(|_| self.sentence(Count::Random))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `pool` must not be empty.
    pub(crate) fn pick_char(&mut self, pool: &[char]) -> char {
        debug_assert!(!pool.is_empty(), "pick_char called with an empty pool");
        pool[self.source.uniform_int(0, pool.len() - 1)]
    }
}

fn pool_for(options: &TextOptions) -> Result<Vec<char>> {
    let pool: Vec<char> = resolve_text_pool(options).chars().collect();
    if pool.is_empty() {
        return Err(ChanceError::Range(format!(
            "character pool for {:?} is empty",
            options.pool_type
        )));
    }
    Ok(pool)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_touches_only_the_first_letter() {
        assert_eq!(capitalize("bako tiru"), "Bako tiru");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Ja"), "Ja");
    }
}
