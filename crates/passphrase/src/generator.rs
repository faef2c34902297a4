//! Generate passphrases from a word list.
//!
//! Words are drawn independently and uniformly at random so
//! the same word may appear more than once. A random digit
//! can be appended to one word and the first character of
//! every word can be capitalized.
use crate::{word_list::WordList, Error, RandomSource, Result, DIGITS};
use rand::rngs::OsRng;
use secrecy::SecretString;
use std::sync::Arc;

/// Minimum number of words in a passphrase.
pub const MIN_WORDS: usize = 3;

/// Default ceiling for the number of words in a passphrase.
///
/// Use [PassphraseGenerator::with_max_words] to change the
/// ceiling for a generator.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Default number of words in a passphrase.
pub const DEFAULT_WORDS: usize = 3;

/// Default separator between words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default options used when a generate option is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Number of words.
    pub num_words: usize,
    /// Separator between words.
    pub separator: String,
    /// Capitalize the first character of every word.
    pub capitalize: bool,
    /// Append a random digit to one of the words.
    pub include_number: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            num_words: DEFAULT_WORDS,
            separator: DEFAULT_SEPARATOR.to_owned(),
            capitalize: false,
            include_number: false,
        }
    }
}

/// Options for generating a passphrase.
///
/// Omitted options fall back to the defaults of the
/// generator. When a target entropy is given it determines
/// the number of words.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Number of words.
    pub num_words: Option<usize>,
    /// Separator between words.
    pub separator: Option<String>,
    /// Capitalize the first character of every word.
    pub capitalize: Option<bool>,
    /// Append a random digit to one of the words.
    pub include_number: Option<bool>,
    /// Minimum bits of entropy from word selection.
    pub target_entropy_bits: Option<f64>,
}

impl GenerateOptions {
    /// Create options that use the generator defaults.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the number of words.
    pub fn num_words(mut self, num_words: usize) -> Self {
        self.num_words = Some(num_words);
        self
    }

    /// Set the separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set whether words are capitalized.
    pub fn capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = Some(capitalize);
        self
    }

    /// Set whether a random digit is appended.
    pub fn include_number(mut self, include_number: bool) -> Self {
        self.include_number = Some(include_number);
        self
    }

    /// Derive the number of words from a target entropy.
    pub fn target_entropy_bits(mut self, bits: f64) -> Self {
        self.target_entropy_bits = Some(bits);
        self
    }
}

/// Passphrase generator.
///
/// The generator owns its randomness source and generating
/// requires a mutable borrow; to use one generator from
/// several threads put it behind a mutex.
///
/// Generated passphrases are never logged.
pub struct PassphraseGenerator<R = OsRng> {
    word_list: Arc<WordList>,
    rng: R,
    defaults: Defaults,
    max_words: usize,
}

impl PassphraseGenerator<OsRng> {
    /// Create a generator for the bundled word list using
    /// the operating system random number generator.
    pub fn new() -> Self {
        Self::new_with_word_list(WordList::eff())
    }

    /// Create a generator for a word list using the operating
    /// system random number generator.
    pub fn new_with_word_list(word_list: Arc<WordList>) -> Self {
        Self::new_with_rng(word_list, OsRng)
    }
}

impl Default for PassphraseGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PassphraseGenerator<R> {
    /// Create a generator with a randomness source.
    pub fn new_with_rng(word_list: Arc<WordList>, rng: R) -> Self {
        Self {
            word_list,
            rng,
            defaults: Default::default(),
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    /// Change the maximum number of words.
    ///
    /// The current default number of words must not exceed
    /// the new maximum.
    pub fn with_max_words(mut self, max_words: usize) -> Result<Self> {
        if self.defaults.num_words > max_words {
            return Err(Error::InvalidWordCount {
                requested: self.defaults.num_words,
                min: MIN_WORDS,
                max: max_words,
            });
        }
        self.max_words = max_words;
        Ok(self)
    }

    /// Minimum number of words.
    pub fn min_words(&self) -> usize {
        MIN_WORDS
    }

    /// Maximum number of words.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Current defaults.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Word list used by this generator.
    pub fn word_list(&self) -> &Arc<WordList> {
        &self.word_list
    }

    /// Replace the defaults.
    pub fn set_defaults(
        &mut self,
        num_words: usize,
        separator: impl Into<String>,
        capitalize: bool,
        include_number: bool,
    ) -> Result<&mut Self> {
        self.check_word_count(num_words)?;
        self.defaults = Defaults {
            num_words,
            separator: separator.into(),
            capitalize,
            include_number,
        };
        Ok(self)
    }

    /// Bits of entropy from word selection for a passphrase
    /// generated with the given options.
    pub fn entropy_bits(&self, options: &GenerateOptions) -> Result<f64> {
        let num_words = self.resolve_word_count(options)?;
        Ok(self.word_list.entropy_bits(num_words))
    }

    /// Generate a passphrase.
    pub fn generate(
        &mut self,
        options: &GenerateOptions,
    ) -> Result<SecretString> {
        let num_words = self.resolve_word_count(options)?;
        let capitalize =
            options.capitalize.unwrap_or(self.defaults.capitalize);
        let include_number = options
            .include_number
            .unwrap_or(self.defaults.include_number);

        let last = self.word_list.count() - 1;
        let mut words = Vec::with_capacity(num_words.min(DEFAULT_MAX_WORDS));
        for _ in 0..num_words {
            let index = self.rng.random_int(0, last);
            words.push(self.word_list.word_at(index)?.to_owned());
        }

        if include_number && !words.is_empty() {
            let position = self.rng.random_int(0, words.len() - 1);
            let digit = DIGITS[self.rng.random_int(0, DIGITS.len() - 1)];
            words[position].push(digit);
        }

        if capitalize {
            for word in words.iter_mut() {
                *word = capitalize_first_character(word);
            }
        }

        tracing::debug!(
            num_words,
            capitalize,
            include_number,
            "passphrase::generate",
        );

        let separator = options
            .separator
            .as_deref()
            .unwrap_or(self.defaults.separator.as_str());
        Ok(SecretString::from(words.join(separator)))
    }

    /// Generate multiple passphrases.
    pub fn generate_many(
        &mut self,
        count: usize,
        options: &GenerateOptions,
    ) -> Result<Vec<SecretString>> {
        let mut results = Vec::new();
        for _ in 0..count {
            results.push(self.generate(options)?);
        }
        Ok(results)
    }

    fn check_word_count(&self, num_words: usize) -> Result<()> {
        if !(MIN_WORDS..=self.max_words).contains(&num_words) {
            return Err(Error::InvalidWordCount {
                requested: num_words,
                min: MIN_WORDS,
                max: self.max_words,
            });
        }
        Ok(())
    }

    fn resolve_word_count(&self, options: &GenerateOptions) -> Result<usize> {
        let num_words = if let Some(bits) = options.target_entropy_bits {
            if bits.is_nan() || bits <= 0.0 {
                return Err(Error::InvalidEntropyTarget(bits));
            }
            let per_word = self.word_list.entropy_per_word();
            // No number of words reaches the target
            if per_word == 0.0 {
                return Err(Error::InvalidEntropyTarget(bits));
            }
            let desired = (bits / per_word).ceil();
            (desired as usize).max(MIN_WORDS)
        } else {
            options.num_words.unwrap_or(self.defaults.num_words)
        };
        self.check_word_count(num_words)?;
        Ok(num_words)
    }
}

/// Uppercase the first character of a string.
///
/// Operates on characters rather than bytes; characters
/// without an uppercase form are left unchanged.
pub fn capitalize_first_character(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
