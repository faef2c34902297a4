//! Immutable word lists used as the alphabet for passphrases.
//!
//! Word lists are loaded from memory, from untyped values
//! (for example deserialized configuration) or from text files.
//!
//! Files contain one word per line or lines in the dice
//! format used by the EFF word lists where each line is a
//! number followed by whitespace and the word:
//!
//! ```text
//! 11111	abacus
//! 11112	abdomen
//! ```
//!
//! The format is detected from the first non-blank line and
//! applied to the entire file.
use crate::{Error, Result};
use serde_json::Value;
use std::{
    collections::HashSet,
    path::Path,
    sync::{Arc, OnceLock},
};

/// Number of words in the bundled word list.
pub const EFF_WORD_COUNT: usize = 7776;

const EFF_LARGE_WORDLIST: &str =
    include_str!("../res/eff_large_wordlist.txt");

static EFF: OnceLock<Arc<WordList>> = OnceLock::new();

/// Line format of a word list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    /// One word per line.
    Plain,
    /// Dice roll number, whitespace and a word on each line.
    Dice,
}

impl WordListFormat {
    /// Detect the format from the first non-blank line.
    pub fn detect(line: &str) -> Self {
        if dice_word(line.trim()).is_some() {
            Self::Dice
        } else {
            Self::Plain
        }
    }
}

/// Ordered collection of words.
///
/// Positions are zero-based and stable for the lifetime of
/// the list. A list always contains at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a word list from a sequence of words.
    pub fn from_array<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Create a word list from untyped values.
    ///
    /// Every value must be a string.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyWordList);
        }
        let mut words = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match value {
                Value::String(word) => words.push(word.to_owned()),
                _ => {
                    return Err(Error::InvalidWordType {
                        index,
                        found: value_kind(value),
                    })
                }
            }
        }
        Ok(Self { words })
    }

    /// Load a word list from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            Error::WordListFileNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let (format, words) = parse_lines(&contents);
        tracing::debug!(
            path = %path.display(),
            format = ?format,
            words = words.len(),
            "word_list::from_file",
        );
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Parse a word list from text in either the plain
    /// or dice format.
    pub fn parse(text: &str) -> Result<Self> {
        let (_, words) = parse_lines(text);
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Bundled EFF large word list.
    ///
    /// The list is parsed on first access and the same
    /// instance is returned for the lifetime of the process.
    pub fn eff() -> Arc<WordList> {
        EFF.get_or_init(|| {
            let (format, words) = parse_lines(EFF_LARGE_WORDLIST);
            tracing::debug!(
                format = ?format,
                words = words.len(),
                "word_list::eff",
            );
            Arc::new(Self { words })
        })
        .clone()
    }

    /// Word at a position.
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(|word| word.as_str())
            .ok_or_else(|| Error::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Number of words.
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// All words in order.
    pub fn all(&self) -> &[String] {
        &self.words
    }

    /// Create a new word list without the given words.
    ///
    /// Words are compared exactly and the order of the
    /// remaining words is preserved.
    pub fn exclude_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Self> {
        let excluded: HashSet<&str> =
            words.iter().map(|word| AsRef::<str>::as_ref(word)).collect();
        let words: Vec<String> = self
            .words
            .iter()
            .filter(|word| !excluded.contains(word.as_str()))
            .cloned()
            .collect();
        tracing::debug!(
            before = self.count(),
            after = words.len(),
            "word_list::exclude_words",
        );
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Bits of entropy contributed by one uniformly
    /// random word.
    pub fn entropy_per_word(&self) -> f64 {
        if self.count() == 1 {
            return 0.0;
        }
        (self.count() as f64).log2()
    }

    /// Bits of entropy for a passphrase of `num_words` words.
    pub fn entropy_bits(&self, num_words: usize) -> f64 {
        self.entropy_per_word() * num_words as f64
    }
}

/// Split text into trimmed, non-blank lines and extract the
/// words according to the detected format.
fn parse_lines(text: &str) -> (WordListFormat, Vec<String>) {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    let format = lines
        .peek()
        .map(|line| WordListFormat::detect(line))
        .unwrap_or(WordListFormat::Plain);

    let words = lines
        .map(|line| match format {
            // Lines without a number are kept verbatim
            WordListFormat::Dice => dice_word(line).unwrap_or(line),
            WordListFormat::Plain => line,
        })
        .map(str::to_owned)
        .collect();

    (format, words)
}

/// Word from a trimmed dice format line.
fn dice_word(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let word = rest.trim_start();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
