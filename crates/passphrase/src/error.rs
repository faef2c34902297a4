use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the passphrase library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a word list would contain no words.
    #[error("word list must contain at least one word")]
    EmptyWordList,

    /// Error generated when an untyped word list entry is not a string.
    #[error("word list entry at position {index} is not a string (found {found})")]
    InvalidWordType {
        /// Position of the offending entry.
        index: usize,
        /// Kind of value that was found.
        found: &'static str,
    },

    /// Error generated when a word list file does not exist
    /// or cannot be read.
    #[error("word list file {} not found or unreadable", .path.display())]
    WordListFileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error generated when a word list index is out of bounds.
    #[error("index {index} is out of range for a word list of {count} words")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of words in the list.
        count: usize,
    },

    /// Error generated when a word count is outside the
    /// configured bounds.
    #[error("number of words must be between {min} and {max}, got {requested}")]
    InvalidWordCount {
        /// Requested number of words.
        requested: usize,
        /// Minimum number of words.
        min: usize,
        /// Maximum number of words.
        max: usize,
    },

    /// Error generated when a target entropy is not a
    /// positive number of bits or the word list cannot
    /// reach it.
    #[error("target entropy of {0} bits is not positive or unreachable")]
    InvalidEntropyTarget(f64),

    /// Error generated when the configured word list is not
    /// an array of strings.
    #[error("word list configuration must be an array of strings")]
    InvalidWordListConfig,

    /// Error generated when the configured excluded words are
    /// not an array of strings.
    #[error("excluded words configuration must be an array of strings")]
    InvalidExcludedWordsConfig,

    /// Error generated when a configuration file does not exist.
    #[error("path {} is not a file", .0.display())]
    NotFile(PathBuf),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated deserializing from TOML.
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    /// Error generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
