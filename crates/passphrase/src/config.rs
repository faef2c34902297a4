//! Passphrase configuration.
use crate::{
    generator::{
        PassphraseGenerator, DEFAULT_MAX_WORDS, DEFAULT_SEPARATOR,
        DEFAULT_WORDS,
    },
    word_list::WordList,
    Error, RandomSource, Result,
};
use rand::rngs::OsRng;
use serde::Deserialize;
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

/// Configuration for a passphrase generator.
///
/// The word list and excluded words are kept untyped until
/// the generator is built so that malformed values are
/// reported with a dedicated error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PassphraseConfig {
    /// Default number of words.
    pub num_words: usize,

    /// Default separator between words.
    pub word_separator: String,

    /// Capitalize the first character of every word.
    pub capitalize: bool,

    /// Append a random digit to one of the words.
    pub include_number: bool,

    /// Maximum number of words.
    pub max_words: usize,

    /// Custom words, when absent or null the bundled
    /// word list is used.
    pub word_list: Option<Value>,

    /// Path to a word list file.
    ///
    /// Relative paths are resolved against the directory
    /// of the configuration file.
    pub word_list_file: Option<PathBuf>,

    /// Words removed from the word list.
    pub excluded_words: Option<Value>,

    /// Path the file was loaded from.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            num_words: DEFAULT_WORDS,
            word_separator: DEFAULT_SEPARATOR.to_owned(),
            capitalize: false,
            include_number: false,
            max_words: DEFAULT_MAX_WORDS,
            word_list: None,
            word_list_file: None,
            excluded_words: None,
            file: None,
        }
    }
}

impl PassphraseConfig {
    /// Load a config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFile(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let mut config: PassphraseConfig = toml::from_str(&contents)?;
        config.file = Some(path.canonicalize()?);

        if let Some(dir) = config.directory() {
            if let Some(file) = config.word_list_file.as_mut() {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }

        tracing::debug!(path = %path.display(), "config::load");
        Ok(config)
    }

    /// Create a config from an untyped JSON value.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Path the config was loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Parent directory of the configuration file.
    fn directory(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
    }

    /// Excluded words as strings.
    pub fn excluded_words(&self) -> Result<Vec<&str>> {
        match &self.excluded_words {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| {
                    value.as_str().ok_or(Error::InvalidExcludedWordsConfig)
                })
                .collect(),
            Some(_) => Err(Error::InvalidExcludedWordsConfig),
        }
    }

    /// Word list for this configuration with the
    /// excluded words removed.
    pub fn word_list(&self) -> Result<Arc<WordList>> {
        let word_list = match self.word_list.as_ref().filter(|v| !v.is_null())
        {
            Some(Value::Array(values)) => {
                if self.word_list_file.is_some() {
                    return Err(Error::InvalidWordListConfig);
                }
                Arc::new(WordList::from_values(values)?)
            }
            Some(_) => return Err(Error::InvalidWordListConfig),
            None => match &self.word_list_file {
                Some(path) => Arc::new(WordList::from_file(path)?),
                None => WordList::eff(),
            },
        };

        let excluded = self.excluded_words()?;
        if excluded.is_empty() {
            Ok(word_list)
        } else {
            Ok(Arc::new(word_list.exclude_words(&excluded)?))
        }
    }

    /// Build a generator using the operating system
    /// random number generator.
    pub fn generator(&self) -> Result<PassphraseGenerator<OsRng>> {
        self.generator_with_rng(OsRng)
    }

    /// Build a generator with a randomness source.
    pub fn generator_with_rng<R: RandomSource>(
        &self,
        rng: R,
    ) -> Result<PassphraseGenerator<R>> {
        let mut generator =
            PassphraseGenerator::new_with_rng(self.word_list()?, rng)
                .with_max_words(self.max_words)?;
        generator.set_defaults(
            self.num_words,
            self.word_separator.clone(),
            self.capitalize,
            self.include_number,
        )?;
        Ok(generator)
    }
}

impl FromStr for PassphraseConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
