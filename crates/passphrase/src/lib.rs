//! Generate memorable passphrases by joining words drawn
//! uniformly at random from a word list.
//!
//! The bundled word list is the EFF large diceware list of
//! 7776 words so every word contributes about 12.9 bits of
//! entropy.
//!
//! ```
//! use passphrase::{
//!     secrecy::ExposeSecret, GenerateOptions, PassphraseGenerator,
//! };
//!
//! # fn main() -> passphrase::Result<()> {
//! let mut generator = PassphraseGenerator::new();
//! let options = GenerateOptions::new().num_words(6).separator(" ");
//! let passphrase = generator.generate(&options)?;
//! assert_eq!(6, passphrase.expose_secret().split(' ').count());
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod config;
mod error;
pub mod generator;
mod random;
pub mod word_list;

pub use config::PassphraseConfig;
pub use error::Error;
pub use generator::{
    capitalize_first_character, Defaults, GenerateOptions,
    PassphraseGenerator, DEFAULT_MAX_WORDS, DEFAULT_SEPARATOR,
    DEFAULT_WORDS, MIN_WORDS,
};
pub use random::RandomSource;
pub use word_list::{WordList, WordListFormat, EFF_WORD_COUNT};

pub use secrecy;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
