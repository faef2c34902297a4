use anyhow::Result;
use passphrase::{Error, GenerateOptions, PassphraseConfig, WordList};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;
use serde_json::json;
use std::sync::Arc;

#[test]
fn config_defaults() -> Result<()> {
    let config: PassphraseConfig = "".parse()?;
    assert_eq!(3, config.num_words);
    assert_eq!("-", config.word_separator);
    assert_eq!(20, config.max_words);
    assert!(!config.capitalize);
    assert!(!config.include_number);

    let word_list = config.word_list()?;
    assert!(Arc::ptr_eq(&WordList::eff(), &word_list));
    Ok(())
}

#[test]
fn config_toml() -> Result<()> {
    let config: PassphraseConfig = r#"
num_words = 5
word_separator = "."
capitalize = true
include_number = true
word_list = ["one", "two", "three", "four"]
excluded_words = ["four"]
"#
    .parse()?;

    let mut generator = config.generator_with_rng(StdRng::seed_from_u64(1))?;
    assert_eq!(3, generator.word_list().count());
    let passphrase = generator.generate(&GenerateOptions::new())?;
    let parts: Vec<&str> = passphrase.expose_secret().split('.').collect();
    assert_eq!(5, parts.len());
    for part in parts {
        let word = part.trim_end_matches(|c: char| c.is_ascii_digit());
        assert!(["One", "Two", "Three"].contains(&word));
    }
    Ok(())
}

#[test]
fn config_json() -> Result<()> {
    let config = PassphraseConfig::from_json(json!({
        "num_words": 4,
        "word_separator": " ",
        "word_list": null,
        "excluded_words": ["abacus", "zoom"],
    }))?;
    let mut generator = config.generator()?;
    assert_eq!(7774, generator.word_list().count());
    assert_eq!("abdomen", generator.word_list().word_at(0)?);
    let passphrase = generator.generate(&GenerateOptions::new())?;
    assert_eq!(4, passphrase.expose_secret().split(' ').count());
    Ok(())
}

#[test]
fn config_invalid_word_list() -> Result<()> {
    let config = PassphraseConfig::from_json(json!({
        "word_list": "abacus",
    }))?;
    assert!(matches!(
        config.word_list(),
        Err(Error::InvalidWordListConfig)
    ));

    let config = PassphraseConfig::from_json(json!({
        "word_list": ["abacus", 42],
    }))?;
    assert!(matches!(
        config.word_list(),
        Err(Error::InvalidWordType { index: 1, .. })
    ));

    let config = PassphraseConfig::from_json(json!({
        "word_list": [],
    }))?;
    assert!(matches!(config.word_list(), Err(Error::EmptyWordList)));
    Ok(())
}

#[test]
fn config_invalid_excluded_words() -> Result<()> {
    let config = PassphraseConfig::from_json(json!({
        "excluded_words": "abacus",
    }))?;
    assert!(matches!(
        config.word_list(),
        Err(Error::InvalidExcludedWordsConfig)
    ));

    let config = PassphraseConfig::from_json(json!({
        "excluded_words": ["abacus", { "word": "zoom" }],
    }))?;
    assert!(matches!(
        config.word_list(),
        Err(Error::InvalidExcludedWordsConfig)
    ));
    Ok(())
}

#[test]
fn config_exclude_everything() -> Result<()> {
    let config = PassphraseConfig::from_json(json!({
        "word_list": ["a", "b"],
        "excluded_words": ["a", "b"],
    }))?;
    assert!(matches!(config.word_list(), Err(Error::EmptyWordList)));
    Ok(())
}

#[test]
fn config_invalid_word_count() -> Result<()> {
    let config: PassphraseConfig = "num_words = 25".parse()?;
    assert!(matches!(
        config.generator(),
        Err(Error::InvalidWordCount {
            requested: 25,
            min: 3,
            max: 20
        })
    ));

    let config: PassphraseConfig = "num_words = 25\nmax_words = 30".parse()?;
    let generator = config.generator()?;
    assert_eq!(25, generator.defaults().num_words);
    assert_eq!(30, generator.max_words());
    Ok(())
}

#[test]
fn config_load_word_list_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("words.txt"),
        "11 red\n12 green\n13 blue\n",
    )?;
    let config_file = dir.path().join("passphrase.toml");
    std::fs::write(
        &config_file,
        "word_list_file = \"words.txt\"\nword_separator = \" \"\n",
    )?;

    let config = PassphraseConfig::load(&config_file)?;
    assert!(config.file().is_some());
    let word_list = config.word_list()?;
    assert_eq!(&["red", "green", "blue"], word_list.all());
    Ok(())
}

#[test]
fn config_load_missing() {
    let result = PassphraseConfig::load("does-not-exist.toml");
    assert!(matches!(result, Err(Error::NotFile(_))));
}

#[test]
fn config_word_list_and_file() -> Result<()> {
    let config = PassphraseConfig::from_json(json!({
        "word_list": ["a", "b"],
        "word_list_file": "words.txt",
    }))?;
    assert!(matches!(
        config.word_list(),
        Err(Error::InvalidWordListConfig)
    ));
    Ok(())
}

#[test]
fn config_malformed_toml() {
    let result: Result<PassphraseConfig, Error> =
        "num_words = \"six\"".parse();
    assert!(matches!(result, Err(Error::TomlDeser(_))));
}
