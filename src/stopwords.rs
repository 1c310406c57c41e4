use std::{collections::HashSet, io::{self, Read}, path::Path};

use log::debug;

use crate::{error::Result, frequency::FrequencyMap, fs_helpers, word_filtering::scan_for_words};

pub const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";

/// Words excluded from the analysis. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Parses a word list with the raw word grammar. Entries are taken as
    /// written: `ab-cd` stays a single stopword and case is not folded.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(scan_for_words(text))
    }

    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs_helpers::read_text_file(path)?;
        let stopwords = Self::from_text(&text);
        debug!("{} stopwords loaded from {:?}", stopwords.len(), path);
        Ok(stopwords)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a copy of `counts` without the blacklisted keys.
    /// Stopwords missing from `counts` are simply ignored.
    pub fn filter(&self, counts: &FrequencyMap) -> FrequencyMap {
        counts.iter()
            .filter(|(word, _)| !self.contains(word))
            .collect()
    }
}
