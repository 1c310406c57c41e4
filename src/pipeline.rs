use std::path::Path;

use log::{debug, info};

use crate::{
    error::Result,
    frequency::{self, FrequencyMap},
    fs_helpers,
    ranking::{self, RankedEntry},
    stopwords::StopwordSet,
    word_filtering,
    word_stemming::{self, PorterStemmer, Stemmer},
};

pub const DEFAULT_COUNT: usize = 20;
pub const DEFAULT_INPUT_PATH: &str = "Text1.txt";

/// Finds the most common word stems of a text, ignoring stopwords.
///
/// Holds the stopword set and the stemmer, both read-only, so a single
/// instance can analyze any number of files.
pub struct StemFrequency {
    stopwords: StopwordSet,
    stemmer: Box<dyn Stemmer>,
}

impl StemFrequency {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords, stemmer: Box::new(PorterStemmer) }
    }

    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn tokenize_text(&self, text: &str) -> Vec<String> {
        word_filtering::tokenize(text)
    }

    pub fn find_frequency(&self, words: &[String]) -> FrequencyMap {
        frequency::count(words)
    }

    pub fn remove_stopwords(&self, counts: &FrequencyMap) -> FrequencyMap {
        self.stopwords.filter(counts)
    }

    pub fn stem_and_consolidate(&self, counts: &FrequencyMap, remove_apostrophes: bool) -> FrequencyMap {
        word_stemming::stem_and_consolidate(counts, self.stemmer.as_ref(), remove_apostrophes)
    }

    pub fn most_common(&self, frequencies: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
        ranking::most_common(frequencies, k)
    }

    /// Runs the whole analysis over in-memory text.
    pub fn analyze_text(&self, text: &str, k: usize) -> Vec<RankedEntry> {
        let words = self.tokenize_text(text);
        debug!("{} tokens", words.len());

        let word_counts = self.find_frequency(&words);
        debug!("{} distinct words", word_counts.len());

        let cleaned_counts = self.remove_stopwords(&word_counts);
        debug!("{} distinct words left after removing stopwords", cleaned_counts.len());

        let stem_counts = self.stem_and_consolidate(&cleaned_counts, true);
        debug!("{} distinct stems", stem_counts.len());

        self.most_common(&stem_counts, k)
    }

    /// Reads `file_path` and returns its `k` most common stems.
    /// Fails without output if the file cannot be read.
    pub fn find_common_stems(&self, file_path: impl AsRef<Path>, k: usize) -> Result<Vec<RankedEntry>> {
        let file_path = file_path.as_ref();
        info!("finding the {} most common stems in {:?}", k, file_path);
        let text = fs_helpers::read_text_file(file_path)?;
        Ok(self.analyze_text(&text, k))
    }
}

impl Default for StemFrequency {
    fn default() -> Self {
        Self::new(StopwordSet::default())
    }
}

impl std::fmt::Debug for StemFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFrequency")
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}
