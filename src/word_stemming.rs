use log::trace;

use crate::frequency::FrequencyMap;

/// Reduces a word to its stem. Implementations must be pure: the same word
/// always gives the same stem, and one instance may be shared between runs.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// The classic Porter algorithm. Case-sensitive; callers pass lowercase words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        porter_stemmer::stem(word)
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Stems every word of `counts` and sums the counts of words sharing a stem.
///
/// With `remove_apostrophes` set, apostrophes are deleted before stemming,
/// so `nature's` is stemmed as `natures`. Otherwise the apostrophe reaches
/// the stemmer untouched and usually survives into the stem.
pub fn stem_and_consolidate(
    counts: &FrequencyMap,
    stemmer: &dyn Stemmer,
    remove_apostrophes: bool,
) -> FrequencyMap {
    counts.iter()
        .fold(FrequencyMap::new(), |mut accum, (word, count)| {
            let stem = if remove_apostrophes {
                stemmer.stem(&word.replace('\'', ""))
            } else {
                stemmer.stem(word)
            };
            trace!("`{}` -> `{}`", word, stem);
            accum.add(&stem, count);
            accum
        })
}
