pub mod error;
pub mod frequency;
pub mod fs_helpers;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod stopwords;
pub mod word_filtering;
pub mod word_stemming;

pub use error::{Error, Result};
pub use frequency::FrequencyMap;
pub use pipeline::StemFrequency;
pub use ranking::RankedEntry;
pub use stopwords::StopwordSet;
pub use word_stemming::{PorterStemmer, Stemmer};
