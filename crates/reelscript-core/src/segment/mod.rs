pub mod keywords;
pub mod segmenter;

pub use keywords::{KeywordConfig, KeywordExtractor, STOPWORDS, is_stopword};
pub use segmenter::{Segmenter, SegmenterConfig};
