// Text preparation shared by every analyzer: normalization, paragraph
// splitting, and the stopword-filtered n-gram tokenizer.

pub mod normalize;
pub mod tokenize;

pub use normalize::{clean_text, split_paragraphs, word_count};
pub use tokenize::Tokenizer;
