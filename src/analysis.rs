//! Text analysis for spell checking.
//!
//! The pieces here are all pure functions of the input text:
//!
//! - [`decode::decode_lenient`] turns raw uploaded bytes into text
//! - [`tokenizer::tokenize`] splits text into surface/normalized [`token::Token`] pairs
//! - [`filter::is_candidate`] decides which normalized tokens get spell checked
//! - [`word_count::count_words`] counts alphabetic runs for the report summary

pub mod decode;
pub mod filter;
pub mod token;
pub mod tokenizer;
pub mod word_count;

pub use decode::decode_lenient;
pub use filter::is_candidate;
pub use token::Token;
pub use tokenizer::tokenize;
pub use word_count::count_words;
