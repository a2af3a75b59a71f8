//! Text processing: whitespace tokenization and corpus loading

pub mod tokenizer;

pub use tokenizer::Tokenizer;
