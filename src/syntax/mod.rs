pub mod reader;
pub mod tokenizer;
pub mod writer;
