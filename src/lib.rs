pub mod engine;
pub mod error;
pub mod number;
pub mod reader;
pub mod token;
pub mod writer;
