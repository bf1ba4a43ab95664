pub mod analyzer;
pub mod input;
pub mod limit;
