pub mod conflict;
pub mod engine;
pub mod scanner;
pub mod types;
