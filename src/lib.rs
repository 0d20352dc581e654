pub mod cli;
pub mod errors;
pub mod message;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;
