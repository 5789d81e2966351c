pub mod app;
pub mod classify;
pub mod cli;
pub mod count;
pub mod error;
pub mod locale;
pub mod rank;
pub mod report;
pub mod tokenize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
