//! Configuration module for Spendwise
//!
//! - Config directory resolution
//! - User settings persistence (backend URL, alert threshold, display preferences)

pub mod file_io;
pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::Settings;
