#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod presenter;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
