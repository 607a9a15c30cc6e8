pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{local::LocalStore, presenter::CliPresenter};

pub use core::{engine::SubmitEngine, handler::SubmissionHandler};
pub use domain::model::{LoanApplication, RawInput, SubmissionStatus};
pub use utils::error::{Result, SubmitError};
