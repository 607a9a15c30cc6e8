pub mod engine;
pub mod handler;

pub use crate::domain::model::{LoanApplication, RawInput, SubmissionStatus};
pub use crate::domain::ports::{ConfigProvider, InputSource, Presenter, SubmissionStore};
pub use crate::utils::error::Result;
