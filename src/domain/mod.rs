pub mod model;
pub mod ports;

pub use model::{LoanApplication, RawInput, SubmissionStatus};
pub use ports::{ConfigProvider, InputSource, Presenter, SubmissionStore};
