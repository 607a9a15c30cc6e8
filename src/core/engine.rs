use crate::core::handler::SubmissionHandler;
use crate::core::{
    ConfigProvider, InputSource, LoanApplication, Presenter, SubmissionStatus, SubmissionStore,
};
use crate::utils::error::Result;

/// 驅動單次提交流程：收集 → 正規化 → 送出
pub struct SubmitEngine<I, S, C, P>
where
    I: InputSource,
    S: SubmissionStore,
    C: ConfigProvider,
    P: Presenter,
{
    input: I,
    handler: SubmissionHandler<S, C, P>,
}

impl<I, S, C, P> SubmitEngine<I, S, C, P>
where
    I: InputSource,
    S: SubmissionStore,
    C: ConfigProvider,
    P: Presenter,
{
    pub fn new(input: I, handler: SubmissionHandler<S, C, P>) -> Self {
        Self { input, handler }
    }

    pub async fn run(&self) -> Result<SubmissionStatus> {
        println!("Collecting application fields...");
        let raw = self.input.gather()?;

        let application = LoanApplication::from_raw(&raw);
        tracing::debug!("Normalized application: {:?}", application);

        println!("Submitting application...");
        let status = self.handler.submit(&application).await?;

        match &status {
            SubmissionStatus::Accepted(_) => {
                println!("Submission accepted");
            }
            SubmissionStatus::Aborted { reason } => {
                println!("Submission aborted: {}", reason);
            }
        }

        Ok(status)
    }
}
