use crate::core::{ConfigProvider, LoanApplication, Presenter, SubmissionStatus, SubmissionStore};
use crate::domain::model::RESULT_PAGE;
use crate::utils::error::Result;
use reqwest::Client;

pub struct SubmissionHandler<S: SubmissionStore, C: ConfigProvider, P: Presenter> {
    store: S,
    config: C,
    presenter: P,
    client: Client,
}

impl<S: SubmissionStore, C: ConfigProvider, P: Presenter> SubmissionHandler<S, C, P> {
    pub fn new(store: S, config: C, presenter: P) -> Self {
        Self {
            store,
            config,
            presenter,
            client: Client::new(),
        }
    }

    /// 執行一次提交：POST → 判讀回應 → 持久化 → 導向
    ///
    /// 傳輸失敗與非 2xx 回應在這裡就地處理（alert 後回傳 Aborted），
    /// 不往上拋；只有 2xx 但 body 不是合法 JSON 才會以 Err 傳播。
    pub async fn submit(&self, application: &LoanApplication) -> Result<SubmissionStatus> {
        let endpoint = self.config.api_endpoint();
        tracing::debug!("Posting application to: {}", endpoint);

        let response = match self.client.post(endpoint).json(application).send().await {
            Ok(response) => response,
            Err(e) => {
                // DNS、TLS、連線被拒等傳輸層失敗
                let reason = format!("Network or CORS error: {}", e);
                tracing::warn!("Transport failure: {}", e);
                self.presenter.alert(&reason);
                return Ok(SubmissionStatus::Aborted { reason });
            }
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // 盡力從 body 取出 detail，取不到就退回通用訊息
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|d| d.as_str())
                        .map(|d| d.to_string())
                });

            let message = detail.unwrap_or_else(|| format!("Server returned {}", status.as_u16()));
            let reason = format!("Server error: {}", message);
            self.presenter.alert(&reason);
            return Ok(SubmissionStatus::Aborted { reason });
        }

        let result: serde_json::Value = response.json().await?;

        // 結果頁會讀取這兩個 key，覆寫舊值
        self.store.save(application, &result).await?;

        self.presenter.navigate(RESULT_PAGE);

        Ok(SubmissionStatus::Accepted(result))
    }
}
