use crate::domain::model::{LoanApplication, RawInput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 提供十一個原始欄位值的來源（CLI 旗標、測試用的合成輸入等）
pub trait InputSource: Send + Sync {
    fn gather(&self) -> Result<RawInput>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn store_path(&self) -> &str;
}

/// 兩個固定 key 的持久化介面，save 無條件覆寫（last write wins）
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, input: &LoanApplication, result: &serde_json::Value) -> Result<()>;
    async fn load(&self) -> Result<Option<(LoanApplication, serde_json::Value)>>;
}

/// 取代瀏覽器 alert / location 的呈現層
pub trait Presenter: Send + Sync {
    fn alert(&self, message: &str);
    fn navigate(&self, location: &str);
}
