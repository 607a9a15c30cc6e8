use crate::core::SubmissionStore;
use crate::domain::model::{LoanApplication, INPUT_KEY, RESULT_KEY};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// 檔案版的 SubmissionStore：key `k` 存成 `<base>/k.json`
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: String,
}

impl LocalStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }
}

#[async_trait]
impl SubmissionStore for LocalStore {
    async fn save(&self, input: &LoanApplication, result: &serde_json::Value) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;

        fs::write(self.key_path(INPUT_KEY), serde_json::to_string(input)?)?;
        fs::write(self.key_path(RESULT_KEY), serde_json::to_string(result)?)?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<(LoanApplication, serde_json::Value)>> {
        // 兩個 key 都在才算有一筆完整的提交
        let (Some(input), Some(result)) = (self.read_key(INPUT_KEY), self.read_key(RESULT_KEY))
        else {
            return Ok(None);
        };

        Ok(Some((
            serde_json::from_str(&input)?,
            serde_json::from_str(&result)?,
        )))
    }
}
