use anyhow::Result;
use httpmock::prelude::*;
use loan_submit::core::{ConfigProvider, InputSource, Presenter, SubmissionStore};
use loan_submit::{LocalStore, RawInput, SubmissionHandler, SubmissionStatus, SubmitEngine};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

struct StaticInput {
    raw: RawInput,
}

impl InputSource for StaticInput {
    fn gather(&self) -> loan_submit::Result<RawInput> {
        Ok(self.raw.clone())
    }
}

struct TestConfig {
    api_endpoint: String,
    store_path: String,
}

impl ConfigProvider for TestConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }
}

#[derive(Clone, Default)]
struct RecordingPresenter {
    alerts: Arc<Mutex<Vec<String>>>,
    navigations: Arc<Mutex<Vec<String>>>,
}

impl Presenter for RecordingPresenter {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn navigate(&self, location: &str) {
        self.navigations.lock().unwrap().push(location.to_string());
    }
}

fn applicant_fields() -> RawInput {
    RawInput {
        gender: "male".to_string(),
        married: "yes".to_string(),
        dependents: "2".to_string(),
        education: "graduate".to_string(),
        self_employed: "no".to_string(),
        applicant_income: "5849".to_string(),
        coapplicant_income: "0".to_string(),
        loan_amt: "128".to_string(),
        loan_amt_term: "".to_string(),
        credit_history: "1".to_string(),
        property_area: "urban".to_string(),
    }
}

/// 完整流程：收集 → 正規化 → POST → 寫入檔案 store → 導向
#[tokio::test]
async fn test_full_submission_flow_with_local_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let prediction = serde_json::json!({
        "prediction": "1",
        "label": "Approved",
        "probability": [[0.13, 0.87]]
    });

    // 驗證正規化後的 payload（空白的 loan_amt_term 必須落到 360）
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .header("content-type", "application/json")
            .json_body_partial(
                r#"{
                    "Gender": "Male",
                    "Education": "Graduate",
                    "Self_Employed": "No",
                    "Loan_Amount_Term": 360.0,
                    "Property_Area": "Urban"
                }"#,
            );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(prediction.clone());
    });

    let store = LocalStore::new(store_path.clone());
    let presenter = RecordingPresenter::default();
    let config = TestConfig {
        api_endpoint: server.url("/predict"),
        store_path,
    };

    let handler = SubmissionHandler::new(store.clone(), config, presenter.clone());
    let engine = SubmitEngine::new(
        StaticInput {
            raw: applicant_fields(),
        },
        handler,
    );

    let status = engine.run().await?;

    api_mock.assert();
    assert!(matches!(status, SubmissionStatus::Accepted(_)));

    // store 裡兩個 key 都要有內容，且可以原樣讀回
    let (input, result) = store.load().await?.expect("submission should be stored");
    assert_eq!(input.gender, "Male");
    assert_eq!(input.loan_amount_term, 360.0);
    assert_eq!(result, prediction);

    let navigations = presenter.navigations.lock().unwrap().clone();
    assert_eq!(navigations, vec!["result.html".to_string()]);

    println!("✅ Full submission flow test passed!");
    Ok(())
}

/// 伺服器拒絕時不得留下任何持久化痕跡
#[tokio::test]
async fn test_rejected_submission_leaves_store_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"detail": "Credit_History must be 0 or 1"}));
    });

    let store = LocalStore::new(store_path.clone());
    let presenter = RecordingPresenter::default();
    let config = TestConfig {
        api_endpoint: server.url("/predict"),
        store_path,
    };

    let mut raw = applicant_fields();
    raw.credit_history = "7".to_string();

    let handler = SubmissionHandler::new(store.clone(), config, presenter.clone());
    let engine = SubmitEngine::new(StaticInput { raw }, handler);

    let status = engine.run().await?;

    api_mock.assert();
    assert!(matches!(status, SubmissionStatus::Aborted { .. }));

    let alerts = presenter.alerts.lock().unwrap().clone();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("Credit_History must be 0 or 1"));

    assert!(store.load().await?.is_none());
    assert!(presenter.navigations.lock().unwrap().is_empty());

    Ok(())
}
