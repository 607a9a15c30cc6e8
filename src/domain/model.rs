use serde::{Deserialize, Serialize};

/// 持久化用的固定 key（對應結果頁讀取的兩個鍵）
pub const INPUT_KEY: &str = "loanInput";
pub const RESULT_KEY: &str = "loanResult";

/// 成功後導向的結果頁（相對路徑，固定）
pub const RESULT_PAGE: &str = "result.html";

/// 原始輸入：十一個表單欄位的原樣字串值
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub gender: String,
    pub married: String,
    pub dependents: String,
    pub education: String,
    pub self_employed: String,
    pub applicant_income: String,
    pub coapplicant_income: String,
    pub loan_amt: String,
    pub loan_amt_term: String,
    pub credit_history: String,
    pub property_area: String,
}

/// 送往預測服務的 Request Object，欄位名稱必須與後端 API 完全一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Married")]
    pub married: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Self_Employed")]
    pub self_employed: String,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: f64,
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: f64,
    #[serde(rename = "Credit_History")]
    pub credit_history: i64,
    #[serde(rename = "Property_Area")]
    pub property_area: String,
}

impl LoanApplication {
    /// 將原始欄位值正規化成後端接受的形狀
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            gender: if raw.gender == "male" {
                "Male".to_string()
            } else {
                "Female".to_string()
            },
            married: raw.married.clone(),
            dependents: raw.dependents.clone(),
            education: if raw.education == "graduate" {
                "Graduate".to_string()
            } else {
                "Not Graduate".to_string()
            },
            self_employed: if raw.self_employed == "yes" {
                "Yes".to_string()
            } else {
                "No".to_string()
            },
            applicant_income: parse_f64_or(&raw.applicant_income, 0.0),
            coapplicant_income: parse_f64_or(&raw.coapplicant_income, 0.0),
            loan_amount: parse_f64_or(&raw.loan_amt, 0.0),
            loan_amount_term: parse_f64_or(&raw.loan_amt_term, 360.0),
            // 後端對缺失的 Credit_History 預設為 1，這裡沿用同一預設
            credit_history: parse_i64_or(&raw.credit_history, 1),
            property_area: if raw.property_area == "urban" {
                "Urban".to_string()
            } else {
                "Rural".to_string()
            },
        }
    }
}

fn parse_f64_or(value: &str, default: f64) -> f64 {
    value.trim().parse().unwrap_or(default)
}

fn parse_i64_or(value: &str, default: i64) -> i64 {
    value.trim().parse().unwrap_or(default)
}

/// 一次提交的結束狀態
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// 服務回覆 2xx，回應已持久化並觸發導向
    Accepted(serde_json::Value),
    /// 傳輸失敗或服務回覆非 2xx，已透過 Presenter 通知使用者
    Aborted { reason: String },
}
