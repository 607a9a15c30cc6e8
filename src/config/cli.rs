use crate::core::{ConfigProvider, InputSource};
use crate::domain::model::RawInput;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-submit")]
#[command(about = "Submit a loan application to the prediction API")]
pub struct CliConfig {
    #[arg(long, default_value = "https://loan-backend.onrender.com/predict")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./store")]
    pub store_path: String,

    // 十一個申請欄位，原樣字串，正規化交給 LoanApplication::from_raw
    #[arg(long, default_value = "")]
    pub gender: String,

    #[arg(long, default_value = "")]
    pub married: String,

    #[arg(long, default_value = "")]
    pub dependents: String,

    #[arg(long, default_value = "")]
    pub education: String,

    #[arg(long, default_value = "")]
    pub self_employed: String,

    #[arg(long, default_value = "")]
    pub applicant_income: String,

    #[arg(long, default_value = "")]
    pub coapplicant_income: String,

    #[arg(long, default_value = "")]
    pub loan_amt: String,

    #[arg(long, default_value = "")]
    pub loan_amt_term: String,

    #[arg(long, default_value = "")]
    pub credit_history: String,

    #[arg(long, default_value = "")]
    pub property_area: String,

    #[arg(long, help = "Print the last stored submission and exit")]
    pub show_last: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }
}

impl InputSource for CliConfig {
    fn gather(&self) -> Result<RawInput> {
        Ok(RawInput {
            gender: self.gender.clone(),
            married: self.married.clone(),
            dependents: self.dependents.clone(),
            education: self.education.clone(),
            self_employed: self.self_employed.clone(),
            applicant_income: self.applicant_income.clone(),
            coapplicant_income: self.coapplicant_income.clone(),
            loan_amt: self.loan_amt.clone(),
            loan_amt_term: self.loan_amt_term.clone(),
            credit_history: self.credit_history.clone(),
            property_area: self.property_area.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("store_path", &self.store_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_preserves_raw_values() {
        let config = CliConfig::parse_from([
            "loan-submit",
            "--gender",
            "male",
            "--applicant-income",
            "5000",
            "--credit-history",
            "1",
        ]);

        let raw = config.gather().unwrap();
        assert_eq!(raw.gender, "male");
        assert_eq!(raw.applicant_income, "5000");
        assert_eq!(raw.credit_history, "1");
        // Unset fields stay empty, the normalizer applies defaults
        assert_eq!(raw.loan_amt_term, "");
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = CliConfig::parse_from(["loan-submit"]);
        assert!(config.validate().is_ok());

        config.api_endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.api_endpoint = "".to_string();
        assert!(config.validate().is_err());
    }
}
