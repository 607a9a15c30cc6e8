use clap::Parser;
use loan_submit::core::SubmissionStore;
use loan_submit::utils::{logger, validation::Validate};
use loan_submit::{
    CliConfig, CliPresenter, LocalStore, SubmissionHandler, SubmissionStatus, SubmitEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting loan-submit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = LocalStore::new(config.store_path.clone());

    // 只查看上一次的提交，不送出新請求
    if config.show_last {
        match store.load().await? {
            Some((input, result)) => {
                println!("📋 Last input:  {}", serde_json::to_string(&input)?);
                println!("📋 Last result: {}", serde_json::to_string(&result)?);
            }
            None => {
                println!("No stored submission found");
            }
        }
        return Ok(());
    }

    let handler = SubmissionHandler::new(store, config.clone(), CliPresenter);
    let engine = SubmitEngine::new(config, handler);

    match engine.run().await {
        Ok(SubmissionStatus::Accepted(_)) => {
            tracing::info!("✅ Submission completed successfully!");
            println!("✅ Submission completed successfully!");
        }
        Ok(SubmissionStatus::Aborted { reason }) => {
            // 使用者已經收到 alert，這裡只記錄並回傳非零退出碼
            tracing::warn!("Submission aborted: {}", reason);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Submission failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
