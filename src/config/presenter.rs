use crate::core::Presenter;

/// 終端機版的呈現層：alert 走 stderr，navigate 印出結果位置
#[derive(Debug, Clone, Default)]
pub struct CliPresenter;

impl Presenter for CliPresenter {
    fn alert(&self, message: &str) {
        tracing::error!("{}", message);
        eprintln!("❌ {}", message);
    }

    fn navigate(&self, location: &str) {
        println!("➡️  {}", location);
    }
}
