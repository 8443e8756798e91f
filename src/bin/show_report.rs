use anyhow::Context;
use bazi_report::config::toml_config::DEFAULT_CONFIG_PATH;
use bazi_report::core::render;
use bazi_report::domain::ports::ConfigProvider;
use bazi_report::utils::logger;
use bazi_report::{LocalStorage, SessionStore, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "show-report")]
#[command(about = "Show the last stored reading, or demo content when none is stored")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override session directory from config
    #[arg(long)]
    session_dir: Option<String>,

    /// Print the stored records as JSON instead of the text page
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = TomlConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if args.verbose {
        logger::init_cli_logger(true);
    } else {
        logger::init_with_level(config.log_level());
    }
    if let Some(dir) = &args.session_dir {
        config.session.dir = Some(dir.clone());
    }

    tracing::info!("📁 Reading session from: {}", config.session_dir());
    let store = SessionStore::new(LocalStorage::new(config.session_dir()));
    let submission = store.load_or_demo().await;

    if submission.is_demo {
        // 演示模式提示
        eprintln!("ℹ️  尚未提交資料，以下為演示內容");
    }

    if args.json {
        let value = serde_json::json!({
            "userData": submission.profile,
            "baziData": submission.chart,
            "analysisResult": submission.report,
            "demo": submission.is_demo,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{}",
            render::render_page(&submission.profile, &submission.chart, &submission.report)
        );
    }

    Ok(())
}
