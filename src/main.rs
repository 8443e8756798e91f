use anyhow::Context;
use bazi_report::core::render;
use bazi_report::domain::ports::ConfigProvider;
use bazi_report::utils::error::{BaziError, ErrorSeverity};
use bazi_report::utils::{logger, validation::Validate};
use bazi_report::{build_service, chart_for, Analyzer, CliConfig, LocalStorage, SessionStore, TomlConfig};
use clap::Parser;

fn exit_with(e: &BaziError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match TomlConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌：--verbose 優先於配置檔等級
    if cli.verbose {
        logger::init_cli_logger(true);
    } else {
        logger::init_with_level(config.log_level());
    }
    tracing::info!("Starting bazi-report");
    tracing::debug!("CLI arguments: {:?}", cli);

    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let profile = cli.to_profile();
    if let Err(e) = profile.validate() {
        exit_with(&e);
    }

    let chart = chart_for(&profile);
    tracing::info!(
        "Chart: {} {} {} {}",
        chart.year_pillar,
        chart.month_pillar,
        chart.day_pillar,
        chart.hour_pillar
    );

    let service = match build_service(&config) {
        Ok(service) => service,
        Err(e) => exit_with(&e),
    };
    let report = Analyzer::new(service).analyze(&chart, &profile).await;

    let store = SessionStore::new(LocalStorage::new(config.session_dir()));
    store
        .save(&profile, &chart, &report)
        .await
        .with_context(|| format!("failed to write session to {}", config.session_dir()))?;
    tracing::info!("📁 Session saved to: {}", config.session_dir());

    println!("{}", render::render_page(&profile, &chart, &report));
    Ok(())
}
