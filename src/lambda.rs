use bazi_report::adapters::build_service;
use bazi_report::adapters::function_client::AnalyzeResponse;
use bazi_report::config::lambda::LambdaConfig;
use bazi_report::domain::ports::{NarrativeRequest, NarrativeService};
use bazi_report::utils::{logger, validation::Validate};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    service: &dyn NarrativeService,
    event: LambdaEvent<NarrativeRequest>,
) -> Result<AnalyzeResponse, Error> {
    let request = event.payload;
    tracing::info!(
        "Analyze request for {} ({} {} {} {})",
        request.user_data.name,
        request.bazi_data.year_pillar,
        request.bazi_data.month_pillar,
        request.bazi_data.day_pillar,
        request.bazi_data.hour_pillar
    );

    // 失敗直接回傳錯誤，由呼叫端改用模板
    let analysis = service.narrate(&request).await.map_err(|e| {
        tracing::error!("❌ Chat completion failed: {}", e);
        Box::new(e) as Error
    })?;

    tracing::info!("Analysis completed ({} chars)", analysis.chars().count());
    Ok(AnalyzeResponse {
        analysis: Some(analysis),
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let service = build_service(&config)?;
    let service: &dyn NarrativeService = service.as_ref();

    run(service_fn(|event: LambdaEvent<NarrativeRequest>| {
        function_handler(service, event)
    }))
    .await
}
