use portfolio_service::config::PortfolioConfig;
use portfolio_service::services::init_metrics;
use portfolio_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must precede any recorded metric
    init_metrics();

    let config = PortfolioConfig::load()?;

    init_tracing(
        "portfolio-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        e
    })?;
    application.run_until_stopped().await?;

    Ok(())
}
