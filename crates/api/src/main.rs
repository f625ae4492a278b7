use oficina_api::config::ApiConfig;
use oficina_observability::ObservabilityConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;

    oficina_observability::init(&ObservabilityConfig {
        format: config.log_format,
        ..ObservabilityConfig::default()
    });

    if config.jwt_secret.is_none() {
        tracing::warn!("OFICINA_JWT_SECRET not set; token signatures must be verified upstream");
    }

    let app = oficina_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
