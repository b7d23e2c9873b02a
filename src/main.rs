use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use future_self::adapters::ai::{MockAIProvider, OpenAIProvider};
use future_self::adapters::analysis::TemplateSummarizer;
use future_self::adapters::http::{app_router, InterviewAppState};
use future_self::application::handlers::interview::HandleTurnHandler;
use future_self::config::{AppConfig, ProviderKind, ValidationError};
use future_self::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(&config);
    config.validate()?;

    let provider: Arc<dyn AIProvider> = match config.ai.provider {
        ProviderKind::OpenAI => {
            let openai = config
                .ai
                .openai()
                .ok_or(ValidationError::MissingRequired("FUTURE_SELF__AI__OPENAI_API_KEY"))?;
            Arc::new(OpenAIProvider::new(openai)?)
        }
        ProviderKind::Mock => {
            tracing::warn!("Using the mock model provider");
            Arc::new(MockAIProvider::new())
        }
    };
    let info = provider.provider_info();

    let handler = HandleTurnHandler::new(
        provider,
        Arc::new(TemplateSummarizer::new()),
        config.turn_settings(),
    );
    let state = InterviewAppState::new(Arc::new(handler))
        .with_typing_interval(config.conversation.typing_interval());
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %addr,
        provider = %info.name,
        model = %info.model,
        version = env!("CARGO_PKG_VERSION"),
        "Future Self listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown initiated (Ctrl+C received)");
}
