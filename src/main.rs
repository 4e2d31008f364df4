use std::sync::Arc;

use llmplan::{
    api::{start_api_server, ApiState},
    config,
    llm::{ChatClient, LlmSummaryRepository},
    observability::{init_observability, log_config_info},
    Result, APP_NAME, VERSION,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Reads `.env` before the environment so both feed the same settings
    let settings = match config::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    init_observability(&settings).await?;
    info!(app_name = APP_NAME, version = VERSION, "Starting llmplan summarization service");
    log_config_info(&settings);

    let connection = settings.connection_config()?;
    let client = ChatClient::new(&connection)?;
    let repository = LlmSummaryRepository::new(client)
        .with_health_check_model(settings.default_model_name.clone());

    let state = ApiState::new(
        Arc::new(repository),
        settings.default_summary_config()?,
        Arc::new(settings.clone()),
    );

    if let Err(e) = start_api_server(&settings, state).await {
        error!(error = %e, "API server terminated with error");
        return Err(e);
    }

    info!("llmplan shut down");
    Ok(())
}
