use evalprompt_api::api::{self, AppState};
use evalprompt_api::config::AppConfig;
use evalprompt_api::prompts::PromptLibrary;

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the level can be applied
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let library = PromptLibrary::builtin();
    tracing::info!(
        templates = library.single.templates().len(),
        multi_axis_templates = library.multi_axis.templates().len(),
        "Prompt library loaded"
    );

    let app = api::router(AppState::new(library), &config.api_prefix);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
