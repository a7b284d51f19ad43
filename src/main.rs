use std::sync::Arc;

use cinema_catalog::{
    api::{create_router, AppState},
    config::Config,
    db::PostgrestClient,
    services::MovieService,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let backend = PostgrestClient::new(
        config.supabase_url.clone(),
        config.supabase_key.clone(),
        config.movies_table.clone(),
    );
    let catalog = Arc::new(MovieService::new(Arc::new(backend)));

    let state = AppState::new(catalog);
    state.controller.initialize();

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, table = %config.movies_table, "Catalog server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
