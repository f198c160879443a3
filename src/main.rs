mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router::{router, API_DOCS_PATH},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router(AppState::new(db));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;

    tracing::info!("API started at http://{}", addr);
    tracing::info!("API docs at http://{}{}", addr, API_DOCS_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
