use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use chatvault::application::ports::{CollectionRepository, StagingStore};
use chatvault::application::services::ImportService;
use chatvault::infrastructure::observability::{init_tracing, TracingConfig};
use chatvault::infrastructure::persistence::{
    create_pool, run_migrations, SqliteCollectionRepository,
};
use chatvault::infrastructure::storage::LocalStagingStore;
use chatvault::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    run_migrations(&pool).await?;

    let collection_repository: Arc<dyn CollectionRepository> =
        Arc::new(SqliteCollectionRepository::new(pool));
    let staging_store: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(PathBuf::from(&settings.staging.dir))?);
    let import_service = Arc::new(ImportService::new(Arc::clone(&collection_repository)));

    let state = AppState {
        import_service,
        collection_repository,
        staging_store,
    };

    let app = create_router(state, settings.max_upload_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
