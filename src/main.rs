use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_service::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use user_service::config::{AppConfig, RepositoryKind};
use user_service::domain::user::UserRepository;
use user_service::infrastructure::{
    database,
    repositories::{SeaOrmUserRepository, SqliteUserRepository},
    security::password::Argon2PasswordHasher,
    time::SystemClock,
};
use user_service::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let user_repo = open_user_repository(&config).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        password_hasher,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_user_repository(config: &AppConfig) -> Result<Arc<dyn UserRepository>> {
    tracing::info!(
        driver = %config.driver(),
        repository = ?config.repository(),
        "opening database"
    );

    let repo: Arc<dyn UserRepository> = match config.repository() {
        RepositoryKind::Orm => {
            let db =
                database::connect_orm(config.database_options(), config.max_connections()).await?;
            Arc::new(SeaOrmUserRepository::new(db))
        }
        RepositoryKind::Sql => {
            let pool =
                database::init_sqlite_pool(config.sqlite_options(), config.max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            Arc::new(SqliteUserRepository::new(pool))
        }
    };

    Ok(repo)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
