use anyhow::Result;
use folio_cms::{
    application::services::ApplicationServices,
    bootstrap::{build_services, init_tracing},
    config::AppConfig,
    infrastructure::database,
    presentation::http::{
        routes::build_router,
        state::{HttpSettings, HttpState},
    },
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let services = Arc::new(build_services(&config, &pool)?);

    if let Some(interval) = config.publish_sweep_interval() {
        tokio::spawn(publish_sweep(Arc::clone(&services), interval));
    }

    let state = HttpState {
        services,
        settings: HttpSettings {
            upload_limit: config.upload_limit(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Periodically promotes scheduled content whose time has come.
async fn publish_sweep(services: Arc<ApplicationServices>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if let Err(err) = services.content_commands.publish_due().await {
            tracing::warn!(error = %err, "scheduled publish sweep failed");
        }
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
