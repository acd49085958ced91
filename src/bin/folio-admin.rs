// src/bin/folio-admin.rs
use std::env;

use anyhow::{Context, Result};
use folio_cms::{
    bootstrap::{build_services, init_tracing},
    config::AppConfig,
    infrastructure::database,
};

const USAGE: &str = "Usage: folio-admin <create-roles|publish-scheduled|migrate>";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("create-roles") => create_roles().await?,
        Some("publish-scheduled") => publish_scheduled().await?,
        Some("migrate") => migrate().await?,
        Some(cmd) => {
            eprintln!("Unknown command: {cmd}\n{USAGE}");
            std::process::exit(1);
        }
        None => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn connect() -> Result<(AppConfig, sqlx::PgPool)> {
    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url())
        .await
        .context("failed to connect to the database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;
    Ok((config, pool))
}

async fn migrate() -> Result<()> {
    connect().await?;
    println!("Migrations applied.");
    Ok(())
}

async fn create_roles() -> Result<()> {
    let (config, pool) = connect().await?;
    let services = build_services(&config, &pool)?;

    let report = services.user_commands.ensure_builtin_roles().await?;
    for name in &report.created {
        println!("Created role: {name}");
    }
    for name in &report.existing {
        println!("Role already exists: {name}");
    }
    println!("Successfully created roles.");
    Ok(())
}

async fn publish_scheduled() -> Result<()> {
    let (config, pool) = connect().await?;
    let services = build_services(&config, &pool)?;

    let published = services.content_commands.publish_due().await?;
    println!("Published {published} scheduled item(s).");
    Ok(())
}
