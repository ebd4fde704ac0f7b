use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Connects to `url` and brings the schema up to date.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(false);
    // Every pooled connection to an in-memory SQLite database would get its own empty database.
    if url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }

    info!(
        "Connecting to database: {}",
        if url.starts_with("postgres") { "PostgreSQL" } else { "SQLite" }
    );
    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
