use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

/// Creates the `user_data` table when it does not exist yet.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_data (
            id   SERIAL PRIMARY KEY,
            name VARCHAR NOT NULL,
            age  INTEGER NOT NULL,
            city VARCHAR NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create table user_data")?;

    info!("schema ready");
    Ok(())
}
