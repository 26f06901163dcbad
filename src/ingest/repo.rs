use serde::Serialize;
use sqlx::{Connection, FromRow, PgConnection};

use super::dto::UserDataRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserData {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub city: String,
}

impl UserData {
    pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> sqlx::Result<UserData> {
        sqlx::query_as::<_, UserData>(
            r#"
            SELECT id, name, age, city
            FROM user_data
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(conn)
        .await
    }
}

/// Inserts one record, commits, then reloads it so `id` is the stored value.
pub async fn save_user_data(
    conn: &mut PgConnection,
    data: &UserDataRequest,
) -> sqlx::Result<UserData> {
    let mut tx = conn.begin().await?;
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO user_data (name, age, city)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&data.name)
    .bind(data.age)
    .bind(&data.city)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    UserData::find_by_id(conn, id).await
}
