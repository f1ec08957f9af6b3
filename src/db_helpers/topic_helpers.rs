use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::NewTopic;
use crate::errors::RequestError;
use crate::models::Topic;

pub async fn list_topics(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let topics = sqlx::query_as::<Sqlite, Topic>(
        r#"SELECT slug, description, author FROM topics"#,
    )
    .fetch_all(pool)
    .await?;
    Ok(topics)
}

/// A duplicate slug trips the primary-key constraint, which the classifier
/// turns into a conflict.
pub async fn insert_topic(
    pool: &SqlitePool,
    NewTopic {
        slug,
        description,
        author,
    }: NewTopic,
) -> Result<Topic, RequestError> {
    let topic = sqlx::query_as::<Sqlite, Topic>(
        r#"
        INSERT INTO topics (slug, description, author)
        VALUES ($1, $2, $3)
        RETURNING slug, description, author
        "#,
    )
    .bind(slug)
    .bind(description)
    .bind(author)
    .fetch_one(pool)
    .await?;
    Ok(topic)
}
