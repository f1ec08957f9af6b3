use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::NewArticle;
use crate::errors::RequestError;
use crate::models::{Article, ArticleWithCommentCount};

use super::{article_by_id_sql, page_bounds, ArticleListQuery};

/// Runs the validated listing plan. An empty slice means the request pointed
/// at nothing that exists (unknown topic or a page past the end), which the
/// contract reports as not-found rather than an empty 200.
pub async fn list_articles(
    pool: &SqlitePool,
    query: &ArticleListQuery,
) -> Result<Vec<ArticleWithCommentCount>, RequestError> {
    let sql = query.to_sql();
    let mut fetch = sqlx::query_as::<Sqlite, ArticleWithCommentCount>(&sql);
    if let Some(topic) = &query.topic {
        fetch = fetch.bind(topic);
    }
    let (limit, offset) = page_bounds(query.page);
    let articles = fetch.bind(limit).bind(offset).fetch_all(pool).await?;

    if articles.is_empty() {
        return Err(RequestError::NotFound);
    }
    Ok(articles)
}

pub async fn get_article_by_id(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<ArticleWithCommentCount, RequestError> {
    let sql = article_by_id_sql();
    let article = sqlx::query_as::<Sqlite, ArticleWithCommentCount>(&sql)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;

    match article {
        Some(article) => Ok(article),
        None => Err(RequestError::NotFound),
    }
}

/// Inserts and then re-reads through the join so the response carries the
/// computed comment count. A nonexistent topic or author fails the insert's
/// foreign keys, which the classifier reports as a bad request.
pub async fn insert_article(
    pool: &SqlitePool,
    NewArticle {
        title,
        topic,
        author,
        body,
        votes,
    }: NewArticle,
) -> Result<ArticleWithCommentCount, RequestError> {
    let article_id = sqlx::query_scalar::<Sqlite, i64>(
        r#"
        INSERT INTO articles (title, body, topic, author, votes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING article_id
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(topic)
    .bind(author)
    .bind(votes)
    .fetch_one(pool)
    .await?;

    get_article_by_id(pool, article_id).await
}

/// Single-statement signed increment; concurrent patches on the same row
/// serialize inside the storage engine and commute.
pub async fn update_article_votes(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, RequestError> {
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles SET votes = votes + $1
        WHERE article_id = $2
        RETURNING article_id, title, body, topic, author, created_at, votes
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    match article {
        Some(article) => Ok(article),
        None => Err(RequestError::NotFound),
    }
}

pub async fn delete_article(pool: &SqlitePool, article_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query(r#"DELETE FROM articles WHERE article_id = $1"#)
        .bind(article_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    Ok(())
}
