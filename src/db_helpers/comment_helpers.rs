use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{NewComment, PostedComment};
use crate::errors::RequestError;
use crate::models::Comment;

use super::{article_exists, page_bounds, Page};

/// Comments for one article, newest first. The article's existence is
/// checked up front so "article with no comments" (empty 200) is kept
/// distinct from "no such article" (404). A page past the end of a real
/// comment set is still not-found.
pub async fn list_comments_for_article(
    pool: &SqlitePool,
    article_id: i64,
    page: Option<Page>,
) -> Result<Vec<Comment>, RequestError> {
    if !article_exists(pool, article_id).await? {
        return Err(RequestError::NotFound);
    }

    let (limit, offset) = page_bounds(page);
    let comments = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, body, author, article_id, created_at, votes
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(article_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    if comments.is_empty() && page.map_or(false, |page| !page.is_first()) {
        return Err(RequestError::NotFound);
    }
    Ok(comments)
}

pub async fn insert_comment(
    pool: &SqlitePool,
    article_id: i64,
    NewComment { username, body }: NewComment,
) -> Result<PostedComment, RequestError> {
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (body, author, article_id)
        VALUES ($1, $2, $3)
        RETURNING comment_id, body, author, article_id, created_at, votes
        "#,
    )
    .bind(body)
    .bind(username)
    .bind(article_id)
    .fetch_one(pool)
    .await?;

    Ok(PostedComment {
        author: comment.author,
        body: comment.body,
        comment_id: comment.comment_id,
    })
}

pub async fn update_comment_votes(
    pool: &SqlitePool,
    comment_id: i64,
    inc_votes: i64,
) -> Result<Comment, RequestError> {
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        UPDATE comments SET votes = votes + $1
        WHERE comment_id = $2
        RETURNING comment_id, body, author, article_id, created_at, votes
        "#,
    )
    .bind(inc_votes)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    match comment {
        Some(comment) => Ok(comment),
        None => Err(RequestError::NotFound),
    }
}

pub async fn delete_comment(pool: &SqlitePool, comment_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query(r#"DELETE FROM comments WHERE comment_id = $1"#)
        .bind(comment_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    Ok(())
}
