use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub password: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Public projection of a users row; the password hash never leaves the db
/// layer through this type.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
    pub author: Option<String>,
}

/// A full articles row, as returned by the vote-patch and insert paths.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
}

/// An articles row joined against its comments. `comments_count` is computed
/// at read time by the outer join + group-by, never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithCommentCount {
    pub article_id: i64,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub comments_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub author: String,
    pub article_id: i64,
    pub created_at: NaiveDateTime,
    pub votes: i64,
}
