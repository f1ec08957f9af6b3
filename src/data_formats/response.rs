use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{ArticleWithCommentCount, Comment, User};

/// Article row as shaped for listing and lookup responses. `comments_count`
/// is serialized as a string, matching the wire contract of the original
/// service (its storage layer returned counts as text).
#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleResponse {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub comments_count: String,
}

impl ArticleResponse {
    pub fn new(
        ArticleWithCommentCount {
            article_id,
            title,
            topic,
            author,
            created_at,
            votes,
            comments_count,
            ..
        }: ArticleWithCommentCount,
    ) -> Self {
        ArticleResponse {
            author,
            title,
            article_id,
            topic,
            created_at,
            votes,
            comments_count: comments_count.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub votes: i64,
    pub created_at: NaiveDateTime,
    pub author: String,
    pub body: String,
}

impl CommentResponse {
    pub fn new(
        Comment {
            comment_id,
            body,
            author,
            created_at,
            votes,
            ..
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            votes,
            created_at,
            author,
            body,
        }
    }
}

/// Echo of a freshly posted comment: only the recognized fields come back.
#[derive(Deserialize, Serialize, Debug)]
pub struct PostedComment {
    pub author: String,
    pub body: String,
    pub comment_id: i64,
}

/// Signup response row. The stored argon2 hash is deliberately redacted.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatedUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl CreatedUser {
    pub fn new(
        User {
            username,
            name,
            email,
            avatar_url,
            ..
        }: User,
    ) -> Self {
        CreatedUser {
            username,
            name,
            email,
            avatar_url,
        }
    }
}
