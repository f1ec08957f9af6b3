use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::{errors::RequestError, models::User};

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

pub const PAGE_SIZE: i64 = 10;

/// 1-based page slice with a fixed page size. An absent `p` means the whole
/// result set (no slicing at all), non-numeric input is a bad request and
/// page zero is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
}

impl Page {
    pub fn from_param(param: Option<&str>) -> Result<Option<Self>, RequestError> {
        let raw = match param {
            None => return Ok(None),
            Some(raw) => raw,
        };
        let number = raw.parse::<i64>().map_err(|_| RequestError::BadRequest)?;
        if number < 1 {
            return Err(RequestError::NotFound);
        }
        // A page whose offset does not fit in i64 is past the end of any
        // result set, same as any other out-of-range page.
        if number
            .checked_sub(1)
            .and_then(|n| n.checked_mul(PAGE_SIZE))
            .is_none()
        {
            return Err(RequestError::NotFound);
        }
        Ok(Some(Page { number }))
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * PAGE_SIZE
    }

    pub fn is_first(&self) -> bool {
        self.number == 1
    }
}

/// `LIMIT`/`OFFSET` bind values for an optional page. SQLite treats a
/// negative LIMIT as "no limit".
pub fn page_bounds(page: Option<Page>) -> (i64, i64) {
    match page {
        Some(page) => (PAGE_SIZE, page.offset()),
        None => (-1, 0),
    }
}

/// Allow-listed article sort columns. Sort identifiers cannot be bound as
/// query parameters, so the enum lookup is the injection defense: client
/// tokens only ever select one of these fixed identifiers. An unknown token
/// is treated as a missing resource, not a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    CommentsCount,
}

impl SortColumn {
    pub fn from_query(token: &str) -> Result<Self, RequestError> {
        match token {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comments_count" => Ok(Self::CommentsCount),
            _ => Err(RequestError::NotFound),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentsCount => "comments_count",
        }
    }
}

/// Exactly `asc` or `desc`, case-sensitive; anything else is a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_query(token: &str) -> Result<Self, RequestError> {
        match token {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(RequestError::BadRequest),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

const ARTICLE_PROJECTION: &str = r#"
    SELECT articles.article_id              AS "article_id",
           articles.title                   AS "title",
           articles.body                    AS "body",
           articles.topic                   AS "topic",
           articles.author                  AS "author",
           articles.created_at              AS "created_at",
           articles.votes                   AS "votes",
           COUNT(comments.comment_id)       AS "comments_count"
    FROM   articles
           LEFT JOIN comments
                  ON comments.article_id = articles.article_id
"#;

/// Validated query plan for the article listing: the filter value stays a
/// bind parameter, while the sort column and direction are spliced from the
/// allow-list enums. Each query param is read independently, so any
/// combination of `topic`, `sort_by`, `order_by` and `p` works together.
#[derive(Debug)]
pub struct ArticleListQuery {
    pub topic: Option<String>,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    pub page: Option<Page>,
}

impl ArticleListQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, RequestError> {
        let topic = params.get("topic").cloned();
        let sort_column = match params.get("sort_by") {
            Some(token) => SortColumn::from_query(token)?,
            None => SortColumn::CreatedAt,
        };
        let sort_direction = match params.get("order_by") {
            Some(token) => SortDirection::from_query(token)?,
            None => SortDirection::Desc,
        };
        let page = Page::from_param(params.get("p").map(String::as_str))?;
        Ok(ArticleListQuery {
            topic,
            sort_column,
            sort_direction,
            page,
        })
    }

    /// Bind order: `[topic,] limit, offset`.
    pub fn to_sql(&self) -> String {
        let mut query = String::from(ARTICLE_PROJECTION);
        if self.topic.is_some() {
            query.push_str("    WHERE  articles.topic = ?\n");
        }
        query.push_str("    GROUP  BY articles.article_id\n");
        query.push_str(&format!(
            "    ORDER  BY {} {}\n",
            self.sort_column.as_sql(),
            self.sort_direction.as_sql()
        ));
        query.push_str("    LIMIT  ? OFFSET ?");
        query
    }
}

/// Single-article variant of the same join; bind the article id.
pub fn article_by_id_sql() -> String {
    let mut query = String::from(ARTICLE_PROJECTION);
    query.push_str("    WHERE  articles.article_id = ?\n");
    query.push_str("    GROUP  BY articles.article_id");
    query
}

// ----------------- Helper Functions -----------------

pub async fn article_exists(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)"#,
    )
    .bind(article_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, RequestError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        SELECT username, name, password, email, avatar_url FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, RequestError> {
    let exists =
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)"#)
            .bind(username)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, RequestError> {
    let exists =
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)"#)
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}
