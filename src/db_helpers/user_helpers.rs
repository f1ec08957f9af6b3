use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::SignupRequest;
use crate::errors::RequestError;
use crate::models::{User, UserProfile};

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserProfile>, RequestError> {
    let users = sqlx::query_as::<Sqlite, UserProfile>(
        r#"SELECT username, name, avatar_url FROM users ORDER BY username ASC"#,
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn get_user_profile(
    pool: &SqlitePool,
    username: &str,
) -> Result<UserProfile, RequestError> {
    let user = sqlx::query_as::<Sqlite, UserProfile>(
        r#"SELECT username, name, avatar_url FROM users WHERE username = $1"#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) => Ok(user),
        None => Err(RequestError::NotFound),
    }
}

/// Expects `user.password` to already be the argon2 hash. The username and
/// email unique constraints are the backstop behind the caller's pre-checks;
/// losing a signup race still surfaces as a conflict via the classifier.
pub async fn insert_user(pool: &SqlitePool, user: &SignupRequest) -> Result<User, RequestError> {
    let user = sqlx::query_as::<Sqlite, User>(
        r#"
        INSERT INTO users (username, name, password, email, avatar_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING username, name, password, email, avatar_url
        "#,
    )
    .bind(&user.username)
    .bind(&user.name)
    .bind(&user.password)
    .bind(&user.email)
    .bind(&user.avatar_url)
    .fetch_one(pool)
    .await?;
    Ok(user)
}
