use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    authentication::{hash_password_argon2, verify_password_argon2},
    data_formats::{
        ArticleResponse, ArticleWrapper, CommentResponse, CommentWrapper, CreatedUser,
        LoginRequest, MultipleArticlesWrapper, MultipleCommentsWrapper, NewArticle, NewComment,
        NewTopic, PostedCommentWrapper, SignupRequest, SingleArticleWrapper, SingleUserWrapper,
        TopicWrapper, TopicsWrapper, UserWrapper, UsersWrapper, VoteUpdate,
    },
    db_helpers::{self, ArticleListQuery, Page},
    endpoints::api_endpoints,
    errors::RequestError,
    models::{Article, Comment},
};

type JsonResult<T> = Result<Json<T>, RequestError>;
type CreatedResult<T> = Result<(StatusCode, Json<T>), RequestError>;

/// Path identifiers arrive as raw text and are parsed here; anything
/// non-numeric is a bad request, never a silently coerced lookup.
fn parse_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse::<i64>().map_err(|_| RequestError::BadRequest)
}

// ----------------- Catalog & Fallback Handlers -----------------

pub async fn list_endpoints() -> Json<Value> {
    Json(api_endpoints())
}

pub async fn not_found() -> RequestError {
    RequestError::NotFound
}

// ----------------- Topic Handlers -----------------

pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = db_helpers::list_topics(&pool).await?;
    Ok(Json(TopicsWrapper { topics }))
}

pub async fn post_topic(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(body): Json<Value>,
) -> CreatedResult<TopicWrapper> {
    let new_topic = NewTopic::from_value(&body)?;
    let topic = db_helpers::insert_topic(&pool, new_topic).await?;
    Ok((StatusCode::CREATED, Json(TopicWrapper { topic })))
}

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<HashMap<String, String>>,
) -> JsonResult<MultipleArticlesWrapper> {
    let query = ArticleListQuery::from_params(&params)?;
    let articles = db_helpers::list_articles(&pool, &query).await?;
    Ok(Json(MultipleArticlesWrapper {
        articles: articles.into_iter().map(ArticleResponse::new).collect(),
    }))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<SingleArticleWrapper> {
    let article_id = parse_id(&article_id)?;
    let article = db_helpers::get_article_by_id(&pool, article_id).await?;
    Ok(Json(SingleArticleWrapper::wrap(ArticleResponse::new(
        article,
    ))))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(body): Json<Value>,
) -> CreatedResult<ArticleWrapper<ArticleResponse>> {
    let new_article = NewArticle::from_value(&body)?;
    let article = db_helpers::insert_article(&pool, new_article).await?;
    Ok((
        StatusCode::CREATED,
        Json(ArticleWrapper {
            article: ArticleResponse::new(article),
        }),
    ))
}

pub async fn patch_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article_id = parse_id(&article_id)?;
    let update = VoteUpdate::from_value(&body)?;
    let article = db_helpers::update_article_votes(&pool, article_id, update.inc_votes).await?;
    Ok(Json(ArticleWrapper { article }))
}

pub async fn delete_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let article_id = parse_id(&article_id)?;
    db_helpers::delete_article(&pool, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- Comment Handlers -----------------

pub async fn get_article_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> JsonResult<MultipleCommentsWrapper> {
    let article_id = parse_id(&article_id)?;
    let page = Page::from_param(params.get("p").map(String::as_str))?;
    let comments = db_helpers::list_comments_for_article(&pool, article_id, page).await?;
    Ok(Json(MultipleCommentsWrapper {
        comments: comments.into_iter().map(CommentResponse::new).collect(),
    }))
}

pub async fn post_article_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> CreatedResult<PostedCommentWrapper> {
    let article_id = parse_id(&article_id)?;
    let new_comment = NewComment::from_value(&body)?;
    let posted = db_helpers::insert_comment(&pool, article_id, new_comment).await?;
    Ok((
        StatusCode::CREATED,
        Json(PostedCommentWrapper {
            posted_comment: vec![posted],
        }),
    ))
}

pub async fn patch_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
    Json(body): Json<Value>,
) -> JsonResult<CommentWrapper<Comment>> {
    let comment_id = parse_id(&comment_id)?;
    let update = VoteUpdate::from_value(&body)?;
    let comment = db_helpers::update_comment_votes(&pool, comment_id, update.inc_votes).await?;
    Ok(Json(CommentWrapper { comment }))
}

pub async fn delete_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let comment_id = parse_id(&comment_id)?;
    db_helpers::delete_comment(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = db_helpers::list_users(&pool).await?;
    Ok(Json(UsersWrapper { users }))
}

pub async fn get_user_by_username(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> JsonResult<SingleUserWrapper> {
    let user = db_helpers::get_user_profile(&pool, &username).await?;
    Ok(Json(SingleUserWrapper { user: vec![user] }))
}

/// Signup order: password present, username free, email free, hash, insert.
/// The two existence checks are not atomic with the insert; the unique
/// constraints are the backstop and a losing racer still gets a 409.
pub async fn signup_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(body): Json<Value>,
) -> CreatedResult<UserWrapper<CreatedUser>> {
    let mut request = SignupRequest::from_value(&body)?;

    if db_helpers::username_exists(&pool, &request.username).await? {
        return Err(RequestError::Conflict);
    }
    if db_helpers::email_exists(&pool, &request.email).await? {
        return Err(RequestError::Conflict);
    }

    request.password = hash_password_argon2(request.password)
        .await
        .map_err(|_| RequestError::ServerError)?;

    let user = db_helpers::insert_user(&pool, &request).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserWrapper {
            user: CreatedUser::new(user),
        }),
    ))
}

/// An unknown username and a wrong password are indistinguishable to the
/// caller: both are 401.
pub async fn login_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(body): Json<Value>,
) -> JsonResult<bool> {
    let request = LoginRequest::from_value(&body)?;

    let user = match db_helpers::get_user_by_username(&pool, &request.username).await? {
        Some(user) => user,
        None => return Err(RequestError::NotAuthorized),
    };

    let is_password_correct = verify_password_argon2(request.password, &user.password)
        .await
        .map_err(|_| RequestError::ServerError)?;

    if !is_password_correct {
        return Err(RequestError::NotAuthorized);
    }
    Ok(Json(true))
}
