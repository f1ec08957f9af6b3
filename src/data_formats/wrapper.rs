use serde::{Deserialize, Serialize};

use super::response::{ArticleResponse, CommentResponse, PostedComment};
use crate::models::{Topic, UserProfile};

// The containing-collection keys here are wire contract, oddities included:
// a single article lookup nests twice and single users/posted comments ride
// inside one-element arrays.

#[derive(Debug, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct TopicWrapper {
    pub topic: Topic,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper {
    pub articles: Vec<ArticleResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

/// `GET /api/articles/:id` body: `{"article": {"article": [row]}}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct SingleArticleWrapper {
    pub article: ArticleWrapper<Vec<ArticleResponse>>,
}

impl SingleArticleWrapper {
    pub fn wrap(article: ArticleResponse) -> Self {
        SingleArticleWrapper {
            article: ArticleWrapper {
                article: vec![article],
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleCommentsWrapper {
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PostedCommentWrapper {
    #[serde(rename = "postedComment")]
    pub posted_comment: Vec<PostedComment>,
}

#[derive(Debug, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct SingleUserWrapper {
    pub user: Vec<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct UserWrapper<T> {
    pub user: T,
}
