use serde_json::Value;

use crate::errors::RequestError;

// Creation payloads are decoded by hand from `serde_json::Value` rather than
// through typed `Json<T>` extractors: a missing or wrong-typed field must be
// a 400, not axum's 422, and unrecognized fields are dropped on the floor.

fn required_string(body: &Value, field: &str) -> Result<String, RequestError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(RequestError::BadRequest)
}

fn optional_string(body: &Value, field: &str) -> Result<Option<String>, RequestError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or(RequestError::BadRequest),
    }
}

fn required_integer(body: &Value, field: &str) -> Result<i64, RequestError> {
    body.get(field)
        .and_then(Value::as_i64)
        .ok_or(RequestError::BadRequest)
}

// ----------------- Comment Requests -----------------
#[derive(Debug)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewComment {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        Ok(NewComment {
            username: required_string(body, "username")?,
            body: required_string(body, "body")?,
        })
    }
}

// ----------------- Article Requests -----------------
#[derive(Debug)]
pub struct NewArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub votes: i64,
}

impl NewArticle {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        let votes = match body.get("votes") {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_i64().ok_or(RequestError::BadRequest)?,
        };
        Ok(NewArticle {
            title: required_string(body, "title")?,
            topic: required_string(body, "topic")?,
            author: required_string(body, "author")?,
            body: required_string(body, "body")?,
            votes,
        })
    }
}

// ----------------- Topic Requests -----------------
#[derive(Debug)]
pub struct NewTopic {
    pub slug: String,
    pub description: String,
    pub author: Option<String>,
}

impl NewTopic {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        Ok(NewTopic {
            slug: required_string(body, "slug")?,
            description: required_string(body, "description")?,
            author: optional_string(body, "author")?,
        })
    }
}

// ----------------- User Requests -----------------
#[derive(Debug)]
pub struct SignupRequest {
    pub username: String,
    pub name: String,
    pub password: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl SignupRequest {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        // Password presence is the first gate, before any hashing or
        // uniqueness check is attempted.
        let password = required_string(body, "password")?;
        Ok(SignupRequest {
            username: required_string(body, "username")?,
            name: required_string(body, "name")?,
            password,
            email: required_string(body, "email")?,
            avatar_url: optional_string(body, "avatar_url")?,
        })
    }
}

#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        Ok(LoginRequest {
            username: required_string(body, "username")?,
            password: required_string(body, "password")?,
        })
    }
}

// ----------------- Vote Requests -----------------
#[derive(Debug)]
pub struct VoteUpdate {
    pub inc_votes: i64,
}

impl VoteUpdate {
    pub fn from_value(body: &Value) -> Result<Self, RequestError> {
        Ok(VoteUpdate {
            inc_votes: required_integer(body, "inc_votes")?,
        })
    }
}
