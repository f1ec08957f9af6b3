use serde_json::{json, Value};

/// Machine-readable catalog served at `GET /api`, grouped by HTTP verb.
pub fn api_endpoints() -> Value {
    json!({
        "GET": [
            {
                "path": "GET /api",
                "description": "lists all the available endpoints for the api",
                "queries": [],
            },
            {
                "path": "GET /api/topics",
                "description": "lists article topics with their slug and description",
                "queries": [],
            },
            {
                "path": "GET /api/articles",
                "description": "lists articles with their comment counts; accepts queries to refine searching",
                "queries": ["topic", "sort_by", "order_by", "p"],
                "exampleQueries": [
                    "/api/articles?topic=coding",
                    "/api/articles?sort_by=votes",
                    "/api/articles?sort_by=article_id&order_by=asc",
                    "/api/articles?p=2",
                ],
            },
            {
                "path": "GET /api/articles/:article_id",
                "description": "lists a specific article by its id, including its comment count",
                "queries": [],
            },
            {
                "path": "GET /api/articles/:article_id/comments",
                "description": "lists all comments for the given article_id, newest first",
                "queries": ["p"],
            },
            {
                "path": "GET /api/users",
                "description": "lists the username, name & avatar URL of all users",
                "queries": [],
            },
            {
                "path": "GET /api/users/:username",
                "description": "lists the username, name & avatar URL of the specified user",
                "queries": [],
            },
        ],
        "POST": [
            {
                "path": "POST /api/topics",
                "description": "creates a new topic; slug & description are required",
                "examplePost": {"slug": "gardening", "description": "growing things"},
            },
            {
                "path": "POST /api/articles",
                "description": "creates a new article under an existing topic and author",
                "examplePost": {
                    "title": "The battle for Node.js security has only begun",
                    "topic": "coding",
                    "author": "tickle122",
                    "body": "...",
                },
            },
            {
                "path": "POST /api/articles/:article_id/comments",
                "description": "posts a comment on the given article; username & body are required",
                "examplePost": {"username": "mrcomment456", "body": "this is a comment"},
            },
            {
                "path": "POST /api/users/signup",
                "description": "signs a user up; passwords are hashed & never stored in the clear",
                "examplePost": {
                    "username": "cbeachdude",
                    "name": "chris_hansen",
                    "password": "l.Armstr0ng",
                    "email": "chris@example.com",
                },
            },
            {
                "path": "POST /api/users/login",
                "description": "checks submitted credentials against the stored hash",
                "examplePost": {"username": "cbeachdude", "password": "l.Armstr0ng"},
            },
        ],
        "PATCH": [
            {
                "path": "PATCH /api/articles/:article_id",
                "description": "applies a signed vote increment to the article & returns it",
                "examplePatch": {"inc_votes": 12},
            },
            {
                "path": "PATCH /api/comments/:comment_id",
                "description": "applies a signed vote increment to the comment & returns it",
                "examplePatch": {"inc_votes": -1},
            },
        ],
        "DELETE": [
            {
                "path": "DELETE /api/articles/:article_id",
                "description": "deletes the article by article_id",
            },
            {
                "path": "DELETE /api/comments/:comment_id",
                "description": "deletes the comment by comment_id",
            },
        ],
    })
}
