use sqlx::SqlitePool;

use nc_news::{get_random_free_port, init_db, make_router, run_app};

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

/// Boots a full server on a random free port against a throwaway SQLite
/// file, seeded with the standard fixture: 4 users, 3 topics, 12 articles,
/// 18 comments.
pub async fn spawn_app() -> TestApp {
    let db_path = std::env::temp_dir().join(format!("nc-news-test-{}.db", rand::random::<u64>()));
    let db_url = format!("sqlite://{}", db_path.display());
    let pool = init_db(&db_url).await.expect("failed to init test database");
    seed(&pool).await;

    let (port, addr) = get_random_free_port();
    let router = make_router();
    let server_pool = pool.clone();
    tokio::spawn(async move {
        run_app(router, server_pool, addr)
            .await
            .expect("server exited early");
    });

    let address = format!("http://127.0.0.1:{port}");
    let client = reqwest::Client::new();
    wait_until_ready(&client, &address).await;
    TestApp {
        address,
        pool,
        client,
    }
}

async fn wait_until_ready(client: &reqwest::Client, address: &str) {
    for _ in 0..100 {
        if client.get(format!("{address}/api")).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    panic!("server never became ready");
}

/// Fixture layout:
/// - users (username asc): grumpy19, jessjelly, mrcomment456, tickle122
/// - topics: coding (articles 1-5), football (6-9), cooking (10-12)
/// - article N created on 2020-01-N, so 12 is the newest; votes = N except
///   article 3, which holds the maximum of 100
/// - comments: 6 on article 1, 5 on article 2, 4 on article 3, 3 on
///   article 4; comment N created on 2021-01-N
///
/// Seeded passwords are placeholders, not real hashes; login tests sign
/// their user up through the API first.
pub async fn seed(pool: &SqlitePool) {
    for username in ["grumpy19", "jessjelly", "mrcomment456", "tickle122"] {
        sqlx::query(
            r#"
            INSERT INTO users (username, name, password, email, avatar_url)
            VALUES ($1, $2, 'seed-placeholder-hash', $3, $4)
            "#,
        )
        .bind(username)
        .bind(format!("Name of {username}"))
        .bind(format!("{username}@example.com"))
        .bind(format!("https://example.com/avatars/{username}.jpg"))
        .execute(pool)
        .await
        .expect("failed to seed user");
    }

    for (slug, description) in [
        ("coding", "Code is love, code is life"),
        ("football", "FOOTIE!"),
        ("cooking", "Hey good looking, what you got cooking?"),
    ] {
        sqlx::query(r#"INSERT INTO topics (slug, description) VALUES ($1, $2)"#)
            .bind(slug)
            .bind(description)
            .execute(pool)
            .await
            .expect("failed to seed topic");
    }

    let authors = ["grumpy19", "jessjelly", "mrcomment456", "tickle122"];
    for i in 1..=12_i64 {
        let topic = match i {
            1..=5 => "coding",
            6..=9 => "football",
            _ => "cooking",
        };
        let votes = if i == 3 { 100 } else { i };
        sqlx::query(
            r#"
            INSERT INTO articles (title, body, topic, author, created_at, votes)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(format!("Article {i}"))
        .bind(format!("Body of article {i}"))
        .bind(topic)
        .bind(authors[(i - 1) as usize % authors.len()])
        .bind(format!("2020-01-{i:02} 00:00:00"))
        .bind(votes)
        .execute(pool)
        .await
        .expect("failed to seed article");
    }

    for i in 1..=18_i64 {
        let article_id = match i {
            1..=6 => 1,
            7..=11 => 2,
            12..=15 => 3,
            _ => 4,
        };
        sqlx::query(
            r#"
            INSERT INTO comments (body, author, article_id, created_at, votes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(format!("comment {i}"))
        .bind(authors[i as usize % authors.len()])
        .bind(article_id)
        .bind(format!("2021-01-{i:02} 00:00:00"))
        .bind(i % 7)
        .execute(pool)
        .await
        .expect("failed to seed comment");
    }
}
