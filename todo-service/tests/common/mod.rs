use std::sync::Arc;

use auth::Authenticator;
use auth::TokenIssuer;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::repositories::SqliteTodoRepository;
use todo_service::outbound::repositories::SqliteUserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory database
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // A single connection keeps every handle on the same in-memory
        // database for the lifetime of the test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, 24));
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
        let todo_repo = Arc::new(SqliteTodoRepository::new(pool.clone()));

        let user_service = Arc::new(UserService::new(user_repo, Arc::clone(&authenticator)));
        let todo_service = Arc::new(TodoService::new(todo_repo));

        let router = create_router(user_service, todo_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and log in, returning (user id, bearer token)
    pub async fn register_and_login(&self, email: &str, password: &str) -> (String, String) {
        let register_response = self
            .post("/register")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(register_response.status(), reqwest::StatusCode::CREATED);

        let register_body: serde_json::Value = register_response
            .json()
            .await
            .expect("Failed to parse register response");
        let user_id = register_body["data"]["id"].as_str().unwrap().to_string();

        let login_response = self
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(login_response.status(), reqwest::StatusCode::OK);

        let login_body: serde_json::Value = login_response
            .json()
            .await
            .expect("Failed to parse login response");
        let token = login_body["data"]["token"].as_str().unwrap().to_string();

        (user_id, token)
    }

    /// Token signed with the server's secret but already past its expiry
    pub fn expired_token_for(&self, user_id: &str) -> String {
        TokenIssuer::new(JWT_SECRET, -1)
            .issue(user_id)
            .expect("Failed to issue expired token")
    }
}
