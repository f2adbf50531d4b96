pub mod config;
pub mod error;
pub mod store;

use std::future::Future;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ErrorBody};
pub use store::TodoStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            completed,
        }
    }
}

/// Router backed by a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).patch(toggle_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Binds the configured address; the error names the address on failure.
pub async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_until(listener, std::future::pending()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    store.get(&id).await.map(Json).ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(todo) = payload.map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))?;
    let todo = store.create(todo).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn toggle_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    store.toggle(&id).await.map(Json).ok_or(ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo::new("1", "Clean room", false);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["item"], "Clean room");
        assert_eq!(json["completed"], false);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn todo_defaults_completed_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":"9","item":"No flag"}"#).unwrap();
        assert_eq!(todo, Todo::new("9", "No flag", false));
    }

    #[test]
    fn todo_rejects_missing_id() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"item":"x","completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_rejects_missing_item() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":"1"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn bind_reports_address_in_use() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let config = Config { addr: addr.clone() };

        let err = bind(&config).await.unwrap_err();
        assert_eq!(err.to_string(), format!("failed to bind {addr}"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[tokio::test]
    async fn bind_accepts_free_port() {
        let config = Config {
            addr: "127.0.0.1:0".to_string(),
        };
        let listener = bind(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[test]
    fn todo_rejects_numeric_id() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":4,"item":"x"}"#);
        assert!(result.is_err());
    }
}
