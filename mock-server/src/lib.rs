use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub due: NaiveDate,
    pub notes: String,
}

pub type Db = Arc<HashMap<i64, Todo>>;

/// Records served by `app()`.
pub fn seed() -> Vec<Todo> {
    vec![
        Todo {
            id: 168,
            title: "fix website".to_string(),
            due: NaiveDate::from_ymd_opt(2020, 6, 6).unwrap_or(NaiveDate::MIN),
            notes: "!do this!".to_string(),
        },
        Todo {
            id: 87549,
            title: "Practice falcony".to_string(),
            due: NaiveDate::from_ymd_opt(2020, 7, 1).unwrap_or(NaiveDate::MIN),
            notes: "bring the glove".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(todos: impl IntoIterator<Item = Todo>) -> Router {
    let db: Db = Arc::new(todos.into_iter().map(|t| (t.id, t)).collect());
    Router::new()
        .route("/todos/{id}", get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "serving todos");
    }
    axum::serve(listener, app()).await
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let found = db.get(&id).cloned();
    debug!(id, found = found.is_some(), "todo lookup");
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}
