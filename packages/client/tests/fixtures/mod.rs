//! Stub study room backend for integration tests.
//!
//! Serves `GET /rooms` and `POST /rooms/checkPassword/{id}` from an in-memory
//! list on an ephemeral port and records every room query it receives.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

pub const ROOM_PASSWORD: &str = "1234";

/// How the stub answers `GET /rooms`
#[derive(Debug, Clone)]
pub enum Behavior {
    Rooms(Vec<Value>),
    Status(StatusCode),
    Malformed,
}

#[derive(Clone)]
struct StubState {
    behavior: Behavior,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct TestServer {
    base_url: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(behavior: Behavior) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            queries: Arc::clone(&queries),
        };
        let app = Router::new()
            .route("/rooms", get(list_rooms))
            .route("/rooms/checkPassword/{id}", post(check_password))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            queries,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query strings received by `GET /rooms`, oldest first
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Backend room JSON
pub fn room_json(id: &str, is_public: bool, max_num: u32, current_num: u32) -> Value {
    json!({
        "_id": id,
        "title": format!("room {}", id),
        "imageUrl": "",
        "tagList": ["study"],
        "isPublic": is_public,
        "isChat": true,
        "maxNum": max_num,
        "currentNum": current_num,
    })
}

/// `count` public rooms with free seats, ids `room-{start}`..
pub fn public_rooms(start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| room_json(&format!("room-{}", i), true, 4, 1))
        .collect()
}

fn flag(params: &HashMap<String, String>, key: &str) -> Option<bool> {
    match params.get(key).map(String::as_str) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

async fn list_rooms(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().unwrap().push(params.clone());

    let rooms = match &state.behavior {
        Behavior::Rooms(rooms) => rooms,
        Behavior::Status(status) => return (*status, "backend failure").into_response(),
        Behavior::Malformed => return (StatusCode::OK, "{\"rooms\": ").into_response(),
    };

    let search = params.get("search").cloned().unwrap_or_default();
    let is_public = flag(&params, "isPublic");
    let is_possible = flag(&params, "isPossible");
    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit: usize = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(usize::MAX);

    let page: Vec<Value> = rooms
        .iter()
        .filter(|room| search.is_empty() || room["title"].as_str().unwrap().contains(&search))
        .filter(|room| is_public.is_none_or(|p| room["isPublic"] == p))
        .filter(|room| {
            is_possible.is_none_or(|p| (room["currentNum"].as_u64() < room["maxNum"].as_u64()) == p)
        })
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    Json(page).into_response()
}

async fn check_password(Path(_id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let message = if body["password"] == ROOM_PASSWORD {
        "비밀번호 확인 완료"
    } else {
        "비밀번호가 일치하지 않습니다"
    };
    Json(json!({ "message": message }))
}
