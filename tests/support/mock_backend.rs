use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use booker::api::Musician;
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const VALID_TOKEN: &str = "test-token";

/// In-process stand-in for the booking REST API
#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    state: Arc<Mutex<MockState>>,
}

struct MockState {
    musicians: Vec<Musician>,
    prospects: Vec<u64>,
    fail_musicians: bool,
    fail_mutations: bool,
}

impl MockBackend {
    pub fn prospects(&self) -> Vec<u64> {
        self.state.lock().unwrap().prospects.clone()
    }

    pub fn fail_musicians(&self) {
        self.state.lock().unwrap().fail_musicians = true;
    }

    /// Prospect mutations answer 500 with an empty body
    pub fn fail_mutations(&self) {
        self.state.lock().unwrap().fail_mutations = true;
    }
}

pub fn sample_musicians() -> Vec<Musician> {
    let rows = [
        (1, "Blue Notes", "Jazz", "Chicago", 500, true),
        (2, "Stone Age", "Rock", "Austin", 2000, true),
        (3, "Late Set", "Jazz", "New Orleans", 300, false),
        (4, "Amp Heads", "Rock", "Chicago", 8000, true),
        (5, "Night Owls", "Jazz", "Austin", 10_000, false),
    ];
    rows.iter()
        .map(|(id, name, genre, homebase, capacity, active)| Musician {
            id: *id,
            act_name: name.to_string(),
            genre: genre.to_string(),
            homebase: homebase.to_string(),
            average_venue_capacity: *capacity,
            agent: "Sam Lee".to_string(),
            agency: "Northside Talent".to_string(),
            active: *active,
        })
        .collect()
}

type Shared = Arc<Mutex<MockState>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", VALID_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid or expired token" })),
    )
        .into_response()
}

async fn list_musicians(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail_musicians {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    Json(state.musicians.clone()).into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let state = state.lock().unwrap();
    // Nested prospects use `name`, like the real API
    let prospects: Vec<_> = state
        .musicians
        .iter()
        .filter(|m| state.prospects.contains(&m.id))
        .map(|m| json!({ "id": m.id, "name": m.act_name, "genre": m.genre }))
        .collect();
    Json(json!({
        "id": 42,
        "firstname": "Ada",
        "lastname": "Byron",
        "email": "ada@example.com",
        "musicians": prospects,
    }))
    .into_response()
}

async fn add_prospect(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut state = state.lock().unwrap();
    if state.fail_mutations {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !state.musicians.iter().any(|m| m.id == id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Musician not found" })),
        )
            .into_response();
    }
    if state.prospects.contains(&id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Musician already added" })),
        )
            .into_response();
    }
    state.prospects.push(id);
    (StatusCode::CREATED, Json(json!({ "message": "Added" }))).into_response()
}

async fn remove_prospect(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut state = state.lock().unwrap();
    if state.fail_mutations {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    state.prospects.retain(|p| *p != id);
    StatusCode::NO_CONTENT.into_response()
}

/// Serve the mock API on an ephemeral port under `/api`
pub async fn spawn_mock_backend() -> MockBackend {
    let state = Arc::new(Mutex::new(MockState {
        musicians: sample_musicians(),
        prospects: Vec::new(),
        fail_musicians: false,
        fail_mutations: false,
    }));

    let api = Router::new()
        .route("/musicians", get(list_musicians))
        .route("/auth/me", get(me))
        .route(
            "/auth/me/musicians/:id",
            post(add_prospect).delete(remove_prospect),
        )
        .with_state(state.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}/api", addr),
        state,
    }
}
