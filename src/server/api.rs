//! HTTP routes and handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use campus_connect::models::{
    BoundaryRecord, Event, LocationRecord, NavigationConfig, NewEvent, RoadRecord,
};
use campus_connect::CampusData;

use crate::events::EventStore;

/// Application state shared across handlers
pub struct AppState {
    pub data: CampusData,
    pub events: EventStore,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/campus/boundary", get(boundary_handler))
        .route("/api/locations", get(locations_handler))
        .route("/api/locations/{id}", get(location_handler))
        .route("/api/roads", get(roads_handler))
        .route("/api/navigation/config", get(navigation_config_handler))
        .route("/api/navigation/all", get(navigation_all_handler))
        .route("/api/events", get(list_events_handler).post(create_event_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "Backend is running",
        "message": "Welcome to Campus Connect!"
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    data_dir: String,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        data_dir: state.data.dir().display().to_string(),
    })
}

/// Campus boundary, or a placeholder with no coordinates
async fn boundary_handler(State(state): State<Arc<AppState>>) -> Json<BoundaryRecord> {
    Json(state.data.boundary_or_placeholder())
}

async fn locations_handler(State(state): State<Arc<AppState>>) -> Json<Vec<LocationRecord>> {
    Json(state.data.locations())
}

async fn location_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LocationRecord>, ApiError> {
    state
        .data
        .location(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Location"))
}

async fn roads_handler(State(state): State<Arc<AppState>>) -> Json<Vec<RoadRecord>> {
    Json(state.data.roads())
}

async fn navigation_config_handler(State(state): State<Arc<AppState>>) -> Json<NavigationConfig> {
    Json(state.data.navigation_config())
}

#[derive(Serialize)]
struct NavigationBundle {
    config: NavigationConfig,
    boundary: BoundaryRecord,
    locations: Vec<LocationRecord>,
}

/// Everything the map client needs in one request
async fn navigation_all_handler(State(state): State<Arc<AppState>>) -> Json<NavigationBundle> {
    Json(NavigationBundle {
        config: state.data.navigation_config(),
        boundary: state.data.boundary_or_placeholder(),
        locations: state.data.locations(),
    })
}

async fn list_events_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    Json(state.events.list())
}

#[derive(Serialize)]
struct EventCreated {
    message: &'static str,
    id: String,
}

/// Accepts any body; unknown or malformed input creates an event with empty fields
async fn create_event_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<EventCreated>) {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    info!("Received event payload: {}", payload);

    let event = state.events.create(NewEvent::from_payload(&payload));

    (
        StatusCode::CREATED,
        Json(EventCreated {
            message: "Event created successfully",
            id: event.id,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use campus_connect::data::DataConfig;
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use tower::ServiceExt;

    fn app(dir: &TempDir) -> Router {
        let data = CampusData::new(&DataConfig {
            dir: dir.path().to_path_buf(),
            demo_fallback: true,
        });
        router(Arc::new(AppState {
            data,
            events: EventStore::seeded(),
        }))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, Body::empty()).await
    }

    #[tokio::test]
    async fn test_root() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Backend is running");
    }

    #[tokio::test]
    async fn test_boundary_placeholder() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/api/campus/boundary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": "campus", "name": "Campus (placeholder)", "coordinates": []})
        );
    }

    #[tokio::test]
    async fn test_boundary_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("campus_boundary.geojson"),
            json!({
                "type": "Polygon",
                "coordinates": [[[80.0, 16.0], [80.1, 16.0], [80.1, 16.1]]]
            })
            .to_string(),
        )
        .unwrap();

        let (_, body) = get_json(app(&dir), "/api/campus/boundary").await;
        assert_eq!(body["name"], "Campus");
        assert_eq!(body["coordinates"][0], json!([16.0, 80.0]));
        assert_eq!(body["coordinates"][3], json!([16.0, 80.0]));
    }

    #[tokio::test]
    async fn test_location_lookup() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/api/locations/b2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Auditorium");
        assert_eq!(body["imageUrl"], "https://example.com/auditorium.jpg");

        let (status, body) = get_json(app(&dir), "/api/locations/zz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Location not found"}));
    }

    #[tokio::test]
    async fn test_roads_empty_without_file() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/api/roads").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["dataDir"], dir.path().display().to_string());
    }

    #[tokio::test]
    async fn test_roads_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("roads.geojson"),
            json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"name": "Main Road"},
                        "geometry": {"type": "LineString", "coordinates": [[80.0, 16.0], [80.1, 16.1]]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"name": "Central Loop"},
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[80.0, 16.0], [80.1, 16.0], [80.1, 16.1]]]
                        }
                    }
                ]
            })
            .to_string(),
        )
        .unwrap();

        let (status, body) = get_json(app(&dir), "/api/roads").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": "Central Loop",
                "name": "Central Loop",
                "coordinates": [[16.0, 80.0], [16.0, 80.1], [16.1, 80.1], [16.0, 80.0]],
                "type": "Polygon"
            }])
        );
    }

    #[tokio::test]
    async fn test_navigation_config_defaults() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(app(&dir), "/api/navigation/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["center"], json!([16.493, 80.513]));
        assert_eq!(body["defaultZoom"], json!(17));
        assert_eq!(body["categoryColors"]["General"], "#3b82f6");
    }

    #[tokio::test]
    async fn test_navigation_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("navigation_config.json"),
            json!({"center": [17.0, 81.0, 12.5], "categoryColors": {"Lab": "#111111"}}).to_string(),
        )
        .unwrap();

        let (_, body) = get_json(app(&dir), "/api/navigation/config").await;
        assert_eq!(body["center"], json!([17.0, 81.0]));
        assert_eq!(body["defaultZoom"], json!(17));
        assert_eq!(body["categoryColors"], json!({"Lab": "#111111"}));
    }

    #[tokio::test]
    async fn test_navigation_all() {
        let dir = tempdir().unwrap();
        let (_, body) = get_json(app(&dir), "/api/navigation/all").await;
        assert_eq!(body["config"]["defaultZoom"], json!(17));
        assert_eq!(body["config"]["categoryColors"]["Academic"], "#2563eb");
        assert_eq!(body["boundary"]["name"], "Campus (placeholder)");
        assert_eq!(body["locations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_then_list_events() {
        let dir = tempdir().unwrap();
        let app = app(&dir);

        let (status, created) = send(
            app.clone(),
            Method::POST,
            "/api/events",
            Body::from(r#"{"title": "Hackathon", "time": "2025-09-01T09:00:00Z"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["message"], "Event created successfully");

        let (_, events) = get_json(app, "/api/events").await;
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[3]["id"], created["id"]);
        assert_eq!(events[3]["time"], "2025-09-01T09:00:00Z");
    }

    #[tokio::test]
    async fn test_create_event_tolerates_garbage() {
        let dir = tempdir().unwrap();
        let (status, _) = send(app(&dir), Method::POST, "/api/events", Body::from("{{{")).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
