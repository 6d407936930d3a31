use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "rutasegura");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ruta_desconocida_devuelve_404() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/no-existe").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_asignacion_payload_invalido_devuelve_4xx() {
    let app = create_test_app();

    // estudiante_ids con un valor que no es UUID
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ruta/estudiantes")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "estudiante_ids": ["no-es-un-uuid"] }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_asignacion_payload_valido() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ruta/estudiantes")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "estudiante_ids": ["550e8400-e29b-41d4-a716-446655440000"]
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["recibidos"], 1);
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "service": "rutasegura", "status": "healthy" })) }),
        )
        .route("/api/ruta/estudiantes", post(assign_stub))
}

#[derive(Debug, serde::Deserialize)]
struct AsignarStubRequest {
    estudiante_ids: Vec<uuid::Uuid>,
}

async fn assign_stub(Json(request): Json<AsignarStubRequest>) -> Json<Value> {
    Json(json!({ "recibidos": request.estudiante_ids.len() }))
}
