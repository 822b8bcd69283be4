use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        todos::{
            create_todo, delete_todo, get_todo, list_complete_todos, list_todos, update_todo,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the todo endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let todo_routes = Router::new()
        .route("/todoitems", get(list_todos).post(create_todo))
        .route("/todoitems/complete", get(list_complete_todos))
        .route(
            "/todoitems/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(todo_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use todoapi_core::storage::{RepositoryError, Result, TodoStore};
    use todoapi_core::todo::Todo;
    use tower::ServiceExt;

    use super::*;

    async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
        app.clone().oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, body: &str) -> Todo {
        let response = send(app, json_request("POST", "/todoitems", body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_todos_empty() {
        let app = create_app(AppState::default());

        let response = send(&app, get_request("/todoitems")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_todo_lifecycle() {
        let app = create_app(AppState::default());

        // Create
        let response = send(
            &app,
            json_request("POST", "/todoitems", r#"{"name":"Buy milk","isComplete":false}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(location, format!("/todoitems/{id}"));
        assert_eq!(created["name"], "Buy milk");
        assert_eq!(created["isComplete"], false);

        // Get
        let response = send(&app, get_request(&location)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        // Update with a foreign id in the body
        let response = send(
            &app,
            json_request(
                "PUT",
                &location,
                r#"{"id":"evil","name":"Buy milk","isComplete":true}"#,
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, get_request(&location)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": id, "name": "Buy milk", "isComplete": true})
        );
        let response = send(&app, get_request("/todoitems/evil")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Delete twice
        let response = send(&app, delete_request(&location)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, delete_request(&location)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, get_request(&location)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = create_app(AppState::default());

        let created = create(&app, r#"{"id":"client-id","name":"Walk dog"}"#).await;

        assert_ne!(created.id, "client-id");
        assert!(!created.is_complete);
        let response = send(&app, get_request("/todoitems/client-id")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_numeric_client_id_is_ignored() {
        let app = create_app(AppState::default());

        let created = create(&app, r#"{"id":5,"name":"Walk dog","isComplete":true}"#).await;
        assert_ne!(created.id, "5");
        assert!(created.is_complete);

        let response = send(
            &app,
            json_request(
                "PUT",
                &format!("/todoitems/{}", created.id),
                r#"{"id":7,"name":"Walk cat","isComplete":false}"#,
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, get_request(&format!("/todoitems/{}", created.id))).await;
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": created.id, "name": "Walk cat", "isComplete": false})
        );
    }

    #[tokio::test]
    async fn test_create_without_name() {
        let app = create_app(AppState::default());

        let created = create(&app, "{}").await;

        assert_eq!(created.name, None);
        assert!(!created.is_complete);
    }

    #[tokio::test]
    async fn test_get_nonexistent_todo() {
        let app = create_app(AppState::default());

        let response = send(&app, get_request("/todoitems/nonexistent")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Todo not found: nonexistent");
    }

    #[tokio::test]
    async fn test_update_nonexistent_todo() {
        let app = create_app(AppState::default());

        let response = send(
            &app,
            json_request("PUT", "/todoitems/nonexistent", r#"{"name":"x"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = send(&app, get_request("/todoitems")).await;
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_complete_todos() {
        let app = create_app(AppState::default());
        create(&app, r#"{"name":"Done","isComplete":true}"#).await;
        create(&app, r#"{"name":"Pending","isComplete":false}"#).await;
        create(&app, r#"{"name":"Also done","isComplete":true}"#).await;

        let response = send(&app, get_request("/todoitems/complete")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let complete: Vec<Todo> = serde_json::from_value(body_json(response).await).unwrap();

        let response = send(&app, get_request("/todoitems")).await;
        let all: Vec<Todo> = serde_json::from_value(body_json(response).await).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(complete.len(), 2);
        assert!(complete.iter().all(|t| t.is_complete && all.contains(t)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_app(AppState::default());

        let response = send(&app, json_request("POST", "/todoitems", "{not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let created = create(&app, r#"{"name":"Buy milk"}"#).await;
        let response = send(
            &app,
            json_request(
                "PUT",
                &format!("/todoitems/{}", created.id),
                r#"{"isComplete":"yes"}"#,
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, get_request("/todoitems")).await;
        let all: Vec<Todo> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_app(AppState::default());

        let response = send(&app, get_request("/livez")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get_request("/healthz")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "ok", "backend": "inmemory"})
        );
    }

    /// Store that is never reachable.
    struct UnavailableStore;

    fn unavailable() -> RepositoryError {
        RepositoryError::ConnectionFailed("store unavailable".to_string())
    }

    #[async_trait]
    impl TodoStore for UnavailableStore {
        fn backend_name(&self) -> &'static str {
            "unavailable"
        }

        async fn get_all(&self) -> Result<Vec<Todo>> {
            Err(unavailable())
        }

        async fn get_complete(&self) -> Result<Vec<Todo>> {
            Err(unavailable())
        }

        async fn get_by_id(&self, _id: &str) -> Result<Option<Todo>> {
            Err(unavailable())
        }

        async fn insert(&self, _todo: &Todo) -> Result<Todo> {
            Err(unavailable())
        }

        async fn replace(&self, _todo: &Todo) -> Result<Option<Todo>> {
            Err(unavailable())
        }

        async fn remove_by_id(&self, _id: &str) -> Result<bool> {
            Err(unavailable())
        }
    }

    #[tokio::test]
    async fn test_backend_fault_is_service_unavailable() {
        let app = create_app(AppState::with_store(Arc::new(UnavailableStore)));

        let response = send(&app, get_request("/todoitems")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = send(&app, get_request("/todoitems/g1")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = send(&app, json_request("POST", "/todoitems", "{}")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = send(&app, delete_request("/todoitems/g1")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_lifecycle_on_sqlite() {
        let store = crate::storage::SqliteStore::new_in_memory().await.unwrap();
        let app = create_app(AppState::with_store(Arc::new(store)));

        let created = create(&app, r#"{"name":"Buy milk"}"#).await;
        let uri = format!("/todoitems/{}", created.id);

        let response = send(
            &app,
            json_request("PUT", &uri, r#"{"id":"evil","name":"Buy milk","isComplete":true}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, get_request("/todoitems/complete")).await;
        let complete: Vec<Todo> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(
            complete,
            vec![Todo::new(created.id.clone(), "Buy milk").with_complete(true)]
        );

        let response = send(&app, delete_request(&uri)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, get_request(&uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_malformed_stored_row_is_server_error() {
        let store = crate::storage::SqliteStore::new_in_memory().await.unwrap();
        store
            .execute_raw("INSERT INTO todos (id, name, is_complete) VALUES ('bad', 'Broken', 'yes')")
            .await
            .unwrap();
        let app = create_app(AppState::with_store(Arc::new(store)));

        let response = send(&app, get_request("/todoitems")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = send(&app, get_request("/todoitems/bad")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = send(&app, json_request("PUT", "/todoitems/bad", r#"{"name":"x"}"#)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
