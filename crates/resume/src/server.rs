//! Local development server.
//!
//! Wraps each HTTP request into an API Gateway proxy envelope and runs it
//! through the same handler Lambda invokes, so local and deployed behavior
//! match. The `X-Resume-User` header stands in for the authorizer: its value
//! becomes both the `cognito:username` and `sub` claims.

use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use resume_core::identity::{Claims, SUBJECT_CLAIM, USERNAME_CLAIM};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::graphql::ResumeSchemas;
use crate::handler::{handle_event, ApiGatewayResponse};

/// Header simulating authorizer claims.
pub const USER_HEADER: &str = "x-resume-user";

impl IntoResponse for ApiGatewayResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response();

        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}

/// Create the development router.
pub fn create_app(schemas: ResumeSchemas) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_HEADER)]);

    Router::new()
        .route("/graphql", post(graphql))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(schemas)
}

/// GET /livez - Basic liveness probe.
async fn livez() -> StatusCode {
    StatusCode::OK
}

/// POST /graphql - Runs the body through the Lambda handler.
async fn graphql(
    State(schemas): State<ResumeSchemas>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut event = json!({ "body": body, "httpMethod": method.as_str() });

    if let Some(user) = headers.get(USER_HEADER).and_then(|v| v.to_str().ok()) {
        let claims = Claims::new()
            .with(USERNAME_CLAIM, user)
            .with(SUBJECT_CLAIM, user);
        event["requestContext"] = json!({ "authorizer": { "claims": claims } });
    }

    match handle_event(&schemas, event).await {
        Ok(response) => response.into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    fn app() -> Router {
        create_app(ResumeSchemas::new(Arc::new(InMemoryRepository::new())))
    }

    fn graphql_request(query: &str, user: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header("Content-Type", "application/json");
        if let Some(user) = user {
            builder = builder.header("X-Resume-User", user);
        }
        builder
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ping() {
        let response = app()
            .oneshot(graphql_request("{ ping }", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
        assert_eq!(
            json_body(response).await,
            json!({ "data": { "ping": "pong" } })
        );
    }

    #[tokio::test]
    async fn test_user_header_enables_mutations() {
        let app = app();
        let mutation = "mutation { createItem(item: { name: \"A\" }) { userId itemId } }";

        let response = app
            .clone()
            .oneshot(graphql_request(mutation, None))
            .await
            .unwrap();
        assert!(json_body(response).await["errors"].is_array());

        let response = app
            .clone()
            .oneshot(graphql_request(mutation, Some("u1")))
            .await
            .unwrap();
        let created = json_body(response).await;
        assert_eq!(created["data"]["createItem"]["userId"], "u1");
        let item_id = created["data"]["createItem"]["itemId"].as_str().unwrap();

        let query = format!("{{ item(itemId: \"{item_id}\") {{ itemId name }} }}");
        let response = app
            .oneshot(graphql_request(&query, Some("u1")))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await["data"]["item"],
            json!({ "itemId": item_id, "name": "A" })
        );
    }

    #[tokio::test]
    async fn test_invalid_body_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/graphql")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
