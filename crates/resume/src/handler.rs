//! API Gateway proxy handlers.
//!
//! [`handle_event`] unwraps a proxy envelope, picks the public or private
//! schema from the authorizer claims, executes the GraphQL request and wraps
//! the result back into a proxy response. [`handle_auth_check`] answers the
//! authorizer smoke-test endpoint.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use resume_core::identity::{Claims, Identity};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::graphql::ResumeSchemas;

/// Failures of the handler pipeline itself.
///
/// GraphQL errors are not handler errors: they travel inside a 200 response.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Invalid request envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("Request envelope has no body")]
    MissingBody,

    #[error("Request body is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Request body is not a GraphQL request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Authentication required")]
    Unauthenticated,
}

/// The subset of an API Gateway proxy event the handlers read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    pub body: Option<String>,
    pub is_base64_encoded: Option<bool>,
    pub http_method: Option<String>,
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorizer {
    pub claims: Option<Claims>,
}

impl ApiGatewayRequest {
    pub fn from_value(event: Value) -> Result<Self, HandlerError> {
        serde_json::from_value(event).map_err(HandlerError::InvalidEnvelope)
    }

    /// Authorizer claims, present only for authenticated callers.
    pub fn claims(&self) -> Option<&Claims> {
        self.request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .claims
            .as_ref()
    }

    /// The body as raw bytes, base64-decoded when flagged.
    pub fn decoded_body(&self) -> Result<Vec<u8>, HandlerError> {
        let body = self.body.as_deref().ok_or(HandlerError::MissingBody)?;
        if self.is_base64_encoded.unwrap_or(false) {
            Ok(STANDARD.decode(body)?)
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }
}

/// An API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    /// A 200 response open to any origin.
    pub fn ok(body: String) -> Self {
        let headers = BTreeMap::from([(
            "Access-Control-Allow-Origin".to_string(),
            "*".to_string(),
        )]);

        Self {
            status_code: 200,
            headers,
            body,
        }
    }
}

/// Executes the GraphQL request carried by a proxy event.
pub async fn handle_event(
    schemas: &ResumeSchemas,
    event: Value,
) -> Result<ApiGatewayResponse, HandlerError> {
    let result = async {
        let envelope = ApiGatewayRequest::from_value(event)?;
        let body = envelope.decoded_body()?;
        let request: async_graphql::Request =
            serde_json::from_slice(&body).map_err(HandlerError::InvalidRequest)?;
        let identity = Identity::from_claims(envelope.claims().cloned());

        let claims = identity.claims();
        tracing::info!(
            user = claims.and_then(Claims::username).unwrap_or("anonymous"),
            sub = claims.and_then(Claims::subject),
            operation = request.operation_name.as_deref(),
            "Handling GraphQL request"
        );
        tracing::debug!(query = %request.query, "GraphQL query");

        let response = schemas.execute(request, identity).await;
        if response.is_ok() {
            tracing::info!(status = 200, "GraphQL request succeeded");
        } else {
            tracing::warn!(
                status = 200,
                errors = response.errors.len(),
                "GraphQL request returned errors"
            );
        }

        let body = serde_json::to_string(&response).map_err(HandlerError::Serialize)?;
        Ok::<_, HandlerError>(ApiGatewayResponse::ok(body))
    }
    .await;

    result.inspect_err(|e| tracing::error!(error = %e, "GraphQL handler failed"))
}

/// Echoes the caller's verified claims back to them.
pub fn handle_auth_check(event: Value) -> Result<ApiGatewayResponse, HandlerError> {
    let result = (|| -> Result<ApiGatewayResponse, HandlerError> {
        let envelope = ApiGatewayRequest::from_value(event)?;
        let claims = envelope.claims().ok_or(HandlerError::Unauthenticated)?;
        let method = envelope.http_method.as_deref().unwrap_or("request");
        tracing::info!(
            user = claims.username().unwrap_or("unknown"),
            sub = claims.subject(),
            method,
            "Handling auth check"
        );

        let body = json!({
            "message": format!(
                "Hello there, {}, your user ID is {}",
                claims.name().unwrap_or("unknown"),
                claims.subject().unwrap_or("unknown"),
            ),
            "method": format!("This is an authorized {method} to Lambda from your API"),
        });

        Ok(ApiGatewayResponse::ok(body.to_string()))
    })();

    result.inspect_err(|e| tracing::warn!(error = %e, "Auth check failed"))
}
