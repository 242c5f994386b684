//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Successful payload plus its content type, mirroring the `ProblemDetails`
/// error shape. The payload fields are flattened into the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct NodeList {
        nodes: Vec<String>,
    }

    #[test]
    fn test_payload_is_flattened() {
        let response = ServiceResponse::new(NodeList {
            nodes: vec!["Office of the VC".to_string()],
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["nodes"][0], "Office of the VC");
        assert_eq!(json["content_type"], "application/json");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"nodes":["lobby"],"content_type":"application/json"}"#;
        let response: ServiceResponse<NodeList> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.nodes, vec!["lobby"]);
    }
}
