use serde::{Deserialize, Serialize};

/// Body of `POST /api/add-endpoint`
///
/// Carries the address exactly as typed (trimmed), separators included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddEndpointRequest {
    pub mac_address: String,
}

/// Envelope returned by the backend for endpoint operations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddEndpointResponse {
    pub success: bool,
    pub message: String,
}
