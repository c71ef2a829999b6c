//! Error contract shared by every backend port.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the community backend.
    pub enum ApiError {
        /// The request never produced a response.
        Transport { message: String } =>
            "backend transport failed: {message}",
        /// The request or the backend timed out.
        Timeout { message: String } =>
            "backend timeout: {message}",
        /// Credentials were missing or refused.
        Unauthorized { message: String } =>
            "backend refused credentials: {message}",
        /// The addressed resource does not exist.
        NotFound { message: String } =>
            "backend resource not found: {message}",
        /// The backend reported a conflicting resource.
        Conflict { message: String } =>
            "backend conflict: {message}",
        /// The backend rejected the request body or parameters.
        Rejected { message: String } =>
            "backend rejected request: {message}",
        /// The adapter could not build the request.
        InvalidRequest { message: String } =>
            "request invalid: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "backend response decode failed: {message}",
    }
}

impl ApiError {
    /// Whether repeating the call could plausibly succeed.
    ///
    /// Nothing retries automatically; the flag only informs logs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}
