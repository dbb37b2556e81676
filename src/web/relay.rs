use gloo_console::log;
use gloo_net::http::Request;

use crate::contact::{Relay, RelayResponse, SubmitError};

/// Posts the form-encoded body to the email relay with `gloo-net`.
pub struct GlooRelay {
    url: String,
}

impl GlooRelay {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Relay for GlooRelay {
    async fn post(&self, body: String) -> Result<RelayResponse, SubmitError> {
        log!("Submitting contact form to", &self.url);
        let response = Request::post(&self.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            log!("Relay answered with status", response.status());
            return Err(SubmitError::from_status(response.status()));
        }
        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
