use async_trait::async_trait;
use common::responses::ActionResponse;
use gloo_net::http::Request;

use crate::error::TransportError;

/// Sends one action request and decodes its JSON answer.
#[async_trait(?Send)]
pub trait ActionTransport {
    async fn post(&self, path: &str, csrf_token: &str) -> Result<ActionResponse, TransportError>;
}

/// `fetch`-backed transport.
pub struct GlooTransport;

#[async_trait(?Send)]
impl ActionTransport for GlooTransport {
    async fn post(&self, path: &str, csrf_token: &str) -> Result<ActionResponse, TransportError> {
        let response = Request::post(path)
            .header("X-CSRFToken", csrf_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        // Rejections may come with a 4xx status and a JSON body explaining why.
        let status = response.status();
        let ok = response.ok();
        match response.json::<ActionResponse>().await {
            Ok(body) => Ok(body),
            Err(_) if !ok => Err(TransportError::Status(status)),
            Err(err) => Err(TransportError::Decode(err.to_string())),
        }
    }
}
