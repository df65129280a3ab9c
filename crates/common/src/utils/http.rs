use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, trace};

use crate::Error;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Build a [`Client`] with the tronex user agent, the given timeout, and an optional bearer
/// token attached to every request.
///
/// ```
/// use std::time::Duration;
/// use tronex_common::utils::http::build_client;
///
/// let client = build_client(Duration::from_secs(15), None);
/// assert!(client.is_ok());
/// ```
pub fn build_client(timeout: Duration, bearer_token: Option<&str>) -> Result<Client, Error> {
    let mut headers = HeaderMap::new();
    if let Some(token) = bearer_token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Error::Generic(format!("invalid API key: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(Client::builder().user_agent(APP_USER_AGENT).default_headers(headers).timeout(timeout).build()?)
}

/// Make a GET request to the target URL with the given query parameters and decode the body.
///
/// Non-success statuses, transport failures and undecodable bodies are all logged and returned
/// as errors. No retry is attempted; callers decide what a failure means for them.
///
/// ```no_run
/// use std::time::Duration;
/// use tronex_common::utils::http::{build_client, get_json};
///
/// # async fn run() -> Result<(), tronex_common::Error> {
/// let client = build_client(Duration::from_secs(5), None)?;
/// let body: serde_json::Value =
///     get_json(&client, "https://example.com/api", &[("limit", "1".to_string())]).await?;
/// # Ok(())
/// # }
/// ```
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, Error> {
    trace!("GET {} {:?}", url, query);

    let response = match client.get(url).query(query).send().await {
        Ok(res) => {
            trace!("GET {}: {:?}", url, &res);
            res
        }
        Err(e) => {
            error!("API request failed for {}: {}", url, e);
            return Err(e.into());
        }
    };

    let response = response.error_for_status().map_err(|e| {
        error!("API request failed for {}: {}", url, e);
        Error::from(e)
    })?;

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        error!("failed to decode response from {}: {}", url, e);
        trace!("response body: {:?}", body);
        Error::from(e)
    })
}
