/// Fetching paste content and turning it into links
use crate::config::AppConfig;
use crate::error::OpenerError;
use crate::links::{extract_links, first_link};
use crate::paste_url::normalize;
use url::form_urlencoded;

/// Status and text body of a completed HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to issue a single GET and read the body as text
///
/// Transport failures are `OpenerError::Network`; a non-2xx status is still `Ok`.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get_text(&self, url: &str) -> Result<HttpResponse, OpenerError>;
}

/// Build the URL actually requested, routing through the relay when one is configured
///
/// Examples (relay "https://corsproxy.io/?"):
/// - https://pastebin.com/raw/abc → https://corsproxy.io/?https%3A%2F%2Fpastebin.com%2Fraw%2Fabc
pub fn request_url(relay_prefix: Option<&str>, target: &str) -> String {
    match relay_prefix {
        Some(prefix) if !prefix.is_empty() => {
            let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
            format!("{}{}", prefix, encoded)
        }
        _ => target.to_string(),
    }
}

/// Fetch the text body at `target`, failing on any non-2xx status
pub async fn fetch_text<C: HttpClient>(
    client: &C,
    config: &AppConfig,
    target: &str,
) -> Result<String, OpenerError> {
    let url = request_url(config.relay_prefix.as_deref(), target);
    log::info!("Fetching {} via {}", target, url);

    let response = client.get_text(&url).await?;

    if !response.is_success() {
        log::warn!("Fetch of {} returned HTTP {}", target, response.status);
        return Err(OpenerError::HttpStatus(response.status));
    }

    Ok(response.body)
}

/// Submit action: normalize the input, fetch it, and extract every link
pub async fn extract_from_input<C: HttpClient>(
    client: &C,
    config: &AppConfig,
    input: &str,
) -> Result<Vec<String>, OpenerError> {
    if input.trim().is_empty() {
        return Err(OpenerError::EmptyInput);
    }

    let target = normalize(input);
    let content = fetch_text(client, config, &target).await?;
    let links = extract_links(&content);

    if links.is_empty() {
        return Err(OpenerError::NoLinksFound);
    }

    log::info!("Extracted {} links from {}", links.len(), target);
    Ok(links)
}

/// Quick-open action: fetch the saved paste and pick the first link in it
pub async fn resolve_quick_link<C: HttpClient>(
    client: &C,
    config: &AppConfig,
    saved_url: &str,
) -> Result<String, OpenerError> {
    if saved_url.trim().is_empty() {
        return Err(OpenerError::EmptyInput);
    }

    let target = normalize(saved_url);
    let content = fetch_text(client, config, &target).await?;

    first_link(&content).ok_or(OpenerError::NoLinksFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned responses and records every requested URL
    struct FakeClient {
        responses: HashMap<String, Result<HttpResponse, OpenerError>>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeClient {
        fn new() -> Self {
            FakeClient {
                responses: HashMap::new(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn with(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        fn failing(mut self, url: &str, message: &str) -> Self {
            self.responses
                .insert(url.to_string(), Err(OpenerError::Network(message.to_string())));
            self
        }
    }

    impl HttpClient for FakeClient {
        async fn get_text(&self, url: &str) -> Result<HttpResponse, OpenerError> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or(Ok(HttpResponse {
                    status: 404,
                    body: String::new(),
                }))
        }
    }

    fn direct() -> AppConfig {
        AppConfig {
            relay_prefix: None,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_request_url_relay() {
        assert_eq!(
            request_url(Some("https://corsproxy.io/?"), "https://pastebin.com/raw/abc"),
            "https://corsproxy.io/?https%3A%2F%2Fpastebin.com%2Fraw%2Fabc"
        );
    }

    #[test]
    fn test_request_url_direct() {
        assert_eq!(request_url(None, "https://a.io/x"), "https://a.io/x");
        assert_eq!(request_url(Some(""), "https://a.io/x"), "https://a.io/x");
    }

    #[test]
    fn test_http_response_success_range() {
        let ok = HttpResponse { status: 204, body: String::new() };
        let redirect = HttpResponse { status: 301, body: String::new() };
        let missing = HttpResponse { status: 404, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_end_to_end_pastebin() {
        let client = FakeClient::new().with(
            "https://pastebin.com/raw/abc123",
            200,
            "visit https://foo.com/x",
        );

        let links = block_on(extract_from_input(&client, &direct(), "https://pastebin.com/abc123"));

        assert_eq!(links, Ok(vec!["https://foo.com/x".to_string()]));
        assert_eq!(*client.requested.borrow(), vec!["https://pastebin.com/raw/abc123"]);
    }

    #[test]
    fn test_end_to_end_through_relay() {
        let client = FakeClient::new().with(
            "https://corsproxy.io/?https%3A%2F%2Fpastebin.com%2Fraw%2Fabc123",
            200,
            "a https://a.io b https://b.io",
        );

        let links = block_on(extract_from_input(&client, &AppConfig::default(), "pastebin.com/abc123"));

        assert_eq!(links.unwrap(), vec!["https://a.io", "https://b.io"]);
    }

    #[test]
    fn test_non_success_status_is_failure() {
        let client = FakeClient::new().with(
            "https://pastebin.com/raw/gone",
            500,
            "error page with https://status.example.com",
        );

        let result = block_on(extract_from_input(&client, &direct(), "https://pastebin.com/gone"));

        assert_eq!(result, Err(OpenerError::HttpStatus(500)));
    }

    #[test]
    fn test_network_failure_propagates() {
        let client = FakeClient::new().failing("https://a.io/list", "connection refused");

        let result = block_on(fetch_text(&client, &direct(), "https://a.io/list"));

        assert_eq!(result, Err(OpenerError::Network("connection refused".to_string())));
    }

    #[test]
    fn test_empty_input_makes_no_request() {
        let client = FakeClient::new();

        let result = block_on(extract_from_input(&client, &direct(), "   "));

        assert_eq!(result, Err(OpenerError::EmptyInput));
        assert!(client.requested.borrow().is_empty());
    }

    #[test]
    fn test_no_links_found() {
        let client = FakeClient::new().with("https://pastebin.com/raw/empty1", 200, "just text");

        let result = block_on(extract_from_input(&client, &direct(), "https://pastebin.com/empty1"));

        assert_eq!(result, Err(OpenerError::NoLinksFound));
    }

    #[test]
    fn test_resolve_quick_link() {
        let client = FakeClient::new().with(
            "https://pastebin.com/raw/quick1",
            200,
            "today: www.example.com/page then https://later.io",
        );

        let link = block_on(resolve_quick_link(&client, &direct(), "https://pastebin.com/quick1"));

        assert_eq!(link, Ok("https://www.example.com/page".to_string()));
    }

    #[test]
    fn test_resolve_quick_link_failures() {
        let client = FakeClient::new()
            .with("https://pastebin.com/raw/nolinks", 200, "nothing")
            .with("https://pastebin.com/raw/denied", 403, "");

        assert_eq!(
            block_on(resolve_quick_link(&client, &direct(), "https://pastebin.com/nolinks")),
            Err(OpenerError::NoLinksFound)
        );
        assert_eq!(
            block_on(resolve_quick_link(&client, &direct(), "https://pastebin.com/denied")),
            Err(OpenerError::HttpStatus(403))
        );
        assert_eq!(
            block_on(resolve_quick_link(&client, &direct(), "")),
            Err(OpenerError::EmptyInput)
        );
    }
}
