//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On native targets requests go straight through `reqwest`. On WASM the
//! `reqwest::Response` holds JS values and is not `Send`, so the request runs on
//! the JS thread via `wasm_bindgen_futures::spawn_local` and the finished
//! [`Response`] comes back over a `flume` channel.
//!
//! Callers only ever see the owned [`Response`] snapshot: status and the raw
//! body.

use std::collections::HashMap;
use std::fmt;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    ///
    /// Error bodies are shown to users verbatim, so a lossy decode is preferred
    /// over failing the whole operation.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP error: {}", self.message)
    }
}

impl std::error::Error for HttpError {}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach the session cookie, if any.
    ///
    /// The backend keeps its session in a cookie; forwarding it is what makes a
    /// request "credentialed".
    pub fn cookie(self, session_cookie: Option<&str>) -> Self {
        match session_cookie {
            Some(cookie) if !cookie.is_empty() => self.header("cookie", cookie),
            _ => self,
        }
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(value)?);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

            // spawn_local does not require Send; the channel hands the owned
            // result back to a Send future.
            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(self).await;
                let _ignored = tx.send_async(result).await;
            });

            rx.recv_async()
                .await
                .map_err(|_closed| HttpError::new("Request cancelled"))?
        }
    }
}

async fn execute(builder: RequestBuilder) -> HttpResult<Response> {
    let RequestBuilder {
        method,
        url,
        headers,
        body,
    } = builder;

    let client = reqwest::Client::new();
    let mut request = match method {
        Method::Get => client.get(&url),
        Method::Post => client.post(&url),
    };

    for (name, value) in &headers {
        request = request.header(name, value);
    }

    // Browsers only send cookies cross-origin when asked to.
    #[cfg(target_arch = "wasm32")]
    {
        request = request.fetch_credentials_include();
    }

    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

/// Entry point for building requests.
pub struct Client;

impl Client {
    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(201, b"").is_success());
        assert!(!response(401, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_text_lossy_keeps_invalid_bytes_readable() {
        let response = response(400, b"Bil \xff redan bokad");
        assert_eq!(response.text_lossy(), "Bil \u{fffd} redan bokad");
    }

    #[test]
    fn test_cookie_is_skipped_when_absent_or_empty() {
        let builder = Client::get("http://localhost/api").cookie(None);
        assert!(!builder.headers.contains_key("cookie"));

        let builder = Client::get("http://localhost/api").cookie(Some(""));
        assert!(!builder.headers.contains_key("cookie"));

        let builder = Client::get("http://localhost/api").cookie(Some("JSESSIONID=abc"));
        assert_eq!(
            builder.headers.get("cookie").map(String::as_str),
            Some("JSESSIONID=abc")
        );
    }

    #[test]
    fn test_request_builder_json_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Body {
            name: &'static str,
        }

        let builder = Client::post("http://localhost/api")
            .json(&Body { name: "Volvo" })
            .expect("serializable body");

        assert_eq!(builder.method(), Method::Post);
        assert_eq!(
            builder.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(builder.body.as_deref(), Some(br#"{"name":"Volvo"}"#.as_slice()));
    }
}
