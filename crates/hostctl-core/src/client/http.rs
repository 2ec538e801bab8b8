//! Blocking HTTP client for the hosted API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use tracing::{debug, info, warn};

use super::errors::ClientError;
use super::types::{DeleteProjectsRequest, ProjectsResponse};
use crate::config::ApiConfig;
use crate::delete::ProjectClient;
use crate::projects::Project;

/// [`ProjectClient`] backed by the hosted API.
#[derive(Debug, Clone)]
pub struct HttpProjectClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl HttpProjectClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotAuthenticated` if no token is configured.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ClientError> {
        let token = api.token().ok_or(ClientError::NotAuthenticated)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs()))
            .user_agent(concat!("hostctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: api.endpoint().trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }
}

impl ProjectClient for HttpProjectClient {
    fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let url = self.url("projects");
        debug!(event = "core.client.list_started", url = %url);

        let response = self.http.get(&url).bearer_auth(&self.token).send()?;
        let response = check_status(response)?;

        let body: ProjectsResponse = response.json().map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })?;

        info!(
            event = "core.client.list_completed",
            count = body.projects.len()
        );

        Ok(body.projects.into_iter().map(Project::from).collect())
    }

    fn delete_projects(&self, ids: &[String]) -> Result<(), ClientError> {
        let url = self.url("projects/delete");
        info!(event = "core.client.delete_started", url = %url, ids = ?ids);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&DeleteProjectsRequest { ids })
            .send()?;
        check_status(response)?;

        info!(event = "core.client.delete_completed", count = ids.len());
        Ok(())
    }
}

/// Turn non-2xx responses into errors, keeping the response body as message.
fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(event = "core.client.request_rejected", status = status.as_u16());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized {
            status: status.as_u16(),
        });
    }

    let message = response
        .text()
        .ok()
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    fn api(endpoint: &str, token: Option<&str>) -> ApiConfig {
        ApiConfig {
            endpoint: Some(endpoint.to_string()),
            token: token.map(str::to_string),
            timeout_secs: Some(2),
        }
    }

    #[test]
    fn test_missing_token_is_not_authenticated() {
        let result = HttpProjectClient::from_config(&api("https://api.example.com", None));
        assert!(matches!(result, Err(ClientError::NotAuthenticated)));
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let client =
            HttpProjectClient::from_config(&api("https://api.example.com/v1/", Some("t"))).unwrap();
        assert_eq!(client.endpoint(), "https://api.example.com/v1");
        assert_eq!(
            client.url("projects/delete"),
            "https://api.example.com/v1/projects/delete"
        );
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not served on loopback in test environments.
        let client =
            HttpProjectClient::from_config(&api("http://127.0.0.1:9", Some("token"))).unwrap();

        let result = client.delete_projects(&["cj123".to_string()]);

        assert!(matches!(result, Err(ClientError::Transport { .. })));
    }

    /// Answer a single request on a loopback port with a canned response.
    /// Joining the handle yields the raw request as received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (endpoint, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(endpoint: &str) -> HttpProjectClient {
        HttpProjectClient::from_config(&api(endpoint, Some("tok"))).unwrap()
    }

    #[test]
    fn test_list_projects_decodes_hosted_projects() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"projects":[{"id":"cj1","name":"shop","cluster":"shared-eu-west-1"}]}"#,
        );

        let projects = client_for(&endpoint).list_projects().unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /projects HTTP/1.1\r\n"), "got: {request}");
        assert!(request.to_lowercase().contains("authorization: bearer tok"));
        assert_eq!(
            projects,
            vec![Project::new(
                "cj1",
                "shop",
                crate::projects::Cluster::hosted("shared-eu-west-1")
            )]
        );
        assert!(projects[0].cluster().is_hosted());
    }

    #[test]
    fn test_delete_projects_posts_ids_with_bearer_token() {
        let (endpoint, server) = serve_once("200 OK", "");

        client_for(&endpoint)
            .delete_projects(&["x".to_string(), "y".to_string()])
            .unwrap();
        let request = server.join().unwrap();

        assert!(
            request.starts_with("POST /projects/delete HTTP/1.1\r\n"),
            "got: {request}"
        );
        assert!(request.to_lowercase().contains("authorization: bearer tok"));
        assert!(request.ends_with(r#"{"ids":["x","y"]}"#), "got: {request}");
    }

    #[test]
    fn test_rejected_token_is_unauthorized() {
        for (status, code) in [("401 Unauthorized", 401), ("403 Forbidden", 403)] {
            let (endpoint, server) = serve_once(status, "");

            let result = client_for(&endpoint).list_projects();
            server.join().unwrap();

            assert!(
                matches!(result, Err(ClientError::Unauthorized { status: got }) if got == code),
                "status {code}"
            );
        }
    }

    #[test]
    fn test_server_error_keeps_response_body() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "boom");

        let result = client_for(&endpoint).delete_projects(&["x".to_string()]);
        server.join().unwrap();

        assert!(matches!(
            result,
            Err(ClientError::Api { status: 500, ref message }) if message == "boom"
        ));
    }

    #[test]
    fn test_empty_error_body_uses_reason_phrase() {
        let (endpoint, server) = serve_once("503 Service Unavailable", "");

        let result = client_for(&endpoint).delete_projects(&["x".to_string()]);
        server.join().unwrap();

        assert!(matches!(
            result,
            Err(ClientError::Api { status: 503, ref message }) if message == "Service Unavailable"
        ));
    }

    #[test]
    fn test_malformed_listing_is_decode_error() {
        let (endpoint, server) = serve_once("200 OK", "nope");

        let result = client_for(&endpoint).list_projects();
        server.join().unwrap();

        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }
}
