//! Client for the remote user listing endpoint.
//!
//! The endpoint is a black box that answers one GET with a JSON array of
//! user records. The client performs that single read; it does not retry,
//! cache, or paginate.

use gethostname::gethostname;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::user::User;

const CLIENT_NAME: &str = "rolodex";

fn user_agent() -> String {
    format!("{} on {}", CLIENT_NAME, gethostname().to_string_lossy())
}

/// HTTP client for the directory endpoint
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl DirectoryClient {
    /// Create a client for the given collection endpoint
    pub fn new(endpoint: Url) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        DirectoryClient { http, endpoint }
    }

    /// Create a client from endpoint text, validating it as a URL
    pub fn from_str(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(url))
    }

    /// The collection endpoint this client reads from
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full user collection.
    ///
    /// Returns the records in wire order; callers that need the directory
    /// ordering apply [`crate::user::sort_users`]. A non-success status or
    /// an undecodable body is an error; there is no retry.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let resp = self.http.get(self.endpoint.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status { status: status.as_u16(), body });
        }

        let body = resp.text().await?;
        let users = serde_json::from_str::<Vec<User>>(&body)
            .map_err(|e| Error::Decode(e.to_string()))?;

        debug!(count = users.len(), "fetched user listing");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn listing() -> serde_json::Value {
        json!([
            {
                "id": "1",
                "createdAt": "2021-02-18T16:42:29.338Z",
                "avatar": "https://cdn.example.com/1.jpg",
                "Bio": "Quia quo iste.",
                "jobTitle": "Lead Metrics Planner",
                "profile": {
                    "username": "bob",
                    "firstName": "Bob",
                    "lastName": "Example",
                    "email": "bob@example.com"
                }
            },
            {
                "id": "2",
                "createdAt": "2021-02-18T20:06:12.931Z",
                "avatar": "https://cdn.example.com/2.jpg",
                "Bio": "Aut nihil dolores.",
                "jobTitle": "Chief Brand Supervisor",
                "profile": {
                    "username": "Alice",
                    "firstName": "Alice",
                    "lastName": "Example",
                    "email": "alice@example.com"
                }
            }
        ])
    }

    #[tokio::test]
    async fn fetches_and_decodes_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
            .mount(&server)
            .await;

        let client = DirectoryClient::from_str(&format!("{}/users", server.uri())).unwrap();
        let users = client.fetch_users().await.unwrap();

        // Wire order is preserved; sorting is the caller's concern.
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username(), "bob");
        assert_eq!(users[1].username(), "Alice");
        assert_eq!(users[1].bio, "Aut nihil dolores.");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
            .mount(&server)
            .await;

        let client = DirectoryClient::from_str(&format!("{}/users", server.uri())).unwrap();
        match client.fetch_users().await {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "down for maintenance");
            },
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = DirectoryClient::from_str(&format!("{}/users", server.uri())).unwrap();
        assert!(matches!(client.fetch_users().await, Err(Error::Decode(_))));
    }

    #[test]
    fn rejects_invalid_endpoint_text() {
        match DirectoryClient::from_str("not a url") {
            Err(Error::InvalidEndpoint { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected invalid endpoint error, got {other:?}"),
        }
    }
}
