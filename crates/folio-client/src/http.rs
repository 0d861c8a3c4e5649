//! JSON-over-HTTP implementation of [`Persistence`].
//!
//! Routes:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | Create blog post | POST | `/users/{owner}/blogs` |
//! | Create project | POST | `/users/{owner}/projects` |
//! | Update project | PUT | `/users/{owner}/projects/{id}` |
//! | Update profile | PUT | `/users/{owner}` |
//! | List projects | GET | `/users/{owner}/projects` |

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use folio_model::{BlogPost, Entity, EntityKind, Payload, Profile, Project};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::persistence::Persistence;

/// Persistence client for the Folio web API.
#[derive(Debug, Clone)]
pub struct HttpPersistence {
    client: Client,
    base_url: String,
}

impl HttpPersistence {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a user resource.
    pub fn user_url(&self, owner_id: &str) -> String {
        format!("{}/users/{}", self.base_url, owner_id)
    }

    /// URL of a user's collection for an entity kind.
    pub fn collection_url(&self, owner_id: &str, kind: EntityKind) -> Option<String> {
        kind.collection()
            .map(|collection| format!("{}/{}", self.user_url(owner_id), collection))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(USER_AGENT, format!("folio-studio/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
    }

    async fn send_payload(&self, method: Method, url: &str, payload: &Payload) -> Result<Entity> {
        debug!(%method, url, kind = payload.kind().label(), "sending payload");
        let builder = self.request(method, url);
        let builder = match payload {
            Payload::Blog(body) => builder.json(body),
            Payload::Project(body) => builder.json(body),
            Payload::Profile(body) => builder.json(body),
        };
        let response = builder.send().await.map_err(map_reqwest)?;
        let response = check_status(response).await?;

        match payload.kind() {
            EntityKind::BlogPost => decode::<BlogPost>(response).await.map(Entity::from),
            EntityKind::Project => decode::<Project>(response).await.map(Entity::from),
            EntityKind::Profile => decode::<Profile>(response).await.map(Entity::from),
        }
    }
}

#[async_trait]
impl Persistence for HttpPersistence {
    async fn create_entity(&self, payload: &Payload, owner_id: &str) -> Result<Entity> {
        let url = self
            .collection_url(owner_id, payload.kind())
            .ok_or(ClientError::Unsupported {
                operation: "create",
                kind: payload.kind().label(),
            })?;
        self.send_payload(Method::POST, &url, payload).await
    }

    async fn update_entity(&self, payload: &Payload, owner_id: &str) -> Result<Entity> {
        let url = match payload {
            Payload::Profile(_) => self.user_url(owner_id),
            Payload::Project(project) => {
                let id = project.id.as_deref().ok_or(ClientError::Unsupported {
                    operation: "update",
                    kind: "project without an id",
                })?;
                format!("{}/projects/{}", self.user_url(owner_id), id)
            }
            Payload::Blog(_) => {
                return Err(ClientError::Unsupported {
                    operation: "update",
                    kind: EntityKind::BlogPost.label(),
                });
            }
        };
        self.send_payload(Method::PUT, &url, payload).await
    }

    async fn fetch_projects(&self, owner_id: &str) -> Result<Vec<Project>> {
        let url = format!("{}/projects", self.user_url(owner_id));
        debug!(url, "fetching projects");
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(map_reqwest)?;
        let response = check_status(response).await?;
        decode(response).await
    }
}

/// Turn non-success statuses into [`ClientError::Server`].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
    warn!(status = status.as_u16(), %message, "request failed");

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await.map_err(map_reqwest)?;
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn map_reqwest(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::Decode(err.to_string())
    } else {
        ClientError::Network(err.to_string())
    }
}
