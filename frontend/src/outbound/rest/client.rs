//! Reqwest-backed client for the community backend.
//!
//! This adapter owns transport details only: URL building, bearer auth,
//! HTTP status mapping and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use super::dto::{GroupDto, GroupWriteDto, PostDislikeDto, PostDto, PostWriteDto, UserDto};
use crate::domain::ports::{ApiError, GroupApi, PostApi, UserApi};
use crate::domain::{
    DislikeId, Group, GroupId, GroupWriteRequest, Post, PostDislike, PostId, PostWriteRequest,
    SessionUser, Topic,
};

const DEFAULT_USER_AGENT: &str = concat!("community-frontend/", env!("CARGO_PKG_VERSION"));

/// REST client implementing every backend port.
#[derive(Debug, Clone)]
pub struct RestApiClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl RestApiClient {
    /// Build a client rooted at `base_url`.
    ///
    /// `timeout` bounds each request; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
            auth_token: None,
        })
    }

    /// Send `token` as a bearer credential on every request.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::invalid_request(format!("base url {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "backend request");
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        match self.auth_token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(builder).await?;
        decode(&body)
    }
}

#[async_trait]
impl GroupApi for RestApiClient {
    async fn create_group(&self, request: &GroupWriteRequest) -> Result<Group, ApiError> {
        let url = self.endpoint(&["groups"])?;
        let builder = self
            .request(Method::POST, url)
            .json(&GroupWriteDto::from(request));
        let group: GroupDto = self.fetch_json(builder).await?;
        Ok(group.into_domain())
    }

    async fn fetch_group(&self, group_id: GroupId) -> Result<Group, ApiError> {
        let id = group_id.to_string();
        let url = self.endpoint(&["groups", &id])?;
        let group: GroupDto = self.fetch_json(self.request(Method::GET, url)).await?;
        Ok(group.into_domain())
    }

    async fn update_group(
        &self,
        group_id: GroupId,
        request: &GroupWriteRequest,
    ) -> Result<Group, ApiError> {
        let id = group_id.to_string();
        let url = self.endpoint(&["groups", &id])?;
        let builder = self
            .request(Method::PUT, url)
            .json(&GroupWriteDto::from(request));
        let group: GroupDto = self.fetch_json(builder).await?;
        Ok(group.into_domain())
    }

    async fn title_exists(&self, title: &str) -> Result<bool, ApiError> {
        let url = self.title_lookup_endpoint(title)?;
        self.fetch_json(self.request(Method::GET, url)).await
    }

    async fn join_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError> {
        let url = self.topic_endpoint(group_id, topic)?;
        self.execute(self.request(Method::PUT, url)).await.map(drop)
    }

    async fn unjoin_topic(&self, group_id: GroupId, topic: Topic) -> Result<(), ApiError> {
        let url = self.topic_endpoint(group_id, topic)?;
        self.execute(self.request(Method::DELETE, url)).await.map(drop)
    }
}

impl RestApiClient {
    /// Titles travel as a query value: a path segment of only dots would be
    /// collapsed by URL normalisation, percent-encoded or not.
    fn title_lookup_endpoint(&self, title: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["groups", "title"])?;
        url.query_pairs_mut().append_pair("title", title);
        Ok(url)
    }

    fn topic_endpoint(&self, group_id: GroupId, topic: Topic) -> Result<Url, ApiError> {
        let group = group_id.to_string();
        let topic = topic.id().to_string();
        self.endpoint(&["groups", &group, "topics", &topic])
    }
}

#[async_trait]
impl PostApi for RestApiClient {
    async fn create_post(
        &self,
        group_id: GroupId,
        request: &PostWriteRequest,
    ) -> Result<Post, ApiError> {
        let id = group_id.to_string();
        let url = self.endpoint(&["groups", &id, "posts"])?;
        let builder = self
            .request(Method::POST, url)
            .json(&PostWriteDto::from(request));
        let post: PostDto = self.fetch_json(builder).await?;
        Ok(post.into_domain(group_id))
    }

    async fn list_dislikes(&self, post_id: PostId) -> Result<Vec<PostDislike>, ApiError> {
        let id = post_id.to_string();
        let url = self.endpoint(&["posts", &id, "dislikes"])?;
        let dislikes: Vec<PostDislikeDto> = self.fetch_json(self.request(Method::GET, url)).await?;
        Ok(dislikes
            .into_iter()
            .map(|dislike| dislike.into_domain(post_id))
            .collect())
    }

    async fn create_dislike(&self, post_id: PostId) -> Result<PostDislike, ApiError> {
        let id = post_id.to_string();
        let url = self.endpoint(&["posts", &id, "dislikes"])?;
        let builder = self.request(Method::POST, url).json(&json!({}));
        let dislike: PostDislikeDto = self.fetch_json(builder).await?;
        Ok(dislike.into_domain(post_id))
    }

    async fn delete_dislike(&self, dislike_id: DislikeId) -> Result<(), ApiError> {
        let id = dislike_id.to_string();
        let url = self.endpoint(&["posts", "dislikes", &id])?;
        self.execute(self.request(Method::DELETE, url)).await.map(drop)
    }
}

#[async_trait]
impl UserApi for RestApiClient {
    async fn fetch_current_user(&self) -> Result<SessionUser, ApiError> {
        let url = self.endpoint(&["user"])?;
        let user: UserDto = self.fetch_json(self.request(Method::GET, url)).await?;
        Ok(user.into_domain())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|error| ApiError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout(error.to_string())
    } else if error.is_decode() {
        ApiError::decode(error.to_string())
    } else {
        ApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::CONFLICT => ApiError::conflict(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::timeout(message),
        _ if status.is_client_error() => ApiError::rejected(message),
        _ => ApiError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
