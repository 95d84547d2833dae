//! Blocking HTTP client for the NaradAI REST API
//!
//! One endpoint family per resource, all following the same pattern:
//! `GET /{resource}`, `GET /{resource}/{id}`, `POST /{resource}`,
//! `PUT /{resource}/{id}`, `DELETE /{resource}/{id}`. Priority actions
//! add a narrow `PUT /priority-actions/{id}/status`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::api::{ApiError, Envelope};
use crate::entities::action::{ActionStatus, PriorityAction};
use crate::entities::Resource;

/// Query parameters accepted by every list endpoint.
///
/// `filter` carries the entity-specific enum filter (`priority`,
/// `severity`, `potential`, `status`) as a key/value pair.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub is_active: Option<bool>,
    pub filter: Option<(&'static str, String)>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ListQuery {
    /// Active records only, no other filters
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(active) = self.is_active {
            params.push(("is_active", active.to_string()));
        }
        if let Some((key, value)) = &self.filter {
            params.push((*key, value.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// A list response: records plus the backend's total count when reported
#[derive(Debug, Clone)]
pub struct Listing<R> {
    pub items: Vec<R>,
    pub total: Option<u64>,
}

/// Blocking client bound to one API base URL
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL with a fixed request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET /{resource}` with optional filters
    pub fn list<R: Resource>(&self, query: &ListQuery) -> Result<Listing<R>, ApiError> {
        let response = self
            .http
            .get(self.url(R::ENDPOINT))
            .query(&query.params())
            .send()?;
        let envelope: Envelope<Vec<R>> = response.json()?;
        let total = envelope.total;
        let items = envelope.into_data(R::LABEL)?;
        Ok(Listing { items, total })
    }

    /// `GET /{resource}/{id}`
    pub fn get<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("{}/{}", R::ENDPOINT, id)))
            .send()?;
        let envelope: Envelope<R> = response.json()?;
        envelope.into_data(R::LABEL)
    }

    /// `POST /{resource}` - returns the created record with its assigned id
    pub fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let response = self.http.post(self.url(R::ENDPOINT)).json(draft).send()?;
        let envelope: Envelope<R> = response.json()?;
        envelope.into_data(R::LABEL)
    }

    /// `PUT /{resource}/{id}` - returns the updated record
    pub fn update<R: Resource>(&self, id: &str, draft: &R::Draft) -> Result<R, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("{}/{}", R::ENDPOINT, id)))
            .json(draft)
            .send()?;
        let envelope: Envelope<R> = response.json()?;
        envelope.into_data(R::LABEL)
    }

    /// `DELETE /{resource}/{id}`
    pub fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("{}/{}", R::ENDPOINT, id)))
            .send()?;
        let envelope: Envelope<serde_json::Value> = response.json()?;
        envelope.into_ok(R::LABEL)
    }

    /// `PUT /priority-actions/{id}/status` - patches only the workflow status
    pub fn update_action_status(
        &self,
        id: &str,
        status: ActionStatus,
    ) -> Result<PriorityAction, ApiError> {
        #[derive(Serialize)]
        struct StatusBody {
            status: ActionStatus,
        }

        let response = self
            .http
            .put(self.url(&format!("{}/{}/status", PriorityAction::ENDPOINT, id)))
            .json(&StatusBody { status })
            .send()?;
        let envelope: Envelope<PriorityAction> = response.json()?;
        envelope.into_data(PriorityAction::LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_params() {
        let query = ListQuery {
            is_active: Some(true),
            filter: Some(("severity", "critical".to_string())),
            limit: Some(10),
            offset: Some(20),
        };
        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("is_active", "true".to_string()),
                ("severity", "critical".to_string()),
                ("limit", "10".to_string()),
                ("offset", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_empty_params() {
        assert!(ListQuery::default().params().is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:8080/api/v1/", 5).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    }
}
