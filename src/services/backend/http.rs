use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::BackendClient;
use crate::models::{Helper, InteractionType, Relationship, Task};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed [`BackendClient`]. Every call shares one client with a
/// fixed timeout; a timeout surfaces as a regular error, never a retry.
pub struct HttpBackend {
    base_url: String,
    api_token: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String, api_token: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_token.is_empty() {
            req
        } else {
            req.bearer_auth(&self.api_token)
        }
    }

    async fn search<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &str,
    ) -> anyhow::Result<Vec<T>> {
        let url = format!("{}/api/{collection}", self.base_url);

        self.authed(self.client.get(&url).query(&[("search", query)]))
            .send()
            .await
            .with_context(|| format!("failed to search {collection}"))?
            .error_for_status()
            .with_context(|| format!("{collection} search returned error"))?
            .json()
            .await
            .with_context(|| format!("failed to parse {collection} search response"))
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> anyhow::Result<T> {
        let url = format!("{}{path}", self.base_url);

        self.authed(self.client.post(&url).json(&body))
            .send()
            .await
            .with_context(|| format!("failed to POST {path}"))?
            .error_for_status()
            .with_context(|| format!("POST {path} returned error"))?
            .json()
            .await
            .with_context(|| format!("failed to parse response from {path}"))
    }
}

fn iso(date: Option<NaiveDate>) -> serde_json::Value {
    match date {
        Some(d) => json!(d.format("%Y-%m-%d").to_string()),
        None => serde_json::Value::Null,
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn search_tasks(&self, query: &str) -> anyhow::Result<Vec<Task>> {
        self.search("tasks", query).await
    }

    async fn search_relationships(&self, query: &str) -> anyhow::Result<Vec<Relationship>> {
        self.search("relationships", query).await
    }

    async fn search_helpers(&self, query: &str) -> anyhow::Result<Vec<Helper>> {
        self.search("helpers", query).await
    }

    async fn complete_task(&self, task_id: &str) -> anyhow::Result<Task> {
        self.post(&format!("/api/tasks/{task_id}/complete"), json!({}))
            .await
    }

    async fn log_interaction(
        &self,
        relationship_id: &str,
        interaction_type: InteractionType,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()> {
        let body = json!({
            "type": interaction_type.as_str(),
            "date": iso(date),
        });
        self.post::<serde_json::Value>(
            &format!("/api/relationships/{relationship_id}/interactions"),
            body,
        )
        .await?;
        Ok(())
    }

    async fn log_visit(&self, helper_id: &str, date: Option<NaiveDate>) -> anyhow::Result<()> {
        let body = json!({ "date": iso(date) });
        self.post::<serde_json::Value>(&format!("/api/helpers/{helper_id}/visits"), body)
            .await?;
        Ok(())
    }

    async fn log_payment(
        &self,
        helper_id: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()> {
        let body = json!({ "amount": amount, "date": iso(date) });
        self.post::<serde_json::Value>(&format!("/api/helpers/{helper_id}/payments"), body)
            .await?;
        Ok(())
    }

    async fn create_task(
        &self,
        title: &str,
        due_date: Option<NaiveDate>,
        category: Option<&str>,
    ) -> anyhow::Result<Task> {
        let body = json!({
            "title": title,
            "due_date": iso(due_date),
            "category": category,
        });
        self.post("/api/tasks", body).await
    }
}
