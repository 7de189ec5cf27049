pub mod http;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Helper, InteractionType, Relationship, Task};

/// The remote household backend. Search endpoints return rank-ordered
/// lists; mutation endpoints echo the created or updated resource.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn search_tasks(&self, query: &str) -> anyhow::Result<Vec<Task>>;
    async fn search_relationships(&self, query: &str) -> anyhow::Result<Vec<Relationship>>;
    async fn search_helpers(&self, query: &str) -> anyhow::Result<Vec<Helper>>;

    async fn complete_task(&self, task_id: &str) -> anyhow::Result<Task>;

    async fn log_interaction(
        &self,
        relationship_id: &str,
        interaction_type: InteractionType,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()>;

    async fn log_visit(&self, helper_id: &str, date: Option<NaiveDate>) -> anyhow::Result<()>;

    async fn log_payment(
        &self,
        helper_id: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> anyhow::Result<()>;

    async fn create_task(
        &self,
        title: &str,
        due_date: Option<NaiveDate>,
        category: Option<&str>,
    ) -> anyhow::Result<Task>;
}
