use chrono::NaiveDate;

use crate::errors::CaptureError;
use crate::models::{EntityClass, Intent};
use crate::services::backend::BackendClient;
use crate::services::parser;
use crate::services::resolver::resolve_entity;

/// The dispatcher's output: a user-facing summary of what was done.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    pub message: String,
}

/// The quick-capture entry point: parse, dispatch, and turn every outcome
/// into plain text. Nothing escapes this function as an error — a parse
/// miss, a missing entity, and a backend failure all come back as a
/// message for the user.
pub async fn quick_capture(backend: &dyn BackendClient, text: &str, today: NaiveDate) -> String {
    let Some(intent) = parser::parse(text, today) else {
        tracing::info!(text = %text, "no intent rule matched");
        return "Sorry, I don't know how to handle that yet. Try something like \
                \"called Mom\" or \"add task: buy milk\"."
            .to_string();
    };

    tracing::info!(intent = ?intent, "dispatching capture");

    match dispatch(backend, intent).await {
        Ok(result) => result.message,
        Err(CaptureError::Backend(e)) => {
            tracing::error!(error = %e, "capture dispatch failed");
            "Something went wrong talking to the backend. Please try again.".to_string()
        }
        // Not-found errors already read as user-facing sentences.
        Err(e) => e.to_string(),
    }
}

/// Executes the backend call(s) an intent implies. At most two dependent
/// calls, strictly sequential, no retries; any failure fails the whole
/// dispatch.
pub async fn dispatch(
    backend: &dyn BackendClient,
    intent: Intent,
) -> Result<CaptureResult, CaptureError> {
    let message = match intent {
        Intent::CompleteTask { task_name } => {
            let tasks = backend.search_tasks(&task_name).await?;
            let Some(task) = tasks.into_iter().next() else {
                return Err(CaptureError::TaskNotFound { name: task_name });
            };
            let completed = backend.complete_task(&task.id).await?;
            format!("Completed task: {}", completed.title)
        }

        Intent::LogInteraction {
            name,
            interaction_type,
            date,
        } => {
            let person = resolve_entity(backend, EntityClass::Relationship, &name).await?;
            backend
                .log_interaction(&person.id, interaction_type, date)
                .await?;
            match date {
                Some(d) => format!(
                    "Logged {} with {} on {}",
                    interaction_type.as_str(),
                    person.name,
                    d.format("%Y-%m-%d")
                ),
                None => format!("Logged {} with {}", interaction_type.as_str(), person.name),
            }
        }

        Intent::LogVisit { name, date, amount } => {
            let helper = resolve_entity(backend, EntityClass::Helper, &name).await?;
            // The payment is a child action of the visit: the visit call
            // must complete before any payment is logged.
            backend.log_visit(&helper.id, date).await?;
            match amount {
                Some(amount) => {
                    backend.log_payment(&helper.id, amount, date).await?;
                    format!(
                        "Logged visit from {} and a ${} payment",
                        helper.name,
                        format_amount(amount)
                    )
                }
                None => format!("Logged visit from {}", helper.name),
            }
        }

        Intent::LogPayment { name, amount } => {
            let helper = resolve_entity(backend, EntityClass::Helper, &name).await?;
            backend.log_payment(&helper.id, amount, None).await?;
            format!(
                "Logged ${} payment to {}",
                format_amount(amount),
                helper.name
            )
        }

        Intent::CreateTask {
            title,
            due_date,
            category,
        } => {
            let task = backend
                .create_task(&title, due_date, category.as_deref())
                .await?;
            format!("Added task: {}", task.title)
        }
    };

    Ok(CaptureResult { message })
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
