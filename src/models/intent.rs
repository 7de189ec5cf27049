use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The interaction kinds the backend's relationship log accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Call,
    Text,
    Email,
    Visit,
    VideoCall,
}

impl InteractionType {
    /// Maps an utterance verb to its interaction type. Unknown verbs fall
    /// back to `Call`; unreachable with the current verb set.
    pub fn from_verb(verb: &str) -> Self {
        match verb {
            "called" => InteractionType::Call,
            "texted" => InteractionType::Text,
            "emailed" => InteractionType::Email,
            "visited" => InteractionType::Visit,
            "video called" | "videocalled" => InteractionType::VideoCall,
            _ => InteractionType::Call,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Call => "call",
            InteractionType::Text => "text",
            InteractionType::Email => "email",
            InteractionType::Visit => "visit",
            InteractionType::VideoCall => "video_call",
        }
    }
}

/// The classified meaning of one capture. Exactly one variant applies per
/// utterance; the parser's rule ordering guarantees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    LogInteraction {
        name: String,
        interaction_type: InteractionType,
        date: Option<NaiveDate>,
    },
    CompleteTask {
        task_name: String,
    },
    LogVisit {
        name: String,
        date: Option<NaiveDate>,
        amount: Option<f64>,
    },
    LogPayment {
        name: String,
        amount: f64,
    },
    CreateTask {
        title: String,
        due_date: Option<NaiveDate>,
        category: Option<String>,
    },
}
