use serde::{Deserialize, Serialize};
use std::fmt;

/// A task as the backend returns it from search and mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A relationship record (family, friends) from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub name: String,
}

/// A household helper (cleaner, babysitter, gardener) from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helper {
    pub id: String,
    pub name: String,
}

/// Which backend collection a named entity should be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    Relationship,
    Helper,
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityClass::Relationship => write!(f, "relationship"),
            EntityClass::Helper => write!(f, "helper"),
        }
    }
}

/// A backend identifier plus display name, valid for one dispatch only.
/// Only the resolver constructs these; the parser carries free text.
#[derive(Debug, Clone)]
pub struct ResolvedEntity {
    pub id: String,
    pub name: String,
}
