use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::trip::TripPlan;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// One entry in the session chat log. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub data: Option<Arc<TripPlan>>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            data: None,
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            data: None,
        }
    }

    pub fn ai_with_plan(content: impl Into<String>, plan: Arc<TripPlan>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            data: Some(plan),
        }
    }

    pub fn has_plan(&self) -> bool {
        self.data.is_some()
    }
}
