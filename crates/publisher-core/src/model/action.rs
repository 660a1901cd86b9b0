use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::edition::WorkflowState;

/// The workflow request an [`Action`] records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Create,
    NewVersion,
    Assign,
    RequestReview,
    RequestAmendments,
    Approve,
    SendFactCheck,
    Schedule,
    Publish,
    Archive,
    Note,
}

impl ActionKind {
    /// The state an edition moves to once this action is recorded on it
    pub fn resulting_state(&self, current: WorkflowState) -> WorkflowState {
        match self {
            ActionKind::Create | ActionKind::NewVersion => WorkflowState::Draft,
            ActionKind::RequestReview => WorkflowState::InReview,
            ActionKind::RequestAmendments => WorkflowState::AmendsNeeded,
            ActionKind::Approve => WorkflowState::Ready,
            ActionKind::SendFactCheck => WorkflowState::FactCheck,
            ActionKind::Schedule => WorkflowState::Scheduled,
            ActionKind::Publish => WorkflowState::Published,
            ActionKind::Archive => WorkflowState::Archived,
            ActionKind::Assign | ActionKind::Note => current,
        }
    }
}

/// Immutable audit entry for one workflow event on an edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    /// User who requested the transition, if known
    pub requester_id: Option<String>,
    pub comment: Option<String>,
    pub request_type: ActionKind,
    /// Edition state at the time the action was recorded
    pub state: WorkflowState,
    pub created_at: DateTime<Utc>,
}

impl Action {
    pub fn new(
        requester_id: Option<String>,
        comment: Option<String>,
        request_type: ActionKind,
        state: WorkflowState,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            requester_id,
            comment,
            request_type,
            state,
            created_at: Utc::now(),
        }
    }
}

/// Shared, copy-on-write history of actions
///
/// Cloning a trail shares the underlying entries, so a new edition can carry
/// its predecessor's history without copying it. Pushing onto a shared trail
/// detaches it first; the other holders never observe the new entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Action>", into = "Vec<Action>")]
pub struct ActionTrail(Arc<Vec<Action>>);

impl ActionTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        Arc::make_mut(&mut self.0).push(action);
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Action> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    /// Whether both trails still point at the same stored history
    pub fn shares_history_with(&self, other: &ActionTrail) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ActionTrail {
    fn eq(&self, other: &Self) -> bool {
        self.shares_history_with(other) || self.0 == other.0
    }
}

impl Eq for ActionTrail {}

impl From<Vec<Action>> for ActionTrail {
    fn from(actions: Vec<Action>) -> Self {
        Self(Arc::new(actions))
    }
}

impl From<ActionTrail> for Vec<Action> {
    fn from(trail: ActionTrail) -> Self {
        Arc::try_unwrap(trail.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<'a> IntoIterator for &'a ActionTrail {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
