use std::collections::BTreeMap;

use axum::http::StatusCode;

use crate::models::Activity;
use crate::store::{ActivityStore, StoreError};

/// A refused operation, ready to surface at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct ActivityServiceError {
    pub status: StatusCode,
    pub detail: &'static str,
}

impl ActivityServiceError {
    fn new(status: StatusCode, detail: &'static str) -> Self {
        Self { status, detail }
    }
}

fn rejection(err: StoreError) -> ActivityServiceError {
    match err {
        StoreError::UnknownActivity => {
            ActivityServiceError::new(StatusCode::NOT_FOUND, "Activity not found")
        }
        StoreError::AlreadyRegistered => ActivityServiceError::new(
            StatusCode::BAD_REQUEST,
            "Already signed up for this activity",
        ),
        StoreError::NotRegistered => ActivityServiceError::new(
            StatusCode::NOT_FOUND,
            "Participant is not signed up for this activity",
        ),
    }
}

pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot().await
}

pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityServiceError> {
    store
        .add_participant(activity_name, email)
        .await
        .map_err(rejection)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityServiceError> {
    store
        .remove_participant(activity_name, email)
        .await
        .map_err(rejection)?;
    Ok(format!("Removed {} from {}", email, activity_name))
}
