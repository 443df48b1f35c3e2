use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Activity;
use crate::services::activity_service::{self, ActivityServiceError};
use crate::store::ActivityStore;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

fn rejection_response(err: &ActivityServiceError) -> (StatusCode, Json<Value>) {
    (err.status, Json(serde_json::json!({ "detail": err.detail })))
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activity_service::list_activities(&store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activity_service::sign_up(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(
                activity = %activity_name,
                email = %query.email,
                status = %e.status,
                "signup_rejected"
            );
            rejection_response(&e)
        })
}

pub async fn remove_participant_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activity_service::remove_participant(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(
                activity = %activity_name,
                email = %query.email,
                status = %e.status,
                "remove_participant_rejected"
            );
            rejection_response(&e)
        })
}
