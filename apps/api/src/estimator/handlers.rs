//! Axum route handlers for the salary estimator.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::estimator::{estimate, EstimateOutcome, ProfileQuery, SalaryEstimate};
use crate::models::user::Role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Absent means the caller already vetted the user as a job seeker.
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: ProfileQuery,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// POST /api/v1/salary/estimate
///
/// Estimates pay for the profile in the request body.
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<SalaryEstimate>, AppError> {
    if let Some(raw) = request.role.as_deref() {
        let role = Role::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown role '{raw}'")))?;
        require_job_seeker(role)?;
    }

    respond(estimate(&state.catalog, &request.profile))
}

/// GET /api/v1/salary/estimate?user_id=
///
/// Loads the user's stored profile and estimates pay for it.
pub async fn handle_estimate_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SalaryEstimate>, AppError> {
    let store = state
        .profiles
        .as_ref()
        .ok_or(AppError::ProfileStoreUnavailable)?;

    let profile = store
        .get_profile(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    // Unknown stored roles are treated as not-a-job-seeker.
    require_job_seeker(profile.role().ok_or(AppError::Forbidden)?)?;

    info!("Estimating salary for user {}", params.user_id);
    respond(estimate(&state.catalog, &profile.to_query()))
}

fn require_job_seeker(role: Role) -> Result<(), AppError> {
    match role {
        Role::JobSeeker => Ok(()),
        Role::Recruiter | Role::Admin => Err(AppError::Forbidden),
    }
}

fn respond(outcome: EstimateOutcome) -> Result<Json<SalaryEstimate>, AppError> {
    match outcome {
        EstimateOutcome::Found(estimate) => Ok(Json(*estimate)),
        EstimateOutcome::IncompleteProfile { missing } => {
            Err(AppError::IncompleteProfile { missing })
        }
        EstimateOutcome::NoData => Err(AppError::NoData),
    }
}
