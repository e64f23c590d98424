//! Service request lifecycle: pending -> accepted -> completed, with
//! cancellation allowed until the request is completed.

use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::{NewServiceRequest, Professional, RequestStatus, ServiceRequest, Urgency, User};
use crate::validation;

/// What the client types in the request form.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub description: String,
    pub value: String,
    pub additional_notes: String,
    pub urgency: Urgency,
}

pub async fn request_service(
    db: &Database,
    client: &User,
    professional: &Professional,
    form: &RequestForm,
) -> AppResult<ServiceRequest> {
    if client.id == professional.id() {
        return Err(AppError::Forbidden("You cannot request a service from yourself"));
    }
    if form.description.trim().is_empty() {
        return Err(AppError::validation("Please describe the service you need"));
    }
    let value = validation::parse_money(&form.value)?;
    let notes = form.additional_notes.trim();

    let id = db
        .create_service_request(&NewServiceRequest {
            client_id: client.id,
            client_name: client.name.clone(),
            professional_id: professional.id(),
            professional_name: professional.name().to_string(),
            description: form.description.trim().to_string(),
            value,
            additional_notes: (!notes.is_empty()).then(|| notes.to_string()),
            urgency: form.urgency,
        })
        .await?;

    tracing::info!(
        request_id = id,
        client_id = client.id,
        professional_id = professional.id(),
        "service requested"
    );
    db.get_service_request(id).await
}

/// Requests the user is involved in, as client or as professional,
/// newest first.
pub async fn load_for_user(db: &Database, user: &User) -> AppResult<Vec<ServiceRequest>> {
    let mut requests = db.load_requests_by_client(user.id).await?;
    if user.is_professional() {
        requests.extend(db.load_requests_by_professional(user.id).await?);
        requests.sort_by(|a, b| (b.requested_at, b.id).cmp(&(a.requested_at, a.id)));
    }
    Ok(requests)
}

pub async fn accept(db: &Database, professional: &User, request_id: i64) -> AppResult<()> {
    let request = db.get_service_request(request_id).await?;
    if request.professional_id != professional.id {
        return Err(AppError::Forbidden("Only the professional can accept this request"));
    }

    db.update_request_status(request_id, request.status, RequestStatus::Accepted)
        .await?;

    tracing::info!(request_id, "service request accepted");
    Ok(())
}

pub async fn cancel(db: &Database, user: &User, request_id: i64) -> AppResult<()> {
    let request = db.get_service_request(request_id).await?;
    if request.client_id != user.id && request.professional_id != user.id {
        return Err(AppError::Forbidden("This request is not yours"));
    }

    db.update_request_status(request_id, request.status, RequestStatus::Cancelled)
        .await?;

    tracing::info!(request_id, user_id = user.id, "service request cancelled");
    Ok(())
}

pub async fn complete(
    db: &Database,
    client: &User,
    request_id: i64,
    score: i64,
    comment: &str,
) -> AppResult<ServiceRequest> {
    if !(1..=5).contains(&score) {
        return Err(AppError::validation("Please select a score"));
    }

    let request = db.get_service_request(request_id).await?;
    if request.client_id != client.id {
        return Err(AppError::Forbidden("Only the client can complete this request"));
    }

    let comment = comment.trim();
    let completed = db
        .complete_service_request(request_id, score, (!comment.is_empty()).then_some(comment))
        .await?;

    tracing::info!(request_id, score, "service request completed");
    Ok(completed)
}
