use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(sqlx::Type, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn from_value(value: &str) -> Option<Urgency> {
        Urgency::ALL.iter().copied().find(|u| u.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low - within a few weeks",
            Urgency::Normal => "Normal - within a week",
            Urgency::High => "High - within a few days",
            Urgency::Urgent => "Urgent - today or tomorrow",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Normal => "Normal",
            Urgency::High => "High",
            Urgency::Urgent => "Urgent",
        }
    }
}

#[derive(sqlx::Type, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Cancelled)
    }

    /// pending -> accepted -> completed, and pending/accepted -> cancelled.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Accepted)
                | (RequestStatus::Pending, RequestStatus::Cancelled)
                | (RequestStatus::Accepted, RequestStatus::Completed)
                | (RequestStatus::Accepted, RequestStatus::Cancelled)
        )
    }
}

#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct ServiceRequest {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub professional_id: i64,
    pub professional_name: String,
    pub description: String,
    pub value: f64,
    pub additional_notes: Option<String>,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: Option<i64>,
    pub comment: Option<String>,
}

/// A request about to be stored; always starts out `Pending`.
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub client_id: i64,
    pub client_name: String,
    pub professional_id: i64,
    pub professional_name: String,
    pub description: String,
    pub value: f64,
    pub additional_notes: Option<String>,
    pub urgency: Urgency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_transitions() {
        use RequestStatus::*;
        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Accepted.can_transition_to(Completed));
        assert!(Accepted.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Accepted));
        assert!(!Accepted.can_transition_to(Pending));
    }

    #[test]
    fn terminal_states() {
        assert!(RequestStatus::Completed.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
    }
}
