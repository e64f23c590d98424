use serde::Serialize;

use super::User;

/// A professional together with its rating aggregate.
#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct Professional {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: User,
    pub average_rating: f64,
    pub total_reviews: i64,
}

impl Professional {
    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn category(&self) -> &str {
        self.user.category.as_deref().unwrap_or("")
    }
}
