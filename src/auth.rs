//! Account registration, login and the persisted session.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Address, NewUser, User, UserType};
use crate::validation;

/// Salted SHA-256, stored as `salt$hex`.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Creates the account and logs it in.
pub async fn register(db: &Database, new_user: &NewUser) -> AppResult<User> {
    validation::validate_new_user(new_user)?;

    if db.find_user_by_email(&new_user.email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let id = db.create_user(new_user, &hash_password(&new_user.password)).await?;
    db.save_session(id).await?;

    let user = db.get_user(id).await?;
    tracing::info!(user_id = user.id, user_type = user.user_type.label(), "account registered");
    Ok(user)
}

pub async fn login(db: &Database, email: &str, password: &str) -> AppResult<User> {
    let user = match db.find_user_by_email(email).await? {
        Some(user) if verify_password(password, &user.password_hash) => user,
        _ => {
            tracing::warn!("failed login attempt");
            return Err(AppError::InvalidCredentials);
        }
    };

    db.save_session(user.id).await?;
    tracing::info!(user_id = user.id, "logged in");
    Ok(user)
}

pub async fn logout(db: &Database) -> AppResult<()> {
    db.clear_session().await?;
    tracing::info!("logged out");
    Ok(())
}

/// The user of the last session, if one was left open.
pub async fn restore(db: &Database) -> AppResult<Option<User>> {
    let user = db.load_session().await?;
    if let Some(user) = &user {
        tracing::debug!(user_id = user.id, "session restored");
    }
    Ok(user)
}

/// Fields editable from the profile screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub address: Address,
}

impl ProfileUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            category: user.category.clone().unwrap_or_default(),
            description: user.description.clone().unwrap_or_default(),
            experience: user.experience.clone().unwrap_or_default(),
            address: user.address().unwrap_or_default(),
        }
    }

    /// The address is only replaced when street, city or state was given.
    fn touches_address(&self) -> bool {
        [&self.address.street, &self.address.city, &self.address.state]
            .iter()
            .any(|field| !field.trim().is_empty())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub async fn update_profile(db: &Database, user: &User, update: &ProfileUpdate) -> AppResult<User> {
    if update.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    let mut updated = user.clone();
    updated.name = update.name.trim().to_string();
    updated.phone = update.phone.trim().to_string();

    if user.user_type == UserType::Professional {
        validation::validate_professional_details(&update.category, &update.description)?;
        updated.category = Some(update.category.clone());
        updated.description = Some(update.description.trim().to_string());
        updated.experience = non_empty(&update.experience);
        if update.touches_address() {
            let mut address = update.address.clone();
            address.complement = address.complement.and_then(|c| non_empty(&c));
            updated.set_address(Some(address));
        }
    }

    db.update_user(&updated).await?;
    tracing::info!(user_id = updated.id, "profile updated");
    Ok(updated)
}

/// Professional details asked from a client who wants to offer services.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalDetails {
    pub category: String,
    pub description: String,
    pub experience: String,
    pub address: Address,
}

pub async fn become_professional(db: &Database, user: &User, details: &ProfessionalDetails) -> AppResult<User> {
    if user.is_professional() {
        return Err(AppError::Forbidden("You are already a professional"));
    }
    validation::validate_address(&details.address)?;
    validation::validate_professional_details(&details.category, &details.description)?;

    let mut address = details.address.clone();
    address.complement = address.complement.and_then(|c| non_empty(&c));

    let updated = db
        .become_professional(
            user.id,
            &details.category,
            details.description.trim(),
            non_empty(&details.experience).as_deref(),
            &address,
        )
        .await?;

    tracing::info!(user_id = updated.id, category = %details.category, "client became professional");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::{address, memory_db, new_client, new_professional};

    #[test]
    fn password_hash_is_salted() {
        let a = hash_password("secret1");
        let b = hash_password("secret1");
        assert_ne!(a, b);
        assert!(verify_password("secret1", &a));
        assert!(verify_password("secret1", &b));
        assert!(!verify_password("secret2", &a));
        assert!(!verify_password("secret1", "garbage"));
    }

    #[tokio::test]
    async fn register_logs_in_and_rejects_duplicates() {
        let db = memory_db().await;
        let user = register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        assert_eq!(restore(&db).await.unwrap().map(|u| u.id), Some(user.id));
        assert_ne!(user.password_hash, "secret1");

        let err = register(&db, &new_client("Ana 2", "ana@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::EmailTaken));
    }

    #[tokio::test]
    async fn register_validates_input() {
        let db = memory_db().await;
        let mut bad = new_client("Ana", "not-an-email");
        assert!(matches!(register(&db, &bad).await, Err(AppError::Validation(_))));

        bad.email = "ana@example.com".into();
        bad.confirm_password = "other".into();
        assert!(matches!(register(&db, &bad).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn login_checks_credentials() {
        let db = memory_db().await;
        register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        logout(&db).await.unwrap();
        assert!(restore(&db).await.unwrap().is_none());

        assert!(matches!(
            login(&db, "ana@example.com", "wrong!!").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&db, "nobody@example.com", "secret1").await,
            Err(AppError::InvalidCredentials)
        ));

        let user = login(&db, "Ana@Example.com", "secret1").await.unwrap();
        assert_eq!(restore(&db).await.unwrap().map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn client_profile_update_ignores_professional_fields() {
        let db = memory_db().await;
        let user = register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();

        let mut update = ProfileUpdate::from_user(&user);
        update.name = "Ana Maria".into();
        update.category = "Plumber".into();
        let updated = update_profile(&db, &user, &update).await.unwrap();

        assert_eq!(updated.name, "Ana Maria");
        assert!(updated.category.is_none());

        update.name = "  ".into();
        assert!(update_profile(&db, &user, &update).await.is_err());
    }

    #[tokio::test]
    async fn professional_profile_keeps_address_unless_touched() {
        let db = memory_db().await;
        let user = register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();

        let mut update = ProfileUpdate::from_user(&user);
        update.address = Address::default();
        update.description = "Now also gas pipes".into();
        let updated = update_profile(&db, &user, &update).await.unwrap();
        assert_eq!(updated.address(), Some(address()));

        update.description.clear();
        assert!(update_profile(&db, &updated, &update).await.is_err());
    }

    #[tokio::test]
    async fn client_can_become_professional() {
        let db = memory_db().await;
        let user = register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();

        let mut details = ProfessionalDetails {
            category: "Painter".into(),
            description: "Walls and fences".into(),
            experience: String::new(),
            address: Address::default(),
        };
        assert!(become_professional(&db, &user, &details).await.is_err());

        details.address = address();
        let pro = become_professional(&db, &user, &details).await.unwrap();
        assert!(pro.is_professional());
        assert!(pro.experience.is_none());

        let listed = db.load_professionals().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category(), "Painter");

        assert!(matches!(
            become_professional(&db, &pro, &details).await,
            Err(AppError::Forbidden(_))
        ));
    }
}
