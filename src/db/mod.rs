use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{
    Address, NewServiceRequest, NewUser, Professional, Rating, RequestStatus, ServiceRequest,
    User, UserType,
};

const PROFESSIONALS_QUERY: &str = r#"
    SELECT
        u.*,
        COALESCE(AVG(r.score), 0.0) AS average_rating,
        COUNT(r.id) AS total_reviews
    FROM users u
    LEFT JOIN ratings r ON r.professional_id = u.id
    WHERE u.user_type = 'professional'
"#;

/// Database connection pool
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> AppResult<Self> {
        Self::connect(config.database_url()).await
    }

    /// Open the database at `url`, creating the file if needed, and bring the
    /// schema up to date.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory database gets its own database.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    // User operations
    pub async fn create_user(&self, user: &NewUser, password_hash: &str) -> AppResult<i64> {
        let user_type = user.user_type.unwrap_or(UserType::Client);
        let professional = user_type == UserType::Professional;
        let address = professional.then_some(&user.address);
        let optional = |value: &str| {
            let value = value.trim();
            (professional && !value.is_empty()).then(|| value.to_string())
        };

        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (
                name, email, password_hash, phone, user_type, category, description, experience,
                street, number, complement, neighborhood, city, state, zip_code, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user.name.trim())
        .bind(user.email.trim())
        .bind(password_hash)
        .bind(user.phone.trim())
        .bind(user_type)
        .bind(optional(&user.category))
        .bind(optional(&user.description))
        .bind(optional(&user.experience))
        .bind(address.map(|a| a.street.clone()))
        .bind(address.map(|a| a.number.clone()))
        .bind(address.and_then(|a| a.complement.clone()).filter(|c| !c.is_empty()))
        .bind(address.map(|a| a.neighborhood.clone()))
        .bind(address.map(|a| a.city.clone()))
        .bind(address.map(|a| a.state.clone()))
        .bind(address.map(|a| a.zip_code.clone()))
        .bind(Utc::now())
        .fetch_one(self.get_pool())
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Err(AppError::EmailTaken),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or(AppError::NotFound("User"))
    }

    /// Emails compare case-insensitively.
    pub async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ? COLLATE NOCASE")
            .bind(email.trim())
            .fetch_optional(self.get_pool())
            .await?;

        Ok(user)
    }

    pub async fn update_user(&self, user: &User) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, phone = ?, user_type = ?, category = ?, description = ?, experience = ?,
                street = ?, number = ?, complement = ?, neighborhood = ?, city = ?, state = ?,
                zip_code = ?, profile_image = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.phone)
        .bind(user.user_type)
        .bind(&user.category)
        .bind(&user.description)
        .bind(&user.experience)
        .bind(&user.street)
        .bind(&user.number)
        .bind(&user.complement)
        .bind(&user.neighborhood)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.zip_code)
        .bind(&user.profile_image)
        .bind(user.id)
        .execute(self.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User"));
        }

        Ok(())
    }

    /// Turns an account into a professional one and stores its details.
    pub async fn become_professional(
        &self,
        user_id: i64,
        category: &str,
        description: &str,
        experience: Option<&str>,
        address: &Address,
    ) -> AppResult<User> {
        let mut user = self.get_user(user_id).await?;
        user.user_type = UserType::Professional;
        user.category = Some(category.to_string());
        user.description = Some(description.to_string());
        user.experience = experience.map(str::to_string);
        user.set_address(Some(address.clone()));

        self.update_user(&user).await?;

        Ok(user)
    }

    // Profile image operations
    pub async fn set_profile_image(&self, user_id: i64, uri: Option<&str>) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET profile_image = ? WHERE id = ?")
            .bind(uri)
            .bind(user_id)
            .execute(self.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User"));
        }

        Ok(())
    }

    pub async fn get_profile_image(&self, user_id: i64) -> AppResult<Option<String>> {
        let image = sqlx::query_scalar::<_, Option<String>>("SELECT profile_image FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(self.get_pool())
            .await?
            .flatten();

        Ok(image)
    }

    // Professional operations
    pub async fn load_professionals(&self) -> AppResult<Vec<Professional>> {
        let query = format!("{} GROUP BY u.id ORDER BY u.name COLLATE NOCASE ASC", PROFESSIONALS_QUERY);
        let professionals = sqlx::query_as::<_, Professional>(&query)
            .fetch_all(self.get_pool())
            .await?;

        Ok(professionals)
    }

    pub async fn get_professional(&self, id: i64) -> AppResult<Professional> {
        let query = format!("{} AND u.id = ? GROUP BY u.id", PROFESSIONALS_QUERY);
        sqlx::query_as::<_, Professional>(&query)
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or(AppError::NotFound("Professional"))
    }

    // Rating operations
    pub async fn load_ratings(&self, professional_id: i64) -> AppResult<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE professional_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(professional_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(ratings)
    }

    #[cfg(test)]
    pub async fn add_rating(
        &self,
        professional_id: i64,
        client: &User,
        score: i64,
        comment: Option<&str>,
        service_request_id: Option<i64>,
    ) -> AppResult<i64> {
        insert_rating(
            self.get_pool(),
            professional_id,
            (client.id, &client.name),
            score,
            comment,
            Utc::now(),
            service_request_id,
        )
        .await
    }

    // Service request operations
    pub async fn create_service_request(&self, request: &NewServiceRequest) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO service_requests (
                client_id, client_name, professional_id, professional_name, description, value,
                additional_notes, urgency, status, requested_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(request.client_id)
        .bind(&request.client_name)
        .bind(request.professional_id)
        .bind(&request.professional_name)
        .bind(&request.description)
        .bind(request.value)
        .bind(&request.additional_notes)
        .bind(request.urgency)
        .bind(RequestStatus::Pending)
        .bind(Utc::now())
        .fetch_one(self.get_pool())
        .await?;

        Ok(id)
    }

    pub async fn get_service_request(&self, id: i64) -> AppResult<ServiceRequest> {
        sqlx::query_as::<_, ServiceRequest>("SELECT * FROM service_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or(AppError::NotFound("Service request"))
    }

    pub async fn load_requests_by_client(&self, client_id: i64) -> AppResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests WHERE client_id = ? ORDER BY requested_at DESC, id DESC",
        )
        .bind(client_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(requests)
    }

    pub async fn load_requests_by_professional(&self, professional_id: i64) -> AppResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests WHERE professional_id = ? ORDER BY requested_at DESC, id DESC",
        )
        .bind(professional_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(requests)
    }

    /// Moves a request from `from` to `to`. Fails without touching the row
    /// when the request is no longer in `from`.
    pub async fn update_request_status(&self, id: i64, from: RequestStatus, to: RequestStatus) -> AppResult<()> {
        if !from.can_transition_to(to) {
            return Err(AppError::InvalidTransition { from, to });
        }

        let result = sqlx::query("UPDATE service_requests SET status = ? WHERE id = ? AND status = ?")
            .bind(to)
            .bind(id)
            .bind(from)
            .execute(self.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            let current = self.get_service_request(id).await?;
            return Err(AppError::InvalidTransition { from: current.status, to });
        }

        Ok(())
    }

    /// Marks an accepted request as completed and records the client's rating
    /// of the professional in the same transaction.
    pub async fn complete_service_request(
        &self,
        id: i64,
        score: i64,
        comment: Option<&str>,
    ) -> AppResult<ServiceRequest> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, ServiceRequest>("SELECT * FROM service_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound("Service request"))?;

        if !request.status.can_transition_to(RequestStatus::Completed) {
            return Err(AppError::InvalidTransition {
                from: request.status,
                to: RequestStatus::Completed,
            });
        }

        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE service_requests
            SET status = ?, completed_at = ?, score = ?, comment = ?
            WHERE id = ?
            "#,
        )
        .bind(RequestStatus::Completed)
        .bind(now)
        .bind(score)
        .bind(comment)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        insert_rating(
            &mut *tx,
            request.professional_id,
            (request.client_id, &request.client_name),
            score,
            comment,
            now,
            Some(id),
        )
        .await?;

        tx.commit().await?;

        self.get_service_request(id).await
    }

    // Portfolio operations
    pub async fn load_portfolio(&self, user_id: i64) -> AppResult<Vec<String>> {
        let images = sqlx::query_scalar::<_, String>(
            "SELECT uri FROM portfolio_images WHERE user_id = ? ORDER BY position ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(images)
    }

    /// Appends images to the portfolio. Nothing is stored when the result
    /// would exceed `max_images`.
    pub async fn add_portfolio_images(&self, user_id: i64, uris: &[String], max_images: usize) -> AppResult<Vec<String>> {
        let mut tx = self.pool.begin().await?;

        let (count, last_position) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COALESCE(MAX(position), -1) FROM portfolio_images WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        if count as usize + uris.len() > max_images {
            return Err(AppError::PortfolioFull { max: max_images });
        }

        for (offset, uri) in uris.iter().enumerate() {
            sqlx::query("INSERT INTO portfolio_images (user_id, position, uri) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(last_position + 1 + offset as i64)
                .bind(uri)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.load_portfolio(user_id).await
    }

    /// Removes every occurrence of `uri` from the portfolio.
    pub async fn remove_portfolio_image(&self, user_id: i64, uri: &str) -> AppResult<Vec<String>> {
        sqlx::query("DELETE FROM portfolio_images WHERE user_id = ? AND uri = ?")
            .bind(user_id)
            .bind(uri)
            .execute(self.get_pool())
            .await?;

        self.load_portfolio(user_id).await
    }

    pub async fn replace_portfolio(&self, user_id: i64, uris: &[String]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM portfolio_images WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for (position, uri) in uris.iter().enumerate() {
            sqlx::query("INSERT INTO portfolio_images (user_id, position, uri) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(position as i64)
                .bind(uri)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    // Session operations
    pub async fn save_session(&self, user_id: i64) -> AppResult<()> {
        sqlx::query("INSERT OR REPLACE INTO session (id, user_id) VALUES (1, ?)")
            .bind(user_id)
            .execute(self.get_pool())
            .await?;

        Ok(())
    }

    pub async fn load_session(&self) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.* FROM session s JOIN users u ON u.id = s.user_id WHERE s.id = 1",
        )
        .fetch_optional(self.get_pool())
        .await?;

        Ok(user)
    }

    pub async fn clear_session(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM session")
            .execute(self.get_pool())
            .await?;

        Ok(())
    }
}

async fn insert_rating<'e, E: SqliteExecutor<'e>>(
    executor: E,
    professional_id: i64,
    (client_id, client_name): (i64, &str),
    score: i64,
    comment: Option<&str>,
    created_at: DateTime<Utc>,
    service_request_id: Option<i64>,
) -> AppResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO ratings (professional_id, client_id, client_name, score, comment, created_at, service_request_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(professional_id)
    .bind(client_id)
    .bind(client_name)
    .bind(score)
    .bind(comment)
    .bind(created_at)
    .bind(service_request_id)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> AppResult<Database> {
    let db = Database::new(config).await?;
    tracing::info!(url = %config.database_url(), "database ready");
    Ok(db)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) async fn memory_db() -> Database {
        Database::connect("sqlite::memory:").await.unwrap()
    }

    pub(crate) fn address() -> Address {
        Address {
            street: "Rua Augusta".into(),
            number: "100".into(),
            complement: None,
            neighborhood: "Consolação".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            zip_code: "01305-000".into(),
        }
    }

    pub(crate) fn new_client(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: email.into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            phone: "11988887777".into(),
            user_type: Some(UserType::Client),
            ..Default::default()
        }
    }

    pub(crate) fn new_professional(name: &str, email: &str, category: &str) -> NewUser {
        NewUser {
            user_type: Some(UserType::Professional),
            category: category.into(),
            description: "Fast and tidy work".into(),
            address: address(),
            ..new_client(name, email)
        }
    }

    async fn request(db: &Database, client: &User, pro: &User) -> i64 {
        db.create_service_request(&NewServiceRequest {
            client_id: client.id,
            client_name: client.name.clone(),
            professional_id: pro.id,
            professional_name: pro.name.clone(),
            description: "Fix the sink".into(),
            value: 120.0,
            additional_notes: None,
            urgency: Default::default(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = memory_db().await;
        db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();

        let err = db
            .create_user(&new_client("Other", "ANA@example.com"), "h")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmailTaken));
    }

    #[tokio::test]
    async fn professionals_carry_rating_aggregates() {
        let db = memory_db().await;
        let client_id = db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();
        let client = db.get_user(client_id).await.unwrap();
        let bruno = db
            .create_user(&new_professional("Bruno", "bruno@example.com", "Plumber"), "h")
            .await
            .unwrap();
        db.create_user(&new_professional("Carla", "carla@example.com", "Painter"), "h")
            .await
            .unwrap();

        db.add_rating(bruno, &client, 5, Some("great"), None).await.unwrap();
        db.add_rating(bruno, &client, 4, None, None).await.unwrap();

        let professionals = db.load_professionals().await.unwrap();
        assert_eq!(professionals.len(), 2);
        assert_eq!(professionals[0].name(), "Bruno");
        assert_eq!(professionals[0].total_reviews, 2);
        assert!((professionals[0].average_rating - 4.5).abs() < 1e-9);
        assert_eq!(professionals[1].total_reviews, 0);
        assert_eq!(professionals[1].average_rating, 0.0);

        let ratings = db.load_ratings(bruno).await.unwrap();
        assert_eq!(ratings.len(), 2);

        assert!(matches!(
            db.get_professional(client_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn listings_are_sorted() {
        let db = memory_db().await;
        let zeca = db
            .create_user(&new_professional("Zeca", "zeca@example.com", "Plumber"), "h")
            .await
            .unwrap();
        let amanda = db
            .create_user(&new_professional("amanda", "amanda@example.com", "Painter"), "h")
            .await
            .unwrap();
        let client_id = db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();
        let client = db.get_user(client_id).await.unwrap();

        let names: Vec<String> = db
            .load_professionals()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["amanda", "Zeca"]);

        let first = db.add_rating(zeca, &client, 3, None, None).await.unwrap();
        let second = db.add_rating(zeca, &client, 5, None, None).await.unwrap();
        let ratings: Vec<i64> = db.load_ratings(zeca).await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ratings, vec![second, first]);

        let zeca = db.get_user(zeca).await.unwrap();
        let amanda = db.get_user(amanda).await.unwrap();
        let older = request(&db, &client, &zeca).await;
        let other = request(&db, &client, &amanda).await;
        let newer = request(&db, &client, &zeca).await;

        let by_client: Vec<i64> = db
            .load_requests_by_client(client.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(by_client, vec![newer, other, older]);

        let by_professional: Vec<i64> = db
            .load_requests_by_professional(zeca.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(by_professional, vec![newer, older]);
    }

    #[tokio::test]
    async fn professional_address_round_trips() {
        let db = memory_db().await;
        let id = db
            .create_user(&new_professional("Bruno", "bruno@example.com", "Plumber"), "h")
            .await
            .unwrap();
        let user = db.get_user(id).await.unwrap();
        assert_eq!(user.address(), Some(address()));
        assert_eq!(user.location(), "São Paulo/SP");
    }

    #[tokio::test]
    async fn status_update_requires_expected_state() {
        let db = memory_db().await;
        let client = db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();
        let pro = db
            .create_user(&new_professional("Bruno", "bruno@example.com", "Plumber"), "h")
            .await
            .unwrap();
        let client = db.get_user(client).await.unwrap();
        let pro = db.get_user(pro).await.unwrap();
        let id = request(&db, &client, &pro).await;

        db.update_request_status(id, RequestStatus::Pending, RequestStatus::Accepted)
            .await
            .unwrap();
        let err = db
            .update_request_status(id, RequestStatus::Pending, RequestStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition { from: RequestStatus::Accepted, .. }
        ));
    }

    #[tokio::test]
    async fn completing_records_a_rating() {
        let db = memory_db().await;
        let client = db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();
        let pro = db
            .create_user(&new_professional("Bruno", "bruno@example.com", "Plumber"), "h")
            .await
            .unwrap();
        let client = db.get_user(client).await.unwrap();
        let pro = db.get_user(pro).await.unwrap();
        let id = request(&db, &client, &pro).await;

        assert!(db.complete_service_request(id, 5, None).await.is_err());

        db.update_request_status(id, RequestStatus::Pending, RequestStatus::Accepted)
            .await
            .unwrap();
        let done = db.complete_service_request(id, 4, Some("ok")).await.unwrap();
        assert_eq!(done.status, RequestStatus::Completed);
        assert_eq!(done.score, Some(4));
        assert!(done.completed_at.is_some());

        let ratings = db.load_ratings(pro.id).await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].service_request_id, Some(id));
        assert_eq!(ratings[0].client_name, "Ana");
    }

    #[tokio::test]
    async fn portfolio_cap_is_all_or_nothing() {
        let db = memory_db().await;
        let pro = db
            .create_user(&new_professional("Bruno", "bruno@example.com", "Plumber"), "h")
            .await
            .unwrap();
        let images: Vec<String> = (0..3).map(|i| format!("img{}.jpg", i)).collect();

        db.add_portfolio_images(pro, &images, 4).await.unwrap();
        let err = db.add_portfolio_images(pro, &images[..2], 4).await.unwrap_err();
        assert!(matches!(err, AppError::PortfolioFull { max: 4 }));
        assert_eq!(db.load_portfolio(pro).await.unwrap(), images);

        let left = db.remove_portfolio_image(pro, "img1.jpg").await.unwrap();
        assert_eq!(left, vec!["img0.jpg".to_string(), "img2.jpg".to_string()]);

        db.replace_portfolio(pro, &["a.png".to_string()]).await.unwrap();
        assert_eq!(db.load_portfolio(pro).await.unwrap(), vec!["a.png".to_string()]);
    }

    #[tokio::test]
    async fn session_survives_until_cleared() {
        let db = memory_db().await;
        assert!(db.load_session().await.unwrap().is_none());

        let id = db.create_user(&new_client("Ana", "ana@example.com"), "h").await.unwrap();
        db.save_session(id).await.unwrap();
        assert_eq!(db.load_session().await.unwrap().map(|u| u.id), Some(id));

        db.clear_session().await.unwrap();
        assert!(db.load_session().await.unwrap().is_none());
    }
}
