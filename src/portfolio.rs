//! Portfolio images and the profile picture. Images are references
//! (paths or URIs); the files themselves are never copied.

use std::path::Path;

use crate::config::Config;
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::User;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "heic"];

pub fn is_image_reference(uri: &str) -> bool {
    let uri = uri.trim();
    if uri.is_empty() {
        return false;
    }
    // Ignore any query string of a URL.
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn check_image(uri: &str) -> AppResult<()> {
    if is_image_reference(uri) {
        Ok(())
    } else {
        Err(AppError::validation(format!("Not an image: {}", uri.trim())))
    }
}

/// How many more images the portfolio accepts.
pub fn remaining_slots(current: usize, config: &Config) -> usize {
    config.portfolio_max_images.saturating_sub(current)
}

pub async fn load(db: &Database, user_id: i64) -> AppResult<Vec<String>> {
    db.load_portfolio(user_id).await
}

/// Adds as many of `uris` as there are free slots. Fails with
/// `PortfolioFull` when the portfolio has no free slot at all.
pub async fn add_images(db: &Database, config: &Config, user: &User, uris: &[String]) -> AppResult<Vec<String>> {
    if !user.is_professional() {
        return Err(AppError::Forbidden("Only professionals have a portfolio"));
    }

    let uris: Vec<String> = uris.iter().map(|u| u.trim().to_string()).collect();
    for uri in &uris {
        check_image(uri)?;
    }

    let current = db.load_portfolio(user.id).await?;
    let free = remaining_slots(current.len(), config);
    if free == 0 {
        return Err(AppError::PortfolioFull { max: config.portfolio_max_images });
    }

    let accepted = &uris[..uris.len().min(free)];
    if accepted.len() < uris.len() {
        tracing::warn!(
            user_id = user.id,
            dropped = uris.len() - accepted.len(),
            "portfolio limit reached, extra images ignored"
        );
    }

    let images = db
        .add_portfolio_images(user.id, accepted, config.portfolio_max_images)
        .await?;
    tracing::info!(user_id = user.id, added = accepted.len(), "portfolio images added");
    Ok(images)
}

pub async fn remove_image(db: &Database, user: &User, uri: &str) -> AppResult<Vec<String>> {
    let images = db.remove_portfolio_image(user.id, uri).await?;
    tracing::info!(user_id = user.id, "portfolio image removed");
    Ok(images)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Swaps the image at `index` with its neighbour. Returns the new order.
pub async fn move_image(db: &Database, user: &User, index: usize, direction: Direction) -> AppResult<Vec<String>> {
    let mut images = db.load_portfolio(user.id).await?;
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1),
    };
    let Some(target) = target.filter(|t| *t < images.len() && index < images.len()) else {
        return Ok(images);
    };

    images.swap(index, target);
    db.replace_portfolio(user.id, &images).await?;
    tracing::debug!(user_id = user.id, from = index, to = target, "portfolio image moved");
    Ok(images)
}

/// Sets the profile picture, or clears it when `uri` is empty.
pub async fn set_profile_image(db: &Database, user: &User, uri: &str) -> AppResult<Option<String>> {
    let uri = uri.trim();
    if uri.is_empty() {
        db.set_profile_image(user.id, None).await?;
        return Ok(None);
    }

    check_image(uri)?;
    db.set_profile_image(user.id, Some(uri)).await?;
    tracing::info!(user_id = user.id, "profile image saved");
    db.get_profile_image(user.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use crate::db::tests::{memory_db, new_client, new_professional};

    fn config(max: usize) -> Config {
        Config { portfolio_max_images: max, ..Config::default() }
    }

    fn images(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(|i| format!("/photos/work{}.JPG", i)).collect()
    }

    #[test]
    fn recognises_image_references() {
        assert!(is_image_reference("/tmp/a.png"));
        assert!(is_image_reference("file:///sdcard/DCIM/b.HEIC"));
        assert!(is_image_reference("https://cdn.example.com/c.webp?w=200"));
        assert!(!is_image_reference("notes.txt"));
        assert!(!is_image_reference("   "));
        assert!(!is_image_reference("/tmp/noext"));
    }

    #[test]
    fn slots() {
        assert_eq!(remaining_slots(3, &config(10)), 7);
        assert_eq!(remaining_slots(12, &config(10)), 0);
    }

    #[tokio::test]
    async fn add_fills_free_slots_then_refuses() {
        let db = memory_db().await;
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();
        let config = config(3);

        let stored = add_images(&db, &config, &pro, &images(0..2)).await.unwrap();
        assert_eq!(stored.len(), 2);

        let stored = add_images(&db, &config, &pro, &images(2..5)).await.unwrap();
        assert_eq!(stored, images(0..3));

        assert!(matches!(
            add_images(&db, &config, &pro, &images(5..6)).await,
            Err(AppError::PortfolioFull { max: 3 })
        ));

        let left = remove_image(&db, &pro, "/photos/work0.JPG").await.unwrap();
        assert_eq!(left, images(1..3));
    }

    #[tokio::test]
    async fn clients_have_no_portfolio() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        assert!(matches!(
            add_images(&db, &config(10), &client, &images(0..1)).await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn rejects_non_images() {
        let db = memory_db().await;
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();
        let result = add_images(&db, &config(10), &pro, &["cv.pdf".to_string()]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(load(&db, pro.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn profile_image_set_and_clear() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();

        let saved = set_profile_image(&db, &client, " /me.png ").await.unwrap();
        assert_eq!(saved.as_deref(), Some("/me.png"));
        assert!(set_profile_image(&db, &client, "me.doc").await.is_err());

        assert!(set_profile_image(&db, &client, "").await.unwrap().is_none());
        assert!(db.get_profile_image(client.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn move_reorders_and_stops_at_the_ends() {
        let db = memory_db().await;
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();
        add_images(&db, &config(10), &pro, &images(0..3)).await.unwrap();

        let moved = move_image(&db, &pro, 2, Direction::Up).await.unwrap();
        assert_eq!(moved[1], "/photos/work2.JPG");
        assert_eq!(load(&db, pro.id).await.unwrap(), moved);

        let unchanged = move_image(&db, &pro, 0, Direction::Up).await.unwrap();
        assert_eq!(unchanged, moved);
        let unchanged = move_image(&db, &pro, 2, Direction::Down).await.unwrap();
        assert_eq!(unchanged, moved);
    }
}
