use crate::models::Professional;

/// Filters of the professionals list. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfessionalFilter {
    /// Case-insensitive substring of the name or the category
    pub search: String,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
}

impl ProfessionalFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none() && self.min_rating.is_none()
    }

    pub fn matches(&self, professional: &Professional) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !professional.name().to_lowercase().contains(&search)
            && !professional.category().to_lowercase().contains(&search)
        {
            return false;
        }

        if let Some(category) = &self.category {
            if professional.category() != category {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if professional.average_rating < min {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, professionals: &[Professional]) -> Vec<Professional> {
        professionals
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Minimum-rating choices offered by the list screen.
pub const MIN_RATING_OPTIONS: [Option<f64>; 5] = [None, Some(2.0), Some(3.0), Some(4.0), Some(4.5)];

pub fn min_rating_label(min: Option<f64>) -> String {
    match min {
        None => "Any rating".to_string(),
        Some(value) => format!("{:.1}+ stars", value),
    }
}

/// Five-character bar: full stars for the integer part, a half star when
/// there is a fractional part, empty stars for the rest.
pub fn star_bar(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() > 0.0 && full < 5;

    let mut bar = "★".repeat(full);
    if half {
        bar.push('⯪');
    }
    while bar.chars().count() < 5 {
        bar.push('☆');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserType};
    use chrono::Utc;

    fn professional(name: &str, category: &str, average_rating: f64) -> Professional {
        Professional {
            user: User {
                id: 1,
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
                password_hash: String::new(),
                phone: String::new(),
                user_type: UserType::Professional,
                category: Some(category.into()),
                description: None,
                experience: None,
                street: None,
                number: None,
                complement: None,
                neighborhood: None,
                city: None,
                state: None,
                zip_code: None,
                profile_image: None,
                created_at: Utc::now(),
            },
            average_rating,
            total_reviews: 0,
        }
    }

    fn sample() -> Vec<Professional> {
        vec![
            professional("Bruno Silva", "Plumber", 4.5),
            professional("Carla Souza", "Painter", 3.0),
            professional("Diego Lima", "Electrician", 0.0),
        ]
    }

    fn names(list: &[Professional]) -> Vec<&str> {
        list.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = ProfessionalFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn search_matches_name_or_category() {
        let by_name = ProfessionalFilter { search: "carla".into(), ..Default::default() };
        assert_eq!(names(&by_name.apply(&sample())), vec!["Carla Souza"]);

        let by_category = ProfessionalFilter { search: "ELECTRIC".into(), ..Default::default() };
        assert_eq!(names(&by_category.apply(&sample())), vec!["Diego Lima"]);
    }

    #[test]
    fn filters_combine() {
        let filter = ProfessionalFilter {
            search: "a".into(),
            category: Some("Painter".into()),
            min_rating: Some(3.0),
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["Carla Souza"]);

        let strict = ProfessionalFilter { min_rating: Some(4.0), ..Default::default() };
        assert_eq!(names(&strict.apply(&sample())), vec!["Bruno Silva"]);

        let exact_category = ProfessionalFilter { category: Some("paint".into()), ..Default::default() };
        assert!(exact_category.apply(&sample()).is_empty());
    }

    #[test]
    fn stars() {
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(star_bar(3.0), "★★★☆☆");
        assert_eq!(star_bar(4.5), "★★★★⯪");
        assert_eq!(star_bar(2.2), "★★⯪☆☆");
        assert_eq!(star_bar(5.0), "★★★★★");
        assert_eq!(min_rating_label(Some(4.5)), "4.5+ stars");
    }
}
