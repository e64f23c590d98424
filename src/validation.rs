use std::sync::OnceLock;

use regex::Regex;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::models::{Address, NewUser, UserType};

pub const MIN_PASSWORD_LEN: usize = 6;

const REQUIRED_FIELDS: &str = "Please fill in all required fields";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(AppError::validation("Please enter a valid email"))
    }
}

pub fn validate_password(password: &str, confirmation: &str) -> AppResult<()> {
    if password != confirmation {
        return Err(AppError::validation("Passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Applies the CEP mask: keeps up to eight digits and puts a dash after the
/// fifth one.
pub fn format_zip_code(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// Parses a money amount typed with either `,` or `.` as decimal separator.
pub fn parse_money(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Please enter the service value"));
    }
    // Amounts are kept in whole cents.
    match trimmed.replace(',', ".").parse::<f64>().map(|v| (v * 100.0).round() / 100.0) {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(AppError::validation("Please enter a valid value")),
    }
}

/// "R$ 1234.50" style rendering used by list rows.
pub fn format_money(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A complete address is required for professionals. Complement is optional.
pub fn validate_address(address: &Address) -> AppResult<()> {
    let required = [
        &address.street,
        &address.number,
        &address.neighborhood,
        &address.city,
        &address.state,
        &address.zip_code,
    ];
    if required.iter().any(|field| is_blank(field)) {
        return Err(AppError::validation(REQUIRED_FIELDS));
    }
    if !catalog::is_known_state(&address.state) {
        return Err(AppError::validation("Unknown state"));
    }
    Ok(())
}

pub fn validate_professional_details(category: &str, description: &str) -> AppResult<()> {
    if is_blank(category) {
        return Err(AppError::validation("Category is required for professionals"));
    }
    if !catalog::is_known_category(category) {
        return Err(AppError::validation("Unknown category"));
    }
    if is_blank(description) {
        return Err(AppError::validation("Service description is required"));
    }
    Ok(())
}

pub fn validate_new_user(user: &NewUser) -> AppResult<()> {
    let user_type = user
        .user_type
        .ok_or_else(|| AppError::validation("Choose an account type"))?;

    if [&user.name, &user.email, &user.password, &user.phone]
        .iter()
        .any(|field| is_blank(field))
    {
        return Err(AppError::validation(REQUIRED_FIELDS));
    }

    if user_type == UserType::Professional {
        if is_blank(&user.category) || is_blank(&user.description) {
            return Err(AppError::validation(REQUIRED_FIELDS));
        }
        validate_address(&user.address)?;
    }

    validate_password(&user.password, &user.confirm_password)?;
    validate_email(user.email.trim())?;

    if user_type == UserType::Professional {
        validate_professional_details(&user.category, &user.description)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "Rua das Flores".into(),
            number: "12".into(),
            complement: None,
            neighborhood: "Centro".into(),
            city: "Campinas".into(),
            state: "SP".into(),
            zip_code: "13010-000".into(),
        }
    }

    fn client() -> NewUser {
        NewUser {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            phone: "11999990000".into(),
            user_type: Some(UserType::Client),
            ..Default::default()
        }
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.de").is_err());
        assert!(validate_email("@c.de").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("123456", "123456").is_ok());
        assert!(validate_password("12345", "12345").is_err());
        assert!(validate_password("1234567", "7654321").is_err());
    }

    #[test]
    fn zip_code_mask() {
        assert_eq!(format_zip_code("13010000"), "13010-000");
        assert_eq!(format_zip_code("130"), "130");
        assert_eq!(format_zip_code("13010-0001234"), "13010-000");
        assert_eq!(format_zip_code("ab12345c6"), "12345-6");
    }

    #[test]
    fn money_accepts_both_separators() {
        assert_eq!(parse_money("150,50").unwrap(), 150.5);
        assert_eq!(parse_money(" 99.9 ").unwrap(), 99.9);
        assert!(parse_money("").is_err());
        assert!(parse_money("0").is_err());
        assert!(parse_money("-3").is_err());
        assert!(parse_money("abc").is_err());
        assert_eq!(format_money(1234.5), "R$ 1234,50");
    }

    #[test]
    fn client_registration() {
        assert!(validate_new_user(&client()).is_ok());

        let mut missing_phone = client();
        missing_phone.phone.clear();
        assert!(validate_new_user(&missing_phone).is_err());

        let mut no_type = client();
        no_type.user_type = None;
        assert!(validate_new_user(&no_type).is_err());
    }

    #[test]
    fn professional_registration_needs_address() {
        let mut pro = client();
        pro.user_type = Some(UserType::Professional);
        pro.category = "Plumber".into();
        pro.description = "Leaks and pipes".into();
        assert!(validate_new_user(&pro).is_err());

        pro.address = address();
        assert!(validate_new_user(&pro).is_ok());

        pro.address.complement = Some("Apto 3".into());
        pro.address.zip_code.clear();
        assert!(validate_new_user(&pro).is_err());
    }

    #[test]
    fn professional_details_rules() {
        assert!(validate_professional_details("Plumber", "pipes").is_ok());
        assert!(validate_professional_details("", "pipes").is_err());
        assert!(validate_professional_details("Astronaut", "pipes").is_err());
        assert!(validate_professional_details("Plumber", "  ").is_err());
    }
}
