use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(sqlx::Type, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Client,
    Professional,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Client => "Client",
            UserType::Professional => "Professional",
        }
    }
}

/// Postal address of a professional. `state` holds the two-letter UF code.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// "Street, 12 - Complement, Neighborhood"
    pub fn first_line(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if let Some(complement) = self.complement.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(" - ");
            line.push_str(complement);
        }
        if !self.neighborhood.is_empty() {
            line.push_str(", ");
            line.push_str(&self.neighborhood);
        }
        line
    }

    /// "City - UF, 12345-678"
    pub fn second_line(&self) -> String {
        format!("{} - {}, {}", self.city, self.state, self.zip_code)
    }
}

#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub phone: String,
    pub user_type: UserType,
    pub category: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_professional(&self) -> bool {
        self.user_type == UserType::Professional
    }

    /// The stored address, if the street was ever filled in.
    pub fn address(&self) -> Option<Address> {
        let street = self.street.clone()?;
        Some(Address {
            street,
            number: self.number.clone().unwrap_or_default(),
            complement: self.complement.clone(),
            neighborhood: self.neighborhood.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            zip_code: self.zip_code.clone().unwrap_or_default(),
        })
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        match address {
            Some(a) => {
                self.street = Some(a.street);
                self.number = Some(a.number);
                self.complement = a.complement;
                self.neighborhood = Some(a.neighborhood);
                self.city = Some(a.city);
                self.state = Some(a.state);
                self.zip_code = Some(a.zip_code);
            }
            None => {
                self.street = None;
                self.number = None;
                self.complement = None;
                self.neighborhood = None;
                self.city = None;
                self.state = None;
                self.zip_code = None;
            }
        }
    }

    /// "City/UF" for list rows, empty when no address is known.
    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) if !city.is_empty() => format!("{}/{}", city, state),
            _ => String::new(),
        }
    }
}

/// Data needed to create an account.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub user_type: Option<UserType>,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub address: Address,
}
