use crate::UnknownName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// The editable part of a tenant record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TenantProfile {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

impl TenantProfile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
            ProfileField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Address => self.address = value,
            ProfileField::Email => self.email = value,
        }
    }

    /// "First Last", skipping whichever half is empty.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// One input on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Phone,
    Address,
    Email,
}

impl FromStr for ProfileField {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" | "first_name" => Ok(ProfileField::FirstName),
            "lastName" | "last_name" => Ok(ProfileField::LastName),
            "phone" => Ok(ProfileField::Phone),
            "address" => Ok(ProfileField::Address),
            "email" => Ok(ProfileField::Email),
            _ => Err(UnknownName::new("profile field", s)),
        }
    }
}

/// Tenant record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TenantDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub email: Option<String>,
    pub room_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TenantDto {
    /// Form contents for this record. `fallback_email` (the login email) is
    /// used when the record carries none.
    pub fn to_profile(&self, fallback_email: Option<&str>) -> TenantProfile {
        TenantProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            email: self
                .email
                .as_deref()
                .filter(|email| !email.is_empty())
                .or(fallback_email)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = TenantProfile {
            first_name: "somchai".to_string(),
            last_name: "jaidee".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "somchai jaidee");
        assert_eq!(profile.initials(), "SJ");
        assert_eq!(TenantProfile::default().initials(), "");
    }

    #[test]
    fn test_email_fallback() {
        let now = Utc::now();
        let dto = TenantDto {
            id: Uuid::nil(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone: String::new(),
            address: String::new(),
            email: None,
            room_id: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(dto.to_profile(Some("login@example.com")).email, "login@example.com");
        assert_eq!(dto.to_profile(None).email, "");

        let with_email = TenantDto {
            email: Some("own@example.com".to_string()),
            ..dto
        };
        assert_eq!(with_email.to_profile(Some("login@example.com")).email, "own@example.com");
    }
}
