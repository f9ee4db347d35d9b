use crate::{
    ContentDetails, ContentId, GalleryImageId, LayoutSettings,
    MembershipDetails, MembershipId, PriceItemDetails, PriceItemId,
    ReservationId, ReservationStatus, Role, ServiceDetails, ServiceId, UserId,
};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const FULL_NAME_MAX_LEN: usize = 255;
pub const CUSTOMER_NAME_MIN_LEN: usize = 2;
pub const PHONE_MIN_LEN: usize = 9;
pub const PHONE_MAX_LEN: usize = 32;
pub const NOTES_MAX_LEN: usize = 2000;
pub const TITLE_MAX_LEN: usize = 255;
pub const BODY_MAX_LEN: usize = 20_000;
pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const BENEFIT_MAX_LEN: usize = 255;

/// Why a single field was rejected. The payload is the field name; the
/// message uses its Czech label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Pole {} nesmí být prázdné", field_label(.0))]
    Empty(&'static str),
    #[error("Pole {} je příliš dlouhé", field_label(.0))]
    TooLong(&'static str),
    #[error("Pole {} nesmí být záporné", field_label(.0))]
    Negative(&'static str),
}

fn field_label(field: &str) -> &str {
    match field {
        "title" | "name" => "Název",
        "body" => "Text",
        "description" => "Popis",
        "duration" => "Délka",
        "price" => "Cena",
        "period" => "Období",
        "benefit" => "Výhoda",
        "phone" => "Telefon",
        "email" => "E-mail",
        "address" => "Adresa",
        "url" => "Odkaz",
        other => other,
    }
}

/// Loose email shape check: `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace)
    {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn require(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty(field));
    }
    if value.len() > max_len {
        return Err(FieldError::TooLong(field));
    }
    Ok(())
}

impl ContentDetails {
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.title, "title", TITLE_MAX_LEN)?;
        if self.body.len() > BODY_MAX_LEN {
            return Err(FieldError::TooLong("body"));
        }
        Ok(())
    }
}

impl ServiceDetails {
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.name, "name", TITLE_MAX_LEN)?;
        if self.description.len() > DESCRIPTION_MAX_LEN {
            return Err(FieldError::TooLong("description"));
        }
        if self.duration_minutes < 0 {
            return Err(FieldError::Negative("duration"));
        }
        if self.price.is_sign_negative() {
            return Err(FieldError::Negative("price"));
        }
        Ok(())
    }
}

impl PriceItemDetails {
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.title, "title", TITLE_MAX_LEN)?;
        if self.duration.len() > TITLE_MAX_LEN {
            return Err(FieldError::TooLong("duration"));
        }
        if self.description.len() > DESCRIPTION_MAX_LEN {
            return Err(FieldError::TooLong("description"));
        }
        if self.price.is_sign_negative() {
            return Err(FieldError::Negative("price"));
        }
        Ok(())
    }
}

impl MembershipDetails {
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.name, "name", TITLE_MAX_LEN)?;
        if self.period.len() > TITLE_MAX_LEN {
            return Err(FieldError::TooLong("period"));
        }
        if self.price.is_sign_negative() {
            return Err(FieldError::Negative("price"));
        }
        for benefit in &self.benefits {
            require(benefit, "benefit", BENEFIT_MAX_LEN)?;
        }
        Ok(())
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.contact_phone, "phone", PHONE_MAX_LEN)?;
        require(&self.contact_email, "email", EMAIL_MAX_LEN)?;
        require(&self.address, "address", TITLE_MAX_LEN)?;
        for url in [&self.facebook_url, &self.instagram_url, &self.youtube_url]
            .into_iter()
            .flatten()
        {
            if url.len() > TITLE_MAX_LEN {
                return Err(FieldError::TooLong("url"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// A booking intent from the public reservation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReservation {
    pub category: String,
    pub service: String,
    pub date: Date,
    /// Slot label, e.g. "09:00".
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Date,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContent {
    pub id: ContentId,
    pub details: ContentDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGalleryImage {
    pub title: String,
    pub description: Option<String>,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGalleryImage {
    pub id: GalleryImageId,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateService {
    pub id: ServiceId,
    pub details: ServiceDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePriceItem {
    pub id: PriceItemId,
    pub details: PriceItemDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMembership {
    pub id: MembershipId,
    pub details: MembershipDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetReservationStatus {
    pub id: ReservationId,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jan@example.cz"));
        assert!(is_valid_email("jan.novak+rez@sub.example.cz"));
        assert!(!is_valid_email("jan"));
        assert!(!is_valid_email("jan@example"));
        assert!(!is_valid_email("@example.cz"));
        assert!(!is_valid_email("jan@@example.cz"));
        assert!(!is_valid_email("jan novak@example.cz"));
        assert!(!is_valid_email("jan@.cz"));
    }

    #[test]
    fn content_requires_title() {
        let details = ContentDetails {
            title: "  ".into(),
            body: "Text".into(),
        };
        assert_eq!(details.validate(), Err(FieldError::Empty("title")));
    }

    #[test]
    fn field_errors_read_in_czech() {
        assert_eq!(
            FieldError::Empty("title").to_string(),
            "Pole Název nesmí být prázdné"
        );
        assert_eq!(
            FieldError::TooLong("url").to_string(),
            "Pole Odkaz je příliš dlouhé"
        );
        assert_eq!(
            FieldError::Negative("price").to_string(),
            "Pole Cena nesmí být záporné"
        );
    }
}
