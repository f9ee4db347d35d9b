use crate::{
    ContentId, GalleryImageId, MembershipId, PriceItemId, ReservationId,
    ReservationStatus, Role, ServiceId, UserId,
};
use jiff::Timestamp;
use jiff::civil::Date;
#[cfg(feature = "use-sqlx")]
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTs};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profile of the logged in user, or of any user in the admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Bez jména")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub body: String,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

/// Gallery image metadata. The bytes are fetched from
/// [`crate::APIClient::image_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub title: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: Decimal,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

impl Service {
    pub fn details(&self) -> crate::ServiceDetails {
        crate::ServiceDetails {
            name: self.name.clone(),
            description: self.description.clone(),
            duration_minutes: self.duration_minutes,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct PriceItem {
    pub id: PriceItemId,
    pub title: String,
    pub price: Decimal,
    pub duration: String,
    pub description: String,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

impl PriceItem {
    pub fn details(&self) -> crate::PriceItemDetails {
        crate::PriceItemDetails {
            title: self.title.clone(),
            price: self.price,
            duration: self.duration.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Membership {
    pub id: MembershipId,
    pub name: String,
    pub price: Decimal,
    pub period: String,
    pub benefits: Vec<String>,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

impl Membership {
    pub fn details(&self) -> crate::MembershipDetails {
        crate::MembershipDetails {
            name: self.name.clone(),
            price: self.price,
            period: self.period.clone(),
            benefits: self.benefits.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub service: String,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxDate"))]
    pub reservation_date: Date,
    pub reservation_time: String,
    pub notes: Option<String>,
    pub status: ReservationStatus,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub updated_at: Timestamp,
}

/// Time slots that can be booked on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub date: Date,
    pub times: Vec<String>,
    /// Cosmetic flag for calendar highlighting; does not restrict booking.
    pub is_sunday: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub key: String,
    pub title: String,
    pub services: Vec<CatalogService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogService {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn display_name_falls_back_for_missing_or_blank_names() {
        let mut profile = UserProfile {
            id: UserId(Uuid::new_v4()),
            email: "jan@example.cz".into(),
            full_name: None,
            role: Role::User,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
        };
        assert_eq!(profile.display_name(), "Bez jména");
        profile.full_name = Some("  ".into());
        assert_eq!(profile.display_name(), "Bez jména");
        profile.full_name = Some("Jan Novák".into());
        assert_eq!(profile.display_name(), "Jan Novák");
    }
}
