pub mod api_client;
pub mod availability;
pub mod catalog;
pub mod gallery;
pub mod requests;
pub mod reservation;
pub mod responses;
pub mod sync;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted size of an uploaded gallery image, in bytes.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct UserId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct ContentId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct GalleryImageId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct ServiceId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct PriceItemId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct MembershipId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct ReservationId(pub Uuid);

/// Account role. Only admins may use the admin panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Default,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    feature = "use-sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "user_role", rename_all = "snake_case")
)]
pub enum Role {
    #[display("admin")]
    Admin,
    #[default]
    #[display("user")]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Czech label shown in the admin panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrátor",
            Self::User => "Uživatel",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Default,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    feature = "use-sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "reservation_status", rename_all = "snake_case")
)]
pub enum ReservationStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("confirmed")]
    Confirmed,
    #[display("cancelled")]
    Cancelled,
}

impl ReservationStatus {
    /// Reservations are decided once: only a pending reservation may be
    /// confirmed or cancelled.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed) | (Self::Pending, Self::Cancelled)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Čeká na potvrzení",
            Self::Confirmed => "Potvrzeno",
            Self::Cancelled => "Zrušeno",
        }
    }
}

/// Editable fields of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetails {
    pub title: String,
    /// Markdown body.
    pub body: String,
}

/// Editable fields of a bookable service offered by the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    /// Price in CZK.
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceItemDetails {
    pub title: String,
    pub price: Decimal,
    /// Free-form duration, e.g. "2 hodiny".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDetails {
    pub name: String,
    pub price: Decimal,
    /// Billing period, e.g. "měsíc".
    pub period: String,
    pub benefits: Vec<String>,
}

impl MembershipDetails {
    /// Append a benefit after trimming it. Empty benefits are rejected.
    pub fn add_benefit(
        &mut self,
        benefit: &str,
    ) -> Result<(), requests::FieldError> {
        let benefit = benefit.trim();
        if benefit.is_empty() {
            return Err(requests::FieldError::Empty("benefit"));
        }
        if benefit.len() > requests::BENEFIT_MAX_LEN {
            return Err(requests::FieldError::TooLong("benefit"));
        }
        self.benefits.push(benefit.to_string());
        Ok(())
    }

    /// Remove the benefit at `index`, returning it if it existed.
    pub fn remove_benefit(&mut self, index: usize) -> Option<String> {
        (index < self.benefits.len()).then(|| self.benefits.remove(index))
    }
}

/// Contact details and social links shown in the footer and on the contact
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct LayoutSettings {
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn membership() -> MembershipDetails {
        MembershipDetails {
            name: "Měsíční členství".into(),
            price: dec!(1200),
            period: "měsíc".into(),
            benefits: vec!["Neomezený vstup".into()],
        }
    }

    #[test]
    fn benefits_are_trimmed_and_empty_ones_rejected() {
        let mut details = membership();
        details.add_benefit("  Osobní skříňka ").unwrap();
        assert_eq!(details.benefits, vec!["Neomezený vstup", "Osobní skříňka"]);

        assert_eq!(
            details.add_benefit("   "),
            Err(requests::FieldError::Empty("benefit"))
        );
        assert_eq!(details.benefits.len(), 2);
    }

    #[test]
    fn remove_benefit_out_of_range_is_noop() {
        let mut details = membership();
        assert_eq!(details.remove_benefit(3), None);
        assert_eq!(details.remove_benefit(0).as_deref(), Some("Neomezený vstup"));
        assert!(details.benefits.is_empty());
    }

    #[test]
    fn only_pending_reservations_change_status() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Pending.can_transition_to(Pending));
    }
}
