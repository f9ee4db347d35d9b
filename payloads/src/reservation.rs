//! Reservation form state and submission.
//!
//! [`ReservationForm`] owns the draft while the visitor fills it in, derives
//! the bookable slots for the chosen date from the [`AvailabilityPolicy`] and
//! hands a validated [`SubmitReservation`] to a [`ReservationSink`].

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::availability::{self, AvailabilityPolicy};
use crate::catalog::{DEFAULT_CATEGORY, ServiceCatalog};
use crate::requests::{
    CUSTOMER_NAME_MIN_LEN, NOTES_MAX_LEN, PHONE_MAX_LEN, PHONE_MIN_LEN,
    SubmitReservation, is_valid_email,
};
use crate::sync::CommandResult;

pub const NAME_TOO_SHORT: &str = "Jméno musí obsahovat alespoň 2 znaky";
pub const INVALID_EMAIL: &str = "Prosím zadejte platný email";
pub const INVALID_PHONE: &str = "Prosím zadejte platné telefonní číslo";
pub const SERVICE_REQUIRED: &str = "Prosím vyberte službu";
pub const DATE_REQUIRED: &str = "Prosím vyberte datum";
pub const TIME_REQUIRED: &str = "Prosím vyberte čas";
pub const NOTES_TOO_LONG: &str = "Poznámka je příliš dlouhá";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Service,
    Date,
    Time,
    Name,
    Email,
    Phone,
    Notes,
}

/// Inline validation messages keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// A booking request that has not been submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationDraft {
    pub category: String,
    pub service: Option<String>,
    pub date: Option<Date>,
    pub time: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl ReservationDraft {
    /// Check every field, returning the request on success or one message
    /// per failing field.
    pub fn validate(
        &self,
        catalog: &ServiceCatalog,
        policy: &AvailabilityPolicy,
        today: Date,
    ) -> Result<SubmitReservation, FieldErrors> {
        let mut errors = FieldErrors::default();

        let service = self
            .service
            .as_deref()
            .filter(|service| catalog.contains(&self.category, service));
        if service.is_none() {
            errors.insert(Field::Service, SERVICE_REQUIRED);
        }

        let date = self
            .date
            .filter(|date| availability::is_selectable(*date, today));
        if date.is_none() {
            errors.insert(Field::Date, DATE_REQUIRED);
        }

        let time = match (date, self.time.as_deref()) {
            (Some(date), Some(time)) if policy.is_available(date, time) => {
                Some(time)
            }
            (None, Some(time)) => Some(time),
            _ => None,
        };
        if time.is_none() {
            errors.insert(Field::Time, TIME_REQUIRED);
        }

        let name = self.name.trim();
        if name.chars().count() < CUSTOMER_NAME_MIN_LEN {
            errors.insert(Field::Name, NAME_TOO_SHORT);
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.insert(Field::Email, INVALID_EMAIL);
        }

        let phone = self.phone.trim();
        if phone.chars().count() < PHONE_MIN_LEN || phone.len() > PHONE_MAX_LEN
        {
            errors.insert(Field::Phone, INVALID_PHONE);
        }

        let notes = self.notes.trim();
        if notes.len() > NOTES_MAX_LEN {
            errors.insert(Field::Notes, NOTES_TOO_LONG);
        }

        match (service, date, time) {
            (Some(service), Some(date), Some(time)) if errors.is_empty() => {
                Ok(SubmitReservation {
                    category: self.category.clone(),
                    service: service.to_string(),
                    date,
                    time: time.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<SubmitReservation> for ReservationDraft {
    fn from(request: SubmitReservation) -> Self {
        ReservationDraft {
            category: request.category,
            service: Some(request.service),
            date: Some(request.date),
            time: Some(request.time),
            name: request.name,
            email: request.email,
            phone: request.phone,
            notes: request.notes.unwrap_or_default(),
        }
    }
}

/// Where validated reservations go.
#[allow(async_fn_in_trait)]
pub trait ReservationSink {
    async fn submit(&self, reservation: &SubmitReservation)
    -> CommandResult<()>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Formulář obsahuje chyby")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Rejected(#[from] crate::sync::CommandError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationForm {
    catalog: ServiceCatalog,
    policy: AvailabilityPolicy,
    draft: ReservationDraft,
    errors: FieldErrors,
    available_times: Vec<String>,
}

impl ReservationForm {
    pub fn new(catalog: ServiceCatalog, policy: AvailabilityPolicy) -> Self {
        Self::from_query(catalog, policy, None, None)
    }

    /// Build a form preselected from `?type=<category>&service=<service>`.
    ///
    /// An unknown category falls back to the default one, and a service
    /// outside the chosen category is ignored.
    pub fn from_query(
        catalog: ServiceCatalog,
        policy: AvailabilityPolicy,
        category: Option<&str>,
        service: Option<&str>,
    ) -> Self {
        let category = category
            .filter(|key| catalog.category(key).is_some())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();
        let service = service
            .filter(|service| catalog.contains(&category, service))
            .map(str::to_string);
        Self {
            catalog,
            policy,
            draft: ReservationDraft {
                category,
                service,
                ..Default::default()
            },
            errors: FieldErrors::default(),
            available_times: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Slots for the selected date, empty until a date is chosen.
    pub fn available_times(&self) -> &[String] {
        &self.available_times
    }

    /// Switch category. The selected service is kept only if it belongs to
    /// the new category. Unknown keys are ignored.
    pub fn select_category(&mut self, key: &str) -> bool {
        if self.catalog.category(key).is_none() {
            return false;
        }
        self.draft.category = key.to_string();
        if let Some(service) = &self.draft.service
            && !self.catalog.contains(key, service)
        {
            self.draft.service = None;
        }
        true
    }

    pub fn select_service(&mut self, service: &str) -> bool {
        if !self.catalog.contains(&self.draft.category, service) {
            return false;
        }
        self.draft.service = Some(service.to_string());
        self.errors.clear(Field::Service);
        true
    }

    /// Choose a date and return the slots that can be booked on it. The
    /// selected time is cleared and has to be picked again.
    pub fn select_date(&mut self, date: Date) -> &[String] {
        self.draft.date = Some(date);
        self.draft.time = None;
        self.available_times = self.policy.available_slots(date);
        self.errors.clear(Field::Date);
        &self.available_times
    }

    /// Pick one of the offered slots for the selected date.
    pub fn select_time(&mut self, slot: &str) -> bool {
        if !self.available_times.iter().any(|t| t == slot) {
            return false;
        }
        self.draft.time = Some(slot.to_string());
        self.errors.clear(Field::Time);
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.clear(Field::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
        self.errors.clear(Field::Email);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
        self.errors.clear(Field::Phone);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
        self.errors.clear(Field::Notes);
    }

    /// Validate the draft, remembering the field errors for display.
    pub fn validate(
        &mut self,
        today: Date,
    ) -> Result<SubmitReservation, FieldErrors> {
        let result = self.draft.validate(&self.catalog, &self.policy, today);
        self.errors = match &result {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors.clone(),
        };
        result
    }

    /// Validate and hand the reservation to `sink`. The sink is not called
    /// when validation fails. On success the form is cleared except for the
    /// category.
    pub async fn submit<S: ReservationSink>(
        &mut self,
        today: Date,
        sink: &S,
    ) -> Result<SubmitReservation, SubmitError> {
        let reservation = self.validate(today).map_err(SubmitError::Invalid)?;
        tracing::debug!(?reservation, "submitting reservation");
        sink.submit(&reservation).await?;
        self.reset();
        Ok(reservation)
    }

    pub fn reset(&mut self) {
        self.draft = ReservationDraft {
            category: std::mem::take(&mut self.draft.category),
            ..Default::default()
        };
        self.errors = FieldErrors::default();
        self.available_times.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{CommandError, ErrorKind};
    use jiff::civil::date;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<SubmitReservation>>,
        fail: bool,
    }

    impl ReservationSink for RecordingSink {
        async fn submit(
            &self,
            reservation: &SubmitReservation,
        ) -> CommandResult<()> {
            self.received.borrow_mut().push(reservation.clone());
            if self.fail {
                return Err(CommandError::new(ErrorKind::Network, "offline"));
            }
            Ok(())
        }
    }

    fn today() -> Date {
        date(2025, 1, 1)
    }

    fn tomorrow() -> Date {
        today().tomorrow().unwrap()
    }

    fn filled_form() -> ReservationForm {
        let mut form = ReservationForm::new(
            ServiceCatalog::standard(),
            AvailabilityPolicy::standard(),
        );
        assert!(form.select_service("parkour"));
        form.select_date(tomorrow());
        assert!(form.select_time("09:00"));
        form.set_name("Jan Novák");
        form.set_email("jan@example.cz");
        form.set_phone("+420123456789");
        form
    }

    #[tokio::test]
    async fn valid_submission_reaches_sink() {
        let sink = RecordingSink::default();
        let mut form = filled_form();

        let submitted = form.submit(today(), &sink).await.unwrap();

        assert_eq!(submitted.service, "parkour");
        assert_eq!(submitted.category, "sport");
        assert_eq!(submitted.date, tomorrow());
        assert_eq!(submitted.time, "09:00");
        assert_eq!(submitted.notes, None);
        assert_eq!(sink.received.borrow().as_slice(), [submitted]);
        // the form is cleared for the next booking
        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().category, "sport");
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn missing_name_blocks_submission() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.set_name("");

        let result = form.submit(today(), &sink).await;

        let Err(SubmitError::Invalid(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get(Field::Name), Some(NAME_TOO_SHORT));
        assert_eq!(errors.len(), 1);
        assert!(sink.received.borrow().is_empty());
        assert_eq!(form.errors().get(Field::Name), Some(NAME_TOO_SHORT));
    }

    #[tokio::test]
    async fn invalid_email_blocks_submission() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.set_email("jan.example.cz");

        let result = form.submit(today(), &sink).await;

        let Err(SubmitError::Invalid(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
        assert!(sink.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_keeps_draft() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut form = filled_form();

        let result = form.submit(today(), &sink).await;

        assert!(matches!(result, Err(SubmitError::Rejected(_))));
        assert_eq!(form.draft().name, "Jan Novák");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = ReservationForm::new(
            ServiceCatalog::standard(),
            AvailabilityPolicy::standard(),
        );
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get(Field::Service), Some(SERVICE_REQUIRED));
        assert_eq!(errors.get(Field::Date), Some(DATE_REQUIRED));
        assert_eq!(errors.get(Field::Time), Some(TIME_REQUIRED));
        assert_eq!(errors.get(Field::Name), Some(NAME_TOO_SHORT));
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(Field::Phone), Some(INVALID_PHONE));
        assert_eq!(errors.get(Field::Notes), None);
    }

    #[test]
    fn past_dates_are_rejected() {
        let mut form = filled_form();
        form.select_date(today());
        form.select_time("09:00");
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get(Field::Date), Some(DATE_REQUIRED));
    }

    #[test]
    fn submitted_request_revalidates_against_busy_slots() {
        let catalog = ServiceCatalog::standard();
        let policy = AvailabilityPolicy::standard();
        let mut request = filled_form().validate(today()).unwrap();
        request.time = "14:00".into();

        let errors = ReservationDraft::from(request)
            .validate(&catalog, &policy, today())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), TIME_REQUIRED);
    }

    #[test]
    fn changing_the_date_clears_the_time() {
        let mut form = filled_form();
        form.select_date(tomorrow().tomorrow().unwrap());
        assert_eq!(form.draft().time, None);
    }

    #[test]
    fn busy_time_cannot_be_selected() {
        let mut form = filled_form();
        assert!(!form.select_time("10:00"));
        assert_eq!(form.draft().time.as_deref(), Some("09:00"));
    }

    #[test]
    fn time_requires_a_date_first() {
        let mut form = ReservationForm::new(
            ServiceCatalog::standard(),
            AvailabilityPolicy::standard(),
        );
        assert!(form.available_times().is_empty());
        assert!(!form.select_time("09:00"));
        assert_eq!(form.select_date(tomorrow()).len(), 7);
        assert!(form.select_time("09:00"));
    }

    #[test]
    fn query_preselects_category_and_service() {
        let catalog = ServiceCatalog::standard();
        let policy = AvailabilityPolicy::standard();

        let form = ReservationForm::from_query(
            catalog,
            policy.clone(),
            Some("zabava"),
            Some("narozeniny"),
        );
        assert_eq!(form.draft().category, "zabava");
        assert_eq!(form.draft().service.as_deref(), Some("narozeniny"));

        let form = ReservationForm::from_query(
            catalog,
            policy.clone(),
            Some("neexistuje"),
            Some("narozeniny"),
        );
        assert_eq!(form.draft().category, DEFAULT_CATEGORY);
        assert_eq!(form.draft().service, None);
    }

    #[test]
    fn changing_category_drops_foreign_service() {
        let mut form = filled_form();
        assert!(form.select_category("performance"));
        assert_eq!(form.draft().service, None);
        assert!(!form.select_category("neexistuje"));
        assert_eq!(form.draft().category, "performance");
    }
}
