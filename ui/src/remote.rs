//! The api tables behind each admin section, and the reservation sink used
//! by the public booking form.

use std::convert::Infallible;

use payloads::reservation::ReservationSink;
use payloads::sync::{CommandResult, RemoteTable};
use payloads::{
    APIClient, ContentDetails, ContentId, GalleryImageId, MembershipDetails,
    MembershipId, PriceItemDetails, PriceItemId, ReservationId, ServiceDetails,
    ServiceId, UserId, requests, responses,
};

use crate::get_api_client;

pub struct ContentTable(APIClient);
pub struct GalleryTable(APIClient);
pub struct ServicesTable(APIClient);
pub struct PriceItemsTable(APIClient);
pub struct MembershipsTable(APIClient);
pub struct ReservationsTable(APIClient);
pub struct UsersTable(APIClient);

macro_rules! connect {
    ($($table:ident),*) => {
        $(
            impl $table {
                pub fn connect() -> Self {
                    Self(get_api_client())
                }
            }
        )*
    };
}

connect!(
    ContentTable,
    GalleryTable,
    ServicesTable,
    PriceItemsTable,
    MembershipsTable,
    ReservationsTable,
    UsersTable
);

impl RemoteTable for ContentTable {
    type Record = responses::Content;
    type Draft = ContentDetails;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_content().await?)
    }

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record> {
        Ok(self.0.create_content(draft).await?)
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdateContent {
            id: record.id,
            details: ContentDetails {
                title: record.title.clone(),
                body: record.body.clone(),
            },
        };
        Ok(self.0.update_content(&details).await?)
    }

    async fn delete(&self, id: &ContentId) -> CommandResult<()> {
        Ok(self.0.delete_content(id).await?)
    }
}

impl RemoteTable for GalleryTable {
    type Record = responses::GalleryImage;
    type Draft = requests::CreateGalleryImage;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_gallery().await?)
    }

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record> {
        Ok(self.0.upload_gallery_image(draft).await?)
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdateGalleryImage {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
        };
        Ok(self.0.update_gallery_image(&details).await?)
    }

    async fn delete(&self, id: &GalleryImageId) -> CommandResult<()> {
        Ok(self.0.delete_gallery_image(id).await?)
    }
}

impl RemoteTable for ServicesTable {
    type Record = responses::Service;
    type Draft = ServiceDetails;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_services().await?)
    }

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record> {
        Ok(self.0.create_service(draft).await?)
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdateService {
            id: record.id,
            details: record.details(),
        };
        Ok(self.0.update_service(&details).await?)
    }

    async fn delete(&self, id: &ServiceId) -> CommandResult<()> {
        Ok(self.0.delete_service(id).await?)
    }
}

impl RemoteTable for PriceItemsTable {
    type Record = responses::PriceItem;
    type Draft = PriceItemDetails;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_price_items().await?)
    }

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record> {
        Ok(self.0.create_price_item(draft).await?)
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdatePriceItem {
            id: record.id,
            details: record.details(),
        };
        Ok(self.0.update_price_item(&details).await?)
    }

    async fn delete(&self, id: &PriceItemId) -> CommandResult<()> {
        Ok(self.0.delete_price_item(id).await?)
    }
}

impl RemoteTable for MembershipsTable {
    type Record = responses::Membership;
    type Draft = MembershipDetails;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_memberships().await?)
    }

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record> {
        Ok(self.0.create_membership(draft).await?)
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdateMembership {
            id: record.id,
            details: record.details(),
        };
        Ok(self.0.update_membership(&details).await?)
    }

    async fn delete(&self, id: &MembershipId) -> CommandResult<()> {
        Ok(self.0.delete_membership(id).await?)
    }
}

/// Reservations arrive through the public form, so the admin section never
/// inserts. An update changes the status only.
impl RemoteTable for ReservationsTable {
    type Record = responses::Reservation;
    type Draft = Infallible;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_reservations().await?)
    }

    async fn insert(&self, draft: &Infallible) -> CommandResult<Self::Record> {
        match *draft {}
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::SetReservationStatus {
            id: record.id,
            status: record.status,
        };
        Ok(self.0.set_reservation_status(&details).await?)
    }

    async fn delete(&self, id: &ReservationId) -> CommandResult<()> {
        Ok(self.0.delete_reservation(id).await?)
    }
}

/// Accounts are created by signing up, never from the admin panel.
impl RemoteTable for UsersTable {
    type Record = responses::UserProfile;
    type Draft = Infallible;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
        Ok(self.0.list_users().await?)
    }

    async fn insert(&self, draft: &Infallible) -> CommandResult<Self::Record> {
        match *draft {}
    }

    async fn update(
        &self,
        record: &Self::Record,
    ) -> CommandResult<Self::Record> {
        let details = requests::UpdateUser {
            user_id: record.id,
            full_name: record.full_name.clone(),
            role: record.role,
            is_active: record.is_active,
        };
        Ok(self.0.update_user(&details).await?)
    }

    async fn delete(&self, id: &UserId) -> CommandResult<()> {
        Ok(self.0.delete_user(id).await?)
    }
}

pub struct ApiReservationSink(APIClient);

impl ApiReservationSink {
    pub fn connect() -> Self {
        Self(get_api_client())
    }
}

impl ReservationSink for ApiReservationSink {
    async fn submit(
        &self,
        reservation: &requests::SubmitReservation,
    ) -> CommandResult<()> {
        let id = self.0.submit_reservation(reservation).await?;
        tracing::debug!(%id, "reservation stored");
        Ok(())
    }
}
