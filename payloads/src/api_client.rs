use crate::{
    ContentDetails, ContentId, GalleryImageId, LayoutSettings,
    MembershipDetails, MembershipId, PriceItemDetails, PriceItemId,
    ReservationId, ServiceDetails, ServiceId, UserId, requests, responses,
};
use jiff::civil::Date;
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<(), ClientError> {
        let response = self.post("create_account", details).await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", &details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get the current user's profile information.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user_profile").await?;
        ok_body(response).await
    }

    /// The service catalog as served by the api.
    pub async fn get_catalog(
        &self,
    ) -> Result<Vec<responses::CatalogCategory>, ClientError> {
        let response = self.empty_get("catalog").await?;
        ok_body(response).await
    }

    pub async fn get_availability(
        &self,
        date: Date,
    ) -> Result<responses::Availability, ClientError> {
        let response = self.empty_get(&format!("availability?date={date}")).await?;
        ok_body(response).await
    }

    /// Send a booking request from the public reservation form.
    pub async fn submit_reservation(
        &self,
        details: &requests::SubmitReservation,
    ) -> Result<ReservationId, ClientError> {
        let response = self.post("submit_reservation", details).await?;
        ok_body(response).await
    }

    pub async fn get_layout(&self) -> Result<LayoutSettings, ClientError> {
        let response = self.empty_get("layout").await?;
        ok_body(response).await
    }

    /// Update footer contact details and social links (admin only).
    pub async fn update_layout(
        &self,
        details: &LayoutSettings,
    ) -> Result<LayoutSettings, ClientError> {
        let response = self.post("update_layout", details).await?;
        ok_body(response).await
    }

    pub async fn list_content(
        &self,
    ) -> Result<Vec<responses::Content>, ClientError> {
        let response = self.empty_get("content").await?;
        ok_body(response).await
    }

    pub async fn create_content(
        &self,
        details: &ContentDetails,
    ) -> Result<responses::Content, ClientError> {
        let response = self.post("create_content", details).await?;
        ok_body(response).await
    }

    pub async fn update_content(
        &self,
        details: &requests::UpdateContent,
    ) -> Result<responses::Content, ClientError> {
        let response = self.post("update_content", details).await?;
        ok_body(response).await
    }

    pub async fn delete_content(
        &self,
        content_id: &ContentId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_content", content_id).await?;
        ok_empty(response).await
    }

    pub async fn list_gallery(
        &self,
    ) -> Result<Vec<responses::GalleryImage>, ClientError> {
        let response = self.empty_get("gallery").await?;
        ok_body(response).await
    }

    /// Public URL of a gallery image's bytes, usable as an `<img>` source.
    pub fn image_url(&self, image_id: &GalleryImageId) -> String {
        self.format_url(&format!("images/{image_id}"))
    }

    pub async fn get_image_data(
        &self,
        image_id: &GalleryImageId,
    ) -> Result<Vec<u8>, ClientError> {
        let response = self.empty_get(&format!("images/{image_id}")).await?;
        if !response.status().is_success() {
            return Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            ));
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn upload_gallery_image(
        &self,
        details: &requests::CreateGalleryImage,
    ) -> Result<responses::GalleryImage, ClientError> {
        let response = self.post("upload_gallery_image", details).await?;
        ok_body(response).await
    }

    pub async fn update_gallery_image(
        &self,
        details: &requests::UpdateGalleryImage,
    ) -> Result<responses::GalleryImage, ClientError> {
        let response = self.post("update_gallery_image", details).await?;
        ok_body(response).await
    }

    pub async fn delete_gallery_image(
        &self,
        image_id: &GalleryImageId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_gallery_image", image_id).await?;
        ok_empty(response).await
    }

    pub async fn list_services(
        &self,
    ) -> Result<Vec<responses::Service>, ClientError> {
        let response = self.empty_get("services").await?;
        ok_body(response).await
    }

    pub async fn create_service(
        &self,
        details: &ServiceDetails,
    ) -> Result<responses::Service, ClientError> {
        let response = self.post("create_service", details).await?;
        ok_body(response).await
    }

    pub async fn update_service(
        &self,
        details: &requests::UpdateService,
    ) -> Result<responses::Service, ClientError> {
        let response = self.post("update_service", details).await?;
        ok_body(response).await
    }

    pub async fn delete_service(
        &self,
        service_id: &ServiceId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_service", service_id).await?;
        ok_empty(response).await
    }

    pub async fn list_price_items(
        &self,
    ) -> Result<Vec<responses::PriceItem>, ClientError> {
        let response = self.empty_get("price_items").await?;
        ok_body(response).await
    }

    pub async fn create_price_item(
        &self,
        details: &PriceItemDetails,
    ) -> Result<responses::PriceItem, ClientError> {
        let response = self.post("create_price_item", details).await?;
        ok_body(response).await
    }

    pub async fn update_price_item(
        &self,
        details: &requests::UpdatePriceItem,
    ) -> Result<responses::PriceItem, ClientError> {
        let response = self.post("update_price_item", details).await?;
        ok_body(response).await
    }

    pub async fn delete_price_item(
        &self,
        price_item_id: &PriceItemId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_price_item", price_item_id).await?;
        ok_empty(response).await
    }

    pub async fn list_memberships(
        &self,
    ) -> Result<Vec<responses::Membership>, ClientError> {
        let response = self.empty_get("memberships").await?;
        ok_body(response).await
    }

    pub async fn create_membership(
        &self,
        details: &MembershipDetails,
    ) -> Result<responses::Membership, ClientError> {
        let response = self.post("create_membership", details).await?;
        ok_body(response).await
    }

    pub async fn update_membership(
        &self,
        details: &requests::UpdateMembership,
    ) -> Result<responses::Membership, ClientError> {
        let response = self.post("update_membership", details).await?;
        ok_body(response).await
    }

    pub async fn delete_membership(
        &self,
        membership_id: &MembershipId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_membership", membership_id).await?;
        ok_empty(response).await
    }

    /// All reservations ordered by date and time (admin only).
    pub async fn list_reservations(
        &self,
    ) -> Result<Vec<responses::Reservation>, ClientError> {
        let response = self.empty_get("reservations").await?;
        ok_body(response).await
    }

    /// Confirm or cancel a pending reservation (admin only).
    pub async fn set_reservation_status(
        &self,
        details: &requests::SetReservationStatus,
    ) -> Result<responses::Reservation, ClientError> {
        let response = self.post("set_reservation_status", details).await?;
        ok_body(response).await
    }

    pub async fn delete_reservation(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_reservation", reservation_id).await?;
        ok_empty(response).await
    }

    /// All accounts, newest first (admin only).
    pub async fn list_users(
        &self,
    ) -> Result<Vec<responses::UserProfile>, ClientError> {
        let response = self.empty_get("users").await?;
        ok_body(response).await
    }

    /// Change another user's name, role or active flag (admin only).
    pub async fn update_user(
        &self,
        details: &requests::UpdateUser,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.post("update_user", details).await?;
        ok_body(response).await
    }

    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), ClientError> {
        let response = self.post("delete_user", user_id).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
