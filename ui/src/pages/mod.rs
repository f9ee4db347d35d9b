pub mod about;
pub mod admin;
pub mod category;
pub mod contact;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod reservation;
pub mod service_detail;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use category::CategoryPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use reservation::ReservationPage;
pub use service_detail::ServiceDetailPage;
