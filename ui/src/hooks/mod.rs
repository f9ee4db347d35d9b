pub mod use_admin_table;
pub mod use_authentication;
pub mod use_fetch;
pub mod use_logout;
pub mod use_push_route;
pub mod use_title;

pub use use_admin_table::use_admin_table;
pub use use_authentication::use_authentication;
pub use use_fetch::use_fetch;
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
