use payloads::responses;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // managed by use_authentication, the login form and use_logout
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    /// Logged in with an active admin account.
    pub fn is_admin(&self) -> bool {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => {
                profile.role.is_admin() && profile.is_active
            }
            _ => false,
        }
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
