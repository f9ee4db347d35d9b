use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Hook to check the session once on startup
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            let profile = match api_client.login_check().await {
                Ok(true) => api_client.user_profile().await.ok(),
                // network errors count as logged out
                Ok(false) | Err(_) => None,
            };
            dispatch.reduce_mut(|state| match profile {
                Some(profile) => state.auth_state = AuthState::LoggedIn(profile),
                None => state.logout(),
            });
        });
    });
}
