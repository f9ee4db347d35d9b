use crate::{Route, State};
use yew::prelude::*;
use yewdux::prelude::*;

use super::use_push_route;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();

        yew::platform::spawn_local(async move {
            let api_client = crate::get_api_client();
            if let Err(e) = api_client.logout().await {
                tracing::warn!("logout failed: {e}");
            }

            dispatch.reduce_mut(|state| state.logout());
            push_route.emit(Route::Home);
        });
    })
}
