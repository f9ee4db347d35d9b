use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::{LoginForm, login_form::AuthMode};
use crate::hooks::{use_push_route, use_title};
use crate::state::State;
use crate::utils::is_dev_mode;

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Přihlášení");
    let push_route = use_push_route();
    let mode = use_state(|| AuthMode::Login);
    let (state, _) = use_store::<State>();

    // an admin goes straight to the panel, everyone else home
    {
        let push_route = push_route.clone();
        let target = state
            .is_authenticated()
            .then(|| if state.is_admin() { Route::Admin } else { Route::Home });

        use_effect_with(target, move |target| {
            if let Some(route) = target {
                push_route.emit(route.clone());
            }
        });
    }

    let on_auth_success = {
        let push_route = push_route.clone();

        Callback::from(move |profile: responses::UserProfile| {
            push_route.emit(if profile.role.is_admin() && profile.is_active {
                Route::Admin
            } else {
                Route::Home
            });
        })
    };

    let toggle_mode = {
        let mode = mode.clone();

        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::Login => AuthMode::CreateAccount,
                AuthMode::CreateAccount => AuthMode::Login,
            });
        })
    };

    let (title, description, submit_text, toggle_text, toggle_link_text) =
        match *mode {
            AuthMode::Login => (
                "Přihlášení",
                "Přihlaste se ke svému účtu",
                "Přihlásit se",
                "Nemáte účet?",
                "Zaregistrujte se",
            ),
            AuthMode::CreateAccount => (
                "Registrace",
                "Vytvořte si účet v UM Parkour",
                "Vytvořit účet",
                "Už máte účet?",
                "Přihlaste se",
            ),
        };

    html! {
        <div class="flex items-center justify-center min-h-[60vh] px-4 py-12">
            <div class="max-w-md w-full space-y-4">
                <LoginForm
                    title={title}
                    description={description}
                    submit_text={submit_text}
                    mode={*mode}
                    on_success={on_auth_success}
                    show_dev_credentials={*mode == AuthMode::Login && is_dev_mode()}
                />

                <p class="text-center text-sm text-neutral-600">
                    {toggle_text}
                    {" "}
                    <button
                        onclick={toggle_mode}
                        class="text-orange-600 hover:text-orange-700 font-medium underline"
                    >
                        {toggle_link_text}
                    </button>
                </p>
            </div>
        </div>
    }
}
