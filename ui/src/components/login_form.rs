use payloads::requests::{self, PASSWORD_MIN_LEN, is_valid_email};
use payloads::responses;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    CreateAccount,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub submit_text: AttrValue,
    pub mode: AuthMode,
    pub on_success: Callback<responses::UserProfile>,
    #[prop_or_default]
    pub show_dev_credentials: bool,
}

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 rounded-md shadow-sm \
    bg-white text-neutral-900 focus:outline-none focus:ring-2 focus:ring-orange-500 \
    focus:border-orange-500";

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let email_ref = use_node_ref();
    let full_name_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let full_name_ref = full_name_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let mode = props.mode;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = input_value(&email_ref).trim().to_string();
            let password = input_value(&password_ref);

            if email.is_empty() || password.is_empty() {
                error_message
                    .set(Some("Zadejte prosím email a heslo".to_string()));
                return;
            }

            let new_account = match mode {
                AuthMode::Login => None,
                AuthMode::CreateAccount => {
                    if !is_valid_email(&email) {
                        error_message.set(Some(
                            "Zadejte prosím platný email".to_string(),
                        ));
                        return;
                    }
                    if password != input_value(&confirm_password_ref) {
                        error_message
                            .set(Some("Hesla se neshodují".to_string()));
                        return;
                    }
                    if password.len() < PASSWORD_MIN_LEN {
                        error_message.set(Some(format!(
                            "Heslo musí mít alespoň {PASSWORD_MIN_LEN} znaků"
                        )));
                        return;
                    }
                    let full_name = input_value(&full_name_ref).trim().to_string();
                    Some(requests::CreateAccount {
                        email: email.clone(),
                        password: password.clone(),
                        full_name: (!full_name.is_empty()).then_some(full_name),
                    })
                }
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                // a new account is logged in by the api straight away
                let authenticated = match &new_account {
                    Some(account) => api_client.create_account(account).await,
                    None => {
                        api_client
                            .login(&requests::LoginCredentials {
                                email,
                                password,
                            })
                            .await
                    }
                };

                let result = match authenticated {
                    Ok(()) => api_client.user_profile().await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(profile) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state =
                                AuthState::LoggedIn(profile.clone());
                        });
                        on_success.emit(profile);
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|state| state.logout());
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let is_signup = props.mode == AuthMode::CreateAccount;

    html! {
        <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md border border-neutral-100">
            <div class="mb-8 text-center">
                <h1 class="text-2xl font-bold text-neutral-900 mb-2">{&props.title}</h1>
                <p class="text-neutral-600">{&props.description}</p>
            </div>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 border border-red-200">
                        <p class="text-sm text-red-700">{error}</p>
                    </div>
                }

                <div>
                    <label for="email" class="block text-sm font-medium text-neutral-700 mb-2">
                        {"Email"}
                    </label>
                    <input
                        ref={email_ref}
                        type="email"
                        id="email"
                        autocomplete="email"
                        required={true}
                        class={INPUT_CLASSES}
                        placeholder="vas@email.cz"
                    />
                </div>

                if is_signup {
                    <div>
                        <label for="full-name" class="block text-sm font-medium text-neutral-700 mb-2">
                            {"Jméno a příjmení"}
                        </label>
                        <input
                            ref={full_name_ref}
                            type="text"
                            id="full-name"
                            autocomplete="name"
                            class={INPUT_CLASSES}
                        />
                    </div>
                }

                <div>
                    <label for="password" class="block text-sm font-medium text-neutral-700 mb-2">
                        {"Heslo"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        autocomplete={if is_signup { "new-password" } else { "current-password" }}
                        required={true}
                        class={INPUT_CLASSES}
                    />
                </div>

                if is_signup {
                    <div>
                        <label for="confirm-password" class="block text-sm font-medium text-neutral-700 mb-2">
                            {"Heslo znovu"}
                        </label>
                        <input
                            ref={confirm_password_ref}
                            type="password"
                            id="confirm-password"
                            autocomplete="new-password"
                            required={true}
                            class={INPUT_CLASSES}
                        />
                    </div>
                }

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 rounded-md shadow-sm text-sm font-semibold text-white
                           bg-orange-600 hover:bg-orange-700 disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if *is_loading {
                        {match props.mode {
                            AuthMode::Login => "Přihlašování...",
                            AuthMode::CreateAccount => "Vytváření účtu...",
                        }}
                    } else {
                        {&props.submit_text}
                    }
                </button>
            </form>

            if props.show_dev_credentials {
                <div class="mt-6 text-center">
                    <p class="text-sm text-neutral-600">
                        {"Vývojový účet: admin@umparkour.cz / supersecret"}
                    </p>
                </div>
            }
        </div>
    }
}
