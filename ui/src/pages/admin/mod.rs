//! The admin panel. Every section except Layout edits one remote table
//! through [`crate::hooks::use_admin_table`].

mod content;
mod gallery;
mod layout;
mod pricing;
mod reservations;
mod services;
mod users;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{LoginForm, login_form::AuthMode};
use crate::hooks::use_title;
use crate::{AuthState, State};

pub(crate) const INPUT: &str = "w-full px-3 py-2 text-sm border border-neutral-300 rounded-md \
    bg-white text-neutral-900 focus:outline-none focus:ring-2 focus:ring-orange-500 \
    disabled:opacity-50";
pub(crate) const LABEL: &str = "block text-sm font-medium text-neutral-700 mb-1";
pub(crate) const CARD: &str = "bg-white rounded-lg shadow-sm border border-neutral-200 p-4";
pub(crate) const PRIMARY_BUTTON: &str = "px-4 py-2 rounded-md bg-orange-600 text-white text-sm \
    font-semibold hover:bg-orange-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub(crate) const SECONDARY_BUTTON: &str = "px-4 py-2 rounded-md border border-neutral-300 \
    text-neutral-700 text-sm hover:bg-neutral-50 disabled:opacity-50";
pub(crate) const DANGER_BUTTON: &str = "px-3 py-1.5 rounded-md text-sm text-red-600 \
    hover:bg-red-50 disabled:opacity-50";

/// Labelled single-line input reporting its whole value on every keystroke.
pub(crate) fn text_input(
    label: &'static str,
    value: &str,
    on_change: Callback<String>,
) -> Html {
    let oninput = on_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });
    html! {
        <div>
            <label class={LABEL}>{label}</label>
            <input class={INPUT} value={value.to_string()} {oninput} />
        </div>
    }
}

pub(crate) fn text_area(
    label: &'static str,
    value: &str,
    rows: u32,
    on_change: Callback<String>,
) -> Html {
    let oninput = on_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlTextAreaElement>().value()
    });
    html! {
        <div>
            <label class={LABEL}>{label}</label>
            <textarea class={INPUT} rows={rows.to_string()} value={value.to_string()} {oninput} />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Content,
    Gallery,
    Services,
    Pricing,
    Reservations,
    Users,
    Layout,
}

impl Section {
    const ALL: [Section; 7] = [
        Section::Reservations,
        Section::Content,
        Section::Gallery,
        Section::Services,
        Section::Pricing,
        Section::Users,
        Section::Layout,
    ];

    fn label(self) -> &'static str {
        match self {
            Section::Content => "Obsah",
            Section::Gallery => "Galerie",
            Section::Services => "Služby",
            Section::Pricing => "Ceník",
            Section::Reservations => "Rezervace",
            Section::Users => "Uživatelé",
            Section::Layout => "Kontakty a odkazy",
        }
    }
}

#[function_component]
pub fn AdminPage() -> Html {
    use_title("Administrace");
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => html! {
            <div class="text-center py-24">
                <p class="text-neutral-600">{"Načítání..."}</p>
            </div>
        },
        AuthState::LoggedOut => html! {
            <div class="flex items-center justify-center min-h-[60vh] px-4 py-12">
                <LoginForm
                    title="Administrace"
                    description="Přihlaste se administrátorským účtem"
                    submit_text="Přihlásit se"
                    mode={AuthMode::Login}
                    on_success={Callback::noop()}
                    show_dev_credentials={crate::utils::is_dev_mode()}
                />
            </div>
        },
        AuthState::LoggedIn(_) if !state.is_admin() => html! {
            <div class="max-w-md mx-auto text-center py-24">
                <h1 class="text-2xl font-bold text-neutral-900">{"Přístup odepřen"}</h1>
                <p class="mt-2 text-neutral-600">
                    {"Do administrace mají přístup pouze aktivní administrátoři."}
                </p>
            </div>
        },
        AuthState::LoggedIn(_) => html! { <AdminPanel /> },
    }
}

#[function_component]
fn AdminPanel() -> Html {
    let section = use_state(|| Section::Reservations);

    let body = match *section {
        Section::Content => html! { <content::ContentSection /> },
        Section::Gallery => html! { <gallery::GallerySection /> },
        Section::Services => html! { <services::ServicesSection /> },
        Section::Pricing => html! { <pricing::PricingSection /> },
        Section::Reservations => {
            html! { <reservations::ReservationsSection /> }
        }
        Section::Users => html! { <users::UsersSection /> },
        Section::Layout => html! { <layout::LayoutSection /> },
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-neutral-900 mb-6">{"Administrace"}</h1>
            <nav class="flex flex-wrap gap-2 border-b border-neutral-200 mb-8">
                {for Section::ALL.into_iter().map(|tab| {
                    let onclick = {
                        let section = section.clone();
                        Callback::from(move |_: MouseEvent| section.set(tab))
                    };
                    html! {
                        <button
                            {onclick}
                            class={classes!(
                                "px-4", "py-2", "-mb-px", "text-sm", "font-medium", "border-b-2",
                                if *section == tab {
                                    "border-orange-600 text-orange-600"
                                } else {
                                    "border-transparent text-neutral-600 hover:text-neutral-900"
                                }
                            )}
                        >
                            {tab.label()}
                        </button>
                    }
                })}
            </nav>
            {body}
        </div>
    }
}
