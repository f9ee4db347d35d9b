use payloads::catalog::ServiceCatalog;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{Route, State};

const NAV_LINK: &str = "text-sm font-medium text-neutral-700 hover:text-orange-600 transition-colors";

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();
    let on_logout = use_logout();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = html! {
        <>
            <Link<Route> to={Route::Home} classes={NAV_LINK}>{"Domů"}</Link<Route>>
            {for catalog.categories().iter().map(|category| html! {
                <Link<Route>
                    to={Route::Category { category_id: category.key.to_string() }}
                    classes={NAV_LINK}
                >
                    {category.title}
                </Link<Route>>
            })}
            <Link<Route> to={Route::Pricing} classes={NAV_LINK}>{"Ceník"}</Link<Route>>
            <Link<Route> to={Route::About} classes={NAV_LINK}>{"O nás"}</Link<Route>>
            <Link<Route> to={Route::Contact} classes={NAV_LINK}>{"Kontakt"}</Link<Route>>
            if state.is_admin() {
                <Link<Route> to={Route::Admin} classes={NAV_LINK}>{"Administrace"}</Link<Route>>
            }
        </>
    };

    html! {
        <header class="sticky top-0 z-40 bg-white/95 backdrop-blur border-b border-neutral-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-bold tracking-tight text-neutral-900">
                        {"UM "}<span class="text-orange-600">{"PARK"}</span>
                    </Link<Route>>

                    <nav class="hidden lg:flex items-center space-x-6">
                        {links.clone()}
                    </nav>

                    <div class="hidden lg:flex items-center space-x-4">
                        if state.is_authenticated() {
                            <button onclick={on_logout.clone()} class={NAV_LINK}>
                                {"Odhlásit"}
                            </button>
                        } else {
                            <Link<Route> to={Route::Login} classes={NAV_LINK}>{"Přihlásit"}</Link<Route>>
                        }
                        <Link<Route>
                            to={Route::Reservation}
                            classes="px-4 py-2 rounded-md bg-orange-600 text-white text-sm font-semibold hover:bg-orange-700 transition-colors"
                        >
                            {"Rezervace"}
                        </Link<Route>>
                    </div>

                    <button
                        onclick={toggle_menu}
                        class="lg:hidden p-2 text-neutral-700"
                        aria-label="Menu"
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>

                if *menu_open {
                    <nav onclick={close_menu} class="lg:hidden flex flex-col space-y-3 pb-4">
                        {links}
                        <Link<Route> to={Route::Reservation} classes={NAV_LINK}>{"Rezervace"}</Link<Route>>
                        if state.is_authenticated() {
                            <button onclick={on_logout} class={classes!(NAV_LINK, "text-left")}>
                                {"Odhlásit"}
                            </button>
                        } else {
                            <Link<Route> to={Route::Login} classes={NAV_LINK}>{"Přihlásit"}</Link<Route>>
                        }
                    </nav>
                }
            </div>
        </header>
    }
}
