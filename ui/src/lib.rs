use payloads::APIClient;
use payloads::availability::AvailabilityPolicy;
use payloads::catalog::ServiceCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod remote;
mod state;
mod utils;

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::ToastProvider;
use hooks::use_authentication;
pub use state::{AuthState, State};

/// API client for the backend set at build time, or the page's own origin.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();

    // the catalog and the booking schedule are fixed for the lifetime of
    // the app and handed down through context
    let catalog = use_memo((), |_| ServiceCatalog::standard());
    let policy = use_memo((), |_| AvailabilityPolicy::standard());

    html! {
        <BrowserRouter>
            <ContextProvider<ServiceCatalog> context={*catalog}>
                <ContextProvider<AvailabilityPolicy> context={(*policy).clone()}>
                    <ToastProvider>
                        <AppShell />
                    </ToastProvider>
                </ContextProvider<AvailabilityPolicy>>
            </ContextProvider<ServiceCatalog>>
        </BrowserRouter>
    }
}

#[function_component]
fn AppShell() -> Html {
    use_authentication();

    html! {
        <MainLayout>
            <Switch<Route> render={switch} />
            <ToastContainer />
        </MainLayout>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sluzby/:category_id")]
    Category { category_id: String },
    #[at("/sluzby/:category_id/:service_id")]
    ServiceDetail {
        category_id: String,
        service_id: String,
    },
    #[at("/cenik")]
    Pricing,
    #[at("/o-nas")]
    About,
    #[at("/kontakt")]
    Contact,
    #[at("/rezervace")]
    Reservation,
    #[at("/admin")]
    Admin,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    use pages::*;

    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Category { category_id } => {
            html! { <CategoryPage {category_id} /> }
        }
        Route::ServiceDetail {
            category_id,
            service_id,
        } => html! { <ServiceDetailPage {category_id} {service_id} /> },
        Route::Pricing => html! { <PricingPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Reservation => html! { <ReservationPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
