use payloads::catalog::ServiceCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;
use crate::pages::NotFoundPage;
use crate::pages::reservation::ReservationQuery;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category_id: String,
}

#[function_component]
pub fn CategoryPage(props: &Props) -> Html {
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();
    let category = catalog.category(&props.category_id);
    use_title(catalog.title_for(&props.category_id));

    let Some(category) = category else {
        return html! { <NotFoundPage /> };
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-neutral-900">{category.title}</h1>
                <p class="mt-4 text-lg text-neutral-600">
                    {"Vyberte si aktivitu a rezervujte termín online."}
                </p>
            </div>

            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {for category.services.iter().map(|service| html! {
                    <div key={service.id} class="flex flex-col bg-white rounded-lg shadow-md border border-neutral-100 p-6">
                        <h2 class="text-xl font-semibold text-neutral-900">{service.name}</h2>
                        <p class="mt-2 text-neutral-600 flex-1">{service.description()}</p>
                        <div class="mt-6 flex items-center justify-between">
                            <Link<Route>
                                to={Route::ServiceDetail {
                                    category_id: category.key.to_string(),
                                    service_id: service.id.to_string(),
                                }}
                                classes="text-orange-600 hover:text-orange-700 font-medium"
                            >
                                {"Více informací"}
                            </Link<Route>>
                            <Link<Route, ReservationQuery>
                                to={Route::Reservation}
                                query={Some(ReservationQuery::new(category.key, service.id))}
                                classes="px-4 py-2 rounded-md bg-orange-600 text-white text-sm font-semibold hover:bg-orange-700"
                            >
                                {"Rezervovat"}
                            </Link<Route, ReservationQuery>>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
