use payloads::catalog::ServiceCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;
use crate::pages::reservation::ReservationQuery;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category_id: String,
    pub service_id: String,
}

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Po–Pá", "9:00–18:00"),
    ("So", "10:00–16:00"),
    ("Ne", "zavřeno"),
];

const NOT_FOUND: &str = "Služba nenalezena";

/// Document title for a detail route; mismatched category and service
/// pairs count as not found.
fn page_title(
    catalog: &ServiceCatalog,
    category_id: &str,
    service_id: &str,
) -> &'static str {
    catalog
        .lookup(category_id, service_id)
        .map(|s| s.name)
        .unwrap_or(NOT_FOUND)
}

#[function_component]
pub fn ServiceDetailPage(props: &Props) -> Html {
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();
    use_title(page_title(&catalog, &props.category_id, &props.service_id));
    let service = catalog.lookup(&props.category_id, &props.service_id);

    let Some(service) = service else {
        return html! {
            <div class="text-center py-24">
                <h1 class="text-3xl font-bold text-neutral-900">{NOT_FOUND}</h1>
                <Link<Route> to={Route::Home} classes="inline-block mt-6 text-orange-600 hover:text-orange-700 underline">
                    {"Zpět na hlavní stránku"}
                </Link<Route>>
            </div>
        };
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <Link<Route>
                to={Route::Category { category_id: props.category_id.clone() }}
                classes="text-sm text-orange-600 hover:text-orange-700"
            >
                {format!("← {}", catalog.title_for(&props.category_id))}
            </Link<Route>>

            <h1 class="mt-4 text-4xl font-bold text-neutral-900">{service.name}</h1>
            <p class="mt-6 text-lg text-neutral-700">{service.description()}</p>

            <div class="mt-10 grid gap-6 md:grid-cols-2">
                <div class="bg-neutral-50 rounded-lg p-6">
                    <h2 class="text-lg font-semibold text-neutral-900 mb-3">{"Otevírací doba"}</h2>
                    <dl class="space-y-1 text-neutral-700">
                        {for OPENING_HOURS.iter().map(|(days, hours)| html! {
                            <div class="flex justify-between">
                                <dt>{*days}</dt>
                                <dd>{*hours}</dd>
                            </div>
                        })}
                    </dl>
                </div>
                <div class="bg-orange-50 rounded-lg p-6 flex flex-col justify-between">
                    <p class="text-neutral-700">
                        {"Vyberte si termín a my se vám ozveme s potvrzením."}
                    </p>
                    <Link<Route, ReservationQuery>
                        to={Route::Reservation}
                        query={Some(ReservationQuery::new(&props.category_id, service.id))}
                        classes="mt-4 inline-block text-center px-6 py-3 rounded-md bg-orange-600 text-white font-semibold hover:bg-orange-700"
                    >
                        {"Rezervovat"}
                    </Link<Route, ReservationQuery>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_routes_are_not_found() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(page_title(&catalog, "plavani", "parkour"), NOT_FOUND);
        assert_eq!(page_title(&catalog, "sport", "neexistuje"), NOT_FOUND);
        // a real service under the wrong category
        assert_eq!(page_title(&catalog, "zabava", "parkour"), NOT_FOUND);
    }

    #[test]
    fn known_service_titles_the_page() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(page_title(&catalog, "sport", "parkour"), "Parkour");
        assert_eq!(
            page_title(&catalog, "zabava", "narozeniny"),
            "Narozeninová oslava"
        );
    }
}
