use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_fetch, use_title};
use crate::utils::format_price;
use crate::{Route, get_api_client};

/// The monthly plan is the one highlighted as most popular.
fn is_featured(membership: &responses::Membership) -> bool {
    membership.period.trim().eq_ignore_ascii_case("měsíc")
}

#[function_component]
pub fn PricingPage() -> Html {
    use_title("Ceník");

    let memberships = use_fetch((), || async {
        get_api_client()
            .list_memberships()
            .await
            .map_err(|e| e.to_string())
    });
    let price_items = use_fetch((), || async {
        get_api_client()
            .list_price_items()
            .await
            .map_err(|e| e.to_string())
    });

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-neutral-900">{"Ceník služeb"}</h1>
                <p class="mt-4 text-lg text-neutral-600">
                    {"Vyberte si plán, který vám nejlépe vyhovuje"}
                </p>
            </div>

            {memberships.render("členství", |memberships: &Vec<responses::Membership>, _| html! {
                <div class="grid gap-8 md:grid-cols-3">
                    {for memberships.iter().map(membership_card)}
                </div>
            })}

            <div class="mt-16">
                <h2 class="text-2xl font-bold text-neutral-900 mb-6">{"Jednorázové vstupy a služby"}</h2>
                {price_items.render("ceníku", |items: &Vec<responses::PriceItem>, _| html! {
                    <div class="bg-white rounded-lg shadow-md border border-neutral-100 divide-y divide-neutral-100">
                        {for items.iter().map(|item| html! {
                            <div key={item.id.to_string()} class="p-6 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2">
                                <div>
                                    <p class="font-semibold text-neutral-900">{&item.title}</p>
                                    <p class="text-sm text-neutral-600">{&item.description}</p>
                                </div>
                                <div class="text-right">
                                    <p class="text-lg font-bold text-orange-600">{format_price(item.price)}</p>
                                    <p class="text-sm text-neutral-500">{&item.duration}</p>
                                </div>
                            </div>
                        })}
                    </div>
                })}
            </div>

            <div class="mt-12 text-center">
                <Link<Route> to={Route::Home} classes="text-orange-600 hover:text-orange-700 underline">
                    {"Zpět na hlavní stránku"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn membership_card(membership: &responses::Membership) -> Html {
    let featured = is_featured(membership);

    html! {
        <div
            key={membership.id.to_string()}
            class={classes!(
                "relative", "flex", "flex-col", "rounded-xl", "p-8", "bg-white", "shadow-md",
                if featured { "border-2 border-orange-600" } else { "border border-neutral-200" }
            )}
        >
            if featured {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full bg-orange-600 text-white text-xs font-semibold">
                    {"Nejoblíbenější"}
                </span>
            }
            <h3 class="text-xl font-bold text-neutral-900">{&membership.name}</h3>
            <p class="mt-4">
                <span class="text-4xl font-extrabold text-neutral-900">{format_price(membership.price)}</span>
                <span class="text-neutral-500">{format!(" / {}", membership.period)}</span>
            </p>
            <ul class="mt-6 space-y-2 flex-1">
                {for membership.benefits.iter().map(|benefit| html! {
                    <li class="flex items-start gap-2 text-neutral-700">
                        <span class="text-orange-600">{"✓"}</span>
                        {benefit}
                    </li>
                })}
            </ul>
            <Link<Route>
                to={Route::Reservation}
                classes={classes!(
                    "mt-8", "block", "text-center", "py-3", "rounded-md", "font-semibold",
                    if featured {
                        "bg-orange-600 text-white hover:bg-orange-700"
                    } else {
                        "bg-neutral-100 text-neutral-900 hover:bg-neutral-200"
                    }
                )}
            >
                {"Vybrat plán"}
            </Link<Route>>
        </div>
    }
}
