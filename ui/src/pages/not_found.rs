use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Stránka nenalezena");

    html! {
        <div class="text-center py-24">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="mt-2 text-neutral-600">{"Stránka nenalezena"}</p>
            <Link<Route> to={Route::Home} classes="inline-block mt-6 text-orange-600 hover:text-orange-700 underline">
                {"Zpět na hlavní stránku"}
            </Link<Route>>
        </div>
    }
}
