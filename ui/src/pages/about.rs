use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

const VALUES: [(&str, &str); 3] = [
    (
        "Kvalita",
        "Trénujeme pod vedením zkušených a certifikovaných instruktorů na \
         profesionálním vybavení.",
    ),
    (
        "Komunita",
        "Vytváříme místo, kde se potkávají lidé všech věkových kategorií se \
         společnou vášní pro pohyb.",
    ),
    (
        "Rozvoj",
        "Každý u nás postupuje vlastním tempem, od prvních krůčků až po \
         pokročilé triky.",
    ),
];

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("5+ let zkušeností", "s výukou parkouru a akrobacie"),
    ("1000+ spokojených klientů", "z řad dětí i dospělých"),
    ("50+ vystoupení", "na festivalech a firemních akcích"),
    ("10 instruktorů", "s trenérskou licencí"),
];

#[function_component]
pub fn AboutPage() -> Html {
    use_title("O nás");

    html! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-16">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-neutral-900">{"O nás"}</h1>
                <p class="mt-6 text-lg text-neutral-700 max-w-3xl mx-auto">
                    {"UM Parkour je místo pro všechny, kdo se chtějí hýbat. Nabízíme \
                      lekce parkouru, akrobacie a gymnastiky, pořádáme narozeninové \
                      oslavy a firemní akce a připravujeme show na míru."}
                </p>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-neutral-900 text-center mb-8">{"Naše hodnoty"}</h2>
                <div class="grid gap-6 md:grid-cols-3">
                    {for VALUES.iter().map(|(title, text)| html! {
                        <div class="bg-white rounded-lg shadow-md border border-neutral-100 p-6">
                            <h3 class="text-xl font-semibold text-orange-600">{*title}</h3>
                            <p class="mt-2 text-neutral-700">{*text}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="bg-neutral-900 text-white rounded-xl p-10">
                <h2 class="text-2xl font-bold text-center mb-8">{"Naše úspěchy"}</h2>
                <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4 text-center">
                    {for ACHIEVEMENTS.iter().map(|(headline, detail)| html! {
                        <div>
                            <p class="text-2xl font-extrabold text-orange-500">{*headline}</p>
                            <p class="mt-1 text-sm text-neutral-300">{*detail}</p>
                        </div>
                    })}
                </div>
            </section>

            <div class="text-center">
                <Link<Route>
                    to={Route::Reservation}
                    classes="inline-block px-8 py-3 rounded-md bg-orange-600 text-white font-semibold hover:bg-orange-700"
                >
                    {"Rezervovat termín"}
                </Link<Route>>
            </div>
        </div>
    }
}
