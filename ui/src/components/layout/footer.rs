use payloads::LayoutSettings;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_fetch;
use crate::{Route, get_api_client};

#[function_component]
pub fn Footer() -> Html {
    let layout = use_fetch((), || async {
        get_api_client()
            .get_layout()
            .await
            .map_err(|e| e.to_string())
    });

    // the footer keeps its shape while the settings load
    let settings = layout.data.as_ref().cloned().unwrap_or_else(|| {
        LayoutSettings {
            contact_phone: "+420 777 888 999".into(),
            contact_email: "info@umparkour.cz".into(),
            address: "Sportovní 123, Praha".into(),
            facebook_url: None,
            instagram_url: None,
            youtube_url: None,
        }
    });

    let socials = [
        ("Facebook", settings.facebook_url.clone()),
        ("Instagram", settings.instagram_url.clone()),
        ("Youtube", settings.youtube_url.clone()),
    ];

    html! {
        <footer class="bg-neutral-900 text-neutral-300 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 grid gap-8 md:grid-cols-3">
                <div>
                    <p class="text-lg font-bold text-white">{"UM PARK"}</p>
                    <p class="mt-2 text-sm">{"Sport • Zábava • Performance"}</p>
                </div>
                <div class="text-sm space-y-1">
                    <p class="font-semibold text-white">{"Kontakt"}</p>
                    <p><a href={format!("tel:{}", settings.contact_phone.replace(' ', ""))}>{&settings.contact_phone}</a></p>
                    <p><a href={format!("mailto:{}", settings.contact_email)}>{&settings.contact_email}</a></p>
                    <p>{&settings.address}</p>
                </div>
                <div class="text-sm space-y-1">
                    <p class="font-semibold text-white">{"Sledujte nás"}</p>
                    {for socials.into_iter().filter_map(|(name, url)| url.map(|url| html! {
                        <p>
                            <a href={url} target="_blank" rel="noopener noreferrer" class="hover:text-white">
                                {name}
                            </a>
                        </p>
                    }))}
                    <p class="pt-2">
                        <Link<Route> to={Route::Contact} classes="hover:text-white underline">
                            {"Napište nám"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
            <div class="border-t border-neutral-800 py-4 text-center text-xs text-neutral-500">
                {"© UM Parkour"}
            </div>
        </footer>
    }
}
