use payloads::catalog::ServiceCatalog;
use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::MarkdownText;
use crate::hooks::{use_fetch, use_title};
use crate::{Route, get_api_client};

/// Accent colour of each category card, by category key.
fn category_accent(key: &str) -> &'static str {
    match key {
        "sport" => "from-orange-500 to-red-600",
        "zabava" => "from-sky-500 to-indigo-600",
        "performance" => "from-fuchsia-500 to-purple-700",
        _ => "from-neutral-500 to-neutral-700",
    }
}

#[function_component]
pub fn HomePage() -> Html {
    use_title("");
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();

    html! {
        <div>
            <section class="bg-gradient-to-br from-neutral-900 via-neutral-800 to-orange-900 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                    <h1 class="text-4xl sm:text-6xl font-extrabold tracking-tight">
                        {"Vítejte v "}<span class="text-orange-500">{"UM Parkour"}</span>
                    </h1>
                    <p class="mt-6 text-xl text-neutral-300">{"Sport • Zábava • Performance"}</p>
                    <Link<Route>
                        to={Route::Reservation}
                        classes="inline-block mt-10 px-8 py-3 rounded-md bg-orange-600 text-white font-semibold hover:bg-orange-700 transition-colors"
                    >
                        {"Rezervovat termín"}
                    </Link<Route>>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <h2 class="text-3xl font-bold text-neutral-900 text-center mb-10">{"Naše služby"}</h2>
                <div class="grid gap-6 md:grid-cols-3">
                    {for catalog.categories().iter().map(|category| html! {
                        <Link<Route>
                            to={Route::Category { category_id: category.key.to_string() }}
                            classes={classes!(
                                "block", "rounded-xl", "p-8", "text-white", "shadow-lg",
                                "bg-gradient-to-br", category_accent(category.key),
                                "hover:scale-[1.02]", "transition-transform"
                            )}
                        >
                            <h3 class="text-2xl font-bold">{category.title}</h3>
                            <ul class="mt-4 space-y-1 text-white/90 text-sm">
                                {for category.services.iter().map(|service| html! {
                                    <li>{service.name}</li>
                                })}
                            </ul>
                        </Link<Route>>
                    })}
                </div>
            </section>

            <ContentBlocks />
            <GalleryStrip />
        </div>
    }
}

#[function_component]
fn ContentBlocks() -> Html {
    let content = use_fetch((), || async {
        get_api_client()
            .list_content()
            .await
            .map_err(|e| e.to_string())
    });

    html! {
        <section class="bg-neutral-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                {content.render("obsahu", |blocks: &Vec<responses::Content>, _| html! {
                    <div class="space-y-12">
                        {for blocks.iter().map(|block| html! {
                            <article key={block.id.to_string()}>
                                <h2 class="text-2xl font-bold text-neutral-900 mb-4">{&block.title}</h2>
                                <MarkdownText text={block.body.clone()} />
                            </article>
                        })}
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component]
fn GalleryStrip() -> Html {
    let gallery = use_fetch((), || async {
        get_api_client()
            .list_gallery()
            .await
            .map_err(|e| e.to_string())
    });

    let Some(images) = gallery.data.as_ref() else {
        return html! {};
    };
    if images.is_empty() {
        return html! {};
    }

    let api_client = get_api_client();

    html! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h2 class="text-3xl font-bold text-neutral-900 text-center mb-10">{"Galerie"}</h2>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {for images.iter().map(|image| html! {
                    <figure key={image.id.to_string()} class="rounded-lg overflow-hidden shadow-md bg-white">
                        <img
                            src={api_client.image_url(&image.id)}
                            alt={image.title.clone()}
                            loading="lazy"
                            class="w-full h-56 object-cover"
                        />
                        <figcaption class="p-4">
                            <p class="font-semibold text-neutral-900">{&image.title}</p>
                            if let Some(description) = &image.description {
                                <p class="text-sm text-neutral-600 mt-1">{description}</p>
                            }
                        </figcaption>
                    </figure>
                })}
            </div>
        </section>
    }
}
