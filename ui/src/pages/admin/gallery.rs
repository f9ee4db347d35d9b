use base64::{Engine as _, engine::general_purpose};
use payloads::gallery::{self, GalleryUploadDraft};
use payloads::sync::Mutation;
use payloads::{GalleryImageId, responses};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{CARD, DANGER_BUTTON, INPUT, LABEL, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_admin_table;
use crate::remote::GalleryTable;
use crate::utils::confirm;

#[function_component]
pub(super) fn GallerySection() -> Html {
    let table = use_admin_table(GalleryTable::connect);
    let toast = use_toast();
    let file_input_ref = use_node_ref();
    let draft = use_state(GalleryUploadDraft::default);
    let preview_url = use_state(|| None::<String>);
    let is_uploading = use_state(|| false);
    let editing = use_state(|| None::<GalleryImageId>);

    let clear_file_input = {
        let file_input_ref = file_input_ref.clone();
        move || {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
    };

    let on_file_select = {
        let draft = draft.clone();
        let preview_url = preview_url.clone();
        let toast = toast.clone();
        let clear_file_input = clear_file_input.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(reader) = FileReader::new() else {
                toast.error("Soubor nelze načíst");
                return;
            };

            let name = file.name();
            let mime = file.type_();
            let reader_clone = reader.clone();
            let draft = draft.clone();
            let preview_url = preview_url.clone();
            let onload_toast = toast.clone();
            let clear_file_input = clear_file_input.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let Ok(result) = reader_clone.result() else {
                    onload_toast.error("Soubor nelze načíst");
                    return;
                };
                let data = js_sys::Uint8Array::new(&result).to_vec();
                let encoded = general_purpose::STANDARD.encode(&data);

                let mut next = (*draft).clone();
                match next.select_file(name.clone(), data) {
                    Ok(()) => {
                        preview_url.set(Some(format!("data:{mime};base64,{encoded}")));
                        draft.set(next);
                    }
                    Err(e) => {
                        onload_toast.error(e.to_string());
                        clear_file_input();
                    }
                }
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if reader.read_as_array_buffer(&file).is_err() {
                toast.error("Soubor nelze načíst");
            }
            onload.forget();
        })
    };

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.title = input.value();
            draft.set(next);
        })
    };
    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
        })
    };

    let on_clear = {
        let draft = draft.clone();
        let preview_url = preview_url.clone();
        let clear_file_input = clear_file_input.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.clear_file();
            draft.set(next);
            preview_url.set(None);
            clear_file_input();
        })
    };

    let on_upload = {
        let handle = table.handle.clone();
        let draft = draft.clone();
        let preview_url = preview_url.clone();
        let is_uploading = is_uploading.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(mut current) = (*handle).clone() else {
                toast.error("Seznam se ještě načítá");
                return;
            };
            let handle = handle.clone();
            let draft = draft.clone();
            let preview_url = preview_url.clone();
            let is_uploading = is_uploading.clone();
            let toast = toast.clone();
            let clear_file_input = clear_file_input.clone();

            yew::platform::spawn_local(async move {
                is_uploading.set(true);
                let result = gallery::upload(
                    &mut current,
                    &GalleryTable::connect(),
                    &draft,
                    |published| handle.set(Some(published.clone())),
                )
                .await;
                match result {
                    Ok(()) => {
                        toast.success("Obrázek nahrán");
                        draft.set(GalleryUploadDraft::default());
                        preview_url.set(None);
                        clear_file_input();
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                is_uploading.set(false);
            });
        })
    };

    let api_client = get_api_client();

    html! {
        <div class="space-y-6">
            <div class={classes!(CARD, "space-y-3")}>
                <h2 class="text-xl font-semibold text-neutral-900">{"Nahrát obrázek"}</h2>
                <input
                    ref={file_input_ref}
                    type="file"
                    accept="image/*"
                    onchange={on_file_select}
                    disabled={*is_uploading}
                    class="block text-sm"
                />
                if let Some(url) = &*preview_url {
                    <div class="flex items-start gap-3">
                        <img src={url.clone()} alt="Náhled" class="w-40 h-28 object-cover rounded-md border" />
                        <button class={SECONDARY_BUTTON} onclick={on_clear}>{"Odebrat"}</button>
                    </div>
                }
                <div>
                    <label class={LABEL}>{"Název"}</label>
                    <input class={INPUT} value={draft.title.clone()} oninput={on_title} />
                </div>
                <div>
                    <label class={LABEL}>{"Popis"}</label>
                    <textarea class={INPUT} rows="2" value={draft.description.clone()} oninput={on_description} />
                </div>
                <button class={PRIMARY_BUTTON} onclick={on_upload} disabled={*is_uploading}>
                    {if *is_uploading { "Nahrávání..." } else { "Nahrát" }}
                </button>
            </div>

            {match &table.list {
                None => html! { <p class="text-neutral-600">{"Načítání galerie..."}</p> },
                Some(list) if list.is_empty() => html! {
                    <p class="text-neutral-500">{"Galerie je prázdná."}</p>
                },
                Some(list) => html! {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {for list.iter().map(|image| html! {
                            <GalleryCard
                                key={image.id.to_string()}
                                image={image.clone()}
                                src={api_client.image_url(&image.id)}
                                is_editing={*editing == Some(image.id)}
                                editing={editing.clone()}
                                apply={table.apply.clone()}
                            />
                        })}
                    </div>
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    image: responses::GalleryImage,
    src: AttrValue,
    is_editing: bool,
    editing: UseStateHandle<Option<GalleryImageId>>,
    apply: Callback<(
        Mutation<responses::GalleryImage, payloads::requests::CreateGalleryImage>,
        &'static str,
    )>,
}

#[function_component]
fn GalleryCard(props: &CardProps) -> Html {
    let title = use_state(|| props.image.title.clone());
    let description =
        use_state(|| props.image.description.clone().unwrap_or_default());

    let on_edit = {
        let editing = props.editing.clone();
        let id = props.image.id;
        let title = title.clone();
        let description = description.clone();
        let image = props.image.clone();
        Callback::from(move |_: MouseEvent| {
            title.set(image.title.clone());
            description.set(image.description.clone().unwrap_or_default());
            editing.set(Some(id));
        })
    };
    let on_cancel = {
        let editing = props.editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };
    let on_save = {
        let editing = props.editing.clone();
        let apply = props.apply.clone();
        let image = props.image.clone();
        let title = title.clone();
        let description = description.clone();
        Callback::from(move |_: MouseEvent| {
            let description = description.trim();
            let updated = responses::GalleryImage {
                title: title.trim().to_string(),
                description: (!description.is_empty())
                    .then(|| description.to_string()),
                ..image.clone()
            };
            apply.emit((Mutation::Update(updated), "Změny uloženy"));
            editing.set(None);
        })
    };
    let on_delete = {
        let apply = props.apply.clone();
        let id = props.image.id;
        Callback::from(move |_: MouseEvent| {
            if confirm("Opravdu chcete tento obrázek smazat?") {
                apply.emit((Mutation::Delete(id), "Obrázek smazán"));
            }
        })
    };
    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-neutral-200 overflow-hidden">
            <img src={props.src.clone()} alt={props.image.title.clone()} loading="lazy" class="w-full h-40 object-cover" />
            <div class="p-3 space-y-2">
                if props.is_editing {
                    <input class={INPUT} value={(*title).clone()} oninput={on_title} />
                    <textarea class={INPUT} rows="2" value={(*description).clone()} oninput={on_description} />
                    <div class="flex gap-2 justify-end">
                        <button class={SECONDARY_BUTTON} onclick={on_cancel}>{"Zrušit"}</button>
                        <button class={PRIMARY_BUTTON} onclick={on_save}>{"Uložit"}</button>
                    </div>
                } else {
                    <p class="font-semibold text-neutral-900">{&props.image.title}</p>
                    if let Some(description) = &props.image.description {
                        <p class="text-sm text-neutral-600">{description}</p>
                    }
                    <div class="flex gap-2 justify-end">
                        <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                        <button class={DANGER_BUTTON} onclick={on_delete}>{"Smazat"}</button>
                    </div>
                }
            </div>
        </div>
    }
}
