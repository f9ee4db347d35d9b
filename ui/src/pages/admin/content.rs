use payloads::sync::Mutation;
use payloads::{ContentDetails, ContentId, responses};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{CARD, DANGER_BUTTON, INPUT, LABEL, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::components::MarkdownText;
use crate::hooks::use_admin_table;
use crate::remote::ContentTable;
use crate::utils::{confirm, time::format_timestamp};

#[function_component]
pub(super) fn ContentSection() -> Html {
    let table = use_admin_table(ContentTable::connect);
    let editing = use_state(|| None::<ContentId>);
    let creating = use_state(|| false);

    let on_create = {
        let apply = table.apply.clone();
        let creating = creating.clone();
        Callback::from(move |details: ContentDetails| {
            apply.emit((Mutation::Insert(details), "Obsah přidán"));
            creating.set(false);
        })
    };

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let on_cancel_new = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    let header = html! {
        <div class="flex items-center justify-between mb-4">
            <h2 class="text-xl font-semibold text-neutral-900">{"Obsahové bloky"}</h2>
            if !*creating {
                <button class={PRIMARY_BUTTON} onclick={on_new}>{"Nový blok"}</button>
            }
        </div>
    };

    let Some(list) = &table.list else {
        return html! {
            <>
                {header}
                <p class="text-neutral-600">{"Načítání obsahu..."}</p>
            </>
        };
    };

    html! {
        <div class="space-y-4">
            {header}
            if *creating {
                <ContentEditor
                    initial={ContentDetails { title: String::new(), body: String::new() }}
                    save_label="Přidat"
                    on_save={on_create}
                    on_cancel={on_cancel_new}
                />
            }
            if list.is_empty() {
                <p class="text-neutral-500">{"Zatím žádný obsah."}</p>
            }
            {for list.iter().map(|block| {
                if *editing == Some(block.id) {
                    let on_save = {
                        let apply = table.apply.clone();
                        let editing = editing.clone();
                        let block = block.clone();
                        Callback::from(move |details: ContentDetails| {
                            let updated = responses::Content {
                                title: details.title,
                                body: details.body,
                                ..block.clone()
                            };
                            apply.emit((Mutation::Update(updated), "Změny uloženy"));
                            editing.set(None);
                        })
                    };
                    let on_cancel = {
                        let editing = editing.clone();
                        Callback::from(move |()| editing.set(None))
                    };
                    html! {
                        <ContentEditor
                            key={block.id.to_string()}
                            initial={ContentDetails { title: block.title.clone(), body: block.body.clone() }}
                            save_label="Uložit"
                            {on_save}
                            {on_cancel}
                        />
                    }
                } else {
                    content_row(block, &editing, &table.apply, table.is_loading)
                }
            })}
        </div>
    }
}

fn content_row(
    block: &responses::Content,
    editing: &UseStateHandle<Option<ContentId>>,
    apply: &Callback<(Mutation<responses::Content, ContentDetails>, &'static str)>,
    is_loading: bool,
) -> Html {
    let on_edit = {
        let editing = editing.clone();
        let id = block.id;
        Callback::from(move |_: MouseEvent| editing.set(Some(id)))
    };
    let on_delete = {
        let apply = apply.clone();
        let id = block.id;
        Callback::from(move |_: MouseEvent| {
            if confirm("Opravdu chcete tento blok smazat?") {
                apply.emit((Mutation::Delete(id), "Obsah smazán"));
            }
        })
    };

    html! {
        <div key={block.id.to_string()} class={CARD}>
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <h3 class="font-semibold text-neutral-900">{&block.title}</h3>
                    <p class="text-xs text-neutral-500">
                        {format!("Upraveno {}", format_timestamp(block.updated_at))}
                    </p>
                </div>
                <div class="flex gap-2 shrink-0">
                    <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                    <button class={DANGER_BUTTON} onclick={on_delete} disabled={is_loading}>{"Smazat"}</button>
                </div>
            </div>
            <MarkdownText text={block.body.clone()} class="mt-3 text-sm" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EditorProps {
    initial: ContentDetails,
    save_label: AttrValue,
    on_save: Callback<ContentDetails>,
    on_cancel: Callback<()>,
}

#[function_component]
fn ContentEditor(props: &EditorProps) -> Html {
    let details = use_state(|| props.initial.clone());
    let show_preview = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_title = {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            details.set(ContentDetails {
                title: input.value(),
                ..(*details).clone()
            });
        })
    };
    let on_body = {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            details.set(ContentDetails {
                body: input.value(),
                ..(*details).clone()
            });
        })
    };
    let toggle_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(!*show_preview))
    };
    let on_save = {
        let details = details.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let trimmed = ContentDetails {
                title: details.title.trim().to_string(),
                body: details.body.clone(),
            };
            match trimmed.validate() {
                Ok(()) => on_save.emit(trimmed),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div class={classes!(CARD, "space-y-3", "border-orange-300")}>
            if let Some(error) = &*error {
                <p class="text-sm text-red-600">{error}</p>
            }
            <div>
                <label class={LABEL}>{"Nadpis"}</label>
                <input class={INPUT} value={details.title.clone()} oninput={on_title} />
            </div>
            <div>
                <div class="flex items-center justify-between">
                    <label class={LABEL}>{"Text (markdown)"}</label>
                    <button type="button" class="text-xs text-orange-600" onclick={toggle_preview}>
                        {if *show_preview { "Upravit" } else { "Náhled" }}
                    </button>
                </div>
                if *show_preview {
                    <MarkdownText text={details.body.clone()} class="border border-neutral-200 rounded-md p-3 min-h-[10rem]" />
                } else {
                    <textarea class={INPUT} rows="10" value={details.body.clone()} oninput={on_body} />
                }
            </div>
            <div class="flex gap-2 justify-end">
                <button class={SECONDARY_BUTTON} onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                    {"Zrušit"}
                </button>
                <button class={PRIMARY_BUTTON} onclick={on_save}>{&props.save_label}</button>
            </div>
        </div>
    }
}
