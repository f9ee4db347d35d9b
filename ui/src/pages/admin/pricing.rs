use payloads::sync::Mutation;
use payloads::{
    MembershipDetails, MembershipId, PriceItemDetails, PriceItemId, responses,
};
use rust_decimal::Decimal;
use yew::prelude::*;

use super::{
    CARD, DANGER_BUTTON, INPUT, PRIMARY_BUTTON, SECONDARY_BUTTON, text_area,
    text_input,
};
use crate::hooks::use_admin_table;
use crate::remote::{MembershipsTable, PriceItemsTable};
use crate::utils::{confirm, format_price, parse_price};

#[function_component]
pub(super) fn PricingSection() -> Html {
    html! {
        <div class="space-y-10">
            <MembershipsPanel />
            <PriceItemsPanel />
        </div>
    }
}

#[function_component]
fn PriceItemsPanel() -> Html {
    let table = use_admin_table(PriceItemsTable::connect);
    let editing = use_state(|| None::<PriceItemId>);
    let creating = use_state(|| false);

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let on_create = {
        let apply = table.apply.clone();
        let creating = creating.clone();
        Callback::from(move |details: PriceItemDetails| {
            apply.emit((Mutation::Insert(details), "Položka přidána"));
            creating.set(false);
        })
    };
    let on_cancel_new = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    html! {
        <section class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-neutral-900">{"Ceník"}</h2>
                if !*creating {
                    <button class={PRIMARY_BUTTON} onclick={on_new}>{"Nová položka"}</button>
                }
            </div>
            if *creating {
                <PriceItemEditor
                    initial={PriceItemDetails {
                        title: String::new(),
                        price: Decimal::ZERO,
                        duration: String::new(),
                        description: String::new(),
                    }}
                    save_label="Přidat"
                    on_save={on_create}
                    on_cancel={on_cancel_new}
                />
            }
            {match &table.list {
                None => html! { <p class="text-neutral-600">{"Načítání ceníku..."}</p> },
                Some(list) => html! {
                    <div class="space-y-3">
                        {for list.iter().map(|item| {
                            if *editing == Some(item.id) {
                                let on_save = {
                                    let apply = table.apply.clone();
                                    let editing = editing.clone();
                                    let item = item.clone();
                                    Callback::from(move |details: PriceItemDetails| {
                                        let updated = responses::PriceItem {
                                            title: details.title,
                                            price: details.price,
                                            duration: details.duration,
                                            description: details.description,
                                            ..item.clone()
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
                                    <PriceItemEditor
                                        key={item.id.to_string()}
                                        initial={item.details()}
                                        save_label="Uložit"
                                        {on_save}
                                        {on_cancel}
                                    />
                                }
                            } else {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let id = item.id;
                                    Callback::from(move |_: MouseEvent| editing.set(Some(id)))
                                };
                                let on_delete = {
                                    let apply = table.apply.clone();
                                    let id = item.id;
                                    Callback::from(move |_: MouseEvent| {
                                        if confirm("Opravdu chcete tuto položku smazat?") {
                                            apply.emit((Mutation::Delete(id), "Položka smazána"));
                                        }
                                    })
                                };
                                html! {
                                    <div key={item.id.to_string()} class={classes!(CARD, "flex", "items-start", "justify-between", "gap-4")}>
                                        <div>
                                            <p class="font-semibold text-neutral-900">{&item.title}</p>
                                            <p class="text-sm text-neutral-600">{&item.description}</p>
                                            <p class="mt-1 text-sm text-neutral-500">
                                                {format!("{} · {}", format_price(item.price), item.duration)}
                                            </p>
                                        </div>
                                        <div class="flex gap-2 shrink-0">
                                            <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                                            <button class={DANGER_BUTTON} onclick={on_delete}>{"Smazat"}</button>
                                        </div>
                                    </div>
                                }
                            }
                        })}
                    </div>
                },
            }}
        </section>
    }
}

#[derive(Clone, PartialEq)]
struct PriceItemInput {
    title: String,
    price: String,
    duration: String,
    description: String,
}

impl PriceItemInput {
    fn parse(&self) -> Result<PriceItemDetails, String> {
        let price =
            parse_price(&self.price).ok_or_else(|| "Neplatná cena".to_string())?;
        let details = PriceItemDetails {
            title: self.title.trim().to_string(),
            price,
            duration: self.duration.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        details.validate().map_err(|e| e.to_string())?;
        Ok(details)
    }
}

#[derive(Properties, PartialEq)]
struct PriceItemEditorProps {
    initial: PriceItemDetails,
    save_label: AttrValue,
    on_save: Callback<PriceItemDetails>,
    on_cancel: Callback<()>,
}

#[function_component]
fn PriceItemEditor(props: &PriceItemEditorProps) -> Html {
    let input = use_state(|| PriceItemInput {
        title: props.initial.title.clone(),
        price: props.initial.price.normalize().to_string(),
        duration: props.initial.duration.clone(),
        description: props.initial.description.clone(),
    });
    let error = use_state(|| None::<String>);

    let field = |apply: fn(&mut PriceItemInput, String)| {
        let input = input.clone();
        Callback::from(move |value: String| {
            let mut next = (*input).clone();
            apply(&mut next, value);
            input.set(next);
        })
    };

    let on_save = {
        let input = input.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| match input.parse() {
            Ok(details) => on_save.emit(details),
            Err(e) => error.set(Some(e)),
        })
    };

    html! {
        <div class={classes!(CARD, "space-y-3", "border-orange-300")}>
            if let Some(error) = &*error {
                <p class="text-sm text-red-600">{error}</p>
            }
            {text_input("Název", &input.title, field(|i, v| i.title = v))}
            <div class="grid gap-3 sm:grid-cols-2">
                {text_input("Cena (Kč)", &input.price, field(|i, v| i.price = v))}
                {text_input("Délka", &input.duration, field(|i, v| i.duration = v))}
            </div>
            {text_area("Popis", &input.description, 2, field(|i, v| i.description = v))}
            <div class="flex gap-2 justify-end">
                <button class={SECONDARY_BUTTON} onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                    {"Zrušit"}
                </button>
                <button class={PRIMARY_BUTTON} onclick={on_save}>{&props.save_label}</button>
            </div>
        </div>
    }
}

#[function_component]
fn MembershipsPanel() -> Html {
    let table = use_admin_table(MembershipsTable::connect);
    let editing = use_state(|| None::<MembershipId>);
    let creating = use_state(|| false);

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let on_create = {
        let apply = table.apply.clone();
        let creating = creating.clone();
        Callback::from(move |details: MembershipDetails| {
            apply.emit((Mutation::Insert(details), "Členství přidáno"));
            creating.set(false);
        })
    };
    let on_cancel_new = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    html! {
        <section class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-neutral-900">{"Členství"}</h2>
                if !*creating {
                    <button class={PRIMARY_BUTTON} onclick={on_new}>{"Nové členství"}</button>
                }
            </div>
            if *creating {
                <MembershipEditor
                    initial={MembershipDetails {
                        name: String::new(),
                        price: Decimal::ZERO,
                        period: "měsíc".to_string(),
                        benefits: Vec::new(),
                    }}
                    save_label="Přidat"
                    on_save={on_create}
                    on_cancel={on_cancel_new}
                />
            }
            {match &table.list {
                None => html! { <p class="text-neutral-600">{"Načítání členství..."}</p> },
                Some(list) => html! {
                    <div class="grid gap-4 md:grid-cols-3">
                        {for list.iter().map(|membership| {
                            if *editing == Some(membership.id) {
                                let on_save = {
                                    let apply = table.apply.clone();
                                    let editing = editing.clone();
                                    let membership = membership.clone();
                                    Callback::from(move |details: MembershipDetails| {
                                        let updated = responses::Membership {
                                            name: details.name,
                                            price: details.price,
                                            period: details.period,
                                            benefits: details.benefits,
                                            ..membership.clone()
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
                                    <MembershipEditor
                                        key={membership.id.to_string()}
                                        initial={membership.details()}
                                        save_label="Uložit"
                                        {on_save}
                                        {on_cancel}
                                    />
                                }
                            } else {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let id = membership.id;
                                    Callback::from(move |_: MouseEvent| editing.set(Some(id)))
                                };
                                let on_delete = {
                                    let apply = table.apply.clone();
                                    let id = membership.id;
                                    Callback::from(move |_: MouseEvent| {
                                        if confirm("Opravdu chcete toto členství smazat?") {
                                            apply.emit((Mutation::Delete(id), "Členství smazáno"));
                                        }
                                    })
                                };
                                html! {
                                    <div key={membership.id.to_string()} class={CARD}>
                                        <p class="font-semibold text-neutral-900">{&membership.name}</p>
                                        <p class="text-sm text-neutral-500">
                                            {format!("{} / {}", format_price(membership.price), membership.period)}
                                        </p>
                                        <ul class="mt-2 list-disc list-inside text-sm text-neutral-700">
                                            {for membership.benefits.iter().map(|b| html! { <li>{b}</li> })}
                                        </ul>
                                        <div class="mt-3 flex gap-2 justify-end">
                                            <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                                            <button class={DANGER_BUTTON} onclick={on_delete}>{"Smazat"}</button>
                                        </div>
                                    </div>
                                }
                            }
                        })}
                    </div>
                },
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MembershipEditorProps {
    initial: MembershipDetails,
    save_label: AttrValue,
    on_save: Callback<MembershipDetails>,
    on_cancel: Callback<()>,
}

#[function_component]
fn MembershipEditor(props: &MembershipEditorProps) -> Html {
    let details = use_state(|| props.initial.clone());
    let price = use_state(|| props.initial.price.normalize().to_string());
    let new_benefit = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_name = {
        let details = details.clone();
        Callback::from(move |name: String| {
            details.set(MembershipDetails {
                name,
                ..(*details).clone()
            });
        })
    };
    let on_period = {
        let details = details.clone();
        Callback::from(move |period: String| {
            details.set(MembershipDetails {
                period,
                ..(*details).clone()
            });
        })
    };
    let on_price = {
        let price = price.clone();
        Callback::from(move |value: String| price.set(value))
    };
    let on_new_benefit = {
        let new_benefit = new_benefit.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_benefit.set(input.value());
        })
    };
    let on_add_benefit = {
        let details = details.clone();
        let new_benefit = new_benefit.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*details).clone();
            match next.add_benefit(&new_benefit) {
                Ok(()) => {
                    details.set(next);
                    new_benefit.set(String::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };
    let on_save = {
        let details = details.clone();
        let price = price.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(price) = parse_price(&price) else {
                error.set(Some("Neplatná cena".to_string()));
                return;
            };
            let membership = MembershipDetails {
                name: details.name.trim().to_string(),
                period: details.period.trim().to_string(),
                price,
                benefits: details.benefits.clone(),
            };
            match membership.validate() {
                Ok(()) => on_save.emit(membership),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div class={classes!(CARD, "space-y-3", "border-orange-300")}>
            if let Some(error) = &*error {
                <p class="text-sm text-red-600">{error}</p>
            }
            {text_input("Název", &details.name, on_name)}
            <div class="grid gap-3 grid-cols-2">
                {text_input("Cena (Kč)", &price, on_price)}
                {text_input("Období", &details.period, on_period)}
            </div>
            <div>
                <p class="text-sm font-medium text-neutral-700 mb-1">{"Výhody"}</p>
                <ul class="space-y-1">
                    {for details.benefits.iter().enumerate().map(|(index, benefit)| {
                        let on_remove = {
                            let details = details.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*details).clone();
                                next.remove_benefit(index);
                                details.set(next);
                            })
                        };
                        html! {
                            <li class="flex items-center justify-between text-sm">
                                <span>{benefit}</span>
                                <button class={DANGER_BUTTON} onclick={on_remove}>{"Odebrat"}</button>
                            </li>
                        }
                    })}
                </ul>
                <div class="mt-2 flex gap-2">
                    <input
                        class={INPUT}
                        placeholder="Nová výhoda"
                        value={(*new_benefit).clone()}
                        oninput={on_new_benefit}
                    />
                    <button class={SECONDARY_BUTTON} onclick={on_add_benefit}>{"Přidat"}</button>
                </div>
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
