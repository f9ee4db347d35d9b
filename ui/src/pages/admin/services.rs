use payloads::sync::Mutation;
use payloads::{ServiceDetails, ServiceId, responses};
use rust_decimal::Decimal;
use yew::prelude::*;

use super::{
    CARD, DANGER_BUTTON, PRIMARY_BUTTON, SECONDARY_BUTTON, text_area,
    text_input,
};
use crate::hooks::use_admin_table;
use crate::remote::ServicesTable;
use crate::utils::{confirm, format_price, parse_price};

#[function_component]
pub(super) fn ServicesSection() -> Html {
    let table = use_admin_table(ServicesTable::connect);
    let editing = use_state(|| None::<ServiceId>);
    let creating = use_state(|| false);

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let on_create = {
        let apply = table.apply.clone();
        let creating = creating.clone();
        Callback::from(move |details: ServiceDetails| {
            apply.emit((Mutation::Insert(details), "Služba přidána"));
            creating.set(false);
        })
    };
    let on_cancel_new = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-neutral-900">{"Služby"}</h2>
                if !*creating {
                    <button class={PRIMARY_BUTTON} onclick={on_new}>{"Nová služba"}</button>
                }
            </div>
            if *creating {
                <ServiceEditor
                    initial={ServiceDetails {
                        name: String::new(),
                        description: String::new(),
                        duration_minutes: 60,
                        price: Decimal::ZERO,
                    }}
                    save_label="Přidat"
                    on_save={on_create}
                    on_cancel={on_cancel_new}
                />
            }
            {match &table.list {
                None => html! { <p class="text-neutral-600">{"Načítání služeb..."}</p> },
                Some(list) => html! {
                    <>
                        if list.is_empty() {
                            <p class="text-neutral-500">{"Zatím žádné služby."}</p>
                        }
                        {for list.iter().map(|service| {
                            if *editing == Some(service.id) {
                                let on_save = {
                                    let apply = table.apply.clone();
                                    let editing = editing.clone();
                                    let service = service.clone();
                                    Callback::from(move |details: ServiceDetails| {
                                        let updated = responses::Service {
                                            name: details.name,
                                            description: details.description,
                                            duration_minutes: details.duration_minutes,
                                            price: details.price,
                                            ..service.clone()
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
                                    <ServiceEditor
                                        key={service.id.to_string()}
                                        initial={service.details()}
                                        save_label="Uložit"
                                        {on_save}
                                        {on_cancel}
                                    />
                                }
                            } else {
                                let on_edit = {
                                    let editing = editing.clone();
                                    let id = service.id;
                                    Callback::from(move |_: MouseEvent| editing.set(Some(id)))
                                };
                                let on_delete = {
                                    let apply = table.apply.clone();
                                    let id = service.id;
                                    Callback::from(move |_: MouseEvent| {
                                        if confirm("Opravdu chcete tuto službu smazat?") {
                                            apply.emit((Mutation::Delete(id), "Služba smazána"));
                                        }
                                    })
                                };
                                html! {
                                    <div key={service.id.to_string()} class={CARD}>
                                        <div class="flex items-start justify-between gap-4">
                                            <div>
                                                <h3 class="font-semibold text-neutral-900">{&service.name}</h3>
                                                <p class="text-sm text-neutral-600">{&service.description}</p>
                                                <p class="mt-1 text-sm text-neutral-500">
                                                    {format!("{} min · {}", service.duration_minutes, format_price(service.price))}
                                                </p>
                                            </div>
                                            <div class="flex gap-2 shrink-0">
                                                <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                                                <button class={DANGER_BUTTON} onclick={on_delete}>{"Smazat"}</button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        })}
                    </>
                },
            }}
        </div>
    }
}

/// Form fields as typed, parsed only on save.
#[derive(Clone, PartialEq)]
struct ServiceInput {
    name: String,
    description: String,
    duration_minutes: String,
    price: String,
}

impl ServiceInput {
    fn from_details(details: &ServiceDetails) -> Self {
        Self {
            name: details.name.clone(),
            description: details.description.clone(),
            duration_minutes: details.duration_minutes.to_string(),
            price: details.price.normalize().to_string(),
        }
    }

    fn parse(&self) -> Result<ServiceDetails, String> {
        let duration_minutes = self
            .duration_minutes
            .trim()
            .parse::<i32>()
            .map_err(|_| "Neplatná délka trvání".to_string())?;
        let price =
            parse_price(&self.price).ok_or_else(|| "Neplatná cena".to_string())?;
        let details = ServiceDetails {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            duration_minutes,
            price,
        };
        details.validate().map_err(|e| e.to_string())?;
        Ok(details)
    }
}

#[derive(Properties, PartialEq)]
struct EditorProps {
    initial: ServiceDetails,
    save_label: AttrValue,
    on_save: Callback<ServiceDetails>,
    on_cancel: Callback<()>,
}

#[function_component]
fn ServiceEditor(props: &EditorProps) -> Html {
    let input = use_state(|| ServiceInput::from_details(&props.initial));
    let error = use_state(|| None::<String>);

    let field = |apply: fn(&mut ServiceInput, String)| {
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
            {text_input("Název", &input.name, field(|i, v| i.name = v))}
            {text_area("Popis", &input.description, 3, field(|i, v| i.description = v))}
            <div class="grid gap-3 sm:grid-cols-2">
                {text_input("Délka (minuty)", &input.duration_minutes, field(|i, v| i.duration_minutes = v))}
                {text_input("Cena (Kč)", &input.price, field(|i, v| i.price = v))}
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn input(duration: &str, price: &str) -> ServiceInput {
        ServiceInput {
            name: " Parkour lekce ".into(),
            description: String::new(),
            duration_minutes: duration.into(),
            price: price.into(),
        }
    }

    #[test]
    fn typed_fields_are_parsed_and_trimmed() {
        let details = input("90", "350,50").parse().unwrap();
        assert_eq!(details.name, "Parkour lekce");
        assert_eq!(details.duration_minutes, 90);
        assert_eq!(details.price, dec!(350.50));
    }

    #[test]
    fn bad_numbers_are_reported() {
        assert_eq!(input("hodina", "350").parse().unwrap_err(), "Neplatná délka trvání");
        assert_eq!(input("60", "zdarma").parse().unwrap_err(), "Neplatná cena");
        assert!(input("60", "-1").parse().is_err());
    }
}
