use std::rc::Rc;

use jiff::civil::Date;
use payloads::availability::{self, AvailabilityPolicy, DayMarker};
use payloads::catalog::ServiceCatalog;
use payloads::reservation::{Field, ReservationForm, SubmitError};
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::remote::ApiReservationSink;
use crate::utils::time::{format_date, venue_today};

/// `?type=<category>&service=<service>` preselecting the form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReservationQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl ReservationQuery {
    pub fn new(category: &str, service: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            service: Some(service.to_string()),
        }
    }

    fn form(
        &self,
        catalog: ServiceCatalog,
        policy: AvailabilityPolicy,
    ) -> ReservationForm {
        ReservationForm::from_query(
            catalog,
            policy,
            self.category.as_deref(),
            self.service.as_deref(),
        )
    }
}

#[derive(PartialEq)]
struct FormState(ReservationForm);

enum FormEdit {
    Replace(ReservationForm),
    Category(String),
    Service(String),
    Date(Date),
    Time(String),
    Name(String),
    Email(String),
    Phone(String),
    Notes(String),
}

impl Reducible for FormState {
    type Action = FormEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormEdit::Replace(next) => form = next,
            FormEdit::Category(key) => {
                form.select_category(&key);
            }
            FormEdit::Service(service) => {
                form.select_service(&service);
            }
            FormEdit::Date(date) => {
                form.select_date(date);
            }
            FormEdit::Time(slot) => {
                form.select_time(&slot);
            }
            FormEdit::Name(name) => form.set_name(name),
            FormEdit::Email(email) => form.set_email(email),
            FormEdit::Phone(phone) => form.set_phone(phone),
            FormEdit::Notes(notes) => form.set_notes(notes),
        }
        Rc::new(Self(form))
    }
}

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 rounded-md \
    bg-white text-neutral-900 focus:outline-none focus:ring-2 focus:ring-orange-500 \
    disabled:opacity-50";

fn field_error(form: &ReservationForm, field: Field) -> Html {
    match form.errors().get(field) {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-600">{message}</p>
        },
        None => html! {},
    }
}

fn on_input_edit(
    edit: fn(String) -> FormEdit,
    form: &UseReducerHandle<FormState>,
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(edit(input.value()));
    })
}

#[function_component]
pub fn ReservationPage() -> Html {
    use_title("Rezervace");
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();
    let policy = use_context::<AvailabilityPolicy>().unwrap_or_default();
    let query = use_location()
        .and_then(|location| location.query::<ReservationQuery>().ok())
        .unwrap_or_default();
    let toast = use_toast();
    let is_submitting = use_state(|| false);

    let form = {
        let query = query.clone();
        let policy = policy.clone();
        use_reducer(move || FormState(query.form(catalog, policy)))
    };

    // following another booking link while already on this page
    {
        let form = form.clone();
        use_effect_with(query, move |query| {
            form.dispatch(FormEdit::Replace(query.form(catalog, policy)));
        });
    }

    let on_category = {
        let form = form.clone();
        Callback::from(move |key: &'static str| {
            form.dispatch(FormEdit::Category(key.to_string()));
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormEdit::Service(select.value()));
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(date) = input.value().parse::<Date>() {
                form.dispatch(FormEdit::Date(date));
            }
        })
    };

    let on_time = {
        let form = form.clone();
        Callback::from(move |slot: String| form.dispatch(FormEdit::Time(slot)))
    };

    let on_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormEdit::Notes(input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let mut draft_form = form.0.clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let sink = ApiReservationSink::connect();
                match draft_form.submit(venue_today(), &sink).await {
                    Ok(_) => toast.success_with(
                        "Rezervace odeslána!",
                        "Brzy vás budeme kontaktovat s potvrzením.",
                    ),
                    Err(SubmitError::Invalid(errors)) => {
                        tracing::debug!(%errors, "reservation form invalid");
                    }
                    Err(SubmitError::Rejected(e)) => toast.error(e.to_string()),
                }
                form.dispatch(FormEdit::Replace(draft_form));
                is_submitting.set(false);
            });
        })
    };

    let state = &form.0;
    let draft = state.draft();
    let today = venue_today();
    let min_date = today.tomorrow().map(|d| d.to_string()).unwrap_or_default();
    let selected_category = catalog.category(&draft.category);
    let disabled = *is_submitting;

    html! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center mb-10">
                <h1 class="text-4xl font-bold text-neutral-900">{"Rezervace"}</h1>
                <p class="mt-4 text-lg text-neutral-600">
                    {"Vyberte si službu, datum a čas. Rezervaci vám potvrdíme emailem nebo telefonicky."}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-8 bg-white rounded-lg shadow-md border border-neutral-100 p-6 sm:p-8">
                <div>
                    <p class="block text-sm font-medium text-neutral-700 mb-2">{"Kategorie"}</p>
                    <div class="grid gap-3 sm:grid-cols-3">
                        {for catalog.categories().iter().map(|category| {
                            let key = category.key;
                            let onclick = on_category.reform(move |_: MouseEvent| key);
                            let active = draft.category == key;
                            html! {
                                <button
                                    type="button"
                                    {onclick}
                                    {disabled}
                                    class={classes!(
                                        "px-4", "py-3", "rounded-md", "border", "text-sm", "font-medium",
                                        if active {
                                            "border-orange-600 bg-orange-50 text-orange-700"
                                        } else {
                                            "border-neutral-300 text-neutral-700 hover:border-orange-400"
                                        }
                                    )}
                                >
                                    {category.title}
                                </button>
                            }
                        })}
                    </div>
                </div>

                <div>
                    <label for="service" class="block text-sm font-medium text-neutral-700 mb-2">{"Služba"}</label>
                    <select id="service" onchange={on_service} {disabled} class={INPUT_CLASSES}>
                        <option value="" selected={draft.service.is_none()} disabled={true}>
                            {"Vyberte službu"}
                        </option>
                        {for selected_category.into_iter().flat_map(|c| c.services.iter()).map(|service| html! {
                            <option
                                value={service.id}
                                selected={draft.service.as_deref() == Some(service.id)}
                            >
                                {service.name}
                            </option>
                        })}
                    </select>
                    {field_error(state, Field::Service)}
                </div>

                <div class="grid gap-6 sm:grid-cols-2">
                    <div>
                        <label for="date" class="flex items-center gap-2 text-sm font-medium text-neutral-700 mb-2">
                            {"Datum"}
                            if draft.date.map(availability::day_marker) == Some(DayMarker::Sunday) {
                                <span class="px-2 py-0.5 rounded-full bg-orange-100 text-orange-700 text-xs">
                                    {"Neděle"}
                                </span>
                            }
                        </label>
                        <input
                            id="date"
                            type="date"
                            min={min_date}
                            value={draft.date.map(|d| d.to_string()).unwrap_or_default()}
                            onchange={on_date}
                            {disabled}
                            class={INPUT_CLASSES}
                        />
                        if let Some(date) = draft.date.filter(|d| !availability::is_selectable(*d, today)) {
                            <p class="mt-1 text-sm text-red-600">
                                {format!("{} už nelze rezervovat", format_date(date))}
                            </p>
                        }
                        {field_error(state, Field::Date)}
                    </div>

                    <div>
                        <p class="block text-sm font-medium text-neutral-700 mb-2">{"Čas"}</p>
                        if state.available_times().is_empty() {
                            <p class="text-sm text-neutral-500 py-2">{"Nejprve vyberte datum"}</p>
                        } else {
                            <div class="grid grid-cols-4 gap-2">
                                {for state.available_times().iter().map(|slot| {
                                    let active = draft.time.as_deref() == Some(slot.as_str());
                                    let value = slot.clone();
                                    let onclick = on_time.reform(move |_: MouseEvent| value.clone());
                                    html! {
                                        <button
                                            type="button"
                                            {onclick}
                                            {disabled}
                                            class={classes!(
                                                "py-2", "rounded-md", "border", "text-sm",
                                                if active {
                                                    "border-orange-600 bg-orange-600 text-white"
                                                } else {
                                                    "border-neutral-300 text-neutral-700 hover:border-orange-400"
                                                }
                                            )}
                                        >
                                            {slot}
                                        </button>
                                    }
                                })}
                            </div>
                        }
                        {field_error(state, Field::Time)}
                    </div>
                </div>

                <div class="grid gap-6 sm:grid-cols-2">
                    <div class="sm:col-span-2">
                        <label for="name" class="block text-sm font-medium text-neutral-700 mb-2">{"Jméno a příjmení"}</label>
                        <input
                            id="name"
                            type="text"
                            autocomplete="name"
                            value={draft.name.clone()}
                            oninput={on_input_edit(FormEdit::Name, &form)}
                            {disabled}
                            class={INPUT_CLASSES}
                        />
                        {field_error(state, Field::Name)}
                    </div>
                    <div>
                        <label for="email" class="block text-sm font-medium text-neutral-700 mb-2">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            value={draft.email.clone()}
                            oninput={on_input_edit(FormEdit::Email, &form)}
                            {disabled}
                            class={INPUT_CLASSES}
                        />
                        {field_error(state, Field::Email)}
                    </div>
                    <div>
                        <label for="phone" class="block text-sm font-medium text-neutral-700 mb-2">{"Telefon"}</label>
                        <input
                            id="phone"
                            type="tel"
                            autocomplete="tel"
                            value={draft.phone.clone()}
                            oninput={on_input_edit(FormEdit::Phone, &form)}
                            {disabled}
                            class={INPUT_CLASSES}
                        />
                        {field_error(state, Field::Phone)}
                    </div>
                    <div class="sm:col-span-2">
                        <label for="notes" class="block text-sm font-medium text-neutral-700 mb-2">{"Poznámka (nepovinné)"}</label>
                        <textarea
                            id="notes"
                            rows="4"
                            value={draft.notes.clone()}
                            oninput={on_notes}
                            {disabled}
                            class={INPUT_CLASSES}
                        />
                        {field_error(state, Field::Notes)}
                    </div>
                </div>

                <button
                    type="submit"
                    {disabled}
                    class="w-full py-3 rounded-md bg-orange-600 text-white font-semibold hover:bg-orange-700 disabled:opacity-50"
                >
                    {if disabled { "Odesílání..." } else { "Odeslat rezervaci" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_uses_type_for_the_category() {
        let query: ReservationQuery =
            serde_json::from_str(r#"{"type":"zabava","service":"narozeniny"}"#)
                .unwrap();
        assert_eq!(query, ReservationQuery::new("zabava", "narozeniny"));
    }

    #[test]
    fn unknown_query_falls_back_to_default_category() {
        let query = ReservationQuery {
            category: Some("neexistuje".into()),
            service: None,
        };
        let form = query.form(
            ServiceCatalog::standard(),
            AvailabilityPolicy::standard(),
        );
        assert_eq!(form.draft().category, "sport");
        assert_eq!(form.draft().service, None);
    }
}
