use jiff::civil::Date;
use payloads::catalog::ServiceCatalog;
use payloads::sync::Mutation;
use payloads::{ReservationStatus, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{CARD, DANGER_BUTTON, INPUT, SECONDARY_BUTTON};
use crate::hooks::use_admin_table;
use crate::remote::ReservationsTable;
use crate::utils::confirm;
use crate::utils::time::{format_date, format_timestamp};

fn status_badge(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "bg-amber-100 text-amber-800",
        ReservationStatus::Confirmed => "bg-green-100 text-green-800",
        ReservationStatus::Cancelled => "bg-neutral-200 text-neutral-700",
    }
}

#[function_component]
pub(super) fn ReservationsSection() -> Html {
    let table = use_admin_table(ReservationsTable::connect);
    let catalog = use_context::<ServiceCatalog>().unwrap_or_default();
    let day = use_state(|| None::<Date>);

    let on_day = {
        let day = day.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            day.set(input.value().parse::<Date>().ok());
        })
    };
    let on_clear_day = {
        let day = day.clone();
        Callback::from(move |_: MouseEvent| day.set(None))
    };

    let transition = |reservation: &responses::Reservation,
                      status: ReservationStatus,
                      success: &'static str| {
        let apply = table.apply.clone();
        let updated = responses::Reservation {
            status,
            ..reservation.clone()
        };
        Callback::from(move |_: MouseEvent| {
            apply.emit((Mutation::Update(updated.clone()), success));
        })
    };

    let list = match &table.list {
        None => {
            return html! {
                <p class="text-neutral-600">{"Načítání rezervací..."}</p>
            };
        }
        Some(list) => list,
    };

    // the api orders by date then time
    let shown: Vec<&responses::Reservation> = list
        .iter()
        .filter(|r| day.is_none_or(|d| r.reservation_date == d))
        .collect();

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-end gap-3">
                <h2 class="text-xl font-semibold text-neutral-900 mr-auto">
                    {format!("Rezervace ({})", shown.len())}
                </h2>
                <input
                    type="date"
                    class={classes!(INPUT, "w-auto")}
                    value={day.map(|d| d.to_string()).unwrap_or_default()}
                    onchange={on_day}
                />
                if day.is_some() {
                    <button class={SECONDARY_BUTTON} onclick={on_clear_day}>{"Všechny dny"}</button>
                }
                <button class={SECONDARY_BUTTON} onclick={table.refetch.reform(|_: MouseEvent| ())}>
                    {"Obnovit"}
                </button>
            </div>

            if shown.is_empty() {
                <p class="text-neutral-500">{"Žádné rezervace."}</p>
            }

            {for shown.into_iter().map(|reservation| {
                let service_name = catalog
                    .lookup(&reservation.category, &reservation.service)
                    .map(|s| s.name)
                    .unwrap_or(reservation.service.as_str());
                let on_delete = {
                    let apply = table.apply.clone();
                    let id = reservation.id;
                    Callback::from(move |_: MouseEvent| {
                        if confirm("Opravdu chcete tuto rezervaci smazat?") {
                            apply.emit((Mutation::Delete(id), "Rezervace smazána"));
                        }
                    })
                };
                html! {
                    <div key={reservation.id.to_string()} class={CARD}>
                        <div class="flex flex-wrap items-start justify-between gap-4">
                            <div>
                                <p class="font-semibold text-neutral-900">
                                    {format!(
                                        "{} {} · {}",
                                        format_date(reservation.reservation_date),
                                        reservation.reservation_time,
                                        service_name
                                    )}
                                </p>
                                <p class="text-sm text-neutral-500">{catalog.title_for(&reservation.category)}</p>
                                <p class="mt-2 text-sm text-neutral-700">
                                    {&reservation.customer_name}
                                    {" · "}
                                    <a href={format!("mailto:{}", reservation.email)} class="text-orange-600">{&reservation.email}</a>
                                    {" · "}
                                    <a href={format!("tel:{}", reservation.phone)} class="text-orange-600">{&reservation.phone}</a>
                                </p>
                                if let Some(notes) = &reservation.notes {
                                    <p class="mt-1 text-sm text-neutral-600 italic">{notes}</p>
                                }
                                <p class="mt-1 text-xs text-neutral-400">
                                    {format!("Vytvořeno {}", format_timestamp(reservation.created_at))}
                                </p>
                            </div>
                            <div class="flex flex-col items-end gap-2">
                                <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", "font-medium", status_badge(reservation.status))}>
                                    {reservation.status.label()}
                                </span>
                                <div class="flex gap-2">
                                    if reservation.status.can_transition_to(ReservationStatus::Confirmed) {
                                        <button
                                            class="px-3 py-1.5 rounded-md text-sm bg-green-600 text-white hover:bg-green-700"
                                            onclick={transition(reservation, ReservationStatus::Confirmed, "Rezervace potvrzena")}
                                        >
                                            {"Potvrdit"}
                                        </button>
                                    }
                                    if reservation.status.can_transition_to(ReservationStatus::Cancelled) {
                                        <button
                                            class={SECONDARY_BUTTON}
                                            onclick={transition(reservation, ReservationStatus::Cancelled, "Rezervace zrušena")}
                                        >
                                            {"Zrušit"}
                                        </button>
                                    }
                                    <button class={DANGER_BUTTON} onclick={on_delete}>{"Smazat"}</button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
