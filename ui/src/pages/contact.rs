use payloads::requests::is_valid_email;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::{use_fetch, use_title};

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Po-Pá", "9:00-21:00"),
    ("So", "10:00-18:00"),
    ("Ne", "Zavřeno"),
];

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 rounded-md \
    bg-white text-neutral-900 focus:outline-none focus:ring-2 focus:ring-orange-500";

#[derive(Clone, Default, PartialEq)]
struct Message {
    name: String,
    email: String,
    subject: String,
    body: String,
}

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Kontakt");
    let toast = use_toast();
    let message = use_state(Message::default);

    let layout = use_fetch((), || async {
        get_api_client()
            .get_layout()
            .await
            .map_err(|e| e.to_string())
    });

    let edit = |apply: fn(&mut Message, String)| {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlTextAreaElement>() {
                Some(area) => area.value(),
                None => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*message).clone();
            apply(&mut next, value);
            message.set(next);
        })
    };

    // there is no messaging backend; the form only acknowledges the visitor
    let on_submit = {
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if message.name.trim().is_empty()
                || message.body.trim().is_empty()
                || !is_valid_email(message.email.trim())
            {
                toast.error("Vyplňte prosím jméno, platný email a zprávu");
                return;
            }
            tracing::debug!(subject = %message.subject, "contact form sent");
            toast.success_with(
                "Zpráva odeslána",
                "Děkujeme za vaši zprávu. Budeme vás kontaktovat co nejdříve.",
            );
            message.set(Message::default());
        })
    };

    html! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-neutral-900">{"Kontaktujte nás"}</h1>
                <p class="mt-4 text-lg text-neutral-600">
                    {"Máte dotaz nebo chcete uspořádat akci? Napište nám a ozveme se vám."}
                </p>
            </div>

            <div class="grid gap-10 lg:grid-cols-2">
                <div class="space-y-8">
                    {layout.render("kontaktů", |settings: &payloads::LayoutSettings, _| html! {
                        <div class="bg-white rounded-lg shadow-md border border-neutral-100 p-6 space-y-3">
                            <h2 class="text-xl font-semibold text-neutral-900">{"Kontaktní údaje"}</h2>
                            <p>
                                <span class="text-neutral-500">{"Telefon: "}</span>
                                <a href={format!("tel:{}", settings.contact_phone.replace(' ', ""))} class="text-orange-600">
                                    {&settings.contact_phone}
                                </a>
                            </p>
                            <p>
                                <span class="text-neutral-500">{"Email: "}</span>
                                <a href={format!("mailto:{}", settings.contact_email)} class="text-orange-600">
                                    {&settings.contact_email}
                                </a>
                            </p>
                            <p>
                                <span class="text-neutral-500">{"Adresa: "}</span>
                                {&settings.address}
                            </p>
                        </div>
                    })}

                    <div class="bg-white rounded-lg shadow-md border border-neutral-100 p-6">
                        <h2 class="text-xl font-semibold text-neutral-900 mb-3">{"Otevírací doba"}</h2>
                        <dl class="space-y-1 text-neutral-700">
                            {for OPENING_HOURS.iter().map(|(days, hours)| html! {
                                <div class="flex justify-between">
                                    <dt>{*days}</dt>
                                    <dd>{*hours}</dd>
                                </div>
                            })}
                        </dl>
                    </div>
                </div>

                <form onsubmit={on_submit} class="bg-white rounded-lg shadow-md border border-neutral-100 p-6 space-y-4">
                    <h2 class="text-xl font-semibold text-neutral-900">{"Napište nám"}</h2>
                    <div class="grid gap-4 sm:grid-cols-2">
                        <input
                            type="text"
                            placeholder="Jméno"
                            value={message.name.clone()}
                            oninput={edit(|m, v| m.name = v)}
                            class={INPUT_CLASSES}
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            value={message.email.clone()}
                            oninput={edit(|m, v| m.email = v)}
                            class={INPUT_CLASSES}
                        />
                    </div>
                    <input
                        type="text"
                        placeholder="Předmět"
                        value={message.subject.clone()}
                        oninput={edit(|m, v| m.subject = v)}
                        class={INPUT_CLASSES}
                    />
                    <textarea
                        rows="6"
                        placeholder="Vaše zpráva"
                        value={message.body.clone()}
                        oninput={edit(|m, v| m.body = v)}
                        class={INPUT_CLASSES}
                    />
                    <button
                        type="submit"
                        class="w-full py-3 rounded-md bg-orange-600 text-white font-semibold hover:bg-orange-700"
                    >
                        {"Odeslat zprávu"}
                    </button>
                </form>
            </div>
        </div>
    }
}
