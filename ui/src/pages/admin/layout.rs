use payloads::LayoutSettings;
use yew::prelude::*;

use super::{CARD, PRIMARY_BUTTON, text_area, text_input};
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_fetch;

/// Layout settings as typed; blank links are stored as `None`.
#[derive(Clone, Default, PartialEq)]
struct LayoutInput {
    contact_phone: String,
    contact_email: String,
    address: String,
    facebook_url: String,
    instagram_url: String,
    youtube_url: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl LayoutInput {
    fn from_settings(settings: &LayoutSettings) -> Self {
        Self {
            contact_phone: settings.contact_phone.clone(),
            contact_email: settings.contact_email.clone(),
            address: settings.address.clone(),
            facebook_url: settings.facebook_url.clone().unwrap_or_default(),
            instagram_url: settings.instagram_url.clone().unwrap_or_default(),
            youtube_url: settings.youtube_url.clone().unwrap_or_default(),
        }
    }

    fn parse(&self) -> Result<LayoutSettings, String> {
        let settings = LayoutSettings {
            contact_phone: self.contact_phone.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            address: self.address.trim().to_string(),
            facebook_url: optional(&self.facebook_url),
            instagram_url: optional(&self.instagram_url),
            youtube_url: optional(&self.youtube_url),
        };
        settings.validate().map_err(|e| e.to_string())?;
        Ok(settings)
    }
}

#[function_component]
pub(super) fn LayoutSection() -> Html {
    let layout = use_fetch((), || async {
        get_api_client().get_layout().await.map_err(|e| e.to_string())
    });

    layout.render("nastavení", |settings, _| {
        html! { <LayoutForm initial={settings.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct LayoutFormProps {
    initial: LayoutSettings,
}

#[function_component]
fn LayoutForm(props: &LayoutFormProps) -> Html {
    let toast = use_toast();
    let input = use_state(|| LayoutInput::from_settings(&props.initial));
    let is_saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let field = |apply: fn(&mut LayoutInput, String)| {
        let input = input.clone();
        Callback::from(move |value: String| {
            let mut next = (*input).clone();
            apply(&mut next, value);
            input.set(next);
        })
    };

    let on_save = {
        let input = input.clone();
        let is_saving = is_saving.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let settings = match input.parse() {
                Ok(settings) => settings,
                Err(e) => {
                    error.set(Some(e));
                    return;
                }
            };
            error.set(None);
            let input = input.clone();
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_saving.set(true);
                match get_api_client().update_layout(&settings).await {
                    Ok(saved) => {
                        input.set(LayoutInput::from_settings(&saved));
                        toast.success("Změny uloženy");
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div class={classes!(CARD, "space-y-4", "max-w-2xl")}>
            <h2 class="text-xl font-semibold text-neutral-900">{"Kontakty a odkazy"}</h2>
            if let Some(error) = &*error {
                <p class="text-sm text-red-600">{error}</p>
            }
            <div class="grid gap-3 sm:grid-cols-2">
                {text_input("Telefon", &input.contact_phone, field(|i, v| i.contact_phone = v))}
                {text_input("E-mail", &input.contact_email, field(|i, v| i.contact_email = v))}
            </div>
            {text_area("Adresa", &input.address, 2, field(|i, v| i.address = v))}
            {text_input("Facebook", &input.facebook_url, field(|i, v| i.facebook_url = v))}
            {text_input("Instagram", &input.instagram_url, field(|i, v| i.instagram_url = v))}
            {text_input("YouTube", &input.youtube_url, field(|i, v| i.youtube_url = v))}
            <div class="flex justify-end">
                <button class={PRIMARY_BUTTON} onclick={on_save} disabled={*is_saving}>
                    {if *is_saving { "Ukládání..." } else { "Uložit změny" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_links_become_none() {
        let input = LayoutInput {
            contact_phone: "+420 777 123 456".into(),
            contact_email: " info@umparkour.cz ".into(),
            address: "Praha".into(),
            facebook_url: "  ".into(),
            instagram_url: "https://instagram.com/umparkour".into(),
            youtube_url: String::new(),
        };
        let settings = input.parse().unwrap();
        assert_eq!(settings.contact_email, "info@umparkour.cz");
        assert_eq!(settings.facebook_url, None);
        assert_eq!(
            settings.instagram_url.as_deref(),
            Some("https://instagram.com/umparkour")
        );
        assert_eq!(settings.youtube_url, None);
    }

    #[test]
    fn missing_contact_is_rejected() {
        let input = LayoutInput {
            contact_email: "info@umparkour.cz".into(),
            address: "Praha".into(),
            ..Default::default()
        };
        assert!(input.parse().is_err());
    }
}
