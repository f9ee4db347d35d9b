use yew::prelude::*;

/// Sets the document title, suffixed with the venue name. No cleanup on
/// unmount since every page sets its own title.
#[hook]
pub fn use_title(title: &str) {
    let title = if title.is_empty() {
        "UM Parkour".to_string()
    } else {
        format!("{title} | UM Parkour")
    };
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
