use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let toasts = match use_context::<ToastContext>() {
        Some(context) => {
            let mut toasts: Vec<_> = context.toasts.values().cloned().collect();
            toasts.sort_by_key(|toast| toast.sequence());
            toasts
        }
        None => vec![],
    };

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed bottom-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
