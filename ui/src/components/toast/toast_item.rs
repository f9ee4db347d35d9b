use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (colors, icon) = match toast.toast_type {
        ToastType::Error => ("bg-red-50 border-red-200 text-red-700", "✕"),
        ToastType::Success => {
            ("bg-green-50 border-green-200 text-green-700", "✓")
        }
    };

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_| {
            toast_handle.remove(toast_id);
        })
    };

    html! {
        <div
            role="status"
            class={format!(
                "relative p-4 rounded-lg border shadow-lg transition-all duration-300 ease-out {}",
                colors
            )}
        >
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{icon}</span>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-semibold leading-5">{&toast.title}</p>
                    if let Some(description) = &toast.description {
                        <p class="mt-1 text-sm leading-5">{description}</p>
                    }
                </div>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-neutral-400 hover:text-neutral-600 transition-colors"
                    title="Zavřít"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
