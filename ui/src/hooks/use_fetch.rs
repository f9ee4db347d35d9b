use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Without data this shows "Načítání {context}..." or the error. With
    /// data the render function gets the data and whether a refetch is in
    /// progress; an error from a failed refetch leaves the previous data on
    /// screen.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match self.data.as_ref() {
            None if self.error.is_some() => html! {
                <div class="p-4 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">
                        {format!(
                            "Chyba při načítání {}: {}",
                            context,
                            self.error.as_deref().unwrap_or_default()
                        )}
                    </p>
                </div>
            },
            None => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600">
                        {format!("Načítání {}...", context)}
                    </p>
                </div>
            },
            Some(data) => render_fn(data, self.is_loading),
        }
    }
}

/// Fetch on mount and whenever `deps` change, with a manual refetch.
///
/// The fetch function captures what it needs from the closure; `deps` only
/// drives `use_callback` and `use_effect_with`.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
