use payloads::sync::{EditableList, Mutation, RemoteTable, reconcile};
use yew::prelude::*;

use crate::contexts::use_toast;

/// State of one admin section's table.
pub struct AdminTable<R: RemoteTable> {
    /// `None` until the first fetch succeeds.
    pub list: Option<EditableList<R::Record>>,
    /// Handle to the list, for commands that need more than a [`Mutation`].
    pub handle: UseStateHandle<Option<EditableList<R::Record>>>,
    pub is_loading: bool,
    /// Apply a change and push it to the api. The message is shown as a
    /// success toast once the api accepts the change.
    pub apply: Callback<(Mutation<R::Record, R::Draft>, &'static str)>,
    pub refetch: Callback<()>,
}

/// Fetch a table on mount and route every edit through [`reconcile`].
///
/// Failures are reported with an error toast; the list on screen is whatever
/// the reconciliation left behind.
#[hook]
pub fn use_admin_table<R>(connect: fn() -> R) -> AdminTable<R>
where
    R: RemoteTable + 'static,
    R::Record: 'static,
    R::Draft: 'static,
{
    let list = use_state(|| None::<EditableList<R::Record>>);
    let is_loading = use_state(|| false);
    let toast = use_toast();

    let refetch = {
        let list = list.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();

        use_callback((), move |_, _| {
            let list = list.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match EditableList::load(&connect()).await {
                    Ok(loaded) => list.set(Some(loaded)),
                    Err(e) => toast.error(e.to_string()),
                }
                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
        });
    }

    let apply = {
        let list = list.clone();
        let is_loading = is_loading.clone();

        Callback::from(
            move |(mutation, success): (
                Mutation<R::Record, R::Draft>,
                &'static str,
            )| {
                let Some(mut current) = (*list).clone() else {
                    toast.error("Seznam se ještě načítá");
                    return;
                };
                let list = list.clone();
                let is_loading = is_loading.clone();
                let toast = toast.clone();

                yew::platform::spawn_local(async move {
                    is_loading.set(true);
                    let remote = connect();
                    let result = reconcile(
                        &mut current,
                        &remote,
                        mutation,
                        |published| list.set(Some(published.clone())),
                    )
                    .await;
                    match result {
                        Ok(()) => toast.success(success),
                        Err(e) => toast.error(e.to_string()),
                    }
                    is_loading.set(false);
                });
            },
        )
    };

    AdminTable {
        list: (*list).clone(),
        handle: list,
        is_loading: *is_loading,
        apply,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
