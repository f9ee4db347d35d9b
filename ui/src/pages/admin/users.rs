use payloads::sync::Mutation;
use payloads::{Role, UserId, responses};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{
    CARD, DANGER_BUTTON, INPUT, LABEL, PRIMARY_BUTTON, SECONDARY_BUTTON,
    text_input,
};
use crate::State;
use crate::hooks::use_admin_table;
use crate::remote::UsersTable;
use crate::utils::confirm;
use crate::utils::time::format_timestamp;

#[function_component]
pub(super) fn UsersSection() -> Html {
    let table = use_admin_table(UsersTable::connect);
    let (state, _) = use_store::<State>();
    let editing = use_state(|| None::<UserId>);
    let own_id = state.profile().map(|p| p.id);

    let Some(list) = &table.list else {
        return html! { <p class="text-neutral-600">{"Načítání uživatelů..."}</p> };
    };

    html! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-neutral-900">
                {format!("Uživatelé ({})", list.len())}
            </h2>
            {for list.iter().map(|user| {
                let is_self = own_id == Some(user.id);
                if *editing == Some(user.id) {
                    let on_save = {
                        let apply = table.apply.clone();
                        let editing = editing.clone();
                        Callback::from(move |updated: responses::UserProfile| {
                            apply.emit((Mutation::Update(updated), "Změny uloženy"));
                            editing.set(None);
                        })
                    };
                    let on_cancel = {
                        let editing = editing.clone();
                        Callback::from(move |()| editing.set(None))
                    };
                    html! {
                        <UserEditor
                            key={user.id.to_string()}
                            user={user.clone()}
                            {is_self}
                            {on_save}
                            {on_cancel}
                        />
                    }
                } else {
                    let on_edit = {
                        let editing = editing.clone();
                        let id = user.id;
                        Callback::from(move |_: MouseEvent| editing.set(Some(id)))
                    };
                    let on_delete = {
                        let apply = table.apply.clone();
                        let id = user.id;
                        Callback::from(move |_: MouseEvent| {
                            if confirm("Opravdu chcete tohoto uživatele smazat?") {
                                apply.emit((Mutation::Delete(id), "Uživatel smazán"));
                            }
                        })
                    };
                    html! {
                        <div key={user.id.to_string()} class={classes!(CARD, "flex", "items-center", "justify-between", "gap-4")}>
                            <div>
                                <p class="font-semibold text-neutral-900">
                                    {user.display_name()}
                                    if is_self {
                                        <span class="ml-2 text-xs text-neutral-500">{"(vy)"}</span>
                                    }
                                </p>
                                <p class="text-sm text-neutral-600">{&user.email}</p>
                                <p class="text-xs text-neutral-400">
                                    {format!("Registrován {}", format_timestamp(user.created_at))}
                                </p>
                            </div>
                            <div class="flex items-center gap-2">
                                <span class="px-2 py-0.5 rounded-full text-xs bg-neutral-100 text-neutral-700">
                                    {user.role.label()}
                                </span>
                                if !user.is_active {
                                    <span class="px-2 py-0.5 rounded-full text-xs bg-red-100 text-red-700">
                                        {"Neaktivní"}
                                    </span>
                                }
                                <button class={SECONDARY_BUTTON} onclick={on_edit}>{"Upravit"}</button>
                                <button class={DANGER_BUTTON} onclick={on_delete} disabled={is_self}>
                                    {"Smazat"}
                                </button>
                            </div>
                        </div>
                    }
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserEditorProps {
    user: responses::UserProfile,
    /// The signed in admin cannot lock themselves out.
    is_self: bool,
    on_save: Callback<responses::UserProfile>,
    on_cancel: Callback<()>,
}

#[function_component]
fn UserEditor(props: &UserEditorProps) -> Html {
    let full_name =
        use_state(|| props.user.full_name.clone().unwrap_or_default());
    let role = use_state(|| props.user.role);
    let is_active = use_state(|| props.user.is_active);

    let on_name = {
        let full_name = full_name.clone();
        Callback::from(move |value: String| full_name.set(value))
    };
    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(match select.value().as_str() {
                "admin" => Role::Admin,
                _ => Role::User,
            });
        })
    };
    let on_active = {
        let is_active = is_active.clone();
        Callback::from(move |_: Event| is_active.set(!*is_active))
    };
    let on_save = {
        let user = props.user.clone();
        let full_name = full_name.clone();
        let role = role.clone();
        let is_active = is_active.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let name = full_name.trim();
            on_save.emit(responses::UserProfile {
                full_name: (!name.is_empty()).then(|| name.to_string()),
                role: *role,
                is_active: *is_active,
                ..user.clone()
            });
        })
    };

    html! {
        <div class={classes!(CARD, "space-y-3", "border-orange-300")}>
            <p class="text-sm text-neutral-600">{&props.user.email}</p>
            {text_input("Jméno", &full_name, on_name)}
            <div>
                <label class={LABEL}>{"Role"}</label>
                <select class={INPUT} onchange={on_role} disabled={props.is_self}>
                    {for [Role::User, Role::Admin].into_iter().map(|option| html! {
                        <option
                            value={option.to_string()}
                            selected={*role == option}
                        >
                            {option.label()}
                        </option>
                    })}
                </select>
            </div>
            <label class="flex items-center gap-2 text-sm text-neutral-700">
                <input
                    type="checkbox"
                    checked={*is_active}
                    onchange={on_active}
                    disabled={props.is_self}
                />
                {"Aktivní účet"}
            </label>
            <div class="flex gap-2 justify-end">
                <button class={SECONDARY_BUTTON} onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                    {"Zrušit"}
                </button>
                <button class={PRIMARY_BUTTON} onclick={on_save}>{"Uložit"}</button>
            </div>
        </div>
    }
}
