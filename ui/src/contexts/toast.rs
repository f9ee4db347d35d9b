use std::collections::HashMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
    /// Insertion order, so toasts stack in the order they were raised.
    sequence: u64,
}

impl Toast {
    pub fn new(title: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            toast_type,
            duration: Some(5000),
            sequence: 0,
        }
    }

    pub fn error(title: String) -> Self {
        Self::new(title, ToastType::Error)
    }

    pub fn success(title: String) -> Self {
        Self::new(title, ToastType::Success)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
    next_sequence: u64,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_sequence = self.next_sequence;

        match action {
            ToastAction::Add(mut toast) => {
                toast.sequence = next_sequence;
                next_sequence += 1;
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        std::rc::Rc::new(ToastState {
            toasts,
            next_sequence,
        })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!("toast raised outside a ToastProvider: {}", toast.title);
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, title: impl Into<String>) {
        self.add(Toast::error(title.into()));
    }

    pub fn success(&self, title: impl Into<String>) {
        self.add(Toast::success(title.into()));
    }

    /// Success toast with a second line of text.
    pub fn success_with(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.add(Toast::success(title.into()).description(description));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}
