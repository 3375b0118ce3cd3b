use yew::prelude::*;
use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Success => ("alert-success", "fas fa-check-circle"),
            ToastKind::Error => ("alert-error", "fas fa-exclamation-circle"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

/// Transient notifications. Each toast expires after
/// `AppSettings::toast_duration_ms`.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.push.emit((message, ToastKind::Success));
    }

    pub fn show_error(&self, message: String) {
        self.push.emit((message, ToastKind::Error));
    }
}

enum ToastAction {
    Push(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        ToastList { toasts }.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let context = {
        let dispatcher = list.dispatcher();
        let push = use_callback((), move |(message, kind): (String, ToastKind), _| {
            log::debug!("Toast: {}", message);
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, message, kind }));

            let dispatcher = dispatcher.clone();
            let duration_ms = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        });
        ToastContext { push }
    };

    html! {
        <ContextProvider<ToastContext> {context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50 print:hidden">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let dispatcher = list.dispatcher();
                    let on_close = Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Remove(id)));
                    let (alert, icon) = toast.kind.classes();

                    html! {
                        <div key={id} class={classes!("alert", alert, "shadow-lg")}>
                            <i class={icon}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
