use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "notification-success",
            ToastKind::Error => "notification-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

/// Anything that can put a toast in front of the visitor.
pub trait Notify {
    fn notify(&self, kind: ToastKind, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

pub enum ToastAction {
    Push(Toast),
    Leave(u64),
    Remove(u64),
}

/// Toasts on screen, oldest first. Identical messages are not merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(toast) => self.toasts.push(toast),
            ToastAction::Leave(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                    toast.leaving = true;
                }
            }
            ToastAction::Remove(id) => self.toasts.retain(|t| t.id != id),
        }
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle handed out through context by [`Toaster`].
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<(ToastKind, String)>);

impl Default for Notifier {
    /// Used when no [`Toaster`] is mounted above the caller.
    fn default() -> Self {
        Notifier(Callback::from(|(_, message): (ToastKind, String)| {
            log::warn!("Toast with no toaster mounted: {}", message);
        }))
    }
}

impl Notify for Notifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.0.emit((kind, message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0u64);

    let notifier = {
        let stack = stack.clone();
        use_memo(
            move |_| {
                Notifier(Callback::from(move |(kind, message): (ToastKind, String)| {
                    let id = {
                        let mut next = next_id.borrow_mut();
                        *next += 1;
                        *next
                    };
                    stack.dispatch(ToastAction::Push(Toast {
                        id,
                        kind,
                        message,
                        leaving: false,
                    }));

                    let stack = stack.clone();
                    let exit_ms = config.toast_exit_ms;
                    Timeout::new(config.toast_ms, move || {
                        stack.dispatch(ToastAction::Leave(id));
                        Timeout::new(exit_ms, move || {
                            stack.dispatch(ToastAction::Remove(id));
                        })
                        .forget();
                    })
                    .forget();
                }))
            },
            (),
        )
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        pointer-events: none;
                    }
                    .notification {
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 10px;
                        box-shadow: 0 5px 20px rgba(0,0,0,0.2);
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        font-size: 1rem;
                        font-weight: 500;
                        animation: slideInRight 0.3s ease-out;
                    }
                    .notification-success { background: #27ae60; }
                    .notification-error { background: #e74c3c; }
                    .notification.leaving {
                        animation: slideOutRight 0.3s ease-out forwards;
                    }
                    @keyframes slideInRight {
                        from { transform: translateX(400px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOutRight {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(400px); opacity: 0; }
                    }
                "#}
            </style>
            { for props.children.iter() }
            <div class="notification-stack">
                { for stack.toasts.iter().map(|toast| html! {
                    <div
                        key={toast.id}
                        class={classes!("notification", toast.kind.class(), toast.leaving.then(|| "leaving"))}
                        role="status"
                    >
                        <i class={toast.kind.icon()}></i>
                        <span>{ toast.message.clone() }</span>
                    </div>
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, kind: ToastKind, message: &str) -> Toast {
        Toast {
            id,
            kind,
            message: message.to_string(),
            leaving: false,
        }
    }

    #[test]
    fn duplicate_messages_stack() {
        let mut stack = ToastStack::default();
        stack.apply(ToastAction::Push(toast(1, ToastKind::Error, "otra vez")));
        stack.apply(ToastAction::Push(toast(2, ToastKind::Error, "otra vez")));
        assert_eq!(stack.toasts.len(), 2);
    }

    #[test]
    fn leave_then_remove_only_touches_named_toast() {
        let mut stack = ToastStack::default();
        stack.apply(ToastAction::Push(toast(1, ToastKind::Success, "uno")));
        stack.apply(ToastAction::Push(toast(2, ToastKind::Error, "dos")));
        stack.apply(ToastAction::Push(toast(3, ToastKind::Success, "tres")));

        stack.apply(ToastAction::Leave(2));
        assert_eq!(
            stack.toasts.iter().map(|t| t.leaving).collect::<Vec<_>>(),
            vec![false, true, false]
        );

        stack.apply(ToastAction::Remove(2));
        assert_eq!(
            stack.toasts.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut stack = ToastStack::default();
        stack.apply(ToastAction::Push(toast(1, ToastKind::Success, "uno")));
        stack.apply(ToastAction::Leave(9));
        stack.apply(ToastAction::Remove(9));
        assert_eq!(stack.toasts, vec![toast(1, ToastKind::Success, "uno")]);
    }
}
