use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

/// Visual flavor of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastData {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastData {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastData>,
    pub on_dismiss: Callback<()>,
}

/// Corner notification that dismisses itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.clone(), move |toast| {
            let timer = toast
                .as_ref()
                .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
            move || drop(timer)
        });
    }

    let Some(toast) = props.toast.clone() else {
        return html! {};
    };

    let alert_class = match toast.kind {
        ToastKind::Success => "alert alert-success shadow-lg",
        ToastKind::Error => "alert alert-error shadow-lg",
    };

    html! {
        <div class="toast toast-end z-50">
            <div class={alert_class}>
                <span>{toast.text}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_kind() {
        let ok = ToastData::success("Bem-vindo de volta!");
        assert_eq!(ok.kind, ToastKind::Success);
        assert_eq!(ok.text, "Bem-vindo de volta!");

        let err = ToastData::error("Erro no cadastro");
        assert_eq!(err.kind, ToastKind::Error);
    }
}
