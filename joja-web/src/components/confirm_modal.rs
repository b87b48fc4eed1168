use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Confirmar"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Blocking confirmation dialog for destructive actions.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{props.title.clone()}</h3>
                <p class="py-4">{props.message.clone()}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel}>{"Cancelar"}</button>
                    <button class="btn btn-error" onclick={on_confirm}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
