use crate::api::JojaClient;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::AlterarSenha;
use shared::validation::valida_senha;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Admin page: change another account's password.
#[function_component(ChangeUserPasswordPage)]
pub fn change_user_password_page() -> Html {
    let usuario_id = use_state(String::new);
    let senha_atual = use_state(String::new);
    let nova_senha = use_state(String::new);
    let loading = use_state(|| false);
    let toast = use_state(|| None::<ToastData>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_usuario_id = text_input(&usuario_id);
    let on_senha_atual = text_input(&senha_atual);
    let on_nova_senha = text_input(&nova_senha);

    let onsubmit = {
        let usuario_id = usuario_id.clone();
        let senha_atual = senha_atual.clone();
        let nova_senha = nova_senha.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(target_id) = usuario_id.trim().parse::<i64>() else {
                toast.set(Some(ToastData::error("Informe o ID numérico do usuário.")));
                return;
            };
            if let Err(validation_error) = valida_senha(&nova_senha) {
                toast.set(Some(ToastData::error(validation_error.to_string())));
                return;
            }
            let payload = AlterarSenha {
                senha_atual: (*senha_atual).clone(),
                nova_senha: (*nova_senha).clone(),
            };
            loading.set(true);
            let toast_ref = toast.clone();
            let loading_ref = loading.clone();
            let nova_senha_ref = nova_senha.clone();
            let senha_atual_ref = senha_atual.clone();
            spawn_local(async move {
                match JojaClient::shared().change_password(target_id, &payload).await {
                    Ok(()) => {
                        senha_atual_ref.set(String::new());
                        nova_senha_ref.set(String::new());
                        toast_ref.set(Some(ToastData::success(format!(
                            "Senha do usuário {target_id} alterada."
                        ))));
                    }
                    Err(err) => toast_ref.set(Some(ToastData::error(err.to_string()))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |(): ()| toast.set(None))
    };

    let is_busy = *loading;

    html! {
        <div class="p-4 space-y-6">
            <Link<MainRoute> to={MainRoute::ManageUsers} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                {"Gerenciar usuários"}
            </Link<MainRoute>>

            <div class="card bg-base-200 shadow-xl max-w-xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <h1 class="card-title text-2xl">
                        <Icon icon_id={IconId::LucideKey} class="w-6 h-6" />
                        {"Alterar senha de usuário"}
                    </h1>
                    <div class="form-control">
                        <label class="label" for="usuario-id">
                            <span class="label-text">{"ID do usuário"}</span>
                        </label>
                        <input id="usuario-id" class="input input-bordered" type="number" required=true
                            value={(*usuario_id).clone()} oninput={on_usuario_id} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="senha-atual">
                            <span class="label-text">{"Senha atual"}</span>
                        </label>
                        <input id="senha-atual" class="input input-bordered" type="password" required=true
                            value={(*senha_atual).clone()} oninput={on_senha_atual} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="nova-senha">
                            <span class="label-text">{"Nova senha"}</span>
                        </label>
                        <input id="nova-senha" class="input input-bordered" type="password" required=true
                            value={(*nova_senha).clone()} oninput={on_nova_senha} />
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Salvando..." } else { "Alterar senha" }}
                        </button>
                    </div>
                </form>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
