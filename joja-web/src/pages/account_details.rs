use crate::api::JojaClient;
use crate::components::toast::{Toast, ToastData};
use crate::models::app_state::AppState;
use crate::session::Session;
use shared::models::AlterarSenha;
use shared::validation::{valida_confirmacao, valida_senha};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store_value;

/// The signed-in user's own data plus a password change form.
#[function_component(AccountDetailsPage)]
pub fn account_details_page() -> Html {
    let state = use_store_value::<AppState>();
    let session = use_context::<Session>();

    let senha_atual = use_state(String::new);
    let nova_senha = use_state(String::new);
    let confirmar = use_state(String::new);
    let loading = use_state(|| false);
    let toast = use_state(|| None::<ToastData>);

    let Some(user) = state.user.clone() else {
        return html! {};
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_senha_atual = text_input(&senha_atual);
    let on_nova_senha = text_input(&nova_senha);
    let on_confirmar = text_input(&confirmar);

    let onsubmit = {
        let senha_atual = senha_atual.clone();
        let nova_senha = nova_senha.clone();
        let confirmar = confirmar.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let account_id = user.id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let validation = valida_senha(&nova_senha)
                .err()
                .or_else(|| valida_confirmacao(&confirmar, &nova_senha).err());
            if let Some(validation_error) = validation {
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
            let senha_atual_ref = senha_atual.clone();
            let nova_senha_ref = nova_senha.clone();
            let confirmar_ref = confirmar.clone();
            spawn_local(async move {
                match JojaClient::shared().change_password(account_id, &payload).await {
                    Ok(()) => {
                        senha_atual_ref.set(String::new());
                        nova_senha_ref.set(String::new());
                        confirmar_ref.set(String::new());
                        toast_ref.set(Some(ToastData::success("Senha alterada com sucesso!")));
                    }
                    Err(err) => toast_ref.set(Some(ToastData::error(err.to_string()))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_logout = {
        let session = session;
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = session.clone() {
                session.logout();
            }
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |(): ()| toast.set(None))
    };

    let is_busy = *loading;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Minha conta"}</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideUser} class="w-5 h-5" />
                            {"Dados cadastrais"}
                        </h2>
                        <div class="text-sm space-y-1">
                            <p><span class="font-semibold">{"Nome: "}</span>{user.nome.clone()}</p>
                            <p><span class="font-semibold">{"E-mail: "}</span>{user.email.clone()}</p>
                            <p><span class="font-semibold">{"Tipo de conta: "}</span>{user.tipo_usuario.clone()}</p>
                        </div>
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-outline btn-error btn-sm" onclick={on_logout}>
                                <Icon icon_id={IconId::LucideLogOut} class="w-4 h-4" />
                                {"Sair da conta"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <form class="card-body" onsubmit={onsubmit}>
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideLock} class="w-5 h-5" />
                            {"Alterar senha"}
                        </h2>
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
                        <div class="form-control">
                            <label class="label" for="confirmar">
                                <span class="label-text">{"Confirmar nova senha"}</span>
                            </label>
                            <input id="confirmar" class="input input-bordered" type="password" required=true
                                value={(*confirmar).clone()} oninput={on_confirmar} />
                        </div>
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                {if is_busy { "Salvando..." } else { "Alterar senha" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
