use crate::{api::JojaClient, routes::MainRoute};
use shared::models::AdminCreate;
use shared::validation::{format_cpf, valida_confirmacao, valida_cpf, valida_senha};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Administrator account creation, reachable from the admin management page.
#[function_component(SignUpAdminPage)]
pub fn sign_up_admin_page() -> Html {
    let nome = use_state(String::new);
    let cpf = use_state(String::new);
    let senha = use_state(String::new);
    let confirmar = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let text_input = |state: &UseStateHandle<String>, mask: bool| {
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                state.set(if mask { format_cpf(&value) } else { value });
                error.set(None);
            }
        })
    };

    let on_nome = text_input(&nome, false);
    let on_cpf = text_input(&cpf, true);
    let on_senha = text_input(&senha, false);
    let on_confirmar = text_input(&confirmar, false);

    let onsubmit = {
        let nome = nome.clone();
        let cpf = cpf.clone();
        let senha = senha.clone();
        let confirmar = confirmar.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if nome.trim().is_empty() {
                error.set(Some("Informe o nome do administrador.".to_string()));
                return;
            }
            let validation = valida_cpf(&cpf)
                .err()
                .or_else(|| valida_senha(&senha).err())
                .or_else(|| valida_confirmacao(&confirmar, &senha).err());
            if let Some(validation_error) = validation {
                error.set(Some(validation_error.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let payload = AdminCreate {
                nome: nome.trim().to_string(),
                cpf: (*cpf).clone(),
                senha: (*senha).clone(),
            };
            let error_ref = error.clone();
            let success_ref = success.clone();
            let loading_ref = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match JojaClient::shared().create_admin(&payload).await {
                    Ok(_) => {
                        success_ref.set(true);
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::ManageAdmins);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex justify-center py-8">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">
                        <Icon icon_id={IconId::LucideShield} class="w-6 h-6" />
                        {"Novo administrador"}
                    </h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error"><span>{message.clone()}</span></div>
                    }
                    if *success {
                        <div class="alert alert-success"><span>{"Administrador criado com sucesso!"}</span></div>
                    }
                    <div class="form-control">
                        <label class="label" for="nome"><span class="label-text">{"Nome"}</span></label>
                        <input id="nome" class="input input-bordered" type="text" required=true
                            value={(*nome).clone()} oninput={on_nome} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="cpf"><span class="label-text">{"CPF"}</span></label>
                        <input id="cpf" class="input input-bordered" type="text" maxlength="14"
                            placeholder="000.000.000-00" required=true
                            value={(*cpf).clone()} oninput={on_cpf} />
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="senha"><span class="label-text">{"Senha"}</span></label>
                            <input id="senha" class="input input-bordered" type="password" required=true
                                value={(*senha).clone()} oninput={on_senha} />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirmar"><span class="label-text">{"Confirmar senha"}</span></label>
                            <input id="confirmar" class="input input-bordered" type="password" required=true
                                value={(*confirmar).clone()} oninput={on_confirmar} />
                        </div>
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Criando..." } else { "Criar administrador" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
