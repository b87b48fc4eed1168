use crate::{api::ApiError, routes::MainRoute, session::Session};
use shared::validation::format_cpf;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let cpf = use_state(String::new);
    let senha = use_state(String::new);
    let show_senha = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let session = use_context::<Session>();

    let onsubmit = {
        let cpf_handle = cpf.clone();
        let senha_handle = senha.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let session = session;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let cpf_value = (*cpf_handle).clone();
            let senha_value = (*senha_handle).clone();
            if cpf_value.is_empty() || senha_value.is_empty() {
                error_handle.set(Some("Por favor, preencha o CPF e a senha.".to_string()));
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match session.login(&cpf_value, &senha_value).await {
                    Ok(()) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        let message = match err {
                            ApiError::Unauthorized => {
                                "CPF ou senha incorretos. Verifique suas credenciais.".to_string()
                            }
                            other => other.to_string(),
                        };
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_cpf_change = {
        let cpf = cpf.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cpf.set(format_cpf(&input.value()));
                error.set(None);
            }
        })
    };

    let on_senha_change = {
        let senha = senha.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                senha.set(input.value());
                error.set(None);
            }
        })
    };

    let toggle_senha = {
        let show_senha = show_senha.clone();
        Callback::from(move |_: MouseEvent| show_senha.set(!*show_senha))
    };

    let is_busy = *loading;
    let disable_submit = (*cpf).is_empty() || (*senha).is_empty() || is_busy;
    let senha_type = if *show_senha { "text" } else { "password" };
    let senha_icon = if *show_senha {
        IconId::LucideEyeOff
    } else {
        IconId::LucideEye
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <div class="flex flex-col items-center mb-2">
                        <Icon icon_id={IconId::LucideSprout} class="w-10 h-10 text-primary" />
                        <h2 class="card-title text-2xl mt-2">{"Joja Garden"}</h2>
                        <p class="text-sm opacity-70">{"Gerencie seu jardim digital"}</p>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="cpf">
                            <span class="label-text">{"CPF"}</span>
                        </label>
                        <input
                            id="cpf"
                            class="input input-bordered"
                            type="text"
                            placeholder="000.000.000-00"
                            maxlength="14"
                            required=true
                            value={(*cpf).clone()}
                            oninput={on_cpf_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="senha">
                            <span class="label-text">{"Senha"}</span>
                        </label>
                        <div class="join w-full">
                            <input
                                id="senha"
                                class="input input-bordered join-item w-full"
                                type={senha_type}
                                required=true
                                value={(*senha).clone()}
                                oninput={on_senha_change}
                            />
                            <button type="button" class="btn join-item" onclick={toggle_senha}>
                                <Icon icon_id={senha_icon} class="w-4 h-4" />
                            </button>
                        </div>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Entrando..." } else { "Entrar" }}
                        </button>
                    </div>
                    <div class="flex justify-between text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link link-hover">
                            {"Esqueci minha senha"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::SignUpUser} classes="link link-hover">
                            {"Criar conta"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
