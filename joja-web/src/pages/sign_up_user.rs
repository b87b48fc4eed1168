use crate::{api::JojaClient, routes::MainRoute};
use shared::models::UsuarioCreate;
use shared::validation::{
    format_cpf, valida_confirmacao, valida_cpf, valida_email, valida_senha,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

fn first_error(form: &FormState) -> Option<String> {
    if form.nome.trim().is_empty() {
        return Some("Informe seu nome.".to_string());
    }
    valida_cpf(&form.cpf)
        .err()
        .or_else(|| valida_email(&form.email).err())
        .or_else(|| valida_senha(&form.senha).err())
        .or_else(|| valida_confirmacao(&form.confirmar, &form.senha).err())
        .map(|error| error.to_string())
}

#[derive(Clone, Default, PartialEq)]
struct FormState {
    nome: String,
    cpf: String,
    email: String,
    endereco: String,
    senha: String,
    confirmar: String,
}

#[function_component(SignUpUserPage)]
pub fn sign_up_user_page() -> Html {
    let form = use_state(FormState::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let set_field = |field: fn(&mut FormState, String)| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                field(&mut next, input.value());
                form.set(next);
                error.set(None);
            }
        })
    };

    let on_nome = set_field(|form, value| form.nome = value);
    let on_cpf = set_field(|form, value| form.cpf = format_cpf(&value));
    let on_email = set_field(|form, value| form.email = value);
    let on_endereco = set_field(|form, value| form.endereco = value);
    let on_senha = set_field(|form, value| form.senha = value);
    let on_confirmar = set_field(|form, value| form.confirmar = value);

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = (*form).clone();
            if let Some(message) = first_error(&current) {
                error.set(Some(message));
                return;
            }
            loading.set(true);
            error.set(None);
            let error_ref = error.clone();
            let loading_ref = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let payload = UsuarioCreate {
                    nome: current.nome.trim().to_string(),
                    cpf: current.cpf.clone(),
                    email: current.email.trim().to_string(),
                    senha: current.senha.clone(),
                    endereco: current.endereco.trim().to_string(),
                };
                match JojaClient::shared().create_user(&payload).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::Login);
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
        <div class="flex items-center justify-center min-h-screen bg-base-200 py-8">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <div class="flex flex-col items-center mb-2">
                        <Icon icon_id={IconId::LucideLeaf} class="w-8 h-8 text-primary" />
                        <h2 class="card-title text-2xl mt-2">{"Criar conta"}</h2>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="nome"><span class="label-text">{"Nome"}</span></label>
                        <input id="nome" class="input input-bordered" type="text" required=true
                            value={form.nome.clone()} oninput={on_nome} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="cpf"><span class="label-text">{"CPF"}</span></label>
                        <input id="cpf" class="input input-bordered" type="text" maxlength="14"
                            placeholder="000.000.000-00" required=true
                            value={form.cpf.clone()} oninput={on_cpf} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email"><span class="label-text">{"E-mail"}</span></label>
                        <input id="email" class="input input-bordered" type="email" required=true
                            value={form.email.clone()} oninput={on_email} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="endereco"><span class="label-text">{"Endereço"}</span></label>
                        <input id="endereco" class="input input-bordered" type="text"
                            value={form.endereco.clone()} oninput={on_endereco} />
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="senha"><span class="label-text">{"Senha"}</span></label>
                            <input id="senha" class="input input-bordered" type="password" required=true
                                value={form.senha.clone()} oninput={on_senha} />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirmar"><span class="label-text">{"Confirmar senha"}</span></label>
                            <input id="confirmar" class="input input-bordered" type="password" required=true
                                value={form.confirmar.clone()} oninput={on_confirmar} />
                        </div>
                    </div>
                    <p class="text-xs opacity-60">
                        {"A senha deve ter no mínimo 8 caracteres, com ao menos um número e uma letra maiúscula."}
                    </p>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Cadastrando..." } else { "Cadastrar" }}
                        </button>
                    </div>
                    <div class="text-center text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-hover">
                            {"Já tenho conta"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            nome: "Ana Lima".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@example.com".to_string(),
            endereco: "Rua das Flores, 10".to_string(),
            senha: "Senha123".to_string(),
            confirmar: "Senha123".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(first_error(&valid_form()), None);
    }

    #[test]
    fn validation_runs_in_field_order() {
        let mut form = valid_form();
        form.nome = "  ".to_string();
        assert_eq!(first_error(&form), Some("Informe seu nome.".to_string()));

        let mut form = valid_form();
        form.cpf = "111.111.111-11".to_string();
        form.senha = "curta".to_string();
        // The CPF error wins over the password error.
        assert_eq!(first_error(&form), Some("CPF inválido.".to_string()));

        let mut form = valid_form();
        form.confirmar = "Senha124".to_string();
        assert_eq!(
            first_error(&form),
            Some("As senhas não coincidem.".to_string())
        );
    }
}
