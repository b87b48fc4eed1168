use crate::{api::JojaClient, routes::MainRoute};
use shared::models::{EsqueceuSenha, Usuario};
use shared::validation::{format_cpf, valida_confirmacao, valida_cpf, valida_senha};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Wizard progression; every step can go back except the final one.
#[derive(Clone, PartialEq, Eq)]
enum Step {
    Cpf,
    Confirm(Usuario),
    NewPassword(Usuario),
    Done,
}

/// Partially hide an e-mail for the confirmation step.
fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let masked_local = match local.chars().next() {
        Some(first) => format!("{first}***"),
        None => "***".to_string(),
    };
    let masked_domain = match domain.rsplit_once('.') {
        Some((name, tld)) => {
            let first = name.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***.{tld}")
        }
        None => "***".to_string(),
    };
    format!("{masked_local}@{masked_domain}")
}

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let step = use_state(|| Step::Cpf);
    let cpf = use_state(String::new);
    let senha = use_state(String::new);
    let confirmar = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

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
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                senha.set(input.value());
            }
        })
    };

    let on_confirmar_change = {
        let confirmar = confirmar.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                confirmar.set(input.value());
            }
        })
    };

    // Step 1: find the account behind the CPF.
    let on_lookup = {
        let cpf = cpf.clone();
        let step = step.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(validation_error) = valida_cpf(&cpf) {
                error.set(Some(validation_error.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let cpf_value = (*cpf).clone();
            let step_ref = step.clone();
            let error_ref = error.clone();
            let loading_ref = loading.clone();
            spawn_local(async move {
                match JojaClient::shared().get_user_by_cpf(&cpf_value).await {
                    Ok(user) => step_ref.set(Step::Confirm(user)),
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    // Step 3: submit the new password.
    let on_reset = {
        let step = step.clone();
        let senha = senha.clone();
        let confirmar = confirmar.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Step::NewPassword(ref user) = *step else {
                return;
            };
            let validation = valida_senha(&senha)
                .err()
                .or_else(|| valida_confirmacao(&confirmar, &senha).err());
            if let Some(validation_error) = validation {
                error.set(Some(validation_error.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let account_id = user.id;
            let payload = EsqueceuSenha {
                nova_senha: (*senha).clone(),
            };
            let step_ref = step.clone();
            let error_ref = error.clone();
            let loading_ref = loading.clone();
            spawn_local(async move {
                match JojaClient::shared().reset_password(account_id, &payload).await {
                    Ok(()) => step_ref.set(Step::Done),
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_back = {
        let step = step.clone();
        let error = error.clone();
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            match (*step).clone() {
                Step::Cpf => {
                    if let Some(ref nav) = navigator {
                        nav.push(&MainRoute::Login);
                    }
                }
                Step::Confirm(_) => step.set(Step::Cpf),
                Step::NewPassword(user) => step.set(Step::Confirm(user)),
                Step::Done => {}
            }
        })
    };

    let advance_to_password = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            if let Step::Confirm(ref user) = *step {
                step.set(Step::NewPassword(user.clone()));
            }
        })
    };

    let is_busy = *loading;

    let body = match (*step).clone() {
        Step::Cpf => html! {
            <form class="space-y-4" onsubmit={on_lookup}>
                <p class="text-sm opacity-70">
                    {"Informe o CPF cadastrado para localizar sua conta."}
                </p>
                <div class="form-control">
                    <label class="label" for="cpf-recuperacao">
                        <span class="label-text">{"CPF"}</span>
                    </label>
                    <input id="cpf-recuperacao" class="input input-bordered" type="text"
                        maxlength="14" placeholder="000.000.000-00" required=true
                        value={(*cpf).clone()} oninput={on_cpf_change} />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    {if is_busy { "Buscando..." } else { "Continuar" }}
                </button>
            </form>
        },
        Step::Confirm(user) => html! {
            <div class="space-y-4">
                <p class="text-sm opacity-70">{"Encontramos esta conta:"}</p>
                <div class="bg-base-200 rounded-box p-4">
                    <p class="font-semibold">{user.nome.clone()}</p>
                    <p class="text-sm opacity-70">{mask_email(&user.email)}</p>
                </div>
                <p class="text-sm">{"É você? Então vamos redefinir a senha."}</p>
                <button class="btn btn-primary w-full" onclick={advance_to_password}>
                    {"Sou eu, continuar"}
                </button>
            </div>
        },
        Step::NewPassword(_) => html! {
            <form class="space-y-4" onsubmit={on_reset}>
                <div class="form-control">
                    <label class="label" for="nova-senha">
                        <span class="label-text">{"Nova senha"}</span>
                    </label>
                    <input id="nova-senha" class="input input-bordered" type="password"
                        required=true value={(*senha).clone()} oninput={on_senha_change} />
                </div>
                <div class="form-control">
                    <label class="label" for="confirmar-senha">
                        <span class="label-text">{"Confirmar nova senha"}</span>
                    </label>
                    <input id="confirmar-senha" class="input input-bordered" type="password"
                        required=true value={(*confirmar).clone()} oninput={on_confirmar_change} />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    {if is_busy { "Salvando..." } else { "Redefinir senha" }}
                </button>
            </form>
        },
        Step::Done => html! {
            <div class="flex flex-col items-center gap-4 text-center">
                <Icon icon_id={IconId::LucideCheckCircle2} class="w-12 h-12 text-success" />
                <p>{"Sua senha foi redefinida com sucesso."}</p>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary w-full">
                    {"Voltar para o login"}
                </Link<MainRoute>>
            </div>
        },
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    if *step != Step::Done {
                        <button class="btn btn-ghost btn-sm self-start" onclick={on_back}>
                            <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                            {"Voltar"}
                        </button>
                    }
                    <h2 class="card-title text-2xl">{"Recuperar senha"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error"><span>{message.clone()}</span></div>
                    }
                    {body}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_email_hides_most_characters() {
        assert_eq!(mask_email("ana@example.com"), "a***@e***.com");
        assert_eq!(mask_email("b@dominio.com.br"), "b***@d***.br");
    }

    #[test]
    fn mask_email_passes_through_malformed_input() {
        assert_eq!(mask_email("sem-arroba"), "sem-arroba");
        assert_eq!(mask_email("x@semdominio"), "x***@***");
    }
}
