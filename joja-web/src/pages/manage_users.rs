use crate::api::JojaClient;
use crate::routes::MainRoute;
use shared::models::Usuario;
use shared::validation::{format_cpf, valida_cpf};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Admin page: look up a user by CPF and act on the account.
#[function_component(ManageUsersPage)]
pub fn manage_users_page() -> Html {
    let cpf_busca = use_state(String::new);
    let encontrado = use_state(|| None::<Usuario>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_cpf_change = {
        let cpf_busca = cpf_busca.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cpf_busca.set(format_cpf(&input.value()));
                error.set(None);
            }
        })
    };

    let on_buscar = {
        let cpf_busca = cpf_busca.clone();
        let encontrado = encontrado.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(validation_error) = valida_cpf(&cpf_busca) {
                error.set(Some(validation_error.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            encontrado.set(None);
            let cpf_value = (*cpf_busca).clone();
            let encontrado_ref = encontrado.clone();
            let error_ref = error.clone();
            let loading_ref = loading.clone();
            spawn_local(async move {
                match JojaClient::shared().get_user_by_cpf(&cpf_value).await {
                    Ok(user) => encontrado_ref.set(Some(user)),
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Gerenciar usuários"}</h1>
                    <p class="opacity-70">{"Consulte usuários, altere senhas e adicione plantas."}</p>
                </div>
                <form class="join md:w-96" onsubmit={on_buscar}>
                    <label class="input input-bordered join-item flex items-center gap-2 flex-grow">
                        <Icon icon_id={IconId::LucideSearch} class="w-4 h-4 opacity-60" />
                        <input type="text" class="grow" placeholder="CPF do usuário..."
                            maxlength="14"
                            value={(*cpf_busca).clone()} oninput={on_cpf_change} />
                    </label>
                    <button class="btn btn-primary join-item" type="submit" disabled={is_busy}>
                        {if is_busy { "Buscando..." } else { "Buscar" }}
                    </button>
                </form>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <Icon icon_id={IconId::LucideAlertCircle} class="w-5 h-5" />
                    <span>{message.clone()}</span>
                </div>
            }

            if let Some(user) = &*encontrado {
                <div class="card bg-base-200 shadow-xl max-w-2xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideUser} class="w-5 h-5" />
                            {user.nome.clone()}
                        </h2>
                        <div class="text-sm space-y-1">
                            <p class="flex items-center gap-2">
                                <Icon icon_id={IconId::LucideHash} class="w-4 h-4 opacity-60" />
                                {format!("ID {}", user.id)}
                            </p>
                            <p class="flex items-center gap-2">
                                <Icon icon_id={IconId::LucideMail} class="w-4 h-4 opacity-60" />
                                {user.email.clone()}
                            </p>
                            <p class="flex items-center gap-2">
                                <Icon icon_id={IconId::LucideShield} class="w-4 h-4 opacity-60" />
                                {user.tipo_usuario.clone()}
                            </p>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <Link<MainRoute> to={MainRoute::AddPlantToUser} classes="btn btn-secondary btn-sm">
                                <Icon icon_id={IconId::LucideLeaf} class="w-4 h-4" />
                                {"Adicionar planta"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::ChangeUserPassword} classes="btn btn-secondary btn-sm">
                                <Icon icon_id={IconId::LucideKey} class="w-4 h-4" />
                                {"Alterar senha"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            } else if !is_busy && error.is_none() {
                <p class="opacity-60 text-sm">{"Busque um CPF para começar."}</p>
            }
        </div>
    }
}
