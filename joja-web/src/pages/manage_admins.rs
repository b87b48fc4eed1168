use crate::api::JojaClient;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::toast::{Toast, ToastData};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::Usuario;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// Whether a deletion would remove the signed-in account itself.
///
/// Self-deletion is refused before any request is sent.
fn is_self_delete(target_id: i64, current_id: Option<i64>) -> bool {
    current_id == Some(target_id)
}

/// Admin page: look up, create and remove administrator accounts.
#[function_component(ManageAdminsPage)]
pub fn manage_admins_page() -> Html {
    let state = use_store_value::<AppState>();
    let busca_id = use_state(String::new);
    let encontrado = use_state(|| None::<Usuario>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let confirming = use_state(|| false);
    let toast = use_state(|| None::<ToastData>);

    let current_id = state.user.as_ref().map(|user| user.id);

    let on_busca_change = {
        let busca_id = busca_id.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                busca_id.set(input.value());
                error.set(None);
            }
        })
    };

    let on_buscar = {
        let busca_id = busca_id.clone();
        let encontrado = encontrado.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(admin_id) = busca_id.trim().parse::<i64>() else {
                error.set(Some("Informe o ID numérico do administrador.".to_string()));
                return;
            };
            loading.set(true);
            error.set(None);
            encontrado.set(None);
            let encontrado_ref = encontrado.clone();
            let error_ref = error.clone();
            let loading_ref = loading.clone();
            spawn_local(async move {
                match JojaClient::shared().get_admin(admin_id).await {
                    Ok(admin) => encontrado_ref.set(Some(admin)),
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let ask_delete = {
        let encontrado = encontrado.clone();
        let confirming = confirming.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(admin) = (*encontrado).clone() else {
                return;
            };
            // Blocked client-side, no request leaves the browser.
            if is_self_delete(admin.id, current_id) {
                toast.set(Some(ToastData::error(
                    "Você não pode excluir sua própria conta por aqui.",
                )));
                return;
            }
            confirming.set(true);
        })
    };

    let on_confirm_delete = {
        let encontrado = encontrado.clone();
        let confirming = confirming.clone();
        let toast = toast.clone();
        Callback::from(move |(): ()| {
            confirming.set(false);
            let Some(admin) = (*encontrado).clone() else {
                return;
            };
            let encontrado = encontrado.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match JojaClient::shared().delete_admin(admin.id).await {
                    Ok(()) => {
                        encontrado.set(None);
                        toast.set(Some(ToastData::success(format!(
                            "Administrador \"{}\" removido.",
                            admin.nome
                        ))));
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_cancel_delete = {
        let confirming = confirming.clone();
        Callback::from(move |(): ()| confirming.set(false))
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |(): ()| toast.set(None))
    };

    let is_busy = *loading;
    let delete_message = encontrado
        .as_ref()
        .map(|admin| {
            format!(
                "Tem certeza que deseja remover o administrador \"{}\" (ID {})?",
                admin.nome, admin.id
            )
        })
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Gerenciar administradores"}</h1>
                    <p class="opacity-70">{"Consulte, crie e remova contas de administrador."}</p>
                </div>
                <Link<MainRoute> to={MainRoute::SignUpAdmin} classes="btn btn-primary">
                    <Icon icon_id={IconId::LucideUserPlus} class="w-4 h-4" />
                    {"Novo administrador"}
                </Link<MainRoute>>
            </div>

            <form class="join md:w-96" onsubmit={on_buscar}>
                <label class="input input-bordered join-item flex items-center gap-2 flex-grow">
                    <Icon icon_id={IconId::LucideSearch} class="w-4 h-4 opacity-60" />
                    <input type="number" class="grow" placeholder="ID do administrador..."
                        value={(*busca_id).clone()} oninput={on_busca_change} />
                </label>
                <button class="btn btn-primary join-item" type="submit" disabled={is_busy}>
                    {if is_busy { "Buscando..." } else { "Buscar" }}
                </button>
            </form>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <Icon icon_id={IconId::LucideAlertCircle} class="w-5 h-5" />
                    <span>{message.clone()}</span>
                </div>
            }

            if let Some(admin) = &*encontrado {
                <div class="card bg-base-200 shadow-xl max-w-2xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideShield} class="w-5 h-5" />
                            {admin.nome.clone()}
                        </h2>
                        <p class="text-sm flex items-center gap-2">
                            <Icon icon_id={IconId::LucideHash} class="w-4 h-4 opacity-60" />
                            {format!("ID {}", admin.id)}
                        </p>
                        <div class="card-actions justify-end mt-2">
                            <Link<MainRoute> to={MainRoute::ChangeUserPassword} classes="btn btn-secondary btn-sm">
                                <Icon icon_id={IconId::LucideKey} class="w-4 h-4" />
                                {"Alterar senha"}
                            </Link<MainRoute>>
                            <button class="btn btn-error btn-sm" onclick={ask_delete}>
                                <Icon icon_id={IconId::LucideTrash2} class="w-4 h-4" />
                                {"Remover"}
                            </button>
                        </div>
                    </div>
                </div>
            }

            <ConfirmModal
                open={*confirming}
                title="Remover administrador"
                message={delete_message}
                confirm_label="Remover"
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_the_signed_in_account_is_blocked() {
        assert!(is_self_delete(7, Some(7)));
    }

    #[test]
    fn deleting_other_accounts_is_allowed() {
        assert!(!is_self_delete(7, Some(8)));
        assert!(!is_self_delete(7, None));
    }
}
