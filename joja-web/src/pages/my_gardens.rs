use crate::api::JojaClient;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::{Jardim, JardimCreate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// The signed-in user's gardens: list, create, delete.
///
/// Deleting a garden that still has plants is refused by the backend; the 409
/// message is surfaced as-is.
#[function_component(MyGardensPage)]
pub fn my_gardens_page() -> Html {
    let jardins = use_state(Vec::<Jardim>::new);
    let novo_nome = use_state(String::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let to_delete = use_state(|| None::<Jardim>);
    let toast = use_state(|| None::<ToastData>);

    let reload = {
        let jardins = jardins.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |(): ()| {
            let jardins = jardins.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match JojaClient::shared().my_gardens().await {
                    Ok(list) => jardins.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let on_nome_change = {
        let novo_nome = novo_nome.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                novo_nome.set(input.value());
            }
        })
    };

    let on_create = {
        let novo_nome = novo_nome.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let nome = novo_nome.trim().to_string();
            if nome.is_empty() {
                return;
            }
            let payload = JardimCreate { nome };
            let novo_nome = novo_nome.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match JojaClient::shared().create_garden(&payload).await {
                    Ok(jardim) => {
                        novo_nome.set(String::new());
                        toast.set(Some(ToastData::success(format!(
                            "Jardim \"{}\" criado!",
                            jardim.nome
                        ))));
                        reload.emit(());
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_confirm_delete = {
        let to_delete = to_delete.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |(): ()| {
            let Some(jardim) = (*to_delete).clone() else {
                return;
            };
            to_delete.set(None);
            let toast = toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match JojaClient::shared().delete_garden(jardim.id).await {
                    Ok(()) => {
                        toast.set(Some(ToastData::success(format!(
                            "Jardim \"{}\" excluído.",
                            jardim.nome
                        ))));
                        reload.emit(());
                    }
                    // Surfaces the backend's 409 when the garden still has plants.
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_cancel_delete = {
        let to_delete = to_delete.clone();
        Callback::from(move |(): ()| to_delete.set(None))
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |(): ()| toast.set(None))
    };

    let delete_message = to_delete
        .as_ref()
        .map(|jardim| format!("Tem certeza que deseja excluir o jardim \"{}\"?", jardim.nome))
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <h1 class="text-2xl font-bold">{"Meus jardins"}</h1>
                <form class="join" onsubmit={on_create}>
                    <input class="input input-bordered join-item" type="text"
                        placeholder="Nome do novo jardim" required=true
                        value={(*novo_nome).clone()} oninput={on_nome_change} />
                    <button class="btn btn-primary join-item" type="submit">
                        <Icon icon_id={IconId::LucidePlus} class="w-4 h-4" />
                        {"Criar"}
                    </button>
                </form>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }

            if *loading {
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if jardins.is_empty() {
                <div class="text-center py-12 space-y-2">
                    <Icon icon_id={IconId::LucideFlower2} class="w-12 h-12 mx-auto opacity-40" />
                    <p class="opacity-70">{"Nenhum jardim ainda. Crie o primeiro!"}</p>
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {
                        for jardins.iter().map(|jardim| {
                            let jardim_clone = jardim.clone();
                            let to_delete = to_delete.clone();
                            let ask_delete = Callback::from(move |_: MouseEvent| {
                                to_delete.set(Some(jardim_clone.clone()));
                            });
                            html! {
                                <div class="card bg-base-200 shadow-xl" key={jardim.id}>
                                    <div class="card-body">
                                        <h2 class="card-title">{jardim.nome.clone()}</h2>
                                        <p class="text-sm opacity-70">
                                            {format!("{} planta(s)", jardim.plantas.len())}
                                        </p>
                                        <div class="card-actions justify-end mt-2">
                                            <button class="btn btn-ghost btn-sm text-error" onclick={ask_delete}>
                                                <Icon icon_id={IconId::LucideTrash2} class="w-4 h-4" />
                                            </button>
                                            <Link<MainRoute>
                                                to={MainRoute::GardenDetail { id: jardim.id }}
                                                classes="btn btn-primary btn-sm"
                                            >
                                                {"Abrir"}
                                            </Link<MainRoute>>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            }

            <ConfirmModal
                open={to_delete.is_some()}
                title="Excluir jardim"
                message={delete_message}
                confirm_label="Excluir"
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
