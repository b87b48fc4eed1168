use crate::api::JojaClient;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::PlantaUsuario;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// The signed-in user's plant collection.
#[function_component(MyPlantsPage)]
pub fn my_plants_page() -> Html {
    let plantas = use_state(Vec::<PlantaUsuario>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let to_delete = use_state(|| None::<PlantaUsuario>);
    let toast = use_state(|| None::<ToastData>);

    let reload = {
        let plantas = plantas.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |(): ()| {
            let plantas = plantas.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match JojaClient::shared().my_plants().await {
                    Ok(list) => plantas.set(list),
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

    let on_confirm_delete = {
        let to_delete = to_delete.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |(): ()| {
            let Some(planta) = (*to_delete).clone() else {
                return;
            };
            to_delete.set(None);
            let toast = toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match JojaClient::shared().delete_plant(planta.id).await {
                    Ok(()) => {
                        toast.set(Some(ToastData::success(format!(
                            "{} removida da sua coleção.",
                            planta.display_name()
                        ))));
                        reload.emit(());
                    }
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
        .map(|planta| {
            format!(
                "Tem certeza que deseja remover \"{}\"? O diário e a galeria serão perdidos.",
                planta.display_name()
            )
        })
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Minhas plantas"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }

            if *loading {
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if plantas.is_empty() {
                <div class="text-center py-12 space-y-4">
                    <Icon icon_id={IconId::LucideLeaf} class="w-12 h-12 mx-auto opacity-40" />
                    <p class="opacity-70">{"Você ainda não tem plantas. Explore o catálogo!"}</p>
                    <Link<MainRoute> to={MainRoute::Catalog} classes="btn btn-primary">
                        {"Ver catálogo"}
                    </Link<MainRoute>>
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {
                        for plantas.iter().map(|planta| {
                            let planta_clone = planta.clone();
                            let to_delete = to_delete.clone();
                            let ask_delete = Callback::from(move |_: MouseEvent| {
                                to_delete.set(Some(planta_clone.clone()));
                            });
                            html! {
                                <div class="card bg-base-200 shadow-xl" key={planta.id}>
                                    <div class="card-body">
                                        <h2 class="card-title">{planta.display_name().to_string()}</h2>
                                        <p class="text-sm italic opacity-70">{planta.catalogo.nome.clone()}</p>
                                        if let Some(data) = planta.data_plantio {
                                            <p class="text-sm flex items-center gap-1">
                                                <Icon icon_id={IconId::LucideCalendar} class="w-4 h-4" />
                                                {format!("Plantada em {}", data.format("%d/%m/%Y"))}
                                            </p>
                                        }
                                        <div class="card-actions justify-end mt-2">
                                            <button class="btn btn-ghost btn-sm text-error" onclick={ask_delete}>
                                                <Icon icon_id={IconId::LucideTrash2} class="w-4 h-4" />
                                            </button>
                                            <Link<MainRoute>
                                                to={MainRoute::PlantDetail { id: planta.id }}
                                                classes="btn btn-primary btn-sm"
                                            >
                                                {"Cuidar"}
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
                title="Remover planta"
                message={delete_message}
                confirm_label="Remover"
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
