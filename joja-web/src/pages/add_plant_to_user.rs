use chrono::NaiveDate;

use crate::api::JojaClient;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::{PlantaCatalogo, PlantaUsuarioCreate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Admin page: attach a catalog species to a user's collection.
#[function_component(AddPlantToUserPage)]
pub fn add_plant_to_user_page() -> Html {
    let catalogo = use_state(Vec::<PlantaCatalogo>::new);
    let usuario_id = use_state(String::new);
    let planta_id = use_state(|| None::<i64>);
    let apelido = use_state(String::new);
    let data_plantio = use_state(String::new);
    let loading = use_state(|| false);
    let toast = use_state(|| None::<ToastData>);

    {
        let catalogo = catalogo.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match JojaClient::shared().catalog_list(0, 100).await {
                    Ok(list) => catalogo.set(list),
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
            || ()
        });
    }

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_usuario_id = text_input(&usuario_id);
    let on_apelido = text_input(&apelido);
    let on_data = text_input(&data_plantio);

    let on_planta_select = {
        let planta_id = planta_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                planta_id.set(select.value().parse().ok());
            }
        })
    };

    let onsubmit = {
        let usuario_id = usuario_id.clone();
        let planta_id = planta_id.clone();
        let apelido = apelido.clone();
        let data_plantio = data_plantio.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(target_id) = usuario_id.trim().parse::<i64>() else {
                toast.set(Some(ToastData::error("Informe o ID numérico do usuário.")));
                return;
            };
            let Some(catalogo_id) = *planta_id else {
                toast.set(Some(ToastData::error("Escolha uma planta do catálogo.")));
                return;
            };
            let apelido_value = apelido.trim().to_string();
            let payload = PlantaUsuarioCreate {
                id_planta_catalogo: catalogo_id,
                apelido: (!apelido_value.is_empty()).then_some(apelido_value),
                data_plantio: NaiveDate::parse_from_str(&data_plantio, "%Y-%m-%d").ok(),
            };
            loading.set(true);
            let toast_ref = toast.clone();
            let loading_ref = loading.clone();
            spawn_local(async move {
                match JojaClient::shared().add_plant_to_user(target_id, &payload).await {
                    Ok(planta) => toast_ref.set(Some(ToastData::success(format!(
                        "{} adicionada ao usuário {target_id}.",
                        planta.display_name()
                    )))),
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

            <div class="card bg-base-200 shadow-xl max-w-2xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <h1 class="card-title text-2xl">
                        <Icon icon_id={IconId::LucideLeaf} class="w-6 h-6" />
                        {"Adicionar planta a um usuário"}
                    </h1>
                    <div class="form-control">
                        <label class="label" for="usuario-id">
                            <span class="label-text">{"ID do usuário"}</span>
                        </label>
                        <input id="usuario-id" class="input input-bordered" type="number" required=true
                            value={(*usuario_id).clone()} oninput={on_usuario_id} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="planta">
                            <span class="label-text">{"Planta do catálogo"}</span>
                        </label>
                        <select id="planta" class="select select-bordered" required=true onchange={on_planta_select}>
                            <option value="" selected={planta_id.is_none()} disabled=true>
                                {"Escolher espécie..."}
                            </option>
                            {
                                for catalogo.iter().map(|planta| html! {
                                    <option value={planta.id.to_string()}
                                        selected={*planta_id == Some(planta.id)}>
                                        {planta.nome.clone()}
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="apelido">
                                <span class="label-text">{"Apelido (opcional)"}</span>
                            </label>
                            <input id="apelido" class="input input-bordered" type="text"
                                value={(*apelido).clone()} oninput={on_apelido} />
                        </div>
                        <div class="form-control">
                            <label class="label" for="data-plantio">
                                <span class="label-text">{"Data do plantio (opcional)"}</span>
                            </label>
                            <input id="data-plantio" class="input input-bordered" type="date"
                                value={(*data_plantio).clone()} oninput={on_data} />
                        </div>
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Adicionando..." } else { "Adicionar planta" }}
                        </button>
                    </div>
                </form>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
