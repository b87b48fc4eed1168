use crate::api::JojaClient;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::{Jardim, PlantaUsuario};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GardenDetailPageProps {
    pub id: i64,
}

/// One garden: its plants, plus moving plants into (or between) gardens.
#[function_component(GardenDetailPage)]
pub fn garden_detail_page(props: &GardenDetailPageProps) -> Html {
    let jardins = use_state(Vec::<Jardim>::new);
    let minhas_plantas = use_state(Vec::<PlantaUsuario>::new);
    let selected_plant = use_state(|| None::<i64>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastData>);

    let reload = {
        let jardins = jardins.clone();
        let minhas_plantas = minhas_plantas.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |(): ()| {
            let jardins = jardins.clone();
            let minhas_plantas = minhas_plantas.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = JojaClient::shared();
                match client.my_gardens().await {
                    Ok(list) => jardins.set(list),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                        return;
                    }
                }
                match client.my_plants().await {
                    Ok(list) => minhas_plantas.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(props.id, move |_| {
            reload.emit(());
            || ()
        });
    }

    let on_select_plant = {
        let selected_plant = selected_plant.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                selected_plant.set(select.value().parse().ok());
            }
        })
    };

    let on_add_plant = {
        let jardim_id = props.id;
        let selected_plant = selected_plant.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(planta_id) = *selected_plant else {
                return;
            };
            let selected_plant = selected_plant.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match JojaClient::shared()
                    .add_plant_to_garden(jardim_id, planta_id)
                    .await
                {
                    Ok(()) => {
                        selected_plant.set(None);
                        toast.set(Some(ToastData::success("Planta adicionada ao jardim!")));
                        reload.emit(());
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |(): ()| toast.set(None))
    };

    if *loading {
        return html! {
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        };
    }

    let Some(jardim) = jardins.iter().find(|jardim| jardim.id == props.id).cloned() else {
        return html! {
            <div class="p-4 space-y-4">
                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message.clone()}</span></div>
                }
                <div class="alert alert-warning"><span>{"Jardim não encontrado."}</span></div>
                <Link<MainRoute> to={MainRoute::MyGardens} classes="btn btn-ghost">
                    <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                    {"Voltar para meus jardins"}
                </Link<MainRoute>>
            </div>
        };
    };

    // Plants that could still be moved into this garden.
    let candidatas: Vec<PlantaUsuario> = minhas_plantas
        .iter()
        .filter(|planta| planta.jardim_id != Some(jardim.id))
        .cloned()
        .collect();

    // Fall back to the collection when the garden payload omits plants.
    let no_jardim: Vec<PlantaUsuario> = if jardim.plantas.is_empty() {
        minhas_plantas
            .iter()
            .filter(|planta| planta.jardim_id == Some(jardim.id))
            .cloned()
            .collect()
    } else {
        jardim.plantas.clone()
    };

    html! {
        <div class="p-4 space-y-6">
            <Link<MainRoute> to={MainRoute::MyGardens} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                {"Meus jardins"}
            </Link<MainRoute>>

            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <h1 class="text-2xl font-bold flex items-center gap-2">
                    <Icon icon_id={IconId::LucideFlower2} class="w-6 h-6 text-primary" />
                    {jardim.nome.clone()}
                </h1>
                <form class="join" onsubmit={on_add_plant}>
                    <select class="select select-bordered join-item" onchange={on_select_plant} required=true>
                        <option value="" selected={selected_plant.is_none()} disabled=true>
                            {"Escolher planta..."}
                        </option>
                        {
                            for candidatas.iter().map(|planta| html! {
                                <option value={planta.id.to_string()}
                                    selected={*selected_plant == Some(planta.id)}>
                                    {planta.display_name().to_string()}
                                </option>
                            })
                        }
                    </select>
                    <button class="btn btn-primary join-item" type="submit"
                        disabled={selected_plant.is_none()}>
                        {"Adicionar"}
                    </button>
                </form>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }

            if no_jardim.is_empty() {
                <p class="text-center opacity-70 py-8">{"Este jardim ainda está vazio."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {
                        for no_jardim.iter().map(|planta| html! {
                            <div class="card bg-base-200 shadow-xl" key={planta.id}>
                                <div class="card-body">
                                    <h2 class="card-title">{planta.display_name().to_string()}</h2>
                                    <p class="text-sm italic opacity-70">{planta.catalogo.nome.clone()}</p>
                                    <div class="card-actions justify-end mt-2">
                                        <Link<MainRoute>
                                            to={MainRoute::PlantDetail { id: planta.id }}
                                            classes="btn btn-primary btn-sm"
                                        >
                                            {"Cuidar"}
                                        </Link<MainRoute>>
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>
            }

            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
