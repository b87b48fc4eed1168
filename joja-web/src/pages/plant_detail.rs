use crate::api::JojaClient;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::toast::{Toast, ToastData};
use crate::routes::MainRoute;
use shared::models::{Acao, AcaoCreate, Imagem, ImagemCreate, PlantaUsuario, TipoAcao};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlantDetailPageProps {
    pub id: i64,
}

fn tipo_icon(tipo: TipoAcao) -> IconId {
    match tipo {
        TipoAcao::Rega => IconId::LucideDroplets,
        TipoAcao::Poda => IconId::LucideScissors,
        TipoAcao::Adubo => IconId::LucidePill,
    }
}

/// One plant: care instructions, the action diary and the photo gallery.
#[function_component(PlantDetailPage)]
pub fn plant_detail_page(props: &PlantDetailPageProps) -> Html {
    let planta = use_state(|| None::<PlantaUsuario>);
    let acoes = use_state(Vec::<Acao>::new);
    let galeria = use_state(Vec::<Imagem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastData>);

    let novo_tipo = use_state(|| TipoAcao::Rega);
    let nova_descricao = use_state(String::new);
    let nova_foto_url = use_state(String::new);
    let novo_foto_titulo = use_state(String::new);
    let imagem_to_delete = use_state(|| None::<i64>);

    // Fetch everything for this plant; the three calls share one task.
    {
        let planta = planta.clone();
        let acoes = acoes.clone();
        let galeria = galeria.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |&id| {
            spawn_local(async move {
                let client = JojaClient::shared();
                match client.get_plant(id).await {
                    Ok(found) => {
                        planta.set(Some(found));
                        if let Ok(list) = client.list_actions(id).await {
                            acoes.set(list);
                        }
                        if let Ok(list) = client.gallery(id).await {
                            galeria.set(list);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_tipo_change = {
        let novo_tipo = novo_tipo.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(tipo) = select.value().parse::<TipoAcao>() {
                    novo_tipo.set(tipo);
                }
            }
        })
    };

    let on_descricao_change = {
        let nova_descricao = nova_descricao.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                nova_descricao.set(input.value());
            }
        })
    };

    let on_registrar = {
        let planta_id = props.id;
        let novo_tipo = novo_tipo.clone();
        let nova_descricao = nova_descricao.clone();
        let acoes = acoes.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let descricao = nova_descricao.trim().to_string();
            let payload = AcaoCreate {
                tipo: *novo_tipo,
                descricao: (!descricao.is_empty()).then_some(descricao),
                data_hora: None,
            };
            let acoes = acoes.clone();
            let toast = toast.clone();
            let nova_descricao = nova_descricao.clone();
            spawn_local(async move {
                match JojaClient::shared().register_action(planta_id, &payload).await {
                    Ok(acao) => {
                        let mut list = (*acoes).clone();
                        list.insert(0, acao);
                        acoes.set(list);
                        nova_descricao.set(String::new());
                        toast.set(Some(ToastData::success("Cuidado registrado!")));
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_foto_url_change = {
        let nova_foto_url = nova_foto_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                nova_foto_url.set(input.value());
            }
        })
    };

    let on_foto_titulo_change = {
        let novo_foto_titulo = novo_foto_titulo.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                novo_foto_titulo.set(input.value());
            }
        })
    };

    let on_add_foto = {
        let planta_id = props.id;
        let nova_foto_url = nova_foto_url.clone();
        let novo_foto_titulo = novo_foto_titulo.clone();
        let galeria = galeria.clone();
        let toast = toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let url = nova_foto_url.trim().to_string();
            if url.is_empty() {
                return;
            }
            let titulo = novo_foto_titulo.trim().to_string();
            let payload = ImagemCreate {
                titulo: (!titulo.is_empty()).then_some(titulo),
                descricao: None,
                url,
            };
            let galeria = galeria.clone();
            let toast = toast.clone();
            let nova_foto_url = nova_foto_url.clone();
            let novo_foto_titulo = novo_foto_titulo.clone();
            spawn_local(async move {
                match JojaClient::shared().add_image(planta_id, &payload).await {
                    Ok(imagem) => {
                        let mut list = (*galeria).clone();
                        list.push(imagem);
                        galeria.set(list);
                        nova_foto_url.set(String::new());
                        novo_foto_titulo.set(String::new());
                        toast.set(Some(ToastData::success("Foto adicionada à galeria!")));
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_confirm_delete_foto = {
        let imagem_to_delete = imagem_to_delete.clone();
        let galeria = galeria.clone();
        let toast = toast.clone();
        Callback::from(move |(): ()| {
            let Some(imagem_id) = *imagem_to_delete else {
                return;
            };
            imagem_to_delete.set(None);
            let galeria = galeria.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match JojaClient::shared().delete_image(imagem_id).await {
                    Ok(()) => {
                        let list: Vec<Imagem> = galeria
                            .iter()
                            .filter(|imagem| imagem.id != imagem_id)
                            .cloned()
                            .collect();
                        galeria.set(list);
                        toast.set(Some(ToastData::success("Foto removida.")));
                    }
                    Err(err) => toast.set(Some(ToastData::error(err.to_string()))),
                }
            });
        })
    };

    let on_cancel_delete_foto = {
        let imagem_to_delete = imagem_to_delete.clone();
        Callback::from(move |(): ()| imagem_to_delete.set(None))
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

    let Some(planta) = (*planta).clone() else {
        return html! {
            <div class="p-4 space-y-4">
                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message.clone()}</span></div>
                }
                <Link<MainRoute> to={MainRoute::MyPlants} classes="btn btn-ghost">
                    <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                    {"Voltar para minhas plantas"}
                </Link<MainRoute>>
            </div>
        };
    };

    html! {
        <div class="p-4 space-y-6">
            <Link<MainRoute> to={MainRoute::MyPlants} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::LucideArrowLeft} class="w-4 h-4" />
                {"Minhas plantas"}
            </Link<MainRoute>>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{planta.display_name().to_string()}</h1>
                    <p class="italic opacity-70">{planta.catalogo.nome.clone()}</p>
                    if let Some(instrucoes) = &planta.catalogo.instrucoes_cuidado {
                        <p class="text-sm">{instrucoes.clone()}</p>
                    }
                    <div class="stats shadow mt-2">
                        <div class="stat">
                            <div class="stat-figure text-info">
                                <Icon icon_id={IconId::LucideDroplets} class="w-6 h-6" />
                            </div>
                            <div class="stat-title">{"Rega"}</div>
                            <div class="stat-value text-lg">{format!("{}d", planta.catalogo.periodicidade_rega)}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-success">
                                <Icon icon_id={IconId::LucideScissors} class="w-6 h-6" />
                            </div>
                            <div class="stat-title">{"Poda"}</div>
                            <div class="stat-value text-lg">{format!("{}d", planta.catalogo.periodicidade_poda)}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-warning">
                                <Icon icon_id={IconId::LucidePill} class="w-6 h-6" />
                            </div>
                            <div class="stat-title">{"Adubação"}</div>
                            <div class="stat-value text-lg">{format!("{}d", planta.catalogo.periodicidade_adubo)}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // Care diary
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Diário de cuidados"}</h2>
                        <form class="flex flex-col sm:flex-row gap-2" onsubmit={on_registrar}>
                            <select class="select select-bordered" onchange={on_tipo_change}>
                                {
                                    for TipoAcao::all().iter().map(|tipo| html! {
                                        <option value={tipo.as_str()} selected={*tipo == *novo_tipo}>
                                            {tipo.label()}
                                        </option>
                                    })
                                }
                            </select>
                            <input class="input input-bordered flex-grow" type="text"
                                placeholder="Observações (opcional)"
                                value={(*nova_descricao).clone()} oninput={on_descricao_change} />
                            <button class="btn btn-primary" type="submit">{"Registrar"}</button>
                        </form>
                        if acoes.is_empty() {
                            <p class="opacity-70 text-sm mt-4">{"Nenhum cuidado registrado ainda."}</p>
                        } else {
                            <ul class="mt-4 space-y-2">
                                {
                                    for acoes.iter().map(|acao| html! {
                                        <li class="flex items-center gap-3 bg-base-100 rounded-box p-3" key={acao.id}>
                                            <Icon icon_id={tipo_icon(acao.tipo)} class="w-5 h-5" />
                                            <div class="flex-grow">
                                                <span class="font-semibold">{acao.tipo.label()}</span>
                                                if let Some(descricao) = &acao.descricao {
                                                    <span class="text-sm opacity-70">{format!(" — {descricao}")}</span>
                                                }
                                            </div>
                                            <span class="text-xs opacity-60">
                                                {acao.data_hora.format("%d/%m/%Y %H:%M").to_string()}
                                            </span>
                                        </li>
                                    })
                                }
                            </ul>
                        }
                    </div>
                </div>

                // Photo gallery
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideCamera} class="w-5 h-5" />
                            {"Galeria"}
                        </h2>
                        <form class="flex flex-col sm:flex-row gap-2" onsubmit={on_add_foto}>
                            <input class="input input-bordered flex-grow" type="url" required=true
                                placeholder="URL da foto"
                                value={(*nova_foto_url).clone()} oninput={on_foto_url_change} />
                            <input class="input input-bordered" type="text"
                                placeholder="Título (opcional)"
                                value={(*novo_foto_titulo).clone()} oninput={on_foto_titulo_change} />
                            <button class="btn btn-primary" type="submit">{"Adicionar"}</button>
                        </form>
                        if galeria.is_empty() {
                            <p class="opacity-70 text-sm mt-4">{"Nenhuma foto ainda."}</p>
                        } else {
                            <div class="grid grid-cols-2 gap-3 mt-4">
                                {
                                    for galeria.iter().map(|imagem| {
                                        let imagem_to_delete = imagem_to_delete.clone();
                                        let imagem_id = imagem.id;
                                        let ask_delete = Callback::from(move |_: MouseEvent| {
                                            imagem_to_delete.set(Some(imagem_id));
                                        });
                                        html! {
                                            <div class="relative group" key={imagem.id}>
                                                <img src={imagem.url.clone()}
                                                    alt={imagem.titulo.clone().unwrap_or_else(|| "Foto da planta".to_string())}
                                                    class="rounded-box object-cover w-full h-32" />
                                                <button
                                                    class="btn btn-error btn-xs absolute top-1 right-1 opacity-0 group-hover:opacity-100"
                                                    onclick={ask_delete}
                                                >
                                                    <Icon icon_id={IconId::LucideX} class="w-3 h-3" />
                                                </button>
                                                if let Some(titulo) = &imagem.titulo {
                                                    <p class="text-xs mt-1 opacity-70">{titulo.clone()}</p>
                                                }
                                            </div>
                                        }
                                    })
                                }
                            </div>
                        }
                    </div>
                </div>
            </div>

            <ConfirmModal
                open={imagem_to_delete.is_some()}
                title="Remover foto"
                message="Tem certeza que deseja remover esta foto da galeria?"
                confirm_label="Remover"
                on_confirm={on_confirm_delete_foto}
                on_cancel={on_cancel_delete_foto}
            />
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
