use crate::api::JojaClient;
use shared::models::PlantaCatalogo;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const PAGE_SIZE: u32 = 100;

fn matches_filter(planta: &PlantaCatalogo, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let filter = filter.to_lowercase();
    planta.nome.to_lowercase().contains(&filter)
        || planta
            .nome_cientifico
            .as_ref()
            .is_some_and(|nome| nome.to_lowercase().contains(&filter))
        || planta
            .categoria
            .as_ref()
            .is_some_and(|categoria| categoria.to_lowercase().contains(&filter))
}

/// Species catalog with a client-side search box.
#[function_component(CatalogPage)]
pub fn catalog_page() -> Html {
    let plantas = use_state(Vec::<PlantaCatalogo>::new);
    let filter = use_state(String::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let plantas = plantas.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match JojaClient::shared().catalog_list(0, PAGE_SIZE).await {
                    Ok(list) => plantas.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value());
            }
        })
    };

    let visible: Vec<PlantaCatalogo> = plantas
        .iter()
        .filter(|planta| matches_filter(planta, &filter))
        .cloned()
        .collect();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <h1 class="text-2xl font-bold">{"Catálogo de plantas"}</h1>
                <label class="input input-bordered flex items-center gap-2 md:w-96">
                    <Icon icon_id={IconId::LucideSearch} class="w-4 h-4 opacity-60" />
                    <input type="text" class="grow" placeholder="Buscar por nome, espécie ou categoria..."
                        value={(*filter).clone()} oninput={on_filter} />
                </label>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }

            if *loading {
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if visible.is_empty() {
                <p class="text-center opacity-70 py-8">{"Nenhuma planta encontrada."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {
                        for visible.iter().map(|planta| html! {
                            <div class="card bg-base-200 shadow-xl" key={planta.id}>
                                if let Some(url) = &planta.img_url {
                                    <figure class="h-40 overflow-hidden">
                                        <img src={url.clone()} alt={planta.nome.clone()} class="object-cover w-full" />
                                    </figure>
                                }
                                <div class="card-body">
                                    <h2 class="card-title">{planta.nome.clone()}</h2>
                                    if let Some(cientifico) = &planta.nome_cientifico {
                                        <p class="text-sm italic opacity-70">{cientifico.clone()}</p>
                                    }
                                    if let Some(categoria) = &planta.categoria {
                                        <div class="badge badge-outline">{categoria.clone()}</div>
                                    }
                                    if let Some(descricao) = &planta.descricao {
                                        <p class="text-sm">{descricao.clone()}</p>
                                    }
                                    <div class="flex gap-3 text-sm mt-2">
                                        <span class="flex items-center gap-1" title="Rega">
                                            <Icon icon_id={IconId::LucideDroplets} class="w-4 h-4 text-info" />
                                            {format!("{}d", planta.periodicidade_rega)}
                                        </span>
                                        <span class="flex items-center gap-1" title="Poda">
                                            <Icon icon_id={IconId::LucideScissors} class="w-4 h-4 text-success" />
                                            {format!("{}d", planta.periodicidade_poda)}
                                        </span>
                                        <span class="flex items-center gap-1" title="Adubação">
                                            <Icon icon_id={IconId::LucidePill} class="w-4 h-4 text-warning" />
                                            {format!("{}d", planta.periodicidade_adubo)}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planta(nome: &str, cientifico: Option<&str>, categoria: Option<&str>) -> PlantaCatalogo {
        PlantaCatalogo {
            id: 1,
            nome: nome.to_string(),
            nome_cientifico: cientifico.map(String::from),
            categoria: categoria.map(String::from),
            familia: None,
            descricao: None,
            instrucoes_cuidado: None,
            img_url: None,
            periodicidade_rega: 2,
            periodicidade_poda: 30,
            periodicidade_adubo: 15,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_filter(&planta("Alecrim", None, None), ""));
    }

    #[test]
    fn filter_is_case_insensitive_over_name_species_and_category() {
        let samambaia = planta(
            "Samambaia",
            Some("Nephrolepis exaltata"),
            Some("Folhagem"),
        );
        assert!(matches_filter(&samambaia, "sama"));
        assert!(matches_filter(&samambaia, "NEPHRO"));
        assert!(matches_filter(&samambaia, "folhagem"));
        assert!(!matches_filter(&samambaia, "suculenta"));
    }
}
