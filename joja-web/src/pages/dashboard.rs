use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// Home page: greeting plus shortcuts into each area.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_store_value::<AppState>();
    let nome = state
        .user
        .as_ref()
        .map(|user| user.nome.clone())
        .unwrap_or_default();
    let is_admin = state.is_admin();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ format!("Olá, {nome}!") }</h1>
            <p class="opacity-70">{"O que vamos cultivar hoje?"}</p>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideBookOpen} class="w-6 h-6" />
                            {"Catálogo"}
                        </h2>
                        <p>{"Conheça as espécies disponíveis e seus cuidados."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Catalog} classes="btn btn-primary">
                                {"Explorar"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideLeaf} class="w-6 h-6" />
                            {"Minhas Plantas"}
                        </h2>
                        <p>{"Acompanhe regas, podas, adubações e fotos."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::MyPlants} classes="btn btn-primary">
                                {"Ver plantas"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::LucideFlower2} class="w-6 h-6" />
                            {"Meus Jardins"}
                        </h2>
                        <p>{"Organize suas plantas em jardins."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::MyGardens} classes="btn btn-primary">
                                {"Ver jardins"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                if is_admin {
                    <>
                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={IconId::LucideUsers} class="w-6 h-6" />
                                {"Gerenciar Usuários"}
                            </h2>
                            <p>{"Consulte usuários, altere senhas e adicione plantas."}</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={MainRoute::ManageUsers} classes="btn btn-secondary">
                                    {"Gerenciar"}
                                </Link<MainRoute>>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={IconId::LucideShield} class="w-6 h-6" />
                                {"Gerenciar Admins"}
                            </h2>
                            <p>{"Crie, consulte e remova administradores."}</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={MainRoute::ManageAdmins} classes="btn btn-secondary">
                                    {"Gerenciar"}
                                </Link<MainRoute>>
                            </div>
                        </div>
                    </div>
                    </>
                }
            </div>
        </div>
    }
}
