use crate::{models::app_state::AppState, routes::MainRoute, session::Session};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

fn nav_link(current: Option<&MainRoute>, route: MainRoute, label: &str) -> Html {
    let active = current == Some(&route);
    let classes = if active { "active font-semibold" } else { "" };
    html! {
        <li>
            <Link<MainRoute> to={route} classes={classes}>{label}</Link<MainRoute>>
        </li>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let state = use_store_value::<AppState>();
    let session = use_context::<Session>();

    let user = state.user.clone();
    let is_admin = state.is_admin();
    let current = props.current_route.as_ref();

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(session) = session.clone() {
            session.logout();
        }
    });

    let links = html! {
        <>
            { nav_link(current, MainRoute::Catalog, "Catálogo") }
            { nav_link(current, MainRoute::MyPlants, "Minhas Plantas") }
            { nav_link(current, MainRoute::MyGardens, "Meus Jardins") }
            if is_admin {
                <>
                    { nav_link(current, MainRoute::ManageUsers, "Usuários") }
                    { nav_link(current, MainRoute::ManageAdmins, "Admins") }
                </>
            }
        </>
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                <Icon icon_id={IconId::LucideSprout} class="w-5 h-5 text-primary" />
                {"Joja Garden"}
            </Link<MainRoute>>
            <ul class="hidden menu sm:menu-horizontal">
                { links.clone() }
            </ul>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-ghost">
                    <Icon icon_id={IconId::LucideMenu} class="w-5 h-5" />
                </button>
                <ul tabindex="0" class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-1">
                    { links }
                </ul>
            </div>
            {
                user.map_or_else(
                    || html! {
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                            {"Entrar"}
                        </Link<MainRoute>>
                    },
                    |user| html! {
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                                <Icon icon_id={IconId::LucideUser} class="w-5 h-5" />
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                                <li class="px-2 py-1 text-left">
                                    <div class="text-sm font-semibold text-base-content">{ user.nome.clone() }</div>
                                    <div class="text-xs text-base-content/70">{ user.email.clone() }</div>
                                </li>
                                <div class="divider my-0"></div>
                                <li>
                                    <Link<MainRoute> to={MainRoute::AccountDetails}>{"Minha Conta"}</Link<MainRoute>>
                                </li>
                                <div class="divider my-0"></div>
                                <li><a onclick={on_logout}>{"Sair"}</a></li>
                            </ul>
                        </div>
                    },
                )
            }
        </nav>
    }
}
