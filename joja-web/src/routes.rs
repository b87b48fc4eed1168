use crate::{
    api, components::loading::Loading, components::offline_notice::OfflineNotice,
    containers::layout::Layout, models::app_state::AppState, pages::*, session::Session,
};
use strum::EnumIter;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/login/forgot-password")]
    ForgotPassword,
    #[at("/sign-up-user")]
    SignUpUser,
    #[at("/sign-up-admin")]
    SignUpAdmin,
    #[at("/catalog")]
    Catalog,
    #[at("/my-plants")]
    MyPlants,
    #[at("/my-plants/:id")]
    PlantDetail { id: i64 },
    #[at("/my-gardens")]
    MyGardens,
    #[at("/my-gardens/:id")]
    GardenDetail { id: i64 },
    #[at("/manage-users")]
    ManageUsers,
    #[at("/manage-users/add-plant")]
    AddPlantToUser,
    #[at("/manage-users/change-password")]
    ChangeUserPassword,
    #[at("/manage-admins")]
    ManageAdmins,
    #[at("/account-details")]
    AccountDetails,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes reachable without a session.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::ForgotPassword | Self::SignUpUser)
    }

    /// Routes only administrators may open.
    #[must_use]
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            Self::ManageUsers
                | Self::AddPlantToUser
                | Self::ChangeUserPassword
                | Self::ManageAdmins
                | Self::SignUpAdmin
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let state = use_store_value::<AppState>();
    let session = use_context::<Session>();

    // Navigation can land here before the initial resolution finished (or
    // after one failed offline): a persisted token with no user means the
    // fetch should be retried on every route change.
    {
        let session = session.clone();
        let has_user = state.user.is_some();
        let loading = state.loading;
        use_effect_with(props.route.clone(), move |_| {
            if !loading && !has_user && api::read_stored_token().is_some() {
                if let Some(session) = session {
                    spawn_local(async move { session.refresh_user().await });
                }
            }
            || ()
        });
    }

    let route = props.route.clone();

    if route.is_public() {
        // A signed-in user has no business on the login screen.
        if route == MainRoute::Login && state.user.is_some() {
            return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
        }
        return match route {
            MainRoute::Login => html! { <LoginPage /> },
            MainRoute::ForgotPassword => html! { <ForgotPasswordPage /> },
            MainRoute::SignUpUser => html! { <SignUpUserPage /> },
            _ => html! {},
        };
    }

    // The redirect decision waits for the token check to settle; redirecting
    // mid-fetch would bounce users who are still being resolved.
    if state.loading {
        return html! { <Loading /> };
    }

    if state.user.is_none() {
        if api::read_stored_token().is_some() {
            // Token present but unreachable backend: retryable, not a logout.
            return html! { <OfflineNotice /> };
        }
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    if route.is_admin_only() && !state.is_admin() {
        return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
    }

    let current_route = route.clone();
    html! {
        <Layout {current_route}>
            {
                match route {
                    MainRoute::Home => html! { <DashboardPage /> },
                    MainRoute::Catalog => html! { <CatalogPage /> },
                    MainRoute::MyPlants => html! { <MyPlantsPage /> },
                    MainRoute::PlantDetail { id } => html! { <PlantDetailPage {id} /> },
                    MainRoute::MyGardens => html! { <MyGardensPage /> },
                    MainRoute::GardenDetail { id } => html! { <GardenDetailPage {id} /> },
                    MainRoute::ManageUsers => html! { <ManageUsersPage /> },
                    MainRoute::AddPlantToUser => html! { <AddPlantToUserPage /> },
                    MainRoute::ChangeUserPassword => html! { <ChangeUserPasswordPage /> },
                    MainRoute::ManageAdmins => html! { <ManageAdminsPage /> },
                    MainRoute::SignUpAdmin => html! { <SignUpAdminPage /> },
                    MainRoute::AccountDetails => html! { <AccountDetailsPage /> },
                    MainRoute::NotFound => html! { <ErrorPage /> },
                    MainRoute::Login
                    | MainRoute::ForgotPassword
                    | MainRoute::SignUpUser => html! {},
                }
            }
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    web_sys::console::log_1(&format!("Switching to route: {route:?}").into());
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_are_exactly_the_allow_list() {
        use strum::IntoEnumIterator;

        let public: Vec<MainRoute> = MainRoute::iter().filter(MainRoute::is_public).collect();
        assert_eq!(
            public,
            vec![
                MainRoute::Login,
                MainRoute::ForgotPassword,
                MainRoute::SignUpUser,
            ]
        );
    }

    #[test]
    fn admin_routes_are_never_public() {
        use strum::IntoEnumIterator;

        for route in MainRoute::iter().filter(MainRoute::is_admin_only) {
            assert!(!route.is_public(), "{route:?} is both public and admin-only");
        }
    }

    #[test]
    fn protected_paths_recognize_with_parameters() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(
            MainRoute::recognize("/my-plants/9"),
            Some(MainRoute::PlantDetail { id: 9 })
        );
        assert_eq!(
            MainRoute::recognize("/my-gardens/4"),
            Some(MainRoute::GardenDetail { id: 4 })
        );
        assert_eq!(
            MainRoute::recognize("/login/forgot-password"),
            Some(MainRoute::ForgotPassword)
        );
    }

    #[test]
    fn route_paths_round_trip() {
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(
            MainRoute::PlantDetail { id: 12 }.to_path(),
            "/my-plants/12"
        );
        assert_eq!(MainRoute::ManageAdmins.to_path(), "/manage-admins");
    }

    #[test]
    fn route_equality_distinguishes_parameters() {
        assert_eq!(
            MainRoute::PlantDetail { id: 1 },
            MainRoute::PlantDetail { id: 1 }
        );
        assert_ne!(
            MainRoute::PlantDetail { id: 1 },
            MainRoute::PlantDetail { id: 2 }
        );
    }
}
