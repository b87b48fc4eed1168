use crate::api::JojaClient;
use crate::models::app_state::AppState;
use crate::routes::{self, MainRoute};
use crate::session::Session;
use wasm_bindgen_futures::spawn_local;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    // One session controller for the whole application lifetime.
    let session = use_memo((), move |_| Session::new(JojaClient::shared(), dispatch));
    let session_value = (*session).clone();

    // Resolve the persisted token into a user as soon as the app mounts.
    {
        let session = session_value.clone();
        use_effect_with((), move |_| {
            web_sys::console::log_1(&"Session: resolving persisted token".into());
            spawn_local(async move { session.refresh_user().await });
            || ()
        });
    }

    html! {
        <ContextProvider<Session> context={session_value}>
            <BrowserRouter>
                <Switch<MainRoute> render={routes::switch} />
            </BrowserRouter>
        </ContextProvider<Session>>
    }
}
