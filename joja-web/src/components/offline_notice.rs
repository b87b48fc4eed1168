use crate::session::Session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Shown when a token is persisted but the backend could not be reached.
///
/// The session stays intact; the user retries instead of being logged out.
#[function_component(OfflineNotice)]
pub fn offline_notice() -> Html {
    let session = use_context::<Session>();

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(session) = session.clone() {
            spawn_local(async move { session.refresh_user().await });
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <div class="bg-base-200 p-8 rounded-lg shadow-md flex flex-col items-center gap-3 max-w-md text-center">
                <Icon icon_id={IconId::LucideWifiOff} class="w-10 h-10 text-warning" />
                <h2 class="text-xl font-bold">{"Sem conexão com o servidor"}</h2>
                <p class="text-sm opacity-70">
                    {"Sua sessão continua guardada. Verifique sua internet e tente novamente."}
                </p>
                <button class="btn btn-primary mt-2" {onclick}>{"Tentar novamente"}</button>
            </div>
        </div>
    }
}
