mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
mod session;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(RootApp)]
fn root_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting Joja Garden".into());

    // Mount the app to the document body
    Renderer::<RootApp>::with_root(
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_elements_by_tag_name("body")
            .item(0)
            .unwrap(),
    )
    .render();
}
