use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Not-found page.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="opacity-70">{"Esta página não existe ou foi podada."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Voltar para o início"}
            </Link<MainRoute>>
        </div>
    }
}
