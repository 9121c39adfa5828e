use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title(config::page_title("Stránka nenájdená"));

    html! {
        <div class="not-found">
            <h1>{"Stránka nenájdená"}</h1>
            <p>{"Adresa, ktorú hľadáte, neexistuje."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">{"← Späť na úvod"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    max-width: 40rem;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    text-align: center;
                    color: #4b5563;
                }
                .not-found h1 {
                    color: #111827;
                }
                .not-found-link {
                    color: #15803d;
                    font-weight: 500;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
