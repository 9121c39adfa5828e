use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod contact;
mod dom;
mod panels;
mod scroll;
mod visibility;
mod blog {
    pub mod filter;
    pub mod posts;
}
mod components {
    pub mod announcement_bar;
    pub mod before_after;
    pub mod bridge_cta;
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod process;
    pub mod references;
    pub mod service_card;
    pub mod services;
    pub mod trust_bar;
}
mod pages {
    pub mod blog;
    pub mod home;
    pub mod not_found;
}

use components::{announcement_bar::AnnouncementBar, footer::Footer, header::Header};
use pages::{
    blog::{BlogIndex, BlogPostPage},
    home::Home,
    not_found::NotFound,
};
use scroll::ScrollResolver;

// Served as static files, so routes live in the location hash and home is `#/`.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogIndex /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post page for {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Shared by every header, footer and banner link so a new click supersedes
    // a navigation still waiting for the home view.
    let resolver = use_state(ScrollResolver::browser);

    html! {
        <HashRouter>
            <ContextProvider<ScrollResolver> context={(*resolver).clone()}>
                <div class="site">
                    <AnnouncementBar />
                    <Header />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
                <style>{SITE_STYLE}</style>
            </ContextProvider<ScrollResolver>>
        </HashRouter>
    }
}

const SITE_STYLE: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: #111827;
    background: #ffffff;
}
.site {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}
main {
    flex: 1;
}
section[id] {
    scroll-margin-top: 5rem;
}
.section-heading {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 3rem auto;
}
.section-heading h2 {
    font-size: 2.25rem;
    color: #111827;
    margin: 0 0 1rem 0;
}
.section-heading p {
    font-size: 1.1rem;
    color: #4b5563;
}
"#;

fn main() {
    // Panic messages go to the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
