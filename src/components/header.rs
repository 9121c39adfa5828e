use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::dom::use_smart_scroll;
use crate::scroll::SectionId;
use crate::Route;

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    label: &'static str,
    target: SectionId,
}

/// Anchor that reaches a home section from any route.
#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = use_smart_scroll(props.target.clone());
    html! {
        <a href="#" class="nav-link" aria-label={props.label} {onclick}>
            {props.label}
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let to_home = use_smart_scroll(SectionId::HOME);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let target = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let scroll_y = target.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 8.0);
                    }) as Box<dyn FnMut()>);
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <button class="header-logo" onclick={to_home} aria-label={format!("Domov – {}", config::BRAND)}>
                    <img src={config::LOGO_URL} alt="KAREL:ENERGY® logo" />
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div onclick={close_menu.clone()}>
                        <NavLink label="Domov" target={SectionId::HOME} />
                    </div>
                    <div onclick={close_menu.clone()}>
                        <NavLink label="Služby" target={SectionId::SERVICES} />
                    </div>
                    <div onclick={close_menu.clone()}>
                        <NavLink label="Referencie" target={SectionId::REFERENCES} />
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <NavLink label="Kontakt" target={SectionId::CONTACT} />
                    </div>
                </nav>

                <div class="quick-contacts">
                    <a href={config::PHONE_HREF} class="quick-contact" aria-label="Zavolať na číslo 042 222 00 01">
                        <span class="quick-contact-icon" aria-hidden="true">{"☎"}</span>
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="quick-contact"
                        aria-label={format!("Napísať e-mail na {}", config::CONTACT_EMAIL)}>
                        <span class="quick-contact-icon" aria-hidden="true">{"✉"}</span>
                        <span>{config::CONTACT_EMAIL}</span>
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #f3f4f6;
                    transition: box-shadow 0.2s ease;
                }
                .site-header.scrolled {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .header-logo {
                    border: none;
                    background: none;
                    padding: 0;
                    cursor: pointer;
                }
                .header-logo img {
                    height: 2.5rem;
                    width: auto;
                }
                .header-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #15803d;
                }
                .quick-contacts {
                    display: flex;
                    gap: 1.75rem;
                }
                .quick-contact {
                    display: inline-flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #111827;
                    text-decoration: none;
                }
                .quick-contact-icon {
                    color: #16a34a;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #374151;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .header-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: #ffffff;
                        border-bottom: 1px solid #f3f4f6;
                    }
                    .header-nav.mobile-menu-open {
                        display: flex;
                    }
                    .quick-contact span:not(.quick-contact-icon) {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
