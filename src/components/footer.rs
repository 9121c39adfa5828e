use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::dom::use_smart_scroll;
use crate::scroll::SectionId;
use crate::Route;

#[derive(Properties, PartialEq)]
struct FooterLinkProps {
    label: &'static str,
    target: SectionId,
}

#[function_component(FooterLink)]
fn footer_link(props: &FooterLinkProps) -> Html {
    let onclick = use_smart_scroll(props.target.clone());
    html! {
        <button class="footer-link" aria-label={props.label} {onclick}>
            {props.label}
        </button>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <img class="footer-logo" src={config::LOGO_URL} alt="KAREL:ENERGY® logo" loading="lazy" />
                <nav class="footer-nav">
                    <FooterLink label="Domov" target={SectionId::HOME} />
                    <FooterLink label="Služby" target={SectionId::SERVICES} />
                    <FooterLink label="Referencie" target={SectionId::REFERENCES} />
                    <Link<Route> to={Route::Blog} classes="footer-link">
                        {"Blog"}
                    </Link<Route>>
                    <FooterLink label="Kontakt" target={SectionId::CONTACT} />
                </nav>
                <p class="footer-copyright">
                    {"© 2025 karel.energy ® – Všetky práva vyhradené."}
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #f3f4f6;
                    background: #ffffff;
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-logo {
                    height: 2rem;
                    width: auto;
                }
                .footer-nav {
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .footer-link {
                    border: none;
                    background: none;
                    padding: 0;
                    font: inherit;
                    font-size: 0.9rem;
                    color: #4b5563;
                    text-decoration: none;
                    cursor: pointer;
                }
                .footer-link:hover {
                    color: #15803d;
                }
                .footer-copyright {
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}
