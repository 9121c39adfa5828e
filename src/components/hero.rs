use yew::prelude::*;

use crate::dom::scroll_to_section;
use crate::scroll::SectionId;

const PORTRAIT_URL: &str = "https://pub-cdn.sider.ai/u/U0AWH6E9A4X/web-coder/68b87a397b28bae4985adee4/resource/f49fd6a1-449c-4b47-922a-29a47ed8b439.png";

#[derive(Properties, PartialEq)]
struct StatProps {
    value: &'static str,
    label: &'static str,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="hero-stat">
            <div class="hero-stat-value">{props.value}</div>
            <div class="hero-stat-label">{props.label}</div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(&SectionId::CONTACT));

    html! {
        <section id={SectionId::HOME.to_string()} class="hero">
            <div class="hero-grid">
                <div class="hero-text">
                    <h1>
                        {"Ušetríte až "}
                        <span class="hero-highlight">{"35 %"}</span>
                        {" na energiách !"}
                    </h1>
                    <div class="hero-lead">
                        <span>{"Pre väčšinu ľudí je svet energií zbytočne komplikovaný."}</span>
                        <span>{"Moja práca = vaše nižšie účty za energie."}</span>
                        <span>{"Preto hľadám riešenia, ktoré sú jasné a ekonomicky výhodné."}</span>
                    </div>
                    <p class="hero-signature">
                        {"Karel Dlugoš - nezávislý energetik, audítor a konzultant."}
                    </p>
                    <p class="hero-region">
                        <span aria-hidden="true">{"📍"}</span>
                        {" Pôsobím na celkom Slovensku - osobne aj online"}
                    </p>
                    <ul class="hero-features">
                        <li>{"všetko na jednom mieste"}</li>
                        <li>{"jednoducho a zrozumiteľne"}</li>
                        <li>{"odborne so skúsenosťami"}</li>
                    </ul>
                    <button class="hero-cta" onclick={to_contact}>
                        {"Chcem ušetriť"}
                    </button>
                </div>

                <div class="hero-visual">
                    <img src={PORTRAIT_URL} alt="Karel Dlugoš - energetický konzultant" />
                    <div class="hero-stats">
                        <Stat value="11 +" label="Rokov skúseností" />
                        <Stat value="4 300 +" label="Hodín konzultácií" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    background: #ffffff;
                    padding: 4rem 1rem;
                }
                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .hero-text h1 {
                    font-size: clamp(26px, 5.8vw, 46px);
                    line-height: 1.15;
                    color: #111827;
                    margin: 0;
                }
                .hero-highlight {
                    color: #ea580c;
                    text-decoration: underline;
                    text-decoration-color: #f97316;
                    text-decoration-thickness: 4px;
                    text-underline-offset: 4px;
                }
                .hero-lead {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: #374151;
                }
                .hero-signature {
                    font-weight: 500;
                    color: #1f2937;
                }
                .hero-region {
                    color: #1f2937;
                }
                .hero-features {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    color: #ea580c;
                }
                .hero-features li::before {
                    content: "✔";
                    margin-right: 0.75rem;
                    color: #f97316;
                }
                .hero-cta {
                    margin-top: 2rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #16a34a;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #15803d;
                }
                .hero-visual {
                    position: relative;
                    max-height: 600px;
                }
                .hero-visual img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    -webkit-mask-image: radial-gradient(ellipse 130% 120% at 50% 50%, black 72%, rgba(0, 0, 0, 0) 100%);
                    mask-image: radial-gradient(ellipse 130% 120% at 50% 50%, black 72%, rgba(0, 0, 0, 0) 100%);
                }
                .hero-stats {
                    position: absolute;
                    top: 1rem;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 1rem;
                }
                .hero-stat-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ea580c;
                }
                .hero-stat-label {
                    font-size: 0.875rem;
                    color: #1f2937;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
