use yew::prelude::*;

use crate::panels::{use_panel_group, ResetSignal};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let content_id = format!("faq-panel-{}", props.index);
    let button_id = format!("faq-button-{}", props.index);

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button
                id={button_id.clone()}
                type="button"
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={content_id.clone()}
                onclick={toggle}
            >
                <h3 class="question-text">{props.question}</h3>
                <span class="toggle-icon" aria-hidden="true">{"⌄"}</span>
            </button>
            <div id={content_id} role="region" aria-labelledby={button_id} class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

const QUESTIONS: [&str; 5] = [
    "Koľko môžem reálne ušetriť?",
    "Aké podklady budem potrebovať?",
    "Je úvodná konzultácia spoplatnená?",
    "Vaše služby sú určené pre firmy aj domácnosti?",
    "Môžete uviesť príklady stanovenia vašich cien?",
];

fn answer(index: usize) -> Html {
    match index {
        0 => html! { <p>{"Typicky v priemere 25–35% v závislosti od spotreby, taríf, dodávateľa a stavu vašich zariadení v danej nehnuteľnosti. Po analýze vždy uvádzam realistický odhad s rozsahom úspor a možností."}</p> },
        1 => html! { <p>{"Faktúry za energie (ktoré si zadefinujeme) a základné údaje o odberných miestach. Ostatné vysvetlím podľa vašich individuálnych požiadaviek."}</p> },
        2 => html! { <p>{"Nie. 10-min. úvodný rozhovor je zdarma. Cieľom je porozumieť vašim potrebám, odhadnúť potenciál úspor a dohodnúť sa na následnom postupe."}</p> },
        3 => html! { <p>{"Áno. Mám bohaté skúsenosti s oboma skupinami – od rodinných domov až po firmy z rôznych segmentov a štruktúr."}</p> },
        _ => html! {
            <ul>
                <li>{"Zmluvu na dodávku elektriny a plynu pre vaše podnikanie vám sprostredkujem zdarma."}</li>
                <li>{"Analýza a nastavenie distribučných parametrov stojí približne 120 Eur za elektromer."}</li>
                <li>{"Podľa rozsahu mojej práce sa vieme dohodnúť na hodinovej odmene alebo celkovej za odovzdaný projekt."}</li>
                <li>{"Cieľom je obojstranná spokojnosť."}</li>
            </ul>
        },
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // no external reset source, the group lives as long as the section
    let panels = use_panel_group::<usize>(ResetSignal::default());

    html! {
        <section class="faq-section">
            <div class="faq-glow" aria-hidden="true"></div>
            <div class="faq-grid">
                <div>
                    <h2>{"FAQ"}</h2>
                    <p class="faq-lead">{"Zodpovedané otázky, ktoré sa najčastejšie pýtate."}</p>
                </div>
                <div class="faq-list">
                    { for QUESTIONS.iter().enumerate().map(|(index, question)| html! {
                        <FaqItem
                            key={*question}
                            {index}
                            question={*question}
                            open={panels.is_open(&index)}
                            on_toggle={panels.toggle(index)}
                        >
                            {answer(index)}
                        </FaqItem>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    position: relative;
                    padding: 4rem 1rem;
                    background: #ffffff;
                    overflow: hidden;
                }
                .faq-glow {
                    position: absolute;
                    top: -2rem;
                    left: -2.5rem;
                    width: 18rem;
                    height: 18rem;
                    border-radius: 999px;
                    background: rgba(252, 211, 77, 0.2);
                    filter: blur(60px);
                    pointer-events: none;
                }
                .faq-grid {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                }
                .faq-grid h2 {
                    font-size: 2.25rem;
                    color: #111827;
                    margin: 0 0 1rem 0;
                }
                .faq-lead {
                    font-size: 1.1rem;
                    color: #4b5563;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    border: none;
                    background: none;
                    padding: 0;
                    text-align: left;
                    cursor: pointer;
                }
                .question-text {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 500;
                    color: #111827;
                }
                .toggle-icon {
                    margin-left: 1rem;
                    color: #9ca3af;
                    transition: transform 0.2s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    display: none;
                    padding-top: 0.75rem;
                    color: #4b5563;
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                .faq-answer ul {
                    padding-left: 1.25rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                @media (max-width: 1024px) {
                    .faq-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
