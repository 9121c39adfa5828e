use yew::prelude::*;

use crate::dom::scroll_to_section;
use crate::scroll::SectionId;

/// One problem on the left paired with the outcome on the right.
struct Contrast {
    without: &'static str,
    with: &'static str,
}

const ROWS: [Contrast; 4] = [
    Contrast {
        without: "Vyššie ceny za energie a nevýhodné zmluvne podmienky",
        with: "Najnižšie možné ceny a prehľad o tom, čo ho čaká v budúcnosti.",
    },
    Contrast {
        without: "Pokuty za jalový odber, zbytočne platená rezervovaná kapacita a distribučné poplatky.",
        with: "Optimálne nastavené zmluvy a parametre. Včasné upozornenia na zmeny v legislatíve, ktoré sa ho týkajú",
    },
    Contrast {
        without: "V prípade poruchy zariadení na vykurovanie a chladenie často predražené a menej efektívne riešenie.",
        with: "Všetko vopred spočítané – modernizácia v správny čas, žiadne zbytočné investície.",
    },
    Contrast {
        without: "Reaguje až keď je neskoro, prípadne sa niečo udeje - bez jasného plánu.",
        with: "Riadi sa stratégiou, využíva dotácie a rozhoduje sa včas – nič ho nezaskočí.",
    },
];

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(&SectionId::CONTACT));

    html! {
        <section id="pred-po" class="before-after" aria-labelledby="pred-po-heading">
            <div class="before-after-content">
                <div class="section-heading">
                    <h2 id="pred-po-heading">{"Pred a Po"}</h2>
                    <p>
                        {"Na jednom mieste vidíte, ako sa konkrétne problémy menia na konkurenčné výhody, \
                          keď existuje jasná stratégia a služby, ktoré pre vás zabezpečím."}
                    </p>
                </div>

                <div class="contrast-grid" role="table" aria-label="Porovnanie pred a po">
                    <div class="contrast-row contrast-head" role="row">
                        <span class="contrast-badge negative" role="columnheader">{"Klient bez stratégie"}</span>
                        <span class="contrast-vs" aria-hidden="true">{"VS"}</span>
                        <span class="contrast-badge positive" role="columnheader">{"Klient so stratégiou"}</span>
                    </div>
                    { for ROWS.iter().map(|row| html! {
                        <div key={row.without} class="contrast-row" role="row">
                            <div class="contrast-cell negative" role="cell">
                                <span aria-hidden="true">{"✕ "}</span>{row.without}
                            </div>
                            <span class="contrast-arrow" aria-hidden="true">{"→"}</span>
                            <div class="contrast-cell positive" role="cell">
                                <span aria-hidden="true">{"✔ "}</span>{row.with}
                            </div>
                        </div>
                    }) }
                </div>

                <div class="before-after-cta">
                    <button type="button" class="before-after-button" onclick={to_contact} aria-label="Prejsť na kontakt">
                        {"Mám záujem o vaše služby"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .before-after {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                }
                .before-after-content {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .contrast-grid {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contrast-row {
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    align-items: stretch;
                    gap: 1rem;
                }
                .contrast-head {
                    align-items: center;
                }
                .contrast-badge {
                    justify-self: center;
                    padding: 0.375rem 0.875rem;
                    border-radius: 999px;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .contrast-badge.negative {
                    background: #ffe4e6;
                    color: #be123c;
                }
                .contrast-badge.positive {
                    background: #d1fae5;
                    color: #047857;
                }
                .contrast-vs {
                    font-weight: 700;
                    color: #9ca3af;
                }
                .contrast-cell {
                    padding: 1rem 1.25rem;
                    border-radius: 0.75rem;
                    border: 1px solid;
                    color: #1f2937;
                }
                .contrast-cell.negative {
                    background: #fff1f2;
                    border-color: #fecdd3;
                }
                .contrast-cell.positive {
                    background: #ecfdf5;
                    border-color: #a7f3d0;
                }
                .contrast-arrow {
                    align-self: center;
                    color: #059669;
                    font-size: 1.25rem;
                }
                .before-after-cta {
                    margin-top: 2.5rem;
                    text-align: center;
                }
                .before-after-button {
                    padding: 0.75rem 1.25rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #059669;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .before-after-button:hover {
                    background: #047857;
                }
                @media (max-width: 767px) {
                    .contrast-row {
                        grid-template-columns: 1fr;
                    }
                    .contrast-vs,
                    .contrast-arrow {
                        justify-self: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
