use yew::prelude::*;

use crate::dom::scroll_to_section;
use crate::scroll::SectionId;

#[function_component(BridgeCta)]
pub fn bridge_cta() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(&SectionId::CONTACT));

    html! {
        <section class="bridge-cta" aria-label="Premostenie ku kontaktu">
            <div class="bridge-card">
                <h3>{"Nie je až tak dôležité, odkiaľ energia prichádza, ale koľko zaplatíte."}</h3>
                <button type="button" class="bridge-button" onclick={to_contact} aria-label="Chcem platiť menej">
                    <span aria-hidden="true">{"☎ "}</span>
                    {"Chcem platiť menej"}
                </button>
            </div>
            <style>
                {r#"
                .bridge-cta {
                    padding: 2.5rem 1rem;
                }
                .bridge-card {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border: 1px solid #fed7aa;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #fff7ed, #ffffff, #fff7ed);
                    text-align: center;
                }
                .bridge-card h3 {
                    font-size: 1.75rem;
                    color: #111827;
                    margin: 0;
                }
                .bridge-button {
                    margin-top: 1.5rem;
                    padding: 0.625rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #ea580c;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .bridge-button:hover {
                    background: #c2410c;
                }
                "#}
            </style>
        </section>
    }
}
