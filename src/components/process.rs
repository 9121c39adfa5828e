use yew::prelude::*;

struct Step {
    icons: &'static str,
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        icons: "📞 ✉",
        title: "Úvodná komunikácia",
        text: "Krátke zmapovanie situácie a vašich cieľov. Zistíme, kde sa oplatí začať.",
    },
    Step {
        icons: "📄 🔍",
        title: "Analýza podkladov",
        text: "Prejdem faktúry a dáta o spotrebe. Odhalím potenciál úspor a riziká.",
    },
    Step {
        icons: "📈 📝",
        title: "Návrh riešení",
        text: "Dostanete zrozumiteľné výstupy vrátane očakávaných výsledkov",
    },
    Step {
        icons: "🐷 🔔",
        title: "Realizácia úspory",
        text: "Pomôžem s implementáciou a upozorním na zmeny v energetike",
    },
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section class="process">
            <div class="process-content">
                <div class="section-heading">
                    <h2>{"Ako prebieha spolupráca"}</h2>
                    <p>{"Jasné kroky od prvého kontaktu po dosiahnuté úspory"}</p>
                </div>
                <div class="process-grid">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="process-step">
                            <div class="process-step-header">
                                <span class="process-step-number">{format!("Krok {}", i + 1)}</span>
                                <span aria-hidden="true">{step.icons}</span>
                            </div>
                            <h3>{step.title}</h3>
                            <p>{step.text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .process {
                    padding: 4rem 1rem;
                    background: #f9fafb;
                }
                .process-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .process-step {
                    background: #ffffff;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }
                .process-step:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .process-step-header {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .process-step-number {
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #6b7280;
                }
                .process-step h3 {
                    font-size: 1.1rem;
                    color: #111827;
                    margin: 0 0 0.5rem 0;
                }
                .process-step p {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 0;
                }
                @media (max-width: 768px) {
                    .process-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
