use yew::prelude::*;

use crate::components::service_card::{ExpandableServiceCard, ServiceItem};
use crate::panels::{use_panel_group, ResetSignal};
use crate::scroll::SectionId;
use crate::visibility::use_leave_viewport;

const SURPLUS: ServiceItem = ServiceItem {
    title: "Riešenie na prebytky vyrobenej elektriny",
    description: "Podľa veľkosti a typu výrobného zdroja s ohľadom na spotrebu elektriny v danom objekte prípadne na iných odberných miestach a ďalších kritérií, návrh a výber najlepšieho aktuálne možného dostupného riešenia.",
    icon: "♻",
};

const HEATING: ServiceItem = ServiceItem {
    title: "Vykurovanie, chladenie a fotovoltika",
    description: "Poradím a navrhnem podľa typu budovy, aktuálneho stavu a vašich preferencií na základe praxe tepelné čerpadlá, kotle, termostaty, kolektory, zásobníky na vodu, rekuperácie, fotovoltiku a klimatizácie. Po dohode vám pomôžem pri orientácií v cenových ponukách vašich dopytov a dopĺňaní informácií od prípadného zhotoviteľa.",
    icon: "☀",
};

pub const BUSINESS_SERVICES: [ServiceItem; 6] = [
    ServiceItem {
        title: "Najnižšia cena elektriny a plynu",
        description: "Výberom z viacerých kredibilných dodávateľov energií s fixnou alebo spotovou cenou či ich kombináciou pre všetky typy a veľkosti odberov a druhom viazanosti.",
        icon: "⚡",
    },
    ServiceItem {
        title: "Správne nastavenie distribučných parametrov",
        description: "Analýza taríf, ističov, MRK a jalového odberu za minimálne jeden kalendárny rok, resp. minimálne 12 vyúčtovacích faktúr s vyhodnotením jednotlivých distribučných položiek a určením správnych hodnôt s administratívou.",
        icon: "🎚",
    },
    SURPLUS,
    HEATING,
    ServiceItem {
        title: "ESG, BREEM, LEED, účelový a energetický audit",
        description: "So špecializovanými odborníkmi vypracujeme ESG, BREEM, LEED a energetický audit podľa zákona č. 321/2014 o energetickej efektívnosti. Pomôžeme získať dotácie na fotovoltiku a teplené čerpadlá s nárokom na podporu podľa aktuálnej výzvy.",
        icon: "✔",
    },
    ServiceItem {
        title: "Energetický posudok",
        description: "Slúži na interné posúdenie aktuálneho stavu, podľa vašej definície rozsahu. Je prispôsobený vašim potrebám v ľudskej reči s ohľadom na aktuálny stav a budúci vývoj.",
        icon: "📄",
    },
];

pub const HOME_SERVICES: [ServiceItem; 2] = [SURPLUS, HEATING];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Business,
    Home,
}

impl Audience {
    fn label(self) -> &'static str {
        match self {
            Audience::Business => "Som firemný zákazník",
            Audience::Home => "Domácnosti",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Audience::Business => "Mám pridelené IČO",
            Audience::Home => "Bývam v rodinnom dome",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Audience::Business => "🏢",
            Audience::Home => "🏠",
        }
    }

    fn services(self) -> &'static [ServiceItem] {
        match self {
            Audience::Business => &BUSINESS_SERVICES,
            Audience::Home => &HOME_SERVICES,
        }
    }
}

/// Clicking the selected audience again clears the selection.
pub fn toggle_audience(current: Option<Audience>, clicked: Audience) -> Option<Audience> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct OptionCardProps {
    audience: Audience,
    selected: bool,
    on_select: Callback<MouseEvent>,
}

#[function_component(OptionCard)]
fn option_card(props: &OptionCardProps) -> Html {
    let audience = props.audience;
    html! {
        <button
            type="button"
            class={classes!("option-card", props.selected.then(|| "selected"))}
            aria-pressed={props.selected.to_string()}
            onclick={props.on_select.clone()}
        >
            <span class="option-card-check" aria-hidden="true">{"✔"}</span>
            <div class="option-card-icon" aria-hidden="true">{audience.icon()}</div>
            <div class="option-card-text">
                <h3>{audience.label()}</h3>
                <p>{audience.description()}</p>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceGroupProps {
    items: &'static [ServiceItem],
    reset: ResetSignal,
}

/// One exclusive-open group of service cards.
#[function_component(ServiceGroup)]
fn service_group(props: &ServiceGroupProps) -> Html {
    let panels = use_panel_group::<&'static str>(props.reset);

    html! {
        <div class="service-grid">
            { for props.items.iter().map(|item| html! {
                <ExpandableServiceCard
                    key={item.title}
                    item={*item}
                    open={panels.is_open(&item.title)}
                    on_toggle={panels.toggle(item.title)}
                />
            }) }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let audience = use_state(|| None::<Audience>);
    let reset = use_reducer(ResetSignal::default);
    let section = use_node_ref();

    {
        let reset = reset.dispatcher();
        use_leave_viewport(section.clone(), Callback::from(move |_| reset.dispatch(())));
    }

    let select = |clicked: Audience| {
        let audience = audience.clone();
        let reset = reset.dispatcher();
        Callback::from(move |_: MouseEvent| {
            audience.set(toggle_audience(*audience, clicked));
            reset.dispatch(());
        })
    };

    let content = match *audience {
        None => html! {
            <div class="services-prompt">
                <p>{"Vyberte, pre koho hľadáte riešenia."}</p>
                <p class="services-prompt-note">
                    {"Pre organizácie a verejnú správu zabezpečím viaceré cenové ponuky tak, aby ste dodržali všetky platné legislatívne rámce."}
                </p>
            </div>
        },
        Some(selected) => html! {
            <ServiceGroup
                key={selected.label()}
                items={selected.services()}
                reset={*reset}
            />
        },
    };

    html! {
        <section id={SectionId::SERVICES.to_string()} class="services" ref={section}>
            <div class="services-content">
                <div class="section-heading">
                    <h2>{"Moje služby"}</h2>
                    <p>
                        {"Či ide o výrobný závod, segment HORECA, malú prevádzku, STK, družstvo, developerský projekt, panelák alebo rodinný dom - vždy hodnotím všetky súvisiace oblasti komplexne, zodpovedne a s ohľadom na vaše reálne potreby."}
                    </p>
                    <p>
                        {"Individuálny prístup neumožňuje mať cenníky a jednotné ceny za služby. Jedinečnosť tiež spočíva v rôznorodosti vašich potrieb."}
                    </p>
                </div>

                <div class="audience-options" role="group" aria-label="Výber cieľovej skupiny">
                    <OptionCard
                        audience={Audience::Business}
                        selected={*audience == Some(Audience::Business)}
                        on_select={select(Audience::Business)}
                    />
                    <OptionCard
                        audience={Audience::Home}
                        selected={*audience == Some(Audience::Home)}
                        on_select={select(Audience::Home)}
                    />
                </div>

                {content}
            </div>
            <style>
                {r#"
                .services {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .services-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .audience-options {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .option-card {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1.5rem;
                    text-align: left;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .option-card:hover {
                    border-color: #d1d5db;
                }
                .option-card.selected {
                    border-color: #16a34a;
                    box-shadow: 0 0 0 2px #16a34a;
                    background: rgba(240, 253, 244, 0.7);
                }
                .option-card-check {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    color: transparent;
                }
                .option-card.selected .option-card-check {
                    color: #15803d;
                }
                .option-card-icon,
                .service-card-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    font-size: 1.4rem;
                }
                .option-card-icon {
                    background: linear-gradient(135deg, #ffedd5, #fed7aa);
                }
                .option-card-text h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    color: #111827;
                }
                .option-card-text p {
                    margin: 0.25rem 0 0 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .services-prompt {
                    margin-top: 2rem;
                    text-align: center;
                    color: #4b5563;
                }
                .services-prompt-note {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .service-grid {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .service-card {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    transition: all 0.2s ease;
                }
                .service-card.open {
                    border-color: #16a34a;
                    box-shadow: 0 0 0 2px rgba(22, 163, 74, 0.6);
                }
                .service-card-toggle {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1.5rem;
                    border: none;
                    background: none;
                    text-align: left;
                    cursor: pointer;
                }
                .service-card-icon {
                    background: linear-gradient(135deg, #dcfce7, #bbf7d0);
                    color: #15803d;
                }
                .service-card-heading {
                    flex: 1;
                }
                .service-card-heading h3 {
                    margin: 0;
                    font-size: 1.1rem;
                    color: #111827;
                }
                .service-card-heading p {
                    margin: 0.25rem 0 0 0;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .service-card-chevron {
                    color: #6b7280;
                    transition: transform 0.2s ease;
                }
                .service-card.open .service-card-chevron {
                    transform: rotate(180deg);
                }
                .service-card-detail {
                    padding: 0 1.5rem 1.5rem 1.5rem;
                    color: #374151;
                    line-height: 1.7;
                }
                @media (max-width: 768px) {
                    .audience-options,
                    .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
