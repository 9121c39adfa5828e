use gloo_timers::callback::Interval;
use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::carousel::{swipe_action, Carousel, CarouselAction};
use crate::config;
use crate::scroll::SectionId;

struct Testimonial {
    title: &'static str,
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        title: "Komplexná starostlivosť",
        quote: "Počas konzultácie s Karlom v našej firme sme sa dostali aj k téme môjho rodinného domu, ktorý bol ešte vo fáze hrubej stavby. Vďaka jeho cenným radám som odstránil množstvo chýb a vyhol sa dodatočným úpravám. Pomohol mi nielen s optimálnou fotovoltikou a nabíjaním nového ženinho elektromobilu, ale aj so zdieľaním prebytkov elektriny s domovom mojich rodičov. Navyše mi poradil aj v oblasti energetickej bezpečnosti a tak mám teraz dom nie len úsporný ale aj bezpečný.",
        author: "COO spoločnosti a majiteľ novostavby",
    },
    Testimonial {
        title: "Poriadok v energiách",
        quote: "Ako obce sme mali viacero rôznych odberných miest u rôznych dodávateľov energií z minulosti s rôznymi cenami, čo spôsobilo zbytočný chaos a náklady. Pán Dlugoš nám pomohol všetko zjednotiť pod jedným dodávateľom, optimalizovať a zjednotiť zmluvné podmienky. Vďaka tomu sme získali prehľad v našich energiách. Keď sme neskôr doplnili verejné osvetlenie, tieto EIC kódy sme pridali praktický okamžite do zmluvy s aktuálnym dodávateľom.",
        author: "Starostka",
    },
    Testimonial {
        title: "Optimalizácia, ktorá šetrí tisíce",
        quote: "Naše sezónne výkyvy v spotrebe elektriny nám spôsobovali pokuty za nedodržanie účinníka a ďalšie distribučné poplatky. Pán Dlugoš nám pomohol optimalizovať nastavenia, vďaka čomu sme ročne už neplatili pokutu viac ako 3200 eur. Navyše nás upozornil na riziká spojené s nedočerpaním odberu, čo nám pomohlo znížiť ďalší zbytočný náklad ktorý vieme použiť na rozvoj podniku.",
        author: "Manažérka poľnohospodárskeho podniku",
    },
    Testimonial {
        title: "Bez zbytočných nákladov",
        quote: "Pôvodne sme mali cenové ponuky na fotovoltiku, kde sme mali omnoho vyššie výkony, než by sme dokázali využiť. Karel nám pomohol znížiť investíciu a nastaviť systém tak, aby sme ho využívali efektívne bez nutnosti prebytkov. Vyrobenú elektrinu počas víkendov a sviatkov, kedy sa nepracuje predávame zatiaľ dodávateľovi. Vďaka tomu sme ušetrili nemalé prostriedky.",
        author: "Majiteľ rodinnej firmy",
    },
];

fn document_hidden() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

#[function_component(References)]
pub fn references() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Autoplay runs only while playing; the previous Interval is dropped
    // whenever the flag flips and on unmount.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |playing: &bool| {
                let interval = playing.then(|| {
                    debug!("Starting testimonial autoplay");
                    Interval::new(config::CAROUSEL_AUTOPLAY_MS, move || {
                        dispatcher.dispatch(CarouselAction::Tick {
                            document_hidden: document_hidden(),
                        });
                    })
                });
                move || drop(interval)
            },
            carousel.is_playing(),
        );
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action()))
    };

    let drag_start = use_mut_ref(|| None::<i32>);
    let on_drag_start = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: PointerEvent| *drag_start.borrow_mut() = Some(e.client_x()))
    };
    let on_drag_end = {
        let drag_start = drag_start.clone();
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: PointerEvent| {
            let Some(start) = drag_start.borrow_mut().take() else {
                return;
            };
            if let Some(action) = swipe_action(f64::from(e.client_x() - start)) {
                debug!("Testimonial swipe: {:?}", action);
                dispatcher.dispatch(action);
            }
        })
    };
    let on_drag_cancel = Callback::from(move |_: PointerEvent| *drag_start.borrow_mut() = None);

    let selected = carousel.selected();
    let offset = format!("transform: translateX(-{}%);", selected * 100);

    html! {
        <section id={SectionId::REFERENCES.to_string()} class="references">
            <div class="references-content">
                <div class="section-heading">
                    <h2>{"Referencie"}</h2>
                    <p>{"Klientov o prístupe a spolupráci so mnou."}</p>
                </div>

                <div
                    class="carousel"
                    onmouseenter={dispatch(|| CarouselAction::Pause)}
                    onmouseleave={dispatch(|| CarouselAction::Play)}
                >
                    <div
                        class="carousel-viewport"
                        onpointerdown={on_drag_start}
                        onpointerup={on_drag_end}
                        onpointercancel={on_drag_cancel}
                    >
                        <div class="carousel-track" style={offset}>
                            { for TESTIMONIALS.iter().enumerate().map(|(i, item)| html! {
                                <div key={item.title} class="carousel-slide">
                                    <div class={classes!("testimonial-card", (i == selected).then(|| "active"))}>
                                        <h3>{item.title}</h3>
                                        <p class="testimonial-quote">{format!("„{}“", item.quote)}</p>
                                        <p class="testimonial-author">
                                            {"— "}<span>{item.author}</span>
                                        </p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="carousel-controls">
                        <div class="carousel-arrows">
                            <button type="button" class="carousel-arrow" aria-label="Predchádzajúce svedectvo"
                                onclick={dispatch(|| CarouselAction::Prev)}>
                                {"‹"}
                            </button>
                            <button type="button" class="carousel-arrow" aria-label="Nasledujúce svedectvo"
                                onclick={dispatch(|| CarouselAction::Next)}>
                                {"›"}
                            </button>
                        </div>
                        <div class="carousel-dots">
                            { for (0..carousel.len()).map(|i| {
                                let dispatcher = carousel.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(CarouselAction::GoTo(i))
                                });
                                html! {
                                    <button
                                        key={i}
                                        type="button"
                                        class={classes!("carousel-dot", (i == selected).then(|| "current"))}
                                        aria-label={format!("Prejsť na snímku {}", i + 1)}
                                        aria-current={(i == selected).to_string()}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .references {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .references-content {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .carousel {
                    position: relative;
                }
                .carousel-viewport {
                    overflow: hidden;
                    touch-action: pan-y;
                    user-select: none;
                    cursor: grab;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .carousel-slide {
                    flex: 0 0 100%;
                    min-width: 0;
                }
                .testimonial-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                    background: #ffffff;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.75rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }
                .testimonial-card.active {
                    border-color: #a7f3d0;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .testimonial-card h3 {
                    margin: 0 0 0.75rem 0;
                    color: #047857;
                }
                .testimonial-quote {
                    font-style: italic;
                    color: #1f2937;
                }
                .testimonial-author {
                    color: #4b5563;
                }
                .testimonial-author span {
                    font-weight: 500;
                    color: #111827;
                }
                .carousel-controls {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .carousel-arrows {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-arrow {
                    width: 2.25rem;
                    height: 2.25rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 999px;
                    background: #ffffff;
                    color: #374151;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.625rem;
                    height: 0.625rem;
                    border: none;
                    border-radius: 999px;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .carousel-dot.current {
                    width: 1.25rem;
                    background: #059669;
                }
                "#}
            </style>
        </section>
    }
}
