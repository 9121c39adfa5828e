use std::rc::Rc;

use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{ContactMethod, ContactRequest, SERVICE_OPTIONS, TIME_SLOTS};
use crate::scroll::SectionId;

pub enum FormField {
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
    Method(ContactMethod),
    TimeSlot(String),
    ToggleService(&'static str),
}

impl Reducible for ContactRequest {
    type Action = FormField;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormField::Name(value) => next.name = value,
            FormField::Email(value) => next.email = value,
            FormField::Phone(value) => next.phone = value,
            FormField::Message(value) => next.message = value,
            FormField::Method(method) => next.method = method,
            FormField::TimeSlot(slot) => next.time_slot = slot,
            FormField::ToggleService(id) => next.toggle_service(id),
        }
        Rc::new(next)
    }
}

fn field_class(value: &str) -> Classes {
    classes!("form-input", (!value.is_empty()).then(|| "filled"))
}

#[derive(Properties, PartialEq)]
struct ContactInfoProps {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    #[prop_or_default]
    href: Option<String>,
}

#[function_component(ContactInfo)]
fn contact_info(props: &ContactInfoProps) -> Html {
    let value = match &props.href {
        Some(href) => html! { <a href={href.clone()}>{props.value}</a> },
        None => html! { <span>{props.value}</span> },
    };
    html! {
        <div class="contact-info">
            <span class="contact-info-icon" aria-hidden="true">{props.icon}</span>
            <div>
                <div class="contact-info-label">{props.label}</div>
                <div class="contact-info-value">{value}</div>
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactRequest::default);
    let show_services = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_text = |field: fn(String) -> FormField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(field(input.value()));
        })
    };

    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormField::Message(input.value()));
        })
    };

    let on_method = |method: ContactMethod| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(FormField::Method(method)))
    };

    let on_time_slot = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormField::TimeSlot(select.value()));
        })
    };

    let toggle_services = {
        let show_services = show_services.clone();
        Callback::from(move |_: MouseEvent| show_services.set(!*show_services))
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.mailto(config::INQUIRY_EMAIL) {
                Ok(href) => {
                    info!("Opening mail draft for contact inquiry");
                    error.set(None);
                    if let Some(window) = window() {
                        if let Err(e) = window.location().set_href(&href) {
                            warn!("Failed to open mail client: {:?}", e);
                        }
                    }
                }
                Err(err) => {
                    warn!("Contact form rejected: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let selected_count = form.services.len();

    html! {
        <section id={SectionId::CONTACT.to_string()} class="contact">
            <div class="contact-grid">
                <div class="contact-intro">
                    <h2>{"Kontakt"}</h2>
                    <p class="contact-lead">
                        {"Nie je vždy potrebné nasledovať aktuálne trendy alebo sa nechať zatlačiť do zbytočných riešení. Volám sa Karel Dlugoš a som na vašej strane."}
                    </p>
                    <ContactInfo icon="☎" label="Telefón" value={config::PHONE_DISPLAY}
                        href={config::PHONE_HREF.to_string()} />
                    <ContactInfo icon="✉" label="E‑mail" value={config::CONTACT_EMAIL}
                        href={format!("mailto:{}", config::CONTACT_EMAIL)} />
                    <ContactInfo icon="📍" label="Sídlo" value="celé Slovensko - osobne aj online" />
                    <p class="contact-note">
                        <span>{"Kapacita konzultácií a príjimanie nových klientov je bohužiaľ podmienené časom."}</span>
                        <span>{"Uprednostňujem spoluprácu tam, kde je o moje služby seriózny záujem."}</span>
                    </p>
                </div>

                <form class="contact-form" {onsubmit} novalidate={true}>
                    <h3>{"Formulár"}</h3>

                    <div class="form-row">
                        <label for="name">{"Meno Priezvisko"}</label>
                        <input id="name" type="text" class={field_class(&form.name)}
                            value={form.name.clone()} oninput={on_text(FormField::Name)} />
                    </div>
                    <div class="form-row">
                        <label for="phone">{"Telefón"}</label>
                        <input id="phone" type="tel" class={field_class(&form.phone)} placeholder="+421 900 123 456"
                            value={form.phone.clone()} oninput={on_text(FormField::Phone)} />
                        <p class="form-hint">{"Uveďte aktívne číslo (ideálne v tvare +421)."}</p>
                    </div>
                    <div class="form-row">
                        <label for="email">{"E‑mail"}</label>
                        <input id="email" type="email" class={field_class(&form.email)} placeholder="vas@email.sk"
                            value={form.email.clone()} oninput={on_text(FormField::Email)} />
                    </div>

                    <fieldset class="form-row">
                        <legend>{"Chcem aby ste mi:"}</legend>
                        <label class="form-choice">
                            <input type="radio" name="method"
                                checked={form.method == ContactMethod::Email}
                                onchange={on_method(ContactMethod::Email)} />
                            <span>{"Napísali mail"}</span>
                        </label>
                        <label class="form-choice">
                            <input type="radio" name="method"
                                checked={form.method == ContactMethod::Call}
                                onchange={on_method(ContactMethod::Call)} />
                            <span>{"Zavolali"}</span>
                        </label>
                    </fieldset>

                    if form.method == ContactMethod::Call {
                        <div class="form-row">
                            <label for="timeSlot">
                                {"Preferovaný čas "}<span class="form-optional">{"(voliteľné)"}</span>
                            </label>
                            <select id="timeSlot" class={field_class(&form.time_slot)} onchange={on_time_slot}>
                                <option value="" selected={form.time_slot.is_empty()}>{"Vyberte čas"}</option>
                                { for TIME_SLOTS.iter().map(|slot| html! {
                                    <option value={*slot} selected={form.time_slot == *slot}>{*slot}</option>
                                }) }
                            </select>
                        </div>
                    }

                    <div class="form-row">
                        <button type="button" class="services-toggle"
                            aria-expanded={show_services.to_string()} aria-controls="services-list"
                            onclick={toggle_services}>
                            {"Vybrať služby, o ktoré máte záujem"}
                            if selected_count > 0 {
                                <span class="services-count">{format!(" ({})", selected_count)}</span>
                            }
                            <span aria-hidden="true">{if *show_services { " ▴" } else { " ▾" }}</span>
                        </button>
                        if *show_services {
                            <div id="services-list" class="services-list">
                                { for SERVICE_OPTIONS.iter().map(|option| {
                                    let dispatcher = form.dispatcher();
                                    let id = option.id;
                                    let onchange = Callback::from(move |_: Event| {
                                        dispatcher.dispatch(FormField::ToggleService(id))
                                    });
                                    html! {
                                        <label key={option.id} class="form-choice">
                                            <input type="checkbox" checked={form.has_service(option.id)} {onchange} />
                                            <span>{option.label}</span>
                                        </label>
                                    }
                                }) }
                                <p class="form-hint">{"Nevadí, ak si nie ste istý/á – toto pole je nepovinné."}</p>
                            </div>
                        }
                    </div>

                    <div class="form-row">
                        <h4>{"Správa"}</h4>
                        <label for="message" class="sr-only">{"Správa (nepovinné)"}</label>
                        <textarea id="message" rows="4" class={field_class(&form.message)}
                            placeholder="Ako vám môžem pomôcť?"
                            value={form.message.clone()} oninput={on_message} />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error" role="alert">{message}</p>
                    }

                    <button type="submit" class="form-submit">{"Odoslať dopyt"}</button>
                    <p class="form-hint">
                        {"Odoslaním formulára súhlasíte so spracovaním osobných údajov podľa GDPR."}
                    </p>
                </form>
            </div>
            <style>
                {r#"
                .contact {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                }
                .contact-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-intro h2 {
                    font-size: 2.25rem;
                    color: #111827;
                    margin: 0 0 1.5rem 0;
                }
                .contact-lead {
                    font-size: 1.1rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                .contact-info {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 1.25rem;
                }
                .contact-info-icon {
                    font-size: 1.4rem;
                }
                .contact-info-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .contact-info-value a {
                    color: #111827;
                    text-decoration: none;
                }
                .contact-note {
                    display: flex;
                    flex-direction: column;
                    font-size: 0.75rem;
                    color: #4b5563;
                }
                .contact-form {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .contact-form h3 {
                    margin: 0 0 1.5rem 0;
                    font-size: 1.5rem;
                    color: #111827;
                }
                .form-row {
                    margin-bottom: 1.25rem;
                    border: none;
                    padding: 0;
                }
                .form-row label,
                .form-row legend {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.6rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .form-input.filled {
                    border-color: #16a34a;
                    background: rgba(240, 253, 244, 0.5);
                }
                .form-choice {
                    display: flex !important;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    margin-bottom: 0.5rem;
                    cursor: pointer;
                }
                .form-choice:has(input:checked) {
                    border-color: #16a34a;
                }
                .form-optional {
                    color: #9ca3af;
                    font-weight: 400;
                }
                .services-toggle {
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    background: #ffffff;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                }
                .services-count {
                    color: #15803d;
                }
                .services-list {
                    margin-top: 0.75rem;
                }
                .form-hint {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .form-error {
                    color: #b91c1c;
                    font-size: 0.9rem;
                }
                .form-submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #16a34a;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .form-submit:hover {
                    background: #15803d;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reducer_updates_fields() {
        let form = Rc::new(ContactRequest::default());
        let form = form.reduce(FormField::Name("Peter".to_string()));
        let form = form.reduce(FormField::Method(ContactMethod::Call));
        let form = form.reduce(FormField::TimeSlot(TIME_SLOTS[1].to_string()));
        let form = form.reduce(FormField::ToggleService("prebytky"));

        assert_eq!(form.name, "Peter");
        assert_eq!(form.method, ContactMethod::Call);
        assert_eq!(form.time_slot, "8:00 - 11:30");
        assert_eq!(form.services, vec!["prebytky"]);

        let form = form.reduce(FormField::ToggleService("prebytky"));
        assert!(form.services.is_empty());
    }
}
