use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::{
    before_after::BeforeAfter, bridge_cta::BridgeCta, contact_form::ContactSection, faq::Faq,
    hero::Hero, process::Process, references::References, services::Services,
    trust_bar::TrustBar,
};
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    use_title(config::BRAND.to_string());

    html! {
        <>
            <Hero />
            <TrustBar />
            <Services />
            <BridgeCta />
            <Process />
            <BeforeAfter />
            <References />
            <Faq />
            <ContactSection />
        </>
    }
}
