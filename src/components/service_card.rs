use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Element id of the detail panel, usable in `aria-controls`.
pub fn detail_id(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("detail-{}", slug)
}

#[derive(Properties, PartialEq)]
pub struct ExpandableServiceCardProps {
    pub item: ServiceItem,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ExpandableServiceCard)]
pub fn expandable_service_card(props: &ExpandableServiceCardProps) -> Html {
    let item = props.item;
    let detail = detail_id(item.title);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    html! {
        <div class={classes!("service-card", props.open.then(|| "open"))}>
            <button
                type="button"
                class="service-card-toggle"
                aria-expanded={props.open.to_string()}
                aria-controls={detail.clone()}
                {onclick}
                {onkeydown}
            >
                <div class="service-card-icon" aria-hidden="true">{item.icon}</div>
                <div class="service-card-heading">
                    <h3>{item.title}</h3>
                    <p>{"Kliknite pre detail"}</p>
                </div>
                <span class="service-card-chevron" aria-hidden="true">{"▾"}</span>
            </button>
            if props.open {
                <div id={detail} class="service-card-detail">
                    <p>{item.description}</p>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_id_is_a_valid_fragment() {
        assert_eq!(detail_id("Energetický posudok"), "detail-energetický-posudok");
        assert_eq!(
            detail_id("ESG, BREEM, LEED, účelový a energetický audit"),
            "detail-esg--breem--leed--účelový-a-energetický-audit"
        );
        assert!(!detail_id("Vykurovanie, chladenie a fotovoltika").contains(' '));
    }
}
