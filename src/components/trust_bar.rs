use yew::prelude::*;

struct Credential {
    icon: &'static str,
    label: &'static str,
    tone: &'static str,
}

const CREDENTIALS: [Credential; 4] = [
    Credential {
        icon: "🛡",
        label: "Certifikovaný audítor",
        tone: "green",
    },
    Credential {
        icon: "👥",
        label: "500+ spokojných klientov",
        tone: "orange",
    },
    Credential {
        icon: "🧭",
        label: "Nezávislé poradenstvo",
        tone: "blue",
    },
    Credential {
        icon: "🤝",
        label: "Overené zdroje",
        tone: "purple",
    },
];

const LOGO_BASE: &str =
    "https://pub-cdn.sider.ai/u/U0AWH6E9A4X/web-coder/68b87a397b28bae4985adee4/resource/";

/// Partner and institution logos as (name, file under `LOGO_BASE`).
static LOGOS: [(&str, &str); 10] = [
    ("SPP", "b7d22647-dd2f-4946-82f4-1d1f03d93eea.png"),
    ("UKE", "3d6a3bac-f110-4efb-a3a8-67240fc30fdf.png"),
    ("ZSE", "d749a6a2-bab5-46b8-a17f-39927ac8e312.png"),
    ("VSD", "1530160f-8187-47b2-913f-58d55fa56291.png"),
    ("greenlooy", "8ad33edc-71a1-4450-85ab-1caa80ff224d.png"),
    ("Stredoslovenská distribučná", "bf1b8685-9a34-4ca5-a9c3-c45b4a24f79e.png"),
    ("MVM CEEnergy Slovakia", "ad611c9f-0eeb-414d-8c79-60e7c523046c.png"),
    ("SSE", "1ef5aaa0-425c-4d33-a7b3-d0034198bdf6.png"),
    ("SIEA", "139b8fa2-c228-463d-894f-8fe33d035bbf.png"),
    ("ÚRSO", "88e6e970-ef73-4a8a-8542-0a6a49407f81.png"),
];

/// The strip scrolls by half its width, so the logos run twice in a row.
fn marquee_strip() -> impl Iterator<Item = (&'static str, &'static str)> {
    LOGOS.iter().chain(LOGOS.iter()).copied()
}

#[function_component(LogoMarquee)]
fn logo_marquee() -> Html {
    html! {
        <div class="logo-marquee" aria-label="Partner and institution logos">
            <div class="logo-marquee-track">
                { for marquee_strip().enumerate().map(|(i, (name, file))| html! {
                    <div key={i} class="logo-marquee-item">
                        <img
                            src={format!("{LOGO_BASE}{file}")}
                            alt={format!("{name} logo")}
                            aria-label={name}
                            loading="lazy"
                            decoding="async"
                        />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(TrustBar)]
pub fn trust_bar() -> Html {
    html! {
        <section id="dovody-preco-my" class="trust-bar" aria-label="Dôveryhodnosť a skúsenosti">
            <div class="trust-grid">
                { for CREDENTIALS.iter().map(|item| html! {
                    <div key={item.label} class="trust-item">
                        <span class={classes!("trust-icon", item.tone)} aria-hidden="true">{item.icon}</span>
                        <span class="trust-label">{item.label}</span>
                    </div>
                }) }
            </div>
            <LogoMarquee />
            <style>
                {r#"
                .trust-bar {
                    padding: 2.5rem 1rem 0 1rem;
                    background: #ffffff;
                }
                .trust-grid {
                    max-width: 80rem;
                    margin: 0 auto 2rem auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                .trust-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.75rem;
                }
                .trust-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                }
                .trust-icon.green { background: #dcfce7; }
                .trust-icon.orange { background: #ffedd5; }
                .trust-icon.blue { background: #dbeafe; }
                .trust-icon.purple { background: #f3e8ff; }
                .trust-label {
                    font-weight: 600;
                    color: #111827;
                }
                .logo-marquee {
                    position: relative;
                    overflow: hidden;
                    border-top: 1px solid #f3f4f6;
                    border-bottom: 1px solid #f3f4f6;
                }
                .logo-marquee-track {
                    display: flex;
                    align-items: center;
                    gap: 3.5rem;
                    min-width: max-content;
                    padding: 1.5rem 0;
                    animation: logo-marquee 35s linear infinite;
                }
                .logo-marquee:hover .logo-marquee-track {
                    animation-play-state: paused;
                }
                .logo-marquee-item img {
                    height: 2.5rem;
                    width: auto;
                    object-fit: contain;
                    opacity: 0.8;
                    transition: opacity 0.2s ease;
                }
                .logo-marquee-item img:hover {
                    opacity: 1;
                }
                @keyframes logo-marquee {
                    0% { transform: translateX(0); }
                    100% { transform: translateX(-50%); }
                }
                @media (min-width: 768px) {
                    .trust-grid {
                        grid-template-columns: repeat(4, 1fr);
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
    fn strip_repeats_logos_once_for_seamless_loop() {
        let strip: Vec<_> = marquee_strip().collect();
        assert_eq!(strip.len(), 2 * LOGOS.len());
        assert_eq!(&strip[..LOGOS.len()], &strip[LOGOS.len()..]);
        assert_eq!(strip[0].0, "SPP");
        assert_eq!(strip[LOGOS.len() - 1].0, "ÚRSO");
    }
}
