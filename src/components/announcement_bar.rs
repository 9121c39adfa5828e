use yew::prelude::*;

use crate::dom::use_smart_scroll;
use crate::scroll::SectionId;

#[function_component(AnnouncementBar)]
pub fn announcement_bar() -> Html {
    let to_contact = use_smart_scroll(SectionId::CONTACT);

    html! {
        <div class="announcement-bar">
            <div class="announcement-content">
                <span class="announcement-text">
                    {"Chcete nižšie účty za energie alebo máte otázky ?"}
                </span>
                <span class="announcement-cta-wrap">
                    <span class="announcement-pulse" aria-hidden="true"></span>
                    <button class="announcement-cta" onclick={to_contact} aria-label="Naplánujte si hovor">
                        {"Naplánujte si hovor →"}
                    </button>
                </span>
            </div>
            <style>
                {r#"
                .announcement-bar {
                    background: #fbbf24;
                    color: #1f2937;
                    font-size: 0.9rem;
                }
                .announcement-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0.5rem 1rem;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .announcement-cta-wrap {
                    position: relative;
                    display: inline-flex;
                }
                .announcement-pulse {
                    position: absolute;
                    inset: -4px;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.5);
                    animation: announcement-pulse 2.4s ease-in-out infinite;
                }
                .announcement-cta {
                    position: relative;
                    border: none;
                    border-radius: 999px;
                    padding: 0.35rem 0.9rem;
                    background: #ffffff;
                    color: #92400e;
                    font-weight: 600;
                    cursor: pointer;
                }
                @keyframes announcement-pulse {
                    0%, 100% { opacity: 0; transform: scale(0.95); }
                    50% { opacity: 1; transform: scale(1.05); }
                }
                "#}
            </style>
        </div>
    }
}
