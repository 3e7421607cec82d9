use yew::prelude::*;
use web_sys::{window, MouseEvent};

use crate::config;
use crate::lead;
use crate::tracking;

const DIRECT_CHAT_GREETING: &str =
    "Halo, saya tertarik dengan program Kemitraan DRW Beauty Center";

// Floating WhatsApp button with a small chat popup. The popup button
// opens a direct chat in a new tab instead of going through the form.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tracking::chat_widget_toggled();
            is_open.set(!*is_open);
        })
    };

    let open_direct_chat = Callback::from(move |_: MouseEvent| {
        tracking::direct_chat_opened();
        let link = lead::build_deep_link(config::get_wa_number(), DIRECT_CHAT_GREETING);
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target(&link, "_blank");
        }
    });

    html! {
        <div class="chat-widget">
            {
                if *is_open {
                    html! {
                        <div class="chat-popup">
                            <div class="chat-popup-header">
                                <div class="chat-popup-identity">
                                    <span class="chat-popup-avatar">{"DRW"}</span>
                                    <div>
                                        <h3>{"DRW Beauty Center"}</h3>
                                        <p class="chat-popup-status">{"● Online"}</p>
                                    </div>
                                </div>
                                <button class="chat-popup-close" onclick={toggle.clone()}>{"×"}</button>
                            </div>
                            <div class="chat-popup-body">
                                <div class="chat-popup-bubble">
                                    <p>{"Halo! 👋"}</p>
                                    <p>{"Tertarik dengan kemitraan Beauty Center DRW? Yuk konsultasi gratis sekarang!"}</p>
                                </div>
                                <button class="chat-popup-cta" onclick={open_direct_chat}>
                                    {"Chat via WhatsApp"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button class="chat-fab" onclick={toggle}>
                { if *is_open { "×" } else { "💬" } }
            </button>
            <style>
                {r#"
                .chat-widget {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                }

                .chat-fab {
                    width: 56px;
                    height: 56px;
                    border: none;
                    border-radius: 50%;
                    background: #22c55e;
                    color: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    transition: all 0.3s ease;
                }

                .chat-fab:hover {
                    background: #16a34a;
                    transform: scale(1.1);
                }

                .chat-popup {
                    width: 20rem;
                    margin-bottom: 1rem;
                    background: white;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.2);
                    padding: 1.5rem;
                }

                .chat-popup-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }

                .chat-popup-identity {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .chat-popup-identity h3 {
                    margin: 0;
                    font-size: 1rem;
                    color: #1e293b;
                }

                .chat-popup-avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #22c55e;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .chat-popup-status {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #16a34a;
                }

                .chat-popup-close {
                    border: none;
                    background: none;
                    color: #94a3b8;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .chat-popup-close:hover {
                    color: #475569;
                }

                .chat-popup-bubble {
                    background: #f8fafc;
                    border-radius: 12px;
                    padding: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .chat-popup-bubble p {
                    margin: 0.25rem 0;
                    font-size: 0.875rem;
                    color: #334155;
                }

                .chat-popup-cta {
                    width: 100%;
                    border: none;
                    border-radius: 12px;
                    background: #22c55e;
                    color: white;
                    font-weight: 600;
                    padding: 0.75rem 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .chat-popup-cta:hover {
                    background: #16a34a;
                }
                "#}
            </style>
        </div>
    }
}
