//! Fire-and-forget conversion events for the Meta and TikTok pixels.
//!
//! The pixel scripts are injected by index.html and may not have loaded
//! yet when an event fires. Each sink resolves its window global at call
//! time and does nothing when it is missing; callers never check
//! availability.

use serde::Serialize;
use serde_json::{json, Value};

use crate::lead::PackageTier;

pub trait AnalyticsSink {
    fn track(&self, event: &str, props: &Value);
}

/// Meta Pixel: `window.fbq('track', event, props)`.
pub struct MetaPixel;

/// TikTok Pixel: `window.ttq.track(event, props)`.
pub struct TikTokPixel;

/// Sink that swallows every event. Stands in for the pixels off-wasm.
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &str, _props: &Value) {}
}

#[cfg(target_arch = "wasm32")]
impl AnalyticsSink for MetaPixel {
    fn track(&self, event: &str, props: &Value) {
        use wasm_bindgen::{JsCast, JsValue};

        if let Some(window) = web_sys::window() {
            if let Ok(fbq) = js_sys::Reflect::get(&window, &JsValue::from_str("fbq")) {
                if let Some(fbq) = fbq.dyn_ref::<js_sys::Function>() {
                    if let Ok(props) = serde_wasm_bindgen::to_value(props) {
                        let _ = fbq.call3(
                            &JsValue::NULL,
                            &JsValue::from_str("track"),
                            &JsValue::from_str(event),
                            &props,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl AnalyticsSink for TikTokPixel {
    fn track(&self, event: &str, props: &Value) {
        use wasm_bindgen::{JsCast, JsValue};

        if let Some(window) = web_sys::window() {
            if let Ok(ttq) = js_sys::Reflect::get(&window, &JsValue::from_str("ttq")) {
                if let Ok(track) = js_sys::Reflect::get(&ttq, &JsValue::from_str("track")) {
                    if let Some(track) = track.dyn_ref::<js_sys::Function>() {
                        if let Ok(props) = serde_wasm_bindgen::to_value(props) {
                            let _ = track.call2(&ttq, &JsValue::from_str(event), &props);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AnalyticsSink for MetaPixel {
    fn track(&self, event: &str, props: &Value) {
        NoopSink.track(event, props);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AnalyticsSink for TikTokPixel {
    fn track(&self, event: &str, props: &Value) {
        NoopSink.track(event, props);
    }
}

#[derive(Serialize)]
struct TierContent {
    content_id: &'static str,
    content_name: String,
    content_category: &'static str,
    quantity: u32,
}

pub fn landing_view() {
    TikTokPixel.track(
        "ViewContent",
        &json!({
            "content_name": "DRW Beauty Center Partnership Landing",
            "content_category": "Landing Page",
            "content_id": "partnership_landing_v1",
            "description": "User viewed partnership opportunity page"
        }),
    );
    MetaPixel.track(
        "ViewContent",
        &json!({
            "content_name": "DRW Beauty Center Partnership Landing",
            "content_category": "Landing Page"
        }),
    );
}

pub fn tier_view(tier: PackageTier) {
    let (tiktok, meta) = tier_view_payloads(tier);
    TikTokPixel.track("ViewContent", &tiktok);
    MetaPixel.track("ViewContent", &meta);
}

pub fn tier_selected(tier: PackageTier) {
    MetaPixel.track(
        "AddToCart",
        &json!({
            "content_name": format!("{tier} Package Selection"),
            "content_category": "Partnership Package",
            "value": tier.tracking_value(),
            "currency": "IDR"
        }),
    );
}

pub fn lead_submitted(tier: PackageTier) {
    let (submit_form, lead) = lead_payloads(tier);
    TikTokPixel.track("SubmitForm", &submit_form);
    MetaPixel.track("Lead", &lead);
    // Consultation bookings are also counted as schedules.
    MetaPixel.track(
        "Schedule",
        &json!({
            "content_name": "Free Consultation Booking",
            "content_category": "Partnership Consultation"
        }),
    );
}

pub fn form_cta_clicked() {
    TikTokPixel.track(
        "ClickButton",
        &json!({
            "content_name": "Scroll to Form CTA",
            "content_category": "User Engagement",
            "description": "User clicked CTA to scroll to form"
        }),
    );
    MetaPixel.track(
        "InitiateCheckout",
        &json!({
            "content_name": "Partnership Form View",
            "content_category": "User Engagement"
        }),
    );
}

pub fn direct_chat_opened() {
    TikTokPixel.track(
        "Contact",
        &json!({
            "content_name": "WhatsApp Chat",
            "content_category": "Direct Contact",
            "description": "User initiated WhatsApp chat from popup"
        }),
    );
    MetaPixel.track(
        "Contact",
        &json!({
            "content_name": "WhatsApp Direct Contact",
            "content_category": "Customer Contact"
        }),
    );
}

pub fn chat_widget_toggled() {
    MetaPixel.track(
        "Contact",
        &json!({
            "content_name": "Chat Widget Toggle",
            "content_category": "Customer Support"
        }),
    );
}

fn tier_view_payloads(tier: PackageTier) -> (Value, Value) {
    let tiktok = json!({
        "content_name": format!("{tier} Package"),
        "content_category": "Partnership Package",
        "content_id": tier.as_str().to_lowercase(),
        "value": tier.tracking_value(),
        "currency": "IDR"
    });
    let meta = json!({
        "content_name": format!("{tier} Package Details"),
        "content_category": "Partnership Package",
        "value": tier.tracking_value(),
        "currency": "IDR"
    });
    (tiktok, meta)
}

fn lead_payloads(tier: PackageTier) -> (Value, Value) {
    let contents = vec![TierContent {
        content_id: tier.as_str(),
        content_name: format!("{tier} Package"),
        content_category: "Partnership Package",
        quantity: 1,
    }];
    let submit_form = json!({
        "content_name": "Partnership Form",
        "content_category": "Lead Generation",
        "value": tier.tracking_value(),
        "currency": "IDR",
        "contents": contents
    });
    let lead = json!({
        "content_name": "Partnership Form Submission",
        "content_category": "Beauty Center Partnership",
        "value": tier.tracking_value(),
        "currency": "IDR"
    });
    (submit_form, lead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_view_uses_two_value_buckets() {
        let (platinum, _) = tier_view_payloads(PackageTier::Platinum);
        let (profesional, _) = tier_view_payloads(PackageTier::Profesional);
        assert_eq!(platinum["value"], 50_000_000);
        assert_eq!(profesional["value"], 25_000_000);
        assert_eq!(platinum["currency"], "IDR");
    }

    #[test]
    fn tier_view_payloads_name_the_tier() {
        let (tiktok, meta) = tier_view_payloads(PackageTier::Profesional);
        assert_eq!(tiktok["content_name"], "PROFESIONAL Package");
        assert_eq!(tiktok["content_id"], "profesional");
        assert_eq!(meta["content_name"], "PROFESIONAL Package Details");
    }

    #[test]
    fn lead_payload_carries_tier_contents() {
        let (submit_form, lead) = lead_payloads(PackageTier::Platinum);
        assert_eq!(submit_form["contents"][0]["content_id"], "PLATINUM");
        assert_eq!(submit_form["contents"][0]["quantity"], 1);
        assert_eq!(submit_form["value"], 50_000_000);
        assert_eq!(lead["value"], 50_000_000);
    }

    #[test]
    fn emitters_are_noops_off_wasm() {
        // Sinks degrade to NoopSink on the host; the full event surface
        // must be callable without a browser.
        landing_view();
        tier_view(PackageTier::Platinum);
        tier_selected(PackageTier::Profesional);
        lead_submitted(PackageTier::Platinum);
        form_cta_clicked();
        direct_chat_opened();
        chat_widget_toggled();
    }
}
