//! Lead payload pipeline: validation, phone normalization, attribution
//! capture and the WhatsApp deep link handed to the browser.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Optional leading +, one digit, then at least 7 digits/spaces/dashes.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d\s-]{7,}$").expect("valid phone pattern"));

const GREETING_LINE: &str = "Halo DRW Skincare, saya tertarik kemitraan Beauty Center.";
const CLOSING_LINE: &str = "Mohon jadwalkan konsultasi gratis.";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PackageTier {
    #[default]
    Platinum,
    Profesional,
}

impl PackageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Platinum => "PLATINUM",
            PackageTier::Profesional => "PROFESIONAL",
        }
    }

    // Form values come from a fixed <select>; anything else falls back
    // to the default tier.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "PROFESIONAL" => PackageTier::Profesional,
            _ => PackageTier::Platinum,
        }
    }

    // Ad-platform value buckets. These deliberately do not match the
    // displayed package prices.
    pub fn tracking_value(&self) -> u64 {
        match self {
            PackageTier::Platinum => 50_000_000,
            PackageTier::Profesional => 25_000_000,
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form submission, assembled from the current form state. Lives
/// only long enough to build the redirect URI.
pub struct LeadSubmission {
    pub name: String,
    pub city: String,
    pub phone_raw: String,
    pub tier: PackageTier,
    pub consent: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    MissingFields,
    InvalidPhone,
    ConsentRequired,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Lengkapi Nama, Kota, dan WhatsApp.",
            ValidationError::InvalidPhone => "Nomor WhatsApp tidak valid.",
            ValidationError::ConsentRequired => "Setujui kebijakan data terlebih dahulu.",
        }
    }
}

/// Campaign parameters captured once from the page query string and
/// carried into the lead message. Only these seven keys are ever read;
/// absent or empty parameters stay `None`.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Attribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_content: Option<String>,
    pub utm_term: Option<String>,
    pub fbclid: Option<String>,
    pub ttclid: Option<String>,
}

impl Attribution {
    pub fn from_query(query: &str) -> Self {
        let mut attribution = Attribution::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            if value.is_empty() {
                continue;
            }
            let slot = match key {
                "utm_source" => &mut attribution.utm_source,
                "utm_medium" => &mut attribution.utm_medium,
                "utm_campaign" => &mut attribution.utm_campaign,
                "utm_content" => &mut attribution.utm_content,
                "utm_term" => &mut attribution.utm_term,
                "fbclid" => &mut attribution.fbclid,
                "ttclid" => &mut attribution.ttclid,
                _ => continue,
            };
            // First occurrence wins, like URLSearchParams.get.
            if slot.is_none() {
                let value = value.replace('+', " ");
                if let Ok(decoded) = urlencoding::decode(&value) {
                    *slot = Some(decoded.into_owned());
                }
            }
        }
        attribution
    }
}

/// Canonical Indonesian WhatsApp digits: strip everything that is not a
/// digit, then make sure the result carries the 62 country code. Numbers
/// lacking both the trunk 0 and the country code get 62 prepended as-is;
/// foreign-format numbers are knowingly mangled by that fallback.
pub fn normalize_phone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with("62") {
        digits
    } else if let Some(rest) = digits.strip_prefix('0') {
        format!("62{rest}")
    } else {
        format!("62{digits}")
    }
}

/// Ordered, short-circuiting form checks. Failures stay local to the
/// form; the caller renders `message()` inline and aborts the submit.
pub fn validate(submission: &LeadSubmission) -> Result<(), ValidationError> {
    if submission.name.is_empty() || submission.city.is_empty() || submission.phone_raw.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !PHONE_SHAPE.is_match(&submission.phone_raw) {
        return Err(ValidationError::InvalidPhone);
    }
    if !submission.consent {
        return Err(ValidationError::ConsentRequired);
    }
    Ok(())
}

/// Prefilled WhatsApp text, one field per line. Attribution lines are
/// rendered in a fixed order and only when captured; utm_content and
/// utm_term are carried in the payload but never rendered.
pub fn build_message(submission: &LeadSubmission, attribution: &Attribution) -> String {
    let mut lines = vec![
        GREETING_LINE.to_string(),
        format!("Nama: {}", submission.name),
        format!("Kota: {}", submission.city),
        format!("WhatsApp: {}", normalize_phone(&submission.phone_raw)),
        format!("Paket minat: {}", submission.tier),
    ];
    if let Some(source) = &attribution.utm_source {
        lines.push(format!("UTM Source: {source}"));
    }
    if let Some(campaign) = &attribution.utm_campaign {
        lines.push(format!("UTM Campaign: {campaign}"));
    }
    if let Some(medium) = &attribution.utm_medium {
        lines.push(format!("UTM Medium: {medium}"));
    }
    if let Some(fbclid) = &attribution.fbclid {
        lines.push(format!("fbclid: {fbclid}"));
    }
    if let Some(ttclid) = &attribution.ttclid {
        lines.push(format!("ttclid: {ttclid}"));
    }
    lines.push(CLOSING_LINE.to_string());
    lines.join("\n")
}

/// wa.me URI opening a chat with the destination number and the message
/// prefilled. Pure string construction; navigation happens at the call
/// site.
pub fn build_deep_link(destination: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(destination),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(
        name: &str,
        city: &str,
        phone: &str,
        tier: PackageTier,
        consent: bool,
    ) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            city: city.to_string(),
            phone_raw: phone.to_string(),
            tier,
            consent,
        }
    }

    #[test]
    fn normalize_phone_replaces_trunk_zero() {
        assert_eq!(normalize_phone("0812345678"), "62812345678");
    }

    #[test]
    fn normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("+62 812-345-678"), "62812345678");
    }

    #[test]
    fn normalize_phone_prepends_country_code_to_bare_numbers() {
        assert_eq!(normalize_phone("812345678"), "62812345678");
    }

    #[test]
    fn normalize_phone_is_idempotent() {
        let once = normalize_phone("0812345678");
        assert_eq!(normalize_phone(&once), once);
    }

    #[test]
    fn normalize_phone_output_is_digits_only() {
        let normalized = normalize_phone(" +1 (555) 123-4567 ");
        assert!(normalized.starts_with("62"));
        assert!(normalized.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn validate_requires_contact_fields() {
        let lead = submission("", "Bandung", "0812345678", PackageTier::Platinum, true);
        assert_eq!(validate(&lead), Err(ValidationError::MissingFields));
    }

    #[test]
    fn validate_reports_missing_fields_before_consent() {
        let lead = submission("", "Bandung", "0812345678", PackageTier::Platinum, false);
        assert_eq!(validate(&lead), Err(ValidationError::MissingFields));
    }

    #[test]
    fn validate_rejects_short_phone() {
        let lead = submission("Siti", "Bandung", "123", PackageTier::Platinum, true);
        assert_eq!(validate(&lead), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn validate_requires_consent() {
        let lead = submission("Siti", "Bandung", "0812345678", PackageTier::Platinum, false);
        assert_eq!(validate(&lead), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn validate_accepts_complete_submission() {
        let lead = submission("Siti", "Bandung", "+62 812-345-678", PackageTier::Platinum, true);
        assert_eq!(validate(&lead), Ok(()));
    }

    #[test]
    fn attribution_reads_only_recognized_keys() {
        let attribution = Attribution::from_query("?utm_source=fb&utm_campaign=launch&foo=bar");
        assert_eq!(attribution.utm_source.as_deref(), Some("fb"));
        assert_eq!(attribution.utm_campaign.as_deref(), Some("launch"));
        assert_eq!(attribution.utm_medium, None);
        assert_eq!(attribution.fbclid, None);
    }

    #[test]
    fn attribution_from_empty_query_is_empty() {
        assert_eq!(Attribution::from_query(""), Attribution::default());
    }

    #[test]
    fn attribution_drops_empty_values() {
        let attribution = Attribution::from_query("utm_source=&utm_medium=ig");
        assert_eq!(attribution.utm_source, None);
        assert_eq!(attribution.utm_medium.as_deref(), Some("ig"));
    }

    #[test]
    fn attribution_decodes_values() {
        let attribution = Attribution::from_query("utm_campaign=spring+launch%202025");
        assert_eq!(attribution.utm_campaign.as_deref(), Some("spring launch 2025"));
    }

    #[test]
    fn build_message_renders_lines_in_fixed_order() {
        let lead = submission("Siti", "Bandung", "62812345678", PackageTier::Platinum, true);
        let attribution = Attribution {
            utm_source: Some("ig".to_string()),
            ..Attribution::default()
        };
        let message = build_message(&lead, &attribution);
        let lines: Vec<&str> = message.lines().collect();
        let position = |needle: &str| {
            lines
                .iter()
                .position(|line| line.starts_with(needle))
                .unwrap_or_else(|| panic!("missing line: {needle}"))
        };
        assert!(position("Nama: Siti") < position("Kota: Bandung"));
        assert!(position("Kota: Bandung") < position("WhatsApp: 62812345678"));
        assert!(position("WhatsApp:") < position("Paket minat: PLATINUM"));
        assert!(position("Paket minat:") < position("UTM Source: ig"));
        assert!(!message.contains("UTM Campaign"));
        assert!(!message.contains("UTM Medium"));
    }

    #[test]
    fn build_message_never_renders_content_or_term() {
        let lead = submission("Siti", "Bandung", "0812345678", PackageTier::Platinum, true);
        let attribution = Attribution {
            utm_content: Some("carousel".to_string()),
            utm_term: Some("beauty".to_string()),
            ..Attribution::default()
        };
        let message = build_message(&lead, &attribution);
        assert!(!message.contains("carousel"));
        assert!(!message.contains("beauty"));
    }

    #[test]
    fn build_deep_link_is_deterministic() {
        let first = build_deep_link("0882005295884", "Halo, saya tertarik");
        let second = build_deep_link("0882005295884", "Halo, saya tertarik");
        assert_eq!(first, second);
    }

    #[test]
    fn build_deep_link_normalizes_destination() {
        let link = build_deep_link("0882005295884", "Halo");
        assert!(link.starts_with("https://wa.me/62882005295884?text="));
    }

    #[test]
    fn build_deep_link_encodes_line_breaks() {
        let link = build_deep_link("62882005295884", "Halo\nNama: Siti");
        assert!(link.contains("%0A"));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn lead_pipeline_end_to_end() {
        let lead = submission("Ani", "Solo", "081234567890", PackageTier::Profesional, true);
        assert_eq!(validate(&lead), Ok(()));

        let message = build_message(&lead, &Attribution::default());
        let link = build_deep_link("0882005295884", &message);
        assert!(link.starts_with("https://wa.me/62882005295884?text="));
        assert!(link.contains("Paket%20minat%3A%20PROFESIONAL"));
        assert!(link.contains("WhatsApp%3A%206281234567890"));
        assert!(!link.contains("UTM"));
    }
}
