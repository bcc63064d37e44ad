//! Field-level parsing and validation.
//!
//! All numeric form input goes through [`parse_positive_int`] so malformed,
//! zero or negative values are rejected at the boundary instead of being
//! coerced into the model. Validators accumulate [`ValidationError`]s keyed
//! by wire field name; editors surface them per field and refuse to submit
//! while any remain.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::mail::{MailContentBundle, MailTextField, UtmField, UtmKind};
use crate::model::reduction::ReductionConfig;

/// One per-field validation failure, keyed by the wire field name
/// (nested fields use a dotted path, e.g. `etapes[0].delai`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Parses a strictly positive integer from raw form input.
/// Returns `None` for anything else: empty, non-numeric, zero, negative.
pub fn parse_positive_int(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+$").unwrap_or_else(|_| unreachable!()))
}

/// Accepts absolute http(s) URLs without whitespace. Empty input is left
/// to `require` when the field is mandatory.
pub fn is_valid_url(value: &str) -> bool {
    url_pattern().is_match(value)
}

fn utm_value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s&=?#]*$").unwrap_or_else(|_| unreachable!()))
}

/// Accepts UTM values that can be appended to a query string as-is: no
/// whitespace and none of `&`, `=`, `?`, `#`. Empty values pass (every UTM
/// field is optional).
pub fn is_valid_utm_value(value: &str) -> bool {
    utm_value_pattern().is_match(value)
}

pub fn check_utm_value(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !is_valid_utm_value(value) {
        errors.push(ValidationError::new(
            field,
            "must not contain spaces or '&', '=', '?', '#'",
        ));
    }
}

pub fn require(errors: &mut Vec<ValidationError>, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{label} is required")));
    }
}

/// Validates a URL field; empty values pass (use `require` for mandatory
/// fields).
pub fn check_url(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !value.trim().is_empty() && !is_valid_url(value.trim()) {
        errors.push(ValidationError::new(
            field,
            "must be an absolute http(s) URL",
        ));
    }
}

pub fn check_positive(errors: &mut Vec<ValidationError>, field: &str, value: u32, label: &str) {
    if value < 1 {
        errors.push(ValidationError::new(
            field,
            format!("{label} must be at least 1"),
        ));
    }
}

/// Validates a mail bundle. `prefix` scopes the field names, e.g.
/// `etapes[1].` for a step's bundle; empty for a main mail.
pub fn check_mail_bundle(
    errors: &mut Vec<ValidationError>,
    prefix: &str,
    bundle: &MailContentBundle,
) {
    require(
        errors,
        &format!("{prefix}{}", MailTextField::SujetMail.name()),
        &bundle.sujet_mail,
        MailTextField::SujetMail.label(),
    );
    for field in [
        MailTextField::ImageUrl,
        MailTextField::BannerLink,
        MailTextField::ButtonLink,
    ] {
        check_url(
            errors,
            &format!("{prefix}{}", field.name()),
            field.get(bundle),
        );
    }
    for kind in [UtmKind::Banner, UtmKind::Button] {
        let params = bundle.utm(kind);
        for field in UtmField::ALL {
            check_utm_value(
                errors,
                &format!("{prefix}{}.{}", kind.wire_name(), field.name()),
                field.get(params),
            );
        }
    }
}

/// Validates an enabled reduction; disabled configs are accepted as-is.
pub fn check_reduction(
    errors: &mut Vec<ValidationError>,
    prefix: &str,
    reduction: &ReductionConfig,
) {
    if !reduction.actif {
        return;
    }
    check_positive(
        errors,
        &format!("{prefix}montant"),
        reduction.montant,
        "Discount amount",
    );
    check_positive(
        errors,
        &format!("{prefix}dureeValidite"),
        reduction.duree_validite,
        "Validity duration",
    );
}

/// First error recorded for a field, if any. Used by the views to render
/// inline error text next to the input.
pub fn error_for<'a>(errors: &'a [ValidationError], field: &str) -> Option<&'a ValidationError> {
    errors.iter().find(|e| e.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_int_rejects_invalid_input() {
        assert_eq!(parse_positive_int("4"), Some(4));
        assert_eq!(parse_positive_int(" 12 "), Some(12));
        assert_eq!(parse_positive_int("0"), None);
        assert_eq!(parse_positive_int("-3"), None);
        assert_eq!(parse_positive_int("abc"), None);
        assert_eq!(parse_positive_int(""), None);
        assert_eq!(parse_positive_int("3.5"), None);
    }

    #[test]
    fn url_validation_accepts_http_and_https_only() {
        assert!(is_valid_url("https://shop.example/cart"));
        assert!(is_valid_url("http://shop.example"));
        assert!(!is_valid_url("shop.example"));
        assert!(!is_valid_url("ftp://shop.example"));
        assert!(!is_valid_url("https://shop example/cart"));
    }

    #[test]
    fn bundle_check_flags_subject_and_bad_urls() {
        let mut bundle = MailContentBundle::default();
        bundle.banner_link = "not a url".to_string();
        let mut errors = Vec::new();
        check_mail_bundle(&mut errors, "etapes[0].", &bundle);

        assert!(error_for(&errors, "etapes[0].sujetMail").is_some());
        assert!(error_for(&errors, "etapes[0].bannerLink").is_some());
        assert!(error_for(&errors, "etapes[0].buttonLink").is_none());
    }

    #[test]
    fn utm_values_reject_query_metacharacters() {
        assert!(is_valid_utm_value(""));
        assert!(is_valid_utm_value("cart_recovery_step1"));
        assert!(!is_valid_utm_value("spring sale"));
        assert!(!is_valid_utm_value("a&b"));
        assert!(!is_valid_utm_value("a=b"));
        assert!(!is_valid_utm_value("a?b"));
        assert!(!is_valid_utm_value("a#b"));
    }

    #[test]
    fn bundle_check_flags_malformed_utm_values_per_field() {
        let mut bundle = MailContentBundle::default();
        bundle.sujet_mail = "Your cart misses you".to_string();
        bundle.button_utm.campaign = "spring sale&utm_source=evil".to_string();
        let mut errors = Vec::new();
        check_mail_bundle(&mut errors, "", &bundle);

        assert!(error_for(&errors, "buttonUtm.campaign").is_some());
        assert!(error_for(&errors, "bannerUtm.campaign").is_none());

        let mut step_errors = Vec::new();
        check_mail_bundle(&mut step_errors, "etapes[0].", &bundle);
        assert!(error_for(&step_errors, "etapes[0].buttonUtm.campaign").is_some());
    }

    #[test]
    fn disabled_reduction_is_not_validated() {
        let reduction = ReductionConfig {
            actif: false,
            montant: 0,
            duree_validite: 0,
            ..Default::default()
        };
        let mut errors = Vec::new();
        check_reduction(&mut errors, "", &reduction);
        assert!(errors.is_empty());

        let enabled = ReductionConfig {
            actif: true,
            ..reduction
        };
        check_reduction(&mut errors, "", &enabled);
        assert!(error_for(&errors, "montant").is_some());
        assert!(error_for(&errors, "dureeValidite").is_some());
    }
}
