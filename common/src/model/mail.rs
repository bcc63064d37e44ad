//! Mail content bundle shared by scenarios, steps and newsletters.
//!
//! The source data model re-declared the same overlapping set of optional
//! content fields on every entity. Here there is exactly one
//! [`MailContentBundle`] and every entity composes it. The typed field
//! enums ([`MailTextField`], [`UtmField`], [`MailField`]) are the single
//! schema that drives both the edit forms and the read-only detail
//! rendering, so the two paths cannot drift apart.

use serde::{Deserialize, Serialize};

/// The five UTM tracking fields attached to a link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub term: String,
    pub content: String,
}

/// Which of a bundle's two tracked links a UTM set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtmKind {
    Banner,
    Button,
}

impl UtmKind {
    pub fn medium(self) -> &'static str {
        match self {
            UtmKind::Banner => "email_banner",
            UtmKind::Button => "email_button",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UtmKind::Banner => "Banner UTM",
            UtmKind::Button => "Button UTM",
        }
    }

    /// Wire name of the UTM set inside a bundle, also the validation
    /// error key segment.
    pub fn wire_name(self) -> &'static str {
        match self {
            UtmKind::Banner => "bannerUtm",
            UtmKind::Button => "buttonUtm",
        }
    }
}

impl UtmParams {
    /// Default tracking set for a link inside a given campaign.
    pub fn defaults(kind: UtmKind, campaign: &str) -> Self {
        Self {
            source: "backoffice".to_string(),
            medium: kind.medium().to_string(),
            campaign: campaign.to_string(),
            term: String::new(),
            content: String::new(),
        }
    }
}

/// One of the five UTM fields, addressable for the field-schema-driven
/// edit and read render paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtmField {
    Source,
    Medium,
    Campaign,
    Term,
    Content,
}

impl UtmField {
    pub const ALL: [UtmField; 5] = [
        UtmField::Source,
        UtmField::Medium,
        UtmField::Campaign,
        UtmField::Term,
        UtmField::Content,
    ];

    /// Wire name of the field inside a UTM set, also the validation error
    /// key segment.
    pub fn name(self) -> &'static str {
        match self {
            UtmField::Source => "source",
            UtmField::Medium => "medium",
            UtmField::Campaign => "campaign",
            UtmField::Term => "term",
            UtmField::Content => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UtmField::Source => "utm_source",
            UtmField::Medium => "utm_medium",
            UtmField::Campaign => "utm_campaign",
            UtmField::Term => "utm_term",
            UtmField::Content => "utm_content",
        }
    }

    pub fn get(self, params: &UtmParams) -> &str {
        match self {
            UtmField::Source => &params.source,
            UtmField::Medium => &params.medium,
            UtmField::Campaign => &params.campaign,
            UtmField::Term => &params.term,
            UtmField::Content => &params.content,
        }
    }

    pub fn set(self, params: &mut UtmParams, value: String) {
        match self {
            UtmField::Source => params.source = value,
            UtmField::Medium => params.medium = value,
            UtmField::Campaign => params.campaign = value,
            UtmField::Term => params.term = value,
            UtmField::Content => params.content = value,
        }
    }
}

/// Full mail content of one send: subject line, preview text, hero image,
/// banner and button links with their UTM sets, and the two body segments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailContentBundle {
    pub titre_mail: String,
    pub sujet_mail: String,
    pub texte_apercu: String,
    pub image_url: String,
    pub banner_link: String,
    pub banner_utm: UtmParams,
    pub button_link: String,
    pub button_utm: UtmParams,
    pub texte_button: String,
    pub contenu_mail_haut: String,
    pub contenu_mail_bas: String,
}

impl MailContentBundle {
    /// Empty bundle with both UTM sets pre-filled for `campaign`.
    pub fn with_utm_defaults(campaign: &str) -> Self {
        Self {
            banner_utm: UtmParams::defaults(UtmKind::Banner, campaign),
            button_utm: UtmParams::defaults(UtmKind::Button, campaign),
            ..Self::default()
        }
    }

    pub fn utm(&self, kind: UtmKind) -> &UtmParams {
        match kind {
            UtmKind::Banner => &self.banner_utm,
            UtmKind::Button => &self.button_utm,
        }
    }

    pub fn utm_mut(&mut self, kind: UtmKind) -> &mut UtmParams {
        match kind {
            UtmKind::Banner => &mut self.banner_utm,
            UtmKind::Button => &mut self.button_utm,
        }
    }

    /// Applies one edit to the bundle.
    pub fn apply(&mut self, field: MailField) {
        match field {
            MailField::Text(field, value) => field.set(self, value),
            MailField::Utm(kind, field, value) => field.set(self.utm_mut(kind), value),
        }
    }
}

/// The plain-text fields of a bundle, in form display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTextField {
    TitreMail,
    SujetMail,
    TexteApercu,
    ImageUrl,
    BannerLink,
    ButtonLink,
    TexteButton,
    ContenuMailHaut,
    ContenuMailBas,
}

impl MailTextField {
    pub const ALL: [MailTextField; 9] = [
        MailTextField::TitreMail,
        MailTextField::SujetMail,
        MailTextField::TexteApercu,
        MailTextField::ImageUrl,
        MailTextField::BannerLink,
        MailTextField::ButtonLink,
        MailTextField::TexteButton,
        MailTextField::ContenuMailHaut,
        MailTextField::ContenuMailBas,
    ];

    /// Wire/form name of the field, also used as the validation error key.
    pub fn name(self) -> &'static str {
        match self {
            MailTextField::TitreMail => "titreMail",
            MailTextField::SujetMail => "sujetMail",
            MailTextField::TexteApercu => "texteApercu",
            MailTextField::ImageUrl => "imageUrl",
            MailTextField::BannerLink => "bannerLink",
            MailTextField::ButtonLink => "buttonLink",
            MailTextField::TexteButton => "texteButton",
            MailTextField::ContenuMailHaut => "contenuMailHaut",
            MailTextField::ContenuMailBas => "contenuMailBas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MailTextField::TitreMail => "Mail title",
            MailTextField::SujetMail => "Subject",
            MailTextField::TexteApercu => "Preview text",
            MailTextField::ImageUrl => "Image URL",
            MailTextField::BannerLink => "Banner link",
            MailTextField::ButtonLink => "Button link",
            MailTextField::TexteButton => "Button text",
            MailTextField::ContenuMailHaut => "Body (top)",
            MailTextField::ContenuMailBas => "Body (bottom)",
        }
    }

    /// Whether the field holds a URL (validated as such before submit).
    pub fn is_url(self) -> bool {
        matches!(
            self,
            MailTextField::ImageUrl | MailTextField::BannerLink | MailTextField::ButtonLink
        )
    }

    /// Whether the field is multi-line body content.
    pub fn is_body(self) -> bool {
        matches!(
            self,
            MailTextField::ContenuMailHaut | MailTextField::ContenuMailBas
        )
    }

    pub fn get(self, bundle: &MailContentBundle) -> &str {
        match self {
            MailTextField::TitreMail => &bundle.titre_mail,
            MailTextField::SujetMail => &bundle.sujet_mail,
            MailTextField::TexteApercu => &bundle.texte_apercu,
            MailTextField::ImageUrl => &bundle.image_url,
            MailTextField::BannerLink => &bundle.banner_link,
            MailTextField::ButtonLink => &bundle.button_link,
            MailTextField::TexteButton => &bundle.texte_button,
            MailTextField::ContenuMailHaut => &bundle.contenu_mail_haut,
            MailTextField::ContenuMailBas => &bundle.contenu_mail_bas,
        }
    }

    pub fn set(self, bundle: &mut MailContentBundle, value: String) {
        match self {
            MailTextField::TitreMail => bundle.titre_mail = value,
            MailTextField::SujetMail => bundle.sujet_mail = value,
            MailTextField::TexteApercu => bundle.texte_apercu = value,
            MailTextField::ImageUrl => bundle.image_url = value,
            MailTextField::BannerLink => bundle.banner_link = value,
            MailTextField::ButtonLink => bundle.button_link = value,
            MailTextField::TexteButton => bundle.texte_button = value,
            MailTextField::ContenuMailHaut => bundle.contenu_mail_haut = value,
            MailTextField::ContenuMailBas => bundle.contenu_mail_bas = value,
        }
    }
}

/// One edit to a mail content bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum MailField {
    Text(MailTextField, String),
    Utm(UtmKind, UtmField, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_text_field_touches_only_that_field() {
        let mut bundle = MailContentBundle::with_utm_defaults("birthday");
        let before = bundle.clone();
        bundle.apply(MailField::Text(
            MailTextField::SujetMail,
            "Happy birthday!".to_string(),
        ));
        assert_eq!(bundle.sujet_mail, "Happy birthday!");
        for field in MailTextField::ALL {
            if field != MailTextField::SujetMail {
                assert_eq!(field.get(&bundle), field.get(&before));
            }
        }
        assert_eq!(bundle.banner_utm, before.banner_utm);
        assert_eq!(bundle.button_utm, before.button_utm);
    }

    #[test]
    fn apply_utm_field_targets_the_right_link() {
        let mut bundle = MailContentBundle::default();
        bundle.apply(MailField::Utm(
            UtmKind::Button,
            UtmField::Campaign,
            "spring_sale".to_string(),
        ));
        assert_eq!(bundle.button_utm.campaign, "spring_sale");
        assert_eq!(bundle.banner_utm.campaign, "");
    }

    #[test]
    fn utm_defaults_carry_kind_medium_and_campaign() {
        let utm = UtmParams::defaults(UtmKind::Banner, "cart_recovery_step2");
        assert_eq!(utm.medium, "email_banner");
        assert_eq!(utm.campaign, "cart_recovery_step2");
        assert!(utm.term.is_empty());
    }

    #[test]
    fn bundle_serializes_with_camel_case_wire_names() {
        let bundle = MailContentBundle {
            titre_mail: "T".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["titreMail"], "T");
        assert!(json.get("contenuMailHaut").is_some());
        assert!(json.get("titre_mail").is_none());
    }
}
