//! Read-only mail preview projection.
//!
//! The preview dialog never touches an entity directly: it consumes a
//! [`MailPreviewData`] flattened from a [`MailContentBundle`], with the
//! UTM sets already folded into the link hrefs. No side effects, no
//! network.

use crate::model::mail::{MailContentBundle, UtmParams};

/// Simulated device widths for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewDevice {
    pub const ALL: [PreviewDevice; 3] = [
        PreviewDevice::Desktop,
        PreviewDevice::Tablet,
        PreviewDevice::Mobile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreviewDevice::Desktop => "Desktop",
            PreviewDevice::Tablet => "Tablet",
            PreviewDevice::Mobile => "Mobile",
        }
    }

    pub fn width_px(self) -> u32 {
        match self {
            PreviewDevice::Desktop => 640,
            PreviewDevice::Tablet => 480,
            PreviewDevice::Mobile => 320,
        }
    }
}

/// Appends the non-empty UTM fields of `utm` to `link` as a query string.
/// Validation rejects values carrying query metacharacters before submit,
/// so no re-encoding here.
fn utm_href(link: &str, utm: &UtmParams) -> String {
    let params: Vec<String> = [
        ("utm_source", &utm.source),
        ("utm_medium", &utm.medium),
        ("utm_campaign", &utm.campaign),
        ("utm_term", &utm.term),
        ("utm_content", &utm.content),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!("{name}={value}"))
    .collect();

    if link.is_empty() || params.is_empty() {
        return link.to_string();
    }
    let separator = if link.contains('?') { '&' } else { '?' };
    format!("{link}{separator}{}", params.join("&"))
}

/// Flattened content of one mail, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MailPreviewData {
    pub titre_mail: String,
    pub sujet: String,
    pub texte_apercu: String,
    pub image_url: String,
    pub banner_href: String,
    pub button_href: String,
    pub texte_button: String,
    pub contenu_haut: String,
    pub contenu_bas: String,
}

impl MailPreviewData {
    /// Projects a bundle into renderable form. Content fields are carried
    /// verbatim; only the link hrefs are derived.
    pub fn from_bundle(bundle: &MailContentBundle) -> Self {
        Self {
            titre_mail: bundle.titre_mail.clone(),
            sujet: bundle.sujet_mail.clone(),
            texte_apercu: bundle.texte_apercu.clone(),
            image_url: bundle.image_url.clone(),
            banner_href: utm_href(&bundle.banner_link, &bundle.banner_utm),
            button_href: utm_href(&bundle.button_link, &bundle.button_utm),
            texte_button: bundle.texte_button.clone(),
            contenu_haut: bundle.contenu_mail_haut.clone(),
            contenu_bas: bundle.contenu_mail_bas.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::UtmKind;

    #[test]
    fn projection_carries_content_verbatim() {
        let bundle = MailContentBundle {
            contenu_mail_haut: "A".to_string(),
            contenu_mail_bas: "B".to_string(),
            texte_button: "Go".to_string(),
            ..Default::default()
        };
        let data = MailPreviewData::from_bundle(&bundle);
        assert_eq!(data.contenu_haut, "A");
        assert_eq!(data.contenu_bas, "B");
        assert_eq!(data.texte_button, "Go");
    }

    #[test]
    fn hrefs_fold_in_non_empty_utm_fields() {
        let mut bundle = MailContentBundle::default();
        bundle.button_link = "https://shop.example/cart".to_string();
        bundle.button_utm = UtmParams::defaults(UtmKind::Button, "cart_recovery_step1");

        let data = MailPreviewData::from_bundle(&bundle);
        assert_eq!(
            data.button_href,
            "https://shop.example/cart?utm_source=backoffice&utm_medium=email_button&utm_campaign=cart_recovery_step1"
        );
        // Banner has no link: stays empty rather than a dangling query.
        assert_eq!(data.banner_href, "");
    }

    #[test]
    fn href_appends_with_ampersand_when_link_has_a_query() {
        let utm = UtmParams {
            source: "backoffice".to_string(),
            ..Default::default()
        };
        assert_eq!(
            utm_href("https://shop.example/p?ref=1", &utm),
            "https://shop.example/p?ref=1&utm_source=backoffice"
        );
    }

    #[test]
    fn device_widths_narrow_from_desktop_to_mobile() {
        let widths: Vec<u32> = PreviewDevice::ALL.iter().map(|d| d.width_px()).collect();
        assert!(widths.windows(2).all(|w| w[0] > w[1]));
    }
}
