//! Create/edit draft for a newsletter. Same submit discipline as the
//! scenario draft, without the step list.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::fields::{ValidationError, check_mail_bundle, check_reduction, require};
use super::steps::{ReductionField, apply_reduction_field};
use crate::model::mail::{MailContentBundle, MailField, UtmKind, UtmParams};
use crate::model::newsletter::{Newsletter, NewsletterCriteria};
use crate::model::reduction::ReductionConfig;
use crate::model::site::Site;
use crate::model::stats::EntityStats;

#[derive(Debug, Clone)]
struct OriginalMeta {
    id: String,
    date_creation: DateTime<Utc>,
    last_sent: Option<DateTime<Utc>>,
    stats: EntityStats,
}

#[derive(Debug, Clone)]
pub struct NewsletterDraft {
    newsletter: Newsletter,
    original: Option<OriginalMeta>,
}

impl NewsletterDraft {
    pub fn create() -> Self {
        Self {
            newsletter: Newsletter {
                id: String::new(),
                nom: String::new(),
                site_id: String::new(),
                site_name: String::new(),
                mail: MailContentBundle::with_utm_defaults("newsletter"),
                criteria: NewsletterCriteria { subscribed: true },
                reduction: None,
                last_sent: None,
                next_send: None,
                actif: true,
                date_creation: Utc::now(),
                stats: EntityStats::zero(),
            },
            original: None,
        }
    }

    pub fn edit(newsletter: &Newsletter) -> Self {
        Self {
            newsletter: newsletter.clone(),
            original: Some(OriginalMeta {
                id: newsletter.id.clone(),
                date_creation: newsletter.date_creation,
                last_sent: newsletter.last_sent,
                stats: newsletter.stats.clone(),
            }),
        }
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn newsletter(&self) -> &Newsletter {
        &self.newsletter
    }

    pub fn set_nom(&mut self, nom: String) {
        self.newsletter.nom = nom;
    }

    pub fn set_site(&mut self, site: Option<&Site>) {
        match site {
            Some(site) => {
                self.newsletter.site_id = site.id.clone();
                self.newsletter.site_name = site.name.clone();
            }
            None => {
                self.newsletter.site_id.clear();
                self.newsletter.site_name.clear();
            }
        }
    }

    pub fn set_actif(&mut self, actif: bool) {
        self.newsletter.actif = actif;
    }

    pub fn set_subscribed(&mut self, subscribed: bool) {
        self.newsletter.criteria.subscribed = subscribed;
    }

    pub fn set_next_send(&mut self, next_send: Option<DateTime<Utc>>) {
        self.newsletter.next_send = next_send;
    }

    pub fn edit_mail(&mut self, field: MailField) {
        self.newsletter.mail.apply(field);
    }

    /// Bulk-resets one of the mail's UTM sets to the newsletter campaign
    /// defaults.
    pub fn reset_mail_utm(&mut self, kind: UtmKind) {
        *self.newsletter.mail.utm_mut(kind) = UtmParams::defaults(kind, "newsletter");
    }

    pub fn edit_reduction(&mut self, field: ReductionField) {
        let reduction = self
            .newsletter
            .reduction
            .get_or_insert_with(ReductionConfig::default);
        apply_reduction_field(reduction, field);
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "nom", &self.newsletter.nom, "Name");
        require(&mut errors, "siteId", &self.newsletter.site_id, "Site");
        check_mail_bundle(&mut errors, "", &self.newsletter.mail);
        if let Some(reduction) = &self.newsletter.reduction {
            check_reduction(&mut errors, "reduction.", reduction);
        }
        errors
    }

    /// Produces the complete newsletter or the blocking per-field errors.
    /// `lastSent` is lifecycle state, preserved like `dateCreation`.
    pub fn submit(&self) -> Result<Newsletter, Vec<ValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let mut newsletter = self.newsletter.clone();
        match &self.original {
            Some(meta) => {
                newsletter.id = meta.id.clone();
                newsletter.date_creation = meta.date_creation;
                newsletter.last_sent = meta.last_sent;
                newsletter.stats = meta.stats.clone();
            }
            None => {
                newsletter.id = Uuid::new_v4().to_string();
                newsletter.date_creation = Utc::now();
                newsletter.last_sent = None;
                newsletter.stats = EntityStats::zero();
            }
        }
        Ok(newsletter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::MailTextField;

    fn valid_draft() -> NewsletterDraft {
        let mut draft = NewsletterDraft::create();
        draft.set_nom("Monthly news".to_string());
        draft.set_site(Some(&Site {
            id: "site-1".to_string(),
            name: "Main shop".to_string(),
        }));
        draft.edit_mail(MailField::Text(
            MailTextField::SujetMail,
            "News".to_string(),
        ));
        draft
    }

    #[test]
    fn create_stamps_identity_and_clears_send_history() {
        let newsletter = valid_draft().submit().unwrap();
        assert!(!newsletter.id.is_empty());
        assert!(newsletter.last_sent.is_none());
        assert!(newsletter.stats.is_zero());
        assert!(newsletter.criteria.subscribed);
    }

    #[test]
    fn edit_preserves_lifecycle_metadata() {
        let mut original = valid_draft().submit().unwrap();
        original.last_sent = Some(Utc::now());
        original.stats.envois = 7;

        let mut draft = NewsletterDraft::edit(&original);
        draft.set_subscribed(false);
        let edited = draft.submit().unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.date_creation, original.date_creation);
        assert_eq!(edited.last_sent, original.last_sent);
        assert_eq!(edited.stats, original.stats);
        assert!(!edited.criteria.subscribed);
    }

    #[test]
    fn empty_draft_reports_required_fields() {
        let errors = NewsletterDraft::create().submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"nom"));
        assert!(fields.contains(&"siteId"));
        assert!(fields.contains(&"sujetMail"));
    }
}
