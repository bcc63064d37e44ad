//! Demo collections seeding the dashboard.
//!
//! There is no server; the containers start from these in-memory sets and
//! own them for the rest of the session.

use chrono::{TimeZone, Utc};
use common::model::mail::{MailContentBundle, MailTextField, UtmKind, UtmParams};
use common::model::newsletter::{Newsletter, NewsletterCriteria};
use common::model::reduction::{ReductionConfig, ReductionType};
use common::model::scenario::{
    BirthdayCriteria, CartRecoveryCriteria, Scenario, ScenarioCriteria, ScenarioKind,
};
use common::model::site::Site;
use common::model::stats::EntityStats;
use common::model::step::{DelayUnit, Step, step_campaign};

pub fn sites() -> Vec<Site> {
    vec![
        Site {
            id: "site-1".to_string(),
            name: "Main shop".to_string(),
        },
        Site {
            id: "site-2".to_string(),
            name: "Outlet".to_string(),
        },
        Site {
            id: "site-3".to_string(),
            name: "B2B store".to_string(),
        },
    ]
}

fn bundle(campaign: &str, subject: &str, title: &str) -> MailContentBundle {
    let mut bundle = MailContentBundle::with_utm_defaults(campaign);
    MailTextField::SujetMail.set(&mut bundle, subject.to_string());
    MailTextField::TitreMail.set(&mut bundle, title.to_string());
    MailTextField::TexteApercu.set(&mut bundle, format!("{title} — don't miss out"));
    MailTextField::ImageUrl.set(
        &mut bundle,
        "https://cdn.example/img/header.png".to_string(),
    );
    MailTextField::BannerLink.set(&mut bundle, "https://shop.example".to_string());
    MailTextField::ButtonLink.set(&mut bundle, "https://shop.example/cart".to_string());
    MailTextField::TexteButton.set(&mut bundle, "Back to my cart".to_string());
    MailTextField::ContenuMailHaut.set(&mut bundle, "You left something behind.".to_string());
    MailTextField::ContenuMailBas.set(&mut bundle, "See you soon!".to_string());
    bundle
}

fn demo_step(position: usize, delai: u32, unit: DelayUnit, subject: &str) -> Step {
    let mut step = Step::new(position);
    step.delai = delai;
    step.delai_unite = unit;
    step.mail = bundle(&step_campaign(position), subject, subject);
    step
}

pub fn seed_scenarios(kind: ScenarioKind) -> Vec<Scenario> {
    match kind {
        ScenarioKind::CartRecovery => vec![Scenario {
            id: "2".to_string(),
            nom: "Abandoned cart follow-up".to_string(),
            site_id: "site-1".to_string(),
            site_name: "Main shop".to_string(),
            mail: bundle("cart_recovery_main", "Your cart misses you", "Still thinking?"),
            criteres: ScenarioCriteria::CartRecovery(CartRecoveryCriteria {
                delai_creation: 1,
                delai_creation_unite: DelayUnit::Days,
                panier_traite: false,
            }),
            reduction: None,
            etapes: vec![
                demo_step(1, 4, DelayUnit::Hours, "Forgot something?"),
                demo_step(2, 1, DelayUnit::Days, "Last chance: 10% off"),
            ],
            actif: true,
            date_creation: Utc.with_ymd_and_hms(2026, 2, 10, 9, 30, 0).unwrap(),
            statistiques: EntityStats {
                envois: 1240,
                ouvertures: 512,
                clics: 188,
                conversions: 57,
            },
        }],
        ScenarioKind::Birthday => vec![Scenario {
            id: "5".to_string(),
            nom: "Birthday treat".to_string(),
            site_id: "site-2".to_string(),
            site_name: "Outlet".to_string(),
            mail: bundle("birthday", "Happy birthday!", "A gift for your day"),
            criteres: ScenarioCriteria::Birthday(BirthdayCriteria {
                offre_speciale: "Free shipping on your birthday week".to_string(),
                jours_validite: 14,
            }),
            reduction: Some(ReductionConfig {
                actif: true,
                montant: 15,
                kind: ReductionType::Percentage,
                duree_validite: 14,
            }),
            etapes: Vec::new(),
            actif: true,
            date_creation: Utc.with_ymd_and_hms(2026, 1, 22, 14, 0, 0).unwrap(),
            statistiques: EntityStats {
                envois: 310,
                ouvertures: 201,
                clics: 96,
                conversions: 40,
            },
        }],
    }
}

pub fn seed_newsletters() -> Vec<Newsletter> {
    let mut mail = bundle("newsletter", "Spring collection is here", "Spring news");
    // Newsletters track their own campaign, not a step ordinal.
    mail.banner_utm = UtmParams::defaults(UtmKind::Banner, "newsletter_2026_03");
    mail.button_utm = UtmParams::defaults(UtmKind::Button, "newsletter_2026_03");
    vec![Newsletter {
        id: "n-1".to_string(),
        nom: "March newsletter".to_string(),
        site_id: "site-1".to_string(),
        site_name: "Main shop".to_string(),
        mail,
        criteria: NewsletterCriteria { subscribed: true },
        reduction: Some(ReductionConfig {
            actif: true,
            montant: 5,
            kind: ReductionType::FixedAmount,
            duree_validite: 7,
        }),
        last_sent: Some(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()),
        next_send: Some(Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap()),
        actif: true,
        date_creation: Utc.with_ymd_and_hms(2026, 1, 5, 11, 0, 0).unwrap(),
        stats: EntityStats {
            envois: 5400,
            ouvertures: 1630,
            clics: 420,
            conversions: 85,
        },
    }]
}
