//! Discount configuration shared by scenarios, steps and newsletters.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of discount: a percentage off, or a fixed amount in euros.
///
/// Historic payloads labelled this field three different ways depending on
/// the entity (`"pourcentage"`/`"euro"`, `"pourcentage"`/`"montant"`,
/// `"%"`/`"€"`). All five labels deserialize onto the two variants below;
/// serialization always emits the canonical `"pourcentage"`/`"euro"` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionType {
    #[default]
    Percentage,
    FixedAmount,
}

impl ReductionType {
    /// Parses any of the legacy wire labels. Returns `None` for unknown input.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim() {
            "pourcentage" | "%" => Some(ReductionType::Percentage),
            "euro" | "montant" | "€" => Some(ReductionType::FixedAmount),
            _ => None,
        }
    }

    /// Canonical wire label.
    pub fn label(self) -> &'static str {
        match self {
            ReductionType::Percentage => "pourcentage",
            ReductionType::FixedAmount => "euro",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ReductionType::Percentage => "%",
            ReductionType::FixedAmount => "€",
        }
    }

    /// Human-readable amount, e.g. `10 %` or `5 €`.
    pub fn format_amount(self, montant: u32) -> String {
        format!("{} {}", montant, self.symbol())
    }
}

impl Serialize for ReductionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReductionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelVisitor;

        impl Visitor<'_> for LabelVisitor {
            type Value = ReductionType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a reduction type label")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                ReductionType::parse_label(value)
                    .ok_or_else(|| E::custom(format!("unknown reduction type label: {value:?}")))
            }
        }

        deserializer.deserialize_str(LabelVisitor)
    }
}

/// A discount definition: enabled flag, amount, kind and validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionConfig {
    pub actif: bool,
    /// Amount in percent or euros depending on `kind`. Must stay >= 1;
    /// the input boundary enforces this.
    pub montant: u32,
    #[serde(rename = "type")]
    pub kind: ReductionType,
    /// Validity window in days after the mail is sent.
    pub duree_validite: u32,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            actif: false,
            montant: 10,
            kind: ReductionType::Percentage,
            duree_validite: 7,
        }
    }
}

impl ReductionConfig {
    /// One-line summary for detail views, e.g. `10 % off, valid 7 days`.
    pub fn summary(&self) -> String {
        format!(
            "{} off, valid {} day{}",
            self.kind.format_amount(self.montant),
            self.duree_validite,
            if self.duree_validite == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_legacy_label_parses_onto_the_unified_enum() {
        assert_eq!(
            ReductionType::parse_label("pourcentage"),
            Some(ReductionType::Percentage)
        );
        assert_eq!(ReductionType::parse_label("%"), Some(ReductionType::Percentage));
        assert_eq!(
            ReductionType::parse_label("euro"),
            Some(ReductionType::FixedAmount)
        );
        assert_eq!(
            ReductionType::parse_label("montant"),
            Some(ReductionType::FixedAmount)
        );
        assert_eq!(
            ReductionType::parse_label("€"),
            Some(ReductionType::FixedAmount)
        );
        assert_eq!(ReductionType::parse_label("pct"), None);
    }

    #[test]
    fn deserializes_legacy_labels_and_serializes_canonically() {
        let kind: ReductionType = serde_json::from_str("\"montant\"").unwrap();
        assert_eq!(kind, ReductionType::FixedAmount);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"euro\"");

        let kind: ReductionType = serde_json::from_str("\"%\"").unwrap();
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"pourcentage\"");

        assert!(serde_json::from_str::<ReductionType>("\"bogus\"").is_err());
    }

    #[test]
    fn config_round_trips_with_type_wire_name() {
        let config = ReductionConfig {
            actif: true,
            montant: 5,
            kind: ReductionType::FixedAmount,
            duree_validite: 14,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "euro");
        assert_eq!(json["dureeValidite"], 14);
        let back: ReductionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn summary_formats_amount_and_validity() {
        let config = ReductionConfig {
            actif: true,
            montant: 10,
            kind: ReductionType::Percentage,
            duree_validite: 1,
        };
        assert_eq!(config.summary(), "10 % off, valid 1 day");
    }
}
