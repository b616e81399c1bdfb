//! Fixed classification rules mapping material names to heat properties.
//!
//! Rules are checked in table order and the first rule with a keyword
//! contained in the material name wins. Matching is a case-sensitive
//! substring test, so "steel" does not match "Steel".

use crate::domain::material::{HeatProperties, NO_TRANSITION_K};

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Short label used in logs and summaries
    pub label: &'static str,

    /// Substrings that select this rule (any one is enough)
    pub keywords: &'static [&'static str],

    /// Properties applied to matching materials
    pub properties: HeatProperties,
}

impl Rule {
    /// Check whether a material name selects this rule
    pub fn matches(&self, name: &str) -> bool {
        self.keywords.iter().any(|keyword| name.contains(keyword))
    }
}

/// Classification table, highest priority first
pub const RULES: &[Rule] = &[
    Rule {
        label: "steel",
        keywords: &["Steel"],
        properties: HeatProperties::combustion(1089.15, 1643.15, 50.2),
    },
    Rule {
        label: "iron",
        keywords: &["Iron"],
        properties: HeatProperties::combustion(1588.15, 1783.15, 79.5),
    },
    Rule {
        label: "titanium",
        keywords: &["Titanium"],
        properties: HeatProperties::combustion(1473.15, 1941.15, 17.0),
    },
    Rule {
        label: "aluminium",
        keywords: &["Aluminium"],
        properties: HeatProperties::combustion(NO_TRANSITION_K, 933.45, 205.0),
    },
    Rule {
        label: "wood",
        keywords: &["Wood"],
        properties: HeatProperties::combustion(453.0, NO_TRANSITION_K, 0.1),
    },
    Rule {
        label: "glass",
        keywords: &["Glass"],
        properties: HeatProperties::combustion(NO_TRANSITION_K, 1773.15, 0.8),
    },
    Rule {
        label: "fiber",
        keywords: &["Cloth", "Rope"],
        properties: HeatProperties::combustion(393.15, NO_TRANSITION_K, 0.04),
    },
    Rule {
        label: "carbon",
        keywords: &["Carbon"],
        properties: HeatProperties::combustion(973.15, 3823.15, 1.7),
    },
    Rule {
        label: "cardboard",
        keywords: &["Cardboard"],
        properties: HeatProperties::combustion(491.15, NO_TRANSITION_K, 0.0),
    },
    Rule {
        label: "tin",
        keywords: &["Tin", "Nails"],
        properties: HeatProperties::combustion(1213.0, 505.05, 66.8),
    },
];

/// Find the first rule whose keywords appear in `name`
pub fn classify(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(name))
}

/// Position of a rule within [`RULES`]
pub fn rule_index(rule: &Rule) -> Option<usize> {
    RULES.iter().position(|r| r.label == rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> HeatProperties {
        classify(name)
            .unwrap_or_else(|| panic!("no rule for {name}"))
            .properties
    }

    #[test]
    fn test_each_keyword_selects_its_row() {
        let cases = [
            ("Steel", (1089.15, 1643.15, 50.2)),
            ("Iron", (1588.15, 1783.15, 79.5)),
            ("Titanium", (1473.15, 1941.15, 17.0)),
            ("Aluminium", (1000000.0, 933.45, 205.0)),
            ("Wood", (453.0, 1000000.0, 0.1)),
            ("Glass", (1000000.0, 1773.15, 0.8)),
            ("Cloth", (393.15, 1000000.0, 0.04)),
            ("Rope", (393.15, 1000000.0, 0.04)),
            ("Carbon", (973.15, 3823.15, 1.7)),
            ("Cardboard", (491.15, 1000000.0, 0.0)),
            ("Tin", (1213.0, 505.05, 66.8)),
            ("Nails", (1213.0, 505.05, 66.8)),
        ];

        for (name, (ignition, melting, conductivity)) in cases {
            let p = props(name);
            assert_eq!(p.ignition_temperature, ignition, "{name}");
            assert_eq!(p.melting_temperature, melting, "{name}");
            assert_eq!(p.thermal_conductivity, conductivity, "{name}");
            assert_eq!(p.combustion_type, "Combustion", "{name}");
        }
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(classify("Reinforced Steel Beam").unwrap().label, "steel");
        assert_eq!(classify("Cotton Rope").unwrap().label, "fiber");
        assert_eq!(classify("Tin Can").unwrap().label, "tin");
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(classify("Steel Wire Rope").unwrap().label, "steel");
        assert_eq!(classify("Iron Nails").unwrap().label, "iron");
        assert_eq!(classify("Wood Glass Panel").unwrap().label, "wood");
    }

    #[test]
    fn test_case_sensitive() {
        assert!(classify("steel").is_none());
        assert!(classify("STEEL").is_none());
        assert!(classify("cotton rope").is_none());
    }

    #[test]
    fn test_unknown_material() {
        assert!(classify("Mystery Alloy").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, rule) in RULES.iter().enumerate() {
            assert_eq!(rule_index(rule), Some(i));
        }
    }
}
