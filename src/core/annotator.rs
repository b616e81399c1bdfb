//! Applies the classification rules to material records.
//!
//! Annotation is all-or-nothing at the collection level: the first record
//! that matches no rule aborts the run, and callers must not persist a
//! collection that failed to annotate.

use std::fmt;

use tracing::{debug, info};

use super::rules::{classify, rule_index, Rule, RULES};
use crate::domain::{MaterialCollection, MaterialRecord};
use crate::error::{HeatPropsError, Result};

/// Outcome of annotating a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Records annotated
    pub total: usize,

    /// Hits per rule, in [`RULES`] order
    pub hits: Vec<(&'static str, usize)>,

    /// Records whose properties say they never ignite
    pub non_igniting: usize,

    /// Records that char or decompose instead of melting
    pub non_melting: usize,
}

impl AnnotationSummary {
    fn new() -> Self {
        Self {
            total: 0,
            hits: RULES.iter().map(|rule| (rule.label, 0)).collect(),
            non_igniting: 0,
            non_melting: 0,
        }
    }

    fn record(&mut self, rule: &Rule) {
        self.total += 1;
        if let Some(slot) = rule_index(rule).and_then(|i| self.hits.get_mut(i)) {
            slot.1 += 1;
        }
        if rule.properties.never_ignites() {
            self.non_igniting += 1;
        }
        if rule.properties.never_melts() {
            self.non_melting += 1;
        }
    }

    /// Hit count for a rule label
    pub fn hits_for(&self, label: &str) -> usize {
        self.hits
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl fmt::Display for AnnotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} material(s) classified", self.total)?;
        for (label, count) in self.hits.iter().filter(|(_, n)| *n > 0) {
            writeln!(f, "  {:<12} {}", label, count)?;
        }
        if self.total > 0 {
            writeln!(f, "{} never ignite, {} never melt", self.non_igniting, self.non_melting)?;
        }
        Ok(())
    }
}

/// Classify one record and write its heat properties.
///
/// The record at `index` is left untouched when no rule matches.
pub fn annotate_record(record: &mut MaterialRecord, index: usize) -> Result<&'static Rule> {
    let rule = classify(record.name()).ok_or_else(|| HeatPropsError::Unclassified {
        index,
        name: record.name().to_string(),
    })?;

    record.apply(&rule.properties);
    debug!(index, name = record.name(), rule = rule.label, "Classified material");

    Ok(rule)
}

/// Annotate every record in order, stopping at the first unclassified one
pub fn annotate_collection(collection: &mut MaterialCollection) -> Result<AnnotationSummary> {
    let mut summary = AnnotationSummary::new();

    for (index, record) in collection.iter_mut().enumerate() {
        let rule = annotate_record(record, index)?;
        summary.record(rule);
    }

    info!(
        total = summary.total,
        non_igniting = summary.non_igniting,
        non_melting = summary.non_melting,
        "Annotated materials"
    );
    Ok(summary)
}
