//! # Model Resolver

use std::sync::Arc;

use crate::{
    codec::Codec,
    encodings::{EncodingFamily, EncodingRegistry},
    errors::{TallyError, TallyResult},
    models::tables::{COUNT_RATIOS, EXACT_MODELS, PREFIX_TABLES},
    types::{Rank, TtHashMap},
};

/// A named table of ``(prefix, family)`` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixTable {
    /// Table name, for diagnostics.
    pub name: String,

    /// The entries; order does not matter.
    pub entries: Vec<(String, EncodingFamily)>,
}

impl PrefixTable {
    /// Build a table from ``(prefix, family)`` pairs.
    pub fn new<N, I, S>(
        name: N,
        entries: I,
    ) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, EncodingFamily)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|(prefix, family)| (prefix.into(), family))
                .collect(),
        }
    }

    /// The longest prefix of `model` in the table, if any.
    pub fn longest_match(
        &self,
        model: &str,
    ) -> Option<(&str, EncodingFamily)> {
        self.entries
            .iter()
            .filter(|(prefix, _)| model.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, family)| (prefix.as_str(), *family))
    }
}

/// Maps model names to [`EncodingFamily`]s, and corrects their counts.
///
/// Resolution checks, in order:
/// 1. the exact table;
/// 2. the prefix tables, in priority order; the first table with any
///    matching prefix decides, by its longest matching prefix.
///
/// Matching is case-sensitive.
///
/// ## Style Hints
///
/// Instance names should prefer `resolver`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResolver {
    exact: TtHashMap<String, EncodingFamily>,
    prefix_tables: Vec<PrefixTable>,
    ratios: Vec<(String, f64)>,
}

impl Default for ModelResolver {
    /// The built-in tables of [`crate::models::tables`].
    fn default() -> Self {
        Self::new(
            EXACT_MODELS.iter().copied(),
            PREFIX_TABLES
                .iter()
                .map(|&(name, entries)| PrefixTable::new(name, entries.iter().copied())),
            COUNT_RATIOS.iter().copied(),
        )
    }
}

impl ModelResolver {
    /// Build a resolver from custom tables.
    ///
    /// ## Arguments
    /// * `exact` - fully qualified names.
    /// * `prefix_tables` - prefix tables, highest priority first.
    /// * `ratios` - ``(prefix, ratio)`` count corrections; first match wins.
    pub fn new<E, S, P, R, Q>(
        exact: E,
        prefix_tables: P,
        ratios: R,
    ) -> Self
    where
        E: IntoIterator<Item = (S, EncodingFamily)>,
        S: Into<String>,
        P: IntoIterator<Item = PrefixTable>,
        R: IntoIterator<Item = (Q, f64)>,
        Q: Into<String>,
    {
        Self {
            exact: exact
                .into_iter()
                .map(|(name, family)| (name.into(), family))
                .collect(),
            prefix_tables: prefix_tables.into_iter().collect(),
            ratios: ratios
                .into_iter()
                .map(|(prefix, ratio)| (prefix.into(), ratio))
                .collect(),
        }
    }

    /// The prefix tables, highest priority first.
    pub fn prefix_tables(&self) -> &[PrefixTable] {
        &self.prefix_tables
    }

    /// Resolve a model name to its encoding family.
    ///
    /// ## Errors
    /// * [`TallyError::ModelNotSupported`] if no table matches.
    pub fn resolve(
        &self,
        model: &str,
    ) -> TallyResult<EncodingFamily> {
        if let Some(&family) = self.exact.get(model) {
            return Ok(family);
        }

        for table in &self.prefix_tables {
            if let Some((prefix, family)) = table.longest_match(model) {
                log::debug!("{model}: matched {prefix:?} in the {} table", table.name);
                return Ok(family);
            }
        }

        Err(TallyError::ModelNotSupported(model.to_string()))
    }

    /// The count correction ratio for a model; `1.0` when none applies.
    pub fn ratio_for(
        &self,
        model: &str,
    ) -> f64 {
        self.ratios
            .iter()
            .find(|(prefix, _)| model.starts_with(prefix.as_str()))
            .map_or(1.0, |&(_, ratio)| ratio)
    }

    /// Apply the model's ratio to a raw count, rounding down.
    pub fn adjust_count(
        &self,
        model: &str,
        count: usize,
    ) -> usize {
        let ratio = self.ratio_for(model);
        if ratio == 1.0 {
            return count;
        }
        (count as f64 * ratio).floor() as usize
    }

    /// Get the codec for a model from `registry`.
    ///
    /// ## Errors
    /// * as [`Self::resolve`] and [`EncodingRegistry::get`].
    pub fn codec_for(
        &self,
        registry: &EncodingRegistry,
        model: &str,
    ) -> TallyResult<Arc<Codec<Rank>>> {
        registry.get(self.resolve(model)?)
    }

    /// Count the tokens of `text` for a model, with ratio correction.
    ///
    /// The result is an estimate for models whose tokenizer is approximated.
    ///
    /// ## Errors
    /// * as [`Self::codec_for`] and [`Codec::count`].
    pub fn count(
        &self,
        registry: &EncodingRegistry,
        model: &str,
        text: &str,
    ) -> TallyResult<usize> {
        let count = self.codec_for(registry, model)?.count(text)?;
        Ok(self.adjust_count(model, count))
    }
}
