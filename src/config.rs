//! The merged option-name -> value mapping handed to the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::Rgb;
use crate::palette::{LineStyle, Marker};

/// One entry of the per-series property cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEntry {
    pub color: Rgb,
    #[serde(rename = "ls")]
    pub linestyle: LineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// Ordered property cycle: series `i` takes `entries[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropCycle {
    pub entries: Vec<CycleEntry>,
}

impl PropCycle {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every entry carries a marker.
    pub fn has_markers(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.marker.is_some())
    }
}

/// Value of a single style option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Int(i64),
    Number(f64),
    Text(String),
    Cycle(PropCycle),
}

impl StyleValue {
    /// Numeric view of `Int` and `Number` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_cycle(&self) -> Option<&PropCycle> {
        match self {
            StyleValue::Cycle(c) => Some(c),
            _ => None,
        }
    }
}

impl From<i64> for StyleValue {
    fn from(v: i64) -> Self {
        StyleValue::Int(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

impl From<PropCycle> for StyleValue {
    fn from(v: PropCycle) -> Self {
        StyleValue::Cycle(v)
    }
}

/// Style configuration: option name to value, iterated in key order.
///
/// Later merges win, so callers compose it from the most generic layer to
/// the most specific one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Overlay every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: StyleConfig) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_f64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Font size entries in two tiers: `big` for body text, titles, axis labels
/// and legend titles; `small` for legend entries and tick labels.
pub fn tiered_font_sizes(big: f64, small: f64) -> StyleConfig {
    [
        ("font.size", big),
        ("axes.titlesize", big),
        ("axes.labelsize", big),
        ("legend.fontsize", small),
        ("legend.title_fontsize", big),
        ("xtick.labelsize", small),
        ("ytick.labelsize", small),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_existing_keys() {
        let mut base: StyleConfig = [("grid.linestyle", "--"), ("font.family", "serif")]
            .into_iter()
            .collect();
        base.merge([("font.family", "sans-serif")].into_iter().collect());
        assert_eq!(base.get_str("font.family"), Some("sans-serif"));
        assert_eq!(base.get_str("grid.linestyle"), Some("--"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn numeric_accessors() {
        let mut cfg = StyleConfig::new();
        cfg.insert("pdf.fonttype", 42_i64);
        cfg.insert("lines.linewidth", 0.8);
        assert_eq!(cfg.get_f64("pdf.fonttype"), Some(42.0));
        assert_eq!(cfg.get_f64("lines.linewidth"), Some(0.8));
        assert_eq!(cfg.get_str("lines.linewidth"), None);
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let mut cfg = StyleConfig::new();
        cfg.insert("axes.linewidth", 0.5);
        cfg.insert(
            "axes.prop_cycle",
            PropCycle {
                entries: vec![CycleEntry {
                    color: Rgb::new(1, 115, 178),
                    linestyle: LineStyle::DashDot,
                    marker: None,
                }],
            },
        );
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["axes.linewidth"], 0.5);
        assert_eq!(v["axes.prop_cycle"][0]["color"], "#0173B2");
        assert_eq!(v["axes.prop_cycle"][0]["ls"], "dashdot");
        assert!(v["axes.prop_cycle"][0].get("marker").is_none());
    }
}
