//! core::document::schema
//!
//! Source tree shapes: raw token records, preset collections, and the
//! parsed document.
//!
//! # Shape Classification
//!
//! A preset collection in a token document comes in one of two shapes, and
//! the shape is decided once at parse time, not sniffed per query:
//!
//! - **Flat**: a JSON array whose first element carries a `slug` key. The
//!   records belong to the theme; origin filters do not apply.
//! - **Nested**: a JSON object mapping origin keys (`theme`, `custom`,
//!   `default`, anything else) to arrays of records, kept in document order.
//!
//! Anything else (missing, scalar, an array without a leading `slug`)
//! classifies as [`PresetData::Empty`].
//!
//! # Leniency
//!
//! Documents are external input, so parsing never fails: malformed records
//! degrade individually (a non-object record is dropped, a non-scalar field
//! reads as absent) and malformed sections degrade to empty. Field checks
//! beyond presence happen later, when queries map records to tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::{Origin, OriginFilter};

/// Coerce a scalar JSON value to a string.
///
/// Strings pass through, numbers are formatted, everything else reads as
/// absent. Token documents in the wild carry both `"size": "1.5rem"` and
/// `"size": 16`.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One record from a preset collection, before normalization.
///
/// Every field is optional; which fields a record needs depends on the
/// category querying it (`color` for palettes, `size` for spacing, ...).
/// Records missing those fields survive parsing and are skipped at query
/// time instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawToken {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub gradient: Option<String>,
    pub size: Option<String>,
    pub font_family: Option<String>,
    pub shadow: Option<String>,
}

impl RawToken {
    /// Parse a record from a JSON value.
    ///
    /// Returns `None` only for non-objects; an object always yields a
    /// record, with non-scalar fields reading as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            slug: obj.get("slug").and_then(scalar_string),
            name: obj.get("name").and_then(scalar_string),
            color: obj.get("color").and_then(scalar_string),
            gradient: obj.get("gradient").and_then(scalar_string),
            size: obj.get("size").and_then(scalar_string),
            font_family: obj.get("fontFamily").and_then(scalar_string),
            shadow: obj.get("shadow").and_then(scalar_string),
        })
    }
}

/// A preset collection, classified at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PresetData {
    /// Missing, scalar, or unrecognizable data.
    #[default]
    Empty,
    /// An already-flat record list; all records belong to the theme.
    Flat(Vec<RawToken>),
    /// Origin-keyed record lists, in document order.
    Nested(Vec<(Origin, Vec<RawToken>)>),
}

impl PresetData {
    /// Classify and parse a collection value.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return PresetData::Empty;
        };
        match value {
            Value::Array(items) => {
                let leading_slug = items
                    .first()
                    .map(|item| item.get("slug").is_some())
                    .unwrap_or(false);
                if leading_slug {
                    PresetData::Flat(parse_records(items))
                } else {
                    PresetData::Empty
                }
            }
            Value::Object(map) => {
                let groups: Vec<(Origin, Vec<RawToken>)> = map
                    .iter()
                    .filter_map(|(key, val)| {
                        val.as_array()
                            .map(|items| (Origin::from_key(key), parse_records(items)))
                    })
                    .collect();
                if groups.is_empty() {
                    PresetData::Empty
                } else {
                    PresetData::Nested(groups)
                }
            }
            _ => PresetData::Empty,
        }
    }

    /// Flatten the collection into `(record, origin)` pairs.
    ///
    /// - [`PresetData::Empty`] flattens to nothing.
    /// - [`PresetData::Flat`] records all tag as [`Origin::Theme`], in input
    ///   order; the filter does not apply.
    /// - [`PresetData::Nested`] with [`OriginFilter::All`] yields the
    ///   priority origins first ([`Origin::PRIORITY`]), then the remaining
    ///   origins in document order. Record order within an origin is
    ///   preserved. With [`OriginFilter::Only`] it yields just that
    ///   origin's records.
    ///
    /// Duplicate slugs are never collapsed: a slug defined under several
    /// origins yields one pair per origin.
    pub fn flatten(&self, filter: OriginFilter) -> Vec<(RawToken, Origin)> {
        match self {
            PresetData::Empty => Vec::new(),
            PresetData::Flat(records) => records
                .iter()
                .cloned()
                .map(|record| (record, Origin::Theme))
                .collect(),
            PresetData::Nested(groups) => match filter {
                OriginFilter::All => {
                    let mut out = Vec::new();
                    for priority in &Origin::PRIORITY {
                        if let Some((origin, records)) =
                            groups.iter().find(|(origin, _)| origin == priority)
                        {
                            out.extend(
                                records.iter().cloned().map(|r| (r, origin.clone())),
                            );
                        }
                    }
                    for (origin, records) in groups {
                        if !Origin::PRIORITY.contains(origin) {
                            out.extend(
                                records.iter().cloned().map(|r| (r, origin.clone())),
                            );
                        }
                    }
                    out
                }
                OriginFilter::Only(wanted) => groups
                    .iter()
                    .find(|(origin, _)| *origin == wanted)
                    .map(|(origin, records)| {
                        records
                            .iter()
                            .cloned()
                            .map(|r| (r, origin.clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }

    /// Whether the collection holds no records at all.
    pub fn is_empty(&self) -> bool {
        match self {
            PresetData::Empty => true,
            PresetData::Flat(records) => records.is_empty(),
            PresetData::Nested(groups) => groups.iter().all(|(_, records)| records.is_empty()),
        }
    }
}

fn parse_records(items: &[Value]) -> Vec<RawToken> {
    items.iter().filter_map(RawToken::from_value).collect()
}

/// Layout settings (`settings.layout`): content and wide widths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wide_size: Option<String>,
}

impl LayoutSettings {
    /// Parse layout settings, coercing scalar widths to strings.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        Self {
            content_size: obj.get("contentSize").and_then(scalar_string),
            wide_size: obj.get("wideSize").and_then(scalar_string),
        }
    }
}

/// A parsed token document.
///
/// Holds one classified [`PresetData`] per category, the free-form custom
/// property tree, and layout settings. Parsing never fails; sections that
/// are missing or malformed come back empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `settings.color.palette`
    pub palette: PresetData,
    /// `settings.color.gradients`
    pub gradients: PresetData,
    /// `settings.typography.fontSizes`
    pub font_sizes: PresetData,
    /// `settings.typography.fontFamilies`
    pub font_families: PresetData,
    /// `settings.spacing.spacingSizes`
    pub spacing_sizes: PresetData,
    /// `settings.shadow.presets`
    pub shadows: PresetData,
    /// `settings.custom`, document order preserved
    pub custom: Map<String, Value>,
    /// `settings.layout`
    pub layout: LayoutSettings,
}

impl Document {
    /// Parse a document from its raw JSON value.
    pub fn from_value(root: &Value) -> Self {
        Self {
            palette: PresetData::from_value(lookup(root, &["settings", "color", "palette"])),
            gradients: PresetData::from_value(lookup(root, &["settings", "color", "gradients"])),
            font_sizes: PresetData::from_value(lookup(
                root,
                &["settings", "typography", "fontSizes"],
            )),
            font_families: PresetData::from_value(lookup(
                root,
                &["settings", "typography", "fontFamilies"],
            )),
            spacing_sizes: PresetData::from_value(lookup(
                root,
                &["settings", "spacing", "spacingSizes"],
            )),
            shadows: PresetData::from_value(lookup(root, &["settings", "shadow", "presets"])),
            custom: lookup(root, &["settings", "custom"])
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            layout: LayoutSettings::from_value(lookup(root, &["settings", "layout"])),
        }
    }
}

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |value, key| value.get(*key))
}
