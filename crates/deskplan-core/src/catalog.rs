//! # Furniture Catalog
//!
//! Read-only reference data keyed by furniture id. Workstation ids follow
//! the `ws_<W>x<D>` convention; their catalog depth is the full unit depth
//! (desk + chair + pull-out space), while the desk depth itself comes from
//! the id.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Desk depth assumed when a workstation id cannot be parsed
pub const DEFAULT_DESK_DEPTH: i64 = 600;

/// Chair space added to a desk's depth when a catalog entry omits `unit_d`
const DEFAULT_CHAIR_SPACE: i64 = 600;

/// Catalog section an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureCategory {
    Workstation,
    Storage,
    Equipment,
    Meeting,
}

impl FurnitureCategory {
    /// Counted towards the furnished footprint when scoring space efficiency
    pub fn counts_as_furniture(&self) -> bool {
        !matches!(self, FurnitureCategory::Meeting)
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureSpec {
    /// Width (mm); for workstations the length along the wall
    pub w: i64,
    /// Depth (mm); for workstations the whole unit depth
    pub d: i64,
    /// Space to keep free in front of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_front: Option<i64>,
    pub category: FurnitureCategory,
}

impl FurnitureSpec {
    pub fn new(w: i64, d: i64, clear_front: Option<i64>, category: FurnitureCategory) -> Self {
        debug_assert!(w > 0 && d > 0, "furniture footprint must be positive");
        Self {
            w,
            d,
            clear_front,
            category,
        }
    }

    /// Long edge, laid along a wall
    pub fn along(&self) -> i64 {
        self.w.max(self.d)
    }

    /// Short edge, projecting into the room
    pub fn depth(&self) -> i64 {
        self.w.min(self.d)
    }
}

/// Keyed furniture table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, FurnitureSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        use FurnitureCategory::*;
        let mut catalog = Self::empty();
        catalog.insert("ws_1200x700", FurnitureSpec::new(1200, 1300, None, Workstation));
        catalog.insert("ws_1200x600", FurnitureSpec::new(1200, 1200, None, Workstation));
        catalog.insert("ws_1000x600", FurnitureSpec::new(1000, 1200, None, Workstation));
        catalog.insert("storage_S", FurnitureSpec::new(900, 350, Some(600), Storage));
        catalog.insert("storage_M", FurnitureSpec::new(900, 450, Some(600), Storage));
        catalog.insert("storage_D", FurnitureSpec::new(900, 600, Some(600), Storage));
        catalog.insert("mfp", FurnitureSpec::new(600, 650, Some(900), Equipment));
        catalog.insert("meet2p", FurnitureSpec::new(750, 750, Some(600), Meeting));
        catalog
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    w: i64,
    d: i64,
    #[serde(default)]
    unit_d: Option<i64>,
    #[serde(default)]
    clear_front: Option<i64>,
}

impl Catalog {
    /// A catalog with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, spec: FurnitureSpec) {
        self.entries.insert(key.into(), spec);
    }

    pub fn get(&self, key: &str) -> Option<&FurnitureSpec> {
        self.entries.get(key)
    }

    /// Look up an entry, failing on unknown keys
    pub fn require(&self, key: &str) -> std::result::Result<&FurnitureSpec, CatalogError> {
        self.entries
            .get(key)
            .ok_or_else(|| CatalogError::UnknownFurniture {
                key: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FurnitureSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Workstation ids in key order
    pub fn workstations(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, spec)| spec.category == FurnitureCategory::Workstation)
            .map(|(k, _)| k)
    }

    /// `(along-wall length, unit depth)` for a workstation id
    pub fn workstation_unit(&self, ws_type: &str) -> std::result::Result<(i64, i64), CatalogError> {
        let spec = self.require(ws_type)?;
        Ok((spec.w, spec.d))
    }

    /// Build a catalog from a sectioned JSON document:
    /// `{"desks": {...}, "storage": {...}, "equipment": {...}, "meeting": {...}}`.
    /// Keys starting with `_` are treated as comments.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        let sections = doc.as_object().ok_or_else(|| CatalogError::Malformed {
            reason: "top level must be an object".to_string(),
        })?;

        let mut catalog = Self::empty();
        for (section, category) in [
            ("desks", FurnitureCategory::Workstation),
            ("storage", FurnitureCategory::Storage),
            ("equipment", FurnitureCategory::Equipment),
            ("meeting", FurnitureCategory::Meeting),
        ] {
            let Some(value) = sections.get(section) else {
                continue;
            };
            let table = value.as_object().ok_or_else(|| CatalogError::Malformed {
                reason: format!("section '{section}' must be an object"),
            })?;
            for (key, raw) in table {
                if key.starts_with('_') {
                    continue;
                }
                let entry: RawEntry = serde_json::from_value(raw.clone())?;
                let d = match category {
                    FurnitureCategory::Workstation => {
                        entry.unit_d.unwrap_or(entry.d + DEFAULT_CHAIR_SPACE)
                    }
                    _ => entry.d,
                };
                if entry.w <= 0 || d <= 0 {
                    return Err(CatalogError::InvalidDimensions {
                        key: key.clone(),
                        w: entry.w,
                        d,
                    }
                    .into());
                }
                catalog.insert(
                    key.clone(),
                    FurnitureSpec::new(entry.w, d, entry.clear_front, category),
                );
            }
        }
        Ok(catalog)
    }
}

fn parse_desk_dims(ws_type: &str) -> Option<(i64, i64)> {
    let dims = ws_type.strip_prefix("ws_").unwrap_or(ws_type);
    let (w, d) = dims.split_once('x')?;
    Some((w.parse().ok()?, d.parse().ok()?))
}

/// Desk depth encoded in a `ws_<W>x<D>` id, or `fallback` if unparsable
pub fn parse_desk_depth(ws_type: &str, fallback: i64) -> i64 {
    match parse_desk_dims(ws_type) {
        Some((_, d)) => d,
        None => {
            warn!("Unparsable desk id {}, using depth {}mm", ws_type, fallback);
            fallback
        }
    }
}

/// Desk top area `W * D` from a `ws_<W>x<D>` id, 0 if unparsable
pub fn desk_area(ws_type: &str) -> i64 {
    parse_desk_dims(ws_type).map_or(0, |(w, d)| w * d)
}
