//! The location record as loaded from the dataset.

use serde::{Deserialize, Serialize};

use super::LocationKind;

/// A single administrative region.
///
/// Holds only a reference to its parent; children are discovered through
/// the store's by-parent index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique, URL-safe identifier.
    pub slug: String,
    /// Display name (may contain diacritics and spaces).
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// Ranking weight for search; missing is treated as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postal_codes: Vec<String>,
}

impl Location {
    /// Create a root location with no optional fields set.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            kind,
            parent_slug: None,
            population: None,
            priority: None,
            postal_codes: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_slug = Some(parent.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_postal_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.postal_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn priority_or_zero(&self) -> f64 {
        self.priority.unwrap_or(0.0)
    }

    #[inline]
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_record() {
        let json = r#"{
            "slug": "berlin-mitte",
            "name": "Berlin-Mitte",
            "type": "city-district",
            "parentSlug": "berlin",
            "population": 385000,
            "postalCodes": ["10115", "10117"]
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.slug, "berlin-mitte");
        assert_eq!(loc.kind, LocationKind::CityDistrict);
        assert_eq!(loc.parent_slug.as_deref(), Some("berlin"));
        assert_eq!(loc.population, Some(385_000));
        assert_eq!(loc.priority, None);
        assert_eq!(loc.postal_codes, vec!["10115", "10117"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{ "slug": "bayern", "name": "Bayern", "type": "state" }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.parent_slug, None);
        assert_eq!(loc.priority_or_zero(), 0.0);
        assert_eq!(loc.population_or_zero(), 0);
        assert!(loc.postal_codes.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let loc = Location::new("bayern", "Bayern", LocationKind::State);
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["type"], "state");
        assert!(json.get("parentSlug").is_none());
        assert!(json.get("postalCodes").is_none());
    }
}
