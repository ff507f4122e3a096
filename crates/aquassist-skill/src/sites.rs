//! Site name resolution.
//!
//! Maps what the user said ("Cold Well") onto the dataset metric key. Only
//! exact matches after lower-casing resolve; there is no fuzzy matching.

use std::collections::BTreeMap;

/// Fixed lookup table from lower-case site name to metric key.
#[derive(Debug, Clone, Default)]
pub struct SiteResolver {
    sites: BTreeMap<String, String>,
}

impl SiteResolver {
    /// Build a resolver from a name -> key table. Names are lower-cased.
    pub fn new<I, N, K>(sites: I) -> Self
    where
        I: IntoIterator<Item = (N, K)>,
        N: AsRef<str>,
        K: Into<String>,
    {
        let sites = sites
            .into_iter()
            .map(|(name, key)| (name.as_ref().to_lowercase(), key.into()))
            .collect();
        Self { sites }
    }

    /// The metric key for `name`, or `None` if the site is unknown.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.sites.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Known site names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_sites() -> SiteResolver {
        SiteResolver::new([
            ("scale pit", "Group_4_pumps_to_Scale_Pit_Consumption"),
            ("cold well", "Make_up_line_valve_to_cold_well_Consumption"),
        ])
    }

    #[test]
    fn test_resolve_known_site() {
        let sites = plant_sites();
        assert_eq!(
            sites.resolve("scale pit"),
            Some("Group_4_pumps_to_Scale_Pit_Consumption")
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let sites = plant_sites();
        assert_eq!(sites.resolve("Cold Well"), sites.resolve("cold well"));
        assert_eq!(sites.resolve("COLD WELL"), sites.resolve("cold well"));
        assert!(sites.resolve("Cold Well").is_some());
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let sites = plant_sites();
        assert!(sites.resolve("cold wel").is_none());
        assert!(sites.resolve("cold well ").is_none());
        assert!(sites.resolve("well").is_none());
        assert!(sites.resolve("").is_none());
    }

    #[test]
    fn test_mixed_case_table_names_are_normalized() {
        let sites = SiteResolver::new([("PPF Pit", "PPF_Pit_to_cold_well_Consumption")]);
        assert_eq!(sites.resolve("ppf pit"), Some("PPF_Pit_to_cold_well_Consumption"));
        assert_eq!(sites.names().collect::<Vec<_>>(), vec!["ppf pit"]);
    }

    #[test]
    fn test_empty_resolver() {
        let sites = SiteResolver::default();
        assert!(sites.is_empty());
        assert!(sites.resolve("scale pit").is_none());
    }
}
