// Pattern 4: Deferred filter + sort over a borrowed slice
// Each iteration re-runs the query, so it can be restarted.

use itertools::Itertools;
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_AGES: [i64; 10] = [12, 23, 21, 22, 45, 33, 20, 26, 55, 66];
pub const DEFAULT_THRESHOLD: i64 = 20;

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub values: Vec<i64>,
    pub threshold: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_AGES.to_vec(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl QueryConfig {
    /// Fields left out of the document keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn query(&self) -> AgeQuery<'_> {
        AgeQuery::new(&self.values, self.threshold)
    }
}

// ============================================================================
// Query
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AgeQuery<'a> {
    source: &'a [i64],
    threshold: i64,
}

impl<'a> AgeQuery<'a> {
    pub fn new(source: &'a [i64], threshold: i64) -> Self {
        Self { source, threshold }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Values strictly above the threshold, ascending. Ties keep source order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + 'a {
        let threshold = self.threshold;
        self.source
            .iter()
            .copied()
            .filter(move |&value| value > threshold)
            .sorted()
    }

    pub fn run(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &AgeQuery<'a> {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.run().into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_ages_above_twenty() {
        let query = AgeQuery::new(&DEFAULT_AGES, DEFAULT_THRESHOLD);
        assert_eq!(query.run(), vec![21, 22, 23, 26, 33, 45, 55, 66]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let query = AgeQuery::new(&[20, 20, 21], 20);
        assert_eq!(query.run(), vec![21]);
    }

    #[test]
    fn test_query_is_restartable() {
        let query = AgeQuery::new(&DEFAULT_AGES, DEFAULT_THRESHOLD);
        let first: Vec<i64> = (&query).into_iter().collect();
        let second: Vec<i64> = (&query).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn test_empty_source() {
        assert!(AgeQuery::new(&[], 0).run().is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.threshold, 20);
        assert_eq!(config.query().run(), vec![21, 22, 23, 26, 33, 45, 55, 66]);
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = QueryConfig::from_toml_str("threshold = 40").unwrap();
        assert_eq!(config.values, DEFAULT_AGES.to_vec());
        assert_eq!(config.query().run(), vec![45, 55, 66]);
    }

    #[test]
    fn test_config_from_toml_full() {
        let config = QueryConfig::from_toml_str("values = [5, 1, 9, 3]\nthreshold = 2").unwrap();
        assert_eq!(config.query().threshold(), 2);
        assert_eq!(config.query().run(), vec![3, 5, 9]);
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        assert!(QueryConfig::from_toml_str("threshold = \"high\"").is_err());
    }

    proptest! {
        #[test]
        fn test_query_properties(values: Vec<i64>, threshold: i64) {
            let result = AgeQuery::new(&values, threshold).run();

            prop_assert!(result.iter().all(|&v| v > threshold));
            for pair in result.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            let expected = values.iter().filter(|&&v| v > threshold).count();
            prop_assert_eq!(result.len(), expected);
        }
    }
}
