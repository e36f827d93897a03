use crate::preset::{CategoryPreset, PresetError};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

/// The configured categories, keyed by the name used on the command line.
///
/// Keys keep the order in which they were configured, and every listing,
/// batch simulation and report follows that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(IndexMap<String, CategoryPreset, FxBuildHasher>);

impl Catalog {
    /// The three categories shipped with the tool
    pub fn builtin() -> Self {
        [
            ("pasta_core", CategoryPreset::pasta_core()),
            ("pasta_premium", CategoryPreset::pasta_premium()),
            ("sauces", CategoryPreset::sauces()),
        ]
        .into_iter()
        .map(|(key, preset)| (key.to_owned(), preset))
        .collect()
    }

    /// The preset stored under `key`
    pub fn lookup(&self, key: &str) -> Result<&CategoryPreset, PresetError> {
        self.0
            .get(key)
            .ok_or_else(|| PresetError::UnknownCategory(key.to_owned()))
    }

    /// The key of the first configured category
    pub fn first_key(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }
}

impl std::ops::Deref for Catalog {
    type Target = IndexMap<String, CategoryPreset, FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Catalog {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, CategoryPreset)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CategoryPreset)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}
