//! Splits raw synonyms into clean (shares a leaf) and partial (prefix of the
//! key, synthesizes extra dictionary entries) groups, and builds the
//! alias -> canonical reverse map used at result-materialization time.
//!
//! Ported from `fast_autocomplete.dwg.AutoComplete._get_clean_and_partial_synonyms`.

use std::collections::HashMap;

#[derive(Default)]
pub struct SynonymTable {
    pub clean: HashMap<String, Vec<String>>,
    pub partial: HashMap<String, Vec<String>>,
    pub reverse: HashMap<String, String>,
}

impl SynonymTable {
    /// `raw` keys must already be present in the word dictionary -- that
    /// invariant is checked by the engine at construction time, not here.
    pub fn build(raw: &HashMap<String, Vec<String>>) -> Self {
        let mut clean: HashMap<String, Vec<String>> = HashMap::new();
        let mut partial: HashMap<String, Vec<String>> = HashMap::new();

        for (key, aliases) in raw {
            let key = key.trim().to_lowercase();
            let mut clean_aliases = Vec::new();
            let mut partial_aliases = Vec::new();
            for alias in aliases {
                let alias = alias.trim().to_lowercase();
                if key.starts_with(&alias) {
                    partial_aliases.push(alias);
                } else {
                    clean_aliases.push(alias);
                }
            }
            if !clean_aliases.is_empty() {
                clean.insert(key.clone(), clean_aliases);
            }
            if !partial_aliases.is_empty() {
                partial.insert(key.clone(), partial_aliases);
            }
        }

        let mut reverse = HashMap::new();
        for (key, aliases) in &clean {
            for alias in aliases {
                reverse.insert(alias.clone(), key.clone());
            }
        }

        SynonymTable { clean, partial, reverse }
    }

    /// Rewrites `token` to its canonical key if it's a known alias,
    /// otherwise returns `token` unchanged.
    pub fn canonicalize<'a>(&'a self, token: &'a str) -> &'a str {
        self.reverse.get(token).map(|s| s.as_str()).unwrap_or(token)
    }
}
