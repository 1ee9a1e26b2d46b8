//! The multi-stage search algorithm: prefix autofill, bounded edit-distance
//! fuzzy fallback, descendant expansion, and path merge/dedup. Ported from
//! `fast_autocomplete.dwg.AutoComplete`.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::cache::LfuCache;
use crate::error::{Error, Result};
use crate::graph::{NodeId, PrefixGraph, ROOT};
use crate::normalize::{Normalizer, NormalizerConfig};
use crate::record::WordRecord;
use crate::synonyms::SynonymTable;

const DELIMITER: &str = "__";

/// Audit trail of the stages `_find` walked through. `RestOfFuzzyRound2`
/// embeds the nested recursion's own trace, matching the original's
/// `{FindStep.rest_of_fuzzy_round2: rest_find_steps}` shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FindStep {
    Start,
    DescendantsOnly,
    FuzzyTry,
    FuzzyFound,
    RestOfFuzzyRound2(Vec<FindStep>),
    NotEnoughResultsAddSomeDescendants,
}

/// Optional behaviors that don't change the core algorithm's shape.
#[derive(Clone)]
pub struct EngineConfig {
    pub cache_capacity: usize,
    /// When true, paths within a distance bucket are sorted by descending
    /// `count` of their final token before emission (the optional
    /// count-ranking signal). When false, insertion order is kept.
    pub rank_by_count: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { cache_capacity: 2048, rank_by_count: false }
    }
}

pub struct AutoComplete {
    graph: PrefixGraph,
    synonyms: SynonymTable,
    words: HashMap<String, Box<dyn WordRecord>>,
    normalizer: Normalizer,
    cache: LfuCache<String, Vec<Vec<String>>>,
    full_stop_words: HashSet<String>,
    config: EngineConfig,
}

fn extend_and_repeat(prefix: &[String], extra: &[String]) -> Vec<Vec<String>> {
    if prefix.is_empty() {
        return extra.iter().map(|item| vec![item.clone()]).collect();
    }
    let mut result = Vec::new();
    for item in extra {
        if prefix.iter().any(|p| p == item) {
            continue;
        }
        let mut path = prefix.to_vec();
        if let Some(last) = path.last() {
            if item.starts_with(last.as_str()) {
                path.pop();
            }
        }
        path.push(item.clone());
        result.push(path);
    }
    result
}

impl AutoComplete {
    pub fn new(
        words: HashMap<String, Box<dyn WordRecord>>,
        synonyms: Option<HashMap<String, Vec<String>>>,
        full_stop_words: Option<Vec<String>>,
        normalizer_config: NormalizerConfig,
        config: EngineConfig,
    ) -> Result<Self> {
        let raw_synonyms = synonyms.unwrap_or_default();
        for key in raw_synonyms.keys() {
            if !words.contains_key(key) {
                return Err(Error::BadInput(format!(
                    "synonym key '{}' is not present in the word dictionary",
                    key
                )));
            }
        }
        let synonym_table = SynonymTable::build(&raw_synonyms);

        let mut words = words;
        let new_words = Self::partial_synonym_expansions(&words, &synonym_table);
        words.extend(new_words);

        let mut graph = PrefixGraph::new();
        for (word, record) in words.iter() {
            let normalized = word.trim().to_lowercase();
            let original_key = record.original_key();
            let leaf = graph.insert(&normalized, original_key.as_deref());
            if let Some(aliases) = synonym_table.clean.get(&normalized) {
                for alias in aliases {
                    graph.insert_branch(alias, Some(leaf), false, None);
                }
            }
        }

        Ok(AutoComplete {
            graph,
            synonyms: synonym_table,
            words,
            normalizer: Normalizer::new(normalizer_config),
            cache: LfuCache::new(config.cache_capacity),
            full_stop_words: full_stop_words.unwrap_or_default().into_iter().collect(),
            config,
        })
    }

    /// Synthesizes extra dictionary entries for partial synonyms: for every
    /// word whose key starts with a partial-synonym key, a new entry is
    /// added whose key has the leading substring replaced by the alias.
    fn partial_synonym_expansions(
        words: &HashMap<String, Box<dyn WordRecord>>,
        synonyms: &SynonymTable,
    ) -> HashMap<String, Box<dyn WordRecord>> {
        let mut new_words: HashMap<String, Box<dyn WordRecord>> = HashMap::new();
        for (key, value) in words.iter() {
            for (syn_key, aliases) in synonyms.partial.iter() {
                if key.starts_with(syn_key.as_str()) {
                    for alias in aliases {
                        let new_key = key.replace(syn_key.as_str(), alias.as_str());
                        new_words.insert(new_key, value.with_original_key(key));
                    }
                }
            }
        }
        new_words
    }

    /// `search(word, max_cost=2, size=5)`: normalize, consult the LFU
    /// cache, and on miss run find-and-sort. Empty input always yields an
    /// empty list -- the public contract never returns internal seed
    /// descendants, even though the private `find` will happily seed from
    /// whatever `descendants(root, size)` returns.
    pub fn search(&self, word: &str, max_cost: usize, size: usize) -> Vec<Vec<String>> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Vec::new();
        }
        let cache_key = format!("{}-{}-{}", word, max_cost, size);
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached;
        }
        let result = self.find_and_sort(&word, max_cost, size);
        self.cache.set(cache_key, result.clone());
        result
    }

    fn find_and_sort(&self, word: &str, max_cost: usize, size: usize) -> Vec<Vec<String>> {
        let (mut results, _find_steps) = self.find(word, max_cost, size, 0);
        if self.config.rank_by_count {
            for paths in results.values_mut() {
                paths.sort_by(|a, b| {
                    let count_of = |path: &[String]| -> u64 {
                        path.last().and_then(|tok| self.words.get(tok)).map(|r| r.count()).unwrap_or(0)
                    };
                    count_of(b).cmp(&count_of(a))
                });
            }
        }

        let mut output_keys_set: HashSet<String> = HashSet::new();
        let mut output: Vec<Vec<String>> = Vec::new();
        for (_distance, paths) in results.iter() {
            for path in paths {
                let rewritten: Vec<String> = path
                    .iter()
                    .map(|token| {
                        let canonical = self.synonyms.canonicalize(token);
                        if canonical != token {
                            canonical.to_string()
                        } else if self.words.contains_key(token) {
                            token.clone()
                        } else {
                            String::new()
                        }
                    })
                    .collect();
                let signature = rewritten.join(DELIMITER);
                if !rewritten.is_empty() && !output_keys_set.contains(&signature) {
                    output_keys_set.insert(signature);
                    output.push(rewritten);
                    if output_keys_set.len() >= size {
                        return output;
                    }
                }
            }
        }
        output
    }

    fn find(
        &self,
        word: &str,
        max_cost: usize,
        size: usize,
        call_count: usize,
    ) -> (BTreeMap<usize, Vec<Vec<String>>>, Vec<FindStep>) {
        let mut results: BTreeMap<usize, Vec<Vec<String>>> = BTreeMap::new();
        let mut fuzzy_matches: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut rest_of_results: BTreeMap<usize, Vec<Vec<String>>> = BTreeMap::new();
        let mut fuzzy_matches_len = 0usize;
        let mut fuzzy_min_distance: Option<usize> = None;
        let mut min_distance: Option<usize> = None;

        let (matched_prefix_of_last_word, rest_of_word, new_node, matched_words) = self.prefix_autofill(word, None);
        let last_word = format!("{}{}", matched_prefix_of_last_word, rest_of_word);

        if !matched_words.is_empty() {
            results.insert(0, vec![matched_words.clone()]);
            min_distance = Some(0);
        }

        let mut find_steps: Vec<FindStep>;

        if rest_of_word.chars().count() < 3 {
            find_steps = vec![FindStep::DescendantsOnly];
            self.add_descendants_to_results(new_node, size, &matched_words, &mut results, 1);
        } else {
            find_steps = vec![FindStep::FuzzyTry];
            let mut word_chunks: VecDeque<&str> = last_word.split(' ').filter(|s| !s.is_empty()).collect();
            let mut new_word = word_chunks.pop_front().unwrap_or("").to_string();
            while new_word.chars().count() < 5 {
                match word_chunks.pop_front() {
                    Some(chunk) => new_word = format!("{} {}", new_word, chunk),
                    None => break,
                }
            }
            let fuzzy_rest_of_word: String =
                word_chunks.into_iter().collect::<Vec<_>>().join(" ");

            for (candidate, record) in self.words.iter() {
                if (candidate.chars().count() as i64 - new_word.chars().count() as i64).unsigned_abs() as usize > max_cost {
                    continue;
                }
                let dist = strsim::levenshtein(&new_word, candidate);
                if dist < max_cost {
                    fuzzy_matches_len += 1;
                    let value = record.original_key().unwrap_or_else(|| candidate.clone());
                    fuzzy_matches.entry(dist).or_default().push(value);
                    fuzzy_min_distance = Some(fuzzy_min_distance.map_or(dist, |m| m.min(dist)));
                    if fuzzy_matches_len >= size || dist < 2 {
                        break;
                    }
                }
            }

            if fuzzy_matches_len > 0 {
                find_steps.push(FindStep::FuzzyFound);
                let min_dist = fuzzy_min_distance.unwrap();
                if !fuzzy_rest_of_word.is_empty() {
                    let next_call_count = call_count + 1;
                    if next_call_count < 2 {
                        let (inner_results, inner_steps) =
                            self.find(&fuzzy_rest_of_word, max_cost, size, next_call_count);
                        rest_of_results = inner_results;
                        find_steps.push(FindStep::RestOfFuzzyRound2(inner_steps));
                    }
                }
                if let Some(words_at_min) = fuzzy_matches.get(&min_dist) {
                    for fuzzy_word in words_at_min {
                        if !rest_of_results.is_empty() {
                            let rest_min_key = *rest_of_results.keys().next().unwrap();
                            for rest_path in &rest_of_results[&rest_min_key] {
                                let mut path = matched_words.clone();
                                path.push(fuzzy_word.clone());
                                path.extend(rest_path.iter().cloned());
                                results.entry(min_dist).or_default().push(path);
                            }
                        } else {
                            let mut path = matched_words.clone();
                            path.push(fuzzy_word.clone());
                            results.entry(min_dist).or_default().push(path);

                            let (_p, _r, fuzzy_node, _m) = self.prefix_autofill(fuzzy_word, None);
                            self.add_descendants_to_results(
                                fuzzy_node,
                                size,
                                &matched_words,
                                &mut results,
                                min_dist,
                            );
                        }
                    }
                }
            }

            if !matched_words.is_empty() && !Self::is_enough_results(&results, size) {
                find_steps.push(FindStep::NotEnoughResultsAddSomeDescendants);
                let total_min = min_distance.unwrap_or(0).min(fuzzy_min_distance.unwrap_or(usize::MAX));
                let total_min = if total_min == usize::MAX { 0 } else { total_min };
                self.add_descendants_to_results(new_node, size, &matched_words, &mut results, total_min + 1);
            }
        }

        (results, find_steps)
    }

    fn is_enough_results(results: &BTreeMap<usize, Vec<Vec<String>>>, size: usize) -> bool {
        results.values().map(|v| v.len()).sum::<usize>() >= size
    }

    fn add_descendants_to_results(
        &self,
        node: NodeId,
        size: usize,
        matched_words: &[String],
        results: &mut BTreeMap<usize, Vec<Vec<String>>>,
        distance: usize,
    ) {
        let descendant_words = self.graph.descendants(node, size);
        let extended = extend_and_repeat(matched_words, &descendant_words);
        if !extended.is_empty() {
            results.entry(distance).or_default().extend(extended);
        }
    }

    /// Greedy consumption of `word` into known tokens, resetting to the
    /// root at each space. Runs the two-pass prefix autofill algorithm: a
    /// second walk re-runs from the root using
    /// `matched_prefix_of_last_word + rest_of_word` whenever progress was
    /// made, to recover tokens that start partway through an unmatched
    /// prefix.
    fn prefix_autofill(
        &self,
        word: &str,
        node: Option<NodeId>,
    ) -> (String, String, NodeId, Vec<String>) {
        let mut matched_words: Vec<String> = Vec::new();
        let mut matched_words_set: HashSet<String> = HashSet::new();
        let mut add_words = |words: Vec<String>, matched_words: &mut Vec<String>, matched_words_set: &mut HashSet<String>| -> bool {
            let mut added = false;
            for w in words {
                if matched_words_set.insert(w.clone()) {
                    matched_words.push(w);
                    added = true;
                }
            }
            added
        };

        let (mut matched_prefix, mut rest, mut cur_node, part_words) = self.prefix_autofill_part(word, node);
        add_words(part_words, &mut matched_words, &mut matched_words_set);

        let mut result = (matched_prefix.clone(), rest.clone(), cur_node, matched_words.clone());
        let mut len_prev_rest = usize::MAX;
        let mut len_rest = rest.chars().count();

        while len_rest > 0 && len_rest < len_prev_rest {
            let combined = format!("{}{}", matched_prefix, rest);
            let combined = combined.trim();
            len_prev_rest = len_rest;
            let (next_prefix, next_rest, next_node, part_words) = self.prefix_autofill_part(combined, Some(ROOT));
            matched_prefix = next_prefix;
            rest = next_rest;
            cur_node = next_node;
            let added = add_words(part_words, &mut matched_words, &mut matched_words_set);
            if !added {
                break;
            }
            len_rest = rest.chars().count();
            result = (matched_prefix.clone(), rest.clone(), cur_node, matched_words.clone());
        }

        result
    }

    fn prefix_autofill_part(&self, word: &str, node: Option<NodeId>) -> (String, String, NodeId, Vec<String>) {
        let mut node = node.unwrap_or(ROOT);
        let mut queue: VecDeque<char> = word.chars().collect();
        let mut matched_prefix = String::new();
        let mut matched_words: Vec<String> = Vec::new();

        while let Some(c) = queue.pop_front() {
            if !self.graph.node(node).children.is_empty() {
                match self.graph.node(node).children.get(&c) {
                    None => {
                        queue.push_front(c);
                        break;
                    }
                    Some(&next) => {
                        node = next;
                    }
                }
                if c != ' ' || !matched_prefix.is_empty() {
                    matched_prefix.push(c);
                }
                if let Some(value) = self.graph.node(node).value() {
                    let commit = match queue.front() {
                        Some(&next_char) => next_char == ' ',
                        None => true,
                    };
                    if commit {
                        matched_prefix.clear();
                        matched_words.push(value.to_string());
                    }
                }
            } else if c == ' ' {
                node = ROOT;
            } else {
                queue.push_front(c);
                break;
            }
        }

        if queue.is_empty() {
            if let Some(value) = self.graph.node(node).value() {
                matched_prefix.clear();
                matched_words.push(value.to_string());
            }
        }

        let rest_of_word: String = queue.into_iter().collect();
        (matched_prefix, rest_of_word, node, matched_words)
    }

    /// Sets or increments `count` on the word record for `word`, returning
    /// the new value. Returns `None` if `word` is absent (a not-found
    /// sentinel, never an `Error`).
    pub fn update_count(&mut self, word: &str, count: Option<u64>, offset: Option<i64>) -> Option<u64> {
        let record = self.words.get(word)?;
        let new_count = match (count, offset) {
            (Some(c), _) => c,
            (None, Some(o)) => (record.count() as i64 + o).max(0) as u64,
            (None, None) => record.count(),
        };
        let updated = record.with_count(new_count);
        self.words.insert(word.to_string(), updated);
        Some(new_count)
    }

    pub fn count_of(&self, word: &str) -> u64 {
        self.words.get(word).map(|r| r.count()).unwrap_or(0)
    }

    pub fn get_word_context(&self, word: &str) -> Option<&dyn WordRecord> {
        self.words.get(word).map(|b| b.as_ref())
    }

    /// Flattens `search`'s paths into a single ordered, de-duplicated token
    /// list. Once a token is a full-stop word, the rest of its path is not
    /// appended.
    pub fn get_tokens_flat_list(&self, word: &str, max_cost: usize, size: usize) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::new();
        for path in self.search(word, max_cost, size) {
            for token in path {
                let is_full_stop = self.full_stop_words.contains(&token);
                if seen.insert(token.clone()) {
                    out.push(token.clone());
                }
                if is_full_stop {
                    break;
                }
            }
        }
        out
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn node_word_matches_condition(&self, node: NodeId, condition: &dyn Fn(&dyn WordRecord) -> bool) -> bool {
        match &self.graph.node(node).word {
            Some(w) => self.words.get(w).map(|record| condition(record.as_ref())).unwrap_or(false),
            None => false,
        }
    }

    /// Returns every exact-match word (not synonym-rewritten) below `word`
    /// in the graph whose word record satisfies `condition`, up to `size`.
    /// Requires `word` to land exactly on a node (no unmatched tail) --
    /// meant for capabilities layered over `full_stop_words`, such as
    /// "find every known full-stop word nested under this prefix".
    pub fn get_all_descendent_words_for_condition(
        &self,
        word: &str,
        size: usize,
        condition: impl Fn(&dyn WordRecord) -> bool,
    ) -> Vec<String> {
        let (_prefix, rest_of_word, node, _matched) = self.prefix_autofill_part(word, None);
        if !rest_of_word.is_empty() || !self.node_word_matches_condition(node, &condition) {
            return Vec::new();
        }
        self.graph
            .descendant_nodes(node, size)
            .into_iter()
            .filter(|&id| self.node_word_matches_condition(id, &condition))
            .filter_map(|id| self.graph.node(id).word.clone())
            .collect()
    }

    pub fn is_full_stop_word(&self, word: &str) -> bool {
        self.full_stop_words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AttributeValue, MapRecord};

    fn word(key: &str) -> (String, Box<dyn WordRecord>) {
        (key.to_string(), Box::new(MapRecord::new().set_field("display", AttributeValue::Str(key.to_string()))))
    }

    fn makes_and_models() -> HashMap<String, Box<dyn WordRecord>> {
        let entries = [
            "bmw", "bmw 1 series", "bmw e28", "camry", "toyota", "toyota camry", "dyna",
            "volkswagen", "volkswagen beetle", "alfa romeo", "alfa romeo 2300", "2018", "honda",
        ];
        entries.iter().map(|k| word(k)).collect()
    }

    fn synonyms() -> HashMap<String, Vec<String>> {
        let mut m = HashMap::new();
        m.insert("bmw".to_string(), vec!["beemer".to_string()]);
        m.insert("alfa romeo".to_string(), vec!["alfa".to_string()]);
        m.insert("volkswagen".to_string(), vec!["vw".to_string()]);
        m
    }

    fn engine() -> AutoComplete {
        AutoComplete::new(
            makes_and_models(),
            Some(synonyms()),
            None,
            NormalizerConfig::default(),
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn exact_match_is_first_result() {
        let ac = engine();
        let results = ac.search("bmw", 2, 3);
        assert_eq!(results[0], vec!["bmw".to_string()]);
    }

    #[test]
    fn short_prefix_falls_back_to_descendants() {
        let ac = engine();
        let results = ac.search("camr", 3, 6);
        assert!(results.contains(&vec!["camry".to_string()]));
    }

    #[test]
    fn synonym_resolves_to_canonical_word() {
        let ac = engine();
        let results = ac.search("vw bea", 3, 3);
        assert!(results.iter().any(|p| p[0] == "volkswagen"));
    }

    #[test]
    fn empty_query_returns_empty() {
        let ac = engine();
        assert_eq!(ac.search("", 3, 3), Vec::<Vec<String>>::new());
    }

    #[test]
    fn search_is_idempotent() {
        let ac = engine();
        let first = ac.search("bmw", 2, 3);
        let second = ac.search("bmw", 2, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn results_respect_size_bound() {
        let ac = engine();
        let results = ac.search("bmw", 2, 2);
        assert!(results.len() <= 2);
    }

    #[test]
    fn update_count_on_missing_word_is_none() {
        let mut ac = engine();
        assert_eq!(ac.update_count("not-a-word", Some(5), None), None);
    }

    #[test]
    fn update_count_sets_then_offsets() {
        let mut ac = engine();
        assert_eq!(ac.update_count("bmw", Some(10), None), Some(10));
        assert_eq!(ac.update_count("bmw", None, Some(-3)), Some(7));
        assert_eq!(ac.count_of("bmw"), 7);
    }

    #[test]
    fn get_word_context_is_none_for_missing_word() {
        let ac = engine();
        assert!(ac.get_word_context("not-a-word").is_none());
    }

    #[test]
    fn rejects_synonym_key_absent_from_words() {
        let mut syns = HashMap::new();
        syns.insert("not-a-word".to_string(), vec!["alias".to_string()]);
        let err = AutoComplete::new(
            makes_and_models(),
            Some(syns),
            None,
            NormalizerConfig::default(),
            EngineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::BadInput(_)));
    }

    #[test]
    fn flat_list_stops_expanding_after_full_stop_word() {
        let ac = AutoComplete::new(
            makes_and_models(),
            Some(synonyms()),
            Some(vec!["toyota".to_string()]),
            NormalizerConfig::default(),
            EngineConfig::default(),
        )
        .unwrap();
        let flat = ac.get_tokens_flat_list("toyota camry", 2, 5);
        assert!(flat.contains(&"toyota".to_string()));
    }

    #[test]
    fn descendent_words_for_condition_filters_by_record() {
        let ac = engine();
        let under_bmw = ac.get_all_descendent_words_for_condition("bmw", 10, |_record| true);
        assert!(under_bmw.contains(&"bmw 1 series".to_string()));
        assert!(under_bmw.contains(&"bmw e28".to_string()));

        let none_match = ac.get_all_descendent_words_for_condition("bmw", 10, |_record| false);
        assert!(none_match.is_empty());
    }

    #[test]
    fn descendent_words_for_condition_is_empty_for_unmatched_prefix() {
        let ac = engine();
        let result = ac.get_all_descendent_words_for_condition("zzz", 10, |_record| true);
        assert!(result.is_empty());
    }

    #[test]
    fn exact_prefix_match_seeds_distance_zero_then_descendants() {
        let ac = engine();
        let (results, steps) = ac.find("bmw", 2, 3, 0);
        assert_eq!(results.get(&0), Some(&vec![vec!["bmw".to_string()]]));
        assert_eq!(steps, vec![FindStep::DescendantsOnly]);
        let rest: Vec<&Vec<String>> = results.get(&1).into_iter().flatten().collect();
        assert_eq!(rest.len(), 2);
        assert!(rest.contains(&&vec!["bmw 1 series".to_string()]));
        assert!(rest.contains(&&vec!["bmw e28".to_string()]));
    }

    #[test]
    fn fuzzy_partial_synonym_resolves_through_synthesized_entry() {
        let ac = engine();
        let (results, steps) = ac.find("2018 alpha", 3, 3, 0);
        assert_eq!(steps, vec![FindStep::FuzzyTry, FindStep::FuzzyFound]);
        assert_eq!(results.get(&0), Some(&vec![vec!["2018".to_string()]]));
        let fuzzy_bucket = results.values().find(|paths| {
            paths.iter().any(|p| p == &vec!["2018".to_string(), "alfa romeo".to_string()])
        });
        assert!(fuzzy_bucket.is_some());
        let bucket = fuzzy_bucket.unwrap();
        assert!(bucket.contains(&vec!["2018".to_string(), "alfa romeo 2300".to_string()]));
    }

    #[test]
    fn fuzzy_round_two_recursion_is_capped_and_traced() {
        let ac = engine();
        let (results, steps) = ac.find("2018 doyota camr", 3, 3, 0);
        assert_eq!(
            steps,
            vec![
                FindStep::FuzzyTry,
                FindStep::FuzzyFound,
                FindStep::RestOfFuzzyRound2(vec![FindStep::DescendantsOnly]),
                FindStep::NotEnoughResultsAddSomeDescendants,
            ]
        );
        assert_eq!(results.get(&0), Some(&vec![vec!["2018".to_string()]]));
        let distance_one = results.get(&1).expect("distance-1 bucket");
        assert_eq!(
            distance_one,
            &vec![
                vec!["2018".to_string(), "toyota".to_string(), "camry".to_string()],
                vec!["2018".to_string(), "dyna".to_string()],
            ]
        );
    }
}
