//! Lowercasing, character filtering, and separator collapsing for query and
//! dictionary-key cleanup. Ported from `fast_autocomplete.normalize`.

use crate::cache::LfuCache;
use std::collections::HashSet;

pub const MAX_WORD_LENGTH: usize = 40;
const NORMALIZED_CACHE_SIZE: usize = 2048;

fn default_string_chars() -> HashSet<char> {
    ('a'..='z').collect()
}

fn default_integer_chars() -> HashSet<char> {
    ('0'..='9').collect()
}

/// Character classes the normalizer is configured with. `node_name` chars
/// are always `string | integer | {' ', '-', ':', '_'}` unless overridden.
#[derive(Clone)]
pub struct NormalizerConfig {
    pub valid_chars_for_string: HashSet<char>,
    pub valid_chars_for_integer: HashSet<char>,
    pub valid_chars_for_node_name: HashSet<char>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        let string_chars = default_string_chars();
        let integer_chars = default_integer_chars();
        let mut node_name_chars: HashSet<char> = string_chars.union(&integer_chars).cloned().collect();
        node_name_chars.extend([' ', '-', ':', '_']);
        NormalizerConfig {
            valid_chars_for_string: string_chars,
            valid_chars_for_integer: integer_chars,
            valid_chars_for_node_name: node_name_chars,
        }
    }
}

/// Stateless cleanup rules plus a memoized `normalize` result cache.
pub struct Normalizer {
    config: NormalizerConfig,
    cache: LfuCache<String, String>,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Normalizer { config, cache: LfuCache::new(NORMALIZED_CACHE_SIZE) }
    }

    /// Lowercase, truncate to `MAX_WORD_LENGTH`, drop characters outside the
    /// node-name set, collapse consecutive `-` into one, strip surrounding
    /// whitespace. Does not insert letter/digit boundary spaces.
    pub fn remove_special(&self, name: Option<&str>) -> String {
        let name = match name {
            Some(n) => n,
            None => return String::new(),
        };
        let lowered: String = name.to_lowercase().chars().take(MAX_WORD_LENGTH).collect();
        let mut result = String::with_capacity(lowered.len());
        let mut prev: Option<char> = None;
        for c in lowered.chars() {
            let keep = self.config.valid_chars_for_node_name.contains(&c);
            let keep = if c == '-' && prev == Some('-') { false } else { keep };
            if keep {
                result.push(c);
            }
            prev = Some(c);
        }
        result.trim().to_string()
    }

    /// Lowercase, truncate, keep only node-name-or-extra characters, map
    /// `-` to space, insert a space at letter/digit boundaries, collapse
    /// consecutive spaces, strip. Memoized in an internal LFU cache.
    pub fn normalize(&self, name: &str, extra_chars: Option<&HashSet<char>>) -> String {
        let cache_key = match extra_chars {
            None => name.to_string(),
            Some(extra) => {
                let mut sorted: Vec<char> = extra.iter().cloned().collect();
                sorted.sort();
                format!("{}\u{0}{}", name, sorted.iter().collect::<String>())
            }
        };
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached;
        }
        let result = self.compute_normalize(name, extra_chars);
        self.cache.set(cache_key, result.clone());
        result
    }

    fn compute_normalize(&self, name: &str, extra_chars: Option<&HashSet<char>>) -> String {
        let lowered: String = name.to_lowercase().chars().take(MAX_WORD_LENGTH).collect();
        let mut result = String::with_capacity(lowered.len());
        let mut last: Option<char> = None;

        for mut c in lowered.chars() {
            let allowed = self.config.valid_chars_for_node_name.contains(&c)
                || extra_chars.map_or(false, |extra| extra.contains(&c));
            if !allowed {
                continue;
            }
            if c == '-' {
                c = ' ';
            } else {
                let digit_after_letter = self.config.valid_chars_for_integer.contains(&c)
                    && last.map_or(false, |l| self.config.valid_chars_for_string.contains(&l));
                let letter_after_digit = self.config.valid_chars_for_string.contains(&c)
                    && last.map_or(false, |l| self.config.valid_chars_for_integer.contains(&l));
                if digit_after_letter || letter_after_digit {
                    result.push(' ');
                }
            }
            if !(c == ' ' && last == Some(' ')) {
                result.push(c);
                last = Some(c);
            }
        }
        result.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(NormalizerConfig::default())
    }

    #[test]
    fn hyphen_becomes_space() {
        assert_eq!(normalizer().normalize("type-r", None), "type r");
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalizer().normalize("HONDA and Toyota!", None), "honda and toyota");
    }

    #[test]
    fn inserts_letter_digit_boundary() {
        assert_eq!(normalizer().normalize("bmw? \\#1", None), "bmw 1");
    }

    #[test]
    fn extra_chars_are_kept() {
        let extra: HashSet<char> = ['#'].iter().cloned().collect();
        assert_eq!(normalizer().normalize("bmw? \\#", Some(&extra)), "bmw #");
    }

    #[test]
    fn remove_special_keeps_hyphen() {
        assert_eq!(normalizer().remove_special(Some("type-r")), "type-r");
    }

    #[test]
    fn remove_special_handles_none() {
        assert_eq!(normalizer().remove_special(None), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = normalizer();
        let once = n.normalize("HONDA and Toyota! -- type-r #42", None);
        let twice = n.normalize(&once, None);
        assert_eq!(once, twice);
    }
}
