//! Swappable data-source boundary: the engine's constructor takes plain
//! in-memory collections, and this module is how those collections get
//! built from JSON files (with an optional gzip-compressed external-cache
//! fast path). Ported from `fast_autocomplete.loader`, which reads local
//! JSON dumps and optionally fronts them with a Redis cache.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::record::{AttributeValue, TupleRecord, WordRecord};

/// Where a piece of engine input lives on disk, and whether its strings
/// should be interned to cut down on duplicate display/context values.
pub struct ContentFileSpec {
    pub path: PathBuf,
    pub compress: bool,
}

impl ContentFileSpec {
    pub fn new(path: impl Into<PathBuf>, compress: bool) -> Self {
        ContentFileSpec { path: path.into(), compress }
    }
}

/// Everything `AutoComplete::new` needs, assembled from one or more
/// `ContentFileSpec`s.
pub struct EngineInput {
    pub words: HashMap<String, Box<dyn WordRecord>>,
    pub synonyms: Option<HashMap<String, Vec<String>>>,
    pub full_stop_words: Option<Vec<String>>,
}

/// A source of the three JSON documents an engine is built from. Kept
/// narrow and swappable so tests can provide an in-memory fake.
pub trait Loader {
    fn load_words(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Box<dyn WordRecord>>>;
    fn load_synonyms(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Vec<String>>>;
    fn load_full_stop_words(&self, spec: &ContentFileSpec) -> Result<Vec<String>>;
}

fn read_file(path: &std::path::Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::LoaderIo(format!("{}: {}", path.display(), e)))
}

/// Interns repeated string values behind a content hash, matching
/// `loader._simple_compress`'s "first writer wins" dedup strategy.
fn simple_compress(item: String, seen: &mut HashMap<u64, String>) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    let digest = hasher.finish();
    match seen.get(&digest) {
        Some(existing) => existing.clone(),
        None => {
            seen.insert(digest, item.clone());
            item
        }
    }
}

/// Reads word/synonym/full-stop-word documents straight off the local
/// filesystem as JSON, the loader's baseline (non-cached) behavior.
pub struct JsonFileLoader;

impl Loader for JsonFileLoader {
    /// Word JSON shape: `{ "word": [context, display, count] }`, matching
    /// `WordValue`'s first three fields -- `original_key` is never present
    /// in the source file, it is always stamped on later by the engine's
    /// partial-synonym expansion.
    fn load_words(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Box<dyn WordRecord>>> {
        let raw = read_file(&spec.path)?;
        let parsed: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| Error::BadInput(format!("invalid words JSON: {}", e)))?;
        let object = parsed
            .as_object()
            .ok_or_else(|| Error::BadInput("words document must be a JSON object".to_string()))?;

        let mut seen: HashMap<u64, String> = HashMap::new();
        let mut words = HashMap::new();
        for (word, entry) in object {
            let tuple = entry
                .as_array()
                .ok_or_else(|| Error::BadInput(format!("word '{}' must map to a 3-item array", word)))?;
            if tuple.len() < 3 {
                return Err(Error::BadInput(format!("word '{}' entry is missing context/display/count", word)));
            }
            let context = serde_json::to_string(&tuple[0]).unwrap_or_default();
            let mut display = tuple[1].as_str().unwrap_or_default().to_string();
            let count = tuple[2].as_u64().unwrap_or(0);

            if spec.compress {
                display = simple_compress(display, &mut seen);
            }

            words.insert(
                word.clone(),
                Box::new(TupleRecord { context, display, count, original_key: None }) as Box<dyn WordRecord>,
            );
        }
        Ok(words)
    }

    fn load_synonyms(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Vec<String>>> {
        let raw = read_file(&spec.path)?;
        serde_json::from_str(&raw).map_err(|e| Error::BadInput(format!("invalid synonyms JSON: {}", e)))
    }

    fn load_full_stop_words(&self, spec: &ContentFileSpec) -> Result<Vec<String>> {
        let raw = read_file(&spec.path)?;
        serde_json::from_str(&raw).map_err(|e| Error::BadInput(format!("invalid full_stop_words JSON: {}", e)))
    }
}

/// A key/value store the loader can check before touching the local
/// filesystem, standing in for the original's optional Redis client.
pub trait ExternalCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&self, key: &str, value: &[u8]);
}

fn gzip_compress(data: &str) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes())?;
    encoder.finish()
}

fn gzip_decompress(data: &[u8]) -> std::io::Result<String> {
    let mut decoder = GzDecoder::new(data);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}

/// Wraps a `Loader` with a gzip-compressed `ExternalCache` fast path: a
/// cache hit skips the filesystem read entirely; a cache miss, corrupt
/// entry, or absent cache all fall back to `inner` and log a warning
/// rather than fail the load.
pub struct CachedLoader<L: Loader> {
    inner: L,
    cache: Option<Box<dyn ExternalCache>>,
    key_prefix: String,
}

impl<L: Loader> CachedLoader<L> {
    pub fn new(inner: L, cache: Option<Box<dyn ExternalCache>>, key_prefix: impl Into<String>) -> Self {
        CachedLoader { inner, cache, key_prefix: key_prefix.into() }
    }

    fn cache_key(&self, spec: &ContentFileSpec) -> String {
        let filename = spec
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.key_prefix.replace("{}", &filename)
    }

    fn cached_document(&self, spec: &ContentFileSpec) -> Option<String> {
        let cache = self.cache.as_ref()?;
        let compressed = cache.get(&self.cache_key(spec))?;
        match gzip_decompress(&compressed) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("unable to decompress cached content for {}: {}", spec.path.display(), e);
                None
            }
        }
    }

    /// Writes the local file's contents into the external cache, gzip
    /// compressed, mirroring `loader.populate_redis`.
    pub fn populate_cache(&self, spec: &ContentFileSpec) -> Result<()> {
        let cache = match self.cache.as_ref() {
            Some(c) => c,
            None => return Ok(()),
        };
        let raw = read_file(&spec.path)?;
        let compressed = gzip_compress(&raw)
            .map_err(|e| Error::LoaderIo(format!("gzip compression failed: {}", e)))?;
        cache.set(&self.cache_key(spec), &compressed);
        Ok(())
    }
}

impl<L: Loader> Loader for CachedLoader<L> {
    fn load_words(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Box<dyn WordRecord>>> {
        if let Some(text) = self.cached_document(spec) {
            let parsed: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| Error::BadInput(format!("invalid cached words JSON: {}", e)))?;
            if let Some(object) = parsed.as_object() {
                let mut words = HashMap::new();
                let mut seen: HashMap<u64, String> = HashMap::new();
                for (word, entry) in object {
                    if let Some(tuple) = entry.as_array() {
                        if tuple.len() >= 3 {
                            let context = serde_json::to_string(&tuple[0]).unwrap_or_default();
                            let mut display = tuple[1].as_str().unwrap_or_default().to_string();
                            let count = tuple[2].as_u64().unwrap_or(0);
                            if spec.compress {
                                display = simple_compress(display, &mut seen);
                            }
                            words.insert(
                                word.clone(),
                                Box::new(TupleRecord { context, display, count, original_key: None })
                                    as Box<dyn WordRecord>,
                            );
                        }
                    }
                }
                return Ok(words);
            }
        }
        self.inner.load_words(spec)
    }

    fn load_synonyms(&self, spec: &ContentFileSpec) -> Result<HashMap<String, Vec<String>>> {
        if let Some(text) = self.cached_document(spec) {
            if let Ok(parsed) = serde_json::from_str(&text) {
                return Ok(parsed);
            }
        }
        self.inner.load_synonyms(spec)
    }

    fn load_full_stop_words(&self, spec: &ContentFileSpec) -> Result<Vec<String>> {
        if let Some(text) = self.cached_document(spec) {
            if let Ok(parsed) = serde_json::from_str(&text) {
                return Ok(parsed);
            }
        }
        self.inner.load_full_stop_words(spec)
    }
}

/// Loads words, and optionally synonyms/full-stop-words, into one
/// `EngineInput` ready to hand to `AutoComplete::new`.
pub fn load_engine_input(
    loader: &dyn Loader,
    words: &ContentFileSpec,
    synonyms: Option<&ContentFileSpec>,
    full_stop_words: Option<&ContentFileSpec>,
) -> Result<EngineInput> {
    Ok(EngineInput {
        words: loader.load_words(words)?,
        synonyms: synonyms.map(|s| loader.load_synonyms(s)).transpose()?,
        full_stop_words: full_stop_words.map(|s| loader.load_full_stop_words(s)).transpose()?,
    })
}
