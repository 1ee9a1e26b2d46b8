//! In-memory multi-word autocomplete: a shared-prefix graph with synonym
//! merging, Levenshtein-bounded fuzzy fallback, and an LFU-cached result
//! path.

pub mod cache;
pub mod error;
pub mod graph;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod search;
pub mod synonyms;

pub use cache::LfuCache;
pub use error::{Error, Result};
pub use loader::{CachedLoader, ContentFileSpec, EngineInput, ExternalCache, JsonFileLoader, Loader};
pub use normalize::{Normalizer, NormalizerConfig};
pub use record::{AttributeValue, MapRecord, TupleRecord, WordRecord};
pub use search::{AutoComplete, EngineConfig, FindStep};
pub use synonyms::SynonymTable;
