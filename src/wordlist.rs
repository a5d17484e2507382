//! Wordlists and the memoizing provider that serves them
//!
//! A [`Wordlist`] is exactly 2048 distinct words in canonical order. Sources
//! produce wordlists on demand ([`BuiltinSource`] from the lists bundled with
//! the `bip39` crate, [`DirectorySource`] from `<dir>/<language>.txt` files),
//! and a [`WordlistCache`] memoizes them per language tag so each list is
//! built at most once per process, even under concurrent first access.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use crate::bits::WORDLIST_LEN;
use crate::error::{Error, Result};

/// Language tag used when none is given
pub const DEFAULT_LANGUAGE: &str = "english";

/// Language tags served by [`BuiltinSource`]
pub const BUILTIN_LANGUAGES: &[&str] = &[
    "english",
    "chinese-simplified",
    "chinese-traditional",
    "czech",
    "french",
    "italian",
    "japanese",
    "korean",
    "spanish",
];

/// An ordered list of 2048 distinct words with reverse lookup
#[derive(Debug)]
pub struct Wordlist {
    language: String,
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Builds a wordlist from words in canonical order
    ///
    /// # Errors
    /// Returns [`Error::IncompleteWordlist`] if the source does not yield
    /// exactly 2048 distinct words
    pub fn from_words<I, S>(language: &str, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(Error::IncompleteWordlist {
                language: language.to_string(),
                count: words.len(),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (position, word) in words.iter().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "position < 2048 was checked above"
            )]
            let position = position as u16;
            index.insert(word.clone(), position);
        }
        if index.len() != WORDLIST_LEN {
            return Err(Error::IncompleteWordlist {
                language: language.to_string(),
                count: index.len(),
            });
        }

        Ok(Self {
            language: language.to_string(),
            words,
            index,
        })
    }

    /// Reads a newline-delimited wordlist
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    /// Returns [`Error::WordlistUnavailable`] on a read failure and
    /// [`Error::IncompleteWordlist`] if the word count is not 2048
    pub fn from_reader<R: BufRead>(language: &str, reader: R) -> Result<Self> {
        let mut words = Vec::with_capacity(WORDLIST_LEN);
        for line in reader.lines() {
            let line = line.map_err(|e| Error::WordlistUnavailable {
                language: language.to_string(),
                reason: e.to_string(),
            })?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Self::from_words(language, words)
    }

    /// Language tag this list was loaded for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Word at `index`
    ///
    /// # Errors
    /// Returns [`Error::InternalInvariant`] if `index` is 2048 or larger
    pub fn word_at(&self, index: u16) -> Result<&str> {
        self.words
            .get(usize::from(index))
            .map(String::as_str)
            .ok_or(Error::InternalInvariant("word index out of range"))
    }

    /// Index of `word`, falling back to a lowercase match
    ///
    /// # Errors
    /// Returns [`Error::UnknownWord`] if the word is not in the list
    pub fn index_of(&self, word: &str) -> Result<u16> {
        if let Some(&index) = self.index.get(word) {
            return Ok(index);
        }
        self.index
            .get(word.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Words starting with `prefix`, in list order
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| word.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    /// All words in canonical order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Produces a wordlist for a language tag
pub trait WordlistSource: Send + Sync {
    /// Loads the list for `language`
    ///
    /// # Errors
    /// Returns a wordlist error if the language cannot be served
    fn load(&self, language: &str) -> Result<Wordlist>;
}

/// Serves the canonical BIP39 lists bundled with the `bip39` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    fn bundled(language: &str) -> Option<bip39::Language> {
        use bip39::Language;

        match language {
            "english" => Some(Language::English),
            "chinese-simplified" => Some(Language::SimplifiedChinese),
            "chinese-traditional" => Some(Language::TraditionalChinese),
            "czech" => Some(Language::Czech),
            "french" => Some(Language::French),
            "italian" => Some(Language::Italian),
            "japanese" => Some(Language::Japanese),
            "korean" => Some(Language::Korean),
            "spanish" => Some(Language::Spanish),
            _ => None,
        }
    }
}

impl WordlistSource for BuiltinSource {
    fn load(&self, language: &str) -> Result<Wordlist> {
        let bundled = Self::bundled(language)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))?;
        Wordlist::from_words(language, bundled.word_list().iter().copied())
    }
}

/// Reads `<dir>/<language>.txt` newline-delimited wordlists
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, language: &str) -> Result<PathBuf> {
        let plain = !language.is_empty()
            && language
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !plain {
            return Err(Error::UnsupportedLanguage(language.to_string()));
        }
        Ok(self.dir.join(format!("{language}.txt")))
    }
}

impl WordlistSource for DirectorySource {
    fn load(&self, language: &str) -> Result<Wordlist> {
        let path = self.path_for(language)?;
        let file = File::open(&path).map_err(|e| Error::WordlistUnavailable {
            language: language.to_string(),
            reason: format!("{}: {e}", path.display()),
        })?;
        Wordlist::from_reader(language, BufReader::new(file))
    }
}

/// Resolves a language tag to a shared wordlist
pub trait WordlistProvider: Send + Sync {
    /// Returns the list for `language`
    ///
    /// # Errors
    /// Returns a wordlist error if the language cannot be served
    fn wordlist(&self, language: &str) -> Result<Arc<Wordlist>>;
}

/// Memoizing provider keyed by language tag
///
/// Each tag owns a cell that is initialized at most once. Concurrent first
/// callers for the same tag block on that cell and all observe the same
/// fully built list. A failed load leaves the cell empty, so the next caller
/// retries the source.
pub struct WordlistCache<S> {
    source: S,
    cells: RwLock<HashMap<String, Arc<OnceCell<Arc<Wordlist>>>>>,
}

impl<S: WordlistSource> WordlistCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cells: RwLock::new(HashMap::new()),
        }
    }

    fn cell(&self, language: &str) -> Arc<OnceCell<Arc<Wordlist>>> {
        if let Some(cell) = self
            .cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
        {
            return Arc::clone(cell);
        }
        let mut cells = self.cells.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cells.entry(language.to_string()).or_default())
    }

    /// Drops the cell for `language` after a failed load
    ///
    /// Cells are only handed out under the lock, so a strong count of two
    /// (the map and `cell`) means no other caller is waiting on it.
    fn forget_failed(&self, language: &str, cell: &Arc<OnceCell<Arc<Wordlist>>>) {
        let mut cells = self.cells.write().unwrap_or_else(PoisonError::into_inner);
        let unused = cells.get(language).is_some_and(|stored| {
            Arc::ptr_eq(stored, cell) && stored.get().is_none() && Arc::strong_count(cell) == 2
        });
        if unused {
            cells.remove(language);
        }
    }
}

impl<S: WordlistSource> WordlistProvider for WordlistCache<S> {
    fn wordlist(&self, language: &str) -> Result<Arc<Wordlist>> {
        let language = normalize_language(language);
        let cell = self.cell(&language);
        if let Some(list) = cell.get() {
            trace!(%language, "wordlist cache hit");
            return Ok(Arc::clone(list));
        }
        let loaded = cell
            .get_or_try_init(|| {
                debug!(%language, "loading wordlist");
                self.source.load(&language).map(Arc::new)
            })
            .map(Arc::clone);
        if loaded.is_err() {
            self.forget_failed(&language, &cell);
        }
        loaded
    }
}

impl<S> std::fmt::Debug for WordlistCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded: Vec<String> = self
            .cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, cell)| cell.get().is_some())
            .map(|(language, _)| language.clone())
            .collect();
        f.debug_struct("WordlistCache")
            .field("loaded", &loaded)
            .finish_non_exhaustive()
    }
}

/// Lowercased, trimmed language tag
#[must_use]
pub fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

static DEFAULT_PROVIDER: LazyLock<Arc<WordlistCache<BuiltinSource>>> =
    LazyLock::new(|| Arc::new(WordlistCache::new(BuiltinSource)));

/// Process-wide cache over the bundled lists
#[must_use]
pub fn default_provider() -> Arc<dyn WordlistProvider> {
    Arc::clone(&*DEFAULT_PROVIDER) as Arc<dyn WordlistProvider>
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl WordlistSource for CountingSource {
        fn load(&self, language: &str) -> Result<Wordlist> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            BuiltinSource.load(language)
        }
    }

    struct FailingSource;

    impl WordlistSource for FailingSource {
        fn load(&self, language: &str) -> Result<Wordlist> {
            Err(Error::WordlistUnavailable {
                language: language.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    fn numbered_words(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_builtin_english_endpoints() {
        let list = BuiltinSource.load("english").unwrap();
        assert_eq!(list.word_at(0).unwrap(), "abandon");
        assert_eq!(list.word_at(3).unwrap(), "about");
        assert_eq!(list.word_at(2047).unwrap(), "zoo");
        assert_eq!(list.index_of("zoo").unwrap(), 2047);
    }

    #[test]
    fn test_every_builtin_language_loads() {
        for language in BUILTIN_LANGUAGES {
            let list = BuiltinSource.load(language).unwrap();
            assert_eq!(list.words().len(), 2048);
            assert_eq!(list.language(), *language);
        }
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(
            BuiltinSource.load("klingon").unwrap_err(),
            Error::UnsupportedLanguage("klingon".to_string())
        );
    }

    #[test]
    fn test_index_of_is_case_insensitive() {
        let list = BuiltinSource.load("english").unwrap();
        assert_eq!(list.index_of("About").unwrap(), 3);
        assert_eq!(
            list.index_of("aboutt").unwrap_err(),
            Error::UnknownWord("aboutt".to_string())
        );
    }

    #[test]
    fn test_word_at_out_of_range() {
        let list = BuiltinSource.load("english").unwrap();
        assert!(list.word_at(2048).is_err());
    }

    #[test]
    fn test_from_words_rejects_wrong_count() {
        let err = Wordlist::from_words("test", numbered_words(2047)).unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteWordlist {
                language: "test".to_string(),
                count: 2047
            }
        );
    }

    #[test]
    fn test_from_words_rejects_duplicates() {
        let mut words = numbered_words(2048);
        words[10] = "w0".to_string();
        let err = Wordlist::from_words("test", words).unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteWordlist {
                language: "test".to_string(),
                count: 2047
            }
        );
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let text = format!("\n{}\n\n", numbered_words(2048).join("\n  "));
        let list = Wordlist::from_reader("test", text.as_bytes()).unwrap();
        assert_eq!(list.word_at(5).unwrap(), "w5");
    }

    #[test]
    fn test_words_with_prefix() {
        let list = BuiltinSource.load("english").unwrap();
        assert_eq!(list.words_with_prefix("zo"), vec!["zone", "zoo"]);
        assert!(list.words_with_prefix("qq").is_empty());
    }

    #[test]
    fn test_directory_source_rejects_path_like_tags() {
        let source = DirectorySource::new("/nonexistent");
        assert_eq!(
            source.load("../english").unwrap_err(),
            Error::UnsupportedLanguage("../english".to_string())
        );
    }

    #[test]
    fn test_directory_source_missing_file() {
        let source = DirectorySource::new("/nonexistent");
        assert!(matches!(
            source.load("english"),
            Err(Error::WordlistUnavailable { .. })
        ));
    }

    #[test]
    fn test_cache_loads_once_under_concurrency() {
        let cache = WordlistCache::new(CountingSource {
            loads: AtomicUsize::new(0),
        });

        let lists: Vec<Arc<Wordlist>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.wordlist("english").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 1);
        for list in &lists {
            assert!(Arc::ptr_eq(list, &lists[0]));
            assert_eq!(list.words().len(), 2048);
        }
    }

    #[test]
    fn test_cache_normalizes_tags() {
        let cache = WordlistCache::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        let a = cache.wordlist("English").unwrap();
        let b = cache.wordlist(" english ").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_does_not_store_failures() {
        let cache = WordlistCache::new(FailingSource);
        assert!(cache.wordlist("english").is_err());
        assert!(cache.wordlist("english").is_err());
        assert!(format!("{cache:?}").contains("loaded: []"));
    }

    #[test]
    fn test_cache_forgets_failed_tags() {
        let cache = WordlistCache::new(BuiltinSource);
        for i in 0..100 {
            assert!(cache.wordlist(&format!("x{i}")).is_err());
        }
        assert!(cache.cells.read().unwrap().is_empty());

        cache.wordlist("english").unwrap();
        assert!(cache.wordlist("klingon").is_err());
        let cells = cache.cells.read().unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains_key("english"));
    }

    #[test]
    fn test_default_provider_is_shared() {
        let a = default_provider().wordlist("english").unwrap();
        let b = default_provider().wordlist("english").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
