// src/generators/wordlist.rs
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;
use tokio::sync::RwLock;

/// Built-in list used whenever the configured corpus cannot be loaded.
const FALLBACK_WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    "india", "juliet", "kilo", "lima", "mike", "november", "oscar", "papa",
    "quebec", "romeo", "sierra", "tango", "uniform", "victor", "whiskey",
    "xray", "yankee", "zulu", "cloud", "river", "stone", "light", "shadow",
    "ember", "crystal", "silver", "gold", "iron", "copper", "wolf", "eagle",
    "tiger", "lion", "bear", "leaf", "oak", "pine", "maple", "jade", "onyx",
    "pearl", "amber", "storm", "wind", "rain", "snow", "fire", "earth", "sky",
];

const MIN_WORD_LENGTH: usize = 3;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Word list contains no usable words")]
    Empty,
}

/// Immutable, non-empty list of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

// Never empty: `parse` rejects an empty list.
#[allow(clippy::len_without_is_empty)]
impl WordList {
    /// Parse a newline-separated corpus, keeping trimmed lines of at least
    /// three ASCII lowercase letters.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|w| w.len() >= MIN_WORD_LENGTH && w.chars().all(|c| c.is_ascii_lowercase()))
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(WordList { words })
    }

    pub fn fallback() -> Self {
        WordList {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Word at `index`. Callers draw indices below [`WordList::len`].
    pub fn get(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Where the passphrase corpus comes from.
#[derive(Debug, Clone)]
pub enum WordOrigin {
    Url { url: String, timeout: Duration },
    File(PathBuf),
    Builtin,
}

/// Holds the resolved word list for the lifetime of its owner.
///
/// Empty until the first resolution; dropped together with the
/// [`WordSource`] (or the server state) that owns it.
#[derive(Debug, Default)]
pub struct WordListCache {
    inner: RwLock<Option<Arc<WordList>>>,
}

impl WordListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<WordList>> {
        self.inner.read().await.clone()
    }

    /// Store `list` unless another caller got there first, and return the
    /// list that ends up cached.
    pub async fn set_if_empty(&self, list: WordList) -> Arc<WordList> {
        let mut guard = self.inner.write().await;
        match guard.as_ref() {
            Some(existing) => Arc::clone(existing),
            None => {
                let list = Arc::new(list);
                *guard = Some(Arc::clone(&list));
                list
            }
        }
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// Resolves the passphrase word list, caching the result.
#[derive(Debug, Clone)]
pub struct WordSource {
    origin: WordOrigin,
    cache: Arc<WordListCache>,
}

impl WordSource {
    pub fn new(origin: WordOrigin, cache: Arc<WordListCache>) -> Self {
        WordSource { origin, cache }
    }

    /// Return the cached list, loading it on first use.
    ///
    /// Load failures are logged and replaced by the built-in list, which is
    /// then cached like any other result. Concurrent first calls may each
    /// load; whichever finishes first wins and the others adopt its list.
    pub async fn ensure_word_list(&self) -> Arc<WordList> {
        if let Some(list) = self.cache.get().await {
            return list;
        }

        let list = match self.load().await {
            Ok(list) => {
                info!("📚 Loaded {} words from {:?}", list.len(), self.origin);
                list
            }
            Err(e) => {
                warn!("⚠️ Using fallback word list: {}", e);
                WordList::fallback()
            }
        };

        self.cache.set_if_empty(list).await
    }

    /// Forget the cached list so the next call reloads it.
    pub async fn refresh(&self) {
        debug!("🔄 Clearing cached word list");
        self.cache.clear().await;
    }

    pub async fn cached_len(&self) -> Option<usize> {
        self.cache.get().await.map(|list| list.len())
    }

    async fn load(&self) -> Result<WordList, WordListError> {
        match &self.origin {
            WordOrigin::Url { url, timeout } => {
                debug!("🌐 Fetching word list from {}", url);
                let client = reqwest::Client::builder().timeout(*timeout).build()?;
                let text = client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                WordList::parse(&text)
            }
            WordOrigin::File(path) => {
                debug!("📄 Reading word list from {}", path.display());
                let text = tokio::fs::read_to_string(path).await?;
                WordList::parse(&text)
            }
            WordOrigin::Builtin => Ok(WordList::fallback()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn fallback_words_are_valid() {
        let list = WordList::fallback();
        assert_eq!(list.len(), 57);
        assert!(list
            .iter()
            .all(|w| w.len() >= 3 && w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn parse_filters_invalid_lines() {
        let list = WordList::parse("apple\n  banana \nok\nCherry\nkiwi2\n\ndate\r\n").unwrap();
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["apple", "banana", "date"]);
    }

    #[test]
    fn parse_rejects_empty_result() {
        assert!(matches!(WordList::parse("a\nBB\n12\n"), Err(WordListError::Empty)));
    }

    #[tokio::test]
    async fn loads_words_from_file() {
        let file = corpus("granite\nmarble\nquartz\n");
        let source = WordSource::new(
            WordOrigin::File(file.path().to_path_buf()),
            Arc::new(WordListCache::new()),
        );

        let list = source.ensure_word_list().await;

        assert_eq!(list.len(), 3);
        assert!(list.contains("marble"));
        assert_eq!(source.cached_len().await, Some(3));
    }

    #[tokio::test]
    async fn missing_file_falls_back() {
        let source = WordSource::new(
            WordOrigin::File(PathBuf::from("/nonexistent/passforge/words.txt")),
            Arc::new(WordListCache::new()),
        );

        let list = source.ensure_word_list().await;

        assert_eq!(*list, WordList::fallback());
    }

    #[tokio::test]
    async fn unusable_file_falls_back() {
        let file = corpus("A\nBB\n123\n");
        let source = WordSource::new(
            WordOrigin::File(file.path().to_path_buf()),
            Arc::new(WordListCache::new()),
        );

        assert_eq!(*source.ensure_word_list().await, WordList::fallback());
    }

    #[tokio::test]
    async fn unreachable_url_falls_back() {
        let source = WordSource::new(
            WordOrigin::Url {
                url: "http://127.0.0.1:9/wordlist.txt".to_string(),
                timeout: Duration::from_secs(2),
            },
            Arc::new(WordListCache::new()),
        );

        assert_eq!(*source.ensure_word_list().await, WordList::fallback());
    }

    #[tokio::test]
    async fn cached_list_survives_source_removal() {
        let file = corpus("granite\nmarble\n");
        let path = file.path().to_path_buf();
        let source = WordSource::new(WordOrigin::File(path), Arc::new(WordListCache::new()));

        let first = source.ensure_word_list().await;
        drop(file);
        let second = source.ensure_word_list().await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn refresh_reloads_the_corpus() {
        let mut file = corpus("granite\n");
        let source = WordSource::new(
            WordOrigin::File(file.path().to_path_buf()),
            Arc::new(WordListCache::new()),
        );
        assert_eq!(source.ensure_word_list().await.len(), 1);

        file.write_all(b"marble\n").unwrap();
        file.flush().unwrap();
        source.refresh().await;

        assert_eq!(source.cached_len().await, None);
        assert_eq!(source.ensure_word_list().await.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_callers_converge() {
        let file = corpus("granite\nmarble\nquartz\nbasalt\n");
        let cache = Arc::new(WordListCache::new());
        let source = WordSource::new(WordOrigin::File(file.path().to_path_buf()), Arc::clone(&cache));

        let lists = futures::future::join_all((0..8).map(|_| source.ensure_word_list())).await;

        let cached = cache.get().await.unwrap();
        for list in lists {
            assert_eq!(*list, *cached);
        }
    }

    #[tokio::test]
    async fn builtin_origin_needs_no_io() {
        let source = WordSource::new(WordOrigin::Builtin, Arc::new(WordListCache::new()));
        assert_eq!(source.ensure_word_list().await.len(), 57);
    }
}
