//! Type-set selection and search dispatch
//!
//! A search request names a free-text query and an optional subset of entity
//! kinds. [`TypeSet`] parses the client's comma-separated kind list and
//! [`search_library`] fans the query out to the store for exactly the selected
//! kinds, in a fixed order, stopping at the first failure.

use crate::error::Result;
use crate::store::MusicStore;
use crate::types::{Album, Artist, Folder, Song};
use serde::Serialize;
use std::collections::HashSet;

/// A searchable entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Artists,
    Albums,
    Songs,
    Folders,
}

impl SearchKind {
    /// All kinds, in dispatch order
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Artists,
        SearchKind::Albums,
        SearchKind::Songs,
        SearchKind::Folders,
    ];

    /// Parse a single client-supplied type token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "artists" => Some(SearchKind::Artists),
            "albums" => Some(SearchKind::Albums),
            "songs" => Some(SearchKind::Songs),
            "folders" => Some(SearchKind::Folders),
            _ => None,
        }
    }
}

/// The set of entity kinds a search should cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSet(HashSet<SearchKind>);

impl TypeSet {
    /// The full universe of kinds
    pub fn all() -> Self {
        Self(SearchKind::ALL.into_iter().collect())
    }

    /// Parse a comma-separated list of type tokens
    ///
    /// An empty string selects every kind. Unrecognized tokens are dropped
    /// silently, so an input naming only unknown kinds yields an empty set,
    /// which means "search nothing" rather than an error.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::all();
        }

        Self(raw.split(',').filter_map(SearchKind::from_token).collect())
    }

    /// Whether the given kind is selected
    pub fn contains(&self, kind: SearchKind) -> bool {
        self.0.contains(&kind)
    }

    /// Whether no kind is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Aggregated search results
///
/// Each field is `None` when its kind was not requested and `Some` (possibly
/// empty) when it was. Fields that were not requested are omitted from the
/// serialized form entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<Artist>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<Song>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<Folder>>,
}

/// Run a library search across the selected kinds
///
/// Dispatches to the store in the fixed order artists, albums, songs,
/// folders, skipping kinds outside `types`. The first store failure aborts
/// the remaining lookups and propagates; partial results are never returned
/// alongside an error.
pub async fn search_library(
    store: &dyn MusicStore,
    query: &str,
    types: &TypeSet,
) -> Result<SearchResults> {
    let mut results = SearchResults::default();

    if types.contains(SearchKind::Artists) {
        results.artists = Some(store.search_artists(query).await?);
    }

    if types.contains(SearchKind::Albums) {
        results.albums = Some(store.search_albums(query).await?);
    }

    if types.contains(SearchKind::Songs) {
        results.songs = Some(store.search_songs(query).await?);
    }

    if types.contains(SearchKind::Folders) {
        results.folders = Some(store.search_folders(query).await?);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store stub that records call order and fails on demand
    struct ScriptedStore {
        calls: Mutex<Vec<&'static str>>,
        fail_on: Option<&'static str>,
    }

    impl ScriptedStore {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on,
            }
        }

        fn record(&self, op: &'static str) -> Result<()> {
            self.calls.lock().unwrap().push(op);
            if self.fail_on == Some(op) {
                return Err(CoreError::Database("query failed".to_string()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MusicStore for ScriptedStore {
        async fn search_artists(&self, _query: &str) -> Result<Vec<Artist>> {
            self.record("artists")?;
            Ok(vec![Artist {
                id: 1,
                name: "The Beatles".to_string(),
            }])
        }

        async fn search_albums(&self, _query: &str) -> Result<Vec<Album>> {
            self.record("albums")?;
            Ok(Vec::new())
        }

        async fn search_songs(&self, _query: &str) -> Result<Vec<Song>> {
            self.record("songs")?;
            Ok(Vec::new())
        }

        async fn search_folders(&self, _query: &str) -> Result<Vec<Folder>> {
            self.record("folders")?;
            Ok(Vec::new())
        }
    }

    #[test]
    fn typeset_empty_input_selects_everything() {
        let types = TypeSet::parse("");
        for kind in SearchKind::ALL {
            assert!(types.contains(kind));
        }
    }

    #[test]
    fn typeset_filters_unknown_tokens() {
        let types = TypeSet::parse("artists,bogus");
        assert_eq!(types, TypeSet::parse("artists"));
        assert!(types.contains(SearchKind::Artists));
        assert!(!types.contains(SearchKind::Albums));
    }

    #[test]
    fn typeset_all_unknown_tokens_is_empty() {
        let types = TypeSet::parse("bogus,nonsense");
        assert!(types.is_empty());
    }

    #[test]
    fn typeset_deduplicates() {
        let types = TypeSet::parse("songs,songs,songs");
        assert_eq!(types, TypeSet::parse("songs"));
    }

    #[tokio::test]
    async fn dispatch_calls_selected_kinds_in_order() {
        let store = ScriptedStore::new(None);
        let results = search_library(&store, "beatles", &TypeSet::all())
            .await
            .unwrap();

        assert_eq!(store.calls(), vec!["artists", "albums", "songs", "folders"]);
        assert_eq!(results.artists.unwrap().len(), 1);
        assert_eq!(results.albums.unwrap().len(), 0);
        assert!(results.songs.is_some());
        assert!(results.folders.is_some());
    }

    #[tokio::test]
    async fn dispatch_skips_unselected_kinds() {
        let store = ScriptedStore::new(None);
        let types = TypeSet::parse("albums,folders");
        let results = search_library(&store, "beatles", &types).await.unwrap();

        assert_eq!(store.calls(), vec!["albums", "folders"]);
        assert!(results.artists.is_none());
        assert!(results.albums.is_some());
        assert!(results.songs.is_none());
        assert!(results.folders.is_some());
    }

    #[tokio::test]
    async fn dispatch_empty_typeset_touches_nothing() {
        let store = ScriptedStore::new(None);
        let types = TypeSet::parse("bogus");
        let results = search_library(&store, "beatles", &types).await.unwrap();

        assert!(store.calls().is_empty());
        assert!(results.artists.is_none());
        assert!(results.folders.is_none());
    }

    #[tokio::test]
    async fn dispatch_aborts_on_first_failure() {
        let store = ScriptedStore::new(Some("songs"));
        let err = search_library(&store, "beatles", &TypeSet::all())
            .await
            .unwrap_err();

        // Artists and albums ran, folders was never reached
        assert_eq!(store.calls(), vec!["artists", "albums", "songs"]);
        assert!(matches!(err, CoreError::Database(_)));
    }

    #[test]
    fn unrequested_kinds_are_omitted_from_json() {
        let results = SearchResults {
            artists: Some(Vec::new()),
            ..SearchResults::default()
        };
        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(json["artists"], serde_json::json!([]));
        assert!(json.get("albums").is_none());
        assert!(json.get("songs").is_none());
        assert!(json.get("folders").is_none());
    }
}
