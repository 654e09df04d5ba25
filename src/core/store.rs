//! core::store
//!
//! The token store: memoized loading and typed queries over a token
//! document, with an optional secondary settings source.
//!
//! # Architecture
//!
//! A [`TokenStore`] owns its sources. The primary source supplies the
//! token document; the optional secondary source supplies external
//! settings that contribute extra color and gradient tokens. Both are
//! parsed once and memoized; [`TokenStore::clear_cache`] drops both memos
//! so the next query re-reads the sources.
//!
//! # Failure Semantics
//!
//! Queries never fail. If a source cannot be loaded on the lazy path, the
//! store caches an empty document (or empty settings) and every query
//! returns empty collections. Callers that want to observe the underlying
//! error call [`TokenStore::load`] first; the CLI does exactly that.
//!
//! # Concurrency
//!
//! A store is single-threaded by design: queries take `&self` and memoize
//! through interior mutability without locking. Create one store per
//! thread of work and share nothing.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::core::document::{Document, ExternalSettings, LayoutSettings, RawToken};
use crate::core::snapshot::TokenSnapshot;
use crate::core::types::{Origin, Scope, Token};
use crate::source::{FileSource, SourceError, StaticSource, TokenSource};

/// Memoized token queries over a document and optional external settings.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stylebook::core::store::TokenStore;
/// use stylebook::core::types::Scope;
///
/// let store = TokenStore::from_value(json!({
///     "settings": {
///         "color": {
///             "palette": {
///                 "theme": [{ "slug": "brand-blue", "color": "#0000ff" }]
///             }
///         }
///     }
/// }));
///
/// let colors = store.colors(Scope::ThemeOnly);
/// assert_eq!(colors.len(), 1);
/// assert_eq!(colors[0].name, "Brand blue");
/// assert_eq!(colors[0].value, "#0000ff");
/// ```
pub struct TokenStore {
    primary: Box<dyn TokenSource>,
    secondary: Option<Box<dyn TokenSource>>,
    document: OnceCell<Document>,
    external: OnceCell<ExternalSettings>,
}

impl TokenStore {
    /// Create a store reading its document from the given source.
    pub fn new(primary: Box<dyn TokenSource>) -> Self {
        Self {
            primary,
            secondary: None,
            document: OnceCell::new(),
            external: OnceCell::new(),
        }
    }

    /// Attach a secondary settings source.
    ///
    /// Without one, scopes that include external tokens simply contribute
    /// nothing; there is no probing for settings that might exist.
    pub fn with_secondary(mut self, secondary: Box<dyn TokenSource>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Create a store reading its document from a JSON file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileSource::new(path)))
    }

    /// Create a store over an in-memory document value.
    pub fn from_value(value: Value) -> Self {
        Self::new(Box::new(StaticSource::new(value)))
    }

    /// Whether a secondary settings source is attached.
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// Eagerly load and parse both sources, surfacing the first error.
    ///
    /// On success the caches are populated and subsequent queries are pure
    /// lookups. On failure nothing is cached, so a later query degrades
    /// (and caches the empty result) instead of failing.
    pub fn load(&self) -> Result<(), SourceError> {
        if self.document.get().is_none() {
            let document = Document::from_value(&self.primary.load()?);
            self.document.get_or_init(|| document);
        }
        if let Some(secondary) = self.secondary.as_deref() {
            if self.external.get().is_none() {
                let external = ExternalSettings::from_value(&secondary.load()?);
                self.external.get_or_init(|| external);
            }
        }
        Ok(())
    }

    /// Drop the memoized document and external settings.
    ///
    /// The next query (or [`TokenStore::load`]) re-reads the sources.
    pub fn clear_cache(&mut self) {
        self.document.take();
        self.external.take();
    }

    /// The parsed document, loading it on first use.
    ///
    /// A source failure here degrades to an empty document and caches it;
    /// use [`TokenStore::load`] to observe the error instead.
    pub fn document(&self) -> &Document {
        self.document.get_or_init(|| match self.primary.load() {
            Ok(value) => Document::from_value(&value),
            Err(_) => Document::default(),
        })
    }

    fn external(&self) -> Option<&ExternalSettings> {
        let secondary = self.secondary.as_deref()?;
        Some(self.external.get_or_init(|| match secondary.load() {
            Ok(value) => ExternalSettings::from_value(&value),
            Err(_) => ExternalSettings::default(),
        }))
    }

    /// Color tokens visible in the given scope.
    ///
    /// Document records come first, in flatten order; external tokens (when
    /// the scope includes them and a secondary source is attached) follow.
    pub fn colors(&self, scope: Scope) -> Vec<Token> {
        let mut tokens = Vec::new();
        if scope.includes_document() {
            tokens.extend(map_tokens(
                self.document().palette.flatten(scope.origin_filter()),
                |record| record.color.clone(),
            ));
        }
        if scope.includes_external() {
            if let Some(external) = self.external() {
                tokens.extend(external.color_tokens());
            }
        }
        tokens
    }

    /// Gradient tokens visible in the given scope.
    pub fn gradients(&self, scope: Scope) -> Vec<Token> {
        let mut tokens = Vec::new();
        if scope.includes_document() {
            tokens.extend(map_tokens(
                self.document().gradients.flatten(scope.origin_filter()),
                |record| record.gradient.clone(),
            ));
        }
        if scope.includes_external() {
            if let Some(external) = self.external() {
                tokens.extend(external.gradient_tokens());
            }
        }
        tokens
    }

    /// Font size tokens. The secondary source never contributes here, so
    /// [`Scope::External`] yields nothing.
    pub fn font_sizes(&self, scope: Scope) -> Vec<Token> {
        if !scope.includes_document() {
            return Vec::new();
        }
        map_tokens(
            self.document().font_sizes.flatten(scope.origin_filter()),
            |record| record.size.clone(),
        )
    }

    /// Font family tokens.
    pub fn font_families(&self, scope: Scope) -> Vec<Token> {
        if !scope.includes_document() {
            return Vec::new();
        }
        map_tokens(
            self.document().font_families.flatten(scope.origin_filter()),
            |record| record.font_family.clone(),
        )
    }

    /// Spacing size tokens.
    pub fn spacing_sizes(&self, scope: Scope) -> Vec<Token> {
        if !scope.includes_document() {
            return Vec::new();
        }
        map_tokens(
            self.document().spacing_sizes.flatten(scope.origin_filter()),
            |record| record.size.clone(),
        )
    }

    /// Shadow preset tokens.
    pub fn shadows(&self, scope: Scope) -> Vec<Token> {
        if !scope.includes_document() {
            return Vec::new();
        }
        map_tokens(
            self.document().shadows.flatten(scope.origin_filter()),
            |record| record.shadow.clone(),
        )
    }

    /// The custom property tree, or one section of it.
    ///
    /// With a non-empty `section` key that exists in the tree, the result
    /// is that subtree wrapped under its key. An absent or empty key
    /// returns the full tree.
    pub fn custom_properties(&self, section: Option<&str>) -> Map<String, Value> {
        let custom = &self.document().custom;
        if let Some(key) = section.filter(|s| !s.is_empty()) {
            if let Some(subtree) = custom.get(key) {
                let mut wrapped = Map::new();
                wrapped.insert(key.to_string(), subtree.clone());
                return wrapped;
            }
        }
        custom.clone()
    }

    /// The border radius map from `custom.borderRadius`, empty when absent
    /// or not an object.
    pub fn border_radii(&self) -> Map<String, Value> {
        match self.document().custom.get("borderRadius") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }

    /// Layout settings from the document.
    pub fn layout(&self) -> LayoutSettings {
        self.document().layout.clone()
    }

    /// One snapshot of every query result, wrapped in a self-describing
    /// envelope. See [`TokenSnapshot`].
    pub fn snapshot(&self, scope: Scope) -> TokenSnapshot {
        TokenSnapshot::capture(self, scope)
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("primary", &self.primary.describe())
            .field("secondary", &self.secondary.as_ref().map(|s| s.describe()))
            .field("loaded", &self.document.get().is_some())
            .finish()
    }
}

/// Keep the first token per slug, dropping later repeats.
///
/// Query results order priority origins first, so on a merged result this
/// selects the overriding definition (a theme `blue` wins over a default
/// `blue`). Queries never apply this themselves; callers opt in.
pub fn effective_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.slug.clone()))
        .collect()
}

/// Map flattened records to tokens.
///
/// A record must have a slug and the category's value field, or it is
/// skipped silently. A missing display name derives from the slug.
fn map_tokens(
    pairs: Vec<(RawToken, Origin)>,
    value_of: impl Fn(&RawToken) -> Option<String>,
) -> Vec<Token> {
    pairs
        .into_iter()
        .filter_map(|(record, origin)| {
            let value = value_of(&record)?;
            let slug = record.slug?;
            Some(Token::new(slug, value, record.name, origin))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Source stub that counts how often it is loaded.
    struct CountingSource {
        value: Value,
        loads: Rc<Cell<usize>>,
    }

    impl CountingSource {
        fn new(value: Value) -> (Self, Rc<Cell<usize>>) {
            let loads = Rc::new(Cell::new(0));
            (
                Self {
                    value,
                    loads: Rc::clone(&loads),
                },
                loads,
            )
        }
    }

    impl TokenSource for CountingSource {
        fn load(&self) -> Result<Value, SourceError> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.value.clone())
        }

        fn describe(&self) -> String {
            "counting stub".to_string()
        }
    }

    /// Source stub that always fails.
    struct FailingSource {
        loads: Rc<Cell<usize>>,
    }

    impl TokenSource for FailingSource {
        fn load(&self) -> Result<Value, SourceError> {
            self.loads.set(self.loads.get() + 1);
            Err(SourceError::Read {
                path: PathBuf::from("stub.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        }

        fn describe(&self) -> String {
            "failing stub".to_string()
        }
    }

    fn palette_doc() -> Value {
        json!({
            "settings": {
                "color": {
                    "palette": {
                        "theme": [{ "slug": "blue", "color": "#0000ff" }],
                        "default": [{ "slug": "blue", "color": "#aaaaaa" }]
                    }
                }
            }
        })
    }

    mod caching {
        use super::*;

        #[test]
        fn queries_share_one_load() {
            let (source, loads) = CountingSource::new(palette_doc());
            let store = TokenStore::new(Box::new(source));

            store.colors(Scope::All);
            store.colors(Scope::ThemeOnly);
            store.border_radii();

            assert_eq!(loads.get(), 1);
        }

        #[test]
        fn clear_cache_forces_reload() {
            let (source, loads) = CountingSource::new(palette_doc());
            let mut store = TokenStore::new(Box::new(source));

            store.colors(Scope::All);
            assert_eq!(loads.get(), 1);

            store.clear_cache();
            store.colors(Scope::All);
            assert_eq!(loads.get(), 2);
        }

        #[test]
        fn clear_cache_drops_the_secondary_memo_too() {
            let (primary, _) = CountingSource::new(palette_doc());
            let (secondary, secondary_loads) =
                CountingSource::new(json!({ "colors": ["#123456"] }));
            let mut store =
                TokenStore::new(Box::new(primary)).with_secondary(Box::new(secondary));

            store.colors(Scope::All);
            store.gradients(Scope::All);
            assert_eq!(secondary_loads.get(), 1);

            store.clear_cache();
            store.colors(Scope::All);
            assert_eq!(secondary_loads.get(), 2);
        }

        #[test]
        fn failed_lazy_load_degrades_and_caches_empty() {
            let loads = Rc::new(Cell::new(0));
            let store = TokenStore::new(Box::new(FailingSource {
                loads: Rc::clone(&loads),
            }));

            assert!(store.colors(Scope::All).is_empty());
            assert!(store.shadows(Scope::All).is_empty());
            assert!(store.custom_properties(None).is_empty());

            // One failed read, not one per query.
            assert_eq!(loads.get(), 1);
        }

        #[test]
        fn eager_load_surfaces_the_error() {
            let loads = Rc::new(Cell::new(0));
            let store = TokenStore::new(Box::new(FailingSource {
                loads: Rc::clone(&loads),
            }));

            let err = store.load().unwrap_err();
            assert!(matches!(err, SourceError::Read { .. }));

            // Failure does not poison the cell; a retry reads again.
            assert!(store.load().is_err());
            assert_eq!(loads.get(), 2);
        }

        #[test]
        fn eager_load_populates_the_cache() {
            let (source, loads) = CountingSource::new(palette_doc());
            let store = TokenStore::new(Box::new(source));

            store.load().expect("load");
            store.colors(Scope::All);
            store.colors(Scope::ThemeOnly);

            assert_eq!(loads.get(), 1);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn records_missing_the_value_field_are_skipped() {
            let store = TokenStore::from_value(json!({
                "settings": {
                    "color": {
                        "palette": {
                            "theme": [
                                { "slug": "blue", "color": "#0000ff" },
                                { "slug": "broken" },
                                { "color": "#ff0000" }
                            ]
                        }
                    }
                }
            }));

            let colors = store.colors(Scope::All);
            assert_eq!(colors.len(), 1);
            assert_eq!(colors[0].slug, "blue");
        }

        #[test]
        fn external_tokens_only_appear_in_external_scopes() {
            let store = TokenStore::from_value(palette_doc())
                .with_secondary(Box::new(StaticSource::new(json!({
                    "colors": ["#123456"]
                }))));

            assert_eq!(store.colors(Scope::ThemeOnly).len(), 1);
            assert_eq!(store.colors(Scope::All).len(), 3);

            let external_only = store.colors(Scope::External);
            assert_eq!(external_only.len(), 1);
            assert_eq!(external_only[0].slug, "ext-color0");
        }

        #[test]
        fn external_scope_without_secondary_is_empty() {
            let store = TokenStore::from_value(palette_doc());
            assert!(store.colors(Scope::External).is_empty());
        }

        #[test]
        fn non_color_categories_never_merge_external() {
            let store = TokenStore::from_value(json!({
                "settings": {
                    "typography": {
                        "fontSizes": { "theme": [{ "slug": "small", "size": "13px" }] }
                    }
                }
            }))
            .with_secondary(Box::new(StaticSource::new(json!({
                "colors": ["#123456"]
            }))));

            assert_eq!(store.font_sizes(Scope::All).len(), 1);
            assert!(store.font_sizes(Scope::External).is_empty());
        }

        #[test]
        fn custom_section_wraps_under_its_key() {
            let store = TokenStore::from_value(json!({
                "settings": {
                    "custom": {
                        "borderRadius": { "small": "4px" },
                        "lineHeight": { "body": 1.6 }
                    }
                }
            }));

            let section = store.custom_properties(Some("borderRadius"));
            assert_eq!(section.len(), 1);
            assert_eq!(section["borderRadius"], json!({ "small": "4px" }));
        }

        #[test]
        fn custom_missing_or_empty_section_returns_full_tree() {
            let store = TokenStore::from_value(json!({
                "settings": {
                    "custom": {
                        "borderRadius": { "small": "4px" },
                        "lineHeight": { "body": 1.6 }
                    }
                }
            }));

            assert_eq!(store.custom_properties(None).len(), 2);
            assert_eq!(store.custom_properties(Some("")).len(), 2);
            assert_eq!(store.custom_properties(Some("absent")).len(), 2);
        }

        #[test]
        fn border_radii_requires_an_object() {
            let store = TokenStore::from_value(json!({
                "settings": { "custom": { "borderRadius": "4px" } }
            }));
            assert!(store.border_radii().is_empty());

            let store = TokenStore::from_value(json!({
                "settings": { "custom": { "borderRadius": { "small": "4px" } } }
            }));
            assert_eq!(store.border_radii()["small"], json!("4px"));
        }

        #[test]
        fn layout_comes_back_typed() {
            let store = TokenStore::from_value(json!({
                "settings": { "layout": { "contentSize": "840px", "wideSize": "1100px" } }
            }));
            let layout = store.layout();
            assert_eq!(layout.content_size.as_deref(), Some("840px"));
            assert_eq!(layout.wide_size.as_deref(), Some("1100px"));
        }
    }

    mod effective {
        use super::*;

        #[test]
        fn first_token_per_slug_wins() {
            let store = TokenStore::from_value(palette_doc());
            let merged = store.colors(Scope::All);
            assert_eq!(merged.len(), 2);

            let effective = effective_tokens(merged);
            assert_eq!(effective.len(), 1);
            assert_eq!(effective[0].origin, Origin::Theme);
            assert_eq!(effective[0].value, "#0000ff");
        }

        #[test]
        fn distinct_slugs_all_survive() {
            let tokens = vec![
                Token::new("a", "1", None, Origin::Theme),
                Token::new("b", "2", None, Origin::Theme),
            ];
            assert_eq!(effective_tokens(tokens).len(), 2);
        }
    }
}
