//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Token`] - A normalized design token (slug, value, display name, origin)
//! - [`Origin`] - Which collection a token came from (theme, custom, default, ...)
//! - [`Scope`] - Which sources a query consults
//! - [`OriginFilter`] - Origin selection applied when flattening nested data
//! - [`TokenCategory`] - Token kind (color, gradient, font size, ...)
//! - [`UtcTimestamp`] - RFC3339 timestamp
//! - [`Fingerprint`] - Content hash for snapshot comparison
//!
//! # Examples
//!
//! ```
//! use stylebook::core::types::{Origin, Scope, Token, TokenCategory};
//!
//! // A token with no explicit name gets one derived from its slug.
//! let token = Token::new("brand-blue", "#0000ff", None, Origin::Theme);
//! assert_eq!(token.name, "Brand blue");
//!
//! // CSS custom property names are derived, never stored.
//! assert_eq!(token.css_var(TokenCategory::Color), "--preset-color-brand-blue");
//!
//! // Scopes parse from their CLI/config spelling.
//! let scope: Scope = "all".parse().unwrap();
//! assert_eq!(scope, Scope::All);
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid scope: '{0}' (valid: all, theme, external)")]
    InvalidScope(String),
}

/// The collection a token was defined in.
///
/// Token documents group presets by origin (`theme`, `custom`, `default`);
/// tokens synthesized from a secondary settings source carry [`Origin::External`].
/// Unknown origin keys round-trip through [`Origin::Other`] rather than being
/// dropped.
///
/// # Example
///
/// ```
/// use stylebook::core::types::Origin;
///
/// assert_eq!(Origin::from_key("theme"), Origin::Theme);
/// assert_eq!(Origin::from_key("plugin"), Origin::Other("plugin".into()));
/// assert_eq!(Origin::from_key("plugin").as_str(), "plugin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Origin {
    Theme,
    Custom,
    Default,
    External,
    Other(String),
}

impl Origin {
    /// Merge priority when flattening nested collections: records from these
    /// origins come first, in this order. Origins not listed here follow in
    /// document order.
    pub const PRIORITY: [Origin; 3] = [Origin::Theme, Origin::Custom, Origin::Default];

    /// Map an origin key from a document onto an origin.
    ///
    /// Never fails; unrecognized keys become [`Origin::Other`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "theme" => Origin::Theme,
            "custom" => Origin::Custom,
            "default" => Origin::Default,
            "external" => Origin::External,
            other => Origin::Other(other.to_string()),
        }
    }

    /// Get the origin's key string.
    pub fn as_str(&self) -> &str {
        match self {
            Origin::Theme => "theme",
            Origin::Custom => "custom",
            Origin::Default => "default",
            Origin::External => "external",
            Origin::Other(key) => key,
        }
    }
}

impl From<String> for Origin {
    fn from(s: String) -> Self {
        match s.as_str() {
            "theme" => Origin::Theme,
            "custom" => Origin::Custom,
            "default" => Origin::Default,
            "external" => Origin::External,
            _ => Origin::Other(s),
        }
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Other(key) => key,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Origin selection applied when flattening a nested collection.
///
/// Derived from a [`Scope`]; flat collections ignore it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginFilter {
    /// Every origin, priority order first, remainder in document order.
    All,
    /// Only records from one origin.
    Only(Origin),
}

/// Which sources a token query consults.
///
/// # Example
///
/// ```
/// use stylebook::core::types::Scope;
///
/// assert_eq!(Scope::default(), Scope::ThemeOnly);
/// assert_eq!("theme".parse::<Scope>().unwrap(), Scope::ThemeOnly);
/// assert!("everything".parse::<Scope>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Only theme-origin records from the primary document.
    #[default]
    ThemeOnly,
    /// Every origin in the primary document, plus external tokens when a
    /// secondary source is present.
    All,
    /// Only tokens synthesized from the secondary source.
    External,
}

impl Scope {
    /// Whether this scope reads the primary document at all.
    pub fn includes_document(&self) -> bool {
        matches!(self, Scope::ThemeOnly | Scope::All)
    }

    /// Whether this scope merges tokens from the secondary source.
    pub fn includes_external(&self) -> bool {
        matches!(self, Scope::All | Scope::External)
    }

    /// The origin filter applied when flattening the primary document.
    pub fn origin_filter(&self) -> OriginFilter {
        match self {
            Scope::All => OriginFilter::All,
            _ => OriginFilter::Only(Origin::Theme),
        }
    }

    /// Canonical spelling, as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ThemeOnly => "theme-only",
            Scope::All => "all",
            Scope::External => "external",
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Scope::All),
            "theme" | "theme-only" => Ok(Scope::ThemeOnly),
            "external" => Ok(Scope::External),
            other => Err(TypeError::InvalidScope(other.to_string())),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of design token a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Gradient,
    FontSize,
    FontFamily,
    Spacing,
    Shadow,
}

impl TokenCategory {
    /// Kebab-case category key, used in CSS variable names.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Gradient => "gradient",
            TokenCategory::FontSize => "font-size",
            TokenCategory::FontFamily => "font-family",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Shadow => "shadow",
        }
    }

    /// Human-readable category heading.
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::Color => "Color",
            TokenCategory::Gradient => "Gradient",
            TokenCategory::FontSize => "Font size",
            TokenCategory::FontFamily => "Font family",
            TokenCategory::Spacing => "Spacing",
            TokenCategory::Shadow => "Shadow",
        }
    }

    /// Derive the CSS custom property name for a slug in this category.
    ///
    /// # Example
    ///
    /// ```
    /// use stylebook::core::types::TokenCategory;
    ///
    /// assert_eq!(
    ///     TokenCategory::FontSize.css_var("x-large"),
    ///     "--preset-font-size-x-large"
    /// );
    /// ```
    pub fn css_var(&self, slug: &str) -> String {
        format!("--preset-{}-{}", self.as_str(), slug)
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derive a display name from a slug: hyphens become spaces and the first
/// character is upper-cased.
///
/// # Example
///
/// ```
/// use stylebook::core::types::display_name;
///
/// assert_eq!(display_name("brand-blue"), "Brand blue");
/// assert_eq!(display_name("x-large"), "X large");
/// assert_eq!(display_name("gray"), "Gray");
/// ```
pub fn display_name(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A normalized design token.
///
/// Always carries all four fields; a missing display name is derived from
/// the slug at construction time. Slugs are not unique on their own: the
/// same slug may appear once per [`Origin`] in a merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub slug: String,
    pub value: String,
    pub name: String,
    pub origin: Origin,
}

impl Token {
    /// Create a token, deriving the display name from the slug when `name`
    /// is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use stylebook::core::types::{Origin, Token};
    ///
    /// let named = Token::new("blue", "#00f", Some("Azure".into()), Origin::Theme);
    /// assert_eq!(named.name, "Azure");
    ///
    /// let derived = Token::new("brand-blue", "#00f", None, Origin::Theme);
    /// assert_eq!(derived.name, "Brand blue");
    /// ```
    pub fn new(
        slug: impl Into<String>,
        value: impl Into<String>,
        name: Option<String>,
        origin: Origin,
    ) -> Self {
        let slug = slug.into();
        let name = name.unwrap_or_else(|| display_name(&slug));
        Self {
            slug,
            value: value.into(),
            name,
            origin,
        }
    }

    /// The CSS custom property name for this token in the given category.
    pub fn css_var(&self, category: TokenCategory) -> String {
        category.css_var(&self.slug)
    }
}

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use stylebook::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Generated at: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// A stable hash over snapshot content, for change detection between exports.
///
/// Computed over labelled content chunks in sequence. Unlike a set hash,
/// chunk order is part of the identity: token order is meaningful, so two
/// snapshots with the same tokens in a different order are different.
///
/// # Example
///
/// ```
/// use stylebook::core::types::Fingerprint;
///
/// let fp1 = Fingerprint::compute(["colors", "blue\0#00f"]);
/// let fp2 = Fingerprint::compute(["colors", "blue\0#00f"]);
/// assert_eq!(fp1, fp2);
///
/// let reordered = Fingerprint::compute(["blue\0#00f", "colors"]);
/// assert_ne!(fp1, reordered);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from content chunks, in order.
    pub fn compute<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();
        for chunk in chunks {
            hasher.update(chunk.as_ref().as_bytes());
            hasher.update(b"\n");
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
