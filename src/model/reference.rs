//! Model references and the schemes they are classified by.

use url::Url;

/// URI scheme of bundled assets on the wire.
pub const ASSET_SCHEME: &str = "assets";

/// URI schemes a content resolver is expected to understand.
pub const CONTENT_SCHEMES: &[&str] = &["content", "file"];

/// Where a model reference points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// A model packaged with the application
    BundledAsset,
    /// Anything the platform content resolver can open
    ExternalContent,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BundledAsset => write!(f, "bundled-asset"),
            Self::ExternalContent => write!(f, "external-content"),
        }
    }
}

/// Opaque locator for a model, classified by scheme.
///
/// For `BundledAsset` the locator is a path relative to the asset store
/// (`example_models/cube.vox`). For `ExternalContent` it is whatever the
/// platform handed us: a `content://` URI, a `file://` URL or a plain path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelReference {
    pub scheme: Scheme,
    pub locator: String,
}

impl ModelReference {
    /// Reference to an entry of the bundled catalog.
    pub fn bundled(catalog_root: &str, entry: &str) -> Self {
        let root = catalog_root.trim_end_matches('/');
        let locator = if root.is_empty() {
            entry.to_string()
        } else {
            format!("{}/{}", root, entry)
        };

        Self {
            scheme: Scheme::BundledAsset,
            locator,
        }
    }

    /// Reference to external content, passed through verbatim.
    pub fn external(locator: impl Into<String>) -> Self {
        Self {
            scheme: Scheme::ExternalContent,
            locator: locator.into(),
        }
    }

    /// Parse a reference from its wire form.
    ///
    /// `assets:///<path>` becomes a bundled reference to `<path>`. Only the
    /// URI path counts: an authority (`assets://host/<path>`) is skipped. Every
    /// other string is external content, including strings with schemes
    /// nobody recognizes; the resolver decides what to do with those.
    pub fn from_uri(uri: &str) -> Self {
        match uri.split_once(':') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case(ASSET_SCHEME) => {
                let path = match rest.strip_prefix("//") {
                    Some(hierarchy) => hierarchy.find('/').map_or("", |i| &hierarchy[i..]),
                    None => rest,
                };
                Self {
                    scheme: Scheme::BundledAsset,
                    locator: path.strip_prefix('/').unwrap_or(path).to_string(),
                }
            }
            _ => Self::external(uri),
        }
    }

    /// Wire form of this reference, the inverse of [`ModelReference::from_uri`].
    pub fn to_uri(&self) -> String {
        match self.scheme {
            Scheme::BundledAsset => format!("{}:///{}", ASSET_SCHEME, self.locator),
            Scheme::ExternalContent => self.locator.clone(),
        }
    }
}

impl std::fmt::Display for ModelReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

/// Lowercased URI scheme of `locator`, if it has one.
///
/// Single-letter schemes are drive letters (`C:\models\a.vox`), not URIs.
pub fn uri_scheme(locator: &str) -> Option<String> {
    let url = Url::parse(locator).ok()?;
    let scheme = url.scheme();
    if scheme.len() < 2 {
        return None;
    }
    Some(scheme.to_string())
}
