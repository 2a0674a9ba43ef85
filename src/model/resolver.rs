//! Model reference resolution.
//!
//! Turns a [`ModelReference`] into [`ModelBytes`] by opening the matching
//! byte source and reading it to the end.

use std::io::{self, Read};
use std::sync::Arc;

use thiserror::Error;

use crate::model::bytes::ModelBytes;
use crate::model::reference::{uri_scheme, ModelReference, Scheme, CONTENT_SCHEMES};
use crate::model::store::{AssetStore, ContentResolver, ModelStream};

/// Errors that can occur while resolving a model reference.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Model reference is empty")]
    EmptyLocator,

    #[error("Unsupported model location '{0}'")]
    UnsupportedScheme(String),

    #[error("Cannot open model '{locator}'")]
    Open {
        locator: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read model '{locator}'")]
    Read {
        locator: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// A reference classified for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource<'a> {
    /// Path inside the bundled-asset store
    BundledAsset(&'a str),
    /// Locator the content resolver is known to understand
    ExternalContent(&'a str),
    /// Locator with a scheme nobody claimed
    Unrecognized(&'a str),
}

impl<'a> ModelSource<'a> {
    pub fn classify(reference: &'a ModelReference) -> Self {
        let locator = reference.locator.as_str();
        match reference.scheme {
            Scheme::BundledAsset => Self::BundledAsset(locator.trim_start_matches('/')),
            Scheme::ExternalContent => match uri_scheme(locator) {
                None => Self::ExternalContent(locator),
                Some(scheme) if CONTENT_SCHEMES.contains(&scheme.as_str()) => {
                    Self::ExternalContent(locator)
                }
                Some(_) => Self::Unrecognized(locator),
            },
        }
    }
}

/// Resolves model references to their bytes.
#[derive(Clone)]
pub struct ModelResolver {
    assets: Arc<dyn AssetStore>,
    content: Arc<dyn ContentResolver>,
    strict_schemes: bool,
}

impl ModelResolver {
    /// Create a resolver over the given byte sources.
    ///
    /// Locators with unrecognized schemes go to the content resolver.
    pub fn new(assets: Arc<dyn AssetStore>, content: Arc<dyn ContentResolver>) -> Self {
        Self {
            assets,
            content,
            strict_schemes: false,
        }
    }

    /// Reject unrecognized schemes instead of passing them on.
    pub fn with_strict_schemes(mut self, strict: bool) -> Self {
        self.strict_schemes = strict;
        self
    }

    /// Read the whole model behind `reference`.
    ///
    /// The stream is dropped on every exit path. Empty payloads are returned
    /// as-is; judging them is up to the engine.
    pub fn resolve(&self, reference: &ModelReference) -> Result<ModelBytes> {
        if reference.locator.trim().is_empty() {
            return Err(ResolveError::EmptyLocator);
        }

        let source = ModelSource::classify(reference);
        log::debug!("Resolving {} as {:?}", reference, source);

        let stream = self.open(reference, &source)?;

        let data = read_to_end(stream).map_err(|source| ResolveError::Read {
            locator: reference.locator.clone(),
            source,
        })?;

        log::info!("Resolved {} ({} bytes)", reference, data.len());
        Ok(ModelBytes::new(data))
    }

    fn open(&self, reference: &ModelReference, source: &ModelSource<'_>) -> Result<ModelStream> {
        let opened = match *source {
            ModelSource::BundledAsset(path) => self.assets.open(path),
            ModelSource::ExternalContent(locator) => self.content.open(locator),
            ModelSource::Unrecognized(locator) if self.strict_schemes => {
                return Err(ResolveError::UnsupportedScheme(locator.to_string()));
            }
            ModelSource::Unrecognized(locator) => {
                log::warn!("Unrecognized scheme in '{}', trying content resolver", locator);
                self.content.open(locator)
            }
        };

        opened.map_err(|source| ResolveError::Open {
            locator: reference.locator.clone(),
            source,
        })
    }
}

fn read_to_end(mut stream: ModelStream) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;
    Ok(data)
}
