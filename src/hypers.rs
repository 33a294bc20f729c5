//! A module for symbolic hyperparameters of mean functions.
//!
//! A [`Hyper`] is a named placeholder with a flat (non-informative) prior,
//! introduced by a leaf mean function and resolved later against observed
//! data. Placeholders compare by identity: two [`Hyper::flat`] calls with the
//! same name yield distinct parameters, while clones of one handle refer to
//! the same parameter. Numeric values are bound through a [`HyperMap`].

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use linfa::Float;
use log::debug;
use ndarray::Array1;

use crate::errors::{MeanError, Result};

static HYPER_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct HyperDef {
    id: usize,
    name: String,
    shape: Option<usize>,
}

/// A named symbolic placeholder for a free parameter with a flat prior.
///
/// Handles are cheap to clone and share the underlying definition.
#[derive(Clone, Debug)]
pub struct Hyper {
    inner: Arc<HyperDef>,
}

impl Hyper {
    /// Create a scalar placeholder with a flat prior.
    pub fn flat(name: impl Into<String>) -> Hyper {
        Hyper::create(name.into(), None)
    }

    /// Create a length-`len` vector placeholder with a flat prior.
    pub fn flat_with_shape(name: impl Into<String>, len: usize) -> Hyper {
        Hyper::create(name.into(), Some(len))
    }

    fn create(name: String, shape: Option<usize>) -> Hyper {
        debug!("new flat hyperparameter '{name}'");
        Hyper {
            inner: Arc::new(HyperDef {
                id: HYPER_ID.fetch_add(1, Ordering::Relaxed),
                name,
                shape,
            }),
        }
    }

    /// Name of the placeholder
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared shape: `None` for a scalar, `Some(len)` for a vector
    pub fn shape(&self) -> Option<usize> {
        self.inner.shape
    }
}

impl PartialEq for Hyper {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Hyper {}

impl std::hash::Hash for Hyper {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Hyper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

/// A numeric value bound to a placeholder
#[derive(Clone, Debug, PartialEq)]
pub enum HyperValue<F: Float> {
    /// Scalar value
    Scalar(F),
    /// Vector value
    Vector(Array1<F>),
}

impl<F: Float> From<F> for HyperValue<F> {
    fn from(value: F) -> Self {
        HyperValue::Scalar(value)
    }
}

impl<F: Float> From<Array1<F>> for HyperValue<F> {
    fn from(value: Array1<F>) -> Self {
        HyperValue::Vector(value)
    }
}

/// A mapping from placeholders to numeric values.
///
/// Used both for the defaults computed by
/// [`Mean::default_hypers`](crate::Mean::default_hypers) and for the bindings
/// consumed by [`Mean::value`](crate::Mean::value).
#[derive(Clone, Debug)]
pub struct HyperMap<F: Float> {
    values: HashMap<Hyper, HyperValue<F>>,
}

impl<F: Float> HyperMap<F> {
    /// An empty mapping
    pub fn new() -> HyperMap<F> {
        HyperMap {
            values: HashMap::new(),
        }
    }

    /// Bind `hyper` to `value`, replacing any previous binding
    pub fn set(&mut self, hyper: Hyper, value: impl Into<HyperValue<F>>) {
        self.values.insert(hyper, value.into());
    }

    /// Get the value bound to `hyper` if any
    pub fn get(&self, hyper: &Hyper) -> Option<&HyperValue<F>> {
        self.values.get(hyper)
    }

    /// Get the scalar value bound to `hyper`
    pub fn scalar(&self, hyper: &Hyper) -> Result<F> {
        match self.values.get(hyper) {
            Some(HyperValue::Scalar(v)) => Ok(*v),
            Some(HyperValue::Vector(_)) => Err(MeanError::InvalidValue(format!(
                "hyperparameter '{}' is bound to a vector, expected a scalar",
                hyper.name()
            ))),
            None => Err(MeanError::UnboundHyper(hyper.name().to_string())),
        }
    }

    /// Get the vector value bound to `hyper`
    pub fn vector(&self, hyper: &Hyper) -> Result<&Array1<F>> {
        match self.values.get(hyper) {
            Some(HyperValue::Vector(v)) => Ok(v),
            Some(HyperValue::Scalar(_)) => Err(MeanError::InvalidValue(format!(
                "hyperparameter '{}' is bound to a scalar, expected a vector",
                hyper.name()
            ))),
            None => Err(MeanError::UnboundHyper(hyper.name().to_string())),
        }
    }

    /// Absorb all bindings of `other`; on a common placeholder the binding
    /// of `other` wins
    pub fn merge(&mut self, other: HyperMap<F>) {
        self.values.extend(other.values);
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over bindings in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&Hyper, &HyperValue<F>)> {
        self.values.iter()
    }
}

impl<F: Float> Default for HyperMap<F> {
    fn default() -> Self {
        HyperMap::new()
    }
}
