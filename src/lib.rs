//! This library implements composable mean functions for
//! [Gaussian process](https://en.wikipedia.org/wiki/Gaussian_process) models.
//!
//! A mean function gives the expected value of the process at an input
//! location. Base means (zero, bias, linear) are combined with `+` and `*`
//! into expression trees whose free parameters are named symbolic
//! hyperparameters with flat priors, created on demand and resolved against
//! observed data: [`Mean::check_hypers`] registers every reachable
//! hyperparameter once at model-build time, [`Mean::default_hypers`] seeds
//! initial numeric values from sample data, and [`Mean::value`] evaluates the
//! expression under a given [`HyperMap`] binding during likelihood
//! evaluation.
//!
//! Example:
//! ```
//! use gp_means::Mean;
//! use ndarray::array;
//!
//! // mu(x) = Bias + 2 * Linear, hyperparameters created under the "gp_" prefix.
//! let mut mean: Mean<f64> = Mean::bias() + Mean::linear() * 2.0;
//! mean.check_hypers("gp_");
//! assert_eq!(3, mean.hypers().len());
//!
//! let x = array![[0.0], [1.0], [2.0]];
//! let y = array![1.0, 3.0, 5.0];
//! let defaults = mean.default_hypers(&x, &y).unwrap();
//! let mu = mean.value(&x, &defaults).unwrap();
//! assert_eq!(3, mu.len());
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod errors;
pub mod hypers;
mod mean_models;

pub use errors::*;
pub use hypers::{Hyper, HyperMap, HyperValue};
pub use mean_models::*;
