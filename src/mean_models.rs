//! A module for composable mean models to represent the trend term of a GP model.
//!
//! The following base mean functions are implemented:
//! * zero,
//! * bias,
//! * linear
//!
//! and are combined with `+` and `*` into expression trees: adding or
//! multiplying two means composes them pointwise, while adding or multiplying
//! by a scalar (a literal or a [`Hyper`] placeholder) shifts or scales the
//! mean. Leaf means introduce named hyperparameters which are registered with
//! [`Mean::check_hypers`], seeded with [`Mean::default_hypers`] and resolved
//! at evaluation time through a [`HyperMap`] binding.

use std::fmt;
use std::ops::{Add, Mul};

use linfa::Float;
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};

use crate::errors::{MeanError, Result};
use crate::hypers::{Hyper, HyperMap};

/// The scalar operand of a shifted or scaled mean
#[derive(Clone, Debug, PartialEq)]
pub enum Element<F: Float> {
    /// A constant value
    Value(F),
    /// A symbolic placeholder resolved at evaluation time
    Hyper(Hyper),
}

impl<F: Float> Element<F> {
    fn resolve(&self, values: &HyperMap<F>) -> Result<F> {
        match self {
            Element::Value(v) => Ok(*v),
            Element::Hyper(h) => values.scalar(h),
        }
    }
}

impl<F: Float> From<F> for Element<F> {
    fn from(value: F) -> Self {
        Element::Value(value)
    }
}

impl<F: Float> From<Hyper> for Element<F> {
    fn from(hyper: Hyper) -> Self {
        Element::Hyper(hyper)
    }
}

impl<F: Float> fmt::Display for Element<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Value(v) => write!(f, "{v}"),
            Element::Hyper(h) => write!(f, "{h}"),
        }
    }
}

/// A zero constant as mean of the GP
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroMean();

/// A fitted constant as mean of the GP.
///
/// Introduces one scalar hyperparameter `<name>_Constant`.
#[derive(Clone, Debug)]
pub struct BiasMean {
    name: String,
    constant: Option<Hyper>,
    hypers: Vec<Hyper>,
}

impl BiasMean {
    /// A bias mean with default name `Bias` and no preset hyperparameter
    pub fn new() -> BiasMean {
        BiasMean {
            name: "Bias".to_string(),
            constant: None,
            hypers: Vec::new(),
        }
    }

    /// Set the name used as hyperparameter prefix
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Preset the constant placeholder; `check_hypers` will not create one
    pub fn constant(mut self, constant: Hyper) -> Self {
        self.constant = Some(constant);
        self
    }

    fn check_hypers(&mut self, parent: &str) {
        let constant = self
            .constant
            .get_or_insert_with(|| Hyper::flat(format!("{}{}_Constant", parent, self.name)))
            .clone();
        self.hypers = vec![constant];
    }

    fn default_hypers<F: Float>(
        &self,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<HyperMap<F>> {
        let constant = self
            .constant
            .as_ref()
            .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Constant", self.name)))?;
        let y_mean = y.mean().ok_or_else(|| {
            MeanError::InvalidValue("cannot default hyperparameters from empty targets".to_string())
        })?;
        let mut defaults = HyperMap::new();
        defaults.set(constant.clone(), y_mean);
        Ok(defaults)
    }
}

impl Default for BiasMean {
    fn default() -> Self {
        BiasMean::new()
    }
}

/// An affine function as mean of the GP.
///
/// Introduces a scalar hyperparameter `<name>_Constant` and a vector
/// hyperparameter `<name>_Coeff` whose length is the input dimension.
#[derive(Clone, Debug)]
pub struct LinearMean {
    name: String,
    input_dim: Option<usize>,
    constant: Option<Hyper>,
    coeff: Option<Hyper>,
    hypers: Vec<Hyper>,
}

impl LinearMean {
    /// A linear mean with default name `Linear` and no preset hyperparameters
    pub fn new() -> LinearMean {
        LinearMean {
            name: "Linear".to_string(),
            input_dim: None,
            constant: None,
            coeff: None,
            hypers: Vec::new(),
        }
    }

    /// Set the name used as hyperparameter prefix
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declare the input dimension, used as the shape of the created
    /// coefficients placeholder
    pub fn input_dim(mut self, dim: usize) -> Self {
        self.input_dim = Some(dim);
        self
    }

    /// Preset the constant placeholder; `check_hypers` will not create one
    pub fn constant(mut self, constant: Hyper) -> Self {
        self.constant = Some(constant);
        self
    }

    /// Preset the coefficients placeholder; `check_hypers` will not create one
    pub fn coeff(mut self, coeff: Hyper) -> Self {
        self.coeff = Some(coeff);
        self
    }

    fn check_hypers(&mut self, parent: &str) {
        let constant = self
            .constant
            .get_or_insert_with(|| Hyper::flat(format!("{}{}_Constant", parent, self.name)))
            .clone();
        let input_dim = self.input_dim;
        let coeff = self
            .coeff
            .get_or_insert_with(|| {
                let name = format!("{}{}_Coeff", parent, self.name);
                match input_dim {
                    Some(dim) => Hyper::flat_with_shape(name, dim),
                    None => Hyper::flat(name),
                }
            })
            .clone();
        self.hypers = vec![constant, coeff];
    }

    fn default_hypers<F: Float>(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix2>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<HyperMap<F>> {
        let constant = self
            .constant
            .as_ref()
            .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Constant", self.name)))?;
        let coeff = self
            .coeff
            .as_ref()
            .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Coeff", self.name)))?;
        let y_mean = y.mean().ok_or_else(|| {
            MeanError::InvalidValue("cannot default hyperparameters from empty targets".to_string())
        })?;
        let x_mean = x.mean_axis(Axis(0)).ok_or_else(|| {
            MeanError::InvalidValue("cannot default hyperparameters from empty inputs".to_string())
        })?;
        let mut defaults = HyperMap::new();
        defaults.set(constant.clone(), y_mean);
        defaults.set(coeff.clone(), x_mean.mapv(|v| y_mean / v));
        Ok(defaults)
    }
}

impl Default for LinearMean {
    fn default() -> Self {
        LinearMean::new()
    }
}

/// A mean multiplied by a scalar element
#[derive(Clone, Debug)]
pub struct ScaledMean<F: Float> {
    element: Element<F>,
    inner: Box<Mean<F>>,
    hypers: Vec<Hyper>,
}

/// A mean shifted by a scalar element
#[derive(Clone, Debug)]
pub struct ShiftedMean<F: Float> {
    element: Element<F>,
    inner: Box<Mean<F>>,
    hypers: Vec<Hyper>,
}

/// The pointwise product of two means
#[derive(Clone, Debug)]
pub struct ProductMean<F: Float> {
    left: Box<Mean<F>>,
    right: Box<Mean<F>>,
    hypers: Vec<Hyper>,
}

/// The pointwise sum of two means
#[derive(Clone, Debug)]
pub struct SumMean<F: Float> {
    left: Box<Mean<F>>,
    right: Box<Mean<F>>,
    hypers: Vec<Hyper>,
}

/// A mean function of a GP model, represented as an expression tree.
///
/// Leaves introduce hyperparameters, operation nodes modify one mean with a
/// scalar element, composition nodes combine two means pointwise. Trees are
/// built with the `+`/`*` operators or the [`Mean::sum`], [`Mean::prod`],
/// [`Mean::shift`] and [`Mean::scale`] factories, then go through a two-phase
/// protocol: [`Mean::check_hypers`] registers every reachable hyperparameter
/// once, [`Mean::default_hypers`] seeds numeric values from observed data,
/// and [`Mean::value`] evaluates the expression under a given binding.
#[derive(Clone, Debug)]
pub enum Mean<F: Float> {
    /// Zero constant mean
    Zero(ZeroMean),
    /// Fitted constant mean
    Bias(BiasMean),
    /// Affine mean
    Linear(LinearMean),
    /// Scaled mean `element * m(x)`
    Scale(ScaledMean<F>),
    /// Shifted mean `element + m(x)`
    Shift(ShiftedMean<F>),
    /// Product mean `m1(x) * m2(x)`
    Prod(ProductMean<F>),
    /// Sum mean `m1(x) + m2(x)`
    Sum(SumMean<F>),
}

impl<F: Float> Mean<F> {
    /// The zero mean
    pub fn zero() -> Mean<F> {
        Mean::Zero(ZeroMean())
    }

    /// A bias mean with default settings
    pub fn bias() -> Mean<F> {
        Mean::Bias(BiasMean::new())
    }

    /// A linear mean with default settings
    pub fn linear() -> Mean<F> {
        Mean::Linear(LinearMean::new())
    }

    /// The pointwise sum of two means
    pub fn sum(left: Mean<F>, right: Mean<F>) -> Mean<F> {
        Mean::Sum(SumMean {
            left: Box::new(left),
            right: Box::new(right),
            hypers: Vec::new(),
        })
    }

    /// The pointwise product of two means
    pub fn prod(left: Mean<F>, right: Mean<F>) -> Mean<F> {
        Mean::Prod(ProductMean {
            left: Box::new(left),
            right: Box::new(right),
            hypers: Vec::new(),
        })
    }

    /// This mean shifted by a scalar element
    pub fn shift(self, element: impl Into<Element<F>>) -> Mean<F> {
        Mean::Shift(ShiftedMean {
            element: element.into(),
            inner: Box::new(self),
            hypers: Vec::new(),
        })
    }

    /// This mean scaled by a scalar element
    pub fn scale(self, element: impl Into<Element<F>>) -> Mean<F> {
        Mean::Scale(ScaledMean {
            element: element.into(),
            inner: Box::new(self),
            hypers: Vec::new(),
        })
    }

    /// Ensure every hyperparameter reachable from this node exists, creating
    /// missing placeholders with names prefixed by `parent`, and populate the
    /// node's hyperparameter list.
    ///
    /// Idempotent: a second call walks the same tree and yields the same
    /// placeholders in the same order. The scalar element of a shifted or
    /// scaled mean does not contribute to the list; only the wrapped mean is
    /// walked.
    pub fn check_hypers(&mut self, parent: &str) {
        match self {
            Mean::Zero(_) => {}
            Mean::Bias(bias) => bias.check_hypers(parent),
            Mean::Linear(linear) => linear.check_hypers(parent),
            Mean::Scale(node) => {
                node.inner.check_hypers(parent);
                node.hypers = node.inner.hypers().to_vec();
            }
            Mean::Shift(node) => {
                node.inner.check_hypers(parent);
                node.hypers = node.inner.hypers().to_vec();
            }
            Mean::Prod(node) => {
                node.left.check_hypers(parent);
                node.right.check_hypers(parent);
                node.hypers = concat_hypers(&node.left, &node.right);
            }
            Mean::Sum(node) => {
                node.left.check_hypers(parent);
                node.right.check_hypers(parent);
                node.hypers = concat_hypers(&node.left, &node.right);
            }
        }
    }

    /// The hyperparameters reachable from this node, in registration order:
    /// left child before right child, duplicates kept.
    ///
    /// Empty until [`Mean::check_hypers`] has run.
    pub fn hypers(&self) -> &[Hyper] {
        match self {
            Mean::Zero(_) => &[],
            Mean::Bias(bias) => &bias.hypers,
            Mean::Linear(linear) => &linear.hypers,
            Mean::Scale(node) => &node.hypers,
            Mean::Shift(node) => &node.hypers,
            Mean::Prod(node) => &node.hypers,
            Mean::Sum(node) => &node.hypers,
        }
    }

    /// Compute a numeric default for every hyperparameter in the subtree,
    /// given sample inputs `x` as a (n, nx) matrix and targets `y` of
    /// length n.
    ///
    /// A bias constant defaults to `mean(y)`; linear coefficients default to
    /// `mean(y)` divided by the column means of `x`. When two subtrees share
    /// a placeholder the right-hand default wins.
    pub fn default_hypers(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix2>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<HyperMap<F>> {
        match self {
            Mean::Zero(_) => Ok(HyperMap::new()),
            Mean::Bias(bias) => bias.default_hypers(y),
            Mean::Linear(linear) => linear.default_hypers(x, y),
            Mean::Scale(node) => node.inner.default_hypers(x, y),
            Mean::Shift(node) => node.inner.default_hypers(x, y),
            Mean::Prod(node) => {
                let mut defaults = node.left.default_hypers(x, y)?;
                defaults.merge(node.right.default_hypers(x, y)?);
                Ok(defaults)
            }
            Mean::Sum(node) => {
                let mut defaults = node.left.default_hypers(x, y)?;
                defaults.merge(node.right.default_hypers(x, y)?);
                Ok(defaults)
            }
        }
    }

    /// Evaluate the mean function at the n rows of `x` under the given
    /// binding, as a length-n vector.
    pub fn value(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix2>,
        values: &HyperMap<F>,
    ) -> Result<Array1<F>> {
        match self {
            Mean::Zero(_) => Ok(Array1::zeros(x.nrows())),
            Mean::Bias(bias) => {
                let constant = bias
                    .constant
                    .as_ref()
                    .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Constant", bias.name)))?;
                Ok(Array1::from_elem(x.nrows(), values.scalar(constant)?))
            }
            Mean::Linear(linear) => {
                let constant = linear
                    .constant
                    .as_ref()
                    .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Constant", linear.name)))?;
                let coeff = linear
                    .coeff
                    .as_ref()
                    .ok_or_else(|| MeanError::UnsetHyper(format!("{}_Coeff", linear.name)))?;
                let coeff = values.vector(coeff)?;
                if coeff.len() != x.ncols() {
                    return Err(MeanError::ShapeMismatch {
                        expected: x.ncols(),
                        actual: coeff.len(),
                    });
                }
                Ok(x.dot(coeff) + values.scalar(constant)?)
            }
            Mean::Scale(node) => Ok(node.inner.value(x, values)? * node.element.resolve(values)?),
            Mean::Shift(node) => Ok(node.inner.value(x, values)? + node.element.resolve(values)?),
            Mean::Prod(node) => Ok(node.left.value(x, values)? * node.right.value(x, values)?),
            Mean::Sum(node) => Ok(node.left.value(x, values)? + node.right.value(x, values)?),
        }
    }
}

fn concat_hypers<F: Float>(left: &Mean<F>, right: &Mean<F>) -> Vec<Hyper> {
    let mut hypers = left.hypers().to_vec();
    hypers.extend_from_slice(right.hypers());
    hypers
}

impl<F: Float> From<ZeroMean> for Mean<F> {
    fn from(mean: ZeroMean) -> Self {
        Mean::Zero(mean)
    }
}

impl<F: Float> From<BiasMean> for Mean<F> {
    fn from(mean: BiasMean) -> Self {
        Mean::Bias(mean)
    }
}

impl<F: Float> From<LinearMean> for Mean<F> {
    fn from(mean: LinearMean) -> Self {
        Mean::Linear(mean)
    }
}

impl<F: Float> fmt::Display for Mean<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mean::Zero(_) => write!(f, "Zero"),
            Mean::Bias(bias) => write!(f, "{}", bias.name),
            Mean::Linear(linear) => write!(f, "{}", linear.name),
            Mean::Scale(node) => write!(f, "{} * {}", node.element, node.inner),
            Mean::Shift(node) => write!(f, "{} + {}", node.element, node.inner),
            Mean::Prod(node) => write!(f, "{} * {}", node.left, node.right),
            Mean::Sum(node) => write!(f, "{} + {}", node.left, node.right),
        }
    }
}

impl<F: Float> Add for Mean<F> {
    type Output = Mean<F>;

    fn add(self, rhs: Mean<F>) -> Mean<F> {
        Mean::sum(self, rhs)
    }
}

impl<F: Float> Mul for Mean<F> {
    type Output = Mean<F>;

    fn mul(self, rhs: Mean<F>) -> Mean<F> {
        Mean::prod(self, rhs)
    }
}

impl<F: Float> Add<Hyper> for Mean<F> {
    type Output = Mean<F>;

    fn add(self, rhs: Hyper) -> Mean<F> {
        self.shift(rhs)
    }
}

impl<F: Float> Mul<Hyper> for Mean<F> {
    type Output = Mean<F>;

    fn mul(self, rhs: Hyper) -> Mean<F> {
        self.scale(rhs)
    }
}

impl<F: Float> Add<Mean<F>> for Hyper {
    type Output = Mean<F>;

    fn add(self, rhs: Mean<F>) -> Mean<F> {
        rhs.shift(self)
    }
}

impl<F: Float> Mul<Mean<F>> for Hyper {
    type Output = Mean<F>;

    fn mul(self, rhs: Mean<F>) -> Mean<F> {
        rhs.scale(self)
    }
}

macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {$(
        impl Add<$ty> for Mean<$ty> {
            type Output = Mean<$ty>;

            fn add(self, rhs: $ty) -> Mean<$ty> {
                self.shift(rhs)
            }
        }

        impl Mul<$ty> for Mean<$ty> {
            type Output = Mean<$ty>;

            fn mul(self, rhs: $ty) -> Mean<$ty> {
                self.scale(rhs)
            }
        }

        impl Add<Mean<$ty>> for $ty {
            type Output = Mean<$ty>;

            fn add(self, rhs: Mean<$ty>) -> Mean<$ty> {
                rhs.shift(self)
            }
        }

        impl Mul<Mean<$ty>> for $ty {
            type Output = Mean<$ty>;

            fn mul(self, rhs: Mean<$ty>) -> Mean<$ty> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};

    fn sample_data() -> (Array2<f64>, Array1<f64>) {
        (array![[1., 2.], [3., 4.], [5., 6.]], array![2., 4., 6.])
    }

    fn preset_bias(constant: &Hyper) -> Mean<f64> {
        BiasMean::new().constant(constant.clone()).into()
    }

    fn preset_linear(constant: &Hyper, coeff: &Hyper) -> Mean<f64> {
        LinearMean::new()
            .constant(constant.clone())
            .coeff(coeff.clone())
            .into()
    }

    #[test]
    fn test_zero_mean() {
        let (x, _) = sample_data();
        let zero = Mean::<f64>::zero();
        assert_abs_diff_eq!(
            Array1::<f64>::zeros(3),
            zero.value(&x, &HyperMap::new()).unwrap()
        );
    }

    #[test]
    fn test_bias_evaluation() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let bias = preset_bias(&c);
        let mut values = HyperMap::new();
        values.set(c, 1.5);
        assert_abs_diff_eq!(array![1.5, 1.5, 1.5], bias.value(&x, &values).unwrap());
    }

    #[test]
    fn test_linear_evaluation() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let w = Hyper::flat_with_shape("w", 2);
        let linear = preset_linear(&c, &w);
        let mut values = HyperMap::new();
        values.set(c, 0.5);
        values.set(w, array![1., -1.]);
        assert_abs_diff_eq!(
            array![-0.5, -0.5, -0.5],
            linear.value(&x, &values).unwrap()
        );
    }

    #[test]
    fn test_sum_matches_pointwise_sum() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let lc = Hyper::flat("lc");
        let w = Hyper::flat_with_shape("w", 2);
        let a = preset_bias(&c);
        let b = preset_linear(&lc, &w);
        let mut values = HyperMap::new();
        values.set(c, 1.0);
        values.set(lc, 0.5);
        values.set(w, array![1., -1.]);

        let sum = a.clone() + b.clone();
        let expected = a.value(&x, &values).unwrap() + b.value(&x, &values).unwrap();
        assert_abs_diff_eq!(expected, sum.value(&x, &values).unwrap());
    }

    #[test]
    fn test_prod_matches_pointwise_prod() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let lc = Hyper::flat("lc");
        let w = Hyper::flat_with_shape("w", 2);
        let a = preset_bias(&c);
        let b = preset_linear(&lc, &w);
        let mut values = HyperMap::new();
        values.set(c, 2.0);
        values.set(lc, 0.5);
        values.set(w, array![1., -1.]);

        let prod = a.clone() * b.clone();
        let expected = a.value(&x, &values).unwrap() * b.value(&x, &values).unwrap();
        assert_abs_diff_eq!(expected, prod.value(&x, &values).unwrap());
    }

    #[test]
    fn test_scalar_scale_commutes() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let mut values = HyperMap::new();
        values.set(c.clone(), 1.5);

        let scaled = preset_bias(&c) * 2.0;
        let reflected = 2.0 * preset_bias(&c);
        let expected = array![3.0, 3.0, 3.0];
        assert_abs_diff_eq!(expected, scaled.value(&x, &values).unwrap());
        assert_abs_diff_eq!(expected, reflected.value(&x, &values).unwrap());
    }

    #[test]
    fn test_scalar_shift_commutes() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let mut values = HyperMap::new();
        values.set(c.clone(), 1.5);

        let shifted = preset_bias(&c) + 2.0;
        let reflected = 2.0 + preset_bias(&c);
        let expected = array![3.5, 3.5, 3.5];
        assert_abs_diff_eq!(expected, shifted.value(&x, &values).unwrap());
        assert_abs_diff_eq!(expected, reflected.value(&x, &values).unwrap());
    }

    #[test]
    fn test_linear_check_hypers_names() {
        let mut linear = Mean::<f64>::linear();
        linear.check_hypers("");
        let hypers = linear.hypers();
        assert_eq!(2, hypers.len());
        assert_eq!("Linear_Constant", hypers[0].name());
        assert_eq!("Linear_Coeff", hypers[1].name());
    }

    #[test]
    fn test_check_hypers_idempotent() {
        let mut mean = Mean::<f64>::bias() + Mean::linear();
        mean.check_hypers("");
        let first = mean.hypers().to_vec();
        mean.check_hypers("");
        let second = mean.hypers().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parent_prefix() {
        let mut mean = Mean::<f64>::linear();
        mean.check_hypers("gp_");
        assert_eq!("gp_Linear_Constant", mean.hypers()[0].name());
        assert_eq!("gp_Linear_Coeff", mean.hypers()[1].name());
    }

    #[test]
    fn test_preset_hyper_not_recreated() {
        let c = Hyper::flat("given");
        let mut bias: Mean<f64> = BiasMean::new().constant(c.clone()).into();
        bias.check_hypers("gp_");
        assert_eq!(1, bias.hypers().len());
        assert_eq!(c, bias.hypers()[0]);
    }

    #[test]
    fn test_bias_defaults() {
        let (x, y) = sample_data();
        let mut bias = Mean::<f64>::bias();
        bias.check_hypers("");
        let defaults = bias.default_hypers(&x, &y).unwrap();
        assert_eq!(1, defaults.len());
        assert_abs_diff_eq!(4.0, defaults.scalar(&bias.hypers()[0]).unwrap());
    }

    #[test]
    fn test_linear_defaults() {
        let (x, y) = sample_data();
        let mut linear: Mean<f64> = LinearMean::new().input_dim(2).into();
        linear.check_hypers("");
        let defaults = linear.default_hypers(&x, &y).unwrap();
        assert_eq!(2, defaults.len());
        assert_abs_diff_eq!(4.0, defaults.scalar(&linear.hypers()[0]).unwrap());
        assert_abs_diff_eq!(
            array![4.0 / 3.0, 1.0],
            *defaults.vector(&linear.hypers()[1]).unwrap()
        );
    }

    #[test]
    fn test_bias_plus_linear_scenario() {
        let (x, y) = sample_data();
        let mut mean = Mean::<f64>::bias() + Mean::linear();
        mean.check_hypers("");
        let hypers = mean.hypers();
        assert_eq!(3, hypers.len());
        assert_eq!("Bias_Constant", hypers[0].name());
        assert_eq!("Linear_Constant", hypers[1].name());
        assert_eq!("Linear_Coeff", hypers[2].name());

        let defaults = mean.default_hypers(&x, &y).unwrap();
        assert_eq!(3, defaults.len());
        let mu = mean.value(&x, &defaults).unwrap();
        assert_eq!(3, mu.len());
    }

    #[test]
    fn test_element_hyper_excluded_from_hypers() {
        let (x, _) = sample_data();
        let amplitude = Hyper::flat("amplitude");
        let c = Hyper::flat("c");
        let mut scaled = preset_bias(&c) * amplitude.clone();
        scaled.check_hypers("");
        assert_eq!(1, scaled.hypers().len());
        assert_eq!(c, scaled.hypers()[0]);

        let mut values = HyperMap::new();
        values.set(c, 2.0);
        values.set(amplitude, 3.0);
        assert_abs_diff_eq!(array![6.0, 6.0, 6.0], scaled.value(&x, &values).unwrap());
    }

    #[test]
    fn test_unbound_hyper_error() {
        let (x, _) = sample_data();
        let mut bias = Mean::<f64>::bias();
        bias.check_hypers("");
        assert!(matches!(
            bias.value(&x, &HyperMap::new()),
            Err(MeanError::UnboundHyper(_))
        ));
    }

    #[test]
    fn test_unset_hyper_error() {
        let (x, y) = sample_data();
        let bias = Mean::<f64>::bias();
        assert!(matches!(
            bias.default_hypers(&x, &y),
            Err(MeanError::UnsetHyper(_))
        ));
    }

    #[test]
    fn test_coeff_shape_mismatch() {
        let (x, _) = sample_data();
        let c = Hyper::flat("c");
        let w = Hyper::flat_with_shape("w", 1);
        let linear = preset_linear(&c, &w);
        let mut values = HyperMap::new();
        values.set(c, 0.5);
        values.set(w, array![1.]);
        assert!(matches!(
            linear.value(&x, &values),
            Err(MeanError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_display() {
        let mean: Mean<f64> = Mean::<f64>::bias() + Mean::linear() * 2.0;
        assert_eq!("Bias + 2 * Linear", mean.to_string());
        let zero = Mean::<f64>::zero() * Mean::bias();
        assert_eq!("Zero * Bias", zero.to_string());
    }
}
