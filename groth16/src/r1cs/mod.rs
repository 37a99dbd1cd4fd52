//! Rank-1 constraint systems over a prime field.
//!
//! Variables are plain indices into a [`Protoboard`]. The first
//! `num_inputs` allocated variables form the primary (public) input, the
//! rest are auxiliary. When a system is compiled into a QAP the assignment is
//! laid out as `z = (1, x_0, ..., x_{m-1})`, slot 0 being the implicit
//! constant one carried by [`LinearCombination::constant`].

pub mod gadgets;
pub mod protoboard;

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use ark_ff::Field;

pub use protoboard::Protoboard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(usize);

impl Variable {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearCombination<F: Field> {
    pub terms: Vec<(Variable, F)>,
    pub constant: F,
}

impl<F: Field> LinearCombination<F> {
    pub fn zero() -> Self {
        Self {
            terms: Vec::new(),
            constant: F::zero(),
        }
    }

    pub fn one() -> Self {
        Self::with_constant(F::one())
    }

    pub fn with_constant(constant: F) -> Self {
        Self {
            terms: Vec::new(),
            constant,
        }
    }

    pub fn push_term(&mut self, var: Variable, coeff: F) {
        self.terms.push((var, coeff));
    }

    /// Builder form of [`push_term`](Self::push_term).
    pub fn term(mut self, var: Variable, coeff: F) -> Self {
        self.push_term(var, coeff);
        self
    }

    /// Evaluates against the values of allocated variables. Repeated terms
    /// for one variable are summed; out-of-range indices yield `None`.
    pub fn evaluate(&self, values: &[F]) -> Option<F> {
        let mut acc = self.constant;
        for (var, coeff) in &self.terms {
            acc += *coeff * values.get(var.index())?;
        }
        Some(acc)
    }

    /// Largest variable index referenced by a term.
    pub fn max_index(&self) -> Option<usize> {
        self.terms.iter().map(|(var, _)| var.index()).max()
    }
}

impl<F: Field> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Field> From<Variable> for LinearCombination<F> {
    fn from(var: Variable) -> Self {
        LinearCombination::zero().term(var, F::one())
    }
}

impl<F: Field> From<F> for LinearCombination<F> {
    fn from(value: F) -> Self {
        LinearCombination::with_constant(value)
    }
}

impl<F: Field> Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<F: Field> AddAssign for LinearCombination<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.constant += rhs.constant;
        self.terms.extend(rhs.terms);
    }
}

impl<F: Field> Sub for LinearCombination<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<F: Field> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.constant = -self.constant;
        for (_, coeff) in &mut self.terms {
            *coeff = -*coeff;
        }
        self
    }
}

impl<F: Field> Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(mut self, rhs: F) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<F: Field> MulAssign<F> for LinearCombination<F> {
    fn mul_assign(&mut self, rhs: F) {
        self.constant *= rhs;
        for (_, coeff) in &mut self.terms {
            *coeff *= rhs;
        }
    }
}

/// `a * b = c`, annotated with the name of whatever emitted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint<F: Field> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
    pub annotation: String,
}

impl<F: Field> Constraint<F> {
    pub fn new(
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            a,
            b,
            c,
            annotation: annotation.into(),
        }
    }

    pub fn is_satisfied(&self, values: &[F]) -> bool {
        match (
            self.a.evaluate(values),
            self.b.evaluate(values),
            self.c.evaluate(values),
        ) {
            (Some(a), Some(b), Some(c)) => a * b == c,
            _ => false,
        }
    }

    pub fn max_index(&self) -> Option<usize> {
        [self.a.max_index(), self.b.max_index(), self.c.max_index()]
            .into_iter()
            .flatten()
            .max()
    }
}

/// A frozen constraint system, the input of key generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1cs<F: Field> {
    pub num_inputs: usize,
    pub num_variables: usize,
    pub constraints: Vec<Constraint<F>>,
}

impl<F: Field> R1cs<F> {
    pub fn new(num_inputs: usize, num_variables: usize, constraints: Vec<Constraint<F>>) -> Self {
        Self {
            num_inputs,
            num_variables,
            constraints,
        }
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_auxiliary(&self) -> usize {
        self.num_variables.saturating_sub(self.num_inputs)
    }

    /// Checks every constraint against `primary ++ auxiliary`, stopping at
    /// the first failure.
    pub fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> bool {
        self.first_unsatisfied(primary, auxiliary).is_none()
    }

    pub fn first_unsatisfied(&self, primary: &[F], auxiliary: &[F]) -> Option<usize> {
        let values = concat(primary, auxiliary);
        self.constraints
            .iter()
            .position(|constraint| !constraint.is_satisfied(&values))
    }

    /// Indices of every failing constraint, for diagnostics.
    pub fn unsatisfied_constraints(&self, primary: &[F], auxiliary: &[F]) -> Vec<usize> {
        let values = concat(primary, auxiliary);
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, constraint)| !constraint.is_satisfied(&values))
            .map(|(idx, _)| idx)
            .collect()
    }
}

fn concat<F: Field>(primary: &[F], auxiliary: &[F]) -> Vec<F> {
    let mut values = Vec::with_capacity(primary.len() + auxiliary.len());
    values.extend_from_slice(primary);
    values.extend_from_slice(auxiliary);
    values
}
