use ark_ff::Field;

use super::{Constraint, LinearCombination, R1cs, Variable};
use crate::error::R1csError;

/// Arena owning variable values, labels and the constraints registered
/// against them. Handles are indices, so gadgets hold plain `Variable`s and
/// borrow the board mutably only while emitting constraints or witnesses.
#[derive(Clone, Debug, Default)]
pub struct Protoboard<F: Field> {
    values: Vec<Option<F>>,
    labels: Vec<String>,
    constraints: Vec<Constraint<F>>,
    num_inputs: usize,
}

impl<F: Field> Protoboard<F> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            labels: Vec::new(),
            constraints: Vec::new(),
            num_inputs: 0,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    pub fn allocate_one(&mut self, label: impl Into<String>) -> Variable {
        let var = Variable::new(self.values.len());
        self.values.push(None);
        self.labels.push(label.into());
        var
    }

    /// Allocates `count` fresh variables labelled `{label}_{i}`.
    pub fn allocate(&mut self, count: usize, label: &str) -> Vec<Variable> {
        (0..count)
            .map(|i| self.allocate_one(format!("{label}_{i}")))
            .collect()
    }

    pub fn label(&self, var: Variable) -> Option<&str> {
        self.labels.get(var.index()).map(String::as_str)
    }

    /// Marks the `n` earliest-allocated variables as primary input.
    pub fn set_public_input_size(&mut self, n: usize) -> Result<(), R1csError> {
        if n > self.values.len() {
            return Err(R1csError::PublicInputSize {
                requested: n,
                allocated: self.values.len(),
            });
        }
        self.num_inputs = n;
        Ok(())
    }

    pub fn add_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
        annotation: impl Into<String>,
    ) {
        self.constraints.push(Constraint::new(a, b, c, annotation));
    }

    pub fn set_value(&mut self, var: Variable, value: F) -> Result<(), R1csError> {
        let allocated = self.values.len();
        let slot = self
            .values
            .get_mut(var.index())
            .ok_or(R1csError::UnknownVariable {
                index: var.index(),
                allocated,
            })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn value(&self, var: Variable) -> Result<F, R1csError> {
        match self.values.get(var.index()) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(R1csError::Unassigned {
                index: var.index(),
                label: self.labels[var.index()].clone(),
            }),
            None => Err(R1csError::UnknownVariable {
                index: var.index(),
                allocated: self.values.len(),
            }),
        }
    }

    pub fn values(&self, vars: &[Variable]) -> Result<Vec<F>, R1csError> {
        vars.iter().map(|var| self.value(*var)).collect()
    }

    pub fn lc_value(&self, lc: &LinearCombination<F>) -> Result<F, R1csError> {
        let mut acc = lc.constant;
        for (var, coeff) in &lc.terms {
            acc += *coeff * self.value(*var)?;
        }
        Ok(acc)
    }

    /// Evaluates constraints against the current values, stopping at the
    /// first one that fails or touches an unassigned variable.
    pub fn is_satisfied(&self) -> bool {
        self.constraints.iter().all(|constraint| {
            match (
                self.lc_value(&constraint.a),
                self.lc_value(&constraint.b),
                self.lc_value(&constraint.c),
            ) {
                (Ok(a), Ok(b), Ok(c)) => a * b == c,
                _ => false,
            }
        })
    }

    pub fn primary_input(&self) -> Result<Vec<F>, R1csError> {
        (0..self.num_inputs)
            .map(|i| self.value(Variable::new(i)))
            .collect()
    }

    pub fn auxiliary_input(&self) -> Result<Vec<F>, R1csError> {
        (self.num_inputs..self.values.len())
            .map(|i| self.value(Variable::new(i)))
            .collect()
    }

    /// Freezes the current shape into an [`R1cs`] for key generation.
    pub fn constraint_system(&self) -> R1cs<F> {
        R1cs::new(
            self.num_inputs,
            self.values.len(),
            self.constraints.clone(),
        )
    }
}
