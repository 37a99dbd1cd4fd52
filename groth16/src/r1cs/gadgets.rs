use ark_ff::Field;

use super::{LinearCombination, Protoboard, Variable};
use crate::error::R1csError;

/// Pins `lc` to `constant` with the single constraint `1 * lc = constant`.
pub fn generate_equals_const<F: Field>(
    pb: &mut Protoboard<F>,
    lc: LinearCombination<F>,
    constant: F,
    annotation: impl Into<String>,
) {
    pb.add_constraint(
        LinearCombination::one(),
        lc,
        LinearCombination::from(constant),
        annotation,
    );
}

/// Enforces `result = sum_i a_i * b_i`.
///
/// Each product costs one constraint and the running sum rides along in the
/// linear combinations: with partial sums `S_0..S_{k-2}` the `i`-th
/// constraint is `a_i * b_i = T_i - T_{i-1}` where `T_{-1} = 0`,
/// `T_i = S_i` below the last index and `T_{k-1} = result`.
#[derive(Clone, Debug)]
pub struct InnerProductGadget {
    a: Vec<Variable>,
    b: Vec<Variable>,
    result: Variable,
    partial_sums: Vec<Variable>,
    annotation: String,
}

impl InnerProductGadget {
    /// Allocates the `k - 1` partial-sum variables on `pb`.
    pub fn new<F: Field>(
        pb: &mut Protoboard<F>,
        a: Vec<Variable>,
        b: Vec<Variable>,
        result: Variable,
        annotation: impl Into<String>,
    ) -> Result<Self, R1csError> {
        let annotation = annotation.into();
        if a.len() != b.len() {
            return Err(R1csError::Logic {
                gadget: annotation,
                reason: format!("input lengths differ ({} vs {})", a.len(), b.len()),
            });
        }
        let partial_sums = pb.allocate(a.len().saturating_sub(1), &format!("{annotation}.S"));
        Ok(Self {
            a,
            b,
            result,
            partial_sums,
            annotation,
        })
    }

    pub fn dimension(&self) -> usize {
        self.a.len()
    }

    pub fn partial_sums(&self) -> &[Variable] {
        &self.partial_sums
    }

    pub fn result(&self) -> Variable {
        self.result
    }

    /// `T_i` in the running-sum chain.
    fn accumulator(&self, i: usize) -> Variable {
        if i + 1 == self.a.len() {
            self.result
        } else {
            self.partial_sums[i]
        }
    }

    pub fn generate_constraints<F: Field>(&self, pb: &mut Protoboard<F>) {
        let k = self.a.len();
        if k == 0 {
            generate_equals_const(
                pb,
                self.result.into(),
                F::zero(),
                format!("{}.empty", self.annotation),
            );
            return;
        }

        for i in 0..k {
            let mut c = LinearCombination::from(self.accumulator(i));
            if i > 0 {
                c.push_term(self.partial_sums[i - 1], -F::one());
            }
            pb.add_constraint(
                self.a[i].into(),
                self.b[i].into(),
                c,
                format!("{}.product_{i}", self.annotation),
            );
        }
    }

    pub fn generate_witness<F: Field>(&self, pb: &mut Protoboard<F>) -> Result<(), R1csError> {
        let mut total = F::zero();
        for i in 0..self.a.len() {
            let a = self.input(pb, self.a[i])?;
            let b = self.input(pb, self.b[i])?;
            total += a * b;
            pb.set_value(self.accumulator(i), total)?;
        }
        if self.a.is_empty() {
            pb.set_value(self.result, total)?;
        }
        Ok(())
    }

    fn input<F: Field>(&self, pb: &Protoboard<F>, var: Variable) -> Result<F, R1csError> {
        pb.value(var).map_err(|err| R1csError::Logic {
            gadget: self.annotation.clone(),
            reason: format!("witness requested before inputs were assigned: {err}"),
        })
    }
}
