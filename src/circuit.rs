//! The inner-product-equals-zero relation: public `A`, private `B`,
//! `<A, B> = 0`.

use ark_ff::Field;
use groth16::{generate_equals_const, InnerProductGadget, Protoboard, R1cs, Variable};
use tracing::debug;

use crate::types::{Error, Result};

/// Board layout: `A_0..A_{k-1}` (primary), `B_0..B_{k-1}`, `res`, then the
/// gadget's partial sums.
pub struct InnerProductCircuit<F: Field> {
    pb: Protoboard<F>,
    public: Vec<Variable>,
    secret: Vec<Variable>,
    result: Variable,
    gadget: InnerProductGadget,
}

impl<F: Field> InnerProductCircuit<F> {
    pub fn build(dimension: usize) -> Result<Self> {
        let mut pb = Protoboard::new();
        let public = pb.allocate(dimension, "A");
        let secret = pb.allocate(dimension, "B");
        let result = pb.allocate_one("res");
        let gadget = InnerProductGadget::new(
            &mut pb,
            public.clone(),
            secret.clone(),
            result,
            "compute_inner_product",
        )?;
        pb.set_public_input_size(dimension)?;

        gadget.generate_constraints(&mut pb);
        generate_equals_const(&mut pb, result.into(), F::zero(), "res = 0");
        debug!(
            dimension,
            variables = pb.num_variables(),
            constraints = pb.num_constraints(),
            "inner product circuit built"
        );

        Ok(Self {
            pb,
            public,
            secret,
            result,
            gadget,
        })
    }

    pub fn dimension(&self) -> usize {
        self.public.len()
    }

    pub fn protoboard(&self) -> &Protoboard<F> {
        &self.pb
    }

    pub fn constraint_system(&self) -> R1cs<F> {
        self.pb.constraint_system()
    }

    /// Writes both vectors and derives the products and running sums. The
    /// board may end up unsatisfied if `<public, secret> != 0`.
    pub fn assign(&mut self, public: &[F], secret: &[F]) -> Result<()> {
        for (name, values) in [("public", public), ("secret", secret)] {
            if values.len() != self.dimension() {
                return Err(Error::Config(format!(
                    "{name} vector has {} elements, circuit dimension is {}",
                    values.len(),
                    self.dimension()
                )));
            }
        }
        for (var, value) in self.public.iter().zip(public) {
            self.pb.set_value(*var, *value)?;
        }
        for (var, value) in self.secret.iter().zip(secret) {
            self.pb.set_value(*var, *value)?;
        }
        self.gadget.generate_witness(&mut self.pb)?;
        Ok(())
    }

    pub fn primary_input(&self) -> Result<Vec<F>> {
        Ok(self.pb.primary_input()?)
    }

    pub fn auxiliary_input(&self) -> Result<Vec<F>> {
        Ok(self.pb.auxiliary_input()?)
    }

    /// Value of `res` after [`assign`](Self::assign).
    pub fn result(&self) -> Result<F> {
        Ok(self.pb.value(self.result)?)
    }
}

/// `k` ones.
pub fn demo_public_input<F: Field>(k: usize) -> Vec<F> {
    vec![F::one(); k]
}

/// `1, -1, 1, -1, ...`, orthogonal to [`demo_public_input`]. For odd `k`
/// the unpaired last element is zero.
pub fn demo_secret_input<F: Field>(k: usize) -> Vec<F> {
    (0..k)
        .map(|i| {
            if k % 2 == 1 && i + 1 == k {
                F::zero()
            } else if i % 2 == 0 {
                F::one()
            } else {
                -F::one()
            }
        })
        .collect()
}
