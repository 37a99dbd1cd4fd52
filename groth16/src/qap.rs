//! R1CS to quadratic arithmetic program reduction.
//!
//! Row `j < num_constraints` of the QAP is constraint `j`. The following
//! `num_inputs + 1` rows encode `z_k * 0 = 0` for every instance slot
//! (the constant one and each primary input), which keeps the instance
//! polynomials linearly independent without changing satisfiability.

use ark_ff::PrimeField;

use crate::error::{SetupError, SnarkError};
use crate::math::EvaluationDomain;
use crate::r1cs::{LinearCombination, R1cs};

/// QAP polynomials `u_i, v_i, w_i` evaluated at a single point `t`, indexed by
/// assignment slot (`0` is the constant one).
#[derive(Clone, Debug)]
pub struct QapEvaluations<F: PrimeField> {
    pub a: Vec<F>,
    pub b: Vec<F>,
    pub c: Vec<F>,
    pub zt: F,
    pub domain_size: usize,
}

/// Rejects systems that cannot be compiled into keys.
pub fn check_shape<F: PrimeField>(cs: &R1cs<F>) -> Result<(), SetupError> {
    if cs.constraints.is_empty() {
        return Err(SetupError::EmptyConstraintSystem);
    }
    if cs.num_inputs > cs.num_variables {
        return Err(SetupError::InconsistentInputSize {
            inputs: cs.num_inputs,
            variables: cs.num_variables,
        });
    }
    for (idx, constraint) in cs.constraints.iter().enumerate() {
        if let Some(index) = constraint.max_index() {
            if index >= cs.num_variables {
                return Err(SetupError::DanglingVariable {
                    constraint: idx,
                    index,
                    variables: cs.num_variables,
                });
            }
        }
    }
    Ok(())
}

pub fn domain_for<F: PrimeField>(cs: &R1cs<F>) -> Result<EvaluationDomain<F>, SetupError> {
    let rows = cs.num_constraints() + cs.num_inputs + 1;
    EvaluationDomain::new(rows).ok_or(SetupError::UnsupportedDomain { size: rows })
}

/// Evaluates every QAP polynomial at `t`. Used only by key generation.
pub fn instance_map_at<F: PrimeField>(
    cs: &R1cs<F>,
    domain: &EvaluationDomain<F>,
    t: F,
) -> QapEvaluations<F> {
    let lagrange = domain.lagrange_coefficients(t);
    let slots = cs.num_variables + 1;
    let mut a = vec![F::zero(); slots];
    let mut b = vec![F::zero(); slots];
    let mut c = vec![F::zero(); slots];

    for (row, constraint) in cs.constraints.iter().enumerate() {
        let l = lagrange[row];
        accumulate(&mut a, &constraint.a, l);
        accumulate(&mut b, &constraint.b, l);
        accumulate(&mut c, &constraint.c, l);
    }

    let base = cs.num_constraints();
    for slot in 0..=cs.num_inputs {
        a[slot] += lagrange[base + slot];
    }

    QapEvaluations {
        a,
        b,
        c,
        zt: domain.evaluate_vanishing_polynomial(t),
        domain_size: domain.size(),
    }
}

fn accumulate<F: PrimeField>(out: &mut [F], lc: &LinearCombination<F>, l: F) {
    out[0] += lc.constant * l;
    for (var, coeff) in &lc.terms {
        out[var.index() + 1] += *coeff * l;
    }
}

/// Coefficients of `h(X) = (A(X) B(X) - C(X)) / Z(X)` for the full
/// assignment `z = (1, primary, auxiliary)`. The caller has already checked
/// satisfaction, so the division is exact and `h` has degree below
/// `domain.size() - 1`.
pub fn witness_map<F: PrimeField>(
    cs: &R1cs<F>,
    domain: &EvaluationDomain<F>,
    values: &[F],
) -> Result<Vec<F>, SnarkError> {
    let n = domain.size();
    let mut a = vec![F::zero(); n];
    let mut b = vec![F::zero(); n];
    let mut c = vec![F::zero(); n];

    let shape = |found| SnarkError::Shape {
        what: "assignment",
        expected: cs.num_variables,
        found,
    };
    if values.len() != cs.num_variables {
        return Err(shape(values.len()));
    }

    for (row, constraint) in cs.constraints.iter().enumerate() {
        a[row] = constraint.a.evaluate(values).ok_or(shape(values.len()))?;
        b[row] = constraint.b.evaluate(values).ok_or(shape(values.len()))?;
        c[row] = constraint.c.evaluate(values).ok_or(shape(values.len()))?;
    }
    let base = cs.num_constraints();
    a[base] = F::one();
    a[base + 1..=base + cs.num_inputs].copy_from_slice(&values[..cs.num_inputs]);

    domain.ifft_in_place(&mut a);
    domain.ifft_in_place(&mut b);
    domain.ifft_in_place(&mut c);
    domain.coset_fft_in_place(&mut a);
    domain.coset_fft_in_place(&mut b);
    domain.coset_fft_in_place(&mut c);

    let z_inv = domain
        .coset_vanishing_value()
        .inverse()
        .ok_or(SnarkError::Setup(SetupError::UnsupportedDomain { size: n }))?;
    let mut h: Vec<F> = a
        .iter()
        .zip(&b)
        .zip(&c)
        .map(|((a, b), c)| (*a * b - c) * z_inv)
        .collect();

    domain
        .coset_ifft_in_place(&mut h)
        .ok_or(SnarkError::Setup(SetupError::UnsupportedDomain { size: n }))?;
    h.truncate(n - 1);
    Ok(h)
}
