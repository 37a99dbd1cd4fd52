use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Field;
use ark_std::rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::SnarkError;
use crate::keys::{ProvingKey, VerifyingKey};
use crate::math::curve::Engine;
use crate::math::msm::fixed_base_mul;
use crate::math::EvaluationDomain;
use crate::qap::{check_shape, domain_for, instance_map_at};
use crate::r1cs::R1cs;

/// Setup trapdoor. Wiped when dropped, so it never outlives `setup`.
struct ToxicWaste<F: Field> {
    t: F,
    alpha: F,
    beta: F,
    gamma: F,
    gamma_inv: F,
    delta: F,
    delta_inv: F,
}

impl<F: ark_ff::PrimeField> ToxicWaste<F> {
    fn sample<R: RngCore + CryptoRng>(rng: &mut R, domain: &EvaluationDomain<F>) -> Self {
        // t must avoid the domain so that Z(t) != 0.
        let t = loop {
            let t = F::rand(rng);
            if !domain.evaluate_vanishing_polynomial(t).is_zero() {
                break t;
            }
        };
        let (alpha, _) = sample_invertible(rng);
        let (beta, _) = sample_invertible(rng);
        let (gamma, gamma_inv) = sample_invertible(rng);
        let (delta, delta_inv) = sample_invertible(rng);
        Self {
            t,
            alpha,
            beta,
            gamma,
            gamma_inv,
            delta,
            delta_inv,
        }
    }
}

impl<F: Field> Drop for ToxicWaste<F> {
    fn drop(&mut self) {
        self.t.zeroize();
        self.alpha.zeroize();
        self.beta.zeroize();
        self.gamma.zeroize();
        self.gamma_inv.zeroize();
        self.delta.zeroize();
        self.delta_inv.zeroize();
    }
}

fn sample_invertible<F: Field, R: RngCore + CryptoRng>(rng: &mut R) -> (F, F) {
    loop {
        let x = F::rand(rng);
        if let Some(inv) = x.inverse() {
            return (x, inv);
        }
    }
}

/// Trusted setup for `cs`. Every call draws a fresh trapdoor, so keys from
/// different calls never verify each other's proofs.
pub fn setup<E: Engine, R: RngCore + CryptoRng>(
    cs: R1cs<E::ScalarField>,
    rng: &mut R,
) -> Result<(ProvingKey<E>, VerifyingKey<E>), SnarkError> {
    let _span = tracing::info_span!(
        "groth16::setup",
        constraints = cs.num_constraints(),
        inputs = cs.num_inputs,
        variables = cs.num_variables
    )
    .entered();

    check_shape(&cs)?;
    let domain = domain_for(&cs)?;
    debug!(domain_size = domain.size(), "sampling trapdoor");

    let waste = ToxicWaste::sample(rng, &domain);
    let mut qap = instance_map_at(&cs, &domain, waste.t);

    // beta u_i(t) + alpha v_i(t) + w_i(t)
    let mut abc: Vec<E::ScalarField> = qap
        .a
        .iter()
        .zip(&qap.b)
        .zip(&qap.c)
        .map(|((a, b), c)| waste.beta * a + waste.alpha * b + c)
        .collect();
    let instance_slots = cs.num_inputs + 1;
    let mut gamma_abc: Vec<E::ScalarField> = abc[..instance_slots]
        .iter()
        .map(|value| *value * waste.gamma_inv)
        .collect();
    let mut l: Vec<E::ScalarField> = abc[instance_slots..]
        .iter()
        .map(|value| *value * waste.delta_inv)
        .collect();

    let zt_over_delta = qap.zt * waste.delta_inv;
    let mut h: Vec<E::ScalarField> = Vec::with_capacity(domain.size() - 1);
    let mut t_power = zt_over_delta;
    for _ in 0..domain.size() - 1 {
        h.push(t_power);
        t_power *= waste.t;
    }

    let g1 = E::G1Affine::generator().into_group();
    let g2 = E::G2Affine::generator().into_group();

    let a_query = fixed_base_mul(g1, &qap.a);
    let b_g1_query = fixed_base_mul(g1, &qap.b);
    let b_g2_query = fixed_base_mul(g2, &qap.b);
    let h_query = fixed_base_mul(g1, &h);
    let l_query = fixed_base_mul(g1, &l);
    let gamma_abc_g1 = fixed_base_mul(g1, &gamma_abc);

    let alpha_g1 = (g1 * waste.alpha).into_affine();
    let beta_g1 = (g1 * waste.beta).into_affine();
    let beta_g2 = (g2 * waste.beta).into_affine();
    let gamma_g2 = (g2 * waste.gamma).into_affine();
    let delta_g1 = (g1 * waste.delta).into_affine();
    let delta_g2 = (g2 * waste.delta).into_affine();

    for column in [
        &mut qap.a,
        &mut qap.b,
        &mut qap.c,
        &mut abc,
        &mut gamma_abc,
        &mut l,
        &mut h,
    ] {
        column.zeroize();
    }

    let vk = VerifyingKey {
        alpha_g1,
        beta_g2,
        gamma_g2,
        delta_g2,
        gamma_abc_g1,
    };
    debug!(
        h_query = h_query.len(),
        l_query = l_query.len(),
        "keys generated"
    );

    let pk = ProvingKey {
        domain_size: domain.size(),
        cs,
        alpha_g1,
        beta_g1,
        beta_g2,
        delta_g1,
        delta_g2,
        a_query,
        b_g1_query,
        b_g2_query,
        h_query,
        l_query,
        vk: vk.clone(),
    };
    Ok((pk, vk))
}
