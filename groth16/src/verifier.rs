use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;
use ark_serialize::Valid;
use tracing::debug;

use crate::error::SnarkError;
use crate::keys::{PreparedVerifyingKey, Proof, VerifyingKey};
use crate::math::curve::Engine;
use crate::math::msm::multi_scalar_mul;

pub fn prepare<E: Engine>(vk: &VerifyingKey<E>) -> PreparedVerifyingKey<E> {
    PreparedVerifyingKey {
        vk: vk.clone(),
        alpha_g1_beta_g2: E::pairing(vk.alpha_g1, vk.beta_g2),
        gamma_g2_neg_pc: (-vk.gamma_g2.into_group()).into_affine().into(),
        delta_g2_neg_pc: (-vk.delta_g2.into_group()).into_affine().into(),
    }
}

/// Strong input consistency: `public_input` must have exactly the declared
/// length. Returns `Ok(false)` for any proof that does not check out.
pub fn verify<E: Engine>(
    vk: &VerifyingKey<E>,
    public_input: &[E::ScalarField],
    proof: &Proof<E>,
) -> Result<bool, SnarkError> {
    verify_prepared(&prepare(vk), public_input, proof)
}

pub fn verify_prepared<E: Engine>(
    pvk: &PreparedVerifyingKey<E>,
    public_input: &[E::ScalarField],
    proof: &Proof<E>,
) -> Result<bool, SnarkError> {
    let expected = pvk.vk.num_inputs();
    if public_input.len() != expected {
        return Err(SnarkError::Shape {
            what: "public input",
            expected,
            found: public_input.len(),
        });
    }
    let _span = tracing::info_span!("groth16::verify", inputs = expected).entered();
    Ok(check(pvk, public_input, proof))
}

/// Weak input consistency: a shorter `public_input` is padded with zeros.
pub fn verify_weak<E: Engine>(
    vk: &VerifyingKey<E>,
    public_input: &[E::ScalarField],
    proof: &Proof<E>,
) -> Result<bool, SnarkError> {
    let expected = vk.num_inputs();
    if public_input.len() > expected {
        return Err(SnarkError::Shape {
            what: "public input",
            expected,
            found: public_input.len(),
        });
    }
    let mut padded = public_input.to_vec();
    padded.resize(expected, E::ScalarField::zero());
    verify(vk, &padded, proof)
}

fn check<E: Engine>(
    pvk: &PreparedVerifyingKey<E>,
    public_input: &[E::ScalarField],
    proof: &Proof<E>,
) -> bool {
    // Points must lie on the curve and in the prime-order subgroup.
    if proof.a.check().is_err() || proof.b.check().is_err() || proof.c.check().is_err() {
        debug!("proof point failed validation");
        return false;
    }

    let Some((constant, inputs)) = pvk.vk.gamma_abc_g1.split_first() else {
        debug!("verifying key has no instance commitments");
        return false;
    };
    let ic = constant.into_group() + multi_scalar_mul(inputs, public_input);

    // e(A, B) * e(IC, -gamma) * e(C, -delta) == e(alpha, beta)
    let lhs = E::multi_pairing(
        [
            E::G1Prepared::from(proof.a),
            E::G1Prepared::from(ic.into_affine()),
            E::G1Prepared::from(proof.c),
        ],
        [
            E::G2Prepared::from(proof.b),
            pvk.gamma_g2_neg_pc.clone(),
            pvk.delta_g2_neg_pc.clone(),
        ],
    );
    let accepted = lhs == pvk.alpha_g1_beta_g2;
    debug!(accepted, "pairing check");
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::generator::setup;
    use crate::prover::prove;
    use crate::r1cs::{Constraint, R1cs, Variable};
    use ark_bls12_381::{Bls12_381, Fq, Fr, G1Affine};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    // x * y = out with x, y public
    fn product_system() -> R1cs<Fr> {
        let (x, y, out) = (Variable::new(0), Variable::new(1), Variable::new(2));
        R1cs::new(2, 3, vec![Constraint::new(x.into(), y.into(), out.into(), "product")])
    }

    fn fixture(seed: u64) -> (VerifyingKey<Bls12_381>, Proof<Bls12_381>) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, vk) = setup::<Bls12_381, _>(product_system(), &mut rng).unwrap();
        let proof = prove(
            &pk,
            &[Fr::from(4u64), Fr::from(5u64)],
            &[Fr::from(20u64)],
            &mut rng,
        )
        .unwrap();
        (vk, proof)
    }

    #[test]
    fn accepts_valid_proof() {
        let (vk, proof) = fixture(21);
        let input = [Fr::from(4u64), Fr::from(5u64)];
        assert!(verify(&vk, &input, &proof).unwrap());
        assert!(verify_prepared(&prepare(&vk), &input, &proof).unwrap());
        assert!(verify_prepared(&PreparedVerifyingKey::from(vk), &input, &proof).unwrap());
    }

    #[test]
    fn rejects_altered_input_and_tampered_proof() {
        let (vk, proof) = fixture(22);
        assert!(!verify(&vk, &[Fr::from(4u64), Fr::from(6u64)], &proof).unwrap());

        let mut tampered = proof.clone();
        tampered.c = (tampered.c.into_group() + G1Affine::generator()).into_affine();
        assert!(!verify(&vk, &[Fr::from(4u64), Fr::from(5u64)], &tampered).unwrap());
    }

    #[test]
    fn rejects_point_outside_subgroup() {
        let (vk, mut proof) = fixture(23);
        // The first curve point by x-coordinate is outside the prime-order
        // subgroup; G1 has a large cofactor.
        proof.a = (1u64..)
            .find_map(|x| G1Affine::get_point_from_x_unchecked(Fq::from(x), false))
            .unwrap();
        assert!(proof.a.is_on_curve());
        assert!(!proof.a.is_in_correct_subgroup_assuming_on_curve());
        assert!(!verify(&vk, &[Fr::from(4u64), Fr::from(5u64)], &proof).unwrap());
    }

    #[test]
    fn input_length_policies() {
        let (vk, proof) = fixture(24);

        let err = verify(&vk, &[Fr::from(4u64)], &proof).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);

        let three = [Fr::from(4u64), Fr::from(5u64), Fr::from(0u64)];
        assert!(matches!(
            verify_weak(&vk, &three, &proof),
            Err(SnarkError::Shape { expected: 2, found: 3, .. })
        ));

        // Padding turns (4) into (4, 0), which is not the proven statement.
        assert!(!verify_weak(&vk, &[Fr::from(4u64)], &proof).unwrap());
        assert!(verify_weak(&vk, &[Fr::from(4u64), Fr::from(5u64)], &proof).unwrap());
    }
}
