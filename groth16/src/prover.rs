use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::UniformRand;
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::error::SnarkError;
use crate::keys::{Proof, ProvingKey};
use crate::math::curve::Engine;
use crate::math::msm::multi_scalar_mul;
use crate::qap::{domain_for, witness_map};

/// Proves that `(primary, auxiliary)` satisfies the constraint system the key
/// was generated for. Fresh blinding is drawn per call.
pub fn prove<E: Engine, R: RngCore + CryptoRng>(
    pk: &ProvingKey<E>,
    primary: &[E::ScalarField],
    auxiliary: &[E::ScalarField],
    rng: &mut R,
) -> Result<Proof<E>, SnarkError> {
    let cs = &pk.cs;
    let _span = tracing::info_span!(
        "groth16::prove",
        constraints = cs.num_constraints(),
        variables = cs.num_variables
    )
    .entered();

    if primary.len() != cs.num_inputs {
        return Err(SnarkError::Shape {
            what: "primary input",
            expected: cs.num_inputs,
            found: primary.len(),
        });
    }
    if auxiliary.len() != cs.num_auxiliary() {
        return Err(SnarkError::Shape {
            what: "auxiliary input",
            expected: cs.num_auxiliary(),
            found: auxiliary.len(),
        });
    }
    if let Some(constraint) = cs.first_unsatisfied(primary, auxiliary) {
        let annotation = cs.constraints[constraint].annotation.clone();
        warn!(constraint, annotation = %annotation, "assignment rejected");
        return Err(SnarkError::Unsatisfied {
            constraint,
            annotation,
        });
    }

    let mut z = Vec::with_capacity(cs.num_variables + 1);
    z.push(E::ScalarField::one());
    z.extend_from_slice(primary);
    z.extend_from_slice(auxiliary);

    let domain = domain_for(cs)?;
    let mut h = witness_map(cs, &domain, &z[1..])?;
    debug!(domain_size = domain.size(), h_degree = h.len(), "quotient computed");

    let mut r = E::ScalarField::rand(rng);
    let mut s = E::ScalarField::rand(rng);

    let delta_g1 = pk.delta_g1.into_group();

    let a = pk.alpha_g1.into_group() + multi_scalar_mul(&pk.a_query, &z) + delta_g1 * r;
    let b_g1 = pk.beta_g1.into_group() + multi_scalar_mul(&pk.b_g1_query, &z) + delta_g1 * s;
    let b_g2 = pk.beta_g2.into_group()
        + multi_scalar_mul(&pk.b_g2_query, &z)
        + pk.delta_g2.into_group() * s;

    let c = multi_scalar_mul(&pk.l_query, auxiliary)
        + multi_scalar_mul(&pk.h_query, &h)
        + a * s
        + b_g1 * r
        - delta_g1 * (r * s);

    r.zeroize();
    s.zeroize();
    h.zeroize();
    z.zeroize();

    let points = <E::G1 as CurveGroup>::normalize_batch(&[a, c]);
    Ok(Proof {
        a: points[0],
        b: b_g2.into_affine(),
        c: points[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::generator::setup;
    use crate::r1cs::{Constraint, R1cs, Variable};
    use ark_bls12_381::{Bls12_381, Fr};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn cube_system() -> R1cs<Fr> {
        // x * x = sq, sq * x = out; x is public
        let (x, sq, out) = (Variable::new(0), Variable::new(1), Variable::new(2));
        R1cs::new(
            1,
            3,
            vec![
                Constraint::new(x.into(), x.into(), sq.into(), "square"),
                Constraint::new(sq.into(), x.into(), out.into(), "cube"),
            ],
        )
    }

    #[test]
    fn rejects_wrong_lengths() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let (pk, _) = setup::<Bls12_381, _>(cube_system(), &mut rng).unwrap();
        let three = Fr::from(3u64);

        let err = prove(&pk, &[], &[three, three], &mut rng).unwrap_err();
        assert_eq!(
            err,
            SnarkError::Shape {
                what: "primary input",
                expected: 1,
                found: 0
            }
        );
        let err = prove(&pk, &[three], &[three], &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn reports_first_failing_constraint() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let (pk, _) = setup::<Bls12_381, _>(cube_system(), &mut rng).unwrap();
        let x = Fr::from(3u64);

        let err = prove(&pk, &[x], &[Fr::from(9u64), Fr::from(28u64)], &mut rng).unwrap_err();
        assert_eq!(
            err,
            SnarkError::Unsatisfied {
                constraint: 1,
                annotation: "cube".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Witness);
    }

    #[test]
    fn proofs_are_blinded() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let (pk, _) = setup::<Bls12_381, _>(cube_system(), &mut rng).unwrap();
        let x = Fr::from(3u64);
        let aux = [Fr::from(9u64), Fr::from(27u64)];

        let first = prove(&pk, &[x], &aux, &mut rng).unwrap();
        let second = prove(&pk, &[x], &aux, &mut rng).unwrap();
        assert_ne!(first, second);
    }
}
