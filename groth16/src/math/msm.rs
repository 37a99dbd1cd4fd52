use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;

/// `sum_i scalars[i] * bases[i]`, pairing up to the shorter of the two.
pub fn multi_scalar_mul<A: AffineRepr>(bases: &[A], scalars: &[A::ScalarField]) -> A::Group {
    let mut acc = A::Group::zero();
    for (base, scalar) in bases.iter().zip(scalars) {
        if scalar.is_zero() {
            continue;
        }
        acc += *base * *scalar;
    }
    acc
}

/// `scalars[i] * generator` for every scalar, normalized in one batch.
pub fn fixed_base_mul<G: CurveGroup>(generator: G, scalars: &[G::ScalarField]) -> Vec<G::Affine> {
    let points: Vec<G> = scalars.iter().map(|scalar| generator * *scalar).collect();
    G::normalize_batch(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective};

    #[test]
    fn msm_matches_naive_sum() {
        let g = G1Affine::generator();
        let scalars: Vec<Fr> = (1u64..=5).map(Fr::from).collect();
        let bases = fixed_base_mul(G1Projective::from(g), &scalars);

        // sum_i i * (i * g) = 55 * g
        let acc = multi_scalar_mul(&bases, &scalars);
        assert_eq!(acc.into_affine(), (g * Fr::from(55u64)).into_affine());
    }

    #[test]
    fn zero_scalars_contribute_nothing() {
        let g = G1Affine::generator();
        let acc = multi_scalar_mul(&[g, g], &[Fr::from(0u64), Fr::from(3u64)]);
        assert_eq!(acc, g * Fr::from(3u64));
    }
}
