use ark_ff::{Field, PrimeField};
use ark_poly::domain::general::GeneralEvaluationDomain;
use ark_poly::EvaluationDomain as _;

/// Multiplicative subgroup of roots of unity hosting the QAP rows, plus the
/// coset `g * H` (with `g` the field's multiplicative generator) used to
/// divide by the vanishing polynomial.
#[derive(Clone, Debug)]
pub struct EvaluationDomain<F: PrimeField> {
    inner: GeneralEvaluationDomain<F>,
}

impl<F: PrimeField> EvaluationDomain<F> {
    /// Smallest supported domain with at least `size` points.
    pub fn new(size: usize) -> Option<Self> {
        let inner = GeneralEvaluationDomain::<F>::new(size)?;
        Some(Self { inner })
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn element(&self, index: usize) -> F {
        self.inner.element(index)
    }

    pub fn fft_in_place(&self, values: &mut Vec<F>) {
        self.inner.fft_in_place(values)
    }

    pub fn ifft_in_place(&self, values: &mut Vec<F>) {
        self.inner.ifft_in_place(values)
    }

    /// `Z(X) = X^n - 1` evaluated at `point`.
    pub fn evaluate_vanishing_polynomial(&self, point: F) -> F {
        self.inner.evaluate_vanishing_polynomial(point)
    }

    /// `L_0(point), ..., L_{n-1}(point)` for the Lagrange basis of the domain.
    pub fn lagrange_coefficients(&self, point: F) -> Vec<F> {
        self.inner.evaluate_all_lagrange_coefficients(point)
    }

    /// Single Lagrange basis polynomial `L_index` at `point`.
    pub fn lagrange_basis_at(&self, index: usize, point: F) -> Option<F> {
        let omega_i = self.element(index);
        if point == omega_i {
            return Some(F::one());
        }
        let numerator = self.evaluate_vanishing_polynomial(point) * omega_i;
        let denominator = F::from(self.size() as u64) * (point - omega_i);
        Some(numerator * denominator.inverse()?)
    }

    pub fn coset_offset(&self) -> F {
        F::GENERATOR
    }

    /// Value of `Z` on the coset. `g^n - 1` is the same at every coset point.
    pub fn coset_vanishing_value(&self) -> F {
        self.coset_offset().pow([self.size() as u64]) - F::one()
    }

    /// Coefficients in, evaluations over `g * H` out.
    pub fn coset_fft_in_place(&self, coeffs: &mut Vec<F>) {
        distribute_powers(coeffs, self.coset_offset());
        self.fft_in_place(coeffs);
    }

    /// Evaluations over `g * H` in, coefficients out.
    pub fn coset_ifft_in_place(&self, evals: &mut Vec<F>) -> Option<()> {
        self.ifft_in_place(evals);
        distribute_powers(evals, self.coset_offset().inverse()?);
        Some(())
    }
}

fn distribute_powers<F: Field>(coeffs: &mut [F], g: F) {
    let mut power = F::one();
    for coeff in coeffs.iter_mut() {
        *coeff *= power;
        power *= g;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_poly::univariate::DensePolynomial;
    use ark_poly::{DenseUVPolynomial, Polynomial};

    #[test]
    fn rounds_up_to_power_of_two() {
        let domain = EvaluationDomain::<Fr>::new(11).unwrap();
        assert_eq!(domain.size(), 16);
    }

    #[test]
    fn lagrange_coefficients_match_single_basis() {
        let domain = EvaluationDomain::<Fr>::new(8).unwrap();
        let point = Fr::from(1234u64);
        let all = domain.lagrange_coefficients(point);
        for (i, coeff) in all.iter().enumerate() {
            assert_eq!(Some(*coeff), domain.lagrange_basis_at(i, point));
        }
        assert_eq!(domain.lagrange_basis_at(3, domain.element(3)), Some(Fr::from(1u64)));
    }

    #[test]
    fn coset_round_trip_and_evaluation() {
        let domain = EvaluationDomain::<Fr>::new(4).unwrap();
        let coeffs: Vec<Fr> = (1u64..=4).map(Fr::from).collect();
        let poly = DensePolynomial::from_coefficients_vec(coeffs.clone());

        let mut evals = coeffs.clone();
        domain.coset_fft_in_place(&mut evals);
        let g = domain.coset_offset();
        for (i, eval) in evals.iter().enumerate() {
            assert_eq!(*eval, poly.evaluate(&(g * domain.element(i))));
        }

        domain.coset_ifft_in_place(&mut evals).unwrap();
        assert_eq!(evals, coeffs);
    }

    #[test]
    fn vanishing_polynomial_is_constant_on_coset() {
        let domain = EvaluationDomain::<Fr>::new(8).unwrap();
        let g = domain.coset_offset();
        let expected = domain.coset_vanishing_value();
        assert_ne!(expected, Fr::from(0u64));
        for i in 0..domain.size() {
            assert_eq!(
                domain.evaluate_vanishing_polynomial(g * domain.element(i)),
                expected
            );
        }
    }
}
