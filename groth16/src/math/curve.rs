use ark_ec::pairing::Pairing;

/// Pairing engine the proving system runs over.
pub trait Engine: Pairing + 'static {}

impl<T> Engine for T where T: Pairing + 'static {}

/// BLS12-381 when its backend is enabled.
#[cfg(feature = "curve-bls12-381")]
pub type DefaultEngine = ark_bls12_381::Bls12_381;

/// alt_bn128, used only when BLS12-381 is disabled.
#[cfg(all(feature = "curve-bn254", not(feature = "curve-bls12-381")))]
pub type DefaultEngine = ark_bn254::Bn254;

#[cfg(any(feature = "curve-bls12-381", feature = "curve-bn254"))]
pub type ScalarField = <DefaultEngine as Pairing>::ScalarField;
