use ark_std::rand::{CryptoRng, RngCore};
use groth16::{DefaultEngine, ScalarField};
use tracing::{info, info_span};

use crate::circuit::{demo_public_input, demo_secret_input, InnerProductCircuit};
use crate::config::DemoConfig;
use crate::types::Result;
use crate::utils::short_hex;

/// What a demo run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub verified: bool,
    pub num_constraints: usize,
    pub num_variables: usize,
    /// Compressed proof size in bytes.
    pub proof_size: usize,
    /// SHA-256 of the encoded verifying key.
    pub fingerprint: [u8; 32],
}

/// Builds the inner-product-zero circuit for `config.dimension`, runs setup,
/// proves knowledge of the demo secret and verifies against the public
/// vector alone.
pub fn run<R: RngCore + CryptoRng>(config: &DemoConfig, rng: &mut R) -> Result<Outcome> {
    config.validate()?;
    let k = config.dimension;
    let _span = info_span!("demo", dimension = k).entered();

    let mut circuit = {
        let _span = info_span!("build").entered();
        InnerProductCircuit::<ScalarField>::build(k)?
    };
    let cs = circuit.constraint_system();
    let (num_constraints, num_variables) = (cs.num_constraints(), cs.num_variables);

    let (pk, vk) = {
        let _span = info_span!("setup").entered();
        groth16::setup::<DefaultEngine, _>(cs, rng)?
    };
    let fingerprint = vk.fingerprint()?;
    info!(key = %short_hex(&fingerprint, 8), "key pair generated");

    let proof = {
        let _span = info_span!("prove").entered();
        let public = demo_public_input(k);
        let mut secret: Vec<ScalarField> = demo_secret_input(k);
        if let Some(index) = config.flip {
            secret[index] = -secret[index];
        }
        circuit.assign(&public, &secret)?;
        groth16::prove(
            &pk,
            &circuit.primary_input()?,
            &circuit.auxiliary_input()?,
            rng,
        )?
    };
    let proof_size = proof.to_bytes()?.len();

    let verified = {
        let _span = info_span!("verify").entered();
        // The verifier only knows the public vector.
        let primary = demo_public_input::<ScalarField>(k);
        groth16::verify(&vk, &primary, &proof)?
    };
    info!(verified, proof_size, "demo finished");

    Ok(Outcome {
        verified,
        num_constraints,
        num_variables,
        proof_size,
        fingerprint,
    })
}
