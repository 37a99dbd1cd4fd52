use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use sha2::{Digest, Sha256};

use crate::error::SnarkError;
use crate::r1cs::R1cs;

const VK_FORMAT_MAGIC: &[u8; 4] = b"G16V";
const VK_FORMAT_VERSION: u8 = 1;

/// Everything the prover needs: the constraint system it was generated for
/// and the setup elements in G1/G2.
#[derive(Clone, Debug)]
pub struct ProvingKey<E: Pairing> {
    pub cs: R1cs<E::ScalarField>,
    pub domain_size: usize,
    pub alpha_g1: E::G1Affine,
    pub beta_g1: E::G1Affine,
    pub beta_g2: E::G2Affine,
    pub delta_g1: E::G1Affine,
    pub delta_g2: E::G2Affine,
    /// `u_i(t)` for every assignment slot.
    pub a_query: Vec<E::G1Affine>,
    /// `v_i(t)` in G1 for every assignment slot.
    pub b_g1_query: Vec<E::G1Affine>,
    /// `v_i(t)` in G2 for every assignment slot.
    pub b_g2_query: Vec<E::G2Affine>,
    /// `t^i Z(t) / delta`.
    pub h_query: Vec<E::G1Affine>,
    /// `(beta u_i(t) + alpha v_i(t) + w_i(t)) / delta` for auxiliary slots.
    pub l_query: Vec<E::G1Affine>,
    pub vk: VerifyingKey<E>,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    pub alpha_g1: E::G1Affine,
    pub beta_g2: E::G2Affine,
    pub gamma_g2: E::G2Affine,
    pub delta_g2: E::G2Affine,
    /// `(beta u_i(t) + alpha v_i(t) + w_i(t)) / gamma` for the constant one
    /// and every primary input.
    pub gamma_abc_g1: Vec<E::G1Affine>,
}

impl<E: Pairing> VerifyingKey<E> {
    /// Declared primary input size.
    pub fn num_inputs(&self) -> usize {
        self.gamma_abc_g1.len().saturating_sub(1)
    }

    /// `G16V`, version, then the compressed key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnarkError> {
        let mut bytes = Vec::with_capacity(5 + self.compressed_size());
        bytes.extend_from_slice(VK_FORMAT_MAGIC);
        bytes.push(VK_FORMAT_VERSION);
        self.serialize_compressed(&mut bytes)
            .map_err(|_| SnarkError::Encoding { what: "verifying key" })?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnarkError> {
        let err = SnarkError::Encoding { what: "verifying key" };
        if bytes.len() < 5 || &bytes[..4] != VK_FORMAT_MAGIC || bytes[4] != VK_FORMAT_VERSION {
            return Err(err);
        }
        let mut body = &bytes[5..];
        let vk = Self::deserialize_compressed(&mut body).map_err(|_| err.clone())?;
        if !body.is_empty() {
            return Err(err);
        }
        Ok(vk)
    }

    /// SHA-256 of the compressed key; identifies a key pair.
    pub fn fingerprint(&self) -> Result<[u8; 32], SnarkError> {
        let digest = Sha256::digest(self.to_bytes()?);
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Ok(out)
    }
}

/// Verifying key with `e(alpha, beta)` computed and the G2 elements
/// negated and prepared for a single multi-pairing.
#[derive(Clone, Debug)]
pub struct PreparedVerifyingKey<E: Pairing> {
    pub vk: VerifyingKey<E>,
    pub alpha_g1_beta_g2: PairingOutput<E>,
    pub gamma_g2_neg_pc: E::G2Prepared,
    pub delta_g2_neg_pc: E::G2Prepared,
}

impl<E: Pairing> From<VerifyingKey<E>> for PreparedVerifyingKey<E> {
    fn from(vk: VerifyingKey<E>) -> Self {
        crate::verifier::prepare(&vk)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    pub a: E::G1Affine,
    pub b: E::G2Affine,
    pub c: E::G1Affine,
}

impl<E: Pairing> Proof<E> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnarkError> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)
            .map_err(|_| SnarkError::Encoding { what: "proof" })?;
        Ok(bytes)
    }

    /// Decodes and validates every point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnarkError> {
        let err = SnarkError::Encoding { what: "proof" };
        let mut body = bytes;
        let proof = Self::deserialize_compressed(&mut body).map_err(|_| err.clone())?;
        if !body.is_empty() {
            return Err(err);
        }
        Ok(proof)
    }
}
