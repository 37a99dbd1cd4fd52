//! Rank-1 constraint systems and a pairing-based preprocessing zk-SNARK.
//!
//! Circuits are built on a [`Protoboard`], frozen into an [`R1cs`] and
//! compiled into a key pair by [`setup`]. [`prove`] turns a satisfying
//! assignment into a three-element [`Proof`]; [`verify`] checks it against
//! the primary input alone.

pub mod error;
pub mod generator;
pub mod keys;
pub mod math;
pub mod prover;
pub mod qap;
pub mod r1cs;
pub mod verifier;

pub use error::{ErrorKind, R1csError, SetupError, SnarkError};
pub use generator::setup;
pub use keys::{PreparedVerifyingKey, Proof, ProvingKey, VerifyingKey};
pub use math::curve::Engine;
#[cfg(any(feature = "curve-bls12-381", feature = "curve-bn254"))]
pub use math::curve::{DefaultEngine, ScalarField};
pub use prover::prove;
pub use r1cs::gadgets::{generate_equals_const, InnerProductGadget};
pub use r1cs::{Constraint, LinearCombination, Protoboard, R1cs, Variable};
pub use verifier::{prepare, verify, verify_prepared, verify_weak};

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr};
    use rand::thread_rng;

    #[test]
    fn groth16_roundtrip() {
        let mut pb = Protoboard::<Fr>::new();
        let x = pb.allocate_one("x");
        let y = pb.allocate_one("y");
        pb.set_public_input_size(1).unwrap();
        pb.add_constraint(x.into(), y.into(), Fr::from(33u64).into(), "x * y = 33");
        pb.set_value(x, Fr::from(3u64)).unwrap();
        pb.set_value(y, Fr::from(11u64)).unwrap();
        assert!(pb.is_satisfied());

        let mut rng = thread_rng();
        let (pk, vk) = setup::<Bls12_381, _>(pb.constraint_system(), &mut rng).unwrap();
        let primary = pb.primary_input().unwrap();
        let proof = prove(&pk, &primary, &pb.auxiliary_input().unwrap(), &mut rng).unwrap();

        assert_eq!(vk.gamma_abc_g1.len(), primary.len() + 1, "vk-public mismatch");
        assert!(verify(&vk, &primary, &proof).unwrap());
        let pvk = prepare(&vk);
        assert!(verify_prepared(&pvk, &primary, &proof).unwrap());

        let bytes = proof.to_bytes().unwrap();
        assert_eq!(Proof::<Bls12_381>::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn keys_and_proofs_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProvingKey<Bls12_381>>();
        assert_send_sync::<VerifyingKey<Bls12_381>>();
        assert_send_sync::<PreparedVerifyingKey<Bls12_381>>();
        assert_send_sync::<Proof<Bls12_381>>();
    }

    #[test]
    fn verifying_key_envelope() {
        let mut pb = Protoboard::<Fr>::new();
        let x = pb.allocate_one("x");
        pb.set_public_input_size(1).unwrap();
        generate_equals_const(&mut pb, x.into(), Fr::from(7u64), "x = 7");

        let mut rng = thread_rng();
        let (_, vk) = setup::<Bls12_381, _>(pb.constraint_system(), &mut rng).unwrap();
        let bytes = vk.to_bytes().unwrap();
        assert_eq!(&bytes[..5], b"G16V\x01");
        assert_eq!(VerifyingKey::<Bls12_381>::from_bytes(&bytes).unwrap(), vk);
        assert_eq!(vk.fingerprint().unwrap(), vk.clone().fingerprint().unwrap());

        let mut wrong_version = bytes.clone();
        wrong_version[4] = 2;
        let err = VerifyingKey::<Bls12_381>::from_bytes(&wrong_version).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);

        let mut trailing = bytes;
        trailing.push(0);
        assert!(VerifyingKey::<Bls12_381>::from_bytes(&trailing).is_err());
    }

    #[cfg(feature = "curve-bn254")]
    #[test]
    fn bn254_roundtrip() {
        use ark_bn254::{Bn254, Fr as BnFr};

        let mut pb = Protoboard::<BnFr>::new();
        let a = pb.allocate(2, "A");
        let b = pb.allocate(2, "B");
        let res = pb.allocate_one("res");
        let gadget = InnerProductGadget::new(&mut pb, a.clone(), b.clone(), res, "ip").unwrap();
        pb.set_public_input_size(2).unwrap();
        gadget.generate_constraints(&mut pb);
        generate_equals_const(&mut pb, res.into(), BnFr::from(0u64), "res = 0");
        for (var, value) in a.iter().chain(&b).zip([2u64, 3, 3, 0]) {
            pb.set_value(*var, BnFr::from(value)).unwrap();
        }
        pb.set_value(b[1], -BnFr::from(2u64)).unwrap();
        gadget.generate_witness(&mut pb).unwrap();
        assert!(pb.is_satisfied());

        let mut rng = thread_rng();
        let (pk, vk) = setup::<Bn254, _>(pb.constraint_system(), &mut rng).unwrap();
        let primary = pb.primary_input().unwrap();
        let proof = prove(&pk, &primary, &pb.auxiliary_input().unwrap(), &mut rng).unwrap();
        assert!(verify(&vk, &primary, &proof).unwrap());
    }
}
