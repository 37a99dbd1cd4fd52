use thiserror::Error;

/// Coarse classification shared by every error this crate returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid public-input configuration on the protoboard.
    Domain,
    /// A witness value was read before it was written.
    Unassigned,
    /// A gadget was wired or driven incorrectly.
    Logic,
    /// The constraint system cannot be compiled into keys.
    Setup,
    /// The assignment does not satisfy the constraint system.
    Witness,
    /// An input vector has the wrong length.
    Shape,
    /// Key or proof bytes could not be decoded.
    Encoding,
}

/// Errors raised while building or assigning a constraint system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum R1csError {
    #[error("public input size {requested} exceeds variable count {allocated}")]
    PublicInputSize { requested: usize, allocated: usize },
    #[error("variable {index} (`{label}`) read before it was assigned")]
    Unassigned { index: usize, label: String },
    #[error("variable {index} was never allocated ({allocated} allocated)")]
    UnknownVariable { index: usize, allocated: usize },
    #[error("gadget `{gadget}`: {reason}")]
    Logic { gadget: String, reason: String },
}

impl R1csError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            R1csError::PublicInputSize { .. } => ErrorKind::Domain,
            R1csError::Unassigned { .. } | R1csError::UnknownVariable { .. } => {
                ErrorKind::Unassigned
            }
            R1csError::Logic { .. } => ErrorKind::Logic,
        }
    }
}

/// Reasons a constraint system is rejected by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("constraint system has no constraints")]
    EmptyConstraintSystem,
    #[error("public input size {inputs} exceeds variable count {variables}")]
    InconsistentInputSize { inputs: usize, variables: usize },
    #[error("constraint {constraint} references variable {index} but only {variables} exist")]
    DanglingVariable {
        constraint: usize,
        index: usize,
        variables: usize,
    },
    #[error("no evaluation domain holds {size} rows")]
    UnsupportedDomain { size: usize },
}

/// Errors raised by setup, proving, verification and key/proof decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnarkError {
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("constraint {constraint} (`{annotation}`) is not satisfied by the assignment")]
    Unsatisfied { constraint: usize, annotation: String },
    #[error("{what}: expected {expected} elements, found {found}")]
    Shape {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("failed to decode {what}")]
    Encoding { what: &'static str },
}

impl SnarkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SnarkError::Setup(_) => ErrorKind::Setup,
            SnarkError::Unsatisfied { .. } => ErrorKind::Witness,
            SnarkError::Shape { .. } => ErrorKind::Shape,
            SnarkError::Encoding { .. } => ErrorKind::Encoding,
        }
    }
}
