pub mod curve;
pub mod domain;
pub mod msm;

pub use domain::EvaluationDomain;
