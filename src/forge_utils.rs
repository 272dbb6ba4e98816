pub mod artifact;
pub mod build;
pub mod common;

pub use self::artifact::ContractArtifact;
pub use self::build::ForgeBuild;
pub use self::common::ContractSpec;
