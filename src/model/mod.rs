//! Model management
//!
//! Model identifiers, raw predictor outputs, the artefact codec and the
//! in-memory store shared by the HTTP handlers.

pub mod artifact;
pub mod kind;
pub mod store;
pub mod value;

pub use artifact::{decode_artifact, ModelArtifact, Predictor, TreeNode};
pub use kind::ModelKind;
pub use store::{LoadOutcome, ModelSnapshot, ModelStore};
pub use value::RawValue;
