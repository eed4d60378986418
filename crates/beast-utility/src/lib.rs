//! Utility arbitration between competing choices.
//!
//! On each decision tick every registered choice scores the world and the highest-scoring one
//! runs. Tie-breaking is stable by registration order for determinism.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod choice;
pub mod system;

pub use choice::{Choice, ChoiceKey};
pub use system::{ChoiceScore, Selection, UtilitySystem, UtilitySystemConfig};
