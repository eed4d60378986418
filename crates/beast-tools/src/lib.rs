//! Observational tooling for the Beast agent.
//!
//! Everything here sits downstream of the decision loop: sinks receive what the agent decided
//! and never influence it. Debug drawing and overlays belong in adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{LogTraceSink, NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
