//! The discovery pipeline: the outermost layer that turns a handful of
//! seed signatures into a ranked list of scored, model-checked
//! [`Discovery`] records.
//!
//! ```text
//! seeds ──▶ expand_round (moves + cheap structural score) ──▶ frontier
//!                                         │  (repeated `depth` times)
//!                                         ▼
//!                              top_n structural survivors
//!                                         │
//!                                         ▼
//!                     model-check (solver, optionally parallel)
//!                                         │
//!                                         ▼
//!                          full score + novelty ──▶ Vec<Discovery>
//! ```
//!
//! [`prove`] is the separate boundary function used when a caller wants
//! to falsify a specific conjecture against a specific signature, rather
//! than explore.

pub mod cancel;
pub mod config;
pub mod discovery;
pub mod novelty;
pub mod prove;
pub mod run;

pub use cancel::CancellationFlag;
pub use config::PipelineConfig;
pub use discovery::Discovery;
pub use novelty::NoveltyCache;
pub use prove::{prove, ProveStatus};
pub use run::run;
