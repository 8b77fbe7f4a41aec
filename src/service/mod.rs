//! # Language Service Boundary
//!
//! Everything the views would ask a language-processing backend lives
//! behind the [`Operation`] trait. Today every operation is a
//! [`SimulatedOperation`]: a fixed delay followed by a fixed response.
//! A real backend client would implement the same trait and slot in
//! through [`Services`] without touching the state machine.

pub mod operation;
pub mod simulated;
pub mod types;

pub use operation::{Operation, ServiceError, Services};
pub use simulated::SimulatedOperation;
pub use types::{RewriteRequest, SuggestRequest, TranslateRequest, Translation};
