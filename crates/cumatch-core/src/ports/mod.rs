//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod clipboard;
pub mod detector;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use detector::{
    ChainDetector, CudaDetector, DetectionError, DetectionOutcome, DetectionStrategy,
};
