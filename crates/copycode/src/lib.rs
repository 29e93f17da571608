//! # copycode
//!
//! Core types for the copycode page enhancement: inject a "Copy" button into
//! every highlighted code block of a statically rendered documentation page.
//!
//! This crate is deliberately DOM-free. It owns the configuration model, the
//! label feedback transition, the scan report, and the error taxonomy, all of
//! which compile and test natively. The `copycode-wasm` crate layers the
//! browser integration (element discovery, button insertion, clipboard write,
//! revert timer) on top of these types.
//!
//! ## Example
//!
//! ```rust
//! use copycode::{CopyOutcome, EnhanceOptions};
//!
//! let options = EnhanceOptions::builder()
//!     .copied_label("Yanked!")
//!     .build();
//! options.validate().unwrap();
//!
//! let ack = CopyOutcome::Copied.acknowledge(&options);
//! assert_eq!(ack.label, "Yanked!");
//! assert_eq!(ack.revert_after_ms, 2000);
//! ```

pub mod error;
pub mod feedback;
pub mod options;
pub mod report;

// Re-export public types
pub use error::EnhanceError;
pub use feedback::{Acknowledgement, CopyOutcome};
pub use options::EnhanceOptions;
pub use report::EnhanceReport;
