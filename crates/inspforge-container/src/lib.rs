//! # inspforge-container
//!
//! Byte-level handling of INSP stereoscopic containers.
//!
//! An INSP file is treated as three contiguous regions: an opaque header, an
//! embedded JPEG payload, and an opaque footer. This crate locates the payload
//! by scanning for the JPEG start/end markers and builds new containers by
//! swapping the payload while copying header and footer verbatim.
//!
//! ## Example
//!
//! ```no_run
//! use inspforge_container::{Splicer, Template};
//!
//! let template = Template::load("reference.insp").unwrap();
//! println!("Template: {}", template.boundaries());
//!
//! let jpeg = std::fs::read("photo.jpg").unwrap();
//! Splicer::new(&template).write_to("photo.insp", &jpeg).unwrap();
//! ```

pub mod analyzer;
pub mod error;
pub mod marker;
pub mod splice;

pub use analyzer::{analyze, detect_version, BoundaryInfo, Template};
pub use error::ContainerError;
pub use splice::{splice, MetadataPatcher, Splicer, VerbatimMetadata};
