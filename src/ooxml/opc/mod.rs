//! Open Packaging Convention (OPC) writing support.
//!
//! A `.pptx` file is an OPC package: a ZIP archive of XML parts tied together
//! by relationship items and described by `[Content_Types].xml`.

pub mod constants;
pub mod pkgwriter;
pub mod rel;

pub use pkgwriter::{PackageWriter, Part};
pub use rel::{Relationship, Relationships};
