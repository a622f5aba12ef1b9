//! Office Open XML (OOXML) output.
//!
//! 1. **OPC Layer** (`opc`): package assembly (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): slides, shapes and text
pub mod opc;
pub mod pptx;
