//! PowerPoint (.pptx) presentation writing.
//!
//! Presentations are built in memory with [`MutablePresentation`], one blank
//! slide at a time, and serialized as a complete OPC package.
//!
//! # Example
//!
//! ```rust,no_run
//! use aventra_deck::common::RGBColor;
//! use aventra_deck::ooxml::pptx::{AutoShapeType, MutablePresentation};
//!
//! let mut pres = MutablePresentation::widescreen();
//! let slide = pres.add_slide();
//! slide
//!     .add_shape(AutoShapeType::Rectangle, 0, 0, 914400, 914400)
//!     .fill(RGBColor::new(0, 51, 102));
//! slide
//!     .add_text_box(0, 914400, 914400, 457200)
//!     .text_frame_mut()
//!     .add_paragraph("Hello")
//!     .size(24.0)
//!     .bold(true);
//! pres.save("hello.pptx")?;
//! # Ok::<(), aventra_deck::DeckError>(())
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::{Alignment, AutoShapeType, Fill, Font, LineFormat};
pub use writer::{MutablePresentation, MutableShape, MutableSlide, Paragraph, ShapeKind, TextFrame};
