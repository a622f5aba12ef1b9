//! Aventra Deck - generator for the Aventra Consulting company profile
//!
//! This library builds the eleven-slide company profile presentation and
//! writes it as a PowerPoint Open XML (.pptx) package.
//!
//! # Features
//!
//! - **Fixed content**: every slide, colour and coordinate is compiled in
//! - **PPTX writer**: a small PresentationML writer for shapes and text
//! - **Reproducible output**: the same build always yields the same bytes
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = aventra_deck::build("Aventra_Consulting_Company_Profile.pptx")?;
//! println!("{} slides written to {}", report.slide_count, report.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the deck before saving
//!
//! ```
//! use aventra_deck::deck;
//!
//! let pres = deck::compose();
//! assert_eq!(pres.slide_count(), 11);
//! assert!(pres.slides()[0].texts().contains(&"AVENTRA CONSULTING"));
//! ```

pub mod common;
pub mod config;
pub mod deck;
pub mod error;
pub mod ooxml;

pub use deck::{BuildReport, SlideKind, build, build_with};
pub use error::{DeckError, Result};
