//! LabelSense Ingest — turns translated label text into structured candidates.
//!
//! Two independent passes over the same translated text:
//! - [`Segmenter`] extracts an ordered, deduplicated ingredient phrase list.
//! - [`AllergenDetector`] scans for declared allergens from the reference
//!   table. It deliberately runs on the raw text, not the segmented phrases:
//!   mandatory allergen declarations often sit outside the ingredient section
//!   that segmentation narrows to.

pub mod allergens;
pub mod segment;

pub use allergens::AllergenDetector;
pub use segment::Segmenter;
