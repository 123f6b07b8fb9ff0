//! Region Module
//!
//! Operations over raw address ranges, blind to record boundaries.
//!
//! ## Responsibilities
//! - Erase a range back to the empty marker
//! - Dump every non-empty byte of the whole region

mod eraser;
mod dumper;

pub use eraser::RegionEraser;
pub use dumper::RegionDumper;
