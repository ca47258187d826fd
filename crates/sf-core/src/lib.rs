//! sf-core: numeric foundation for the steamflood engine.
//!
//! Contains:
//! - numeric (guarded division and finiteness checks)
//! - units (oilfield unit constants, rate conversions, SI conversion via uom)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
