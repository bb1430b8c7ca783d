//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants enforced at construction time.
//! - [`thermo`]: Thermodynamic states, capability traits, and property models.
//! - [`units`]: Extensions to [`uom`] for quantities it doesn't provide.

pub mod constraint;
pub mod thermo;
pub mod units;
