//! Data model for the mental wellness index client.
//!
//! Declares the input fields, their constraints and option sets, the
//! in-progress draft record, and the fully-validated input record. Pure and
//! static; validation lives in `wellness-validate`, the network exchange in
//! `wellness-client`.

pub mod draft;
pub mod enums;
pub mod field;
pub mod input;
pub mod schema;

pub use draft::WellnessDraft;
pub use enums::{Gender, Occupation, WorkMode};
pub use field::Field;
pub use input::WellnessInput;
pub use schema::{MAX_SAFE_INTEGER, NumericConstraint};
