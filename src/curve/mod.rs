//! E_521 field and point arithmetic.

pub mod field;
pub mod point;

pub use field::{FieldElement, D, P};
pub use point::{reduce_mod_r, Point, COORD_LEN, G, R, STD_BLEN};
