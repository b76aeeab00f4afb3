/// Scalar value stored by every container in this crate.
pub type Element = i32;
