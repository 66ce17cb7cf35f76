pub mod mul_div;
pub mod safe_math;
