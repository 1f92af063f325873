pub mod casting;
pub mod mul_div;
pub mod safe_math;
