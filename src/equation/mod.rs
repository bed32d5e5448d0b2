//! Turning equation strings into standard-form coefficient data.

mod normalize;
mod standard;
mod term;

pub use normalize::{normalize_equation, split_terms};
pub use standard::{CoefficientMap, StandardForm};
pub use term::{Magnitude, Sign, Term, extract_coefficient};
