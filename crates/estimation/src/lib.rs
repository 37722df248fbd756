//! Statistical mass estimates: payload and dry mass regressions, mass fractions, and the
//! structural correlation applied on each design pass.

pub mod mass;
pub mod structure;

pub use mass::{MassEstimate, MassFractions, PayloadRange, mass_fractions, payload_requirements};
pub use structure::StructureEstimate;
