//! Material models for finite element simulations written as INP text
//!
//! Each model holds a *batch* of samples stored column-wise (one column per
//! parameter) and generates the corresponding `*MATERIAL` records for an
//! Abaqus-style input file.
//!
//! ```
//! use matinp::prelude::*;
//!
//! let param = ParamVonMises {
//!     labels: Labels::from(["m1", "m2"]),
//!     young: ParamValue::from([1.0, 2.0]),
//!     poisson: ParamValue::from([0.3, 0.45]),
//!     sy: ParamValue::from([0.01, 0.02]),
//! };
//! let model = VonMises::new(&param).unwrap();
//! let text = model.dump2inp().unwrap();
//! assert!(text.contains("*MATERIAL, NAME=m2"));
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
