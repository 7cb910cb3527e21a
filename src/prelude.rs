//! Makes available common structures needed to define material batches
//!
//! You may write `use matinp::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Coerced, FilePath, Labels, ParamValue};
pub use crate::base::{ParamBilinear, ParamDruckerPrager, ParamElastic, ParamHollomon, ParamMaterial, ParamVonMises};
pub use crate::material::{Bilinear, DruckerPrager, Elastic, Hollomon, VonMises};
pub use crate::material::{MaterialInput, MaterialLibrary, MaterialModel, MaterialTrait};
pub use crate::material::{HOLLOMON_EPS_MAX, HOLLOMON_NPOINT};
pub use crate::StrError;
