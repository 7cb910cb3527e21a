//! Implements the base structures for defining material parameters

mod filepath;
mod labels;
mod param_value;
mod parameters;
mod sample_params;
pub use crate::base::filepath::*;
pub use crate::base::labels::*;
pub use crate::base::param_value::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
