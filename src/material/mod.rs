//! Implements material models and their INP representation

mod bilinear;
mod drucker_prager;
mod elastic;
mod hollomon;
mod inp_writer;
mod material_library;
mod material_model;
mod von_mises;
pub use crate::material::bilinear::*;
pub use crate::material::drucker_prager::*;
pub use crate::material::elastic::*;
pub use crate::material::hollomon::*;
pub use crate::material::inp_writer::*;
pub use crate::material::material_library::*;
pub use crate::material::material_model::*;
pub use crate::material::von_mises::*;
