use super::{batch_summary, InpWriter, MaterialTrait};
use crate::base::ParamVonMises;
use crate::StrError;
use std::fmt;
use tracing::{debug, trace};

/// Implements a batch of von Mises materials (perfect plasticity)
///
/// Each record has a single-point flow curve: (σy, 0.0).
#[derive(Clone, Debug)]
pub struct VonMises {
    labels: Vec<String>,
    young: Vec<f64>,
    poisson: Vec<f64>,
    sy: Vec<f64>,
}

impl VonMises {
    /// Allocates a new instance
    pub fn new(param: &ParamVonMises) -> Result<Self, StrError> {
        let labels = param.labels.to_list()?;
        let nsample = labels.len();
        let young = param.young.column(nsample)?;
        let poisson = param.poisson.column(nsample)?;
        let sy = param.sy.column(nsample)?;
        debug!(model = "VonMises", nsample, "allocated material batch");
        Ok(VonMises {
            labels,
            young,
            poisson,
            sy,
        })
    }

    /// Returns the Young's moduli
    pub fn young(&self) -> &[f64] {
        &self.young
    }

    /// Returns the Poisson's coefficients
    pub fn poisson(&self) -> &[f64] {
        &self.poisson
    }

    /// Returns the yield stresses
    pub fn sy(&self) -> &[f64] {
        &self.sy
    }
}

impl MaterialTrait for VonMises {
    fn name(&self) -> &'static str {
        "VonMises"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("young", self.young.as_slice()),
            ("poisson", self.poisson.as_slice()),
            ("sy", self.sy.as_slice()),
        ]
    }

    fn dump2inp(&self) -> Result<String, StrError> {
        let mut writer = InpWriter::new(&self.to_string());
        for i in 0..self.labels.len() {
            writer
                .material(&self.labels[i])
                .elastic(self.young[i], self.poisson[i])
                .keyword("PLASTIC")
                .data(&[self.sy[i], 0.0]);
        }
        trace!(model = "VonMises", "generated INP text");
        Ok(writer.text())
    }
}

impl fmt::Display for VonMises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", batch_summary("VonMises", self.labels.len()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
