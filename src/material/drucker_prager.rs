use super::{batch_summary, InpWriter, MaterialTrait};
use crate::base::ParamDruckerPrager;
use crate::StrError;
use std::fmt;
use tracing::{debug, trace};

/// Implements a batch of Drucker-Prager materials
///
/// Each record holds the elastic constants, the (linear) Drucker-Prager surface
/// (β, k, ψ) and a single-point hardening curve (σy, 0.0).
#[derive(Clone, Debug)]
pub struct DruckerPrager {
    labels: Vec<String>,
    young: Vec<f64>,
    poisson: Vec<f64>,
    sy: Vec<f64>,
    beta: Vec<f64>,
    psi: Vec<f64>,
    k: Vec<f64>,
}

impl DruckerPrager {
    /// Allocates a new instance
    ///
    /// If `param.psi` is None, the flow is associated, i.e., ψ = β for each sample.
    pub fn new(param: &ParamDruckerPrager) -> Result<Self, StrError> {
        let labels = param.labels.to_list()?;
        let nsample = labels.len();
        let young = param.young.column(nsample)?;
        let poisson = param.poisson.column(nsample)?;
        let sy = param.sy.column(nsample)?;
        let beta = param.beta.column(nsample)?;
        let psi = match &param.psi {
            Some(psi) => psi.column(nsample)?,
            None => beta.clone(),
        };
        let k = param.k.column(nsample)?;
        debug!(
            model = "DruckerPrager",
            nsample,
            associated = param.psi.is_none(),
            "allocated material batch"
        );
        Ok(DruckerPrager {
            labels,
            young,
            poisson,
            sy,
            beta,
            psi,
            k,
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

    /// Returns the compressive yield stresses
    pub fn sy(&self) -> &[f64] {
        &self.sy
    }

    /// Returns the friction angles (degrees)
    pub fn beta(&self) -> &[f64] {
        &self.beta
    }

    /// Returns the dilatation angles (degrees)
    pub fn psi(&self) -> &[f64] {
        &self.psi
    }

    /// Returns the tension vs. compression asymmetry coefficients
    pub fn k(&self) -> &[f64] {
        &self.k
    }
}

impl MaterialTrait for DruckerPrager {
    fn name(&self) -> &'static str {
        "DruckerPrager"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("young", self.young.as_slice()),
            ("poisson", self.poisson.as_slice()),
            ("sy", self.sy.as_slice()),
            ("beta", self.beta.as_slice()),
            ("psi", self.psi.as_slice()),
            ("k", self.k.as_slice()),
        ]
    }

    fn dump2inp(&self) -> Result<String, StrError> {
        let mut writer = InpWriter::new(&self.to_string());
        for i in 0..self.labels.len() {
            writer
                .material(&self.labels[i])
                .elastic(self.young[i], self.poisson[i])
                .keyword("DRUCKER PRAGER")
                .data(&[self.beta[i], self.k[i], self.psi[i]])
                .keyword("DRUCKER PRAGER HARDENING")
                .data(&[self.sy[i], 0.0]);
        }
        trace!(model = "DruckerPrager", "generated INP text");
        Ok(writer.text())
    }
}

impl fmt::Display for DruckerPrager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", batch_summary("DruckerPrager", self.labels.len()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DruckerPrager;
    use crate::base::{Labels, ParamDruckerPrager, ParamValue, SampleParams};
    use crate::material::MaterialTrait;

    #[test]
    fn new_captures_errors() {
        let param = ParamDruckerPrager {
            labels: Labels::from(["a", "b"]),
            beta: ParamValue::from([10.0, 20.0, 30.0]),
            ..Default::default()
        };
        assert_eq!(
            DruckerPrager::new(&param).err(),
            Some("parameters must all have the same length")
        );

        let param = ParamDruckerPrager {
            labels: Labels::from(["a", "b"]),
            beta: ParamValue::from([10.0, 20.0]),
            psi: Some(ParamValue::from([5.0])),
            ..Default::default()
        };
        assert_eq!(
            DruckerPrager::new(&param).err(),
            Some("parameters must all have the same length")
        );
    }

    #[test]
    fn unset_psi_renders_associated_flow() {
        let model = DruckerPrager::new(&SampleParams::param_drucker_prager()).unwrap();
        assert_eq!(model.beta(), &[10.0, 20.0]);
        assert_eq!(model.psi(), &[10.0, 20.0]);
    }

    #[test]
    fn unset_psi_follows_scalar_beta() {
        let param = ParamDruckerPrager {
            labels: Labels::from(["a", "b", "c"]),
            beta: ParamValue::from("15"),
            ..Default::default()
        };
        let model = DruckerPrager::new(&param).unwrap();
        assert_eq!(model.psi(), &[15.0, 15.0, 15.0]);
    }

    #[test]
    fn given_psi_overrides_beta() {
        let param = ParamDruckerPrager {
            labels: Labels::from(["a", "b"]),
            beta: ParamValue::from([10.0, 20.0]),
            psi: Some(ParamValue::from(0.0)),
            k: ParamValue::from([1.0, 0.778]),
            ..Default::default()
        };
        let model = DruckerPrager::new(&param).unwrap();
        assert_eq!(model.beta(), &[10.0, 20.0]);
        assert_eq!(model.psi(), &[0.0, 0.0]);
        assert_eq!(model.k(), &[1.0, 0.778]);
        assert_eq!(model.columns().len(), 6);
        model.validate().unwrap();
    }

    #[test]
    fn dump2inp_works() {
        let param = ParamDruckerPrager {
            labels: Labels::from("dp"),
            beta: ParamValue::from(30.0),
            psi: Some(ParamValue::from(5.0)),
            k: ParamValue::from(0.8),
            ..Default::default()
        };
        let model = DruckerPrager::new(&param).unwrap();
        assert_eq!(
            model.dump2inp().unwrap(),
            "** <DruckerPrager instance: 1 samples>\n\
             *MATERIAL, NAME=dp\n\
             *ELASTIC\n  1.0, 0.3\n\
             *DRUCKER PRAGER\n  30.0, 0.8, 5.0\n\
             *DRUCKER PRAGER HARDENING\n  0.01, 0.0"
        );
    }
}
