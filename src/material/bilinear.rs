use super::{batch_summary, InpWriter, MaterialTrait};
use crate::base::ParamBilinear;
use crate::StrError;
use std::fmt;
use tracing::{debug, trace};

/// Implements a batch of bilinear hardening materials (von Mises yield criterion)
///
/// The plastic law is given by two points:
///
/// ```text
/// (σy, 0)  and  (σsat, εp_sat)  with  εp_sat = (σsat - σy) / n
/// ```
#[derive(Clone, Debug)]
pub struct Bilinear {
    labels: Vec<String>,
    young: Vec<f64>,
    poisson: Vec<f64>,
    s_sat: Vec<f64>,
    n: Vec<f64>,
    sy: Vec<f64>,
}

impl Bilinear {
    /// Allocates a new instance
    pub fn new(param: &ParamBilinear) -> Result<Self, StrError> {
        let labels = param.labels.to_list()?;
        let nsample = labels.len();
        let young = param.young.column(nsample)?;
        let poisson = param.poisson.column(nsample)?;
        let s_sat = param.s_sat.column(nsample)?;
        let n = param.n.column(nsample)?;
        let sy = param.sy.column(nsample)?;
        debug!(model = "Bilinear", nsample, "allocated material batch");
        Ok(Bilinear {
            labels,
            young,
            poisson,
            s_sat,
            n,
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

    /// Returns the saturation stresses
    pub fn s_sat(&self) -> &[f64] {
        &self.s_sat
    }

    /// Returns the slopes of the plastic law
    pub fn n(&self) -> &[f64] {
        &self.n
    }

    /// Returns the stresses at zero plastic strain
    pub fn sy(&self) -> &[f64] {
        &self.sy
    }

    /// Returns the plastic strain at which the saturation stress is reached
    ///
    /// The slope n must be non-zero and the resulting strain must be finite.
    pub fn plastic_strain_at_saturation(&self, position: usize) -> Result<f64, StrError> {
        if position >= self.labels.len() {
            return Err("position is out of bounds");
        }
        if self.n[position] == 0.0 {
            return Err("the slope n must be non-zero");
        }
        let eps_p_sat = (self.s_sat[position] - self.sy[position]) / self.n[position];
        if !eps_p_sat.is_finite() {
            return Err("the saturation plastic strain must be finite");
        }
        Ok(eps_p_sat)
    }
}

impl MaterialTrait for Bilinear {
    fn name(&self) -> &'static str {
        "Bilinear"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("young", self.young.as_slice()),
            ("poisson", self.poisson.as_slice()),
            ("s_sat", self.s_sat.as_slice()),
            ("n", self.n.as_slice()),
            ("sy", self.sy.as_slice()),
        ]
    }

    fn dump2inp(&self) -> Result<String, StrError> {
        let mut writer = InpWriter::new(&self.to_string());
        for i in 0..self.labels.len() {
            let eps_p_sat = self.plastic_strain_at_saturation(i)?;
            writer
                .material(&self.labels[i])
                .elastic(self.young[i], self.poisson[i])
                .keyword("PLASTIC")
                .data(&[self.sy[i], 0.0])
                .data(&[self.s_sat[i], eps_p_sat]);
        }
        trace!(model = "Bilinear", "generated INP text");
        Ok(writer.text())
    }
}

impl fmt::Display for Bilinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", batch_summary("Bilinear", self.labels.len()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Bilinear;
    use crate::base::{Labels, ParamBilinear, ParamValue, SampleParams};
    use crate::material::MaterialTrait;

    #[test]
    fn new_captures_errors() {
        let param = ParamBilinear {
            labels: Labels::from(["a", "b"]),
            s_sat: ParamValue::from(Vec::<f64>::new()),
            ..Default::default()
        };
        assert_eq!(Bilinear::new(&param).err(), Some("parameters must all have the same length"));
    }

    #[test]
    fn plastic_strain_at_saturation_works() {
        let model = Bilinear::new(&SampleParams::param_bilinear()).unwrap();
        assert_eq!(model.plastic_strain_at_saturation(0).unwrap(), 9.0);
        assert_eq!(
            model.plastic_strain_at_saturation(1).err(),
            Some("position is out of bounds")
        );
    }

    #[test]
    fn plastic_strain_at_saturation_captures_errors() {
        let param = ParamBilinear {
            n: ParamValue::from(0.0),
            ..Default::default()
        };
        let model = Bilinear::new(&param).unwrap();
        assert_eq!(
            model.plastic_strain_at_saturation(0).err(),
            Some("the slope n must be non-zero")
        );
        assert_eq!(model.dump2inp().err(), Some("the slope n must be non-zero"));

        let param = ParamBilinear {
            labels: Labels::from(["ok", "nan"]),
            s_sat: ParamValue::from([1000.0, f64::NAN]),
            ..Default::default()
        };
        let model = Bilinear::new(&param).unwrap();
        assert_eq!(model.plastic_strain_at_saturation(0).unwrap(), 9.0);
        assert_eq!(
            model.plastic_strain_at_saturation(1).err(),
            Some("the saturation plastic strain must be finite")
        );
        assert_eq!(
            model.dump2inp().err(),
            Some("the saturation plastic strain must be finite")
        );
    }

    #[test]
    fn dump2inp_works() {
        let model = Bilinear::new(&SampleParams::param_bilinear()).unwrap();
        assert_eq!(
            model.dump2inp().unwrap(),
            "** <Bilinear instance: 1 samples>\n\
             *MATERIAL, NAME=bilinear\n\
             *ELASTIC\n  200000.0, 0.3\n\
             *PLASTIC\n  100.0, 0.0\n  1000.0, 9.0"
        );
    }

    #[test]
    fn dump2inp_handles_many_samples() {
        let param = ParamBilinear {
            labels: Labels::from(["b1", "b2"]),
            s_sat: ParamValue::from([500.0, 1000.0]),
            n: ParamValue::from([50.0, 100.0]),
            sy: ParamValue::from([100.0, 200.0]),
            ..Default::default()
        };
        let model = Bilinear::new(&param).unwrap();
        assert_eq!(model.plastic_strain_at_saturation(0).unwrap(), 8.0);
        assert_eq!(model.plastic_strain_at_saturation(1).unwrap(), 8.0);
        let text = model.dump2inp().unwrap();
        assert!(text.contains("*MATERIAL, NAME=b1\n*ELASTIC\n  1.0, 0.3\n*PLASTIC\n  100.0, 0.0\n  500.0, 8.0\n"));
        assert!(text.ends_with("*MATERIAL, NAME=b2\n*ELASTIC\n  1.0, 0.3\n*PLASTIC\n  200.0, 0.0\n  1000.0, 8.0"));
    }
}
