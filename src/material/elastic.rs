use super::{batch_summary, InpWriter, MaterialTrait};
use crate::base::ParamElastic;
use crate::StrError;
use std::fmt;
use tracing::{debug, trace};

/// Implements a batch of isotropic linear elastic materials
#[derive(Clone, Debug)]
pub struct Elastic {
    labels: Vec<String>,
    young: Vec<f64>,
    poisson: Vec<f64>,
}

impl Elastic {
    /// Allocates a new instance
    pub fn new(param: &ParamElastic) -> Result<Self, StrError> {
        let labels = param.labels.to_list()?;
        let nsample = labels.len();
        let young = param.young.column(nsample)?;
        let poisson = param.poisson.column(nsample)?;
        debug!(model = "Elastic", nsample, "allocated material batch");
        Ok(Elastic { labels, young, poisson })
    }

    /// Returns the Young's moduli
    pub fn young(&self) -> &[f64] {
        &self.young
    }

    /// Returns the Poisson's coefficients
    pub fn poisson(&self) -> &[f64] {
        &self.poisson
    }
}

impl MaterialTrait for Elastic {
    fn name(&self) -> &'static str {
        "Elastic"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![("young", self.young.as_slice()), ("poisson", self.poisson.as_slice())]
    }

    fn dump2inp(&self) -> Result<String, StrError> {
        let mut writer = InpWriter::new(&self.to_string());
        for i in 0..self.labels.len() {
            writer.material(&self.labels[i]).elastic(self.young[i], self.poisson[i]);
        }
        trace!(model = "Elastic", "generated INP text");
        Ok(writer.text())
    }
}

impl fmt::Display for Elastic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", batch_summary("Elastic", self.labels.len()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Elastic;
    use crate::base::{Labels, ParamElastic, ParamValue, SampleParams};
    use crate::material::MaterialTrait;

    #[test]
    fn new_captures_errors() {
        let param = ParamElastic {
            labels: Labels::from(["a", "b"]),
            poisson: ParamValue::from([0.2, 0.3, 0.4]),
            ..Default::default()
        };
        assert_eq!(Elastic::new(&param).err(), Some("parameters must all have the same length"));

        let param = ParamElastic {
            young: ParamValue::from("stiff"),
            ..Default::default()
        };
        assert_eq!(Elastic::new(&param).err(), Some("parameter cannot be converted to a float"));
    }

    #[test]
    fn new_broadcasts_scalars() {
        let param = ParamElastic {
            labels: Labels::from(["a", "b", "c"]),
            young: ParamValue::from([1.0, 2.0, 3.0]),
            poisson: ParamValue::from(0.25),
        };
        let model = Elastic::new(&param).unwrap();
        assert_eq!(model.sample_count(), 3);
        assert_eq!(model.young(), &[1.0, 2.0, 3.0]);
        assert_eq!(model.poisson(), &[0.25, 0.25, 0.25]);
    }

    #[test]
    fn dump2inp_works() {
        let model = Elastic::new(&SampleParams::param_elastic()).unwrap();
        assert_eq!(format!("{}", model), "<Elastic instance: 1 samples>");
        assert_eq!(
            model.dump2inp().unwrap(),
            "** <Elastic instance: 1 samples>\n\
             *MATERIAL, NAME=steel\n\
             *ELASTIC\n  210000.0, 0.3"
        );
    }

    #[test]
    fn default_batch_works() {
        let model = Elastic::new(&ParamElastic::default()).unwrap();
        assert_eq!(model.labels(), &["mat"]);
        assert_eq!(
            model.dump2inp().unwrap(),
            "** <Elastic instance: 1 samples>\n*MATERIAL, NAME=mat\n*ELASTIC\n  1.0, 0.3"
        );
    }
}
