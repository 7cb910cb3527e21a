use super::{Bilinear, DruckerPrager, Elastic, Hollomon, VonMises};
use crate::base::ParamMaterial;
use crate::StrError;

/// Specifies the essential functions for material batches
pub trait MaterialTrait: Send + Sync {
    /// Returns the name of the model, e.g., "VonMises"
    fn name(&self) -> &'static str;

    /// Returns the labels (material names), one per sample
    fn labels(&self) -> &[String];

    /// Returns the stored columns with their names
    fn columns(&self) -> Vec<(&'static str, &[f64])>;

    /// Returns the number of samples in the batch
    fn sample_count(&self) -> usize {
        self.labels().len()
    }

    /// Checks that every column has one value per sample
    fn validate(&self) -> Result<(), StrError> {
        let nsample = self.sample_count();
        if self.columns().iter().any(|(_, column)| column.len() != nsample) {
            return Err("parameters must all have the same length");
        }
        Ok(())
    }

    /// Returns the INP text with one material record per sample
    fn dump2inp(&self) -> Result<String, StrError>;

    /// Returns the INP text using the given sampling of tabulated hardening curves
    ///
    /// Models without tabulated curves ignore `eps_max` and `npoint`.
    fn dump2inp_sampled(&self, _eps_max: f64, _npoint: usize) -> Result<String, StrError> {
        self.dump2inp()
    }
}

/// Holds the actual material model implementation
pub struct MaterialModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn MaterialTrait>,
}

impl MaterialModel {
    /// Allocates a new instance
    pub fn new(param: &ParamMaterial) -> Result<Self, StrError> {
        let actual: Box<dyn MaterialTrait> = match param {
            ParamMaterial::Elastic(p) => Box::new(Elastic::new(p)?),
            ParamMaterial::VonMises(p) => Box::new(VonMises::new(p)?),
            ParamMaterial::DruckerPrager(p) => Box::new(DruckerPrager::new(p)?),
            ParamMaterial::Hollomon(p) => Box::new(Hollomon::new(p)?),
            ParamMaterial::Bilinear(p) => Box::new(Bilinear::new(p)?),
        };
        Ok(MaterialModel { actual })
    }
}

/// Returns the comment line describing a batch
pub(crate) fn batch_summary(name: &str, nsample: usize) -> String {
    format!("<{} instance: {} samples>", name, nsample)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MaterialModel;
    use crate::base::{Labels, ParamElastic, ParamMaterial, ParamValue, SampleParams};

    #[test]
    fn allocate_material_model_works() {
        let names: Vec<_> = SampleParams::param_all()
            .iter()
            .map(|param| MaterialModel::new(param).unwrap().actual.name())
            .collect();
        assert_eq!(names, &["Elastic", "VonMises", "DruckerPrager", "Hollomon", "Bilinear"]);
    }

    #[test]
    fn allocate_material_model_captures_errors() {
        let param = ParamMaterial::Elastic(ParamElastic {
            labels: Labels::from(["a", "b"]),
            young: ParamValue::from([1.0, 2.0, 3.0]),
            ..Default::default()
        });
        assert_eq!(
            MaterialModel::new(&param).err(),
            Some("parameters must all have the same length")
        );
    }

    #[test]
    fn trait_functions_work() {
        for param in SampleParams::param_all() {
            let model = MaterialModel::new(&param).unwrap();
            let nsample = model.actual.sample_count();
            assert_eq!(model.actual.labels().len(), nsample);
            assert!(model.actual.columns().iter().all(|(_, c)| c.len() == nsample));
            model.actual.validate().unwrap();
            let text = model.actual.dump2inp().unwrap();
            assert!(text.starts_with(&format!("** <{} instance: {} samples>", model.actual.name(), nsample)));
            assert_eq!(text.matches("*MATERIAL, NAME=").count(), nsample);
            assert!(!text.ends_with('\n'));
        }
    }
}
