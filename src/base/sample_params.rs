use super::{Labels, ParamValue};
use super::{ParamBilinear, ParamDruckerPrager, ParamElastic, ParamHollomon, ParamMaterial, ParamVonMises};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a single linear-elastic steel (MPa)
    pub fn param_elastic() -> ParamElastic {
        ParamElastic {
            labels: Labels::from("steel"),
            young: ParamValue::Scalar(210000.0),
            poisson: ParamValue::Scalar(0.3),
        }
    }

    /// Returns sample parameters for two von Mises materials
    pub fn param_von_mises() -> ParamVonMises {
        ParamVonMises {
            labels: Labels::from(["m1", "m2"]),
            young: ParamValue::Sequence(vec![1.0, 2.0]),
            poisson: ParamValue::Sequence(vec![0.3, 0.45]),
            sy: ParamValue::Sequence(vec![0.01, 0.02]),
        }
    }

    /// Returns sample parameters for two Drucker-Prager materials with associated flow
    pub fn param_drucker_prager() -> ParamDruckerPrager {
        ParamDruckerPrager {
            labels: Labels::from(["dp1", "dp2"]),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
            sy: ParamValue::Scalar(0.01),
            beta: ParamValue::Sequence(vec![10.0, 20.0]),
            psi: None,
            k: ParamValue::Scalar(1.0),
        }
    }

    /// Returns sample parameters for a Hollomon (power-law hardening) steel (MPa)
    pub fn param_hollomon() -> ParamHollomon {
        ParamHollomon {
            labels: Labels::from("hollomon"),
            young: ParamValue::Scalar(200000.0),
            poisson: ParamValue::Scalar(0.3),
            sy: ParamValue::Scalar(200.0),
            n: ParamValue::Scalar(0.2),
        }
    }

    /// Returns sample parameters for a bilinear hardening material
    pub fn param_bilinear() -> ParamBilinear {
        ParamBilinear {
            labels: Labels::from("bilinear"),
            young: ParamValue::Scalar(200000.0),
            poisson: ParamValue::Scalar(0.3),
            s_sat: ParamValue::Scalar(1000.0),
            n: ParamValue::Scalar(100.0),
            sy: ParamValue::Scalar(100.0),
        }
    }

    /// Returns one sample of each material model (labels are unique across samples)
    pub fn param_all() -> Vec<ParamMaterial> {
        vec![
            ParamMaterial::Elastic(SampleParams::param_elastic()),
            ParamMaterial::VonMises(SampleParams::param_von_mises()),
            ParamMaterial::DruckerPrager(SampleParams::param_drucker_prager()),
            ParamMaterial::Hollomon(SampleParams::param_hollomon()),
            ParamMaterial::Bilinear(SampleParams::param_bilinear()),
        ]
    }
}
