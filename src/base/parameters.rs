use super::{Labels, ParamValue};
use serde::{Deserialize, Serialize};

/// Holds parameters for a batch of linear elastic materials
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamElastic {
    /// Material names (one per sample)
    pub labels: Labels,

    /// Young's modulus E
    #[serde(alias = "E")]
    pub young: ParamValue,

    /// Poisson's coefficient ν
    #[serde(alias = "nu")]
    pub poisson: ParamValue,
}

/// Holds parameters for a batch of von Mises materials (perfect plasticity)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamVonMises {
    /// Material names (one per sample)
    pub labels: Labels,

    /// Young's modulus E
    #[serde(alias = "E")]
    pub young: ParamValue,

    /// Poisson's coefficient ν
    #[serde(alias = "nu")]
    pub poisson: ParamValue,

    /// Yield stress σy
    pub sy: ParamValue,
}

/// Holds parameters for a batch of Drucker-Prager materials
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamDruckerPrager {
    /// Material names (one per sample)
    pub labels: Labels,

    /// Young's modulus E
    #[serde(alias = "E")]
    pub young: ParamValue,

    /// Poisson's coefficient ν
    #[serde(alias = "nu")]
    pub poisson: ParamValue,

    /// Compressive yield stress σy
    pub sy: ParamValue,

    /// Friction angle β in degrees
    pub beta: ParamValue,

    /// Dilatation angle ψ in degrees
    ///
    /// None means associated flow, i.e., ψ = β for each sample.
    pub psi: Option<ParamValue>,

    /// Tension vs. compression asymmetry
    ///
    /// k = 1 gives no asymmetry; k = 0.778 gives the maximum possible asymmetry.
    pub k: ParamValue,
}

/// Holds parameters for a batch of Hollomon materials (von Mises with power-law hardening)
///
/// ```text
/// σ = σy (ε / εy)ⁿ  for ε ≥ εy = σy / E
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamHollomon {
    /// Material names (one per sample)
    pub labels: Labels,

    /// Young's modulus E
    #[serde(alias = "E")]
    pub young: ParamValue,

    /// Poisson's coefficient ν
    #[serde(alias = "nu")]
    pub poisson: ParamValue,

    /// Yield stress σy
    pub sy: ParamValue,

    /// Hardening exponent n
    pub n: ParamValue,
}

/// Holds parameters for a batch of bilinear hardening materials
///
/// The plastic law is linear from (σy, 0) with slope n until the saturation stress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamBilinear {
    /// Material names (one per sample)
    pub labels: Labels,

    /// Young's modulus E
    #[serde(alias = "E")]
    pub young: ParamValue,

    /// Poisson's coefficient ν
    #[serde(alias = "nu")]
    pub poisson: ParamValue,

    /// Saturation stress
    #[serde(alias = "Ssat")]
    pub s_sat: ParamValue,

    /// Slope of the linear plastic law
    pub n: ParamValue,

    /// Stress at zero plastic strain
    pub sy: ParamValue,
}

/// Holds parameters for any material batch
///
/// In JSON, the `"model"` key selects the variant, e.g.,
///
/// ```text
/// {"model": "VonMises", "labels": ["m1", "m2"], "young": [1, 2], "sy": 0.01}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum ParamMaterial {
    Elastic(ParamElastic),
    VonMises(ParamVonMises),
    DruckerPrager(ParamDruckerPrager),
    Hollomon(ParamHollomon),
    Bilinear(ParamBilinear),
}

impl Default for ParamElastic {
    fn default() -> Self {
        ParamElastic {
            labels: Labels::default(),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
        }
    }
}

impl Default for ParamVonMises {
    fn default() -> Self {
        ParamVonMises {
            labels: Labels::default(),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
            sy: ParamValue::Scalar(0.01),
        }
    }
}

impl Default for ParamDruckerPrager {
    fn default() -> Self {
        ParamDruckerPrager {
            labels: Labels::default(),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
            sy: ParamValue::Scalar(0.01),
            beta: ParamValue::Scalar(10.0),
            psi: None,
            k: ParamValue::Scalar(1.0),
        }
    }
}

impl Default for ParamHollomon {
    fn default() -> Self {
        ParamHollomon {
            labels: Labels::default(),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
            sy: ParamValue::Scalar(0.01),
            n: ParamValue::Scalar(0.2),
        }
    }
}

impl Default for ParamBilinear {
    fn default() -> Self {
        ParamBilinear {
            labels: Labels::default(),
            young: ParamValue::Scalar(1.0),
            poisson: ParamValue::Scalar(0.3),
            s_sat: ParamValue::Scalar(1000.0),
            n: ParamValue::Scalar(100.0),
            sy: ParamValue::Scalar(100.0),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
