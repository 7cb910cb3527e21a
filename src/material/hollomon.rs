use super::{batch_summary, InpWriter, MaterialTrait};
use crate::base::ParamHollomon;
use crate::StrError;
use std::fmt;
use tracing::{debug, trace};

/// Default maximum strain of the sampled hardening curve
pub const HOLLOMON_EPS_MAX: f64 = 10.0;

/// Default number of points of the sampled hardening curve
pub const HOLLOMON_NPOINT: usize = 100;

/// Implements a batch of Hollomon materials (von Mises with power-law hardening)
///
/// The tensile stress-strain law is:
///
/// ```text
/// σ = σy (ε / εy)ⁿ  for ε ≥ εy = σy / E
/// ```
///
/// The INP record lists the (stress, plastic strain) pairs of the curve sampled
/// with logarithmic spacing.
#[derive(Clone, Debug)]
pub struct Hollomon {
    labels: Vec<String>,
    young: Vec<f64>,
    poisson: Vec<f64>,
    sy: Vec<f64>,
    n: Vec<f64>,
}

impl Hollomon {
    /// Allocates a new instance
    pub fn new(param: &ParamHollomon) -> Result<Self, StrError> {
        let labels = param.labels.to_list()?;
        let nsample = labels.len();
        let young = param.young.column(nsample)?;
        let poisson = param.poisson.column(nsample)?;
        let sy = param.sy.column(nsample)?;
        let n = param.n.column(nsample)?;
        debug!(model = "Hollomon", nsample, "allocated material batch");
        Ok(Hollomon {
            labels,
            young,
            poisson,
            sy,
            n,
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

    /// Returns the hardening exponents
    pub fn n(&self) -> &[f64] {
        &self.n
    }

    /// Returns the tabulated tensile stress-strain law of one sample
    ///
    /// # Input
    ///
    /// * `position` -- index of the sample in the batch
    /// * `eps_max` -- maximum strain; must be greater than the yield strain εy = σy/E
    /// * `npoint` -- number of points (≥ 2)
    ///
    /// # Output
    ///
    /// Returns `npoint` pairs (ε, σ) with strains logarithmically spaced from εy to `eps_max`.
    /// The first pair is (εy, σy) and the last one is (eps_max, σy (eps_max/εy)ⁿ).
    /// Strains are strictly increasing; a range too narrow to hold `npoint` distinct strains is rejected.
    pub fn get_table(&self, position: usize, eps_max: f64, npoint: usize) -> Result<Vec<(f64, f64)>, StrError> {
        if position >= self.labels.len() {
            return Err("position is out of bounds");
        }
        if npoint < 2 {
            return Err("npoint must be ≥ 2");
        }
        let sy = self.sy[position];
        let n = self.n[position];
        let eps_y = sy / self.young[position];
        if !(eps_y > 0.0) || !eps_y.is_finite() {
            return Err("the yield strain sy/E must be positive");
        }
        if !(eps_max > eps_y) || !eps_max.is_finite() {
            return Err("eps_max must be greater than the yield strain");
        }
        let ratio_max = eps_max / eps_y;
        let log_ratio_max = f64::log10(ratio_max);
        let den = (npoint - 1) as f64;
        let mut table = Vec::with_capacity(npoint);
        for k in 0..npoint {
            let (strain, ratio) = if k == 0 {
                (eps_y, 1.0)
            } else if k == npoint - 1 {
                (eps_max, ratio_max)
            } else {
                let ratio = f64::powf(10.0, log_ratio_max * (k as f64) / den);
                (eps_y * ratio, ratio)
            };
            if let Some((previous, _)) = table.last() {
                if strain <= *previous {
                    return Err("eps_max must be greater than the yield strain");
                }
            }
            table.push((strain, sy * f64::powf(ratio, n)));
        }
        Ok(table)
    }
}

impl MaterialTrait for Hollomon {
    fn name(&self) -> &'static str {
        "Hollomon"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("young", self.young.as_slice()),
            ("poisson", self.poisson.as_slice()),
            ("sy", self.sy.as_slice()),
            ("n", self.n.as_slice()),
        ]
    }

    fn dump2inp(&self) -> Result<String, StrError> {
        self.dump2inp_sampled(HOLLOMON_EPS_MAX, HOLLOMON_NPOINT)
    }

    /// Returns the INP text using a given sampling of the hardening curve
    ///
    /// Each data line holds (σ, εp) where εp = ε - σ/E is the plastic strain.
    fn dump2inp_sampled(&self, eps_max: f64, npoint: usize) -> Result<String, StrError> {
        let mut writer = InpWriter::new(&self.to_string());
        for i in 0..self.labels.len() {
            let table = self.get_table(i, eps_max, npoint)?;
            writer
                .material(&self.labels[i])
                .elastic(self.young[i], self.poisson[i])
                .keyword("PLASTIC");
            for (strain, stress) in table {
                let plastic_strain = strain - stress / self.young[i];
                writer.data(&[stress, plastic_strain]);
            }
        }
        trace!(model = "Hollomon", eps_max, npoint, "generated INP text");
        Ok(writer.text())
    }
}

impl fmt::Display for Hollomon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", batch_summary("Hollomon", self.labels.len()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
