use super::{MaterialModel, HOLLOMON_EPS_MAX, HOLLOMON_NPOINT};
use crate::base::ParamMaterial;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Holds the contents of a material input file (JSON)
///
/// ```text
/// {
///     "materials": [
///         {"model": "Elastic", "labels": "steel", "young": 210000, "poisson": 0.3},
///         {"model": "Hollomon", "labels": ["h1", "h2"], "sy": [200, 300], "n": 0.2}
///     ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Parameters of each material batch
    pub materials: Vec<ParamMaterial>,
}

impl MaterialInput {
    /// Reads a JSON file containing the material batches
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "cannot open input file")?;
        let reader = BufReader::new(file);
        let input = serde_json::from_reader(reader).map_err(|_| "cannot parse input file")?;
        Ok(input)
    }

    /// Writes a JSON file with the material batches
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Holds a sequence of material batches written to the same solver input file
#[derive(Default)]
pub struct MaterialLibrary {
    /// All material batches in the order they were added
    pub models: Vec<MaterialModel>,

    /// All labels seen so far (material names must be unique in an input file)
    labels: HashSet<String>,
}

impl MaterialLibrary {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        MaterialLibrary {
            models: Vec::new(),
            labels: HashSet::new(),
        }
    }

    /// Allocates a new instance with the given batches
    pub fn from_params(params: &[ParamMaterial]) -> Result<Self, StrError> {
        let mut library = MaterialLibrary::new();
        for param in params {
            library.add(param)?;
        }
        Ok(library)
    }

    /// Allocates a new instance from the contents of an input file
    pub fn from_input(input: &MaterialInput) -> Result<Self, StrError> {
        MaterialLibrary::from_params(&input.materials)
    }

    /// Allocates and appends a new material batch
    pub fn add(&mut self, param: &ParamMaterial) -> Result<&mut Self, StrError> {
        let model = MaterialModel::new(param)?;
        let labels = model.actual.labels();
        let mut unique = HashSet::new();
        for label in labels {
            if self.labels.contains(label) || !unique.insert(label.clone()) {
                return Err("material labels must be unique in a library");
            }
        }
        debug!(
            model = model.actual.name(),
            nsample = model.actual.sample_count(),
            nbatch = self.models.len() + 1,
            "added material batch to library"
        );
        self.labels.extend(unique);
        self.models.push(model);
        Ok(self)
    }

    /// Returns the total number of samples (materials) in the library
    pub fn sample_count(&self) -> usize {
        self.models.iter().map(|m| m.actual.sample_count()).sum()
    }

    /// Returns the INP text of all batches
    ///
    /// The text of each batch is separated by a newline; there is no trailing newline.
    pub fn dump2inp(&self) -> Result<String, StrError> {
        self.dump2inp_sampled(HOLLOMON_EPS_MAX, HOLLOMON_NPOINT)
    }

    /// Returns the INP text of all batches using the given sampling of tabulated hardening curves
    pub fn dump2inp_sampled(&self, eps_max: f64, npoint: usize) -> Result<String, StrError> {
        let mut blocks = Vec::with_capacity(self.models.len());
        for model in &self.models {
            blocks.push(model.actual.dump2inp_sampled(eps_max, npoint)?);
        }
        Ok(blocks.join("\n"))
    }

    /// Writes the INP text of all batches to a file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_inp<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        self.write_inp_sampled(full_path, HOLLOMON_EPS_MAX, HOLLOMON_NPOINT)
    }

    /// Writes the INP text of all batches to a file using the given sampling of tabulated hardening curves
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    /// * `eps_max` -- maximum strain of the sampled hardening curves
    /// * `npoint` -- number of points of the sampled hardening curves
    pub fn write_inp_sampled<P>(&self, full_path: &P, eps_max: f64, npoint: usize) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let text = self.dump2inp_sampled(eps_max, npoint)?;
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        file.write_all(text.as_bytes()).map_err(|_| "cannot write output file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
