use std::path::{Path, PathBuf};

/// Default directory for generated files
pub const DEFAULT_OUT_DIR: &str = "/tmp/matinp";

pub struct FilePath {}

impl FilePath {
    /// Returns the filepath of a solver input file (.inp text format)
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".inp" will added
    /// * `use_tmp_dir` -- use "/tmp/matinp" instead of local "data/inp" directory
    pub fn inp(filename_key: &str, use_tmp_dir: bool) -> PathBuf {
        FilePath::with_extension(filename_key, ".inp", "inp", use_tmp_dir)
    }

    /// Returns the filepath of a material input file (.json format)
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".json" will added
    /// * `use_tmp_dir` -- use "/tmp/matinp" instead of local "data/materials" directory
    pub fn json(filename_key: &str, use_tmp_dir: bool) -> PathBuf {
        FilePath::with_extension(filename_key, ".json", "materials", use_tmp_dir)
    }

    fn with_extension(filename_key: &str, extension: &str, data_dir: &str, use_tmp_dir: bool) -> PathBuf {
        let mut filename = String::from(filename_key);
        filename.push_str(extension);
        if use_tmp_dir {
            Path::new(DEFAULT_OUT_DIR).join(filename)
        } else {
            Path::new("data").join(data_dir).join(filename)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FilePath;
    use std::ffi::OsStr;

    #[test]
    fn paths_are_correct() {
        assert_eq!(
            FilePath::inp("steels", false).as_os_str(),
            OsStr::new("data/inp/steels.inp")
        );
        assert_eq!(
            FilePath::inp("steels", true).as_os_str(),
            OsStr::new("/tmp/matinp/steels.inp")
        );

        assert_eq!(
            FilePath::json("steels", false).as_os_str(),
            OsStr::new("data/materials/steels.json")
        );
        assert_eq!(
            FilePath::json("steels", true).as_os_str(),
            OsStr::new("/tmp/matinp/steels.json")
        );
    }
}
