use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ContractSpec {
    pub path: PathBuf,
    pub name: String,
}

impl ContractSpec {
    pub fn path_name(path: impl AsRef<Path>, name: impl ToString) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            name: name.to_string(),
        }
    }

    /// Where `forge build` writes the artifact for this contract,
    /// e.g. `out/Greeter.sol/Greeter.json`
    pub fn artifact_path(&self, out_dir: impl AsRef<Path>) -> PathBuf {
        let source_file = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| self.path.clone().into_os_string());

        out_dir
            .as_ref()
            .join(source_file)
            .join(format!("{}.json", self.name))
    }
}

impl fmt::Display for ContractSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.name)
    }
}
