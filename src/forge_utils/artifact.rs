use std::path::Path;

use ethers::abi::Abi;
use ethers::types::Bytes;
use eyre::Context;
use serde::Deserialize;
use tracing::{info, instrument};

use super::{ContractSpec, ForgeBuild};

const OUT_DIR: &str = "out";

/// ABI and creation bytecode of a compiled contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: Abi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: Abi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
struct RawBytecode {
    object: Bytes,
}

impl ContractArtifact {
    /// Compiles the Foundry project at `project_dir` and loads the
    /// artifact for `contract_spec`
    #[instrument(skip_all, fields(contract = %contract_spec))]
    pub async fn build(
        project_dir: impl AsRef<Path>,
        contract_spec: &ContractSpec,
    ) -> eyre::Result<Self> {
        let project_dir = project_dir.as_ref();

        ForgeBuild::new().with_cwd(project_dir).run().await?;

        Self::read(contract_spec.artifact_path(project_dir.join(OUT_DIR)))
            .await
    }

    pub async fn read(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Reading artifact {}", path.display()))?;

        let raw: RawArtifact = serde_json::from_str(&content)
            .with_context(|| format!("Parsing artifact {}", path.display()))?;

        if raw.bytecode.object.is_empty() {
            eyre::bail!(
                "Artifact {} has no creation bytecode, is the contract abstract?",
                path.display()
            );
        }

        info!(
            "Loaded {} ({} bytes of bytecode)",
            path.display(),
            raw.bytecode.object.len()
        );

        Ok(Self {
            abi: raw.abi,
            bytecode: raw.bytecode.object,
        })
    }
}
