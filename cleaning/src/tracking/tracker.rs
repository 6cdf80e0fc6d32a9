use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::TrackerResult;

/// Identifies one logical execution of a pipeline step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunHandle {
    pub id: String,
    pub job_type: String,
}

/// Naming metadata for a published artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSpec {
    pub name: String,
    pub kind: String,
    pub description: String,
}

/// Interface the cleaning step requires from a run/artifact tracker.
pub trait RunTracker {
    /// Start a run, persisting its configuration for lineage.
    fn begin_run(&self, job_type: &str, config: serde_json::Value) -> TrackerResult<RunHandle>;

    /// Resolve an artifact reference (`name`, `name:latest`, or `name:vN`) to a
    /// local file path, recording it as an input of the run.
    fn fetch_artifact(&self, run: &RunHandle, reference: &str) -> TrackerResult<PathBuf>;

    /// Register a local file as a new version of the named artifact, recording
    /// it as an output of the run.
    fn publish_artifact(
        &self,
        run: &RunHandle,
        spec: &ArtifactSpec,
        file: &Path,
    ) -> TrackerResult<()>;
}
