//! Filesystem-backed tracker implementation.
//!
//! Suitable for local development and tests: runs and artifacts live under a
//! single root directory, with artifact payloads stored in versioned
//! subdirectories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{TrackerError, TrackerResult};
use super::tracker::{ArtifactSpec, RunHandle, RunTracker};

/// Filesystem-backed run/artifact tracker.
///
/// Layout under the root directory:
///
/// ```text
/// runs/<run-id>.json
/// artifacts/<name>/v<N>/<payload>
/// artifacts/<name>/v<N>/meta.json
/// ```
pub struct LocalTracker {
    root: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct RunRecord {
    id: String,
    job_type: String,
    config: serde_json::Value,
    started_at: DateTime<Utc>,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArtifactMeta {
    name: String,
    kind: String,
    description: String,
    version: u32,
    produced_by: String,
    created_at: DateTime<Utc>,
}

const META_FILENAME: &str = "meta.json";

enum VersionRef {
    Latest,
    Exact(u32),
}

fn parse_reference(reference: &str) -> TrackerResult<(&str, VersionRef)> {
    match reference.split_once(':') {
        None => Ok((reference, VersionRef::Latest)),
        Some((name, "latest")) => Ok((name, VersionRef::Latest)),
        Some((name, tag)) => {
            let version = tag
                .strip_prefix('v')
                .and_then(|n| n.parse::<u32>().ok())
                .ok_or_else(|| TrackerError::InvalidReference(reference.to_string()))?;
            Ok((name, VersionRef::Exact(version)))
        }
    }
}

impl LocalTracker {
    /// Open (creating if necessary) a tracker rooted at the given directory.
    pub fn open(root: impl Into<PathBuf>) -> TrackerResult<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("runs"))?;
        fs::create_dir_all(root.join("artifacts"))?;
        Ok(Self { root })
    }

    fn run_path(&self, run_id: &str) -> PathBuf {
        self.root.join("runs").join(format!("{}.json", run_id))
    }

    fn artifact_dir(&self, name: &str) -> PathBuf {
        self.root.join("artifacts").join(name)
    }

    fn load_run(&self, run: &RunHandle) -> TrackerResult<RunRecord> {
        let raw = match fs::read_to_string(self.run_path(&run.id)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TrackerError::RunNotFound(run.id.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_run(&self, record: &RunRecord) -> TrackerResult<()> {
        let raw = serde_json::to_string_pretty(record)?;
        fs::write(self.run_path(&record.id), raw)?;
        Ok(())
    }

    /// Highest allocated version of an artifact, if any.
    fn latest_version(&self, name: &str) -> TrackerResult<Option<u32>> {
        let dir = self.artifact_dir(name);
        if !dir.exists() {
            return Ok(None);
        }
        let mut latest = None;
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let version = file_name
                .to_str()
                .and_then(|n| n.strip_prefix('v'))
                .and_then(|n| n.parse::<u32>().ok());
            if let Some(version) = version {
                latest = Some(latest.map_or(version, |v: u32| v.max(version)));
            }
        }
        Ok(latest)
    }

    /// Path of the payload file inside a version directory.
    fn payload_path(&self, name: &str, version: u32) -> TrackerResult<PathBuf> {
        let dir = self.artifact_dir(name).join(format!("v{}", version));
        if !dir.exists() {
            return Err(TrackerError::ArtifactNotFound(format!(
                "{}:v{}",
                name, version
            )));
        }
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_name() != META_FILENAME {
                return Ok(entry.path());
            }
        }
        Err(TrackerError::ArtifactNotFound(format!(
            "{}:v{} has no payload",
            name, version
        )))
    }
}

impl RunTracker for LocalTracker {
    fn begin_run(&self, job_type: &str, config: serde_json::Value) -> TrackerResult<RunHandle> {
        let id = format!("{}-{}", job_type, Utc::now().timestamp_millis());
        let record = RunRecord {
            id: id.clone(),
            job_type: job_type.to_string(),
            config,
            started_at: Utc::now(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        };
        self.save_run(&record)?;
        Ok(RunHandle {
            id,
            job_type: job_type.to_string(),
        })
    }

    fn fetch_artifact(&self, run: &RunHandle, reference: &str) -> TrackerResult<PathBuf> {
        let (name, version_ref) = parse_reference(reference)?;
        let version = match version_ref {
            VersionRef::Latest => self
                .latest_version(name)?
                .ok_or_else(|| TrackerError::ArtifactNotFound(name.to_string()))?,
            VersionRef::Exact(version) => version,
        };
        let payload = self.payload_path(name, version)?;

        let mut record = self.load_run(run)?;
        record.inputs.push(format!("{}:v{}", name, version));
        self.save_run(&record)?;

        Ok(payload)
    }

    fn publish_artifact(
        &self,
        run: &RunHandle,
        spec: &ArtifactSpec,
        file: &Path,
    ) -> TrackerResult<()> {
        let file_name = file.file_name().ok_or_else(|| {
            TrackerError::InvalidReference(format!("{} has no file name", file.display()))
        })?;

        let version = self.latest_version(&spec.name)?.map_or(1, |v| v + 1);
        let version_dir = self.artifact_dir(&spec.name).join(format!("v{}", version));
        fs::create_dir_all(&version_dir)?;
        fs::copy(file, version_dir.join(file_name))?;

        let meta = ArtifactMeta {
            name: spec.name.clone(),
            kind: spec.kind.clone(),
            description: spec.description.clone(),
            version,
            produced_by: run.id.clone(),
            created_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&meta)?;
        fs::write(version_dir.join(META_FILENAME), raw)?;

        let mut record = self.load_run(run)?;
        record.outputs.push(format!("{}:v{}", spec.name, version));
        self.save_run(&record)?;

        Ok(())
    }
}
