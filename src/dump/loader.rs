use crate::extensions::path_ext::FileName;
use crate::record::{RecordError, entries, registry};
use futures::stream::FuturesUnordered;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// A captured controller response, tagged with the record kind taken from its file name.
#[derive(Debug)]
pub struct PayloadDump {
    path: PathBuf,
    kind: String,
    payload: Value,
}

impl PayloadDump {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Constructs every record in the dump and returns their debug renderings.
    pub fn describe(&self) -> Result<Vec<String>, RecordError> {
        entries(&self.payload)
            .into_iter()
            .map(|entry| registry::describe(&self.kind, entry))
            .collect()
    }
}

/// Reads every `*.<extension>` file in `directory`. Files that fail to load are logged and skipped.
#[instrument]
pub async fn load_dumps_from(directory: &str, extension: &str) -> Result<Vec<PayloadDump>, DumpError> {
    let paths = list_files(directory, extension)
        .await
        .map_err(|source| DumpError::Io { source, path: None })?;
    info!("📦 Found {} payload dumps in '{}'", paths.len(), directory);

    let mut dumps = Vec::with_capacity(paths.len());
    let mut skipped = 0;
    for result in load_files(paths).await {
        match result {
            Ok(dump) => dumps.push(dump),
            Err(err) => {
                skipped += 1;
                warn!("⚠️ Skipping '{}': {}", err.file_name(), err);
            }
        }
    }

    info!("📦 Loaded {} payload dumps, skipped {}", dumps.len(), skipped);
    Ok(dumps)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let entries = ReadDirStream::new(fs::read_dir(directory).await?);

    Ok(entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                warn!("⚠️ Unable to read directory entry: {}", err);
                None
            }
        })
        .filter(|path| path.is_file() && has_extension(path, extension))
        .collect()
        .await)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<PayloadDump, DumpError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || parse(&content, path)).await?,
            Err(err) => Err(DumpError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn parse(content: &str, path: PathBuf) -> Result<PayloadDump, DumpError> {
    match serde_json::from_str::<Value>(content) {
        Ok(payload) => Ok(PayloadDump {
            kind: path.record_kind().to_owned(),
            path,
            payload,
        }),
        Err(err) => Err(DumpError::Json { source: err, path }),
    }
}

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("invalid JSON: {source}")]
    Json { source: serde_json::Error, path: PathBuf },
    #[error("unreadable: {source}")]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

impl DumpError {
    fn file_name(&self) -> &str {
        match self {
            DumpError::Json { path, .. } | DumpError::Io { path: Some(path), .. } => path.string_file_name(),
            DumpError::Io { path: None, .. } | DumpError::JoinError(_) => "<unknown>",
        }
    }
}
