//! Upload storage: accepted files land in one directory as `{unix_millis}-{original name}`.

use std::io;
use std::path::{Path, PathBuf};

/// Directory-backed store for accepted uploads. Contents are never read back.
#[derive(Debug, Clone)]
pub(crate) struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Opens the store, creating the directory if it does not exist.
    pub(crate) async fn open<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` under a timestamped name and returns the final path.
    ///
    /// Data goes to a `.part` file first and is renamed into place, so a failed
    /// write never leaves a file that looks accepted.
    pub(crate) async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let stored = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            safe_file_name(original_name)
        );
        let final_path = self.dir.join(&stored);
        let part_path = self.dir.join(format!("{}.part", stored));

        tokio::fs::write(&part_path, bytes).await?;
        if let Err(e) = tokio::fs::rename(&part_path, &final_path).await {
            let _ = tokio::fs::remove_file(&part_path).await;
            return Err(e);
        }
        tracing::debug!(
            target: "farmbot::uploads",
            path = %final_path.display(),
            bytes = bytes.len(),
            "Upload stored"
        );
        Ok(final_path)
    }
}

/// Final path component of a client-supplied name; never escapes the upload dir.
fn safe_file_name(original: &str) -> &str {
    Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload")
}
