use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// Make a caller-supplied filename safe to use as a single path component.
///
/// Path separators become word breaks, whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped and leading/trailing `.`/`_` are stripped, so
/// `../../etc/passwd` turns into `etc_passwd`. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars = UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

    let spaced = filename.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    unsafe_chars
        .replace_all(&joined, "")
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// The extension after the last `.` must be in the allow-set (case-insensitive).
pub fn is_allowed_image(filename: &str, allowed_exts: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            allowed_exts.iter().any(|allowed| *allowed == ext)
        }
        None => false,
    }
}

/// Directory where uploads are written before OCR.
///
/// Every upload gets a unique path and is removed once its bytes are read back,
/// so concurrent uploads with the same name never touch the same file.
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<uuid>.<ext>`: only the lowercased extension of the caller's name is kept,
    /// so long filenames cannot push the staged name past the filesystem limit.
    fn path_for(&self, filename: &str) -> PathBuf {
        let id = Uuid::new_v4();
        match filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => {
                self.dir.join(format!("{}.{}", id, ext.to_lowercase()))
            }
            _ => self.dir.join(id.to_string()),
        }
    }

    /// Write `bytes` under a fresh name, read them back and delete the file.
    pub async fn stage(&self, filename: &str, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;
        debug!("Staged upload at {}", path.display());

        let staged = tokio::fs::read(&path).await;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!("Failed to remove staged upload {}: {}", path.display(), e);
        }

        staged
    }
}
