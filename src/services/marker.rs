use std::path::Path;

/// Contents of the `NOTIFICATION_SENT` marker. The external scheduler only
/// checks that the file exists.
pub const MARKER_CONTENTS: &str = "true";

pub async fn write_marker(path: &Path) -> Result<(), String> {
    tokio::fs::write(path, MARKER_CONTENTS)
        .await
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}
