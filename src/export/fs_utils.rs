use std::path::Path;

use crate::ui::messages::{confirm, info};

/// Whether `path` may be (over)written.
///
/// - missing file → yes
/// - existing file with `force` → yes
/// - otherwise the user is asked
pub(crate) fn ensure_writable(path: &Path, force: bool) -> bool {
    if !path.exists() || force {
        return true;
    }

    let ok = confirm(&format!(
        "The file '{}' already exists. Overwrite it?",
        path.display()
    ));
    if ok {
        info("Existing file will be overwritten.");
    }
    ok
}
