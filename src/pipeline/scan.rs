//! Directory scanning: collect the candidate files of one stage directory.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the convertible files directly inside `dir`.
///
/// Regular files only; extensions are matched case-sensitively and without
/// the leading dot. The result holds one group per configured extension,
/// concatenated in configuration order; within a group files appear in
/// directory-listing order (platform-dependent, no sort guarantee).
pub fn scan_stage_dir(dir: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    let mut candidates = Vec::new();
    for ext in extensions {
        for path in &files {
            if path.extension().and_then(OsStr::to_str) == Some(ext.as_str()) {
                candidates.push(path.clone());
            }
        }
    }

    debug!(
        dir = %dir.display(),
        candidates = candidates.len(),
        "scanned stage directory"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["docx".to_string(), "wps".to_string()]
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn groups_by_extension_in_config_order() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "z.wps");
        touch(tmp.path(), "a.docx");
        touch(tmp.path(), "m.wps");
        touch(tmp.path(), "b.docx");

        let found = scan_stage_dir(tmp.path(), &exts()).unwrap();
        assert_eq!(found.len(), 4);

        // All .docx candidates come before any .wps candidate.
        let first_wps = found
            .iter()
            .position(|p| p.extension().unwrap() == "wps")
            .unwrap();
        assert!(found[..first_wps]
            .iter()
            .all(|p| p.extension().unwrap() == "docx"));
        assert!(found[first_wps..]
            .iter()
            .all(|p| p.extension().unwrap() == "wps"));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "upper.DOCX");
        touch(tmp.path(), "lower.docx");

        let found = scan_stage_dir(tmp.path(), &exts()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("lower.docx"));
    }

    #[test]
    fn ignores_other_extensions_and_subdirectories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "note.txt");
        touch(tmp.path(), "doc.docx");
        fs::create_dir(tmp.path().join("nested.docx")).unwrap();
        touch(&tmp.path().join("nested.docx"), "inner.docx");

        let found = scan_stage_dir(tmp.path(), &exts()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("doc.docx"));
    }

    #[test]
    fn missing_directory_is_an_error_for_the_caller_to_downgrade() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("absent");
        assert!(scan_stage_dir(&missing, &exts()).is_err());
    }
}
