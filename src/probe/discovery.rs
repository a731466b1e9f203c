//! WAV file discovery

use crate::error::Result;
use crate::format::detect_format_from_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a path names a WAV file by its extension
pub fn is_wav_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(detect_format_from_extension)
        == Some("wav")
}

/// List the WAV files in `dir`, descending into subdirectories when
/// `recursive` is set
///
/// The result is sorted. An unreadable root directory is an error; an
/// unreadable subdirectory is logged and skipped. Symbolic links to
/// directories are not followed.
pub fn discover<P: AsRef<Path>>(dir: P, recursive: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    let mut is_root = true;

    while let Some(current) = pending.pop() {
        let entries = match fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(e) if !is_root => {
                tracing::warn!("skipping unreadable directory {}: {}", current.display(), e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        is_root = false;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping entry in {}: {}", current.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            // Symlinked directories are never descended, so a link back to an
            // ancestor cannot loop. Symlinked files are followed.
            if file_type.is_dir() {
                if recursive {
                    pending.push(path);
                }
            } else if path.is_file() && is_wav_path(&path) {
                found.push(path);
            }
        }
    }

    found.sort();
    tracing::debug!(
        "discovered {} wav file(s) under {}{}",
        found.len(),
        dir.display(),
        if recursive { " (recursive)" } else { "" }
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_is_wav_path() {
        assert!(is_wav_path("kick.wav"));
        assert!(is_wav_path("/a/b/Snare.WAV"));
        assert!(!is_wav_path("loop.mp3"));
        assert!(!is_wav_path("wav"));
        assert!(!is_wav_path("notes.wav.txt"));
        assert!(!is_wav_path(".wav"));
        assert!(!is_wav_path("/samples/.WAV"));
        assert!(is_wav_path("/samples/.hidden.wav"));
    }

    #[test]
    fn test_hidden_dot_wav_not_discovered() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join(".wav"));
        touch(&root.path().join("kick.wav"));
        assert_eq!(
            discover(root.path(), false).unwrap(),
            vec![root.path().join("kick.wav")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_reported_once() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let nested = root.path().join("drums");
        fs::create_dir(&nested).unwrap();
        touch(&root.path().join("a.wav"));
        touch(&nested.join("kick.wav"));
        symlink(root.path(), root.path().join("loop")).unwrap();
        symlink(root.path(), nested.join("up")).unwrap();

        let found = discover(root.path(), true).unwrap();
        assert_eq!(
            found,
            vec![root.path().join("a.wav"), nested.join("kick.wav")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_included() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let target = elsewhere.path().join("snare.wav");
        touch(&target);
        symlink(&target, root.path().join("snare.wav")).unwrap();

        assert_eq!(
            discover(root.path(), true).unwrap(),
            vec![root.path().join("snare.wav")]
        );
    }

    #[test]
    fn test_discover_flat_and_recursive() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("drums");
        fs::create_dir(&nested).unwrap();

        touch(&root.path().join("b.wav"));
        touch(&root.path().join("a.wav"));
        touch(&root.path().join("readme.txt"));
        touch(&nested.join("kick.wav"));

        let flat = discover(root.path(), false).unwrap();
        assert_eq!(
            flat,
            vec![root.path().join("a.wav"), root.path().join("b.wav")]
        );

        let deep = discover(root.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.contains(&nested.join("kick.wav")));
        assert!(deep.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_directory_named_like_wav_is_not_a_file() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("takes.wav")).unwrap();
        assert!(discover(root.path(), false).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        assert!(discover(&missing, true).is_err());
    }
}
