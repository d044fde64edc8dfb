//! Gzipped tarball extraction with the wrapper folder stripped.
//!
//! Registry archives conventionally wrap a package's files in a single
//! top-level folder; extraction drops that first path component so the
//! contents land directly in the destination directory. Entry paths are
//! validated so no archive can write outside the destination.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use harvest_core::error::HarvestError;
use harvest_core::utils::path::{is_safe_entry_path, normal_components};

use crate::PackResult;

/// Extract a gzipped tarball into `dest_dir`, stripping one leading path
/// component from every entry.
///
/// Regular files and directories are materialized; symlinks and other
/// special entry types are skipped. `package` names the package being
/// unpacked, for error context.
pub fn extract_stripped<R: Read>(reader: R, dest_dir: &Path, package: &str) -> PackResult<()> {
    let mut archive = Archive::new(GzDecoder::new(reader));

    let entries = archive
        .entries()
        .map_err(|e| HarvestError::unpack_io(package, "failed to read archive", e))?;

    for entry_result in entries {
        let mut entry = entry_result
            .map_err(|e| HarvestError::unpack_io(package, "failed to read archive entry", e))?;

        let entry_path = entry
            .path()
            .map_err(|e| HarvestError::unpack_io(package, "archive entry has invalid path", e))?
            .into_owned();

        if !is_safe_entry_path(&entry_path) {
            return Err(HarvestError::unpack(
                package,
                format!(
                    "archive entry escapes destination: {}",
                    entry_path.display()
                ),
            ));
        }

        // The wrapper folder itself strips down to nothing
        let Some(stripped) = strip_first_component(&entry_path) else {
            continue;
        };
        let dest_path = dest_dir.join(stripped);

        match entry.header().entry_type() {
            tar::EntryType::Regular => write_file(&mut entry, &dest_path, package)?,
            tar::EntryType::Directory => {
                fs::create_dir_all(&dest_path).map_err(|e| {
                    HarvestError::unpack_io(
                        package,
                        format!("failed to create {}", dest_path.display()),
                        e,
                    )
                })?;
            },
            // Symlinks, hard links, devices: not part of registry archives
            _ => continue,
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(mode) = entry.header().mode() {
                let _ = fs::set_permissions(&dest_path, fs::Permissions::from_mode(mode));
            }
        }
    }

    Ok(())
}

/// Drop the leading path component from an archive entry path.
///
/// Returns `None` for the wrapper folder entry itself, which has nothing
/// left after the strip.
fn strip_first_component(path: &Path) -> Option<PathBuf> {
    let normalized = normal_components(path);
    let mut components = normalized.components();
    components.next()?;

    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        None
    } else {
        Some(rest.to_path_buf())
    }
}

/// Stream one regular file out of the archive
fn write_file<R: Read>(entry: &mut tar::Entry<R>, dest_path: &Path, package: &str) -> PackResult<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HarvestError::unpack_io(
                package,
                format!("failed to create {}", parent.display()),
                e,
            )
        })?;
    }

    let mut file = fs::File::create(dest_path).map_err(|e| {
        HarvestError::unpack_io(
            package,
            format!("failed to create {}", dest_path.display()),
            e,
        )
    })?;

    std::io::copy(entry, &mut file).map_err(|e| {
        HarvestError::unpack_io(
            package,
            format!("failed to write {}", dest_path.display()),
            e,
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Cursor;
    use tar::Builder;

    fn tarball_with_dirs(entries: &[(&str, Option<&str>)]) -> Vec<u8> {
        let mut data = Vec::new();
        {
            let encoder = GzEncoder::new(&mut data, Compression::default());
            let mut builder = Builder::new(encoder);

            for (path, content) in entries {
                let mut header = tar::Header::new_gnu();
                header.set_path(path).unwrap();
                match content {
                    Some(text) => {
                        header.set_entry_type(tar::EntryType::Regular);
                        header.set_size(text.len() as u64);
                        header.set_mode(0o644);
                        header.set_cksum();
                        builder.append(&header, text.as_bytes()).unwrap();
                    },
                    None => {
                        header.set_entry_type(tar::EntryType::Directory);
                        header.set_size(0);
                        header.set_mode(0o755);
                        header.set_cksum();
                        builder.append(&header, std::io::empty()).unwrap();
                    },
                }
            }

            builder.finish().unwrap();
        }
        data
    }

    #[test]
    fn test_strip_first_component() {
        assert_eq!(
            strip_first_component(Path::new("package/index.js")),
            Some(PathBuf::from("index.js"))
        );
        assert_eq!(
            strip_first_component(Path::new("package/lib/util.js")),
            Some(PathBuf::from("lib/util.js"))
        );
        // The wrapper folder entry has nothing left
        assert_eq!(strip_first_component(Path::new("package/")), None);
        assert_eq!(strip_first_component(Path::new("package")), None);
    }

    #[test]
    fn test_extracts_files_and_directories() {
        let dest = tempfile::tempdir().unwrap();
        let data = tarball_with_dirs(&[
            ("package/", None),
            ("package/package.json", Some("{\"name\":\"demo\"}")),
            ("package/src/", None),
            ("package/src/main.js", Some("console.log('hi')")),
        ]);

        extract_stripped(Cursor::new(data), dest.path(), "demo").unwrap();

        assert!(dest.path().join("package.json").is_file());
        assert!(dest.path().join("src").is_dir());
        assert_eq!(
            std::fs::read_to_string(dest.path().join("src/main.js")).unwrap(),
            "console.log('hi')"
        );
        // Nothing named after the wrapper folder is materialized
        assert!(!dest.path().join("package").exists());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        // No explicit directory entries; parents come from the file paths
        let dest = tempfile::tempdir().unwrap();
        let data = tarball_with_dirs(&[("package/deep/nested/file.txt", Some("x"))]);

        extract_stripped(Cursor::new(data), dest.path(), "demo").unwrap();
        assert!(dest.path().join("deep/nested/file.txt").is_file());
    }

    #[test]
    fn test_corrupt_archive_is_an_unpack_error() {
        let dest = tempfile::tempdir().unwrap();
        let result = extract_stripped(Cursor::new(b"not a tarball".to_vec()), dest.path(), "demo");
        assert!(matches!(result, Err(HarvestError::Unpack { .. })));
    }
}
