//! Path normalization utilities
//!
//! Report paths use '/' as separator and are relative to the scanned directory.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the scanned directory
pub fn make_relative(path: &Path, dir: &Path) -> Option<String> {
    path.strip_prefix(dir).ok().map(normalize_path)
}

/// Check whether a path's file name ends with `suffix`.
///
/// Compares raw bytes so names that are not valid UTF-8 still match.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("gen/foo_grpc.pb.go")), "gen/foo_grpc.pb.go");
    }

    #[test]
    fn test_make_relative() {
        let dir = Path::new("/project/gen");
        let path = Path::new("/project/gen/foo_grpc.pb.go");
        assert_eq!(make_relative(path, dir), Some("foo_grpc.pb.go".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_dir() {
        let dir = Path::new("/project/gen");
        let path = Path::new("/other/foo_grpc.pb.go");
        assert_eq!(make_relative(path, dir), None);
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(Path::new("foo_grpc.pb.go"), "_grpc.pb.go"));
        assert!(has_suffix(Path::new("/a/b/foo_grpc.pb.go"), "_grpc.pb.go"));
        assert!(!has_suffix(Path::new("foo.pb.go"), "_grpc.pb.go"));
        assert!(!has_suffix(Path::new("bar.go"), "_grpc.pb.go"));
        assert!(!has_suffix(Path::new("foo_grpc.pb.go.bak"), "_grpc.pb.go"));
    }

    #[cfg(unix)]
    #[test]
    fn test_has_suffix_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"\xffbad_grpc.pb.go");
        assert!(has_suffix(Path::new(name), "_grpc.pb.go"));

        let other = OsStr::from_bytes(b"\xffbad.go");
        assert!(!has_suffix(Path::new(other), "_grpc.pb.go"));
    }

    #[test]
    fn test_has_suffix_checks_file_name_only() {
        assert!(!has_suffix(Path::new("x_grpc.pb.go/inner.txt"), "_grpc.pb.go"));
        assert!(!has_suffix(Path::new("/"), "_grpc.pb.go"));
    }
}
