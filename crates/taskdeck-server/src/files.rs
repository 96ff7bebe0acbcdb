//! Request-path sanitization and content-type lookup

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Turn a raw request path into a path relative to the served root.
///
/// Returns `None` for anything that must be rejected before touching
/// the filesystem: undecodable percent-escapes, NUL bytes, absolute
/// components, or any `..` segment. An empty path maps to `index.html`.
pub fn sanitize_request_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    if decoded.contains('\0') {
        return None;
    }

    let trimmed = decoded.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(PathBuf::from("index.html"));
    }

    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            // Anything that could escape the root is rejected outright
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        Some(PathBuf::from("index.html"))
    } else {
        Some(clean)
    }
}

/// Content type for a file extension, mirroring the asset types the
/// app ships. Unknown extensions fall back to octet-stream.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass_through() {
        assert_eq!(
            sanitize_request_path("/app.js"),
            Some(PathBuf::from("app.js"))
        );
        assert_eq!(
            sanitize_request_path("/assets/logo.png"),
            Some(PathBuf::from("assets/logo.png"))
        );
    }

    #[test]
    fn test_root_resolves_to_index() {
        assert_eq!(sanitize_request_path("/"), Some(PathBuf::from("index.html")));
        assert_eq!(sanitize_request_path(""), Some(PathBuf::from("index.html")));
    }

    #[test]
    fn test_traversal_is_rejected() {
        assert_eq!(sanitize_request_path("/../etc/passwd"), None);
        assert_eq!(sanitize_request_path("/a/../../b"), None);
    }

    #[test]
    fn test_encoded_traversal_is_rejected() {
        assert_eq!(sanitize_request_path("/%2e%2e/secret"), None);
        assert_eq!(sanitize_request_path("/a/%2E%2E/%2E%2E/b"), None);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            sanitize_request_path("/my%20file.txt"),
            Some(PathBuf::from("my file.txt"))
        );
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert_eq!(sanitize_request_path("/file%00.html"), None);
    }

    #[test]
    fn test_current_dir_segments_collapse() {
        assert_eq!(
            sanitize_request_path("/./a/./b.css"),
            Some(PathBuf::from("a/b.css"))
        );
    }

    #[test]
    fn test_mime_lookup() {
        assert_eq!(mime_for(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(
            mime_for(Path::new("app.JS")),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(mime_for(Path::new("pic.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("blob.bin")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("no_extension")), "application/octet-stream");
    }
}
