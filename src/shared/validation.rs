use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters stripped from uploaded filenames before they become part of
    /// a storage key. Everything outside ASCII alphanumerics, underscore,
    /// hyphen and dot is removed.
    pub static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
}

/// Reduce an uploaded filename to something safe to embed in a storage key:
/// strip any path components (both separator styles), replace whitespace with
/// underscores, drop unsafe characters, and trim leading dots so the result
/// can never climb out of its category directory. An empty result means "no
/// file provided".
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let flattened: String = base
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&flattened, "");
    cleaned.trim_start_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_names() {
        assert_eq!(sanitize_filename("a.png"), "a.png");
        assert_eq!(sanitize_filename("My Design v2.PDF"), "My_Design_v2.PDF");
        assert_eq!(sanitize_filename("x-1_2.tar.gz"), "x-1_2.tar.gz");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/var/tmp/a.png"), "a.png");
        assert_eq!(sanitize_filename("C:\\Users\\x\\a.png"), "a.png");
    }

    #[test]
    fn test_sanitize_trims_leading_dots() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename(".."), "");
        assert_eq!(sanitize_filename("..."), "");
    }

    #[test]
    fn test_sanitize_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("a$b%c.png"), "abc.png");
        assert_eq!(sanitize_filename("résumé.pdf"), "rsum.pdf");
        assert_eq!(sanitize_filename("???"), "");
        assert_eq!(sanitize_filename(""), "");
    }
}
