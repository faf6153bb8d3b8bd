use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Expands a leading `~` to the current user's home directory
///
/// Only the bare `~` and `~/...` forms are expanded. `~user` forms, and any path when the
/// home directory cannot be determined, are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use annotqc::expand_tilde;
///
/// let expanded = expand_tilde(Path::new("~/annotations/batch1.json"));
/// assert!(expanded.is_absolute());
/// ```
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for home expansion with an explicit home directory (for testing)
pub(crate) fn expand_tilde_internal(path: &Path, home: Option<&Path>) -> PathBuf {
    let mut components = path.components();
    match (components.next(), home) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            let rest = components.as_path();
            if rest.as_os_str().is_empty() { home.to_path_buf() } else { home.join(rest) }
        }
        _ => path.to_path_buf(),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use annotqc::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/annotations/batch1.json");
/// // Returns "~/annotations/batch1.json" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.display())
        };
    }

    // Avoid double allocation when converting Cow to String
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
