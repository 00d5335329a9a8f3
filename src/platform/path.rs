use std::path::Path;

/// Expand `%NAME%` references using `lookup`.
///
/// Unknown variables and unpaired `%` are left in place, so `100%` and
/// `%NOT_SET%` survive unchanged.
pub(crate) fn expand_env_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(len) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..len];
        match (!name.is_empty()).then(|| lookup(name)).flatten() {
            Some(value) => {
                out.push_str(&value);
                rest = &after[len + 1..];
            }
            None => {
                // The closing `%` may open the next reference.
                out.push('%');
                out.push_str(name);
                rest = &after[len..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Expand `%NAME%` references from the process environment.
pub(crate) fn expand_env_vars(input: &str) -> String {
    expand_env_vars_with(input, |name| std::env::var(name).ok())
}

/// Remove characters that can never appear in a path (quotes, redirection, control chars).
pub(crate) fn strip_invalid_path_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '"' | '<' | '>' | '|') && !c.is_ascii_control())
        .collect()
}

/// True for paths anchored to a root: `/x`, `\x`, or a drive prefix such as `C:`.
///
/// Drive prefixes count on every platform because custom commands are typed
/// with Windows paths even when the game runs under Proton.
pub(crate) fn is_rooted(path: &str) -> bool {
    if path.starts_with('/') || path.starts_with('\\') || Path::new(path).has_root() {
        return true;
    }
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}
