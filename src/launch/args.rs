use std::ffi::OsString;

/// Split a raw argument string the way a command line would.
///
/// Whitespace separates arguments; double quotes group text containing
/// spaces and are removed. An unterminated quote runs to the end.
pub(crate) fn split_args(raw: &str) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in raw.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(OsString::from(std::mem::take(&mut current)));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        out.push(OsString::from(current));
    }
    out
}
