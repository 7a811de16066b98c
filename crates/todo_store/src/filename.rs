use sha2::{Digest, Sha256};

/// Filesystem-safe, deterministic file name for a storage key.
///
/// Plain keys map to `{key}.json`. Keys that need sanitizing get a short hash
/// of the raw key appended so that `a/b` and `a_b` stay distinct.
pub fn key_filename(key: &str) -> String {
    let sanitized = sanitize_key(key);
    if sanitized == key {
        format!("{sanitized}.json")
    } else {
        format!("{sanitized}--{}.json", short_hash(key))
    }
}

fn sanitize_key(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = "store".to_string();
    }
    if cleaned.len() > 80 {
        let mut end = 80;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
    }
    if is_reserved_windows_name(&cleaned) {
        cleaned.push('_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_keeps_its_name() {
        assert_eq!(key_filename("TodoApp"), "TodoApp.json");
    }

    #[test]
    fn sanitized_keys_do_not_collide() {
        let slash = key_filename("a/b");
        let underscore = key_filename("a_b");
        assert!(slash.starts_with("a_b--"));
        assert_eq!(underscore, "a_b.json");
        assert_ne!(slash, underscore);
    }

    #[test]
    fn reserved_names_are_suffixed() {
        assert!(key_filename("con").starts_with("con_--"));
    }
}
