//! Path normalization shared by the archive index and the byte reader's
//! `read_path` primitive.

/// Normalizes an archive lookup key: lowercase, `\` -> `/`, and any control
/// character or `:` replaced with `_` (mirrors what Windows-authored asset
/// paths occasionally smuggle in).
pub fn normalize_lookup_key(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            'A'..='Z' => c.to_ascii_lowercase(),
            '\\' => '/',
            ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Case-folds and normalizes separators, then prepends `prefix` unless the
/// string already starts with it and appends `suffix` unless it already
/// ends with it. Used for texture path fields (`prefix = "textures/"`,
/// `suffix = ".dds"`).
pub fn normalize_with_affixes(raw: &str, prefix: &str, suffix: &str) -> String {
    let mut s: String =
        raw.chars().map(|c| if c == '\\' { '/' } else { c.to_ascii_lowercase() }).collect();
    if !prefix.is_empty() && !s.starts_with(prefix) {
        s = format!("{prefix}{s}");
    }
    if !suffix.is_empty() && !s.ends_with(suffix) {
        s.push_str(suffix);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_case_and_separator() {
        assert_eq!(normalize_lookup_key(r"Bar\Baz.DDS"), "bar/baz.dds");
    }

    #[test]
    fn affixes_added_once() {
        assert_eq!(normalize_with_affixes("foo/bar", "textures/", ".dds"), "textures/foo/bar.dds");
        assert_eq!(
            normalize_with_affixes("textures/foo/bar.dds", "textures/", ".dds"),
            "textures/foo/bar.dds"
        );
    }
}
