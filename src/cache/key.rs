//! Cache key derivation

/// Cache key for one zone's guild rankings.
pub fn rankings_key(zone_id: i64) -> String {
    format!("zone-{}", zone_id)
}

/// On-disk file name for a key.
///
/// Percent-encoding keeps distinct keys on distinct files and keeps path
/// separators out of the name.
pub fn file_name(key: &str) -> String {
    format!("{}.json", urlencoding::encode(key))
}

/// Recover the key from a file name produced by [`file_name`].
pub fn key_from_file_name(name: &str) -> Option<String> {
    let stem = name.strip_suffix(".json")?;
    urlencoding::decode(stem).ok().map(|k| k.into_owned())
}
