//! Name rules shared by both emitters
//!
//! A qualified name is `<Prefix>_<Rest>`, e.g. `Foo_SayHi`. The script side
//! only ever sees `<Rest>` with its first character lower-cased.

/// splits the fixed prefix from the meaningful part of a qualified name
pub const SEPARATOR: char = '_';

/// short names reserved for the name-mapping hook; never emitted as stubs.
/// `Foo__name_` derives the second spelling
pub const RESERVED_SHORT_NAMES: [&str; 2] = ["name", "_name_"];

/// everything after the first [`SEPARATOR`]. a name without a separator is
/// returned whole.
pub fn strip_prefix_to_first_separator(name: &str) -> &str {
    match name.find(SEPARATOR) {
        Some(idx) => &name[idx + SEPARATOR.len_utf8()..],
        None => name,
    }
}

/// lower-case only the first character, leave the rest alone
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => first.to_lowercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// `Foo_SayHi` -> `sayHi`
pub fn short_name(qualified_name: &str) -> String {
    lower_first(strip_prefix_to_first_separator(qualified_name))
}

pub fn is_reserved_short_name(short_name: &str) -> bool {
    RESERVED_SHORT_NAMES.contains(&short_name)
}
