/// Inputs longer than this many characters are truncated before annotation.
pub const MAX_TEXT_LEN: usize = 50_000;

/// Separates pronunciation variants in a raw dictionary value. Only the first
/// variant is kept.
pub const VARIANT_SEPARATOR: &str = ", ";

pub const DICTIONARY_EXT: &str = "json";

