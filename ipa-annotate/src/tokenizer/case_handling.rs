use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    SmolStr::from(s.to_lowercase())
}

/// Normalizes a dictionary key or lookup word under a case-fold policy.
#[inline]
pub fn fold_key(s: &str, case_fold: bool) -> SmolStr {
    if case_fold {
        lower_case(s)
    } else {
        SmolStr::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_only_when_asked() {
        assert_eq!(fold_key("THE", true), "the");
        assert_eq!(fold_key("THE", false), "THE");
        assert_eq!(fold_key("Straße", true), "straße");
    }

    #[test]
    fn final_sigma() {
        assert_eq!(lower_case("ΟΔΟΣ"), "\u{3bf}\u{3b4}\u{3bf}\u{3c2}");
    }
}
