/// Returns `s` with ASCII letters upper-cased.
#[must_use]
pub fn to_uppercase(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Upper-cases ASCII letters of `s` in place.
pub fn to_upper(s: &mut String) {
    s.make_ascii_uppercase();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_in_place() {
        let mut s = String::from("hi");
        to_upper(&mut s);
        assert_eq!(s, "HI");
    }

    #[test]
    fn uppercase_is_idempotent() {
        for s in ["hi", "Brute_Force", "SNAKE", "42 x-y", ""] {
            let once = to_uppercase(s);
            assert_eq!(to_uppercase(&once), once);
        }
    }

    #[test]
    fn non_ascii_is_untouched() {
        assert_eq!(to_uppercase("straße_1"), "STRAßE_1");
    }
}
