// src/specs/case_types.rs
//
// Case types offered by the portal's case-status form, as (code, description).

pub static CASE_TYPES: &[(&str, &str)] = &[
    ("CS", "Civil Suit"),
    ("CR", "Criminal Revision"),
    ("FIR", "First Information Report"),
    ("MACP", "Motor Accident Claim Petition"),
    ("ARBTN", "Arbitration Case"),
    ("CA", "Civil Appeal"),
    ("CAVEAT", "Caveat"),
    ("COMA", "Company Application"),
    ("COMO", "Company Petition"),
    ("CS-COM", "Civil Suit Commercial"),
    ("CS-EX", "Civil Suit Execution"),
    ("CS-OS", "Civil Suit Original Side"),
    ("EA", "Execution Application"),
    ("HMA", "Hindu Marriage Act Case"),
    ("MACT", "Motor Accident Compensation Tribunal"),
    ("MCA", "Miscellaneous Civil Appeal"),
    ("MISC", "Miscellaneous Application"),
    ("NIA", "Negotiable Instruments Act Case"),
    ("PA", "Probate Application"),
    ("PC", "Probate Case"),
    ("PS", "Partition Suit"),
    ("RA", "Regular Appeal"),
    ("RC", "Rent Control"),
    ("RCS", "Regular Civil Suit"),
    ("SC", "Small Cause Case"),
    ("SS", "Summary Suit"),
    ("SUCC", "Succession Case"),
];

pub fn all() -> &'static [(&'static str, &'static str)] {
    CASE_TYPES
}

/// Description for a code, ignoring ASCII case.
pub fn describe(code: &str) -> Option<&'static str> {
    let code = code.trim();
    CASE_TYPES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, d)| *d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_unique_codes() {
        assert_eq!(all().len(), 27);
        let mut codes: Vec<&str> = all().iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn describe_ignores_case() {
        assert_eq!(describe("cs-com"), Some("Civil Suit Commercial"));
        assert_eq!(describe(" SUCC "), Some("Succession Case"));
        assert_eq!(describe("XYZ"), None);
    }
}
