/// Known duplicate ticker spellings mapped to their canonical scrip.
/// Brokers disagree on a few listings (OGDC vs OGDCL); this table is the
/// single source of truth for merging them.
const SCRIP_ALIASES: &[(&str, &str)] = &[("OGDC", "OGDCL")];

/// Canonical form of a raw scrip symbol: marker asterisks stripped,
/// whitespace trimmed, uppercased, then mapped through the alias table.
/// Idempotent: a canonical symbol normalizes to itself.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '*').collect();
    let clean = stripped.trim().to_uppercase();
    match SCRIP_ALIASES.iter().find(|(alias, _)| *alias == clean) {
        Some((_, canonical)) => (*canonical).to_string(),
        None => clean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers_and_uppercases() {
        assert_eq!(normalize("MEBL*"), "MEBL");
        assert_eq!(normalize("  mlcf* "), "MLCF");
    }

    #[test]
    fn merges_known_aliases() {
        assert_eq!(normalize("OGDC"), "OGDCL");
        assert_eq!(normalize("OGDCL"), "OGDCL");
        assert_eq!(normalize("ogdc"), "OGDCL");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  *  "), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["OGDC", "MEBL*", " sys ", "ALPHA STOCKS", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
