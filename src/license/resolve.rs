/*! Best-guess license resolver.

Deterministically selects one mention per document. Preference is
lexicographic over (location rank, in-head, in-footer); ties fall back to
first occurrence in document order, so results are reproducible across
runs as long as the scanner's insertion order is stable.
!*/
use itertools::Itertools;

use super::types::LicenseMention;

/// Pick the preferred mention. [None] only for an empty set.
///
/// Including the index in the sort key pins tie-breaking to the first
/// occurrence ([Iterator::min_by_key] would otherwise keep the last of
/// equal elements).
pub fn best(mentions: &[LicenseMention]) -> Option<&LicenseMention> {
    mentions
        .iter()
        .enumerate()
        .min_by_key(|(idx, mention)| (mention.preference(), *idx))
        .map(|(_, mention)| mention)
}

/// True iff the set holds more than one distinct license family.
/// Version differences alone never count as disagreement.
pub fn disagreement(mentions: &[LicenseMention]) -> bool {
    mentions.iter().map(|m| m.abbr).unique().count() > 1
}

#[cfg(test)]
mod tests {
    use crate::license::types::{LicenseAbbr, LicenseLocation};

    use super::*;

    fn mention(
        abbr: LicenseAbbr,
        version: Option<&str>,
        location: LicenseLocation,
        in_head: bool,
        in_footer: bool,
    ) -> LicenseMention {
        LicenseMention {
            abbr,
            version: version.map(str::to_string),
            location,
            in_head,
            in_footer,
        }
    }

    #[test]
    fn test_empty_set() {
        assert!(best(&[]).is_none());
        assert!(!disagreement(&[]));
    }

    #[test]
    fn test_singleton_total() {
        let m = vec![mention(
            LicenseAbbr::By,
            Some("4.0"),
            LicenseLocation::ATag,
            false,
            false,
        )];
        assert_eq!(best(&m), Some(&m[0]));
        assert!(!disagreement(&m));
    }

    #[test]
    fn test_location_preference() {
        let m = vec![
            mention(LicenseAbbr::By, None, LicenseLocation::ATag, true, false),
            mention(LicenseAbbr::By, None, LicenseLocation::LinkTag, false, false),
            mention(LicenseAbbr::By, None, LicenseLocation::MetaTag, false, false),
            mention(LicenseAbbr::By, None, LicenseLocation::JsonLd, true, false),
        ];
        // meta_tag beats everything, even out of head
        assert_eq!(best(&m).unwrap().location, LicenseLocation::MetaTag);
    }

    #[test]
    fn test_head_preference_within_location() {
        let m = vec![
            mention(LicenseAbbr::By, None, LicenseLocation::ATag, false, true),
            mention(LicenseAbbr::BySa, None, LicenseLocation::ATag, true, false),
        ];
        assert_eq!(best(&m).unwrap().abbr, LicenseAbbr::BySa);
    }

    #[test]
    fn test_footer_preference_within_location() {
        let m = vec![
            mention(LicenseAbbr::By, None, LicenseLocation::ATag, false, false),
            mention(LicenseAbbr::BySa, None, LicenseLocation::ATag, false, true),
        ];
        assert_eq!(best(&m).unwrap().abbr, LicenseAbbr::BySa);
    }

    #[test]
    fn test_tie_broken_by_first_occurrence() {
        let m = vec![
            mention(LicenseAbbr::ByNc, Some("3.0"), LicenseLocation::ATag, false, false),
            mention(LicenseAbbr::ByNd, Some("4.0"), LicenseLocation::ATag, false, false),
        ];
        assert_eq!(best(&m).unwrap().abbr, LicenseAbbr::ByNc);
    }

    #[test]
    fn test_best_is_member_of_set() {
        let m = vec![
            mention(LicenseAbbr::By, None, LicenseLocation::JsonLd, false, true),
            mention(LicenseAbbr::Zero, Some("1.0"), LicenseLocation::ATag, true, false),
            mention(LicenseAbbr::Mark, None, LicenseLocation::LinkTag, false, false),
        ];
        let chosen = best(&m).unwrap();
        assert!(m.contains(chosen));
    }

    #[test]
    fn test_disagreement_on_families() {
        let m = vec![
            mention(LicenseAbbr::By, Some("4.0"), LicenseLocation::MetaTag, true, false),
            mention(LicenseAbbr::BySa, Some("4.0"), LicenseLocation::ATag, false, false),
        ];
        assert!(disagreement(&m));
    }

    #[test]
    fn test_version_difference_is_not_disagreement() {
        let m = vec![
            mention(LicenseAbbr::By, Some("4.0"), LicenseLocation::MetaTag, true, false),
            mention(LicenseAbbr::By, Some("3.0"), LicenseLocation::ATag, false, false),
        ];
        assert!(!disagreement(&m));
    }
}
