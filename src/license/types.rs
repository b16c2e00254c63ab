//! License mention data model.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical Creative Commons license families.
///
/// [LicenseAbbr::Unknown] covers URLs that live on a recognized CC domain
/// but whose path does not map to a known family: they are still evidence
/// of a license link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseAbbr {
    Unknown,
    By,
    BySa,
    ByNd,
    ByNc,
    ByNcSa,
    ByNcNd,
    Zero,
    Certification,
    Mark,
}

impl LicenseAbbr {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseAbbr::Unknown => "unknown",
            LicenseAbbr::By => "by",
            LicenseAbbr::BySa => "by-sa",
            LicenseAbbr::ByNd => "by-nd",
            LicenseAbbr::ByNc => "by-nc",
            LicenseAbbr::ByNcSa => "by-nc-sa",
            LicenseAbbr::ByNcNd => "by-nc-nd",
            LicenseAbbr::Zero => "zero",
            LicenseAbbr::Certification => "certification",
            LicenseAbbr::Mark => "mark",
        }
    }
}

impl fmt::Display for LicenseAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LicenseAbbr {
    type Err = ();

    /// Parses a license family token as found in CC URL paths.
    /// Unrecognized tokens are an [Err]: the caller decides whether that
    /// means rejection or [LicenseAbbr::Unknown].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by" => Ok(LicenseAbbr::By),
            "by-sa" => Ok(LicenseAbbr::BySa),
            "by-nd" => Ok(LicenseAbbr::ByNd),
            "by-nc" => Ok(LicenseAbbr::ByNc),
            "by-nc-sa" => Ok(LicenseAbbr::ByNcSa),
            "by-nc-nd" => Ok(LicenseAbbr::ByNcNd),
            "zero" => Ok(LicenseAbbr::Zero),
            "certification" => Ok(LicenseAbbr::Certification),
            "mark" => Ok(LicenseAbbr::Mark),
            _ => Err(()),
        }
    }
}

/// Structural source of a license mention.
///
/// The set is closed: the scanner dispatches on these four kinds in a
/// single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseLocation {
    MetaTag,
    JsonLd,
    LinkTag,
    ATag,
}

impl LicenseLocation {
    /// Preference rank, lower is better.
    pub fn rank(&self) -> u8 {
        match self {
            LicenseLocation::MetaTag => 0,
            LicenseLocation::JsonLd => 1,
            LicenseLocation::LinkTag => 2,
            LicenseLocation::ATag => 3,
        }
    }
}

impl fmt::Display for LicenseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LicenseLocation::MetaTag => "meta_tag",
            LicenseLocation::JsonLd => "json_ld",
            LicenseLocation::LinkTag => "link_tag",
            LicenseLocation::ATag => "a_tag",
        };
        write!(f, "{s}")
    }
}

/// One discovered license reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseMention {
    pub abbr: LicenseAbbr,
    pub version: Option<String>,
    pub location: LicenseLocation,
    pub in_head: bool,
    pub in_footer: bool,
}

impl LicenseMention {
    /// Resolver sort key: (location rank, head rank, footer rank),
    /// ascending = preferred. `true` ranks before `false` for both
    /// context flags.
    pub fn preference(&self) -> (u8, u8, u8) {
        (
            self.location.rank(),
            u8::from(!self.in_head),
            u8::from(!self.in_footer),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbr_serialized_names() {
        let cases = [
            (LicenseAbbr::Unknown, "\"unknown\""),
            (LicenseAbbr::BySa, "\"by-sa\""),
            (LicenseAbbr::ByNcNd, "\"by-nc-nd\""),
            (LicenseAbbr::Zero, "\"zero\""),
            (LicenseAbbr::Mark, "\"mark\""),
        ];
        for (abbr, expected) in cases {
            assert_eq!(serde_json::to_string(&abbr).unwrap(), expected);
        }
    }

    #[test]
    fn test_location_serialized_names() {
        let cases = [
            (LicenseLocation::MetaTag, "\"meta_tag\""),
            (LicenseLocation::JsonLd, "\"json_ld\""),
            (LicenseLocation::LinkTag, "\"link_tag\""),
            (LicenseLocation::ATag, "\"a_tag\""),
        ];
        for (location, expected) in cases {
            assert_eq!(serde_json::to_string(&location).unwrap(), expected);
        }
    }

    #[test]
    fn test_location_ranks() {
        assert!(LicenseLocation::MetaTag.rank() < LicenseLocation::JsonLd.rank());
        assert!(LicenseLocation::JsonLd.rank() < LicenseLocation::LinkTag.rank());
        assert!(LicenseLocation::LinkTag.rank() < LicenseLocation::ATag.rank());
    }

    #[test]
    fn test_preference_head_over_body() {
        let head = LicenseMention {
            abbr: LicenseAbbr::By,
            version: None,
            location: LicenseLocation::ATag,
            in_head: true,
            in_footer: false,
        };
        let body = LicenseMention {
            in_head: false,
            ..head.clone()
        };
        assert!(head.preference() < body.preference());
    }

    #[test]
    fn test_family_roundtrip() {
        for s in [
            "by",
            "by-sa",
            "by-nd",
            "by-nc",
            "by-nc-sa",
            "by-nc-nd",
            "zero",
            "certification",
            "mark",
        ] {
            let abbr: LicenseAbbr = s.parse().unwrap();
            assert_eq!(abbr.as_str(), s);
        }
        assert!("gpl".parse::<LicenseAbbr>().is_err());
    }
}
