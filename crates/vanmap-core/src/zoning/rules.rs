//! Ordered zoning district rules.

use super::ZoningCodeDescriptor;

/// How a rule matches an uppercased zoning code.
#[derive(Debug, Clone, Copy)]
pub(super) enum CodePattern {
    /// The whole code equals this string.
    Exact(&'static str),
    /// The code starts with this string.
    Prefix(&'static str),
    /// The code starts with either string.
    EitherPrefix(&'static str, &'static str),
}

impl CodePattern {
    pub(super) fn matches(&self, code: &str) -> bool {
        match self {
            CodePattern::Exact(s) => code == *s,
            CodePattern::Prefix(p) => code.starts_with(p),
            CodePattern::EitherPrefix(a, b) => code.starts_with(a) || code.starts_with(b),
        }
    }
}

pub(super) struct ZoningRule {
    pub pattern: CodePattern,
    pub descriptor: ZoningCodeDescriptor,
}

const fn rule(pattern: CodePattern, name: &'static str, category_slug: &'static str) -> ZoningRule {
    ZoningRule {
        pattern,
        descriptor: ZoningCodeDescriptor { name, category_slug },
    }
}

/// District rules, evaluated top to bottom with the first match winning.
/// Order is load-bearing: "CD-1" stays reachable below "C-" only because
/// "CD-1" does not start with "C-".
pub(super) const ZONING_RULES: &[ZoningRule] = &[
    rule(CodePattern::Exact("BCPED"), "B.C. Place/Expo", "special"),
    rule(CodePattern::Prefix("C-"), "Commercial", "commercial"),
    rule(
        CodePattern::Prefix("CD-1"),
        "Comprehensive Development",
        "comprehensivedevelopment",
    ),
    rule(CodePattern::Exact("CWD"), "Central Waterfront", "special"),
    rule(CodePattern::Exact("DD"), "Downtown", "special"),
    rule(
        CodePattern::Exact("DEOD"),
        "Downtown-Eastside/Oppenheimer",
        "special",
    ),
    rule(CodePattern::Exact("FC-1"), "East False Creek", "special"),
    rule(
        CodePattern::Exact("FCCDD"),
        "False Creek Comprehensive Development",
        "comprehensivedevelopment",
    ),
    rule(CodePattern::Exact("FM-1"), "Fairview", "special"),
    rule(CodePattern::Exact("FSD"), "First Shaughnessy", "shaughnessy"),
    rule(CodePattern::Prefix("HA-"), "Historic Area", "special"),
    rule(
        CodePattern::EitherPrefix("I-", "IC-"),
        "Light Industrial",
        "industrial",
    ),
    rule(CodePattern::Prefix("M-"), "Industrial", "industrial"),
    // Every "MC-" code also starts with "M-", so the rule above claims them
    // all and this entry never fires. The upstream classification table
    // orders the two this way; kept verbatim rather than reordered, and
    // pinned by tests::mc_codes_are_shadowed_by_m_rule.
    rule(
        CodePattern::Prefix("MC-"),
        "Light Industrial Mixed Use",
        "industrial",
    ),
    rule(CodePattern::Prefix("RA-"), "Limited Agriculture", "special"),
    rule(
        CodePattern::Prefix("RM-"),
        "Multiple Dwelling",
        "multipledwelling",
    ),
    rule(CodePattern::Prefix("RS-"), "One-Family Dwelling", "rs"),
    rule(CodePattern::Prefix("RT-"), "Two-Family Dwelling", "rt"),
];
