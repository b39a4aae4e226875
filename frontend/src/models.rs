use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Pricing tiers shown on the landing page, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Plan {
    Basic,
    #[default]
    Professional,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Professional, Plan::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Professional => "Professional",
            Plan::Enterprise => "Enterprise",
        }
    }

    /// The tier carrying the "Most Popular" tag.
    pub fn is_popular(self) -> bool {
        matches!(self, Plan::Professional)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input method of the verify tool. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Upload,
    Scan,
    ManualId,
}

impl ToolMode {
    pub const ALL: [ToolMode; 3] = [ToolMode::Upload, ToolMode::Scan, ToolMode::ManualId];

    pub fn key(self) -> &'static str {
        match self {
            ToolMode::Upload => "upload",
            ToolMode::Scan => "scan",
            ToolMode::ManualId => "id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Upload => "Upload Document",
            ToolMode::Scan => "Scan QR Code",
            ToolMode::ManualId => "Enter Document ID",
        }
    }
}

/// Named regions of the page that navigation scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    HowItWorks,
    Pricing,
    Verify,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSectionError {
    #[error("unknown section anchor `{0}`")]
    Unknown(String),
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Features,
        Section::HowItWorks,
        Section::Pricing,
        Section::Verify,
    ];

    /// Element id the section is rendered with. These names are stable.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Pricing => "pricing",
            Section::Verify => "verify",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::HowItWorks => "How It Works",
            Section::Pricing => "Pricing",
            Section::Verify => "Verify Document",
        }
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| ParseSectionError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_match_first_render() {
        assert_eq!(Plan::default(), Plan::Professional);
        assert_eq!(ToolMode::default(), ToolMode::Upload);
    }

    #[test]
    fn only_professional_is_popular() {
        let popular: Vec<Plan> = Plan::ALL.into_iter().filter(|p| p.is_popular()).collect();
        assert_eq!(popular, vec![Plan::Professional]);
    }

    #[test]
    fn tool_keys_are_the_three_tab_labels() {
        let keys: Vec<&str> = ToolMode::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["upload", "scan", "id"]);
    }

    #[test]
    fn section_anchors_are_stable_and_distinct() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["features", "how-it-works", "pricing", "verify"]);
        assert_eq!(anchors.iter().collect::<HashSet<_>>().len(), 4);
    }

    #[test]
    fn section_parses_with_or_without_hash() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>(), Ok(section));
            assert_eq!(format!("#{}", section.anchor()).parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert_eq!(
            "#careers".parse::<Section>(),
            Err(ParseSectionError::Unknown("#careers".to_string()))
        );
        assert!("".parse::<Section>().is_err());
        assert!("Pricing".parse::<Section>().is_err());
    }
}
