//! Severity taxonomy and the alert policy that drives classification.
//!
//! Classification is a pure function of `(remaining_days, policy)`; there
//! is no hidden state and no clock access anywhere in this module.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Remaining-days thresholds controlling classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Exact remaining-day values that trigger a distinct imminent notice.
    pub alert_days: BTreeSet<i64>,
    /// Inclusive upper bound on remaining days below which a record is
    /// worth surfacing at all.
    pub attention_window: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            alert_days: BTreeSet::from([10, 7, 5, 3, 1]),
            attention_window: 10,
        }
    }
}

impl AlertPolicy {
    /// Buckets a remaining-day count. `Imminent` takes precedence over
    /// `Attention` when the value is an exact alert-day match.
    pub fn classify(&self, remaining_days: i64) -> Severity {
        if remaining_days < 0 {
            Severity::Expired
        } else if self.alert_days.contains(&remaining_days) {
            Severity::Imminent
        } else if remaining_days <= self.attention_window {
            Severity::Attention
        } else {
            Severity::Safe
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Expired,
    Imminent,
    Attention,
    Safe,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Expired => "EXPIRED",
            Self::Imminent => "IMMINENT",
            Self::Attention => "ATTENTION",
            Self::Safe => "SAFE",
        }
    }

    /// Fill decision shared by interactive display and export.
    pub fn fill(self) -> FillStyle {
        match self {
            Self::Expired => FillStyle::Expired,
            Self::Imminent | Self::Attention => FillStyle::Attention,
            Self::Safe => FillStyle::None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row shading decision: two fill colors plus no-fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    /// Fill A, red: past expiry.
    Expired,
    /// Fill B, yellow: inside the attention window.
    Attention,
    #[default]
    None,
}
