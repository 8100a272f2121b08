//! Core data types for the guide
//!
//! This module defines all shared data structures used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard filter identifier
pub const FILTER_ALL: &str = "all";

/// Legacy wildcard used by the Portuguese content
const FILTER_ALL_ALIAS: &str = "todas";

/// Kind of content a section renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Landing page with feature cards
    Home,
    #[default]
    Article,
    Prayers,
    Faq,
}

/// One of the mutually exclusive top-level views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// A prayer category tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerCategory {
    pub id: String,
    pub label: String,
}

/// A prayer entry tagged with exactly one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub text: String,
}

/// A FAQ entry (accordion semantics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// A "read more" panel inside an article section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandablePanel {
    pub id: u32,
    pub section: String,
    pub title: String,
    pub body: String,
}

/// Prayer filter selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PrayerFilter {
    #[default]
    All,
    Category(String),
}

impl PrayerFilter {
    /// Parse a filter identifier, recognising the wildcard
    pub fn parse(id: &str) -> Self {
        if id == FILTER_ALL || id == FILTER_ALL_ALIAS {
            PrayerFilter::All
        } else {
            PrayerFilter::Category(id.to_string())
        }
    }

    /// Whether an item tagged with `category` passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            PrayerFilter::All => true,
            PrayerFilter::Category(c) => c == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PrayerFilter::All => FILTER_ALL,
            PrayerFilter::Category(c) => c,
        }
    }
}

/// Persisted color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parse a stored value; anything unknown is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded section view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistoryEntry {
    pub section: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

/// Identity of an interactive element on the render surface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    NavButton(String),
    FeatureCard(String),
    FilterTab(PrayerFilter),
    CopyButton(u32),
    ExpandToggle(u32),
    FaqQuestion(u32),
    ScrollToTop,
}

/// A typed user intent, dispatched to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ActivateSection(String),
    FilterPrayers(PrayerFilter),
    CopyPrayer(u32),
    ToggleExpandable(u32),
    ToggleFaq(u32),
    ScrollToTop,
    SetTheme(ThemePreference),
}

/// An interactive element bound to the intent it fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub label: String,
    pub intent: Intent,
}

impl Control {
    pub fn new(id: ControlId, label: impl Into<String>, intent: Intent) -> Self {
        Self {
            id,
            label: label.into(),
            intent,
        }
    }
}

/// User agent string recorded with history entries
pub fn user_agent() -> String {
    format!(
        "exorcism-guide/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
