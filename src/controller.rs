//! View state controller
//!
//! Owns every piece of mutable UI state:
//! - which single section is active
//! - the prayer filter and each prayer's visibility
//! - expandable panels (independent) and FAQ entries (accordion)
//! - the theme preference
//!
//! The render surface only reflects what the controller tells it.

use crate::clipboard::Clipboard;
use crate::content::Guide;
use crate::error::{GuideError, StorageError};
use crate::storage::{Scope, Storage, HISTORY_KEY, THEME_KEY};
use crate::types::{
    user_agent, ControlId, Intent, NavigationHistoryEntry, PrayerFilter, ThemePreference,
};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Text shown on a copy button after a successful copy
pub const COPIED_LABEL: &str = "✅ Copied!";

/// Alert shown when no clipboard path works
pub const COPY_FAILED_ALERT: &str = "Could not copy to the clipboard";

/// Instructions sent to the render surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    SectionActivated(String),
    ScrollToOrigin {
        section: String,
    },
    PrayerVisibility {
        id: u32,
        visible: bool,
    },
    FilterMarker(Option<PrayerFilter>),
    PanelExpanded {
        id: u32,
        expanded: bool,
    },
    FaqExpanded {
        id: u32,
        expanded: bool,
    },
    ApplyTheme(ThemePreference),
    /// Transient text on a control; a later one on the same control wins
    Acknowledge {
        control: ControlId,
        text: String,
        duration: Duration,
    },
    /// Blocking alert the user has to dismiss
    Alert(String),
}

/// Whatever displays UI state to the user
pub trait RenderSurface {
    fn apply(&mut self, instruction: RenderInstruction);
}

/// Which clipboard path handled a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed,
}

/// Single owner of section, filter, panel, FAQ and theme state
pub struct ViewStateController<R: RenderSurface> {
    guide: Guide,
    surface: R,
    storage: Box<dyn Storage>,
    clipboard: Box<dyn Clipboard>,

    default_section: String,
    acknowledgment: Duration,

    active: Option<usize>,
    filter_marker: Option<PrayerFilter>,
    prayer_visibility: BTreeMap<u32, bool>,
    expanded_panels: BTreeSet<u32>,
    expanded_faq: Option<u32>,
    theme: ThemePreference,
}

impl<R: RenderSurface> ViewStateController<R> {
    /// Create an uninitialized controller over a fixed guide
    pub fn new(
        guide: Guide,
        surface: R,
        storage: Box<dyn Storage>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let prayer_visibility = guide.prayers.iter().map(|p| (p.id, true)).collect();

        Self {
            guide,
            surface,
            storage,
            clipboard,
            default_section: "home".into(),
            acknowledgment: Duration::from_millis(2000),
            active: None,
            filter_marker: Some(PrayerFilter::All),
            prayer_visibility,
            expanded_panels: BTreeSet::new(),
            expanded_faq: None,
            theme: ThemePreference::default(),
        }
    }

    /// Section chosen on first load
    pub fn with_default_section(mut self, id: impl Into<String>) -> Self {
        self.default_section = id.into();
        self
    }

    /// Display window of copy acknowledgments
    pub fn with_acknowledgment(mut self, duration: Duration) -> Self {
        self.acknowledgment = duration;
        self
    }

    /// First load: restore the theme and leave the uninitialized state
    pub fn initialize(&mut self) {
        self.theme = self
            .storage
            .get(Scope::Durable, THEME_KEY)
            .and_then(|v| ThemePreference::parse(&v))
            .unwrap_or_default();
        self.surface.apply(RenderInstruction::ApplyTheme(self.theme));

        if self.guide.section(&self.default_section).is_some() {
            let start = self.default_section.clone();
            self.activate_section(&start);
        } else {
            tracing::warn!(
                section = %self.default_section,
                "default section is not declared, using the first section"
            );
            self.first_section();
        }

        self.surface
            .apply(RenderInstruction::FilterMarker(self.filter_marker.clone()));
    }

    // === ACCESSORS ===

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.map(|i| self.guide.sections[i].id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section() == Some(id)
    }

    #[cfg(test)]
    pub fn filter_marker(&self) -> Option<&PrayerFilter> {
        self.filter_marker.as_ref()
    }

    pub fn is_prayer_visible(&self, id: u32) -> bool {
        self.prayer_visibility.get(&id).copied().unwrap_or(false)
    }

    pub fn is_panel_expanded(&self, id: u32) -> bool {
        self.expanded_panels.contains(&id)
    }

    #[cfg(test)]
    pub fn expanded_faq(&self) -> Option<u32> {
        self.expanded_faq
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    // === OPERATIONS ===

    /// Route a typed intent to its operation
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::trace!(?intent, "dispatch");
        match intent {
            Intent::ActivateSection(id) => self.activate_section(&id),
            Intent::FilterPrayers(filter) => self.filter_prayers(filter),
            Intent::CopyPrayer(id) => {
                self.copy_prayer(id);
            }
            Intent::ToggleExpandable(id) => self.toggle_expandable(id),
            Intent::ToggleFaq(id) => self.toggle_faq_item(id),
            Intent::ScrollToTop => self.scroll_to_top(),
            Intent::SetTheme(pref) => self.set_theme(pref),
        }
    }

    /// Make `id` the single active section. Unknown ids are ignored.
    ///
    /// Re-activating the current section still scrolls and records history.
    pub fn activate_section(&mut self, id: &str) {
        let Some(index) = self.guide.section_index(id) else {
            let err = GuideError::MissingTarget {
                kind: "section",
                id: id.to_string(),
            };
            tracing::debug!(%err, "ignoring navigation");
            return;
        };

        self.active = Some(index);

        self.surface
            .apply(RenderInstruction::SectionActivated(id.to_string()));
        self.surface.apply(RenderInstruction::ScrollToOrigin {
            section: id.to_string(),
        });

        tracing::info!(target: "analytics", section = %id, "section_view");
        self.record_history(id);
    }

    pub fn next_section(&mut self) {
        self.step_section(1);
    }

    pub fn previous_section(&mut self) {
        self.step_section(-1);
    }

    pub fn first_section(&mut self) {
        if let Some(id) = self.guide.sections.first().map(|s| s.id.clone()) {
            self.activate_section(&id);
        }
    }

    pub fn last_section(&mut self) {
        if let Some(id) = self.guide.sections.last().map(|s| s.id.clone()) {
            self.activate_section(&id);
        }
    }

    /// Move through the declared order, stopping at either end
    fn step_section(&mut self, delta: isize) {
        let Some(last) = self.guide.sections.len().checked_sub(1) else {
            return;
        };
        let current = self.active.unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(last);

        if self.active == Some(target) {
            return;
        }
        let id = self.guide.sections[target].id.clone();
        self.activate_section(&id);
    }

    /// Scroll the active section back to its origin
    pub fn scroll_to_top(&mut self) {
        if let Some(section) = self.active_section().map(str::to_string) {
            self.surface
                .apply(RenderInstruction::ScrollToOrigin { section });
        }
    }

    /// Show only prayers matching `filter`; `All` shows everything
    pub fn filter_prayers(&mut self, filter: PrayerFilter) {
        for prayer in &self.guide.prayers {
            let visible = filter.matches(&prayer.category);
            self.prayer_visibility.insert(prayer.id, visible);
            self.surface.apply(RenderInstruction::PrayerVisibility {
                id: prayer.id,
                visible,
            });
        }

        self.filter_marker = match &filter {
            PrayerFilter::All => Some(PrayerFilter::All),
            PrayerFilter::Category(c) if self.guide.has_category(c) => Some(filter.clone()),
            PrayerFilter::Category(_) => None,
        };
        self.surface
            .apply(RenderInstruction::FilterMarker(self.filter_marker.clone()));

        tracing::debug!(filter = filter.as_str(), "prayers filtered");
    }

    /// Flip one "read more" panel; other panels are untouched
    pub fn toggle_expandable(&mut self, id: u32) {
        if !self.guide.panels.iter().any(|p| p.id == id) {
            tracing::debug!(panel = id, "ignoring toggle of unknown panel");
            return;
        }

        let expanded = if self.expanded_panels.remove(&id) {
            false
        } else {
            self.expanded_panels.insert(id);
            true
        };
        self.surface
            .apply(RenderInstruction::PanelExpanded { id, expanded });
    }

    /// Flip one FAQ entry; opening it closes whichever entry was open
    pub fn toggle_faq_item(&mut self, id: u32) {
        if !self.guide.faqs.iter().any(|f| f.id == id) {
            tracing::debug!(faq = id, "ignoring toggle of unknown FAQ entry");
            return;
        }

        if self.expanded_faq == Some(id) {
            self.expanded_faq = None;
            self.surface.apply(RenderInstruction::FaqExpanded {
                id,
                expanded: false,
            });
            return;
        }

        if let Some(other) = self.expanded_faq.take() {
            self.surface.apply(RenderInstruction::FaqExpanded {
                id: other,
                expanded: false,
            });
        }
        self.expanded_faq = Some(id);
        self.surface
            .apply(RenderInstruction::FaqExpanded { id, expanded: true });
    }

    /// Persist and apply a theme
    pub fn set_theme(&mut self, pref: ThemePreference) {
        self.theme = pref;
        if let Err(e) = self.storage.set(Scope::Durable, THEME_KEY, pref.as_str()) {
            let err = GuideError::from(e);
            tracing::warn!(error = %err, "failed to persist theme");
        }
        self.surface.apply(RenderInstruction::ApplyTheme(pref));
        tracing::info!(theme = %pref, "theme applied");
    }

    /// Copy the text of prayer `id`, acknowledging on its copy button
    pub fn copy_prayer(&mut self, id: u32) -> CopyOutcome {
        let Some(text) = self.guide.prayer(id).map(|p| p.text.clone()) else {
            let err = GuideError::MissingTarget {
                kind: "prayer",
                id: id.to_string(),
            };
            tracing::debug!(%err, "ignoring copy");
            return CopyOutcome::Failed;
        };
        self.copy_to_clipboard(ControlId::CopyButton(id), &text)
    }

    /// Primary clipboard write, then the fallback. Only a double failure
    /// interrupts the user.
    pub fn copy_to_clipboard(&mut self, control: ControlId, text: &str) -> CopyOutcome {
        let primary = match self.clipboard.write_primary(text) {
            Ok(()) => {
                self.acknowledge(control);
                return CopyOutcome::Primary;
            }
            Err(e) => GuideError::ClipboardUnavailable(e),
        };
        tracing::debug!(error = %primary, "trying fallback copy");

        match self.clipboard.write_fallback(text) {
            Ok(()) => {
                self.acknowledge(control);
                CopyOutcome::Fallback
            }
            Err(fallback) => {
                let err = GuideError::ClipboardTotalFailure(fallback);
                tracing::warn!(error = %err, "copy failed");
                self.surface
                    .apply(RenderInstruction::Alert(COPY_FAILED_ALERT.into()));
                CopyOutcome::Failed
            }
        }
    }

    fn acknowledge(&mut self, control: ControlId) {
        self.surface.apply(RenderInstruction::Acknowledge {
            control,
            text: COPIED_LABEL.into(),
            duration: self.acknowledgment,
        });
    }

    // === HISTORY ===

    /// Session navigation history; absent or corrupt data reads as empty
    pub fn history(&self) -> Vec<NavigationHistoryEntry> {
        let Some(raw) = self.storage.get(Scope::Session, HISTORY_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding corrupt navigation history");
            Vec::new()
        })
    }

    fn record_history(&mut self, section: &str) {
        let mut history = self.history();
        history.push(NavigationHistoryEntry {
            section: section.to_string(),
            timestamp: Utc::now(),
            user_agent: user_agent(),
        });

        let result = serde_json::to_string(&history)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set(Scope::Session, HISTORY_KEY, &json));
        if let Err(e) = result {
            let err = GuideError::from(e);
            tracing::warn!(error = %err, "failed to record navigation history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::storage::MemoryStorage;
    use crate::types::{FaqEntry, PrayerCategory, PrayerItem, Section, SectionKind};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorder(Vec<RenderInstruction>);

    impl RenderSurface for Recorder {
        fn apply(&mut self, instruction: RenderInstruction) {
            self.0.push(instruction);
        }
    }

    impl Recorder {
        fn alerts(&self) -> usize {
            self.0
                .iter()
                .filter(|i| matches!(i, RenderInstruction::Alert(_)))
                .count()
        }

        fn acks(&self) -> usize {
            self.0
                .iter()
                .filter(|i| matches!(i, RenderInstruction::Acknowledge { .. }))
                .count()
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        primary_ok: bool,
        fallback_ok: bool,
        fallback_calls: Rc<Cell<u32>>,
    }

    impl Clipboard for FakeClipboard {
        fn write_primary(&mut self, _text: &str) -> Result<(), ClipboardError> {
            if self.primary_ok {
                Ok(())
            } else {
                Err(ClipboardError::Unavailable)
            }
        }

        fn write_fallback(&mut self, _text: &str) -> Result<(), ClipboardError> {
            self.fallback_calls.set(self.fallback_calls.get() + 1);
            if self.fallback_ok {
                Ok(())
            } else {
                Err(ClipboardError::CommandFailed {
                    command: "fake".into(),
                    reason: "simulated".into(),
                })
            }
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _scope: Scope, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _scope: Scope, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::NoDataDir)
        }
    }

    fn section(id: &str) -> Section {
        Section {
            id: id.into(),
            title: id.into(),
            kind: SectionKind::Article,
            summary: String::new(),
            paragraphs: Vec::new(),
        }
    }

    fn test_guide() -> Guide {
        let mut guide = Guide::builtin();
        guide.sections = vec![section("home"), section("definicao"), section("rituais")];
        guide.categories = vec![
            PrayerCategory {
                id: "protecao".into(),
                label: "Proteção".into(),
            },
            PrayerCategory {
                id: "cura".into(),
                label: "Cura".into(),
            },
        ];
        guide.prayers = vec![
            PrayerItem {
                id: 1,
                title: "a".into(),
                category: "protecao".into(),
                text: "um".into(),
            },
            PrayerItem {
                id: 2,
                title: "b".into(),
                category: "cura".into(),
                text: "dois".into(),
            },
        ];
        guide.faqs = (1..=3)
            .map(|id| FaqEntry {
                id,
                question: format!("q{}", id),
                answer: format!("a{}", id),
            })
            .collect();
        guide
    }

    fn controller_with(clipboard: FakeClipboard) -> ViewStateController<Recorder> {
        let mut c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(MemoryStorage::new()),
            Box::new(clipboard),
        );
        c.initialize();
        c
    }

    fn controller() -> ViewStateController<Recorder> {
        controller_with(FakeClipboard {
            primary_ok: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_initial_load_activates_home() {
        let c = controller();
        assert_eq!(c.active_section(), Some("home"));
        assert_eq!(c.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_uninitialized_has_no_active_section() {
        let c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(MemoryStorage::new()),
            Box::new(FakeClipboard::default()),
        );
        assert_eq!(c.active_section(), None);
    }

    #[test]
    fn test_undeclared_default_falls_back_to_first() {
        let mut c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(MemoryStorage::new()),
            Box::new(FakeClipboard::default()),
        )
        .with_default_section("missing");
        c.initialize();
        assert_eq!(c.active_section(), Some("home"));
    }

    #[test]
    fn test_navigation_scenario() {
        let mut c = controller();

        c.activate_section("rituais");
        assert_eq!(c.active_section(), Some("rituais"));
        assert!(!c.is_active("home"));

        c.activate_section("nonexistent");
        assert_eq!(c.active_section(), Some("rituais"));
    }

    #[test]
    fn test_exactly_one_active_for_every_section() {
        let mut c = controller();
        let ids: Vec<String> = c.guide().sections.iter().map(|s| s.id.clone()).collect();
        for id in &ids {
            c.activate_section(id);
            let active: Vec<&String> = ids.iter().filter(|s| c.is_active(s)).collect();
            assert_eq!(active, vec![id]);
        }
    }

    #[test]
    fn test_unknown_section_emits_nothing() {
        let mut c = controller();
        let before = c.surface().0.len();
        let history_before = c.history().len();

        c.activate_section("nonexistent");
        assert_eq!(c.surface().0.len(), before);
        assert_eq!(c.history().len(), history_before);
    }

    #[test]
    fn test_reactivation_scrolls_and_records() {
        let mut c = controller();
        c.activate_section("home");

        let scrolls = c
            .surface()
            .0
            .iter()
            .filter(|i| {
                matches!(i, RenderInstruction::ScrollToOrigin { section } if section == "home")
            })
            .count();
        assert_eq!(scrolls, 2);

        let history = c.history();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|e| e.section == "home"));
        assert!(history[0].user_agent.starts_with("exorcism-guide/"));
    }

    #[test]
    fn test_keyboard_navigation_clamps() {
        let mut c = controller();
        c.previous_section();
        assert_eq!(c.active_section(), Some("home"));
        assert_eq!(c.history().len(), 1);

        c.next_section();
        assert_eq!(c.active_section(), Some("definicao"));
        c.last_section();
        assert_eq!(c.active_section(), Some("rituais"));
        c.next_section();
        assert_eq!(c.active_section(), Some("rituais"));
        c.first_section();
        assert_eq!(c.active_section(), Some("home"));
    }

    #[test]
    fn test_filter_scenario() {
        let mut c = controller();

        c.filter_prayers(PrayerFilter::parse("protecao"));
        assert!(c.is_prayer_visible(1));
        assert!(!c.is_prayer_visible(2));
        assert_eq!(c.filter_marker(), Some(&PrayerFilter::Category("protecao".into())));

        c.filter_prayers(PrayerFilter::parse("all"));
        assert!(c.is_prayer_visible(1));
        assert!(c.is_prayer_visible(2));
        assert_eq!(c.filter_marker(), Some(&PrayerFilter::All));
    }

    #[test]
    fn test_filter_is_total_for_every_category() {
        let mut c = controller();
        for category in ["protecao", "cura", "all", "desconhecida"] {
            let filter = PrayerFilter::parse(category);
            c.filter_prayers(filter.clone());
            for prayer in &c.guide().prayers {
                let expected = category == "all" || prayer.category == category;
                assert_eq!(c.is_prayer_visible(prayer.id), expected, "{}", category);
            }
        }
    }

    #[test]
    fn test_unknown_filter_clears_marker() {
        let mut c = controller();
        c.filter_prayers(PrayerFilter::parse("desconhecida"));
        assert_eq!(c.filter_marker(), None);
        assert!(!c.is_prayer_visible(1));
        assert!(!c.is_prayer_visible(2));
    }

    #[test]
    fn test_accordion_law() {
        let mut c = controller();

        c.toggle_faq_item(1);
        assert_eq!(c.expanded_faq(), Some(1));

        c.toggle_faq_item(2);
        assert_eq!(c.expanded_faq(), Some(2));
        assert!(c.surface().0.contains(&RenderInstruction::FaqExpanded {
            id: 1,
            expanded: false
        }));

        let before = c.surface().0.len();
        c.toggle_faq_item(2);
        assert_eq!(c.expanded_faq(), None);
        assert_eq!(
            &c.surface().0[before..],
            &[RenderInstruction::FaqExpanded {
                id: 2,
                expanded: false
            }]
        );
    }

    #[test]
    fn test_unknown_faq_is_ignored() {
        let mut c = controller();
        c.toggle_faq_item(1);
        c.toggle_faq_item(99);
        assert_eq!(c.expanded_faq(), Some(1));
    }

    #[test]
    fn test_panels_are_independent() {
        let mut c = controller();
        c.toggle_faq_item(1);

        c.toggle_expandable(1);
        c.toggle_expandable(2);
        assert!(c.is_panel_expanded(1));
        assert!(c.is_panel_expanded(2));
        assert_eq!(c.expanded_faq(), Some(1));

        c.toggle_expandable(1);
        assert!(!c.is_panel_expanded(1));
        assert!(c.is_panel_expanded(2));

        c.toggle_expandable(42);
        assert!(!c.is_panel_expanded(42));
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let mut c = controller();
        c.set_theme(ThemePreference::Dark);
        let once = c.storage().get(Scope::Durable, THEME_KEY);
        c.set_theme(ThemePreference::Dark);
        let twice = c.storage().get(Scope::Durable, THEME_KEY);

        assert_eq!(once.as_deref(), Some("dark"));
        assert_eq!(once, twice);
        assert_eq!(
            c.surface().0.last(),
            Some(&RenderInstruction::ApplyTheme(ThemePreference::Dark))
        );
    }

    #[test]
    fn test_theme_restored_on_initialize() {
        let mut storage = MemoryStorage::new();
        storage.set(Scope::Durable, THEME_KEY, "light").unwrap();

        let mut c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(storage),
            Box::new(FakeClipboard::default()),
        );
        c.initialize();
        assert_eq!(c.theme(), ThemePreference::Light);
        assert_eq!(c.surface().0[0], RenderInstruction::ApplyTheme(ThemePreference::Light));
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(FailingStorage),
            Box::new(FakeClipboard::default()),
        );
        c.initialize();
        c.set_theme(ThemePreference::Light);
        c.activate_section("rituais");

        assert_eq!(c.theme(), ThemePreference::Light);
        assert_eq!(c.active_section(), Some("rituais"));
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_corrupt_history_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(Scope::Session, HISTORY_KEY, "[{broken").unwrap();

        let mut c = ViewStateController::new(
            test_guide(),
            Recorder::default(),
            Box::new(storage),
            Box::new(FakeClipboard::default()),
        );
        assert!(c.history().is_empty());

        c.initialize();
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_copy_primary() {
        let mut c = controller();
        assert_eq!(c.copy_prayer(1), CopyOutcome::Primary);
        assert_eq!(c.surface().acks(), 1);
        assert_eq!(c.surface().alerts(), 0);
    }

    #[test]
    fn test_copy_falls_back_when_primary_fails() {
        let calls = Rc::new(Cell::new(0));
        let mut c = controller_with(FakeClipboard {
            primary_ok: false,
            fallback_ok: true,
            fallback_calls: calls.clone(),
        });

        assert_eq!(c.copy_prayer(2), CopyOutcome::Fallback);
        assert_eq!(calls.get(), 1);
        assert_eq!(c.surface().alerts(), 0);
        assert_eq!(
            c.surface().0.last(),
            Some(&RenderInstruction::Acknowledge {
                control: ControlId::CopyButton(2),
                text: COPIED_LABEL.into(),
                duration: Duration::from_millis(2000),
            })
        );
    }

    #[test]
    fn test_copy_total_failure_alerts_once() {
        let mut c = controller_with(FakeClipboard::default());

        assert_eq!(c.copy_prayer(1), CopyOutcome::Failed);
        assert_eq!(c.surface().alerts(), 1);
        assert_eq!(c.surface().acks(), 0);
    }

    #[test]
    fn test_copy_unknown_prayer_is_silent() {
        let mut c = controller_with(FakeClipboard::default());
        assert_eq!(c.copy_prayer(77), CopyOutcome::Failed);
        assert_eq!(c.surface().alerts(), 0);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut c = controller();
        c.dispatch(Intent::ActivateSection("definicao".into()));
        c.dispatch(Intent::FilterPrayers(PrayerFilter::parse("cura")));
        c.dispatch(Intent::ToggleFaq(3));
        c.dispatch(Intent::SetTheme(ThemePreference::Light));

        assert_eq!(c.active_section(), Some("definicao"));
        assert!(!c.is_prayer_visible(1));
        assert_eq!(c.expanded_faq(), Some(3));
        assert_eq!(c.theme(), ThemePreference::Light);

        let before = c.history().len();
        c.dispatch(Intent::ScrollToTop);
        assert_eq!(c.history().len(), before);
        assert_eq!(
            c.surface().0.last(),
            Some(&RenderInstruction::ScrollToOrigin {
                section: "definicao".into()
            })
        );
    }
}
