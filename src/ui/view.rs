//! Terminal render surface
//!
//! Reflects the controller's state for the renderer, plus the purely
//! visual bits the controller does not own: scroll offsets, transient
//! acknowledgments and the alert overlay.

use crate::controller::{RenderInstruction, RenderSurface};
use crate::types::{ControlId, PrayerFilter, ThemePreference};
use crate::ui::Theme;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Transient text replacing a control's label until `expires_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub text: String,
    pub expires_at: Instant,
}

/// What the terminal currently shows
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub theme: Theme,
    pub theme_preference: ThemePreference,
    pub active_section: Option<String>,
    pub filter_marker: Option<PrayerFilter>,
    pub alert: Option<String>,

    scroll: HashMap<String, u16>,
    hidden_prayers: HashSet<u32>,
    expanded_panels: HashSet<u32>,
    expanded_faqs: HashSet<u32>,
    acknowledgments: HashMap<ControlId, Acknowledgment>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            theme: Theme::from_preference(ThemePreference::default()),
            theme_preference: ThemePreference::default(),
            active_section: None,
            filter_marker: None,
            alert: None,
            scroll: HashMap::new(),
            hidden_prayers: HashSet::new(),
            expanded_panels: HashSet::new(),
            expanded_faqs: HashSet::new(),
            acknowledgments: HashMap::new(),
        }
    }

    /// Scroll offset of the active section
    pub fn scroll(&self) -> u16 {
        self.active_section
            .as_ref()
            .and_then(|s| self.scroll.get(s))
            .copied()
            .unwrap_or(0)
    }

    /// Scroll the active section by `delta` lines, never past `max`
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let Some(section) = self.active_section.clone() else {
            return;
        };
        let current = i32::from(self.scroll());
        let next = (current + delta).clamp(0, i32::from(max));
        self.scroll.insert(section, next as u16);
    }

    pub fn is_prayer_visible(&self, id: u32) -> bool {
        !self.hidden_prayers.contains(&id)
    }

    pub fn is_panel_expanded(&self, id: u32) -> bool {
        self.expanded_panels.contains(&id)
    }

    pub fn is_faq_expanded(&self, id: u32) -> bool {
        self.expanded_faqs.contains(&id)
    }

    /// Live acknowledgment text for a control
    pub fn acknowledgment(&self, control: &ControlId, now: Instant) -> Option<&str> {
        self.acknowledgments
            .get(control)
            .filter(|a| now < a.expires_at)
            .map(|a| a.text.as_str())
    }

    /// Drop acknowledgments whose window has passed
    pub fn expire_acknowledgments(&mut self, now: Instant) {
        self.acknowledgments.retain(|_, a| now < a.expires_at);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl RenderSurface for ViewModel {
    fn apply(&mut self, instruction: RenderInstruction) {
        match instruction {
            RenderInstruction::SectionActivated(section) => {
                self.active_section = Some(section);
            }
            RenderInstruction::ScrollToOrigin { section } => {
                self.scroll.insert(section, 0);
            }
            RenderInstruction::PrayerVisibility { id, visible } => {
                if visible {
                    self.hidden_prayers.remove(&id);
                } else {
                    self.hidden_prayers.insert(id);
                }
            }
            RenderInstruction::FilterMarker(marker) => self.filter_marker = marker,
            RenderInstruction::PanelExpanded { id, expanded } => {
                if expanded {
                    self.expanded_panels.insert(id);
                } else {
                    self.expanded_panels.remove(&id);
                }
            }
            RenderInstruction::FaqExpanded { id, expanded } => {
                if expanded {
                    self.expanded_faqs.insert(id);
                } else {
                    self.expanded_faqs.remove(&id);
                }
            }
            RenderInstruction::ApplyTheme(pref) => {
                self.theme_preference = pref;
                self.theme = Theme::from_preference(pref);
            }
            RenderInstruction::Acknowledge {
                control,
                text,
                duration,
            } => {
                // Last writer wins on the same control
                self.acknowledgments.insert(
                    control,
                    Acknowledgment {
                        text,
                        expires_at: Instant::now() + duration,
                    },
                );
            }
            RenderInstruction::Alert(message) => self.alert = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ack(view: &mut ViewModel, id: u32, text: &str, ms: u64) {
        view.apply(RenderInstruction::Acknowledge {
            control: ControlId::CopyButton(id),
            text: text.into(),
            duration: Duration::from_millis(ms),
        });
    }

    #[test]
    fn test_scroll_is_per_section() {
        let mut view = ViewModel::new();
        view.apply(RenderInstruction::SectionActivated("home".into()));
        view.scroll_by(15, 100);
        assert_eq!(view.scroll(), 15);

        view.apply(RenderInstruction::SectionActivated("faq".into()));
        assert_eq!(view.scroll(), 0);
        view.scroll_by(-5, 100);
        assert_eq!(view.scroll(), 0);

        view.apply(RenderInstruction::ScrollToOrigin {
            section: "home".into(),
        });
        view.apply(RenderInstruction::SectionActivated("home".into()));
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_scroll_respects_max() {
        let mut view = ViewModel::new();
        view.active_section = Some("home".into());
        view.scroll_by(500, 40);
        assert_eq!(view.scroll(), 40);
    }

    #[test]
    fn test_latest_acknowledgment_wins() {
        let mut view = ViewModel::new();
        ack(&mut view, 1, "first", 2000);
        ack(&mut view, 1, "second", 2500);
        ack(&mut view, 2, "other", 2000);

        let now = Instant::now();
        assert_eq!(view.acknowledgment(&ControlId::CopyButton(1), now), Some("second"));
        assert_eq!(view.acknowledgment(&ControlId::CopyButton(2), now), Some("other"));
    }

    #[test]
    fn test_acknowledgment_expires() {
        let mut view = ViewModel::new();
        ack(&mut view, 1, "copied", 2000);

        let later = Instant::now() + Duration::from_secs(3);
        assert_eq!(view.acknowledgment(&ControlId::CopyButton(1), later), None);

        view.expire_acknowledgments(later);
        assert!(view.acknowledgments.is_empty());
    }

    #[test]
    fn test_theme_and_alert() {
        let mut view = ViewModel::new();
        view.apply(RenderInstruction::ApplyTheme(ThemePreference::Light));
        assert_eq!(view.theme, Theme::light());

        view.apply(RenderInstruction::Alert("boom".into()));
        assert_eq!(view.alert.as_deref(), Some("boom"));
        view.dismiss_alert();
        assert!(view.alert.is_none());
    }
}
