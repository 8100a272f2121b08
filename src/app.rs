//! Application state and event handling
//!
//! Translates key presses into typed intents for the controller:
//! - section navigation (arrows, a/d, Home/End, number keys)
//! - focus movement between the controls of the active section
//! - activation of the focused control, scrolling, theme toggle

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::content::Guide;
use crate::controller::ViewStateController;
use crate::storage::Storage;
use crate::types::{Control, ControlId, Intent, PrayerFilter, SectionKind};
use crate::ui::{render, ViewModel};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Lines moved by PageUp/PageDown
const PAGE_LINES: i32 = 10;

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub controller: ViewStateController<ViewModel>,

    /// Index into `controls()` of the focused control
    pub focus: usize,

    /// Terminal size (columns, rows)
    pub viewport: (u16, u16),
}

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Alert,
}

impl App {
    /// Create a new App instance and load the default section
    pub fn new(
        guide: Guide,
        config: Config,
        storage: Box<dyn Storage>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let mut controller = ViewStateController::new(guide, ViewModel::new(), storage, clipboard)
            .with_default_section(config.default_section.clone())
            .with_acknowledgment(config.acknowledgment());
        controller.initialize();

        Self {
            should_quit: false,
            config,
            controller,
            focus: 0,
            viewport: (80, 24),
        }
    }

    pub fn view(&self) -> &ViewModel {
        self.controller.surface()
    }

    /// Get current app state
    pub fn state(&self) -> AppState {
        if self.view().alert.is_some() {
            AppState::Alert
        } else {
            AppState::Normal
        }
    }

    /// A new viewport rewraps the content, so the offset may now overshoot
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.clamp_scroll();
    }

    /// Periodic housekeeping between key presses
    pub fn tick(&mut self) {
        self.controller
            .surface_mut()
            .expire_acknowledgments(Instant::now());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state() {
            AppState::Alert => self.handle_alert_key(key),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    /// Alert is blocking: only dismissal keys do anything
    fn handle_alert_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Char('o') | KeyCode::Enter | KeyCode::Esc) {
            self.controller.surface_mut().dismiss_alert();
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        let before = self.controller.active_section().map(str::to_string);

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }

            // Section navigation
            KeyCode::Left | KeyCode::Char('a' | 'A') => self.controller.previous_section(),
            KeyCode::Right | KeyCode::Char('d' | 'D') => self.controller.next_section(),
            KeyCode::Home => self.controller.first_section(),
            KeyCode::End => self.controller.last_section(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(nav) = self.nav_controls().into_iter().nth(index) {
                    self.controller.dispatch(nav.intent);
                }
            }

            // Focus
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                let count = self.controls().len();
                if self.focus + 1 < count {
                    self.focus += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.focus = self.focus.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(control) = self.focused_control() {
                    self.controller.dispatch(control.intent);
                }
            }
            KeyCode::Char('c') => {
                if let Some(Control {
                    intent: intent @ Intent::CopyPrayer(_),
                    ..
                }) = self.focused_control()
                {
                    self.controller.dispatch(intent);
                }
            }

            // Scrolling
            KeyCode::PageDown => self.scroll_by(PAGE_LINES),
            KeyCode::PageUp => self.scroll_by(-PAGE_LINES),
            KeyCode::Char('g') => {
                if self.show_scroll_top() {
                    self.controller.dispatch(Intent::ScrollToTop);
                }
            }

            KeyCode::Char('t') => {
                let next = self.controller.theme().toggled();
                self.controller.dispatch(Intent::SetTheme(next));
            }
            _ => {}
        }

        if self.controller.active_section() != before.as_deref() {
            self.focus = 0;
        }
        // Filtering and collapsing shrink the section
        self.clamp_scroll();
        self.clamp_focus();
        Ok(())
    }

    fn scroll_by(&mut self, delta: i32) {
        let (width, height) = self.viewport;
        let (content_width, content_height) = render::content_area(width, height);
        let total = render::content_height(self, content_width);
        let max = total.saturating_sub(content_height);
        self.controller.surface_mut().scroll_by(delta, max);
    }

    fn clamp_scroll(&mut self) {
        self.scroll_by(0);
    }

    fn clamp_focus(&mut self) {
        let count = self.controls().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    // === CONTROLS ===

    /// Navigation buttons, one per declared section
    pub fn nav_controls(&self) -> Vec<Control> {
        self.controller
            .guide()
            .sections
            .iter()
            .map(|s| {
                Control::new(
                    ControlId::NavButton(s.id.clone()),
                    s.title.clone(),
                    Intent::ActivateSection(s.id.clone()),
                )
            })
            .collect()
    }

    /// Focusable controls of the active section, in display order
    pub fn controls(&self) -> Vec<Control> {
        let guide = self.controller.guide();
        let Some(section) = self
            .controller
            .active_section()
            .and_then(|id| guide.section(id))
        else {
            return Vec::new();
        };

        let mut controls: Vec<Control> = match section.kind {
            SectionKind::Home => guide
                .sections
                .iter()
                .filter(|s| s.id != section.id)
                .map(|s| {
                    Control::new(
                        ControlId::FeatureCard(s.id.clone()),
                        s.title.clone(),
                        Intent::ActivateSection(s.id.clone()),
                    )
                })
                .collect(),
            SectionKind::Article => guide
                .panels_in(&section.id)
                .map(|p| {
                    let action = if self.controller.is_panel_expanded(p.id) {
                        "Hide"
                    } else {
                        "Read more"
                    };
                    Control::new(
                        ControlId::ExpandToggle(p.id),
                        format!("{} · {}", p.title, action),
                        Intent::ToggleExpandable(p.id),
                    )
                })
                .collect(),
            SectionKind::Prayers => {
                // Content may declare its own wildcard tab
                let mut tabs: Vec<(String, PrayerFilter)> = guide
                    .categories
                    .iter()
                    .map(|c| (c.label.clone(), PrayerFilter::parse(&c.id)))
                    .collect();
                if !tabs.iter().any(|(_, f)| *f == PrayerFilter::All) {
                    tabs.insert(0, ("Todas".to_string(), PrayerFilter::All));
                }
                let mut controls: Vec<Control> = tabs
                    .into_iter()
                    .map(|(label, filter)| {
                        Control::new(
                            ControlId::FilterTab(filter.clone()),
                            label,
                            Intent::FilterPrayers(filter),
                        )
                    })
                    .collect();
                controls.extend(
                    guide
                        .prayers
                        .iter()
                        .filter(|p| self.controller.is_prayer_visible(p.id))
                        .map(|p| {
                            Control::new(
                                ControlId::CopyButton(p.id),
                                "📋 Copy",
                                Intent::CopyPrayer(p.id),
                            )
                        }),
                );
                controls
            }
            SectionKind::Faq => guide
                .faqs
                .iter()
                .map(|f| {
                    Control::new(
                        ControlId::FaqQuestion(f.id),
                        f.question.clone(),
                        Intent::ToggleFaq(f.id),
                    )
                })
                .collect(),
        };

        if self.show_scroll_top() {
            controls.push(Control::new(
                ControlId::ScrollToTop,
                "↑ Top",
                Intent::ScrollToTop,
            ));
        }
        controls
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.controls().into_iter().nth(self.focus)
    }

    /// Label to display, honouring live acknowledgments
    pub fn control_label(&self, control: &Control) -> String {
        self.view()
            .acknowledgment(&control.id, Instant::now())
            .map(str::to_string)
            .unwrap_or_else(|| control.label.clone())
    }

    /// Whether the active section is scrolled past the threshold
    pub fn show_scroll_top(&self) -> bool {
        self.view().scroll() > self.config.scroll_top_threshold
    }
}
