//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with guide title and section tabs
//! - Active section content
//! - Alert overlay and scroll-to-top hint
//! - Status bar

use crate::app::App;
use crate::types::{Control, ControlId, Section, SectionKind};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

/// Header rows above the content block
const HEADER_HEIGHT: u16 = 3;
/// Status bar rows below the content block
const STATUS_HEIGHT: u16 = 1;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.view().theme;

    frame.render_widget(Block::default().style(theme.block_style()), area);

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(4),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_section(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    if let Some(message) = &app.view().alert {
        widgets::render_alert_popup(frame, message, theme, area);
    }
}

/// Inner size of the content block for a terminal of `width` x `height`
pub fn content_area(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(2),
        height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + 2),
    )
}

/// Wrapped height of the active section at `width` columns
pub fn content_height(app: &App, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let total: usize = section_lines(app)
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    total.min(usize::from(u16::MAX)) as u16
}

/// Render header with guide title and section tabs
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.view().theme;
    let guide = app.controller.guide();

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" ✝ {} ", guide.title))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    let titles: Vec<Line> = app
        .nav_controls()
        .iter()
        .enumerate()
        .map(|(i, control)| {
            let active = matches!(
                &control.id,
                ControlId::NavButton(id) if app.controller.is_active(id)
            );
            let style = if active {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, control.label), style)
        })
        .collect();

    let selected = app
        .controller
        .active_section()
        .and_then(|id| guide.section_index(id))
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the active section inside a bordered block
fn render_section(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.view().theme;
    let section = app
        .controller
        .active_section()
        .and_then(|id| app.controller.guide().section(id));

    let title = section.map(|s| s.title.as_str()).unwrap_or("");
    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Paragraph::new(section_lines(app))
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .scroll((app.view().scroll(), 0));
    frame.render_widget(content, inner);

    if app.show_scroll_top() {
        let focused = matches!(
            app.focused_control().map(|c| c.id),
            Some(ControlId::ScrollToTop)
        );
        widgets::render_scroll_top_hint(frame, focused, theme, area);
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.view().theme;

    let kind = app
        .controller
        .active_section()
        .and_then(|id| app.controller.guide().section(id))
        .map(|s| s.kind)
        .unwrap_or_default();

    let hints = match kind {
        SectionKind::Home => "[←/→] Section  [j/k] Focus  [Enter] Open  [t] Theme  [q] Quit",
        SectionKind::Article => {
            "[←/→] Section  [j/k] Focus  [Enter] Expand  [PgDn] Scroll  [q] Quit"
        }
        SectionKind::Prayers => {
            "[j/k] Focus  [Enter] Filter/Copy  [c] Copy  [PgDn] Scroll  [q] Quit"
        }
        SectionKind::Faq => "[←/→] Section  [j/k] Focus  [Enter] Toggle  [q] Quit",
    };

    let theme_label = format!("{} theme", app.view().theme_preference);
    widgets::render_status_bar(frame, hints, &theme_label, theme, area);
}

// === SECTION CONTENT ===

/// All lines of the active section, before wrapping and scrolling
pub fn section_lines(app: &App) -> Vec<Line<'static>> {
    let Some(section) = app
        .controller
        .active_section()
        .and_then(|id| app.controller.guide().section(id))
    else {
        return Vec::new();
    };

    let theme = &app.view().theme;
    let controls = app.controls();
    let focused = app.focused_control().map(|c| c.id);
    let ctx = LineContext {
        app,
        theme,
        controls: &controls,
        focused: focused.as_ref(),
    };

    let mut lines = intro_lines(section, theme);
    match section.kind {
        SectionKind::Home => home_lines(&ctx, &mut lines),
        SectionKind::Article => article_lines(&ctx, section, &mut lines),
        SectionKind::Prayers => prayer_lines(&ctx, &mut lines),
        SectionKind::Faq => faq_lines(&ctx, &mut lines),
    }
    lines
}

struct LineContext<'a> {
    app: &'a App,
    theme: &'a Theme,
    controls: &'a [Control],
    focused: Option<&'a ControlId>,
}

impl LineContext<'_> {
    fn control(&self, id: &ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| &c.id == id)
    }

    fn control_style(&self, id: &ControlId) -> Style {
        if self.focused == Some(id) {
            self.theme.selected()
        } else {
            self.theme.control()
        }
    }

    /// A single-control line such as "▸ Title"
    fn control_line(&self, id: &ControlId, prefix: &str) -> Option<Line<'static>> {
        let control = self.control(id)?;
        let acknowledged = self
            .app
            .view()
            .acknowledgment(id, Instant::now())
            .is_some();
        let style = if acknowledged {
            self.theme.success()
        } else {
            self.control_style(id)
        };
        Some(Line::from(vec![
            Span::styled(prefix.to_string(), self.theme.text_dim()),
            Span::styled(self.app.control_label(control), style),
        ]))
    }
}

fn intro_lines(section: &Section, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !section.summary.is_empty() {
        lines.push(Line::styled(section.summary.clone(), theme.heading()));
        lines.push(Line::raw(""));
    }
    for paragraph in &section.paragraphs {
        lines.push(Line::styled(paragraph.clone(), theme.text()));
        lines.push(Line::raw(""));
    }
    lines
}

/// Home: feature cards leading to the other sections
fn home_lines(ctx: &LineContext, lines: &mut Vec<Line<'static>>) {
    let guide = ctx.app.controller.guide();
    for control in ctx.controls {
        let ControlId::FeatureCard(target) = &control.id else {
            continue;
        };
        if let Some(line) = ctx.control_line(&control.id, "  ▸ ") {
            lines.push(line);
        }
        if let Some(summary) = guide.section(target).map(|s| s.summary.clone()) {
            lines.push(Line::styled(format!("    {}", summary), ctx.theme.text_dim()));
        }
        lines.push(Line::raw(""));
    }
}

/// Article: "read more" panels, each independently expandable
fn article_lines(ctx: &LineContext, section: &Section, lines: &mut Vec<Line<'static>>) {
    let view = ctx.app.view();
    for panel in ctx.app.controller.guide().panels_in(&section.id) {
        let expanded = view.is_panel_expanded(panel.id);
        let prefix = if expanded { "  ▾ " } else { "  ▸ " };
        if let Some(line) = ctx.control_line(&ControlId::ExpandToggle(panel.id), prefix) {
            lines.push(line);
        }
        if expanded {
            lines.push(Line::styled(format!("    {}", panel.body), ctx.theme.text()));
        }
        lines.push(Line::raw(""));
    }
}

/// Prayers: filter tab row, then every visible prayer with its copy button
fn prayer_lines(ctx: &LineContext, lines: &mut Vec<Line<'static>>) {
    let view = ctx.app.view();
    let guide = ctx.app.controller.guide();

    let mut tabs = Vec::new();
    for control in ctx.controls {
        let ControlId::FilterTab(filter) = &control.id else {
            continue;
        };
        if !tabs.is_empty() {
            tabs.push(Span::styled(" │ ", ctx.theme.text_dim()));
        }
        let style = if ctx.focused == Some(&control.id) {
            ctx.theme.selected()
        } else if view.filter_marker.as_ref() == Some(filter) {
            ctx.theme.tab_active()
        } else {
            ctx.theme.tab_inactive()
        };
        tabs.push(Span::styled(control.label.clone(), style));
    }
    lines.push(Line::from(tabs));
    lines.push(Line::raw(""));

    for prayer in guide.prayers.iter().filter(|p| view.is_prayer_visible(p.id)) {
        let category = guide
            .categories
            .iter()
            .find(|c| c.id == prayer.category)
            .map(|c| c.label.clone())
            .unwrap_or_else(|| prayer.category.clone());

        lines.push(Line::from(vec![
            Span::styled(prayer.title.clone(), ctx.theme.heading()),
            Span::styled(format!("  · {}", category), ctx.theme.text_dim()),
        ]));
        lines.push(Line::styled(prayer.text.clone(), ctx.theme.prayer()));
        if let Some(line) = ctx.control_line(&ControlId::CopyButton(prayer.id), "  ") {
            lines.push(line);
        }
        lines.push(Line::raw(""));
    }
}

/// FAQ: questions with at most one answer open
fn faq_lines(ctx: &LineContext, lines: &mut Vec<Line<'static>>) {
    let view = ctx.app.view();
    for faq in &ctx.app.controller.guide().faqs {
        let expanded = view.is_faq_expanded(faq.id);
        let prefix = if expanded { "▾ " } else { "▸ " };
        if let Some(line) = ctx.control_line(&ControlId::FaqQuestion(faq.id), prefix) {
            lines.push(line);
        }
        if expanded {
            lines.push(Line::styled(format!("  {}", faq.answer), ctx.theme.text()));
        }
        lines.push(Line::raw(""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Clipboard;
    use crate::config::Config;
    use crate::content::Guide;
    use crate::controller::{RenderInstruction, RenderSurface};
    use crate::error::ClipboardError;
    use crate::storage::MemoryStorage;
    use ratatui::{backend::TestBackend, Terminal};

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn write_primary(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }

        fn write_fallback(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn app() -> App {
        App::new(
            Guide::builtin(),
            Config::default(),
            Box::new(MemoryStorage::new()),
            Box::new(NullClipboard),
        )
    }

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_content_area() {
        assert_eq!(content_area(80, 24), (78, 18));
        assert_eq!(content_area(1, 1), (0, 0));
    }

    #[test]
    fn test_home_lists_feature_cards() {
        let app = app();
        let text = text_of(&section_lines(&app));
        assert!(text.contains("▸ Definição"));
        assert!(text.contains("▸ FAQ"));
        assert!(!text.contains("▸ Início"));
    }

    #[test]
    fn test_hidden_prayers_are_not_rendered() {
        let mut app = app();
        app.controller.activate_section("oracoes");
        app.controller
            .filter_prayers(crate::types::PrayerFilter::parse("cura"));

        let text = text_of(&section_lines(&app));
        assert!(text.contains("Oração de cura interior"));
        assert!(!text.contains("São Miguel"));
    }

    #[test]
    fn test_faq_answer_only_when_expanded() {
        let mut app = app();
        app.controller.activate_section("faq");
        let answer = app.controller.guide().faqs[0].answer.clone();

        assert!(!text_of(&section_lines(&app)).contains(&answer));
        app.controller.toggle_faq_item(1);
        assert!(text_of(&section_lines(&app)).contains(&answer));
    }

    #[test]
    fn test_content_height_grows_when_narrow() {
        let mut app = app();
        app.controller.activate_section("oracoes");
        assert!(content_height(&app, 20) > content_height(&app, 200));
    }

    #[test]
    fn test_render_does_not_panic() {
        let mut app = app();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        for section in ["home", "definicao", "oracoes", "faq"] {
            app.controller.activate_section(section);
            terminal.draw(|frame| render(frame, &app)).unwrap();
        }

        app.controller
            .surface_mut()
            .apply(RenderInstruction::Alert("x".into()));
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
