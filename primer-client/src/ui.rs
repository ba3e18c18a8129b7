// Primer drawing
//
// Pure functions from app state to ratatui widgets. Nothing here changes
// state; the event loop decides when to redraw.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use primer_utils::catalog::CategoryId;
use primer_utils::icons::icon_for;
use primer_utils::stages::PipelineStage;

use crate::animation::{AnimationFrame, Tone};
use crate::app::{App, View};
use crate::catalog_view::{self, CatalogView};
use crate::keys::{self, Focus};
use crate::modal::ModalPhase;
use crate::pipeline::StageMark;

const CARD_HEIGHT: u16 = 6;
const SECTION_HEIGHT: u16 = CARD_HEIGHT + 1;
const FALLBACK_TEXT: &str = "Animation coming soon!";

/// Styles with color switched off collapse to modifiers only
#[derive(Debug, Clone, Copy)]
struct Styles {
    color: bool,
}

impl Styles {
    fn fg(&self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::default(),
            Tone::Muted => self.fg(Color::DarkGray),
            Tone::Accent => self.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Tone::Success => self.fg(Color::Green).add_modifier(Modifier::BOLD),
            Tone::Warning => self.fg(Color::Yellow),
            Tone::Insight => self.fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        }
    }

    fn category(&self, id: CategoryId) -> Style {
        self.fg(Color::Indexed(id.color().ansi256()))
    }

    fn highlight(&self) -> Style {
        if self.color {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }
}

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let styles = Styles { color: app.color() };
    match app.view() {
        View::Catalog => {
            render_catalog(frame, app.catalog(), styles);
            if app.modal().is_open() {
                render_modal(frame, app, styles);
            }
        }
        View::Pipeline => render_pipeline(frame, app, styles),
    }
}

/// Cut `text` to at most `width` terminal columns
fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            out.push('…');
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

fn hint_line(focus: Focus, styles: Styles) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        keys::hints(focus),
        styles.fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
}

fn render_catalog(frame: &mut Frame, view: &CatalogView, styles: Styles) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    let header = Paragraph::new(vec![
        Line::from("🤖 🧠 ✨"),
        Line::from(Span::styled(
            catalog_view::TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(catalog_view::TAGLINE, styles.fg(Color::Gray))),
        Line::from(Span::styled(view.stats(), styles.fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(header, header_area);

    let elapsed = view.since_shown();
    let categories = view.catalog().categories();
    let (selected, _) = view.cursor();

    // scroll so the selected section stays on screen
    let visible = usize::from((body_area.height / SECTION_HEIGHT).max(1));
    let first = selected.saturating_sub(visible - 1);

    let mut y = body_area.y;
    for (index, category) in categories.iter().enumerate().skip(first).take(visible) {
        if !view.is_category_revealed(index, elapsed) {
            break;
        }
        let section =
            Rect::new(body_area.x, y, body_area.width, SECTION_HEIGHT).intersection(body_area);
        y += SECTION_HEIGHT;

        let [title_area, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(CARD_HEIGHT)])
                .areas(section);
        let title = Line::from(vec![
            Span::styled("● ", styles.category(category.id)),
            Span::styled(
                category.name,
                styles.category(category.id).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        let count = category.concepts.len().max(1) as u32;
        let slots = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(cards_area);
        for (card, (concept, area)) in category.concepts.iter().zip(slots.iter()).enumerate() {
            if !view.is_revealed(index, card, elapsed) {
                continue;
            }
            let is_selected = view.is_selected(index, card);
            let width = usize::from(area.width.saturating_sub(2));
            let border = if is_selected {
                styles.category(category.id).add_modifier(Modifier::BOLD)
            } else {
                styles.fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border)
                .title(fit(concept.term, width));

            let mut lines: Vec<Line> = icon_for(concept)
                .rows()
                .iter()
                .map(|row| Line::from(fit(row, width)))
                .collect();
            let button = format!("▶ {}", concept.button_text);
            lines.push(Line::from(Span::styled(
                fit(&button, width),
                if is_selected {
                    styles.highlight()
                } else {
                    styles.fg(Color::Gray)
                },
            )));

            let card_widget = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(card_widget, *area);
        }
    }

    let [made_with, hints] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(footer_area);
    frame.render_widget(
        Paragraph::new(Span::styled(catalog_view::FOOTER, styles.fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        made_with,
    );
    frame.render_widget(hint_line(Focus::Catalog, styles), hints);
}

/// Centered rect taking the given percentages of `area`
fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(middle);
    center
}

fn frame_lines(animation: &AnimationFrame, styles: Styles) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            animation.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        animation
            .lines
            .iter()
            .map(|line| Line::from(Span::styled(line.text.clone(), styles.tone(line.tone)))),
    );
    lines
}

fn render_modal(frame: &mut Frame, app: &App, styles: Styles) {
    let modal = app.modal();
    let Some(concept) = modal.concept() else {
        return;
    };
    let area = centered(frame.area(), 80, 85);
    frame.render_widget(Clear, area);

    let title = format!(
        " {} {} · {} ",
        icon_for(concept).inline(),
        concept.term,
        modal.category_name().unwrap_or_default()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.category(concept.category))
        .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let has_examples = !concept.examples.is_empty();
    let [body_area, examples_area, hints_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(if has_examples { 3 } else { 0 }),
        Constraint::Length(1),
    ])
    .areas(inner);

    let body = match modal.phase() {
        ModalPhase::Playing => match modal.frame(app.beat()) {
            Some(animation) => {
                let mut lines = frame_lines(&animation, styles);
                if let Some(caption) = &animation.caption {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        caption.clone(),
                        styles.fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    )));
                }
                if let Some(engine) = modal.engine() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("Step {} of {}", engine.step(), engine.max_step()),
                        styles.fg(Color::DarkGray),
                    )));
                }
                Paragraph::new(lines).alignment(Alignment::Center)
            }
            None => Paragraph::new(vec![
                Line::from(""),
                Line::from(icon_for(concept).inline()),
                Line::from(""),
                Line::from(Span::styled(FALLBACK_TEXT, styles.fg(Color::Gray))),
            ])
            .alignment(Alignment::Center),
        },
        _ => {
            let mut lines: Vec<Line> = vec![Line::from("")];
            lines.extend(icon_for(concept).rows().iter().map(|row| Line::from(*row)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Ready to learn about {}?", concept.term),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(concept.definition));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" ▶ Start Learning ", styles.highlight())));
            Paragraph::new(lines).alignment(Alignment::Center)
        }
    };
    frame.render_widget(body.wrap(Wrap { trim: false }), body_area);

    if has_examples {
        let examples = Paragraph::new(vec![
            Line::from(Span::styled("Real-world examples:", styles.fg(Color::DarkGray))),
            Line::from(concept.examples.join(" · ")),
        ])
        .block(Block::default().borders(Borders::TOP).border_style(styles.fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(examples, examples_area);
    }
    frame.render_widget(hint_line(Focus::Modal, styles), hints_area);
}

fn render_pipeline(frame: &mut Frame, app: &App, styles: Styles) {
    let pipeline = app.pipeline();
    let [progress_area, body_area, controls_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // progress dots, numbered for jumping
    let mut dots = Vec::new();
    let mut labels = Vec::new();
    for (stage, mark) in pipeline.marks() {
        let (dot, style) = match mark {
            StageMark::Done => ("●", styles.fg(Color::Green)),
            StageMark::Current => ("◉", styles.fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            StageMark::Pending => ("○", styles.fg(Color::DarkGray)),
        };
        if stage != PipelineStage::first() {
            dots.push(Span::styled(" ━━ ", styles.fg(Color::DarkGray)));
        }
        dots.push(Span::styled(dot, style));
        labels.push(Span::styled(
            format!("{}:{} ", stage.index() + 1, stage.label()),
            style,
        ));
    }
    let progress = Paragraph::new(vec![Line::from(dots), Line::from(""), Line::from(labels)])
        .alignment(Alignment::Center);
    frame.render_widget(progress, progress_area);

    let animation = pipeline.render(app.beat());
    let mut lines = frame_lines(&animation, styles);
    if let Some(caption) = &animation.caption {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            caption.clone(),
            styles.fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
    }
    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles.fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, body_area);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", pipeline.control_label()), styles.highlight()),
        Span::raw("  "),
        Span::styled("◀ Back", styles.fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Next ▶", styles.fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("↺ Reset", styles.fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, controls_area);
    frame.render_widget(hint_line(Focus::Pipeline, styles), hints_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_utils::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::keys::Command;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(120, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_fit_truncates_by_width() {
        assert_eq!(fit("Training Data", 20), "Training Data");
        assert_eq!(fit("Training Data", 5), "Train…");
    }

    #[test]
    fn test_catalog_screen() {
        let app = App::new(&Config::default());
        let text = screen(&app);
        assert!(text.contains("Learn AI Concepts"));
        assert!(text.contains("Made with"));
    }

    #[test]
    fn test_modal_idle_screen() {
        let mut app = App::new(&Config::default());
        app.apply(Command::Select);
        let term = app.modal().concept().map(|c| c.term).unwrap_or_default();
        let text = screen(&app);
        assert!(text.contains(&format!("Ready to learn about {term}?")));
        assert!(text.contains("Start Learning"));
    }

    #[test]
    fn test_modal_playing_shows_step() {
        let mut app = App::new(&Config::default());
        app.apply(Command::Select);
        app.apply(Command::StartLearning);
        assert!(screen(&app).contains("Step 0 of"));
    }

    #[test]
    fn test_pipeline_screen() {
        let mut app = App::new(&Config::default());
        app.apply(Command::ShowPipeline);
        let text = screen(&app);
        assert!(text.contains("Play"));
        assert!(text.contains("1:Prompt"));

        app.apply(Command::TogglePlay);
        assert!(screen(&app).contains("Pause"));
    }

    #[test]
    fn test_no_color_has_no_fg() {
        let styles = Styles { color: false };
        assert_eq!(styles.tone(Tone::Muted), Style::default());
        assert_eq!(styles.category(CategoryId::Foundation).fg, None);
    }
}
