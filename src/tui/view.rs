//! Rendering

use super::app::App;
use crate::content::InfoSheet;
use crate::state_machine::{Action, Item, Phase, VisualState};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ALERT_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let state = app.state();
    let content = app.session().content();
    let alert_height = if state.ended { ALERT_HEIGHT } else { 0 };
    let pool_rows = state
        .unassigned_items()
        .count()
        .div_ceil(content.categories.len().max(1));
    let pool_height = u16::try_from(pool_rows).unwrap_or(u16::MAX).saturating_add(2);

    let [title_area, instructions_area, columns_area, pool_area, alert_area, status_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(pool_height),
            Constraint::Length(alert_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(
        Paragraph::new(content.title.as_str())
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .centered(),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(content.instructions.as_str()).centered(),
        instructions_area,
    );

    let columns = Layout::horizontal(content.categories.iter().map(|_| Constraint::Fill(1)))
        .split(columns_area);
    for (n, (category, area)) in content.categories.iter().zip(columns.iter()).enumerate() {
        let lines: Vec<Line> = state
            .items_in_category(&category.id)
            .map(|item| item_line(item, app))
            .collect();
        let block = Block::bordered().title(format!(" {} {} ", n + 1, category.title));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *area,
        );
    }

    // The pool reuses the category grid, filled row by row
    let unassigned: Vec<&Item> = state.unassigned_items().collect();
    let pool_block = Block::bordered().title(format!(" {} ", content.pool_heading));
    let pool_inner = pool_block.inner(pool_area);
    frame.render_widget(pool_block, pool_area);
    let pool_columns = Layout::horizontal(columns.iter().map(|_| Constraint::Fill(1)))
        .split(pool_inner);
    for (n, area) in pool_columns.iter().enumerate() {
        let lines: Vec<Line> = unassigned
            .iter()
            .skip(n)
            .step_by(pool_columns.len())
            .map(|item| item_line(item, app))
            .collect();
        frame.render_widget(Paragraph::new(lines), *area);
    }

    if let Some(summary) = state.score_summary() {
        frame.render_widget(
            Paragraph::new(summary).block(
                Block::bordered()
                    .title(" Game Over! ")
                    .border_style(Style::default().fg(Color::Green)),
            ),
            alert_area,
        );
    }

    frame.render_widget(
        Paragraph::new(app.status().unwrap_or_default())
            .style(Style::default().add_modifier(Modifier::ITALIC)),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(footer(app)).style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );

    if app.info_open() {
        if let Some(info) = &content.info {
            render_info(frame, info);
        }
    }
}

fn item_line<'a>(item: &'a Item, app: &App) -> Line<'a> {
    let visual = app.state().visual_state(item);
    let marker = if app.cursor() == Some(item.id.as_str()) {
        "> "
    } else {
        "  "
    };
    let mark = match visual {
        VisualState::Correct => " ✓",
        VisualState::Incorrect => " ✗",
        VisualState::Neutral | VisualState::Selected => "",
    };
    let style = visual_style(visual);
    Line::from(vec![
        Span::raw(marker),
        Span::styled(item.content.as_str(), style),
        Span::styled(mark, style),
    ])
}

fn visual_style(visual: VisualState) -> Style {
    match visual {
        VisualState::Neutral => Style::default(),
        VisualState::Selected => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        VisualState::Correct => Style::default().fg(Color::Green),
        VisualState::Incorrect => Style::default().fg(Color::Red),
    }
}

fn footer(app: &App) -> String {
    let state = app.state();
    let content = app.session().content();
    let moves = match state.phase() {
        Phase::Idle => "↑/↓ move   Space pick up".to_string(),
        Phase::Selecting => format!(
            "↑/↓ move   Space put down   1-{} place",
            content.categories.len()
        ),
        Phase::Scored => "↑/↓ move".to_string(),
    };
    let primary = match state.primary_action() {
        Action::Reset => "Play Again",
        _ => "Check Answers",
    };
    let mut help = format!("{moves}   Enter {primary}");
    if state.ended && content.info.is_some() {
        help.push_str("   i Learn More");
    }
    help.push_str("   q quit");
    help
}

fn render_info(frame: &mut Frame, info: &InfoSheet) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(info.intro.as_str()), Line::default()];
    for point in &info.points {
        lines.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(format!("{}: ", point.label), bold),
            Span::raw(point.text.as_str()),
        ]));
    }
    if !info.closing.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(info.closing.as_str()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    ));

    let area = centered(frame.area(), 80, 70);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::bordered().title(format!(" {} ", info.heading)))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
