use crate::app::{AppMode, RenderState};
use crate::report::{BREAKDOWN_HEADER, FLAT_HEADER};
use crate::tokenizer::TokenKind;
use crate::ui::theme::{colors, Theme};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

const TYPE_MARKER: &str = " - Type: ";

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        colors::accent()
    } else {
        colors::dimmed()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

/// Editable input pane. `height` is the inner height used to keep the cursor visible.
pub fn render_input_pane(state: &RenderState, height: u16) -> Paragraph<'static> {
    let focused = state.mode == AppMode::Editing;
    Paragraph::new(state.input.clone())
        .block(pane_block(" Input ", focused))
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .scroll((state.input_scroll(height), 0))
}

/// Color the type label of a flat-listing line and bold the section headers.
pub fn style_output_line(line: &str) -> Line<'static> {
    let theme = Theme::current();

    if line == FLAT_HEADER || line == BREAKDOWN_HEADER {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some((head, label)) = line.rsplit_once(TYPE_MARKER) {
        if let Some(kind) = TokenKind::from_label(label) {
            return Line::from(vec![
                Span::styled(format!("{head}{TYPE_MARKER}"), Style::default().fg(theme.text)),
                Span::styled(label.to_string(), Style::default().fg(theme.kind_color(kind))),
            ]);
        }
    }

    Line::from(Span::styled(line.to_string(), Style::default().fg(theme.text)))
}

pub fn render_output_pane(state: &RenderState) -> Paragraph<'static> {
    let focused = state.mode == AppMode::Viewing;
    let text = if state.is_error {
        Text::from(Line::from(Span::styled(
            state.output.clone(),
            Style::default()
                .fg(colors::error())
                .add_modifier(Modifier::BOLD),
        )))
    } else {
        Text::from(state.output.lines().map(style_output_line).collect::<Vec<_>>())
    };

    Paragraph::new(text)
        .block(pane_block(" Tokenized output ", focused))
        .style(Style::default().bg(colors::background()))
        .scroll((state.scroll, 0))
}

/// Bottom line: the command deck in Command mode, otherwise the status message.
pub fn render_status_line(state: &RenderState) -> Line<'static> {
    match &state.command_line {
        Some(line) => Line::from(vec![
            Span::styled("> ", Style::default().fg(colors::accent())),
            Span::styled(line.clone(), Style::default().fg(colors::text())),
        ]),
        None => Line::from(Span::styled(
            state.status.clone(),
            Style::default().fg(colors::dimmed()),
        ))
        .alignment(Alignment::Left),
    }
}
