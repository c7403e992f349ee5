use crate::app::{App, AppMode};
use filmstrip_core::Geometry;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Horizontal gap between cards, in cells.
pub const CARD_GAP: f32 = 2.0;

/// Derive the strip measurements from the terminal width. The strip keeps a
/// one-cell margin on each side; cards share the rest evenly.
pub fn strip_geometry(terminal_width: u16, cards_per_view: usize) -> Geometry {
    let viewport = terminal_width.saturating_sub(2) as f32;
    let p = cards_per_view.max(1) as f32;
    let card_width = ((viewport - (p - 1.0) * CARD_GAP) / p).floor().max(1.0);
    Geometry {
        card_width,
        gap: CARD_GAP,
        viewport_width: viewport,
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    if app.mode == AppMode::Search && !app.search.is_empty() {
        render_search_results(app, frame, chunks[0]);
    } else {
        render_strip(app, frame, chunks[0]);
    }
    render_pager(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);
}

fn render_strip(app: &App, frame: &mut Frame, area: Rect) {
    if app.cards.is_empty() {
        let empty = Paragraph::new("No images found. Add some to the gallery directory!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let strip = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    if strip.width == 0 || strip.height == 0 {
        return;
    }

    let geometry = app.carousel.geometry();
    let slot = app.carousel.slot_size();
    let card_width = geometry.card_width as i32;
    let scroll = app.carousel.scroll();
    let card_height = strip.height.min(8);

    for (i, card_slot) in app.carousel.slots().iter().enumerate() {
        let offset = (i as f32 * slot - scroll).round() as i32;
        let left = strip.x as i32 + offset;
        let right = left + card_width;

        // Clip to the strip; cards straddling an edge render partially.
        let clip_left = left.max(strip.x as i32);
        let clip_right = right.min((strip.x + strip.width) as i32);
        if clip_right <= clip_left {
            continue;
        }

        let card_area = Rect {
            x: clip_left as u16,
            y: strip.y,
            width: (clip_right - clip_left) as u16,
            height: card_height,
        };

        let Some(card) = app.cards.get(card_slot.real_index) else {
            continue;
        };
        let liked = app.likes.is_liked(&card.url);

        let mut lines = vec![Line::from(Span::styled(
            card.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if liked {
            lines.push(Line::from(Span::styled(
                "\u{2665} liked",
                Style::default().fg(Color::Red),
            )));
        }

        let block = Block::default().borders(Borders::ALL);
        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, card_area);
    }
}

fn render_pager(app: &App, frame: &mut Frame, area: Rect) {
    let pager = app.carousel.pager();
    if pager.is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for i in 0..pager.len() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if pager.is_active(i) {
            spans.push(Span::styled(
                "\u{25cf}",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                "\u{25cb}",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

fn render_search_results(app: &App, frame: &mut Frame, area: Rect) {
    let hits = app.search.results(&app.cards);

    if hits.is_empty() {
        let empty = Paragraph::new("No matches")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    // Results as a grid, five per row.
    const PER_ROW: usize = 5;
    let row_height = 4u16;
    let max_rows = (area.height / row_height).max(1) as usize;

    for (row_idx, chunk) in hits.chunks(PER_ROW).take(max_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + row_idx as u16 * row_height,
            width: area.width,
            height: row_height,
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, PER_ROW as u32); PER_ROW])
            .split(row_area);

        for (col, &card_index) in chunk.iter().enumerate() {
            let Some(card) = app.cards.get(card_index) else {
                continue;
            };
            let liked = app.likes.is_liked(&card.url);
            let title = if liked {
                format!("{} \u{2665}", card.label)
            } else {
                card.label.clone()
            };
            let block = Block::default().borders(Borders::ALL);
            let paragraph = Paragraph::new(title).block(block);
            frame.render_widget(paragraph, columns[col]);
        }
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = match app.mode {
        AppMode::Browse => Line::from(vec![
            Span::raw("\u{2190}/\u{2192} page  h/l scroll  1-9 jump  space like  / search  q quit"),
        ]),
        AppMode::Search => Line::from(vec![
            Span::raw("Search: "),
            Span::styled(
                app.search.query().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{258c}", Style::default().fg(Color::DarkGray)),
            Span::styled("  (esc to close)", Style::default().fg(Color::DarkGray)),
        ]),
    };

    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
