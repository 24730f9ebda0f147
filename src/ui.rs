use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    shared::{Language, QrTheme},
    widgets::{centered_rect, key_hint, status_style, titled_block},
};

/// Draw the main UI
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // URL input
            Constraint::Length(3), // Theme picker
            Constraint::Min(5),    // Result panel
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Footer
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_url_input(f, chunks[1], app);
    draw_theme_picker(f, chunks[2], app);
    draw_result_panel(f, chunks[3], app);
    draw_status_line(f, chunks[4], app);
    draw_footer(f, chunks[5], app);

    if app.config.show_help {
        draw_help_overlay(f, f.size(), app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;
    let lang = app.i18n.language();

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(app.labels.title.clone(), theme.header_style()),
            Span::styled("  ", theme.border_style()),
            Span::styled(
                format!("{} {}", lang.flag(), lang.code().to_uppercase()),
                theme.info_style(),
            ),
        ]),
        Line::from(Span::styled(
            app.labels.subtitle.clone(),
            theme.secondary_text_style(),
        )),
    ])
    .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn draw_url_input(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;
    let focused = !app.config.show_help;

    let content = if app.url_input.is_empty() {
        Line::from(Span::styled(
            app.labels.url_placeholder.clone(),
            theme.secondary_text_style(),
        ))
    } else {
        Line::from(Span::styled(
            app.url_input.clone(),
            ratatui::style::Style::default().fg(theme.text_primary),
        ))
    };

    let input = Paragraph::new(content).block(titled_block(
        app.labels.url_label.clone(),
        focused,
        theme,
    ));
    f.render_widget(input, area);

    if focused {
        let width = app.url_input[..app.cursor].width() as u16;
        f.set_cursor(area.x + 1 + width, area.y + 1);
    }
}

fn draw_theme_picker(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;
    let mut spans = Vec::new();

    for (index, qr_theme) in QrTheme::ALL.iter().enumerate() {
        let label = &app.labels.theme_names[index];
        let style = if *qr_theme == app.config.qr_theme {
            theme.selected_style()
        } else {
            theme.secondary_text_style()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    let picker = Paragraph::new(Line::from(spans))
        .block(titled_block(app.labels.theme_label.clone(), false, theme));
    f.render_widget(picker, area);
}

fn draw_result_panel(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;

    let lines = if app.loading {
        vec![
            Line::default(),
            Line::from(Span::styled(app.labels.loading.clone(), theme.warning_style())),
        ]
    } else if let Some(ref qr) = app.current_qr {
        let theme_index = QrTheme::ALL
            .iter()
            .position(|t| *t == qr.theme)
            .unwrap_or(0);
        vec![
            Line::default(),
            Line::from(vec![
                Span::styled("✓ ", theme.success_style()),
                Span::styled(
                    qr.url.clone(),
                    ratatui::style::Style::default().fg(theme.text_primary),
                ),
            ]),
            Line::from(Span::styled(
                app.labels.theme_names[theme_index].clone(),
                theme.info_style(),
            )),
            Line::from(Span::styled(
                format!("PNG · {} bytes", qr.png.len()),
                theme.secondary_text_style(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{}  ", app.labels.download), theme.header_style()),
                Span::styled("Ctrl+D", theme.secondary_text_style()),
            ]),
            Line::from(vec![
                Span::styled(format!("{}  ", app.labels.share), theme.header_style()),
                Span::styled("Ctrl+S", theme.secondary_text_style()),
            ]),
        ]
    } else {
        vec![
            Line::default(),
            Line::from(Span::styled(
                app.labels.url_placeholder.clone(),
                theme.secondary_text_style(),
            )),
        ]
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(titled_block(app.labels.generate.clone(), false, theme));
    f.render_widget(panel, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    if let Some(ref status) = app.status_message {
        let line = Paragraph::new(Line::from(Span::styled(
            status.text.clone(),
            status_style(status.message_type, &app.ui_theme),
        )))
        .alignment(Alignment::Center);
        f.render_widget(line, area);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;

    let mut hints = Vec::new();
    hints.extend(key_hint("Enter", "✨", theme));
    hints.extend(key_hint("Tab", "🎨", theme));
    hints.extend(key_hint("Ctrl+L", "🌐", theme));
    hints.extend(key_hint("Ctrl+D", "📥", theme));
    hints.extend(key_hint("Ctrl+S", "📤", theme));
    hints.extend(key_hint("F1", "?", theme));
    hints.extend(key_hint("Esc", "⏻", theme));

    let footer = Paragraph::new(vec![
        Line::from(hints),
        Line::from(Span::styled(
            app.labels.footer.clone(),
            theme.secondary_text_style(),
        )),
    ])
    .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

fn draw_help_overlay(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui_theme;
    let popup = centered_rect(60, 70, area);

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Enter   ", theme.header_style()),
            Span::styled(app.labels.generate.clone(), theme.secondary_text_style()),
        ]),
        Line::from(vec![
            Span::styled("Tab     ", theme.header_style()),
            Span::styled(app.labels.theme_label.clone(), theme.secondary_text_style()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+D  ", theme.header_style()),
            Span::styled(app.labels.download.clone(), theme.secondary_text_style()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+S  ", theme.header_style()),
            Span::styled(app.labels.share.clone(), theme.secondary_text_style()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+U  ", theme.header_style()),
            Span::styled(app.labels.url_label.clone(), theme.secondary_text_style()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+L  ", theme.header_style()),
            Span::styled("🌐", theme.secondary_text_style()),
        ]),
        Line::default(),
    ];

    for lang in Language::ALL {
        let style = if lang == app.i18n.language() {
            theme.selected_style()
        } else {
            theme.secondary_text_style()
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", lang.flag(), lang.display_name()),
            style,
        )));
    }

    let help = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled_block(app.labels.title.clone(), true, theme));

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
