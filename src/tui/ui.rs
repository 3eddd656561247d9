// ui rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::{App, Lane, LogLevel, Mode, Panel, Popup, Tab};
use crate::tui::ascii::PROFCHECK_LOGO;
use crate::tui::theme::ThemeKind;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // main layout: header + content + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // header with logo
            Constraint::Min(10),   // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_content(frame, app, main[1]);
    render_footer(frame, app, main[2]);

    // render popups on top
    match app.popup {
        Popup::Themes => render_theme_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    frame.render_widget(block, area);

    // split header: logo on left, info on right
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(20)])
        .margin(1)
        .split(area);

    // render ascii logo
    let logo_lines: Vec<Line> = PROFCHECK_LOGO
        .iter()
        .map(|&line| Line::styled(line, theme.accent()))
        .collect();

    let logo = Paragraph::new(logo_lines).style(theme.base());
    frame.render_widget(logo, inner[0]);

    // tab strip + status
    let latency = app
        .latency_ms
        .map(|ms| format!("{ms}ms"))
        .unwrap_or_else(|| "-".to_string());

    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "insert",
    };

    let tab_style = |tab: Tab| {
        if app.tab == tab {
            app.theme.title()
        } else {
            app.theme.muted()
        }
    };

    let mut language_spans = vec![Span::styled("| Lang: ", theme.muted())];
    if app.tab == Tab::Transformer {
        let auto = if app.auto_detect { "auto ON" } else { "auto OFF" };
        language_spans.push(Span::styled(auto, theme.accent()));
        if app.detecting {
            language_spans.push(Span::styled("  detecting...", theme.warning()));
        } else if let Some(detected) = app.detected_language {
            language_spans.push(Span::styled(
                format!("  detected: {detected}"),
                theme.success(),
            ));
        }
        match app.selected_language {
            Some(selected) => {
                language_spans.push(Span::styled(format!("  manual: {selected}"), theme.base()));
            }
            None => language_spans.push(Span::styled("  manual: -", theme.muted())),
        }
    } else {
        language_spans.push(Span::styled("n/a (english model)", theme.muted()));
    }

    let info_lines = vec![
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[1] ", theme.accent()),
            Span::styled("FastText  ", tab_style(Tab::Basic)),
            Span::styled("[2] ", theme.accent()),
            Span::styled("Transformer", tab_style(Tab::Transformer)),
        ]),
        Line::from(language_spans),
        Line::from(vec![
            Span::styled("| Mode: ", theme.muted()),
            Span::styled(mode_str, theme.accent()),
            Span::styled("  | ", theme.muted()),
            Span::styled(latency, theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[Tab]", theme.accent()),
            Span::styled(" Panels  ", theme.muted()),
            Span::styled("[t]", theme.accent()),
            Span::styled(" Themes  ", theme.muted()),
            Span::styled("[q]", theme.accent()),
            Span::styled(" Quit", theme.muted()),
        ]),
    ];

    let info = Paragraph::new(info_lines).style(theme.base());
    frame.render_widget(info, inner[1]);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    // 2x2 grid
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_input(frame, app, top_cols[0]);
    render_result(frame, app, top_cols[1]);
    render_verify(frame, app, bottom_cols[0]);
    render_logs(frame, app, bottom_cols[1]);
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let mut parts = vec![
        Span::styled(" Enter ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" Check ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("v ", theme.accent()),
        Span::styled("Verify ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("1/2 ", theme.accent()),
        Span::styled("Model ", theme.muted()),
    ];

    if app.tab == Tab::Transformer {
        parts.extend([
            Span::styled("| ", theme.border()),
            Span::styled("l ", theme.accent()),
            Span::styled("Auto-detect ", theme.muted()),
            Span::styled("L ", theme.accent()),
            Span::styled("Language ", theme.muted()),
        ]);
    }

    parts.extend([
        Span::styled("| ", theme.border()),
        Span::styled("c ", theme.accent()),
        Span::styled("Clear ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("x ", theme.accent()),
        Span::styled("Export ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("t ", theme.accent()),
        Span::styled("Theme ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("q ", theme.accent()),
        Span::styled("Quit ", theme.muted()),
    ]);

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line)
        .style(theme.base())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Input;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Text to Check ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let mut content = if app.input.is_empty() && app.mode != Mode::Insert {
        vec![Line::styled("press 'i' to type a word...", theme.muted())]
    } else {
        vec![Line::styled(app.input.clone(), theme.base())]
    };

    // local validation error, never from the network
    if let Some(error) = &app.validation_error {
        content.push(Line::raw(""));
        content.push(Line::styled(error.clone(), theme.error()));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    // set cursor position when in insert mode
    if app.mode == Mode::Insert && active {
        let inner = area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        });

        let col = app.input[..app.input_cursor].chars().count() as u16;
        let width = inner.width.max(1);
        let x = inner.x + col % width;
        let y = inner.y + col / width;
        if y < inner.y + inner.height {
            frame.set_cursor_position((x, y));
        }
    }
}

fn render_result(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Result;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let title = format!(" Result ({}) ", app.tab.name());
    let block = Block::default()
        .title(Span::styled(title, theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let content: Vec<Line> = match &app.check {
        Lane::Idle => vec![Line::styled("press Enter to check...", theme.muted())],
        Lane::Busy => vec![Line::styled("checking...", theme.warning())],
        Lane::Failed(message) => vec![Line::styled(message.clone(), theme.error())],
        Lane::Resolved(result) => {
            let verdict = if result.is_profane {
                Line::styled("Profane Content Detected", theme.error())
            } else {
                Line::styled("Clean Content", theme.success())
            };

            let mut lines = vec![
                verdict,
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Category:   ", theme.muted()),
                    Span::styled(result.category.clone(), theme.base()),
                ]),
                Line::from(vec![
                    Span::styled("Confidence: ", theme.muted()),
                    Span::styled(result.confidence_label(), theme.accent()),
                ]),
            ];

            if app.tab == Tab::Transformer {
                let language = app
                    .effective_language()
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "server default".to_string());
                lines.push(Line::from(vec![
                    Span::styled("Language:   ", theme.muted()),
                    Span::styled(language, theme.base()),
                ]));
            }

            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_verify(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Verify;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" LLM Verification ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let content: Vec<Line> = match &app.llm {
        Lane::Idle => {
            if app.check.result().is_some() {
                vec![Line::styled("press 'v' to verify with LLM", theme.muted())]
            } else {
                vec![Line::styled("run a check first", theme.muted())]
            }
        }
        Lane::Busy => vec![Line::styled("Verifying with LLM...", theme.warning())],
        Lane::Failed(message) => vec![Line::styled(message.clone(), theme.error())],
        Lane::Resolved(result) => {
            let verdict = if result.is_profane {
                Line::styled("Profane (LLM)", theme.error())
            } else {
                Line::styled("Clean (LLM)", theme.success())
            };

            vec![
                verdict,
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Category:   ", theme.muted()),
                    Span::styled(result.category.clone(), theme.base()),
                ]),
                Line::from(vec![
                    Span::styled("Confidence: ", theme.muted()),
                    Span::styled(result.confidence_label(), theme.accent()),
                ]),
                Line::raw(""),
                Line::styled("Reason:", theme.muted()),
                Line::styled(result.reasoning.clone(), theme.base()),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.verify_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_logs(frame: &mut Frame, app: &mut App, area: Rect) {
    app.clamp_log_scroll(area.height.saturating_sub(2) as usize);

    let theme = &app.theme;
    let active = app.panel == Panel::Logs;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Logs ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            let (label, style) = match entry.level {
                LogLevel::Ok => ("  ok ", theme.success()),
                LogLevel::Info => ("info ", theme.accent()),
                LogLevel::Warn => ("warn ", theme.warning()),
                LogLevel::Error => (" err ", theme.error()),
            };
            Line::from(vec![
                Span::styled(label, style),
                Span::styled(entry.message.clone(), theme.base()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.log_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_theme_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(30, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Themes ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            if i == app.theme_scroll {
                Line::styled(format!("> {}", kind.name()), theme.selected())
            } else {
                Line::styled(format!("  {}", kind.name()), theme.base())
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block).style(theme.base());
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
