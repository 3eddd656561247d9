// terminal ui

mod app;
mod ascii;
mod event;
mod theme;
mod ui;

pub use app::{App, DETECT_DEBOUNCE, DETECT_MIN_CHARS, Lane, LogLevel, Mode, Panel, Popup, Tab};
pub use theme::ThemeKind;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::{Api, Error};
use event::{Action, handle_event, poll_event};

pub async fn run(api: Api) -> Result<(), Error> {
    // setup terminal
    enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| Error::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::Terminal(e.to_string()))?;

    // run app
    let result = run_app(&mut terminal, api).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    api: Api,
) -> Result<(), Error> {
    let mut app = App::new(api.base_url());
    let mut last_mode = app.mode;

    loop {
        // update cursor style before render
        if app.mode != last_mode {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar,
                Mode::Normal => SetCursorStyle::BlinkingBlock,
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = app.mode;
        }

        // render (cursor position is set in ui::render when in insert mode)
        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| Error::Terminal(e.to_string()))?;

        // poll events
        if let Some(event) =
            poll_event(Duration::from_millis(100)).map_err(|e| Error::Terminal(e.to_string()))?
        {
            match handle_event(&mut app, event) {
                Action::Quit => break,
                Action::Submit(text) => {
                    app.log(LogLevel::Info, format!("checking: {text}"));

                    // render loading state
                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Terminal(e.to_string()))?;

                    let result = match app.tab {
                        Tab::Basic => api.check_basic(&text).await,
                        Tab::Transformer => {
                            api.check_transformer(&text, app.effective_language()).await
                        }
                    };
                    match result {
                        Ok(classification) => app.set_check_result(classification),
                        Err(e) => app.fail_check(e),
                    }
                }
                Action::Verify(text) => {
                    app.begin_verify();
                    app.log(LogLevel::Info, "verifying with llm".to_string());

                    // render loading state
                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Terminal(e.to_string()))?;

                    match api.verify_llm(&text).await {
                        Ok(verification) => app.set_llm_result(verification),
                        Err(e) => app.fail_llm(e),
                    }
                }
                Action::ExportJson => {
                    if let Some(json) = app.export_json() {
                        let filename = format!(
                            "profcheck_{}.json",
                            chrono::Local::now().format("%Y%m%d_%H%M%S")
                        );
                        match std::fs::write(&filename, &json) {
                            Ok(_) => app.log(LogLevel::Ok, format!("exported to {filename}")),
                            Err(e) => app.log(LogLevel::Error, format!("export failed: {e}")),
                        }
                    } else {
                        app.log(LogLevel::Warn, "no result to export".to_string());
                    }
                }
                Action::None => {}
            }
        }

        // fire any detection whose debounce window has elapsed
        if let Some(text) = app.take_due_detection() {
            app.detecting = true;

            // render detecting state
            terminal
                .draw(|frame| ui::render(frame, &mut app))
                .map_err(|e| Error::Terminal(e.to_string()))?;

            match api.detect_language(&text).await {
                Ok(detection) => app.set_detection(detection),
                Err(e) => app.fail_detection(e),
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
