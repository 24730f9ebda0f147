use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

use crate::shared::{i18n, Config, I18n, QrTheme, UiTheme};
use crate::{features, qr, ui, Cli};

/// Result of a background QR generation request.
#[derive(Debug)]
pub enum GenerationMessage {
    Completed {
        url: String,
        theme: QrTheme,
        png: Vec<u8>,
    },
    Failed,
}

/// The QR code currently on screen, kept for download and share.
#[derive(Debug, Clone)]
pub struct GeneratedQr {
    pub url: String,
    pub theme: QrTheme,
    pub png: Vec<u8>,
}

/// Status message for user feedback
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub timestamp: std::time::Instant,
    pub message_type: StatusType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
}

/// Every text slot the UI renders, re-resolved on language change.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    pub window_title: String,
    pub title: String,
    pub subtitle: String,
    pub url_label: String,
    pub url_placeholder: String,
    pub theme_label: String,
    pub generate: String,
    pub download: String,
    pub share: String,
    pub loading: String,
    pub footer: String,
    pub theme_names: [String; 4],
}

/// Main application state
pub struct App {
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Application configuration
    pub config: Config,
    /// Translation resolver
    pub i18n: I18n,
    /// Terminal palette, follows the QR theme
    pub ui_theme: UiTheme,
    /// Resolved UI text
    pub labels: Labels,
    /// URL input buffer
    pub url_input: String,
    /// Cursor byte offset into `url_input`
    pub cursor: usize,
    /// Last generated QR code, if any
    pub current_qr: Option<GeneratedQr>,
    /// True while a generation request is in flight
    pub loading: bool,
    /// Current status message
    pub status_message: Option<StatusMessage>,
    /// Flag to indicate if UI needs redraw
    needs_redraw: bool,
    client: reqwest::Client,
    result_tx: mpsc::UnboundedSender<GenerationMessage>,
    result_rx: mpsc::UnboundedReceiver<GenerationMessage>,
}

impl App {
    /// Create a new App instance
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;

        let language = i18n::detect_language(
            cli.lang.as_deref(),
            config.stored_language_code(),
            sys_locale::get_locale().as_deref(),
        );
        let i18n = I18n::new(language);

        let ui_theme = UiTheme::for_qr_theme(config.qr_theme);
        let url_input = cli.url.clone().unwrap_or_default();
        let cursor = url_input.len();

        let (result_tx, result_rx) = mpsc::unbounded_channel::<GenerationMessage>();

        let mut app = Self {
            should_quit: false,
            config,
            i18n,
            ui_theme,
            labels: Labels::default(),
            url_input,
            cursor,
            current_qr: None,
            loading: false,
            status_message: None,
            needs_redraw: true,
            client: reqwest::Client::new(),
            result_tx,
            result_rx,
        };

        app.apply_translations();

        Ok(app)
    }

    /// Re-resolve every registered text slot against the active language.
    pub fn apply_translations(&mut self) {
        let t = &self.i18n;

        self.labels = Labels {
            window_title: format!("{} - Transform Links with Style", t.t("title")),
            title: t.t("title"),
            subtitle: t.t("subtitle"),
            url_label: t.t("urlLabel"),
            url_placeholder: t.t("urlPlaceholder"),
            theme_label: t.t("themeLabel"),
            generate: t.t("generateBtn"),
            download: t.t("downloadBtn"),
            share: t.t("shareBtn"),
            loading: t.t("loading"),
            footer: t.t("footer"),
            theme_names: [
                t.t(QrTheme::Classic.label_key()),
                t.t(QrTheme::Colorful.label_key()),
                t.t(QrTheme::Neon.label_key()),
                t.t(QrTheme::Nature.label_key()),
            ],
        };
        self.needs_redraw = true;
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        if !IsTty::is_tty(&io::stdout()) {
            eprintln!("This application requires a TTY terminal to run.");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        self.update_window_title()?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        while !self.should_quit {
            // Collect finished generation requests
            while let Ok(message) = self.result_rx.try_recv() {
                match message {
                    GenerationMessage::Completed { url, theme, png } => {
                        self.current_qr = Some(GeneratedQr { url, theme, png });
                        self.loading = false;
                        self.status_message = None;
                    }
                    GenerationMessage::Failed => {
                        self.loading = false;
                        let text = self.i18n.t("error.generation");
                        self.show_status(&text, StatusType::Error);
                    }
                }
                self.needs_redraw = true;
            }

            // Auto-clear stale status messages
            self.update_status_message(std::time::Duration::from_secs(3));

            if self.needs_redraw {
                terminal.draw(|f| ui::draw(f, self))?;
                self.needs_redraw = false;
            }

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key.code, key.modifiers)?;
                    self.needs_redraw = true;
                }
            }
        }

        self.cleanup()?;

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        // Help overlay swallows everything except its dismiss keys
        if self.config.show_help {
            if matches!(key, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
                self.config.toggle_help();
                let _ = self.config.save();
            }
            return Ok(());
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('l') => self.cycle_language(),
                KeyCode::Char('d') => self.download_qr_code(),
                KeyCode::Char('s') => self.share_qr_code(),
                KeyCode::Char('u') => {
                    self.url_input.clear();
                    self.cursor = 0;
                }
                _ => {}
            }
            return Ok(());
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.generate_qr_code(),
            KeyCode::Tab => self.select_theme(self.config.qr_theme.next()),
            KeyCode::BackTab => self.select_theme(self.config.qr_theme.prev()),
            KeyCode::F(1) => {
                self.config.toggle_help();
                let _ = self.config.save();
            }
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.url_input.len(),
            _ => {}
        }
        Ok(())
    }

    fn insert_char(&mut self, c: char) {
        self.url_input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor > 0 {
            let prev = previous_boundary(&self.url_input, self.cursor);
            self.url_input.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.url_input.len() {
            let next = next_boundary(&self.url_input, self.cursor);
            self.url_input.drain(self.cursor..next);
        }
    }

    fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = previous_boundary(&self.url_input, self.cursor);
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor < self.url_input.len() {
            self.cursor = next_boundary(&self.url_input, self.cursor);
        }
    }

    /// Validate the input and kick off a background generation request.
    fn generate_qr_code(&mut self) {
        let url = match qr::validate_url(&self.url_input) {
            Ok(url) => url,
            Err(error) => {
                let text = self.i18n.t(error.message_key());
                self.show_status(&text, StatusType::Warning);
                return;
            }
        };

        self.loading = true;
        let theme = self.config.qr_theme;
        let client = self.client.clone();
        let tx = self.result_tx.clone();

        tokio::spawn(async move {
            let message = match qr::fetch_qr_image(&client, &url, theme).await {
                Ok(png) => GenerationMessage::Completed { url, theme, png },
                Err(_) => GenerationMessage::Failed,
            };
            let _ = tx.send(message);
        });
    }

    /// Composite the current QR code onto its themed background and save it.
    fn download_qr_code(&mut self) {
        let Some(current) = self.current_qr.clone() else {
            return;
        };

        let result = std::env::current_dir()
            .map_err(anyhow::Error::from)
            .and_then(|dir| features::share::save_qr_image(&current.png, current.theme, &dir));

        match result {
            Ok(path) => {
                let text = self
                    .i18n
                    .t_with("success.saved", &[("path", &path.display().to_string())]);
                self.show_status(&text, StatusType::Success);
            }
            Err(_) => {
                let text = self.i18n.t("error.download");
                self.show_status(&text, StatusType::Error);
            }
        }
    }

    /// Copy the localized share message to the clipboard.
    fn share_qr_code(&mut self) {
        let Some(current) = self.current_qr.as_ref() else {
            return;
        };

        let text = features::share::share_text(&self.i18n, &current.url);
        match features::share::copy_to_clipboard(&text) {
            Ok(()) => {
                let text = self.i18n.t("success.copied");
                self.show_status(&text, StatusType::Success);
            }
            Err(_) => {
                let text = self.i18n.t("error.shareNotSupported");
                self.show_status(&text, StatusType::Error);
            }
        }
    }

    /// Select a QR theme, persist it, and retint the interface.
    fn select_theme(&mut self, theme: QrTheme) {
        self.config.set_qr_theme(theme);
        let _ = self.config.save();
        self.ui_theme = UiTheme::for_qr_theme(theme);

        let text = self.i18n.t(theme.label_key());
        self.show_status(&text, StatusType::Info);
    }

    /// Switch to the next language, persist the choice, and re-resolve text.
    fn cycle_language(&mut self) {
        let next = self.i18n.language().next();
        if self.i18n.set_language(next.code()) {
            self.config.set_language(next);
            let _ = self.config.save();
            self.apply_translations();
            let _ = self.update_window_title();

            let text = self
                .i18n
                .t_with("language.changed", &[("name", next.display_name())]);
            self.show_status(&text, StatusType::Success);
        }
    }

    fn update_window_title(&self) -> Result<()> {
        execute!(
            io::stdout(),
            crossterm::terminal::SetTitle(&self.labels.window_title)
        )?;
        Ok(())
    }

    /// Show a status message to the user
    pub fn show_status(&mut self, text: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: text.to_string(),
            timestamp: std::time::Instant::now(),
            message_type: status_type,
        });
        self.needs_redraw = true;
    }

    /// Clear status message if it's older than the specified duration
    pub fn update_status_message(&mut self, max_age: std::time::Duration) {
        if let Some(ref msg) = self.status_message {
            if msg.timestamp.elapsed() > max_age {
                self.status_message = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Clean up resources before exiting
    fn cleanup(&mut self) -> Result<()> {
        self.config.save()?;
        Ok(())
    }
}

fn previous_boundary(text: &str, index: usize) -> usize {
    let mut i = index.saturating_sub(1);
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(text: &str, index: usize) -> usize {
    let mut i = index + 1;
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i.min(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries() {
        let text = "a✨b";
        assert_eq!(next_boundary(text, 0), 1);
        assert_eq!(next_boundary(text, 1), 4);
        assert_eq!(previous_boundary(text, 4), 1);
        assert_eq!(previous_boundary(text, 1), 0);
    }
}
