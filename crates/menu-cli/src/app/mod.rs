pub mod input;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use crossterm::ExecutableCommand;
use crossterm::event::KeyEvent;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use menu_core::{Action, FsProvider, Navigator, apply_action, visible_window};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tracing::{debug, info, warn};

use crate::input_reader::{self, InputMessage};
use crate::ui::help;
use crate::ui::layout::{LayoutKind, compute_browser_layout};
use crate::ui::render::{compose_status, format_row, position_label, truncate_middle};
use crate::ui::theme::{ThemeTokens, build_theme};
use crate::watcher::{self, WatchMessage};

const TICK: Duration = Duration::from_millis(16);

pub struct App {
    nav: Navigator,
    provider: FsProvider,
    status: Option<String>,
    theme: ThemeTokens,
    list_height: usize,
    watch_enabled: bool,
    _watcher: Option<notify::RecommendedWatcher>,
    watch_rx: Option<Receiver<WatchMessage>>,
    watched_path: Option<PathBuf>,
}

impl App {
    pub fn new(nav: Navigator, watch_enabled: bool) -> Self {
        let mut app = Self {
            nav,
            provider: FsProvider,
            status: None,
            theme: build_theme(false),
            list_height: 0,
            watch_enabled,
            _watcher: None,
            watch_rx: None,
            watched_path: None,
        };
        app.sync_watcher();
        app
    }

    pub fn set_no_color(&mut self, no_color: bool) {
        self.theme = build_theme(no_color);
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        enable_raw_mode()?;

        let input_rx = input_reader::start();
        let loop_result = self.run_loop(&mut terminal, &input_rx);

        disable_raw_mode()?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        loop_result
    }

    fn run_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input_rx: &Receiver<InputMessage>,
    ) -> Result<()> {
        while self.nav.is_running() {
            self.handle_watch_updates();
            terminal.draw(|frame| self.draw(frame))?;
            thread::sleep(TICK);
            self.handle_input_messages(input_rx)?;
        }

        info!(path = %self.nav.current().path().display(), "quit");
        Ok(())
    }

    fn handle_input_messages(&mut self, input_rx: &Receiver<InputMessage>) -> Result<()> {
        while self.nav.is_running() {
            match input_rx.try_recv() {
                Ok(InputMessage::Key(key)) => self.handle_key(key),
                Ok(InputMessage::Error(err)) => bail!("input error: {err}"),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => bail!("input reader stopped"),
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::map_key(key) {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.status = None;
        if let Err(err) = apply_action(&mut self.nav, &self.provider, action, self.list_height) {
            warn!(error = %err, "open failed");
            self.status = Some(format!("open error: {err}"));
        }
        self.sync_watcher();
    }

    /// Points the watcher at the current view's path when it has changed.
    fn sync_watcher(&mut self) {
        if !self.watch_enabled {
            return;
        }

        let view = self.nav.current();
        if self.watched_path.as_deref() == Some(view.path()) {
            return;
        }
        let path = view.path().to_path_buf();

        match watcher::start(&path, view.kind()) {
            Ok((watcher, rx)) => {
                debug!(path = %path.display(), "watching");
                self._watcher = Some(watcher);
                self.watch_rx = Some(rx);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "watch failed");
                self._watcher = None;
                self.watch_rx = None;
                self.status = Some(format!("watch error: {err}"));
            }
        }
        self.watched_path = Some(path);
    }

    fn handle_watch_updates(&mut self) {
        let Some(watch_rx) = &self.watch_rx else {
            return;
        };

        let mut changed = false;
        let mut last_error = None;
        while let Ok(msg) = watch_rx.try_recv() {
            match msg {
                WatchMessage::Changed => changed = true,
                WatchMessage::Error(err) => last_error = Some(err),
            }
        }

        if let Some(err) = last_error {
            self.status = Some(format!("watch error: {err}"));
        }

        if changed {
            let view = self.nav.current_mut();
            match view.refresh(&self.provider) {
                Ok(()) => debug!(path = %view.path().display(), "refreshed"),
                Err(err) => {
                    warn!(error = %err, "refresh failed");
                    self.status = Some(format!("refresh error: {err}"));
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let help_visible = self.nav.current().help_visible;
        let layout = compute_browser_layout(
            area,
            help::help_rows(help_visible),
            self.status.is_some(),
        );
        self.list_height = layout.list.height as usize;

        let view = self.nav.current();
        let entries = view.entries();
        let selected = view.selected();
        let rows = visible_window(entries.len(), selected, self.list_height)
            .map(|i| {
                let is_selected = i == selected;
                let style = if is_selected {
                    self.theme.selected
                } else {
                    self.theme.entry
                };
                Line::from(Span::styled(format_row(i, &entries[i], is_selected), style))
            })
            .collect::<Vec<_>>();
        frame.render_widget(Paragraph::new(rows), layout.list);

        if let Some(status) = &self.status {
            frame.render_widget(
                Paragraph::new(status.as_str()).style(self.theme.status_error),
                layout.status,
            );
        }

        if layout.kind == LayoutKind::Full {
            frame.render_widget(
                Paragraph::new(help::footer_text(help_visible)).style(self.theme.help),
                layout.help,
            );
        }

        let width = layout.path.width as usize;
        let position = position_label(selected, entries.len());
        let path = view.path().display().to_string();
        let path = truncate_middle(
            &path,
            width.saturating_sub(position.chars().count() + 2).max(1),
        );
        frame.render_widget(
            Paragraph::new(compose_status(&path, &position, width)).style(self.theme.path),
            layout.path,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::mpsc;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use menu_core::{FsProvider, Navigator, ViewKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::{Color, Modifier};

    use crate::input_reader::InputMessage;
    use crate::ui::help::HIDDEN_HINT;

    use super::App;

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("menu-app-{name}-{nanos}"));
        fs::create_dir_all(&dir).expect("mkdir");
        dir
    }

    fn app_at(path: &Path) -> App {
        let nav = Navigator::open(&FsProvider, path).expect("open");
        App::new(nav, false)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code, KeyModifiers::NONE));
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        terminal
    }

    fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn draw_lists_entries_help_and_path() {
        let dir = temp_dir("draw");
        fs::write(dir.join("a.txt"), "a").expect("seed a");
        fs::write(dir.join("b.txt"), "b").expect("seed b");
        fs::write(dir.join(".secret"), "s").expect("seed hidden");
        let mut app = app_at(&dir);

        let terminal = draw(&mut app, 100, 10);
        let rows = screen_rows(&terminal);
        assert_eq!(rows[0], "> a.txt");
        assert_eq!(rows[1], "2 b.txt");
        assert_eq!(rows[2], "");
        assert!(rows[7].starts_with("[esc] to go up"));
        assert!(rows[8].starts_with("[ctrl + S/W]"));
        assert!(rows[9].starts_with(&dir.display().to_string()));
        assert!(rows[9].ends_with("1/2"));
        assert!(!rows.iter().any(|row| row.contains("secret")));

        let selected_cell = terminal.backend().buffer().cell((0, 0)).expect("cell");
        assert_eq!(selected_cell.bg, Color::White);
        assert_eq!(selected_cell.fg, Color::Black);
        assert_eq!(app.list_height, 7);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn home_toggles_help_to_single_hint() {
        let dir = temp_dir("help");
        fs::write(dir.join("a"), "a").expect("seed");
        let mut app = app_at(&dir);

        press(&mut app, KeyCode::Home);
        let rows = screen_rows(&draw(&mut app, 60, 6));
        assert_eq!(rows[4], HIDDEN_HINT);
        assert_eq!(app.list_height, 4);

        press(&mut app, KeyCode::Home);
        assert!(app.nav.current().help_visible);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn enter_opens_file_and_esc_restores_directory() {
        let dir = temp_dir("enter");
        fs::create_dir(dir.join("a")).expect("mkdir");
        fs::write(dir.join("b.txt"), "first\n\tsecond\n").expect("seed");
        let mut app = app_at(&dir);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.current().kind(), ViewKind::File);

        let rows = screen_rows(&draw(&mut app, 60, 8));
        assert_eq!(rows[0], "> first");
        assert_eq!(rows[1], "2     second");
        assert_eq!(rows[2], "3");
        assert_eq!(rows[6], HIDDEN_HINT);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.depth(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.current().path(), dir.as_path());
        assert_eq!(app.nav.current().selected(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(app.nav.is_root());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn paging_follows_drawn_list_height() {
        let dir = temp_dir("paging");
        let path = dir.join("fifty.txt");
        let text = (1..=50).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        fs::write(&path, text).expect("seed");
        let mut app = app_at(&path);

        // file view: one hint row plus the path row
        draw(&mut app, 40, 12);
        assert_eq!(app.list_height, 10);

        for _ in 0..23 {
            press(&mut app, KeyCode::Down);
        }
        let rows = screen_rows(&draw(&mut app, 40, 12));
        assert_eq!(rows[0], "21 21");
        assert_eq!(rows[3], "> 24");

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.nav.current().selected(), 30);
        let rows = screen_rows(&draw(&mut app, 40, 12));
        assert_eq!(rows[0], "> 31");
        assert_eq!(rows[9], "40 40");

        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.nav.current().selected(), 20);

        app.handle_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.nav.current().selected(), 49);
        app.handle_key(key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(app.nav.current().selected(), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_open_shows_status_and_keeps_view() {
        let dir = temp_dir("fail");
        fs::write(dir.join("gone.txt"), "x").expect("seed");
        let mut app = app_at(&dir);
        fs::remove_file(dir.join("gone.txt")).expect("remove");

        press(&mut app, KeyCode::Enter);
        assert!(app.nav.is_root());
        let status = app.status.clone().expect("status");
        assert!(status.starts_with("open error:"), "{status}");
        assert!(status.contains("gone.txt"), "{status}");

        let terminal = draw(&mut app, 120, 8);
        let rows = screen_rows(&terminal);
        assert!(rows[4].starts_with("open error:"));
        assert_eq!(app.list_height, 4);

        press(&mut app, KeyCode::Up);
        assert!(app.status.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn draw_without_room_for_list_keeps_paging_inert() {
        let dir = temp_dir("tiny");
        for name in ["a", "b", "c"] {
            fs::write(dir.join(name), name).expect("seed");
        }
        let mut app = app_at(&dir);
        press(&mut app, KeyCode::Down);

        let rows = screen_rows(&draw(&mut app, 30, 1));
        assert_eq!(app.list_height, 0);
        assert!(rows[0].ends_with("2/3"));

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.nav.current().selected(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn one_row_terminal_shows_path_while_status_is_set() {
        let dir = temp_dir("tiny-status");
        fs::write(dir.join("a"), "a").expect("seed");
        let mut app = app_at(&dir);
        app.status = Some("open error: boom".into());

        let rows = screen_rows(&draw(&mut app, 40, 1));
        assert!(rows[0].ends_with("1/1"), "row: {:?}", rows[0]);
        assert!(!rows[0].contains("open error"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_color_highlight_is_reversed() {
        let dir = temp_dir("mono");
        fs::write(dir.join("a"), "a").expect("seed");
        let mut app = app_at(&dir);
        app.set_no_color(true);

        let terminal = draw(&mut app, 40, 5);
        let cell = terminal.backend().buffer().cell((0, 0)).expect("cell");
        assert!(cell.modifier.contains(Modifier::REVERSED));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_loop_dispatches_queued_keys_until_quit() {
        let dir = temp_dir("loop");
        for name in ["a", "b", "c"] {
            fs::write(dir.join(name), name).expect("seed");
        }
        let mut app = app_at(&dir);
        let (tx, rx) = mpsc::channel();
        tx.send(InputMessage::Key(key(KeyCode::Down, KeyModifiers::NONE)))
            .expect("send");
        tx.send(InputMessage::Key(key(KeyCode::Down, KeyModifiers::NONE)))
            .expect("send");
        tx.send(InputMessage::Key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)))
            .expect("send");
        tx.send(InputMessage::Key(key(KeyCode::Up, KeyModifiers::NONE)))
            .expect("send");

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal");
        app.run_loop(&mut terminal, &rx).expect("run_loop");

        assert!(!app.nav.is_running());
        assert_eq!(app.nav.current().selected(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_loop_propagates_input_errors() {
        let dir = temp_dir("loop-err");
        let mut app = app_at(&dir);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal");

        let (tx, rx) = mpsc::channel();
        tx.send(InputMessage::Error("tty gone".into())).expect("send");
        let err = app.run_loop(&mut terminal, &rx).expect_err("input error");
        assert!(err.to_string().contains("tty gone"));

        let (tx, rx) = mpsc::channel::<InputMessage>();
        drop(tx);
        let err = app.run_loop(&mut terminal, &rx).expect_err("disconnected");
        assert!(err.to_string().contains("input reader stopped"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn watcher_refreshes_current_directory() {
        let dir = temp_dir("watch");
        fs::write(dir.join("a"), "a").expect("seed");
        let nav = Navigator::open(&FsProvider, &dir).expect("open");
        let mut app = App::new(nav, true);
        assert!(app.watch_rx.is_some());
        assert_eq!(app.watched_path.as_deref(), Some(dir.as_path()));

        fs::write(dir.join("b"), "b").expect("add entry");

        let deadline = Instant::now() + Duration::from_secs(3);
        while app.nav.current().entries().len() < 2 {
            if Instant::now() > deadline {
                panic!("watcher timeout");
            }
            std::thread::sleep(Duration::from_millis(20));
            app.handle_watch_updates();
        }
        assert_eq!(app.nav.current().entries(), ["a", "b"]);

        fs::create_dir(dir.join("sub")).expect("mkdir");
        app.nav.current_mut().refresh(&FsProvider).expect("refresh");
        app.nav.current_mut().jump_to_end();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.watched_path.as_deref(), Some(dir.join("sub").as_path()));

        let _ = fs::remove_dir_all(&dir);
    }
}
