use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::LevelFilter;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style as TextStyle},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use unifmt::clipboard::Clipboard;
use unifmt::editor::TextEditor;
use unifmt::format::{self, SelectionRange, Style};
use unifmt::render::{RenderResult, render_buffer};
use unifmt::status::StatusMessage;
use unifmt::theme::Theme;

#[derive(Debug, Parser)]
#[command(name = "unifmt", version)]
#[command(about = "Format plain text with Unicode bold, italic, monospace, strikethrough, underline and lists")]
struct Cli {
    /// Format the whole input with this style and print it instead of
    /// opening the editor (bold, italic, monospace, strikethrough,
    /// underline, bullet-list, numbered-list, indent, outdent)
    #[arg(long, short, value_parser = parse_style)]
    style: Option<Style>,

    /// Write a log file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Text file to load into the buffer (or to format with --style;
    /// stdin when omitted)
    file: Option<PathBuf>,
}

fn parse_style(value: &str) -> Result<Style, format::ParseStyleError> {
    value.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log.as_deref(), cli.verbose)?;

    match cli.style {
        Some(style) => run_pipe(style, cli.file.as_deref()),
        None => run(cli.file),
    }
}

fn setup_logging(path: Option<&Path>, verbosity: u8) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(
            fern::log_file(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?,
        )
        .apply()
        .context("failed to install logger")?;
    Ok(())
}

fn run_pipe(style: Style, path: Option<&Path>) -> Result<()> {
    let input = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let selection = SelectionRange::new(0, input.chars().count());
    let formatted = format::apply(&input, selection, style)
        .with_context(|| format!("failed to apply {style}"))?;
    log::info!("formatted {} characters as {style}", selection.len());

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(formatted.buffer.as_bytes())
        .context("failed to write stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn run(path: Option<PathBuf>) -> Result<()> {
    let (text, initial_status) = load_text(path.as_deref())?;
    let title = path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "[scratch]".to_string());
    let mut app = App::new(text, title, initial_status);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("failed to initialize terminal")?;
    // Lets Ctrl+[ arrive as itself instead of Esc where the terminal allows.
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .is_ok();
    log::debug!("keyboard enhancement: {enhanced_keys}");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;
    terminal.clear().ok();

    let res = run_app(&mut terminal, &mut app).context("application error");

    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags).ok();
    }
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

fn load_text(path: Option<&Path>) -> Result<(String, Option<String>)> {
    match path {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((normalize_newlines(&content), None))
        }
        Some(path) => Ok((
            String::new(),
            Some(format!("{} not found, starting empty", path.display())),
        )),
        None => Ok((
            String::new(),
            Some("Type or paste text, select it, then press Ctrl+P".to_string()),
        )),
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();
    let mut needs_redraw = true;

    while !app.should_quit() {
        if needs_redraw {
            terminal
                .draw(|frame| app.draw(frame))
                .context("failed to draw frame")?;
            needs_redraw = false;
        }

        // The formatted buffer is on screen now; restore its selection
        // before the next key is read.
        if app.settle_selection() {
            needs_redraw = true;
            continue;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("event poll failed")? {
            let evt = event::read().context("failed to read event")?;
            app.handle_event(evt)?;
            needs_redraw = true;
        }

        if last_tick.elapsed() >= tick_rate {
            if app.on_tick() {
                needs_redraw = true;
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuAction {
    Format(Style),
    CopyAll,
}

#[derive(Clone, Copy)]
struct MenuShortcut {
    key: char,
    requires_shift: bool,
}

impl MenuShortcut {
    const fn new(key: char) -> Self {
        Self {
            key,
            requires_shift: false,
        }
    }

    const fn with_shift(key: char) -> Self {
        Self {
            key,
            requires_shift: true,
        }
    }

    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char(ch) if ch == self.key => {
                if self.requires_shift {
                    modifiers == KeyModifiers::SHIFT
                } else {
                    modifiers.is_empty()
                }
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy)]
struct MenuItem {
    label: &'static str,
    action: Option<MenuAction>,
    shortcut: MenuShortcut,
}

impl MenuItem {
    fn new(label: &'static str, action: MenuAction, shortcut: MenuShortcut, enabled: bool) -> Self {
        Self {
            label,
            action: enabled.then_some(action),
            shortcut,
        }
    }

    fn is_enabled(&self) -> bool {
        self.action.is_some()
    }
}

enum MenuEntry {
    Section(&'static str),
    Separator,
    Item(MenuItem),
}

/// The open formatting menu. `cursor` counts selectable rows only, so
/// section titles and separators are never highlighted.
struct FormatMenu {
    entries: Vec<MenuEntry>,
    rows: Vec<usize>,
    cursor: usize,
}

impl FormatMenu {
    fn new(entries: Vec<MenuEntry>) -> Self {
        let rows: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| matches!(entry, MenuEntry::Item(_)).then_some(idx))
            .collect();
        let mut menu = Self {
            entries,
            rows,
            cursor: 0,
        };
        menu.cursor = (0..menu.rows.len())
            .find(|&row| menu.item(row).is_some_and(MenuItem::is_enabled))
            .unwrap_or(0);
        menu
    }

    fn item(&self, row: usize) -> Option<&MenuItem> {
        match self.entries.get(*self.rows.get(row)?) {
            Some(MenuEntry::Item(item)) => Some(item),
            _ => None,
        }
    }

    fn step(&mut self, delta: isize) {
        if !self.rows.is_empty() {
            let len = self.rows.len() as isize;
            self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
        }
    }

    /// Index into `entries` of the highlighted row.
    fn highlighted(&self) -> Option<usize> {
        self.rows.get(self.cursor).copied()
    }

    fn chosen(&self) -> Option<MenuAction> {
        self.item(self.cursor).and_then(|item| item.action)
    }

    /// Highlights the row bound to the key. Returns `None` when no row is
    /// bound, otherwise the row's action (absent while it is disabled).
    fn jump(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<Option<MenuAction>> {
        let row = (0..self.rows.len()).find(|&row| {
            self.item(row)
                .is_some_and(|item| item.shortcut.matches(code, modifiers))
        })?;
        self.cursor = row;
        Some(self.chosen())
    }
}

fn style_shortcut(style: Style) -> MenuShortcut {
    match style {
        Style::Bold => MenuShortcut::new('b'),
        Style::Italic => MenuShortcut::new('i'),
        Style::Monospace => MenuShortcut::new('m'),
        Style::Strikethrough => MenuShortcut::with_shift('X'),
        Style::Underline => MenuShortcut::new('u'),
        Style::BulletList => MenuShortcut::new('8'),
        Style::NumberedList => MenuShortcut::new('7'),
        Style::Indent => MenuShortcut::new(']'),
        Style::Outdent => MenuShortcut::new('['),
    }
}

fn build_context_menu_entries(has_selection: bool, has_text: bool) -> Vec<MenuEntry> {
    let style_item = |style: Style| {
        MenuEntry::Item(MenuItem::new(
            style.label(),
            MenuAction::Format(style),
            style_shortcut(style),
            has_selection,
        ))
    };

    let mut entries = vec![MenuEntry::Section("Character style")];
    entries.extend(
        Style::ALL
            .into_iter()
            .filter(|style| !style.is_line_based())
            .map(style_item),
    );
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Section("Lines"));
    entries.extend(
        Style::ALL
            .into_iter()
            .filter(|style| style.is_line_based())
            .map(style_item),
    );
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Section("Clipboard"));
    entries.push(MenuEntry::Item(MenuItem::new(
        "Copy Formatted Text",
        MenuAction::CopyAll,
        MenuShortcut::new('c'),
        has_text,
    )));
    entries
}

/// Styles bound directly to editor keys.
///
/// Without keyboard enhancement a terminal sends Ctrl+] as the byte that
/// crossterm reports as Ctrl+5, and Ctrl+[ as a plain Esc. Shift+Tab is the
/// outdent key that survives the legacy encoding.
fn shortcut_style(code: KeyCode, modifiers: KeyModifiers) -> Option<Style> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('b') if ctrl => Some(Style::Bold),
        KeyCode::Char('u') if ctrl => Some(Style::Underline),
        KeyCode::Char(']') | KeyCode::Char('5') if ctrl => Some(Style::Indent),
        KeyCode::Char('[') if ctrl => Some(Style::Outdent),
        KeyCode::BackTab => Some(Style::Outdent),
        _ => None,
    }
}

fn is_context_menu_shortcut(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => modifiers.is_empty(),
        KeyCode::Char(' ') | KeyCode::Char('p') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

struct App {
    editor: TextEditor,
    title: String,
    theme: Theme,
    clipboard: Clipboard,
    scroll_top: usize,
    should_quit: bool,
    status: StatusMessage,
    context_menu: Option<FormatMenu>,
    last_viewport_height: usize,
}

impl App {
    fn new(text: String, title: String, initial_status: Option<String>) -> Self {
        let clipboard = Clipboard::detect();
        log::info!("clipboard provider: {}", clipboard.primary_name());

        let mut status = StatusMessage::default();
        if let Some(message) = initial_status {
            status.set(message);
        }

        Self {
            editor: TextEditor::new(text),
            title,
            theme: Theme::default(),
            clipboard,
            scroll_top: 0,
            should_quit: false,
            status,
            context_menu: None,
            last_viewport_height: 1,
        }
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn settle_selection(&mut self) -> bool {
        self.editor.settle_selection().is_some()
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.height == 0 || area.width == 0 {
            return;
        }

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let text_area = vertical[0];
        let status_area = vertical[1];

        let render = render_buffer(
            self.editor.text(),
            self.editor.selection(),
            self.editor.cursor(),
            text_area.width.max(1) as usize,
            &self.theme,
        );

        let viewport_height = text_area.height as usize;
        self.last_viewport_height = viewport_height.max(1);
        self.adjust_scroll(&render, viewport_height);

        let paragraph = Paragraph::new(Text::from(render.lines.clone()))
            .block(Block::default().borders(Borders::NONE))
            .scroll((self.scroll_top.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, text_area);

        if self.context_menu.is_none()
            && let Some(cursor) = render.cursor
            && cursor.line >= self.scroll_top
            && cursor.line < self.scroll_top + viewport_height
        {
            let cursor_y = text_area.y + (cursor.line - self.scroll_top) as u16;
            let cursor_x = text_area.x + cursor.column.min(text_area.width - 1);
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }

        let status_line = self.status_line(status_area.width as usize);
        let status_widget = Paragraph::new(status_line).style(self.theme.status_bar_style());
        frame.render_widget(status_widget, status_area);

        if self.context_menu.is_some() {
            self.render_context_menu(frame, area);
        }
    }

    fn adjust_scroll(&mut self, render: &RenderResult, viewport_height: usize) {
        let viewport = viewport_height.max(1);
        let max_scroll = render.total_lines.saturating_sub(viewport);
        if self.scroll_top > max_scroll {
            self.scroll_top = max_scroll;
        }
        if let Some(cursor) = render.cursor {
            if cursor.line < self.scroll_top {
                self.scroll_top = cursor.line;
            } else if cursor.line >= self.scroll_top + viewport {
                self.scroll_top = cursor.line + 1 - viewport;
            }
        }
    }

    fn status_line(&mut self, terminal_width: usize) -> Line<'static> {
        self.status.prune();

        let (line, column) = self.editor.line_col(self.editor.cursor());
        let position = format!("{}:{}", line + 1, column + 1);

        if let Some(message) = self.status.text() {
            return Line::from(vec![
                Span::raw(format!("{position} ")),
                Span::styled(message.to_string(), self.theme.message_style()),
            ]);
        }

        let selection = self.editor.selection();
        let mut spans = vec![
            Span::raw(format!("{position} ")),
            Span::styled(self.title.clone(), self.theme.title_style()),
            Span::raw(format!(
                ", {} lines, {} chars",
                self.editor.line_count(),
                self.editor.len_chars()
            )),
        ];
        if !selection.is_empty() {
            spans.push(Span::raw(format!(", {} selected", selection.len())));
        }

        let shortcuts = "^P:Format ^Y:Copy ^Q:Quit";
        let left_width: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let shortcuts_width = shortcuts.chars().count();
        if left_width + 1 + shortcuts_width <= terminal_width {
            let padding = terminal_width - left_width - shortcuts_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(shortcuts, TextStyle::default().fg(Color::White)));
        }

        Line::from(spans)
    }

    fn render_context_menu(&self, frame: &mut Frame, area: Rect) {
        let Some(menu) = &self.context_menu else {
            return;
        };

        if area.width < 3 || area.height < 3 {
            return;
        }

        let mut max_label_width = 0usize;
        let mut max_section_width = 0usize;
        for entry in &menu.entries {
            match entry {
                MenuEntry::Item(item) => {
                    max_label_width = max_label_width.max(item.label.chars().count());
                }
                MenuEntry::Section(title) => {
                    max_section_width = max_section_width.max(title.chars().count());
                }
                MenuEntry::Separator => {}
            }
        }

        let gap = "  ";
        let shortcut_width = 1;
        let item_width = max_label_width + gap.len() + shortcut_width;
        let content_width = item_width.max(max_section_width) as u16;
        let min_width = 10.min(area.width);
        let width = (content_width + 4).min(area.width).max(min_width);
        let desired_height = (menu.entries.len() as u16 + 2).min(area.height);
        let height = desired_height.max(3.min(area.height));

        let popup_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, popup_area);

        let separator_width = popup_area.width.saturating_sub(4).max(4) as usize;
        let popup_style = self.theme.menu_style();

        let items: Vec<ListItem> = menu
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Section(title) => ListItem::new(Line::from(Span::styled(
                    *title,
                    self.theme.menu_section_style(),
                ))),
                MenuEntry::Separator => ListItem::new(Line::from(Span::styled(
                    "─".repeat(separator_width),
                    self.theme.menu_disabled_style(),
                ))),
                MenuEntry::Item(item) => {
                    let shortcut = item.shortcut.key;
                    let content = format!(
                        "{label:<label_width$}{gap}{shortcut:>shortcut_width$}",
                        label = item.label,
                        label_width = max_label_width,
                    );
                    let style = if item.is_enabled() {
                        popup_style
                    } else {
                        self.theme.menu_disabled_style()
                    };
                    ListItem::new(Line::from(Span::styled(content, style)))
                }
            })
            .collect();

        let mut state = ListState::default();
        state.select(menu.highlighted());

        let list = List::new(items)
            .highlight_style(self.theme.menu_selected_style())
            .style(popup_style)
            .block(
                Block::default()
                    .title("Format")
                    .borders(Borders::ALL)
                    .style(popup_style)
                    .border_style(TextStyle::default().fg(Color::Gray)),
            );

        frame.render_stateful_widget(list, popup_area, &mut state);
    }

    fn open_context_menu(&mut self) {
        let entries =
            build_context_menu_entries(self.editor.has_selection(), !self.editor.is_empty());
        self.context_menu = Some(FormatMenu::new(entries));
    }

    fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    fn handle_context_menu_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.context_menu.is_none() {
            return false;
        }

        match code {
            KeyCode::Esc => {
                self.close_context_menu();
                true
            }
            KeyCode::Up => {
                if let Some(menu) = self.context_menu.as_mut() {
                    menu.step(-1);
                }
                true
            }
            KeyCode::Down => {
                if let Some(menu) = self.context_menu.as_mut() {
                    menu.step(1);
                }
                true
            }
            KeyCode::Enter => {
                if let Some(action) = self
                    .context_menu
                    .as_ref()
                    .and_then(FormatMenu::chosen)
                {
                    self.close_context_menu();
                    self.execute_menu_action(action);
                }
                true
            }
            KeyCode::Char(' ') | KeyCode::Char('p')
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.close_context_menu();
                true
            }
            KeyCode::Char(_) => {
                let Some(action) = self
                    .context_menu
                    .as_mut()
                    .and_then(|menu| menu.jump(code, modifiers))
                else {
                    return false;
                };
                if let Some(action) = action {
                    self.close_context_menu();
                    self.execute_menu_action(action);
                }
                true
            }
            _ => false,
        }
    }

    fn execute_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Format(style) => self.apply_style(style),
            MenuAction::CopyAll => self.copy_all(),
        }
    }

    fn apply_style(&mut self, style: Style) {
        match self.editor.format_selection(style) {
            Ok(true) => {}
            Ok(false) => self.status.set("Select some text first"),
            Err(err) => {
                log::warn!("{} failed: {err}", style.label());
                self.status.set(format!("{}: {err}", style.label()));
            }
        }
    }

    fn copy_all(&mut self) {
        let status = self.clipboard.copy(self.editor.text());
        log::info!(
            "copy of {} characters: {status:?}",
            self.editor.len_chars()
        );
        self.status.set(status.message());
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if self.handle_context_menu_key(code, modifiers) {
                    return Ok(());
                }

                if self.context_menu.is_some() {
                    return Ok(());
                }

                if is_context_menu_shortcut(code, modifiers) {
                    self.open_context_menu();
                    return Ok(());
                }

                self.handle_editor_key(code, modifiers);
            }
            Event::Paste(text) => {
                self.editor.insert_str(&normalize_newlines(&text));
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_editor_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(style) = shortcut_style(code, modifiers) {
            self.apply_style(style);
            return;
        }

        let extend = modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('a') if ctrl => self.editor.select_all(),
            KeyCode::Char('y') if ctrl => self.copy_all(),
            KeyCode::Left => {
                self.editor.prepare_selection(extend);
                if ctrl {
                    self.editor.move_word_left();
                } else {
                    self.editor.move_left();
                }
            }
            KeyCode::Right => {
                self.editor.prepare_selection(extend);
                if ctrl {
                    self.editor.move_word_right();
                } else {
                    self.editor.move_right();
                }
            }
            KeyCode::Up => {
                self.editor.prepare_selection(extend);
                self.editor.move_vertical(-1);
            }
            KeyCode::Down => {
                self.editor.prepare_selection(extend);
                self.editor.move_vertical(1);
            }
            KeyCode::PageUp => {
                self.editor.prepare_selection(extend);
                self.editor
                    .move_vertical(-(self.last_viewport_height as isize));
            }
            KeyCode::PageDown => {
                self.editor.prepare_selection(extend);
                self.editor.move_vertical(self.last_viewport_height as isize);
            }
            KeyCode::Home => {
                self.editor.prepare_selection(extend);
                if ctrl {
                    self.editor.move_to_document_start();
                } else {
                    self.editor.move_to_line_start();
                }
            }
            KeyCode::End => {
                self.editor.prepare_selection(extend);
                if ctrl {
                    self.editor.move_to_document_end();
                } else {
                    self.editor.move_to_line_end();
                }
            }
            KeyCode::Backspace => {
                self.editor.backspace();
            }
            KeyCode::Delete => {
                self.editor.delete_forward();
            }
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Tab => self.editor.insert_str(format::INDENT_UNIT),
            KeyCode::Char(ch) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
                self.editor.insert_char(ch);
            }
            _ => {}
        }
    }

    /// Returns true when the status line changed.
    fn on_tick(&mut self) -> bool {
        self.status.prune()
    }
}
