//! Clipboard access for the copy command.
//!
//! A platform clipboard command found on `PATH` is preferred; the OSC 52
//! terminal escape sequence is the fallback when no command is available
//! or the command fails. Copying never returns an error to the caller:
//! the outcome is a [`CopyStatus`] suitable for the status line.

use std::{
    borrow::Cow,
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use crossterm::{clipboard::CopyToClipboard, execute, tty::IsTty};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("clipboard command `{0}` failed")]
    CommandFailed(&'static str),
    #[error("failed to write to clipboard command's stdin")]
    StdinWriteFailed,
    #[error("no clipboard provider available")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardProvider {
    fn name(&self) -> Cow<'_, str>;

    /// Capability probe: whether this provider can be tried at all.
    fn is_available(&self) -> bool {
        true
    }

    fn set_contents(&self, content: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
    fn name(&self) -> Cow<'_, str> {
        "none".into()
    }

    fn is_available(&self) -> bool {
        false
    }

    fn set_contents(&self, _content: &str) -> Result<()> {
        Err(ClipboardError::Unavailable)
    }
}

/// A clipboard program that reads the new contents from stdin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandProvider {
    command: &'static str,
    args: &'static [&'static str],
}

const WL_COPY: CommandProvider = CommandProvider {
    command: "wl-copy",
    args: &["--type", "text/plain"],
};
const XCLIP: CommandProvider = CommandProvider {
    command: "xclip",
    args: &["-i", "-selection", "clipboard"],
};
const XSEL: CommandProvider = CommandProvider {
    command: "xsel",
    args: &["-i", "-b"],
};
const PBCOPY: CommandProvider = CommandProvider {
    command: "pbcopy",
    args: &[],
};
const CLIP_EXE: CommandProvider = CommandProvider {
    command: "clip.exe",
    args: &[],
};
const TERMUX: CommandProvider = CommandProvider {
    command: "termux-clipboard-set",
    args: &[],
};

fn env_var_is_set(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

fn binary_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

impl CommandProvider {
    /// Picks the clipboard command for the current session, if any.
    pub fn detect() -> Option<Self> {
        let provider = if cfg!(target_os = "macos") {
            binary_exists("pbcopy").then_some(PBCOPY)
        } else if env_var_is_set("WAYLAND_DISPLAY") && binary_exists("wl-copy") {
            Some(WL_COPY)
        } else if env_var_is_set("DISPLAY") && binary_exists("xclip") {
            Some(XCLIP)
        } else if env_var_is_set("DISPLAY") && binary_exists("xsel") {
            Some(XSEL)
        } else if binary_exists("termux-clipboard-set") {
            Some(TERMUX)
        } else if binary_exists("clip.exe") {
            Some(CLIP_EXE)
        } else {
            None
        };
        log::debug!(
            "clipboard command: {}",
            provider.map_or("none", |provider| provider.command)
        );
        provider
    }

    pub fn command(&self) -> &'static str {
        self.command
    }
}

impl ClipboardProvider for CommandProvider {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.command)
    }

    fn set_contents(&self, content: &str) -> Result<()> {
        let mut child = Command::new(self.command)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(content.as_bytes()).is_ok(),
            None => false,
        };
        if !written {
            // The child may still be waiting for input; it must not outlive us unreaped.
            let _ = child.kill();
            child.wait()?;
            return Err(ClipboardError::StdinWriteFailed);
        }

        if child.wait()?.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(self.command))
        }
    }
}

/// Copies through the terminal with an OSC 52 escape sequence.
#[derive(Debug, Default)]
pub struct Osc52Provider;

impl ClipboardProvider for Osc52Provider {
    fn name(&self) -> Cow<'_, str> {
        "osc52".into()
    }

    fn is_available(&self) -> bool {
        io::stdout().is_tty()
    }

    fn set_contents(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(content))?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    Copied { provider: String },
    Failed,
}

impl CopyStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyStatus::Copied { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            CopyStatus::Copied { .. } => "Text copied to clipboard!",
            CopyStatus::Failed => "Failed to copy text",
        }
    }
}

/// Writes `text` through `primary` when it is available, otherwise (or when
/// it fails) through `fallback`.
pub fn write_clipboard(
    primary: &dyn ClipboardProvider,
    fallback: &dyn ClipboardProvider,
    text: &str,
) -> CopyStatus {
    if primary.is_available() {
        match primary.set_contents(text) {
            Ok(()) => {
                return CopyStatus::Copied {
                    provider: primary.name().into_owned(),
                };
            }
            Err(err) => log::warn!("clipboard provider {} failed: {err}", primary.name()),
        }
    } else {
        log::debug!(
            "clipboard provider {} unavailable, trying {}",
            primary.name(),
            fallback.name()
        );
    }

    match fallback.set_contents(text) {
        Ok(()) => CopyStatus::Copied {
            provider: fallback.name().into_owned(),
        },
        Err(err) => {
            log::error!("Failed to copy: {err}");
            CopyStatus::Failed
        }
    }
}

pub struct Clipboard {
    primary: Box<dyn ClipboardProvider>,
    fallback: Box<dyn ClipboardProvider>,
}

impl Clipboard {
    pub fn new(primary: Box<dyn ClipboardProvider>, fallback: Box<dyn ClipboardProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Probes the environment once for a clipboard command.
    pub fn detect() -> Self {
        let primary: Box<dyn ClipboardProvider> = match CommandProvider::detect() {
            Some(provider) => Box::new(provider),
            None => Box::new(NoClipboard),
        };
        Self::new(primary, Box::new(Osc52Provider))
    }

    pub fn copy(&self, text: &str) -> CopyStatus {
        write_clipboard(self.primary.as_ref(), self.fallback.as_ref(), text)
    }

    pub fn primary_name(&self) -> Cow<'_, str> {
        self.primary.name()
    }
}
