//! Silent-aware writes to [`stdout`](std::io::stdout), shared by every crate
//! that talks to the user.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// The output mode: either normal output or completely quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Normal,
    Quiet,
}

/// A minimal shell abstraction: everything user-facing goes through here so
/// that `--silent` suppresses it in one place.
#[derive(Debug, Default)]
pub struct Shell {
    pub output_mode: OutputMode,
}

impl Shell {
    /// Print a line (with a newline) to stdout.
    pub fn println_out(&self, msg: &str) -> io::Result<()> {
        if self.output_mode == OutputMode::Quiet {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", msg)?;
        handle.flush()
    }
}

static GLOBAL_SHELL: OnceLock<Mutex<Shell>> = OnceLock::new();

/// Get a lock to the global shell, initializing it with defaults on first use.
pub fn get_shell() -> MutexGuard<'static, Shell> {
    GLOBAL_SHELL
        .get_or_init(|| Mutex::new(Shell::default()))
        .lock()
        .expect("global shell mutex is poisoned")
}

/// Switch the global shell between normal and quiet output.
pub fn set_output_mode(mode: OutputMode) {
    get_shell().output_mode = mode;
}

/// Print a formatted line to stdout, unless the shell is quiet.
#[macro_export]
macro_rules! sh_println {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::shell::get_shell().println_out(&msg)
            .unwrap_or_else(|e| eprintln!("Error writing output: {}", e));
    }};
}
