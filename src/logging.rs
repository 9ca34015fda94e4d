//! Logging setup and scoped quiet mode
//!
//! The subscriber writes to stderr; stdout is reserved for the encoded proof.
//! Its filter sits behind a reload layer so [`quiet`] can drop everything
//! below `error` for the lifetime of a guard and put the previous directives
//! back when the guard is dropped.

use std::sync::{Mutex, OnceLock};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

pub const DEFAULT_DIRECTIVES: &str = "warn";
const QUIET_DIRECTIVES: &str = "error";

static CONTROL: OnceLock<LogControl> = OnceLock::new();

/// Owns the reload handle of an installed filter
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    current: Mutex<String>,
}

impl LogControl {
    pub fn new(handle: reload::Handle<EnvFilter, Registry>, directives: impl Into<String>) -> Self {
        Self {
            handle,
            current: Mutex::new(directives.into()),
        }
    }

    /// Silence everything below `error` until the returned guard drops
    pub fn quiet(&self) -> QuietGuard<'_> {
        let previous = self.swap(QUIET_DIRECTIVES.to_string());
        QuietGuard {
            control: Some(self),
            previous,
        }
    }

    fn swap(&self, directives: String) -> String {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = self.handle.reload(EnvFilter::new(&directives)) {
            tracing::warn!("Failed to switch log filter to `{}`: {}", directives, e);
        }
        std::mem::replace(&mut *current, directives)
    }
}

/// Restores the previous log filter on drop
#[must_use]
pub struct QuietGuard<'a> {
    control: Option<&'a LogControl>,
    previous: String,
}

impl Drop for QuietGuard<'_> {
    fn drop(&mut self) {
        if let Some(control) = self.control {
            control.swap(std::mem::take(&mut self.previous));
        }
    }
}

/// Install the global subscriber. Honors `RUST_LOG`, defaults to `warn`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|d| EnvFilter::try_new(d).is_ok())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string());

    let (filter, handle) = reload::Layer::new(EnvFilter::new(&directives));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_ok() {
        let _ = CONTROL.set(LogControl::new(handle, directives));
    }
}

/// Scoped quiet mode on the global subscriber; a no-op before [`init`].
pub fn quiet() -> QuietGuard<'static> {
    match CONTROL.get() {
        Some(control) => control.quiet(),
        None => QuietGuard {
            control: None,
            previous: String::new(),
        },
    }
}
