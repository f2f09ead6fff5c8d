//! Routing of panics into a logger
//!
//! The hook is process-wide state, so nothing installs it implicitly: the
//! application installs one logger's hook at startup.
//!
//! ```no_run
//! use redquill::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(
//!     Logger::builder()
//!         .appender(ConsoleAppender::new())
//!         .build(),
//! );
//! let _hook = logger.install_panic_hook();
//!
//! panic!("logged as \"Uncaught exception.\" before the default report");
//! ```

use super::logger::Logger;
use std::any::Any;
use std::panic::{self, PanicHookInfo};
use std::sync::{Arc, Weak};

type HookFn = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Handle to an installed panic hook.
///
/// Dropping the handle leaves the hook in place; call
/// [`PanicHook::uninstall`] to restore the hook that was active before.
///
/// The hook only holds a weak reference to its logger. Once the last
/// `Arc<Logger>` is dropped the logger flushes and shuts down as usual, and
/// later panics go straight to the previous hook.
#[must_use = "keep the handle to be able to uninstall the hook"]
pub struct PanicHook {
    previous: Arc<HookFn>,
}

/// Log every panic through `logger`, then run the previously installed hook.
///
/// The previous hook still runs, so the usual panic report and process
/// termination behaviour are unchanged. Installing a second logger chains
/// onto the first one: both log.
pub fn install_panic_hook(logger: Arc<Logger>) -> PanicHook {
    let logger: Weak<Logger> = Arc::downgrade(&logger);
    let previous: Arc<HookFn> = Arc::from(panic::take_hook());
    let chained = Arc::clone(&previous);

    panic::set_hook(Box::new(move |info| {
        if let Some(logger) = logger.upgrade() {
            logger.log_exception(info);
        }
        chained(info);
    }));

    PanicHook { previous }
}

impl PanicHook {
    /// Restore the hook that was active when this one was installed.
    ///
    /// Hooks installed later are discarded along with this one.
    pub fn uninstall(self) {
        let previous = self.previous;
        drop(panic::take_hook());
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

/// Text of a panic payload (`&str` or `String`), or a placeholder.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
