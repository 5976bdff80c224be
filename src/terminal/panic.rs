//! Panic hook that gives the terminal back before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current one.
///
/// Call after `color_eyre::install()` so its report is what gets printed.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "admin console panicked");
        original_hook(panic_info);
    }));
}
