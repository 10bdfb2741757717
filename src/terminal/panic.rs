//! Panic hook that restores the terminal before the panic is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call early in `main()`, before [`super::TerminalManager::new`].
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "Panic");
        original_hook(panic_info);
    }));
}
