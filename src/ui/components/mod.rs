//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal tab row with an arrow marker on the active tab
//! - `StatusIndicator` - Spinner, error and info indicators
//! - `OverviewBox` - Rounded box of labelled values

mod overview_box;
mod status_indicator;
mod tab_selector;

pub use overview_box::{render_overview_box, OVERVIEW_BOX_HEIGHT};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
