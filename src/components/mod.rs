pub mod day_cards;
pub mod forecast_display;
pub mod outlook_header;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use day_cards::{DayCards, DayCardsProps, ERROR_ICON};
pub use forecast_display::{ForecastDisplay, ForecastDisplayProps};
pub use outlook_header::{OutlookHeader, OutlookHeaderProps};
