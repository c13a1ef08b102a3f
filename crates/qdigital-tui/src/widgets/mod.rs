//! Widget components for the TUI

mod carousel;
mod mobile_menu;
mod navbar;
mod page_body;
mod status_bar;
mod text;

pub use carousel::testimonial_lines;
pub use mobile_menu::MobileMenuWidget;
pub use navbar::NavBarWidget;
pub use page_body::{build as build_body, BodyLines};
pub use status_bar::StatusBar;
pub use text::wrap;
