//! Color palette: dark slate surfaces with sky/cyan accents.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23); // slate-950
pub const CARD_BG: Color = Color::Rgb(15, 23, 42); // slate-900
pub const POPUP_BG: Color = Color::Rgb(30, 41, 59); // slate-800

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85); // slate-700
pub const BORDER_ACTIVE: Color = Color::Rgb(34, 211, 238); // cyan-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(34, 211, 238); // cyan-400
pub const ACCENT_ALT: Color = Color::Rgb(56, 189, 248); // sky-400

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(209, 213, 219); // gray-300
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175); // gray-400
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
