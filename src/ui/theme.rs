//! Color theme constants.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and header text
pub const COLOR_HEADER: Color = Color::White;

/// Focused input border and text
pub const COLOR_FOCUS: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input boxes
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Inline field errors and failure banners
pub const COLOR_ERROR: Color = Color::Red;

/// Success status line
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Warnings, such as a failure that was reported as success
pub const COLOR_WARNING: Color = Color::Yellow;

/// Request in flight
pub const COLOR_PENDING: Color = Color::Cyan;
