//! Responsive layout helpers.
//!
//! A `LayoutContext` carries the terminal size into every render function so
//! widgets can size themselves proportionally.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a percentage of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Less than 60 columns or 16 rows.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        assert_eq!(LayoutContext::new(40, 40).bounded_width(30, 20, 50), 20);
    }

    #[test]
    fn test_size_categories() {
        let ctx = LayoutContext::default();
        assert!(!ctx.is_narrow());
        assert!(!ctx.is_short());
        assert!(!ctx.is_extra_small());

        assert!(LayoutContext::new(79, 24).is_narrow());
        assert!(LayoutContext::new(80, 23).is_short());
        assert!(LayoutContext::new(100, 15).is_extra_small());
    }
}
