//! Reusable UI Components
//!
//! - `InputField` - Text input with focus handling, password masking, and errors
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
