//! Create User dialog rendering.
//!
//! Pure view of a [`CreateUserDialog`]: the three fields with their error
//! slots, the failure banner in structured routing, and a key hint line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::dialog::{CreateUserDialog, DialogCallbacks, Field};
use crate::ui::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING};

pub const DIALOG_TITLE: &str = "Create User";

const HINT: &str = "Enter create \u{00b7} Tab next \u{00b7} Esc cancel";
const SUBMITTING: &str = "Creating user\u{2026}";

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Email => "name@example.com",
        Field::Username => "username",
        Field::Password => "password",
    }
}

fn field_config<'a, C: DialogCallbacks>(
    dialog: &'a CreateUserDialog<C>,
    field: Field,
    focus: Field,
) -> InputFieldConfig<'a> {
    InputFieldConfig::new(field.label(), dialog.form().value(field))
        .focused(field == focus)
        .password(field == Field::Password)
        .error(dialog.errors().get(field))
        .placeholder(placeholder(field))
}

/// Render the dialog if it is visible. Does nothing otherwise.
pub fn render_create_user_modal<C: DialogCallbacks>(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    dialog: &CreateUserDialog<C>,
    focus: Field,
) {
    if !dialog.is_visible() {
        return;
    }

    let fields: Vec<InputFieldConfig> = Field::ALL
        .iter()
        .map(|field| field_config(dialog, *field, focus))
        .collect();

    let banner_height = if dialog.server_error().is_some() { 2 } else { 0 };
    let fields_height: u16 = fields.iter().map(calculate_input_field_height).sum();
    // top padding, banner, fields, blank, hint
    let content_height = 1 + banner_height + fields_height + 2;

    let config = DialogFrameConfig::new(DIALOG_TITLE, content_height)
        .min_width(40)
        .max_width(64);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let bottom = inner.y + inner.height;
    let mut y = inner.y + 1;

    if let Some(message) = dialog.server_error() {
        let banner_area = Rect::new(inner.x + 2, y, inner.width.saturating_sub(4), 1);
        if y < bottom {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(COLOR_ERROR),
                )))
                .wrap(Wrap { trim: true }),
                banner_area,
            );
        }
        y += banner_height;
    }

    for field in &fields {
        let height = calculate_input_field_height(field);
        if y + height > bottom {
            break;
        }
        y += render_input_field(frame, Rect::new(inner.x, y, inner.width, height), field);
    }

    let hint_y = bottom.saturating_sub(1);
    if hint_y >= y && inner.height > 0 {
        let (text, color) = if dialog.is_submitting() {
            (SUBMITTING, COLOR_PENDING)
        } else {
            (HINT, COLOR_DIM)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
            Rect::new(inner.x + 2, hint_y, inner.width.saturating_sub(4), 1),
        );
    }
}
