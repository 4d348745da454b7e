use iced::widget::{button, container, svg};
use iced::{Background, Border, Color, Degrees, Gradient, gradient};

const ROW_RADIUS: f32 = 8.0;
const PROFILE_RADIUS: f32 = 8.0;
const AVATAR_RADIUS: f32 = 16.0;
const AVATAR_BORDER_WIDTH: f32 = 1.0;
const AVATAR_GRADIENT_ANGLE: f32 = 135.0;

/// Colours used by the sidebar surface, rows and profile footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarPalette {
    pub surface: Color,
    pub border: Color,
    pub divider: Color,
    pub title: Color,
    pub text: Color,
    pub name: Color,
    pub muted: Color,
    pub hover: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub avatar_from: Color,
    pub avatar_to: Color,
    pub avatar_text: Color,
    pub avatar_border: Color,
}

impl SidebarPalette {
    /// White surface with gray text and blue accents.
    pub fn light() -> Self {
        Self {
            surface: Color::WHITE,
            border: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            divider: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            title: Color::from_rgb8(0x11, 0x18, 0x27),
            text: Color::from_rgb8(0x4B, 0x55, 0x63),
            name: Color::from_rgb8(0x1F, 0x29, 0x37),
            muted: Color::from_rgb8(0x6B, 0x72, 0x80),
            hover: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_soft: Color::from_rgb8(0xEF, 0xF6, 0xFF),
            avatar_from: Color::from_rgb8(0xDB, 0xEA, 0xFE),
            avatar_to: Color::from_rgb8(0xEF, 0xF6, 0xFF),
            avatar_text: Color::from_rgb8(0x1D, 0x4E, 0xD8),
            avatar_border: Color::from_rgb8(0xDB, 0xEA, 0xFE),
        }
    }

    /// Foreground colour shared by a navigation row label and its icon.
    ///
    /// Hover is shown through the row background only, since the glyph and
    /// the button track the cursor over different bounds.
    pub fn row_foreground(&self, is_active: bool) -> Color {
        if is_active { self.accent } else { self.text }
    }
}

impl Default for SidebarPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// Style of the sidebar background and of the header/footer regions.
pub fn surface_style(palette: &SidebarPalette) -> container::Style {
    container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.title),
        ..Default::default()
    }
}

/// Style of a one pixel rule between regions.
pub fn separator_style(color: Color) -> container::Style {
    container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

/// Style of a navigation row button.
///
/// Placeholders are rendered without a press handler, so iced reports them as
/// [`button::Status::Disabled`]. They keep the idle look instead of iced's
/// dimmed default.
pub fn row_button_style(
    palette: &SidebarPalette,
    is_active: bool,
    status: button::Status,
) -> button::Style {
    let is_hovered =
        matches!(status, button::Status::Hovered | button::Status::Pressed);

    let background = if is_active {
        Some(palette.accent_soft.into())
    } else if is_hovered {
        Some(palette.hover.into())
    } else {
        None
    };

    button::Style {
        background,
        text_color: palette.row_foreground(is_active),
        border: Border {
            radius: ROW_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style of a navigation row glyph. Matches the label colour of the row.
pub fn row_icon_style(
    palette: &SidebarPalette,
    is_active: bool,
) -> svg::Style {
    svg::Style {
        color: Some(palette.row_foreground(is_active)),
    }
}

/// Style of the profile card in the footer.
pub fn profile_card_style(
    palette: &SidebarPalette,
    is_hovered: bool,
) -> container::Style {
    container::Style {
        background: is_hovered.then(|| palette.hover.into()),
        border: Border {
            radius: PROFILE_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style of the round initials badge in the footer.
pub fn avatar_style(palette: &SidebarPalette) -> container::Style {
    let fill = gradient::Linear::new(Degrees(AVATAR_GRADIENT_ANGLE))
        .add_stop(0.0, palette.avatar_from)
        .add_stop(1.0, palette.avatar_to);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(fill))),
        text_color: Some(palette.avatar_text),
        border: Border {
            color: palette.avatar_border,
            width: AVATAR_BORDER_WIDTH,
            radius: AVATAR_RADIUS.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::button;
    use iced::{Background, Color};

    use super::{
        SidebarPalette, avatar_style, profile_card_style, row_button_style,
        row_icon_style,
    };

    #[test]
    fn given_active_row_when_building_style_then_uses_accent_colors() {
        let palette = SidebarPalette::light();

        let style = row_button_style(&palette, true, button::Status::Active);

        assert_eq!(style.text_color, palette.accent);
        assert_eq!(
            style.background,
            Some(Background::Color(palette.accent_soft))
        );
    }

    #[test]
    fn given_hovered_inactive_row_when_building_style_then_only_background_changes()
     {
        let palette = SidebarPalette::light();

        let style = row_button_style(&palette, false, button::Status::Hovered);

        assert_eq!(style.text_color, palette.text);
        assert_eq!(style.background, Some(Background::Color(palette.hover)));
    }

    #[test]
    fn given_any_row_status_when_styling_icon_then_icon_matches_label_color() {
        let palette = SidebarPalette::light();
        let statuses = [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
            button::Status::Disabled,
        ];

        for is_active in [true, false] {
            let icon = row_icon_style(&palette, is_active);
            for status in statuses {
                let label = row_button_style(&palette, is_active, status);
                assert_eq!(
                    icon.color,
                    Some(label.text_color),
                    "icon and label diverge for active={is_active} {status:?}"
                );
            }
        }
    }

    #[test]
    fn given_profile_card_when_hovered_then_gains_hover_surface() {
        let palette = SidebarPalette::light();

        let idle = profile_card_style(&palette, false);
        let hovered = profile_card_style(&palette, true);

        assert_eq!(idle.background, None);
        assert_eq!(hovered.background, Some(Background::Color(palette.hover)));
        assert_eq!(hovered.border.radius, idle.border.radius);
    }

    #[test]
    fn given_disabled_placeholder_row_when_building_style_then_keeps_idle_look()
     {
        let palette = SidebarPalette::light();

        let idle = row_button_style(&palette, false, button::Status::Active);
        let disabled =
            row_button_style(&palette, false, button::Status::Disabled);

        assert_eq!(disabled.text_color, idle.text_color);
        assert_eq!(disabled.background, None);
    }

    #[test]
    fn given_active_row_when_hovered_then_active_look_wins() {
        let palette = SidebarPalette::light();

        let style = row_button_style(&palette, true, button::Status::Hovered);

        assert_eq!(style.text_color, palette.accent);
        assert_eq!(
            style.background,
            Some(Background::Color(palette.accent_soft))
        );
    }

    #[test]
    fn given_light_palette_when_building_avatar_then_uses_gradient_and_border()
    {
        let palette = SidebarPalette::light();

        let style = avatar_style(&palette);

        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, Some(palette.avatar_text));
        assert_eq!(style.border.color, palette.avatar_border);
        assert_eq!(SidebarPalette::default().surface, Color::WHITE);
    }
}
