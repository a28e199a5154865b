//! Colors for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Early-morning dark colors
pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#0f172a",
    bg_secondary: "#1e293b",
    bg_tertiary: "#334155",
    text_primary: "#e2e8f0",
    text_secondary: "#94a3b8",
    text_muted: "#64748b",
    border: "#334155",
    accent: "#60a5fa",
    accent_text: "#0f172a",
    error: "#f87171",
    success: "#4ade80",
};

/// Shared style for text inputs
pub fn input_style() -> String {
    let colors = &PALETTE;
    format!(
        "
        padding: 6px 8px;
        border: 1px solid {};
        border-radius: 6px;
        background: {};
        color: {};
        font-size: 14px;
        ",
        colors.border, colors.bg_primary, colors.text_primary
    )
}

/// Shared style for secondary buttons
pub fn button_style() -> String {
    let colors = &PALETTE;
    format!(
        "
        padding: 6px 12px;
        border: 1px solid {};
        border-radius: 6px;
        background: {};
        color: {};
        cursor: pointer;
        ",
        colors.border, colors.bg_tertiary, colors.text_primary
    )
}

/// Shared style for panels
pub fn card_style() -> String {
    let colors = &PALETTE;
    format!(
        "
        padding: 16px 20px;
        border: 1px solid {};
        border-radius: 12px;
        background: {};
        ",
        colors.border, colors.bg_secondary
    )
}
