//! GUI Theme: "Slate" - muted blue-grey palette
//!
//! Color constants shared by the launcher window and the selection dialog.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: slate-900
pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
/// Secondary background for panels and the dialog body
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 41, 59);
/// Hover / active widget background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(51, 65, 85);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
pub const TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(56, 189, 248);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
pub const ACCENT_RED: Color32 = Color32::from_rgb(248, 113, 113);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
