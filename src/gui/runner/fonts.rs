//! Font configuration for the GUI

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

/// Fallback fonts tried in order, as (name, path).
///
/// Batch folders are often named by hand, so the list covers Hangul/CJK
/// glyphs as well as the symbols used in button labels.
#[cfg(target_os = "macos")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("cjk", "/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
];

#[cfg(target_os = "windows")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("cjk", "C:\\Windows\\Fonts\\malgun.ttf"),
    ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("cjk", "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
    ("cjk_alt", "/usr/share/fonts/truetype/nanum/NanumGothic.ttf"),
    ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

/// Register every fallback font that exists on this machine
pub(super) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    for (name, path) in FONT_FALLBACKS {
        let Ok(font_data) = std::fs::read(path) else {
            debug!("[batchpick] Fallback font '{}' not found at {}", name, path);
            continue;
        };

        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(font_data).into());

        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push((*name).to_owned());
            }
        }

        info!("[batchpick] Loaded fallback font '{}' from: {}", name, path);
    }

    ctx.set_fonts(fonts);
}
