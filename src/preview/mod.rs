//! Newsletter preview.
//!
//! `present` decides the viewport width and the optional dark-mode overlay for
//! a display mode. The newsletter markup itself is never inspected: the overlay
//! is prepended as-is and the result is handed to an `IsolatedSurface`.

mod inbox;
mod surface;

use clap::ValueEnum;
use strum_macros::{AsRefStr, Display};

use crate::config::{DESKTOP_VIEWPORT_WIDTH, MOBILE_VIEWPORT_WIDTH};

pub use inbox::{inbox_previews, InboxClient, InboxPreview};
pub use surface::{host_page, IsolatedSurface, SandboxedFrameWriter};

/// Style block prepended to the markup in dark mode.
pub const DARK_MODE_OVERLAY: &str = "<style>\n\
body { background-color: #1a1a1a !important; color: #e5e5e5 !important; }\n\
table { background-color: #2a2a2a !important; }\n\
* { color: #e5e5e5 !important; }\n\
a { color: #60a5fa !important; }\n\
</style>\n";

/// Preview display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    /// 600px wide viewport
    Desktop,
    /// 375px wide viewport
    Mobile,
}

impl ViewMode {
    pub fn viewport_width(self) -> u16 {
        match self {
            ViewMode::Desktop => DESKTOP_VIEWPORT_WIDTH,
            ViewMode::Mobile => MOBILE_VIEWPORT_WIDTH,
        }
    }
}

/// What the isolated surface needs besides the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewFrame {
    pub viewport_width: u16,
    pub style_overlay: Option<&'static str>,
}

impl PreviewFrame {
    /// Overlay (if any) followed by the untouched markup.
    pub fn compose_markup(&self, markup: &str) -> String {
        match self.style_overlay {
            Some(overlay) => {
                let mut composed = String::with_capacity(overlay.len() + markup.len());
                composed.push_str(overlay);
                composed.push_str(markup);
                composed
            }
            None => markup.to_string(),
        }
    }
}

/// Viewport width and overlay for a display mode.
pub fn present(view_mode: ViewMode, dark_mode: bool) -> PreviewFrame {
    PreviewFrame {
        viewport_width: view_mode.viewport_width(),
        style_overlay: dark_mode.then_some(DARK_MODE_OVERLAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(
            present(ViewMode::Desktop, false),
            PreviewFrame {
                viewport_width: 600,
                style_overlay: None
            }
        );
        let frame = present(ViewMode::Mobile, true);
        assert_eq!(frame.viewport_width, 375);
        assert_eq!(frame.style_overlay, Some(DARK_MODE_OVERLAY));
    }

    #[test]
    fn test_overlay_content() {
        assert!(DARK_MODE_OVERLAY.starts_with("<style>"));
        assert!(DARK_MODE_OVERLAY.contains("#1a1a1a"));
        assert!(DARK_MODE_OVERLAY.contains("a { color: #60a5fa !important; }"));
    }

    #[test]
    fn test_compose_preserves_document_structure() {
        let markup = "<!DOCTYPE html>\n<html><body><p>Hi</p></body></html>";
        let composed = present(ViewMode::Desktop, true).compose_markup(markup);
        assert!(composed.starts_with(DARK_MODE_OVERLAY));
        assert!(composed.ends_with(markup));
        assert_eq!(composed.len(), DARK_MODE_OVERLAY.len() + markup.len());

        let plain = present(ViewMode::Desktop, false).compose_markup(markup);
        assert_eq!(plain, markup);
    }

    #[test]
    fn test_view_mode_display() {
        assert_eq!(ViewMode::Mobile.to_string(), "mobile");
    }
}
