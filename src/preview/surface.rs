//! Isolated rendering surfaces for untrusted newsletter markup.

use std::path::{Path, PathBuf};

use super::PreviewFrame;
use crate::error_handling::ExportError;

/// Something that can display newsletter markup in isolation from the host.
///
/// Implementations receive the raw markup and the frame; they apply the
/// overlay with `PreviewFrame::compose_markup` and must not alter the markup
/// otherwise.
pub trait IsolatedSurface {
    fn render(&self, markup: &str, frame: &PreviewFrame) -> Result<(), ExportError>;
}

/// Writes a standalone host page embedding the newsletter in a sandboxed iframe.
///
/// The iframe has an empty `sandbox` attribute, so scripts, forms and
/// same-origin access are all disabled for the newsletter content.
#[derive(Debug, Clone)]
pub struct SandboxedFrameWriter {
    path: PathBuf,
}

impl SandboxedFrameWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IsolatedSurface for SandboxedFrameWriter {
    fn render(&self, markup: &str, frame: &PreviewFrame) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, host_page(markup, frame))?;
        log::info!(
            "Wrote {}px preview to {}",
            frame.viewport_width,
            self.path.display()
        );
        Ok(())
    }
}

/// Host page markup with the composed newsletter in the iframe's `srcdoc`.
pub fn host_page(markup: &str, frame: &PreviewFrame) -> String {
    let srcdoc = escape_attribute(&frame.compose_markup(markup));
    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Newsletter preview</title>\n\
</head>\n\
<body style=\"margin:0;padding:24px;background:#f3f4f6;\">\n\
<iframe sandbox=\"\" title=\"Newsletter preview\" width=\"{width}\" height=\"800\" \
style=\"display:block;margin:0 auto;border:1px solid #d1d5db;background:#ffffff;width:{width}px;\" \
srcdoc=\"{srcdoc}\"></iframe>\n\
</body>\n\
</html>\n",
        width = frame.viewport_width,
        srcdoc = srcdoc,
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{present, ViewMode};
    use tempfile::TempDir;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"<a href="x?a=1&b=2">"#),
            "&lt;a href=&quot;x?a=1&amp;b=2&quot;&gt;"
        );
    }

    #[test]
    fn test_host_page_embeds_escaped_markup() {
        let page = host_page("<p class=\"x\">Hi</p>", &present(ViewMode::Mobile, false));
        assert!(page.contains("width=\"375\""));
        assert!(page.contains("sandbox=\"\""));
        assert!(page.contains("srcdoc=\"&lt;p class=&quot;x&quot;&gt;Hi&lt;/p&gt;\""));
    }

    #[test]
    fn test_host_page_with_dark_overlay() {
        let page = host_page("<p>Hi</p>", &present(ViewMode::Desktop, true));
        assert!(page.contains("width=\"600\""));
        assert!(page.contains("srcdoc=\"&lt;style&gt;"));
    }

    #[test]
    fn test_writer_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("preview.html");
        let writer = SandboxedFrameWriter::new(&path);
        writer
            .render("<p>Hi</p>", &present(ViewMode::Desktop, false))
            .unwrap();
        let written = std::fs::read_to_string(writer.path()).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
