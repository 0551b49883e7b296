//! Platform adapters: system clipboard and the OS URL handler.

use arboard::Clipboard;
use board_core::{ClipboardError, ClipboardSink, UriLauncher};
use eframe::egui;

/// Lazily opened system clipboard; a failed open is retried on the next write.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|err| ClipboardError(err.to_string())),
            None => Err(ClipboardError("clipboard not initialised".to_string())),
        }
    }
}

/// Hands `mailto:`/`tel:` links to eframe, which forwards them to the OS.
pub struct EguiUriLauncher<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiUriLauncher<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl UriLauncher for EguiUriLauncher<'_> {
    fn open_uri(&self, uri: &str) {
        self.ctx.open_url(egui::OpenUrl::same_tab(uri));
    }
}
