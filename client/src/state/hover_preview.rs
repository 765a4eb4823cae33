//! Cursor-following image preview shown while hovering a gallery card image.

#[cfg(test)]
#[path = "hover_preview_test.rs"]
mod hover_preview_test;

/// Gap between the cursor and the preview's top-left corner, in page px.
pub const CURSOR_OFFSET_PX: i32 = 20;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverPreview {
    /// Image being previewed; `None` hides the tooltip.
    pub src: Option<String>,
    pub left: i32,
    pub top: i32,
}

impl HoverPreview {
    pub fn show(&mut self, src: &str) {
        self.src = Some(src.to_owned());
    }

    /// Follow the cursor (page coordinates).
    pub fn move_to(&mut self, page_x: i32, page_y: i32) {
        self.left = page_x.saturating_add(CURSOR_OFFSET_PX);
        self.top = page_y.saturating_add(CURSOR_OFFSET_PX);
    }

    pub fn hide(&mut self) {
        self.src = None;
    }

    pub fn is_visible(&self) -> bool {
        self.src.is_some()
    }

    /// Inline style for the `.tooltip-imagen` element.
    pub fn style(&self) -> String {
        let display = if self.is_visible() { "block" } else { "none" };
        format!("display: {display}; left: {}px; top: {}px;", self.left, self.top)
    }
}
