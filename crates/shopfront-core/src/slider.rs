use serde::{Deserialize, Serialize};

/// Cyclic cursor over a product's images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    index: usize,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SliderCommand {
    NextImage,
    PrevImage,
}

impl Slider {
    /// A slider over `len` images, showing the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// A slider positioned at `index`, wrapped into range.
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Prev/next controls are hidden when there is nothing to cycle through.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.controls_visible() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.controls_visible() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn apply(&mut self, command: SliderCommand) {
        match command {
            SliderCommand::NextImage => self.next(),
            SliderCommand::PrevImage => self.prev(),
        }
    }
}
