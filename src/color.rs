use egui::Color32;

/// One of the three color channels driven by a slider row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// The current stamp color as three independent 0-255 channels.
///
/// `u8` storage makes out-of-range channel values unrepresentable, so the
/// model never re-clamps slider input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorModel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Default for ColorModel {
    fn default() -> Self {
        // Sliders start on pure red
        Self {
            red: 255,
            green: 0,
            blue: 0,
        }
    }
}

impl ColorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// The live composite of the three channels.
    pub fn current_color(&self) -> Color32 {
        Color32::from_rgb(self.red, self.green, self.blue)
    }
}
