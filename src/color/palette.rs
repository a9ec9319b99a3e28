//! Pre-defined colors at full intensity

use super::Color;

pub const RED: Color = Color::rgb(255, 0, 0);
pub const ORANGE: Color = Color::rgb(255, 135, 0);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const AQUA: Color = Color::rgb(0, 255, 165);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const PURPLE: Color = Color::rgb(165, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLANK: Color = Color::rgb(0, 0, 0);
