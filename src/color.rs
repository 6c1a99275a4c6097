/// Linear RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const RED: Color = Color::rgb(0.9, 0.2, 0.2);
    pub const GREEN: Color = Color::rgb(0.2, 0.8, 0.3);
    pub const BLUE: Color = Color::rgb(0.2, 0.4, 0.9);
    pub const YELLOW: Color = Color::rgb(0.95, 0.85, 0.2);
    pub const CYAN: Color = Color::rgb(0.2, 0.85, 0.9);
    pub const MAGENTA: Color = Color::rgb(0.85, 0.3, 0.85);

    /// Clear color behind the scene.
    pub const BACKGROUND: Color = Color::rgb(0.85, 0.85, 0.88);

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}
