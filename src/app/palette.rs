use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

pub struct Palette {
    pub grid_thickness: f32,

    pub background_color: Color,
    pub grid_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,
    pub text_color: Color,
    pub game_over_text_color: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            grid_thickness: 1.,

            background_color: Color::BLACK,
            grid_color: gray!(0.25),
            apple_color: Color::from_rgb(255, 0, 0),
            snake_color: Color::from_rgb(0, 255, 0),
            text_color: Color::WHITE,
            game_over_text_color: Color::from_rgb(255, 0, 0),
        }
    }
}
