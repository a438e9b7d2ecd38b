use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::prefs::Prefs;
use crate::app::App;

mod app;
mod basic;
mod error;
mod game;

fn main() {
    let prefs = Prefs::default();

    let wm = WindowMode::default()
        .dimensions(prefs.window_width, prefs.window_height)
        .resizable(false);

    let ws = WindowSetup::default().title("Snake").vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("tile_snake", "tile_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .expect("failed to build ggez context");

    let app = App::new(prefs).expect("bad startup parameters");
    event::run(ctx, event_loop, app)
}
