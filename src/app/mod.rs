use ggez::event::EventHandler;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, DrawParam, Mesh, PxScale, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;

use crate::basic::{board, BoardDim, Dir};
use crate::error::{Error, ErrorConversion, Result};
use crate::game::GameState;

use palette::Palette;
use prefs::Prefs;

pub mod palette;
pub mod prefs;
mod rendering;

pub struct App {
    game: GameState,
    prefs: Prefs,
    palette: Palette,
    board_dim: BoardDim,

    /// Cached, the grid never changes
    grid_mesh: Option<Mesh>,
}

impl App {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let board_dim =
            board::dim_from_window(prefs.window_width, prefs.window_height, prefs.tile_size);
        if board_dim.x < 1 || board_dim.y < 1 {
            return Err(Error::conf(format!(
                "window of {}x{}px doesn't fit a single {}px tile",
                prefs.window_width, prefs.window_height, prefs.tile_size,
            )));
        }

        Ok(Self {
            game: GameState::new(board_dim),
            prefs,
            palette: Palette::dark(),
            board_dim,
            grid_mesh: None,
        })
    }
}

/// The line of text above the board
fn status_text(score: usize, game_over: bool) -> String {
    if game_over {
        format!("Game Over: {}", score)
    } else {
        format!("Score: {}", score)
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        // ticks keep arriving after the game ends, tick() ignores them
        while ctx.time.check_update_time(self.prefs.ticks_per_second) {
            self.game.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let tile_size = self.prefs.tile_size;
        let snapshot = self.game.snapshot();

        if self.grid_mesh.is_none() {
            self.grid_mesh = Some(
                rendering::grid_mesh(self.board_dim, tile_size, &self.palette, ctx)
                    .with_trace_step("App::draw")?,
            );
        }
        let apple_mesh = rendering::apple_mesh(&snapshot, tile_size, &self.palette, ctx)
            .with_trace_step("App::draw")?;
        let snake_mesh = rendering::snake_mesh(&snapshot, tile_size, &self.palette, ctx)
            .with_trace_step("App::draw")?;

        let text_color = if snapshot.game_over {
            self.palette.game_over_text_color
        } else {
            self.palette.text_color
        };
        let mut text = Text::new(status_text(snapshot.score, snapshot.game_over));
        text.set_scale(PxScale::from(16.));

        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        canvas.draw(self.grid_mesh.as_ref().unwrap(), DrawParam::default());
        canvas.draw(&apple_mesh, DrawParam::default());
        canvas.draw(&snake_mesh, DrawParam::default());
        canvas.draw(
            &text,
            DrawParam::default()
                .dest(Vec2::new(tile_size - 16., tile_size - 16.))
                .color(text_color),
        );
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        use KeyCode::*;

        // arrow keys steer, everything else is ignored
        let dir = match input.keycode {
            Some(Up) => Dir::U,
            Some(Down) => Dir::D,
            Some(Left) => Dir::L,
            Some(Right) => Dir::R,
            _ => return Ok(()),
        };
        self.game.set_direction(dir);
        Ok(())
    }
}

#[test]
fn test_status_text() {
    assert_eq!(status_text(0, false), "Score: 0");
    assert_eq!(status_text(7, false), "Score: 7");
    assert_eq!(status_text(7, true), "Game Over: 7");
}
