use std::iter;

use ggez::glam::Vec2;
use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;
use itertools::chain;

use crate::app::palette::Palette;
use crate::basic::{BoardDim, Cell};
use crate::error::Result;
use crate::game::Snapshot;

fn cell_rect(cell: Cell, tile_size: f32) -> Rect {
    Rect::new(
        cell.x as f32 * tile_size,
        cell.y as f32 * tile_size,
        tile_size,
        tile_size,
    )
}

/// Lines along every tile boundary. The grid never changes so the
/// caller caches this mesh.
pub fn grid_mesh(
    board_dim: BoardDim,
    tile_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Mesh> {
    let width = board_dim.x as f32 * tile_size;
    let height = board_dim.y as f32 * tile_size;

    let mut builder = MeshBuilder::new();
    for x in (0..=board_dim.x).map(|i| i as f32 * tile_size) {
        builder.line(
            &[Vec2::new(x, 0.), Vec2::new(x, height)],
            palette.grid_thickness,
            palette.grid_color,
        )?;
    }
    for y in (0..=board_dim.y).map(|j| j as f32 * tile_size) {
        builder.line(
            &[Vec2::new(0., y), Vec2::new(width, y)],
            palette.grid_thickness,
            palette.grid_color,
        )?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

/// One filled square per occupied cell, head included
pub fn snake_mesh(
    snapshot: &Snapshot,
    tile_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    for cell in chain(iter::once(snapshot.head), snapshot.body.iter().copied()) {
        builder.rectangle(
            DrawMode::fill(),
            cell_rect(cell, tile_size),
            palette.snake_color,
        )?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

pub fn apple_mesh(
    snapshot: &Snapshot,
    tile_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    builder.rectangle(
        DrawMode::fill(),
        cell_rect(snapshot.apple, tile_size),
        palette.apple_color,
    )?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
