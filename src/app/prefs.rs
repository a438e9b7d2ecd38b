use static_assertions::const_assert;

pub const DEFAULT_BOARD_PX: usize = 600;
pub const DEFAULT_TILE_PX: usize = 25;

// the default board is a whole number of tiles
const_assert!(DEFAULT_BOARD_PX % DEFAULT_TILE_PX == 0);

pub struct Prefs {
    /// Window size in pixels
    pub window_width: f32,
    pub window_height: f32,
    /// Edge length of one grid cell in pixels
    pub tile_size: f32,
    /// Simulation steps per second
    pub ticks_per_second: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_BOARD_PX as f32,
            window_height: DEFAULT_BOARD_PX as f32,
            tile_size: DEFAULT_TILE_PX as f32,
            // one tick every 100ms
            ticks_per_second: 10,
        }
    }
}
