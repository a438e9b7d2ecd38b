use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::basic::{board, BoardDim, Cell, Dir};

/// Read-only view of the game state handed to the renderer
pub struct Snapshot<'a> {
    pub head: Cell,
    /// Trailing segments ordered nearest-to-head first
    pub body: &'a VecDeque<Cell>,
    pub apple: Cell,
    /// Number of body segments, the head doesn't count
    pub score: usize,
    pub game_over: bool,
}

pub struct GameState {
    board_dim: BoardDim,

    head: Cell,
    /// Trailing segments, the one right behind the head at the front
    body: VecDeque<Cell>,
    apple: Cell,

    /// Direction the snake is currently going
    dir: Dir,
    /// Set once, never unset
    game_over: bool,

    rng: ThreadRng,
}

impl GameState {
    // every run starts from the same two cells, the rng is first
    // consulted when the apple is relocated
    const INITIAL_HEAD: Cell = Cell { x: 5, y: 5 };
    const INITIAL_APPLE: Cell = Cell { x: 10, y: 10 };

    pub fn new(board_dim: BoardDim) -> Self {
        Self {
            board_dim,
            head: Self::INITIAL_HEAD,
            body: VecDeque::new(),
            apple: Self::INITIAL_APPLE,
            dir: Dir::R,
            game_over: false,
            rng: thread_rng(),
        }
    }

    /// Advance the simulation by one step. Safe to call after the game
    /// has ended, in which case nothing happens.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        // growth happens before the head moves, the new segment starts
        // out on the cell the head is about to vacate
        let ate = self.head == self.apple;
        if ate {
            self.apple = board::random_cell(self.board_dim, &mut self.rng);
        }

        // shift the body as if all segments moved at once: each takes
        // its predecessor's cell, the front one takes the head's
        self.body.push_front(self.head);
        if !ate {
            self.body.pop_back();
        }

        self.head = self.head + self.dir.vector();

        if self.body.contains(&self.head) || !board::contains(self.board_dim, self.head) {
            self.game_over = true;
        }
    }

    /// Change direction starting from the next tick. A request for the
    /// exact reverse of the current direction is ignored; between two
    /// ticks the last accepted request wins.
    pub fn set_direction(&mut self, dir: Dir) {
        if dir != -self.dir {
            self.dir = dir;
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            head: self.head,
            body: &self.body,
            apple: self.apple,
            score: self.body.len(),
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const BOARD_DIM: BoardDim = BoardDim { x: 24, y: 24 };

    fn new_game() -> GameState {
        GameState::new(BOARD_DIM)
    }

    /// Park the apple in a far corner so upcoming ticks can't eat it
    fn park_apple(game: &mut GameState) {
        game.apple = Cell { x: 23, y: 23 };
    }

    /// Force an eating tick by planting the apple under the head
    fn eat(game: &mut GameState) {
        game.apple = game.head;
        game.tick();
    }

    #[test]
    fn test_initial_state() {
        let game = new_game();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.head, Cell { x: 5, y: 5 });
        assert!(snapshot.body.is_empty());
        assert_eq!(snapshot.apple, Cell { x: 10, y: 10 });
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
        assert_eq!(game.dir, Dir::R);
    }

    #[test]
    fn test_plain_movement() {
        let mut game = new_game();
        park_apple(&mut game);
        game.tick();
        assert_eq!(game.head, Cell { x: 6, y: 5 });
        assert!(game.body.is_empty());

        game.set_direction(Dir::D);
        game.tick();
        assert_eq!(game.head, Cell { x: 6, y: 6 });
        assert!(!game.game_over);
    }

    #[test]
    fn test_growth() {
        let mut game = new_game();
        let old_head = game.head;
        eat(&mut game);
        assert_eq!(game.body.len(), 1);
        // the new segment sits on the apple's former cell
        assert_eq!(game.body[0], old_head);
        assert_eq!(game.head, Cell { x: 6, y: 5 });
        assert_eq!(game.snapshot().score, 1);
    }

    #[test]
    fn test_growth_sequence() {
        let mut game = new_game();
        for n in 1..=5 {
            eat(&mut game);
            assert_eq!(game.body.len(), n);
        }
        // head and body all occupy distinct cells
        let mut cells = game.body.iter().copied().collect_vec();
        cells.push(game.head);
        assert!(cells.iter().all_unique());
        assert!(!game.game_over);
    }

    #[test]
    fn test_reversal_guard() {
        for dir in Dir::iter() {
            let mut game = new_game();
            game.dir = dir;
            game.set_direction(-dir);
            assert_eq!(game.dir, dir);

            for other in Dir::iter().filter(|&d| d != -dir) {
                let mut game = new_game();
                game.dir = dir;
                game.set_direction(other);
                assert_eq!(game.dir, other);
            }
        }
    }

    #[test]
    fn test_wall_hit() {
        let mut game = new_game();
        park_apple(&mut game);
        game.head = Cell { x: 0, y: 5 };
        game.dir = Dir::L;
        game.tick();
        assert_eq!(game.head, Cell { x: -1, y: 5 });
        assert!(game.game_over);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut game = new_game();
        park_apple(&mut game);
        game.head = Cell { x: 23, y: 5 };
        game.tick();
        assert!(game.game_over);

        // redundant ticks and inputs change nothing
        let head = game.head;
        let body = game.body.clone();
        let apple = game.apple;
        game.set_direction(Dir::D);
        for _ in 0..10 {
            game.tick();
        }
        assert!(game.game_over);
        assert_eq!(game.head, head);
        assert_eq!(game.body, body);
        assert_eq!(game.apple, apple);
    }

    #[test]
    fn test_self_collision() {
        let mut game = new_game();
        for _ in 0..4 {
            eat(&mut game);
        }
        // head <9, 5>, body [<8, 5>, <7, 5>, <6, 5>, <5, 5>]
        park_apple(&mut game);

        game.set_direction(Dir::D);
        game.tick();
        game.set_direction(Dir::L);
        game.tick();
        game.set_direction(Dir::U);
        game.tick();

        // the head stepped back onto <8, 5> which the body still occupies
        assert!(game.game_over);
        assert_eq!(game.head, Cell { x: 8, y: 5 });
        game.tick();
        assert_eq!(game.head, Cell { x: 8, y: 5 });
    }

    #[test]
    fn test_tail_cell_is_fair_game() {
        // stepping onto the cell the tail vacates in the same tick is
        // legal, the shift happens as if all segments moved at once
        let mut game = new_game();
        for _ in 0..3 {
            eat(&mut game);
        }
        // head <8, 5>, body [<7, 5>, <6, 5>, <5, 5>]
        park_apple(&mut game);

        game.set_direction(Dir::D);
        game.tick();
        game.set_direction(Dir::L);
        game.tick();
        game.set_direction(Dir::U);
        game.tick();

        assert_eq!(game.head, Cell { x: 7, y: 5 });
        assert!(!game.game_over);
    }

    #[test]
    fn test_apple_relocation() {
        let mut stayed = 0;
        for _ in 0..50 {
            let mut game = new_game();
            let old_apple = game.head;
            eat(&mut game);
            assert!(board::contains(BOARD_DIM, game.apple));
            if game.apple == old_apple {
                stayed += 1;
            }
        }
        // relocation may land anywhere, including on the snake, but
        // over many trials it can't always stay put
        assert!(stayed < 50);
    }
}
