//! Game orchestrator - wires the components into the per-tick API
//!
//! This is the single dispatch point for mode behavior: it owns the board,
//! the rotation cursor, both mode managers, and the score, and it is the
//! only mutator of any of them. External collaborators push one action per
//! call and read value snapshots afterwards.
//!
//! Time is injected: the caller supplies an elapsed delta once per gravity
//! tick and the managers are polled with it. No wall clock is read anywhere.

use crate::core::ghost::project_landing;
use crate::core::grid::{check_removing, intersect, merge, ClearResult};
use crate::core::hazard::HazardManager;
use crate::core::mission::MissionManager;
use crate::core::rng::{BrickSource, SimpleRng};
use crate::core::rotator::RotationCursor;
use crate::core::score::Score;
use crate::core::snapshot::{BoardSnapshot, ModeStatus, TickResult, ViewData};
use crate::types::{
    BoardMatrix, GameMode, Offset, BOARD_HEIGHT, BOARD_WIDTH, SOFT_DROP_SCORE, SPAWN_X, SPAWN_Y,
};

/// Per-board instantiation of the grid clear result
pub type BoardClearResult = ClearResult<BOARD_WIDTH, BOARD_HEIGHT>;

const EMPTY_BOARD: BoardMatrix = [[0; BOARD_WIDTH]; BOARD_HEIGHT];

/// Complete engine state for one session
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardMatrix,
    source: BrickSource,
    cursor: RotationCursor,
    offset: Offset,
    score: Score,
    mode: GameMode,
    /// Lines cleared since the last mode transition
    mode_lines_cleared: u32,
    hazard: HazardManager,
    mission: MissionManager,
    /// RNG for mission selection, independent of the brick stream
    mission_rng: SimpleRng,
    game_over: bool,
}

impl Game {
    /// Create a new session in Classic mode and spawn the first brick
    pub fn new(seed: u32) -> Self {
        let mut source = BrickSource::new(seed);
        let first = source.draw();
        Self {
            board: EMPTY_BOARD,
            cursor: RotationCursor::new(first),
            source,
            offset: Offset::new(SPAWN_X, SPAWN_Y),
            score: Score::new(),
            mode: GameMode::Classic,
            mode_lines_cleared: 0,
            hazard: HazardManager::new(),
            mission: MissionManager::new(),
            mission_rng: SimpleRng::new(seed ^ 0x9E37_79B9),
            game_over: false,
        }
    }

    // ---- queries ------------------------------------------------------

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> i32 {
        self.score.value()
    }

    pub fn hazard(&self) -> &HazardManager {
        &self.hazard
    }

    pub fn mission(&self) -> &MissionManager {
        &self.mission
    }

    /// Read-only copy of the board plus session counters
    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            matrix: self.board,
            score: self.score.value(),
            mode: self.mode,
            game_over: self.game_over,
        }
    }

    /// Raw board matrix copy
    pub fn board_matrix(&self) -> BoardMatrix {
        self.board
    }

    /// Rendering view: active shape, its offset, preview shape, ghost offset
    pub fn view_data(&self) -> ViewData {
        let shape = *self.cursor.current_shape();
        let ghost = (!self.game_over)
            .then(|| project_landing(&self.board, &shape, self.offset));
        ViewData {
            brick: shape,
            offset: self.offset,
            next_brick: *self.source.peek_next().shape(0),
            ghost,
        }
    }

    /// Mode-specific display data
    pub fn mode_status(&self) -> ModeStatus {
        ModeStatus {
            mode: self.mode,
            label: self.mode.label(),
            advance_ready: self.should_advance_mode(),
            hazard_rows: self.hazard.covered_rows::<BOARD_HEIGHT>(),
            remaining_targets: self.mission.remaining_targets(),
            mission_time: self
                .mission
                .is_active()
                .then(|| self.mission.formatted_remaining_time()),
            mission: self.mission.mission(),
        }
    }

    /// Whether the active hazard currently touches placed cells.
    /// Always false outside Hazard-Survival.
    pub fn hazard_collision(&self) -> bool {
        self.hazard.collides_with(&self.board)
    }

    /// Mode-advance criteria: mission completion in Mission mode, the
    /// mode's line quota otherwise.
    pub fn should_advance_mode(&self) -> bool {
        match self.mode {
            GameMode::Mission => self.mission.is_mission_complete(),
            _ => self.mode_lines_cleared >= self.mode.lines_required_to_advance(),
        }
    }

    // ---- per-action operations ---------------------------------------

    /// Try to shift the active brick one column left
    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    /// Try to shift the active brick one column right
    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Try to move the active brick one row down (gravity path, unscored)
    pub fn move_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// User-initiated down move; awards a point when it succeeds
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score.add(SOFT_DROP_SCORE);
        }
        moved
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let probe = self.offset.translated(dx, dy);
        if intersect(&self.board, self.cursor.current_shape(), probe.x, probe.y) {
            return false;
        }
        self.offset = probe;
        true
    }

    /// Try to rotate the active brick. The candidate shape is validated
    /// against the board before committing; a colliding rotation is
    /// rejected outright with no wall-kick search.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.cursor.next_shape();
        if intersect(&self.board, candidate.shape, self.offset.x, self.offset.y) {
            return false;
        }
        self.cursor.commit(candidate.rotation);
        true
    }

    /// Draw the next brick and place it at the spawn offset.
    ///
    /// Returns false when the spawn position itself collides; that is the
    /// primary game-over trigger, and the session is frozen until
    /// `new_game`.
    pub fn spawn_brick(&mut self) -> bool {
        let brick = self.source.draw();
        self.cursor.set_brick(brick);
        self.offset = Offset::new(SPAWN_X, SPAWN_Y);

        if intersect(&self.board, self.cursor.current_shape(), SPAWN_X, SPAWN_Y) {
            log::info!("spawn blocked, game over");
            self.game_over = true;
            return false;
        }
        true
    }

    /// Commit the active brick's cells into the board
    pub fn merge_brick(&mut self) {
        if self.game_over {
            return;
        }
        self.board = merge(
            &self.board,
            self.cursor.current_shape(),
            self.offset.x,
            self.offset.y,
        );
    }

    /// Remove completed rows, award the bonus, and feed the line-clear
    /// bookkeeping of whichever manager is active.
    pub fn clear_rows(&mut self) -> BoardClearResult {
        let result = check_removing(&self.board);
        self.board = result.matrix;

        if result.lines_removed > 0 {
            self.mode_lines_cleared += result.lines_removed;
            self.score.add(result.score_bonus);
            for _ in 0..result.lines_removed {
                self.hazard.record_line_clear();
            }
            self.mission.update_targets(&result.cleared_cells);
            log::debug!(
                "cleared {} lines for {} points",
                result.lines_removed,
                result.score_bonus
            );
        }
        result
    }

    /// Transition to the cyclic successor mode: fresh board, outgoing
    /// manager deactivated, incoming manager activated (with pattern stamp
    /// when entering Mission), new brick spawned.
    pub fn advance_mode(&mut self) {
        self.mode = self.mode.next();
        self.mode_lines_cleared = 0;
        self.board = EMPTY_BOARD;

        self.hazard.deactivate();
        self.mission.deactivate();

        match self.mode {
            GameMode::Classic => {}
            GameMode::HazardSurvival => self.hazard.activate(),
            GameMode::Mission => {
                self.mission.activate(&mut self.mission_rng);
                self.mission.stamp_pattern(&mut self.board);
            }
        }

        log::info!("advanced to {}", self.mode.label());
        self.spawn_brick();
    }

    /// Full reset: fresh board, score 0, Classic mode, both managers inert,
    /// first brick spawned. The RNG streams continue, so restarting does not
    /// replay the previous sequence.
    pub fn new_game(&mut self) {
        self.board = EMPTY_BOARD;
        self.score.reset();
        self.mode = GameMode::Classic;
        self.mode_lines_cleared = 0;
        self.hazard.reset();
        self.mission.deactivate();
        self.game_over = false;
        log::info!("new game");
        self.spawn_brick();
    }

    // ---- gravity tick -------------------------------------------------

    /// One gravity tick: poll the mode managers with the elapsed delta,
    /// then either move the brick down or land it (merge, hazard check,
    /// clear, mode advance, respawn).
    pub fn step_down(&mut self, elapsed_ms: u64) -> TickResult {
        let mut result = TickResult::default();
        if self.game_over {
            result.game_over = true;
            return result;
        }

        self.hazard.advance(elapsed_ms);
        if self.mission.tick(elapsed_ms) {
            log::info!("mission timed out, game over");
            self.game_over = true;
            result.game_over = true;
            return result;
        }

        if self.move_down() {
            result.moved_down = true;
            return result;
        }

        // Landed
        self.merge_brick();
        result.merged = true;

        if self.hazard_collision() {
            log::info!("hazard touched placed cells, game over");
            self.game_over = true;
            result.game_over = true;
            return result;
        }

        let clear = self.clear_rows();
        result.lines_removed = clear.lines_removed;
        result.score_bonus = clear.score_bonus;

        if self.should_advance_mode() {
            self.advance_mode();
        } else {
            self.spawn_brick();
        }
        result.game_over = self.game_over;
        result
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::COLOR_EMPTY;

    fn drop_and_land(game: &mut Game) -> TickResult {
        loop {
            let result = game.step_down(0);
            if result.merged || result.game_over {
                return result;
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(12345);
        assert!(!game.is_game_over());
        assert_eq!(game.mode(), GameMode::Classic);
        assert_eq!(game.score(), 0);
        assert_eq!(game.view_data().offset, Offset::new(SPAWN_X, SPAWN_Y));
        assert!(!game.hazard().is_active());
        assert!(!game.mission().is_active());
    }

    #[test]
    fn test_move_left_right() {
        let mut game = Game::new(12345);
        let x0 = game.view_data().offset.x;

        assert!(game.move_right());
        assert_eq!(game.view_data().offset.x, x0 + 1);
        assert!(game.move_left());
        assert_eq!(game.view_data().offset.x, x0);
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut game = Game::new(12345);
        let mut moves = 0;
        while game.move_left() {
            moves += 1;
            assert!(moves < BOARD_WIDTH, "left wall never reached");
        }
        // Offset unchanged by the rejected move
        let x = game.view_data().offset.x;
        assert!(!game.move_left());
        assert_eq!(game.view_data().offset.x, x);
    }

    #[test]
    fn test_soft_drop_scores_gravity_does_not() {
        let mut game = Game::new(12345);

        assert!(game.soft_drop());
        assert_eq!(game.score(), 1);

        assert!(game.move_down());
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut game = Game::new(12345);
        // Spawned high on an empty board, a full rotation cycle is free
        let shape0 = game.view_data().brick;
        let count = game.cursor.brick().rotation_count();
        for _ in 0..count {
            assert!(game.rotate());
        }
        assert_eq!(game.view_data().brick, shape0);
    }

    #[test]
    fn test_ghost_tracks_x() {
        let mut game = Game::new(12345);
        game.move_right();
        let view = game.view_data();
        let ghost = view.ghost.expect("brick in play");
        assert_eq!(ghost.x, view.offset.x);
        assert!(ghost.y >= view.offset.y);
    }

    #[test]
    fn test_landing_merges_into_board() {
        let mut game = Game::new(12345);
        let result = drop_and_land(&mut game);
        assert!(result.merged);

        let occupied = game
            .board_matrix()
            .iter()
            .flatten()
            .filter(|&&c| c != COLOR_EMPTY)
            .count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_clear_rows_awards_quadratic_bonus() {
        let mut game = Game::new(12345);
        // Hand-fill the bottom row
        for x in 0..BOARD_WIDTH {
            game.board[BOARD_HEIGHT - 1][x] = 1;
        }

        let result = game.clear_rows();
        assert_eq!(result.lines_removed, 1);
        assert_eq!(result.score_bonus, 50);
        assert_eq!(game.score(), 50);
    }

    #[test]
    fn test_classic_advances_after_one_line() {
        let mut game = Game::new(12345);
        for x in 0..BOARD_WIDTH {
            game.board[BOARD_HEIGHT - 1][x] = 1;
        }
        game.clear_rows();

        assert!(game.should_advance_mode());
        game.advance_mode();
        assert_eq!(game.mode(), GameMode::HazardSurvival);
        assert!(game.hazard().is_active());
        assert!(!game.mission().is_active());
        // Fresh board apart from the newly spawned brick (not yet merged)
        assert!(game
            .board_matrix()
            .iter()
            .flatten()
            .all(|&c| c == COLOR_EMPTY));
    }

    #[test]
    fn test_advance_into_mission_stamps_pattern() {
        let mut game = Game::new(12345);
        game.advance_mode(); // -> HazardSurvival
        game.advance_mode(); // -> Mission

        assert_eq!(game.mode(), GameMode::Mission);
        assert!(game.mission().is_active());
        assert!(game.mission().remaining_targets() > 0);
        let stamped = game
            .board_matrix()
            .iter()
            .flatten()
            .filter(|&&c| c == crate::types::COLOR_TARGET)
            .count();
        assert_eq!(stamped, game.mission().remaining_targets());
    }

    #[test]
    fn test_mode_cycle_back_to_classic() {
        let mut game = Game::new(12345);
        game.advance_mode();
        game.advance_mode();
        game.advance_mode();
        assert_eq!(game.mode(), GameMode::Classic);
        assert!(!game.hazard().is_active());
        assert!(!game.mission().is_active());
    }

    #[test]
    fn test_hazard_mode_needs_two_lines() {
        let mut game = Game::new(12345);
        game.advance_mode(); // -> HazardSurvival

        for x in 0..BOARD_WIDTH {
            game.board[BOARD_HEIGHT - 1][x] = 1;
        }
        game.clear_rows();
        assert!(!game.should_advance_mode());

        for x in 0..BOARD_WIDTH {
            game.board[BOARD_HEIGHT - 1][x] = 1;
        }
        game.clear_rows();
        assert!(game.should_advance_mode());
        assert!(game.hazard().is_survive_condition_met());
    }

    #[test]
    fn test_hazard_failure_on_landing() {
        let mut game = Game::new(12345);
        game.advance_mode(); // hazard active, band at rows 0..3

        // Something already placed inside the band
        game.board[1][0] = 1;
        let result = drop_and_land(&mut game);
        assert!(result.game_over);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_mission_timeout_ends_game() {
        let mut game = Game::new(12345);
        game.advance_mode();
        game.advance_mode(); // -> Mission

        let result = game.step_down(crate::types::MISSION_TIME_LIMIT_MS);
        assert!(result.game_over);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_game_over_freezes_mutation() {
        let mut game = Game::new(12345);
        game.game_over = true;

        let offset = game.offset;
        assert!(!game.move_left());
        assert!(!game.move_right());
        assert!(!game.move_down());
        assert!(!game.rotate());
        assert_eq!(game.offset, offset);

        let board = game.board_matrix();
        game.merge_brick();
        assert_eq!(game.board_matrix(), board);

        assert!(game.step_down(16).game_over);
    }

    #[test]
    fn test_new_game_restores_defaults() {
        let mut game = Game::new(12345);
        game.advance_mode();
        game.advance_mode(); // Mission, targets stamped
        game.score.add(777);
        game.game_over = true;

        game.new_game();
        assert!(!game.is_game_over());
        assert_eq!(game.mode(), GameMode::Classic);
        assert_eq!(game.score(), 0);
        assert!(!game.hazard().is_active());
        assert!(!game.mission().is_active());
        assert!(game
            .board_matrix()
            .iter()
            .flatten()
            .all(|&c| c == COLOR_EMPTY));
    }

    #[test]
    fn test_spawn_blocked_is_game_over() {
        let mut game = Game::new(12345);
        // Wall off the spawn rows completely
        for y in 0..4 {
            for x in 0..BOARD_WIDTH {
                game.board[y][x] = 2;
            }
        }
        assert!(!game.spawn_brick());
        assert!(game.is_game_over());
        assert!(game.view_data().ghost.is_none());
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Game::new(99);
        let mut b = Game::new(99);

        for _ in 0..200 {
            let ra = a.step_down(16);
            let rb = b.step_down(16);
            assert_eq!(ra, rb);
        }
        assert_eq!(a.board_matrix(), b.board_matrix());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_mode_status_reports_mission_data() {
        let mut game = Game::new(12345);
        game.advance_mode();
        game.advance_mode();

        let status = game.mode_status();
        assert_eq!(status.mode, GameMode::Mission);
        assert!(status.mission.is_some());
        assert_eq!(status.mission_time.as_deref(), Some("03:00"));
        assert!(status.remaining_targets > 0);
        assert!(status.hazard_rows.is_empty());
    }

    #[test]
    fn test_mode_status_reports_hazard_rows() {
        let mut game = Game::new(12345);
        game.advance_mode();

        let status = game.mode_status();
        assert_eq!(status.mode, GameMode::HazardSurvival);
        assert_eq!(status.hazard_rows, vec![0, 1, 2]);
        assert_eq!(status.mission_time, None);
    }
}
