//! The Dino Runner engine: a fixed-tick simulation that runs independently
//! of the command interpreter. The rendering layer only ever calls
//! [`Runner::advance`] with elapsed wall-clock time and reads
//! [`Runner::frame`]; it never owns the tick loop.

use std::time::Instant;

use bracket_random::prelude::RandomNumberGenerator;
use smallvec::SmallVec;

use crate::config::RunnerConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Over,
}

/// Emitted once, on the tick whose collision ends the game.
#[derive(Clone, Debug)]
pub struct GameOver {
    pub score: u32,
    pub elapsed_ms: u64,
}

pub struct Runner {
    pub config: RunnerConfig,
    pub status: Status,
    pub score: u32,
    pub dino_y: f32,
    pub vel_y: f32,
    pub obstacles: SmallVec<[f32; 8]>,
    pub speed: f32,
    pub ticks_since_spawn: u32,
    pub last_frame: Option<String>,
    started_at: Option<Instant>,
    accumulator_ms: f32,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            status: Status::Idle,
            score: 0,
            dino_y: 0.0,
            vel_y: 0.0,
            obstacles: SmallVec::new(),
            speed: config.start_speed,
            // primed so the first eligible tick spawns immediately
            ticks_since_spawn: 999,
            last_frame: None,
            started_at: None,
            accumulator_ms: 0.0,
        }
    }

    /// Resets everything and enters Running. Refused while a game is
    /// already in progress.
    pub fn start(&mut self) -> bool {
        if self.status == Status::Running {
            return false;
        }
        *self = Self::new(self.config);
        self.status = Status::Running;
        self.started_at = Some(Instant::now());
        true
    }

    /// Back to Idle from any state, discarding the frozen frame. No tick
    /// can run afterwards: `advance` is a no-op outside Running.
    pub fn quit(&mut self) {
        *self = Self::new(self.config);
    }

    /// The single jump operation shared by the key handler and the
    /// `dino jump` command. Ignored mid-air and outside Running.
    pub fn jump(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        if self.dino_y > self.config.ground_tolerance {
            return false;
        }
        self.vel_y = self.config.jump_velocity;
        true
    }

    /// Accumulates frame time and runs as many fixed ticks as fit.
    pub fn advance(
        &mut self,
        frame_ms: f32,
        rng: &mut RandomNumberGenerator,
    ) -> Option<GameOver> {
        if self.status != Status::Running {
            return None;
        }
        self.accumulator_ms += frame_ms;
        while self.accumulator_ms >= self.config.tick_ms {
            self.accumulator_ms -= self.config.tick_ms;
            if let Some(over) = self.step(rng) {
                self.accumulator_ms = 0.0;
                return Some(over);
            }
        }
        None
    }

    /// One simulation tick: physics, scroll, spawn, collision, scoring.
    /// Total over every reachable state; outside Running it does nothing.
    pub fn step(&mut self, rng: &mut RandomNumberGenerator) -> Option<GameOver> {
        if self.status != Status::Running {
            return None;
        }
        let cfg = self.config;

        self.vel_y += cfg.gravity;
        self.dino_y = (self.dino_y + self.vel_y).max(0.0);
        if self.dino_y <= 0.0 {
            // landing rule: velocity does not bounce
            self.dino_y = 0.0;
            self.vel_y = 0.0;
        }

        for x in self.obstacles.iter_mut() {
            *x -= self.speed;
        }
        self.obstacles.retain(|x| *x > -1.0);

        let right_edge = cfg.cols as f32;
        let can_spawn = self.ticks_since_spawn > cfg.min_spawn_ticks
            && self
                .obstacles
                .last()
                .is_none_or(|x| *x < right_edge - cfg.spawn_gap);
        if can_spawn {
            let jitter = rng.rand::<f32>() * cfg.spawn_jitter;
            self.obstacles.push(right_edge + jitter);
            self.ticks_since_spawn = 0;
        } else {
            self.ticks_since_spawn += 1;
        }

        let col = cfg.player_col as f32;
        let hit = self.dino_y < cfg.clearance
            && self.obstacles.iter().any(|x| *x >= col && *x < col + 1.0);

        self.speed = (self.speed + cfg.speed_increment).min(cfg.max_speed);

        if hit {
            self.status = Status::Over;
            self.last_frame = Some(render_frame(self));
            Some(GameOver {
                score: self.score,
                elapsed_ms: self.elapsed_ms(),
            })
        } else {
            self.score += 1;
            None
        }
    }

    /// Running: a fresh render of live state. Over: the frozen final
    /// frame. Idle: nothing.
    pub fn frame(&self) -> Option<String> {
        match self.status {
            Status::Running => Some(render_frame(self)),
            Status::Over => self.last_frame.clone(),
            Status::Idle => None,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Pure text rendering of a runner state into a fixed grid. Ground row of
/// `_`, obstacles as `█` one row above it, the player `D` at a fixed
/// column offset upward by its clamped height.
pub fn render_frame(runner: &Runner) -> String {
    // runs inside the tick at collision time, so it must hold up even
    // against a degenerate config
    let cols = (runner.config.cols as usize).max(1);
    let rows = (runner.config.rows as usize).max(2);
    let mut grid = vec![vec![' '; cols]; rows];

    for cell in grid[rows - 1].iter_mut() {
        *cell = '_';
    }

    for &x in &runner.obstacles {
        let xi = x.floor() as i32;
        if xi >= 0 && (xi as usize) < cols {
            grid[rows - 2][xi as usize] = '█';
        }
    }

    let dy = (runner.dino_y.floor() as i32).clamp(0, 3) as usize;
    let dino_row = (rows - 2).saturating_sub(dy);
    let dino_col = (runner.config.player_col as usize).min(cols - 1);
    grid[dino_row][dino_col] = 'D';

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
