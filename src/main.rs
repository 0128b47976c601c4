mod config;
mod data;
mod leaderboard;
mod render;
mod runner;
mod scripted_input;
mod shell;

use bracket_random::prelude::RandomNumberGenerator;
use bracket_terminal::prelude::*;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use leaderboard::Leaderboard;
use render::Palette;
use runner::{GameOver, Runner, Status};
use scripted_input::ScriptedInput;
use shell::{Clipboard, Interpreter};

const TRANSCRIPT_TOP: i32 = 6;
const INPUT_ROW: i32 = 48;
const RUNNER_PANEL_TOP: i32 = 36;
const INPUT_MAX_LEN: usize = 70;
const SCRIPT_FRAME_INTERVAL: u64 = 30;

/// Real clipboard behind the shell's seam. Created lazily: headless
/// sessions have no clipboard and the failure must reach the transcript,
/// not crash the app.
struct DesktopClipboard {
    inner: Option<arboard::Clipboard>,
}

impl DesktopClipboard {
    fn new() -> Self {
        Self { inner: None }
    }
}

impl Clipboard for DesktopClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = match arboard::Clipboard::new() {
                Ok(clipboard) => Some(clipboard),
                Err(err) => return Err(err.to_string()),
            };
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string()).map_err(|e| e.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

struct TermState {
    shell: Interpreter,
    runner: Runner,
    leaderboard: Leaderboard,
    rng: RandomNumberGenerator,
    clipboard: DesktopClipboard,
    input: String,
    site_url: String,
    player_name: String,
    script: Option<ScriptedInput>,
    frame: u64,
}

impl TermState {
    fn new(config: AppConfig, script: Option<ScriptedInput>) -> Self {
        Self {
            shell: Interpreter::new(),
            runner: Runner::new(config.runner),
            leaderboard: Leaderboard::new(&config.leaderboard_path),
            rng: RandomNumberGenerator::new(),
            clipboard: DesktopClipboard::new(),
            input: String::new(),
            site_url: config.site_url.trim_end_matches('/').to_string(),
            player_name: config.player_name,
            script,
            frame: 0,
        }
    }
}

impl GameState for TermState {
    fn tick(&mut self, ctx: &mut BTerm) {
        self.frame = self.frame.wrapping_add(1);
        self.handle_input(ctx);
        self.feed_script();

        if let Some(over) = self.runner.advance(ctx.frame_time_ms, &mut self.rng) {
            self.record_game_over(over);
        }
        if let Some(path) = self.shell.poll_navigation(ctx.frame_time_ms) {
            self.navigate(&path);
        }

        let palette = render::theme_palette(self.shell.theme);
        ctx.cls_bg(palette.background);
        self.draw_scene(ctx, &palette);
    }
}

impl TermState {
    fn handle_input(&mut self, ctx: &mut BTerm) {
        let Some(key) = ctx.key else {
            return;
        };

        if ctx.control && key == VirtualKeyCode::L {
            self.shell.clear_transcript();
            return;
        }

        // jump keys take precedence over line editing while a game runs
        if self.runner.status == Status::Running
            && matches!(
                key,
                VirtualKeyCode::Space | VirtualKeyCode::Up | VirtualKeyCode::W
            )
        {
            self.runner.jump();
            return;
        }

        match key {
            VirtualKeyCode::Return => {
                let line = std::mem::take(&mut self.input);
                self.submit_line(&line);
            }
            VirtualKeyCode::Back => {
                self.input.pop();
            }
            _ => {
                if let Some(ch) = keycode_to_char(key) {
                    if self.input.len() < INPUT_MAX_LEN {
                        self.input.push(ch);
                    }
                }
            }
        }
    }

    fn submit_line(&mut self, line: &str) {
        self.shell.submit(
            line,
            &mut self.runner,
            &self.leaderboard,
            &mut self.clipboard,
        );
    }

    fn feed_script(&mut self) {
        if self.frame % SCRIPT_FRAME_INTERVAL != 0 {
            return;
        }
        let Some(script) = self.script.as_mut() else {
            return;
        };
        if let Some(line) = script.next_line() {
            self.input.clear();
            self.submit_line(&line);
        } else {
            self.script = None;
        }
    }

    fn record_game_over(&mut self, over: GameOver) {
        if let Err(err) = self
            .leaderboard
            .record(&self.player_name, over.score, over.elapsed_ms)
        {
            tracing::warn!(error = %err, "failed to persist dino score");
        }
        self.shell.push_system(vec![
            format!(
                "Game over - {} pts in {:.1}s.",
                over.score,
                over.elapsed_ms as f64 / 1000.0
            ),
            "Type \"dino\" to play again or \"leaderboard dino\" for top scores.".to_string(),
        ]);
    }

    fn navigate(&mut self, path: &str) {
        let url = format!("{}{}", self.site_url, path);
        if let Err(err) = open::that(&url) {
            tracing::warn!(error = %err, url = %url, "failed to open browser");
            self.shell
                .push_system(vec![format!("Could not open {url} in a browser.")]);
        }
    }

    fn draw_scene(&mut self, ctx: &mut BTerm, palette: &Palette) {
        render::draw_header(ctx, palette, self.shell.theme, &self.runner);

        let game_frame = self.runner.frame();
        let transcript_bottom = if game_frame.is_some() {
            RUNNER_PANEL_TOP - 2
        } else {
            INPUT_ROW - 2
        };
        render::draw_transcript(
            ctx,
            &self.shell.transcript,
            palette,
            TRANSCRIPT_TOP,
            transcript_bottom,
        );

        if let Some(frame) = game_frame {
            render::draw_runner_panel(ctx, &self.runner, &frame, palette, RUNNER_PANEL_TOP);
        }

        render::draw_prompt(ctx, &self.input, palette, INPUT_ROW);
    }
}

fn keycode_to_char(key: VirtualKeyCode) -> Option<char> {
    match key {
        VirtualKeyCode::A => Some('a'),
        VirtualKeyCode::B => Some('b'),
        VirtualKeyCode::C => Some('c'),
        VirtualKeyCode::D => Some('d'),
        VirtualKeyCode::E => Some('e'),
        VirtualKeyCode::F => Some('f'),
        VirtualKeyCode::G => Some('g'),
        VirtualKeyCode::H => Some('h'),
        VirtualKeyCode::I => Some('i'),
        VirtualKeyCode::J => Some('j'),
        VirtualKeyCode::K => Some('k'),
        VirtualKeyCode::L => Some('l'),
        VirtualKeyCode::M => Some('m'),
        VirtualKeyCode::N => Some('n'),
        VirtualKeyCode::O => Some('o'),
        VirtualKeyCode::P => Some('p'),
        VirtualKeyCode::Q => Some('q'),
        VirtualKeyCode::R => Some('r'),
        VirtualKeyCode::S => Some('s'),
        VirtualKeyCode::T => Some('t'),
        VirtualKeyCode::U => Some('u'),
        VirtualKeyCode::V => Some('v'),
        VirtualKeyCode::W => Some('w'),
        VirtualKeyCode::X => Some('x'),
        VirtualKeyCode::Y => Some('y'),
        VirtualKeyCode::Z => Some('z'),
        VirtualKeyCode::Key0 => Some('0'),
        VirtualKeyCode::Key1 => Some('1'),
        VirtualKeyCode::Key2 => Some('2'),
        VirtualKeyCode::Key3 => Some('3'),
        VirtualKeyCode::Key4 => Some('4'),
        VirtualKeyCode::Key5 => Some('5'),
        VirtualKeyCode::Key6 => Some('6'),
        VirtualKeyCode::Key7 => Some('7'),
        VirtualKeyCode::Key8 => Some('8'),
        VirtualKeyCode::Key9 => Some('9'),
        VirtualKeyCode::Space => Some(' '),
        VirtualKeyCode::Period => Some('.'),
        VirtualKeyCode::Slash => Some('/'),
        VirtualKeyCode::Minus => Some('-'),
        _ => None,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> BError {
    init_tracing();
    let config = config::load();
    let script = match std::env::args().nth(1) {
        Some(path) => match ScriptedInput::from_file(&path) {
            Ok(script) => Some(script),
            Err(err) => {
                tracing::warn!(error = %err, path = %path, "could not read script file");
                None
            }
        },
        None => None,
    };

    let context = BTermBuilder::simple80x50()
        .with_title("termfolio · portfolio terminal")
        .build()?;
    let state = TermState::new(config, script);
    main_loop(context, state)
}
