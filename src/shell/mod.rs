//! The command interpreter: parses one submitted line, dispatches through
//! a tagged [`CommandAction`], and appends to the append-only transcript.
//! Side effects go through seams (the [`Clipboard`] trait, the polled
//! pending navigation) so everything here runs without a window.

use crate::data::{self, CommandDefinition};
use crate::leaderboard::Leaderboard;
use crate::runner::{Runner, Status};

/// Delay between the `open` confirmation and the actual navigation, so the
/// output is readable before the browser steals focus.
pub const NAV_DELAY_MS: f32 = 1000.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: Vec<String>,
    pub error: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Matrix,
}

impl Theme {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "matrix" => Some(Theme::Matrix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Matrix => "matrix",
        }
    }
}

/// Every recognized command shape. `resolve` turns the lower-cased line
/// into exactly one of these, so dispatch is exhaustive by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction<'a> {
    Blank,
    Clear,
    StartGame,
    JumpGame,
    QuitGame,
    GameLeaderboard,
    CopyEmail,
    DownloadCv,
    SetTheme(&'a str),
    OpenPath(&'a str),
    CatFile(&'a str),
    Static(&'static CommandDefinition),
    Unknown(&'a str),
}

/// Dispatch order mirrors the command surface: literals before prefixed
/// forms before the registry. Expects the trimmed, lower-cased line.
pub fn resolve(line: &str) -> CommandAction<'_> {
    if line.is_empty() {
        return CommandAction::Blank;
    }
    match line {
        "clear" => return CommandAction::Clear,
        "dino" => return CommandAction::StartGame,
        "dino jump" => return CommandAction::JumpGame,
        "dino quit" => return CommandAction::QuitGame,
        "leaderboard dino" => return CommandAction::GameLeaderboard,
        "email" => return CommandAction::CopyEmail,
        "cv" => return CommandAction::DownloadCv,
        _ => {}
    }
    if let Some(arg) = line.strip_prefix("theme ") {
        return CommandAction::SetTheme(arg.trim());
    }
    if let Some(arg) = line.strip_prefix("open ") {
        return CommandAction::OpenPath(arg.trim());
    }
    if let Some(arg) = line.strip_prefix("cat ") {
        return CommandAction::CatFile(arg.trim());
    }
    match data::find(line) {
        Some(def) => CommandAction::Static(def),
        None => CommandAction::Unknown(line),
    }
}

/// Seam for the `email` command. The desktop app backs this with a real
/// clipboard; tests use a mock.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Clone, Debug)]
struct PendingNav {
    path: String,
    remaining_ms: f32,
}

pub struct Interpreter {
    pub transcript: Vec<TranscriptEntry>,
    pub theme: Theme,
    is_submitting: bool,
    pending_nav: Option<PendingNav>,
}

impl Interpreter {
    pub fn new() -> Self {
        let welcome = TranscriptEntry {
            command: String::new(),
            output: data::WELCOME.iter().map(|s| s.to_string()).collect(),
            error: false,
        };
        Self {
            transcript: vec![welcome],
            theme: Theme::default(),
            is_submitting: false,
            pending_nav: None,
        }
    }

    /// One call per Enter press. The latch rejects re-entrant submissions
    /// so at most one command is in flight.
    pub fn submit(
        &mut self,
        raw: &str,
        runner: &mut Runner,
        board: &Leaderboard,
        clipboard: &mut dyn Clipboard,
    ) {
        if self.is_submitting {
            return;
        }
        self.is_submitting = true;
        self.dispatch(raw, runner, board, clipboard);
        self.is_submitting = false;
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Appends an entry with no command line, for engine-originated
    /// messages like the game-over notice.
    pub fn push_system(&mut self, output: Vec<String>) {
        self.transcript.push(TranscriptEntry {
            command: String::new(),
            output,
            error: false,
        });
    }

    /// Counts the pending `open` delay down against frame time. Yields the
    /// target path exactly once, when the delay has elapsed.
    pub fn poll_navigation(&mut self, frame_ms: f32) -> Option<String> {
        let nav = self.pending_nav.as_mut()?;
        nav.remaining_ms -= frame_ms;
        if nav.remaining_ms <= 0.0 {
            return self.pending_nav.take().map(|nav| nav.path);
        }
        None
    }

    fn dispatch(
        &mut self,
        raw: &str,
        runner: &mut Runner,
        board: &Leaderboard,
        clipboard: &mut dyn Clipboard,
    ) {
        let lowered = raw.trim().to_lowercase();
        match resolve(&lowered) {
            CommandAction::Blank => self.push(raw, Vec::new(), false),
            CommandAction::Clear => self.transcript.clear(),
            CommandAction::StartGame => {
                if runner.start() {
                    self.push(
                        raw,
                        vec![
                            "Dino Runner - press [Space]/[Up]/[W] to jump.".to_string(),
                            "Type \"dino quit\" to exit.".to_string(),
                        ],
                        false,
                    );
                } else {
                    self.push(
                        raw,
                        vec!["Dino Runner is already running.".to_string()],
                        false,
                    );
                }
            }
            CommandAction::JumpGame => {
                if runner.status == Status::Running {
                    runner.jump();
                    self.push(raw, vec!["Jump!".to_string()], false);
                } else {
                    self.push(
                        raw,
                        vec!["No dino game running. Start with \"dino\".".to_string()],
                        false,
                    );
                }
            }
            CommandAction::QuitGame => {
                if runner.status == Status::Idle {
                    self.push(raw, vec!["No dino game running.".to_string()], false);
                } else {
                    runner.quit();
                    self.push(raw, vec!["Exited Dino Runner.".to_string()], false);
                }
            }
            CommandAction::GameLeaderboard => {
                let lines = leaderboard_lines(board);
                self.push(raw, lines, false);
            }
            CommandAction::CopyEmail => match clipboard.write_text(data::CONTACT_EMAIL) {
                Ok(()) => self.push(raw, registry_lines("email"), false),
                Err(_) => self.push(
                    raw,
                    vec![
                        "Failed to copy email to clipboard".to_string(),
                        format!("Email: {}", data::CONTACT_EMAIL),
                    ],
                    true,
                ),
            },
            CommandAction::DownloadCv => self.push(raw, registry_lines("cv"), false),
            CommandAction::SetTheme(arg) => match Theme::parse(arg) {
                Some(theme) => {
                    self.theme = theme;
                    let mood = match theme {
                        Theme::Matrix => "Welcome to the Matrix!",
                        Theme::Light => "Light mode activated!",
                        Theme::Dark => "Dark mode activated!",
                    };
                    self.push(
                        raw,
                        vec![
                            format!("Theme changed to: {}", theme.as_str()),
                            String::new(),
                            mood.to_string(),
                        ],
                        false,
                    );
                }
                // misuse is informational, not an error
                None => self.push(raw, theme_usage(self.theme), false),
            },
            CommandAction::OpenPath(path) => {
                if !data::is_nav_path(path) {
                    self.push(raw, open_usage(path), true);
                } else if self.pending_nav.is_some() {
                    // one navigation in flight at a time; the first one
                    // still fires
                    self.push(
                        raw,
                        vec!["Navigation already in progress.".to_string()],
                        false,
                    );
                } else {
                    self.push(
                        raw,
                        vec![
                            format!("Navigating to {path}..."),
                            String::new(),
                            format!("Opening {path} in your browser..."),
                        ],
                        false,
                    );
                    self.pending_nav = Some(PendingNav {
                        path: path.to_string(),
                        remaining_ms: NAV_DELAY_MS,
                    });
                }
            }
            CommandAction::CatFile(filename) => match data::file_target(filename) {
                Some(def) => self.push(raw, to_lines(def.output), false),
                None => self.push(
                    raw,
                    vec![format!("cat: {filename}: No such file or directory")],
                    true,
                ),
            },
            CommandAction::Static(def) => self.push(raw, to_lines(def.output), false),
            CommandAction::Unknown(cmd) => self.push(
                raw,
                vec![
                    format!("bash: {cmd}: command not found"),
                    "Type \"help\" to see available commands.".to_string(),
                ],
                true,
            ),
        }
    }

    fn push(&mut self, command: &str, output: Vec<String>, error: bool) {
        self.transcript.push(TranscriptEntry {
            command: command.to_string(),
            output,
            error,
        });
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_lines(output: &[&str]) -> Vec<String> {
    output.iter().map(|s| s.to_string()).collect()
}

fn registry_lines(name: &str) -> Vec<String> {
    data::find(name).map(|def| to_lines(def.output)).unwrap_or_default()
}

fn theme_usage(current: Theme) -> Vec<String> {
    vec![
        "Theme Command Usage:".to_string(),
        String::new(),
        "  theme light   - Switch to light theme".to_string(),
        "  theme dark    - Switch to dark theme (default)".to_string(),
        "  theme matrix  - Enter the Matrix".to_string(),
        String::new(),
        format!("Current theme: {}", current.as_str()),
        String::new(),
        "Available themes: light, dark, matrix".to_string(),
    ]
}

fn open_usage(path: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Invalid path: {path}"),
        String::new(),
        "Available paths:".to_string(),
    ];
    for (path, blurb) in data::NAV_PATHS {
        lines.push(format!("  {path} - {blurb}"));
    }
    lines
}

fn leaderboard_lines(board: &Leaderboard) -> Vec<String> {
    let top = board.top();
    if top.is_empty() {
        return vec!["No scores yet. Type \"dino\" to play.".to_string()];
    }
    let mut lines = vec!["Leaderboard - Dino (local):".to_string()];
    for (rank, entry) in top.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {:<12}  {} pts  {:.1}s",
            rank + 1,
            entry.name,
            entry.score,
            entry.ms as f64 / 1000.0
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use tempfile::TempDir;

    struct MockClipboard {
        fail: bool,
        copied: Vec<String>,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self {
                fail: false,
                copied: Vec::new(),
            }
        }
    }

    impl Clipboard for MockClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("denied".to_string());
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct Fixture {
        shell: Interpreter,
        runner: Runner,
        board: Leaderboard,
        clipboard: MockClipboard,
        _dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            Self {
                shell: Interpreter::new(),
                runner: Runner::new(RunnerConfig::default()),
                board: Leaderboard::new(dir.path().join("lb_dino.json")),
                clipboard: MockClipboard::new(),
                _dir: dir,
            }
        }

        fn submit(&mut self, line: &str) {
            self.shell
                .submit(line, &mut self.runner, &self.board, &mut self.clipboard);
        }

        fn last(&self) -> &TranscriptEntry {
            self.shell.transcript.last().unwrap()
        }
    }

    #[test]
    fn registry_commands_echo_their_static_output() {
        for def in crate::data::REGISTRY {
            let mut fx = Fixture::new();
            let noisy = format!("  {}  ", def.name.to_uppercase());
            fx.submit(&noisy);
            let entry = fx.last();
            assert_eq!(entry.command, noisy);
            assert!(!entry.error, "{} flagged as error", def.name);
            assert_eq!(entry.output, to_lines(def.output), "{} output", def.name);
        }
    }

    #[test]
    fn help_uppercase_matches_registry() {
        let mut fx = Fixture::new();
        fx.submit("HELP");
        assert!(!fx.last().error);
        assert_eq!(
            fx.last().output,
            to_lines(crate::data::find("help").unwrap().output)
        );
    }

    #[test]
    fn unknown_command_is_error_flagged() {
        let mut fx = Fixture::new();
        fx.submit("frobnicate");
        assert!(fx.last().error);
        assert_eq!(fx.last().output[0], "bash: frobnicate: command not found");
    }

    #[test]
    fn blank_line_appends_blank_entry() {
        let mut fx = Fixture::new();
        let before = fx.shell.transcript.len();
        fx.submit("   ");
        assert_eq!(fx.shell.transcript.len(), before + 1);
        assert!(fx.last().output.is_empty());
        assert!(!fx.last().error);
    }

    #[test]
    fn clear_always_empties_transcript() {
        let mut fx = Fixture::new();
        fx.submit("help");
        fx.submit("ls");
        fx.submit("clear");
        assert!(fx.shell.transcript.is_empty());
        fx.submit("clear");
        assert!(fx.shell.transcript.is_empty());
    }

    #[test]
    fn dino_starts_a_fresh_game() {
        let mut fx = Fixture::new();
        fx.submit("dino");
        assert_eq!(fx.runner.status, Status::Running);
        assert_eq!(fx.runner.score, 0);
        assert!(fx.runner.obstacles.is_empty());
        assert_eq!(fx.runner.dino_y, 0.0);
        assert!(!fx.last().error);
    }

    #[test]
    fn dino_while_running_is_informational() {
        let mut fx = Fixture::new();
        fx.submit("dino");
        fx.submit("dino");
        assert_eq!(fx.runner.status, Status::Running);
        assert!(!fx.last().error);
        assert_eq!(fx.last().output, vec!["Dino Runner is already running."]);
    }

    #[test]
    fn dino_jump_requires_a_running_game() {
        let mut fx = Fixture::new();
        fx.submit("dino jump");
        assert!(!fx.last().error);
        assert_eq!(
            fx.last().output,
            vec!["No dino game running. Start with \"dino\"."]
        );
        fx.submit("dino");
        fx.submit("dino jump");
        assert_eq!(fx.last().output, vec!["Jump!"]);
        assert!(fx.runner.vel_y > 0.0);
    }

    #[test]
    fn dino_quit_resets_to_idle() {
        let mut fx = Fixture::new();
        fx.submit("dino quit");
        assert_eq!(fx.last().output, vec!["No dino game running."]);
        fx.submit("dino");
        fx.submit("dino quit");
        assert_eq!(fx.runner.status, Status::Idle);
        assert_eq!(fx.last().output, vec!["Exited Dino Runner."]);
    }

    #[test]
    fn leaderboard_empty_then_listed() {
        let mut fx = Fixture::new();
        fx.submit("leaderboard dino");
        assert_eq!(fx.last().output, vec!["No scores yet. Type \"dino\" to play."]);

        fx.board.record("guest", 10, 500).unwrap();
        fx.board.record("guest", 15, 900).unwrap();
        fx.submit("leaderboard dino");
        let lines = &fx.last().output;
        assert_eq!(lines[0], "Leaderboard - Dino (local):");
        assert_eq!(lines[1], " 1. guest         15 pts  0.9s");
        assert_eq!(lines[2], " 2. guest         10 pts  0.5s");
    }

    #[test]
    fn email_copies_then_reports() {
        let mut fx = Fixture::new();
        fx.submit("email");
        assert!(!fx.last().error);
        assert_eq!(fx.clipboard.copied, vec![crate::data::CONTACT_EMAIL]);
    }

    #[test]
    fn email_failure_surfaces_the_address() {
        let mut fx = Fixture::new();
        fx.clipboard.fail = true;
        fx.submit("email");
        assert!(fx.last().error);
        assert!(fx.last().output[1].contains(crate::data::CONTACT_EMAIL));
    }

    #[test]
    fn theme_matrix_mutates_current_theme() {
        let mut fx = Fixture::new();
        fx.submit("theme matrix");
        assert_eq!(fx.shell.theme, Theme::Matrix);
        assert!(!fx.last().error);
        assert_eq!(fx.last().output[0], "Theme changed to: matrix");
    }

    #[test]
    fn bogus_theme_is_usage_not_error() {
        let mut fx = Fixture::new();
        fx.submit("theme neon");
        assert_eq!(fx.shell.theme, Theme::Dark);
        assert!(!fx.last().error);
        assert!(fx.last().output.contains(&"Current theme: dark".to_string()));
    }

    #[test]
    fn open_valid_path_navigates_exactly_once_after_delay() {
        let mut fx = Fixture::new();
        fx.submit("open /projects");
        assert!(!fx.last().error);
        assert!(fx.last().output[0].starts_with("Navigating"));
        assert_eq!(fx.shell.poll_navigation(500.0), None);
        assert_eq!(
            fx.shell.poll_navigation(600.0),
            Some("/projects".to_string())
        );
        assert_eq!(fx.shell.poll_navigation(100.0), None);
    }

    #[test]
    fn second_open_while_pending_does_not_displace_the_first() {
        let mut fx = Fixture::new();
        fx.submit("open /projects");
        fx.submit("open /about");
        assert!(!fx.last().error);
        assert_eq!(fx.last().output, vec!["Navigation already in progress."]);
        assert_eq!(
            fx.shell.poll_navigation(1000.0),
            Some("/projects".to_string())
        );
        assert_eq!(fx.shell.poll_navigation(1000.0), None);
        // once the first has fired, open is accepted again
        fx.submit("open /about");
        assert_eq!(fx.shell.poll_navigation(1000.0), Some("/about".to_string()));
    }

    #[test]
    fn open_invalid_path_is_error_with_usage() {
        let mut fx = Fixture::new();
        fx.submit("open /nowhere");
        assert!(fx.last().error);
        assert_eq!(fx.last().output[0], "Invalid path: /nowhere");
        assert!(fx.shell.poll_navigation(2000.0).is_none());
    }

    #[test]
    fn cat_known_file_prints_command_output() {
        let mut fx = Fixture::new();
        fx.submit("cat about.txt");
        assert!(!fx.last().error);
        assert_eq!(
            fx.last().output,
            to_lines(crate::data::find("about").unwrap().output)
        );
    }

    #[test]
    fn cat_unknown_file_is_error() {
        let mut fx = Fixture::new();
        fx.submit("cat nope.txt");
        assert!(fx.last().error);
        assert_eq!(
            fx.last().output,
            vec!["cat: nope.txt: No such file or directory"]
        );
    }

    #[test]
    fn resolve_maps_the_command_surface() {
        assert_eq!(resolve(""), CommandAction::Blank);
        assert_eq!(resolve("clear"), CommandAction::Clear);
        assert_eq!(resolve("dino"), CommandAction::StartGame);
        assert_eq!(resolve("dino jump"), CommandAction::JumpGame);
        assert_eq!(resolve("dino quit"), CommandAction::QuitGame);
        assert_eq!(resolve("leaderboard dino"), CommandAction::GameLeaderboard);
        assert_eq!(resolve("email"), CommandAction::CopyEmail);
        assert_eq!(resolve("cv"), CommandAction::DownloadCv);
        assert_eq!(resolve("theme matrix"), CommandAction::SetTheme("matrix"));
        assert_eq!(resolve("open /about"), CommandAction::OpenPath("/about"));
        assert_eq!(resolve("cat readme.md"), CommandAction::CatFile("readme.md"));
        assert!(matches!(resolve("pwd"), CommandAction::Static(_)));
        assert_eq!(resolve("nope"), CommandAction::Unknown("nope"));
    }
}
