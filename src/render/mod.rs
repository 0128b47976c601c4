//! Presentation shell: header, transcript tail, runner panel, prompt row.
//! Everything here reads interpreter/runner state and draws; nothing
//! mutates it.

use bracket_terminal::prelude::*;

use crate::runner::{Runner, Status};
use crate::shell::{Theme, TranscriptEntry};

pub const PROMPT: &str = "guest@portfolio:~$";

pub struct Palette {
    pub text: RGB,
    pub prompt: RGB,
    pub input: RGB,
    pub error: RGB,
    pub accent: RGB,
    pub frame: RGB,
    pub background: RGB,
}

pub fn theme_palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: RGB::from_u8(74, 222, 128),
            prompt: RGB::from_u8(96, 165, 255),
            input: RGB::from_u8(74, 222, 128),
            error: RGB::from_u8(248, 113, 113),
            accent: RGB::named(YELLOW),
            frame: RGB::from_u8(90, 90, 90),
            background: RGB::named(BLACK),
        },
        Theme::Light => Palette {
            text: RGB::from_u8(31, 41, 55),
            prompt: RGB::from_u8(37, 99, 235),
            input: RGB::from_u8(126, 34, 206),
            error: RGB::from_u8(220, 38, 38),
            accent: RGB::from_u8(180, 83, 9),
            frame: RGB::from_u8(150, 150, 150),
            background: RGB::from_u8(243, 244, 246),
        },
        Theme::Matrix => Palette {
            text: RGB::from_u8(74, 222, 128),
            prompt: RGB::from_u8(134, 239, 172),
            input: RGB::from_u8(187, 247, 208),
            error: RGB::from_u8(248, 113, 113),
            accent: RGB::from_u8(34, 197, 94),
            frame: RGB::from_u8(21, 128, 61),
            background: RGB::named(BLACK),
        },
    }
}

pub fn draw_header(ctx: &mut BTerm, palette: &Palette, theme: Theme, runner: &Runner) {
    let (width, _) = ctx.get_char_size();
    ctx.draw_box(0, 0, width - 1, 4, palette.frame, palette.background);
    ctx.print_color(
        2,
        1,
        palette.accent,
        palette.background,
        "termfolio · interactive portfolio terminal",
    );
    ctx.print_color(
        2,
        2,
        palette.text,
        palette.background,
        format!("theme: {}", theme.as_str()),
    );
    let status = match runner.status {
        Status::Running => format!("Dino Runner · score {}", runner.score),
        Status::Over => format!("Dino Runner · game over at {} pts", runner.score),
        Status::Idle => "type \"help\" for commands · Ctrl+L clears".to_string(),
    };
    ctx.print_color(2, 3, palette.prompt, palette.background, status);
}

enum LineKind {
    Prompt,
    Output,
    Error,
}

/// Draws the tail of the transcript into rows `top..=bottom`, newest at
/// the bottom, the way a scrolled-to-end terminal reads.
pub fn draw_transcript(
    ctx: &mut BTerm,
    entries: &[TranscriptEntry],
    palette: &Palette,
    top: i32,
    bottom: i32,
) {
    let mut lines: Vec<(String, LineKind)> = Vec::new();
    for entry in entries {
        if !entry.command.is_empty() {
            lines.push((entry.command.clone(), LineKind::Prompt));
        }
        for output in &entry.output {
            let kind = if entry.error {
                LineKind::Error
            } else {
                LineKind::Output
            };
            lines.push((output.clone(), kind));
        }
        lines.push((String::new(), LineKind::Output));
    }

    let rows = (bottom - top + 1).max(0) as usize;
    let skip = lines.len().saturating_sub(rows);
    for (row, (line, kind)) in lines.into_iter().skip(skip).enumerate() {
        let y = top + row as i32;
        match kind {
            LineKind::Prompt => {
                ctx.print_color(1, y, palette.prompt, palette.background, PROMPT);
                ctx.print_color(
                    2 + PROMPT.len() as i32,
                    y,
                    palette.input,
                    palette.background,
                    line,
                );
            }
            LineKind::Output => ctx.print_color(1, y, palette.text, palette.background, line),
            LineKind::Error => ctx.print_color(1, y, palette.error, palette.background, line),
        }
    }
}

/// The bordered game panel. `frame` comes from the engine: live while
/// Running, frozen at Over.
pub fn draw_runner_panel(ctx: &mut BTerm, runner: &Runner, frame: &str, palette: &Palette, top: i32) {
    let cols = runner.config.cols as i32;
    let rows = runner.config.rows as i32;
    ctx.draw_box(1, top, cols + 3, rows + 3, palette.frame, palette.background);

    let title = match runner.status {
        Status::Over => format!("Dino Runner · game over · {} pts", runner.score),
        _ => format!("Dino Runner · score {}", runner.score),
    };
    ctx.print_color(3, top + 1, palette.accent, palette.background, title);

    for (row, line) in frame.lines().enumerate() {
        ctx.print_color(
            3,
            top + 2 + row as i32,
            palette.text,
            palette.background,
            line,
        );
    }
}

pub fn draw_prompt(ctx: &mut BTerm, input: &str, palette: &Palette, y: i32) {
    ctx.print_color(1, y, palette.prompt, palette.background, PROMPT);
    let x = 2 + PROMPT.len() as i32;
    ctx.print_color(x, y, palette.input, palette.background, input);
    ctx.print_color(
        x + input.len() as i32,
        y,
        palette.accent,
        palette.background,
        "_",
    );
}
