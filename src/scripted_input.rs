use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Replays a file of command lines into the terminal, one per interval.
/// Blank lines and `#` comments are skipped. Handy for demos and smoke
/// runs without typing.
pub struct ScriptedInput {
    script_lines: Vec<String>,
    current_line_index: usize,
}

impl ScriptedInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut script_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            script_lines.push(trimmed.to_string());
        }

        Ok(Self {
            script_lines,
            current_line_index: 0,
        })
    }

    pub fn next_line(&mut self) -> Option<String> {
        if self.current_line_index < self.script_lines.len() {
            let line = self.script_lines[self.current_line_index].clone();
            self.current_line_index += 1;
            Some(line)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# warmup").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "help").unwrap();
        writeln!(file, "  dino  ").unwrap();

        let mut script = ScriptedInput::from_file(&path).unwrap();
        assert_eq!(script.next_line().as_deref(), Some("help"));
        assert_eq!(script.next_line().as_deref(), Some("dino"));
        assert_eq!(script.next_line(), None);
    }
}
