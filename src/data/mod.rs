#![allow(dead_code)]

//! Static command surface of the portfolio terminal: registry output,
//! the `cat` filename table and the `open` allow-list. Pure data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub output: &'static [&'static str],
}

pub const CONTACT_EMAIL: &str = "alex@alexvega.dev";

pub const WELCOME: &[&str] = &[
    "┌─────────────────────────────────────────────────────┐",
    "│             Welcome to Alex's Terminal              │",
    "│                                                     │",
    "│  Explore information about Alex Vega through a      │",
    "│  command line interface. Type \"help\" to get started │",
    "└─────────────────────────────────────────────────────┘",
    "",
];

pub const REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "help",
        description: "Show available commands",
        output: &[
            "Available commands:",
            "",
            "Information:",
            "  about      - Learn about Alex Vega",
            "  skills     - View technical skills",
            "  experience - Show work experience",
            "  projects   - List recent projects",
            "  contact    - Get contact information",
            "  education  - View educational background",
            "  fetch      - Display neofetch-style info card",
            "",
            "Navigation & Actions:",
            "  open       - Navigate to pages (e.g., open /projects)",
            "  cv         - Download CV/resume",
            "  email      - Copy email to clipboard",
            "  social     - Show social media links",
            "",
            "Visual & Fun:",
            "  banner     - Display ASCII banner",
            "  matrix     - Start matrix rain animation",
            "  theme      - Change theme (light/dark/matrix)",
            "  dino       - Play Dino Runner game",
            "  dino quit  - Quit the game",
            "  leaderboard dino - Show local top scores",
            "",
            "System:",
            "  whoami     - Display current user info",
            "  clear      - Clear the terminal",
            "  pwd        - Print working directory",
            "  ls         - List directory contents",
            "  cat        - Display file contents",
            "  help       - Show this help message",
            "",
            "Type any command to get started!",
        ],
    },
    CommandDefinition {
        name: "banner",
        description: "Display ASCII banner",
        output: &[
            "",
            " █████╗ ██╗     ███████╗██╗  ██╗    ██╗   ██╗███████╗ ██████╗  █████╗ ",
            "██╔══██╗██║     ██╔════╝╚██╗██╔╝    ██║   ██║██╔════╝██╔════╝ ██╔══██╗",
            "███████║██║     █████╗   ╚███╔╝     ██║   ██║█████╗  ██║  ███╗███████║",
            "██╔══██║██║     ██╔══╝   ██╔██╗     ╚██╗ ██╔╝██╔══╝  ██║   ██║██╔══██║",
            "██║  ██║███████╗███████╗██╔╝ ██╗     ╚████╔╝ ███████╗╚██████╔╝██║  ██║",
            "╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝      ╚═══╝  ╚══════╝ ╚═════╝ ╚═╝  ╚═╝",
            "",
            "                 Systems & Backend Engineer",
            "                      Lisbon, Portugal",
            "",
        ],
    },
    CommandDefinition {
        name: "fetch",
        description: "Display neofetch-style info card",
        output: &[
            "",
            "         ▄▄▄▄▄▄         alex@portfolio",
            "       ▄████████▄       ──────────────",
            "      ▄██████████▄      OS: Portfolio v2026",
            "      ██▀▀████▀▀██      Host: Lisbon, Portugal",
            "      ██  ████  ██      Kernel: Systems Engineer",
            "      ▀██████████▀      Uptime: 9+ years coding",
            "       ▀████████▀       Packages: Rust, Go, Postgres",
            "         ▀▀▀▀▀▀         Shell: termfolio",
            "                        Resolution: Reliable Services",
            "                        Memory: Constantly Learning",
            "                        CPU: Problem Solver",
            "",
        ],
    },
    CommandDefinition {
        name: "matrix",
        description: "Start matrix rain animation",
        output: &[
            "MATRIX MODE AVAILABLE",
            "",
            "░░░░░░░▓▓▓▓▓▓▓▓░░░░░░░",
            "░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░░",
            "░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░",
            "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
            "░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░",
            "░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░░",
            "░░░░░░░▓▓▓▓▓▓▓▓░░░░░░░",
            "",
            "Reality is that which, when you stop believing in it,",
            "doesn't go away. - Philip K. Dick",
            "",
            "Type \"theme matrix\" to enter, \"theme dark\" to leave.",
        ],
    },
    CommandDefinition {
        name: "theme",
        description: "Change theme",
        output: &[
            "Theme Command Usage:",
            "",
            "  theme light   - Switch to light theme",
            "  theme dark    - Switch to dark theme (default)",
            "  theme matrix  - Enter the Matrix",
            "",
            "Example: theme matrix",
        ],
    },
    CommandDefinition {
        name: "social",
        description: "Show social media links",
        output: &[
            "Social Media & Links:",
            "",
            "GitHub:    https://github.com/alexvega",
            "LinkedIn:  https://linkedin.com/in/alexvega",
            "Website:   https://alexvega.dev",
            "Email:     alex@alexvega.dev",
            "",
            "Tip: Use \"email\" to copy the address to your clipboard",
            "Tip: Use \"open /projects\" to view my work",
        ],
    },
    CommandDefinition {
        name: "email",
        description: "Copy email to clipboard",
        output: &[
            "Email copied to clipboard!",
            "",
            "alex@alexvega.dev",
            "",
            "Feel free to reach out for opportunities or collaborations!",
        ],
    },
    CommandDefinition {
        name: "cv",
        description: "Download CV/resume",
        output: &[
            "Downloading CV...",
            "",
            "Download started: alex_vega_cv.pdf",
            "",
            "Opening PDF in your viewer...",
        ],
    },
    CommandDefinition {
        name: "open",
        description: "Navigate to pages",
        output: &[
            "Navigation Command Usage:",
            "",
            "  open /projects    - View my projects",
            "  open /about       - Learn about me",
            "  open /experience  - See my work history",
            "  open /contact     - Get in touch",
            "  open /terminal    - Stay here (you are here!)",
            "",
            "Example: open /projects",
        ],
    },
    CommandDefinition {
        name: "about",
        description: "Learn about Alex Vega",
        output: &[
            "Alex Vega - Systems & Backend Engineer",
            "",
            "Hello! I'm Alex, a Lisbon-based engineer who likes building",
            "reliable infrastructure and the occasional terminal toy. I've",
            "been coding since 2017, working on storage engines, network",
            "services and data pipelines.",
            "",
            "I believe the command line is still the most honest user",
            "interface ever shipped, and this page is my small tribute.",
        ],
    },
    CommandDefinition {
        name: "skills",
        description: "View technical skills",
        output: &[
            "Technical Skills:",
            "",
            "Systems:",
            "  ├── Rust",
            "  ├── Go",
            "  ├── C",
            "  └── Linux internals",
            "",
            "Backend:",
            "  ├── PostgreSQL",
            "  ├── Redis",
            "  ├── gRPC",
            "  └── Kafka",
            "",
            "Tools & Cloud:",
            "  ├── Docker",
            "  ├── Kubernetes",
            "  ├── AWS",
            "  └── Git",
        ],
    },
    CommandDefinition {
        name: "experience",
        description: "Show work experience",
        output: &[
            "Work Experience:",
            "",
            "2024 - Present  │ Staff Engineer @ Harborline",
            "                │ • Designed multi-region storage replication",
            "                │ • Cut p99 read latency by 60%",
            "                │ • Lead a team of 4 on the data plane",
            "",
            "2020 - 2024     │ Backend Engineer @ Tidewater Labs",
            "                │ • Built streaming ingestion for 2B events/day",
            "                │ • Owned the internal job scheduler",
            "",
            "2017 - 2020     │ Software Developer @ Miradouro Systems",
            "                │ • Shipped embedded telemetry firmware",
            "                │ • Mentored junior developers",
        ],
    },
    CommandDefinition {
        name: "projects",
        description: "List recent projects",
        output: &[
            "Recent Projects:",
            "",
            "termfolio",
            "   This terminal. A command interpreter with a runner game inside.",
            "   Tech: Rust, bracket-terminal",
            "",
            "quayside",
            "   Append-only log store with tiered compaction",
            "   Tech: Rust, io_uring",
            "",
            "gullwing",
            "   Lightweight service mesh sidecar",
            "   Tech: Go, eBPF",
            "",
            "View more at: /projects",
        ],
    },
    CommandDefinition {
        name: "contact",
        description: "Get contact information",
        output: &[
            "Contact Information:",
            "",
            "Email:    alex@alexvega.dev",
            "LinkedIn: linkedin.com/in/alexvega",
            "GitHub:   github.com/alexvega",
            "Website:  alexvega.dev",
            "Location: Lisbon, Portugal",
            "",
            "Feel free to reach out for collaborations or opportunities!",
        ],
    },
    CommandDefinition {
        name: "education",
        description: "View educational background",
        output: &[
            "Education:",
            "",
            "2019 - 2020  │ MSc in Distributed Systems",
            "             │ Instituto Superior Técnico, Lisbon",
            "             │ • Thesis on consensus under partial synchrony",
            "",
            "2015 - 2019  │ BSc in Computer Engineering",
            "             │ University of Porto",
            "             │ • Strong foundation in operating systems",
        ],
    },
    CommandDefinition {
        name: "whoami",
        description: "Display current user info",
        output: &[
            "guest@portfolio:~$ whoami",
            "guest",
            "",
            "You are currently exploring Alex Vega's interactive terminal.",
            "Type \"help\" to see available commands.",
        ],
    },
    CommandDefinition {
        name: "pwd",
        description: "Print working directory",
        output: &["/home/alex/portfolio"],
    },
    CommandDefinition {
        name: "ls",
        description: "List directory contents",
        output: &[
            "total 7",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 about.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 skills.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 experience.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 projects.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 contact.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 education.txt",
            "-rw-r--r--  1 alex alex 1024 Aug 23 2026 README.md",
            "",
            "Use \"cat <filename>\" to read file contents",
        ],
    },
];

/// `cat` filename -> registry command name.
pub const FILE_TABLE: &[(&str, &str)] = &[
    ("about.txt", "about"),
    ("skills.txt", "skills"),
    ("experience.txt", "experience"),
    ("projects.txt", "projects"),
    ("contact.txt", "contact"),
    ("education.txt", "education"),
    ("readme.md", "help"),
];

/// `open` allow-list: (path, blurb for the usage/error text).
pub const NAV_PATHS: &[(&str, &str)] = &[
    ("/projects", "View my projects"),
    ("/about", "Learn about me"),
    ("/experience", "See my work history"),
    ("/contact", "Get in touch"),
    ("/terminal", "Stay here"),
    ("/stats", "View GitHub stats"),
    ("/fun", "Fun interactive features"),
];

pub fn find(name: &str) -> Option<&'static CommandDefinition> {
    REGISTRY.iter().find(|def| def.name == name)
}

pub fn file_target(filename: &str) -> Option<&'static CommandDefinition> {
    FILE_TABLE
        .iter()
        .find(|(file, _)| *file == filename)
        .and_then(|(_, command)| find(command))
}

pub fn is_nav_path(path: &str) -> bool {
    NAV_PATHS.iter().any(|(p, _)| *p == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_names_are_unique() {
        let mut seen = HashSet::new();
        for def in REGISTRY {
            assert!(seen.insert(def.name), "duplicate command {}", def.name);
        }
    }

    #[test]
    fn file_table_targets_resolve() {
        for (file, command) in FILE_TABLE {
            assert!(find(command).is_some(), "{file} points at missing {command}");
        }
        assert_eq!(file_target("readme.md").map(|d| d.name), Some("help"));
        assert!(file_target("nope.txt").is_none());
    }

    #[test]
    fn nav_paths_are_rooted() {
        for (path, _) in NAV_PATHS {
            assert!(path.starts_with('/'));
        }
        assert!(is_nav_path("/projects"));
        assert!(!is_nav_path("projects"));
    }
}
