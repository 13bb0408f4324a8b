//! Line-oriented stdin/stdout I/O.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Next input line, or `None` at end of input.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.lines.next_line().await
    }

    /// Print `label` without a newline and read the answer.
    pub async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{label}")?;
        stdout.flush()?;
        self.read_line().await
    }

    pub fn notice(&self, text: &str) {
        println!("  ! {text}");
    }
}
