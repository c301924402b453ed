//! Recognition of reserved REPL commands.

/// One line of user input, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    History,
    Clear,
    Exit,
    /// Anything that is not a reserved word; holds the trimmed line.
    Calculate(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a line. Returns `None` for empty or whitespace-only input.
    ///
    /// Reserved words are matched case-insensitively after trimming.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcline::calculator::Command;
    ///
    /// assert_eq!(Command::parse("  HISTORY "), Some(Command::History));
    /// assert_eq!(Command::parse("5 + 3"), Some(Command::Calculate("5 + 3")));
    /// assert_eq!(Command::parse("   "), None);
    /// ```
    pub fn parse(input: &'a str) -> Option<Self> {
        let line = input.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "help" => Self::Help,
            "history" => Self::History,
            "clear" => Self::Clear,
            "exit" => Self::Exit,
            _ => Self::Calculate(line),
        };
        Some(command)
    }
}
