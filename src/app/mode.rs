/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the input buffer
    Editing,
    /// Typing a `:` or `@` command into the command deck
    Command,
    /// Scrolling the output pane
    Viewing,
    Quit,
}
