/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Tokenize,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    InvalidCommand(String),
}
