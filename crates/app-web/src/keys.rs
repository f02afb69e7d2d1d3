/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Reset,
    ToggleMirror,
    NextCamera,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "r" | "R" => Some(KeyCommand::Reset),
        "m" | "M" => Some(KeyCommand::ToggleMirror),
        "c" | "C" => Some(KeyCommand::NextCamera),
        "Enter" => Some(KeyCommand::ToggleFullscreen),
        "Escape" => Some(KeyCommand::ExitFullscreen),
        _ => None,
    }
}
