use std::process::Command;

use crate::error::Result;

/// Best-effort open of an attached document in the platform's default
/// viewer. The path is opaque; nothing is checked beyond the spawn.
pub fn open_attachment(path: &str) -> Result<()> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    Command::new(program).arg(path).spawn()?;
    Ok(())
}
