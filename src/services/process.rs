//! Process spawning for launched apps.
//!
//! Fire-and-forget: the child is reaped on its own thread and failures are
//! only logged.

use capy_apps::{CommandSpawner, LaunchRequest};
use log::{error, info, warn};
use std::process::{Command, Stdio};
use std::thread;

/// Runs launch commands through `sh -c`.
pub struct ShellSpawner {
    shell: String,
}

impl ShellSpawner {
    pub fn new() -> Self {
        Self::with_shell("sh")
    }

    pub fn with_shell(shell: &str) -> Self {
        Self {
            shell: shell.to_string(),
        }
    }
}

impl Default for ShellSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSpawner for ShellSpawner {
    fn spawn(&mut self, request: &LaunchRequest) {
        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(&request.command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                error!("Failed to launch {}: {}", request.app_id, e);
                return;
            }
        };

        info!("Spawned {} (pid {})", request.app_id, child.id());

        let app_id = request.app_id.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                warn!("{} exited with {}", app_id, status);
            }
            Ok(_) => {}
            Err(e) => error!("Failed to wait for {}: {}", app_id, e),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(command: &str) -> LaunchRequest {
        LaunchRequest {
            app_id: "test".to_string(),
            command: command.to_string(),
        }
    }

    #[test]
    fn test_spawn_returns_without_waiting() {
        let start = std::time::Instant::now();
        ShellSpawner::new().spawn(&request("sh -c 'sleep 2'"));
        assert!(start.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_missing_shell_is_logged_not_raised() {
        ShellSpawner::with_shell("/nonexistent/capy-shell").spawn(&request("sh -c 'true'"));
    }
}
