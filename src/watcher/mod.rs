//! Snippet source file watching for `preview --watch`.
//!
//! Editors often save with several writes or a rename; events are collected
//! until the file has been quiet for the debounce window.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches one file and reports debounced changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    target: PathBuf,
    debounce: Duration,
    last_change: Option<Instant>,
}

impl FileWatcher {
    /// Watch `path`. The parent directory is watched so atomic-rename saves
    /// are seen too.
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be created or the directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        let path = path.as_ref();
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let directory = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&directory, RecursiveMode::NonRecursive)?;
        tracing::debug!(target = %target.display(), "watching snippet source");

        Ok(Self {
            _watcher: watcher,
            events,
            target,
            debounce,
            last_change: None,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target
    }

    /// Drain pending events. Returns true once the file changed and has been
    /// quiet for the debounce window.
    pub fn take_change_ready(&mut self) -> bool {
        self.take_change_ready_at(Instant::now())
    }

    fn take_change_ready_at(&mut self, now: Instant) -> bool {
        while let Ok(event) = self.events.try_recv() {
            match event {
                Ok(event) if self.is_relevant(&event) => {
                    self.last_change = Some(now);
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "file watch error");
                    crate::perf::log_event("watcher.error", err.to_string());
                }
            }
        }

        match self.last_change {
            Some(changed) if now.duration_since(changed) >= self.debounce => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }

    fn is_relevant(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        let name = self.target.file_name();
        event
            .paths
            .iter()
            .any(|path| path == &self.target || (name.is_some() && path.file_name() == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, ModifyKind};
    use tempfile::tempdir;

    fn event(kind: EventKind, path: PathBuf) -> Event {
        Event {
            kind,
            paths: vec![path],
            attrs: notify::event::EventAttributes::new(),
        }
    }

    #[test]
    fn test_events_for_other_files_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.ts");
        std::fs::write(&path, "let a = 1;").unwrap();
        let watcher = FileWatcher::new(&path, Duration::from_millis(10)).unwrap();

        let other = watcher.target_path().with_file_name("other.ts");
        assert!(!watcher.is_relevant(&event(EventKind::Modify(ModifyKind::Any), other)));
        assert!(watcher.is_relevant(&event(
            EventKind::Modify(ModifyKind::Any),
            watcher.target_path().to_path_buf()
        )));
    }

    #[test]
    fn test_events_on_the_parent_directory_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.ts");
        std::fs::write(&path, "x").unwrap();
        let mut watcher = FileWatcher::new(&path, Duration::from_millis(10)).unwrap();

        let directory = watcher.target_path().parent().unwrap().to_path_buf();
        assert!(!watcher.is_relevant(&event(EventKind::Modify(ModifyKind::Any), directory)));

        std::thread::sleep(Duration::from_millis(100));
        std::fs::write(dir.path().join("neighbour.ts"), "y").unwrap();
        std::thread::sleep(Duration::from_millis(300));
        assert!(!watcher.take_change_ready());
    }

    #[test]
    fn test_access_events_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.ts");
        std::fs::write(&path, "x").unwrap();
        let watcher = FileWatcher::new(&path, Duration::from_millis(10)).unwrap();
        let target = watcher.target_path().to_path_buf();
        assert!(!watcher.is_relevant(&event(EventKind::Access(AccessKind::Any), target)));
    }

    #[test]
    fn test_change_waits_for_debounce_window() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.ts");
        std::fs::write(&path, "x").unwrap();
        let mut watcher = FileWatcher::new(&path, Duration::from_millis(100)).unwrap();

        let start = Instant::now();
        watcher.last_change = Some(start);
        assert!(!watcher.take_change_ready_at(start + Duration::from_millis(50)));
        assert!(watcher.take_change_ready_at(start + Duration::from_millis(100)));
        assert!(!watcher.take_change_ready_at(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_real_file_modification_detected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snippet.ts");
        std::fs::write(&path, "original").unwrap();
        let mut watcher = FileWatcher::new(&path, Duration::from_millis(50)).unwrap();

        std::thread::sleep(Duration::from_millis(300));
        std::fs::write(&path, "modified").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut detected = false;
        while Instant::now() < deadline {
            if watcher.take_change_ready() {
                detected = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        assert!(detected, "watcher should report the modification within 5 seconds");
    }
}
