use crate::prompt::LineInput;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// [`LineInput`] that replays canned answers and records the prompts it saw.
///
/// Running out of answers behaves like end of input (an empty line).
#[derive(Debug, Default)]
pub(crate) struct ScriptedInput {
    answers: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
    pub(crate) closed: bool,
}

impl ScriptedInput {
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl LineInput for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        assert!(!self.closed, "asked '{}' after the input was closed", prompt);
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// [`LineInput`] whose reads always fail.
pub(crate) struct BrokenInput;

impl LineInput for BrokenInput {
    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}
