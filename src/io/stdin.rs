//! Process-wide stdin reference.
//!
//! Every default [`SourceResolver`](crate::SourceResolver) reads the sentinel
//! path through [`ProcessStdin`], which delegates to the provider stored here.
//! The provider is the real OS stdin unless a test installs a replacement with
//! [`replace_stdin`]. Production code never reassigns it.

use std::cell::Cell;
use std::io::{self, Read};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, RwLock};

use super::{InputProvider, StdinInput};
use crate::STDIN_SENTINEL;

static CURRENT: LazyLock<RwLock<Arc<dyn InputProvider>>> =
    LazyLock::new(|| RwLock::new(Arc::new(StdinInput::new())));

// Held by every live StdinGuard so substitutions never overlap.
static SWAP_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    static GUARD_HELD: Cell<bool> = const { Cell::new(false) };
}

/// Returns the provider currently standing in for stdin.
pub fn current_stdin() -> Arc<dyn InputProvider> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Install `provider` as the process-wide stdin until the guard is dropped.
///
/// Substitutions are serialized across threads: a second call blocks until the
/// first guard is dropped.
///
/// # Panics
///
/// Panics if the calling thread already holds a [`StdinGuard`].
pub fn replace_stdin(provider: Arc<dyn InputProvider>) -> StdinGuard {
    if GUARD_HELD.get() {
        panic!("replace_stdin called while this thread already holds a StdinGuard; drop it first");
    }
    let lock = SWAP_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = {
        let mut current = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, provider)
    };
    GUARD_HELD.set(true);
    tracing::debug!(previous = previous.id(), "stdin provider replaced");
    StdinGuard {
        previous: Some(previous),
        _lock: lock,
    }
}

/// Restores the previous stdin provider on drop.
#[must_use = "stdin is restored as soon as the guard is dropped"]
pub struct StdinGuard {
    previous: Option<Arc<dyn InputProvider>>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for StdinGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let mut current = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
            *current = previous;
        }
        GUARD_HELD.set(false);
    }
}

impl std::fmt::Debug for StdinGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinGuard")
            .field("previous", &self.previous)
            .finish()
    }
}

/// Input provider that reads whatever [`current_stdin`] returns at open time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessStdin;

impl InputProvider for ProcessStdin {
    fn id(&self) -> &str {
        STDIN_SENTINEL
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        current_stdin().open()
    }
}
