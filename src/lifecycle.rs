use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use serde_json::Value;

use crate::fetch::FetchError;
use crate::state::Settlement;

/// Alive flag shared between a mounted component and the task it spawned.
///
/// The mount effect creates it, hands a clone to the async task, and
/// releases it on teardown. The task checks it before touching view state.
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn mounted() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Marks the owner as gone. Idempotent.
    pub fn release(&self) {
        self.alive.set(false);
    }

    /// Runs `apply` only while still mounted. Returns whether it ran.
    pub fn run_if_alive(&self, apply: impl FnOnce()) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}

/// Ties one request to a fresh guard.
///
/// The task awaits `request` and hands its settlement to `apply` only while
/// mounted, resolving to whether it did. The teardown releases the guard and
/// is meant to be returned from the mount effect.
pub fn mount_fetch<R, A>(request: R, apply: A) -> (impl Future<Output = bool>, impl FnOnce())
where
    R: Future<Output = Result<Value, FetchError>>,
    A: FnOnce(Settlement),
{
    let guard = MountGuard::mounted();
    let task_guard = guard.clone();

    let task = async move {
        let settlement = Settlement::from(request.await);
        task_guard.run_if_alive(|| apply(settlement))
    };

    (task, move || guard.release())
}
