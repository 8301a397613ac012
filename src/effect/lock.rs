//! Shared plumbing for `with_lock`.

/// Releases a lock acquired by a `with_lock` lock effect.
pub type Unlock = Box<dyn FnOnce() + Send>;

/// Calls the unlock action when dropped, so it also runs during unwinding.
pub(crate) struct UnlockGuard(Option<Unlock>);

impl UnlockGuard {
    pub(crate) fn new(unlock: Unlock) -> Self {
        Self(Some(unlock))
    }
}

impl Drop for UnlockGuard {
    fn drop(&mut self) {
        if let Some(unlock) = self.0.take() {
            unlock();
        }
    }
}
