//! Per-state actions.
//!
//! An action is a zero-argument side-effecting callable attached to a state.
//! The interpreter invokes it whenever the cursor rests on that state.

use std::fmt;
use std::sync::Arc;

/// Zero-argument callback run by the interpreter when a state is entered.
///
/// Actions are shared (`Arc`) and thread-safe so a configured table can be
/// read by interpreters on several threads at once.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Action;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let count = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&count);
/// let action = Action::new(move || {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// action.run();
/// action.run();
/// assert_eq!(count.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct Action {
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Wrap a callable as an action.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the action.
    pub fn run(&self) {
        (self.callback)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

impl<F> From<F> for Action
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(callback: F) -> Self {
        Action::new(callback)
    }
}
