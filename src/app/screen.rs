//! Shared handle to one screen's state with request sequencing.
//!
//! Flow controllers run as independent tasks while the user keeps typing, so
//! a response may arrive after a newer request was started or after the
//! screen was closed. [`ScreenHandle`] resolves both cases:
//!
//! - every request takes a [`Ticket`] from [`ScreenHandle::begin`]
//! - [`ScreenHandle::complete`] applies a completion only if its ticket is
//!   still the latest one and the screen is alive
//!
//! The latest request wins; stale completions are discarded. Every accepted
//! change bumps a revision published on a `tokio::sync::watch` channel, which
//! the renderer subscribes to.

use super::state::AppState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Proof that a request was started, used to apply its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a request must be completed with its ticket"]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct ScreenCell {
    state: AppState,
    sequence: u64,
    disposed: bool,
}

#[derive(Debug)]
struct Shared {
    cell: Mutex<ScreenCell>,
    revision: watch::Sender<u64>,
}

/// Cloneable handle to the state of one screen instance.
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    shared: Arc<Shared>,
}

impl ScreenHandle {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                cell: Mutex::new(ScreenCell {
                    state,
                    sequence: 0,
                    disposed: false,
                }),
                revision,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScreenCell> {
        self.shared.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self) {
        self.shared.revision.send_modify(|r| *r = r.wrapping_add(1));
    }

    /// Starts a request: resets the request state, raises `loading`, and
    /// supersedes any request still in flight.
    ///
    /// Returns `None` once the screen is disposed.
    pub fn begin(&self) -> Option<Ticket> {
        let ticket = {
            let mut cell = self.lock();
            if cell.disposed {
                tracing::debug!("request not started, screen disposed");
                return None;
            }
            cell.sequence += 1;
            cell.state.begin_request();
            Ticket(cell.sequence)
        };
        tracing::debug!(sequence = ticket.sequence(), "request started");
        self.publish();
        Some(ticket)
    }

    /// Whether `ticket` still belongs to the latest request on a live screen.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        let cell = self.lock();
        !cell.disposed && cell.sequence == ticket.sequence()
    }

    /// Applies the completion of the request identified by `ticket`.
    ///
    /// `apply` runs only when the ticket is current and the screen is alive;
    /// otherwise the completion is logged and dropped and `None` is returned.
    pub fn complete<R>(&self, ticket: Ticket, apply: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        let result = {
            let mut cell = self.lock();
            if cell.disposed {
                tracing::debug!(sequence = ticket.sequence(), "completion dropped, screen disposed");
                return None;
            }
            if cell.sequence != ticket.sequence() {
                tracing::debug!(
                    sequence = ticket.sequence(),
                    latest = cell.sequence,
                    "stale completion discarded"
                );
                return None;
            }
            apply(&mut cell.state)
        };
        self.publish();
        Some(result)
    }

    /// Applies a local change that is not tied to a request, such as typing.
    ///
    /// Returns `None` once the screen is disposed.
    pub fn update<R>(&self, apply: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        let result = {
            let mut cell = self.lock();
            if cell.disposed {
                return None;
            }
            apply(&mut cell.state)
        };
        self.publish();
        Some(result)
    }

    /// Reads the current state.
    pub fn read<R>(&self, view: impl FnOnce(&AppState) -> R) -> R {
        view(&self.lock().state)
    }

    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.read(AppState::clone)
    }

    /// Marks the screen as gone. Later requests and completions are no-ops.
    pub fn dispose(&self) {
        self.lock().disposed = true;
        tracing::debug!("screen disposed");
        self.publish();
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Subscribes to state revisions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;
    use crate::domain::NutritionInfo;
    use crate::ui::Theme;

    fn screen() -> ScreenHandle {
        ScreenHandle::new(AppState::new(Theme::default()))
    }

    #[test]
    fn latest_ticket_wins() {
        let screen = screen();
        let first = screen.begin().unwrap();
        let second = screen.begin().unwrap();
        assert_eq!((first.sequence(), second.sequence()), (1, 2));
        assert!(!screen.is_current(first));
        assert!(screen.is_current(second));

        let stale = screen.complete(first, |s| {
            s.primary_result = Some(NutritionInfo::named("Stale"));
            s.finish_loading();
        });
        assert!(stale.is_none());
        assert_eq!(screen.read(AppState::phase), Phase::Loading);

        screen.complete(second, |s| {
            s.primary_result = Some(NutritionInfo::named("Fresh"));
            s.finish_loading();
        });
        let state = screen.snapshot();
        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.primary_result.unwrap().food_name, "Fresh");
    }

    #[test]
    fn disposed_screen_ignores_everything() {
        let screen = screen();
        let ticket = screen.begin().unwrap();
        screen.dispose();

        assert!(screen.is_disposed());
        assert!(screen.complete(ticket, AppState::finish_loading).is_none());
        assert!(screen.update(|s| s.query.push('x')).is_none());
        assert!(screen.begin().is_none());
        assert!(screen.snapshot().query.is_empty());
    }

    #[test]
    fn accepted_changes_publish_revisions() {
        let screen = screen();
        let mut revisions = screen.subscribe();
        assert!(!revisions.has_changed().unwrap());

        screen.update(|s| s.query.push('a'));
        assert!(revisions.has_changed().unwrap());
        revisions.borrow_and_update();

        let first = screen.begin().unwrap();
        let _second = screen.begin().unwrap();
        revisions.borrow_and_update();
        screen.complete(first, AppState::finish_loading);
        assert!(!revisions.has_changed().unwrap());
    }
}
