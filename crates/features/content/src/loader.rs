//! Fetch-or-fallback state machine for one page visit.

use crate::gate::MountGate;
use folio_domain::{PageContent, Usable};
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Where a page's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Store,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub content: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved { content: f(self.content), origin: self.origin }
    }
}

/// `Idle -> Loading -> Ready`, never backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(Resolved<T>),
}

impl<T> LoadState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn resolved(&self) -> Option<&Resolved<T>> {
        match self {
            Self::Ready(resolved) => Some(resolved),
            _ => None,
        }
    }
}

/// Loads one piece of page content, substituting bundled content for anything unusable.
///
/// The `Ready` value is either entirely from the store or entirely the fallback.
#[derive(Debug, Clone)]
pub struct PageLoader<T> {
    gate: MountGate,
    page: &'static str,
    state: Arc<watch::Sender<LoadState<T>>>,
}

impl<T> PageLoader<T>
where
    T: PageContent + Clone + Send + Sync,
{
    pub fn new(gate: MountGate, page: &'static str) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self { gate, page, state: Arc::new(state) }
    }

    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.subscribe()
    }

    /// Waits for the gate, runs `fetch` once and settles.
    ///
    /// Store errors, missing documents, empty collections and malformed documents all
    /// settle on `fallback()`. Later calls (and concurrent ones) get the settled value
    /// without fetching again.
    pub async fn load<F, R, E>(&self, fetch: F, fallback: impl FnOnce() -> T) -> Resolved<T>
    where
        F: Future<Output = Result<R, E>>,
        R: Into<Option<T>>,
        E: Display,
    {
        self.gate.opened().await;

        let claimed = self.state.send_if_modified(|state| {
            if matches!(state, LoadState::Idle) {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });

        if !claimed {
            return self.settled().await.unwrap_or_else(|| Resolved { content: fallback(), origin: Origin::Fallback });
        }

        let resolved = match fetch.await.map(Into::<Option<T>>::into) {
            Ok(Some(content)) => match content.vet() {
                Usable::Ready(content) => Resolved { content, origin: Origin::Store },
                Usable::Empty => {
                    info!(page = self.page, "Store returned no content, using fallback");
                    Resolved { content: fallback(), origin: Origin::Fallback }
                }
                Usable::Malformed => {
                    warn!(page = self.page, "Store content failed shape checks, using fallback");
                    Resolved { content: fallback(), origin: Origin::Fallback }
                }
            },
            Ok(None) => {
                info!(page = self.page, "Store returned no content, using fallback");
                Resolved { content: fallback(), origin: Origin::Fallback }
            }
            Err(e) => {
                warn!(page = self.page, error = %e, "Content fetch failed, using fallback");
                Resolved { content: fallback(), origin: Origin::Fallback }
            }
        };

        self.state.send_replace(LoadState::Ready(resolved.clone()));
        resolved
    }

    async fn settled(&self) -> Option<Resolved<T>> {
        let mut rx = self.state.subscribe();
        let state = rx.wait_for(|state| matches!(state, LoadState::Ready(_))).await.ok()?;
        state.resolved().cloned()
    }
}
