//! # View Session
//!
//! All mutable view state for one visitor: cart, theme, slideshow,
//! header navigation and the reservation form draft.
//!
//! ## Thread Safety
//! Route handlers and the slideshow timer run on different tasks, so the
//! state sits behind a single `Arc<Mutex<T>>`. Every operation locks,
//! mutates, and releases before returning; nothing holds the lock across
//! an `.await`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    View Session Operations                              │
//! │                                                                         │
//! │  Caller                    Operation                 State Change       │
//! │  ──────                    ─────────                 ────────────       │
//! │                                                                         │
//! │  POST .../increment ─────► cart.increment() ───────► qty += 1           │
//! │  POST /api/theme/toggle ─► theme.toggle() ─────────► dark <-> light     │
//! │  SlideshowTimer ─────────► slideshow.tick() ───────► index = (i+1) % n  │
//! │  POST .../menu/toggle ───► navigation.toggle() ────► open = !open       │
//! │  POST /api/cart/checkout ► reservation = draft ────► form pre-filled    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use taproom_core::{
    CartStore, Catalog, CoreResult, NavigationState, ReservationRequest, SlideshowState,
    ThemeViewState,
};

/// The state behind the lock.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub cart: CartStore,
    pub theme: ThemeViewState,
    pub slideshow: SlideshowState,
    pub navigation: NavigationState,
    /// Contact form contents, pre-filled by checkout.
    pub reservation: ReservationRequest,
}

impl ViewState {
    /// Fresh state: empty cart, dark theme, first slide, menu closed.
    pub fn new(catalog: Arc<Catalog>, hero_images: Vec<String>) -> CoreResult<Self> {
        Ok(ViewState {
            cart: CartStore::new(catalog),
            theme: ThemeViewState::new(),
            slideshow: SlideshowState::new(hero_images)?,
            navigation: NavigationState::new(),
            reservation: ReservationRequest::default(),
        })
    }
}

/// Shared handle to one view session. Cloning shares the state.
#[derive(Debug, Clone)]
pub struct ViewSession {
    inner: Arc<Mutex<ViewState>>,
}

impl ViewSession {
    pub fn new(state: ViewState) -> Self {
        ViewSession {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Executes a function with read access to the state.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewState) -> R,
    {
        let state = self.inner.lock().expect("View session mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ViewState) -> R,
    {
        let mut state = self.inner.lock().expect("View session mutex poisoned");
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taproom_core::{CatalogItem, Money, ThemeMode};

    fn session() -> ViewSession {
        let catalog = Catalog::new(vec![CatalogItem::new(
            "Nachos",
            Money::from_minor(250),
            "Brew Bites",
        )])
        .unwrap();
        let state = ViewState::new(
            Arc::new(catalog),
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
        )
        .unwrap();
        ViewSession::new(state)
    }

    #[test]
    fn test_fresh_state() {
        let session = session();
        session.with_session(|s| {
            assert!(s.cart.is_empty());
            assert_eq!(s.theme.current(), ThemeMode::Dark);
            assert_eq!(s.slideshow.index(), 0);
            assert!(!s.navigation.is_mobile_menu_open());
        });
    }

    #[test]
    fn test_clones_share_state() {
        let session = session();
        let other = session.clone();

        other.with_session_mut(|s| s.cart.increment("Nachos"));

        assert_eq!(session.with_session(|s| s.cart.quantity("Nachos")), 1);
    }

    #[test]
    fn test_empty_slideshow_rejected() {
        let result = ViewState::new(Arc::new(Catalog::default()), Vec::new());
        assert!(result.is_err());
    }
}
