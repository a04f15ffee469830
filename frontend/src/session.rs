use std::rc::Rc;

use log::{info, warn};

use crate::config;
use crate::form::controller::FormController;
use crate::form::effects::{BrowserEffects, SubmitEffects};
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};

/// Everything the landing page keeps for as long as it is mounted.
///
/// Created when the landing route renders and dropped when the visitor
/// navigates away, which also resets the "already submitted" guard.
pub struct PageSession {
    pub store: Rc<dyn KeyValueStore>,
    pub effects: Rc<dyn SubmitEffects>,
    pub controller: FormController,
}

impl PageSession {
    pub fn new(store: Rc<dyn KeyValueStore>, effects: Rc<dyn SubmitEffects>) -> Self {
        let controller = FormController::new(config::form_variant(), store.clone());
        Self {
            store,
            effects,
            controller,
        }
    }

    pub fn browser() -> Self {
        info!("Starting landing page session");
        let store: Rc<dyn KeyValueStore> = if BrowserStorage::is_available() {
            Rc::new(BrowserStorage)
        } else {
            warn!("localStorage unavailable, nothing will survive a reload");
            Rc::new(MemoryStorage::new())
        };
        Self::new(store, Rc::new(BrowserEffects))
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        info!("Landing page session closed");
    }
}

/// Cheap handle passed down through a `ContextProvider`.
#[derive(Clone)]
pub struct SessionHandle(pub Rc<PageSession>);

impl SessionHandle {
    pub fn new(session: PageSession) -> Self {
        Self(Rc::new(session))
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = PageSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::controller::SubmissionState;
    use crate::form::effects::fake::ImmediateEffects;

    fn session() -> PageSession {
        PageSession::new(Rc::new(MemoryStorage::new()), Rc::new(ImmediateEffects::default()))
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SessionHandle::new(session());
        let b = SessionHandle::new(session());
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn fresh_session_starts_idle_with_configured_variant() {
        let s = session();
        assert_eq!(s.controller.state(), SubmissionState::Idle);
        assert_eq!(s.controller.variant(), config::form_variant());
    }
}
