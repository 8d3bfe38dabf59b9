//! Stack-based navigation history.
//!
//! A plain ordered sequence of frames: `navigate` pushes, `go_back` pops,
//! and the root `Home` frame can never be popped away. No validation ties
//! `params` to the semantic needs of a screen (an `EpicDetail` frame without
//! an `epic_id` renders empty rather than failing); that contract belongs to
//! the caller.

use taskdeck_core::EpicId;
use tokio::sync::watch;
use tracing::{debug, trace};

/// The screens the navigator can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Epic and quick-hit overview.
    Home,
    /// Detail view of a single epic.
    EpicDetail,
    /// Epic creation form.
    CreateEpic,
    /// Quick-hit creation form.
    CreateQuickHit,
}

/// Parameters carried by a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    /// Epic addressed by an `EpicDetail` frame.
    pub epic_id: Option<EpicId>,
}

/// One entry in the navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Screen to render.
    pub screen: Screen,
    /// Screen parameters.
    pub params: NavParams,
}

impl Frame {
    /// Frame for `screen` with empty parameters.
    #[must_use]
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            params: NavParams::default(),
        }
    }
}

/// Owner of the ordered navigation history.
///
/// The current frame is held apart from the frames beneath it, so the
/// history is non-empty by construction. Like the task store, the navigator
/// is created once at application start, mutated synchronously from UI
/// handlers, and publishes its current frame after every change.
#[derive(Debug)]
pub struct Navigator {
    current: Frame,
    back_stack: Vec<Frame>,
    publisher: watch::Sender<Frame>,
}

impl Navigator {
    /// Create a navigator positioned on the `Home` root frame.
    #[must_use]
    pub fn new() -> Self {
        let root = Frame::new(Screen::Home);
        let (publisher, _) = watch::channel(root.clone());
        Self {
            current: root,
            back_stack: Vec::new(),
            publisher,
        }
    }

    /// Push a new frame onto the history; it becomes the current frame.
    /// Depth is unbounded.
    pub fn navigate(&mut self, screen: Screen, params: NavParams) {
        debug!(?screen, "navigate");
        let previous = std::mem::replace(&mut self.current, Frame { screen, params });
        self.back_stack.push(previous);
        self.publish();
    }

    /// Push an `EpicDetail` frame for the given epic.
    pub fn open_epic(&mut self, epic_id: EpicId) {
        self.navigate(
            Screen::EpicDetail,
            NavParams {
                epic_id: Some(epic_id),
            },
        );
    }

    /// Pop the current frame. At the root the call is a no-op and returns
    /// false; `Home` always remains reachable.
    pub fn go_back(&mut self) -> bool {
        if let Some(frame) = self.back_stack.pop() {
            debug!(screen = ?frame.screen, "went back");
            self.current = frame;
            self.publish();
            true
        } else {
            trace!("go_back at root ignored");
            false
        }
    }

    /// The top frame.
    #[must_use]
    pub const fn current(&self) -> &Frame {
        &self.current
    }

    /// True iff there is a frame below the current one.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Number of frames in the history, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.back_stack.len() + 1
    }

    /// Subscribe to frame changes; the receiver always yields the current
    /// frame.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.current.clone());
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home_with_no_way_back() {
        let nav = Navigator::new();
        assert_eq!(nav.current().screen, Screen::Home);
        assert!(!nav.can_go_back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_then_back_returns_to_home() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::CreateEpic, NavParams::default());
        assert_eq!(nav.current().screen, Screen::CreateEpic);
        assert!(nav.can_go_back());

        assert!(nav.go_back());
        assert_eq!(nav.current().screen, Screen::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn go_back_at_root_is_a_no_op() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.current().screen, Screen::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn open_epic_carries_the_epic_id() {
        let mut nav = Navigator::new();
        let id = EpicId::generate();
        nav.open_epic(id.clone());

        assert_eq!(nav.current().screen, Screen::EpicDetail);
        assert_eq!(nav.current().params.epic_id.as_ref(), Some(&id));
    }

    #[test]
    fn frames_stack_without_depth_limit() {
        let mut nav = Navigator::new();
        for _ in 0..64 {
            nav.navigate(Screen::CreateQuickHit, NavParams::default());
        }
        assert_eq!(nav.depth(), 65);

        while nav.go_back() {}
        assert_eq!(nav.current().screen, Screen::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn subscribers_observe_frame_changes() {
        let mut nav = Navigator::new();
        let mut rx = nav.subscribe();
        assert!(!rx
            .has_changed()
            .unwrap_or_else(|err| panic!("sender must be alive: {err}")));

        nav.navigate(Screen::CreateEpic, NavParams::default());
        assert!(rx
            .has_changed()
            .unwrap_or_else(|err| panic!("sender must be alive: {err}")));
        assert_eq!(rx.borrow_and_update().screen, Screen::CreateEpic);
    }
}
