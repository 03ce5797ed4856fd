//! Sidebar show/hide state machine.
//!
//! The sidebar is either `Visible` or `Hidden`. Switching plays a fade
//! (180 ms, in-out cubic) and a width change (240 ms, out cubic) starting
//! from whatever frame is currently displayed, so reversing mid-animation is
//! smooth. Time is fed in by the caller through [`SidebarAnimator::advance`];
//! when a transition completes the animator reports what should be persisted.

use std::time::Duration;

pub const MIN_SIDEBAR_WIDTH: i32 = 180;
pub const DEFAULT_SIDEBAR_WIDTH: i32 = 260;

pub const FADE_DURATION: Duration = Duration::from_millis(180);
pub const WIDTH_DURATION: Duration = Duration::from_millis(240);

/// Pointer distance from the left window edge that reveals a hidden sidebar.
pub const EDGE_REVEAL_PX: i32 = 6;
/// Extra distance past the sidebar after which an edge-revealed sidebar hides.
pub const AUTO_HIDE_MARGIN: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Visible,
    Hidden,
}

/// What the panel should look like right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarFrame {
    pub width: i32,
    pub opacity: f64,
}

impl SidebarFrame {
    const HIDDEN: SidebarFrame = SidebarFrame { width: 0, opacity: 0.0 };

    fn shown(width: i32) -> Self {
        Self { width, opacity: 1.0 }
    }
}

/// Values to store once a transition has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarPersist {
    pub visible: bool,
    pub width: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarStep {
    Idle,
    Animating(SidebarFrame),
    Finished {
        frame: SidebarFrame,
        persist: SidebarPersist,
    },
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: SidebarFrame,
    to: SidebarFrame,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct SidebarAnimator {
    visibility: SidebarVisibility,
    target_width: i32,
    frame: SidebarFrame,
    transition: Option<Transition>,
    revealed_by_edge: bool,
}

impl SidebarAnimator {
    /// Start in the persisted state, without animating.
    pub fn restore(visible: bool, width: i32) -> Self {
        let target_width = width.max(MIN_SIDEBAR_WIDTH);
        let (visibility, frame) = if visible {
            (SidebarVisibility::Visible, SidebarFrame::shown(target_width))
        } else {
            (SidebarVisibility::Hidden, SidebarFrame::HIDDEN)
        };
        Self {
            visibility,
            target_width,
            frame,
            transition: None,
            revealed_by_edge: false,
        }
    }

    /// Visibility the sidebar is at or heading towards.
    pub fn is_visible(&self) -> bool {
        self.visibility == SidebarVisibility::Visible
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn frame(&self) -> SidebarFrame {
        self.frame
    }

    pub fn target_width(&self) -> i32 {
        self.target_width
    }

    /// Flip visibility. An explicit toggle cancels edge-reveal auto-hiding.
    pub fn toggle(&mut self) -> SidebarVisibility {
        self.revealed_by_edge = false;
        let show = !self.is_visible();
        self.set_visible(show);
        self.visibility
    }

    /// Head towards `show`. Returns false when already there.
    pub fn set_visible(&mut self, show: bool) -> bool {
        if show == self.is_visible() && self.transition.is_none() {
            return false;
        }

        let to = if show {
            SidebarFrame::shown(self.target_width)
        } else {
            SidebarFrame::HIDDEN
        };
        self.visibility = if show {
            SidebarVisibility::Visible
        } else {
            SidebarVisibility::Hidden
        };
        self.transition = Some(Transition {
            from: self.frame,
            to,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Move the running transition forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> SidebarStep {
        let Some(mut transition) = self.transition else {
            return SidebarStep::Idle;
        };
        transition.elapsed += dt;

        if transition.elapsed >= FADE_DURATION.max(WIDTH_DURATION) {
            self.transition = None;
            self.frame = transition.to;
            let persist = if self.is_visible() {
                SidebarPersist {
                    visible: true,
                    width: self.target_width,
                }
            } else {
                SidebarPersist {
                    visible: false,
                    width: transition.from.width.max(MIN_SIDEBAR_WIDTH),
                }
            };
            return SidebarStep::Finished {
                frame: self.frame,
                persist,
            };
        }

        let fade = in_out_cubic(progress(transition.elapsed, FADE_DURATION));
        let grow = out_cubic(progress(transition.elapsed, WIDTH_DURATION));
        let (from, to) = (transition.from, transition.to);
        self.frame = SidebarFrame {
            width: from.width + ((to.width - from.width) as f64 * grow).round() as i32,
            opacity: from.opacity + (to.opacity - from.opacity) * fade,
        };
        self.transition = Some(transition);
        SidebarStep::Animating(self.frame)
    }

    /// Edge reveal: a pointer hugging the left edge shows a hidden sidebar;
    /// moving well past it hides the sidebar again if the edge revealed it.
    /// Returns true when a transition started.
    pub fn pointer_moved(&mut self, x: i32) -> bool {
        if x < EDGE_REVEAL_PX && !self.is_visible() {
            self.revealed_by_edge = true;
            return self.set_visible(true);
        }
        if x > self.target_width + AUTO_HIDE_MARGIN && self.is_visible() && self.revealed_by_edge {
            self.revealed_by_edge = false;
            return self.set_visible(false);
        }
        false
    }
}

fn progress(elapsed: Duration, total: Duration) -> f64 {
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

fn out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut SidebarAnimator) -> SidebarStep {
        let mut last = SidebarStep::Idle;
        for _ in 0..100 {
            last = animator.advance(Duration::from_millis(16));
            if matches!(last, SidebarStep::Finished { .. }) {
                break;
            }
        }
        last
    }

    #[test]
    fn test_restore_clamps_width() {
        let animator = SidebarAnimator::restore(true, 100);
        assert_eq!(animator.target_width(), MIN_SIDEBAR_WIDTH);
        assert_eq!(animator.frame(), SidebarFrame { width: 180, opacity: 1.0 });

        let hidden = SidebarAnimator::restore(false, 300);
        assert!(!hidden.is_visible());
        assert_eq!(hidden.frame().width, 0);
        assert!(!hidden.is_animating());
    }

    #[test]
    fn test_show_finishes_visible_and_persists_target() {
        let mut animator = SidebarAnimator::restore(false, DEFAULT_SIDEBAR_WIDTH);
        assert_eq!(animator.toggle(), SidebarVisibility::Visible);
        assert!(animator.is_animating());

        match animator.advance(Duration::from_millis(100)) {
            SidebarStep::Animating(frame) => {
                assert!(frame.width > 0 && frame.width < DEFAULT_SIDEBAR_WIDTH);
                assert!(frame.opacity > 0.0 && frame.opacity < 1.0);
            }
            other => panic!("expected animation, got {other:?}"),
        }

        let step = animator.advance(Duration::from_millis(200));
        assert_eq!(
            step,
            SidebarStep::Finished {
                frame: SidebarFrame { width: 260, opacity: 1.0 },
                persist: SidebarPersist { visible: true, width: 260 },
            }
        );
        assert!(!animator.is_animating());
        assert_eq!(animator.advance(Duration::from_millis(16)), SidebarStep::Idle);
    }

    #[test]
    fn test_hide_persists_width_it_started_from() {
        let mut animator = SidebarAnimator::restore(true, 300);
        animator.toggle();
        let step = run_to_end(&mut animator);
        assert_eq!(
            step,
            SidebarStep::Finished {
                frame: SidebarFrame { width: 0, opacity: 0.0 },
                persist: SidebarPersist { visible: false, width: 300 },
            }
        );
    }

    #[test]
    fn test_reverse_mid_animation_starts_from_current_frame() {
        let mut animator = SidebarAnimator::restore(false, DEFAULT_SIDEBAR_WIDTH);
        animator.set_visible(true);
        animator.advance(Duration::from_millis(40));
        let midway = animator.frame();
        assert!(midway.width > 0 && midway.width < DEFAULT_SIDEBAR_WIDTH);

        assert!(animator.set_visible(false));
        match animator.advance(Duration::from_millis(1)) {
            SidebarStep::Animating(frame) => assert!(frame.width <= midway.width),
            other => panic!("expected animation, got {other:?}"),
        }

        match run_to_end(&mut animator) {
            SidebarStep::Finished { frame, persist } => {
                assert_eq!(frame.width, 0);
                assert!(!persist.visible);
                assert_eq!(persist.width, midway.width.max(MIN_SIDEBAR_WIDTH));
            }
            other => panic!("expected finish, got {other:?}"),
        }
        // the remembered target is not shrunk by an interrupted show
        assert_eq!(animator.target_width(), DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_set_same_visibility_is_noop() {
        let mut animator = SidebarAnimator::restore(true, DEFAULT_SIDEBAR_WIDTH);
        assert!(!animator.set_visible(true));
        assert_eq!(animator.advance(Duration::from_millis(16)), SidebarStep::Idle);
    }

    #[test]
    fn test_edge_reveal_and_auto_hide() {
        let mut animator = SidebarAnimator::restore(false, DEFAULT_SIDEBAR_WIDTH);
        assert!(!animator.pointer_moved(200));
        assert!(animator.pointer_moved(2));
        assert!(animator.is_visible());
        run_to_end(&mut animator);

        // still close to the panel
        assert!(!animator.pointer_moved(DEFAULT_SIDEBAR_WIDTH + 10));
        assert!(animator.pointer_moved(DEFAULT_SIDEBAR_WIDTH + AUTO_HIDE_MARGIN + 1));
        assert!(!animator.is_visible());
    }

    #[test]
    fn test_explicit_show_is_not_auto_hidden() {
        let mut animator = SidebarAnimator::restore(false, DEFAULT_SIDEBAR_WIDTH);
        animator.toggle();
        run_to_end(&mut animator);
        assert!(!animator.pointer_moved(900));
        assert!(animator.is_visible());
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(out_cubic(0.0), 0.0);
        assert_eq!(out_cubic(1.0), 1.0);
        assert_eq!(in_out_cubic(0.0), 0.0);
        assert_eq!(in_out_cubic(1.0), 1.0);
        assert!((in_out_cubic(0.5) - 0.5).abs() < 1e-9);
    }
}
