//! Single-object tracker session.

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::frame::Raster;
use crate::tracker::rect::Rect;
use crate::tracker::session_state::SessionState;
use crate::tracker::strategy::TrackingStrategy;

/// Outcome of one tracker update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackUpdate {
    /// Last-known region of the target. Inside the frame whenever `success` is set.
    pub region: Rect,
    /// Whether the target was relocated in this frame.
    pub success: bool,
}

/// Owns one tracking strategy and the target's last-known region.
///
/// A failed update does not reset the session: the strategy keeps its internal
/// state and is asked again on the next frame.
pub struct TrackerSession<S> {
    strategy: S,
    state: SessionState,
    region: Rect,
    updates: u64,
    failures: u64,
    lost: bool,
}

impl<S> TrackerSession<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            state: SessionState::Uninitialized,
            region: Rect::default(),
            updates: 0,
            failures: 0,
            lost: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Last-known region of the target.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Number of `update` calls so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Number of updates that failed to relocate the target.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Register the target found at `region` in `frame`.
    ///
    /// The region is clipped to the frame before the strategy sees it.
    pub fn init<F>(&mut self, frame: &F, region: Rect) -> Result<()>
    where
        F: Raster,
        S: TrackingStrategy<F>,
    {
        if self.state != SessionState::Uninitialized {
            return Err(Error::AlreadyInitialized);
        }

        let clipped = region.clip_to(frame.extent());
        if clipped.is_empty() {
            return Err(Error::InvalidRegion(region));
        }

        self.strategy.init(frame, clipped)?;
        self.region = clipped;
        self.state = SessionState::Initialized;
        info!("{} initialized on {:?}", self.strategy.name(), clipped);
        Ok(())
    }

    /// Relocate the target in `frame`.
    pub fn update<F>(&mut self, frame: &F) -> Result<TrackUpdate>
    where
        F: Raster,
        S: TrackingStrategy<F>,
    {
        if self.state == SessionState::Uninitialized {
            return Err(Error::NotInitialized);
        }

        let estimate = self.strategy.update(frame)?;
        self.state = SessionState::Tracking;
        self.updates += 1;

        let found = estimate
            .map(|region| region.clip_to(frame.extent()))
            .filter(|region| !region.is_empty());

        let success = match found {
            Some(region) => {
                self.region = region;
                if self.lost {
                    info!("target reacquired at {:?}", region);
                }
                self.lost = false;
                true
            }
            None => {
                self.failures += 1;
                if !self.lost {
                    warn!("target lost, last seen at {:?}", self.region);
                }
                self.lost = true;
                false
            }
        };
        debug!(
            "update #{}: success={} region={:?}",
            self.updates, success, self.region
        );

        Ok(TrackUpdate {
            region: self.region,
            success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Extent;

    struct Blank(Extent);

    impl Raster for Blank {
        fn extent(&self) -> Extent {
            self.0
        }
    }

    /// Replays a fixed list of estimates, then reports failure.
    struct Scripted {
        estimates: Vec<Option<Rect>>,
        learned: Option<Rect>,
    }

    impl Scripted {
        fn new(estimates: Vec<Option<Rect>>) -> Self {
            Self {
                estimates: estimates.into_iter().rev().collect(),
                learned: None,
            }
        }
    }

    impl TrackingStrategy<Blank> for Scripted {
        fn init(&mut self, _frame: &Blank, region: Rect) -> Result<()> {
            self.learned = Some(region);
            Ok(())
        }

        fn update(&mut self, _frame: &Blank) -> Result<Option<Rect>> {
            Ok(self.estimates.pop().flatten())
        }
    }

    fn frame() -> Blank {
        Blank(Extent::new(640, 480))
    }

    #[test]
    fn test_state_transitions() {
        let mut session = TrackerSession::new(Scripted::new(vec![Some(Rect::new(
            12.0, 12.0, 20.0, 20.0,
        ))]));
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.init(&frame(), Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap();
        assert_eq!(session.state(), SessionState::Initialized);

        let update = session.update(&frame()).unwrap();
        assert_eq!(session.state(), SessionState::Tracking);
        assert!(update.success);
        assert_eq!(update.region, Rect::new(12.0, 12.0, 20.0, 20.0));
        assert_eq!(session.region(), update.region);
    }

    #[test]
    fn test_update_before_init() {
        let mut session = TrackerSession::new(Scripted::new(vec![]));
        assert!(matches!(
            session.update(&frame()),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_init_twice() {
        let mut session = TrackerSession::new(Scripted::new(vec![]));
        let region = Rect::new(10.0, 10.0, 20.0, 20.0);
        session.init(&frame(), region).unwrap();
        assert!(matches!(
            session.init(&frame(), region),
            Err(Error::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_init_clips_region() {
        let mut session = TrackerSession::new(Scripted::new(vec![]));
        session
            .init(&frame(), Rect::new(600.0, 400.0, 100.0, 100.0))
            .unwrap();
        assert_eq!(session.region(), Rect::new(600.0, 400.0, 40.0, 80.0));
        assert_eq!(session.strategy().learned, Some(session.region()));
    }

    #[test]
    fn test_init_outside_frame() {
        let mut session = TrackerSession::new(Scripted::new(vec![]));
        let result = session.init(&frame(), Rect::new(760.0, 400.0, 270.0, 200.0));
        assert!(matches!(result, Err(Error::InvalidRegion(_))));
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_failure_keeps_region_and_session() {
        let start = Rect::new(10.0, 10.0, 20.0, 20.0);
        let moved = Rect::new(30.0, 30.0, 20.0, 20.0);
        let mut session = TrackerSession::new(Scripted::new(vec![None, None, Some(moved)]));
        session.init(&frame(), start).unwrap();

        let first = session.update(&frame()).unwrap();
        assert!(!first.success);
        assert_eq!(first.region, start);

        let second = session.update(&frame()).unwrap();
        assert!(!second.success);

        let third = session.update(&frame()).unwrap();
        assert!(third.success);
        assert_eq!(third.region, moved);

        assert_eq!(session.updates(), 3);
        assert_eq!(session.failures(), 2);
        assert_eq!(session.state(), SessionState::Tracking);
    }

    #[test]
    fn test_success_region_within_frame() {
        let mut session = TrackerSession::new(Scripted::new(vec![Some(Rect::new(
            620.0, -5.0, 40.0, 40.0,
        ))]));
        session
            .init(&frame(), Rect::new(600.0, 0.0, 40.0, 40.0))
            .unwrap();

        let update = session.update(&frame()).unwrap();
        assert!(update.success);
        assert!(update.region.is_within(frame().extent()));
        assert_eq!(update.region, Rect::new(620.0, 0.0, 20.0, 35.0));
    }

    #[test]
    fn test_estimate_outside_frame_is_failure() {
        let start = Rect::new(600.0, 0.0, 40.0, 40.0);
        let mut session = TrackerSession::new(Scripted::new(vec![Some(Rect::new(
            700.0, 0.0, 40.0, 40.0,
        ))]));
        session.init(&frame(), start).unwrap();

        let update = session.update(&frame()).unwrap();
        assert!(!update.success);
        assert_eq!(update.region, start);
    }

    #[test]
    fn test_boxed_strategy() {
        let strategy: Box<dyn TrackingStrategy<Blank>> =
            Box::new(Scripted::new(vec![Some(Rect::new(1.0, 1.0, 5.0, 5.0))]));
        let mut session = TrackerSession::new(strategy);
        session.init(&frame(), Rect::new(0.0, 0.0, 5.0, 5.0)).unwrap();
        assert!(session.update(&frame()).unwrap().success);
    }
}
