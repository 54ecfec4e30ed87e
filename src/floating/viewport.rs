
use thiserror::Error;

/// Visible size of the host display area, in whole pixels.
///
/// `(0, 0)` is the placeholder used before a real measurement exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    #[error("host has no viewport to measure")]
    Unavailable,
    #[error("viewport dimension is not a usable pixel count: {0}")]
    InvalidDimension(f64),
}

impl ViewportSize {
    pub const UNINITIALIZED: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts host pixel values (which may be fractional) into a size.
    pub fn from_pixels(width: f64, height: f64) -> Result<Self, ViewportError> {
        Ok(Self {
            width: pixel_count(width)?,
            height: pixel_count(height)?,
        })
    }

    /// Nothing may be animated across a viewport with a zero dimension.
    pub fn is_measured(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

fn pixel_count(value: f64) -> Result<u32, ViewportError> {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(ViewportError::InvalidDimension(value));
    }
    Ok(value.round() as u32)
}

/// Handle returned by [`ViewportSource::subscribe`].
pub trait ResizeSubscription {
    fn unsubscribe(self);
}

/// Where viewport sizes come from: the browser window, or a fake in tests.
pub trait ViewportSource {
    type Subscription: ResizeSubscription;

    /// `None` when the host has no viewport (e.g. rendering on a server).
    fn measure(&self) -> Option<ViewportSize>;

    fn subscribe<F>(&self, on_resize: F) -> Self::Subscription
    where
        F: Fn(ViewportSize) + Send + Sync + 'static;
}

/// Keeps a component's viewport state in sync with a [`ViewportSource`]
/// between mount and unmount.
pub struct ViewportTracker<S: ViewportSource> {
    subscription: Option<S::Subscription>,
}

impl<S: ViewportSource> ViewportTracker<S> {
    pub fn mount<F>(source: &S, on_change: F) -> Self
    where
        F: Fn(ViewportSize) + Send + Sync + 'static,
    {
        let initial = if let Some(size) = source.measure() {
            size
        } else {
            log::debug!("no viewport available, floating markers stay hidden");
            return Self { subscription: None };
        };
        on_change(initial);

        let subscription = source.subscribe(on_change);
        Self {
            subscription: Some(subscription),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<S: ViewportSource> Drop for ViewportTracker<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
