use leptos::{ev, prelude::*};
use rand::{rngs::StdRng, SeedableRng};

use crate::floating::{
    FloatingField, Marker, ResizeSubscription, ViewportError, ViewportSize, ViewportSource,
    ViewportTracker, MARKERS,
};

/// The browser window, measured through `innerWidth`/`innerHeight`.
pub struct WindowViewport;

impl WindowViewport {
    #[cfg(feature = "hydrate")]
    fn read(&self) -> Result<ViewportSize, ViewportError> {
        let window = window();
        let width = window
            .inner_width()
            .map_err(|_| ViewportError::Unavailable)?
            .as_f64()
            .ok_or(ViewportError::Unavailable)?;
        let height = window
            .inner_height()
            .map_err(|_| ViewportError::Unavailable)?
            .as_f64()
            .ok_or(ViewportError::Unavailable)?;
        ViewportSize::from_pixels(width, height)
    }

    #[cfg(not(feature = "hydrate"))]
    fn read(&self) -> Result<ViewportSize, ViewportError> {
        Err(ViewportError::Unavailable)
    }
}

impl ResizeSubscription for WindowListenerHandle {
    fn unsubscribe(self) {
        self.remove();
    }
}

impl ViewportSource for WindowViewport {
    type Subscription = WindowListenerHandle;

    fn measure(&self) -> Option<ViewportSize> {
        match self.read() {
            Ok(size) => Some(size),
            Err(e) => {
                log::debug!("couldn't measure window: {e}");
                None
            }
        }
    }

    fn subscribe<F>(&self, on_resize: F) -> WindowListenerHandle
    where
        F: Fn(ViewportSize) + Send + Sync + 'static,
    {
        window_event_listener(ev::resize, move |_| {
            if let Some(size) = WindowViewport.measure() {
                on_resize(size);
            }
        })
    }
}

/// Icons drifting down behind the page content.
///
/// Nothing is rendered until the window has been measured, which only
/// happens in the browser, so server output and hydration agree.
#[component]
pub fn FloatingBackground() -> impl IntoView {
    let field = RwSignal::new(FloatingField::new(StdRng::from_entropy()));
    let rendering = Memo::new(move |_| field.with(|f| f.is_rendering()));

    Effect::new(move |_| {
        let mut tracker = ViewportTracker::mount(&WindowViewport, move |size| {
            log::debug!("viewport {}x{}", size.width, size.height);
            field.update(|f| f.resize(size));
        });
        on_cleanup(move || tracker.unmount());
    });

    view! {
        <Show when=move || rendering.get()>
            <div
                class="fixed inset-0 z-0 overflow-hidden pointer-events-none select-none"
                aria-hidden="true"
            >
                {MARKERS
                    .iter()
                    .enumerate()
                    .map(|(index, marker)| view! { <FloatingMarker field index marker /> })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
fn FloatingMarker(
    field: RwSignal<FloatingField<StdRng>>,
    index: usize,
    marker: &'static Marker,
) -> impl IntoView {
    let path = Memo::new(move |_| field.with(|f| f.path(index)));
    let class = format!(
        "fas fa-{} floating-marker absolute text-4xl text-indigo-300 opacity-20",
        marker.symbol,
    );

    // A new path means a new element, so its animation starts from the top.
    move || {
        path.get().map(|p| {
            view! {
                <i
                    class=class.clone()
                    style=p.css_style()
                    data-loop=p.generation.to_string()
                    on:animationend=move |_| field.update(|f| f.cycle(index))
                ></i>
            }
        })
    }
}
