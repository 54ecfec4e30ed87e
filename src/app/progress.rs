use leptos::prelude::*;
use leptos_use::use_window_scroll;

/// Fraction of the page scrolled past, 0 when the page doesn't scroll.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(feature = "hydrate")]
fn document_extent() -> Option<(f64, f64)> {
    let root = document().document_element()?;
    Some((root.scroll_height() as f64, root.client_height() as f64))
}

#[cfg(not(feature = "hydrate"))]
fn document_extent() -> Option<(f64, f64)> {
    None
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let progress = move || {
        let offset = scroll_y.get();
        document_extent()
            .map(|(document_height, viewport_height)| {
                scroll_progress(offset, document_height, viewport_height)
            })
            .unwrap_or(0.0)
    };

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-2 origin-left bg-indigo-600 dark:bg-indigo-400 z-50"
            style=move || format!("transform: scaleX({:.4});", progress())
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_clamps() {
        // overscroll bounce on touch devices
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }
}
