use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Becomes `true` the first time `visible` does and stays there.
pub fn reveal_once(visible: Signal<bool>) -> Memo<bool> {
    Memo::new(move |revealed: Option<&bool>| revealed.copied().unwrap_or(false) || visible.get())
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_secs: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = reveal_once(use_element_visibility(target));

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() {
                    format!("{class} reveal is-revealed")
                } else {
                    format!("{class} reveal")
                }
            }
            style=format!("transition-delay: {delay_secs}s")
        >
            {children()}
        </div>
    }
}
