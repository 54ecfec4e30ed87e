use leptos::prelude::*;

use crate::profile::AvatarImage;

#[component]
pub fn Avatar(image: &'static AvatarImage) -> impl IntoView {
    view! {
        <img
            src=image.src.clone()
            alt=image.alt.clone()
            width="200"
            height="200"
            class="mx-auto rounded-full border-4 border-white dark:border-gray-800 shadow-lg mb-8"
        />
    }
}
