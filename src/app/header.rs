use leptos::prelude::*;

use super::avatar::Avatar;
use crate::profile::Profile;

#[component]
pub fn Header(profile: &'static Profile) -> impl IntoView {
    let resume_name = profile
        .resume_file
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    view! {
        <header class="h-screen flex flex-col justify-center items-center relative mb-16">
            <div class="relative z-10 text-center pop-in">
                <Avatar image=&profile.avatar />
                <h1
                    class="text-4xl md:text-5xl font-bold mb-4 text-indigo-800 dark:text-indigo-300 drop-in"
                    style="animation-delay: 0.2s"
                >
                    {profile.name.clone()}
                </h1>
                <p
                    class="text-xl md:text-2xl text-indigo-600 dark:text-indigo-400 font-light mb-8 drop-in"
                    style="animation-delay: 0.4s"
                >
                    {profile.headline.clone()}
                </p>
                <div
                    class="flex flex-wrap justify-center gap-4 fade-up"
                    style="animation-delay: 0.6s"
                >
                    <a
                        href="#contact"
                        class="bg-indigo-600 text-white px-8 py-3 rounded-full font-semibold hover:bg-indigo-700 transition duration-300 shadow-lg"
                    >
                        "Get in Touch"
                    </a>
                    <a
                        href=profile.resume_file.clone()
                        download=resume_name
                        class="bg-white text-indigo-600 px-8 py-3 rounded-full font-semibold border-2 border-indigo-600 hover:bg-indigo-100 transition duration-300 shadow-lg"
                    >
                        "Download Resume"
                    </a>
                </div>
            </div>
        </header>
    }
}
