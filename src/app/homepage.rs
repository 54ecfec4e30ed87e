use chrono::Datelike;
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::background::FloatingBackground;
use super::contact::Contact;
use super::header::Header;
use super::progress::ScrollProgress;
use super::resume::{About, Experience, Expertise, Skills, Summary};
use crate::profile::{get_profile, Profile, BUILD_DATE};

#[component]
pub fn HomePage() -> impl IntoView {
    let (is_loaded, set_is_loaded) = signal(false);
    // effects only run in the browser, so the page fades in once hydrated
    Effect::new(move |_| set_is_loaded(true));

    let content = match get_profile() {
        Ok(profile) => Either::Left(view! { <Sections profile /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <p class="h-screen flex items-center justify-center">
                    "This page's content couldn't be loaded."
                </p>
            })
        }
    };

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 to-purple-100 dark:from-gray-900 dark:to-indigo-900 text-gray-800 dark:text-gray-200 overflow-hidden">
            <FloatingBackground />
            <ScrollProgress />
            <main class=move || {
                format!(
                    "container mx-auto px-4 py-8 relative z-10 transition-opacity duration-500 {}",
                    if is_loaded() { "opacity-100" } else { "opacity-0" },
                )
            }>{content}</main>
        </div>
    }
}

#[component]
fn Sections(profile: &'static Profile) -> impl IntoView {
    view! {
        <Header profile />
        <About paragraphs=&profile.about />
        <Skills skills=&profile.skills />
        <Experience positions=&profile.experience />
        <Expertise items=&profile.expertise />
        <Summary paragraphs=&profile.summary />
        <Contact />
        <footer class="text-center mt-16 pb-8">
            <p class="text-gray-600 dark:text-gray-400">
                {format!("© {} {}. All rights reserved.", BUILD_DATE.year(), profile.name)}
            </p>
        </footer>
    }
}
