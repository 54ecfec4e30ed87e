use leptos::{ev::SubmitEvent, prelude::*};

use super::resume::SectionHeading;
use super::reveal::Reveal;

const FIELD: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 dark:bg-gray-700 dark:border-gray-600 dark:text-white";
const LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";

/// Contact form markup. There is no backend to deliver messages to.
#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted, no delivery backend configured");
    };

    view! {
        <section id="contact" class="mb-16">
            <SectionHeading title="Get in Touch" />
            <Reveal class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg max-w-md mx-auto">
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="name" class=LABEL>
                            "Name"
                        </label>
                        <input type="text" id="name" name="name" class=FIELD required=true />
                    </div>
                    <div>
                        <label for="email" class=LABEL>
                            "Email"
                        </label>
                        <input type="email" id="email" name="email" class=FIELD required=true />
                    </div>
                    <div>
                        <label for="message" class=LABEL>
                            "Message"
                        </label>
                        <textarea id="message" name="message" rows="4" class=FIELD required=true></textarea>
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 transition duration-300"
                    >
                        "Send Message"
                    </button>
                </form>
            </Reveal>
        </section>
    }
}
