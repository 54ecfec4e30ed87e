use leptos::prelude::*;

use super::reveal::Reveal;
use crate::profile::{Position, Skill, BUILD_DATE};

const CARD: &str = "bg-white dark:bg-gray-800 rounded-xl shadow-lg";

#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <Reveal>
            <h2 class="text-3xl font-semibold mb-8 text-indigo-700 dark:text-indigo-300 text-center">
                {title}
            </h2>
        </Reveal>
    }
}

#[component]
pub fn About(paragraphs: &'static [String]) -> impl IntoView {
    view! {
        <section id="about" class="mb-16">
            <SectionHeading title="About Me" />
            <Reveal class="max-w-4xl mx-auto mb-6" delay_secs=0.2>
                <div class=format!("{CARD} text-lg leading-relaxed text-center p-8")>
                    {paragraphs
                        .iter()
                        .map(|p| view! { <p class="mb-4 last:mb-0">{p.clone()}</p> })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id="skills" class="mb-16">
            <SectionHeading title="Key Skills" />
            <Reveal class="max-w-4xl mx-auto">
                <div class=format!(
                    "{CARD} grid grid-cols-1 md:grid-cols-2 gap-6 p-8",
                )>{skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}</div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let level = skill.level.min(100);
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="text-base font-medium text-indigo-700 dark:text-indigo-300">
                    {skill.name.clone()}
                </span>
                <span class="text-sm font-medium text-indigo-700 dark:text-indigo-300">
                    {format!("{level}%")}
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2.5 dark:bg-gray-700">
                <div
                    class="bg-indigo-600 h-2.5 rounded-full dark:bg-indigo-500"
                    style=format!("width: {level}%")
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience(positions: &'static [Position]) -> impl IntoView {
    view! {
        <section id="experience" class="mb-16">
            <SectionHeading title="Professional Experience" />
            <div class="space-y-8 max-w-4xl mx-auto">
                {positions
                    .iter()
                    .map(|position| view! { <ExperienceCard position /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(position: &'static Position) -> impl IntoView {
    view! {
        <Reveal>
            <div class=format!(
                "{CARD} p-6 hover:shadow-xl hover:scale-[1.03] transition duration-300",
            )>
                <h3 class="text-xl font-semibold mb-2 text-indigo-600 dark:text-indigo-400">
                    {position.title.clone()}
                </h3>
                <p class="text-indigo-500 dark:text-indigo-300 mb-2">
                    {format!("{} | {}", position.company, position.period(*BUILD_DATE))}
                </p>
                <p class="text-gray-700 dark:text-gray-300 mb-4">{position.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {position
                        .skills
                        .iter()
                        .map(|s| {
                            view! {
                                <span class="bg-indigo-100 text-indigo-800 text-xs font-medium px-2.5 py-0.5 rounded dark:bg-indigo-900 dark:text-indigo-300">
                                    {s.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Expertise(items: &'static [String]) -> impl IntoView {
    view! {
        <section id="expertise" class="mb-16">
            <SectionHeading title="Additional Expertise" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-4xl mx-auto">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <Reveal class="reveal-quick">
                                <div class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-md hover:scale-105 transition duration-300">
                                    <p class="text-indigo-600 dark:text-indigo-400 font-medium">
                                        {item.clone()}
                                    </p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Summary(paragraphs: &'static [String]) -> impl IntoView {
    view! {
        <section id="summary" class="mb-16">
            <SectionHeading title="Professional Summary" />
            <Reveal class="max-w-4xl mx-auto">
                <div class=format!("{CARD} p-6")>
                    {paragraphs
                        .iter()
                        .map(|p| {
                            view! { <p class="text-gray-700 dark:text-gray-300 mb-4 last:mb-0">{p.clone()}</p> }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}
