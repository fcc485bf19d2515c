use leptos::prelude::*;

use crate::content::link_target;
use crate::motion::{HoverState, PointerEvent, PROJECT_HOVER, SKILL_HOVER};

#[component]
pub fn SkillCard(title: &'static str, items: &'static str) -> impl IntoView {
    let hover = RwSignal::new(HoverState::Rest);

    view! {
        <div
            class="skill-card bg-white/5 rounded-2xl p-6 border border-white/10"
            style=move || SKILL_HOVER.style(hover.get().is_hovered())
            on:pointerenter=move |_| hover.update(|h| *h = h.apply(PointerEvent::Enter))
            on:pointerleave=move |_| hover.update(|h| *h = h.apply(PointerEvent::Leave))
        >
            <h4 class="text-lg font-semibold mb-2">{title}</h4>
            <p class="text-gray-400">{items}</p>
        </div>
    }
}

/// Project card. Each action link renders only when its URL is present and non-empty.
#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    technologies: &'static str,
    #[prop(optional_no_strip)] demo_url: Option<&'static str>,
    #[prop(optional_no_strip)] source_url: Option<&'static str>,
) -> impl IntoView {
    let hover = RwSignal::new(HoverState::Rest);

    view! {
        <div
            class="project-card bg-white/5 rounded-2xl p-6 border border-white/10"
            style=move || PROJECT_HOVER.style(hover.get().is_hovered())
            on:pointerenter=move |_| hover.update(|h| *h = h.apply(PointerEvent::Enter))
            on:pointerleave=move |_| hover.update(|h| *h = h.apply(PointerEvent::Leave))
        >
            <div class="h-40 bg-gradient-to-br from-indigo-500/20 to-purple-500/20 rounded-xl mb-4 flex items-center justify-center text-gray-400 text-sm">
                "Project Preview"
            </div>
            <h4 class="text-xl font-semibold mb-2">{title}</h4>
            <p class="text-gray-400 mb-3">{description}</p>
            <p class="text-sm text-indigo-400 mb-4">{technologies}</p>
            <div class="flex gap-3">
                {link_target(demo_url)
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 text-sm bg-indigo-600 rounded-lg hover:bg-indigo-700"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
                {link_target(source_url)
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 text-sm border border-white/20 rounded-lg hover:border-indigo-400"
                            >
                                "Code"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
