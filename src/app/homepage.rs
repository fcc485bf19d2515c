use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::cards::{ProjectCard, SkillCard};
use super::reveal::{use_mounted, SectionHeading};
use crate::content::{
    ABOUT, BUILD_YEAR, CONTACTS, CONTACT_BLURB, FOOTER_ROLE, HEADLINE, INTRO, OWNER, PROJECTS,
    RESUME_FILE, RESUME_PATH, SKILLS,
};
use crate::motion::HERO_STAGGER;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Frontend Developer" />
        <Meta name="description" content=INTRO />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let mounted = use_mounted();
    let [heading, subtext, actions] = HERO_STAGGER;

    view! {
        <section class="pt-36 pb-28 text-center px-6">
            <h2
                class="text-4xl md:text-6xl font-extrabold mb-6"
                style=move || heading.style(mounted.get())
            >
                {HEADLINE}
            </h2>
            <p
                class="max-w-2xl mx-auto text-gray-400 mb-8"
                style=move || subtext.style(mounted.get())
            >
                {INTRO}
            </p>
            <div
                class="flex justify-center gap-4 flex-wrap"
                style=move || actions.style(mounted.get())
            >
                <a
                    href="#projects"
                    class="px-6 py-3 bg-indigo-600 rounded-xl hover:bg-indigo-700 transition"
                >
                    "View Projects"
                </a>
                <a
                    href=RESUME_PATH
                    download=RESUME_FILE
                    class="flex items-center gap-2 px-6 py-3 border border-white/20 rounded-xl hover:border-indigo-400 transition"
                >
                    <DownloadIcon />
                    "Download Resume"
                </a>
            </div>
        </section>
    }
}

#[component]
fn DownloadIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="18"
            height="18"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" y1="15" x2="12" y2="3" />
        </svg>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="max-w-6xl mx-auto px-6 py-24">
            <SectionHeading class="text-3xl font-semibold mb-6">"About Me"</SectionHeading>
            <p class="text-gray-400 leading-relaxed">{ABOUT}</p>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="bg-black/40 py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading class="text-3xl font-semibold mb-12">
                    "Technical Skills"
                </SectionHeading>
                <div class="grid md:grid-cols-2 gap-10">
                    {SKILLS
                        .into_iter()
                        .map(|group| view! { <SkillCard title=group.title items=group.items /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="max-w-6xl mx-auto px-6 py-24">
            <SectionHeading class="text-3xl font-semibold mb-12">"Projects"</SectionHeading>
            <div class="grid md:grid-cols-2 gap-10">
                {PROJECTS
                    .into_iter()
                    .map(|project| {
                        view! {
                            <ProjectCard
                                title=project.title
                                description=project.description
                                technologies=project.technologies
                                demo_url=project.demo_url
                                source_url=project.source_url
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="bg-black/40 py-24 px-6 text-center">
            <SectionHeading class="text-3xl font-semibold mb-6">"Contact"</SectionHeading>
            <p class="text-gray-400 mb-4">{CONTACT_BLURB}</p>
            {CONTACTS
                .into_iter()
                .map(|link| {
                    view! {
                        <p>
                            {link.kind} ": "
                            <a class="text-indigo-400" href=link.href>
                                {link.text}
                            </a>
                        </p>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center py-6 text-gray-500 text-sm">
            {format!("© {BUILD_YEAR} {OWNER} · {FOOTER_ROLE}")}
        </footer>
    }
}
