use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion::{reveal_once, ViewportEvent, ViewportObserver, SECTION_REVEAL};

pub type HeadingRef = NodeRef<html::H3>;

/// Viewport capability handed to section headings through context.
#[derive(Clone)]
pub struct Viewport(pub Arc<dyn ViewportObserver<HeadingRef>>);

impl Viewport {
    pub fn intersection() -> Self {
        Self(Arc::new(IntersectionViewport))
    }
}

/// Browser viewport backed by `IntersectionObserver`. A no-op while rendering on the server.
pub struct IntersectionViewport;

impl ViewportObserver<HeadingRef> for IntersectionViewport {
    fn subscribe(&self, target: HeadingRef, on_event: Box<dyn Fn(ViewportEvent)>) {
        let _ = use_intersection_observer(target, move |entries, _| {
            for entry in entries {
                let event = if entry.is_intersecting() {
                    ViewportEvent::Entered
                } else {
                    ViewportEvent::Exited
                };
                log::debug!("section heading {event:?}");
                on_event(event);
            }
        });
    }
}

/// Section heading that fades in the first time it scrolls into view.
#[component]
pub fn SectionHeading(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let heading = HeadingRef::new();
    let (revealed, set_revealed) = signal(false);
    let viewport = use_context::<Viewport>().unwrap_or_else(Viewport::intersection);
    reveal_once(&*viewport.0, heading, move || set_revealed.set(true));

    view! {
        <h3 node_ref=heading class=class style=move || SECTION_REVEAL.style(revealed.get())>
            {children()}
        </h3>
    }
}

/// Flips to `true` on the first animation frame after the component mounts in the browser.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || {
            log::debug!("mounted, starting entrance animations");
            set_mounted.set(true);
        });
    });
    mounted
}
