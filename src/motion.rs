//! Declarative animation intents.
//!
//! Every animated element owns an [`AnimationIntent`] describing where it starts, where
//! it settles, what triggers the move and how long it takes. The intent renders to an
//! inline style for either endpoint and the browser's CSS transitions interpolate
//! between them.

use std::cell::Cell;
use std::fmt::Write;

/// A partial set of visual properties. `None` leaves the property to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub opacity: Option<f32>,
    /// Vertical offset in px, positive is down.
    pub y: Option<f32>,
    pub scale: Option<f32>,
}

impl VisualState {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            y: None,
            scale: None,
        }
    }

    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    fn transform(&self) -> Option<String> {
        let parts = [
            self.y.map(|y| format!("translateY({y}px)")),
            self.scale.map(|s| format!("scale({s})")),
        ];
        let parts = parts.into_iter().flatten().collect::<Vec<_>>();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnEnterViewport,
    OnHover,
}

/// Seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub delay: f32,
    pub duration: f32,
}

impl Timing {
    pub const DEFAULT_DURATION: f32 = 0.3;

    pub const fn new() -> Self {
        Self {
            delay: 0.0,
            duration: Self::DEFAULT_DURATION,
        }
    }

    pub const fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub const fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationIntent {
    pub initial: VisualState,
    pub target: VisualState,
    pub trigger: Trigger,
    pub timing: Timing,
}

impl AnimationIntent {
    pub const fn new(initial: VisualState, target: VisualState, trigger: Trigger) -> Self {
        Self {
            initial,
            target,
            trigger,
            timing: Timing::new(),
        }
    }

    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn state(&self, settled: bool) -> VisualState {
        if settled {
            self.target
        } else {
            self.initial
        }
    }

    /// Inline CSS for one endpoint, including the transition that leads into it.
    pub fn style(&self, settled: bool) -> String {
        let state = self.state(settled);
        let mut css = String::new();
        if let Some(opacity) = state.opacity {
            let _ = write!(css, "opacity: {opacity}; ");
        }
        if let Some(transform) = state.transform() {
            let _ = write!(css, "transform: {transform}; ");
        }
        let transition = self.transition();
        if !transition.is_empty() {
            let _ = write!(css, "transition: {transition};");
        }
        css.trim_end().to_string()
    }

    fn transition(&self) -> String {
        let Timing { delay, duration } = self.timing;
        let touches = |f: fn(&VisualState) -> bool| f(&self.initial) || f(&self.target);
        let mut props = Vec::new();
        if touches(|s| s.opacity.is_some()) {
            props.push("opacity");
        }
        if touches(|s| s.y.is_some() || s.scale.is_some()) {
            props.push("transform");
        }
        props
            .into_iter()
            .map(|p| format!("{p} {duration}s ease-out {delay}s"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Hero heading, subtext and call-to-action row, in declaration order.
pub const HERO_STAGGER: [AnimationIntent; 3] = [
    AnimationIntent::new(
        VisualState::new().opacity(0.0).y(30.0),
        VisualState::new().opacity(1.0).y(0.0),
        Trigger::OnMount,
    )
    .with_timing(Timing::new().duration(0.8)),
    AnimationIntent::new(
        VisualState::new().opacity(0.0),
        VisualState::new().opacity(1.0),
        Trigger::OnMount,
    )
    .with_timing(Timing::new().delay(0.3)),
    AnimationIntent::new(
        VisualState::new().opacity(0.0),
        VisualState::new().opacity(1.0),
        Trigger::OnMount,
    )
    .with_timing(Timing::new().delay(0.6)),
];

pub const SECTION_REVEAL: AnimationIntent = AnimationIntent::new(
    VisualState::new().opacity(0.0),
    VisualState::new().opacity(1.0),
    Trigger::OnEnterViewport,
);

pub const SKILL_HOVER: AnimationIntent = AnimationIntent::new(
    VisualState::new().scale(1.0),
    VisualState::new().scale(1.03),
    Trigger::OnHover,
)
.with_timing(Timing::new().duration(0.2));

pub const PROJECT_HOVER: AnimationIntent = AnimationIntent::new(
    VisualState::new().y(0.0),
    VisualState::new().y(-6.0),
    Trigger::OnHover,
)
.with_timing(Timing::new().duration(0.2));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

impl HoverState {
    /// The next state only depends on the event, so the last trigger always wins.
    pub fn apply(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => Self::Hovered,
            PointerEvent::Leave => Self::Rest,
        }
    }

    pub fn is_hovered(self) -> bool {
        self == Self::Hovered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Entered,
    Exited,
}

/// Host capability that reports when `target` crosses the visible viewport.
pub trait ViewportObserver<T>: Send + Sync {
    fn subscribe(&self, target: T, on_event: Box<dyn Fn(ViewportEvent)>);
}

/// Latch for viewport reveals: the first `Entered` flips it, nothing flips it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    /// Returns `true` only for the event that reveals the element.
    pub fn observe(&mut self, event: ViewportEvent) -> bool {
        if self.revealed || event != ViewportEvent::Entered {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Subscribes `target` and calls `on_reveal` the first time it enters the viewport.
pub fn reveal_once<T, O, F>(observer: &O, target: T, on_reveal: F)
where
    O: ViewportObserver<T> + ?Sized,
    F: Fn() + 'static,
{
    let latch = Cell::new(RevealOnce::default());
    observer.subscribe(
        target,
        Box::new(move |event| {
            let mut state = latch.get();
            let fire = state.observe(event);
            latch.set(state);
            if fire {
                on_reveal();
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct ScriptedViewport {
        events: Vec<ViewportEvent>,
    }

    impl ViewportObserver<&'static str> for ScriptedViewport {
        fn subscribe(&self, _target: &'static str, on_event: Box<dyn Fn(ViewportEvent)>) {
            for event in &self.events {
                on_event(*event);
            }
        }
    }

    #[test]
    fn test_hero_delays_are_non_decreasing() {
        assert!(HERO_STAGGER.iter().all(|i| i.trigger == Trigger::OnMount));
        let delays = HERO_STAGGER.map(|i| i.timing.delay);
        assert!(delays.windows(2).all(|w| w[0] <= w[1]), "{delays:?}");
        assert_eq!(delays, [0.0, 0.3, 0.6]);
    }

    #[test]
    fn test_hero_heading_rises_and_fades() {
        let heading = HERO_STAGGER[0];
        assert_eq!(heading.initial, VisualState::new().opacity(0.0).y(30.0));
        assert_eq!(heading.target, VisualState::new().opacity(1.0).y(0.0));
        assert_eq!(
            heading.style(false),
            "opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease-out 0s, transform 0.8s ease-out 0s;"
        );
        assert_eq!(
            heading.style(true),
            "opacity: 1; transform: translateY(0px); transition: opacity 0.8s ease-out 0s, transform 0.8s ease-out 0s;"
        );
    }

    #[test]
    fn test_opacity_only_intent_has_no_transform() {
        let style = HERO_STAGGER[2].style(false);
        assert!(!style.contains("transform"));
        assert!(style.contains("transition: opacity 0.3s ease-out 0.6s"));
    }

    #[test]
    fn test_hover_intents() {
        assert_eq!(SKILL_HOVER.trigger, Trigger::OnHover);
        assert_eq!(SKILL_HOVER.target.scale, Some(1.03));
        assert!(SKILL_HOVER.style(true).contains("transform: scale(1.03)"));
        assert!(SKILL_HOVER.style(false).contains("transform: scale(1)"));

        assert_eq!(PROJECT_HOVER.target.y, Some(-6.0));
        assert!(PROJECT_HOVER.style(true).contains("translateY(-6px)"));
    }

    #[test]
    fn test_hover_is_idempotent() {
        let once = HoverState::Rest.apply(PointerEvent::Enter);
        let twice = once.apply(PointerEvent::Enter);
        assert_eq!(once, twice);
        assert_eq!(
            PROJECT_HOVER.style(once.is_hovered()),
            PROJECT_HOVER.style(twice.is_hovered())
        );
    }

    #[test]
    fn test_hover_last_trigger_wins() {
        let events = [
            PointerEvent::Enter,
            PointerEvent::Leave,
            PointerEvent::Enter,
            PointerEvent::Leave,
            PointerEvent::Leave,
            PointerEvent::Enter,
        ];
        let end = events
            .iter()
            .fold(HoverState::default(), |s, e| s.apply(*e));
        assert_eq!(end, HoverState::Hovered);
        let end = end.apply(PointerEvent::Leave);
        assert_eq!(end, HoverState::Rest);
        assert!(!end.is_hovered());
    }

    #[test]
    fn test_reveal_latch() {
        let mut latch = RevealOnce::default();
        assert!(!latch.observe(ViewportEvent::Exited));
        assert!(!latch.is_revealed());
        assert!(latch.observe(ViewportEvent::Entered));
        assert!(!latch.observe(ViewportEvent::Exited));
        assert!(!latch.observe(ViewportEvent::Entered));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveal_fires_once_across_long_scroll() {
        let mut events = vec![ViewportEvent::Exited];
        for _ in 0..50 {
            events.push(ViewportEvent::Entered);
            events.push(ViewportEvent::Exited);
        }
        let viewport = ScriptedViewport { events };
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        reveal_once(&viewport, "#skills", move || counter.set(counter.get() + 1));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_reveal_never_fires_offscreen() {
        let viewport = ScriptedViewport {
            events: vec![ViewportEvent::Exited, ViewportEvent::Exited],
        };
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        reveal_once(&viewport, "#contact", move || flag.set(true));
        assert!(!fired.get());
    }

    #[test]
    fn test_section_reveal_starts_hidden() {
        assert_eq!(SECTION_REVEAL.trigger, Trigger::OnEnterViewport);
        assert!(SECTION_REVEAL.style(false).starts_with("opacity: 0;"));
        assert!(SECTION_REVEAL.style(true).starts_with("opacity: 1;"));
    }
}
