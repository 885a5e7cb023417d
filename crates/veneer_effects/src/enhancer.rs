//! The enhancement engine
//!
//! `Enhancer` owns the page document, the listener table, the timer and
//! frame queues, and the theme state, and drives everything from the
//! embedder's single-threaded loop. Page-ready boot order matches the
//! original control flow: palette variables, then the stored scheme, then
//! one scan per attacher, then the mutation watcher.

use rustc_hash::FxHashMap;
use veneer_core::{event_types, Event, EventDispatcher, ListenerId, NodeId};
use veneer_motion::{FrameHandle, FrameScheduler, TimerQueue};
use veneer_page::{Document, ScrollBehavior};
use veneer_theme::{
    ColorScheme, Palette, PaletteStore, PartialPalette, ThemeController, ThemeStore,
};

use crate::marks::{AttachmentRegistry, BehaviorMarks};
use crate::typed::TypedCycle;
use crate::{hero, ripple, selectors, tilt, typed};

/// Visibility fraction at which a reveal target fires
pub const REVEAL_THRESHOLD: f32 = 0.14;

/// What a bound listener does when its event arrives
#[derive(Clone, Copy, Debug)]
enum EffectAction {
    Ripple,
    TiltMove,
    TiltReset,
    SmoothScroll,
    ToggleTheme,
}

/// Deferred one-shot work
#[derive(Clone, Copy, Debug)]
enum TimerTask {
    RippleFade { overlay: NodeId },
    RippleRemove { overlay: NodeId },
    TypedStep { node: NodeId },
}

/// Per-frame work
#[derive(Clone, Copy, Debug)]
enum FrameTask {
    HeroSpin { node: NodeId },
}

/// The page-enhancement engine
pub struct Enhancer {
    doc: Document,
    dispatcher: EventDispatcher<EffectAction>,
    timers: TimerQueue<TimerTask>,
    frames: FrameScheduler<FrameTask>,
    registry: AttachmentRegistry,
    palette: PaletteStore,
    theme: ThemeController,
    typed: FxHashMap<NodeId, TypedCycle>,
    subscriptions: Vec<ListenerId>,
    hero_handle: Option<FrameHandle>,
    hero_angle: f32,
    watching: bool,
    now_ms: f64,
}

impl Enhancer {
    /// Build an engine over a document with the default palette. The stored
    /// theme flag is read once, here.
    pub fn new(doc: Document, store: Box<dyn ThemeStore>) -> Self {
        Self::with_palette(doc, Palette::default(), store)
    }

    pub fn with_palette(doc: Document, palette: Palette, store: Box<dyn ThemeStore>) -> Self {
        Self {
            doc,
            dispatcher: EventDispatcher::new(),
            timers: TimerQueue::new(),
            frames: FrameScheduler::new(),
            registry: AttachmentRegistry::new(),
            palette: PaletteStore::new(palette),
            theme: ThemeController::new(store),
            typed: FxHashMap::default(),
            subscriptions: Vec::new(),
            hero_handle: None,
            hero_angle: 0.0,
            watching: false,
            now_ms: 0.0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Direct page access for embedders building or mutating markup.
    /// Insertions made here are picked up on the next [`Enhancer::pump`].
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    // ========== Boot ==========

    /// Page-ready initialization: publish palette variables, apply the
    /// stored scheme, run every attacher once, start watching insertions.
    pub fn enhance(&mut self) {
        self.palette.publish(&mut self.doc);
        let scheme = self.theme.scheme();
        self.theme.set_scheme(&mut self.doc, &self.palette, scheme);

        let body = self.doc.body();
        self.attach_button_ripples(body);
        self.attach_card_tilts(body);
        self.attach_smooth_scroll(body);
        self.apply_accent_colors(body);
        self.attach_theme_toggles(body);
        self.init_reveal();
        self.init_typed();
        self.start_hero_animation();

        // Records from building the initial page are not "dynamic content"
        self.doc.take_inserted();
        self.watching = true;
        tracing::debug!(scheme = %scheme, "page enhanced");
    }

    // ========== Palette & theme ==========

    /// Merge a partial palette, republish all variables, and re-apply the
    /// current scheme's body colors
    pub fn apply_palette(&mut self, partial: PartialPalette) {
        self.palette
            .apply(&mut self.doc, self.theme.scheme(), partial);
    }

    /// A copy of the current palette
    pub fn get_palette(&self) -> Palette {
        self.palette.palette()
    }

    /// Set the theme by name; anything other than `"light"` is dark
    pub fn set_theme(&mut self, name: &str) {
        let scheme = ColorScheme::normalize(name);
        self.theme.set_scheme(&mut self.doc, &self.palette, scheme);
    }

    /// The current theme flag, `"dark"` or `"light"`
    pub fn get_theme(&self) -> &'static str {
        self.theme.scheme().as_str()
    }

    // ========== Attachers ==========

    /// Bind press ripples to unmarked `.btn` descendants of `root`
    pub fn attach_button_ripples(&mut self, root: NodeId) {
        for node in self.doc.query_within(root, &selectors::buttons()) {
            if !self.registry.try_mark(node, BehaviorMarks::RIPPLE) {
                continue;
            }
            let id = self
                .dispatcher
                .register(node, event_types::POINTER_DOWN, EffectAction::Ripple);
            self.subscriptions.push(id);
        }
    }

    /// Bind pointer tilt to unmarked `.card` descendants of `root`
    pub fn attach_card_tilts(&mut self, root: NodeId) {
        for node in self.doc.query_within(root, &selectors::cards()) {
            if !self.registry.try_mark(node, BehaviorMarks::TILT) {
                continue;
            }
            let move_id =
                self.dispatcher
                    .register(node, event_types::POINTER_MOVE, EffectAction::TiltMove);
            let leave_id =
                self.dispatcher
                    .register(node, event_types::POINTER_LEAVE, EffectAction::TiltReset);
            self.subscriptions.push(move_id);
            self.subscriptions.push(leave_id);
        }
    }

    /// Intercept clicks on unmarked smooth-scroll anchors whose href is an
    /// in-page fragment
    pub fn attach_smooth_scroll(&mut self, root: NodeId) {
        for node in self.doc.query_within(root, &selectors::smooth_anchors()) {
            let is_fragment = self
                .doc
                .attr(node, "href")
                .is_some_and(|href| href.len() > 1 && href.starts_with('#'));
            if !is_fragment {
                continue;
            }
            if !self.registry.try_mark(node, BehaviorMarks::SMOOTH) {
                continue;
            }
            let id =
                self.dispatcher
                    .register(node, event_types::CLICK, EffectAction::SmoothScroll);
            self.subscriptions.push(id);
        }
    }

    /// Wire unmarked `.accent` descendants to the accent variable
    pub fn apply_accent_colors(&mut self, root: NodeId) {
        for node in self.doc.query_within(root, &selectors::accents()) {
            if !self.registry.try_mark(node, BehaviorMarks::ACCENT) {
                continue;
            }
            self.doc.set_style(node, "color", "var(accent)");
        }
    }

    /// Bind scheme toggling to unmarked `[data-theme-toggle]` controls
    pub fn attach_theme_toggles(&mut self, root: NodeId) {
        for node in self.doc.query_within(root, &selectors::theme_toggles()) {
            if !self.registry.try_mark(node, BehaviorMarks::TOGGLE) {
                continue;
            }
            let id = self
                .dispatcher
                .register(node, event_types::CLICK, EffectAction::ToggleTheme);
            self.subscriptions.push(id);
        }
    }

    /// Hide unmarked `[data-reveal]` elements and observe them at the
    /// reveal threshold
    pub fn init_reveal(&mut self) {
        for node in self.doc.query_all(&selectors::reveals()) {
            if !self.registry.try_mark(node, BehaviorMarks::REVEAL) {
                continue;
            }
            self.doc.set_style(node, "opacity", "0");
            self.doc.set_style(node, "transform", "translateY(24px)");
            self.doc.observe(node, REVEAL_THRESHOLD);
        }
    }

    /// Start the typing cycle on unmarked `[data-typed]` elements
    pub fn init_typed(&mut self) {
        for node in self.doc.query_all(&selectors::typed()) {
            if !self.registry.try_mark(node, BehaviorMarks::TYPED) {
                continue;
            }
            let Some(attr) = self
                .doc
                .attr(node, selectors::TYPED_ATTR)
                .map(str::to_owned)
            else {
                continue;
            };
            let Some(cycle) = TypedCycle::parse(&attr) else {
                tracing::debug!(?node, "typed attribute has no usable entries");
                continue;
            };
            self.doc.set_text(node, "");
            self.typed.insert(node, cycle);
            self.timers
                .schedule(self.now_ms + typed::TYPE_MS, TimerTask::TypedStep { node });
        }
    }

    // ========== Hero animation ==========

    /// Start the rotating hero gradient. A prior loop is cancelled first,
    /// so there is never more than one.
    pub fn start_hero_animation(&mut self) {
        let Some(node) = self.doc.query_all(&selectors::hero()).into_iter().next() else {
            tracing::debug!("no hero element, gradient loop not started");
            return;
        };
        if let Some(previous) = self.hero_handle.take() {
            self.frames.cancel(previous);
        }
        self.hero_handle = Some(self.frames.request(FrameTask::HeroSpin { node }));
    }

    /// Stop the hero loop and clear its handle
    pub fn cancel_hero_animation(&mut self) {
        if let Some(handle) = self.hero_handle.take() {
            self.frames.cancel(handle);
        }
    }

    /// Whether a hero loop is currently scheduled
    pub fn hero_active(&self) -> bool {
        self.hero_handle
            .is_some_and(|handle| self.frames.is_active(handle))
    }

    /// Number of live per-frame tasks
    pub fn active_frame_tasks(&self) -> usize {
        self.frames.len()
    }

    // ========== Driving ==========

    /// Deliver an input event, bubbling from the target to the root, then
    /// process any mutations it caused. The event comes back so embedders
    /// can honor `default_prevented` before performing native handling.
    pub fn dispatch(&mut self, mut event: Event) -> Event {
        let chain = self.doc.ancestor_chain(event.target);
        'bubble: for node in chain {
            let actions = self.dispatcher.actions_for(node, &event);
            for action in actions {
                self.handle_action(action, node, &mut event);
                if event.propagation_stopped {
                    break 'bubble;
                }
            }
        }
        self.pump();
        event
    }

    /// Advance virtual time, delivering due timers in deadline order
    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
        while let Some((deadline, task)) = self.timers.pop_due(self.now_ms) {
            self.handle_timer(deadline, task);
        }
    }

    /// Run one animation-frame tick
    pub fn run_frame(&mut self) {
        for (handle, task) in self.frames.snapshot() {
            match task {
                FrameTask::HeroSpin { node } => {
                    if !self.doc.contains(node) {
                        self.frames.cancel(handle);
                        if self.hero_handle == Some(handle) {
                            self.hero_handle = None;
                        }
                        continue;
                    }
                    self.hero_angle = hero::advance(self.hero_angle);
                    self.doc
                        .set_style(node, "background", hero::gradient(self.hero_angle));
                }
            }
        }
    }

    /// Process queued observations: reveal intersections, then insertions.
    /// While watching, any insertion re-runs the idempotent attachers over
    /// the whole document; reveal and hero are deliberately not re-armed.
    pub fn pump(&mut self) {
        for node in self.doc.take_intersections() {
            self.doc.add_class(node, selectors::REVEALED_CLASS);
            self.doc.remove_style(node, "opacity");
            self.doc.remove_style(node, "transform");
            self.doc.unobserve(node);
        }

        let inserted = self.doc.take_inserted();
        if self.watching && !inserted.is_empty() {
            tracing::trace!(count = inserted.len(), "insertions observed, re-scanning");
            let body = self.doc.body();
            self.attach_button_ripples(body);
            self.attach_card_tilts(body);
            self.attach_smooth_scroll(body);
            self.init_typed();
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of listeners bound for an element and event type
    pub fn listener_count(&self, node: NodeId, event_type: veneer_core::EventType) -> usize {
        self.dispatcher.listener_count(node, event_type)
    }

    /// Dispose of every binding and stop all loops. The document survives;
    /// the decorations do not.
    pub fn teardown(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.dispatcher.unregister(id);
        }
        self.cancel_hero_animation();
        self.typed.clear();
        self.watching = false;
    }

    // ========== Handlers ==========

    fn handle_action(&mut self, action: EffectAction, node: NodeId, event: &mut Event) {
        match action {
            EffectAction::Ripple => self.spawn_ripple(node, event),
            EffectAction::TiltMove => self.apply_tilt(node, event),
            EffectAction::TiltReset => {
                self.doc.remove_style(node, "transform");
                self.doc.remove_style(node, "box-shadow");
            }
            EffectAction::SmoothScroll => self.smooth_scroll(node, event),
            EffectAction::ToggleTheme => {
                self.theme.toggle(&mut self.doc, &self.palette);
            }
        }
    }

    fn spawn_ripple(&mut self, node: NodeId, event: &Event) {
        let Some((x, y)) = event.pointer_position() else {
            return;
        };
        let geometry = ripple::overlay_geometry(self.doc.rect(node), x, y);

        let overlay = self.doc.create_element("span");
        self.doc.add_class(overlay, selectors::RIPPLE_CLASS);
        self.doc.set_style(overlay, "position", "absolute");
        self.doc
            .set_style(overlay, "width", format!("{:.0}px", geometry.size));
        self.doc
            .set_style(overlay, "height", format!("{:.0}px", geometry.size));
        self.doc
            .set_style(overlay, "left", format!("{:.0}px", geometry.left));
        self.doc
            .set_style(overlay, "top", format!("{:.0}px", geometry.top));
        self.doc.set_style(
            overlay,
            "transition",
            format!("transform {0}ms ease, opacity {0}ms ease", ripple::FADE_MS),
        );
        self.doc.append_child(node, overlay);

        // The transition animates these from the overlay's initial state
        self.doc.set_style(overlay, "transform", "scale(1)");
        self.doc.set_style(overlay, "opacity", "0.4");

        self.timers.schedule(
            self.now_ms + ripple::HOLD_MS,
            TimerTask::RippleFade { overlay },
        );
        self.timers.schedule(
            self.now_ms + ripple::HOLD_MS + ripple::FADE_MS,
            TimerTask::RippleRemove { overlay },
        );
    }

    fn apply_tilt(&mut self, node: NodeId, event: &Event) {
        let Some((x, y)) = event.pointer_position() else {
            return;
        };
        if let Some(transform) = tilt::transform(self.doc.rect(node), x, y) {
            self.doc.set_style(node, "transform", transform);
            self.doc
                .set_style(node, "box-shadow", "0 18px 40px var(card-shadow)");
        }
    }

    fn smooth_scroll(&mut self, node: NodeId, event: &mut Event) {
        event.prevent_default();
        let Some(fragment) = self
            .doc
            .attr(node, "href")
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_owned)
        else {
            return;
        };
        match self.doc.find_by_id(&fragment) {
            Some(target) => self.doc.scroll_to(target, ScrollBehavior::Smooth),
            None => tracing::debug!(%fragment, "smooth-scroll target not found"),
        }
    }

    fn handle_timer(&mut self, deadline: f64, task: TimerTask) {
        match task {
            TimerTask::RippleFade { overlay } => {
                self.doc.set_style(overlay, "opacity", "0");
            }
            TimerTask::RippleRemove { overlay } => {
                self.doc.remove(overlay);
            }
            TimerTask::TypedStep { node } => {
                if !self.doc.contains(node) {
                    self.typed.remove(&node);
                    return;
                }
                let Some(cycle) = self.typed.get_mut(&node) else {
                    return;
                };
                let (text, delay) = cycle.step();
                self.doc.set_text(node, text);
                // Chain from the deadline, not from the processing time, so
                // the cadence survives coarse advances
                self.timers
                    .schedule(deadline + delay, TimerTask::TypedStep { node });
            }
        }
    }
}
