use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Interval;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::content::{
    self, AppIcon, Publication, TimelineKind, ABOUT, APPS, CONTACT, FILTER_TAGS, NAME, PROJECTS,
    SKILLS, SUMMARY, TEACHING, TIMELINE, TITLE,
};
use crate::filter::{filtered_publications, ActiveFilter};
use crate::motion::{self, Particle};
use crate::theme::Theme;

const NAV_LINKS: &[&str] = &["About", "Projects", "Apps", "Teaching", "Publications"];
const PUBLICATIONS_SECTION_ID: &str = "publications";

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The update callback runs in a later task, after the snapshot; it must
    // outlive this call, so hand ownership to the JS side.
    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn scroll_to_publications() {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PUBLICATIONS_SECTION_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// An IntersectionObserver bound to one element, disconnected on drop.
struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatch {
    fn new(
        element: &Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            if let Some(entry) = entries.get(0).dyn_ref::<IntersectionObserverEntry>() {
                on_change(entry.is_intersecting());
            }
        });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or(0.2)]
    threshold: f64,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

/// One-shot entrance animation: hidden until the element first crosses the
/// visibility threshold, visible forever after.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((node, props.threshold), move |(node, threshold)| {
            let watch = node.cast::<Element>().and_then(|element| {
                let fired = Cell::new(false);
                VisibilityWatch::new(&element, *threshold, move |visible| {
                    if visible && !fired.replace(true) {
                        revealed.set(true);
                    }
                })
            });
            move || drop(watch)
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then_some("is-visible"), props.class.clone())}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScrambleTextProps {
    text: AttrValue,
    #[prop_or(0.6)]
    threshold: f64,
    #[prop_or_default]
    class: Classes,
}

struct ScrambleDriver {
    cursor: f64,
    interval: Option<Interval>,
}

/// Entering the visibility threshold (re)starts the scramble from zero;
/// leaving cancels it. At most one interval is ever live per instance.
#[function_component(ScrambleText)]
fn scramble_text(props: &ScrambleTextProps) -> Html {
    let node = use_node_ref();
    let display = use_state(|| props.text.to_string());
    let driver = use_mut_ref(|| ScrambleDriver {
        cursor: 0.0,
        interval: None,
    });

    {
        let node = node.clone();
        let display = display.clone();
        let driver = driver.clone();
        use_effect_with(
            (node, props.text.clone(), props.threshold),
            move |(node, text, threshold)| {
                let text = text.to_string();
                let watch = node.cast::<Element>().and_then(|element| {
                    let watch_driver = driver.clone();
                    VisibilityWatch::new(&element, *threshold, move |visible| {
                        let mut state = watch_driver.borrow_mut();
                        // Cancel any running timer before anything else so
                        // two timers can never write the same buffer.
                        state.interval = None;
                        if !visible {
                            return;
                        }
                        state.cursor = 0.0;
                        let display = display.clone();
                        let text = text.clone();
                        let tick_driver = watch_driver.clone();
                        state.interval = Some(Interval::new(motion::SCRAMBLE_TICK_MS, move || {
                            let mut state = tick_driver.borrow_mut();
                            state.cursor += motion::SCRAMBLE_CURSOR_STEP;
                            if motion::scramble_done(&text, state.cursor) {
                                state.interval = None;
                                display.set(text.to_string());
                            } else {
                                display.set(motion::scramble_frame(
                                    &text,
                                    state.cursor,
                                    js_sys::Math::random,
                                ));
                            }
                        }));
                    })
                });
                move || {
                    driver.borrow_mut().interval = None;
                    drop(watch);
                }
            },
        );
    }

    html! {
        <span ref={node} class={classes!("scramble", props.class.clone())} aria-label={props.text.clone()}>
            { (*display).clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
    #[prop_or_default]
    children: Html,
}

struct TiltDriver {
    rotate_x: f64,
    rotate_y: f64,
    velocity_x: f64,
    velocity_y: f64,
    target_x: f64,
    target_y: f64,
    last_timestamp: Option<f64>,
    frame: Option<AnimationFrame>,
}

impl TiltDriver {
    fn at_rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            last_timestamp: None,
            frame: None,
        }
    }
}

fn tilt_apply(node: &NodeRef, rotate_x: f64, rotate_y: f64) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property(
            "transform",
            &format!("perspective(800px) rotateX({rotate_x:.3}deg) rotateY({rotate_y:.3}deg)"),
        );
    }
}

/// Runs the tilt spring one frame at a time, rescheduling itself until
/// both axes settle.
fn tilt_schedule(driver: &Rc<RefCell<TiltDriver>>, node: &NodeRef) {
    if driver.borrow().frame.is_some() {
        return;
    }
    let handle = driver.clone();
    let node = node.clone();
    let frame = request_animation_frame(move |timestamp| {
        let rerun = {
            let mut state = handle.borrow_mut();
            state.frame = None;
            let dt = match state.last_timestamp.replace(timestamp) {
                Some(last) => ((timestamp - last) / 1000.0).clamp(0.0, 0.1),
                None => 0.0,
            };
            let (rotate_x, velocity_x) = motion::spring_step(
                state.rotate_x,
                state.velocity_x,
                state.target_x,
                motion::TILT_SPRING_OMEGA,
                dt,
            );
            let (rotate_y, velocity_y) = motion::spring_step(
                state.rotate_y,
                state.velocity_y,
                state.target_y,
                motion::TILT_SPRING_OMEGA,
                dt,
            );
            if motion::spring_settled(rotate_x, velocity_x, state.target_x)
                && motion::spring_settled(rotate_y, velocity_y, state.target_y)
            {
                state.rotate_x = state.target_x;
                state.rotate_y = state.target_y;
                state.velocity_x = 0.0;
                state.velocity_y = 0.0;
                state.last_timestamp = None;
                tilt_apply(&node, state.rotate_x, state.rotate_y);
                false
            } else {
                state.rotate_x = rotate_x;
                state.rotate_y = rotate_y;
                state.velocity_x = velocity_x;
                state.velocity_y = velocity_y;
                tilt_apply(&node, rotate_x, rotate_y);
                true
            }
        };
        if rerun {
            tilt_schedule(&handle, &node);
        }
    });
    driver.borrow_mut().frame = Some(frame);
}

/// Card that leans toward the pointer, smoothed through the tilt spring
/// instead of snapping to the raw value.
#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let driver = use_mut_ref(TiltDriver::at_rest);
    let reduced_motion = *use_memo((), |_| prefers_reduced_motion());

    let onmousemove = {
        let node = node.clone();
        let driver = driver.clone();
        Callback::from(move |event: MouseEvent| {
            if reduced_motion {
                return;
            }
            let Some(element) = node.cast::<HtmlElement>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let (target_x, target_y) = motion::tilt_target(
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            {
                let mut state = driver.borrow_mut();
                state.target_x = target_x;
                state.target_y = target_y;
            }
            tilt_schedule(&driver, &node);
        })
    };

    let onmouseleave = {
        let node = node.clone();
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if reduced_motion {
                return;
            }
            {
                let mut state = driver.borrow_mut();
                state.target_x = 0.0;
                state.target_y = 0.0;
            }
            tilt_schedule(&driver, &node);
        })
    };

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            move || {
                driver.borrow_mut().frame = None;
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MarqueeProps {
    #[prop_or(motion::MARQUEE_VELOCITY)]
    velocity: f64,
    #[prop_or_default]
    children: Html,
}

/// Measures one marquee copy, retrying next frame while layout still
/// reports a zero width so a zero-duration loop can never start.
fn measure_marquee(
    copy_ref: &NodeRef,
    cycle_width: &UseStateHandle<Option<f64>>,
    retry: &Rc<RefCell<Option<AnimationFrame>>>,
) {
    if let Some(element) = copy_ref.cast::<HtmlElement>() {
        let measured = f64::from(element.offset_width());
        if measured > 0.0 {
            retry.borrow_mut().take();
            cycle_width.set(Some(measured));
            return;
        }
    }
    let copy_ref = copy_ref.clone();
    let cycle_width = cycle_width.clone();
    let retry_handle = retry.clone();
    *retry.borrow_mut() = Some(request_animation_frame(move |_| {
        measure_marquee(&copy_ref, &cycle_width, &retry_handle);
    }));
}

/// Infinite horizontal strip: the children render twice back-to-back and a
/// CSS keyframe loop translates the track by exactly one copy's width, so
/// the wrap lands on identical pixels. A window resize drops the cached
/// measurement for one render so the loop restarts cleanly.
#[function_component(Marquee)]
fn marquee(props: &MarqueeProps) -> Html {
    let copy_ref = use_node_ref();
    let cycle_width = use_state(|| None::<f64>);
    let retry = use_mut_ref(|| None::<AnimationFrame>);

    {
        let copy_ref = copy_ref.clone();
        let cycle_width = cycle_width.clone();
        let retry = retry.clone();
        use_effect(move || {
            if (*cycle_width).is_none() {
                measure_marquee(&copy_ref, &cycle_width, &retry);
            }
            || ()
        });
    }

    {
        let cycle_width = cycle_width.clone();
        let retry = retry.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "resize", move |_| {
                    cycle_width.set(None);
                })
            });
            move || {
                retry.borrow_mut().take();
                drop(listener);
            }
        });
    }

    let style = (*cycle_width).and_then(|width| {
        motion::marquee_duration_secs(width, props.velocity).map(|duration| {
            format!("--marquee-distance: {width:.2}px; --marquee-duration: {duration:.3}s;")
        })
    });

    html! {
        <div class="marquee">
            <div class={classes!("marquee-track", style.is_some().then_some("is-animating"))} style={style}>
                <div class="marquee-copy" ref={copy_ref}>{ props.children.clone() }</div>
                <div class="marquee-copy" aria-hidden="true">{ props.children.clone() }</div>
            </div>
        </div>
    }
}

/// Pointer coordinates go straight into CSS custom properties; no
/// re-render per move.
#[function_component(CursorSpotlight)]
fn cursor_spotlight() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(element) = node.cast::<HtmlElement>() else {
                        return;
                    };
                    let style = element.style();
                    let _ = style.set_property("--cursor-x", &format!("{}px", event.client_x()));
                    let _ = style.set_property("--cursor-y", &format!("{}px", event.client_y()));
                })
            });
            move || drop(listener)
        });
    }

    html! { <div ref={node} class="cursor-spotlight" aria-hidden="true"></div> }
}

const PARTICLE_COUNT: usize = 60;

struct CanvasDriver {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    last_timestamp: Option<f64>,
    frame: Option<AnimationFrame>,
}

fn seed_particles(width: f64, height: f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x: js_sys::Math::random() * width,
            y: js_sys::Math::random() * height,
            vx: (js_sys::Math::random() - 0.5) * 24.0,
            vy: (js_sys::Math::random() - 0.5) * 24.0,
            radius: 0.8 + js_sys::Math::random() * 1.4,
        })
        .collect()
}

fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = f64::from(canvas.client_width()).max(0.0);
    let height = f64::from(canvas.client_height()).max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn canvas_schedule(driver: &Rc<RefCell<CanvasDriver>>, context: &CanvasRenderingContext2d) {
    let handle = driver.clone();
    let context = context.clone();
    let frame = request_animation_frame(move |timestamp| {
        {
            let mut state = handle.borrow_mut();
            state.frame = None;
            let dt = match state.last_timestamp.replace(timestamp) {
                Some(last) => ((timestamp - last) / 1000.0).clamp(0.0, 0.1),
                None => 0.0,
            };
            let (width, height) = (state.width, state.height);
            context.clear_rect(0.0, 0.0, width, height);
            for particle in &mut state.particles {
                particle.advance(dt, width, height);
                context.begin_path();
                let _ = context.arc(
                    particle.x,
                    particle.y,
                    particle.radius,
                    0.0,
                    std::f64::consts::TAU,
                );
                context.fill();
            }
        }
        canvas_schedule(&handle, &context);
    });
    driver.borrow_mut().frame = Some(frame);
}

/// Drifting-particle backdrop behind the hero. Skipped entirely under
/// `prefers-reduced-motion`.
#[function_component(CanvasBackground)]
fn canvas_background() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            let mut driver_handle = None;

            if !prefers_reduced_motion() {
                if let Some(canvas) = node.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok());
                    if let Some(context) = context {
                        let (width, height) = fit_canvas(&canvas);
                        context.set_fill_style_str("rgba(120, 119, 198, 0.35)");
                        let driver = Rc::new(RefCell::new(CanvasDriver {
                            particles: seed_particles(width, height),
                            width,
                            height,
                            last_timestamp: None,
                            frame: None,
                        }));
                        canvas_schedule(&driver, &context);

                        if let Some(w) = window() {
                            let resize_driver = driver.clone();
                            listener = Some(EventListener::new(&w, "resize", move |_| {
                                let (width, height) = fit_canvas(&canvas);
                                let mut state = resize_driver.borrow_mut();
                                state.width = width;
                                state.height = height;
                            }));
                        }
                        driver_handle = Some(driver);
                    }
                }
            }

            move || {
                drop(listener);
                if let Some(driver) = driver_handle {
                    driver.borrow_mut().frame = None;
                }
            }
        });
    }

    html! { <canvas ref={node} class="hero-canvas" aria-hidden="true"></canvas> }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

fn lucide_svg(body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

fn icon_mail() -> Html {
    lucide_svg(html! {
        <>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </>
    })
}

fn icon_linkedin() -> Html {
    lucide_svg(html! {
        <>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        </>
    })
}

fn icon_scholar() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" width="20" height="20" aria-hidden="true">
            <path fill="currentColor" d="M512 256c0 113.6-84.6 207.4-194.2 222c-12.3 2.3-24.3-6.8-26.6-19.1s6.8-24.3 19.1-26.6C404.1 414.9 480.6 342.6 480.6 256c0-106-86-192-192-192s-192 86-192 192c0 31.8 7.8 62 21.7 88.4c11.9 22.8 3.3 51.2-19.5 63.1s-51.2-3.3-63.1-19.5C2.5 344.3 0 299.8 0 256C0 114.6 114.6 0 256 0S512 114.6 512 256zM153.1 312.3c3-11.2-2.3-22.9-13.5-25.9s-22.9 2.3-25.9 13.5s2.3 22.9 13.5 25.9s22.9-2.2 25.9-13.5zM224 336c0-44.2 35.8-80 80-80s80 35.8 80 80s-35.8 80-80 80s-80-35.8-80-80z" />
        </svg>
    }
}

fn icon_briefcase() -> Html {
    lucide_svg(html! {
        <>
            <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            <rect width="20" height="14" x="2" y="6" rx="2" />
        </>
    })
}

fn icon_graduation_cap() -> Html {
    lucide_svg(html! {
        <>
            <path d="M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z" />
            <path d="M22 10v6" />
            <path d="M6 12.5V16a6 3 0 0 0 12 0v-3.5" />
        </>
    })
}

fn icon_arrow_right() -> Html {
    lucide_svg(html! {
        <>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </>
    })
}

fn app_icon(icon: AppIcon) -> Html {
    match icon {
        AppIcon::Smartphone => lucide_svg(html! {
            <>
                <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
                <path d="M12 18h.01" />
            </>
        }),
        AppIcon::Gamepad => lucide_svg(html! {
            <>
                <line x1="6" x2="10" y1="11" y2="11" />
                <line x1="8" x2="8" y1="9" y2="13" />
                <line x1="15" x2="15.01" y1="12" y2="12" />
                <line x1="18" x2="18.01" y1="10" y2="10" />
                <path d="M17.32 5H6.68a4 4 0 0 0-3.978 3.59c-.006.052-.01.101-.017.152C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258-.007-.05-.011-.1-.017-.151A4 4 0 0 0 17.32 5z" />
            </>
        }),
        AppIcon::Microphone => lucide_svg(html! {
            <>
                <path d="m12 8-9.04 9.06a2.82 2.82 0 1 0 3.98 3.98L16 12" />
                <circle cx="17" cy="7" r="5" />
            </>
        }),
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    theme: Theme,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_menu_close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <a href="#hero" class="brand">{ NAME }</a>
                <nav class="header-nav" aria-label="Sections">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={*link} href={format!("#{}", link.to_lowercase())} class="nav-link">{ *link }</a>
                    }) }
                </nav>
                <div class="header-actions">
                    <a class="icon-link" href={format!("mailto:{}", CONTACT.email)} aria-label="Email">
                        { icon_mail() }
                    </a>
                    <a class="icon-link" href={CONTACT.linkedin} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn profile">
                        { icon_linkedin() }
                    </a>
                    <a class="icon-link" href={CONTACT.google_scholar} target="_blank" rel="noopener noreferrer" aria-label="Google Scholar profile">
                        { icon_scholar() }
                    </a>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={props.on_toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button class="menu-toggle" type="button" aria-label="Toggle navigation" onclick={on_menu_toggle}>
                        <span aria-hidden="true">{"☰"}</span>
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class="mobile-nav" aria-label="Sections">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            key={*link}
                            href={format!("#{}", link.to_lowercase())}
                            class="nav-link"
                            onclick={on_menu_close.clone()}
                        >
                            { *link }
                        </a>
                    }) }
                </nav>
            }
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <CanvasBackground />
            <div class="hero-content">
                <h1 class="hero-name">{ NAME }</h1>
                <p class="hero-title"><ScrambleText text={TITLE} /></p>
                <p class="hero-summary">{ SUMMARY }</p>
            </div>
        </section>
    }
}

#[function_component(ProfileImage)]
fn profile_image() -> Html {
    let source = use_state(content::ImageSource::default);

    let onerror = {
        let source = source.clone();
        Callback::from(move |_: Event| {
            let next = source.on_error();
            if next != *source {
                source.set(next);
            }
        })
    };

    let src = source.src();

    html! {
        <img
            class="profile-photo"
            {src}
            alt={format!("Portrait of {NAME}")}
            loading="lazy"
            onerror={onerror}
        />
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Philosophy,
    Strengths,
    Values,
}

impl AboutTab {
    const ALL: [AboutTab; 3] = [Self::Philosophy, Self::Strengths, Self::Values];

    fn label(self) -> &'static str {
        match self {
            Self::Philosophy => "Philosophy",
            Self::Strengths => "Strengths",
            Self::Values => "Values",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Philosophy => ABOUT.philosophy,
            Self::Strengths => ABOUT.strengths,
            Self::Values => ABOUT.values,
        }
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let active_tab = use_state(|| AboutTab::Philosophy);

    html! {
        <Reveal class="section-block">
            <section id="about" class="section">
                <h2 class="section-title"><ScrambleText text="About Me" /></h2>
                <div class="about-grid">
                    <div class="about-intro">
                        <ProfileImage />
                        <div class="about-tabs" role="tablist">
                            { for AboutTab::ALL.iter().map(|tab| {
                                let is_active = *active_tab == *tab;
                                let onclick = {
                                    let active_tab = active_tab.clone();
                                    let tab = *tab;
                                    Callback::from(move |_: MouseEvent| active_tab.set(tab))
                                };
                                html! {
                                    <button
                                        key={tab.label()}
                                        type="button"
                                        role="tab"
                                        class={classes!("tab", is_active.then_some("is-active"))}
                                        aria-selected={is_active.to_string()}
                                        onclick={onclick}
                                    >
                                        { tab.label() }
                                    </button>
                                }
                            }) }
                        </div>
                        <p class="about-text">{ (*active_tab).text() }</p>
                        <h3 class="subsection-title">{"Technical Proficiency"}</h3>
                        <Marquee>
                            { for SKILLS.iter().map(|skill| html! {
                                <span key={*skill} class="chip">{ *skill }</span>
                            }) }
                        </Marquee>
                    </div>
                    <div class="about-timeline">
                        <h3 class="subsection-title">{"Education & Experience"}</h3>
                        <ol class="timeline">
                            { for TIMELINE.iter().map(|entry| html! {
                                <li key={entry.title} class="timeline-entry">
                                    <Reveal threshold={0.5}>
                                        <span class="timeline-icon">
                                            {
                                                match entry.kind {
                                                    TimelineKind::Work => icon_briefcase(),
                                                    TimelineKind::Education => icon_graduation_cap(),
                                                }
                                            }
                                        </span>
                                        <h4 class="timeline-title">{ entry.title }</h4>
                                        <time class="timeline-period">
                                            { format!("{} | {}", entry.period, entry.institution) }
                                        </time>
                                        if let Some(description) = entry.description {
                                            <p class="timeline-description">{ description }</p>
                                        }
                                    </Reveal>
                                </li>
                            }) }
                        </ol>
                    </div>
                </div>
            </section>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsSectionProps {
    /// Clicking a card filters the Publications section by the project's
    /// linked tag and scrolls it into view.
    on_cross_link: Callback<&'static str>,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <Reveal class="section-block">
            <section id="projects" class="section">
                <h2 class="section-title"><ScrambleText text="Research Projects" /></h2>
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| {
                        let onclick = {
                            let on_cross_link = props.on_cross_link.clone();
                            let tag = project.filter_tag;
                            Callback::from(move |_: MouseEvent| on_cross_link.emit(tag))
                        };
                        html! {
                            <TiltCard key={project.title} class="project-card" onclick={onclick}>
                                <h3 class="card-title">{ project.title }</h3>
                                <p class="card-text">{ project.description }</p>
                                <div class="chip-row">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span key={*tag} class="chip">{ *tag }</span>
                                    }) }
                                </div>
                                <span class="card-hint">
                                    { format!("Related publications: {}", project.filter_tag) }
                                    { icon_arrow_right() }
                                </span>
                            </TiltCard>
                        }
                    }) }
                </div>
            </section>
        </Reveal>
    }
}

#[function_component(AppsSection)]
fn apps_section() -> Html {
    html! {
        <Reveal class="section-block">
            <section id="apps" class="section">
                <h2 class="section-title"><ScrambleText text="Applications Developed" /></h2>
                <div class="card-grid card-grid-three">
                    { for APPS.iter().map(|app| html! {
                        <TiltCard key={app.title} class="app-card">
                            <div class="app-card-head">
                                <span class={classes!("app-icon", app.color.css_class())}>
                                    { app_icon(app.icon) }
                                </span>
                                <h3 class="card-title">{ app.title }</h3>
                                if app.in_progress {
                                    <span class="badge">{"in progress"}</span>
                                }
                            </div>
                            <p class="card-text">{ app.description }</p>
                            <div class="app-card-foot">
                                <div class="chip-row">
                                    { for app.tags.iter().map(|tag| html! {
                                        <span key={*tag} class="chip">{ *tag }</span>
                                    }) }
                                </div>
                                if let Some(link) = app.link {
                                    <ExternalLink class={app.color.css_class()} href={link} label="Details" />
                                }
                            </div>
                        </TiltCard>
                    }) }
                </div>
            </section>
        </Reveal>
    }
}

#[function_component(TeachingSection)]
fn teaching_section() -> Html {
    let group = |title: &'static str, items: &'static [&'static str]| {
        html! {
            <div class="teaching-group">
                <h3 class="subsection-title">{ title }</h3>
                <ul class="teaching-list">
                    { for items.iter().map(|item| html! { <li key={*item}>{ *item }</li> }) }
                </ul>
            </div>
        }
    };

    html! {
        <Reveal class="section-block">
            <section id="teaching" class="section">
                <h2 class="section-title"><ScrambleText text="Teaching & Mentorship" /></h2>
                <div class="teaching-grid">
                    { group("Workshops Conducted", TEACHING.workshops) }
                    { group("Student Supervision", TEACHING.supervision) }
                </div>
            </section>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct PublicationsSectionProps {
    active_filter: ActiveFilter,
    on_set_filter: Callback<ActiveFilter>,
}

fn publication_item(publication: &'static Publication) -> Html {
    let body = html! {
        <p class="publication-text">
            { publication.text }
            { " " }
            <em class="publication-journal">{ publication.journal }</em>
        </p>
    };
    match publication.link {
        Some(link) => html! {
            <a
                key={publication.text}
                class="publication-item publication-link"
                href={link}
                target="_blank"
                rel="noopener noreferrer"
            >
                { body }
            </a>
        },
        None => html! {
            <div key={publication.text} class="publication-item">{ body }</div>
        },
    }
}

#[function_component(PublicationsSection)]
fn publications_section(props: &PublicationsSectionProps) -> Html {
    let visible = filtered_publications(&props.active_filter);

    html! {
        <Reveal class="section-block">
            <section id={PUBLICATIONS_SECTION_ID} class="section">
                <h2 class="section-title"><ScrambleText text="Publications" /></h2>
                <div class="filter-chips" role="group" aria-label="Filter publications by topic">
                    { for FILTER_TAGS.iter().map(|tag| {
                        let is_active = props.active_filter.as_str() == *tag;
                        let onclick = {
                            let on_set_filter = props.on_set_filter.clone();
                            let tag = *tag;
                            Callback::from(move |_: MouseEvent| {
                                on_set_filter.emit(ActiveFilter::new(tag));
                            })
                        };
                        html! {
                            <button
                                key={*tag}
                                type="button"
                                class={classes!("chip", "chip-button", is_active.then_some("is-active"))}
                                aria-pressed={is_active.to_string()}
                                onclick={onclick}
                            >
                                { *tag }
                            </button>
                        }
                    }) }
                </div>
                // Keyed by the active tag so a filter change remounts the
                // list and replays the entrance animation.
                <div class="publication-list" key={props.active_filter.as_str().to_string()}>
                    { for visible.iter().copied().map(publication_item) }
                    if visible.is_empty() {
                        <p class="publication-empty">
                            { format!("No publications tagged {:?} yet.", props.active_filter.as_str()) }
                        </p>
                    }
                </div>
            </section>
        </Reveal>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <p class="footer-name">{ NAME }</p>
            <p class="footer-note">{"Let's connect and build something great together."}</p>
            <div class="footer-links">
                <a class="icon-link" href={format!("mailto:{}", CONTACT.email)} aria-label="Email">
                    { icon_mail() }
                </a>
                <a class="icon-link" href={CONTACT.linkedin} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn profile">
                    { icon_linkedin() }
                </a>
                <a class="icon-link" href={CONTACT.google_scholar} target="_blank" rel="noopener noreferrer" aria-label="Google Scholar profile">
                    { icon_scholar() }
                </a>
            </div>
            <p class="footer-copyright">{ format!("© {year} {NAME}. All rights reserved.") }</p>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| Theme::INITIAL);
    let active_filter = use_state(ActiveFilter::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_set_filter = {
        let active_filter = active_filter.clone();
        Callback::from(move |filter: ActiveFilter| active_filter.set(filter))
    };

    // The only cross-section write: a project click rewrites the filter
    // owned up here and brings the publication list into view.
    let on_cross_link = {
        let active_filter = active_filter.clone();
        Callback::from(move |tag: &'static str| {
            active_filter.set(ActiveFilter::new(tag));
            scroll_to_publications();
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <CursorSpotlight />
            <Header theme={*theme} on_toggle_theme={on_toggle_theme} />
            <main id="content">
                <Hero />
                <AboutSection />
                <ProjectsSection on_cross_link={on_cross_link} />
                <AppsSection />
                <TeachingSection />
                <PublicationsSection
                    active_filter={(*active_filter).clone()}
                    on_set_filter={on_set_filter}
                />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
