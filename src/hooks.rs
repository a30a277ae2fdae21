use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::reveal::{RevealOptions, RevealTrigger, Visibility};
use crate::motion::scroll::ScrollFlag;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Tracks whether the element behind `node` is in the viewport.
///
/// Without `IntersectionObserver` support the element is reported as visible
/// straight away so nothing stays hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: RevealOptions) -> bool {
    let visibility = use_state_eq(|| Visibility::Hidden);

    {
        let setter = visibility.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let observation = match node.cast::<Element>() {
                    Some(element) => observe(element, *options, setter),
                    None => {
                        debug!("Reveal target not mounted, showing it without animation");
                        setter.set(Visibility::Visible);
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    visibility.is_visible()
}

fn observe(
    element: Element,
    options: RevealOptions,
    setter: UseStateSetter<Visibility>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let trigger = Rc::new(RefCell::new(RevealTrigger::new(options)));

    let callback = {
        let trigger = trigger.clone();
        let setter = setter.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let mut trigger = trigger.borrow_mut();
                setter.set(trigger.observe(entry.intersection_ratio(), entry.is_intersecting()));
                if trigger.is_settled() {
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    let thresholds: Array = options
        .observer_thresholds()
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    init.set_threshold(&thresholds);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            trigger.borrow_mut().force_visible();
            setter.set(Visibility::Visible);
            None
        }
    }
}

/// True while the window is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |threshold| {
                let mut flag = ScrollFlag::new(*threshold);
                let listener = web_sys::window().and_then(move |window| {
                    setter.set(flag.update(window.scroll_y().unwrap_or(0.0)));

                    let source = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        setter.set(flag.update(source.scroll_y().unwrap_or(0.0)));
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some((window, scroll_callback)),
                        Err(err) => {
                            warn!("Could not listen for scroll events: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            threshold,
        );
    }

    *scrolled
}
