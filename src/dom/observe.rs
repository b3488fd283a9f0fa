//! Visibility observers: lazy images and fade-in reveal.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::query_all;
use crate::error::{ResultExt, SiteError};
use crate::util::resources::{Dispose, Subscriptions};

const FADE_SELECTOR: &str = ".generation-section, .video-section, .gallery-section, .references-section";
const FADE_THRESHOLD: f64 = 0.1;
const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// An `IntersectionObserver` with its callback; disconnects on dispose.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    connected: bool,
}

impl Observer {
    /// Observe `targets`, calling `on_visible` once per element the first
    /// time it intersects. The element is unobserved afterwards.
    pub fn once(
        targets: &[Element],
        init: &IntersectionObserverInit,
        mut on_visible: impl FnMut(&Element) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_into::<IntersectionObserverEntry>().or_log("observer entry") else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        on_visible(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
            .map_err(|e| SiteError::Dom(format!("creating IntersectionObserver: {e:?}")))?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self { observer, _callback: callback, connected: true })
    }
}

impl Dispose for Observer {
    fn dispose(&mut self) {
        if self.connected {
            self.connected = false;
            self.observer.disconnect();
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).or_log("feature check"))
        .unwrap_or(false)
}

fn add_class(element: &Element, class: &str) {
    element.class_list().add_1(class).or_log("adding class");
}

/// Bind lazy images and fade-in sections.
pub fn bind(document: &Document, subs: &mut Subscriptions) {
    let images = query_all(document, r#"img[loading="lazy"]"#);
    let sections = query_all(document, FADE_SELECTOR);

    if !observer_supported() {
        log::debug!("IntersectionObserver unavailable, revealing sections immediately");
        for section in &sections {
            add_class(section, "fade-in");
        }
        return;
    }

    if !images.is_empty() {
        let lazy = Observer::once(&images, &IntersectionObserverInit::new(), |image| {
            image.class_list().remove_1("lazy").or_log("removing lazy class");
        });
        match lazy {
            Ok(observer) => subs.track("lazy images", observer),
            Err(err) => log::warn!("{err}"),
        }
    }

    if !sections.is_empty() {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));
        init.set_root_margin(FADE_ROOT_MARGIN);
        match Observer::once(&sections, &init, |section| add_class(section, "fade-in")) {
            Ok(observer) => subs.track("fade-in", observer),
            Err(err) => {
                log::warn!("{err}");
                for section in &sections {
                    add_class(section, "fade-in");
                }
            }
        }
    }
}
