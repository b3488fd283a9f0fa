//! Image viewer and video playlist.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlImageElement, HtmlVideoElement, KeyboardEvent};

use super::listener::{Listener, listen};
use super::{query, query_all};
use crate::error::ResultExt;
use crate::state::playlist::PlaylistState;
use crate::state::preferences::Language;
use crate::util::gallery::{Step, cycle, full_source};
use crate::util::i18n;
use crate::util::resources::{Dispose, Subscriptions};

// ── Image viewer ────────────────────────────────────────────────

struct Gallery {
    images: Vec<Element>,
    current: Cell<Option<usize>>,
}

impl Gallery {
    fn show(&self, document: &Document, index: usize) {
        let Some(image) = self.images.get(index) else {
            return;
        };
        self.current.set(Some(index));
        let src = image.get_attribute("src").unwrap_or_default();
        let data_src = image.get_attribute("data-src");
        let alt = image.get_attribute("alt").unwrap_or_default();

        let modal_image = document
            .get_element_by_id("modalImage")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().or_log("modal image"));
        if let Some(modal_image) = modal_image {
            modal_image.set_src(full_source(data_src.as_deref(), &src));
            modal_image.set_alt(&alt);
        }
        if let Some(caption) = document.get_element_by_id("imageModalLabel") {
            caption.set_text_content(Some(&alt));
        }
    }
}

/// Open clicked gallery images in the modal; arrow keys cycle through them.
pub fn bind_gallery(document: &Document, subs: &mut Subscriptions) {
    let images = query_all(document, ".gallery-img");
    if images.is_empty() {
        return;
    }
    let gallery = Rc::new(Gallery { images, current: Cell::new(None) });

    for (index, image) in gallery.images.iter().enumerate() {
        let gallery = Rc::clone(&gallery);
        let doc = document.clone();
        listen(subs, image, "click", move |_| gallery.show(&doc, index));
    }

    if let Some(modal) = document.get_element_by_id("imageModal") {
        let doc = document.clone();
        listen(subs, &modal, "keydown", move |event| {
            let Some(step) = event.dyn_ref::<KeyboardEvent>().and_then(|key| Step::from_key(&key.key())) else {
                return;
            };
            if let Some(next) = cycle(gallery.current.get(), gallery.images.len(), step) {
                gallery.show(&doc, next);
            }
        });
    }
}

// ── Video playlist ──────────────────────────────────────────────

/// Button waiting for `loadeddata`, with the markup to restore.
struct Loading {
    index: usize,
    original_html: String,
}

struct Playlist {
    state: PlaylistState,
    loading: Option<Loading>,
    ready: Option<Listener>,
}

impl Playlist {
    fn restore(&mut self, buttons: &[HtmlButtonElement]) {
        let Some(loading) = self.loading.take() else {
            return;
        };
        if !self.state.is_loading(loading.index) {
            return;
        }
        if let Some(button) = buttons.get(loading.index) {
            button.set_inner_html(&loading.original_html);
            button.set_disabled(false);
        }
    }
}

struct SharedPlaylist(Rc<RefCell<Playlist>>);

impl Dispose for SharedPlaylist {
    fn dispose(&mut self) {
        if let Some(mut ready) = self.0.borrow_mut().ready.take() {
            ready.dispose();
        }
    }
}

fn loading_markup(language: Language) -> String {
    format!(r#"<i class="bi bi-hourglass-split me-2"></i><span>{}</span>"#, i18n::LOADING.get(language))
}

/// Load clicked playlist entries into the shared video element.
pub fn bind_playlist(document: &Document, language: impl Fn() -> Language + 'static, subs: &mut Subscriptions) {
    let Some(video) = query(document, ".video-container video")
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().or_log("playlist video"))
    else {
        return;
    };
    let buttons: Rc<[HtmlButtonElement]> = query_all(document, ".playlist-item button[data-video]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlButtonElement>().or_log("playlist button"))
        .collect();
    if buttons.is_empty() {
        return;
    }

    let playlist =
        Rc::new(RefCell::new(Playlist { state: PlaylistState::default(), loading: None, ready: None }));
    let language = Rc::new(language);

    for (index, button) in buttons.iter().enumerate() {
        let playlist = Rc::clone(&playlist);
        let buttons = Rc::clone(&buttons);
        let video = video.clone();
        let language = Rc::clone(&language);
        listen(subs, button, "click", move |_| {
            select(&playlist, &buttons, &video, index, language());
        });
    }
    subs.track("playlist", SharedPlaylist(playlist));
}

fn select(
    playlist: &Rc<RefCell<Playlist>>,
    buttons: &Rc<[HtmlButtonElement]>,
    video: &HtmlVideoElement,
    index: usize,
    language: Language,
) {
    let Some(button) = buttons.get(index) else {
        return;
    };
    let Some(source) = button.get_attribute("data-video") else {
        return;
    };

    let mut shared = playlist.borrow_mut();
    shared.restore(buttons);
    if let Some(mut ready) = shared.ready.take() {
        ready.dispose();
    }
    shared.state.select(index);

    for (i, other) in buttons.iter().enumerate() {
        other.class_list().toggle_with_force("active", shared.state.is_active(i)).or_log("toggling playlist item");
    }

    shared.loading = Some(Loading { index, original_html: button.inner_html() });
    button.set_inner_html(&loading_markup(language));
    button.set_disabled(true);

    // The ready listener lives inside the playlist, so it holds a weak handle.
    let weak: Weak<RefCell<Playlist>> = Rc::downgrade(playlist);
    let ready_buttons = Rc::clone(buttons);
    shared.ready = Listener::new(video, "loadeddata", move |_| {
        if let Some(playlist) = weak.upgrade() {
            let mut shared = playlist.borrow_mut();
            shared.restore(&ready_buttons);
            shared.state.loaded();
        }
    })
    .or_log("binding loadeddata");
    drop(shared);

    video.set_src(&source);
    video.load();
    log::debug!("playlist item {index} selected");
}
