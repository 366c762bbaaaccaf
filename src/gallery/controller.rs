// SPDX-License-Identifier: MPL-2.0
//! The gallery controller: owns the record list and the viewer, and turns
//! user input into state changes plus [`Effect`]s for the shell to run.

use super::effect::{DecodeRequest, Effect, TimerEvent};
use super::list::ImageList;
use super::modal::{Modal, Removal, Step};
use super::record::{ImageRecord, ImageSource, Reveal};
use crate::config::{SampleEntry, TILE_FADE_IN, TILE_REVEAL_DELAY};
use crate::error::Result;
use crate::media::{self, ImageData};
use crate::ui::notifications::Notification;
use std::path::PathBuf;
use std::time::Instant;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone)]
pub struct GalleryController {
    images: ImageList,
    modal: Modal,
    drop_highlight: bool,
    initialized: bool,
}

impl GalleryController {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            images: ImageList::new(),
            modal: Modal::new(now),
            drop_highlight: false,
            initialized: false,
        }
    }

    /// Seeds the list with the startup samples. Only the first call has any effect.
    pub fn initialize(&mut self, samples: Vec<SampleEntry>, sample_limit: usize) {
        if self.initialized {
            log::warn!("Gallery already initialized, ignoring new samples");
            return;
        }
        self.initialized = true;
        self.images.seed(
            samples
                .into_iter()
                .map(|entry| (ImageSource::File(entry.source), entry.label)),
            sample_limit,
        );
        log::info!(
            "Gallery initialized with {} sample images ({} protected)",
            self.images.len(),
            self.images.sample_count()
        );
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn images(&self) -> &ImageList {
        &self.images
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Record currently painted in the viewer.
    #[must_use]
    pub fn viewed_record(&self) -> Option<&ImageRecord> {
        let id = self.modal.shown()?;
        self.images.iter().find(|record| record.id() == id)
    }

    /// Current list position of the record painted in the viewer.
    #[must_use]
    pub fn viewed_index(&self) -> Option<usize> {
        self.images.position(self.modal.shown()?)
    }

    #[must_use]
    pub fn drop_highlight(&self) -> bool {
        self.drop_highlight
    }

    pub fn set_drop_highlight(&mut self, highlighted: bool) {
        self.drop_highlight = highlighted;
    }

    /// Requests a decode for every submitted image file. Other files are skipped.
    pub fn submit_files(&mut self, paths: Vec<PathBuf>) -> Vec<Effect> {
        paths
            .into_iter()
            .filter_map(|path| match media::declared_media_type(&path) {
                Some(media_type) if media::is_image_media_type(media_type) => {
                    log::debug!("Submitting {} ({media_type})", path.display());
                    Some(Effect::Decode(DecodeRequest::new(path)))
                }
                _ => {
                    log::debug!("Skipping non-image file {}", path.display());
                    None
                }
            })
            .collect()
    }

    /// Appends the decoded image, or reports why it could not be decoded.
    pub fn finish_decode(
        &mut self,
        request: DecodeRequest,
        result: Result<ImageData>,
    ) -> Vec<Effect> {
        match result {
            Ok(data) => {
                let DecodeRequest { label, .. } = request;
                let id = self.images.push_with(|id| {
                    ImageRecord::new(id, ImageSource::Decoded(data), label).hidden()
                });
                vec![
                    Effect::Schedule {
                        delay: TILE_REVEAL_DELAY,
                        event: TimerEvent::RevealRecord(id),
                    },
                    Effect::Notify(Notification::success("notification-upload-success")),
                ]
            }
            Err(err) => {
                log::warn!("Failed to decode {}: {err}", request.path.display());
                vec![Effect::Notify(
                    Notification::error("notification-decode-error")
                        .with_arg("filename", request.label),
                )]
            }
        }
    }

    /// Removes the record at `index`. Out-of-range indices are ignored.
    pub fn delete_at(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        let Some(removed) = self.images.remove(index) else {
            log::debug!("Ignoring delete of index {index} ({} images)", self.images.len());
            return Vec::new();
        };
        log::debug!("Deleted {:?} at index {index}", removed.label());

        let mut effects = Vec::new();
        if self.modal.on_removed(index, self.images.len()) == Removal::MustClose {
            effects.extend(self.close_modal(now));
        }
        effects.push(Effect::Notify(Notification::success(
            "notification-delete-success",
        )));
        effects
    }

    /// Deletes the record painted in the viewer and closes it.
    ///
    /// During an image swap the cursor is already on the next record while
    /// the previous one is still on screen; the painted one is deleted.
    pub fn delete_current(&mut self, now: Instant) -> Vec<Effect> {
        if !self.modal.is_open() {
            return Vec::new();
        }
        let Some(index) = self.viewed_index() else {
            return Vec::new();
        };
        let mut effects = self.delete_at(index, now);
        effects.extend(self.close_modal(now));
        effects
    }

    /// Drops every uploaded image and closes the viewer.
    pub fn clear_to_samples(&mut self, now: Instant) -> Vec<Effect> {
        let removed = self.images.truncate_to_samples();
        log::debug!("Cleared {removed} images, {} remain", self.images.len());

        let mut effects = self.close_modal(now);
        self.modal.clamp(self.images.len());
        effects.push(Effect::Notify(Notification::success(
            "notification-clear-success",
        )));
        effects
    }

    /// Opens the viewer on `index`. Out-of-range indices are ignored.
    pub fn open_modal(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        let Some(record) = self.images.get(index) else {
            log::debug!("Ignoring open of index {index} ({} images)", self.images.len());
            return Vec::new();
        };
        let (delay, event) = self.modal.open(index, record.id(), now);
        vec![Effect::Schedule { delay, event }]
    }

    pub fn close_modal(&mut self, now: Instant) -> Vec<Effect> {
        self.modal
            .close(now)
            .map(|(delay, event)| Effect::Schedule { delay, event })
            .into_iter()
            .collect()
    }

    pub fn next_image(&mut self, now: Instant) -> Vec<Effect> {
        self.step(Step::Next, now)
    }

    pub fn prev_image(&mut self, now: Instant) -> Vec<Effect> {
        self.step(Step::Previous, now)
    }

    /// A click that landed on the backdrop rather than the viewer content.
    pub fn backdrop_clicked(&mut self, now: Instant) -> Vec<Effect> {
        self.close_modal(now)
    }

    /// Keyboard navigation, honored only while the viewer is open.
    pub fn handle_key(&mut self, key: NavKey, now: Instant) -> Vec<Effect> {
        if !self.modal.is_open() {
            return Vec::new();
        }
        match key {
            NavKey::Escape => self.close_modal(now),
            NavKey::ArrowLeft => self.prev_image(now),
            NavKey::ArrowRight => self.next_image(now),
        }
    }

    /// Applies a timer scheduled earlier. Timers whose target is gone do nothing.
    pub fn on_timer(&mut self, event: TimerEvent, now: Instant) {
        let applied = match event {
            TimerEvent::RevealRecord(id) => match self.images.find_mut(id) {
                Some(record) if record.reveal() == Reveal::Hidden => {
                    record.set_reveal(Reveal::Revealing { since: now });
                    true
                }
                _ => false,
            },
            TimerEvent::ModalShown { generation } => self.modal.on_shown(generation, now),
            TimerEvent::ModalHidden { generation } => self.modal.on_hidden(generation, now),
            TimerEvent::SwapImage { token } => {
                let record = self
                    .modal
                    .cursor()
                    .and_then(|cursor| self.images.get(cursor))
                    .map(ImageRecord::id);
                self.modal.on_swap(token, record, now)
            }
        };
        if !applied {
            log::trace!("Ignoring stale timer {event:?}");
        }
    }

    /// Settles tile fade-ins that have completed.
    pub fn tick(&mut self, now: Instant) {
        for record in self.images.iter_mut() {
            if let Reveal::Revealing { since } = record.reveal() {
                if now.saturating_duration_since(since) >= TILE_FADE_IN {
                    record.set_reveal(Reveal::Visible);
                }
            }
        }
    }

    /// Whether a periodic redraw is needed for a fade in progress.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.modal.is_animating(now) || self.images.iter().any(|r| r.reveal().is_animating())
    }

    fn step(&mut self, step: Step, now: Instant) -> Vec<Effect> {
        self.modal
            .step(step, self.images.len(), now)
            .map(|(delay, event)| Effect::Schedule { delay, event })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::ModalState;
    use std::time::Duration;

    fn samples(count: usize) -> Vec<SampleEntry> {
        (0..count)
            .map(|i| SampleEntry {
                source: PathBuf::from(format!("sample-{i}.jpg")),
                label: None,
            })
            .collect()
    }

    fn controller(count: usize) -> GalleryController {
        let mut gallery = GalleryController::new(Instant::now());
        gallery.initialize(samples(count), 6);
        gallery
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 0, 0, 255])
    }

    fn upload(gallery: &mut GalleryController, name: &str) -> Vec<Effect> {
        gallery.finish_decode(DecodeRequest::new(PathBuf::from(name)), Ok(pixel()))
    }

    fn labels(gallery: &GalleryController) -> Vec<String> {
        gallery
            .images()
            .iter()
            .map(|r| r.label().to_string())
            .collect()
    }

    /// Runs every scheduled timer as if it fired after its delay.
    fn fire(gallery: &mut GalleryController, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            if let Effect::Schedule { delay, event } = effect {
                gallery.on_timer(event, now + delay);
            }
        }
    }

    fn notifications(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(n) => Some(n.message_key()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn initialize_runs_once() {
        let mut gallery = controller(3);
        gallery.initialize(samples(5), 6);
        assert_eq!(gallery.images().len(), 3);
        assert!(gallery.is_initialized());
    }

    #[test]
    fn submit_skips_non_images() {
        let mut gallery = controller(0);
        let effects = gallery.submit_files(vec![
            PathBuf::from("a.png"),
            PathBuf::from("notes.txt"),
            PathBuf::from("b.JPG"),
            PathBuf::from("c.webp"),
        ]);

        let decoded: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Decode(request) => Some(request.label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(decoded, vec!["a.png", "b.JPG", "c.webp"]);
        assert_eq!(effects.len(), 3);
    }

    #[test]
    fn decoded_upload_is_appended_hidden_then_revealed() {
        let now = Instant::now();
        let mut gallery = controller(2);
        let effects = upload(&mut gallery, "new.png");

        assert_eq!(gallery.images().len(), 3);
        let record = gallery.images().get(2).unwrap();
        assert_eq!(record.label(), "new.png");
        assert_eq!(record.reveal(), Reveal::Hidden);
        assert_eq!(notifications(&effects), vec!["notification-upload-success"]);

        fire(&mut gallery, effects, now);
        assert!(gallery.images().get(2).unwrap().reveal().is_animating());
        assert!(gallery.is_animating(now));

        gallery.tick(now + TILE_REVEAL_DELAY + TILE_FADE_IN);
        assert_eq!(gallery.images().get(2).unwrap().reveal(), Reveal::Visible);
    }

    #[test]
    fn reveal_after_deletion_is_harmless() {
        let now = Instant::now();
        let mut gallery = controller(1);
        let effects = upload(&mut gallery, "gone.png");
        gallery.delete_at(1, now);

        fire(&mut gallery, effects, now);
        assert_eq!(gallery.images().len(), 1);
        assert!(!gallery.is_animating(now));
    }

    #[test]
    fn decode_failure_notifies_with_file_name() {
        let mut gallery = controller(1);
        let effects = gallery.finish_decode(
            DecodeRequest::new(PathBuf::from("/tmp/broken.png")),
            Err(Error::Decode("truncated".into())),
        );

        assert_eq!(gallery.images().len(), 1);
        let [Effect::Notify(notification)] = effects.as_slice() else {
            panic!("expected a single notification, got {effects:?}");
        };
        assert_eq!(notification.message_key(), "notification-decode-error");
        assert_eq!(
            notification.message_args(),
            &[("filename".to_string(), "broken.png".to_string())]
        );
    }

    #[test]
    fn open_then_close_restores_scrolling() {
        let now = Instant::now();
        for i in 0..4 {
            let mut gallery = controller(4);
            let opened = gallery.open_modal(i, now);
            fire(&mut gallery, opened, now);
            assert!(gallery.modal().scroll_locked());
            assert_eq!(gallery.modal().cursor(), Some(i));

            let closed = gallery.close_modal(now);
            assert!(gallery.modal().scroll_locked());
            fire(&mut gallery, closed, now);

            assert_eq!(gallery.modal().state(), ModalState::Closed);
            assert_eq!(gallery.modal().cursor(), None);
            assert!(!gallery.modal().scroll_locked());
        }
    }

    #[test]
    fn open_out_of_range_is_noop() {
        let now = Instant::now();
        let mut gallery = controller(2);
        assert!(gallery.open_modal(2, now).is_empty());
        assert_eq!(gallery.modal().state(), ModalState::Closed);
    }

    #[test]
    fn keys_are_ignored_while_closed_or_closing() {
        let now = Instant::now();
        let mut gallery = controller(3);
        assert!(gallery.handle_key(NavKey::ArrowRight, now).is_empty());

        gallery.open_modal(1, now);
        gallery.close_modal(now);
        assert!(gallery.handle_key(NavKey::ArrowRight, now).is_empty());
        assert!(gallery.handle_key(NavKey::Escape, now).is_empty());
        assert_eq!(gallery.modal().state(), ModalState::Closing { cursor: 1 });
    }

    #[test]
    fn arrow_keys_navigate_and_escape_closes() {
        let now = Instant::now();
        let mut gallery = controller(3);
        gallery.open_modal(0, now);

        gallery.handle_key(NavKey::ArrowLeft, now);
        assert_eq!(gallery.modal().cursor(), Some(2));
        gallery.handle_key(NavKey::ArrowRight, now);
        assert_eq!(gallery.modal().cursor(), Some(0));

        let effects = gallery.handle_key(NavKey::Escape, now);
        assert_eq!(effects.len(), 1);
        assert!(!gallery.modal().is_open());
    }

    #[test]
    fn swap_shows_record_under_cursor() {
        let now = Instant::now();
        let mut gallery = controller(3);
        gallery.open_modal(0, now);
        let effects = gallery.next_image(now);
        assert_eq!(gallery.viewed_record().map(ImageRecord::label), Some("Image 1"));

        fire(&mut gallery, effects, now);
        assert_eq!(gallery.viewed_record().map(ImageRecord::label), Some("Image 2"));
    }

    #[test]
    fn deleting_viewed_image_closes_modal() {
        let now = Instant::now();
        let mut gallery = controller(4);
        gallery.open_modal(2, now);

        let effects = gallery.delete_at(2, now);
        assert!(!gallery.modal().is_open());
        assert_eq!(notifications(&effects), vec!["notification-delete-success"]);

        fire(&mut gallery, effects, now);
        assert_eq!(gallery.modal().state(), ModalState::Closed);
    }

    #[test]
    fn deleting_other_image_keeps_logical_view() {
        let now = Instant::now();
        let mut gallery = controller(5);
        gallery.open_modal(3, now);
        let viewed = gallery.viewed_record().map(ImageRecord::id);

        gallery.delete_at(0, now);
        assert_eq!(gallery.modal().cursor(), Some(2));
        assert_eq!(gallery.viewed_record().map(ImageRecord::id), viewed);

        gallery.delete_at(3, now);
        assert_eq!(gallery.modal().cursor(), Some(2));
        assert_eq!(gallery.viewed_record().map(ImageRecord::id), viewed);
    }

    #[test]
    fn delete_current_removes_cursor_record() {
        let now = Instant::now();
        let mut gallery = controller(3);
        gallery.open_modal(1, now);
        gallery.delete_current(now);

        assert_eq!(labels(&gallery), vec!["Image 1", "Image 3"]);
        assert!(!gallery.modal().is_open());
    }

    #[test]
    fn delete_current_during_swap_removes_painted_record() {
        let now = Instant::now();
        let mut gallery = controller(3);
        gallery.open_modal(0, now);
        let swap = gallery.next_image(now);
        assert_eq!(gallery.modal().cursor(), Some(1));
        assert_eq!(gallery.viewed_index(), Some(0));

        let effects = gallery.delete_current(now);
        assert_eq!(labels(&gallery), vec!["Image 2", "Image 3"]);
        assert!(!gallery.modal().is_open());
        assert_eq!(notifications(&effects), vec!["notification-delete-success"]);

        // The pending swap lands on a closing viewer and changes nothing.
        fire(&mut gallery, swap, now);
        fire(&mut gallery, effects, now);
        assert_eq!(gallery.modal().state(), ModalState::Closed);
        assert_eq!(labels(&gallery), vec!["Image 2", "Image 3"]);
    }

    #[test]
    fn delete_current_is_ignored_while_closed() {
        let mut gallery = controller(2);
        assert!(gallery.delete_current(Instant::now()).is_empty());
        assert_eq!(gallery.images().len(), 2);
    }

    #[test]
    fn delete_out_of_range_is_silent() {
        let mut gallery = controller(2);
        assert!(gallery.delete_at(7, Instant::now()).is_empty());
        assert_eq!(gallery.images().len(), 2);
    }

    #[test]
    fn clear_is_idempotent_and_closes_modal() {
        let now = Instant::now();
        let mut gallery = controller(3);
        upload(&mut gallery, "x.png");
        upload(&mut gallery, "y.png");
        gallery.open_modal(4, now);

        let effects = gallery.clear_to_samples(now);
        assert!(!gallery.modal().is_open());
        assert_eq!(notifications(&effects), vec!["notification-clear-success"]);
        let once = labels(&gallery);

        gallery.clear_to_samples(now);
        assert_eq!(labels(&gallery), once);
        assert_eq!(once, vec!["Image 1", "Image 2", "Image 3"]);
    }

    #[test]
    fn clear_on_empty_gallery_is_harmless() {
        let mut gallery = controller(0);
        gallery.clear_to_samples(Instant::now());
        assert!(gallery.images().is_empty());
    }

    #[test]
    fn navigation_on_emptied_gallery_is_noop() {
        let now = Instant::now();
        let mut gallery = controller(1);
        gallery.open_modal(0, now);
        gallery.delete_at(0, now);

        assert!(gallery.next_image(now).is_empty());
        assert!(gallery.prev_image(now).is_empty());
    }

    #[test]
    fn drop_highlight_toggles() {
        let mut gallery = controller(0);
        gallery.set_drop_highlight(true);
        assert!(gallery.drop_highlight());
        gallery.set_drop_highlight(false);
        assert!(!gallery.drop_highlight());
    }

    #[test]
    fn fades_stop_animating_once_settled() {
        let now = Instant::now();
        let mut gallery = controller(2);
        let opened = gallery.open_modal(0, now);
        fire(&mut gallery, opened, now);
        assert!(gallery.is_animating(now + Duration::from_millis(20)));
        assert!(!gallery.is_animating(now + Duration::from_secs(2)));
    }
}
