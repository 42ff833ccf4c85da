/// Per-image load status for the tiles currently realized
use std::collections::HashMap;

use iced::widget::image::Handle;

use super::candidates::ImageId;

#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(Handle),
    /// Load failed; rendered as an empty tile
    Failed,
}

#[derive(Debug, Default)]
pub struct Thumbnails {
    slots: HashMap<ImageId, Slot>,
}

impl Thumbnails {
    /// Mark ids as loading and return the ones that were never requested
    pub fn request<I>(&mut self, ids: I) -> Vec<ImageId>
    where
        I: IntoIterator<Item = ImageId>,
    {
        ids.into_iter()
            .filter(|id| {
                if self.slots.contains_key(id) {
                    false
                } else {
                    self.slots.insert(*id, Slot::Loading);
                    true
                }
            })
            .collect()
    }

    pub fn resolve(&mut self, id: ImageId, handle: Option<Handle>) {
        let slot = match handle {
            Some(handle) => Slot::Ready(handle),
            None => Slot::Failed,
        };
        self.slots.insert(id, slot);
    }

    pub fn get(&self, id: ImageId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_requested_once() {
        let mut thumbnails = Thumbnails::default();
        let first = thumbnails.request([ImageId(10), ImageId(11)]);
        assert_eq!(first, vec![ImageId(10), ImageId(11)]);

        let second = thumbnails.request([ImageId(10), ImageId(11), ImageId(12)]);
        assert_eq!(second, vec![ImageId(12)]);
    }

    #[test]
    fn test_failed_load_is_recorded() {
        let mut thumbnails = Thumbnails::default();
        thumbnails.request([ImageId(10)]);
        thumbnails.resolve(ImageId(10), None);
        assert!(matches!(thumbnails.get(ImageId(10)), Some(Slot::Failed)));
    }
}
