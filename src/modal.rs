//! Project detail modal shared by every summary card on a page.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtaLink {
    pub href: String,
    pub label: String,
}

/// Everything the modal shows, copied from the clicked card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Rich text block, trusted markup from the page's own content.
    pub details_html: String,
    pub cta: Option<CtaLink>,
    /// Extra images for the side gallery. Empty hides it.
    pub gallery: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    content: Option<ModalContent>,
    gallery: Option<ModalGallery>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, content: ModalContent) {
        self.gallery = ModalGallery::new(content.gallery.clone());
        self.content = Some(content);
    }

    pub fn close(&mut self) {
        self.content = None;
        self.gallery = None;
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn gallery(&self) -> Option<&ModalGallery> {
        self.gallery.as_ref()
    }

    pub fn gallery_mut(&mut self) -> Option<&mut ModalGallery> {
        self.gallery.as_mut()
    }

    /// Escape closes. Returns whether the key was handled.
    pub fn key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Clicks on the dimmed backdrop close; clicks inside the dialog don't.
    pub fn backdrop_click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalGallery {
    images: Vec<String>,
    index: usize,
}

impl ModalGallery {
    /// `None` for an empty image list.
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self { images, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    /// Dot navigation. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        true
    }
}
