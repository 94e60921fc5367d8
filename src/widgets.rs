//! DOM-free state behind the interactive components.

pub mod accordion;
pub mod lightbox;
pub mod underline;
pub mod video;

pub use accordion::AccordionState;
pub use lightbox::{KeyListenerScope, LightboxState, ListenerHost, OverlayTarget};
pub use underline::UnderlineColor;
pub use video::VideoSource;
