pub mod background;
pub mod config;
pub mod constants;
pub mod content;
pub mod device;
pub mod fit;
pub mod gallery;
pub mod gesture;
pub mod inertia;
pub mod intro;
pub mod layout;
pub mod playback;
pub mod rotation;
pub mod scroll_lock;

pub use background::*;
pub use config::*;
pub use content::*;
pub use device::*;
pub use fit::*;
pub use gallery::*;
pub use gesture::*;
pub use inertia::*;
pub use intro::*;
pub use layout::*;
pub use playback::*;
pub use rotation::*;
pub use scroll_lock::*;
