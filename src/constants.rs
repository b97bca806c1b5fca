// DOM hooks and presentation constants for the web front-end.
//
// Element ids and class names shared with `index.html` and the stylesheet.

// Page structure
pub const CONFIG_SCRIPT_ID: &str = "dome-config";
pub const INTRO_ROOT_ID: &str = "intro";
pub const GALLERY_ROOT_ID: &str = "dome-gallery";
pub const BACKGROUND_CANVAS_ID: &str = "color-bends";
pub const MUSIC_CONTROLS_ID: &str = "music-controls";

// Gallery classes
pub const ROOT_CLASS: &str = "dome-gallery-root";
pub const MAIN_CLASS: &str = "dome-gallery-main";
pub const STAGE_CLASS: &str = "dome-gallery-stage";
pub const SPHERE_CLASS: &str = "dome-gallery-sphere";
pub const ITEM_CLASS: &str = "dome-gallery-item";
pub const ITEM_IMAGE_CLASS: &str = "item__image";
pub const HINT_CLASS: &str = "dome-hint-overlay";
pub const SCROLL_LOCK_CLASS: &str = "dg-scroll-lock";
pub const ITEM_INDEX_ATTR: &str = "data-item-index";
pub const ITEM_INDEX_SELECTOR: &str = "[data-item-index]";

// Caption modal
pub const BACKDROP_CLASS: &str = "dome-backdrop";
pub const MODAL_CLASS: &str = "dome-note-modal";
pub const MODAL_CLOSE_CLASS: &str = "dome-close-button";
pub const MODAL_TITLE: &str = "A Special Note";
pub const HINT_TEXT: &str = "Click to read";

// Music control classes
pub const MUSIC_PANEL_CLASS: &str = "music-controls-panel";
pub const MUSIC_TOGGLE_CLASS: &str = "music-toggle-btn";
pub const MUSIC_BUTTON_CLASS: &str = "music-control-btn";
pub const MUSIC_SLIDER_CLASS: &str = "music-volume-slider";

// Intro classes
pub const INTRO_CONTAINER_CLASS: &str = "blur-text-container";
pub const INTRO_WORD_CLASS: &str = "blur-word";
pub const INTRO_CHAR_CLASS: &str = "blur-char";

// Non-breaking space between revealed words
pub const NBSP: &str = "\u{00A0}";
