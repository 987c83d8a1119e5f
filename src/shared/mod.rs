//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und der CLI gemeinsam genutzt werden.

pub mod options;

pub use options::{default_savegame_root, SorterOptions};
pub use options::{LARGE_STEP, MOVE_TO_END_STEPS, OPTIONS_FILE_NAME, SCROLL_CONTEXT};
