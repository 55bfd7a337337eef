pub mod field;
pub mod layout;
pub mod record;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod tooltip;
pub mod transition;
