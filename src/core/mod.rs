pub mod catalog;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod layout;
pub mod nav;
pub mod reveal;
pub mod theme;
