//! UI components composing the site.

pub mod contact_form;
pub mod gallery;
pub mod header;
pub mod image_modal;
pub mod mobile_menu;
pub mod notification;
pub mod service_card;
