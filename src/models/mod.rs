//! 数据模型

mod api;
mod menu;

pub use api::{GenerateRequestBody, GenerateResponse, MenusField};
pub use menu::{resolve_menu_label, MenuItem, MENU_CATALOG};
