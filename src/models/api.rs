//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use crate::services::GenerationResult;

/// 菜单字段，兼容数组和单个字符串
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenusField {
    Many(Vec<String>),
    One(String),
}

impl Default for MenusField {
    fn default() -> Self {
        MenusField::Many(Vec::new())
    }
}

impl MenusField {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            MenusField::Many(menus) => menus,
            MenusField::One(menu) => vec![menu],
        }
    }
}

/// 生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateRequestBody {
    #[serde(default)]
    pub menus: MenusField,
    #[serde(default)]
    pub memo: String,
}

/// 生成响应
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub karte_text: String,
    pub sns_text: String,
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            karte_text: result.karte_text,
            sns_text: result.sns_text,
        }
    }
}
