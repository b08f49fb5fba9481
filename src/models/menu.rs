//! 施术菜单目录

use serde::Serialize;

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// 预设的施术菜单
pub const MENU_CATALOG: [MenuItem; 6] = [
    MenuItem { id: "cut", label: "カット", emoji: "✂️" },
    MenuItem { id: "color", label: "カラー", emoji: "🎨" },
    MenuItem { id: "perm", label: "パーマ", emoji: "💫" },
    MenuItem { id: "treatment", label: "トリートメント", emoji: "✨" },
    MenuItem { id: "spa", label: "スパ", emoji: "💆" },
    MenuItem { id: "other", label: "その他", emoji: "📋" },
];

/// 目录中的 id 转换为标签，其他输入原样返回
pub fn resolve_menu_label(menu: &str) -> &str {
    MENU_CATALOG
        .iter()
        .find(|item| item.id == menu)
        .map(|item| item.label)
        .unwrap_or(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_menu_label() {
        assert_eq!(resolve_menu_label("treatment"), "トリートメント");
        assert_eq!(resolve_menu_label("カラー"), "カラー");
        assert_eq!(resolve_menu_label("Cut"), "Cut");
    }
}
