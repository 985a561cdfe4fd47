//! Навигация по разделам и переключение роли
//!
//! Состояние навигации хранится как значение, переходы возвращают новое состояние.

use crate::shared::WorkflowError;
use serde::{Deserialize, Serialize};

/// Роль пользователя (локальный переключатель, не авторизация)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Operator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
        }
    }

    /// Подпись в футере боковой панели
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin DKP",
            Role::Operator => "Operator Kapal",
        }
    }

    /// Разделы, доступные роли, в порядке меню
    pub fn allowed_views(&self) -> &'static [ViewId] {
        match self {
            Role::Admin => &[
                ViewId::Overview,
                ViewId::Ships,
                ViewId::Validation,
                ViewId::Reports,
            ],
            Role::Operator => &[ViewId::Overview, ViewId::LogbookInput, ViewId::Reports],
        }
    }

    pub fn can_open(&self, view: ViewId) -> bool {
        self.allowed_views().contains(&view)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Раздел приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewId {
    #[default]
    #[serde(rename = "dashboard")]
    Overview,
    #[serde(rename = "ships")]
    Ships,
    #[serde(rename = "logbook-input")]
    LogbookInput,
    #[serde(rename = "validation")]
    Validation,
    #[serde(rename = "reports")]
    Reports,
}

impl ViewId {
    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Overview => "dashboard",
            ViewId::Ships => "ships",
            ViewId::LogbookInput => "logbook-input",
            ViewId::Validation => "validation",
            ViewId::Reports => "reports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "dashboard" => Some(ViewId::Overview),
            "ships" => Some(ViewId::Ships),
            "logbook-input" => Some(ViewId::LogbookInput),
            "validation" => Some(ViewId::Validation),
            "reports" => Some(ViewId::Reports),
            _ => None,
        }
    }

    /// Подпись пункта меню; у оператора раздел отчётов называется историей логбуков
    pub fn label_for(&self, role: Role) -> &'static str {
        match (self, role) {
            (ViewId::Overview, _) => "Dashboard",
            (ViewId::Ships, _) => "Data Kapal & Nelayan",
            (ViewId::LogbookInput, _) => "Input Logbook",
            (ViewId::Validation, _) => "Validasi Logbook",
            (ViewId::Reports, Role::Admin) => "Laporan & Export",
            (ViewId::Reports, Role::Operator) => "Riwayat Logbook",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Пункт меню боковой панели
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub view: ViewId,
    pub label: &'static str,
    /// Счётчик на пункте (число логбуков на проверке у администратора)
    pub badge: Option<usize>,
    pub active: bool,
}

/// Состояние навигации: активный раздел и текущая роль
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_view: ViewId,
    pub role: Role,
}

impl NavigationState {
    pub fn new(role: Role) -> Self {
        Self {
            active_view: ViewId::default(),
            role,
        }
    }

    /// Открыть раздел; раздел вне меню роли отклоняется, состояние прежнее
    pub fn select_view(self, view: ViewId) -> Result<Self, WorkflowError> {
        if !self.role.can_open(view) {
            return Err(WorkflowError::ViewNotPermitted {
                view: view.key().to_string(),
                role: self.role.as_str().to_string(),
            });
        }
        Ok(Self {
            active_view: view,
            ..self
        })
    }

    /// Открыть раздел по ключу; неизвестный или недоступный ключ ведёт на раздел по умолчанию
    pub fn select_key(self, key: &str) -> Self {
        ViewId::from_key(key)
            .and_then(|view| self.select_view(view).ok())
            .unwrap_or(Self {
                active_view: ViewId::default(),
                ..self
            })
    }

    /// Сменить роль; если активного раздела нет в меню новой роли, открывается раздел по умолчанию
    pub fn switch_role(self, role: Role) -> Self {
        let active_view = if role.can_open(self.active_view) {
            self.active_view
        } else {
            ViewId::default()
        };
        Self { active_view, role }
    }

    pub fn menu(&self, pending_count: usize) -> Vec<MenuItem> {
        menu_items(self.role, self.active_view, pending_count)
    }
}

/// Меню роли с отметкой активного пункта
pub fn menu_items(role: Role, active_view: ViewId, pending_count: usize) -> Vec<MenuItem> {
    role.allowed_views()
        .iter()
        .map(|&view| MenuItem {
            view,
            label: view.label_for(role),
            badge: (view == ViewId::Validation && role == Role::Admin).then_some(pending_count),
            active: view == active_view,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = NavigationState::default();
        assert_eq!(state.active_view, ViewId::Overview);
        assert_eq!(state.role, Role::Admin);
    }

    #[test]
    fn test_select_disallowed_view_is_rejected() {
        let state = NavigationState::new(Role::Operator);
        let err = state.select_view(ViewId::Validation).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::ViewNotPermitted {
                view: "validation".to_string(),
                role: "operator".to_string(),
            }
        );

        let state = state.select_view(ViewId::LogbookInput).unwrap();
        assert_eq!(state.active_view, ViewId::LogbookInput);
    }

    #[test]
    fn test_select_key_falls_back_to_overview() {
        let state = NavigationState::new(Role::Admin)
            .select_view(ViewId::Reports)
            .unwrap();
        assert_eq!(state.select_key("settings").active_view, ViewId::Overview);
        assert_eq!(state.select_key("logbook-input").active_view, ViewId::Overview);
        assert_eq!(state.select_key("ships").active_view, ViewId::Ships);
    }

    #[test]
    fn test_switch_role_falls_back_when_view_hidden() {
        let admin = NavigationState::new(Role::Admin)
            .select_view(ViewId::Validation)
            .unwrap();
        let operator = admin.switch_role(Role::Operator);
        assert_eq!(operator.role, Role::Operator);
        assert_eq!(operator.active_view, ViewId::Overview);
    }

    #[test]
    fn test_switch_role_keeps_shared_view() {
        let admin = NavigationState::new(Role::Admin)
            .select_view(ViewId::Reports)
            .unwrap();
        let operator = admin.switch_role(Role::Operator);
        assert_eq!(operator.active_view, ViewId::Reports);
    }

    #[test]
    fn test_menu_per_role() {
        let admin = NavigationState::new(Role::Admin).menu(3);
        let keys: Vec<&str> = admin.iter().map(|m| m.view.key()).collect();
        assert_eq!(keys, vec!["dashboard", "ships", "validation", "reports"]);
        assert_eq!(admin[2].badge, Some(3));
        assert!(admin[0].active);

        let operator = NavigationState::new(Role::Operator).menu(3);
        let labels: Vec<&str> = operator.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Input Logbook", "Riwayat Logbook"]);
        assert!(operator.iter().all(|m| m.badge.is_none()));
    }

    #[test]
    fn test_view_keys_round_trip() {
        for view in [
            ViewId::Overview,
            ViewId::Ships,
            ViewId::LogbookInput,
            ViewId::Validation,
            ViewId::Reports,
        ] {
            assert_eq!(ViewId::from_key(view.key()), Some(view));
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.key()));
        }
    }
}
