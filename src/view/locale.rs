use serde::{Deserialize, Serialize};

/// Language used for every label the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn running(self) -> &'static str {
        match self {
            Locale::Ru => "Система работает",
            Locale::En => "System running",
        }
    }

    pub fn paused(self) -> &'static str {
        match self {
            Locale::Ru => "Система приостановлена",
            Locale::En => "System paused",
        }
    }

    pub fn pause(self) -> &'static str {
        match self {
            Locale::Ru => "Приостановить",
            Locale::En => "Pause",
        }
    }

    pub fn resume(self) -> &'static str {
        match self {
            Locale::Ru => "Возобновить",
            Locale::En => "Resume",
        }
    }

    pub fn active(self) -> &'static str {
        match self {
            Locale::Ru => "Активен",
            Locale::En => "Active",
        }
    }

    pub fn inactive(self) -> &'static str {
        match self {
            Locale::Ru => "Неактивен",
            Locale::En => "Inactive",
        }
    }

    pub fn delete(self) -> &'static str {
        match self {
            Locale::Ru => "Удалить",
            Locale::En => "Delete",
        }
    }

    pub fn chart_labels(self) -> [&'static str; 2] {
        match self {
            Locale::Ru => ["Успешно", "Ошибки"],
            Locale::En => ["Succeeded", "Errors"],
        }
    }

    pub fn confirm_delete(self, source: &str) -> String {
        match self {
            Locale::Ru => format!("Удалить пару каналов {source}?"),
            Locale::En => format!("Delete channel pair {source}?"),
        }
    }

    pub fn network_failure(self, detail: &str) -> String {
        match self {
            Locale::Ru => format!("Нет связи с сервисом: {detail}"),
            Locale::En => format!("Service unreachable: {detail}"),
        }
    }

    pub fn protocol_failure(self, detail: &str) -> String {
        match self {
            Locale::Ru => format!("Некорректный ответ сервиса: {detail}"),
            Locale::En => format!("Unexpected service response: {detail}"),
        }
    }

    pub fn rejected(self, detail: &str) -> String {
        match self {
            Locale::Ru => format!("Сервис отклонил запрос: {detail}"),
            Locale::En => format!("Request rejected: {detail}"),
        }
    }

    pub fn other_failure(self, detail: &str) -> String {
        match self {
            Locale::Ru => format!("Ошибка: {detail}"),
            Locale::En => format!("Error: {detail}"),
        }
    }

    pub fn missing_fields(self) -> &'static str {
        match self {
            Locale::Ru => "Укажите исходный и целевой каналы",
            Locale::En => "Both source and target channels are required",
        }
    }

    pub fn status_unknown(self) -> &'static str {
        match self {
            Locale::Ru => "Статус сервиса ещё не получен",
            Locale::En => "Service status has not been loaded yet",
        }
    }

    pub fn stale_row(self) -> &'static str {
        match self {
            Locale::Ru => "Список каналов обновился, выберите строку заново",
            Locale::En => "The channel list changed, pick the row again",
        }
    }
}
