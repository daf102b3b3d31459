//! Catalogue of repair methods for display.

use serde::Serialize;

/// Human-readable description of a repair method label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairMethodInfo {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub urgency: String,
}

impl RepairMethodInfo {
    fn new(name: &str, description: &str, duration: &str, urgency: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            urgency: urgency.to_string(),
        }
    }
}

/// Look up a section or component repair method label.
///
/// Unknown labels get a generic entry named after the label.
pub fn repair_method_info(label: &str) -> RepairMethodInfo {
    match label {
        "экстренный_комплексный_ремонт" => RepairMethodInfo::new(
            "ЭКСТРЕННЫЙ комплексный ремонт",
            "Немедленная замена всех аварийных компонентов. Требуется остановка системы.",
            "1-3 дня",
            "КРИТИЧЕСКАЯ",
        ),
        "комплексный_ремонт" => RepairMethodInfo::new(
            "Комплексный ремонт участка",
            "Замена повреждённых компонентов и усиление защиты.",
            "3-7 дней",
            "ВЫСОКАЯ",
        ),
        "плановый_ремонт" => RepairMethodInfo::new(
            "Плановый ремонт",
            "Частичная замена изношенных элементов по графику.",
            "7-14 дней",
            "СРЕДНЯЯ",
        ),
        "техническое_обслуживание" => RepairMethodInfo::new(
            "Техническое обслуживание",
            "Профилактические работы: покраска, очистка, диагностика.",
            "1-2 дня",
            "НИЗКАЯ",
        ),
        "диагностика" => RepairMethodInfo::new(
            "Диагностика и мониторинг",
            "Контроль состояния, замеры толщины, анализ коррозии.",
            "1 день",
            "МИНИМАЛЬНАЯ",
        ),
        // legacy labels still found in saved reports
        "замена_участка" => RepairMethodInfo::new(
            "Замена участка трубы",
            "Удаление поврежденного участка и установка нового.",
            "2-5 дней",
            "ВЫСОКАЯ",
        ),
        "усиление_изоляции" => RepairMethodInfo::new(
            "Усиление изоляции",
            "Нанесение дополнительных защитных покрытий.",
            "1-3 дня",
            "СРЕДНЯЯ",
        ),
        other => RepairMethodInfo::new(other, "Стандартный метод ремонта", "3-5 дней", "СРЕДНЯЯ"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionRepairMethod;
    use pw_core::ConditionLevel;

    #[test]
    fn every_section_method_is_catalogued() {
        for level in ConditionLevel::ALL {
            let label = SectionRepairMethod::for_condition(level).label();
            let info = repair_method_info(label);
            assert_ne!(info.description, "Стандартный метод ремонта", "{label}");
        }
    }

    #[test]
    fn emergency_is_critical() {
        let info = repair_method_info("экстренный_комплексный_ремонт");
        assert_eq!(info.urgency, "КРИТИЧЕСКАЯ");
        assert_eq!(info.duration, "1-3 дня");
    }

    #[test]
    fn unknown_label_falls_back() {
        let info = repair_method_info("частичный_ремонт");
        assert_eq!(info.name, "частичный_ремонт");
        assert_eq!(info.duration, "3-5 дней");
    }
}
