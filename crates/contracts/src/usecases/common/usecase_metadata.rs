/// Метаданные UseCase для идентификации и журналирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "logbook_entry")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Input Logbook")
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_logbook_entry"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
