use super::form::{CatchEntryForm, TripForm};
use crate::domain::a001_vessel::VesselId;
use crate::domain::a002_logbook::{
    total_quantity, CatchEntry, CatchEntryId, LogbookSubmission, PhotoAttachment,
};
use crate::enums::{CatchUnit, FishSpecies, FishingGear};
use crate::shared::WorkflowError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Состояние черновика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    /// Есть несохранённые изменения
    Editing,
    /// Сохранён локально ("Simpan Draft"), в очередь проверки не попал
    Saved,
}

/// Черновик логбука рейса
///
/// Итог улова, число строк и фото не хранятся, а считаются при каждом чтении.
#[derive(Debug, Clone)]
pub struct LogbookDraft {
    vessel_id: VesselId,
    vessel_name: String,
    captain: String,
    trip: TripForm,
    catch_form: CatchEntryForm,
    notes: String,
    entries: Vec<CatchEntry>,
    photos: Vec<PhotoAttachment>,
    status: DraftStatus,
    saved_at: Option<DateTime<Utc>>,
}

impl LogbookDraft {
    /// Пустой черновик для судна оператора
    pub fn new(vessel_id: VesselId, vessel_name: impl Into<String>, captain: impl Into<String>) -> Self {
        Self {
            vessel_id,
            vessel_name: vessel_name.into(),
            captain: captain.into(),
            trip: TripForm::default(),
            catch_form: CatchEntryForm::default(),
            notes: String::new(),
            entries: Vec::new(),
            photos: Vec::new(),
            status: DraftStatus::Editing,
            saved_at: None,
        }
    }

    pub fn vessel_id(&self) -> VesselId {
        self.vessel_id
    }

    pub fn vessel_name(&self) -> &str {
        &self.vessel_name
    }

    pub fn captain(&self) -> &str {
        &self.captain
    }

    pub fn trip(&self) -> &TripForm {
        &self.trip
    }

    pub fn catch_form(&self) -> &CatchEntryForm {
        &self.catch_form
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn entries(&self) -> &[CatchEntry] {
        &self.entries
    }

    pub fn photos(&self) -> &[PhotoAttachment] {
        &self.photos
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    // ============================================================================
    // Derived values
    // ============================================================================

    pub fn total_quantity(&self) -> f64 {
        total_quantity(&self.entries)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Кнопка "Kirim ke DKP" доступна только при наличии строк улова
    pub fn can_submit(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
            && self.photos.is_empty()
            && self.notes.trim().is_empty()
            && self.trip == TripForm::default()
            && self.catch_form == CatchEntryForm::default()
    }

    // ============================================================================
    // Trip and notes
    // ============================================================================

    pub fn set_trip(&mut self, trip: TripForm) {
        self.trip = trip;
        self.mark_dirty();
    }

    /// Поля рейса для правки по одному; черновик сразу считается изменённым
    pub fn trip_mut(&mut self) -> &mut TripForm {
        self.mark_dirty();
        &mut self.trip
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.mark_dirty();
    }

    // ============================================================================
    // Catch entries
    // ============================================================================

    /// Заполнить форму строки улова
    pub fn fill_catch_form(
        &mut self,
        species: Option<FishSpecies>,
        quantity: impl Into<String>,
        unit: CatchUnit,
        gear: Option<FishingGear>,
    ) {
        self.catch_form = CatchEntryForm {
            species,
            quantity: quantity.into(),
            unit,
            gear,
        };
        self.mark_dirty();
    }

    /// Добавить строку из формы улова
    ///
    /// Без вида или с некорректным количеством черновик не меняется.
    /// После добавления очищаются только вид, количество и орудие лова.
    pub fn add_catch_entry(&mut self) -> Result<CatchEntryId, WorkflowError> {
        let entry = self.catch_form.to_entry()?;
        let id = entry.id;
        self.entries.push(entry);
        self.catch_form.clear_item_fields();
        self.mark_dirty();
        Ok(id)
    }

    /// Удалить строку; `false`, если такой строки нет
    pub fn remove_catch_entry(&mut self, id: CatchEntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    // ============================================================================
    // Photos
    // ============================================================================

    pub fn attach_photos(&mut self, photos: impl IntoIterator<Item = PhotoAttachment>) -> usize {
        let before = self.photos.len();
        self.photos.extend(photos);
        let added = self.photos.len() - before;
        if added > 0 {
            self.mark_dirty();
        }
        added
    }

    /// Открепить фото; ссылка на данные освобождается сразу
    pub fn remove_photo(&mut self, id: Uuid) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        let removed = self.photos.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    // ============================================================================
    // Save / submit
    // ============================================================================

    /// Сохранить черновик локально; возвращает снимок для хранения
    pub fn save_draft(&mut self, at: DateTime<Utc>) -> LogbookDraft {
        self.status = DraftStatus::Saved;
        self.saved_at = Some(at);
        self.clone()
    }

    /// Собрать логбук для отправки, не меняя черновик
    pub fn to_submission(&self) -> Result<LogbookSubmission, WorkflowError> {
        if !self.can_submit() {
            return Err(WorkflowError::invalid_input(
                "at least one catch entry is required before submission",
            ));
        }
        let trip = self.trip.parse_trip()?;
        let location = self.trip.parse_location()?;
        let notes = Some(self.notes.trim().to_string()).filter(|n| !n.is_empty());

        Ok(LogbookSubmission {
            vessel_id: self.vessel_id,
            vessel_name: self.vessel_name.clone(),
            captain: self.captain.clone(),
            trip,
            location,
            entries: self.entries.clone(),
            photos: self.photos.clone(),
            notes,
        })
    }

    /// Отправить: при успехе черновик очищается до пустого состояния
    pub fn submit(&mut self) -> Result<LogbookSubmission, WorkflowError> {
        let submission = self.to_submission()?;
        self.clear();
        Ok(submission)
    }

    /// Очистить черновик; привязка к судну сохраняется, фото освобождаются
    pub fn clear(&mut self) {
        *self = Self::new(self.vessel_id, self.vessel_name.clone(), self.captain.clone());
    }

    fn mark_dirty(&mut self) {
        self.status = DraftStatus::Editing;
    }
}
