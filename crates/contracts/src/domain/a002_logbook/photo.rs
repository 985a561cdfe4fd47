use std::sync::Arc;
use uuid::Uuid;

/// Фото улова, прикреплённое к черновику
///
/// Хранит ссылку на данные вызывающей стороны; копирования нет. Данные
/// освобождаются, когда последний держатель (черновик или отправка) удалён.
#[derive(Clone)]
pub struct PhotoAttachment {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub data: Arc<[u8]>,
}

impl PhotoAttachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Arc<[u8]>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Ссылка на фото, которая сохраняется в логбуке
    pub fn reference(&self) -> String {
        format!("photo://{}/{}", self.id, self.file_name)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl std::fmt::Debug for PhotoAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoAttachment")
            .field("id", &self.id)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}
