//! Gallery uploads from the admin panel.

use crate::sync::{
    CommandError, CommandResult, EditableList, Mutation, RemoteTable,
    reconcile,
};
use crate::{MAX_IMAGE_SIZE, requests, responses};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryUploadError {
    #[error("Vyberte prosím soubor")]
    MissingFile,
    #[error("Zadejte název obrázku")]
    MissingTitle,
    #[error("Soubor je prázdný")]
    EmptyFile,
    #[error(
        "Soubor je příliš velký ({:.1} MB). Maximální velikost je 5 MB.",
        megabytes(.0)
    )]
    TooLarge(usize),
}

fn megabytes(bytes: &usize) -> f64 {
    *bytes as f64 / 1_048_576.0
}

impl From<GalleryUploadError> for CommandError {
    fn from(e: GalleryUploadError) -> Self {
        CommandError::validation(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// State of the "new gallery image" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryUploadDraft {
    pub title: String,
    pub description: String,
    file: Option<SelectedFile>,
}

impl GalleryUploadDraft {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Attach a file. An empty title is filled from the file name without
    /// its extension.
    pub fn select_file(
        &mut self,
        name: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<(), GalleryUploadError> {
        if data.len() > MAX_IMAGE_SIZE {
            return Err(GalleryUploadError::TooLarge(data.len()));
        }
        let name = name.into();
        if self.title.trim().is_empty() {
            self.title = name
                .rsplit_once('.')
                .map(|(stem, _)| stem.to_string())
                .unwrap_or_else(|| name.clone());
        }
        self.file = Some(SelectedFile { name, data });
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn validate(
        &self,
    ) -> Result<requests::CreateGalleryImage, GalleryUploadError> {
        let file = self.file.as_ref().ok_or(GalleryUploadError::MissingFile)?;
        if file.data.is_empty() {
            return Err(GalleryUploadError::EmptyFile);
        }
        if file.data.len() > MAX_IMAGE_SIZE {
            return Err(GalleryUploadError::TooLarge(file.data.len()));
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(GalleryUploadError::MissingTitle);
        }
        let description = self.description.trim();
        Ok(requests::CreateGalleryImage {
            title: title.to_string(),
            description: (!description.is_empty())
                .then(|| description.to_string()),
            image_data: file.data.clone(),
        })
    }
}

/// Validate `draft` and upload it. Nothing is sent when validation fails.
pub async fn upload<R, F>(
    list: &mut EditableList<responses::GalleryImage>,
    remote: &R,
    draft: &GalleryUploadDraft,
    publish: F,
) -> CommandResult<()>
where
    R: RemoteTable<
            Record = responses::GalleryImage,
            Draft = requests::CreateGalleryImage,
        >,
    F: FnMut(&EditableList<responses::GalleryImage>),
{
    let request = draft.validate()?;
    reconcile(list, remote, Mutation::Insert(request), publish).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GalleryImageId;
    use crate::sync::ErrorKind;
    use jiff::Timestamp;
    use std::cell::Cell;
    use uuid::Uuid;

    #[derive(Default)]
    struct CountingGallery {
        uploads: Cell<usize>,
    }

    impl RemoteTable for CountingGallery {
        type Record = responses::GalleryImage;
        type Draft = requests::CreateGalleryImage;

        async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>> {
            Ok(vec![])
        }

        async fn insert(
            &self,
            draft: &Self::Draft,
        ) -> CommandResult<Self::Record> {
            self.uploads.set(self.uploads.get() + 1);
            Ok(responses::GalleryImage {
                id: GalleryImageId(Uuid::new_v4()),
                title: draft.title.clone(),
                description: draft.description.clone(),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            })
        }

        async fn update(
            &self,
            record: &Self::Record,
        ) -> CommandResult<Self::Record> {
            Ok(record.clone())
        }

        async fn delete(&self, _id: &GalleryImageId) -> CommandResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn upload_without_file_is_rejected_before_any_call() {
        let remote = CountingGallery::default();
        let mut list = EditableList::default();
        let draft = GalleryUploadDraft {
            title: "Trampolíny".into(),
            ..Default::default()
        };

        let err = upload(&mut list, &remote, &draft, |_| {})
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, GalleryUploadError::MissingFile.to_string());
        assert_eq!(remote.uploads.get(), 0);
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn upload_with_file_adds_image() {
        let remote = CountingGallery::default();
        let mut list = EditableList::default();
        let mut draft = GalleryUploadDraft::default();
        draft.select_file("hala.jpg", vec![0xff, 0xd8, 0xff]).unwrap();

        upload(&mut list, &remote, &draft, |_| {}).await.unwrap();

        assert_eq!(remote.uploads.get(), 1);
        assert_eq!(list.items()[0].title, "hala");
    }

    #[test]
    fn oversized_file_is_refused() {
        let mut draft = GalleryUploadDraft::default();
        let err = draft
            .select_file("big.png", vec![0; MAX_IMAGE_SIZE + 1])
            .unwrap_err();
        assert_eq!(err, GalleryUploadError::TooLarge(MAX_IMAGE_SIZE + 1));
        assert!(draft.file().is_none());
    }

    #[test]
    fn explicit_title_is_kept() {
        let mut draft = GalleryUploadDraft {
            title: "Hlavní hala".into(),
            ..Default::default()
        };
        draft.select_file("IMG_0001.jpg", vec![1]).unwrap();
        assert_eq!(draft.validate().unwrap().title, "Hlavní hala");
    }
}
