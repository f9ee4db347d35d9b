//! Keeping an admin section's local list in step with its remote table.
//!
//! Every admin section follows the same steps: fetch everything, apply an
//! edit locally, send it to the api, and if the api refuses, throw the local
//! change away and fetch again. [`reconcile`] is the one place this happens.

use std::fmt;

use reqwest::StatusCode;

use crate::ClientError;
use crate::responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    NotFound,
    Validation,
    Server,
}

/// Failure of a remote command, ready to be shown in a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            ErrorKind::Network => "Nepodařilo se spojit se serverem",
            ErrorKind::Unauthorized => "Nemáte oprávnění",
            ErrorKind::NotFound => "Záznam nebyl nalezen",
            ErrorKind::Validation => return f.write_str(&self.message),
            ErrorKind::Server => "Chyba serveru",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<ClientError> for CommandError {
    fn from(e: ClientError) -> Self {
        let kind = match &e {
            ClientError::Network(_) => ErrorKind::Network,
            ClientError::APIError(status, _) => match *status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ErrorKind::Unauthorized
                }
                StatusCode::NOT_FOUND => ErrorKind::NotFound,
                StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE => {
                    ErrorKind::Validation
                }
                _ => ErrorKind::Server,
            },
        };
        Self::new(kind, e.to_string())
    }
}

impl From<crate::requests::FieldError> for CommandError {
    fn from(e: crate::requests::FieldError) -> Self {
        Self::validation(e.to_string())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// A row of a remote table.
pub trait Record: Clone {
    type Id: Clone + PartialEq;

    fn id(&self) -> Self::Id;
}

macro_rules! impl_record {
    ($($ty:ty => $id:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                type Id = $id;

                fn id(&self) -> Self::Id {
                    self.id
                }
            }
        )*
    };
}

impl_record!(
    responses::Content => crate::ContentId,
    responses::GalleryImage => crate::GalleryImageId,
    responses::Service => crate::ServiceId,
    responses::PriceItem => crate::PriceItemId,
    responses::Membership => crate::MembershipId,
    responses::Reservation => crate::ReservationId,
    responses::UserProfile => crate::UserId,
);

/// Local, transient copy of a remote table.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableList<T> {
    items: Vec<T>,
}

impl<T> Default for EditableList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> EditableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Fetch the whole table.
    pub async fn load<R>(remote: &R) -> CommandResult<Self>
    where
        R: RemoteTable<Record = T>,
    {
        Ok(Self::new(remote.fetch_all().await?))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id() == id)
    }

    /// Replace the item with the same id. Returns false if it is not in the
    /// list.
    fn replace(&mut self, record: T) -> bool {
        match self.position(&record.id()) {
            Some(index) => {
                self.items[index] = record;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }
}

/// An edit made in an admin section.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T: Record, D> {
    /// New row. The id is assigned remotely, so it appears locally only once
    /// the api has answered.
    Insert(D),
    Update(T),
    Delete(T::Id),
}

/// Table-style CRUD against the api.
#[allow(async_fn_in_trait)]
pub trait RemoteTable {
    type Record: Record;
    /// Fields needed to create a row.
    type Draft;

    async fn fetch_all(&self) -> CommandResult<Vec<Self::Record>>;

    async fn insert(&self, draft: &Self::Draft) -> CommandResult<Self::Record>;

    async fn update(&self, record: &Self::Record)
    -> CommandResult<Self::Record>;

    async fn delete(
        &self,
        id: &<Self::Record as Record>::Id,
    ) -> CommandResult<()>;
}

/// Apply `mutation` to `list` and push it to `remote`.
///
/// Updates and deletes are applied locally first and `publish` is called so
/// the change shows immediately. If the remote call fails, the local change
/// is discarded and the list is refetched; if the refetch fails too, the
/// list is restored to how it was before the mutation. `publish` is called
/// again with the final state either way, and the remote error is returned.
pub async fn reconcile<R, F>(
    list: &mut EditableList<R::Record>,
    remote: &R,
    mutation: Mutation<R::Record, R::Draft>,
    mut publish: F,
) -> CommandResult<()>
where
    R: RemoteTable,
    F: FnMut(&EditableList<R::Record>),
{
    let snapshot = list.clone();

    let outcome = match mutation {
        Mutation::Insert(draft) => match remote.insert(&draft).await {
            Ok(created) => {
                list.items.push(created);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Mutation::Update(record) => {
            if !list.replace(record.clone()) {
                return Err(CommandError::new(
                    ErrorKind::NotFound,
                    "položka už v seznamu není",
                ));
            }
            publish(list);
            match remote.update(&record).await {
                Ok(saved) => {
                    list.replace(saved);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Mutation::Delete(id) => {
            if list.remove(&id).is_none() {
                return Err(CommandError::new(
                    ErrorKind::NotFound,
                    "položka už v seznamu není",
                ));
            }
            publish(list);
            remote.delete(&id).await
        }
    };

    if let Err(e) = &outcome {
        tracing::warn!("remote change failed, resyncing: {e}");
        *list = match remote.fetch_all().await {
            Ok(items) => EditableList::new(items),
            Err(refetch_error) => {
                tracing::warn!("resync failed: {refetch_error}");
                snapshot
            }
        };
    }
    publish(list);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        title: String,
    }

    impl Record for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn row(id: u32, title: &str) -> Row {
        Row {
            id,
            title: title.to_string(),
        }
    }

    /// In-memory table whose writes can be made to fail.
    #[derive(Default)]
    struct FakeTable {
        rows: RefCell<Vec<Row>>,
        fail_writes: bool,
        fail_reads: Cell<bool>,
        fetches: Cell<usize>,
        next_id: Cell<u32>,
    }

    impl FakeTable {
        fn with_rows(rows: Vec<Row>) -> Self {
            Self {
                next_id: Cell::new(100),
                rows: RefCell::new(rows),
                ..Default::default()
            }
        }

        fn write_error() -> CommandError {
            CommandError::new(ErrorKind::Server, "simulated failure")
        }
    }

    impl RemoteTable for FakeTable {
        type Record = Row;
        type Draft = String;

        async fn fetch_all(&self) -> CommandResult<Vec<Row>> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail_reads.get() {
                return Err(CommandError::new(ErrorKind::Network, "offline"));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn insert(&self, draft: &String) -> CommandResult<Row> {
            if self.fail_writes {
                return Err(Self::write_error());
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let created = row(id, draft);
            self.rows.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update(&self, record: &Row) -> CommandResult<Row> {
            if self.fail_writes {
                return Err(Self::write_error());
            }
            let mut rows = self.rows.borrow_mut();
            let existing = rows
                .iter_mut()
                .find(|r| r.id == record.id)
                .ok_or_else(|| CommandError::new(ErrorKind::NotFound, "gone"))?;
            *existing = record.clone();
            Ok(record.clone())
        }

        async fn delete(&self, id: &u32) -> CommandResult<()> {
            if self.fail_writes {
                return Err(Self::write_error());
            }
            self.rows.borrow_mut().retain(|r| r.id != *id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn delete_removes_item_when_remote_succeeds() {
        let remote = FakeTable::with_rows(vec![row(1, "a"), row(2, "b")]);
        let mut list = EditableList::load(&remote).await.unwrap();

        reconcile(&mut list, &remote, Mutation::Delete(1), |_| {})
            .await
            .unwrap();

        assert_eq!(list.items(), [row(2, "b")]);
        assert_eq!(remote.fetches.get(), 1);
    }

    #[tokio::test]
    async fn failed_delete_reappears_after_resync() {
        let remote = FakeTable {
            fail_writes: true,
            ..FakeTable::with_rows(vec![row(1, "a"), row(2, "b")])
        };
        let mut list = EditableList::load(&remote).await.unwrap();
        let mut published = Vec::new();

        let result = reconcile(&mut list, &remote, Mutation::Delete(1), |l| {
            published.push(l.len())
        })
        .await;

        assert_eq!(result.unwrap_err().kind, ErrorKind::Server);
        // removed optimistically, then restored from the refetch
        assert_eq!(published, vec![1, 2]);
        assert!(list.get(&1).is_some());
        assert_eq!(remote.fetches.get(), 2);
    }

    #[tokio::test]
    async fn failed_update_is_discarded() {
        let remote = FakeTable {
            fail_writes: true,
            ..FakeTable::with_rows(vec![row(1, "a")])
        };
        let mut list = EditableList::load(&remote).await.unwrap();

        let result = reconcile(
            &mut list,
            &remote,
            Mutation::Update(row(1, "changed")),
            |_| {},
        )
        .await;

        assert!(result.is_err());
        assert_eq!(list.get(&1).unwrap().title, "a");
    }

    #[tokio::test]
    async fn snapshot_is_restored_when_resync_fails() {
        let remote = FakeTable {
            fail_writes: true,
            ..FakeTable::with_rows(vec![row(1, "a")])
        };
        let mut list = EditableList::load(&remote).await.unwrap();
        remote.fail_reads.set(true);

        let result =
            reconcile(&mut list, &remote, Mutation::Delete(1), |_| {}).await;

        assert!(result.is_err());
        assert_eq!(list.items(), [row(1, "a")]);
    }

    #[tokio::test]
    async fn insert_appends_remote_record() {
        let remote = FakeTable::with_rows(vec![]);
        let mut list = EditableList::load(&remote).await.unwrap();

        reconcile(&mut list, &remote, Mutation::Insert("new".into()), |_| {})
            .await
            .unwrap();

        assert_eq!(list.items(), [row(100, "new")]);
    }

    #[tokio::test]
    async fn mutating_unknown_item_does_not_call_remote() {
        let remote = FakeTable::with_rows(vec![row(1, "a")]);
        let mut list = EditableList::load(&remote).await.unwrap();

        let result =
            reconcile(&mut list, &remote, Mutation::Delete(7), |_| {}).await;

        assert_eq!(result.unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(remote.rows.borrow().len(), 1);
        assert_eq!(remote.fetches.get(), 1);
    }

    #[test]
    fn client_errors_map_to_kinds() {
        let e: CommandError =
            ClientError::APIError(StatusCode::FORBIDDEN, "no".into()).into();
        assert_eq!(e.kind, ErrorKind::Unauthorized);
        let e: CommandError =
            ClientError::APIError(StatusCode::BAD_REQUEST, "bad".into()).into();
        assert_eq!(e.kind, ErrorKind::Validation);
        assert_eq!(e.to_string(), "bad");
        let e: CommandError =
            ClientError::APIError(StatusCode::BAD_GATEWAY, "x".into()).into();
        assert_eq!(e.kind, ErrorKind::Server);
    }
}
