use crate::client::UserApi;
use crate::core::errors::RosterioError;
use crate::core::models::user::{NewUser, User, UserUpdate};

/// Where the cached list stands relative to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// A full fetch is in flight (or none has happened yet).
    Loading,
    /// The cache reflects the last successful fetch plus local echoes.
    Ready,
    /// The last load or a mutation hit an infrastructure fault; carries the
    /// message to display. Cached entries stay visible but may be stale
    /// until the next `load`.
    Failed(String),
}

/// Cached list of user records with a local search filter.
///
/// Mutations go through the server first and the cache is patched from the
/// echoed record, so a successful create/update/delete never triggers a
/// refetch. Only `load` performs a full fetch.
pub struct UserListView<A: UserApi> {
    api: A,
    // Kept in ascending id order, mirroring the server's list order.
    users: Vec<User>,
    search_term: String,
    phase: ViewPhase,
}

impl<A: UserApi> UserListView<A> {
    pub fn new(api: A) -> Self {
        UserListView {
            api,
            users: Vec::new(),
            search_term: String::new(),
            phase: ViewPhase::Loading,
        }
    }

    /// Replaces the cache with a full fetch. On failure the previous entries
    /// stay cached and the phase flips to [`ViewPhase::Failed`]; a later
    /// successful call is what returns the view to `Ready`.
    pub async fn load(&mut self) -> Result<(), RosterioError> {
        self.phase = ViewPhase::Loading;
        match self.api.list_users().await {
            Ok(users) => {
                self.users = users;
                self.phase = ViewPhase::Ready;
                Ok(())
            }
            Err(err) => {
                self.phase = ViewPhase::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Creates the record server-side and appends the echoed row locally.
    pub async fn create_user(&mut self, new_user: NewUser) -> Result<User, RosterioError> {
        match self.api.create_user(new_user).await {
            Ok(user) => {
                self.upsert(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.note_failure(&err);
                Err(err)
            }
        }
    }

    /// Replaces the record server-side and patches the echoed row into the
    /// cache. If the server reports the id unknown, the stale local entry is
    /// dropped and the error propagated.
    pub async fn update_user(&mut self, id: i64, fields: UserUpdate) -> Result<User, RosterioError> {
        match self.api.update_user(id, fields).await {
            Ok(user) => {
                self.upsert(user.clone());
                Ok(user)
            }
            Err(RosterioError::UserNotFound(id)) => {
                // Gone server-side; drop the stale cache entry.
                self.users.retain(|u| u.id != id);
                Err(RosterioError::UserNotFound(id))
            }
            Err(err) => {
                self.note_failure(&err);
                Err(err)
            }
        }
    }

    /// Deletes the record server-side and removes it locally. An unknown id
    /// still removes the local entry, since either way the record no longer
    /// exists on the server.
    pub async fn delete_user(&mut self, id: i64) -> Result<(), RosterioError> {
        match self.api.delete_user(id).await {
            Ok(()) => {
                self.users.retain(|u| u.id != id);
                Ok(())
            }
            Err(RosterioError::UserNotFound(id)) => {
                self.users.retain(|u| u.id != id);
                Err(RosterioError::UserNotFound(id))
            }
            Err(err) => {
                self.note_failure(&err);
                Err(err)
            }
        }
    }

    /// Filter applied locally; no request is made.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Cached entries matching the search term, case-insensitively, against
    /// name or email. An empty term matches everything.
    pub fn visible(&self) -> Vec<&User> {
        let term = self.search_term.to_lowercase();
        if term.is_empty() {
            return self.users.iter().collect();
        }
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&term) || u.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Every cached entry, unfiltered.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    // Ids are assigned monotonically, so the insertion point keeps the
    // cache sorted without a re-sort.
    fn upsert(&mut self, user: User) {
        let at = self.users.partition_point(|u| u.id < user.id);
        if self.users.get(at).map(|u| u.id) == Some(user.id) {
            self.users[at] = user;
        } else {
            self.users.insert(at, user);
        }
    }

    // Infrastructure faults mark the view Failed; rejected input leaves the
    // cache and phase untouched.
    fn note_failure(&mut self, err: &RosterioError) {
        if matches!(
            err,
            RosterioError::TransportError(_) | RosterioError::StorageError(_)
        ) {
            self.phase = ViewPhase::Failed(err.to_string());
        }
    }
}
