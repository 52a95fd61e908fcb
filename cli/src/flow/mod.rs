//! Workspace switch/create/delete flow.
//!
//! [`WorkspaceFlow`] turns user intents into console API calls and reports
//! every outcome through an injected [`Notifier`], then leaves the page via an
//! injected [`Navigator`]. Remote failures never escape an operation: each
//! one returns an outcome value describing what happened.
//!
//! The cached [`WorkspaceList`] is never edited. A successful mutation ends in
//! a full navigation, and whoever renders the next page fetches a fresh list.
//!
//! All operations take `&mut self`, so one flow cannot run two operations at
//! once. No timeout is applied here: an operation whose remote call never
//! completes keeps its busy flag set.

pub mod navigate;
pub mod notify;
pub mod state;

pub use navigate::{NavigationTargets, Navigator};
pub use notify::{messages, NotificationKind, Notifier};
pub use state::{CreationDraft, PendingDeletion};

use url::Url;

use crate::client::{RemoteError, WorkspaceApi};
use crate::decode::{self, DecodedBody};
use crate::workspace::{Workspace, WorkspaceList};

/// Error codes the console attaches to failed workspace requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownErrorCode {
    /// The account already owns as many workspaces as its plan allows.
    ExceedMaxWorkspaces,
}

impl KnownErrorCode {
    /// Parses the `code` field of an error body.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "exceed_max_workspaces" => Some(Self::ExceedMaxWorkspaces),
            _ => None,
        }
    }

    /// The wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExceedMaxWorkspaces => "exceed_max_workspaces",
        }
    }

    /// The notification shown for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExceedMaxWorkspaces => messages::EXCEEDED_LIMIT,
        }
    }
}

/// Result of [`WorkspaceFlow::switch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The target is already current; nothing was sent.
    AlreadyCurrent,
    /// The target is not in the cached list; nothing was sent.
    UnknownWorkspace,
    /// The server switched; the navigator was sent to the app root.
    Switched,
    /// The request failed; the generic error was shown.
    Failed,
}

impl SwitchOutcome {
    /// Whether the account ends up in the requested workspace.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::AlreadyCurrent | Self::Switched)
    }
}

/// Why a create did not complete.
///
/// The variants are mutually exclusive: only `KnownCode` and `Raw` produce a
/// notification.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateFailure {
    /// The error body carried a code with a dedicated message.
    KnownCode(KnownErrorCode),
    /// The error body decoded, but its code is missing or unknown. Silent.
    Unrecognized(DecodedBody),
    /// There was no body to decode, or reading it failed.
    Raw(String),
}

/// Result of [`WorkspaceFlow::create`].
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The trimmed name was empty; nothing was sent.
    Invalid,
    /// Created and switched to; the navigator was sent to the origin.
    Created { id: String },
    /// The create or its chained switch failed.
    Failed(CreateFailure),
}

impl CreateOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Result of [`WorkspaceFlow::confirm_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No deletion was requested; nothing was sent.
    NothingPending,
    /// Deleted; the navigator was sent to the origin.
    Deleted,
    /// The request failed; the generic error was shown.
    Failed,
}

impl DeleteOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Orchestrates workspace mutations against a cached workspace list.
pub struct WorkspaceFlow<A, N, V> {
    api: A,
    notifier: N,
    navigator: V,
    targets: NavigationTargets,
    workspaces: WorkspaceList,
    draft: CreationDraft,
    create_open: bool,
    pending_deletion: Option<PendingDeletion>,
    confirm_open: bool,
    deleting: bool,
}

impl<A, N, V> WorkspaceFlow<A, N, V>
where
    A: WorkspaceApi,
    N: Notifier,
    V: Navigator,
{
    pub fn new(
        api: A,
        notifier: N,
        navigator: V,
        targets: NavigationTargets,
        workspaces: WorkspaceList,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            targets,
            workspaces,
            draft: CreationDraft::default(),
            create_open: false,
            pending_deletion: None,
            confirm_open: false,
            deleting: false,
        }
    }

    /// The cached list this flow was built with.
    #[must_use]
    pub const fn workspaces(&self) -> &WorkspaceList {
        &self.workspaces
    }

    #[must_use]
    pub const fn draft(&self) -> &CreationDraft {
        &self.draft
    }

    #[must_use]
    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.pending_deletion.as_ref()
    }

    #[must_use]
    pub const fn is_create_open(&self) -> bool {
        self.create_open
    }

    #[must_use]
    pub const fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    /// Whether a create or delete request is in flight.
    ///
    /// Surfaces that trigger operations should stay disabled while this holds.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.draft.submitting || self.deleting
    }

    /// Opens the create prompt with an empty draft.
    pub fn open_create(&mut self) {
        self.draft.reset();
        self.create_open = true;
    }

    /// Makes `target_id` the current workspace.
    pub async fn switch(&mut self, target_id: &str) -> SwitchOutcome {
        if self
            .workspaces
            .current()
            .is_some_and(|ws| ws.id == target_id)
        {
            tracing::debug!("workspace {target_id} is already current");
            return SwitchOutcome::AlreadyCurrent;
        }

        if self.workspaces.find(target_id).is_none() {
            tracing::warn!("refusing to switch to {target_id}: not in the workspace list");
            return SwitchOutcome::UnknownWorkspace;
        }

        match self.api.switch_workspace(target_id).await {
            Ok(()) => {
                tracing::info!("switched to workspace {target_id}");
                self.notifier
                    .notify(NotificationKind::Success, messages::SWITCHED);
                self.redirect_to(self.targets.app_root.clone());
                SwitchOutcome::Switched
            }
            Err(err) => {
                tracing::warn!("switch to workspace {target_id} failed: {err}");
                self.notifier
                    .notify(NotificationKind::Error, messages::SAVE_FAILED);
                SwitchOutcome::Failed
            }
        }
    }

    /// Creates a workspace named `name` (trimmed) and switches to it.
    ///
    /// A blank name is rejected locally and leaves the draft untouched. Any
    /// other outcome closes the prompt and resets the draft.
    pub async fn create(&mut self, name: &str) -> CreateOutcome {
        self.draft.name = name.to_string();

        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.notifier
                .notify(NotificationKind::Error, messages::NAME_REQUIRED);
            return CreateOutcome::Invalid;
        }

        self.draft.submitting = true;
        let outcome = self.submit_create(trimmed).await;

        self.draft.reset();
        self.create_open = false;
        outcome
    }

    async fn submit_create(&self, name: &str) -> CreateOutcome {
        let created = match self.api.create_workspace(name).await {
            Ok(created) => created,
            Err(err) => return self.create_failed(err).await,
        };

        tracing::info!("created workspace {} ({name})", created.id);
        self.notifier
            .notify(NotificationKind::Success, messages::CREATED);

        if let Err(err) = self.api.switch_workspace(&created.id).await {
            return self.create_failed(err).await;
        }

        self.redirect_to(self.targets.origin_root.clone());
        CreateOutcome::Created { id: created.id }
    }

    async fn create_failed(&self, err: RemoteError) -> CreateOutcome {
        let failure = classify_create_failure(err).await;

        match &failure {
            CreateFailure::KnownCode(code) => {
                tracing::warn!("create workspace rejected: {}", code.as_str());
                self.notifier.notify(NotificationKind::Error, code.message());
            }
            CreateFailure::Unrecognized(body) => {
                tracing::warn!(
                    code = body.code().unwrap_or("-"),
                    detail = body.summary().unwrap_or("-"),
                    "create workspace failed with an unrecognized error body"
                );
            }
            CreateFailure::Raw(message) => {
                tracing::warn!("create workspace failed: {message}");
                self.notifier
                    .notify(NotificationKind::Error, messages::CREATE_FAILED);
            }
        }

        CreateOutcome::Failed(failure)
    }

    /// Asks for confirmation before deleting `workspace`. Local only.
    pub fn request_delete(&mut self, workspace: &Workspace) {
        self.pending_deletion = Some(PendingDeletion::from(workspace));
        self.confirm_open = true;
    }

    /// Drops the pending deletion. Local only.
    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
        self.confirm_open = false;
    }

    /// Deletes the workspace recorded by [`request_delete`](Self::request_delete).
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let Some(pending) = self.pending_deletion.clone() else {
            return DeleteOutcome::NothingPending;
        };

        self.deleting = true;
        let outcome = match self.api.delete_workspace(&pending.id).await {
            Ok(()) => {
                tracing::info!("deleted workspace {} ({})", pending.id, pending.name);
                self.notifier
                    .notify(NotificationKind::Success, messages::DELETED);
                self.redirect_to(self.targets.origin_root.clone());
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!("delete workspace {} failed: {err}", pending.id);
                self.notifier
                    .notify(NotificationKind::Error, messages::DELETE_FAILED);
                DeleteOutcome::Failed
            }
        };

        self.deleting = false;
        self.confirm_open = false;
        self.pending_deletion = None;
        outcome
    }

    fn redirect_to(&self, url: Url) {
        tracing::debug!("navigating to {url}");
        self.navigator.redirect(&url);
    }
}

/// Sorts a failed create into the three [`CreateFailure`] cases.
async fn classify_create_failure(err: RemoteError) -> CreateFailure {
    let message = err.to_string();
    let Some(body) = err.into_body() else {
        return CreateFailure::Raw(message);
    };

    match decode::decode(body).await {
        Ok(decoded) => match decoded.code().and_then(KnownErrorCode::from_code) {
            Some(code) => CreateFailure::KnownCode(code),
            None => CreateFailure::Unrecognized(decoded),
        },
        Err(read_err) => CreateFailure::Raw(read_err.to_string()),
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message);
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn redirect(&self, url: &Url) {
        (**self).redirect(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use bytes::Bytes;
    use futures::StreamExt;

    use crate::client::{CreatedWorkspace, MockWorkspaceApi};
    use crate::decode::BodyReadError;
    use crate::workspace::types::test_workspace;

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<(NotificationKind, String)>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.0.borrow_mut().push((kind, message.to_string()));
        }
    }

    impl RecordingNotifier {
        fn take(&self) -> Vec<(NotificationKind, String)> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn redirect(&self, url: &Url) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn targets() -> NavigationTargets {
        NavigationTargets {
            app_root: Url::parse("https://console.example.com/app").unwrap(),
            origin_root: Url::parse("https://console.example.com/").unwrap(),
        }
    }

    fn workspaces() -> WorkspaceList {
        WorkspaceList::new(vec![
            test_workspace("a", "Alpha", true),
            test_workspace("b", "Beta", false),
        ])
        .unwrap()
    }

    fn flow<'a>(
        api: MockWorkspaceApi,
        notifier: &'a RecordingNotifier,
        navigator: &'a RecordingNavigator,
    ) -> WorkspaceFlow<MockWorkspaceApi, &'a RecordingNotifier, &'a RecordingNavigator> {
        WorkspaceFlow::new(api, notifier, navigator, targets(), workspaces())
    }

    fn error(message: &str) -> (NotificationKind, String) {
        (NotificationKind::Error, message.to_string())
    }

    fn success(message: &str) -> (NotificationKind, String) {
        (NotificationKind::Success, message.to_string())
    }

    fn created(id: &str) -> CreatedWorkspace {
        CreatedWorkspace {
            id: id.to_string(),
            name: None,
        }
    }

    #[tokio::test]
    async fn switch_to_current_workspace_is_a_noop() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(MockWorkspaceApi::new(), &notifier, &navigator);

        assert_eq!(flow.switch("a").await, SwitchOutcome::AlreadyCurrent);
        assert!(notifier.take().is_empty());
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn switch_to_unknown_workspace_sends_nothing() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(MockWorkspaceApi::new(), &notifier, &navigator);

        assert_eq!(flow.switch("zzz").await, SwitchOutcome::UnknownWorkspace);
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn switch_success_reloads_app_root() {
        let mut api = MockWorkspaceApi::new();
        api.expect_switch_workspace()
            .withf(|tenant_id| tenant_id == "b")
            .times(1)
            .returning(|_| Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        assert_eq!(flow.switch("b").await, SwitchOutcome::Switched);
        assert_eq!(notifier.take(), vec![success(messages::SWITCHED)]);
        assert_eq!(
            *navigator.0.borrow(),
            vec!["https://console.example.com/app".to_string()]
        );
    }

    #[tokio::test]
    async fn switch_failure_is_generic_even_with_a_known_code() {
        let mut api = MockWorkspaceApi::new();
        api.expect_switch_workspace().times(1).returning(|_| {
            Err(RemoteError::with_text_body(
                500,
                r#"{"code": "exceed_max_workspaces"}"#,
            ))
        });
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        assert_eq!(flow.switch("b").await, SwitchOutcome::Failed);
        assert_eq!(notifier.take(), vec![error(messages::SAVE_FAILED)]);
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn create_with_blank_name_only_notifies() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(MockWorkspaceApi::new(), &notifier, &navigator);
        flow.open_create();

        for name in ["", "   ", "\t\n"] {
            assert_eq!(flow.create(name).await, CreateOutcome::Invalid);
            assert_eq!(notifier.take(), vec![error(messages::NAME_REQUIRED)]);
        }
        assert!(flow.is_create_open());
        assert!(!flow.is_busy());
    }

    /// Never answers a create, so the flow stays mid-request.
    struct StalledApi;

    #[async_trait::async_trait]
    impl WorkspaceApi for StalledApi {
        async fn list_workspaces(&self) -> Result<Vec<Workspace>, RemoteError> {
            unreachable!("list is not part of the flow")
        }

        async fn current_workspace(&self) -> Result<Workspace, RemoteError> {
            unreachable!("current is not part of the flow")
        }

        async fn rename_workspace(&self, _name: &str) -> Result<Workspace, RemoteError> {
            unreachable!("rename is not part of the flow")
        }

        async fn switch_workspace(&self, _tenant_id: &str) -> Result<(), RemoteError> {
            unreachable!("create never completes")
        }

        async fn create_workspace(&self, _name: &str) -> Result<CreatedWorkspace, RemoteError> {
            futures::future::pending().await
        }

        async fn delete_workspace(&self, _workspace_id: &str) -> Result<(), RemoteError> {
            unreachable!("delete is not requested")
        }
    }

    #[tokio::test]
    async fn create_is_busy_while_the_request_is_in_flight() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = WorkspaceFlow::new(
            StalledApi,
            &notifier,
            &navigator,
            targets(),
            workspaces(),
        );
        flow.open_create();
        assert!(!flow.is_busy());

        {
            let create = flow.create("Gamma");
            futures::pin_mut!(create);
            assert!(futures::poll!(create.as_mut()).is_pending());
        }

        assert!(flow.is_busy());
        assert!(flow.draft().submitting);
        assert_eq!(flow.draft().name, "Gamma");
        assert!(flow.is_create_open());
        assert!(notifier.take().is_empty());
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn create_success_switches_then_reloads_origin() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace()
            .withf(|name| name == "Gamma")
            .times(1)
            .returning(|_| Ok(created("c")));
        api.expect_switch_workspace()
            .withf(|tenant_id| tenant_id == "c")
            .times(1)
            .returning(|_| Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);
        flow.open_create();

        let outcome = flow.create("  Gamma  ").await;

        assert_eq!(
            outcome,
            CreateOutcome::Created {
                id: "c".to_string()
            }
        );
        assert_eq!(notifier.take(), vec![success(messages::CREATED)]);
        assert_eq!(
            *navigator.0.borrow(),
            vec!["https://console.example.com/".to_string()]
        );
        assert_eq!(flow.draft(), &CreationDraft::default());
        assert!(!flow.is_create_open());
    }

    #[tokio::test]
    async fn create_over_limit_shows_the_limit_message() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace().times(1).returning(|_| {
            Err(RemoteError::with_text_body(
                500,
                r#"{"error": "exceed the maximum number of workspaces", "code": "exceed_max_workspaces"}"#,
            ))
        });
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);
        flow.open_create();

        let outcome = flow.create("Delta").await;

        assert_eq!(
            outcome,
            CreateOutcome::Failed(CreateFailure::KnownCode(
                KnownErrorCode::ExceedMaxWorkspaces
            ))
        );
        assert_eq!(notifier.take(), vec![error(messages::EXCEEDED_LIMIT)]);
        assert!(navigator.0.borrow().is_empty());
        assert_eq!(flow.draft().name, "");
        assert!(!flow.is_busy());
        assert!(!flow.is_create_open());
    }

    #[tokio::test]
    async fn create_with_unknown_code_is_silent() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace()
            .times(1)
            .returning(|_| Err(RemoteError::with_text_body(400, r#"{"code": "other_error"}"#)));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        let outcome = flow.create("Delta").await;

        match outcome {
            CreateOutcome::Failed(CreateFailure::Unrecognized(body)) => {
                assert_eq!(body.code(), Some("other_error"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(notifier.take().is_empty());
        assert_eq!(flow.draft(), &CreationDraft::default());
    }

    #[tokio::test]
    async fn create_with_non_json_body_is_silent() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace()
            .times(1)
            .returning(|_| Err(RemoteError::with_text_body(502, "Bad Gateway")));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        let outcome = flow.create("Delta").await;

        match outcome {
            CreateOutcome::Failed(CreateFailure::Unrecognized(body)) => {
                assert_eq!(body.text(), Some("Bad Gateway"));
                assert!(body.error.is_some());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn create_without_body_shows_generic_failure() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace()
            .times(1)
            .returning(|_| Err(RemoteError::transport("connection refused")));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        let outcome = flow.create("Delta").await;

        assert_eq!(
            outcome,
            CreateOutcome::Failed(CreateFailure::Raw("connection refused".to_string()))
        );
        assert_eq!(notifier.take(), vec![error(messages::CREATE_FAILED)]);
    }

    #[tokio::test]
    async fn create_with_broken_body_shows_generic_failure() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace().times(1).returning(|_| {
            let body = futures::stream::iter([
                Ok(Bytes::from_static(b"{\"code\": \"exceed_")),
                Err(BodyReadError::new("connection reset")),
            ])
            .boxed();
            Err(RemoteError::with_body(500, body))
        });
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        let outcome = flow.create("Delta").await;

        assert!(matches!(
            outcome,
            CreateOutcome::Failed(CreateFailure::Raw(ref message)) if message.contains("connection reset")
        ));
        assert_eq!(notifier.take(), vec![error(messages::CREATE_FAILED)]);
    }

    #[tokio::test]
    async fn chained_switch_failure_is_classified_like_create() {
        let mut api = MockWorkspaceApi::new();
        api.expect_create_workspace()
            .times(1)
            .returning(|_| Ok(created("c")));
        api.expect_switch_workspace()
            .times(1)
            .returning(|_| Err(RemoteError::from_status(500, "switch workspace failed")));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        let outcome = flow.create("Gamma").await;

        assert!(matches!(
            outcome,
            CreateOutcome::Failed(CreateFailure::Raw(_))
        ));
        assert_eq!(
            notifier.take(),
            vec![success(messages::CREATED), error(messages::CREATE_FAILED)]
        );
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn delete_request_and_cancel_stay_local() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(MockWorkspaceApi::new(), &notifier, &navigator);

        flow.request_delete(&test_workspace("b", "Beta", false));
        assert_eq!(
            flow.pending_deletion(),
            Some(&PendingDeletion {
                id: "b".to_string(),
                name: "Beta".to_string()
            })
        );
        assert!(flow.is_confirm_open());

        flow.cancel_delete();
        assert!(flow.pending_deletion().is_none());
        assert!(!flow.is_confirm_open());
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn confirm_without_request_is_a_noop() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(MockWorkspaceApi::new(), &notifier, &navigator);

        assert_eq!(flow.confirm_delete().await, DeleteOutcome::NothingPending);
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn confirm_delete_success_reloads_origin() {
        let mut api = MockWorkspaceApi::new();
        api.expect_delete_workspace()
            .withf(|workspace_id| workspace_id == "b")
            .times(1)
            .returning(|_| Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        flow.request_delete(&test_workspace("b", "Beta", false));
        assert_eq!(flow.confirm_delete().await, DeleteOutcome::Deleted);

        assert_eq!(notifier.take(), vec![success(messages::DELETED)]);
        assert_eq!(
            *navigator.0.borrow(),
            vec!["https://console.example.com/".to_string()]
        );
        assert!(flow.pending_deletion().is_none());
        assert!(!flow.is_confirm_open());
        assert!(!flow.is_busy());
    }

    #[tokio::test]
    async fn confirm_delete_failure_does_not_decode_body() {
        let mut api = MockWorkspaceApi::new();
        api.expect_delete_workspace().times(1).returning(|_| {
            Err(RemoteError::with_text_body(
                403,
                r#"{"error": "only the owner of the workspace can delete the workspace"}"#,
            ))
        });
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut flow = flow(api, &notifier, &navigator);

        flow.request_delete(&test_workspace("b", "Beta", false));
        assert_eq!(flow.confirm_delete().await, DeleteOutcome::Failed);

        assert_eq!(notifier.take(), vec![error(messages::DELETE_FAILED)]);
        assert!(navigator.0.borrow().is_empty());
        assert!(flow.pending_deletion().is_none());
    }

    #[test]
    fn known_codes_round_trip_through_their_wire_form() {
        let code = KnownErrorCode::ExceedMaxWorkspaces;
        assert_eq!(KnownErrorCode::from_code(code.as_str()), Some(code));
        assert_eq!(KnownErrorCode::from_code("other_error"), None);
    }
}
