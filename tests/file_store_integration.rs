//! Integration tests for the file-backed session store.
//!
//! Sessions written through the command handlers must survive a restart and
//! export identically from the reopened store.

use std::sync::Arc;

use tempfile::TempDir;

use feel_and_grow_rich::adapters::export::{PageSize, SessionExporter};
use feel_and_grow_rich::adapters::storage::JsonFileSessionStore;
use feel_and_grow_rich::application::{
    ClearAssessmentCommand, ClearAssessmentHandler, CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler, ExportSessionHandler, ExportSessionQuery,
    RecordAssessmentCommand, RecordAssessmentHandler,
};
use feel_and_grow_rich::config::{AppConfig, StorageConfig};
use feel_and_grow_rich::domain::assessment::{
    AssessmentKind, BeliefItemType, BeliefMap, BeliefMapItem, Emotions, FeelingsDial, Intake,
};
use feel_and_grow_rich::domain::foundation::{SessionId, UserId};
use feel_and_grow_rich::domain::session::SessionError;
use feel_and_grow_rich::ports::{ExportFormat, SessionFilter, SessionReader};

fn owner() -> UserId {
    UserId::new("seeker-7").unwrap()
}

fn storage_in(dir: &TempDir) -> StorageConfig {
    StorageConfig {
        data_dir: dir.path().join("nested").join("data"),
    }
}

async fn open(config: &StorageConfig) -> Arc<JsonFileSessionStore> {
    Arc::new(JsonFileSessionStore::open(&config.data_dir).await.unwrap())
}

async fn export_json(store: Arc<JsonFileSessionStore>, id: SessionId) -> Vec<u8> {
    ExportSessionHandler::new(store, Arc::new(SessionExporter::default()))
        .handle(ExportSessionQuery {
            session_id: id,
            user_id: owner(),
            format: ExportFormat::Json,
        })
        .await
        .unwrap()
        .content
}

#[tokio::test]
async fn sessions_survive_restart_and_export_identically() {
    let dir = TempDir::new().unwrap();
    let config = storage_in(&dir);

    let (id, before) = {
        let store = open(&config).await;
        let created = CreateSessionHandler::new(store.clone())
            .handle(CreateSessionCommand {
                user_id: owner(),
                initial: Some(Intake::new("Grace", true).into()),
            })
            .await
            .unwrap();
        let id = *created.session.id();

        let map = BeliefMap::new(vec![
            BeliefMapItem::new("b1", BeliefItemType::Belief, "Money is scarce").at(10.0, 20.5),
            BeliefMapItem::new("e1", BeliefItemType::Event, "Lost the contract").connected(["b1"]),
        ]);
        RecordAssessmentHandler::new(store.clone(), store.clone())
            .handle(RecordAssessmentCommand {
                session_id: id,
                user_id: owner(),
                assessment: map.into(),
            })
            .await
            .unwrap();

        (id, export_json(store, id).await)
    };

    assert!(config.sessions_path().exists());

    let reopened = open(&config).await;
    let after = export_json(reopened, id).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn clear_and_delete_are_persisted() {
    let dir = TempDir::new().unwrap();
    let config = storage_in(&dir);
    let store = open(&config).await;

    let dial = FeelingsDial::new(Emotions::from_ratings([1, 2, 3, 4, 5, 6]).unwrap());
    let keep = CreateSessionHandler::new(store.clone())
        .handle(CreateSessionCommand {
            user_id: owner(),
            initial: Some(dial.clone().into()),
        })
        .await
        .unwrap()
        .session;
    let doomed = CreateSessionHandler::new(store.clone())
        .handle(CreateSessionCommand {
            user_id: owner(),
            initial: Some(dial.into()),
        })
        .await
        .unwrap()
        .session;

    let cleared = ClearAssessmentHandler::new(store.clone(), store.clone())
        .handle(ClearAssessmentCommand {
            session_id: *keep.id(),
            user_id: owner(),
            kind: AssessmentKind::FeelingsDial,
        })
        .await
        .unwrap();
    assert!(cleared.is_some());

    DeleteSessionHandler::new(store.clone(), store.clone())
        .handle(DeleteSessionCommand {
            session_id: *doomed.id(),
            user_id: owner(),
        })
        .await
        .unwrap();

    let reopened = open(&config).await;
    let remaining = reopened.load_sessions(&SessionFilter::all()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), keep.id());
    assert!(remaining[0].present_kinds().is_empty());
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let store = open(&storage_in(&dir)).await;
    let session = CreateSessionHandler::new(store.clone())
        .handle(CreateSessionCommand {
            user_id: owner(),
            initial: None,
        })
        .await
        .unwrap()
        .session;

    let handler = DeleteSessionHandler::new(store.clone(), store);
    let cmd = DeleteSessionCommand {
        session_id: *session.id(),
        user_id: owner(),
    };
    handler.handle(cmd.clone()).await.unwrap();

    assert!(matches!(
        handler.handle(cmd).await,
        Err(SessionError::NotFound(_))
    ));
}

#[tokio::test]
async fn configured_exporter_uses_configured_prefix() {
    let dir = TempDir::new().unwrap();
    let store = open(&storage_in(&dir)).await;
    let session = CreateSessionHandler::new(store.clone())
        .handle(CreateSessionCommand {
            user_id: owner(),
            initial: None,
        })
        .await
        .unwrap()
        .session;

    let mut config = AppConfig::default();
    config.export.filename_prefix = "journey".to_string();
    config.export.page_size = PageSize::A4;
    let exporter = SessionExporter::new(config.export_settings().unwrap());

    let doc = ExportSessionHandler::new(store, Arc::new(exporter))
        .handle(ExportSessionQuery {
            session_id: *session.id(),
            user_id: owner(),
            format: ExportFormat::Pdf,
        })
        .await
        .unwrap();

    assert!(doc.filename.starts_with("journey-export-"));
    assert!(doc.filename.ends_with(".pdf"));
}
