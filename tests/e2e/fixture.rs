use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use voxel_shell::{
    AssetStore, ContentResolver, DirectoryAssetStore, ErrorReport, ErrorScreen, ErrorSender,
    ErrorSurface, FileContentResolver, ImmersiveMode, LaunchIntent, ModelBytes, ModelResolver,
    ModelStream, NativeEngine, RenderSession, SessionLauncher, WindowChrome,
};

pub(crate) const CATALOG: &str = "example_models";

/// Asset root on disk with a catalog directory.
pub(crate) struct AssetRoot {
    pub(crate) dir: TempDir,
}

impl AssetRoot {
    pub(crate) fn with_models(models: &[(&str, &[u8])]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create asset root");
        std::fs::create_dir(dir.path().join(CATALOG)).expect("Failed to create catalog");
        for (name, data) in models {
            std::fs::write(dir.path().join(CATALOG).join(name), data)
                .expect("Failed to write model");
        }
        Self { dir }
    }

    pub(crate) fn store(&self) -> DirectoryAssetStore {
        DirectoryAssetStore::new(self.dir.path())
    }
}

/// Counts every stream opened through it.
pub(crate) struct Counting<T> {
    pub(crate) inner: T,
    pub(crate) opened: AtomicUsize,
}

impl<T> Counting<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner,
            opened: AtomicUsize::new(0),
        }
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl<T: AssetStore> AssetStore for Counting<T> {
    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        self.inner.list(dir)
    }

    fn open(&self, path: &str) -> io::Result<ModelStream> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.inner.open(path)
    }
}

impl<T: ContentResolver> ContentResolver for Counting<T> {
    fn open(&self, locator: &str) -> io::Result<ModelStream> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.inner.open(locator)
    }
}

/// Stand-in for the platform: engine, window chrome, error window and
/// window launcher, recording everything they are asked to do.
#[derive(Clone, Default)]
pub(crate) struct Host {
    pub(crate) models: Arc<Mutex<Vec<Vec<u8>>>>,
    pub(crate) engine_errors: Arc<Mutex<Option<ErrorSender>>>,
    pub(crate) chrome_applied: Arc<Mutex<Vec<ImmersiveMode>>>,
    pub(crate) screens: Arc<Mutex<Vec<ErrorScreen>>>,
    pub(crate) launches: Arc<Mutex<Vec<LaunchIntent>>>,
    /// Message the engine reports as soon as it starts
    pub(crate) fail_on_start: Option<String>,
}

impl Host {
    pub(crate) fn failing_engine(message: &str) -> Self {
        Self {
            fail_on_start: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn screens(&self) -> Vec<String> {
        self.screens
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.message().to_string())
            .collect()
    }

    pub(crate) fn engine_errors(&self) -> ErrorSender {
        self.engine_errors
            .lock()
            .unwrap()
            .clone()
            .expect("Engine was never started")
    }
}

impl NativeEngine for Host {
    fn start(&mut self, model: ModelBytes, errors: ErrorSender) {
        self.models.lock().unwrap().push(model.into_vec());
        if let Some(message) = &self.fail_on_start {
            errors.report(message.as_str());
        }
        *self.engine_errors.lock().unwrap() = Some(errors);
    }
}

impl WindowChrome for Host {
    fn apply(&mut self, mode: &ImmersiveMode) {
        self.chrome_applied.lock().unwrap().push(*mode);
    }
}

impl ErrorSurface for Host {
    fn open(&self, report: ErrorReport) {
        self.screens
            .lock()
            .unwrap()
            .push(ErrorScreen::from_report(report));
    }
}

impl SessionLauncher for Host {
    fn launch(&self, intent: LaunchIntent) {
        self.launches.lock().unwrap().push(intent);
    }
}

pub(crate) type CountingStore = Counting<DirectoryAssetStore>;
pub(crate) type CountingContent = Counting<FileContentResolver>;

pub(crate) struct Rig {
    pub(crate) assets: Arc<CountingStore>,
    pub(crate) content: Arc<CountingContent>,
    pub(crate) host: Host,
    pub(crate) _root: AssetRoot,
}

impl Rig {
    pub(crate) fn new(models: &[(&str, &[u8])], host: Host) -> Self {
        let root = AssetRoot::with_models(models);
        Self {
            assets: Arc::new(Counting::new(root.store())),
            content: Arc::new(Counting::new(FileContentResolver)),
            host,
            _root: root,
        }
    }

    pub(crate) fn resolver(&self) -> ModelResolver {
        ModelResolver::new(self.assets.clone(), self.content.clone())
    }

    pub(crate) fn session(&self) -> RenderSession {
        RenderSession::new(
            self.resolver(),
            Box::new(self.host.clone()),
            Box::new(self.host.clone()),
            Arc::new(self.host.clone()),
        )
    }

    pub(crate) fn resolution_attempts(&self) -> usize {
        self.assets.opened() + self.content.opened()
    }
}
