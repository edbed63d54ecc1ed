//! Load-once lifecycle gate for the native engine modules
//!
//! The engine ships as two shared libraries (core mixer and studio layer)
//! that must be loaded exactly once per process before any binding call.
//! [`NativeLibraryGate`] owns that transition: callers share one gate per
//! process and call [`NativeLibraryGate::ensure_loaded`] before touching the
//! engine, or [`NativeLibraryGate::suppress_load`] if they load the modules
//! themselves.

use crate::error::{ReleaseFailure, Result, SupersonicError};
use crate::paths::{Arch, NATIVE_MODULES, NativeModule};
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No modules loaded; `ensure_loaded` will perform a real load.
    Unloaded,
    /// This gate loaded the modules and owns their handles.
    Loaded,
    /// The caller loaded the modules by external means; the gate stands down.
    ExternallyManaged,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateState::Unloaded => write!(f, "unloaded"),
            GateState::Loaded => write!(f, "loaded"),
            GateState::ExternallyManaged => write!(f, "externally managed"),
        }
    }
}

/// Handle to one loaded module. Release consumes the handle; the OS loader
/// owns whatever happens after that.
pub trait ModuleHandle: Send {
    fn release(self: Box<Self>) -> std::result::Result<(), String>;
}

/// The OS loader seam. The gate resolves paths and sequencing; implementors
/// only map a path to a handle.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, path: &Path) -> std::result::Result<Box<dyn ModuleHandle>, String>;
}

struct LoadedLibrary(libloading::Library);

impl ModuleHandle for LoadedLibrary {
    fn release(self: Box<Self>) -> std::result::Result<(), String> {
        self.0.close().map_err(|e| e.to_string())
    }
}

/// [`ModuleLoader`] backed by the real OS loader via `libloading`.
pub struct SystemLoader;

impl ModuleLoader for SystemLoader {
    fn load(&self, path: &Path) -> std::result::Result<Box<dyn ModuleHandle>, String> {
        // Safety: the engine libraries run no arbitrary initialization beyond
        // their CRT setup, and are only ever loaded through this gate.
        let lib = unsafe { libloading::Library::new(path) }.map_err(|e| e.to_string())?;
        Ok(Box::new(LoadedLibrary(lib)))
    }
}

struct GateInner {
    state: GateState,
    // Non-empty iff state == Loaded. Drained on unload, in load order.
    handles: Vec<(NativeModule, Box<dyn ModuleHandle>)>,
}

/// Process-wide gate ensuring the native modules are loaded at most once.
///
/// All operations are safe to call concurrently; transitions are serialized
/// by an internal lock. Construct one per process and share it (`Arc`), or
/// one per test for isolation.
pub struct NativeLibraryGate {
    // Advisory fast-path flag: true once the gate has settled into Loaded or
    // ExternallyManaged. Transitions always re-check under the lock.
    settled: AtomicBool,
    inner: Mutex<GateInner>,
    loader: Box<dyn ModuleLoader>,
    base_dir: PathBuf,
}

impl NativeLibraryGate {
    /// Gate over the real OS loader, resolving modules relative to the
    /// process working directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_dir(std::env::current_dir()?))
    }

    /// Gate over the real OS loader with an explicit base directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_loader(Box::new(SystemLoader), base_dir)
    }

    /// Gate over a custom loader. Used by tests and by embedders with their
    /// own module-resolution scheme.
    pub fn with_loader(loader: Box<dyn ModuleLoader>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            settled: AtomicBool::new(false),
            inner: Mutex::new(GateInner {
                state: GateState::Unloaded,
                handles: Vec::new(),
            }),
            loader,
            base_dir: base_dir.into(),
        }
    }

    /// Load the native modules if nothing has loaded them yet.
    ///
    /// No-op when already loaded or suppressed. Under concurrent calls
    /// exactly one thread performs the load; the others block on the lock
    /// and then observe the result. On failure every handle this attempt
    /// loaded is released, the gate stays [`GateState::Unloaded`], and the
    /// call may be retried.
    pub fn ensure_loaded(&self) -> Result<()> {
        // Unsynchronized early exit only; never a transition.
        if self.settled.load(Ordering::Acquire) {
            return Ok(());
        }

        let mut inner = self.inner.lock();
        if inner.state != GateState::Unloaded {
            return Ok(());
        }

        let arch = Arch::current();
        let mut handles: Vec<(NativeModule, Box<dyn ModuleHandle>)> =
            Vec::with_capacity(NATIVE_MODULES.len());

        for module in NATIVE_MODULES {
            let path = module.path_under(&self.base_dir, arch);
            log::debug!(
                "loading native module '{}' from '{}'",
                module.name,
                path.display()
            );

            match self.loader.load(&path) {
                Ok(handle) => handles.push((module, handle)),
                Err(reason) => {
                    release_all(handles);
                    return Err(SupersonicError::NativeLoad {
                        module: module.name,
                        path,
                        reason,
                    });
                }
            }
        }

        #[cfg(debug_assertions)]
        if let Err(e) = crate::compat::verify_bindings() {
            release_all(handles);
            return Err(e);
        }

        inner.handles = handles;
        inner.state = GateState::Loaded;
        self.settled.store(true, Ordering::Release);
        log::info!(
            "native engine loaded ({} modules, {})",
            inner.handles.len(),
            arch.dir_name()
        );
        Ok(())
    }

    /// Record that the caller loaded the native modules externally.
    ///
    /// Only valid while [`GateState::Unloaded`]; calling it after a real
    /// load, or twice, is a lifecycle error rather than a silent no-op.
    pub fn suppress_load(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        match inner.state {
            GateState::Unloaded => {
                inner.state = GateState::ExternallyManaged;
                self.settled.store(true, Ordering::Release);
                log::info!("native module loading suppressed, managed externally");
                Ok(())
            }
            state => Err(SupersonicError::InvalidLifecycleState {
                operation: "suppress_load",
                state,
            }),
        }
    }

    /// Release every module this gate loaded and return to
    /// [`GateState::Unloaded`].
    ///
    /// Release is best-effort per handle; failures are aggregated into one
    /// [`SupersonicError::Unload`]. The gate returns to `Unloaded` either
    /// way, since the OS invalidates the handles regardless. Only valid
    /// while [`GateState::Loaded`].
    pub fn unload(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.state != GateState::Loaded {
            return Err(SupersonicError::InvalidLifecycleState {
                operation: "unload",
                state: inner.state,
            });
        }

        let mut failures = Vec::new();
        for (module, handle) in inner.handles.drain(..) {
            log::debug!("releasing native module '{}'", module.name);
            if let Err(reason) = handle.release() {
                failures.push(ReleaseFailure {
                    module: module.name,
                    reason,
                });
            }
        }

        inner.state = GateState::Unloaded;
        self.settled.store(false, Ordering::Release);

        if failures.is_empty() {
            log::info!("native engine unloaded");
            Ok(())
        } else {
            Err(SupersonicError::Unload(failures))
        }
    }

    /// True iff this gate performed a load it has not yet undone. Reads
    /// `false` after `suppress_load`: the flag reflects the gate's own
    /// bookkeeping, not whether modules exist in the process.
    pub fn is_loaded(&self) -> bool {
        self.inner.lock().state == GateState::Loaded
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GateState {
        self.inner.lock().state
    }

    /// Number of module handles currently held (2 when loaded, else 0).
    pub fn loaded_module_count(&self) -> usize {
        self.inner.lock().handles.len()
    }
}

fn release_all(handles: Vec<(NativeModule, Box<dyn ModuleHandle>)>) {
    for (module, handle) in handles.into_iter().rev() {
        if let Err(reason) = handle.release() {
            log::warn!(
                "failed to release native module '{}' during cleanup: {}",
                module.name,
                reason
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Barrier};

    #[derive(Default)]
    struct MockState {
        loads: Mutex<Vec<PathBuf>>,
        released: AtomicUsize,
        // Module file-name fragment whose next load fails; consumed on use.
        fail_next: Mutex<Option<String>>,
        fail_release: AtomicBool,
    }

    struct MockLoader(Arc<MockState>);

    struct MockHandle(Arc<MockState>);

    impl ModuleHandle for MockHandle {
        fn release(self: Box<Self>) -> std::result::Result<(), String> {
            self.0.released.fetch_add(1, Ordering::SeqCst);
            if self.0.fail_release.load(Ordering::SeqCst) {
                Err("still referenced".to_string())
            } else {
                Ok(())
            }
        }
    }

    impl ModuleLoader for MockLoader {
        fn load(&self, path: &Path) -> std::result::Result<Box<dyn ModuleHandle>, String> {
            let mut fail_next = self.0.fail_next.lock();
            if let Some(fragment) = fail_next.as_deref() {
                if path.to_string_lossy().contains(fragment) {
                    *fail_next = None;
                    return Err("file not found".to_string());
                }
            }
            drop(fail_next);

            self.0.loads.lock().push(path.to_path_buf());
            Ok(Box::new(MockHandle(Arc::clone(&self.0))))
        }
    }

    fn mock_gate() -> (NativeLibraryGate, Arc<MockState>) {
        let state = Arc::new(MockState::default());
        let loader = Box::new(MockLoader(Arc::clone(&state)));
        (NativeLibraryGate::with_loader(loader, "/srv/game"), state)
    }

    #[test]
    fn fresh_gate_loads_both_modules() {
        let (gate, state) = mock_gate();

        gate.ensure_loaded().unwrap();

        assert!(gate.is_loaded());
        assert_eq!(gate.state(), GateState::Loaded);
        assert_eq!(gate.loaded_module_count(), 2);

        let loads = state.loads.lock();
        assert_eq!(loads.len(), 2);
        // Core engine before the studio layer that links against it.
        assert!(loads[0].to_string_lossy().contains("fmod"));
        assert!(loads[1].to_string_lossy().contains("fmodstudio"));
    }

    #[test]
    fn ensure_loaded_is_idempotent() {
        let (gate, state) = mock_gate();

        gate.ensure_loaded().unwrap();
        gate.ensure_loaded().unwrap();
        gate.ensure_loaded().unwrap();

        assert_eq!(state.loads.lock().len(), 2);
    }

    #[test]
    fn concurrent_ensure_loaded_loads_exactly_once() {
        let (gate, state) = mock_gate();
        let gate = Arc::new(gate);
        let threads = 8;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    gate.ensure_loaded()
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(state.loads.lock().len(), 2);
        assert!(gate.is_loaded());
    }

    #[test]
    fn suppress_then_ensure_loads_nothing() {
        let (gate, state) = mock_gate();

        gate.suppress_load().unwrap();
        gate.ensure_loaded().unwrap();

        assert_eq!(gate.state(), GateState::ExternallyManaged);
        assert!(state.loads.lock().is_empty());
    }

    #[test]
    fn suppressed_gate_reads_not_loaded() {
        let (gate, _) = mock_gate();

        gate.suppress_load().unwrap();

        assert!(!gate.is_loaded());
    }

    #[test]
    fn double_suppress_is_a_lifecycle_error() {
        let (gate, _) = mock_gate();

        gate.suppress_load().unwrap();
        let err = gate.suppress_load().unwrap_err();

        assert!(matches!(
            err,
            SupersonicError::InvalidLifecycleState {
                operation: "suppress_load",
                state: GateState::ExternallyManaged,
            }
        ));
    }

    #[test]
    fn suppress_after_real_load_is_a_lifecycle_error() {
        let (gate, _) = mock_gate();

        gate.ensure_loaded().unwrap();
        let err = gate.suppress_load().unwrap_err();

        assert!(matches!(
            err,
            SupersonicError::InvalidLifecycleState {
                operation: "suppress_load",
                state: GateState::Loaded,
            }
        ));
        assert!(gate.is_loaded());
    }

    #[test]
    fn load_unload_load_round_trip() {
        let (gate, state) = mock_gate();

        gate.ensure_loaded().unwrap();
        gate.unload().unwrap();

        assert_eq!(gate.state(), GateState::Unloaded);
        assert_eq!(gate.loaded_module_count(), 0);
        assert_eq!(state.released.load(Ordering::SeqCst), 2);

        gate.ensure_loaded().unwrap();

        assert!(gate.is_loaded());
        assert_eq!(gate.loaded_module_count(), 2);
        assert_eq!(state.loads.lock().len(), 4);
    }

    #[test]
    fn unload_without_load_is_a_lifecycle_error() {
        let (gate, _) = mock_gate();

        let err = gate.unload().unwrap_err();

        assert!(matches!(
            err,
            SupersonicError::InvalidLifecycleState {
                operation: "unload",
                state: GateState::Unloaded,
            }
        ));
        assert_eq!(gate.state(), GateState::Unloaded);
    }

    #[test]
    fn unload_while_externally_managed_is_a_lifecycle_error() {
        let (gate, state) = mock_gate();

        gate.suppress_load().unwrap();
        let err = gate.unload().unwrap_err();

        assert!(matches!(
            err,
            SupersonicError::InvalidLifecycleState {
                operation: "unload",
                state: GateState::ExternallyManaged,
            }
        ));
        assert_eq!(gate.state(), GateState::ExternallyManaged);
        assert_eq!(state.released.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_load_names_the_module_and_is_retryable() {
        let (gate, state) = mock_gate();
        *state.fail_next.lock() = Some("fmodstudio".to_string());

        let err = gate.ensure_loaded().unwrap_err();
        match err {
            SupersonicError::NativeLoad { module, path, .. } => {
                assert_eq!(module, "fmodstudio");
                assert!(path.to_string_lossy().contains("fmodstudio"));
            }
            other => panic!("expected NativeLoad, got {other}"),
        }

        // The core module that did load was released again.
        assert_eq!(gate.state(), GateState::Unloaded);
        assert!(!gate.is_loaded());
        assert_eq!(state.released.load(Ordering::SeqCst), 1);

        // The failure was transient; a retry succeeds from scratch.
        gate.ensure_loaded().unwrap();
        assert!(gate.is_loaded());
        assert_eq!(gate.loaded_module_count(), 2);
    }

    #[test]
    fn unload_aggregates_release_failures() {
        let (gate, state) = mock_gate();

        gate.ensure_loaded().unwrap();
        state.fail_release.store(true, Ordering::SeqCst);

        let err = gate.unload().unwrap_err();
        match err {
            SupersonicError::Unload(failures) => {
                assert_eq!(failures.len(), 2);
                assert_eq!(failures[0].module, "fmod");
                assert_eq!(failures[1].module, "fmodstudio");
            }
            other => panic!("expected Unload, got {other}"),
        }

        // Both releases were attempted and the gate settled back to Unloaded.
        assert_eq!(state.released.load(Ordering::SeqCst), 2);
        assert_eq!(gate.state(), GateState::Unloaded);
        assert_eq!(gate.loaded_module_count(), 0);
    }
}
