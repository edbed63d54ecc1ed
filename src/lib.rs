pub mod compat;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod loader;
pub mod paths;

pub use compat::{EnumBinding, EnumMismatch};
pub use enums::{BankLoadingFlags, LoadingState, OpenState, TimeUnit};
pub use error::{ReleaseFailure, Result, SupersonicError};
pub use loader::{GateState, ModuleHandle, ModuleLoader, NativeLibraryGate, SystemLoader};
pub use paths::{Arch, NATIVE_MODULES, NativeModule};
