//! Search-path resolution for the native engine modules
//!
//! Modules live under `{base}/Wrapper/Dependencies/{arch}/{file}`, where
//! `{arch}` is selected by process bitness and `{file}` is the platform
//! spelling of the module name (`fmod.dll`, `libfmod.so`, `libfmod.dylib`).

use std::path::{Path, PathBuf};

/// Process bitness, used to pick the dependency subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
}

impl Arch {
    /// The bitness of the running process.
    pub const fn current() -> Arch {
        #[cfg(target_pointer_width = "64")]
        {
            Arch::X86_64
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            Arch::X86
        }
    }

    /// Directory token under `Wrapper/Dependencies`.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
        }
    }
}

/// One of the engine's shared libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeModule {
    /// Bare module name, also used in error reports.
    pub name: &'static str,
}

impl NativeModule {
    /// Platform spelling of the module file, e.g. `libfmod.so` on Linux.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}{}",
            std::env::consts::DLL_PREFIX,
            self.name,
            std::env::consts::DLL_SUFFIX
        )
    }

    /// Full path of this module under `base`, for the given bitness.
    pub fn path_under(&self, base: &Path, arch: Arch) -> PathBuf {
        base.join("Wrapper")
            .join("Dependencies")
            .join(arch.dir_name())
            .join(self.file_name())
    }
}

/// The modules the gate loads, in load order: the core mixer first, then the
/// studio layer that links against it.
pub const NATIVE_MODULES: [NativeModule; 2] =
    [NativeModule { name: "fmod" }, NativeModule { name: "fmodstudio" }];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_tokens_match_dependency_layout() {
        assert_eq!(Arch::X86.dir_name(), "x86");
        assert_eq!(Arch::X86_64.dir_name(), "x86_64");
    }

    #[test]
    fn module_list_is_core_then_studio() {
        let names: Vec<_> = NATIVE_MODULES.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["fmod", "fmodstudio"]);
    }

    #[test]
    fn path_combines_base_arch_and_file() {
        let module = NativeModule { name: "fmod" };
        let path = module.path_under(Path::new("/opt/game"), Arch::X86_64);
        let expected: PathBuf = ["/opt/game", "Wrapper", "Dependencies", "x86_64"]
            .iter()
            .collect();
        assert_eq!(path, expected.join(module.file_name()));
    }

    #[test]
    fn file_name_uses_platform_spelling() {
        let name = NativeModule { name: "fmod" }.file_name();
        #[cfg(target_os = "windows")]
        assert_eq!(name, "fmod.dll");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "libfmod.dylib");
        #[cfg(all(unix, not(target_os = "macos")))]
        assert_eq!(name, "libfmod.so");
    }
}
