//! Safe enums mirroring the native engine's enums
//!
//! Each enum here exposes a `BINDING` descriptor tying it to the header
//! constants in [`crate::ffi`]; the descriptors feed the parity registry in
//! [`crate::compat`]. This set exists to keep the registry honest across
//! engine upgrades, not to re-grow the full wrapper surface.

use crate::compat::EnumBinding;
use crate::ffi;

/// Behaviour flags for loading a studio bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BankLoadingFlags {
    /// Standard behaviour.
    Normal = ffi::FMOD_STUDIO_LOAD_BANK_NORMAL,
    /// Bank loading occurs asynchronously rather than immediately.
    NonBlocking = ffi::FMOD_STUDIO_LOAD_BANK_NONBLOCKING,
    /// Sample data is decompressed at load time instead of during playback.
    DecompressSamples = ffi::FMOD_STUDIO_LOAD_BANK_DECOMPRESS_SAMPLES,
}

impl BankLoadingFlags {
    pub(crate) const BINDING: EnumBinding = EnumBinding {
        enum_name: "BankLoadingFlags",
        native_name: "FMOD_STUDIO_LOAD_BANK_FLAGS",
        members: &[
            ("NORMAL", Self::Normal as i64),
            ("NONBLOCKING", Self::NonBlocking as i64),
            ("DECOMPRESS_SAMPLES", Self::DecompressSamples as i64),
        ],
        native_members: &[
            ("NORMAL", ffi::FMOD_STUDIO_LOAD_BANK_NORMAL as i64),
            ("NONBLOCKING", ffi::FMOD_STUDIO_LOAD_BANK_NONBLOCKING as i64),
            (
                "DECOMPRESS_SAMPLES",
                ffi::FMOD_STUDIO_LOAD_BANK_DECOMPRESS_SAMPLES as i64,
            ),
        ],
    };
}

/// Loading state of a studio bank or its sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LoadingState {
    Unloading = ffi::FMOD_STUDIO_LOADING_STATE_UNLOADING,
    Unloaded = ffi::FMOD_STUDIO_LOADING_STATE_UNLOADED,
    Loading = ffi::FMOD_STUDIO_LOADING_STATE_LOADING,
    Loaded = ffi::FMOD_STUDIO_LOADING_STATE_LOADED,
    Error = ffi::FMOD_STUDIO_LOADING_STATE_ERROR,
}

impl LoadingState {
    pub(crate) const BINDING: EnumBinding = EnumBinding {
        enum_name: "LoadingState",
        native_name: "FMOD_STUDIO_LOADING_STATE",
        members: &[
            ("UNLOADING", Self::Unloading as i64),
            ("UNLOADED", Self::Unloaded as i64),
            ("LOADING", Self::Loading as i64),
            ("LOADED", Self::Loaded as i64),
            ("ERROR", Self::Error as i64),
        ],
        native_members: &[
            ("UNLOADING", ffi::FMOD_STUDIO_LOADING_STATE_UNLOADING as i64),
            ("UNLOADED", ffi::FMOD_STUDIO_LOADING_STATE_UNLOADED as i64),
            ("LOADING", ffi::FMOD_STUDIO_LOADING_STATE_LOADING as i64),
            ("LOADED", ffi::FMOD_STUDIO_LOADING_STATE_LOADED as i64),
            ("ERROR", ffi::FMOD_STUDIO_LOADING_STATE_ERROR as i64),
        ],
    };
}

/// Position and length unit for sounds and channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TimeUnit {
    Milliseconds = ffi::FMOD_TIMEUNIT_MS,
    Pcm = ffi::FMOD_TIMEUNIT_PCM,
    PcmBytes = ffi::FMOD_TIMEUNIT_PCMBYTES,
    RawBytes = ffi::FMOD_TIMEUNIT_RAWBYTES,
    PcmFraction = ffi::FMOD_TIMEUNIT_PCMFRACTION,
    ModOrder = ffi::FMOD_TIMEUNIT_MODORDER,
    ModRow = ffi::FMOD_TIMEUNIT_MODROW,
    ModPattern = ffi::FMOD_TIMEUNIT_MODPATTERN,
}

impl TimeUnit {
    pub(crate) const BINDING: EnumBinding = EnumBinding {
        enum_name: "TimeUnit",
        native_name: "FMOD_TIMEUNIT",
        members: &[
            ("MS", Self::Milliseconds as i64),
            ("PCM", Self::Pcm as i64),
            ("PCMBYTES", Self::PcmBytes as i64),
            ("RAWBYTES", Self::RawBytes as i64),
            ("PCMFRACTION", Self::PcmFraction as i64),
            ("MODORDER", Self::ModOrder as i64),
            ("MODROW", Self::ModRow as i64),
            ("MODPATTERN", Self::ModPattern as i64),
        ],
        native_members: &[
            ("MS", ffi::FMOD_TIMEUNIT_MS as i64),
            ("PCM", ffi::FMOD_TIMEUNIT_PCM as i64),
            ("PCMBYTES", ffi::FMOD_TIMEUNIT_PCMBYTES as i64),
            ("RAWBYTES", ffi::FMOD_TIMEUNIT_RAWBYTES as i64),
            ("PCMFRACTION", ffi::FMOD_TIMEUNIT_PCMFRACTION as i64),
            ("MODORDER", ffi::FMOD_TIMEUNIT_MODORDER as i64),
            ("MODROW", ffi::FMOD_TIMEUNIT_MODROW as i64),
            ("MODPATTERN", ffi::FMOD_TIMEUNIT_MODPATTERN as i64),
        ],
    };
}

/// Open state of a sound, mainly meaningful for streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OpenState {
    Ready = ffi::FMOD_OPENSTATE_READY,
    Loading = ffi::FMOD_OPENSTATE_LOADING,
    Error = ffi::FMOD_OPENSTATE_ERROR,
    Connecting = ffi::FMOD_OPENSTATE_CONNECTING,
    Buffering = ffi::FMOD_OPENSTATE_BUFFERING,
    Seeking = ffi::FMOD_OPENSTATE_SEEKING,
    Playing = ffi::FMOD_OPENSTATE_PLAYING,
    SetPosition = ffi::FMOD_OPENSTATE_SETPOSITION,
}

impl OpenState {
    pub(crate) const BINDING: EnumBinding = EnumBinding {
        enum_name: "OpenState",
        native_name: "FMOD_OPENSTATE",
        members: &[
            ("READY", Self::Ready as i64),
            ("LOADING", Self::Loading as i64),
            ("ERROR", Self::Error as i64),
            ("CONNECTING", Self::Connecting as i64),
            ("BUFFERING", Self::Buffering as i64),
            ("SEEKING", Self::Seeking as i64),
            ("PLAYING", Self::Playing as i64),
            ("SETPOSITION", Self::SetPosition as i64),
        ],
        native_members: &[
            ("READY", ffi::FMOD_OPENSTATE_READY as i64),
            ("LOADING", ffi::FMOD_OPENSTATE_LOADING as i64),
            ("ERROR", ffi::FMOD_OPENSTATE_ERROR as i64),
            ("CONNECTING", ffi::FMOD_OPENSTATE_CONNECTING as i64),
            ("BUFFERING", ffi::FMOD_OPENSTATE_BUFFERING as i64),
            ("SEEKING", ffi::FMOD_OPENSTATE_SEEKING as i64),
            ("PLAYING", ffi::FMOD_OPENSTATE_PLAYING as i64),
            ("SETPOSITION", ffi::FMOD_OPENSTATE_SETPOSITION as i64),
        ],
    };
}
