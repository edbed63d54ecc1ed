//! Raw constants transcribed from the native engine's C headers
//!
//! These are the authoritative values the compatibility registry checks the
//! safe enums in [`crate::enums`] against. Names follow the headers verbatim
//! so drift is easy to spot when a new engine version lands.

/// Engine header version these constants were transcribed from (1.08.x).
pub const FMOD_VERSION: u32 = 0x0001_0811;

// FMOD_STUDIO_LOAD_BANK_FLAGS
pub const FMOD_STUDIO_LOAD_BANK_NORMAL: u32 = 0x0000_0000;
pub const FMOD_STUDIO_LOAD_BANK_NONBLOCKING: u32 = 0x0000_0001;
pub const FMOD_STUDIO_LOAD_BANK_DECOMPRESS_SAMPLES: u32 = 0x0000_0002;

// FMOD_STUDIO_LOADING_STATE
pub const FMOD_STUDIO_LOADING_STATE_UNLOADING: i32 = 0;
pub const FMOD_STUDIO_LOADING_STATE_UNLOADED: i32 = 1;
pub const FMOD_STUDIO_LOADING_STATE_LOADING: i32 = 2;
pub const FMOD_STUDIO_LOADING_STATE_LOADED: i32 = 3;
pub const FMOD_STUDIO_LOADING_STATE_ERROR: i32 = 4;

// FMOD_TIMEUNIT
pub const FMOD_TIMEUNIT_MS: u32 = 0x0000_0001;
pub const FMOD_TIMEUNIT_PCM: u32 = 0x0000_0002;
pub const FMOD_TIMEUNIT_PCMBYTES: u32 = 0x0000_0004;
pub const FMOD_TIMEUNIT_RAWBYTES: u32 = 0x0000_0008;
pub const FMOD_TIMEUNIT_PCMFRACTION: u32 = 0x0000_0010;
pub const FMOD_TIMEUNIT_MODORDER: u32 = 0x0000_0100;
pub const FMOD_TIMEUNIT_MODROW: u32 = 0x0000_0200;
pub const FMOD_TIMEUNIT_MODPATTERN: u32 = 0x0000_0400;

// FMOD_OPENSTATE
pub const FMOD_OPENSTATE_READY: i32 = 0;
pub const FMOD_OPENSTATE_LOADING: i32 = 1;
pub const FMOD_OPENSTATE_ERROR: i32 = 2;
pub const FMOD_OPENSTATE_CONNECTING: i32 = 3;
pub const FMOD_OPENSTATE_BUFFERING: i32 = 4;
pub const FMOD_OPENSTATE_SEEKING: i32 = 5;
pub const FMOD_OPENSTATE_PLAYING: i32 = 6;
pub const FMOD_OPENSTATE_SETPOSITION: i32 = 7;
