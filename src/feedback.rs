//! Tick and success feedback
//!
//! Best-effort sound and haptic cues for the wheel. Playback failures
//! are logged and swallowed; feedback must never block or break the
//! gesture flow.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::config::DialConfig;

/// Sound played on successful payment
const SUCCESS_SOUND: &str = "assets/success.mp3";

/// Device vibration capability
///
/// Desktop platforms have no widely available vibration API, so the
/// default implementation only logs. A host with a real actuator (or a
/// test) can plug in its own.
pub trait Haptics {
    /// Single pulse of the given length, best-effort
    fn pulse(&self, millis: u64);
}

/// No-op haptics for desktop
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, millis: u64) {
        tracing::debug!("haptic pulse ({millis}ms) ignored on this platform");
    }
}

/// Owns the audio output and plays the wheel's feedback cues
pub struct Feedback {
    stream: Option<OutputStream>,
    haptics: Box<dyn Haptics>,
}

impl Feedback {
    pub fn new() -> Self {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => Some(stream),
            Err(e) => {
                tracing::warn!("No audio output, sound feedback disabled: {}", e);
                None
            }
        };
        Self {
            stream,
            haptics: Box::new(NoHaptics),
        }
    }

    /// Feedback without an audio device, with injectable haptics
    pub fn silent(haptics: Box<dyn Haptics>) -> Self {
        Self {
            stream: None,
            haptics,
        }
    }

    /// Discrete snap feedback, fired once per step change during a drag
    pub fn tick(&self, config: &DialConfig) {
        if !config.tick_sound.is_empty() {
            self.play_file(Path::new(&config.tick_sound));
        }
        if config.haptic {
            self.haptics.pulse(10);
        }
    }

    /// Payment success feedback
    pub fn success(&self, config: &DialConfig) {
        self.play_file(Path::new(SUCCESS_SOUND));
        if config.success_haptic {
            self.haptics.pulse(30);
            self.haptics.pulse(30);
        }
    }

    /// Fire-and-forget playback; the sink detaches so the sound
    /// finishes on its own.
    fn play_file(&self, path: &Path) {
        let Some(stream) = &self.stream else {
            return;
        };
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Could not open sound {}: {}", path.display(), e);
                return;
            }
        };
        match Decoder::new(BufReader::new(file)) {
            Ok(source) => {
                let sink = Sink::connect_new(stream.mixer());
                sink.append(source);
                sink.detach();
            }
            Err(e) => {
                tracing::warn!("Could not decode sound {}: {}", path.display(), e);
            }
        }
    }
}
