use crate::locale::synthesis_locale;
use tracing::debug;

/// One utterance handed to a synthesis backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Platform speech-synthesis capability.
pub trait SynthesisBackend: Send {
    /// Whether the backend's voice list has loaded yet.
    fn voices_ready(&self) -> bool;
    fn speak(&mut self, utterance: Utterance);
    fn cancel(&mut self);
    fn is_speaking(&self) -> bool;
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Local text-to-speech wrapper.
///
/// Fixed rate/pitch/volume, locale from the synthesis table,
/// cancel-before-speak. An utterance issued before the backend's voice list
/// is ready is held and flushed on the voices-ready signal.
pub struct LocalSynthesizer<B: SynthesisBackend> {
    backend: B,
    language: String,
    pending: Option<Utterance>,
}

impl<B: SynthesisBackend> LocalSynthesizer<B> {
    const RATE: f32 = 0.9;
    const PITCH: f32 = 1.0;
    const VOLUME: f32 = 1.0;

    pub fn new(backend: B) -> Self {
        Self {
            backend,
            language: "en".to_string(),
            pending: None,
        }
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Speak `text`, cancelling any ongoing speech first.
    pub fn speak(&mut self, text: impl Into<String>) {
        self.stop();

        let utterance = Utterance {
            text: text.into(),
            locale: synthesis_locale(&self.language).to_string(),
            rate: Self::RATE,
            pitch: Self::PITCH,
            volume: Self::VOLUME,
        };

        if self.backend.voices_ready() {
            self.backend.speak(utterance);
        } else {
            debug!("Voice list not ready, holding utterance");
            self.pending = Some(utterance);
        }
    }

    /// Voices-ready signal from the backend; flushes a held utterance.
    pub fn voices_changed(&mut self) {
        if let Some(utterance) = self.pending.take() {
            self.backend.speak(utterance);
        }
    }

    pub fn stop(&mut self) {
        self.pending = None;
        if self.backend.is_speaking() {
            self.backend.cancel();
        }
    }

    pub fn pause(&mut self) {
        self.backend.pause();
    }

    pub fn resume(&mut self) {
        self.backend.resume();
    }

    pub fn is_speaking(&self) -> bool {
        self.backend.is_speaking()
    }
}
