use crate::error::{SpeechError, SpeechResult};
use crate::locale::recognition_locale;
use tracing::debug;

/// Capture state: either waiting for the user or holding an open microphone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
}

/// The three recognized capture error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    NoSpeech,
    NotAllowed,
    Unrecognized,
}

/// What a recognition backend reports while listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// The single final transcript (non-continuous, final-only mode).
    Transcript(String),
    Error(RecognitionError),
    /// Backend closed the stream without a transcript.
    Ended,
}

/// User-facing capture notices; every path that needs the user's attention
/// emits exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureNotice {
    Listening,
    NoSpeech,
    MicrophoneDenied,
    Unrecognized,
}

impl CaptureNotice {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Listening => "Listening... Speak now",
            Self::NoSpeech => "No speech detected. Please try again.",
            Self::MicrophoneDenied => "Microphone access denied.",
            Self::Unrecognized => "Could not understand speech.",
        }
    }
}

/// Platform speech-recognition capability.
///
/// Implementations wrap whatever the host platform offers. The capture
/// machine configures the locale and single-shot mode before each start.
pub trait RecognitionBackend: Send {
    fn configure(&mut self, locale: &str);
    fn start(&mut self) -> SpeechResult<()>;
    fn stop(&mut self);
}

/// Recognition capability with its absence made explicit.
pub enum RecognitionCapability<B> {
    Available(B),
    Unavailable,
}

/// Result of feeding one backend event through the state machine.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// Final transcript, forwarded to the caller as if typed.
    pub transcript: Option<String>,
    /// At most one user-facing notice per event.
    pub notice: Option<CaptureNotice>,
}

/// Two-state speech capture machine.
pub struct SpeechCapture<B: RecognitionBackend> {
    capability: RecognitionCapability<B>,
    state: CaptureState,
}

impl<B: RecognitionBackend> SpeechCapture<B> {
    pub fn new(capability: RecognitionCapability<B>) -> Self {
        Self {
            capability,
            state: CaptureState::Idle,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Begin listening for one utterance in the given language.
    ///
    /// Fails with [`SpeechError::Unsupported`] when the capability is
    /// absent; the state stays idle and nothing crashes.
    pub fn start(&mut self, language: &str) -> SpeechResult<CaptureNotice> {
        let backend = match &mut self.capability {
            RecognitionCapability::Available(backend) => backend,
            RecognitionCapability::Unavailable => return Err(SpeechError::Unsupported),
        };

        let locale = recognition_locale(language);
        debug!(locale, "Starting speech capture");
        backend.configure(locale);
        backend.start()?;
        self.state = CaptureState::Listening;
        Ok(CaptureNotice::Listening)
    }

    /// Stop listening without waiting for a transcript.
    pub fn stop(&mut self) {
        if let RecognitionCapability::Available(backend) = &mut self.capability {
            backend.stop();
        }
        self.state = CaptureState::Idle;
    }

    /// Feed one backend event through the machine.
    ///
    /// Every event path ends in the idle state: a transcript is forwarded,
    /// each error condition maps to its own notice, and a bare end-of-stream
    /// just resets.
    pub fn on_event(&mut self, event: RecognitionEvent) -> CaptureOutcome {
        self.state = CaptureState::Idle;
        match event {
            RecognitionEvent::Transcript(text) => CaptureOutcome {
                transcript: Some(text),
                notice: None,
            },
            RecognitionEvent::Error(error) => {
                let notice = match error {
                    RecognitionError::NoSpeech => CaptureNotice::NoSpeech,
                    RecognitionError::NotAllowed => CaptureNotice::MicrophoneDenied,
                    RecognitionError::Unrecognized => CaptureNotice::Unrecognized,
                };
                CaptureOutcome {
                    transcript: None,
                    notice: Some(notice),
                }
            }
            RecognitionEvent::Ended => CaptureOutcome::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        locale: Option<String>,
        started: usize,
        stopped: usize,
    }

    impl RecognitionBackend for FakeBackend {
        fn configure(&mut self, locale: &str) {
            self.locale = Some(locale.to_string());
        }

        fn start(&mut self) -> SpeechResult<()> {
            self.started += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stopped += 1;
        }
    }

    fn listening_capture(language: &str) -> SpeechCapture<FakeBackend> {
        let mut capture =
            SpeechCapture::new(RecognitionCapability::Available(FakeBackend::default()));
        capture.start(language).unwrap();
        capture
    }

    #[test]
    fn test_missing_capability_reports_unsupported() {
        let mut capture: SpeechCapture<FakeBackend> =
            SpeechCapture::new(RecognitionCapability::Unavailable);

        let result = capture.start("en");
        assert!(matches!(result, Err(SpeechError::Unsupported)));
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_start_configures_locale_and_listens() {
        let capture = listening_capture("hi");
        assert_eq!(capture.state(), CaptureState::Listening);
        match &capture.capability {
            RecognitionCapability::Available(backend) => {
                assert_eq!(backend.locale.as_deref(), Some("hi-IN"));
                assert_eq!(backend.started, 1);
            }
            RecognitionCapability::Unavailable => unreachable!(),
        }
    }

    #[test]
    fn test_transcript_returns_to_idle_and_forwards_text() {
        let mut capture = listening_capture("en");

        let outcome = capture.on_event(RecognitionEvent::Transcript("I have a fever".to_string()));

        assert_eq!(capture.state(), CaptureState::Idle);
        assert_eq!(outcome.transcript.as_deref(), Some("I have a fever"));
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_no_speech_emits_exactly_one_notice() {
        let mut capture = listening_capture("en");

        let outcome = capture.on_event(RecognitionEvent::Error(RecognitionError::NoSpeech));

        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(outcome.transcript.is_none());
        assert_eq!(outcome.notice, Some(CaptureNotice::NoSpeech));
    }

    #[test]
    fn test_each_error_maps_to_distinct_notice() {
        let cases = [
            (RecognitionError::NoSpeech, CaptureNotice::NoSpeech),
            (RecognitionError::NotAllowed, CaptureNotice::MicrophoneDenied),
            (RecognitionError::Unrecognized, CaptureNotice::Unrecognized),
        ];
        for (error, expected) in cases {
            let mut capture = listening_capture("en");
            let outcome = capture.on_event(RecognitionEvent::Error(error));
            assert_eq!(outcome.notice, Some(expected));
        }
    }

    #[test]
    fn test_end_of_stream_resets_silently() {
        let mut capture = listening_capture("en");
        let outcome = capture.on_event(RecognitionEvent::Ended);
        assert_eq!(capture.state(), CaptureState::Idle);
        assert_eq!(outcome, CaptureOutcome::default());
    }

    #[test]
    fn test_stop_tells_backend_and_idles() {
        let mut capture = listening_capture("en");
        capture.stop();
        assert_eq!(capture.state(), CaptureState::Idle);
        match &capture.capability {
            RecognitionCapability::Available(backend) => assert_eq!(backend.stopped, 1),
            RecognitionCapability::Unavailable => unreachable!(),
        }
    }
}
