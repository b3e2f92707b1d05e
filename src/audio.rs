//! Audio port
//!
//! The runtime only routes sound requests; synthesis and mixing are a
//! backend concern behind this seam. [`NullAudio`] keeps a silent game
//! running without branching at every call site.

/// Sink for named sound-effect requests
pub trait AudioPort {
    /// Request playback of a named sound effect
    fn play(&mut self, sound_id: &str);
}

/// No-op audio sink, the default
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn play(&mut self, sound_id: &str) {
        log::trace!("audio muted: {sound_id}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_accepts_any_id() {
        let mut audio = NullAudio;
        audio.play("bounce");
        audio.play("");
    }
}
