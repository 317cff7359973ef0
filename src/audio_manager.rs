use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Footstep sound while the hero moves. Any missing piece (device, file)
/// just means silence.
/// Decoder over the shared sound bytes; the buffer itself is not copied.
fn step_source(data: &Arc<[u8]>) -> Option<Decoder<Cursor<Arc<[u8]>>>> {
    Decoder::new(Cursor::new(Arc::clone(data))).ok()
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    foot_sink: Sink,
    step: Option<Arc<[u8]>>,
    last_step: Instant,
    step_interval: Duration,
}

impl AudioManager {
    pub fn new(step_interval: Duration) -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("no audio output: {e}");
                return None;
            }
        };
        let foot_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            foot_sink,
            step: None,
            last_step: Instant::now(),
            step_interval,
        })
    }

    pub fn load_step(&mut self, path: &Path) {
        match std::fs::read(path) {
            Ok(bytes) => self.step = Some(Arc::from(bytes)),
            Err(e) => log::debug!("no footstep sound at {}: {e}", path.display()),
        }
    }

    /// Queues a footstep unless one played less than the interval ago.
    pub fn play_step(&mut self) {
        if self.last_step.elapsed() < self.step_interval { return; }
        self.last_step = Instant::now();
        if let Some(dec) = self.step.as_ref().and_then(step_source) {
            self.foot_sink.append(dec);
        }
    }

    pub fn stop_steps(&mut self) {
        if self.foot_sink.empty() { return; }
        self.foot_sink.stop();
        if let Ok(new_sink) = Sink::try_new(&self.handle) {
            self.foot_sink = new_sink;
        }
    }
}
