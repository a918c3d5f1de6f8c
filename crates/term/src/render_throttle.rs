//! Skip redraws of frames that cannot have changed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::camera::Camera;
use crate::engine::Playback;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render.
    /// - When `is_static=true`: render on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !is_static || changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Force the next call to render.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}

/// Hash everything the maze view draws except the grid itself.
///
/// The grid only changes together with the seed, which is part of the hash.
pub fn frame_fingerprint(playback: &Playback, camera: &Camera, width: u16, height: u16) -> u64 {
    let snap = playback.session().snapshot();
    let mut h = DefaultHasher::new();
    snap.hash(&mut h);
    camera.quantized().hash(&mut h);
    playback.speed_frame().hash(&mut h);
    playback.zoom().to_bits().hash(&mut h);
    playback.is_paused().hash(&mut h);
    (width, height).hash(&mut h);
    h.finish()
}
