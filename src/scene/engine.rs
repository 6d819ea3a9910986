use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::scene::build::build_frame;
use crate::scene::mesh::SceneFrame;
use crate::scene::presets::ScenePreset;

const FRAME_CHANNEL_CAPACITY: usize = 2;
const IDLE_SLEEP: Duration = Duration::from_millis(10);

pub enum SceneCommand {
    SetScene {
        preset: &'static ScenePreset,
        grid_size: usize,
    },
    SetGridSize(usize),
    Seek(u32),
    Restart,
    Pause,
    Resume,
    Stop,
}

#[derive(Default)]
pub struct BuildStats {
    pub fps: Mutex<f32>,
    pub vertices: AtomicUsize,
    pub triangles: AtomicUsize,
    pub last_build_ms: Mutex<f32>,
    pub frames_built: AtomicU64,
    pub dropped_frames: AtomicU64,
}

/// Owns the build thread and the animation clock. Commands go in over an
/// unbounded channel; built frames come back over a small bounded channel
/// and the consumer keeps only the newest.
pub struct SceneEngine {
    tx_cmd: Sender<SceneCommand>,
    rx_frames: Receiver<SceneFrame>,
    stats: Arc<BuildStats>,
    paused: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl SceneEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<SceneCommand>();
        let (tx_frames, rx_frames) = channel::bounded::<SceneFrame>(FRAME_CHANNEL_CAPACITY);
        let stats = Arc::new(BuildStats::default());
        let paused = Arc::new(AtomicBool::new(false));
        let last_error = Arc::new(Mutex::new(None));

        let stats_clone = Arc::clone(&stats);
        let paused_clone = Arc::clone(&paused);
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::spawn(move || {
            scene_thread(rx_cmd, tx_frames, stats_clone, paused_clone, last_error_clone);
        });

        Self {
            tx_cmd,
            rx_frames,
            stats,
            paused,
            last_error,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn set_scene(&self, preset: &'static ScenePreset, grid_size: usize) {
        let _ = self.tx_cmd.send(SceneCommand::SetScene { preset, grid_size });
    }

    pub fn set_grid_size(&self, grid_size: usize) {
        let _ = self.tx_cmd.send(SceneCommand::SetGridSize(grid_size));
    }

    pub fn seek(&self, frame: u32) {
        let _ = self.tx_cmd.send(SceneCommand::Seek(frame));
    }

    pub fn restart(&self) {
        let _ = self.tx_cmd.send(SceneCommand::Restart);
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
        let _ = self.tx_cmd.send(SceneCommand::Pause);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
        let _ = self.tx_cmd.send(SceneCommand::Resume);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(SceneCommand::Stop);
    }

    pub fn try_recv_frame(&self) -> Option<SceneFrame> {
        self.rx_frames.try_recv().ok()
    }

    pub fn stats(&self) -> &Arc<BuildStats> {
        &self.stats
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }
}

impl Drop for SceneEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(SceneCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

struct Playback {
    preset: &'static ScenePreset,
    grid_size: usize,
    frame: u32,
    next_tick: Instant,
}

impl Playback {
    fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.preset.frame_count.max(1);
        let interval = Duration::from_millis(self.preset.frame_interval_ms);
        self.next_tick += interval;
        // if the build fell behind the clock, resync instead of bursting
        let now = Instant::now();
        if self.next_tick + interval < now {
            self.next_tick = now + interval;
        }
    }
}

fn scene_thread(
    rx_cmd: Receiver<SceneCommand>,
    tx_frames: Sender<SceneFrame>,
    stats: Arc<BuildStats>,
    paused: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    let mut playback: Option<Playback> = None;

    let build_and_send = |playback: &Playback| -> bool {
        let start = Instant::now();
        match build_frame(playback.preset, playback.grid_size, playback.frame) {
            Ok(frame) => {
                *stats.last_build_ms.lock() = start.elapsed().as_secs_f32() * 1000.0;
                stats.frames_built.fetch_add(1, Ordering::Relaxed);
                match tx_frames.try_send(frame) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        stats.dropped_frames.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(TrySendError::Disconnected(_)) => return false,
                }
                true
            }
            Err(e) => {
                tracing::warn!(scene = playback.preset.name, error = %e, "frame build failed");
                *last_error.lock() = Some(e.to_string());
                true
            }
        }
    };

    loop {
        while let Ok(cmd) = rx_cmd.try_recv() {
            match cmd {
                SceneCommand::SetScene { preset, grid_size } => {
                    *last_error.lock() = None;
                    let pb = Playback {
                        preset,
                        grid_size,
                        frame: 0,
                        next_tick: Instant::now()
                            + Duration::from_millis(preset.frame_interval_ms),
                    };
                    if !build_and_send(&pb) {
                        return;
                    }
                    playback = Some(pb);
                }
                SceneCommand::SetGridSize(grid_size) => {
                    if let Some(pb) = &mut playback {
                        *last_error.lock() = None;
                        pb.grid_size = grid_size;
                        if !build_and_send(pb) {
                            return;
                        }
                    }
                }
                SceneCommand::Seek(frame) => {
                    if let Some(pb) = &mut playback {
                        pb.frame = frame % pb.preset.frame_count.max(1);
                        pb.next_tick =
                            Instant::now() + Duration::from_millis(pb.preset.frame_interval_ms);
                        if !build_and_send(pb) {
                            return;
                        }
                    }
                }
                SceneCommand::Restart => {
                    if let Some(pb) = &mut playback {
                        pb.frame = 0;
                        pb.next_tick =
                            Instant::now() + Duration::from_millis(pb.preset.frame_interval_ms);
                        if !build_and_send(pb) {
                            return;
                        }
                    }
                }
                SceneCommand::Pause | SceneCommand::Resume => {}
                SceneCommand::Stop => return,
            }
        }

        let Some(pb) = &mut playback else {
            thread::sleep(IDLE_SLEEP);
            continue;
        };

        if !pb.preset.animated() || paused.load(Ordering::Relaxed) {
            thread::sleep(IDLE_SLEEP);
            continue;
        }

        let now = Instant::now();
        if now < pb.next_tick {
            thread::sleep((pb.next_tick - now).min(IDLE_SLEEP));
            continue;
        }

        pb.advance();
        if !build_and_send(pb) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::presets::{SceneKind, SCENE_PRESETS};

    fn preset(kind: SceneKind) -> &'static ScenePreset {
        SCENE_PRESETS.iter().find(|p| p.kind == kind).unwrap()
    }

    fn recv_frame(engine: &SceneEngine) -> SceneFrame {
        for _ in 0..200 {
            if let Some(frame) = engine.try_recv_frame() {
                return frame;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("engine produced no frame within a second");
    }

    #[test]
    fn static_scene_builds_once_on_select() {
        let engine = SceneEngine::new();
        engine.set_scene(preset(SceneKind::Peak), 16);

        let frame = recv_frame(&engine);
        assert_eq!(frame.frame, 0);
        assert_eq!(frame.mesh.face_vertex_count(), 2 * 15 * 15 * 3);
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn animated_scene_advances_and_wraps() {
        let engine = SceneEngine::new();
        let wave = preset(SceneKind::Wave);
        engine.set_scene(wave, 8);

        // drive past the wrap point via seek, which clamps modulo frame_count
        engine.seek(wave.frame_count - 1);
        let mut saw_last = false;
        for _ in 0..200 {
            if let Some(frame) = engine.try_recv_frame() {
                if frame.frame == wave.frame_count - 1 {
                    saw_last = true;
                }
                if saw_last && frame.frame == 0 {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("animation never wrapped back to frame 0");
    }

    #[test]
    fn degenerate_grid_reports_error() {
        let engine = SceneEngine::new();
        engine.pause();
        engine.set_scene(preset(SceneKind::Terrain), 1);

        for _ in 0..200 {
            if let Some(err) = engine.last_error() {
                assert!(err.contains("grid"));
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("degenerate grid produced no error");
    }

    #[test]
    fn seek_wraps_modulo_frame_count() {
        let engine = SceneEngine::new();
        engine.pause();
        let wave = preset(SceneKind::Wave);
        engine.set_scene(wave, 8);
        let _ = recv_frame(&engine);

        engine.seek(wave.frame_count + 3);
        let frame = recv_frame(&engine);
        assert_eq!(frame.frame, 3);
    }
}
