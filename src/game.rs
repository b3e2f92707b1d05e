//! Game loop orchestration
//!
//! One `Game` owns the active scene, the backend handle, and the loop
//! state machine: Created -> Running <-> Paused -> Stopped, with Stopped
//! terminal. The loop is single-threaded and cooperative: lifecycle
//! changes requested mid-frame go through the command queue and land at
//! the frame boundary, never preemptively.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::audio::{AudioPort, NullAudio};
use crate::backend::Backend;
use crate::capture::{self, CaptureError};
use crate::config::GameConfig;
use crate::sim::geometry::{GeometryError, Size2D};
use crate::sim::scene::Scene;

/// Loop lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Constructed, `run` not yet called.
    Created,
    /// Inside the loop, updating and drawing.
    Running,
    /// Inside the loop, drawing but not updating.
    Paused,
    /// Loop exited. Terminal.
    Stopped,
}

/// Errors fatal to game setup
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] GeometryError),
    /// `Stopped` is terminal; a stopped game cannot re-enter the loop.
    #[error("game is already stopped")]
    AlreadyStopped,
}

/// Deferred lifecycle operations, drained once per frame after draw
///
/// Commands are the write path from per-frame logic into the loop: a quit
/// lands at the top of the next iteration, a scene swap lands between this
/// frame's draw and the next frame's update.
#[derive(Debug)]
pub enum Command {
    Quit,
    Pause,
    Resume,
    SetScene(Scene),
    Screenshot(PathBuf),
}

/// FIFO queue of pending commands
#[derive(Debug, Default)]
pub struct CommandQueue {
    items: Vec<Command>,
}

impl CommandQueue {
    pub fn push(&mut self, command: Command) {
        self.items.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.items)
    }
}

/// Per-frame view handed to the loop hook
///
/// Gives frame logic scene access and the command queue without exposing
/// the loop internals.
pub struct FrameContext<'a> {
    pub scene: &'a mut Scene,
    /// Seconds elapsed since the previous frame
    pub dt: f32,
    /// Frame counter, starting at 0
    pub frame: u64,
    pub status: GameStatus,
    commands: &'a mut CommandQueue,
    audio: &'a mut dyn AudioPort,
}

impl FrameContext<'_> {
    /// Request a stop, observed at the top of the next iteration
    pub fn quit(&mut self) {
        self.commands.push(Command::Quit);
    }

    pub fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    pub fn resume(&mut self) {
        self.commands.push(Command::Resume);
    }

    /// Replace the scene between this frame's draw and the next update
    pub fn set_scene(&mut self, scene: Scene) {
        self.commands.push(Command::SetScene(scene));
    }

    /// Request a screenshot at this frame's end
    pub fn screenshot(&mut self, path: impl Into<PathBuf>) {
        self.commands.push(Command::Screenshot(path.into()));
    }

    pub fn play_sound(&mut self, sound_id: &str) {
        self.audio.play(sound_id);
    }

    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }
}

/// Core game object: loop, active scene, backend handle
pub struct Game {
    config: GameConfig,
    backend: Box<dyn Backend>,
    audio: Box<dyn AudioPort>,
    scene: Scene,
    status: GameStatus,
    quit_requested: bool,
    commands: CommandQueue,
    frame_index: u64,
}

impl Game {
    /// Validate `config` and wire up the backend
    ///
    /// Starts with an empty scene sized to the config; negative dimensions
    /// are a construction error, never clamped.
    pub fn new(config: GameConfig, mut backend: Box<dyn Backend>) -> Result<Self, GameError> {
        let size = Size2D::new(config.width, config.height)?;
        backend.set_clear_color(config.background);
        log::info!(
            "game created: {}x{} \"{}\", {} fps target",
            config.width,
            config.height,
            config.title,
            config.fps
        );
        Ok(Self {
            config,
            backend,
            audio: Box::new(NullAudio),
            scene: Scene::new(size),
            status: GameStatus::Created,
            quit_requested: false,
            commands: CommandQueue::default(),
            frame_index: 0,
        })
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn backend_mut(&mut self) -> &mut dyn Backend {
        self.backend.as_mut()
    }

    /// Swap in a replacement audio sink
    pub fn set_audio(&mut self, audio: Box<dyn AudioPort>) {
        self.audio = audio;
    }

    /// Replace the active scene. The outgoing scene receives no further
    /// update or draw calls.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    /// Request a stop. Observed at the top of the next loop iteration, so
    /// the current frame always completes; no frame follows it.
    pub fn quit(&mut self) {
        if self.status != GameStatus::Stopped {
            self.quit_requested = true;
        }
    }

    /// Suspend updates. Drawing continues while paused.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// Capture the current frame and encode it as PNG at `path`
    ///
    /// Direct callers get the error; the loop's command path logs it and
    /// keeps running.
    pub fn screenshot(&mut self, path: impl AsRef<Path>) -> Result<(), CaptureError> {
        let frame = self.backend.capture_frame()?;
        capture::save_capture(&frame, path.as_ref())
    }

    /// Run the loop until a stop is requested
    pub fn run(&mut self) -> Result<(), GameError> {
        self.run_with(|_ctx| {})
    }

    /// Run the loop, calling `hook` once per frame before the update pass
    ///
    /// Frame order: observe stop requests, measure `dt`, hook, update
    /// (skipped while paused), clear + draw, drain commands, pace.
    pub fn run_with<F>(&mut self, mut hook: F) -> Result<(), GameError>
    where
        F: FnMut(&mut FrameContext),
    {
        if self.status == GameStatus::Stopped {
            return Err(GameError::AlreadyStopped);
        }
        self.status = GameStatus::Running;
        log::info!("entering main loop");

        let mut last = Instant::now();
        loop {
            // The only point where stop requests are observed.
            if self.quit_requested {
                break;
            }

            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;

            let mut ctx = FrameContext {
                scene: &mut self.scene,
                dt,
                frame: self.frame_index,
                status: self.status,
                commands: &mut self.commands,
                audio: self.audio.as_mut(),
            };
            hook(&mut ctx);

            if self.status == GameStatus::Running {
                self.scene.update(dt);
            }

            self.backend.clear(self.config.background);
            self.scene.draw(self.backend.as_mut());

            self.drain_commands();
            self.frame_index += 1;

            if let Some(target) = self.config.frame_interval() {
                let elapsed = last.elapsed();
                if elapsed < target {
                    std::thread::sleep(target - elapsed);
                }
            }
        }

        self.shutdown();
        Ok(())
    }

    fn drain_commands(&mut self) {
        for command in self.commands.drain() {
            match command {
                Command::Quit => self.quit(),
                Command::Pause => self.pause(),
                Command::Resume => self.resume(),
                Command::SetScene(scene) => self.set_scene(scene),
                Command::Screenshot(path) => {
                    if let Err(err) = self.screenshot(&path) {
                        log::warn!("screenshot failed ({}): {err}", path.display());
                    }
                }
            }
        }
    }

    /// Single exit path for the loop, however it ended
    fn shutdown(&mut self) {
        self.status = GameStatus::Stopped;
        log::info!("main loop stopped after {} frames", self.frame_index);
    }
}
