//! Bounce demo entry point
//!
//! Exercises the whole runtime headlessly: a seeded field of bouncing
//! rectangles, a sprite, a menu overlay, and a screenshot on the way out.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use mini_arcade::{
    BouncePolicy, CapturePathBuilder, Color, DrawStyle, Entity, Game, GameConfig, GeometryError,
    HeadlessBackend, Menu, MenuStyle, Scene, Size2D, Velocity2D,
};

const DEMO_SEED: u64 = 0xB0B0_CADE;
const DEMO_FRAMES: u64 = 240;
const BODY_COUNT: usize = 8;

fn build_scene(config: &GameConfig, rng: &mut Pcg32) -> Result<Scene, GeometryError> {
    let mut scene = Scene::new(Size2D::new(config.width, config.height)?);

    for _ in 0..BODY_COUNT {
        let side = rng.random_range(8.0..24.0_f32);
        let pos = Vec2::new(
            rng.random_range(0.0..config.width - side),
            rng.random_range(0.0..config.height - side),
        );
        let vel = Velocity2D::new(
            rng.random_range(-120.0..120.0_f32),
            rng.random_range(-120.0..120.0_f32),
        );
        let color = Color::rgb(
            rng.random_range(64..=255),
            rng.random_range(64..=255),
            rng.random_range(64..=255),
        );
        scene.add_entity(Entity::kinematic(
            pos,
            Size2D::new(side, side)?,
            DrawStyle::solid(color),
            vel,
            BouncePolicy::Bounce,
        ));
    }

    let menu = Menu::new(
        ["Bounce Demo", "Press nothing, it's headless"],
        Vec2::new(16.0, 16.0),
        MenuStyle::default(),
    );
    for label in menu.entities() {
        scene.push_overlay(label);
    }

    Ok(scene)
}

/// 4x4 opaque white marker sprite
fn marker_sprite(backend: &mut HeadlessBackend) -> mini_arcade::SpriteHandle {
    backend.load_sprite(4, 4, vec![255; 4 * 4 * 4])
}

fn main() {
    env_logger::init();
    log::info!("bounce demo starting (seed {DEMO_SEED:#x})");

    // 240 frames at 120 fps: about two seconds of simulated bouncing.
    let config = GameConfig {
        width: 320.0,
        height: 240.0,
        title: "Bounce Demo".into(),
        fps: 120,
        background: Color::rgb(12, 12, 24),
    };

    let mut backend = HeadlessBackend::new(config.width as u32, config.height as u32);
    let sprite = marker_sprite(&mut backend);

    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
    let mut scene = build_scene(&config, &mut rng).expect("demo scene dimensions are valid");
    scene.add_entity(
        Entity::sprite(Vec2::new(158.0, 118.0), Size2D::from_pixels(4, 4), sprite)
            .with_motion(mini_arcade::Motion::new(
                Velocity2D::new(60.0, -45.0),
                BouncePolicy::Bounce,
            )),
    );

    let mut game = Game::new(config, Box::new(backend)).expect("demo config is valid");
    game.set_scene(scene);

    let shots = CapturePathBuilder::default();
    let result = game.run_with(|ctx| {
        if ctx.frame == DEMO_FRAMES {
            ctx.screenshot(shots.build("bounce"));
            ctx.quit();
        }
    });

    match result {
        Ok(()) => log::info!("bounce demo finished"),
        Err(err) => log::error!("bounce demo failed: {err}"),
    }
}
