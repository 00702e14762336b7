use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thirdperson_common::Pose;
use thirdperson_input::InputFrame;

use crate::camera::CameraRig;
use crate::config::ControllerConfig;
use crate::look::LookIntegrator;
use crate::motion::{MotionInput, MotionIntegrator};
use crate::motor::{CharacterMotor, CursorControl};
use crate::state::{CameraState, CharacterState};

/// Per-frame environment handed in by the host loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the previous frame.
    pub delta_seconds: f32,
}

impl FrameContext {
    pub fn new(delta_seconds: f32) -> Self {
        Self { delta_seconds }
    }
}

/// What the host applies after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Displacement requested from the motor this frame.
    pub displacement: Vec3,
    /// Horizontal speed selected this frame.
    pub speed: f32,
    /// Yaw-only body rotation.
    pub facing: Quat,
    /// Camera world placement.
    pub camera: Pose,
}

/// Notable transitions, recorded in frame order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControllerEvent {
    /// A grounded jump launched with this vertical speed.
    Jumped { tick: u64, launch_velocity: f32 },
    /// The motor stopped reporting ground contact.
    LeftGround { tick: u64 },
    /// The motor reported ground contact again. Carries the vertical speed
    /// at touchdown.
    Landed { tick: u64, vertical_velocity: f32 },
}

/// Third-person character controller.
///
/// State persists for the character's lifetime; everything else is
/// recomputed every frame by [`step`](Self::step) in the fixed order motion,
/// look, camera.
#[derive(Debug, Clone)]
pub struct ThirdPersonController {
    config: ControllerConfig,
    motion: MotionIntegrator,
    look: LookIntegrator,
    rig: CameraRig,
    character: CharacterState,
    camera: CameraState,
    tick: u64,
    events: Vec<ControllerEvent>,
}

impl Default for ThirdPersonController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl ThirdPersonController {
    /// Spawn-time state: at rest, looking along the configured initial angles.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            motion: MotionIntegrator::from(&config),
            look: LookIntegrator::new(config.rotation_speed),
            rig: CameraRig::new(config.camera_offset),
            character: CharacterState::default(),
            camera: CameraState::new(config.initial_yaw, config.initial_pitch),
            config,
            tick: 0,
            events: Vec::new(),
        }
    }

    /// Take over the cursor for mouse look.
    pub fn activate(&self, cursor: &mut impl CursorControl) {
        cursor.set_cursor_captured(true);
        tracing::debug!("cursor captured");
    }

    /// Hand the cursor back to the host.
    pub fn deactivate(&self, cursor: &mut impl CursorControl) {
        cursor.set_cursor_captured(false);
        tracing::debug!("cursor released");
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Frames stepped so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn events(&self) -> &[ControllerEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Camera placement for the current state without stepping.
    pub fn camera_pose(&self, character_position: Vec3) -> Pose {
        self.rig.pose(character_position, &self.camera)
    }

    /// Advance one frame.
    ///
    /// Motion reads the camera basis from before this frame's look update.
    /// The camera is placed at the character's post-move position.
    pub fn step<M>(&mut self, input: &InputFrame, ctx: FrameContext, motor: &mut M) -> FrameOutput
    where
        M: CharacterMotor + ?Sized,
    {
        self.tick += 1;
        let _span = tracing::trace_span!("controller_step", tick = self.tick).entered();
        let dt = ctx.delta_seconds;

        let grounded = motor.is_grounded();
        self.character.grounded = grounded;
        self.character.crouching = input.crouch;

        let (camera_forward, camera_right) = self.camera.basis();
        let motion = self.motion.integrate(
            &MotionInput {
                move_axis: input.move_axis,
                sprint: input.sprint,
                jump_triggered: input.jump_triggered,
                crouching: input.crouch,
                grounded,
                camera_forward,
                camera_right,
                dt,
            },
            &mut self.character.vertical_velocity,
        );
        if motion.jumped {
            let launch_velocity = self.motion.jump_velocity();
            tracing::debug!(tick = self.tick, launch_velocity, "jump");
            self.events.push(ControllerEvent::Jumped {
                tick: self.tick,
                launch_velocity,
            });
        }

        motor.move_by(motion.displacement);
        match (grounded, motor.is_grounded()) {
            (true, false) => {
                tracing::debug!(tick = self.tick, "left ground");
                self.events
                    .push(ControllerEvent::LeftGround { tick: self.tick });
            }
            (false, true) => {
                let vertical_velocity = self.character.vertical_velocity;
                tracing::debug!(tick = self.tick, vertical_velocity, "landed");
                self.events.push(ControllerEvent::Landed {
                    tick: self.tick,
                    vertical_velocity,
                });
            }
            _ => {}
        }

        let look = self.look.integrate(input.look_delta, dt, &mut self.camera);
        let camera = self.rig.pose(motor.position(), &self.camera);

        tracing::trace!(
            displacement = ?motion.displacement,
            speed = motion.speed,
            vertical_velocity = self.character.vertical_velocity,
            yaw = self.camera.yaw,
            pitch = self.camera.pitch,
            "frame"
        );

        FrameOutput {
            displacement: motion.displacement,
            speed: motion.speed,
            facing: look.facing,
            camera,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::look::PITCH_LIMIT_DEGREES;
    use crate::motion::GROUNDED_VERTICAL_VELOCITY;
    use crate::motor::{FlatGround, HeadlessCursor};
    use thirdperson_common::{FORWARD, yaw_rotation};

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-4;

    fn ctx() -> FrameContext {
        FrameContext::new(DT)
    }

    fn grounded_motor() -> FlatGround {
        FlatGround::new(Vec3::ZERO, 0.0)
    }

    #[test]
    fn idle_grounded_frames_are_stable() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        let idle = InputFrame::idle();
        let expected_vy = GROUNDED_VERTICAL_VELOCITY + ctl.config().gravity * DT;

        ctl.step(&idle, ctx(), &mut motor);
        for _ in 0..120 {
            ctl.step(&idle, ctx(), &mut motor);
            assert!((ctl.character().vertical_velocity - expected_vy).abs() < 1e-6);
            assert_eq!(ctl.camera(), &CameraState::default());
            assert_eq!(motor.position(), Vec3::ZERO);
            assert!(motor.is_grounded());
        }
        assert!(ctl.events().is_empty());
        assert_eq!(ctl.tick(), 121);
    }

    #[test]
    fn walking_forward_covers_walk_speed() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        let fwd = InputFrame::idle().with_move(0.0, 1.0);
        for _ in 0..60 {
            ctl.step(&fwd, ctx(), &mut motor);
        }
        let p = motor.position();
        assert!((p.z - ctl.config().walk_speed).abs() < 1e-3, "got {p:?}");
        assert!(p.x.abs() < EPS);
    }

    #[test]
    fn sprint_and_crouch_speeds() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        let out = ctl.step(
            &InputFrame::idle().with_move(1.0, 0.0).with_sprint(true),
            ctx(),
            &mut motor,
        );
        assert_eq!(out.speed, ctl.config().sprint_speed);
        assert!((out.displacement.x - ctl.config().sprint_speed * DT).abs() < EPS);

        let out = ctl.step(
            &InputFrame::idle()
                .with_move(1.0, 0.0)
                .with_sprint(true)
                .with_crouch(true),
            ctx(),
            &mut motor,
        );
        assert_eq!(out.speed, ctl.config().crouch_speed);
        assert!(ctl.character().crouching);
    }

    #[test]
    fn motion_uses_camera_from_before_look() {
        let mut ctl = ThirdPersonController::new(ControllerConfig {
            rotation_speed: 90.0 * 60.0,
            ..ControllerConfig::default()
        });
        let mut motor = grounded_motor();
        // turns a quarter this frame, but moves along the old forward
        let out = ctl.step(
            &InputFrame::idle().with_move(0.0, 1.0).with_look(1.0, 0.0),
            ctx(),
            &mut motor,
        );
        assert!((ctl.camera().yaw - 90.0).abs() < 1e-3);
        assert!(out.displacement.x.abs() < EPS);
        assert!(out.displacement.z > 0.0);

        // next frame follows the new heading
        let out = ctl.step(&InputFrame::idle().with_move(0.0, 1.0), ctx(), &mut motor);
        assert!(out.displacement.x > 0.0);
        assert!(out.displacement.z.abs() < EPS);
    }

    #[test]
    fn jump_arc_records_events_in_order() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        ctl.step(&InputFrame::idle(), ctx(), &mut motor);

        ctl.step(&InputFrame::idle().with_jump(true), ctx(), &mut motor);
        let mut apex: f32 = 0.0;
        for _ in 0..200 {
            ctl.step(&InputFrame::idle(), ctx(), &mut motor);
            apex = apex.max(motor.position().y);
        }

        assert!(apex > 1.8 && apex < 2.05, "apex {apex}");
        let events = ctl.drain_events();
        assert_eq!(events.len(), 3, "{events:?}");
        match events[0] {
            ControllerEvent::Jumped {
                tick,
                launch_velocity,
            } => {
                assert_eq!(tick, 2);
                assert!((launch_velocity - 6.264).abs() < 1e-3);
            }
            other => panic!("expected jump, got {other:?}"),
        }
        assert_eq!(events[1], ControllerEvent::LeftGround { tick: 2 });
        assert!(matches!(
            events[2],
            ControllerEvent::Landed { vertical_velocity, .. } if vertical_velocity < 0.0
        ));
        assert!(ctl.events().is_empty());
        assert!(motor.is_grounded());
    }

    #[test]
    fn jump_in_air_is_ignored() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = FlatGround::new(Vec3::new(0.0, 10.0, 0.0), 0.0);
        ctl.step(&InputFrame::idle().with_jump(true), ctx(), &mut motor);
        assert!((ctl.character().vertical_velocity - ctl.config().gravity * DT).abs() < 1e-6);
        assert!(ctl.events().is_empty());
        assert!(!ctl.character().grounded);
    }

    #[test]
    fn camera_trails_post_move_position() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        let input = InputFrame::idle().with_move(0.3, 0.8).with_look(4.0, -2.0);
        for _ in 0..30 {
            let out = ctl.step(&input, ctx(), &mut motor);
            let expected =
                motor.position() + yaw_rotation(ctl.camera().yaw) * ctl.config().camera_offset;
            assert!((out.camera.position - expected).length() < EPS);
            assert!(out.camera.rotation.dot(ctl.camera().rotation()).abs() > 1.0 - 1e-5);
            assert!((out.facing * FORWARD).y.abs() < 1e-5);
        }
    }

    #[test]
    fn pitch_clamped_through_controller() {
        let mut ctl = ThirdPersonController::default();
        let mut motor = grounded_motor();
        for _ in 0..500 {
            ctl.step(&InputFrame::idle().with_look(0.0, -50.0), ctx(), &mut motor);
            assert!(ctl.camera().pitch <= PITCH_LIMIT_DEGREES);
        }
        assert_eq!(ctl.camera().pitch, PITCH_LIMIT_DEGREES);
    }

    #[test]
    fn initial_angles_come_from_config() {
        let ctl = ThirdPersonController::new(ControllerConfig {
            initial_yaw: 180.0,
            initial_pitch: -10.0,
            ..ControllerConfig::default()
        });
        assert_eq!(ctl.camera(), &CameraState::new(180.0, -10.0));
        let pose = ctl.camera_pose(Vec3::ZERO);
        assert!((pose.position - Vec3::new(-0.75, 1.5, 3.0)).length() < EPS);
    }

    #[test]
    fn activate_captures_cursor() {
        let ctl = ThirdPersonController::default();
        let mut cursor = HeadlessCursor::default();
        ctl.activate(&mut cursor);
        assert!(cursor.captured);
        ctl.deactivate(&mut cursor);
        assert!(!cursor.captured);
    }

    #[test]
    fn works_through_dyn_motor() {
        let mut ctl = ThirdPersonController::default();
        let mut ground = grounded_motor();
        let motor: &mut dyn CharacterMotor = &mut ground;
        ctl.step(&InputFrame::idle().with_move(0.0, 1.0), ctx(), motor);
        assert!(ground.position().z > 0.0);
    }
}
