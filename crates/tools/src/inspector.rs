use glam::Vec3;
use thirdperson_controller::{CharacterMotor, ControllerEvent, ThirdPersonController};

/// Controller inspector for developer tooling.
///
/// Read-only queries over a controller and its motor.
pub struct ControllerInspector;

impl ControllerInspector {
    pub fn summary<M: CharacterMotor + ?Sized>(
        controller: &ThirdPersonController,
        motor: &M,
    ) -> ControllerSummary {
        let character = controller.character();
        let camera = controller.camera();
        ControllerSummary {
            tick: controller.tick(),
            position: motor.position(),
            grounded: motor.is_grounded(),
            crouching: character.crouching,
            vertical_velocity: character.vertical_velocity,
            yaw: camera.yaw,
            pitch: camera.pitch,
            camera_position: controller.camera_pose(motor.position()).position,
            pending_events: controller.events().len(),
        }
    }

    /// One-line description of an event.
    pub fn describe_event(event: &ControllerEvent) -> String {
        match event {
            ControllerEvent::Jumped {
                tick,
                launch_velocity,
            } => format!("[{tick}] jumped v={launch_velocity:.3}"),
            ControllerEvent::LeftGround { tick } => format!("[{tick}] left ground"),
            ControllerEvent::Landed {
                tick,
                vertical_velocity,
            } => format!("[{tick}] landed v={vertical_velocity:.3}"),
        }
    }
}

/// Snapshot of controller state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSummary {
    pub tick: u64,
    pub position: Vec3,
    pub grounded: bool,
    pub crouching: bool,
    pub vertical_velocity: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub camera_position: Vec3,
    pub pending_events: usize,
}

impl std::fmt::Display for ControllerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick={} pos=({:.2}, {:.2}, {:.2}) vy={:.2} yaw={:.1} pitch={:.1} grounded={} crouch={} cam=({:.2}, {:.2}, {:.2}) events={}",
            self.tick,
            self.position.x,
            self.position.y,
            self.position.z,
            self.vertical_velocity,
            self.yaw,
            self.pitch,
            self.grounded,
            self.crouching,
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
            self.pending_events,
        )
    }
}
