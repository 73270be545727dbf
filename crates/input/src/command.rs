/// A discrete camera command triggered by a single key-press edge.
///
/// Each command displaces the camera by a fixed step; there is no held-key
/// continuous motion and no rotation. The frame loop translates recognized
/// key events into these and drops everything else silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Step forward along the camera's front vector.
    MoveForward,
    /// Step backward along the camera's front vector.
    MoveBackward,
    /// Step left along the normalized front × up direction.
    StrafeLeft,
    /// Step right along the normalized front × up direction.
    StrafeRight,
}

impl CameraCommand {
    /// All commands, in a stable order. Handy for exhaustive tests.
    pub const ALL: [CameraCommand; 4] = [
        CameraCommand::MoveForward,
        CameraCommand::MoveBackward,
        CameraCommand::StrafeLeft,
        CameraCommand::StrafeRight,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_distinct() {
        for (i, a) in CameraCommand::ALL.iter().enumerate() {
            for b in &CameraCommand::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn commands_are_copyable_values() {
        let cmd = CameraCommand::MoveForward;
        let copy = cmd;
        assert_eq!(cmd, copy);
    }
}
