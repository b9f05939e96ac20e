//! Navigation commands exposed to the host editor
//!
//! Each command has a stable numeric id inside [`COMMAND_SET`], which is what
//! host menu/keybinding tables refer to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Command set GUID the command ids are registered under
pub const COMMAND_SET: &str = "629661e4-603b-446f-86b1-9defbda7d529";

pub const CMD_PING_PONG: u32 = 0x0100;
pub const CMD_JUMP_LEFT: u32 = 0x0101;
pub const CMD_JUMP_RIGHT: u32 = 0x0102;
pub const CMD_JUMP_UP: u32 = 0x0103;
pub const CMD_JUMP_DOWN: u32 = 0x0104;
pub const CMD_OPEN_PROJECT_FILE: u32 = 0x0105;
pub const CMD_OPEN_PROJECT_FILE_IN_OTHER_TARGET: u32 = 0x0106;

/// A user-issued navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    PingPong,
    JumpLeft,
    JumpRight,
    JumpUp,
    JumpDown,
    OpenProjectFile,
    OpenProjectFileInOtherTarget,
}

impl Command {
    /// All commands in id order
    pub const ALL: [Command; 7] = [
        Command::PingPong,
        Command::JumpLeft,
        Command::JumpRight,
        Command::JumpUp,
        Command::JumpDown,
        Command::OpenProjectFile,
        Command::OpenProjectFileInOtherTarget,
    ];

    pub fn id(&self) -> u32 {
        match self {
            Command::PingPong => CMD_PING_PONG,
            Command::JumpLeft => CMD_JUMP_LEFT,
            Command::JumpRight => CMD_JUMP_RIGHT,
            Command::JumpUp => CMD_JUMP_UP,
            Command::JumpDown => CMD_JUMP_DOWN,
            Command::OpenProjectFile => CMD_OPEN_PROJECT_FILE,
            Command::OpenProjectFileInOtherTarget => CMD_OPEN_PROJECT_FILE_IN_OTHER_TARGET,
        }
    }

    /// Look up a command by its numeric id
    pub fn from_id(id: u32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.id() == id)
            .ok_or(Error::UnknownCommand { id })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::PingPong => "ping_pong",
            Command::JumpLeft => "jump_left",
            Command::JumpRight => "jump_right",
            Command::JumpUp => "jump_up",
            Command::JumpDown => "jump_down",
            Command::OpenProjectFile => "open_project_file",
            Command::OpenProjectFileInOtherTarget => "open_project_file_in_other_target",
        }
    }

    /// Direction for the jump commands
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::JumpLeft => Some(Direction::Left),
            Command::JumpRight => Some(Direction::Right),
            Command::JumpUp => Some(Direction::Up),
            Command::JumpDown => Some(Direction::Down),
            _ => None,
        }
    }

    /// Where the open-project-file commands want their result shown
    pub fn open_target(&self) -> Option<OpenTarget> {
        match self {
            Command::OpenProjectFile => Some(OpenTarget::Primary),
            Command::OpenProjectFileInOtherTarget => Some(OpenTarget::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis along which windows are ordered for a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Ordered by `left`
    Horizontal,
    /// Ordered by `top`
    Vertical,
}

/// A cardinal direction for window navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Index delta along the sorted axis
    pub fn step(&self) -> isize {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }
}

/// Where the host should show an opened file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenTarget {
    #[default]
    Primary,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ids_are_contiguous() {
        let ids: Vec<u32> = Command::ALL.iter().map(Command::id).collect();
        assert_eq!(ids, (0x0100..=0x0106).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_id_known() {
        assert_eq!(Command::from_id(0x0100).unwrap(), Command::PingPong);
        assert_eq!(Command::from_id(0x0104).unwrap(), Command::JumpDown);
        assert_eq!(
            Command::from_id(0x0106).unwrap(),
            Command::OpenProjectFileInOtherTarget
        );
    }

    #[test]
    fn test_from_id_unknown_fails_fast() {
        let err = Command::from_id(0x0107).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand { id: 0x0107 }));
    }

    #[test]
    fn test_serde_names_match_name() {
        for cmd in Command::ALL {
            let parsed: Command = serde_json::from_str(&format!("\"{}\"", cmd.name())).unwrap();
            assert_eq!(parsed, cmd);
        }
        assert!(serde_json::from_str::<Command>("\"jump_sideways\"").is_err());
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&Command::OpenProjectFileInOtherTarget).unwrap();
        assert_eq!(json, "\"open_project_file_in_other_target\"");
        assert_eq!(
            Command::OpenProjectFileInOtherTarget.to_string(),
            "open_project_file_in_other_target"
        );
    }

    #[test]
    fn test_direction_for_jump_commands() {
        assert_eq!(Command::JumpLeft.direction(), Some(Direction::Left));
        assert_eq!(Command::JumpUp.direction(), Some(Direction::Up));
        assert_eq!(Command::PingPong.direction(), None);
        assert_eq!(Command::OpenProjectFile.direction(), None);
    }

    #[test]
    fn test_open_target_for_open_commands() {
        assert_eq!(
            Command::OpenProjectFile.open_target(),
            Some(OpenTarget::Primary)
        );
        assert_eq!(
            Command::OpenProjectFileInOtherTarget.open_target(),
            Some(OpenTarget::Other)
        );
        assert_eq!(Command::JumpRight.open_target(), None);
    }

    #[test]
    fn test_direction_axis_and_step() {
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);

        assert_eq!(Direction::Left.step(), -1);
        assert_eq!(Direction::Up.step(), -1);
        assert_eq!(Direction::Right.step(), 1);
        assert_eq!(Direction::Down.step(), 1);
    }
}
