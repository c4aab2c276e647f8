use snake_core::Direction;

/// One input event, already mapped from a key name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Idle,
}

pub fn parse_key(key: &str) -> Result<HostCommand, String> {
    let command = match key.to_ascii_lowercase().as_str() {
        "w" | "up" | "arrowup" => HostCommand::Turn(Direction::Up),
        "s" | "down" | "arrowdown" => HostCommand::Turn(Direction::Down),
        "a" | "left" | "arrowleft" => HostCommand::Turn(Direction::Left),
        "d" | "right" | "arrowright" => HostCommand::Turn(Direction::Right),
        "p" | "pause" | "space" => HostCommand::TogglePause,
        "r" | "restart" => HostCommand::Restart,
        "." => HostCommand::Idle,
        _ => return Err(format!("Unknown key '{}' in input script", key)),
    };
    Ok(command)
}

/// Whitespace separated keys, one per tick.
pub fn parse_script(script: &str) -> Result<Vec<HostCommand>, String> {
    script.split_whitespace().map(parse_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_turns() {
        for (letter, arrow, direction) in [
            ("w", "ArrowUp", Direction::Up),
            ("s", "ArrowDown", Direction::Down),
            ("a", "ArrowLeft", Direction::Left),
            ("d", "ArrowRight", Direction::Right),
        ] {
            assert_eq!(parse_key(letter), Ok(HostCommand::Turn(direction)));
            assert_eq!(parse_key(arrow), Ok(HostCommand::Turn(direction)));
        }
    }

    #[test]
    fn test_parse_script() {
        let commands = parse_script("w . P\n r  left").unwrap();
        assert_eq!(
            commands,
            vec![
                HostCommand::Turn(Direction::Up),
                HostCommand::Idle,
                HostCommand::TogglePause,
                HostCommand::Restart,
                HostCommand::Turn(Direction::Left),
            ]
        );
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let err = parse_script("w x").unwrap_err();
        assert!(err.contains("'x'"), "{}", err);
    }
}
